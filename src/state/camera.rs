// Live camera feed handle for the meal-entry view. Owns the MediaStream so
// the hardware light goes off when the user retakes, cancels or confirms.
use wasm_bindgen::JsCast;
use web_sys::{MediaStream, MediaStreamTrack};

#[derive(Default)]
pub struct CameraFeed {
    stream: Option<MediaStream>,
}

impl CameraFeed {
    pub fn set(&mut self, stream: MediaStream) {
        self.stop();
        self.stream = Some(stream);
    }

    /// Stops every track of the current stream, if any.
    pub fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }
}
