use super::recipe_details::RecipeDetails;
use crate::api;
use crate::model::{Food, Meal, MealType};
use crate::state::CameraFeed;
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    CanvasRenderingContext2d, FileReader, HtmlCanvasElement, HtmlInputElement, HtmlVideoElement,
    MediaStream, MediaStreamConstraints, ProgressEvent,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MealEntryProps {
    pub on_add_meal: Callback<Meal>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CaptureMethod {
    Camera,
    Upload,
}

const RETRY_MESSAGE: &str = "Failed to recognize food. Please try again.";

async fn open_camera() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    JsFuture::from(promise)
        .await?
        .dyn_into::<MediaStream>()
        .map_err(|_| JsValue::from_str("getUserMedia returned a non-stream"))
}

/// Draws the current video frame to an offscreen canvas and returns it as a
/// JPEG data URL.
fn snapshot_video(video: &HtmlVideoElement) -> Result<String, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)?;
    canvas.to_data_url_with_type("image/jpeg")
}

#[function_component(MealEntry)]
pub fn meal_entry(props: &MealEntryProps) -> Html {
    let selected_type = use_state(|| MealType::Breakfast);
    let capture_method = use_state(|| None::<CaptureMethod>);
    let captured_image = use_state(|| None::<String>);
    let recognized = use_state(|| None::<Food>);
    let processing = use_state(|| false);
    let error = use_state(|| None::<String>);
    let camera_feed = use_mut_ref(CameraFeed::default);
    let video_ref = use_node_ref();
    let file_input_ref = use_node_ref();

    // Runs the two-step recognition pipeline for a captured data URL.
    let process_image = {
        let processing = processing.clone();
        let error = error.clone();
        let recognized = recognized.clone();
        Callback::from(move |data_url: String| {
            let processing = processing.clone();
            let error = error.clone();
            let recognized = recognized.clone();
            processing.set(true);
            error.set(None);
            recognized.set(None);
            spawn_local(async move {
                match api::recognize_meal(&data_url).await {
                    Ok(food) => recognized.set(Some(food)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                processing.set(false);
            });
        })
    };

    // Open/close the camera as the capture flow moves through its phases.
    {
        let video_ref = video_ref.clone();
        let camera_feed = camera_feed.clone();
        let error = error.clone();
        let feed_for_cleanup = camera_feed.clone();
        use_effect_with(
            (*capture_method, captured_image.is_some()),
            move |(method, has_image)| {
                if *method == Some(CaptureMethod::Camera) && !has_image {
                    spawn_local(async move {
                        match open_camera().await {
                            Ok(stream) => {
                                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                                    video.set_src_object(Some(&stream));
                                    let _ = video.play();
                                }
                                camera_feed.borrow_mut().set(stream);
                            }
                            Err(e) => {
                                clog(&format!("camera open failed: {:?}", e));
                                error.set(Some(RETRY_MESSAGE.to_string()));
                            }
                        }
                    });
                } else {
                    camera_feed.borrow_mut().stop();
                }
                move || feed_for_cleanup.borrow_mut().stop()
            },
        );
    }

    let take_photo = {
        let video_ref = video_ref.clone();
        let captured_image = captured_image.clone();
        let process_image = process_image.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            match snapshot_video(&video) {
                Ok(data_url) => {
                    captured_image.set(Some(data_url.clone()));
                    process_image.emit(data_url);
                }
                Err(e) => {
                    clog(&format!("snapshot failed: {:?}", e));
                    error.set(Some(RETRY_MESSAGE.to_string()));
                }
            }
        })
    };

    let on_file_change = {
        let captured_image = captured_image.clone();
        let process_image = process_image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let Ok(reader) = FileReader::new() else {
                return;
            };
            let captured_image = captured_image.clone();
            let process_image = process_image.clone();
            let reader_handle = reader.clone();
            let onloadend = Closure::wrap(Box::new(move |_: ProgressEvent| {
                if let Ok(result) = reader_handle.result() {
                    if let Some(data_url) = result.as_string() {
                        captured_image.set(Some(data_url.clone()));
                        process_image.emit(data_url);
                    }
                }
            }) as Box<dyn FnMut(ProgressEvent)>);
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            let _ = reader.read_as_data_url(&file);
        })
    };

    let retake = {
        let captured_image = captured_image.clone();
        let recognized = recognized.clone();
        let error = error.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            captured_image.set(None);
            recognized.set(None);
            error.set(None);
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let reset_capture = {
        let capture_method = capture_method.clone();
        let captured_image = captured_image.clone();
        let recognized = recognized.clone();
        let error = error.clone();
        Callback::from(move |_| {
            capture_method.set(None);
            captured_image.set(None);
            recognized.set(None);
            error.set(None);
        })
    };

    let confirm = {
        let selected_type = selected_type.clone();
        let recognized = recognized.clone();
        let capture_method = capture_method.clone();
        let captured_image = captured_image.clone();
        let error = error.clone();
        let on_add_meal = props.on_add_meal.clone();
        Callback::from(move |_| {
            let Some(food) = (*recognized).clone() else {
                return;
            };
            on_add_meal.emit(Meal {
                meal_type: *selected_type,
                food,
                logged_at_ms: js_sys::Date::now(),
            });
            capture_method.set(None);
            captured_image.set(None);
            recognized.set(None);
            error.set(None);
        })
    };

    let pick_method = |method: CaptureMethod| {
        let capture_method = capture_method.clone();
        Callback::from(move |_| capture_method.set(Some(method)))
    };

    let open_file_dialog = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let type_buttons = MealType::ALL.iter().map(|meal_type| {
        let active = *selected_type == *meal_type;
        let onclick = {
            let selected_type = selected_type.clone();
            let meal_type = *meal_type;
            Callback::from(move |_| selected_type.set(meal_type))
        };
        let style = if active {
            "padding:12px; border-radius:10px; border:2px solid #6e40c9; background:#21262d; color:#c9a7ff; font-weight:600; cursor:pointer;"
        } else {
            "padding:12px; border-radius:10px; border:2px solid #30363d; background:#161b22; color:inherit; cursor:pointer;"
        };
        html! {
            <button type="button" {onclick} style={style}>{ meal_type.label() }</button>
        }
    });

    let capture_stage = match (*capture_method, (*captured_image).clone()) {
        (None, _) => html! {
            <div style="display:grid; grid-template-columns:1fr 1fr; gap:12px;">
                <button type="button" onclick={pick_method(CaptureMethod::Camera)}
                    style="background:#6e40c9; border:none; border-radius:10px; padding:16px; color:#fff; font-weight:600; cursor:pointer;">
                    {"Take Photo"}
                </button>
                <button type="button" onclick={pick_method(CaptureMethod::Upload)}
                    style="background:#388bfd; border:none; border-radius:10px; padding:16px; color:#fff; font-weight:600; cursor:pointer;">
                    {"Upload Image"}
                </button>
            </div>
        },
        (Some(CaptureMethod::Camera), None) => html! {
            <div style="position:relative;">
                <video ref={video_ref.clone()} style="width:100%; border-radius:8px; background:#000;" />
                <div style="display:flex; justify-content:center; gap:12px; margin-top:12px;">
                    <button type="button" onclick={take_photo}
                        style="background:#6e40c9; border:none; border-radius:20px; padding:10px 24px; color:#fff; cursor:pointer;">
                        {"Take Photo"}
                    </button>
                    <button type="button" onclick={reset_capture.clone()}
                        style="background:#30363d; border:none; border-radius:20px; padding:10px 24px; color:#fff; cursor:pointer;">
                        {"Cancel"}
                    </button>
                </div>
            </div>
        },
        (Some(CaptureMethod::Upload), None) => html! {
            <div style="text-align:center;">
                <button type="button" onclick={open_file_dialog}
                    style="background:#388bfd; border:none; border-radius:10px; padding:12px 24px; color:#fff; font-weight:600; cursor:pointer;">
                    {"Choose Image"}
                </button>
                <button type="button" onclick={reset_capture.clone()}
                    style="margin-left:12px; background:#30363d; border:none; border-radius:10px; padding:12px 24px; color:#fff; cursor:pointer;">
                    {"Cancel"}
                </button>
            </div>
        },
        (Some(_), Some(image)) => html! {
            <div style="display:flex; flex-direction:column; gap:12px;">
                <img src={image} alt="Captured food" style="width:100%; border-radius:8px;" />
                <div style="display:flex; justify-content:center; gap:12px;">
                    <button type="button" onclick={retake}
                        style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px 16px; color:inherit; cursor:pointer;">
                        {"Retake"}
                    </button>
                    if recognized.is_some() && !*processing {
                        <button type="button" onclick={confirm}
                            style="background:#238636; border:none; border-radius:8px; padding:8px 16px; color:#fff; cursor:pointer;">
                            {"Confirm"}
                        </button>
                    }
                </div>
            </div>
        },
    };

    html! {
        <div style="max-width:640px; margin:0 auto;">
            <div style="text-align:center; margin-bottom:24px;">
                <h2 style="margin:0 0 6px 0;">{"Snap Your Meal"}</h2>
                <p style="margin:0; opacity:0.7;">{"Take a photo or upload an image of your food"}</p>
            </div>

            <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:12px; margin-bottom:24px;">
                { for type_buttons }
            </div>

            <div style="background:#0d1117; border:1px solid #30363d; border-radius:12px; padding:20px; display:flex; flex-direction:column; gap:16px;">
                // Always present so the hidden input survives stage switches.
                <input ref={file_input_ref.clone()} type="file" accept="image/*"
                    onchange={on_file_change} style="display:none;" />

                { capture_stage }

                if *processing {
                    <div style="text-align:center; padding:8px 0; opacity:0.8;">
                        {"Analyzing your food..."}
                    </div>
                }

                if let Some(msg) = &*error {
                    <div style="background:rgba(248,81,73,0.12); border:1px solid #f85149; color:#f85149; border-radius:8px; padding:12px; text-align:center;">
                        { msg.clone() }
                    </div>
                }

                if !*processing {
                    if let Some(food) = &*recognized {
                    <>
                    <div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:14px;">
                        <h3 style="margin:0 0 8px 0;">{"Recognized Food"}</h3>
                        <p style="margin:0 0 8px 0; font-size:17px; font-weight:600; color:#c9a7ff;">{ food.name.clone() }</p>
                        <div style="display:grid; grid-template-columns:1fr 1fr; gap:4px; font-size:13px; opacity:0.8;">
                            <div>{ format!("Calories: {:.0} kcal", food.macros.calories) }</div>
                            <div>{ format!("Protein: {:.0}g", food.macros.protein) }</div>
                            <div>{ format!("Carbs: {:.0}g", food.macros.carbs) }</div>
                            <div>{ format!("Fats: {:.0}g", food.macros.fats) }</div>
                        </div>
                    </div>
                    <RecipeDetails food={food.clone()} />
                    </>
                    }
                }
            </div>
        </div>
    }
}
