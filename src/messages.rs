//! Score buckets and motivational messages for the daily summary. Message
//! choice is cosmetic; the picker takes an explicit seed so tests can pin
//! down which pool a message came from.

/// Qualitative band for an achievement score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBucket {
    High,
    Medium,
    Low,
}

pub fn bucket_for(score: u32) -> ScoreBucket {
    if score >= 80 {
        ScoreBucket::High
    } else if score >= 50 {
        ScoreBucket::Medium
    } else {
        ScoreBucket::Low
    }
}

const HIGH_MESSAGES: [&str; 3] = [
    "Incredible work today! You're crushing your nutrition goals! 🌟",
    "Outstanding effort! Your dedication is truly inspiring! 💪",
    "You're absolutely crushing it! Keep up the amazing work! 🏆",
];

const MEDIUM_MESSAGES: [&str; 3] = [
    "You're on the right track! Keep pushing forward! 🎯",
    "Solid progress today! Tomorrow will be even better! 🌱",
    "Good job staying committed to your goals! 🌟",
];

const LOW_MESSAGES: [&str; 3] = [
    "Every step counts! You've made progress today! 🌱",
    "Tomorrow is a new opportunity to crush your goals! 💫",
    "Keep going! Small progress is still progress! 🌟",
];

pub fn pool_for(bucket: ScoreBucket) -> &'static [&'static str] {
    match bucket {
        ScoreBucket::High => &HIGH_MESSAGES,
        ScoreBucket::Medium => &MEDIUM_MESSAGES,
        ScoreBucket::Low => &LOW_MESSAGES,
    }
}

/// Small seedable generator (splitmix64) for picking a message. Callers seed
/// it however they like; the summary view seeds from Math.random.
#[derive(Clone, Debug)]
pub struct MessagePicker {
    state: u64,
}

impl MessagePicker {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    pub fn pick(&mut self, score: u32) -> &'static str {
        let pool = pool_for(bucket_for(score));
        pool[(self.next_u64() % pool.len() as u64) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bucket_for(100), ScoreBucket::High);
        assert_eq!(bucket_for(80), ScoreBucket::High);
        assert_eq!(bucket_for(79), ScoreBucket::Medium);
        assert_eq!(bucket_for(50), ScoreBucket::Medium);
        assert_eq!(bucket_for(49), ScoreBucket::Low);
        assert_eq!(bucket_for(0), ScoreBucket::Low);
    }

    #[test]
    fn picker_is_deterministic_per_seed() {
        let mut a = MessagePicker::new(42);
        let mut b = MessagePicker::new(42);
        for _ in 0..8 {
            assert_eq!(a.pick(90), b.pick(90));
        }
    }

    #[test]
    fn picked_message_stays_in_bucket_pool() {
        for seed in 0..32u64 {
            let mut picker = MessagePicker::new(seed);
            assert!(HIGH_MESSAGES.contains(&picker.pick(85)));
            assert!(MEDIUM_MESSAGES.contains(&picker.pick(60)));
            assert!(LOW_MESSAGES.contains(&picker.pick(10)));
        }
    }
}
