//! Decorative emoji appended to every caption.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed emoji set
pub const EMOJIS: [&str; 6] = ["✨", "❤️", "🔥", "🌟", "😊", "📸"];

/// Picks one emoji uniformly at random
pub fn pick_emoji(rng: &mut impl Rng) -> &'static str {
    EMOJIS.choose(rng).copied().unwrap_or(EMOJIS[0])
}
