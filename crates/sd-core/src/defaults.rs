//! Built-in option lists.

/// Casual options shown when the user has not typed their own.
pub const DEFAULT_CASUAL_OPTIONS: [&str; 18] = [
    "Watch videos",
    "Scroll the feed",
    "Online shopping",
    "Play games",
    "Eat snacks",
    "Daydream",
    "Take a nap",
    "Listen to music",
    "Read comics",
    "Short videos",
    "Bubble tea",
    "Window shopping",
    "Watch a movie",
    "Pet the cat",
    "Phone time",
    "Chat",
    "Late-night snack",
    "Stay in bed",
];

/// Substituted when every casual option is blank.
pub const FALLBACK_OPTIONS: [&str; 2] = ["Void", "Emptiness"];

/// The default options as one-per-line text, as the input panel shows them.
pub fn default_options_text() -> String {
    DEFAULT_CASUAL_OPTIONS.join("\n")
}
