//! Curated vocabularies for name generation
//!
//! Every list must stay non-empty and lowercase ASCII; the generator indexes
//! into them without checking.

/// Leading fragments (used when prefixes are enabled)
pub const PREFIXES: &[&str] = &[
    // Intensity
    "super", "mega", "ultra", "hyper", "neo", "cyber", "digi", "tech",
    // Speed & quality
    "smart", "quick", "fast", "swift", "prime", "next", "pro", "max",
    // Calls to action
    "go", "my", "get", "try", "use", "the", "one", "all", "hub", "app",
    // Platform flavored
    "cloud", "data", "meta", "open", "easy", "zen", "nova", "flux",
    "vibe", "wave", "sync", "core", "edge", "pulse", "spark", "blaze",
];

/// Trailing fragments (used when suffixes are enabled)
pub const SUFFIXES: &[&str] = &[
    // Brandable endings
    "ly", "ify", "io", "fy", "up", "go", "ai", "now", "pro", "hq",
    // Places
    "hub", "lab", "box", "kit", "app", "base", "spot", "zone", "space", "nest",
    "desk", "point", "path", "way",
    // Tech
    "stack", "flow", "sync", "wave", "mind", "link", "node", "net", "web",
    "dev", "ops",
];

/// Standalone roots
pub const BASE_WORDS: &[&str] = &[
    // Tech
    "code", "pixel", "byte", "logic", "data", "algo", "stack", "loop",
    "node", "grid", "cache", "query", "api", "script", "dev", "hack",
    // Nature
    "leaf", "stone", "river", "ocean", "sky", "star", "moon", "sun",
    "wind", "fire", "cloud", "storm", "wave", "peak", "vale", "bloom",
    // Motion
    "spark", "flash", "pulse", "flow", "drift", "shift", "boost", "lift",
    "forge", "craft", "build", "make", "grow", "rise", "leap", "dash",
    // Colors
    "blue", "red", "green", "gold", "silver", "amber", "azure", "coral",
    // Animals
    "fox", "wolf", "hawk", "owl", "bear", "lion", "tiger", "raven",
    // Abstract
    "zen", "sync", "unity", "nexus", "apex", "core", "prime", "nova",
    "vibe", "aura", "echo", "glow", "haze", "mist", "dusk", "dawn",
];

/// Three-letter fillers for compact combinations
pub const SHORT_WORDS: &[&str] = &[
    "bit", "dot", "zip", "tap", "pop", "hop", "jet", "zap", "vim", "pix",
    "dex", "rex", "mix", "fix", "hex", "max", "box", "fox", "lux", "nix",
];
