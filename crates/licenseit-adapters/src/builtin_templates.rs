//! Templates that ship inside the binary.
//!
//! Bodies are embedded at compile time from `templates/`, so the store needs
//! no filesystem access at runtime. Names are stored with their suffix
//! (`MIT.txt`); resolution from a bare name happens in the core.

/// `(stored name, body)` for every bundled template, sorted by name.
pub const BUILTIN: &[(&str, &str)] = &[
    ("0BSD.txt", include_str!("../templates/0BSD.txt")),
    ("Apache-2.0.txt", include_str!("../templates/Apache-2.0.txt")),
    ("BSD-2-Clause.txt", include_str!("../templates/BSD-2-Clause.txt")),
    ("BSD-3-Clause.txt", include_str!("../templates/BSD-3-Clause.txt")),
    ("ISC.txt", include_str!("../templates/ISC.txt")),
    ("MIT-0.md", include_str!("../templates/MIT-0.md")),
    ("MIT.txt", include_str!("../templates/MIT.txt")),
    ("Unlicense.txt", include_str!("../templates/Unlicense.txt")),
    ("Zlib.txt", include_str!("../templates/Zlib.txt")),
];

/// Iterate over the bundled templates.
pub fn all_templates() -> impl Iterator<Item = (&'static str, &'static str)> {
    BUILTIN.iter().copied()
}
