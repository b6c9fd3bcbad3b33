// src/core/inventory.rs
use once_cell::sync::Lazy;

/// Consonant clusters that may open a syllable.
pub const INITIALS: [&str; 27] = [
    "b", "c", "ch", "d", "đ", "g", "gh", "gi", "h", "k", "kh", "l", "m", "n", "ng", "ngh", "nh",
    "p", "ph", "qu", "r", "s", "t", "th", "tr", "v", "x",
];

/// Consonant clusters that may close a syllable.
pub const FINALS: [&str; 8] = ["c", "ch", "m", "n", "ng", "nh", "p", "t"];

/// Vowel nuclei drawn by the full randomizer: every single vowel, every
/// ordered pair of vowels, and the triphthongs in common use.
pub const NUCLEI: [&str; 169] = [
    "a", "ă", "â", "e", "ê", "i", "o", "ô", "ơ", "u", "ư", "y",
    "aa", "aă", "aâ", "ae", "aê", "ai", "ao", "aô", "aơ", "au", "aư", "ay",
    "ăa", "ăă", "ăâ", "ăe", "ăê", "ăi", "ăo", "ăô", "ăơ", "ău", "ăư", "ăy",
    "âa", "âă", "ââ", "âe", "âê", "âi", "âo", "âô", "âơ", "âu", "âư", "ây",
    "ea", "eă", "eâ", "ee", "eê", "ei", "eo", "eô", "eơ", "eu", "eư", "ey",
    "êa", "êă", "êâ", "êe", "êê", "êi", "êo", "êô", "êơ", "êu", "êư", "êy",
    "ia", "iă", "iâ", "ie", "iê", "ii", "io", "iô", "iơ", "iu", "iư", "iy",
    "oa", "oă", "oâ", "oe", "oê", "oi", "oo", "oô", "oơ", "ou", "oư", "oy",
    "ôa", "ôă", "ôâ", "ôe", "ôê", "ôi", "ôo", "ôô", "ôơ", "ôu", "ôư", "ôy",
    "ơa", "ơă", "ơâ", "ơe", "ơê", "ơi", "ơo", "ơô", "ơơ", "ơu", "ơư", "ơy",
    "ua", "uă", "uâ", "ue", "uê", "ui", "uo", "uô", "uơ", "uu", "uư", "uy",
    "ưa", "ưă", "ưâ", "ưe", "ưê", "ưi", "ưo", "ưô", "ươ", "ưu", "ưư", "ưy",
    "ya", "yă", "yâ", "ye", "yê", "yi", "yo", "yô", "yơ", "yu", "yư", "yy",
    "iêu", "oao", "oeo", "oai", "oay", "uây", "uôi", "uya", "uyu", "uyê", "ươi", "ươu", "yêu",
];

/// Initials ordered longest first; clusters of equal length keep their
/// inventory order.
pub static INITIALS_LONGEST_FIRST: Lazy<Vec<&'static str>> =
    Lazy::new(|| longest_first(&INITIALS));

pub static FINALS_LONGEST_FIRST: Lazy<Vec<&'static str>> = Lazy::new(|| longest_first(&FINALS));

fn longest_first(clusters: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = clusters.to_vec();
    // `sort_by_key` is stable, which keeps the inventory order as tie-break.
    sorted.sort_by_key(|cluster| std::cmp::Reverse(cluster.chars().count()));
    sorted
}
