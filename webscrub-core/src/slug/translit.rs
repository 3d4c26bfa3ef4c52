// webscrub-core/src/slug/translit.rs
//! Fixed transliteration table mapping accented Latin and Cyrillic code
//! points to ASCII replacements.
//!
//! This is a deliberately limited lookup table aimed at common European
//! names appearing in URLs, not a general transliteration scheme. Unmapped
//! code points pass through `flatten_accents` unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Raw (code point, replacement) pairs. A replacement may be empty: some
/// Cyrillic signs (hard/soft sign, combining marks) simply vanish.
const TRANSLITERATION_PAIRS: &[(char, &str)] = &[
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Å', "AA"),
    ('Æ', "AE"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ð', "D"),
    ('Ł', "L"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ø', "OE"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Ü', "U"),
    ('Û', "U"),
    ('Ý', "Y"),
    ('Þ', "Th"),
    ('ß', "ss"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "aa"),
    ('æ', "ae"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ð', "d"),
    ('ł', "l"),
    ('ñ', "n"),
    ('ń', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ō', "o"),
    ('ö', "o"),
    ('ø', "oe"),
    ('ś', "s"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ū', "u"),
    ('ü', "u"),
    ('ý', "y"),
    ('þ', "th"),
    ('ÿ', "y"),
    ('ż', "z"),
    ('Œ', "OE"),
    ('œ', "oe"),
    // Cyrillic, U+0400..
    ('\u{0400}', "Ie"),
    ('\u{0401}', "Io"),
    ('\u{0402}', "Dj"),
    ('\u{0403}', "Gj"),
    ('\u{0404}', "Ie"),
    ('\u{0405}', "Dz"),
    ('\u{0406}', "I"),
    ('\u{0407}', "Yi"),
    ('\u{0408}', "J"),
    ('\u{0409}', "Lj"),
    ('\u{040a}', "Nj"),
    ('\u{040b}', "Tsh"),
    ('\u{040c}', "Kj"),
    ('\u{040d}', "I"),
    ('\u{040e}', "U"),
    ('\u{040f}', "Dzh"),
    ('\u{0410}', "A"),
    ('\u{0411}', "B"),
    ('\u{0412}', "V"),
    ('\u{0413}', "G"),
    ('\u{0414}', "D"),
    ('\u{0415}', "E"),
    ('\u{0416}', "Zh"),
    ('\u{0417}', "Z"),
    ('\u{0418}', "I"),
    ('\u{0419}', "I"),
    ('\u{041a}', "K"),
    ('\u{041b}', "L"),
    ('\u{041c}', "M"),
    ('\u{041d}', "N"),
    ('\u{041e}', "O"),
    ('\u{041f}', "P"),
    ('\u{0420}', "R"),
    ('\u{0421}', "S"),
    ('\u{0422}', "T"),
    ('\u{0423}', "U"),
    ('\u{0424}', "F"),
    ('\u{0425}', "Kh"),
    ('\u{0426}', "Ts"),
    ('\u{0427}', "Ch"),
    ('\u{0428}', "Sh"),
    ('\u{0429}', "Shch"),
    ('\u{042a}', ""),
    ('\u{042b}', "Y"),
    ('\u{042c}', ""),
    ('\u{042d}', "E"),
    ('\u{042e}', "Iu"),
    ('\u{042f}', "Ia"),
    ('\u{0430}', "a"),
    ('\u{0431}', "b"),
    ('\u{0432}', "v"),
    ('\u{0433}', "g"),
    ('\u{0434}', "d"),
    ('\u{0435}', "e"),
    ('\u{0436}', "zh"),
    ('\u{0437}', "z"),
    ('\u{0438}', "i"),
    ('\u{0439}', "i"),
    ('\u{043a}', "k"),
    ('\u{043b}', "l"),
    ('\u{043c}', "m"),
    ('\u{043d}', "n"),
    ('\u{043e}', "o"),
    ('\u{043f}', "p"),
    ('\u{0440}', "r"),
    ('\u{0441}', "s"),
    ('\u{0442}', "t"),
    ('\u{0443}', "u"),
    ('\u{0444}', "f"),
    ('\u{0445}', "kh"),
    ('\u{0446}', "ts"),
    ('\u{0447}', "ch"),
    ('\u{0448}', "sh"),
    ('\u{0449}', "shch"),
    ('\u{044a}', ""),
    ('\u{044b}', "y"),
    ('\u{044c}', ""),
    ('\u{044d}', "e"),
    ('\u{044e}', "iu"),
    ('\u{044f}', "ia"),
    ('\u{0450}', "ie"),
    ('\u{0451}', "io"),
    ('\u{0452}', "dj"),
    ('\u{0453}', "gj"),
    ('\u{0454}', "ie"),
    ('\u{0455}', "dz"),
    ('\u{0456}', "i"),
    ('\u{0457}', "yi"),
    ('\u{0458}', "j"),
    ('\u{0459}', "lj"),
    ('\u{045a}', "nj"),
    ('\u{045b}', "tsh"),
    ('\u{045c}', "kj"),
    ('\u{045d}', "i"),
    ('\u{045e}', "u"),
    ('\u{045f}', "dzh"),
    ('\u{0460}', "O"),
    ('\u{0461}', "o"),
    ('\u{0462}', "E"),
    ('\u{0463}', "e"),
    ('\u{0464}', "Ie"),
    ('\u{0465}', "ie"),
    ('\u{0466}', "E"),
    ('\u{0467}', "e"),
    ('\u{0468}', "Ie"),
    ('\u{0469}', "ie"),
    ('\u{046a}', "O"),
    ('\u{046b}', "o"),
    ('\u{046c}', "Io"),
    ('\u{046d}', "io"),
    ('\u{046e}', "Ks"),
    ('\u{046f}', "ks"),
    ('\u{0470}', "Ps"),
    ('\u{0471}', "ps"),
    ('\u{0472}', "F"),
    ('\u{0473}', "f"),
    ('\u{0474}', "Y"),
    ('\u{0475}', "y"),
    ('\u{0476}', "Y"),
    ('\u{0477}', "y"),
    ('\u{0478}', "u"),
    ('\u{0479}', "u"),
    ('\u{047a}', "O"),
    ('\u{047b}', "o"),
    ('\u{047c}', "O"),
    ('\u{047d}', "o"),
    ('\u{047e}', "Ot"),
    ('\u{047f}', "ot"),
    ('\u{0480}', "Q"),
    ('\u{0481}', "q"),
    ('\u{0482}', "1000"),
    ('\u{0483}', ""),
    ('\u{0484}', ""),
    ('\u{0485}', ""),
    ('\u{0486}', ""),
    ('\u{0487}', ""),
    ('\u{0488}', "100000"),
    ('\u{0489}', "1000000"),
    ('\u{048a}', ""),
    ('\u{048b}', ""),
    ('\u{048c}', ""),
    ('\u{048d}', ""),
    ('\u{04ae}', "U"),
    ('\u{04af}', "u"),
    ('\u{04b4}', "Tts"),
    ('\u{04b5}', "tts"),
    ('\u{04ba}', "H"),
    ('\u{04bb}', "h"),
    ('\u{04bc}', "Ch"),
    ('\u{04bd}', "ch"),
    ('\u{04c1}', "Zh"),
    ('\u{04c2}', "zh"),
    ('\u{04cb}', "Ch"),
    ('\u{04cc}', "ch"),
    ('\u{04d0}', "a"),
    ('\u{04d1}', "a"),
    ('\u{04d2}', "A"),
    ('\u{04d3}', "a"),
    ('\u{04d4}', "Ae"),
    ('\u{04d5}', "ae"),
    ('\u{04d6}', "Ie"),
    ('\u{04d7}', "ie"),
    ('\u{04dc}', "Zh"),
    ('\u{04dd}', "zh"),
    ('\u{04de}', "Z"),
    ('\u{04df}', "z"),
    ('\u{04e0}', "Dz"),
    ('\u{04e1}', "dz"),
    ('\u{04e2}', "I"),
    ('\u{04e3}', "i"),
    ('\u{04e4}', "I"),
    ('\u{04e5}', "i"),
    ('\u{04e6}', "O"),
    ('\u{04e7}', "o"),
    ('\u{04e8}', "O"),
    ('\u{04e9}', "o"),
    ('\u{04ea}', "O"),
    ('\u{04eb}', "o"),
    ('\u{04ec}', "E"),
    ('\u{04ed}', "e"),
    ('\u{04ee}', "U"),
    ('\u{04ef}', "u"),
    ('\u{04f0}', "U"),
    ('\u{04f1}', "u"),
    ('\u{04f2}', "U"),
    ('\u{04f3}', "u"),
    ('\u{04f4}', "Ch"),
    ('\u{04f5}', "ch"),
    ('\u{04f8}', "Y"),
    ('\u{04f9}', "y"),
];

/// Process-wide, read-only lookup map built once on first use.
pub(crate) static TRANSLITERATIONS: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| TRANSLITERATION_PAIRS.iter().copied().collect());
