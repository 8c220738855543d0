//! テストフィクスチャ管理

use std::path::{Path, PathBuf};

/// Excerpt of a syntax dictionary release, including an irregular prefix
/// pair (7030/7031) and attribute noise on most lines.
#[allow(dead_code)]
pub const DICTIONARY: &str = "\
# GS1 Barcode Syntax Dictionary
# Release: 2024-06-10

00     *  N18,csum,key dlpkey=22,10,21|8003      # SSCC
01     *  N14,csum,key ex=02,255,37 dlpkey=22,10,21|235   # GTIN
10        X..20 req=01,02,8006,8026              # BATCH/LOT
11        N6,yymmd0 req=01,02,8006,8026          # PROD DATE
253    *  N13,csum,key [X..17] dlpkey            # GDTI
3100-3105 N6 req=01,02                           # NET WEIGHT (kg)
3110-3115 N6 req=01,02                           # LENGTH (m)
4300      X..35,pcenc                            # SHIP TO COMP
7030      N3,iso3166999 X..27 req=01,02          # PROCESSOR # 0
7031      N3,iso3166999 X..27 req=01,02          # PROCESSOR # 1
8003   *  N1,zero N13,csum,key [X..16] dlpkey    # GRAI
";

#[allow(dead_code)]
pub const DICTIONARY_TABLE: &str = "\
// https://github.com/gs1/gs1-syntax-dictionary 2024-06-10
static const AiInfo aiInfos[] = {
//TWO_DIGIT_DATA_LENGTH
\t{ \"00\", 18 },
\t{ \"01\", 14 },

\t{ \"10\", -20 },
\t{ \"11\", 6 },

//THREE_DIGIT_DATA_LENGTH
\t{ \"253\", -30 },

//THREE_DIGIT_PLUS_DIGIT_DATA_LENGTH
\t{ \"310\", 6 },
\t{ \"311\", 6 },
\t{ \"703\", -30 },

//FOUR_DIGIT_DATA_LENGTH
\t{ \"4300\", -35 },

\t{ \"8003\", -30 },
};
";

/// UnicodeData.txt excerpt touching every plane the table layout expects.
#[allow(dead_code)]
pub const UNICODE_DATA: &str = "\
0020;SPACE;Zs;0;WS;;;;;N;;;;;
0021;EXCLAMATION MARK;Po;0;ON;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0600;ARABIC NUMBER SIGN;Cf;0;AN;;;;;N;;;;;
0606;ARABIC-INDIC CUBE ROOT;Sm;0;ON;;;;;N;;;;;
10000;LINEAR B SYLLABLE B008 A;Lo;0;L;;;;;N;;;;;
110BD;KAITHI NUMBER SIGN;Cf;0;L;;;;;N;;;;;
20000;<CJK Ideograph Extension B, First>;Lo;0;L;;;;;N;;;;;
2A6DF;<CJK Ideograph Extension B, Last>;Lo;0;L;;;;;N;;;;;
2A700;<CJK Ideograph Extension C, First>;Lo;0;L;;;;;N;;;;;
2B739;<CJK Ideograph Extension C, Last>;Lo;0;L;;;;;N;;;;;
30000;<CJK Ideograph Extension G, First>;Lo;0;L;;;;;N;;;;;
3134A;<CJK Ideograph Extension G, Last>;Lo;0;L;;;;;N;;;;;
E0001;LANGUAGE TAG;Cf;0;BN;;;;;N;;;;;
E0100;VARIATION SELECTOR-17;Mn;0;NSM;;;;;N;;;;;
E01EF;VARIATION SELECTOR-256;Mn;0;NSM;;;;;N;;;;;
";

/// Write `contents` to `name` inside `dir`.
#[allow(dead_code)]
pub fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
