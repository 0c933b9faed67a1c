//! 組み込みデータ
//!
//! - 起動直後のスケルトン行に使う8カテゴリ名
//! - 起動時に表示するデモ用データセット

use crate::types::Entry;

/// 定義済みカテゴリ（表示順）
pub const PREDEFINED_CATEGORIES: [&str; 8] = [
    "Bénin",
    "Bénin < 104",
    "AUS",
    "Microvésicule",
    "Microvésicule Atypies",
    "onco",
    "Malin CPT",
    "Médullaire",
];

/// 起動時に投入するデモデータ
pub fn default_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            "Bénin",
            13,
            &[
                "~/Bureau/thumbnail_224x224/.svs_ann_1923.png",
                "~/Bureau/thumbnail_224x224/32076A.svs_ann_1924.png",
            ],
        ),
        Entry::new(
            "AUS",
            7,
            &[
                "~/Bureau/thumbnail_224x224/33577.svs_ann_3684.png",
                "~/Bureau/thumbnail_224x224/33577.svs_ann_3685.png",
            ],
        ),
        Entry::new(
            "Microvésicule",
            5,
            &[
                "~/Bureau/thumbnail_224x224/3689.svs_ann_1163.png",
                "~/Bureau/thumbnail_224x224/3689.svs_ann_1164.png",
            ],
        ),
        Entry::new(
            "Malin CPT",
            10,
            &[
                "~/Bureau/thumbnail_224x224/4415.svs_ann_4316.png",
                "~/Bureau/thumbnail_224x224/4415.svs_ann_4317.png",
            ],
        ),
    ]
}
