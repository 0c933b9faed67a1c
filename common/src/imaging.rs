//! 画像パスの解決

use std::path::PathBuf;

/// 画像パスを解決する。先頭の `~` はホームディレクトリに展開
pub fn resolve_image_path(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_image_path_absolute() {
        assert_eq!(resolve_image_path("/data/a.png"), PathBuf::from("/data/a.png"));
    }

    #[test]
    fn test_resolve_image_path_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            resolve_image_path("~/Bureau/a.png"),
            home.join("Bureau").join("a.png")
        );
        assert_eq!(resolve_image_path("~"), home);
    }

    #[test]
    fn test_resolve_image_path_tilde_user_untouched() {
        assert_eq!(resolve_image_path("~alice/a.png"), PathBuf::from("~alice/a.png"));
    }
}
