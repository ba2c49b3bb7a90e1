use std::{fmt::Display, path::Path};

/// Symbol name fragment derived from an asset file name.
///
/// The emitted declaration is named `img_<name>`. Characters that are not
/// valid in a C identifier are kept as is; renaming the file is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName(String);

impl AssetName {
    /// Derives the asset name from the file name of the given path.
    ///
    /// Everything from the last `.` of the file name is dropped, so
    /// `icons/play.png` becomes `play` and `a.b.png` becomes `a.b`. A file
    /// name without an extension is used unchanged.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow::format_err!("Path {:?} does not name a file", path))?
            .to_string_lossy();

        let name = match file_name.rfind('.') {
            Some(pos) => file_name[..pos].to_owned(),
            None => file_name.into_owned(),
        };
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::AssetName;

    #[test]
    fn test_asset_name_strips_last_extension() {
        let name = AssetName::from_path("icon.png").unwrap();
        assert_eq!(name.as_str(), "icon");

        // Only the last extension is dropped.
        let name = AssetName::from_path("a.b.png").unwrap();
        assert_eq!(name.as_str(), "a.b");
    }

    #[test]
    fn test_asset_name_strips_directories() {
        let name = AssetName::from_path("images/ui/vol_plus.bmp").unwrap();
        assert_eq!(name.as_str(), "vol_plus");
    }

    #[test]
    fn test_asset_name_without_extension() {
        let name = AssetName::from_path("splash").unwrap();
        assert_eq!(name.as_str(), "splash");
    }

    #[test]
    fn test_asset_name_requires_file_name() {
        assert!(AssetName::from_path("images/..").is_err());
    }
}
