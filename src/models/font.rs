use std::fmt;
use std::path::Path;

/// 使用者可選擇的輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFormat {
    #[default]
    Ttf,
    Otf,
    Woff,
    Woff2,
    Eot,
}

impl FontFormat {
    /// 下拉選單中的顯示順序
    pub const ALL: [FontFormat; 5] = [
        FontFormat::Ttf,
        FontFormat::Otf,
        FontFormat::Woff,
        FontFormat::Woff2,
        FontFormat::Eot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontFormat::Ttf => "TTF",
            FontFormat::Otf => "OTF",
            FontFormat::Woff => "WOFF",
            FontFormat::Woff2 => "WOFF2",
            FontFormat::Eot => "EOT",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FontFormat::Ttf => "ttf",
            FontFormat::Otf => "otf",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
            FontFormat::Eot => "eot",
        }
    }

    /// 依副檔名推測格式（不分大小寫）
    pub fn from_extension(ext: &str) -> Option<FontFormat> {
        let ext = ext.to_ascii_lowercase();
        FontFormat::ALL.into_iter().find(|f| f.extension() == ext)
    }

    pub fn from_path(path: &Path) -> Option<FontFormat> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(FontFormat::from_extension)
    }

    /// 檔案對話框使用的副檔名過濾清單
    pub fn dialog_extensions() -> Vec<&'static str> {
        FontFormat::ALL.iter().map(|f| f.extension()).collect()
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 由檔案簽章判斷出的實際內容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFlavor {
    /// glyf 輪廓的 sfnt
    TrueType,
    /// CFF 輪廓的 sfnt（OTTO）
    Cff,
    Woff,
    Woff2,
    Collection,
    Eot,
}

const EOT_MAGIC_OFFSET: usize = 34;
const EOT_MAGIC: u16 = 0x504C;

impl SourceFlavor {
    pub fn sniff(data: &[u8]) -> Option<SourceFlavor> {
        let signature: [u8; 4] = data.get(..4)?.try_into().ok()?;
        let flavor = match &signature {
            b"\x00\x01\x00\x00" | b"true" => Some(SourceFlavor::TrueType),
            b"OTTO" => Some(SourceFlavor::Cff),
            b"wOFF" => Some(SourceFlavor::Woff),
            b"wOF2" => Some(SourceFlavor::Woff2),
            b"ttcf" => Some(SourceFlavor::Collection),
            _ => None,
        };
        flavor.or_else(|| {
            // EOT 標頭的魔術數字為 little-endian
            let magic = data.get(EOT_MAGIC_OFFSET..EOT_MAGIC_OFFSET + 2)?;
            (u16::from_le_bytes([magic[0], magic[1]]) == EOT_MAGIC).then_some(SourceFlavor::Eot)
        })
    }

    /// 與此內容相同的輸出格式，用於判斷同格式複製。EOT 無法讀取，沒有對應格式
    pub fn native_format(self) -> Option<FontFormat> {
        match self {
            SourceFlavor::TrueType => Some(FontFormat::Ttf),
            SourceFlavor::Cff => Some(FontFormat::Otf),
            SourceFlavor::Woff => Some(FontFormat::Woff),
            SourceFlavor::Woff2 => Some(FontFormat::Woff2),
            SourceFlavor::Eot | SourceFlavor::Collection => None,
        }
    }
}

impl fmt::Display for SourceFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFlavor::TrueType => "TrueType",
            SourceFlavor::Cff => "OpenType/CFF",
            SourceFlavor::Woff => "WOFF",
            SourceFlavor::Woff2 => "WOFF2",
            SourceFlavor::Collection => "font collection",
            SourceFlavor::Eot => "EOT",
        };
        f.write_str(name)
    }
}

/// 轉換元件的輸出：資料與實際寫出的格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFont {
    pub data: Vec<u8>,
    pub written_as: FontFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(FontFormat::from_extension("WOFF2"), Some(FontFormat::Woff2));
        assert_eq!(FontFormat::from_path(Path::new("a/b/Font.OtF")), Some(FontFormat::Otf));
        assert_eq!(FontFormat::from_path(Path::new("readme.txt")), None);
        assert_eq!(FontFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn sniff_recognises_signatures() {
        assert_eq!(SourceFlavor::sniff(&[0, 1, 0, 0, 9, 9]), Some(SourceFlavor::TrueType));
        assert_eq!(SourceFlavor::sniff(b"true...."), Some(SourceFlavor::TrueType));
        assert_eq!(SourceFlavor::sniff(b"OTTO...."), Some(SourceFlavor::Cff));
        assert_eq!(SourceFlavor::sniff(b"wOFF...."), Some(SourceFlavor::Woff));
        assert_eq!(SourceFlavor::sniff(b"wOF2...."), Some(SourceFlavor::Woff2));
        assert_eq!(SourceFlavor::sniff(b"ttcf...."), Some(SourceFlavor::Collection));
    }

    #[test]
    fn sniff_detects_eot_header() {
        let mut header = vec![0u8; 64];
        header[34] = 0x4C;
        header[35] = 0x50;
        assert_eq!(SourceFlavor::sniff(&header), Some(SourceFlavor::Eot));
    }

    #[test]
    fn sniff_rejects_short_or_unknown_data() {
        assert_eq!(SourceFlavor::sniff(b""), None);
        assert_eq!(SourceFlavor::sniff(b"ab"), None);
        assert_eq!(SourceFlavor::sniff(b"hello world, not a font at all here"), None);
    }

    #[test]
    fn native_format_matches_flavor() {
        assert_eq!(SourceFlavor::Cff.native_format(), Some(FontFormat::Otf));
        assert_eq!(SourceFlavor::Collection.native_format(), None);
        assert_eq!(SourceFlavor::Eot.native_format(), None);
    }
}
