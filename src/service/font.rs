use std::borrow::Cow;
use log::{debug, warn};
use read_fonts::types::Tag;
use read_fonts::{FontRef, TableProvider};
use crate::models::font::{ConvertedFont, FontFormat, SourceFlavor};
use crate::service::error::{ConvertError, ConvertResult};
use crate::service::traits::i_service::FontCodecTrait;

const CFF_TAG: Tag = Tag::new(b"CFF ");
const CFF2_TAG: Tag = Tag::new(b"CFF2");

/// WOFF2 brotli 壓縮品質（0-11）
pub const DEFAULT_WOFF2_QUALITY: usize = 11;

/// 字型服務，透過 read-fonts 驗證字型並以 woff 進行 WOFF/WOFF2 編解碼
pub struct FontService {
    woff2_quality: usize,
}

impl FontService {
    /// 創建新的 FontService 實例
    pub fn new() -> Self {
        FontService {
            woff2_quality: DEFAULT_WOFF2_QUALITY,
        }
    }
}

impl Default for FontService {
    fn default() -> Self {
        Self::new()
    }
}

impl FontCodecTrait for FontService {
    fn validate(&self, data: &[u8]) -> ConvertResult<SourceFlavor> {
        let flavor = detect_flavor(data)?;
        let sfnt = unwrap_sfnt(data, flavor)?;
        inspect_sfnt(&sfnt)?;
        Ok(flavor)
    }

    fn convert(&self, data: &[u8], target: FontFormat) -> ConvertResult<ConvertedFont> {
        let flavor = detect_flavor(data)?;
        let sfnt = unwrap_sfnt(data, flavor)?;
        let outlines = inspect_sfnt(&sfnt)?;

        let converted = match target {
            FontFormat::Ttf => ConvertedFont {
                data: sfnt.into_owned(),
                written_as: FontFormat::Ttf,
            },
            FontFormat::Otf if outlines == SourceFlavor::Cff => ConvertedFont {
                data: sfnt.into_owned(),
                written_as: FontFormat::Otf,
            },
            FontFormat::Otf => {
                warn!("字型為 TrueType 輪廓，OTF 輸出改寫為 TTF");
                ConvertedFont {
                    data: sfnt.into_owned(),
                    written_as: FontFormat::Ttf,
                }
            }
            FontFormat::Eot => {
                warn!("未實作 EOT 編碼，改寫為 TTF");
                ConvertedFont {
                    data: sfnt.into_owned(),
                    written_as: FontFormat::Ttf,
                }
            }
            FontFormat::Woff => ConvertedFont {
                data: woff::version1::compress(&sfnt, 1, 0).ok_or(ConvertError::Encode(FontFormat::Woff))?,
                written_as: FontFormat::Woff,
            },
            FontFormat::Woff2 => ConvertedFont {
                data: woff::version2::compress(&sfnt, String::new(), self.woff2_quality, true)
                    .ok_or(ConvertError::Encode(FontFormat::Woff2))?,
                written_as: FontFormat::Woff2,
            },
        };
        debug!(
            "轉換完成：{} -> {}，輸出大小：{} 位元組",
            flavor,
            converted.written_as,
            converted.data.len()
        );
        Ok(converted)
    }
}

/// 判斷來源資料的格式，拒絕不支援的輸入
pub fn detect_flavor(data: &[u8]) -> ConvertResult<SourceFlavor> {
    if data.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    match SourceFlavor::sniff(data) {
        Some(SourceFlavor::Collection) => Err(ConvertError::Collection),
        Some(SourceFlavor::Eot) => Err(ConvertError::EotInput),
        Some(flavor) => Ok(flavor),
        None => Err(ConvertError::UnknownFormat),
    }
}

/// 解開 WOFF/WOFF2 外層，取得 sfnt 資料
pub fn unwrap_sfnt(data: &[u8], flavor: SourceFlavor) -> ConvertResult<Cow<'_, [u8]>> {
    match flavor {
        SourceFlavor::TrueType | SourceFlavor::Cff => Ok(Cow::Borrowed(data)),
        SourceFlavor::Woff => woff::version1::decompress(data)
            .map(Cow::Owned)
            .ok_or(ConvertError::Decode(flavor)),
        SourceFlavor::Woff2 => woff::version2::decompress(data)
            .map(Cow::Owned)
            .ok_or(ConvertError::Decode(flavor)),
        SourceFlavor::Collection => Err(ConvertError::Collection),
        SourceFlavor::Eot => Err(ConvertError::EotInput),
    }
}

/// 以 read-fonts 解析 sfnt，返回輪廓類型
pub fn inspect_sfnt(sfnt: &[u8]) -> ConvertResult<SourceFlavor> {
    match SourceFlavor::sniff(sfnt) {
        Some(SourceFlavor::TrueType) | Some(SourceFlavor::Cff) => {}
        _ => return Err(ConvertError::InvalidFont("decoded data is not an sfnt font".to_string())),
    }
    let font = FontRef::new(sfnt).map_err(|e| ConvertError::InvalidFont(e.to_string()))?;
    font.head().map_err(|e| ConvertError::InvalidFont(format!("head table: {}", e)))?;
    let num_glyphs = font
        .maxp()
        .map_err(|e| ConvertError::InvalidFont(format!("maxp table: {}", e)))?
        .num_glyphs();
    debug!(
        "解析字型：{} 個表格，{} 個字符",
        font.table_directory.num_tables(),
        num_glyphs
    );

    if font.table_data(CFF_TAG).is_some() || font.table_data(CFF2_TAG).is_some() {
        Ok(SourceFlavor::Cff)
    } else {
        Ok(SourceFlavor::TrueType)
    }
}
