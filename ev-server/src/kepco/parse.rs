//! KEPCO XML response parsing.
//!
//! The `getEvSearchList` operation returns XML: a `<header>` carrying a
//! result code ("00" = success) and a `<body><items>` list of `<item>`
//! elements, one per charger. Individual malformed items are skipped so
//! one bad record never aborts the load.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

use crate::repository::RawStation;

use super::error::KepcoError;

/// Result code the API uses for a successful call.
const RESULT_OK: &str = "00";

/// Accumulates the child-element text of one `<item>`.
#[derive(Default)]
struct ItemFields {
    cs_nm: Option<String>,
    addr: Option<String>,
    lat: Option<String>,
    longi: Option<String>,
    use_time: Option<String>,
    busi_nm: Option<String>,
    cp_tp: Option<String>,
    cp_stat: Option<String>,
}

impl ItemFields {
    fn set(&mut self, tag: &str, text: String) {
        match tag {
            "csNm" => self.cs_nm = Some(text),
            "addr" => self.addr = Some(text),
            "lat" => self.lat = Some(text),
            "longi" => self.longi = Some(text),
            "useTime" => self.use_time = Some(text),
            "busiNm" => self.busi_nm = Some(text),
            "cpTp" => self.cp_tp = Some(text),
            "cpStat" => self.cp_stat = Some(text),
            _ => {}
        }
    }

    /// Convert to a raw station row, or `None` if the coordinate text is
    /// present but not numeric.
    ///
    /// Absent coordinate text maps to the API's `0` default; the repository
    /// drops the resulting `(0, 0)` sentinel rows.
    fn into_raw(self) -> Option<RawStation> {
        let parse_coord = |text: Option<String>| -> Option<f64> {
            match text {
                Some(t) => t.trim().parse::<f64>().ok(),
                None => Some(0.0),
            }
        };

        let latitude = parse_coord(self.lat)?;
        let longitude = parse_coord(self.longi)?;

        Some(RawStation {
            name: self.cs_nm.unwrap_or_default(),
            address: self.addr.unwrap_or_default(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            connector_type: self.cp_tp,
            operator: self.busi_nm,
            access_restriction: self.use_time,
            place_type: None,
            charge_speed: None,
            status: self.cp_stat,
        })
    }
}

/// Parse a `getEvSearchList` XML body into raw station rows.
///
/// Returns an error for a non-success result code or malformed XML. An
/// absent or empty `<items>` list is not an error: the API reports "no
/// data" that way.
pub fn parse_station_list(xml: &str) -> Result<Vec<RawStation>, KepcoError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut rows = Vec::new();
    let mut in_header = false;
    let mut in_item = false;
    let mut current_tag = String::new();
    let mut item = ItemFields::default();
    let mut result_code: Option<String> = None;
    let mut result_msg: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                match name.as_str() {
                    "header" => in_header = true,
                    "item" => {
                        in_item = true;
                        item = ItemFields::default();
                    }
                    _ => {}
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                match name {
                    "header" => in_header = false,
                    "item" if in_item => {
                        in_item = false;
                        match std::mem::take(&mut item).into_raw() {
                            Some(row) => rows.push(row),
                            None => warn!("skipping charger item with non-numeric coordinates"),
                        }
                    }
                    _ => {}
                }
                current_tag.clear();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().into_owned();
                if in_item {
                    item.set(&current_tag, text);
                } else if in_header {
                    match current_tag.as_str() {
                        "resultCode" => result_code = Some(text),
                        "resultMsg" => result_msg = Some(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(KepcoError::Xml(e)),
            _ => {}
        }
    }

    match result_code {
        Some(code) if code != RESULT_OK => {
            return Err(KepcoError::ResultCode {
                code,
                message: result_msg.unwrap_or_default(),
            });
        }
        _ => {}
    }

    if rows.is_empty() {
        warn!("KEPCO response contained no charger items");
    }

    Ok(rows)
}
