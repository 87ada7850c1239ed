//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use sheetread_core::{Cell, CellKind, Row, Sheet, MAX_COLS, MAX_ROWS};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            result.push(c);
            continue;
        }

        let mut hex_chars = String::new();
        let mut saw_x = false;
        let mut decoded = None;

        if chars.peek() == Some(&'x') {
            chars.next();
            saw_x = true;

            while hex_chars.len() < 4 {
                match chars.peek() {
                    Some(&ch) if ch.is_ascii_hexdigit() => {
                        hex_chars.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }

            if hex_chars.len() == 4 && chars.peek() == Some(&'_') {
                decoded = u32::from_str_radix(&hex_chars, 16)
                    .ok()
                    .and_then(char::from_u32);
                if decoded.is_some() {
                    chars.next();
                }
            }
        }

        match decoded {
            Some(ch) => result.push(ch),
            None => {
                // Not an escape sequence, keep what was consumed
                result.push('_');
                if saw_x {
                    result.push('x');
                }
                result.push_str(&hex_chars);
            }
        }
    }

    result
}

/// Convert the column letters of an A1-style reference to a 0-based index
fn column_index(cell_ref: &str) -> Option<usize> {
    let letters: Vec<u8> = cell_ref
        .bytes()
        .skip_while(|b| *b == b'$')
        .take_while(u8::is_ascii_alphabetic)
        .collect();
    if letters.is_empty() {
        return None;
    }

    let mut col = 0usize;
    for b in letters {
        col = col
            .checked_mul(26)?
            .checked_add((b.to_ascii_uppercase() - b'A') as usize + 1)?;
    }
    Some(col - 1)
}

/// Resolve the column of a cell reference, rejecting anything past Excel's limit
fn cell_column(cell_ref: &str) -> XlsxResult<usize> {
    match column_index(cell_ref) {
        Some(col) if col < MAX_COLS as usize => Ok(col),
        _ => Err(XlsxError::Parse(format!(
            "Invalid cell reference '{}'",
            cell_ref
        ))),
    }
}

/// Read the 1-based `r` attribute of a `<row>` element, if present
fn row_number(e: &BytesStart) -> XlsxResult<Option<usize>> {
    let Some(r) = attr_value(e, b"r") else {
        return Ok(None);
    };
    match r.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_ROWS as usize).contains(&n) => Ok(Some(n)),
        _ => Err(XlsxError::Parse(format!("Invalid row number: {}", r))),
    }
}

/// Map the `t` attribute of a `<c>` element onto a cell kind
///
/// Formula cells and cells without a value are always strings.
fn cell_kind(cell_type: Option<&str>, has_value: bool, has_formula: bool) -> CellKind {
    if has_formula || !has_value {
        return CellKind::String;
    }
    match cell_type {
        None | Some("n") => CellKind::Numeric,
        Some("b") => CellKind::Bool,
        // s, str, inlineStr, d, e and anything unknown
        Some(_) => CellKind::String,
    }
}

/// Get an attribute value by key
fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()))
}

/// State of the `<c>` element currently being read
#[derive(Default)]
struct PendingCell {
    col: Option<usize>,
    cell_type: Option<String>,
    value: Option<String>,
    inline: Option<String>,
    has_formula: bool,
}

impl PendingCell {
    fn from_start(e: &BytesStart) -> XlsxResult<Self> {
        Ok(Self {
            col: attr_value(e, b"r").as_deref().map(cell_column).transpose()?,
            cell_type: attr_value(e, b"t"),
            ..Default::default()
        })
    }

    fn into_cell(self, shared_strings: &[String]) -> XlsxResult<Cell> {
        let cell_type = self.cell_type.as_deref();
        let value = match (cell_type, self.value, self.inline) {
            (Some("inlineStr"), _, Some(text)) => Some(decode_excel_escapes(&text)),
            (Some("s"), Some(v), _) => {
                let idx: usize = v.trim().parse().map_err(|_| {
                    XlsxError::Parse(format!("Invalid shared string index: {}", v))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    XlsxError::Parse(format!("Shared string index {} out of bounds", idx))
                })?;
                Some(s.clone())
            }
            (Some("str"), Some(v), _) => Some(decode_excel_escapes(&v)),
            (_, Some(v), _) => Some(v),
            (_, None, inline) => inline,
        };

        let kind = cell_kind(cell_type, value.is_some(), self.has_formula);
        Ok(Cell::new(kind, value.unwrap_or_default()))
    }
}

/// Append `cell` at column `col`, filling any gap with blank string cells
fn place_cell(cells: &mut Vec<Cell>, col: Option<usize>, cell: Cell) {
    if let Some(col) = col {
        while cells.len() < col {
            cells.push(Cell::default());
        }
    }
    cells.push(cell);
}

/// Pad `rows` with empty rows up to the 1-based row number `r`, if given
fn pad_rows(rows: &mut Vec<Row>, r: Option<usize>) {
    if let Some(r) = r {
        while rows.len() + 1 < r {
            rows.push(Row::default());
        }
    }
}

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read the sheets of a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Vec<Sheet>> {
        let path = path.as_ref();
        log::debug!("reading XLSX file {}", path.display());
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read the sheets of a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Vec<Sheet>> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;

        // Sheet names and rIds in workbook order
        let sheet_info = Self::read_workbook_xml(&mut archive)?;

        // rId -> part path
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let mut sheets = Vec::with_capacity(sheet_info.len());
        for (name, r_id) in sheet_info {
            let Some(path) = sheet_paths.get(&r_id) else {
                log::warn!("sheet '{}' has no worksheet relationship {}, skipping", name, r_id);
                continue;
            };
            let rows = Self::read_worksheet(&mut archive, path, &shared_strings)?;
            log::debug!("read sheet '{}' with {} rows", name, rows.len());
            sheets.push(Sheet::new(name, rows));
        }

        Ok(sheets)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => {
                log::trace!("no shared strings part");
                return Ok(strings);
            }
        };

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current_string));
                        current_string.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current_string.push_str(&e.unescape()?);
                }
                Ok(Event::CData(e)) if in_t => {
                    current_string.push_str(&String::from_utf8_lossy(&e));
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and rIds
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.local_name().as_ref() == b"sheet" => {
                    let name = attr_value(&e, b"name");
                    let r_id = attr_value(&e, b"r:id");

                    match (name, r_id) {
                        (Some(name), Some(r_id)) => sheets.push((name, r_id)),
                        _ => log::warn!("ignoring <sheet> without name or r:id"),
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get sheet file paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let id = attr_value(&e, b"Id");
                    let target = attr_value(&e, b"Target");
                    let rel_type = attr_value(&e, b"Type");

                    // Only include worksheet relationships
                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            // Target is relative to xl/ folder
                            let full_path = match target.strip_prefix('/') {
                                Some(absolute) => absolute.to_string(),
                                None => format!("xl/{}", target),
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read the rows of one worksheet part
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
    ) -> XlsxResult<Vec<Row>> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut rows: Vec<Row> = Vec::new();
        let mut cells: Vec<Cell> = Vec::new();
        let mut current: Option<PendingCell> = None;
        let mut in_value = false;
        let mut in_inline_text = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"row" => {
                        pad_rows(&mut rows, row_number(&e)?);
                        cells.clear();
                    }
                    b"c" => current = Some(PendingCell::from_start(&e)?),
                    b"v" if current.is_some() => in_value = true,
                    b"f" => {
                        if let Some(cell) = current.as_mut() {
                            cell.has_formula = true;
                        }
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if current.is_some() && !in_phonetic => in_inline_text = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"row" => {
                        pad_rows(&mut rows, row_number(&e)?);
                        rows.push(Row::default());
                    }
                    b"c" => {
                        // Blank (usually styled) cell
                        let pending = PendingCell::from_start(&e)?;
                        let col = pending.col;
                        place_cell(&mut cells, col, pending.into_cell(shared_strings)?);
                    }
                    b"f" => {
                        // Shared formula reference
                        if let Some(cell) = current.as_mut() {
                            cell.has_formula = true;
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"row" => rows.push(Row::new(std::mem::take(&mut cells))),
                    b"c" => {
                        if let Some(pending) = current.take() {
                            let col = pending.col;
                            place_cell(&mut cells, col, pending.into_cell(shared_strings)?);
                        }
                    }
                    b"v" => in_value = false,
                    b"rPh" => in_phonetic = false,
                    b"t" => in_inline_text = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_value || in_inline_text => {
                    let text = e.unescape()?;
                    if let Some(cell) = current.as_mut() {
                        let target = if in_value {
                            &mut cell.value
                        } else {
                            &mut cell.inline
                        };
                        target.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};

    const CONTENT_TYPES: &str = r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;

    /// Build a minimal XLSX package from (sheet name, sheetData inner XML) pairs
    fn build_xlsx(sheets: &[(&str, &str)], shared_strings: Option<&str>) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let cursor = Cursor::new(&mut buf);
            let mut zip = zip::ZipWriter::new(cursor);
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();

            let mut workbook = String::from(r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#);
            let mut rels = String::from(r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
            for (idx, (name, _)) in sheets.iter().enumerate() {
                let n = idx + 1;
                workbook.push_str(&format!(
                    r#"<sheet name="{name}" sheetId="{n}" r:id="rId{n}"/>"#
                ));
                rels.push_str(&format!(
                    r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
                ));
            }
            workbook.push_str("</sheets></workbook>");
            rels.push_str("</Relationships>");

            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(workbook.as_bytes()).unwrap();
            zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            zip.write_all(rels.as_bytes()).unwrap();

            for (idx, (_, data)) in sheets.iter().enumerate() {
                zip.start_file(format!("xl/worksheets/sheet{}.xml", idx + 1), options)
                    .unwrap();
                let xml = format!(
                    r#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{data}</sheetData></worksheet>"#
                );
                zip.write_all(xml.as_bytes()).unwrap();
            }

            if let Some(sst) = shared_strings {
                zip.start_file("xl/sharedStrings.xml", options).unwrap();
                let xml = format!(
                    r#"<?xml version="1.0"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{sst}</sst>"#
                );
                zip.write_all(xml.as_bytes()).unwrap();
            }

            zip.finish().unwrap();
        }
        buf
    }

    fn read(buf: Vec<u8>) -> Vec<Sheet> {
        XlsxReader::read(Cursor::new(buf)).unwrap()
    }

    #[test]
    fn test_decode_excel_escapes() {
        assert_eq!(decode_excel_escapes("hello_x000d_world"), "hello\rworld");
        assert_eq!(decode_excel_escapes("col1_x0009_col2"), "col1\tcol2");
        assert_eq!(
            decode_excel_escapes("line1_x000d__x000a_line2"),
            "line1\r\nline2"
        );
        assert_eq!(decode_excel_escapes("under_x005f_score"), "under_score");
        assert_eq!(decode_excel_escapes("_x000D_"), "\r");
        assert_eq!(decode_excel_escapes("plain text"), "plain text");
    }

    #[test]
    fn test_decode_excel_escapes_partial_sequence() {
        assert_eq!(decode_excel_escapes("_x00"), "_x00");
        assert_eq!(decode_excel_escapes("_x000d"), "_x000d");
        assert_eq!(decode_excel_escapes("snake_case"), "snake_case");
        assert_eq!(decode_excel_escapes("trailing_"), "trailing_");
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A1"), Some(0));
        assert_eq!(column_index("C5"), Some(2));
        assert_eq!(column_index("Z10"), Some(25));
        assert_eq!(column_index("AA1"), Some(26));
        assert_eq!(column_index("$B$2"), Some(1));
        assert_eq!(column_index("XFD1"), Some(16383));
        assert_eq!(column_index("12"), None);
    }

    #[test]
    fn test_cell_kind_mapping() {
        assert_eq!(cell_kind(None, true, false), CellKind::Numeric);
        assert_eq!(cell_kind(Some("n"), true, false), CellKind::Numeric);
        assert_eq!(cell_kind(Some("b"), true, false), CellKind::Bool);
        for t in ["s", "str", "inlineStr", "d", "e", "x"] {
            assert_eq!(cell_kind(Some(t), true, false), CellKind::String);
        }
        assert_eq!(cell_kind(None, false, false), CellKind::String);
        assert_eq!(cell_kind(None, true, true), CellKind::String);
    }

    #[test]
    fn test_read_empty_xlsx() {
        let sheets = read(build_xlsx(&[("Sheet1", "")], None));
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name(), "Sheet1");
        assert_eq!(sheets[0].row_count(), 0);
    }

    #[test]
    fn test_read_typed_cells() {
        let data = concat!(
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1"><v>1.5</v></c><c r="C1" t="b"><v>1</v></c></row>"#,
            r#"<row r="2"><c r="A2" t="inlineStr"><is><t>inline</t></is></c><c r="B2" t="n"><v>-3</v></c><c r="C2" t="e"><v>#DIV/0!</v></c></row>"#,
        );
        let sheets = read(build_xlsx(&[("Data", data)], Some("<si><t>shared</t></si>")));
        let sheet = &sheets[0];

        assert_eq!(sheet.cell(0, 0), &Cell::string("shared"));
        assert_eq!(sheet.cell(0, 1), &Cell::numeric("1.5"));
        assert_eq!(sheet.cell(0, 2), &Cell::boolean("1"));
        assert_eq!(sheet.cell(1, 0), &Cell::string("inline"));
        assert_eq!(sheet.cell(1, 1), &Cell::numeric("-3"));
        assert_eq!(sheet.cell(1, 2), &Cell::string("#DIV/0!"));
    }

    #[test]
    fn test_formula_cells_are_strings() {
        let data = r#"<row r="1"><c r="A1"><f>1+1</f><v>2</v></c><c r="B1" t="str"><f>"a"&amp;"b"</f><v>ab</v></c></row>"#;
        let sheets = read(build_xlsx(&[("F", data)], None));
        assert_eq!(sheets[0].cell(0, 0), &Cell::string("2"));
        assert_eq!(sheets[0].cell(0, 1), &Cell::string("ab"));
    }

    #[test]
    fn test_gaps_are_filled() {
        let data = concat!(
            r#"<row r="1"><c r="A1"><v>1</v></c><c r="C1"><v>3</v></c></row>"#,
            r#"<row r="3"><c r="B3"><v>5</v></c></row>"#,
        );
        let sheets = read(build_xlsx(&[("Gaps", data)], None));
        let sheet = &sheets[0];

        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.rows()[0].len(), 3);
        assert_eq!(sheet.cell(0, 1), &Cell::string(""));
        assert_eq!(sheet.cell(0, 2), &Cell::numeric("3"));
        assert!(sheet.rows()[1].is_empty());
        assert_eq!(sheet.cell(2, 0), &Cell::string(""));
        assert_eq!(sheet.cell(2, 1), &Cell::numeric("5"));
    }

    #[test]
    fn test_blank_cells_are_empty_strings() {
        let data = r#"<row r="1"><c r="A1" s="3"/><c r="B1" s="3"></c><c r="C1"><v>1</v></c></row>"#;
        let sheets = read(build_xlsx(&[("Blank", data)], None));
        let row = &sheets[0].rows()[0];
        assert_eq!(row.cells(), &[Cell::string(""), Cell::string(""), Cell::numeric("1")]);
    }

    #[test]
    fn test_rich_text_shared_string() {
        let sst = concat!(
            r#"<si><r><t>Hello</t></r><r><rPr><b/></rPr><t xml:space="preserve"> World</t></r></si>"#,
            r#"<si><t>kanji</t><rPh sb="0" eb="1"><t>KANA</t></rPh></si>"#,
            r#"<si><t>a_x000a_b</t></si>"#,
        );
        let data = r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c><c r="C1" t="s"><v>2</v></c></row>"#;
        let sheets = read(build_xlsx(&[("S", data)], Some(sst)));
        let texts: Vec<&str> = sheets[0].rows()[0].iter().map(Cell::as_str).collect();
        assert_eq!(texts, vec!["Hello World", "kanji", "a\nb"]);
    }

    #[test]
    fn test_escaped_xml_text() {
        let data = r#"<row r="1"><c r="A1" t="inlineStr"><is><t>a &lt; b &amp; c</t></is></c></row>"#;
        let sheets = read(build_xlsx(&[("E", data)], None));
        assert_eq!(sheets[0].cell(0, 0).as_str(), "a < b & c");
    }

    #[test]
    fn test_sheet_order_preserved() {
        let sheets = read(build_xlsx(&[("Zeta", ""), ("Alpha", ""), ("Mid", "")], None));
        let names: Vec<&str> = sheets.iter().map(Sheet::name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_inline_string_skips_phonetic_runs() {
        let data = r#"<row r="1"><c r="A1" t="inlineStr"><is><t>kanji</t><rPh sb="0" eb="1"><t>KANA</t></rPh></is></c></row>"#;
        let sheets = read(build_xlsx(&[("P", data)], None));
        assert_eq!(sheets[0].cell(0, 0).as_str(), "kanji");
    }

    #[test]
    fn test_row_number_limits() {
        for r in ["0", "1048577", "400000000", "abc", "99999999999999999999999"] {
            let data = format!(r#"<row r="{r}"><c><v>1</v></c></row>"#);
            let err = XlsxReader::read(Cursor::new(build_xlsx(&[("R", data.as_str())], None)))
                .unwrap_err();
            assert!(matches!(err, XlsxError::Parse(_)), "r = {r}");
        }

        // Also checked on self-closing rows
        let err = XlsxReader::read(Cursor::new(build_xlsx(
            &[("R", r#"<row r="400000000"/>"#)],
            None,
        )))
        .unwrap_err();
        assert!(matches!(err, XlsxError::Parse(_)));
    }

    #[test]
    fn test_column_limits() {
        for cell_ref in ["XFE1", "ZZZZ1", "ZZZZZZZZZZZZZZZZ1", "12"] {
            let data = format!(r#"<row r="1"><c r="{cell_ref}"><v>1</v></c></row>"#);
            let err = XlsxReader::read(Cursor::new(build_xlsx(&[("C", data.as_str())], None)))
                .unwrap_err();
            assert!(matches!(err, XlsxError::Parse(_)), "ref = {cell_ref}");
        }

        let err = XlsxReader::read(Cursor::new(build_xlsx(
            &[("C", r#"<row r="1"><c r="XFE1" s="1"/></row>"#)],
            None,
        )))
        .unwrap_err();
        assert!(matches!(err, XlsxError::Parse(_)));
    }

    #[test]
    fn test_last_column_accepted() {
        let data = r#"<row r="1"><c r="XFD1"><v>7</v></c></row>"#;
        let sheets = read(build_xlsx(&[("C", data)], None));
        assert_eq!(sheets[0].rows()[0].len(), 16_384);
        assert_eq!(sheets[0].cell(0, 16_383), &Cell::numeric("7"));
    }

    #[test]
    fn test_bad_shared_string_index() {
        let data = r#"<row r="1"><c r="A1" t="s"><v>7</v></c></row>"#;
        let err = XlsxReader::read(Cursor::new(build_xlsx(&[("S", data)], None))).unwrap_err();
        assert!(matches!(err, XlsxError::Parse(_)));
    }

    #[test]
    fn test_not_a_zip() {
        let err = XlsxReader::read(Cursor::new(b"id,name\n1,a\n".to_vec())).unwrap_err();
        assert!(matches!(err, XlsxError::Zip(_)));
    }

    #[test]
    fn test_missing_content_types() {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            zip.start_file("hello.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"hi").unwrap();
            zip.finish().unwrap();
        }
        let err = XlsxReader::read(Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, XlsxError::InvalidFormat(_)));
    }
}
