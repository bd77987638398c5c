//!
//! XLSX worksheet for benchmark history.
//!

use std::collections::HashMap;
use std::collections::HashSet;

///
/// XLSX worksheet for benchmark history: a row per measurement and a column per run.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Measurement row indexes in the worksheet.
    pub rows: HashMap<String, u32>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    /// Maximum worksheet name length allowed by Excel.
    const NAME_MAX_LENGTH: usize = 31;

    /// Worksheet name used when nothing remains after sanitizing.
    const NAME_FALLBACK: &'static str = "Benchmark";

    /// Worksheet name reserved by Excel.
    const NAME_RESERVED: &'static str = "History";

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(Self::sanitize_name(name))?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            rows: HashMap::new(),
            headers,
        })
    }

    ///
    /// Adds a new column for a run.
    ///
    pub fn add_run_column(&mut self, caption: &str, run_index: u16) -> anyhow::Result<()> {
        let column_index = (self.headers.len() as u16) + run_index;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            caption,
            &Self::column_header_format(),
        )?;
        Ok(())
    }

    ///
    /// Adds a new row for a measurement if needed and writes a value.
    ///
    pub fn write_value(
        &mut self,
        name: &str,
        unit: &str,
        run_index: u16,
        value: f64,
    ) -> anyhow::Result<()> {
        let row_index = if let Some(index) = self.rows.get(name) {
            *index
        } else {
            let row_index = (self.rows.len() as u32) + 1;
            self.rows.insert(name.to_owned(), row_index);

            self.worksheet
                .write_with_format(row_index, 0, name, &Self::row_header_format())?;
            self.worksheet
                .write_with_format(row_index, 1, unit, &Self::row_header_format())?;

            row_index
        };

        self.worksheet.write_with_format(
            row_index,
            (self.headers.len() as u16) + run_index,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Adds a column with the relative change between two run columns.
    ///
    pub fn set_diffs(
        &mut self,
        previous_run_index: u16,
        latest_run_index: u16,
        total_runs: u16,
    ) -> anyhow::Result<()> {
        let column_index = (self.headers.len() as u16) + total_runs;
        self.worksheet.write_with_format(
            0,
            column_index,
            "Change",
            &Self::column_header_format(),
        )?;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;

        let previous_column =
            Self::column_identifier((self.headers.len() as u16) + previous_run_index);
        let latest_column = Self::column_identifier((self.headers.len() as u16) + latest_run_index);
        for row_index in 1..=self.rows.len() {
            let row_number = row_index + 1;
            self.worksheet.write_formula_with_format(
                row_index as u32,
                column_index,
                format!(
                    r#"=IF(AND({previous_column}{row_number}<>"", {latest_column}{row_number}<>"", {previous_column}{row_number}<>0), ({latest_column}{row_number}-{previous_column}{row_number}) / {previous_column}{row_number}, "")"#,
                )
                .as_str(),
                &Self::percent_format(),
            )?;
        }

        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier by its zero-based index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut number = (index as u32) + 1;

        while number > 0 {
            let remainder = (number - 1) % 26;
            identifier.insert(0, (b'A' + remainder as u8) as char);
            number = (number - 1) / 26;
        }

        identifier
    }

    ///
    /// Replaces characters and names Excel forbids in worksheet names and truncates the name.
    ///
    pub fn sanitize_name(name: &str) -> String {
        let name: String = name
            .chars()
            .map(|character| match character {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                character => character,
            })
            .take(Self::NAME_MAX_LENGTH)
            .collect();
        let name = name.trim_matches('\'');
        if name.is_empty() {
            Self::NAME_FALLBACK.to_owned()
        } else if name.eq_ignore_ascii_case(Self::NAME_RESERVED) {
            format!("{name}_")
        } else {
            name.to_owned()
        }
    }

    ///
    /// Returns a sanitized name not yet present in `used_names`.
    ///
    /// Excel compares worksheet names case-insensitively, so `used_names` holds
    /// lowercase names. Clashing names are shortened and get a `~N` suffix.
    ///
    pub fn unique_name(name: &str, used_names: &HashSet<String>) -> String {
        let name = Self::sanitize_name(name);
        if !used_names.contains(&name.to_lowercase()) {
            return name;
        }

        let mut index: usize = 2;
        loop {
            let suffix = format!("~{index}");
            let prefix: String = name
                .chars()
                .take(Self::NAME_MAX_LENGTH - suffix.len())
                .collect();
            let candidate = format!("{prefix}{suffix}");
            if !used_names.contains(&candidate.to_lowercase()) {
                return candidate;
            }
            index += 1;
        }
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(16);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_text_wrap();
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_num_format("#,##0.###");
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_num_format("0.000%");
        format
    }
}
