//
//  teamcity-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders CLI results either as human-readable tables or as JSON.
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`json`]: JSON serialization utilities using `serde_json`
//! - [`resources`]: Table layouts for the TeamCity resource types
//!
//! ## Example
//!
//! ```rust,ignore
//! use teamcity_client::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&client.get_projects()?)?;
//! writer.write_success("Done");
//! ```

mod json;
mod resources;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables with optional color.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting.
    Json,
}

impl OutputFormat {
    /// Parses a configured format name. Anything but "json" means table.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// A type that can be listed as one row of a table.
pub trait TableOutput {
    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// The cells of this row, in header order.
    fn row(&self, color: bool) -> Vec<String>;
}

/// A type that can be shown as a list of labelled fields.
pub trait DetailOutput {
    /// Label/value pairs in display order.
    fn fields(&self, color: bool) -> Vec<(&'static str, String)>;
}

/// Writes values in the selected [`OutputFormat`].
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer; color follows the terminal's capabilities.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Returns the format this writer uses.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns whether colored output is enabled.
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes a single value as JSON or as labelled fields.
    pub fn write<T: Serialize + DetailOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => {
                for (key, val) in value.fields(self.color) {
                    print_field(key, &val, self.color);
                }
            }
        }
        Ok(())
    }

    /// Writes a list of values as JSON or as a table.
    ///
    /// An empty list prints "No results" in table mode and `[]` in JSON mode.
    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(values)?,
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info("No results");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    /// Writes an informational message. Suppressed in JSON mode.
    pub fn write_info(&self, msg: &str) {
        if self.format == OutputFormat::Table {
            println!("{}", msg);
        }
    }

    /// Writes a success message. Suppressed in JSON mode.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.format != OutputFormat::Table {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Prints a `key: value` line, dimming the key when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
