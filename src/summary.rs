//! The summary screen: title banner, usage line, grouped command table.

use comfy_table::{presets::NOTHING, Cell, Table};
use tracing::debug;

use crate::descriptor::{ApplicationDescriptor, CommandDescriptor};
use crate::error::SummaryError;
use crate::output::OutputSink;
use crate::style::{table_color, SummaryStyle};

/// Bucket commands by namespace prefix into an ordered mapping.
///
/// Keys come back in ascending lexicographic order (the empty prefix first
/// when present); within a group, commands keep their input order.
pub fn group_by_namespace(
    commands: &[CommandDescriptor],
) -> Vec<(&str, Vec<&CommandDescriptor>)> {
    let mut groups: std::collections::BTreeMap<&str, Vec<&CommandDescriptor>> =
        std::collections::BTreeMap::new();
    for command in commands {
        groups.entry(command.namespace()).or_default().push(command);
    }
    groups.into_iter().collect()
}

/// Renders the application summary screen to an output sink.
///
/// Holds only host-supplied configuration (the invocable binary name and the
/// color scheme); no state survives or is shared between render calls, so a
/// renderer can be reused freely.
#[derive(Debug, Clone)]
pub struct SummaryRenderer {
    binary: String,
    style: SummaryStyle,
}

impl SummaryRenderer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            style: SummaryStyle::default(),
        }
    }

    pub fn with_style(mut self, style: SummaryStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the full summary: title, usage, command table, trailing blank
    /// line. Descriptor contents are interpolated verbatim; the only failure
    /// is a sink write error.
    pub fn render(
        &self,
        app: &ApplicationDescriptor,
        out: &mut dyn OutputSink,
    ) -> Result<(), SummaryError> {
        self.describe_title(app, out)?;
        self.describe_usage(out)?;
        self.describe_commands(app, out)?;
        out.write_raw("\n")?;
        Ok(())
    }

    fn describe_title(
        &self,
        app: &ApplicationDescriptor,
        out: &mut dyn OutputSink,
    ) -> Result<(), SummaryError> {
        out.write_markup(&format!(
            "\n<fg={};options=bold>{} </> <fg={};options=bold>{}</>\n\n",
            self.style.title_color, app.name, self.style.version_color, app.version
        ))?;
        Ok(())
    }

    fn describe_usage(&self, out: &mut dyn OutputSink) -> Result<(), SummaryError> {
        out.write_markup(&format!(
            "<fg={};options=bold>USAGE:</> {} <command> [options] [arguments]\n",
            self.style.usage_color, self.binary
        ))?;
        Ok(())
    }

    /// One blank row opens each namespace group, the ungrouped set included.
    /// The blank rows stand in for section headers.
    fn describe_commands(
        &self,
        app: &ApplicationDescriptor,
        out: &mut dyn OutputSink,
    ) -> Result<(), SummaryError> {
        let groups = group_by_namespace(&app.commands);
        debug!(
            commands = app.commands.len(),
            groups = groups.len(),
            "rendering command table"
        );
        if groups.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(NOTHING);
        let command_color = if out.is_decorated() {
            table.enforce_styling();
            table_color(&self.style.command_color)
        } else {
            None
        };

        for (_, commands) in &groups {
            table.add_row(vec![Cell::new(""), Cell::new("")]);
            for command in commands {
                let name = match command_color {
                    Some(color) => Cell::new(&command.name).fg(color),
                    None => Cell::new(&command.name),
                };
                table.add_row(vec![name, Cell::new(&command.description)]);
            }
        }

        out.write_raw(&table.to_string())?;
        out.write_raw("\n")?;
        Ok(())
    }
}
