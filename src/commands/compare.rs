use crate::OutputFormat;
use crate::areas::session::Session;
use crate::artifacts::comparison::filter::ReportFilter;
use crate::artifacts::comparison::relative_path::RelativePath;
use crate::artifacts::comparison::report::{ComparisonReport, FileDifference};
use anyhow::Context;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use std::collections::BTreeMap;

const ROOT_GROUP: &str = "[Root]";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    pub format: OutputFormat,
    pub filter: ReportFilter,
}

impl Session {
    pub fn compare(&self, opts: &DisplayOptions) -> anyhow::Result<()> {
        let report = self
            .report()
            .with_context(|| {
                format!(
                    "Failed to compare {:?} with {:?}",
                    self.first().path(),
                    self.second().path()
                )
            })?
            .sorted();

        match opts.format {
            OutputFormat::Human => self.show_human(&report, opts.filter)?,
            OutputFormat::Porcelain => self.show_porcelain(&report, opts.filter)?,
        }

        self.writer().flush()?;

        Ok(())
    }

    fn show_human(&self, report: &ComparisonReport, filter: ReportFilter) -> anyhow::Result<()> {
        self.show_summary(report)?;

        if filter.contains(ReportFilter::ONLY_IN_FIRST) && !report.only_in_first.is_empty() {
            writeln!(self.writer(), "\n{}", "FILES ONLY IN DIRECTORY 1:".red().bold())?;
            for path in &report.only_in_first {
                writeln!(self.writer(), "  {}", path)?;
            }
        }

        if filter.contains(ReportFilter::ONLY_IN_SECOND) && !report.only_in_second.is_empty() {
            writeln!(self.writer(), "\n{}", "FILES ONLY IN DIRECTORY 2:".yellow().bold())?;
            for path in &report.only_in_second {
                writeln!(self.writer(), "  {}", path)?;
            }
        }

        if filter.contains(ReportFilter::DIFFERENT) && !report.different.is_empty() {
            writeln!(self.writer(), "\n{}", "FILES THAT DIFFER:".magenta().bold())?;
            for difference in &report.different {
                self.show_difference(difference)?;
            }
        }

        if filter.contains(ReportFilter::IDENTICAL) && !report.identical.is_empty() {
            writeln!(self.writer(), "\n{}", "IDENTICAL FILES:".green().bold())?;
            for (dir, names) in group_by_directory(&report.identical) {
                let dir = if dir.is_empty() { ROOT_GROUP } else { dir };
                writeln!(self.writer(), "  In {}:", dir)?;
                for name in names {
                    writeln!(self.writer(), "    {}", name)?;
                }
            }
        }

        Ok(())
    }

    fn show_summary(&self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(self.writer(), "Comparison between:")?;
        writeln!(self.writer(), "  1: {}", self.first().path().display())?;
        writeln!(self.writer(), "  2: {}", self.second().path().display())?;
        writeln!(self.writer())?;
        writeln!(self.writer(), "Results summary:")?;
        writeln!(
            self.writer(),
            "  Files only in directory 1: {}",
            report.only_in_first.len()
        )?;
        writeln!(
            self.writer(),
            "  Files only in directory 2: {}",
            report.only_in_second.len()
        )?;
        writeln!(
            self.writer(),
            "  Files with differences: {}",
            report.different.len()
        )?;
        writeln!(self.writer(), "  Identical files: {}", report.identical.len())?;
        writeln!(self.writer(), "  Total files compared: {}", report.total())?;

        Ok(())
    }

    fn show_difference(&self, difference: &FileDifference) -> anyhow::Result<()> {
        writeln!(self.writer(), "  {}", difference.relative_path)?;
        writeln!(
            self.writer(),
            "    Size: {} vs {} bytes",
            difference.size1, difference.size2
        )?;
        writeln!(
            self.writer(),
            "    Modified: {} vs {}",
            local_timestamp(&difference.modified1),
            local_timestamp(&difference.modified2)
        )?;

        if let Some(content_equal) = difference.content_equal {
            let verdict = if content_equal { "same" } else { "differs" };
            writeln!(self.writer(), "    Content: {}", verdict)?;
        }

        Ok(())
    }

    fn show_porcelain(&self, report: &ComparisonReport, filter: ReportFilter) -> anyhow::Result<()> {
        let mut lines = Vec::<(&RelativePath, char)>::new();

        if filter.contains(ReportFilter::ONLY_IN_FIRST) {
            lines.extend(report.only_in_first.iter().map(|path| (path, '<')));
        }
        if filter.contains(ReportFilter::ONLY_IN_SECOND) {
            lines.extend(report.only_in_second.iter().map(|path| (path, '>')));
        }
        if filter.contains(ReportFilter::DIFFERENT) {
            lines.extend(report.different.iter().map(|diff| (&diff.relative_path, 'M')));
        }
        if filter.contains(ReportFilter::IDENTICAL) {
            lines.extend(report.identical.iter().map(|path| (path, '=')));
        }

        // a path can sit in both "only" buckets when it is a file on one side
        // and a directory on the other, hence the status as a tie-breaker
        lines.sort();

        for (path, status) in lines {
            writeln!(self.writer(), "{} {}", status, path)?;
        }

        Ok(())
    }
}

fn local_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Groups paths by their parent directory; entries directly under the root
/// share the empty key, which sorts first.
fn group_by_directory(paths: &[RelativePath]) -> BTreeMap<&str, Vec<&str>> {
    let mut groups = BTreeMap::<&str, Vec<&str>>::new();

    for path in paths {
        groups
            .entry(path.parent())
            .or_default()
            .push(path.file_name());
    }

    groups
}
