//! Console output formatter for grouping results

use colored::{ColoredString, Colorize};
use serde::Serialize;
use teamforge_domain::{Allocation, Category, GroupResult, Member};

/// Formats grouping results and rosters for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the result of a single group build
    pub fn format_group(result: &GroupResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Generated Group"));
        output.push('\n');

        if result.members.is_empty() {
            output.push_str(&format!(
                "\n{} (reward {})\n",
                "No group could be formed".red().bold(),
                result.reward
            ));
            output.push_str(&Self::footer());
            return output;
        }

        output.push('\n');
        for member in &result.members {
            output.push_str(&Self::member_line(member));
        }

        let status = if result.is_valid() {
            "valid".green()
        } else {
            "invalid size".red()
        };
        output.push_str(&format!(
            "\n{} {}  {} {}  {} {} ({})\n",
            "Size:".cyan().bold(),
            result.size(),
            "Reward:".cyan().bold(),
            Self::reward(result.reward),
            "Steps:".cyan().bold(),
            result.steps,
            status
        ));

        if result.capped {
            output.push_str(&format!(
                "{}\n",
                "Step limit reached before the group was sealed".yellow()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a full-roster allocation
    pub fn format_allocation(allocation: &Allocation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Group Allocation"));
        output.push('\n');

        if allocation.groups.is_empty() {
            output.push_str(&format!("\n{}\n", "No balanced group could be formed".yellow()));
        }

        for group in &allocation.groups {
            output.push_str(&Self::section_header(&format!(
                "Group {} ({} members, reward {})",
                group.group_id,
                group.size(),
                group.reward
            )));
            for member in &group.members {
                output.push_str(&Self::member_line(member));
            }
        }

        if !allocation.leftover.is_empty() {
            output.push_str(&Self::section_header("Unplaced"));
            for member in &allocation.leftover {
                output.push_str(&Self::member_line(member));
            }
        }

        output.push('\n');
        if allocation.is_complete() {
            output.push_str(&format!(
                "{}\n",
                format!("All {} members were grouped", allocation.placed()).green()
            ));
        } else {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "{} member(s) could not be grouped",
                    allocation.unplaced()
                )
                .yellow()
                .bold()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the roster listing
    pub fn format_members(members: &[Member]) -> String {
        if members.is_empty() {
            return format!("{}\n", "No members registered".dimmed());
        }

        let mut output = format!(
            "{} {}\n\n",
            "Roster:".cyan().bold(),
            format!("{} members", members.len()).dimmed()
        );
        for member in members {
            output.push_str(&Self::member_line(member));
        }
        output
    }

    /// Format a confirmation for newly registered members
    pub fn format_registered(members: &[Member]) -> String {
        let mut output = format!(
            "{}\n",
            format!("Registered {} member(s)", members.len()).green().bold()
        );
        for member in members {
            output.push_str(&Self::member_line(member));
        }
        output
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn member_line(member: &Member) -> String {
        format!(
            "  {:>4}  {:<24} {}\n",
            format!("#{}", member.id).dimmed(),
            member.name,
            Self::category(member.category)
        )
    }

    fn category(category: Category) -> ColoredString {
        match category {
            Category::Senior => category.as_str().magenta(),
            Category::Intermediate => category.as_str().blue(),
            Category::Junior => category.as_str().green(),
        }
    }

    fn reward(reward: i32) -> ColoredString {
        if reward > 0 {
            reward.to_string().green().bold()
        } else {
            reward.to_string().red().bold()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
