use cheeper::api::TestDataReport;
use cheeper::model::{Message, User};
use colored::Colorize;

pub(super) fn print_user(user: &User) {
    println!(
        "{} {} ({})",
        "Created user".green(),
        user.login.bold(),
        user.name
    );
}

pub(super) fn print_names(names: &[String]) {
    for name in names {
        println!("{}", name.green());
    }
}

pub(super) fn print_count(count: u64) {
    println!("{}", count.to_string().green());
}

pub(super) fn print_messages(messages: &[Message]) {
    for m in messages {
        println!(
            "{} {} {} {}",
            m.created_at.format("%H:%M %d-%m-%Y").to_string().yellow(),
            m.id.to_string().dimmed(),
            m.user_id.to_string().dimmed(),
            m.text.green()
        );
    }
}

pub(super) fn print_report(report: &TestDataReport) {
    println!(
        "{}",
        format!(
            "Added {} users, {} friendships, {} messages",
            report.users, report.friendships, report.messages
        )
        .green()
    );
}

pub(super) fn print_times(label: &str, times: &[f64]) {
    for (i, t) in times.iter().enumerate() {
        println!("time {} {}: {}", label, i, format!("{:.6}", t).green());
    }
}

pub(super) fn print_info(text: &str) {
    println!("{}", text.dimmed());
}
