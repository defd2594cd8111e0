//! Command implementations for tessctl.

use crate::client::TessClient;
use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use tess_common::api::{StepResponse, TicketCreateRequest};

pub async fn diagnose(client: &TessClient, description: &str, json: bool) -> Result<()> {
    let result = client.diagnose(description).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.diagnosis.bold());
    println!(
        "{} {} ({:.0}% confidence)",
        "Issue type:".dimmed(),
        result.issue_type.cyan(),
        result.confidence * 100.0
    );

    if !result.follow_up_questions.is_empty() {
        println!("\n{}", "To narrow this down:".bold());
        for question in &result.follow_up_questions {
            println!("  - {question}");
        }
    }

    if !result.solutions.is_empty() {
        println!("\n{}", "Things to try:".bold());
        for (i, solution) in result.solutions.iter().enumerate() {
            println!("  {}. {solution}", i + 1);
        }
    }

    Ok(())
}

pub async fn troubleshoot(client: &TessClient, ticket: Option<String>) -> Result<()> {
    let mut step = client.start_troubleshooting().await?;

    loop {
        print_step(&step);

        if step.options.is_empty() {
            break;
        }

        let Some(choice) = read_choice(&step)? else {
            println!("{}", "Session ended.".dimmed());
            break;
        };

        if let Some(ticket_id) = &ticket {
            client.add_ticket_step(ticket_id, &step.step_id, &choice).await?;
        }

        step = client.next_step(&step.step_id, &choice).await?;
    }

    Ok(())
}

fn print_step(step: &StepResponse) {
    println!("\n{}", step.question.bold());
    if let Some(solution) = &step.solution {
        println!("{}", solution.green());
    }
    for (i, option) in step.options.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
}

/// Read an option by number. Returns None when the user quits.
fn read_choice(step: &StepResponse) -> Result<Option<String>> {
    loop {
        print!("{} ", "Choose an option (q to quit):".dimmed());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();

        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= step.options.len() => {
                return Ok(Some(step.options[n - 1].clone()));
            }
            _ => println!(
                "{}",
                format!("Enter a number between 1 and {}", step.options.len()).yellow()
            ),
        }
    }
}

pub async fn ticket_create(
    client: &TessClient,
    email: String,
    name: String,
    issue_type: String,
    description: String,
) -> Result<()> {
    if description.is_empty() {
        return Err(anyhow!("a ticket needs a description"));
    }

    let ticket = client
        .create_ticket(&TicketCreateRequest {
            user_email: email,
            user_name: name,
            issue_type,
            description,
        })
        .await?;

    println!("{} {}", "Ticket created:".green().bold(), ticket.ticket_id);
    Ok(())
}

pub async fn ticket_show(client: &TessClient, ticket_id: &str) -> Result<()> {
    let ticket = client.get_ticket(ticket_id).await?;

    println!("{} {}", "Ticket".bold(), ticket.ticket_id);
    println!("  {} {} <{}>", "User:".dimmed(), ticket.user_name, ticket.user_email);
    println!("  {} {}", "Issue:".dimmed(), ticket.issue_type.cyan());
    println!("  {} {:?}", "Status:".dimmed(), ticket.status);
    println!("  {} {}", "Opened:".dimmed(), ticket.created_at);
    println!("  {}", ticket.description);

    if !ticket.steps_taken.is_empty() {
        println!("\n{}", "Troubleshooting history:".bold());
        for step in &ticket.steps_taken {
            println!("  {} -> {}", step.step_id, step.choice);
        }
    }

    Ok(())
}

pub async fn health(client: &TessClient) -> Result<()> {
    let health = client.health().await?;

    println!(
        "{} {} (v{}, up {}s)",
        "Daemon:".bold(),
        health.status.green(),
        health.version,
        health.uptime_seconds
    );
    println!(
        "  {} categories, {} troubleshooting steps",
        health.categories_available, health.tree_steps_available
    );

    Ok(())
}
