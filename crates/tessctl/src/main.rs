//! Tess Control - CLI client for the Tess daemon.

mod cli;
mod client;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, TicketCommands};
use client::TessClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = TessClient::new(&cli.addr)?;

    match cli.command {
        Commands::Diagnose { description, json } => {
            commands::diagnose(&client, &description.join(" "), json).await
        }
        Commands::Troubleshoot { ticket } => commands::troubleshoot(&client, ticket).await,
        Commands::Ticket { action } => match action {
            TicketCommands::Create {
                email,
                name,
                issue_type,
                description,
            } => {
                commands::ticket_create(&client, email, name, issue_type, description.join(" "))
                    .await
            }
            TicketCommands::Show { ticket_id } => commands::ticket_show(&client, &ticket_id).await,
        },
        Commands::Health => commands::health(&client).await,
    }
}
