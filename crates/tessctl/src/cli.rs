//! CLI - command-line argument parsing.
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

/// Tess CLI
#[derive(Parser)]
#[command(name = "tessctl")]
#[command(about = "Tess - tech-support assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Daemon address (overrides the default local daemon)
    #[arg(long, global = true, default_value = "http://127.0.0.1:7870")]
    pub addr: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose a free-text problem description
    Diagnose {
        /// The problem, in your own words
        description: Vec<String>,

        /// Output raw JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Walk the troubleshooting tree interactively
    Troubleshoot {
        /// Record each step on an existing ticket
        #[arg(long)]
        ticket: Option<String>,
    },

    /// Manage support tickets
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Show daemon health
    Health,
}

/// Ticket subcommands
#[derive(Subcommand)]
pub enum TicketCommands {
    /// Open a new ticket
    Create {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        issue_type: String,

        /// Free-text description of the problem
        description: Vec<String>,
    },

    /// Show a ticket by id
    Show { ticket_id: String },
}
