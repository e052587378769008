// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use crate::chat::{ChatWidget, Navigator, Origin};
use crate::contact::{ContactForm, SubmitResult};
use crate::core::{ConfigManager, EmailJsClient};
use crate::page::{NavigationTarget, PageLayout};
use crate::responder::Responder;
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio site backend and site assistant")]
pub struct PortfolioCli {
    #[command(subcommand)]
    pub command: Option<PortfolioCommand>,
}

#[derive(Subcommand)]
pub enum PortfolioCommand {
    /// Run the HTTP API (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Talk to the site assistant on the terminal
    Chat,
    /// Ask the assistant a single question
    Ask { text: String },
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

/// Prints navigation instead of scrolling a page.
struct ConsoleNavigator {
    layout: PageLayout,
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: NavigationTarget) {
        match self.layout.scroll_request(target) {
            Some(request) => println!("  -> scrolling to #{} (y = {})", target, request.top),
            None => println!("  -> no #{} section on the page", target),
        }
    }
}

pub async fn handle_command(cli: PortfolioCli, mut config: ConfigManager) -> Result<()> {
    match cli.command.unwrap_or(PortfolioCommand::Serve { port: None }) {
        PortfolioCommand::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            start_web_server(config).await
        }

        PortfolioCommand::Ask { text } => {
            let reply = Responder::default().respond(&text);
            println!("{}", reply.text);
            if let Some(target) = reply.navigation {
                println!("  -> #{}", target);
            }
            Ok(())
        }

        PortfolioCommand::Chat => run_chat(&config).await,

        PortfolioCommand::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let client = EmailJsClient::new(config.email.clone())
                .context("Contact form is not configured")?;
            let form = ContactForm::new(Arc::new(client));
            form.update(|fields| {
                fields.name = name;
                fields.email = email;
                fields.subject = subject;
                fields.message = message;
            });

            match form.submit().await {
                SubmitResult::Sent => {
                    info!("Contact message sent");
                    println!("Thank you! Your message has been sent.");
                    Ok(())
                }
                SubmitResult::Failed { alert } => {
                    error!("Contact message failed");
                    anyhow::bail!(alert)
                }
                SubmitResult::Ignored => Ok(()),
            }
        }
    }
}

async fn run_chat(config: &ConfigManager) -> Result<()> {
    let navigator = Arc::new(ConsoleNavigator {
        layout: config.page.layout(),
    });
    let widget = ChatWidget::new(Responder::default(), navigator, config.chat.timing());
    widget.open();

    let snapshot = widget.wait_for_welcome().await;
    for message in &snapshot.messages {
        println!("assistant: {}", message.text);
    }
    let labels: Vec<&str> = snapshot.quick_replies.iter().map(|q| q.label).collect();
    println!("(quick replies: {}; empty line to quit)", labels.join(", "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            break;
        }

        let outcome = widget
            .quick_reply(line.trim())
            .unwrap_or_else(|| widget.submit(&line));
        if !outcome.is_accepted() {
            continue;
        }

        println!("assistant is typing...");
        if let Some(reply) = widget.wait_for_reply().await {
            if reply.origin == Origin::Assistant {
                println!("assistant: {}", reply.text);
            }
        }
    }

    widget.close();
    widget.teardown();
    Ok(())
}
