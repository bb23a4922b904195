use std::env;
use std::io::{Write, stdout};

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::chat::{BoxedTransport, ChatClient, DirectTransport, RelayTransport};
use crate::core::AppConfig;

pub async fn run(direct: bool) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let transport: BoxedTransport = if direct {
        let config = AppConfig::default();
        Box::new(DirectTransport::new(&config.bot_api_url))
    } else if let Ok(url) = env::var("CHATRELAY_API_URL") {
        Box::new(RelayTransport::new(&url))
    } else {
        Box::new(RelayTransport::default())
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let mut client = ChatClient::with_updates(transport, tx);

    // Print reveal deltas as they arrive so the reply appears word
    // by word while `send` is still running
    let printer = tokio::spawn(async move {
        while let Some(delta) = rx.recv().await {
            print!("{}", delta);
            let _ = stdout().flush();
        }
    });

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                client.send(line.as_str()).await;
                println!();
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    // Dropping the client closes the delta channel and ends the
    // printer task
    drop(client);
    let _ = printer.await;

    Ok(())
}
