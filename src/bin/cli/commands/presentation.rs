//! Presentation command handlers for the PPT-GEN CLI

use std::time::Duration;

use pptgen_client::types::{GenerationRequest, PresentationInfo, Template};
use pptgen_client::{
    ClientConfig, ClientError, ClientResult, GenerationApiClient, GenerationApiConfig,
};
use tracing::debug;

use crate::PresentationCommands;

/// Upper bound on wait-mode polling, about five minutes at the default interval
const MAX_POLL_ATTEMPTS: u32 = 150;

pub async fn handle_presentation_command(
    cmd: PresentationCommands,
    config: &ClientConfig,
) -> ClientResult<()> {
    let api_config = GenerationApiConfig::from(&config.api);
    let client = GenerationApiClient::new(api_config)?;

    match cmd {
        PresentationCommands::Generate {
            topic,
            template,
            include_code,
            wait,
        } => {
            let template: Template = template.parse()?;

            println!(
                "Submitting generation request: \"{}\" ({} template)",
                topic, template
            );

            let request = GenerationRequest {
                topic,
                template: template.id(),
                include_code,
            };

            match client.generate(request).await {
                Ok(response) => {
                    println!(
                        "✓ {}",
                        response
                            .message
                            .as_deref()
                            .unwrap_or("Generation request accepted")
                    );

                    if let Some(id) = response.presentation_id.as_deref() {
                        println!("  Presentation ID: {}", id);
                        println!("  Download URL: {}", client.download_url(id));
                    } else if wait {
                        let info =
                            wait_for_result(&client, config.cli.poll_interval_ms).await?;
                        print_result(&client, &info);
                    } else {
                        println!("  Run 'pptgen-cli presentation info' to fetch the download link.");
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to generate presentation: {}", e);
                    return Err(e);
                }
            }
        }
        PresentationCommands::Info { wait } => {
            let result = if wait {
                wait_for_result(&client, config.cli.poll_interval_ms).await
            } else {
                client.result_info().await
            };

            match result {
                Ok(info) => print_result(&client, &info),
                Err(e) => {
                    eprintln!("✗ Failed to get presentation info: {}", e);
                    return Err(e);
                }
            }
        }
        PresentationCommands::Download {
            presentation_id,
            output,
        } => {
            let presentation_id = match presentation_id {
                Some(id) => id,
                None => {
                    println!("No identifier given, fetching current result info...");
                    match client.result_info().await {
                        Ok(info) => info.presentation_id,
                        Err(e) => {
                            eprintln!("✗ Failed to get presentation info: {}", e);
                            return Err(e);
                        }
                    }
                }
            };

            match client.download(&presentation_id).await {
                Ok(bytes) => {
                    std::fs::write(&output, &bytes)?;
                    println!(
                        "✓ Saved presentation {} to {} ({} bytes)",
                        presentation_id,
                        output,
                        bytes.len()
                    );
                }
                Err(e) => {
                    eprintln!("✗ Failed to download presentation: {}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}

fn print_result(client: &GenerationApiClient, info: &PresentationInfo) {
    println!("✓ Presentation ready!");
    println!("  Presentation ID: {}", info.presentation_id);
    if let Some(message) = info.message.as_deref() {
        println!("  Message: {}", message);
    }
    println!("  Download URL: {}", client.download_url(&info.presentation_id));
}

/// Poll the result endpoint until a presentation is available
///
/// Retry UX is owned by the CLI: the client performs exactly one request
/// per call. Polls while the result is not ready (HTTP 404) or the failure
/// looks transient, and gives up on any other error or once the attempts
/// are exhausted.
async fn wait_for_result(
    client: &GenerationApiClient,
    poll_interval_ms: u64,
) -> ClientResult<PresentationInfo> {
    println!("Waiting for the presentation to be ready...");

    let interval = Duration::from_millis(poll_interval_ms);
    let mut attempts = 0;

    loop {
        match client.result_info().await {
            Ok(info) => return Ok(info),
            Err(e) if attempts < MAX_POLL_ATTEMPTS && should_keep_polling(&e) => {
                attempts += 1;
                debug!(attempt = attempts, error = %e, "Result not ready yet");
                tokio::time::sleep(interval).await;
            }
            Err(e) => return Err(e),
        }
    }
}

fn should_keep_polling(error: &ClientError) -> bool {
    matches!(error, ClientError::ApiError { status: 404, .. }) || error.is_recoverable()
}
