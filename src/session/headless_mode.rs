//! Headless mode execution

use super::{SessionData, messages::SessionMessage};
use crate::dashboard::Panel;
use log::debug;
use std::error::Error;

/// Runs one load cycle and prints each panel the display region passes through.
///
/// # Returns
/// * `Ok(())` - The weather panel was printed
/// * `Err` - The cycle ended on the error panel
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    session.controller.load_weather_data();
    print!("{}", session.controller.panel());

    let outcome = session
        .outcome_receiver
        .recv()
        .await
        .ok_or("Load cycle ended without reporting")?;
    session.controller.apply(outcome);
    debug!("Applied load cycle #{}", session.controller.cycle());

    let panel = session.controller.panel();
    println!();
    print!("{}", panel);

    match panel {
        Panel::Error { message, .. } => {
            if let Some(event) = session.controller.activity_logs().back() {
                SessionMessage::error(event.msg.clone()).print();
            }
            Err(message.into())
        }
        _ => Ok(()),
    }
}
