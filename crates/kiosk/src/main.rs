//! # Kiosk demo
//!
//! Walks through one full order on the kiosk, printing each screen, then runs the
//! divisor finder and the menu roulette.
//!
//! Configuration comes from `KIOSK_CONFIG` when set, the bundled menu otherwise.
//! `RUST_LOG` controls log output.

use kiosk::config::KioskConfig;
use kiosk::divisor::DivisorReport;
use kiosk::lifecycle::KioskSystem;
use kiosk::render::{divisor_error_message, notice_message, roulette_error_message, PaymentScreen};
use kiosk::roulette::Roulette;
use session_actor::telemetry::setup_tracing;
use session_actor::SessionAccess;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = KioskConfig::from_env().map_err(|e| e.to_string())?;
    let reveal_delay = config.roulette.reveal_delay();
    info!("Starting kiosk demo");

    let system = KioskSystem::new(config).map_err(|e| e.to_string())?;
    let client = &system.client;
    let methods = system.payment_methods().to_vec();

    let id = client.open_session().await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("ordering", session = %id);
    async {
        println!("{}", client.view(id, &methods).await.map_err(|e| e.to_string())?);

        // Nothing in the cart yet
        let result = client.proceed_to_payment(id).await;
        println!("{}", notice_message(&result));

        for name in ["불고기 버거", "불고기 버거", "콜라"] {
            let result = client.add_menu_item(id, name).await;
            println!("{}", notice_message(&result));
        }

        let result = client.change_quantity(id, "콜라", -1).await;
        println!("{}", notice_message(&result));

        println!("{}", client.view(id, &methods).await.map_err(|e| e.to_string())?);
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("payment", session = %id);
    let payment = async {
        let result = client.proceed_to_payment(id).await;
        println!("{}", notice_message(&result));
        println!("{}", client.view(id, &methods).await?);

        let method = methods.first().cloned().unwrap_or_default();
        println!("{}", PaymentScreen::confirm_label(&method));
        let result = client.confirm_payment(id, &method).await;
        println!("{}", notice_message(&result));
        result
    }
    .instrument(span)
    .await;

    match payment {
        Ok(_) => info!(session = %id, "Order processed successfully"),
        Err(e) => error!(session = %id, error = %e, "Order processing failed"),
    }

    client.close(id).await.map_err(|e| e.to_string())?;

    let report = DivisorReport::from_input("100").map_err(|e| divisor_error_message(&e))?;
    println!("{report}");

    let names: Vec<&str> = system
        .catalog()
        .categories()
        .iter()
        .flat_map(|c| c.items.iter().map(|item| item.name.as_str()))
        .collect();
    let roulette = Roulette::new(names).map_err(|e| roulette_error_message(&e))?;
    println!("🎯 오늘의 메뉴를 고르는 중...");
    let spin = roulette.spin_with_reveal(reveal_delay).await;
    println!("🎉 오늘의 메뉴: {}", spin.label);

    system.shutdown().await?;

    info!("Kiosk demo completed successfully");
    Ok(())
}
