use std::time::Duration;

use super::NotificationHub;

/// Periodically expire toasts of visitors who never came back to see them.
pub fn spawn_sweeper(hub: NotificationHub, every: Duration) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let remaining = hub.sweep(chrono::Utc::now());
            log::debug!("Notification sweep done, {remaining} queue(s) still active");
        }
    });
}
