#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use rust_decimal_macros::dec;

    use crate::{
        services::{PortfolioTrackerService, RefreshScheduler, TokioClock},
        test::fakes::{ScriptedSource, holding},
    };

    const INTERVAL: Duration = Duration::from_secs(5 * 60);

    fn setup() -> (Arc<ScriptedSource>, RefreshScheduler) {
        let source = Arc::new(ScriptedSource::new());
        source.succeed("AAPL", dec!(180));
        let tracker = Arc::new(PortfolioTrackerService::new(
            vec![holding("AAPL", dec!(178.72), dec!(5000), dec!(30))],
            source.clone(),
            Arc::new(TokioClock),
        ));
        let scheduler = RefreshScheduler::new(tracker, Arc::new(TokioClock), INTERVAL);
        (source, scheduler)
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_once_per_interval() {
        let (source, mut scheduler) = setup();
        scheduler.start();

        tokio::time::sleep(INTERVAL - Duration::from_secs(1)).await;
        assert!(source.calls().is_empty());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls().len(), 1);

        tokio::time::sleep(INTERVAL).await;
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_future_cycles() {
        let (source, mut scheduler) = setup();
        scheduler.start();
        tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;
        assert_eq!(source.calls().len(), 1);

        scheduler.stop();
        assert!(!scheduler.is_running());
        tokio::time::sleep(INTERVAL * 3).await;

        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn start_twice_runs_a_single_loop() {
        let (source, mut scheduler) = setup();
        scheduler.start();
        scheduler.start();

        tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;

        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_flips_between_running_and_stopped() {
        let (source, mut scheduler) = setup();

        assert!(scheduler.toggle());
        assert!(!scheduler.toggle());

        tokio::time::sleep(INTERVAL * 2).await;
        assert!(source.calls().is_empty());
    }
}
