//! Threaded simulation driver.
//!
//! Runs a [`Simulator`] on a background thread against a shared store,
//! waking every `frame_interval_secs`. The thread holds only a weak handle
//! to the store: if the store has been dropped the next wake ends the
//! loop instead of writing. [`SimulationDriver::stop`] wakes the thread
//! immediately and joins it, so no pass runs after `stop` returns.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::engine::Simulator;
use crate::store::MetricStore;

/// Store handle shared between the driver thread and readers.
pub type SharedStore = Arc<Mutex<MetricStore>>;

pub fn shared(store: MetricStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub struct SimulationDriver {
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<Simulator>>,
}

impl SimulationDriver {
    /// Spawn the driver thread. It starts ticking after one frame interval.
    pub fn start(store: &SharedStore, simulator: Simulator) -> io::Result<Self> {
        let frame = Duration::try_from_secs_f32(simulator.config().frame_interval_secs)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let weak = Arc::downgrade(store);
        let (tx, rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("portwatch-driver".into())
            .spawn(move || run(weak, simulator, frame, rx))?;

        info!("Simulation driver started (frame {:?})", frame);
        Ok(Self {
            shutdown: Some(tx),
            handle: Some(handle),
        })
    }

    /// Stop the driver and join its thread, returning the simulator.
    ///
    /// Idempotent; later calls return `None`.
    pub fn stop(&mut self) -> Option<Simulator> {
        if let Some(tx) = self.shutdown.take() {
            // Receiver already gone means the thread has exited on its own
            let _ = tx.send(());
        }
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(simulator) => {
                info!(
                    "Simulation driver stopped after {} zone passes",
                    simulator.zone_passes()
                );
                Some(simulator)
            }
            Err(_) => {
                error!("Simulation driver thread panicked");
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for SimulationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(
    store: Weak<Mutex<MetricStore>>,
    mut simulator: Simulator,
    frame: Duration,
    shutdown: mpsc::Receiver<()>,
) -> Simulator {
    let mut last = Instant::now();
    loop {
        match shutdown.recv_timeout(frame) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                debug!("Driver received shutdown");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        let Some(store) = store.upgrade() else {
            warn!("Metric store dropped; driver exiting");
            break;
        };

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        let result = store.lock().map(|mut guard| simulator.advance(&mut guard, elapsed));
        if result.is_err() {
            error!("Metric store lock poisoned; driver exiting");
            break;
        }
    }
    simulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn fast_config() -> SimConfig {
        SimConfig {
            seed: Some(21),
            frame_interval_secs: 0.01,
            zone_interval_secs: 0.02,
            empty_block_interval_secs: 0.02,
            ..Default::default()
        }
    }

    #[test]
    fn test_driver_ticks_and_stops() {
        let mut simulator = Simulator::new(fast_config()).unwrap();
        let store = shared(simulator.generate());
        let mut driver = SimulationDriver::start(&store, simulator).unwrap();

        thread::sleep(Duration::from_millis(200));
        let simulator = driver.stop().expect("driver should return its simulator");
        assert!(!driver.is_running());
        assert!(simulator.zone_passes() > 0);

        let revision = store.lock().unwrap().revision();
        assert!(revision > 0);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(store.lock().unwrap().revision(), revision);

        assert!(driver.stop().is_none());
    }

    #[test]
    fn test_driver_exits_when_store_dropped() {
        let mut simulator = Simulator::new(fast_config()).unwrap();
        let store = shared(simulator.generate());
        let mut driver = SimulationDriver::start(&store, simulator).unwrap();
        drop(store);

        let deadline = Instant::now() + Duration::from_secs(2);
        while driver.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!driver.is_running());
        assert!(driver.stop().is_some());
    }

    #[test]
    fn test_drop_stops_driver() {
        let mut simulator = Simulator::new(fast_config()).unwrap();
        let store = shared(simulator.generate());
        {
            let _driver = SimulationDriver::start(&store, simulator).unwrap();
            thread::sleep(Duration::from_millis(50));
        }
        let revision = store.lock().unwrap().revision();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(store.lock().unwrap().revision(), revision);
    }
}
