//! Button / LED polling demo
//!
//! Creates an LED and a button handle, then busy-polls the button and mirrors
//! its level on the LED. The GPIO registers are simulated on the host, and
//! the handle storage strategy is picked on the command line:
//!
//! - `cargo run -p button-led -- --strategy heap`
//! - `cargo run -p button-led -- --strategy pool --cycles 100000`

mod app;
mod sim;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gpio_handle::{GpioManager, HeapAllocator, PinAllocator, StaticPool};
use gpio_mem::DEFAULT_POOL_CAPACITY;
use hal::GpioHal;
use tracing_subscriber::EnvFilter;

use crate::app::{ButtonLed, Wiring, BUTTON_BIT, BUTTON_PORT, RED_LED_BIT, RED_LED_PORT};
use crate::sim::SimHal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// One heap block per handle
    Heap,
    /// Fixed pool of slots
    Pool,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Mirror a button on an LED")]
struct Opts {
    #[arg(long, value_enum, default_value_t = Strategy::Pool)]
    strategy: Strategy,

    #[arg(long, default_value_t = RED_LED_PORT)]
    led_port: u8,

    #[arg(long, default_value_t = RED_LED_BIT)]
    led_bit: u8,

    #[arg(long, default_value_t = BUTTON_PORT)]
    button_port: u8,

    #[arg(long, default_value_t = BUTTON_BIT)]
    button_bit: u8,

    /// Number of polls before exiting; 0 runs until Ctrl-C
    #[arg(long, default_value_t = 0)]
    cycles: u64,

    /// Simulated button changes level every this many polls
    #[arg(long, default_value_t = 1_000_000, value_parser = clap::value_parser!(u64).range(1..))]
    press_every: u64,
}

impl Opts {
    fn wiring(&self) -> Wiring {
        Wiring {
            led: (self.led_port, self.led_bit),
            button: (self.button_port, self.button_bit),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .context("installing Ctrl-C handler")?;

    let hal = SimHal::new(opts.press_every);
    let polls = match opts.strategy {
        Strategy::Heap => run(GpioManager::new(hal, HeapAllocator::new()), &opts, &running)?,
        Strategy::Pool => run(
            GpioManager::new(hal, StaticPool::<DEFAULT_POOL_CAPACITY>::new()),
            &opts,
            &running,
        )?,
    };

    log::info!("stopped after {polls} polls");
    Ok(())
}

fn run<H: GpioHal, A: PinAllocator>(
    gpio: GpioManager<H, A>,
    opts: &Opts,
    running: &AtomicBool,
) -> Result<u64> {
    let mut app = ButtonLed::new(gpio, opts.wiring())
        .with_context(|| format!("creating pins with {:?} strategy", opts.strategy))?;

    log::info!("polling ({:?} strategy)", opts.strategy);
    let mut polls = 0u64;
    while running.load(Ordering::Relaxed) && (opts.cycles == 0 || polls < opts.cycles) {
        app.poll();
        polls += 1;
    }

    let stats = app.gpio().stats();
    log::info!("{} handle(s) in use, peak {}", stats.used, stats.peak_used);
    Ok(polls)
}
