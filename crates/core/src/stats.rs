//! Compression statistics for observing codec behavior.
//!
//! Collected with explicit updates around each operation; not thread-safe.
//! For multi-threaded use, keep per-thread stats and merge at the end.

use std::time::{Duration, Instant};

/// Counters and timing for a single compress or decompress operation.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    /// When the operation started
    pub start_time: Instant,

    /// When the operation ended (set on completion)
    pub end_time: Option<Instant>,

    /// Raw input bytes
    pub input_bytes: u64,

    /// Total container bytes (header + table + payload)
    pub container_bytes: u64,

    /// Entries in the code table
    pub table_entries: u64,

    /// Meaningful bits in the packed payload
    pub payload_bits: u64,
}

impl CompressionStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            container_bytes: 0,
            table_entries: 0,
            payload_bits: 0,
        }
    }

    /// Mark the operation as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compression ratio (container / input). Returns 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.container_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Container bytes that are framing overhead rather than payload.
    pub fn overhead_bytes(&self) -> u64 {
        self.container_bytes
            .saturating_sub((self.payload_bits + 7) / 8)
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Compression Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();
        println!("Input:     {} bytes", self.input_bytes);
        println!("Container: {} bytes", self.container_bytes);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!();
        println!("Table entries: {}", self.table_entries);
        println!("Payload bits: {}", self.payload_bits);
        println!("Framing overhead: {} bytes", self.overhead_bytes());
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             container_bytes={}\n\
             compression_ratio={:.4}\n\
             table_entries={}\n\
             payload_bits={}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.container_bytes,
            self.compression_ratio(),
            self.table_entries,
            self.payload_bits,
        )
    }
}

impl Default for CompressionStats {
    fn default() -> Self {
        Self::new()
    }
}
