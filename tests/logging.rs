// Copyright (c) 2024 Botho Foundation

//! Checks that the codec's `tracing` calls actually reach a subscriber,
//! using a scoped subscriber rather than a process-global one so this test
//! can run alongside the rest of the suite.

use bth_superthin::{config::CodecConfig, encode, Txid};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct CapturedWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedWriter {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn encoder_oscillation_warning_is_logged() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer = CapturedWriter { buf: buf.clone() };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .finish();

    // Five txids sharing their leading 4 hex digits: every interpolation
    // step computes the same window value, forcing the guess to stick and
    // revisit on the second probe for every entry but the one the guess
    // lands on directly.
    let raws: Vec<[u8; 32]> = (0u8..5)
        .map(|k| {
            let mut raw = [0u8; 32];
            raw[0] = 0x05;
            raw[1] = 0x00;
            raw[2] = k;
            raw
        })
        .collect();
    let mempool: Vec<Txid> = raws.iter().map(Txid::from_raw).collect();

    tracing::subscriber::with_default(subscriber, || {
        let (_, _, stats) = encode(&mempool, &CodecConfig::default()).unwrap();
        assert!(stats.oscillations_triggered > 0);
    });

    let captured = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(captured.contains("oscillation"));
}
