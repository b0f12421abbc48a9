#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slp_decoder::BatchDecoder;
use slp_encoder::BatchEncoder;
use slp_types::Record;

#[derive(Arbitrary, Debug)]
struct FuzzRecord {
    priority: u8,
    version: u8,
    timestamp: String,
    host: String,
    app_name: String,
    process_name: String,
    message: String,
}

impl FuzzRecord {
    fn into_record(self) -> Record {
        Record {
            priority: (self.priority % 192).to_string(),
            syslog_version: (self.version % 10).to_string(),
            timestamp: self.timestamp,
            host: self.host,
            app_name: self.app_name,
            process_name: self.process_name,
            message: self.message,
        }
    }
}

// Fuzz target: BatchEncoder → BatchDecoder roundtrip.
//
// Records the encoder accepts must decode back unchanged; records it
// rejects are skipped.
fuzz_target!(|input: Vec<FuzzRecord>| {
    if input.is_empty() {
        return;
    }

    let records: Vec<Record> = input.into_iter().map(FuzzRecord::into_record).collect();
    let mut encoder = BatchEncoder::new();
    for record in &records {
        encoder.add_record(record);
    }
    let Ok(batch) = encoder.encode() else {
        return;
    };

    let decoded = BatchDecoder::new()
        .decode_str(batch.count, &batch.body)
        .expect("encoder output must decode");
    assert_eq!(decoded.records, records);
});
