//! Build a record, print its wire bytes in both byte orders and read it back

use bytemuck::{Pod, Zeroable};
use openmsg_core::{
    ArrayChar, Be, EndianWrapper, Le, LittleEndian, Optionull, PackedRecord,
};

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct Quote {
    id: Be<u32>,
    bid_size: [Be<Optionull<u16>>; 2],
    ask_size: [Be<Optionull<u32>>; 2],
    venue: ArrayChar<9>,
    symbol: ArrayChar<9>,
}

impl PackedRecord for Quote {}

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct Heartbeat {
    sequence: EndianWrapper<u64, LittleEndian>,
    interval_ms: Le<Optionull<u16>>,
}

impl PackedRecord for Heartbeat {}

fn print_bytes(label: &str, bytes: &[u8]) {
    let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    println!("{:<10} {} ({} bytes)", label, hex.join(" "), bytes.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("openmsg Sample Record Example\n");

    let quote = Quote {
        id: Be::new(0xDEAD_BEEF),
        bid_size: [Be::new(0xDEAD), Be::default()],
        ask_size: [Be::new(0xDEAD_BEEF), Be::default()],
        venue: ArrayChar::from_str("testme"),
        symbol: ArrayChar::from_str("testmefurther"),
    };
    print_bytes("quote", quote.as_bytes());

    let heartbeat = Heartbeat {
        sequence: EndianWrapper::new(42),
        interval_ms: Le::default(),
    };
    print_bytes("heartbeat", heartbeat.as_bytes());

    // Read the quote back as a receiver would
    let wire = quote.to_bytes();
    let received = Quote::ref_from_bytes(&wire)?;
    println!("\nid        {:#x}", received.id.get());
    for (i, size) in received.bid_size.iter().enumerate() {
        match size.to_option() {
            Some(v) => println!("bid[{}]    {}", i, v),
            None => println!("bid[{}]    (not set)", i),
        }
    }
    println!("venue     {:?}", received.venue.to_str(true)?);
    println!("symbol    {:?} (truncated to capacity)", received.symbol.to_str(true)?);

    Ok(())
}
