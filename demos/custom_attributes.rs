//! Declare fields with custom presence, sentinels and bounds

use openmsg_core::{attributes, open_enum, Attributes, Be, Field, Le, Presence};

attributes! {
    /// Percentage, 0xFF when unknown
    pub struct Percent: u8 {
        presence: Optional,
        null: 0xFF,
        min: 0,
        max: 100,
    }
}

attributes! {
    /// Protocol version, always 2 on the wire
    pub struct Version: u16 {
        presence: Constant,
        null: 0,
        min: 2,
        max: 2,
    }
}

open_enum! {
    /// Order side
    pub enum Side: u8 {
        Buy = b'B',
        Sell = b'S',
    }
}

fn main() {
    println!("openmsg Custom Attributes Example\n");

    let mut fill = Be::<Percent>::default();
    println!("fill default:   {:?} not_set={}", fill.as_bytes(), fill.is_not_set());
    fill.set(250);
    println!("fill = 250:     in_bound={}", fill.in_bound());
    fill.set(75);
    println!("fill = 75:      {:?}", fill.to_option());

    let version = Le::<Version>::new(2);
    println!(
        "version:        {:?} presence={:?}",
        version.as_bytes(),
        Version::PRESENCE
    );
    assert_eq!(Version::PRESENCE, Presence::Constant);

    let side = Field::<Side>::new(Side::Sell);
    println!("side:           {:?}", side.get());
    println!("unknown side:   {:?}", Side::from_repr(b'X'));
}
