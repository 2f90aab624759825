use kasane_geopoint::{EncodedGeoPoint, GeoPoint, TimeOfFix};

fn main() {
    // RUST_LOG=trace で各フィールドの書き込みを表示
    env_logger::init();

    let point = GeoPoint::new(
        -90,
        TimeOfFix::new(20, 12, 211),
        100,
        TimeOfFix::new(20, 12, 211),
    );

    println!("Pre-Pack");
    println!("{}", point);

    let packed = EncodedGeoPoint::from(&point);
    println!("{}", packed);
    println!("{:02x?}", packed.as_bytes());

    let unpacked = GeoPoint::from(packed);
    println!("unpacked");
    println!("{}", unpacked);
}
