use honggfuzz::fuzz;
use ztrip::round_trip_check;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Err(err) = round_trip_check(data) {
                eprintln!("{err}");
                std::process::abort();
            }
        });
    }
}
