//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use volextent::{locate, sample, GridExtent, Periodicity};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let extent = GridExtent::new([2, 2, 2], [0.0_f64; 3], [1.0; 3], Periodicity::none()).unwrap();

    let z = [2.0; 8];

    let mut out = [0.0; 1];

    let mut point = [0.5, 0.5, 0.5];
    let location = locate(&mut point, &extent).unwrap();
    out[0] = location.sample(&z);

    let obs = [&[0.0_f64][..], &[0.0_f64][..], &[0.0_f64][..]]; // Slightly weird syntax to get slice of slice without vec

    sample::interpn(&extent, &z, obs, &mut out).unwrap();

    loop {} // We don't actually run this, just compile it
}
