/// Randomness supplied by the JavaScript host
///
/// **Learning Point**: `wasm32-unknown-unknown` has no OS entropy source, so
/// instead of pulling in `getrandom` we draw from `Math.random()` through
/// `js-sys` and adapt it to `rand::RngCore`. The level generator stays generic
/// over `Rng`, which lets native tests use a seeded `StdRng`.

use rand::RngCore;

/// `RngCore` backed by `Math.random()`. Only usable inside a JS runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RngCore for JsRandom {
    fn next_u32(&mut self) -> u32 {
        // Math.random() is in [0, 1), so the product stays below 2^32.
        (js_sys::Math::random() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
