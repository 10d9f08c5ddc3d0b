fn main() {
  // `physics` cfg alias: set when any physics backend feature is enabled,
  // so sources don't have to repeat
  // `#[cfg(any(feature = "avian2d", feature = "rapier2d"))]`.
  println!("cargo:rustc-check-cfg=cfg(physics)");
  if cfg!(any(feature = "avian2d", feature = "rapier2d")) {
    println!("cargo:rustc-cfg=physics");
  }
}
