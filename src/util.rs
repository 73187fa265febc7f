/// Evaluate `$expr`, print how long it took, and return its value.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
