use dotenvy::dotenv;

// (key, default) pairs baked into the binary as compile-time env vars
const SITE_ENV: [(&str, &str); 4] = [
  ("SITE_BRAND", "EliteTrader"),
  ("SITE_CONTACT_EMAIL", "contact@elitetrader.com"),
  ("SUBMIT_DELAY_MS", "1500"),
  ("ACK_DURATION_MS", "3000"),
];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // the site builds without a .env, every key has a default
  let _ = dotenv();

  for (key, default) in SITE_ENV {
    println!("cargo::rerun-if-env-changed={}", key);
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());

    if key.ends_with("_MS") && value.parse::<u64>().is_err() {
      panic!("{} must be a whole number of milliseconds, got {:?}", key, value);
    }
    println!("cargo::rustc-env={}={}", key, value);
  }
}
