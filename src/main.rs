mod args;

use args::{Cli, Commands};
use clap::Parser;
use nalenc::{Cipher, Key};

use std::fs;
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Nalenc(#[from] nalenc::Error),
}

fn main() {
    if let Err(e) = nalenc_cli() {
        eprintln!("error: {e}");
    }
}

fn read_key(path: &std::path::Path, armored: bool) -> Result<Key, CliError> {
    if armored {
        let text = fs::read_to_string(path)?;
        Ok(nalenc::decode_armored_key(&text)?)
    } else {
        let bytes = fs::read(path)?;
        Ok(Key::try_from_slice(&bytes)?)
    }
}

fn write_key(path: &std::path::Path, key: &Key, armored: bool) -> Result<(), CliError> {
    if armored {
        fs::write(path, nalenc::encode_armored_key(key))?;
    } else {
        fs::write(path, key.as_bytes())?;
    }
    Ok(())
}

fn nalenc_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            // common args:
            let input_path = enc.common.input; // move ownership
            let output_path = enc.common.output;
            let key_path = enc.common.key;
            let armor = enc.common.armor;

            // read plaintext from input_path
            let plaintext = fs::read(input_path)?;

            // read or generate key
            let key = if enc.gen_key {
                let rand_key = Key::generate()?;
                write_key(&key_path, &rand_key, armor)?;
                rand_key
            } else {
                read_key(&key_path, armor)?
            };

            let cipher = Cipher::new(&key);

            let start = Instant::now();

            // encrypt plaintext and write output
            let ciphertext = cipher.encrypt(&plaintext);

            let duration = start.elapsed();

            fs::write(output_path, &ciphertext)?;
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let input_path = common.input; // move ownership
            let output_path = common.output;
            let key_path = common.key;
            let armor = common.armor;

            // read inputs
            let ciphertext = fs::read(input_path)?;
            let key = read_key(&key_path, armor)?;

            let cipher = Cipher::new(&key);

            let start = Instant::now();

            // decrypt ciphertext and write output
            let plaintext = cipher.decrypt(&ciphertext)?;

            let duration = start.elapsed();

            fs::write(output_path, &plaintext)?;

            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );

            Ok(())
        }
    }
}
