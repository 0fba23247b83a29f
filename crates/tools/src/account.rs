use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use gameroom_common::hash;
use gameroom_common::signer::{generate_private_key, Secp256k1Signer, Signer};
use gameroom_config::Config;
use std::{fs, path::Path, path::PathBuf};

#[derive(Args, Debug, Default, Clone)]
pub struct KeyArgs {
    /// The private key file path, overrides the config file
    #[clap(short = 'k', long)]
    pub privkey_path: Option<PathBuf>,
    /// The private key in hex, instead of a key file
    #[clap(long)]
    pub privkey: Option<String>,
}

pub fn read_privkey(privkey_path: &Path) -> Result<String> {
    let privkey = fs::read_to_string(privkey_path)
        .with_context(|| format!("read private key from {}", privkey_path.to_string_lossy()))?
        .split_whitespace()
        .next()
        .map(ToOwned::to_owned)
        .ok_or_else(|| anyhow!("Privkey file is empty"))?;
    Ok(privkey.trim_start_matches("0x").to_string())
}

pub fn load_signer(args: &KeyArgs, config: &Config) -> Result<Secp256k1Signer> {
    let privkey = match (&args.privkey, &args.privkey_path) {
        (Some(_), Some(_)) => bail!("pass either --privkey or --privkey-path, not both"),
        (Some(privkey), None) => privkey.clone(),
        (None, Some(path)) => read_privkey(path)?,
        (None, None) => match &config.private_key_path {
            Some(path) => read_privkey(path)?,
            None => bail!("a private key is required, pass --privkey-path or set private_key_path"),
        },
    };
    let signer = Secp256k1Signer::from_hex(&privkey).context("parse private key")?;
    log::debug!("signer: {}", signer.public_key_hex());
    Ok(signer)
}

pub fn generate_key(output_path: Option<&Path>) -> Result<()> {
    let privkey = generate_private_key();
    let signer = Secp256k1Signer::from_hex(&privkey)?;
    match output_path {
        Some(path) => {
            fs::write(path, format!("{}\n", privkey)).with_context(|| {
                format!("write private key to {}", path.to_string_lossy())
            })?;
            log::info!("private key written to {}", path.to_string_lossy());
        }
        None => println!("private key: {}", privkey),
    }
    println!("public key: {}", signer.public_key_hex());
    Ok(())
}

/// Gameroom stores `sha256(email || password)` rather than the password.
pub fn hash_password(email: &str, password: &str) {
    println!("{}", hash::hash_password(email, password));
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_PRIVKEY: &str = "c1e325f8508ee82f6d8c15649a8335549057523575b8cc603bd3f471645c2fad";
    const ALICE_PUBKEY: &str = "02685c1048fed717877ac4b9cf90f724c69a770d3c33a54e2e2483cb39beca8e2c";

    #[test]
    fn test_read_privkey() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.priv");
        fs::write(&path, format!("  0x{}\nalice\n", ALICE_PRIVKEY)).unwrap();
        assert_eq!(read_privkey(&path).unwrap(), ALICE_PRIVKEY);

        fs::write(&path, " \n").unwrap();
        assert_eq!(
            read_privkey(&path).unwrap_err().to_string(),
            "Privkey file is empty"
        );
    }

    #[test]
    fn test_load_signer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.priv");
        fs::write(&path, ALICE_PRIVKEY).unwrap();

        let mut config = Config::default();
        assert!(load_signer(&KeyArgs::default(), &config).is_err());

        config.private_key_path = Some(path.clone());
        let signer = load_signer(&KeyArgs::default(), &config).unwrap();
        assert_eq!(signer.public_key_hex(), ALICE_PUBKEY);

        let args = KeyArgs {
            privkey: Some("9966b755baccc25e9d8bd9e8cd8a19fcf67953b2636d101e52f4a40473bb1ea7".to_string()),
            privkey_path: None,
        };
        let signer = load_signer(&args, &config).unwrap();
        assert_eq!(
            signer.public_key_hex(),
            "0317bd9b540436804fe8c2d0874188c708d9bc3909a03614e9b7b7a8c318de026e"
        );

        let args = KeyArgs {
            privkey: Some(ALICE_PRIVKEY.to_string()),
            privkey_path: Some(path),
        };
        assert!(load_signer(&args, &config).is_err());
    }

    #[test]
    fn test_load_invalid_signer() {
        let args = KeyArgs {
            privkey: Some("not a key".to_string()),
            privkey_path: None,
        };
        let err = load_signer(&args, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "parse private key");
    }

    #[test]
    fn test_generate_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.priv");
        generate_key(Some(&path)).unwrap();

        let privkey = read_privkey(&path).unwrap();
        assert_eq!(privkey.len(), 64);
        assert!(Secp256k1Signer::from_hex(&privkey).is_ok());
    }
}
