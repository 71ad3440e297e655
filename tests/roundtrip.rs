use nalenc::{Cipher, Key};

fn key_of(byte: u8) -> Key {
    Key::try_from_slice(&vec![byte; 512]).unwrap()
}

#[test]
fn s1_empty_plaintext() {
    let cipher = Cipher::new(&key_of(0x00));
    let ciphertext = cipher.encrypt(&[]);
    assert_eq!(ciphertext.len(), 2048);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), Vec::<u8>::new());
}

#[test]
fn s2_single_byte() {
    let bytes: Vec<u8> = (0..512u32)
        .map(|i| if i % 2 == 0 { 0xAA } else { 0x55 })
        .collect();
    let cipher = Cipher::new(&Key::try_from_slice(&bytes).unwrap());
    let ciphertext = cipher.encrypt(&[0x42]);
    assert_eq!(ciphertext.len(), 2048);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), vec![0x42]);
}

#[test]
fn s3_exact_2046_bytes() {
    let cipher = Cipher::new(&key_of(0x07));
    let plaintext = vec![0x01u8; 2046];
    let ciphertext = cipher.encrypt(&plaintext);
    assert_eq!(ciphertext.len(), 2048);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn s4_2047_bytes() {
    let cipher = Cipher::new(&key_of(0x13));
    let plaintext: Vec<u8> = (0..2047u32).map(|i| (i % 255) as u8).collect();
    let ciphertext = cipher.encrypt(&plaintext);
    assert_eq!(ciphertext.len(), 4096);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn s5_large_plaintext() {
    let cipher = Cipher::new(&key_of(0x99));
    let plaintext = vec![0xFFu8; 70000];
    let ciphertext = cipher.encrypt(&plaintext);
    assert_eq!(ciphertext.len(), 71680);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn s6_wrong_key_does_not_raise_and_rarely_matches() {
    let k1 = vec![0x11u8; 512];
    let mut k2 = k1.clone();
    k2[0] ^= 0xFF;

    let plaintext = b"wrong key decryption must not authenticate".to_vec();
    let ciphertext = Cipher::new(&Key::try_from_slice(&k1).unwrap()).encrypt(&plaintext);
    let recovered = Cipher::new(&Key::try_from_slice(&k2).unwrap())
        .decrypt(&ciphertext)
        .unwrap();

    assert_ne!(recovered, plaintext);
}

#[test]
fn roundtrip_across_boundary_lengths() {
    let cipher = Cipher::new(&key_of(0x5a));
    for len in [
        0usize, 1, 511, 512, 2045, 2046, 2047, 2048, 2049, 4096, 65535, 65536,
    ] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let ciphertext = cipher.encrypt(&plaintext);
        assert_eq!(ciphertext.len() % 2048, 0);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext, "len {len}");
    }
}

#[test]
fn armored_key_file_roundtrips_through_cipher() {
    let key = key_of(0x2a);
    let armored = nalenc::encode_armored_key(&key);
    let recovered = nalenc::decode_armored_key(&armored).unwrap();

    let plaintext = b"key survived a trip through ASCII armor".to_vec();
    let ciphertext = Cipher::new(&key).encrypt(&plaintext);
    let decrypted = Cipher::new(&recovered).decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn rejects_non_512_byte_keys() {
    for len in [0usize, 1, 16, 511, 513, 1024] {
        assert!(Key::try_from_slice(&vec![0u8; len]).is_err());
    }
}
