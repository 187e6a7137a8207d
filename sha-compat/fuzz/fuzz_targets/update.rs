#![no_main]

use libfuzzer_sys::fuzz_target;
use sha_compat::compat::{SHA1_Final, SHA1_Init, SHA1_Update, SHA_CTX, SHA_DIGEST_LENGTH};
use sha_compat::{sha1, HashContext};

fuzz_target!(|data: &[u8]| {
    let Some((&split, msg)) = data.split_first() else { return };

    let whole = sha1(msg).unwrap();

    let mut chunked = HashContext::new().unwrap();
    for chunk in msg.chunks(usize::from(split).max(1)) {
        assert!(chunked.try_update(chunk).is_ok());
    }
    assert_eq!(chunked.try_finalize().unwrap(), whole);

    let mut c = SHA_CTX::new();
    let mut md = [0u8; SHA_DIGEST_LENGTH];
    assert_eq!(SHA1_Init(&mut c), 1);
    let (head, tail) = msg.split_at(usize::from(split).min(msg.len()));
    assert_eq!(SHA1_Update(&mut c, head), 1);
    assert_eq!(SHA1_Update(&mut c, tail), 1);
    assert_eq!(SHA1_Final(&mut md, &mut c), 1);
    assert_eq!(whole, md);
});
