//! Script construction helpers for coinbase and pay-to-pubkey scripts.

pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_CHECKSIG: u8 = 0xac;

/// Appends `data` with the shortest push opcode for its length.
pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    match data.len() {
        0..=75 => script.push(data.len() as u8),
        76..=0xff => {
            script.push(OP_PUSHDATA1);
            script.push(data.len() as u8);
        }
        0x100..=0xffff => {
            script.push(OP_PUSHDATA2);
            script.extend_from_slice(&(data.len() as u16).to_le_bytes());
        }
        _ => {
            script.push(OP_PUSHDATA4);
            script.extend_from_slice(&(data.len() as u32).to_le_bytes());
        }
    }
    script.extend_from_slice(data);
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn script_num_to_vec(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }
    let mut abs = value.unsigned_abs();
    let mut result = Vec::new();
    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    if let Some(last) = result.last_mut() {
        if *last & 0x80 != 0 {
            result.push(if value < 0 { 0x80 } else { 0 });
        } else if value < 0 {
            *last |= 0x80;
        }
    }
    result
}

pub fn push_script_num(script: &mut Vec<u8>, value: i64) {
    push_data(script, &script_num_to_vec(value));
}

/// `<pubkey> OP_CHECKSIG`
pub fn pay_to_pubkey(pubkey: &[u8]) -> Vec<u8> {
    let mut script = Vec::with_capacity(pubkey.len() + 2);
    push_data(&mut script, pubkey);
    script.push(OP_CHECKSIG);
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_numbers_are_minimal() {
        assert!(script_num_to_vec(0).is_empty());
        assert_eq!(script_num_to_vec(4), vec![0x04]);
        assert_eq!(script_num_to_vec(0x80), vec![0x80, 0x00]);
        assert_eq!(script_num_to_vec(-1), vec![0x81]);
        assert_eq!(script_num_to_vec(-0x80), vec![0x80, 0x80]);
        assert_eq!(script_num_to_vec(486_604_799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn push_opcode_tracks_length() {
        let mut script = Vec::new();
        push_data(&mut script, &[0u8; 75]);
        assert_eq!(script[0], 75);

        let mut script = Vec::new();
        push_data(&mut script, &[0u8; 78]);
        assert_eq!(&script[..2], &[OP_PUSHDATA1, 78]);

        let mut script = Vec::new();
        push_data(&mut script, &[0u8; 300]);
        assert_eq!(&script[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
        assert_eq!(script.len(), 303);
    }

    #[test]
    fn pay_to_pubkey_layout() {
        let script = pay_to_pubkey(&[0x04; 65]);
        assert_eq!(script.len(), 67);
        assert_eq!(script[0], 65);
        assert_eq!(script[66], OP_CHECKSIG);
    }
}
