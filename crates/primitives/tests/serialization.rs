use athrd_consensus::{decode_hex, hash256_from_hex, hash256_to_hex};
use athrd_primitives::script::{pay_to_pubkey, push_data, push_script_num};
use athrd_primitives::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};

const TIMESTAMP: &str = "Poloniex exchange have launched their official trading app for iOS and Android";
const PUBKEY: &str = "042f8d34b56ecc2833ab4117a9a1d60cc16f2bdbaea320de00a4d32d0e1ca63466127d844f8a633817f1cab201f86aeb572284351fd0757dbf65cc6aad7fae8f76";

fn coinbase() -> Transaction {
    let mut script_sig = Vec::new();
    push_script_num(&mut script_sig, 486_604_799);
    push_script_num(&mut script_sig, 4);
    push_data(&mut script_sig, TIMESTAMP.as_bytes());

    Transaction {
        version: 1,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        vout: vec![TxOut {
            value: 0,
            script_pubkey: pay_to_pubkey(&decode_hex(PUBKEY).expect("pubkey")),
        }],
        lock_time: 0,
    }
}

#[test]
fn serialize_coinbase_transaction() {
    let expected = decode_hex(concat!(
        "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff",
        "5704ffff001d01044c4e506f6c6f6e6965782065786368616e67652068617665206c61756e63686564",
        "207468656972206f6666696369616c2074726164696e672061707020666f7220694f5320616e642041",
        "6e64726f6964ffffffff0100000000000000004341042f8d34b56ecc2833ab4117a9a1d60cc16f2bdb",
        "aea320de00a4d32d0e1ca63466127d844f8a633817f1cab201f86aeb572284351fd0757dbf65cc6aad",
        "7fae8f76ac00000000",
    ))
    .expect("hex");
    assert_eq!(coinbase().consensus_encode(), expected);
}

#[test]
fn coinbase_txid_is_genesis_merkle_root() {
    let tx = coinbase();
    assert_eq!(
        hash256_to_hex(&tx.txid()),
        "6852e9739b92effcd33d6c5f6d94fa672471093fbedfee3769028780876e62f9"
    );

    let block = Block {
        header: BlockHeader {
            version: 1,
            prev_block: [0u8; 32],
            merkle_root: tx.txid(),
            time: 1_538_474_400,
            bits: 0x1e0f_fff0,
            nonce: 846_894,
        },
        transactions: vec![tx],
    };
    assert_eq!(block.compute_merkle_root(), block.header.merkle_root);
}

#[test]
fn serialize_block_prefixes_transaction_count() {
    let tx = coinbase();
    let header = BlockHeader {
        version: 1,
        prev_block: [0u8; 32],
        merkle_root: hash256_from_hex(
            "6852e9739b92effcd33d6c5f6d94fa672471093fbedfee3769028780876e62f9",
        )
        .expect("merkle"),
        time: 1_538_474_400,
        bits: 0x1e0f_fff0,
        nonce: 846_894,
    };
    let block = Block {
        header: header.clone(),
        transactions: vec![tx.clone()],
    };
    let bytes = block.consensus_encode();
    assert_eq!(&bytes[..80], &header.consensus_encode());
    assert_eq!(bytes[80], 1);
    assert_eq!(&bytes[81..], tx.consensus_encode().as_slice());
}
