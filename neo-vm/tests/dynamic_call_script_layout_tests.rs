use neo_vm::{CallFlags, OpCode, ScriptBuilder, Syscall};

#[test]
fn dynamic_call_script_layout() {
    // Arguments (none) -> NEWARRAY0, flags, method, contract hash, System.Contract.Call.
    let contract_hash = [0x11u8; 20];

    let mut builder = ScriptBuilder::new();
    builder.emit_pack_items(0);
    builder.emit_push_int(i64::from(CallFlags::ALL.bits()));
    builder.emit_push_string("symbol");
    builder.emit_push(&contract_hash);
    builder.emit_interop(Syscall::ContractCall);

    let script = builder.to_array();

    let mut expected = vec![
        OpCode::NEWARRAY0 as u8,
        OpCode::PUSH15 as u8,
        OpCode::PUSHDATA1 as u8,
        6,
    ];
    expected.extend_from_slice(b"symbol");
    expected.extend_from_slice(&[OpCode::PUSHDATA1 as u8, 20]);
    expected.extend_from_slice(&contract_hash);
    expected.extend_from_slice(&[0x41, 0x62, 0x7d, 0x5b, 0x52]);

    assert_eq!(script, expected);
}

#[test]
fn dynamic_call_with_arguments_packs_in_reverse() {
    let contract_hash = [0x22u8; 20];

    let mut builder = ScriptBuilder::new();
    // transfer(1, true): last argument first.
    builder.emit_push_bool(true);
    builder.emit_push_int(1);
    builder.emit_pack_items(2);
    builder.emit_push_int(i64::from(CallFlags::ALL.bits()));
    builder.emit_push_string("transfer");
    builder.emit_push(&contract_hash);
    builder
        .emit_syscall(Syscall::ContractCall.name())
        .expect("syscall name is short");

    let script = builder.to_array();
    assert_eq!(
        &script[..5],
        &[
            OpCode::PUSHT as u8,
            OpCode::PUSH1 as u8,
            OpCode::PUSH2 as u8,
            OpCode::PACK as u8,
            OpCode::PUSH15 as u8,
        ]
    );
    assert_eq!(script.len(), 5 + 2 + 8 + 2 + 20 + 5);
}
