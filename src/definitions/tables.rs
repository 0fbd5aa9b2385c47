//! Embedded default schema table.
//!
//! Codes mirror the network's published `definitions.json` for the common
//! transaction and ledger-object fields. Networks with amended schemas load
//! their own table through `FieldRegistry::from_json` instead.

pub(crate) struct RawField {
    pub name: &'static str,
    pub type_name: &'static str,
    pub type_code: u8,
    pub field_code: u8,
    pub is_vl_encoded: bool,
    pub is_serialized: bool,
    pub is_signing_field: bool,
}

const fn f(
    name: &'static str,
    type_name: &'static str,
    type_code: u8,
    field_code: u8,
    is_vl_encoded: bool,
    is_serialized: bool,
    is_signing_field: bool,
) -> RawField {
    RawField {
        name,
        type_name,
        type_code,
        field_code,
        is_vl_encoded,
        is_serialized,
        is_signing_field,
    }
}

pub(crate) const DEFAULT_FIELDS: &[RawField] = &[
    // UInt16 (type 1)
    f("LedgerEntryType", "UInt16", 1, 1, false, true, true),
    f("TransactionType", "UInt16", 1, 2, false, true, true),
    f("SignerWeight", "UInt16", 1, 3, false, true, true),
    // UInt32 (type 2)
    f("NetworkID", "UInt32", 2, 1, false, true, true),
    f("Flags", "UInt32", 2, 2, false, true, true),
    f("SourceTag", "UInt32", 2, 3, false, true, true),
    f("Sequence", "UInt32", 2, 4, false, true, true),
    f("PreviousTxnLgrSeq", "UInt32", 2, 5, false, true, true),
    f("LedgerSequence", "UInt32", 2, 6, false, true, true),
    f("CloseTime", "UInt32", 2, 7, false, true, true),
    f("ParentCloseTime", "UInt32", 2, 8, false, true, true),
    f("SigningTime", "UInt32", 2, 9, false, true, true),
    f("Expiration", "UInt32", 2, 10, false, true, true),
    f("TransferRate", "UInt32", 2, 11, false, true, true),
    f("WalletSize", "UInt32", 2, 12, false, true, true),
    f("OwnerCount", "UInt32", 2, 13, false, true, true),
    f("DestinationTag", "UInt32", 2, 14, false, true, true),
    f("QualityIn", "UInt32", 2, 20, false, true, true),
    f("QualityOut", "UInt32", 2, 21, false, true, true),
    f("OfferSequence", "UInt32", 2, 25, false, true, true),
    f("LastLedgerSequence", "UInt32", 2, 27, false, true, true),
    f("TransactionIndex", "UInt32", 2, 28, false, true, true),
    f("OperationLimit", "UInt32", 2, 29, false, true, true),
    f("CancelAfter", "UInt32", 2, 36, false, true, true),
    f("FinishAfter", "UInt32", 2, 37, false, true, true),
    f("SettleDelay", "UInt32", 2, 39, false, true, true),
    f("TicketCount", "UInt32", 2, 40, false, true, true),
    f("TicketSequence", "UInt32", 2, 41, false, true, true),
    // UInt64 (type 3)
    f("IndexNext", "UInt64", 3, 1, false, true, true),
    f("IndexPrevious", "UInt64", 3, 2, false, true, true),
    f("BookNode", "UInt64", 3, 3, false, true, true),
    f("OwnerNode", "UInt64", 3, 4, false, true, true),
    f("BaseFee", "UInt64", 3, 5, false, true, true),
    f("ExchangeRate", "UInt64", 3, 6, false, true, true),
    f("LowNode", "UInt64", 3, 7, false, true, true),
    f("HighNode", "UInt64", 3, 8, false, true, true),
    f("DestinationNode", "UInt64", 3, 9, false, true, true),
    f("Cookie", "UInt64", 3, 10, false, true, true),
    // Hash128 (type 4)
    f("EmailHash", "Hash128", 4, 1, false, true, true),
    // Hash256 (type 5)
    f("LedgerHash", "Hash256", 5, 1, false, true, true),
    f("ParentHash", "Hash256", 5, 2, false, true, true),
    f("TransactionHash", "Hash256", 5, 3, false, true, true),
    f("AccountHash", "Hash256", 5, 4, false, true, true),
    f("PreviousTxnID", "Hash256", 5, 5, false, true, true),
    f("LedgerIndex", "Hash256", 5, 6, false, true, true),
    f("WalletLocator", "Hash256", 5, 7, false, true, true),
    f("RootIndex", "Hash256", 5, 8, false, true, true),
    f("AccountTxnID", "Hash256", 5, 9, false, true, true),
    f("NFTokenID", "Hash256", 5, 10, false, true, true),
    f("BookDirectory", "Hash256", 5, 16, false, true, true),
    f("InvoiceID", "Hash256", 5, 17, false, true, true),
    f("Channel", "Hash256", 5, 22, false, true, true),
    f("CheckID", "Hash256", 5, 24, false, true, true),
    // Amount (type 6)
    f("Amount", "Amount", 6, 1, false, true, true),
    f("Balance", "Amount", 6, 2, false, true, true),
    f("LimitAmount", "Amount", 6, 3, false, true, true),
    f("TakerPays", "Amount", 6, 4, false, true, true),
    f("TakerGets", "Amount", 6, 5, false, true, true),
    f("LowLimit", "Amount", 6, 6, false, true, true),
    f("HighLimit", "Amount", 6, 7, false, true, true),
    f("Fee", "Amount", 6, 8, false, true, true),
    f("SendMax", "Amount", 6, 9, false, true, true),
    f("DeliverMin", "Amount", 6, 10, false, true, true),
    f("DeliveredAmount", "Amount", 6, 18, false, true, true),
    // Blob (type 7)
    f("PublicKey", "Blob", 7, 1, true, true, true),
    f("MessageKey", "Blob", 7, 2, true, true, true),
    f("SigningPubKey", "Blob", 7, 3, true, true, true),
    f("TxnSignature", "Blob", 7, 4, true, true, false),
    f("Signature", "Blob", 7, 6, true, true, false),
    f("Domain", "Blob", 7, 7, true, true, true),
    f("FundCode", "Blob", 7, 8, true, true, true),
    f("RemoveCode", "Blob", 7, 9, true, true, true),
    f("ExpireCode", "Blob", 7, 10, true, true, true),
    f("CreateCode", "Blob", 7, 11, true, true, true),
    f("MemoType", "Blob", 7, 12, true, true, true),
    f("MemoData", "Blob", 7, 13, true, true, true),
    f("MemoFormat", "Blob", 7, 14, true, true, true),
    f("Fulfillment", "Blob", 7, 16, true, true, true),
    f("Condition", "Blob", 7, 17, true, true, true),
    // AccountID (type 8)
    f("Account", "AccountID", 8, 1, true, true, true),
    f("Owner", "AccountID", 8, 2, true, true, true),
    f("Destination", "AccountID", 8, 3, true, true, true),
    f("Issuer", "AccountID", 8, 4, true, true, true),
    f("Authorize", "AccountID", 8, 5, true, true, true),
    f("Unauthorize", "AccountID", 8, 6, true, true, true),
    f("RegularKey", "AccountID", 8, 8, true, true, true),
    f("NFTokenMinter", "AccountID", 8, 9, true, true, true),
    // Number (type 9, legacy)
    f("Number", "Number", 9, 1, false, true, true),
    // STObject (type 14)
    f("ObjectEndMarker", "STObject", 14, 1, false, true, true),
    f("TransactionMetaData", "STObject", 14, 2, false, true, true),
    f("CreatedNode", "STObject", 14, 3, false, true, true),
    f("DeletedNode", "STObject", 14, 4, false, true, true),
    f("ModifiedNode", "STObject", 14, 5, false, true, true),
    f("PreviousFields", "STObject", 14, 6, false, true, true),
    f("FinalFields", "STObject", 14, 7, false, true, true),
    f("NewFields", "STObject", 14, 8, false, true, true),
    f("TemplateEntry", "STObject", 14, 9, false, true, true),
    f("Memo", "STObject", 14, 10, false, true, true),
    f("SignerEntry", "STObject", 14, 11, false, true, true),
    f("Signer", "STObject", 14, 16, false, true, true),
    f("Majority", "STObject", 14, 18, false, true, true),
    // STArray (type 15)
    f("ArrayEndMarker", "STArray", 15, 1, false, true, true),
    f("Signers", "STArray", 15, 3, false, true, false),
    f("SignerEntries", "STArray", 15, 4, false, true, true),
    f("Template", "STArray", 15, 5, false, true, true),
    f("Necessary", "STArray", 15, 6, false, true, true),
    f("Sufficient", "STArray", 15, 7, false, true, true),
    f("AffectedNodes", "STArray", 15, 8, false, true, true),
    f("Memos", "STArray", 15, 9, false, true, true),
    f("Majorities", "STArray", 15, 16, false, true, true),
    // UInt8 (type 16)
    f("CloseResolution", "UInt8", 16, 1, false, true, true),
    f("Method", "UInt8", 16, 2, false, true, true),
    f("TransactionResult", "UInt8", 16, 3, false, true, true),
    f("TickSize", "UInt8", 16, 16, false, true, true),
    // Hash160 (type 17)
    f("TakerPaysCurrency", "Hash160", 17, 1, false, true, true),
    f("TakerPaysIssuer", "Hash160", 17, 2, false, true, true),
    f("TakerGetsCurrency", "Hash160", 17, 3, false, true, true),
    f("TakerGetsIssuer", "Hash160", 17, 4, false, true, true),
    // PathSet (type 18)
    f("Paths", "PathSet", 18, 1, false, true, true),
];
