//! Historical queries and live subscriptions for `ValSetDriver` events.

use std::sync::Arc;

use ethers::abi::Error as AbiError;
use ethers::contract::{parse_log, ContractError, EthLogDecode, Event, LogMeta};
use ethers::providers::{Middleware, ProviderError, PubsubClient};
use ethers::types::{Filter, Log};
use log::debug;
use tokio::sync::oneshot;

use crate::bindings::val_set_driver::ValSetDriver;
use crate::subscription::{forward, EventSubscription};

impl<M> ValSetDriver<M>
where
    M: Middleware + 'static,
{
    /// Fetches the logs matching `event` within `[from_block, to_block]` (up to the chain head when
    /// `to_block` is unset) and decodes each one, keeping the block/transaction it came from.
    pub async fn filter_logs<D>(
        &self,
        event: Event<Arc<M>, M, D>,
        from_block: u64,
        to_block: Option<u64>,
    ) -> Result<Vec<(D, LogMeta)>, ContractError<M>>
    where
        D: EthLogDecode,
    {
        let mut event = event.from_block(from_block);
        if let Some(to_block) = to_block {
            event = event.to_block(to_block);
        }
        let logs = event.query_with_meta().await?;
        debug!(
            "Fetched {} logs from block {} to {:?}",
            logs.len(),
            from_block,
            to_block
        );
        Ok(logs)
    }
}

/// Historical logs of an event together with a live subscription for the ones that follow.
///
/// The subscription is opened before `history` is fetched, so live items at or below
/// `replayed_to` may repeat entries of `history`.
pub struct Replay<D, M: Middleware> {
    pub history: Vec<(D, LogMeta)>,
    pub replayed_to: u64,
    pub live: EventSubscription<(D, LogMeta), ContractError<M>>,
}

impl<M> ValSetDriver<M>
where
    M: Middleware + 'static,
    M::Provider: PubsubClient,
{
    /// Opens a live subscription for the logs matching `event`.
    ///
    /// Logs that fail to decode are delivered as errors. A failure to open the subscription is
    /// delivered once, after which the subscription ends.
    pub fn watch<D>(&self, event: Event<Arc<M>, M, D>) -> EventSubscription<D, ContractError<M>>
    where
        D: EthLogDecode + Send + 'static,
    {
        self.subscribe_decoded(event.filter, None, parse_log::<D>)
    }

    /// Like [`watch`](Self::watch), but every event carries the block and transaction it was
    /// emitted in.
    pub fn watch_with_meta<D>(
        &self,
        event: Event<Arc<M>, M, D>,
    ) -> EventSubscription<(D, LogMeta), ContractError<M>>
    where
        D: EthLogDecode + Send + 'static,
    {
        self.subscribe_decoded(event.filter, None, decode_with_meta::<D>)
    }

    /// Subscribes to `event`, then fetches its logs from `from_block` up to the current head.
    ///
    /// Nothing emitted after the head is missed, because the subscription is already live when
    /// the history is queried.
    pub async fn watch_from<D>(
        &self,
        event: Event<Arc<M>, M, D>,
        from_block: u64,
    ) -> Result<Replay<D, M>, ContractError<M>>
    where
        D: EthLogDecode + Send + 'static,
    {
        let (opened, ready) = oneshot::channel();
        let live =
            self.subscribe_decoded(event.filter.clone(), Some(opened), decode_with_meta::<D>);

        match ready.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(ContractError::ProviderError {
                    e: ProviderError::CustomError("log subscription task exited".to_string()),
                })
            }
        }

        let replayed_to = self
            .client()
            .get_block_number()
            .await
            .map_err(|e| ContractError::MiddlewareError { e })?
            .as_u64();
        let history = self.filter_logs(event, from_block, Some(replayed_to)).await?;

        Ok(Replay {
            history,
            replayed_to,
            live,
        })
    }

    fn subscribe_decoded<T, F>(
        &self,
        filter: Filter,
        opened: Option<oneshot::Sender<Result<(), ContractError<M>>>>,
        decode: F,
    ) -> EventSubscription<T, ContractError<M>>
    where
        T: Send + 'static,
        F: Fn(Log) -> Result<T, AbiError> + Send + Sync + 'static,
    {
        let client = self.client();

        EventSubscription::spawn(move |sink| async move {
            let logs = match client.subscribe_logs(&filter).await {
                Ok(logs) => logs,
                Err(e) => {
                    let e = ContractError::MiddlewareError { e };
                    match opened {
                        Some(opened) => {
                            let _ = opened.send(Err(e));
                        }
                        None => {
                            let _ = sink.send(Err(e)).await;
                        }
                    }
                    return;
                }
            };
            debug!("Subscribed to logs matching {:?}", filter);
            if let Some(opened) = opened {
                let _ = opened.send(Ok(()));
            }

            forward(logs, sink, |log| {
                decode(log).map_err(ContractError::DecodingError)
            })
            .await;
        })
    }
}

fn decode_with_meta<D: EthLogDecode>(log: Log) -> Result<(D, LogMeta), AbiError> {
    let meta = log_meta(&log).ok_or(AbiError::InvalidData)?;
    Ok((parse_log(log)?, meta))
}

/// Pending logs carry no block or transaction yet.
fn log_meta(log: &Log) -> Option<LogMeta> {
    Some(LogMeta {
        address: log.address,
        block_number: log.block_number?,
        block_hash: log.block_hash?,
        transaction_hash: log.transaction_hash?,
        transaction_index: log.transaction_index?,
        log_index: log.log_index?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fmt::Debug;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use alloy_primitives::keccak256;
    use alloy_sol_types::{sol, SolType};
    use async_trait::async_trait;
    use ethers::abi::{encode, AbiDecode, AbiEncode, RawLog, Token, Tokenizable};
    use ethers::contract::{
        parse_log, ContractError, ContractRevert, EthCall, EthError, EthEvent, EthLogDecode,
    };
    use ethers::providers::{JsonRpcClient, MockError, MockProvider, Provider, PubsubClient};
    use ethers::types::{Address, Bytes, Log, H256, U256, U64};
    use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_json::value::RawValue;

    use crate::bindings::val_set_driver::*;

    type InitEpochDurationData = sol! { tuple(uint48, uint48) };

    fn mocked_driver() -> (ValSetDriver<Provider<MockProvider>>, MockProvider) {
        let (provider, mock) = Provider::mocked();
        let driver = ValSetDriver::new(Address::repeat_byte(0x11), Arc::new(provider));
        (driver, mock)
    }

    fn respond(mock: &MockProvider, tokens: &[Token]) {
        mock.push::<Bytes, _>(Bytes::from(encode(tokens))).unwrap();
    }

    fn selector(signature: &str) -> [u8; 4] {
        let hash = keccak256(signature);
        [hash[0], hash[1], hash[2], hash[3]]
    }

    fn settlement(chain_id: u64, byte: u8) -> CrossChainAddress {
        CrossChainAddress {
            chain_id,
            addr: Address::repeat_byte(byte),
        }
    }

    fn sample_config() -> Config {
        Config {
            epoch_duration: 3600,
            num_aggregators: U256::from(3),
            num_committers: U256::from(5),
            voting_power_providers: vec![settlement(1, 0xa1), settlement(10, 0xa2)],
            keys_provider: settlement(1, 0xb1),
            settlements: vec![settlement(1, 0xc1)],
            max_voting_power: U256::from(10).pow(U256::from(24)),
            min_inclusion_voting_power: U256::from(1_000),
            max_validators_count: U256::from(100),
            // An empty `uint8[]` has the same encoding as empty `bytes`.
            required_key_tags: vec![],
            quorum_thresholds: vec![QuorumThreshold {
                key_tag: 15,
                quorum_threshold: U256::from(666_666_666_666_666_667u64),
            }],
            required_header_key_tag: 15,
            verification_type: 1,
        }
    }

    #[tokio::test]
    async fn test_read_scalar() {
        env_logger::try_init().unwrap_or_default();
        let (driver, mock) = mocked_driver();

        respond(&mock, &[Token::Uint(U256::from(7))]);
        assert_eq!(
            driver.get_num_aggregators().call().await.unwrap(),
            U256::from(7)
        );

        respond(&mock, &[Token::Uint(U256::from(1_700_000_000u64))]);
        assert_eq!(
            driver.get_current_epoch_start().call().await.unwrap(),
            1_700_000_000u64
        );

        respond(&mock, &[Token::Uint(U256::from(2u8))]);
        assert_eq!(driver.get_verification_type().call().await.unwrap(), 2u32);
    }

    #[tokio::test]
    async fn test_read_address_and_bool() {
        let (driver, mock) = mocked_driver();
        let network = Address::repeat_byte(0x42);

        respond(&mock, &[Token::Address(network)]);
        assert_eq!(driver.network().call().await.unwrap(), network);

        respond(&mock, &[Token::Bool(true)]);
        assert!(driver
            .is_settlement_registered(settlement(1, 0xc1))
            .call()
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_read_config() {
        let (driver, mock) = mocked_driver();
        let config = sample_config();

        respond(&mock, &[config.clone().into_token()]);
        assert_eq!(driver.get_config().call().await.unwrap(), config);

        respond(&mock, &[config.clone().into_token()]);
        assert_eq!(
            driver.get_config_at(1_700_000_000).call().await.unwrap(),
            config
        );
    }

    #[tokio::test]
    async fn test_read_struct_arrays() {
        let (driver, mock) = mocked_driver();
        let providers = vec![settlement(1, 0xa1), settlement(8453, 0xa2)];

        respond(&mock, &[providers.clone().into_token()]);
        assert_eq!(
            driver.get_voting_power_providers().call().await.unwrap(),
            providers
        );

        let thresholds = vec![QuorumThreshold {
            key_tag: 15,
            quorum_threshold: U256::from(2) * U256::exp10(17),
        }];
        respond(&mock, &[thresholds.clone().into_token()]);
        assert_eq!(
            driver.get_quorum_thresholds_at(42).call().await.unwrap(),
            thresholds
        );
    }

    #[tokio::test]
    async fn test_read_multiple_outputs() {
        let (driver, mock) = mocked_driver();
        let verifying_contract = Address::repeat_byte(0x11);

        respond(
            &mock,
            &[
                Token::FixedBytes(vec![0x0f]),
                Token::String("ValSetDriver".to_string()),
                Token::String("1".to_string()),
                Token::Uint(U256::from(1)),
                Token::Address(verifying_contract),
                Token::FixedBytes(vec![0u8; 32]),
                Token::Array(vec![]),
            ],
        );
        let (fields, name, version, chain_id, contract, salt, extensions) =
            driver.eip_712_domain().call().await.unwrap();

        assert_eq!(fields, [0x0f]);
        assert_eq!(name, "ValSetDriver");
        assert_eq!(version, "1");
        assert_eq!(chain_id, U256::from(1));
        assert_eq!(contract, verifying_contract);
        assert_eq!(salt, [0u8; 32]);
        assert!(extensions.is_empty());
    }

    #[tokio::test]
    async fn test_read_error_is_forwarded() {
        let (driver, mock) = mocked_driver();

        // A payload too short for a `uint208`.
        mock.push::<Bytes, _>(Bytes::from(vec![0u8; 4])).unwrap();
        assert!(driver.get_num_committers().call().await.is_err());

        // No response queued at all.
        assert!(driver.get_max_voting_power().call().await.is_err());
    }

    #[test]
    fn test_transaction_calldata() {
        let (driver, _mock) = mocked_driver();

        let calldata = driver.set_epoch_duration(7200).calldata().unwrap();
        let mut expected = selector("setEpochDuration(uint48)").to_vec();
        expected.extend(encode(&[Token::Uint(U256::from(7200))]));
        assert_eq!(calldata.to_vec(), expected);

        let provider = settlement(10, 0xa3);
        let calldata = driver
            .add_voting_power_provider(provider.clone())
            .calldata()
            .unwrap();
        let mut expected = selector("addVotingPowerProvider((uint64,address))").to_vec();
        expected.extend(encode(&[provider.clone().into_token()]));
        assert_eq!(calldata.to_vec(), expected);
        assert_eq!(
            ValSetDriverCalls::decode(&calldata).unwrap(),
            ValSetDriverCalls::AddVotingPowerProvider(AddVotingPowerProviderCall {
                voting_power_provider: provider,
            })
        );

        let calldata = driver.renounce_ownership().calldata().unwrap();
        assert_eq!(calldata.to_vec(), selector("renounceOwnership()").to_vec());
    }

    #[test]
    fn test_struct_argument_calldata() {
        let (driver, _mock) = mocked_driver();
        let target = settlement(8453, 0xd4);
        let threshold = QuorumThreshold {
            key_tag: 15,
            quorum_threshold: U256::from(2) * U256::exp10(17),
        };
        let provider_token = target.clone().into_token();
        let threshold_token = threshold.clone().into_token();

        let cases = vec![
            (
                driver.add_settlement(target.clone()).calldata(),
                "addSettlement((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver.remove_settlement(target.clone()).calldata(),
                "removeSettlement((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver.is_settlement_registered(target.clone()).calldata(),
                "isSettlementRegistered((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver.add_voting_power_provider(target.clone()).calldata(),
                "addVotingPowerProvider((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver.remove_voting_power_provider(target.clone()).calldata(),
                "removeVotingPowerProvider((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver
                    .is_voting_power_provider_registered(target.clone())
                    .calldata(),
                "isVotingPowerProviderRegistered((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver.set_keys_provider(target.clone()).calldata(),
                "setKeysProvider((uint64,address))",
                vec![provider_token.clone()],
            ),
            (
                driver.add_quorum_threshold(threshold.clone()).calldata(),
                "addQuorumThreshold((uint8,uint248))",
                vec![threshold_token.clone()],
            ),
            (
                driver.remove_quorum_threshold(threshold.clone()).calldata(),
                "removeQuorumThreshold((uint8,uint248))",
                vec![threshold_token.clone()],
            ),
            (
                driver
                    .is_quorum_threshold_registered(threshold.clone())
                    .calldata(),
                "isQuorumThresholdRegistered((uint8,uint248))",
                vec![threshold_token.clone()],
            ),
            (
                driver
                    .is_settlement_registered_at(target.clone(), 1_700_000_000)
                    .calldata(),
                "isSettlementRegisteredAt((uint64,address),uint48)",
                vec![provider_token, Token::Uint(U256::from(1_700_000_000u64))],
            ),
        ];

        for (calldata, signature, args) in cases {
            let mut expected = selector(signature).to_vec();
            expected.extend(encode(&args));
            assert_eq!(calldata.unwrap().to_vec(), expected, "{}", signature);
        }
    }

    #[test]
    fn test_transaction_options() {
        let (driver, _mock) = mocked_driver();
        let sender = Address::repeat_byte(0x99);

        let call = driver
            .set_max_voting_power(U256::from(1_000_000))
            .from(sender)
            .gas(100_000)
            .nonce(7);

        assert_eq!(call.tx.from(), Some(&sender));
        assert_eq!(call.tx.to_addr(), Some(&Address::repeat_byte(0x11)));
        assert_eq!(call.tx.gas(), Some(&U256::from(100_000)));
        assert_eq!(call.tx.nonce(), Some(&U256::from(7)));
    }

    #[test]
    fn test_multicall_batches_calls() {
        let (driver, _mock) = mocked_driver();
        let batch: Vec<Bytes> = vec![
            SetNumAggregatorsCall {
                num_aggregators: U256::from(2),
            }
            .encode()
            .into(),
            SetNumCommittersCall {
                num_committers: U256::from(5),
            }
            .encode()
            .into(),
        ];

        let calldata = driver.multicall(batch.clone()).calldata().unwrap();
        assert_eq!(&calldata[..4], MulticallCall::selector().as_slice());

        let decoded = MulticallCall::decode(&calldata).unwrap();
        assert_eq!(decoded.data, batch);
        assert_eq!(
            ValSetDriverCalls::decode(&decoded.data[1]).unwrap(),
            ValSetDriverCalls::SetNumCommitters(SetNumCommittersCall {
                num_committers: U256::from(5),
            })
        );
    }

    #[test]
    fn test_event_topics() {
        assert_eq!(
            SetEpochDurationFilter::signature(),
            H256::from(keccak256("SetEpochDuration(uint48)").0)
        );
        assert_eq!(
            AddSettlementFilter::signature(),
            H256::from(keccak256("AddSettlement((uint64,address))").0)
        );
        assert_eq!(
            OwnershipTransferredFilter::signature(),
            H256::from(keccak256("OwnershipTransferred(address,address)").0)
        );
    }

    #[test]
    fn test_parse_event() {
        let data = InitEpochDurationData::abi_encode(&(3600u64, 1_700_000_000u64));
        let log = Log {
            address: Address::repeat_byte(0x11),
            topics: vec![InitEpochDurationFilter::signature()],
            data: data.into(),
            ..Default::default()
        };

        let event: InitEpochDurationFilter = parse_log(log).unwrap();
        assert_eq!(
            event,
            InitEpochDurationFilter {
                epoch_duration: 3600,
                epoch_duration_timestamp: 1_700_000_000,
            }
        );
    }

    #[test]
    fn test_parse_struct_event() {
        let keys_provider = settlement(1, 0xb2);
        let log = RawLog {
            topics: vec![SetKeysProviderFilter::signature()],
            data: encode(&[keys_provider.clone().into_token()]),
        };

        let event = <SetKeysProviderFilter as EthEvent>::decode_log(&log).unwrap();
        assert_eq!(event.keys_provider, keys_provider);
    }

    #[test]
    fn test_parse_indexed_event() {
        let previous_owner = Address::repeat_byte(0x01);
        let new_owner = Address::repeat_byte(0x02);
        let log = RawLog {
            topics: vec![
                OwnershipTransferredFilter::signature(),
                H256::from(previous_owner),
                H256::from(new_owner),
            ],
            data: vec![],
        };

        let event = ValSetDriverEvents::decode_log(&log).unwrap();
        assert_eq!(
            event,
            ValSetDriverEvents::OwnershipTransferredFilter(OwnershipTransferredFilter {
                previous_owner,
                new_owner,
            })
        );
    }

    #[test]
    fn test_mismatched_topic_is_rejected() {
        // Same data layout, different event.
        let data = encode(&[Token::Uint(U256::from(4))]);
        let log = Log {
            topics: vec![SetNumAggregatorsFilter::signature()],
            data: data.clone().into(),
            ..Default::default()
        };

        assert!(parse_log::<SetNumCommittersFilter>(log.clone()).is_err());
        assert_eq!(
            parse_log::<SetNumAggregatorsFilter>(log)
                .unwrap()
                .num_aggregators,
            U256::from(4)
        );

        let unknown = RawLog {
            topics: vec![H256::from(keccak256("Unknown(uint256)").0)],
            data,
        };
        assert!(ValSetDriverEvents::decode_log(&unknown).is_err());

        let anonymous = RawLog {
            topics: vec![],
            data: vec![],
        };
        assert!(ValSetDriverEvents::decode_log(&anonymous).is_err());
    }

    #[test]
    fn test_decode_revert() {
        let not_added = ValSetDriver_NotAdded.encode();
        assert_eq!(
            not_added,
            selector("ValSetDriver_NotAdded()").to_vec()
        );
        assert_eq!(
            ValSetDriverErrors::decode(&not_added).unwrap(),
            ValSetDriverErrors::ValSetDriver_NotAdded(ValSetDriver_NotAdded)
        );

        let account = Address::repeat_byte(0x77);
        let unauthorized = OwnableUnauthorizedAccount { account }.encode();
        assert_eq!(
            ValSetDriverErrors::decode(&unauthorized).unwrap(),
            ValSetDriverErrors::OwnableUnauthorizedAccount(OwnableUnauthorizedAccount {
                account
            })
        );

        assert!(ValSetDriverErrors::valid_selector(
            <ValSetDriver_InvalidCrossChainAddress as EthError>::selector()
        ));
        assert!(ValSetDriverErrors::valid_selector([0x08, 0xc3, 0x79, 0xa0]));
        assert!(!ValSetDriverErrors::valid_selector(selector(
            "setEpochDuration(uint48)"
        )));
    }

    /// A pub/sub node that answers requests from canned responses and serves a single log
    /// subscription.
    #[derive(Debug, Clone, Default)]
    struct FakeNode {
        responses: Arc<Mutex<HashMap<String, serde_json::Value>>>,
        notifications: Arc<Mutex<Option<UnboundedReceiver<Box<RawValue>>>>>,
        unsubscribed: Arc<AtomicUsize>,
    }

    impl FakeNode {
        fn respond<R: Serialize>(&self, method: &str, response: R) {
            self.responses
                .lock()
                .unwrap()
                .insert(method.to_string(), serde_json::to_value(response).unwrap());
        }

        fn notifications(&self) -> UnboundedSender<Box<RawValue>> {
            let (sender, receiver) = unbounded();
            *self.notifications.lock().unwrap() = Some(receiver);
            sender
        }

        fn unsubscribed(&self) -> usize {
            self.unsubscribed.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JsonRpcClient for FakeNode {
        type Error = MockError;

        async fn request<T, R>(&self, method: &str, _params: T) -> Result<R, MockError>
        where
            T: Debug + Serialize + Send + Sync,
            R: DeserializeOwned + Send,
        {
            let response = self
                .responses
                .lock()
                .unwrap()
                .get(method)
                .cloned()
                .ok_or(MockError::EmptyResponses)?;
            serde_json::from_value(response).map_err(MockError::SerdeJson)
        }
    }

    impl PubsubClient for FakeNode {
        type NotificationStream = UnboundedReceiver<Box<RawValue>>;

        fn subscribe<T: Into<U256>>(&self, _id: T) -> Result<Self::NotificationStream, MockError> {
            self.notifications
                .lock()
                .unwrap()
                .take()
                .ok_or(MockError::EmptyResponses)
        }

        fn unsubscribe<T: Into<U256>>(&self, _id: T) -> Result<(), MockError> {
            self.unsubscribed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn node_driver(node: &FakeNode) -> ValSetDriver<Provider<FakeNode>> {
        ValSetDriver::new(
            Address::repeat_byte(0x11),
            Arc::new(Provider::new(node.clone())),
        )
    }

    fn mined_epoch_duration_log(epoch_duration: u64, block_number: u64, log_index: u64) -> Log {
        Log {
            address: Address::repeat_byte(0x11),
            topics: vec![SetEpochDurationFilter::signature()],
            data: encode(&[Token::Uint(U256::from(epoch_duration))]).into(),
            block_hash: Some(H256::repeat_byte(block_number as u8)),
            block_number: Some(block_number.into()),
            transaction_hash: Some(H256::repeat_byte(0xee)),
            transaction_index: Some(0u64.into()),
            log_index: Some(log_index.into()),
            ..Default::default()
        }
    }

    fn notification(log: &Log) -> Box<RawValue> {
        serde_json::value::to_raw_value(log).unwrap()
    }

    #[tokio::test]
    async fn test_filter_logs_with_meta() {
        let (driver, mock) = mocked_driver();
        mock.push::<Vec<Log>, _>(vec![
            mined_epoch_duration_log(3600, 5, 3),
            mined_epoch_duration_log(7200, 6, 0),
        ])
        .unwrap();

        let logs = driver
            .filter_logs(driver.set_epoch_duration_filter(), 1, Some(10))
            .await
            .unwrap();

        assert_eq!(logs.len(), 2);
        let (event, meta) = &logs[0];
        assert_eq!(event.epoch_duration, 3600);
        assert_eq!(meta.address, Address::repeat_byte(0x11));
        assert_eq!(meta.block_number, U64::from(5));
        assert_eq!(meta.block_hash, H256::repeat_byte(5));
        assert_eq!(meta.transaction_hash, H256::repeat_byte(0xee));
        assert_eq!(meta.log_index, U256::from(3));
        assert_eq!(logs[1].0.epoch_duration, 7200);
        assert_eq!(logs[1].1.block_number, U64::from(6));
    }

    #[tokio::test]
    async fn test_filter_logs_error_is_forwarded() {
        let (driver, _mock) = mocked_driver();
        assert!(driver
            .filter_logs(driver.events(), 0, None)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_watch_delivers_until_unsubscribed() {
        let node = FakeNode::default();
        node.respond("eth_subscribe", U256::from(1));
        let notifications = node.notifications();
        let driver = node_driver(&node);

        let mut subscription = driver.watch(driver.set_epoch_duration_filter());
        notifications
            .unbounded_send(notification(&mined_epoch_duration_log(7200, 8, 0)))
            .unwrap();
        assert_eq!(
            subscription.recv().await.unwrap().unwrap().epoch_duration,
            7200
        );
        assert_eq!(node.unsubscribed(), 0);

        subscription.unsubscribe().await;
        assert_eq!(node.unsubscribed(), 1);
        assert!(notifications.is_closed());
    }

    #[tokio::test]
    async fn test_watch_forwards_subscribe_failure() {
        let node = FakeNode::default();
        let driver = node_driver(&node);

        let mut subscription = driver.watch(driver.events());
        assert!(matches!(
            subscription.recv().await,
            Some(Err(ContractError::MiddlewareError { .. }))
        ));
        assert!(subscription.recv().await.is_none());
        assert_eq!(node.unsubscribed(), 0);
    }

    #[tokio::test]
    async fn test_watch_with_meta_rejects_pending_log() {
        let node = FakeNode::default();
        node.respond("eth_subscribe", U256::from(1));
        let notifications = node.notifications();
        let driver = node_driver(&node);

        let mut subscription = driver.watch_with_meta(driver.set_epoch_duration_filter());
        let mut pending = mined_epoch_duration_log(60, 9, 0);
        pending.block_number = None;
        notifications
            .unbounded_send(notification(&pending))
            .unwrap();
        notifications
            .unbounded_send(notification(&mined_epoch_duration_log(120, 9, 1)))
            .unwrap();

        assert!(matches!(
            subscription.recv().await,
            Some(Err(ContractError::DecodingError(_)))
        ));
        let (event, meta) = subscription.recv().await.unwrap().unwrap();
        assert_eq!(event.epoch_duration, 120);
        assert_eq!(meta.log_index, U256::from(1));

        subscription.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_watch_from_replays_then_follows() {
        let node = FakeNode::default();
        node.respond("eth_subscribe", U256::from(1));
        node.respond("eth_blockNumber", U64::from(7));
        node.respond("eth_getLogs", vec![mined_epoch_duration_log(3600, 5, 3)]);
        let notifications = node.notifications();
        let driver = node_driver(&node);

        let replay = driver
            .watch_from(driver.set_epoch_duration_filter(), 1)
            .await
            .unwrap();
        assert_eq!(replay.replayed_to, 7);
        assert_eq!(replay.history.len(), 1);
        assert_eq!(replay.history[0].0.epoch_duration, 3600);
        assert_eq!(replay.history[0].1.block_number, U64::from(5));

        let mut live = replay.live;
        notifications
            .unbounded_send(notification(&mined_epoch_duration_log(1800, 7, 0)))
            .unwrap();
        notifications
            .unbounded_send(notification(&mined_epoch_duration_log(900, 9, 1)))
            .unwrap();

        // Already covered by the replayed range.
        let (event, meta) = live.recv().await.unwrap().unwrap();
        assert_eq!(event.epoch_duration, 1800);
        assert!(meta.block_number.as_u64() <= replay.replayed_to);

        let (event, meta) = live.recv().await.unwrap().unwrap();
        assert_eq!(event.epoch_duration, 900);
        assert!(meta.block_number.as_u64() > replay.replayed_to);

        live.unsubscribe().await;
        assert_eq!(node.unsubscribed(), 1);
    }

    #[tokio::test]
    async fn test_watch_from_returns_subscribe_failure() {
        let node = FakeNode::default();
        node.respond("eth_blockNumber", U64::from(7));
        let driver = node_driver(&node);

        let replay = driver
            .watch_from(driver.set_epoch_duration_filter(), 1)
            .await;
        assert!(matches!(
            replay,
            Err(ContractError::MiddlewareError { .. })
        ));
    }
}
