pub use val_set_driver::*;
/// This module was auto-generated with ethers-rs Abigen.
/// More information at: <https://github.com/gakonst/ethers-rs>
#[allow(
    clippy::enum_variant_names,
    clippy::too_many_arguments,
    clippy::upper_case_acronyms,
    clippy::type_complexity,
    dead_code,
    non_camel_case_types,
)]
pub mod val_set_driver {
    #[allow(deprecated)]
    fn __abi() -> ::ethers::core::abi::Abi {
        ::ethers::core::abi::ethabi::Contract {
            constructor: ::core::option::Option::None,
            functions: ::core::convert::From::from([
                (
                    ::std::borrow::ToOwned::to_owned("NETWORK"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("NETWORK"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SUBNETWORK"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("SUBNETWORK"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::FixedBytes(32usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bytes32"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SUBNETWORK_IDENTIFIER"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("SUBNETWORK_IDENTIFIER"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(96usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint96"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("addQuorumThreshold"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("addQuorumThreshold"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("quorumThreshold"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.QuorumThreshold"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("addSettlement"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("addSettlement"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("settlement"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("addVotingPowerProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("addVotingPowerProvider"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("votingPowerProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("eip712Domain"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("eip712Domain"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("fields"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::FixedBytes(1usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bytes1"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("name"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::String,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("string"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("version"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::String,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("string"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("chainId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("verifyingContract"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("salt"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::FixedBytes(32usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bytes32"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("extensions"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getConfig"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getConfig"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                        ::std::vec![
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                                        ],
                                                    ),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Address,
                                                ],
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                        ::std::vec![
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                                        ],
                                                    ),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                        ::std::vec![
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                                        ],
                                                    ),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(32usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.Config"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getConfigAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getConfigAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                        ::std::vec![
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                                        ],
                                                    ),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Address,
                                                ],
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                        ::std::vec![
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                                        ],
                                                    ),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Array(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                        ::std::vec![
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                                        ],
                                                    ),
                                                ),
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(32usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.Config"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getCurrentEpoch"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getCurrentEpoch"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getCurrentEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getCurrentEpochDuration"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getCurrentEpochStart"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getCurrentEpochStart"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getEpochDuration"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("epoch"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getEpochIndex"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getEpochIndex"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getEpochStart"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getEpochStart"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("epoch"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getKeysProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getKeysProvider"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getKeysProviderAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getKeysProviderAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getMaxValidatorsCount"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getMaxValidatorsCount"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getMaxValidatorsCountAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getMaxValidatorsCountAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getMaxVotingPower"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getMaxVotingPower"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getMaxVotingPowerAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getMaxVotingPowerAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getMinInclusionVotingPower"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getMinInclusionVotingPower"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getMinInclusionVotingPowerAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getMinInclusionVotingPowerAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNextEpoch"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNextEpoch"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNextEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNextEpochDuration"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNextEpochStart"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNextEpochStart"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNumAggregators"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNumAggregators"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNumAggregatorsAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNumAggregatorsAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNumCommitters"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNumCommitters"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getNumCommittersAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getNumCommittersAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getQuorumThresholds"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getQuorumThresholds"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.QuorumThreshold[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getQuorumThresholdsAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getQuorumThresholdsAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.QuorumThreshold[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getRequiredHeaderKeyTag"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getRequiredHeaderKeyTag"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint8"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getRequiredHeaderKeyTagAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getRequiredHeaderKeyTagAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint8"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getRequiredKeyTags"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getRequiredKeyTags"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint8[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getRequiredKeyTagsAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getRequiredKeyTagsAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint8[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getSettlements"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getSettlements"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Address,
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getSettlementsAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getSettlementsAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Address,
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getVerificationType"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getVerificationType"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(32usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint32"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getVerificationTypeAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getVerificationTypeAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(32usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint32"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getVotingPowerProviders"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getVotingPowerProviders"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Address,
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getVotingPowerProvidersAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getVotingPowerProvidersAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                                    ::ethers::core::abi::ethabi::ParamType::Address,
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("isQuorumThresholdRegistered"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("isQuorumThresholdRegistered"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("quorumThreshold"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.QuorumThreshold"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("isQuorumThresholdRegisteredAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("isQuorumThresholdRegisteredAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("quorumThreshold"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.QuorumThreshold"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("isSettlementRegistered"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("isSettlementRegistered"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("settlement"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("isSettlementRegisteredAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("isSettlementRegisteredAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("settlement"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("isVotingPowerProviderRegistered"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("isVotingPowerProviderRegistered"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("votingPowerProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("isVotingPowerProviderRegisteredAt"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("isVotingPowerProviderRegisteredAt"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("votingPowerProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("multicall"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("multicall"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("data"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Bytes,
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bytes[]"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("results"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Bytes,
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bytes[]"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("owner"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("owner"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("removeQuorumThreshold"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("removeQuorumThreshold"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("quorumThreshold"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.QuorumThreshold"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("removeSettlement"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("removeSettlement"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("settlement"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("removeVotingPowerProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("removeVotingPowerProvider"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("votingPowerProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("renounceOwnership"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("renounceOwnership"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setEpochDuration"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("epochDuration"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint48"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setKeysProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setKeysProvider"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("keysProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct IValSetDriver.CrossChainAddress"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setMaxValidatorsCount"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setMaxValidatorsCount"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("maxValidatorsCount"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setMaxVotingPower"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setMaxVotingPower"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("maxVotingPower"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setMinInclusionVotingPower"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setMinInclusionVotingPower"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("minInclusionVotingPower"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setNumAggregators"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setNumAggregators"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("numAggregators"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setNumCommitters"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setNumCommitters"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("numCommitters"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint208"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setRequiredHeaderKeyTag"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setRequiredHeaderKeyTag"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("requiredHeaderKeyTag"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint8"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setRequiredKeyTags"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setRequiredKeyTags"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("requiredKeyTags"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint8[]"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setVerificationType"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setVerificationType"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("verificationType"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(32usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint32"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("transferOwnership"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("transferOwnership"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("newOwner"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
            ]),
            events: ::core::convert::From::from([
                (
                    ::std::borrow::ToOwned::to_owned("AddQuorumThreshold"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("AddQuorumThreshold"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("quorumThreshold"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("AddSettlement"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("AddSettlement"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("settlement"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("AddVotingPowerProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("AddVotingPowerProvider"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("votingPowerProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("EIP712DomainChanged"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("EIP712DomainChanged"),
                            inputs: ::std::vec![],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("InitEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("InitEpochDuration"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("epochDuration"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    indexed: false,
                                },
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("epochDurationTimestamp"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("InitSubnetwork"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("InitSubnetwork"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("network"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    indexed: false,
                                },
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("subnetworkId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(96usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("Initialized"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("Initialized"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("version"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("OwnershipTransferred"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("OwnershipTransferred"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("previousOwner"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    indexed: true,
                                },
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("newOwner"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    indexed: true,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("RemoveQuorumThreshold"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("RemoveQuorumThreshold"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("quorumThreshold"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(248usize),
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("RemoveSettlement"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("RemoveSettlement"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("settlement"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("RemoveVotingPowerProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("RemoveVotingPowerProvider"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("votingPowerProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetEpochDuration"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("epochDuration"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(48usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetKeysProvider"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetKeysProvider"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("keysProvider"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(64usize),
                                            ::ethers::core::abi::ethabi::ParamType::Address,
                                        ],
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetMaxValidatorsCount"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetMaxValidatorsCount"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("maxValidatorsCount"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetMaxVotingPower"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetMaxVotingPower"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("maxVotingPower"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetMinInclusionVotingPower"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetMinInclusionVotingPower"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("minInclusionVotingPower"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetNumAggregators"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetNumAggregators"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("numAggregators"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetNumCommitters"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetNumCommitters"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("numCommitters"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(208usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetRequiredHeaderKeyTag"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetRequiredHeaderKeyTag"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("requiredHeaderKeyTag"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetRequiredKeyTags"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetRequiredKeyTags"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("requiredKeyTags"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                        ),
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("SetVerificationType"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("SetVerificationType"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("verificationType"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(32usize),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
            ]),
            errors: ::core::convert::From::from([
                (
                    ::std::borrow::ToOwned::to_owned("CheckpointUnorderedInsertion"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("CheckpointUnorderedInsertion"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("EpochManager_InvalidEpochDuration"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("EpochManager_InvalidEpochDuration"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("EpochManager_InvalidEpochDurationTimestamp"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("EpochManager_InvalidEpochDurationTimestamp"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("EpochManager_TooOldTimestamp"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("EpochManager_TooOldTimestamp"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("InvalidInitialization"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("InvalidInitialization"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("NetworkManager_InvalidNetwork"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("NetworkManager_InvalidNetwork"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("NotInitializing"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("NotInitializing"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("OwnableInvalidOwner"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("OwnableInvalidOwner"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("owner"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                            ],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("OwnableUnauthorizedAccount"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("OwnableUnauthorizedAccount"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("account"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                            ],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_ChainAlreadyAdded"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_ChainAlreadyAdded"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_InvalidCrossChainAddress"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_InvalidCrossChainAddress"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_InvalidMaxValidatorsCount"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_InvalidMaxValidatorsCount"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_InvalidQuorumThreshold"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_InvalidQuorumThreshold"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_KeyTagAlreadyAdded"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_KeyTagAlreadyAdded"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_NotAdded"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_NotAdded"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_ZeroNumAggregators"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_ZeroNumAggregators"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ValSetDriver_ZeroNumCommitters"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::AbiError {
                            name: ::std::borrow::ToOwned::to_owned("ValSetDriver_ZeroNumCommitters"),
                            inputs: ::std::vec![],
                        },
                    ],
                ),
            ]),
            receive: false,
            fallback: false,
        }
    }
    ///The parsed JSON ABI of the contract.
    pub static VALSETDRIVER_ABI: ::ethers::contract::Lazy<::ethers::core::abi::Abi> = ::ethers::contract::Lazy::new(
        __abi,
    );
    pub struct ValSetDriver<M>(::ethers::contract::Contract<M>);
    impl<M> ::core::clone::Clone for ValSetDriver<M> {
        fn clone(&self) -> Self {
            Self(::core::clone::Clone::clone(&self.0))
        }
    }
    impl<M> ::core::ops::Deref for ValSetDriver<M> {
        type Target = ::ethers::contract::Contract<M>;
        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
    impl<M> ::core::ops::DerefMut for ValSetDriver<M> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }
    impl<M> ::core::fmt::Debug for ValSetDriver<M> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            f.debug_tuple(::core::stringify!(ValSetDriver))
                .field(&self.address())
                .finish()
        }
    }
    impl<M: ::ethers::providers::Middleware> ValSetDriver<M> {
        /// Creates a new contract instance with the specified `ethers` client at
        /// `address`. The contract derefs to a `ethers::Contract` object.
        pub fn new<T: Into<::ethers::core::types::Address>>(
            address: T,
            client: ::std::sync::Arc<M>,
        ) -> Self {
            Self(
                ::ethers::contract::Contract::new(
                    address.into(),
                    VALSETDRIVER_ABI.clone(),
                    client,
                ),
            )
        }
        ///Calls the contract's `NETWORK` (0x8759e6d1) function
        pub fn network(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::Address> {
            self.0
                .method_hash([135, 89, 230, 209], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `SUBNETWORK` (0x773e6b54) function
        pub fn subnetwork(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, [u8; 32]> {
            self.0
                .method_hash([119, 62, 107, 84], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `SUBNETWORK_IDENTIFIER` (0xabacb807) function
        pub fn subnetwork_identifier(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u128> {
            self.0
                .method_hash([171, 172, 184, 7], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `addQuorumThreshold` (0x0fe5e0c2) function
        pub fn add_quorum_threshold(
            &self,
            quorum_threshold: QuorumThreshold,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([15, 229, 224, 194], (quorum_threshold,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `addSettlement` (0x52ab8872) function
        pub fn add_settlement(
            &self,
            settlement: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([82, 171, 136, 114], (settlement,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `addVotingPowerProvider` (0x6940ed80) function
        pub fn add_voting_power_provider(
            &self,
            voting_power_provider: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([105, 64, 237, 128], (voting_power_provider,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `eip712Domain` (0x84b0196e) function
        pub fn eip_712_domain(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<
            M,
            (
                [u8; 1],
                ::std::string::String,
                ::std::string::String,
                ::ethers::core::types::U256,
                ::ethers::core::types::Address,
                [u8; 32],
                ::std::vec::Vec<::ethers::core::types::U256>,
            ),
        > {
            self.0
                .method_hash([132, 176, 25, 110], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getConfig` (0xc3f909d4) function
        pub fn get_config(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, Config> {
            self.0
                .method_hash([195, 249, 9, 212], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getConfigAt` (0x13fb0877) function
        pub fn get_config_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, Config> {
            self.0
                .method_hash([19, 251, 8, 119], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getCurrentEpoch` (0xb97dd9e2) function
        pub fn get_current_epoch(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([185, 125, 217, 226], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getCurrentEpochDuration` (0x558e2eb6) function
        pub fn get_current_epoch_duration(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([85, 142, 46, 182], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getCurrentEpochStart` (0xa6e16c4d) function
        pub fn get_current_epoch_start(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([166, 225, 108, 77], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getEpochDuration` (0xf6fd6f14) function
        pub fn get_epoch_duration(
            &self,
            epoch: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([246, 253, 111, 20], epoch)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getEpochIndex` (0xccafd209) function
        pub fn get_epoch_index(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([204, 175, 210, 9], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getEpochStart` (0x246e158f) function
        pub fn get_epoch_start(
            &self,
            epoch: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([36, 110, 21, 143], epoch)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getKeysProvider` (0x297d29b8) function
        pub fn get_keys_provider(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, CrossChainAddress> {
            self.0
                .method_hash([41, 125, 41, 184], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getKeysProviderAt` (0x10a49295) function
        pub fn get_keys_provider_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, CrossChainAddress> {
            self.0
                .method_hash([16, 164, 146, 149], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getMaxValidatorsCount` (0x06ce894d) function
        pub fn get_max_validators_count(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([6, 206, 137, 77], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getMaxValidatorsCountAt` (0x4f938edc) function
        pub fn get_max_validators_count_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([79, 147, 142, 220], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getMaxVotingPower` (0x9f9c3080) function
        pub fn get_max_voting_power(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([159, 156, 48, 128], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getMaxVotingPowerAt` (0x848b3040) function
        pub fn get_max_voting_power_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([132, 139, 48, 64], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getMinInclusionVotingPower` (0xb6a94695) function
        pub fn get_min_inclusion_voting_power(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([182, 169, 70, 149], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getMinInclusionVotingPowerAt` (0x456705a2) function
        pub fn get_min_inclusion_voting_power_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([69, 103, 5, 162], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNextEpoch` (0xefe97d05) function
        pub fn get_next_epoch(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([239, 233, 125, 5], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNextEpochDuration` (0x038cf1c0) function
        pub fn get_next_epoch_duration(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([3, 140, 241, 192], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNextEpochStart` (0x65c5f94a) function
        pub fn get_next_epoch_start(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u64> {
            self.0
                .method_hash([101, 197, 249, 74], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNumAggregators` (0x21fbfe0d) function
        pub fn get_num_aggregators(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([33, 251, 254, 13], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNumAggregatorsAt` (0x6bb7e08a) function
        pub fn get_num_aggregators_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([107, 183, 224, 138], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNumCommitters` (0x7861db16) function
        pub fn get_num_committers(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([120, 97, 219, 22], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getNumCommittersAt` (0xe0078c64) function
        pub fn get_num_committers_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([224, 7, 140, 100], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getQuorumThresholds` (0x5796148c) function
        pub fn get_quorum_thresholds(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<QuorumThreshold>> {
            self.0
                .method_hash([87, 150, 20, 140], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getQuorumThresholdsAt` (0xf2f46b83) function
        pub fn get_quorum_thresholds_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<QuorumThreshold>> {
            self.0
                .method_hash([242, 244, 107, 131], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getRequiredHeaderKeyTag` (0x6582e9f7) function
        pub fn get_required_header_key_tag(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u8> {
            self.0
                .method_hash([101, 130, 233, 247], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getRequiredHeaderKeyTagAt` (0xbc12e1fd) function
        pub fn get_required_header_key_tag_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, u8> {
            self.0
                .method_hash([188, 18, 225, 253], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getRequiredKeyTags` (0xf9bfa78a) function
        pub fn get_required_key_tags(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<u8>> {
            self.0
                .method_hash([249, 191, 167, 138], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getRequiredKeyTagsAt` (0x1161fc83) function
        pub fn get_required_key_tags_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<u8>> {
            self.0
                .method_hash([17, 97, 252, 131], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getSettlements` (0xa0c2bc25) function
        pub fn get_settlements(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<CrossChainAddress>> {
            self.0
                .method_hash([160, 194, 188, 37], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getSettlementsAt` (0x763d255a) function
        pub fn get_settlements_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<CrossChainAddress>> {
            self.0
                .method_hash([118, 61, 37, 90], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getVerificationType` (0x24acc119) function
        pub fn get_verification_type(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, u32> {
            self.0
                .method_hash([36, 172, 193, 25], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getVerificationTypeAt` (0x3a0ad9ec) function
        pub fn get_verification_type_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, u32> {
            self.0
                .method_hash([58, 10, 217, 236], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getVotingPowerProviders` (0x3e39b8db) function
        pub fn get_voting_power_providers(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<CrossChainAddress>> {
            self.0
                .method_hash([62, 57, 184, 219], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getVotingPowerProvidersAt` (0x09bba5ca) function
        pub fn get_voting_power_providers_at(
            &self,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ::std::vec::Vec<CrossChainAddress>> {
            self.0
                .method_hash([9, 187, 165, 202], timestamp)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `isQuorumThresholdRegistered` (0x79a4c359) function
        pub fn is_quorum_threshold_registered(
            &self,
            quorum_threshold: QuorumThreshold,
        ) -> ::ethers::contract::builders::ContractCall<M, bool> {
            self.0
                .method_hash([121, 164, 195, 89], (quorum_threshold,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `isQuorumThresholdRegisteredAt` (0x80c2fc48) function
        pub fn is_quorum_threshold_registered_at(
            &self,
            quorum_threshold: QuorumThreshold,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, bool> {
            self.0
                .method_hash([128, 194, 252, 72], (quorum_threshold, timestamp))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `isSettlementRegistered` (0x965c0768) function
        pub fn is_settlement_registered(
            &self,
            settlement: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, bool> {
            self.0
                .method_hash([150, 92, 7, 104], (settlement,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `isSettlementRegisteredAt` (0x01749b26) function
        pub fn is_settlement_registered_at(
            &self,
            settlement: CrossChainAddress,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, bool> {
            self.0
                .method_hash([1, 116, 155, 38], (settlement, timestamp))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `isVotingPowerProviderRegistered` (0x1265b3be) function
        pub fn is_voting_power_provider_registered(
            &self,
            voting_power_provider: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, bool> {
            self.0
                .method_hash([18, 101, 179, 190], (voting_power_provider,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `isVotingPowerProviderRegisteredAt` (0xc16ccb73) function
        pub fn is_voting_power_provider_registered_at(
            &self,
            voting_power_provider: CrossChainAddress,
            timestamp: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, bool> {
            self.0
                .method_hash([193, 108, 203, 115], (voting_power_provider, timestamp))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `multicall` (0xac9650d8) function
        pub fn multicall(
            &self,
            data: ::std::vec::Vec<::ethers::core::types::Bytes>,
        ) -> ::ethers::contract::builders::ContractCall<
            M,
            ::std::vec::Vec<::ethers::core::types::Bytes>,
        > {
            self.0
                .method_hash([172, 150, 80, 216], data)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `owner` (0x8da5cb5b) function
        pub fn owner(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::Address> {
            self.0
                .method_hash([141, 165, 203, 91], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `removeQuorumThreshold` (0xf388db18) function
        pub fn remove_quorum_threshold(
            &self,
            quorum_threshold: QuorumThreshold,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([243, 136, 219, 24], (quorum_threshold,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `removeSettlement` (0x502bb1ad) function
        pub fn remove_settlement(
            &self,
            settlement: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([80, 43, 177, 173], (settlement,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `removeVotingPowerProvider` (0x325234d5) function
        pub fn remove_voting_power_provider(
            &self,
            voting_power_provider: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([50, 82, 52, 213], (voting_power_provider,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `renounceOwnership` (0x715018a6) function
        pub fn renounce_ownership(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([113, 80, 24, 166], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setEpochDuration` (0x2f53d5ff) function
        pub fn set_epoch_duration(
            &self,
            epoch_duration: u64,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([47, 83, 213, 255], epoch_duration)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setKeysProvider` (0xdd08bbff) function
        pub fn set_keys_provider(
            &self,
            keys_provider: CrossChainAddress,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([221, 8, 187, 255], (keys_provider,))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setMaxValidatorsCount` (0xd2384cd3) function
        pub fn set_max_validators_count(
            &self,
            max_validators_count: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([210, 56, 76, 211], max_validators_count)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setMaxVotingPower` (0xf6af258c) function
        pub fn set_max_voting_power(
            &self,
            max_voting_power: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([246, 175, 37, 140], max_voting_power)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setMinInclusionVotingPower` (0xfaae42d7) function
        pub fn set_min_inclusion_voting_power(
            &self,
            min_inclusion_voting_power: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([250, 174, 66, 215], min_inclusion_voting_power)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setNumAggregators` (0x0dec288b) function
        pub fn set_num_aggregators(
            &self,
            num_aggregators: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([13, 236, 40, 139], num_aggregators)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setNumCommitters` (0x15ddbbe8) function
        pub fn set_num_committers(
            &self,
            num_committers: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([21, 221, 187, 232], num_committers)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setRequiredHeaderKeyTag` (0xd9736e12) function
        pub fn set_required_header_key_tag(
            &self,
            required_header_key_tag: u8,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([217, 115, 110, 18], required_header_key_tag)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setRequiredKeyTags` (0x4678a284) function
        pub fn set_required_key_tags(
            &self,
            required_key_tags: ::std::vec::Vec<u8>,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([70, 120, 162, 132], required_key_tags)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setVerificationType` (0x7b8ef42d) function
        pub fn set_verification_type(
            &self,
            verification_type: u32,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([123, 142, 244, 45], verification_type)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `transferOwnership` (0xf2fde38b) function
        pub fn transfer_ownership(
            &self,
            new_owner: ::ethers::core::types::Address,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([242, 253, 227, 139], new_owner)
                .expect("method not found (this should never happen)")
        }
        ///Gets the contract's `AddQuorumThreshold` event
        pub fn add_quorum_threshold_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            AddQuorumThresholdFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `AddSettlement` event
        pub fn add_settlement_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            AddSettlementFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `AddVotingPowerProvider` event
        pub fn add_voting_power_provider_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            AddVotingPowerProviderFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `EIP712DomainChanged` event
        pub fn eip712_domain_changed_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            Eip712DomainChangedFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `InitEpochDuration` event
        pub fn init_epoch_duration_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            InitEpochDurationFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `InitSubnetwork` event
        pub fn init_subnetwork_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            InitSubnetworkFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `Initialized` event
        pub fn initialized_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            InitializedFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `OwnershipTransferred` event
        pub fn ownership_transferred_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            OwnershipTransferredFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `RemoveQuorumThreshold` event
        pub fn remove_quorum_threshold_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            RemoveQuorumThresholdFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `RemoveSettlement` event
        pub fn remove_settlement_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            RemoveSettlementFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `RemoveVotingPowerProvider` event
        pub fn remove_voting_power_provider_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            RemoveVotingPowerProviderFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetEpochDuration` event
        pub fn set_epoch_duration_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetEpochDurationFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetKeysProvider` event
        pub fn set_keys_provider_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetKeysProviderFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetMaxValidatorsCount` event
        pub fn set_max_validators_count_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetMaxValidatorsCountFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetMaxVotingPower` event
        pub fn set_max_voting_power_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetMaxVotingPowerFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetMinInclusionVotingPower` event
        pub fn set_min_inclusion_voting_power_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetMinInclusionVotingPowerFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetNumAggregators` event
        pub fn set_num_aggregators_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetNumAggregatorsFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetNumCommitters` event
        pub fn set_num_committers_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetNumCommittersFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetRequiredHeaderKeyTag` event
        pub fn set_required_header_key_tag_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetRequiredHeaderKeyTagFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetRequiredKeyTags` event
        pub fn set_required_key_tags_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetRequiredKeyTagsFilter,
        > {
            self.0.event()
        }
        ///Gets the contract's `SetVerificationType` event
        pub fn set_verification_type_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            SetVerificationTypeFilter,
        > {
            self.0.event()
        }
        /// Returns an `Event` builder for all the events of this contract.
        pub fn events(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            ValSetDriverEvents,
        > {
            self.0.event_with_filter(::core::default::Default::default())
        }
    }
    impl<M: ::ethers::providers::Middleware> From<::ethers::contract::Contract<M>>
    for ValSetDriver<M> {
        fn from(contract: ::ethers::contract::Contract<M>) -> Self {
            Self::new(contract.address(), contract.client())
        }
    }
    ///Custom Error type `CheckpointUnorderedInsertion` with signature `CheckpointUnorderedInsertion()` and selector `0x2520601d`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "CheckpointUnorderedInsertion", abi = "CheckpointUnorderedInsertion()")]
    pub struct CheckpointUnorderedInsertion;
    ///Custom Error type `EpochManager_InvalidEpochDuration` with signature `EpochManager_InvalidEpochDuration()` and selector `0x4c9b40df`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "EpochManager_InvalidEpochDuration",
        abi = "EpochManager_InvalidEpochDuration()"
    )]
    pub struct EpochManager_InvalidEpochDuration;
    ///Custom Error type `EpochManager_InvalidEpochDurationTimestamp` with signature `EpochManager_InvalidEpochDurationTimestamp()` and selector `0x4d42b44d`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "EpochManager_InvalidEpochDurationTimestamp",
        abi = "EpochManager_InvalidEpochDurationTimestamp()"
    )]
    pub struct EpochManager_InvalidEpochDurationTimestamp;
    ///Custom Error type `EpochManager_TooOldTimestamp` with signature `EpochManager_TooOldTimestamp()` and selector `0xe9eb4135`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "EpochManager_TooOldTimestamp", abi = "EpochManager_TooOldTimestamp()")]
    pub struct EpochManager_TooOldTimestamp;
    ///Custom Error type `InvalidInitialization` with signature `InvalidInitialization()` and selector `0xf92ee8a9`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "InvalidInitialization", abi = "InvalidInitialization()")]
    pub struct InvalidInitialization;
    ///Custom Error type `NetworkManager_InvalidNetwork` with signature `NetworkManager_InvalidNetwork()` and selector `0x3248e86b`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "NetworkManager_InvalidNetwork", abi = "NetworkManager_InvalidNetwork()")]
    pub struct NetworkManager_InvalidNetwork;
    ///Custom Error type `NotInitializing` with signature `NotInitializing()` and selector `0xd7e6bcf8`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "NotInitializing", abi = "NotInitializing()")]
    pub struct NotInitializing;
    ///Custom Error type `OwnableInvalidOwner` with signature `OwnableInvalidOwner(address)` and selector `0x1e4fbdf7`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "OwnableInvalidOwner", abi = "OwnableInvalidOwner(address)")]
    pub struct OwnableInvalidOwner {
        pub owner: ::ethers::core::types::Address,
    }
    ///Custom Error type `OwnableUnauthorizedAccount` with signature `OwnableUnauthorizedAccount(address)` and selector `0x118cdaa7`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "OwnableUnauthorizedAccount", abi = "OwnableUnauthorizedAccount(address)")]
    pub struct OwnableUnauthorizedAccount {
        pub account: ::ethers::core::types::Address,
    }
    ///Custom Error type `ValSetDriver_ChainAlreadyAdded` with signature `ValSetDriver_ChainAlreadyAdded()` and selector `0xd90fb0a4`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "ValSetDriver_ChainAlreadyAdded", abi = "ValSetDriver_ChainAlreadyAdded()")]
    pub struct ValSetDriver_ChainAlreadyAdded;
    ///Custom Error type `ValSetDriver_InvalidCrossChainAddress` with signature `ValSetDriver_InvalidCrossChainAddress()` and selector `0x5488f8b4`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "ValSetDriver_InvalidCrossChainAddress",
        abi = "ValSetDriver_InvalidCrossChainAddress()"
    )]
    pub struct ValSetDriver_InvalidCrossChainAddress;
    ///Custom Error type `ValSetDriver_InvalidMaxValidatorsCount` with signature `ValSetDriver_InvalidMaxValidatorsCount()` and selector `0x19c06de2`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "ValSetDriver_InvalidMaxValidatorsCount",
        abi = "ValSetDriver_InvalidMaxValidatorsCount()"
    )]
    pub struct ValSetDriver_InvalidMaxValidatorsCount;
    ///Custom Error type `ValSetDriver_InvalidQuorumThreshold` with signature `ValSetDriver_InvalidQuorumThreshold()` and selector `0xb1251388`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "ValSetDriver_InvalidQuorumThreshold",
        abi = "ValSetDriver_InvalidQuorumThreshold()"
    )]
    pub struct ValSetDriver_InvalidQuorumThreshold;
    ///Custom Error type `ValSetDriver_KeyTagAlreadyAdded` with signature `ValSetDriver_KeyTagAlreadyAdded()` and selector `0x3288a7ac`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "ValSetDriver_KeyTagAlreadyAdded",
        abi = "ValSetDriver_KeyTagAlreadyAdded()"
    )]
    pub struct ValSetDriver_KeyTagAlreadyAdded;
    ///Custom Error type `ValSetDriver_NotAdded` with signature `ValSetDriver_NotAdded()` and selector `0x940322b5`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "ValSetDriver_NotAdded", abi = "ValSetDriver_NotAdded()")]
    pub struct ValSetDriver_NotAdded;
    ///Custom Error type `ValSetDriver_ZeroNumAggregators` with signature `ValSetDriver_ZeroNumAggregators()` and selector `0x8c13162f`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(
        name = "ValSetDriver_ZeroNumAggregators",
        abi = "ValSetDriver_ZeroNumAggregators()"
    )]
    pub struct ValSetDriver_ZeroNumAggregators;
    ///Custom Error type `ValSetDriver_ZeroNumCommitters` with signature `ValSetDriver_ZeroNumCommitters()` and selector `0xa1b11c66`
    #[derive(
        Clone,
        ::ethers::contract::EthError,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[etherror(name = "ValSetDriver_ZeroNumCommitters", abi = "ValSetDriver_ZeroNumCommitters()")]
    pub struct ValSetDriver_ZeroNumCommitters;
    ///Container type for all of the contract's custom errors
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        serde::Serialize,
        serde::Deserialize,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub enum ValSetDriverErrors {
        CheckpointUnorderedInsertion(CheckpointUnorderedInsertion),
        EpochManager_InvalidEpochDuration(EpochManager_InvalidEpochDuration),
        EpochManager_InvalidEpochDurationTimestamp(EpochManager_InvalidEpochDurationTimestamp),
        EpochManager_TooOldTimestamp(EpochManager_TooOldTimestamp),
        InvalidInitialization(InvalidInitialization),
        NetworkManager_InvalidNetwork(NetworkManager_InvalidNetwork),
        NotInitializing(NotInitializing),
        OwnableInvalidOwner(OwnableInvalidOwner),
        OwnableUnauthorizedAccount(OwnableUnauthorizedAccount),
        ValSetDriver_ChainAlreadyAdded(ValSetDriver_ChainAlreadyAdded),
        ValSetDriver_InvalidCrossChainAddress(ValSetDriver_InvalidCrossChainAddress),
        ValSetDriver_InvalidMaxValidatorsCount(ValSetDriver_InvalidMaxValidatorsCount),
        ValSetDriver_InvalidQuorumThreshold(ValSetDriver_InvalidQuorumThreshold),
        ValSetDriver_KeyTagAlreadyAdded(ValSetDriver_KeyTagAlreadyAdded),
        ValSetDriver_NotAdded(ValSetDriver_NotAdded),
        ValSetDriver_ZeroNumAggregators(ValSetDriver_ZeroNumAggregators),
        ValSetDriver_ZeroNumCommitters(ValSetDriver_ZeroNumCommitters),
        /// The standard solidity revert string, with selector
        /// Error(string) -- 0x08c379a0
        RevertString(::std::string::String),
    }
    impl ::ethers::core::abi::AbiDecode for ValSetDriverErrors {
        fn decode(
            data: impl AsRef<[u8]>,
        ) -> ::core::result::Result<Self, ::ethers::core::abi::AbiError> {
            let data = data.as_ref();
            if let Ok(decoded) = <::std::string::String as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::RevertString(decoded));
            }
            if let Ok(decoded) = <CheckpointUnorderedInsertion as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::CheckpointUnorderedInsertion(decoded));
            }
            if let Ok(decoded) = <EpochManager_InvalidEpochDuration as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::EpochManager_InvalidEpochDuration(decoded));
            }
            if let Ok(decoded) = <EpochManager_InvalidEpochDurationTimestamp as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::EpochManager_InvalidEpochDurationTimestamp(decoded));
            }
            if let Ok(decoded) = <EpochManager_TooOldTimestamp as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::EpochManager_TooOldTimestamp(decoded));
            }
            if let Ok(decoded) = <InvalidInitialization as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::InvalidInitialization(decoded));
            }
            if let Ok(decoded) = <NetworkManager_InvalidNetwork as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::NetworkManager_InvalidNetwork(decoded));
            }
            if let Ok(decoded) = <NotInitializing as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::NotInitializing(decoded));
            }
            if let Ok(decoded) = <OwnableInvalidOwner as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::OwnableInvalidOwner(decoded));
            }
            if let Ok(decoded) = <OwnableUnauthorizedAccount as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::OwnableUnauthorizedAccount(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_ChainAlreadyAdded as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_ChainAlreadyAdded(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_InvalidCrossChainAddress as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_InvalidCrossChainAddress(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_InvalidMaxValidatorsCount as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_InvalidMaxValidatorsCount(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_InvalidQuorumThreshold as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_InvalidQuorumThreshold(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_KeyTagAlreadyAdded as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_KeyTagAlreadyAdded(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_NotAdded as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_NotAdded(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_ZeroNumAggregators as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_ZeroNumAggregators(decoded));
            }
            if let Ok(decoded) = <ValSetDriver_ZeroNumCommitters as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ValSetDriver_ZeroNumCommitters(decoded));
            }
            Err(::ethers::core::abi::Error::InvalidData.into())
        }
    }
    impl ::ethers::core::abi::AbiEncode for ValSetDriverErrors {
        fn encode(self) -> ::std::vec::Vec<u8> {
            match self {
                Self::CheckpointUnorderedInsertion(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::EpochManager_InvalidEpochDuration(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::EpochManager_InvalidEpochDurationTimestamp(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::EpochManager_TooOldTimestamp(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::InvalidInitialization(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::NetworkManager_InvalidNetwork(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::NotInitializing(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::OwnableInvalidOwner(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::OwnableUnauthorizedAccount(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_ChainAlreadyAdded(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_InvalidCrossChainAddress(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_InvalidMaxValidatorsCount(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_InvalidQuorumThreshold(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_KeyTagAlreadyAdded(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_NotAdded(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_ZeroNumAggregators(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ValSetDriver_ZeroNumCommitters(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::RevertString(s) => ::ethers::core::abi::AbiEncode::encode(s),
            }
        }
    }
    impl ::ethers::contract::ContractRevert for ValSetDriverErrors {
        fn valid_selector(selector: [u8; 4]) -> bool {
            match selector {
                [0x08, 0xc3, 0x79, 0xa0] => true,
                _ if selector
                    == <CheckpointUnorderedInsertion as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <EpochManager_InvalidEpochDuration as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <EpochManager_InvalidEpochDurationTimestamp as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <EpochManager_TooOldTimestamp as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <InvalidInitialization as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <NetworkManager_InvalidNetwork as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <NotInitializing as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <OwnableInvalidOwner as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <OwnableUnauthorizedAccount as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_ChainAlreadyAdded as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_InvalidCrossChainAddress as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_InvalidMaxValidatorsCount as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_InvalidQuorumThreshold as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_KeyTagAlreadyAdded as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_NotAdded as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_ZeroNumAggregators as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ if selector
                    == <ValSetDriver_ZeroNumCommitters as ::ethers::contract::EthError>::selector() => {
                    true
                }
                _ => false,
            }
        }
    }
    impl ::core::fmt::Display for ValSetDriverErrors {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            match self {
                Self::CheckpointUnorderedInsertion(element) => ::core::fmt::Display::fmt(element, f),
                Self::EpochManager_InvalidEpochDuration(element) => ::core::fmt::Display::fmt(element, f),
                Self::EpochManager_InvalidEpochDurationTimestamp(element) => ::core::fmt::Display::fmt(element, f),
                Self::EpochManager_TooOldTimestamp(element) => ::core::fmt::Display::fmt(element, f),
                Self::InvalidInitialization(element) => ::core::fmt::Display::fmt(element, f),
                Self::NetworkManager_InvalidNetwork(element) => ::core::fmt::Display::fmt(element, f),
                Self::NotInitializing(element) => ::core::fmt::Display::fmt(element, f),
                Self::OwnableInvalidOwner(element) => ::core::fmt::Display::fmt(element, f),
                Self::OwnableUnauthorizedAccount(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_ChainAlreadyAdded(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_InvalidCrossChainAddress(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_InvalidMaxValidatorsCount(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_InvalidQuorumThreshold(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_KeyTagAlreadyAdded(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_NotAdded(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_ZeroNumAggregators(element) => ::core::fmt::Display::fmt(element, f),
                Self::ValSetDriver_ZeroNumCommitters(element) => ::core::fmt::Display::fmt(element, f),
                Self::RevertString(s) => ::core::fmt::Display::fmt(s, f),
            }
        }
    }
    impl ::core::convert::From<::std::string::String> for ValSetDriverErrors {
        fn from(value: String) -> Self {
            Self::RevertString(value)
        }
    }
    impl ::core::convert::From<CheckpointUnorderedInsertion> for ValSetDriverErrors {
        fn from(value: CheckpointUnorderedInsertion) -> Self {
            Self::CheckpointUnorderedInsertion(value)
        }
    }
    impl ::core::convert::From<EpochManager_InvalidEpochDuration> for ValSetDriverErrors {
        fn from(value: EpochManager_InvalidEpochDuration) -> Self {
            Self::EpochManager_InvalidEpochDuration(value)
        }
    }
    impl ::core::convert::From<EpochManager_InvalidEpochDurationTimestamp> for ValSetDriverErrors {
        fn from(value: EpochManager_InvalidEpochDurationTimestamp) -> Self {
            Self::EpochManager_InvalidEpochDurationTimestamp(value)
        }
    }
    impl ::core::convert::From<EpochManager_TooOldTimestamp> for ValSetDriverErrors {
        fn from(value: EpochManager_TooOldTimestamp) -> Self {
            Self::EpochManager_TooOldTimestamp(value)
        }
    }
    impl ::core::convert::From<InvalidInitialization> for ValSetDriverErrors {
        fn from(value: InvalidInitialization) -> Self {
            Self::InvalidInitialization(value)
        }
    }
    impl ::core::convert::From<NetworkManager_InvalidNetwork> for ValSetDriverErrors {
        fn from(value: NetworkManager_InvalidNetwork) -> Self {
            Self::NetworkManager_InvalidNetwork(value)
        }
    }
    impl ::core::convert::From<NotInitializing> for ValSetDriverErrors {
        fn from(value: NotInitializing) -> Self {
            Self::NotInitializing(value)
        }
    }
    impl ::core::convert::From<OwnableInvalidOwner> for ValSetDriverErrors {
        fn from(value: OwnableInvalidOwner) -> Self {
            Self::OwnableInvalidOwner(value)
        }
    }
    impl ::core::convert::From<OwnableUnauthorizedAccount> for ValSetDriverErrors {
        fn from(value: OwnableUnauthorizedAccount) -> Self {
            Self::OwnableUnauthorizedAccount(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_ChainAlreadyAdded> for ValSetDriverErrors {
        fn from(value: ValSetDriver_ChainAlreadyAdded) -> Self {
            Self::ValSetDriver_ChainAlreadyAdded(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_InvalidCrossChainAddress> for ValSetDriverErrors {
        fn from(value: ValSetDriver_InvalidCrossChainAddress) -> Self {
            Self::ValSetDriver_InvalidCrossChainAddress(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_InvalidMaxValidatorsCount> for ValSetDriverErrors {
        fn from(value: ValSetDriver_InvalidMaxValidatorsCount) -> Self {
            Self::ValSetDriver_InvalidMaxValidatorsCount(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_InvalidQuorumThreshold> for ValSetDriverErrors {
        fn from(value: ValSetDriver_InvalidQuorumThreshold) -> Self {
            Self::ValSetDriver_InvalidQuorumThreshold(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_KeyTagAlreadyAdded> for ValSetDriverErrors {
        fn from(value: ValSetDriver_KeyTagAlreadyAdded) -> Self {
            Self::ValSetDriver_KeyTagAlreadyAdded(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_NotAdded> for ValSetDriverErrors {
        fn from(value: ValSetDriver_NotAdded) -> Self {
            Self::ValSetDriver_NotAdded(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_ZeroNumAggregators> for ValSetDriverErrors {
        fn from(value: ValSetDriver_ZeroNumAggregators) -> Self {
            Self::ValSetDriver_ZeroNumAggregators(value)
        }
    }
    impl ::core::convert::From<ValSetDriver_ZeroNumCommitters> for ValSetDriverErrors {
        fn from(value: ValSetDriver_ZeroNumCommitters) -> Self {
            Self::ValSetDriver_ZeroNumCommitters(value)
        }
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "AddQuorumThreshold", abi = "AddQuorumThreshold((uint8,uint248))")]
    pub struct AddQuorumThresholdFilter {
        pub quorum_threshold: QuorumThreshold,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "AddSettlement", abi = "AddSettlement((uint64,address))")]
    pub struct AddSettlementFilter {
        pub settlement: CrossChainAddress,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "AddVotingPowerProvider", abi = "AddVotingPowerProvider((uint64,address))")]
    pub struct AddVotingPowerProviderFilter {
        pub voting_power_provider: CrossChainAddress,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "EIP712DomainChanged", abi = "EIP712DomainChanged()")]
    pub struct Eip712DomainChangedFilter;
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "InitEpochDuration", abi = "InitEpochDuration(uint48,uint48)")]
    pub struct InitEpochDurationFilter {
        pub epoch_duration: u64,
        pub epoch_duration_timestamp: u64,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "InitSubnetwork", abi = "InitSubnetwork(address,uint96)")]
    pub struct InitSubnetworkFilter {
        pub network: ::ethers::core::types::Address,
        pub subnetwork_id: u128,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "Initialized", abi = "Initialized(uint64)")]
    pub struct InitializedFilter {
        pub version: u64,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "OwnershipTransferred", abi = "OwnershipTransferred(address,address)")]
    pub struct OwnershipTransferredFilter {
        #[ethevent(indexed)]
        pub previous_owner: ::ethers::core::types::Address,
        #[ethevent(indexed)]
        pub new_owner: ::ethers::core::types::Address,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "RemoveQuorumThreshold", abi = "RemoveQuorumThreshold((uint8,uint248))")]
    pub struct RemoveQuorumThresholdFilter {
        pub quorum_threshold: QuorumThreshold,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "RemoveSettlement", abi = "RemoveSettlement((uint64,address))")]
    pub struct RemoveSettlementFilter {
        pub settlement: CrossChainAddress,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(
        name = "RemoveVotingPowerProvider",
        abi = "RemoveVotingPowerProvider((uint64,address))"
    )]
    pub struct RemoveVotingPowerProviderFilter {
        pub voting_power_provider: CrossChainAddress,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetEpochDuration", abi = "SetEpochDuration(uint48)")]
    pub struct SetEpochDurationFilter {
        pub epoch_duration: u64,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetKeysProvider", abi = "SetKeysProvider((uint64,address))")]
    pub struct SetKeysProviderFilter {
        pub keys_provider: CrossChainAddress,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetMaxValidatorsCount", abi = "SetMaxValidatorsCount(uint208)")]
    pub struct SetMaxValidatorsCountFilter {
        pub max_validators_count: ::ethers::core::types::U256,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetMaxVotingPower", abi = "SetMaxVotingPower(uint256)")]
    pub struct SetMaxVotingPowerFilter {
        pub max_voting_power: ::ethers::core::types::U256,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetMinInclusionVotingPower", abi = "SetMinInclusionVotingPower(uint256)")]
    pub struct SetMinInclusionVotingPowerFilter {
        pub min_inclusion_voting_power: ::ethers::core::types::U256,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetNumAggregators", abi = "SetNumAggregators(uint208)")]
    pub struct SetNumAggregatorsFilter {
        pub num_aggregators: ::ethers::core::types::U256,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetNumCommitters", abi = "SetNumCommitters(uint208)")]
    pub struct SetNumCommittersFilter {
        pub num_committers: ::ethers::core::types::U256,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetRequiredHeaderKeyTag", abi = "SetRequiredHeaderKeyTag(uint8)")]
    pub struct SetRequiredHeaderKeyTagFilter {
        pub required_header_key_tag: u8,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetRequiredKeyTags", abi = "SetRequiredKeyTags(uint8[])")]
    pub struct SetRequiredKeyTagsFilter {
        pub required_key_tags: ::std::vec::Vec<u8>,
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(name = "SetVerificationType", abi = "SetVerificationType(uint32)")]
    pub struct SetVerificationTypeFilter {
        pub verification_type: u32,
    }
    ///Container type for all of the contract's events
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        serde::Serialize,
        serde::Deserialize,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub enum ValSetDriverEvents {
        AddQuorumThresholdFilter(AddQuorumThresholdFilter),
        AddSettlementFilter(AddSettlementFilter),
        AddVotingPowerProviderFilter(AddVotingPowerProviderFilter),
        Eip712DomainChangedFilter(Eip712DomainChangedFilter),
        InitEpochDurationFilter(InitEpochDurationFilter),
        InitSubnetworkFilter(InitSubnetworkFilter),
        InitializedFilter(InitializedFilter),
        OwnershipTransferredFilter(OwnershipTransferredFilter),
        RemoveQuorumThresholdFilter(RemoveQuorumThresholdFilter),
        RemoveSettlementFilter(RemoveSettlementFilter),
        RemoveVotingPowerProviderFilter(RemoveVotingPowerProviderFilter),
        SetEpochDurationFilter(SetEpochDurationFilter),
        SetKeysProviderFilter(SetKeysProviderFilter),
        SetMaxValidatorsCountFilter(SetMaxValidatorsCountFilter),
        SetMaxVotingPowerFilter(SetMaxVotingPowerFilter),
        SetMinInclusionVotingPowerFilter(SetMinInclusionVotingPowerFilter),
        SetNumAggregatorsFilter(SetNumAggregatorsFilter),
        SetNumCommittersFilter(SetNumCommittersFilter),
        SetRequiredHeaderKeyTagFilter(SetRequiredHeaderKeyTagFilter),
        SetRequiredKeyTagsFilter(SetRequiredKeyTagsFilter),
        SetVerificationTypeFilter(SetVerificationTypeFilter),
    }
    impl ::ethers::contract::EthLogDecode for ValSetDriverEvents {
        fn decode_log(
            log: &::ethers::core::abi::RawLog,
        ) -> ::core::result::Result<Self, ::ethers::core::abi::Error> {
            if let Ok(decoded) = AddQuorumThresholdFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::AddQuorumThresholdFilter(decoded));
            }
            if let Ok(decoded) = AddSettlementFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::AddSettlementFilter(decoded));
            }
            if let Ok(decoded) = AddVotingPowerProviderFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::AddVotingPowerProviderFilter(decoded));
            }
            if let Ok(decoded) = Eip712DomainChangedFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::Eip712DomainChangedFilter(decoded));
            }
            if let Ok(decoded) = InitEpochDurationFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::InitEpochDurationFilter(decoded));
            }
            if let Ok(decoded) = InitSubnetworkFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::InitSubnetworkFilter(decoded));
            }
            if let Ok(decoded) = InitializedFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::InitializedFilter(decoded));
            }
            if let Ok(decoded) = OwnershipTransferredFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::OwnershipTransferredFilter(decoded));
            }
            if let Ok(decoded) = RemoveQuorumThresholdFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::RemoveQuorumThresholdFilter(decoded));
            }
            if let Ok(decoded) = RemoveSettlementFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::RemoveSettlementFilter(decoded));
            }
            if let Ok(decoded) = RemoveVotingPowerProviderFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::RemoveVotingPowerProviderFilter(decoded));
            }
            if let Ok(decoded) = SetEpochDurationFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetEpochDurationFilter(decoded));
            }
            if let Ok(decoded) = SetKeysProviderFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetKeysProviderFilter(decoded));
            }
            if let Ok(decoded) = SetMaxValidatorsCountFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetMaxValidatorsCountFilter(decoded));
            }
            if let Ok(decoded) = SetMaxVotingPowerFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetMaxVotingPowerFilter(decoded));
            }
            if let Ok(decoded) = SetMinInclusionVotingPowerFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetMinInclusionVotingPowerFilter(decoded));
            }
            if let Ok(decoded) = SetNumAggregatorsFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetNumAggregatorsFilter(decoded));
            }
            if let Ok(decoded) = SetNumCommittersFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetNumCommittersFilter(decoded));
            }
            if let Ok(decoded) = SetRequiredHeaderKeyTagFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetRequiredHeaderKeyTagFilter(decoded));
            }
            if let Ok(decoded) = SetRequiredKeyTagsFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetRequiredKeyTagsFilter(decoded));
            }
            if let Ok(decoded) = SetVerificationTypeFilter::decode_log(log) {
                return Ok(ValSetDriverEvents::SetVerificationTypeFilter(decoded));
            }
            Err(::ethers::core::abi::Error::InvalidData)
        }
    }
    impl ::core::fmt::Display for ValSetDriverEvents {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            match self {
                Self::AddQuorumThresholdFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::AddSettlementFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::AddVotingPowerProviderFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::Eip712DomainChangedFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::InitEpochDurationFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::InitSubnetworkFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::InitializedFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::OwnershipTransferredFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::RemoveQuorumThresholdFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::RemoveSettlementFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::RemoveVotingPowerProviderFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetEpochDurationFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetKeysProviderFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetMaxValidatorsCountFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetMaxVotingPowerFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetMinInclusionVotingPowerFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetNumAggregatorsFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetNumCommittersFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetRequiredHeaderKeyTagFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetRequiredKeyTagsFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::SetVerificationTypeFilter(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
            }
        }
    }
    impl ::core::convert::From<AddQuorumThresholdFilter> for ValSetDriverEvents {
        fn from(value: AddQuorumThresholdFilter) -> Self {
            Self::AddQuorumThresholdFilter(value)
        }
    }
    impl ::core::convert::From<AddSettlementFilter> for ValSetDriverEvents {
        fn from(value: AddSettlementFilter) -> Self {
            Self::AddSettlementFilter(value)
        }
    }
    impl ::core::convert::From<AddVotingPowerProviderFilter> for ValSetDriverEvents {
        fn from(value: AddVotingPowerProviderFilter) -> Self {
            Self::AddVotingPowerProviderFilter(value)
        }
    }
    impl ::core::convert::From<Eip712DomainChangedFilter> for ValSetDriverEvents {
        fn from(value: Eip712DomainChangedFilter) -> Self {
            Self::Eip712DomainChangedFilter(value)
        }
    }
    impl ::core::convert::From<InitEpochDurationFilter> for ValSetDriverEvents {
        fn from(value: InitEpochDurationFilter) -> Self {
            Self::InitEpochDurationFilter(value)
        }
    }
    impl ::core::convert::From<InitSubnetworkFilter> for ValSetDriverEvents {
        fn from(value: InitSubnetworkFilter) -> Self {
            Self::InitSubnetworkFilter(value)
        }
    }
    impl ::core::convert::From<InitializedFilter> for ValSetDriverEvents {
        fn from(value: InitializedFilter) -> Self {
            Self::InitializedFilter(value)
        }
    }
    impl ::core::convert::From<OwnershipTransferredFilter> for ValSetDriverEvents {
        fn from(value: OwnershipTransferredFilter) -> Self {
            Self::OwnershipTransferredFilter(value)
        }
    }
    impl ::core::convert::From<RemoveQuorumThresholdFilter> for ValSetDriverEvents {
        fn from(value: RemoveQuorumThresholdFilter) -> Self {
            Self::RemoveQuorumThresholdFilter(value)
        }
    }
    impl ::core::convert::From<RemoveSettlementFilter> for ValSetDriverEvents {
        fn from(value: RemoveSettlementFilter) -> Self {
            Self::RemoveSettlementFilter(value)
        }
    }
    impl ::core::convert::From<RemoveVotingPowerProviderFilter> for ValSetDriverEvents {
        fn from(value: RemoveVotingPowerProviderFilter) -> Self {
            Self::RemoveVotingPowerProviderFilter(value)
        }
    }
    impl ::core::convert::From<SetEpochDurationFilter> for ValSetDriverEvents {
        fn from(value: SetEpochDurationFilter) -> Self {
            Self::SetEpochDurationFilter(value)
        }
    }
    impl ::core::convert::From<SetKeysProviderFilter> for ValSetDriverEvents {
        fn from(value: SetKeysProviderFilter) -> Self {
            Self::SetKeysProviderFilter(value)
        }
    }
    impl ::core::convert::From<SetMaxValidatorsCountFilter> for ValSetDriverEvents {
        fn from(value: SetMaxValidatorsCountFilter) -> Self {
            Self::SetMaxValidatorsCountFilter(value)
        }
    }
    impl ::core::convert::From<SetMaxVotingPowerFilter> for ValSetDriverEvents {
        fn from(value: SetMaxVotingPowerFilter) -> Self {
            Self::SetMaxVotingPowerFilter(value)
        }
    }
    impl ::core::convert::From<SetMinInclusionVotingPowerFilter> for ValSetDriverEvents {
        fn from(value: SetMinInclusionVotingPowerFilter) -> Self {
            Self::SetMinInclusionVotingPowerFilter(value)
        }
    }
    impl ::core::convert::From<SetNumAggregatorsFilter> for ValSetDriverEvents {
        fn from(value: SetNumAggregatorsFilter) -> Self {
            Self::SetNumAggregatorsFilter(value)
        }
    }
    impl ::core::convert::From<SetNumCommittersFilter> for ValSetDriverEvents {
        fn from(value: SetNumCommittersFilter) -> Self {
            Self::SetNumCommittersFilter(value)
        }
    }
    impl ::core::convert::From<SetRequiredHeaderKeyTagFilter> for ValSetDriverEvents {
        fn from(value: SetRequiredHeaderKeyTagFilter) -> Self {
            Self::SetRequiredHeaderKeyTagFilter(value)
        }
    }
    impl ::core::convert::From<SetRequiredKeyTagsFilter> for ValSetDriverEvents {
        fn from(value: SetRequiredKeyTagsFilter) -> Self {
            Self::SetRequiredKeyTagsFilter(value)
        }
    }
    impl ::core::convert::From<SetVerificationTypeFilter> for ValSetDriverEvents {
        fn from(value: SetVerificationTypeFilter) -> Self {
            Self::SetVerificationTypeFilter(value)
        }
    }
    ///Container type for all input parameters for the `NETWORK` function with signature `NETWORK()` and selector `0x8759e6d1`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "NETWORK", abi = "NETWORK()")]
    pub struct NetworkCall;
    ///Container type for all input parameters for the `SUBNETWORK` function with signature `SUBNETWORK()` and selector `0x773e6b54`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "SUBNETWORK", abi = "SUBNETWORK()")]
    pub struct SubnetworkCall;
    ///Container type for all input parameters for the `SUBNETWORK_IDENTIFIER` function with signature `SUBNETWORK_IDENTIFIER()` and selector `0xabacb807`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "SUBNETWORK_IDENTIFIER", abi = "SUBNETWORK_IDENTIFIER()")]
    pub struct SubnetworkIdentifierCall;
    ///Container type for all input parameters for the `addQuorumThreshold` function with signature `addQuorumThreshold((uint8,uint248))` and selector `0x0fe5e0c2`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "addQuorumThreshold", abi = "addQuorumThreshold((uint8,uint248))")]
    pub struct AddQuorumThresholdCall {
        pub quorum_threshold: QuorumThreshold,
    }
    ///Container type for all input parameters for the `addSettlement` function with signature `addSettlement((uint64,address))` and selector `0x52ab8872`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "addSettlement", abi = "addSettlement((uint64,address))")]
    pub struct AddSettlementCall {
        pub settlement: CrossChainAddress,
    }
    ///Container type for all input parameters for the `addVotingPowerProvider` function with signature `addVotingPowerProvider((uint64,address))` and selector `0x6940ed80`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "addVotingPowerProvider", abi = "addVotingPowerProvider((uint64,address))")]
    pub struct AddVotingPowerProviderCall {
        pub voting_power_provider: CrossChainAddress,
    }
    ///Container type for all input parameters for the `eip712Domain` function with signature `eip712Domain()` and selector `0x84b0196e`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "eip712Domain", abi = "eip712Domain()")]
    pub struct Eip712DomainCall;
    ///Container type for all input parameters for the `getConfig` function with signature `getConfig()` and selector `0xc3f909d4`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getConfig", abi = "getConfig()")]
    pub struct GetConfigCall;
    ///Container type for all input parameters for the `getConfigAt` function with signature `getConfigAt(uint48)` and selector `0x13fb0877`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getConfigAt", abi = "getConfigAt(uint48)")]
    pub struct GetConfigAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getCurrentEpoch` function with signature `getCurrentEpoch()` and selector `0xb97dd9e2`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getCurrentEpoch", abi = "getCurrentEpoch()")]
    pub struct GetCurrentEpochCall;
    ///Container type for all input parameters for the `getCurrentEpochDuration` function with signature `getCurrentEpochDuration()` and selector `0x558e2eb6`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getCurrentEpochDuration", abi = "getCurrentEpochDuration()")]
    pub struct GetCurrentEpochDurationCall;
    ///Container type for all input parameters for the `getCurrentEpochStart` function with signature `getCurrentEpochStart()` and selector `0xa6e16c4d`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getCurrentEpochStart", abi = "getCurrentEpochStart()")]
    pub struct GetCurrentEpochStartCall;
    ///Container type for all input parameters for the `getEpochDuration` function with signature `getEpochDuration(uint48)` and selector `0xf6fd6f14`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getEpochDuration", abi = "getEpochDuration(uint48)")]
    pub struct GetEpochDurationCall {
        pub epoch: u64,
    }
    ///Container type for all input parameters for the `getEpochIndex` function with signature `getEpochIndex(uint48)` and selector `0xccafd209`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getEpochIndex", abi = "getEpochIndex(uint48)")]
    pub struct GetEpochIndexCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getEpochStart` function with signature `getEpochStart(uint48)` and selector `0x246e158f`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getEpochStart", abi = "getEpochStart(uint48)")]
    pub struct GetEpochStartCall {
        pub epoch: u64,
    }
    ///Container type for all input parameters for the `getKeysProvider` function with signature `getKeysProvider()` and selector `0x297d29b8`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getKeysProvider", abi = "getKeysProvider()")]
    pub struct GetKeysProviderCall;
    ///Container type for all input parameters for the `getKeysProviderAt` function with signature `getKeysProviderAt(uint48)` and selector `0x10a49295`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getKeysProviderAt", abi = "getKeysProviderAt(uint48)")]
    pub struct GetKeysProviderAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getMaxValidatorsCount` function with signature `getMaxValidatorsCount()` and selector `0x06ce894d`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getMaxValidatorsCount", abi = "getMaxValidatorsCount()")]
    pub struct GetMaxValidatorsCountCall;
    ///Container type for all input parameters for the `getMaxValidatorsCountAt` function with signature `getMaxValidatorsCountAt(uint48)` and selector `0x4f938edc`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getMaxValidatorsCountAt", abi = "getMaxValidatorsCountAt(uint48)")]
    pub struct GetMaxValidatorsCountAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getMaxVotingPower` function with signature `getMaxVotingPower()` and selector `0x9f9c3080`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getMaxVotingPower", abi = "getMaxVotingPower()")]
    pub struct GetMaxVotingPowerCall;
    ///Container type for all input parameters for the `getMaxVotingPowerAt` function with signature `getMaxVotingPowerAt(uint48)` and selector `0x848b3040`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getMaxVotingPowerAt", abi = "getMaxVotingPowerAt(uint48)")]
    pub struct GetMaxVotingPowerAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getMinInclusionVotingPower` function with signature `getMinInclusionVotingPower()` and selector `0xb6a94695`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getMinInclusionVotingPower", abi = "getMinInclusionVotingPower()")]
    pub struct GetMinInclusionVotingPowerCall;
    ///Container type for all input parameters for the `getMinInclusionVotingPowerAt` function with signature `getMinInclusionVotingPowerAt(uint48)` and selector `0x456705a2`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getMinInclusionVotingPowerAt", abi = "getMinInclusionVotingPowerAt(uint48)")]
    pub struct GetMinInclusionVotingPowerAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getNextEpoch` function with signature `getNextEpoch()` and selector `0xefe97d05`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNextEpoch", abi = "getNextEpoch()")]
    pub struct GetNextEpochCall;
    ///Container type for all input parameters for the `getNextEpochDuration` function with signature `getNextEpochDuration()` and selector `0x038cf1c0`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNextEpochDuration", abi = "getNextEpochDuration()")]
    pub struct GetNextEpochDurationCall;
    ///Container type for all input parameters for the `getNextEpochStart` function with signature `getNextEpochStart()` and selector `0x65c5f94a`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNextEpochStart", abi = "getNextEpochStart()")]
    pub struct GetNextEpochStartCall;
    ///Container type for all input parameters for the `getNumAggregators` function with signature `getNumAggregators()` and selector `0x21fbfe0d`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNumAggregators", abi = "getNumAggregators()")]
    pub struct GetNumAggregatorsCall;
    ///Container type for all input parameters for the `getNumAggregatorsAt` function with signature `getNumAggregatorsAt(uint48)` and selector `0x6bb7e08a`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNumAggregatorsAt", abi = "getNumAggregatorsAt(uint48)")]
    pub struct GetNumAggregatorsAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getNumCommitters` function with signature `getNumCommitters()` and selector `0x7861db16`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNumCommitters", abi = "getNumCommitters()")]
    pub struct GetNumCommittersCall;
    ///Container type for all input parameters for the `getNumCommittersAt` function with signature `getNumCommittersAt(uint48)` and selector `0xe0078c64`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getNumCommittersAt", abi = "getNumCommittersAt(uint48)")]
    pub struct GetNumCommittersAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getQuorumThresholds` function with signature `getQuorumThresholds()` and selector `0x5796148c`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getQuorumThresholds", abi = "getQuorumThresholds()")]
    pub struct GetQuorumThresholdsCall;
    ///Container type for all input parameters for the `getQuorumThresholdsAt` function with signature `getQuorumThresholdsAt(uint48)` and selector `0xf2f46b83`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getQuorumThresholdsAt", abi = "getQuorumThresholdsAt(uint48)")]
    pub struct GetQuorumThresholdsAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getRequiredHeaderKeyTag` function with signature `getRequiredHeaderKeyTag()` and selector `0x6582e9f7`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getRequiredHeaderKeyTag", abi = "getRequiredHeaderKeyTag()")]
    pub struct GetRequiredHeaderKeyTagCall;
    ///Container type for all input parameters for the `getRequiredHeaderKeyTagAt` function with signature `getRequiredHeaderKeyTagAt(uint48)` and selector `0xbc12e1fd`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getRequiredHeaderKeyTagAt", abi = "getRequiredHeaderKeyTagAt(uint48)")]
    pub struct GetRequiredHeaderKeyTagAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getRequiredKeyTags` function with signature `getRequiredKeyTags()` and selector `0xf9bfa78a`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getRequiredKeyTags", abi = "getRequiredKeyTags()")]
    pub struct GetRequiredKeyTagsCall;
    ///Container type for all input parameters for the `getRequiredKeyTagsAt` function with signature `getRequiredKeyTagsAt(uint48)` and selector `0x1161fc83`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getRequiredKeyTagsAt", abi = "getRequiredKeyTagsAt(uint48)")]
    pub struct GetRequiredKeyTagsAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getSettlements` function with signature `getSettlements()` and selector `0xa0c2bc25`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getSettlements", abi = "getSettlements()")]
    pub struct GetSettlementsCall;
    ///Container type for all input parameters for the `getSettlementsAt` function with signature `getSettlementsAt(uint48)` and selector `0x763d255a`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getSettlementsAt", abi = "getSettlementsAt(uint48)")]
    pub struct GetSettlementsAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getVerificationType` function with signature `getVerificationType()` and selector `0x24acc119`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getVerificationType", abi = "getVerificationType()")]
    pub struct GetVerificationTypeCall;
    ///Container type for all input parameters for the `getVerificationTypeAt` function with signature `getVerificationTypeAt(uint48)` and selector `0x3a0ad9ec`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getVerificationTypeAt", abi = "getVerificationTypeAt(uint48)")]
    pub struct GetVerificationTypeAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `getVotingPowerProviders` function with signature `getVotingPowerProviders()` and selector `0x3e39b8db`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getVotingPowerProviders", abi = "getVotingPowerProviders()")]
    pub struct GetVotingPowerProvidersCall;
    ///Container type for all input parameters for the `getVotingPowerProvidersAt` function with signature `getVotingPowerProvidersAt(uint48)` and selector `0x09bba5ca`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getVotingPowerProvidersAt", abi = "getVotingPowerProvidersAt(uint48)")]
    pub struct GetVotingPowerProvidersAtCall {
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `isQuorumThresholdRegistered` function with signature `isQuorumThresholdRegistered((uint8,uint248))` and selector `0x79a4c359`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "isQuorumThresholdRegistered",
        abi = "isQuorumThresholdRegistered((uint8,uint248))"
    )]
    pub struct IsQuorumThresholdRegisteredCall {
        pub quorum_threshold: QuorumThreshold,
    }
    ///Container type for all input parameters for the `isQuorumThresholdRegisteredAt` function with signature `isQuorumThresholdRegisteredAt((uint8,uint248),uint48)` and selector `0x80c2fc48`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "isQuorumThresholdRegisteredAt",
        abi = "isQuorumThresholdRegisteredAt((uint8,uint248),uint48)"
    )]
    pub struct IsQuorumThresholdRegisteredAtCall {
        pub quorum_threshold: QuorumThreshold,
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `isSettlementRegistered` function with signature `isSettlementRegistered((uint64,address))` and selector `0x965c0768`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "isSettlementRegistered", abi = "isSettlementRegistered((uint64,address))")]
    pub struct IsSettlementRegisteredCall {
        pub settlement: CrossChainAddress,
    }
    ///Container type for all input parameters for the `isSettlementRegisteredAt` function with signature `isSettlementRegisteredAt((uint64,address),uint48)` and selector `0x01749b26`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "isSettlementRegisteredAt",
        abi = "isSettlementRegisteredAt((uint64,address),uint48)"
    )]
    pub struct IsSettlementRegisteredAtCall {
        pub settlement: CrossChainAddress,
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `isVotingPowerProviderRegistered` function with signature `isVotingPowerProviderRegistered((uint64,address))` and selector `0x1265b3be`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "isVotingPowerProviderRegistered",
        abi = "isVotingPowerProviderRegistered((uint64,address))"
    )]
    pub struct IsVotingPowerProviderRegisteredCall {
        pub voting_power_provider: CrossChainAddress,
    }
    ///Container type for all input parameters for the `isVotingPowerProviderRegisteredAt` function with signature `isVotingPowerProviderRegisteredAt((uint64,address),uint48)` and selector `0xc16ccb73`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "isVotingPowerProviderRegisteredAt",
        abi = "isVotingPowerProviderRegisteredAt((uint64,address),uint48)"
    )]
    pub struct IsVotingPowerProviderRegisteredAtCall {
        pub voting_power_provider: CrossChainAddress,
        pub timestamp: u64,
    }
    ///Container type for all input parameters for the `multicall` function with signature `multicall(bytes[])` and selector `0xac9650d8`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "multicall", abi = "multicall(bytes[])")]
    pub struct MulticallCall {
        pub data: ::std::vec::Vec<::ethers::core::types::Bytes>,
    }
    ///Container type for all input parameters for the `owner` function with signature `owner()` and selector `0x8da5cb5b`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "owner", abi = "owner()")]
    pub struct OwnerCall;
    ///Container type for all input parameters for the `removeQuorumThreshold` function with signature `removeQuorumThreshold((uint8,uint248))` and selector `0xf388db18`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "removeQuorumThreshold", abi = "removeQuorumThreshold((uint8,uint248))")]
    pub struct RemoveQuorumThresholdCall {
        pub quorum_threshold: QuorumThreshold,
    }
    ///Container type for all input parameters for the `removeSettlement` function with signature `removeSettlement((uint64,address))` and selector `0x502bb1ad`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "removeSettlement", abi = "removeSettlement((uint64,address))")]
    pub struct RemoveSettlementCall {
        pub settlement: CrossChainAddress,
    }
    ///Container type for all input parameters for the `removeVotingPowerProvider` function with signature `removeVotingPowerProvider((uint64,address))` and selector `0x325234d5`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "removeVotingPowerProvider",
        abi = "removeVotingPowerProvider((uint64,address))"
    )]
    pub struct RemoveVotingPowerProviderCall {
        pub voting_power_provider: CrossChainAddress,
    }
    ///Container type for all input parameters for the `renounceOwnership` function with signature `renounceOwnership()` and selector `0x715018a6`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "renounceOwnership", abi = "renounceOwnership()")]
    pub struct RenounceOwnershipCall;
    ///Container type for all input parameters for the `setEpochDuration` function with signature `setEpochDuration(uint48)` and selector `0x2f53d5ff`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setEpochDuration", abi = "setEpochDuration(uint48)")]
    pub struct SetEpochDurationCall {
        pub epoch_duration: u64,
    }
    ///Container type for all input parameters for the `setKeysProvider` function with signature `setKeysProvider((uint64,address))` and selector `0xdd08bbff`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setKeysProvider", abi = "setKeysProvider((uint64,address))")]
    pub struct SetKeysProviderCall {
        pub keys_provider: CrossChainAddress,
    }
    ///Container type for all input parameters for the `setMaxValidatorsCount` function with signature `setMaxValidatorsCount(uint208)` and selector `0xd2384cd3`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setMaxValidatorsCount", abi = "setMaxValidatorsCount(uint208)")]
    pub struct SetMaxValidatorsCountCall {
        pub max_validators_count: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `setMaxVotingPower` function with signature `setMaxVotingPower(uint256)` and selector `0xf6af258c`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setMaxVotingPower", abi = "setMaxVotingPower(uint256)")]
    pub struct SetMaxVotingPowerCall {
        pub max_voting_power: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `setMinInclusionVotingPower` function with signature `setMinInclusionVotingPower(uint256)` and selector `0xfaae42d7`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setMinInclusionVotingPower", abi = "setMinInclusionVotingPower(uint256)")]
    pub struct SetMinInclusionVotingPowerCall {
        pub min_inclusion_voting_power: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `setNumAggregators` function with signature `setNumAggregators(uint208)` and selector `0x0dec288b`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setNumAggregators", abi = "setNumAggregators(uint208)")]
    pub struct SetNumAggregatorsCall {
        pub num_aggregators: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `setNumCommitters` function with signature `setNumCommitters(uint208)` and selector `0x15ddbbe8`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setNumCommitters", abi = "setNumCommitters(uint208)")]
    pub struct SetNumCommittersCall {
        pub num_committers: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `setRequiredHeaderKeyTag` function with signature `setRequiredHeaderKeyTag(uint8)` and selector `0xd9736e12`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setRequiredHeaderKeyTag", abi = "setRequiredHeaderKeyTag(uint8)")]
    pub struct SetRequiredHeaderKeyTagCall {
        pub required_header_key_tag: u8,
    }
    ///Container type for all input parameters for the `setRequiredKeyTags` function with signature `setRequiredKeyTags(uint8[])` and selector `0x4678a284`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setRequiredKeyTags", abi = "setRequiredKeyTags(uint8[])")]
    pub struct SetRequiredKeyTagsCall {
        pub required_key_tags: ::std::vec::Vec<u8>,
    }
    ///Container type for all input parameters for the `setVerificationType` function with signature `setVerificationType(uint32)` and selector `0x7b8ef42d`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setVerificationType", abi = "setVerificationType(uint32)")]
    pub struct SetVerificationTypeCall {
        pub verification_type: u32,
    }
    ///Container type for all input parameters for the `transferOwnership` function with signature `transferOwnership(address)` and selector `0xf2fde38b`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "transferOwnership", abi = "transferOwnership(address)")]
    pub struct TransferOwnershipCall {
        pub new_owner: ::ethers::core::types::Address,
    }
    ///Container type for all of the contract's call
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        serde::Serialize,
        serde::Deserialize,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub enum ValSetDriverCalls {
        Network(NetworkCall),
        Subnetwork(SubnetworkCall),
        SubnetworkIdentifier(SubnetworkIdentifierCall),
        AddQuorumThreshold(AddQuorumThresholdCall),
        AddSettlement(AddSettlementCall),
        AddVotingPowerProvider(AddVotingPowerProviderCall),
        Eip712Domain(Eip712DomainCall),
        GetConfig(GetConfigCall),
        GetConfigAt(GetConfigAtCall),
        GetCurrentEpoch(GetCurrentEpochCall),
        GetCurrentEpochDuration(GetCurrentEpochDurationCall),
        GetCurrentEpochStart(GetCurrentEpochStartCall),
        GetEpochDuration(GetEpochDurationCall),
        GetEpochIndex(GetEpochIndexCall),
        GetEpochStart(GetEpochStartCall),
        GetKeysProvider(GetKeysProviderCall),
        GetKeysProviderAt(GetKeysProviderAtCall),
        GetMaxValidatorsCount(GetMaxValidatorsCountCall),
        GetMaxValidatorsCountAt(GetMaxValidatorsCountAtCall),
        GetMaxVotingPower(GetMaxVotingPowerCall),
        GetMaxVotingPowerAt(GetMaxVotingPowerAtCall),
        GetMinInclusionVotingPower(GetMinInclusionVotingPowerCall),
        GetMinInclusionVotingPowerAt(GetMinInclusionVotingPowerAtCall),
        GetNextEpoch(GetNextEpochCall),
        GetNextEpochDuration(GetNextEpochDurationCall),
        GetNextEpochStart(GetNextEpochStartCall),
        GetNumAggregators(GetNumAggregatorsCall),
        GetNumAggregatorsAt(GetNumAggregatorsAtCall),
        GetNumCommitters(GetNumCommittersCall),
        GetNumCommittersAt(GetNumCommittersAtCall),
        GetQuorumThresholds(GetQuorumThresholdsCall),
        GetQuorumThresholdsAt(GetQuorumThresholdsAtCall),
        GetRequiredHeaderKeyTag(GetRequiredHeaderKeyTagCall),
        GetRequiredHeaderKeyTagAt(GetRequiredHeaderKeyTagAtCall),
        GetRequiredKeyTags(GetRequiredKeyTagsCall),
        GetRequiredKeyTagsAt(GetRequiredKeyTagsAtCall),
        GetSettlements(GetSettlementsCall),
        GetSettlementsAt(GetSettlementsAtCall),
        GetVerificationType(GetVerificationTypeCall),
        GetVerificationTypeAt(GetVerificationTypeAtCall),
        GetVotingPowerProviders(GetVotingPowerProvidersCall),
        GetVotingPowerProvidersAt(GetVotingPowerProvidersAtCall),
        IsQuorumThresholdRegistered(IsQuorumThresholdRegisteredCall),
        IsQuorumThresholdRegisteredAt(IsQuorumThresholdRegisteredAtCall),
        IsSettlementRegistered(IsSettlementRegisteredCall),
        IsSettlementRegisteredAt(IsSettlementRegisteredAtCall),
        IsVotingPowerProviderRegistered(IsVotingPowerProviderRegisteredCall),
        IsVotingPowerProviderRegisteredAt(IsVotingPowerProviderRegisteredAtCall),
        Multicall(MulticallCall),
        Owner(OwnerCall),
        RemoveQuorumThreshold(RemoveQuorumThresholdCall),
        RemoveSettlement(RemoveSettlementCall),
        RemoveVotingPowerProvider(RemoveVotingPowerProviderCall),
        RenounceOwnership(RenounceOwnershipCall),
        SetEpochDuration(SetEpochDurationCall),
        SetKeysProvider(SetKeysProviderCall),
        SetMaxValidatorsCount(SetMaxValidatorsCountCall),
        SetMaxVotingPower(SetMaxVotingPowerCall),
        SetMinInclusionVotingPower(SetMinInclusionVotingPowerCall),
        SetNumAggregators(SetNumAggregatorsCall),
        SetNumCommitters(SetNumCommittersCall),
        SetRequiredHeaderKeyTag(SetRequiredHeaderKeyTagCall),
        SetRequiredKeyTags(SetRequiredKeyTagsCall),
        SetVerificationType(SetVerificationTypeCall),
        TransferOwnership(TransferOwnershipCall),
    }
    impl ::ethers::core::abi::AbiDecode for ValSetDriverCalls {
        fn decode(
            data: impl AsRef<[u8]>,
        ) -> ::core::result::Result<Self, ::ethers::core::abi::AbiError> {
            let data = data.as_ref();
            if let Ok(decoded) = <NetworkCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::Network(decoded));
            }
            if let Ok(decoded) = <SubnetworkCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::Subnetwork(decoded));
            }
            if let Ok(decoded) = <SubnetworkIdentifierCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SubnetworkIdentifier(decoded));
            }
            if let Ok(decoded) = <AddQuorumThresholdCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::AddQuorumThreshold(decoded));
            }
            if let Ok(decoded) = <AddSettlementCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::AddSettlement(decoded));
            }
            if let Ok(decoded) = <AddVotingPowerProviderCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::AddVotingPowerProvider(decoded));
            }
            if let Ok(decoded) = <Eip712DomainCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::Eip712Domain(decoded));
            }
            if let Ok(decoded) = <GetConfigCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetConfig(decoded));
            }
            if let Ok(decoded) = <GetConfigAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetConfigAt(decoded));
            }
            if let Ok(decoded) = <GetCurrentEpochCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetCurrentEpoch(decoded));
            }
            if let Ok(decoded) = <GetCurrentEpochDurationCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetCurrentEpochDuration(decoded));
            }
            if let Ok(decoded) = <GetCurrentEpochStartCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetCurrentEpochStart(decoded));
            }
            if let Ok(decoded) = <GetEpochDurationCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetEpochDuration(decoded));
            }
            if let Ok(decoded) = <GetEpochIndexCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetEpochIndex(decoded));
            }
            if let Ok(decoded) = <GetEpochStartCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetEpochStart(decoded));
            }
            if let Ok(decoded) = <GetKeysProviderCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetKeysProvider(decoded));
            }
            if let Ok(decoded) = <GetKeysProviderAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetKeysProviderAt(decoded));
            }
            if let Ok(decoded) = <GetMaxValidatorsCountCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetMaxValidatorsCount(decoded));
            }
            if let Ok(decoded) = <GetMaxValidatorsCountAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetMaxValidatorsCountAt(decoded));
            }
            if let Ok(decoded) = <GetMaxVotingPowerCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetMaxVotingPower(decoded));
            }
            if let Ok(decoded) = <GetMaxVotingPowerAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetMaxVotingPowerAt(decoded));
            }
            if let Ok(decoded) = <GetMinInclusionVotingPowerCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetMinInclusionVotingPower(decoded));
            }
            if let Ok(decoded) = <GetMinInclusionVotingPowerAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetMinInclusionVotingPowerAt(decoded));
            }
            if let Ok(decoded) = <GetNextEpochCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNextEpoch(decoded));
            }
            if let Ok(decoded) = <GetNextEpochDurationCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNextEpochDuration(decoded));
            }
            if let Ok(decoded) = <GetNextEpochStartCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNextEpochStart(decoded));
            }
            if let Ok(decoded) = <GetNumAggregatorsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNumAggregators(decoded));
            }
            if let Ok(decoded) = <GetNumAggregatorsAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNumAggregatorsAt(decoded));
            }
            if let Ok(decoded) = <GetNumCommittersCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNumCommitters(decoded));
            }
            if let Ok(decoded) = <GetNumCommittersAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetNumCommittersAt(decoded));
            }
            if let Ok(decoded) = <GetQuorumThresholdsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetQuorumThresholds(decoded));
            }
            if let Ok(decoded) = <GetQuorumThresholdsAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetQuorumThresholdsAt(decoded));
            }
            if let Ok(decoded) = <GetRequiredHeaderKeyTagCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetRequiredHeaderKeyTag(decoded));
            }
            if let Ok(decoded) = <GetRequiredHeaderKeyTagAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetRequiredHeaderKeyTagAt(decoded));
            }
            if let Ok(decoded) = <GetRequiredKeyTagsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetRequiredKeyTags(decoded));
            }
            if let Ok(decoded) = <GetRequiredKeyTagsAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetRequiredKeyTagsAt(decoded));
            }
            if let Ok(decoded) = <GetSettlementsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetSettlements(decoded));
            }
            if let Ok(decoded) = <GetSettlementsAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetSettlementsAt(decoded));
            }
            if let Ok(decoded) = <GetVerificationTypeCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetVerificationType(decoded));
            }
            if let Ok(decoded) = <GetVerificationTypeAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetVerificationTypeAt(decoded));
            }
            if let Ok(decoded) = <GetVotingPowerProvidersCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetVotingPowerProviders(decoded));
            }
            if let Ok(decoded) = <GetVotingPowerProvidersAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetVotingPowerProvidersAt(decoded));
            }
            if let Ok(decoded) = <IsQuorumThresholdRegisteredCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::IsQuorumThresholdRegistered(decoded));
            }
            if let Ok(decoded) = <IsQuorumThresholdRegisteredAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::IsQuorumThresholdRegisteredAt(decoded));
            }
            if let Ok(decoded) = <IsSettlementRegisteredCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::IsSettlementRegistered(decoded));
            }
            if let Ok(decoded) = <IsSettlementRegisteredAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::IsSettlementRegisteredAt(decoded));
            }
            if let Ok(decoded) = <IsVotingPowerProviderRegisteredCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::IsVotingPowerProviderRegistered(decoded));
            }
            if let Ok(decoded) = <IsVotingPowerProviderRegisteredAtCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::IsVotingPowerProviderRegisteredAt(decoded));
            }
            if let Ok(decoded) = <MulticallCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::Multicall(decoded));
            }
            if let Ok(decoded) = <OwnerCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::Owner(decoded));
            }
            if let Ok(decoded) = <RemoveQuorumThresholdCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::RemoveQuorumThreshold(decoded));
            }
            if let Ok(decoded) = <RemoveSettlementCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::RemoveSettlement(decoded));
            }
            if let Ok(decoded) = <RemoveVotingPowerProviderCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::RemoveVotingPowerProvider(decoded));
            }
            if let Ok(decoded) = <RenounceOwnershipCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::RenounceOwnership(decoded));
            }
            if let Ok(decoded) = <SetEpochDurationCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetEpochDuration(decoded));
            }
            if let Ok(decoded) = <SetKeysProviderCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetKeysProvider(decoded));
            }
            if let Ok(decoded) = <SetMaxValidatorsCountCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetMaxValidatorsCount(decoded));
            }
            if let Ok(decoded) = <SetMaxVotingPowerCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetMaxVotingPower(decoded));
            }
            if let Ok(decoded) = <SetMinInclusionVotingPowerCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetMinInclusionVotingPower(decoded));
            }
            if let Ok(decoded) = <SetNumAggregatorsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetNumAggregators(decoded));
            }
            if let Ok(decoded) = <SetNumCommittersCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetNumCommitters(decoded));
            }
            if let Ok(decoded) = <SetRequiredHeaderKeyTagCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetRequiredHeaderKeyTag(decoded));
            }
            if let Ok(decoded) = <SetRequiredKeyTagsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetRequiredKeyTags(decoded));
            }
            if let Ok(decoded) = <SetVerificationTypeCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetVerificationType(decoded));
            }
            if let Ok(decoded) = <TransferOwnershipCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::TransferOwnership(decoded));
            }
            Err(::ethers::core::abi::Error::InvalidData.into())
        }
    }
    impl ::ethers::core::abi::AbiEncode for ValSetDriverCalls {
        fn encode(self) -> Vec<u8> {
            match self {
                Self::Network(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::Subnetwork(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SubnetworkIdentifier(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::AddQuorumThreshold(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::AddSettlement(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::AddVotingPowerProvider(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::Eip712Domain(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetConfig(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetConfigAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetCurrentEpoch(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetCurrentEpochDuration(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetCurrentEpochStart(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetEpochDuration(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetEpochIndex(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetEpochStart(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetKeysProvider(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetKeysProviderAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetMaxValidatorsCount(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetMaxValidatorsCountAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetMaxVotingPower(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetMaxVotingPowerAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetMinInclusionVotingPower(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetMinInclusionVotingPowerAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNextEpoch(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNextEpochDuration(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNextEpochStart(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNumAggregators(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNumAggregatorsAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNumCommitters(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetNumCommittersAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetQuorumThresholds(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetQuorumThresholdsAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetRequiredHeaderKeyTag(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetRequiredHeaderKeyTagAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetRequiredKeyTags(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetRequiredKeyTagsAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetSettlements(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetSettlementsAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetVerificationType(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetVerificationTypeAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetVotingPowerProviders(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetVotingPowerProvidersAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::IsQuorumThresholdRegistered(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::IsQuorumThresholdRegisteredAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::IsSettlementRegistered(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::IsSettlementRegisteredAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::IsVotingPowerProviderRegistered(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::IsVotingPowerProviderRegisteredAt(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::Multicall(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::Owner(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::RemoveQuorumThreshold(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::RemoveSettlement(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::RemoveVotingPowerProvider(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::RenounceOwnership(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetEpochDuration(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetKeysProvider(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetMaxValidatorsCount(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetMaxVotingPower(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetMinInclusionVotingPower(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetNumAggregators(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetNumCommitters(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetRequiredHeaderKeyTag(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetRequiredKeyTags(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetVerificationType(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::TransferOwnership(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
            }
        }
    }
    impl ::core::fmt::Display for ValSetDriverCalls {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            match self {
                Self::Network(element) => ::core::fmt::Display::fmt(element, f),
                Self::Subnetwork(element) => ::core::fmt::Display::fmt(element, f),
                Self::SubnetworkIdentifier(element) => ::core::fmt::Display::fmt(element, f),
                Self::AddQuorumThreshold(element) => ::core::fmt::Display::fmt(element, f),
                Self::AddSettlement(element) => ::core::fmt::Display::fmt(element, f),
                Self::AddVotingPowerProvider(element) => ::core::fmt::Display::fmt(element, f),
                Self::Eip712Domain(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetConfig(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetConfigAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetCurrentEpoch(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetCurrentEpochDuration(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetCurrentEpochStart(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetEpochDuration(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetEpochIndex(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetEpochStart(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetKeysProvider(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetKeysProviderAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetMaxValidatorsCount(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetMaxValidatorsCountAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetMaxVotingPower(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetMaxVotingPowerAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetMinInclusionVotingPower(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetMinInclusionVotingPowerAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNextEpoch(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNextEpochDuration(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNextEpochStart(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNumAggregators(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNumAggregatorsAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNumCommitters(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetNumCommittersAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetQuorumThresholds(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetQuorumThresholdsAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetRequiredHeaderKeyTag(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetRequiredHeaderKeyTagAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetRequiredKeyTags(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetRequiredKeyTagsAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetSettlements(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetSettlementsAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetVerificationType(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetVerificationTypeAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetVotingPowerProviders(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetVotingPowerProvidersAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::IsQuorumThresholdRegistered(element) => ::core::fmt::Display::fmt(element, f),
                Self::IsQuorumThresholdRegisteredAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::IsSettlementRegistered(element) => ::core::fmt::Display::fmt(element, f),
                Self::IsSettlementRegisteredAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::IsVotingPowerProviderRegistered(element) => ::core::fmt::Display::fmt(element, f),
                Self::IsVotingPowerProviderRegisteredAt(element) => ::core::fmt::Display::fmt(element, f),
                Self::Multicall(element) => ::core::fmt::Display::fmt(element, f),
                Self::Owner(element) => ::core::fmt::Display::fmt(element, f),
                Self::RemoveQuorumThreshold(element) => ::core::fmt::Display::fmt(element, f),
                Self::RemoveSettlement(element) => ::core::fmt::Display::fmt(element, f),
                Self::RemoveVotingPowerProvider(element) => ::core::fmt::Display::fmt(element, f),
                Self::RenounceOwnership(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetEpochDuration(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetKeysProvider(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetMaxValidatorsCount(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetMaxVotingPower(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetMinInclusionVotingPower(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetNumAggregators(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetNumCommitters(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetRequiredHeaderKeyTag(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetRequiredKeyTags(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetVerificationType(element) => ::core::fmt::Display::fmt(element, f),
                Self::TransferOwnership(element) => ::core::fmt::Display::fmt(element, f),
            }
        }
    }
    impl ::core::convert::From<NetworkCall> for ValSetDriverCalls {
        fn from(value: NetworkCall) -> Self {
            Self::Network(value)
        }
    }
    impl ::core::convert::From<SubnetworkCall> for ValSetDriverCalls {
        fn from(value: SubnetworkCall) -> Self {
            Self::Subnetwork(value)
        }
    }
    impl ::core::convert::From<SubnetworkIdentifierCall> for ValSetDriverCalls {
        fn from(value: SubnetworkIdentifierCall) -> Self {
            Self::SubnetworkIdentifier(value)
        }
    }
    impl ::core::convert::From<AddQuorumThresholdCall> for ValSetDriverCalls {
        fn from(value: AddQuorumThresholdCall) -> Self {
            Self::AddQuorumThreshold(value)
        }
    }
    impl ::core::convert::From<AddSettlementCall> for ValSetDriverCalls {
        fn from(value: AddSettlementCall) -> Self {
            Self::AddSettlement(value)
        }
    }
    impl ::core::convert::From<AddVotingPowerProviderCall> for ValSetDriverCalls {
        fn from(value: AddVotingPowerProviderCall) -> Self {
            Self::AddVotingPowerProvider(value)
        }
    }
    impl ::core::convert::From<Eip712DomainCall> for ValSetDriverCalls {
        fn from(value: Eip712DomainCall) -> Self {
            Self::Eip712Domain(value)
        }
    }
    impl ::core::convert::From<GetConfigCall> for ValSetDriverCalls {
        fn from(value: GetConfigCall) -> Self {
            Self::GetConfig(value)
        }
    }
    impl ::core::convert::From<GetConfigAtCall> for ValSetDriverCalls {
        fn from(value: GetConfigAtCall) -> Self {
            Self::GetConfigAt(value)
        }
    }
    impl ::core::convert::From<GetCurrentEpochCall> for ValSetDriverCalls {
        fn from(value: GetCurrentEpochCall) -> Self {
            Self::GetCurrentEpoch(value)
        }
    }
    impl ::core::convert::From<GetCurrentEpochDurationCall> for ValSetDriverCalls {
        fn from(value: GetCurrentEpochDurationCall) -> Self {
            Self::GetCurrentEpochDuration(value)
        }
    }
    impl ::core::convert::From<GetCurrentEpochStartCall> for ValSetDriverCalls {
        fn from(value: GetCurrentEpochStartCall) -> Self {
            Self::GetCurrentEpochStart(value)
        }
    }
    impl ::core::convert::From<GetEpochDurationCall> for ValSetDriverCalls {
        fn from(value: GetEpochDurationCall) -> Self {
            Self::GetEpochDuration(value)
        }
    }
    impl ::core::convert::From<GetEpochIndexCall> for ValSetDriverCalls {
        fn from(value: GetEpochIndexCall) -> Self {
            Self::GetEpochIndex(value)
        }
    }
    impl ::core::convert::From<GetEpochStartCall> for ValSetDriverCalls {
        fn from(value: GetEpochStartCall) -> Self {
            Self::GetEpochStart(value)
        }
    }
    impl ::core::convert::From<GetKeysProviderCall> for ValSetDriverCalls {
        fn from(value: GetKeysProviderCall) -> Self {
            Self::GetKeysProvider(value)
        }
    }
    impl ::core::convert::From<GetKeysProviderAtCall> for ValSetDriverCalls {
        fn from(value: GetKeysProviderAtCall) -> Self {
            Self::GetKeysProviderAt(value)
        }
    }
    impl ::core::convert::From<GetMaxValidatorsCountCall> for ValSetDriverCalls {
        fn from(value: GetMaxValidatorsCountCall) -> Self {
            Self::GetMaxValidatorsCount(value)
        }
    }
    impl ::core::convert::From<GetMaxValidatorsCountAtCall> for ValSetDriverCalls {
        fn from(value: GetMaxValidatorsCountAtCall) -> Self {
            Self::GetMaxValidatorsCountAt(value)
        }
    }
    impl ::core::convert::From<GetMaxVotingPowerCall> for ValSetDriverCalls {
        fn from(value: GetMaxVotingPowerCall) -> Self {
            Self::GetMaxVotingPower(value)
        }
    }
    impl ::core::convert::From<GetMaxVotingPowerAtCall> for ValSetDriverCalls {
        fn from(value: GetMaxVotingPowerAtCall) -> Self {
            Self::GetMaxVotingPowerAt(value)
        }
    }
    impl ::core::convert::From<GetMinInclusionVotingPowerCall> for ValSetDriverCalls {
        fn from(value: GetMinInclusionVotingPowerCall) -> Self {
            Self::GetMinInclusionVotingPower(value)
        }
    }
    impl ::core::convert::From<GetMinInclusionVotingPowerAtCall> for ValSetDriverCalls {
        fn from(value: GetMinInclusionVotingPowerAtCall) -> Self {
            Self::GetMinInclusionVotingPowerAt(value)
        }
    }
    impl ::core::convert::From<GetNextEpochCall> for ValSetDriverCalls {
        fn from(value: GetNextEpochCall) -> Self {
            Self::GetNextEpoch(value)
        }
    }
    impl ::core::convert::From<GetNextEpochDurationCall> for ValSetDriverCalls {
        fn from(value: GetNextEpochDurationCall) -> Self {
            Self::GetNextEpochDuration(value)
        }
    }
    impl ::core::convert::From<GetNextEpochStartCall> for ValSetDriverCalls {
        fn from(value: GetNextEpochStartCall) -> Self {
            Self::GetNextEpochStart(value)
        }
    }
    impl ::core::convert::From<GetNumAggregatorsCall> for ValSetDriverCalls {
        fn from(value: GetNumAggregatorsCall) -> Self {
            Self::GetNumAggregators(value)
        }
    }
    impl ::core::convert::From<GetNumAggregatorsAtCall> for ValSetDriverCalls {
        fn from(value: GetNumAggregatorsAtCall) -> Self {
            Self::GetNumAggregatorsAt(value)
        }
    }
    impl ::core::convert::From<GetNumCommittersCall> for ValSetDriverCalls {
        fn from(value: GetNumCommittersCall) -> Self {
            Self::GetNumCommitters(value)
        }
    }
    impl ::core::convert::From<GetNumCommittersAtCall> for ValSetDriverCalls {
        fn from(value: GetNumCommittersAtCall) -> Self {
            Self::GetNumCommittersAt(value)
        }
    }
    impl ::core::convert::From<GetQuorumThresholdsCall> for ValSetDriverCalls {
        fn from(value: GetQuorumThresholdsCall) -> Self {
            Self::GetQuorumThresholds(value)
        }
    }
    impl ::core::convert::From<GetQuorumThresholdsAtCall> for ValSetDriverCalls {
        fn from(value: GetQuorumThresholdsAtCall) -> Self {
            Self::GetQuorumThresholdsAt(value)
        }
    }
    impl ::core::convert::From<GetRequiredHeaderKeyTagCall> for ValSetDriverCalls {
        fn from(value: GetRequiredHeaderKeyTagCall) -> Self {
            Self::GetRequiredHeaderKeyTag(value)
        }
    }
    impl ::core::convert::From<GetRequiredHeaderKeyTagAtCall> for ValSetDriverCalls {
        fn from(value: GetRequiredHeaderKeyTagAtCall) -> Self {
            Self::GetRequiredHeaderKeyTagAt(value)
        }
    }
    impl ::core::convert::From<GetRequiredKeyTagsCall> for ValSetDriverCalls {
        fn from(value: GetRequiredKeyTagsCall) -> Self {
            Self::GetRequiredKeyTags(value)
        }
    }
    impl ::core::convert::From<GetRequiredKeyTagsAtCall> for ValSetDriverCalls {
        fn from(value: GetRequiredKeyTagsAtCall) -> Self {
            Self::GetRequiredKeyTagsAt(value)
        }
    }
    impl ::core::convert::From<GetSettlementsCall> for ValSetDriverCalls {
        fn from(value: GetSettlementsCall) -> Self {
            Self::GetSettlements(value)
        }
    }
    impl ::core::convert::From<GetSettlementsAtCall> for ValSetDriverCalls {
        fn from(value: GetSettlementsAtCall) -> Self {
            Self::GetSettlementsAt(value)
        }
    }
    impl ::core::convert::From<GetVerificationTypeCall> for ValSetDriverCalls {
        fn from(value: GetVerificationTypeCall) -> Self {
            Self::GetVerificationType(value)
        }
    }
    impl ::core::convert::From<GetVerificationTypeAtCall> for ValSetDriverCalls {
        fn from(value: GetVerificationTypeAtCall) -> Self {
            Self::GetVerificationTypeAt(value)
        }
    }
    impl ::core::convert::From<GetVotingPowerProvidersCall> for ValSetDriverCalls {
        fn from(value: GetVotingPowerProvidersCall) -> Self {
            Self::GetVotingPowerProviders(value)
        }
    }
    impl ::core::convert::From<GetVotingPowerProvidersAtCall> for ValSetDriverCalls {
        fn from(value: GetVotingPowerProvidersAtCall) -> Self {
            Self::GetVotingPowerProvidersAt(value)
        }
    }
    impl ::core::convert::From<IsQuorumThresholdRegisteredCall> for ValSetDriverCalls {
        fn from(value: IsQuorumThresholdRegisteredCall) -> Self {
            Self::IsQuorumThresholdRegistered(value)
        }
    }
    impl ::core::convert::From<IsQuorumThresholdRegisteredAtCall> for ValSetDriverCalls {
        fn from(value: IsQuorumThresholdRegisteredAtCall) -> Self {
            Self::IsQuorumThresholdRegisteredAt(value)
        }
    }
    impl ::core::convert::From<IsSettlementRegisteredCall> for ValSetDriverCalls {
        fn from(value: IsSettlementRegisteredCall) -> Self {
            Self::IsSettlementRegistered(value)
        }
    }
    impl ::core::convert::From<IsSettlementRegisteredAtCall> for ValSetDriverCalls {
        fn from(value: IsSettlementRegisteredAtCall) -> Self {
            Self::IsSettlementRegisteredAt(value)
        }
    }
    impl ::core::convert::From<IsVotingPowerProviderRegisteredCall> for ValSetDriverCalls {
        fn from(value: IsVotingPowerProviderRegisteredCall) -> Self {
            Self::IsVotingPowerProviderRegistered(value)
        }
    }
    impl ::core::convert::From<IsVotingPowerProviderRegisteredAtCall> for ValSetDriverCalls {
        fn from(value: IsVotingPowerProviderRegisteredAtCall) -> Self {
            Self::IsVotingPowerProviderRegisteredAt(value)
        }
    }
    impl ::core::convert::From<MulticallCall> for ValSetDriverCalls {
        fn from(value: MulticallCall) -> Self {
            Self::Multicall(value)
        }
    }
    impl ::core::convert::From<OwnerCall> for ValSetDriverCalls {
        fn from(value: OwnerCall) -> Self {
            Self::Owner(value)
        }
    }
    impl ::core::convert::From<RemoveQuorumThresholdCall> for ValSetDriverCalls {
        fn from(value: RemoveQuorumThresholdCall) -> Self {
            Self::RemoveQuorumThreshold(value)
        }
    }
    impl ::core::convert::From<RemoveSettlementCall> for ValSetDriverCalls {
        fn from(value: RemoveSettlementCall) -> Self {
            Self::RemoveSettlement(value)
        }
    }
    impl ::core::convert::From<RemoveVotingPowerProviderCall> for ValSetDriverCalls {
        fn from(value: RemoveVotingPowerProviderCall) -> Self {
            Self::RemoveVotingPowerProvider(value)
        }
    }
    impl ::core::convert::From<RenounceOwnershipCall> for ValSetDriverCalls {
        fn from(value: RenounceOwnershipCall) -> Self {
            Self::RenounceOwnership(value)
        }
    }
    impl ::core::convert::From<SetEpochDurationCall> for ValSetDriverCalls {
        fn from(value: SetEpochDurationCall) -> Self {
            Self::SetEpochDuration(value)
        }
    }
    impl ::core::convert::From<SetKeysProviderCall> for ValSetDriverCalls {
        fn from(value: SetKeysProviderCall) -> Self {
            Self::SetKeysProvider(value)
        }
    }
    impl ::core::convert::From<SetMaxValidatorsCountCall> for ValSetDriverCalls {
        fn from(value: SetMaxValidatorsCountCall) -> Self {
            Self::SetMaxValidatorsCount(value)
        }
    }
    impl ::core::convert::From<SetMaxVotingPowerCall> for ValSetDriverCalls {
        fn from(value: SetMaxVotingPowerCall) -> Self {
            Self::SetMaxVotingPower(value)
        }
    }
    impl ::core::convert::From<SetMinInclusionVotingPowerCall> for ValSetDriverCalls {
        fn from(value: SetMinInclusionVotingPowerCall) -> Self {
            Self::SetMinInclusionVotingPower(value)
        }
    }
    impl ::core::convert::From<SetNumAggregatorsCall> for ValSetDriverCalls {
        fn from(value: SetNumAggregatorsCall) -> Self {
            Self::SetNumAggregators(value)
        }
    }
    impl ::core::convert::From<SetNumCommittersCall> for ValSetDriverCalls {
        fn from(value: SetNumCommittersCall) -> Self {
            Self::SetNumCommitters(value)
        }
    }
    impl ::core::convert::From<SetRequiredHeaderKeyTagCall> for ValSetDriverCalls {
        fn from(value: SetRequiredHeaderKeyTagCall) -> Self {
            Self::SetRequiredHeaderKeyTag(value)
        }
    }
    impl ::core::convert::From<SetRequiredKeyTagsCall> for ValSetDriverCalls {
        fn from(value: SetRequiredKeyTagsCall) -> Self {
            Self::SetRequiredKeyTags(value)
        }
    }
    impl ::core::convert::From<SetVerificationTypeCall> for ValSetDriverCalls {
        fn from(value: SetVerificationTypeCall) -> Self {
            Self::SetVerificationType(value)
        }
    }
    impl ::core::convert::From<TransferOwnershipCall> for ValSetDriverCalls {
        fn from(value: TransferOwnershipCall) -> Self {
            Self::TransferOwnership(value)
        }
    }
    ///Container type for all return fields from the `NETWORK` function with signature `NETWORK()` and selector `0x8759e6d1`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct NetworkReturn(pub ::ethers::core::types::Address);
    ///Container type for all return fields from the `SUBNETWORK` function with signature `SUBNETWORK()` and selector `0x773e6b54`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct SubnetworkReturn(pub [u8; 32]);
    ///Container type for all return fields from the `SUBNETWORK_IDENTIFIER` function with signature `SUBNETWORK_IDENTIFIER()` and selector `0xabacb807`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct SubnetworkIdentifierReturn(pub u128);
    ///Container type for all return fields from the `eip712Domain` function with signature `eip712Domain()` and selector `0x84b0196e`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct Eip712DomainReturn {
        pub fields: [u8; 1],
        pub name: ::std::string::String,
        pub version: ::std::string::String,
        pub chain_id: ::ethers::core::types::U256,
        pub verifying_contract: ::ethers::core::types::Address,
        pub salt: [u8; 32],
        pub extensions: ::std::vec::Vec<::ethers::core::types::U256>,
    }
    ///Container type for all return fields from the `getConfig` function with signature `getConfig()` and selector `0xc3f909d4`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetConfigReturn(pub Config);
    ///Container type for all return fields from the `getConfigAt` function with signature `getConfigAt(uint48)` and selector `0x13fb0877`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetConfigAtReturn(pub Config);
    ///Container type for all return fields from the `getCurrentEpoch` function with signature `getCurrentEpoch()` and selector `0xb97dd9e2`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetCurrentEpochReturn(pub u64);
    ///Container type for all return fields from the `getCurrentEpochDuration` function with signature `getCurrentEpochDuration()` and selector `0x558e2eb6`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetCurrentEpochDurationReturn(pub u64);
    ///Container type for all return fields from the `getCurrentEpochStart` function with signature `getCurrentEpochStart()` and selector `0xa6e16c4d`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetCurrentEpochStartReturn(pub u64);
    ///Container type for all return fields from the `getEpochDuration` function with signature `getEpochDuration(uint48)` and selector `0xf6fd6f14`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetEpochDurationReturn(pub u64);
    ///Container type for all return fields from the `getEpochIndex` function with signature `getEpochIndex(uint48)` and selector `0xccafd209`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetEpochIndexReturn(pub u64);
    ///Container type for all return fields from the `getEpochStart` function with signature `getEpochStart(uint48)` and selector `0x246e158f`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetEpochStartReturn(pub u64);
    ///Container type for all return fields from the `getKeysProvider` function with signature `getKeysProvider()` and selector `0x297d29b8`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetKeysProviderReturn(pub CrossChainAddress);
    ///Container type for all return fields from the `getKeysProviderAt` function with signature `getKeysProviderAt(uint48)` and selector `0x10a49295`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetKeysProviderAtReturn(pub CrossChainAddress);
    ///Container type for all return fields from the `getMaxValidatorsCount` function with signature `getMaxValidatorsCount()` and selector `0x06ce894d`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetMaxValidatorsCountReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getMaxValidatorsCountAt` function with signature `getMaxValidatorsCountAt(uint48)` and selector `0x4f938edc`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetMaxValidatorsCountAtReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getMaxVotingPower` function with signature `getMaxVotingPower()` and selector `0x9f9c3080`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetMaxVotingPowerReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getMaxVotingPowerAt` function with signature `getMaxVotingPowerAt(uint48)` and selector `0x848b3040`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetMaxVotingPowerAtReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getMinInclusionVotingPower` function with signature `getMinInclusionVotingPower()` and selector `0xb6a94695`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetMinInclusionVotingPowerReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getMinInclusionVotingPowerAt` function with signature `getMinInclusionVotingPowerAt(uint48)` and selector `0x456705a2`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetMinInclusionVotingPowerAtReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getNextEpoch` function with signature `getNextEpoch()` and selector `0xefe97d05`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNextEpochReturn(pub u64);
    ///Container type for all return fields from the `getNextEpochDuration` function with signature `getNextEpochDuration()` and selector `0x038cf1c0`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNextEpochDurationReturn(pub u64);
    ///Container type for all return fields from the `getNextEpochStart` function with signature `getNextEpochStart()` and selector `0x65c5f94a`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNextEpochStartReturn(pub u64);
    ///Container type for all return fields from the `getNumAggregators` function with signature `getNumAggregators()` and selector `0x21fbfe0d`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNumAggregatorsReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getNumAggregatorsAt` function with signature `getNumAggregatorsAt(uint48)` and selector `0x6bb7e08a`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNumAggregatorsAtReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getNumCommitters` function with signature `getNumCommitters()` and selector `0x7861db16`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNumCommittersReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getNumCommittersAt` function with signature `getNumCommittersAt(uint48)` and selector `0xe0078c64`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetNumCommittersAtReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getQuorumThresholds` function with signature `getQuorumThresholds()` and selector `0x5796148c`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetQuorumThresholdsReturn(pub ::std::vec::Vec<QuorumThreshold>);
    ///Container type for all return fields from the `getQuorumThresholdsAt` function with signature `getQuorumThresholdsAt(uint48)` and selector `0xf2f46b83`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetQuorumThresholdsAtReturn(pub ::std::vec::Vec<QuorumThreshold>);
    ///Container type for all return fields from the `getRequiredHeaderKeyTag` function with signature `getRequiredHeaderKeyTag()` and selector `0x6582e9f7`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetRequiredHeaderKeyTagReturn(pub u8);
    ///Container type for all return fields from the `getRequiredHeaderKeyTagAt` function with signature `getRequiredHeaderKeyTagAt(uint48)` and selector `0xbc12e1fd`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetRequiredHeaderKeyTagAtReturn(pub u8);
    ///Container type for all return fields from the `getRequiredKeyTags` function with signature `getRequiredKeyTags()` and selector `0xf9bfa78a`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetRequiredKeyTagsReturn(pub ::std::vec::Vec<u8>);
    ///Container type for all return fields from the `getRequiredKeyTagsAt` function with signature `getRequiredKeyTagsAt(uint48)` and selector `0x1161fc83`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetRequiredKeyTagsAtReturn(pub ::std::vec::Vec<u8>);
    ///Container type for all return fields from the `getSettlements` function with signature `getSettlements()` and selector `0xa0c2bc25`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetSettlementsReturn(pub ::std::vec::Vec<CrossChainAddress>);
    ///Container type for all return fields from the `getSettlementsAt` function with signature `getSettlementsAt(uint48)` and selector `0x763d255a`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetSettlementsAtReturn(pub ::std::vec::Vec<CrossChainAddress>);
    ///Container type for all return fields from the `getVerificationType` function with signature `getVerificationType()` and selector `0x24acc119`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetVerificationTypeReturn(pub u32);
    ///Container type for all return fields from the `getVerificationTypeAt` function with signature `getVerificationTypeAt(uint48)` and selector `0x3a0ad9ec`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetVerificationTypeAtReturn(pub u32);
    ///Container type for all return fields from the `getVotingPowerProviders` function with signature `getVotingPowerProviders()` and selector `0x3e39b8db`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetVotingPowerProvidersReturn(pub ::std::vec::Vec<CrossChainAddress>);
    ///Container type for all return fields from the `getVotingPowerProvidersAt` function with signature `getVotingPowerProvidersAt(uint48)` and selector `0x09bba5ca`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetVotingPowerProvidersAtReturn(pub ::std::vec::Vec<CrossChainAddress>);
    ///Container type for all return fields from the `isQuorumThresholdRegistered` function with signature `isQuorumThresholdRegistered((uint8,uint248))` and selector `0x79a4c359`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct IsQuorumThresholdRegisteredReturn(pub bool);
    ///Container type for all return fields from the `isQuorumThresholdRegisteredAt` function with signature `isQuorumThresholdRegisteredAt((uint8,uint248),uint48)` and selector `0x80c2fc48`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct IsQuorumThresholdRegisteredAtReturn(pub bool);
    ///Container type for all return fields from the `isSettlementRegistered` function with signature `isSettlementRegistered((uint64,address))` and selector `0x965c0768`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct IsSettlementRegisteredReturn(pub bool);
    ///Container type for all return fields from the `isSettlementRegisteredAt` function with signature `isSettlementRegisteredAt((uint64,address),uint48)` and selector `0x01749b26`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct IsSettlementRegisteredAtReturn(pub bool);
    ///Container type for all return fields from the `isVotingPowerProviderRegistered` function with signature `isVotingPowerProviderRegistered((uint64,address))` and selector `0x1265b3be`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct IsVotingPowerProviderRegisteredReturn(pub bool);
    ///Container type for all return fields from the `isVotingPowerProviderRegisteredAt` function with signature `isVotingPowerProviderRegisteredAt((uint64,address),uint48)` and selector `0xc16ccb73`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct IsVotingPowerProviderRegisteredAtReturn(pub bool);
    ///Container type for all return fields from the `multicall` function with signature `multicall(bytes[])` and selector `0xac9650d8`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct MulticallReturn {
        pub results: ::std::vec::Vec<::ethers::core::types::Bytes>,
    }
    ///Container type for all return fields from the `owner` function with signature `owner()` and selector `0x8da5cb5b`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct OwnerReturn(pub ::ethers::core::types::Address);
    ///`Config(uint48,uint208,uint208,(uint64,address)[],(uint64,address),(uint64,address)[],uint256,uint256,uint208,uint8[],(uint8,uint248)[],uint8,uint32)`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct Config {
        pub epoch_duration: u64,
        pub num_aggregators: ::ethers::core::types::U256,
        pub num_committers: ::ethers::core::types::U256,
        pub voting_power_providers: ::std::vec::Vec<CrossChainAddress>,
        pub keys_provider: CrossChainAddress,
        pub settlements: ::std::vec::Vec<CrossChainAddress>,
        pub max_voting_power: ::ethers::core::types::U256,
        pub min_inclusion_voting_power: ::ethers::core::types::U256,
        pub max_validators_count: ::ethers::core::types::U256,
        pub required_key_tags: ::std::vec::Vec<u8>,
        pub quorum_thresholds: ::std::vec::Vec<QuorumThreshold>,
        pub required_header_key_tag: u8,
        pub verification_type: u32,
    }
    ///`CrossChainAddress(uint64,address)`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct CrossChainAddress {
        pub chain_id: u64,
        pub addr: ::ethers::core::types::Address,
    }
    ///`QuorumThreshold(uint8,uint248)`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        serde::Serialize,
        serde::Deserialize,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct QuorumThreshold {
        pub key_tag: u8,
        pub quorum_threshold: ::ethers::core::types::U256,
    }
}
