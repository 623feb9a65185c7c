// This file was generated by teju-gen from `ieee128.json`. DO NOT EDIT IT.

use crate::flt2dec::multiply;
use crate::flt2dec::{MultInverse, Multiplier, Table};

pub type MShift = multiply::BuiltIn1;
pub type Div10 = multiply::Synthetic1;

pub static TABLE: Table<'static, u128> = Table {
    mantissa_width: 113,
    exponent_min: -16494,
    exponent_max: 16271,
    index_offset: -4966,
    shift: 256,
    multipliers: &MULTIPLIERS,
    minverse: &MINVERSE,
};

static MULTIPLIERS: [Multiplier<u128>; 9865] = [
    Multiplier { upper: 0xcf34a273bb7ea9a3f4d36655a35ec0d4, lower: 0xd5ac45eddf014d24d2c5a14581f5713f }, // -4966
    Multiplier { upper: 0xa5c3b52962cbbae990a91eaae9189a43, lower: 0xde236b24b26770ea4237b4379b2ac0ff }, // -4965
    Multiplier { upper: 0x849c90ede8a2fbee0d541888ba7a1503, lower: 0x181c55b6f51f8d8834f95cf948ef00cc }, // -4964
    Multiplier { upper: 0xd42db4afda9e5fe348868da790c354d1, lower: 0xc02d55f188327c0d218efb2874b19ae0 }, // -4963
    Multiplier { upper: 0xa9be2a26487eb31c3a053e1fa702aa41, lower: 0x668aab27a028633db4726286c3c148b3 }, // -4962
    Multiplier { upper: 0x87cb54eb6d3228e3619dcb4c859bbb67, lower: 0x853bbc1fb3538297c38eb5389c9aa08f }, // -4961
    Multiplier { upper: 0xd94554abe1e9db0568fc787a6f5f923f, lower: 0x3b92c6991eec042605b121f42dc43418 }, // -4960
    Multiplier { upper: 0xadd110898187e26aba63939525e60e98, lower: 0xfc756badb25669b8048db4c357d029ad }, // -4959
    Multiplier { upper: 0x8b0da6d4679fe85561e942ddb7eb3ee0, lower: 0xc9f78957c1debaf99d3e2a35dfd9baf1 }, // -4958
    Multiplier { upper: 0xde7c3e20a5cca6ef030ed162bfdecb01, lower: 0x4325a88c69645e5c2ec9dd22ffc2c4b5 }, // -4957
    Multiplier { upper: 0xb1fcfe8084a3b8bf35a5744effe56f34, lower: 0x35b7ba09ede9e5168bd4b0e8cc9bd091 }, // -4956
    Multiplier { upper: 0x8e63fecd36e96098f7b7903f331df290, lower: 0x2af961a18b2184120976f3ed707ca6da }, // -4955
    Multiplier { upper: 0xe3d3314857dbcdc18c58e6cb84fcb74d, lower: 0x118f029c11cf39b6758b1fe24d943e2a }, // -4954
    Multiplier { upper: 0xb6428dd3797ca49ad6ad856f9d96f90a, lower: 0x7472687cdb0c2e2b913c1981d7a9cb55 }, // -4953
    Multiplier { upper: 0x91ced7dc613083af12246abfb1459408, lower: 0x5d28539715a35822da967ace46216f77 }, // -4952
    Multiplier { upper: 0xe94af2fa351a6c4b503a4465e86f5340, lower: 0x950d528b55d2269e2a8a5e16d69be58b }, // -4951
    Multiplier { upper: 0xbaa25bfb5daebd090cfb69eb20590f66, lower: 0xdda442091174ebb1bba1e4df1216513c }, // -4950
    Multiplier { upper: 0x954eaffc4af230d40a62bb2280473f85, lower: 0x7e1d01a0dac3efc162e7ea4c0e7840fd }, // -4949
    Multiplier { upper: 0xeee44cc6de504e20109df83733a5326f, lower: 0x302e69015e064c689e3fdd467d8d34c7 }, // -4948
    Multiplier { upper: 0xbf1d0a38b1d9d819a6e4c6928fb75b8c, lower: 0x268b87344b383d207e997dd1fe0a90a0 }, // -4947
    Multiplier { upper: 0x98e4082d5b14ace152509edba62c493c, lower: 0xeba2d2903c2cfdb3987acb0e64d54080 }, // -4946
    Multiplier { upper: 0xf4a00d155e877b021d4dcaf909e0752e, lower: 0x45d150e6c6ae62b8f3f7ab4a3aeecd99 }, // -4945
    Multiplier { upper: 0xc3b33daab205fc01b10b08c73b19f758, lower: 0x37daa71f05584efa5cc622a1c8bf0ae1 }, // -4944
    Multiplier { upper: 0x9c8f64888e6b30015a6f3a38fc14c5e0, lower: 0x2caeec18d1137261e3d1b54e3a326f1a }, // -4943
    Multiplier { upper: 0xfa7f0740e3deb3355d7ec38e60213c99, lower: 0xe117e027b4ebea36394f887d29ea4b5d }, // -4942
    Multiplier { upper: 0xc8659f671cb228f77dff02d84ce763ae, lower: 0x4dacb352f72321c4faa606ca87eea2b1 }, // -4941
    Multiplier { upper: 0xa0514c527d5b53f93198cf1370b91c8b, lower: 0x7156f5dbf8e8e7d0c884d23b9ff21bc1 }, // -4940
    Multiplier { upper: 0x804109db977c432dc1470c0f8d60e3a2, lower: 0xc1125e4993ed8640a06a41c94cc1afce }, // -4939
    Multiplier { upper: 0xcd34dc928bfa0516020b467f489b05d1, lower: 0x34ea3075b97c0a0100aa02dbae02b2e2 }, // -4938
    Multiplier { upper: 0xa42a4a0ed6619dab34d5d1ff6d48d174, lower: 0x2a54f39161300800cd54cf1624cef582 }, // -4937
    Multiplier { upper: 0x8355080bdeb47e2290ab0e65f1070df6, lower: 0x8843f60de759a000a443d8de83d8c468 }, // -4936
    Multiplier { upper: 0xd221a6796453fd041aab4a3cb4d81657, lower: 0x406cbce30bc2999aa06c8e30d2f46d73 }, // -4935
    Multiplier { upper: 0xa81aeb94504330d01555d4fd5d79ab79, lower: 0x0056fd826fcee1488056d8270f29f129 }, // -4934
    Multiplier { upper: 0x867befa9d9cf5a40111177311794892d, lower: 0x99df3135263f1aa066abe01f3f54c0ee }, // -4933
    Multiplier { upper: 0xd72cb2a95c7ef6cce81bf1e825ba7515, lower: 0xc2feb521d6cb5dcd71130031feee017c }, // -4932
    Multiplier { upper: 0xac23c22116cbf8a3ece327eceafb90de, lower: 0x359890e7df0917d78da8ccf4cbf19aca }, // -4931
    Multiplier { upper: 0x89b634e7456ffa1cbd8286572262da4b, lower: 0x5e13a71fe5a0dfdfa4870a5d6ff47bd5 }, // -4930
    Multiplier { upper: 0xdc56bb0ba24cc3612f373d5837049078, lower: 0x9685d83309016632a0d810957fed92ed }, // -4929
    Multiplier { upper: 0xb045626fb50a35e758f8fde02c03a6c6, lower: 0xded179c26d9ab82880acda113324758b }, // -4928
    Multiplier { upper: 0x8d044ebfc4082b1f7a60cb19bccfb89f, lower: 0x18a7949b8ae22ced33bd7b40f5b6c46f }, // -4927
    Multiplier { upper: 0xe1a07dffa00d11cbf70144f5fae5f431, lower: 0xc10c20f8de36ae4852c8c534bc57a0b2 }, // -4926
    Multiplier { upper: 0xb48064cc800a74a32c0103f7fbeb29c1, lower: 0x673ce72d7e922506a8a09dc3c9dfb3c1 }, // -4925
    Multiplier { upper: 0x9066b70a00085d4f5667365ffcbc2167, lower: 0x85ca528acba81d9eed4d4b0307e62968 }, // -4924
    Multiplier { upper: 0xe70abe766673c87ef0a523ccc79368a5, lower: 0xa2dd50de12a695cb15487804d970423f }, // -4923
    Multiplier { upper: 0xb8d5652b85296d325a1db63d6c75ed51, lower: 0x4f1773e4dbb877d5aaa06003e1269b66 }, // -4922
    Multiplier { upper: 0x93ddea893754575b7b4af83123918aa7, lower: 0x72792983e2f9f977bbb380031a85491e }, // -4921
    Multiplier { upper: 0xec96440ebeed58925ede59e838e8ddd8, lower: 0xb728426c9e5cc2592c52666b5da20e97 }, // -4920
    Multiplier { upper: 0xbd45033eff2446db7f1847ecfa53e4ad, lower: 0x5f536856e51701e0f041eb8917b4d879 }, // -4919
    Multiplier { upper: 0x976a68ff32836be2cc136cbd950fea24, lower: 0x4c42b9df1dac0180c034bc6dac90ad2d }, // -4918
    Multiplier { upper: 0xf243db31ea6bdfd146857ac8ee7fdd06, lower: 0xe06ac2fe95e0026799edfa49141aaeaf }, // -4917
    Multiplier { upper: 0xc1cfe28e55231974386ac8a0beccb0d2, lower: 0x4d22359877e66852e18b2ea0dce22559 }, // -4916
    Multiplier { upper: 0x9b0cb53eaa827ac360556d4d65708d75, lower: 0x0a81c479f98520424e08f21a4a4e8447 }, // -4915
    Multiplier { upper: 0xf814553110d0c46bcd557baf08b41588, lower: 0x10cfa0c328d5006a1674b69076e406d8 }, // -4914
    Multiplier { upper: 0xc676aa8da70d69efd7779625a0901139, lower: 0xa70c809c20aa66bb452a2ba6c58338ad }, // -4913
    Multiplier { upper: 0x9ec5553e1f3dee59792c781e1a0cda94, lower: 0x85a39a168088522f6a8822ebd135c6f1 }, // -4912
    Multiplier { upper: 0xfe088863652fe3c25b7a59c9c347c420, lower: 0xd5d2902400da1d18aa736b12e8560b1a }, // -4911
    Multiplier { upper: 0xcb3a06b5ea8cb63515fb7b07cf6c9ce7, lower: 0x1175401ccd7b4a7a21f5ef42537808e2 }, // -4910
    Multiplier { upper: 0xa294d22b220a2b5dab2f959fd923b0b8, lower: 0xdac4334a3dfc3b94e7f7f29b75f9a0b5 }, // -4909
    Multiplier { upper: 0x8210a82281a1bc4aef59447fe0e95a2d, lower: 0x7bd0290831969610b993287c5e614d5e }, // -4908
    Multiplier { upper: 0xd01aa69d9c35fa117ef53a6634a89048, lower: 0xc619db404f57568128eb73fa309baefc }, // -4907
    Multiplier { upper: 0xa67bb87e169194dacbf761eb5d53a6a0, lower: 0x9e7b15cd0c45decdba55f661c07c8bfd }, // -4906
    Multiplier { upper: 0x852fc6cb454143e23cc5e7ef7ddc854d, lower: 0x4b95ab0a7037e57161de5eb499fd3cca }, // -4905
    Multiplier { upper: 0xd5193e1208686c9d2e097318c960d548, lower: 0x78ef7810b38ca24f02fd645429952e10 }, // -4904
    Multiplier { upper: 0xaa7a980e6d2056e424d45c13d44d776d, lower: 0x2d8c600d5c7081d8cf311d10214424da }, // -4903
    Multiplier { upper: 0x8862133ebdb378b683dd167643712c57, lower: 0x57a3800ab05a017a3f5a7da6810350ae }, // -4902
    Multiplier { upper: 0xda3685312f858df0d2fb57239f1b7a25, lower: 0x590599aab3c33590655d95d734d21ab0 }, // -4901
    Multiplier { upper: 0xae9204275937a4c0a8c91282e5af94ea, lower: 0xad9e14888fcf5e0d1de477df5d74e227 }, // -4900
    Multiplier { upper: 0x8ba80352adc61d66ed6da868b7bfaa55, lower: 0x57b1aa06d972b1a417e9f97f7df71b52 }, // -4899
    Multiplier { upper: 0xdf733884493cfbd7e2490d745932aa22, lower: 0x25e9100af5844f6cf30ff598c98b5eea }, // -4898
    Multiplier { upper: 0xb2c2939d0763fcacb5073df6adc221b4, lower: 0xeb20d9a25e0372bd8f3ff7ad6e0918bb }, // -4897
    Multiplier { upper: 0x8f020fb0d2b663bd5d9f64c557ce815d, lower: 0x88e71481e4cf8efe0c332c8abe6dad63 }, // -4896
    Multiplier { upper: 0xe4d0191aeabd6c622f656e088c7d9bc8, lower: 0xdb0b540307b27e6346b8474463e2af04 }, // -4895
    Multiplier { upper: 0xb70ce0e2556456b4f2b78b3a09fe163a, lower: 0x48d5dccf395b984f6bc69f69e982259d }, // -4894
    Multiplier { upper: 0x9270b3e84450455d8ef93c2e6e64de95, lower: 0x07117d72944946a5efd21921879b514a }, // -4893
    Multiplier { upper: 0xea4deca6d3b3a22f4b28604a4a3afdbb, lower: 0x3e826250ed420aa319502835a5c54edd }, // -4892
    Multiplier { upper: 0xbb718a1f0fc2e825d5b9e6a1d4fbfe2f, lower: 0x65351b73f101a21c1440202aeb043f17 }, // -4891
    Multiplier { upper: 0x95f46e7f3fcf201e4494b881772ffe8c, lower: 0x50f749298d9ae8167699b35588d03279 }, // -4890
    Multiplier { upper: 0xefed7d9866183363a0edf402584cca7a, lower: 0x1b2541dc15c4a68a575c5222748050c2 }, // -4889
    Multiplier { upper: 0xbff13146b8135c4fb3f19001e03d6ec8, lower: 0x15b767e3449d520845e374e85d3373ce }, // -4888
    Multiplier { upper: 0x998dc105600f7d0c8ff47334b36458a0, lower: 0x115f864f6a1774d36b1c5d86b0f5f63f }, // -4887
    Multiplier { upper: 0xf5af9b3bcce594e0e653eb87856d5a99, lower: 0xb565a3b24358baebde93c8d7818989fe }, // -4886
    Multiplier { upper: 0xc48c7c2fd71e10b3eb76560604577bae, lower: 0x2ab7b62835e095897edca0ac67a13b31 }, // -4885
    Multiplier { upper: 0x9d3d302645b1a6f655f844d19d12c958, lower: 0x222c91b9c4b3aad4657d4d56b94dc8f4 }, // -4884
    Multiplier { upper: 0xfb9519d6d5e90b23bcc06e1c2e847559, lower: 0xd0474f8fa11f77ba3bfbaef1287c74ba }, // -4883
    Multiplier { upper: 0xc94414abde5408e963cd24e35869f77b, lower: 0x0d05d93fb4192c94fcc958c0ed305d62 }, // -4882
    Multiplier { upper: 0xa10343bcb1dcd3ede970ea4f79ee5f95, lower: 0xa404adcc901423aa63d44700bdc04ab5 }, // -4881
    Multiplier { upper: 0x80cf6963c17d7657edf3eea5fb251944, lower: 0x8336f17073434fbb831038cd6499d55d }, // -4880
    Multiplier { upper: 0xce18a89f9bfbf08cafecb10991d4f53a, lower: 0x6b8b1be71ed2192c04e6c148a0f6222f }, // -4879
    Multiplier { upper: 0xa4e086e6166326d6f323c0d474aa5dc8, lower: 0x5608e31f4bdb47566a52343a1a5e81bf }, // -4878
    Multiplier { upper: 0x83e6d251ab828578c28300a9f6eeb16d, lower: 0x11a0b5b2a315d2ab8841c361aeb20166 }, // -4877
    Multiplier { upper: 0xd30aea1c459da25ad0d19aa98b178248, lower: 0x1c3455ea9e895112739c6bcf7de99bd6 }, // -4876
    Multiplier { upper: 0xa8d588169e17b51573dae2213c12cea0, lower: 0x169044bbb207740ec2e38972cb214978 }, // -4875
    Multiplier { upper: 0x871139abb1ac90ddf648b4e763423ee6, lower: 0x78736a2fc19f900bcf1c6df56f4dd460 }, // -4874
    Multiplier { upper: 0xd81b8f791c474e2ff07454a56b9d3170, lower: 0xc0b8a9e60298e6794b60afef187c8700 }, // -4873
    Multiplier { upper: 0xace2d92db0390b598d29dd5122e4278d, lower: 0x66fa2184cee0b861091a2658e0639f33 }, // -4872
    Multiplier { upper: 0x8a4f14248cfa6f7ad754b10db58352d7, lower: 0x8594e79d724d604da0e1b84719e94c29 }, // -4871
    Multiplier { upper: 0xdd4b536dae5d7f2af2211b49226bb7bf, lower: 0x3c21729583af007c349c5a0b5ca879db }, // -4870
    Multiplier { upper: 0xb1090f8af1e465bbf4e749074ebc92ff, lower: 0x634df5446958cd302a16ae6f7d5394af }, // -4869
    Multiplier { upper: 0x8da0d93bf4b6b7c990b907390bca0f32, lower: 0xb5d7f769ede0a42688122525fddc76f3 }, // -4868
    Multiplier { upper: 0xe29af52cbabdf2dc1ac1a52812dce51d, lower: 0xefbff243163439d7401d083cc960be51 }, // -4867
    Multiplier { upper: 0xb548c423c897f57ce23484200f171db1, lower: 0x8c998e9c11c36179001739ca3ab3cb74 }, // -4866
    Multiplier { upper: 0x9107034fd3acc463e82a034cd8df4af4, lower: 0x707ad87cdb02b460ccdf616e955ca2c3 }, // -4865
    Multiplier { upper: 0xe80b387fb9146d6ca6a99ee15afede53, lower: 0xe72af3faf80453ce14989be4222dd138 }, // -4864
    Multiplier { upper: 0xb9a2939960dd2456ebbae5811598b1dc, lower: 0xb8ef29959336a971aa13afe9b4f1742d }, // -4863
    Multiplier { upper: 0x94820fade7175045896251341146f4b0, lower: 0x93f287aadc2bbac154dc8cbaf7279024 }, // -4862
    Multiplier { upper: 0xed9ce5e30b58806f4236e8534ed7ede7, lower: 0x531da5de2d12c46887c747918b728039 }, // -4861
    Multiplier { upper: 0xbe171e4f3c46cd25ce925375d8acbe52, lower: 0xa8e484b1bda89d206c9f6c746f8eccfb }, // -4860
    Multiplier { upper: 0x98127ea5c9d23db7d8750f917a23cb75, lower: 0x53ea03c16486e419f07f89f6bfa570c9 }, // -4859
    Multiplier { upper: 0xf350caa2dc8395f2f3ee7f4f29d2df22, lower: 0x1fdcd2cf073e39c31a65a98acc3be7a7 }, // -4858
    Multiplier { upper: 0xc2a708824a02de5bf65865d8ee424c1b, lower: 0x4cb0a8a59f64fb027b8487a23cfcb953 }, // -4857
    Multiplier { upper: 0x9bb8d39b6e68b1e32b79eb13f1cea349, lower: 0x0a26ed514c50c8cec936d2e830ca2ddc }, // -4856
    Multiplier { upper: 0xf927b8f8b0a78305125cab531c7dd20e, lower: 0x76a4aee87a1adae4752484a6b476afc6 }, // -4855
    Multiplier { upper: 0xc752fa608d52cf3741e3bc427d3174d8, lower: 0x5eea2586c8157be9f7506a1ef6c5596b }, // -4854
    Multiplier { upper: 0x9f75951a0aa8a5c5ce4fc9ceca8df713, lower: 0x7f21b79f06779654c5d9ee7f2bd11456 }, // -4853
    Multiplier { upper: 0xff228829aaa76fa2e3b2dc7e10e324eb, lower: 0xfe9c58fe70bf56ee095cb0cb794e86ef }, // -4852
    Multiplier { upper: 0xcc1ba0215552bfb582f57d31a71c1d89, lower: 0x987d13fec0991258077d5a3c610b9f26 }, // -4851
    Multiplier { upper: 0xa3494ce77775662acf2aca8e1f49b13a, lower: 0xe0640fff007a7513393114fd1a6fb285 }, // -4850
    Multiplier { upper: 0x82a10a52c5f784ef0c223ba4e5d48dc8, lower: 0xb3833fff33952a75c75a7730e1f2f537 }, // -4849
    Multiplier { upper: 0xd101aa1e098c07e4e036c5d4a2edafa7, lower: 0x859ecccb85bb7722d890beb49cb7eebf }, // -4848
    Multiplier { upper: 0xa734881807a33983e69237dd4f248c86, lower: 0x047f0a3c6afc5f4f13a6fef6e3c65899 }, // -4847
    Multiplier { upper: 0x85c3a013394f6136520e93177283a39e, lower: 0x69ff3b6388c9e5d8dc8598c5830513ad }, // -4846
    Multiplier { upper: 0xd605cceb8ee56856e9b0eb58b73905ca, lower: 0x4331f89f4143095afa6f5ad59e6e85e2 }, // -4845
    Multiplier { upper: 0xab37d722d8b786abee2722ad5f60d16e, lower: 0x9c27fa1901026de261f2af114b8b9e4e }, // -4844
    Multiplier { upper: 0x88f978e8ad5f9eeff1b8e88ab2b3dabe, lower: 0xe3532e7a673524b51b288c0dd6094b72 }, // -4843
    Multiplier { upper: 0xdb28c1744898fe4cb5f4a744511fc464, lower: 0x9eeb7d90a521d454f840e01623421250 }, // -4842
    Multiplier { upper: 0xaf53cdf6a07a650a2b2a1f69da7fd050, lower: 0x7f22cada1db4a9dd936719ab4f680ea6 }, // -4841
    Multiplier { upper: 0x8c430b2bb3951da1bc21b2bb15330d0d, lower: 0x32823be1b15d54b142b8e155d9200bb8 }, // -4840
    Multiplier { upper: 0xe06b4512b8ee95cf93691df821eb4815, lower: 0x1d9d2c9c4efbbab5378e3556283345f3 }, // -4839
    Multiplier { upper: 0xb389040efa5877d942ba7e601b22a010, lower: 0xe47dbd49d8c9622a92d82aab535c37f6 }, // -4838
    Multiplier { upper: 0x8fa0d00bfb79f97a9bc86519af4ee673, lower: 0xe9fe3107e0a11b55424688890f7cf992 }, // -4837
    Multiplier { upper: 0xe5ce19acc58ff590f940a1c2b217d71f, lower: 0xdcc9e80c9a9b5eeed070da74e594c282 }, // -4836
    Multiplier { upper: 0xb7d8148a37a65e0d9433b49bc1acac19, lower: 0x7d6e533d487c4bf2405a485d84770202 }, // -4835
    Multiplier { upper: 0x931343a1c61eb1a4768fc3afce23bce1, lower: 0x31250f6439fd098e99e1d37e03926802 }, // -4834
    Multiplier { upper: 0xeb5205cfa3644f6d8a7f9f7fb0392e35, lower: 0x1b6e7f06c32e75b0f6361f3005b70ccf }, // -4833
    Multiplier { upper: 0xbc419e3fb5e9d9246ecc7f9959c7582a, lower: 0x7c58659f028b915a5e91b28cd15f3d73 }, // -4832
    Multiplier { upper: 0x969ae4ffc4bb141d2570661447d2acee, lower: 0xc9e0514c0209411518748ed70de5cac2 }, // -4831
    Multiplier { upper: 0xf0f7d4cc6df8202ea24d702072eaae4a, lower: 0xdc9a1bacd00ece882720e48b496faad0 }, // -4830
    Multiplier { upper: 0xc0c643d6be6019bee83df34d28bbbea2, lower: 0x4a14e2f0a6723ed35280b6d5d4595573 }, // -4829
    Multiplier { upper: 0x9a3836456519ae325364c2a42096321b, lower: 0x6e771bf3b85b6575db9a2bde437aaac3 }, // -4828
    Multiplier { upper: 0xf6c056d56e8f7d1d523ad1069a89e9c5, lower: 0x7d8b5fec5a2bd5895f5d12fd38c4446b }, // -4827
    Multiplier { upper: 0xc566abddf20c641774fbda6baed4bb04, lower: 0x646f7ff04823113ab2b0dbfdc70369ef }, // -4826
    Multiplier { upper: 0x9debbcb18e705012c3fcaebc8bdd6269, lower: 0xe9f2ccc039b5a762288d7ccb059c54bf }, // -4825
    Multiplier { upper: 0xfcac611c171a19b79ffab12dac956a43, lower: 0x0feae1338f890bd040e26144d5c6edff }, // -4824
    Multiplier { upper: 0xca2380e345ae7af94cc88dbe23aabb68, lower: 0xd988b4293fa0d64033e84dd0ab058b32 }, // -4823
    Multiplier { upper: 0xa1b600b5d15862610a3a0afe82eefc53, lower: 0xe13a29ba994d78335cb9d7da226ad5c2 }, // -4822
    Multiplier { upper: 0x815e66f7daad1b80d4fb3bfecf2596a9, lower: 0x80fb549547712cf5e3c7dfe1b522449b }, // -4821
    Multiplier { upper: 0xcefd718c9114f8ce2191f997b1d5bddc, lower: 0x019220eed8b514bc9fa63302bb6a075e }, // -4820
    Multiplier { upper: 0xa5978e0a0daa60a4e7a7fadfc177cb16, lower: 0x67a81a58ad5daa307fb828cefc54d2b2 }, // -4819
    Multiplier { upper: 0x84793e6e71551a1d861ffbe6345fd5ab, lower: 0x86201513bde48826cc9353d8c9dd755b }, // -4818
    Multiplier { upper: 0xd3f530b0b554f695a3665fd6ba32ef78, lower: 0xd699bb52c96da6a47a8552f4762f222b }, // -4817
    Multiplier { upper: 0xa990f3c09110c54482b84cabc828bf93, lower: 0xdee162a8a12485506204425d2b58e823 }, // -4816
    Multiplier { upper: 0x87a72966da73d1039bc6a3bca0209943, lower: 0x18b44eed4db6d10d1b369b7dbc47201c }, // -4815
    Multiplier { upper: 0xd90b75715d861b38f93dd2c7669a8ed1, lower: 0xc1207e487c57b4e1c5242bfc6071ccf9 }, // -4814
    Multiplier { upper: 0xada2c45ab13815c72dcb0f05ebaed8a7, lower: 0xcdb39839fd12f71b041ceffd19f4a3fb }, // -4813
    Multiplier { upper: 0x8ae89d155a93449f57d5a59e56257a1f, lower: 0xd7c2e02e640f2c159ce3f330e190832f }, // -4812
    Multiplier { upper: 0xde40fb555db86dcbbfbc3c3089d59032, lower: 0xf2d166b0a0184688fb0651e7cf4d9eb1 }, // -4811
    Multiplier { upper: 0xb1cd95dde4938b0966303026d4aad9c2, lower: 0x5bdab88d4ce0386d959ea7eca5d7b228 }, // -4810
    Multiplier { upper: 0x8e3e117e507608d451c0268576ef149b, lower: 0x7caefa0aa3e6938ade188656eb12f4ed }, // -4809
    Multiplier { upper: 0xe3968263b3f00e2082cd0a6f24b1ba92, lower: 0x6117f6776ca41f44968da3be44eb217a }, // -4808
    Multiplier { upper: 0xb61201e95cc00b4d3570d525b6f49541, lower: 0xe7465ec5f0834c36ded7b631d0bc1ac8 }, // -4807
    Multiplier { upper: 0x91a801877d666f70f78d77515f2a1101, lower: 0x85d1e56b26cf702be5795e8e40967bd3 }, // -4806
    Multiplier { upper: 0xe90ccf3f2f0a4be7f27bf21bcb76819c, lower: 0x094fd5783e18b3796f28974a00f0c61f }, // -4805
    Multiplier { upper: 0xba70a5cc25a1d653286328163c5ece16, lower: 0x6dd9779364e08f9458ed45d4cd8d6b4c }, // -4804
    Multiplier { upper: 0x9526eb09b7b4ab75b9e8ecde96b23e78, lower: 0x57e12c75ea4d3fa9e0bdd1770ad7890a }, // -4803
    Multiplier { upper: 0xeea4ab42bf8778bc5ca7e164245063f3, lower: 0xbfcead8976e1ff763462e8be77bf41a9 }, // -4802
    Multiplier { upper: 0xbeea229bcc6c6096b0864de9b6a6b65c, lower: 0x9972246df8b4cc5e904f20985fcc3487 }, // -4801
    Multiplier { upper: 0x98bb4ee309f04d455a050b215eebc516, lower: 0xe1281d24c6f709e5403f4d46b309c39f }, // -4800
    Multiplier { upper: 0xf45ee49e764d486ef66e783564ac6e8b, lower: 0x01d9c83ad7f1a96ecd32153deb42d298 }, // -4799
    Multiplier { upper: 0xc37f1d4b91d76d2591f1f9c45089f208, lower: 0xce47d362465aedf23dc1aa97ef68a87a }, // -4798
    Multiplier { upper: 0x9c65b1094179241e0e5b2e36a6d4c1a0, lower: 0xa50642b505158b283167bbacbf86ed2e }, // -4797
    Multiplier { upper: 0xfa3c4e75358ea03016f849f10aee029a, lower: 0xa1a39dee6e88dea6b572c5e132717b7d }, // -4796
    Multiplier { upper: 0xc8303ec42ad8802678c6a18da2580215, lower: 0x4e1c7e58586d7eebc45bd180f52795fe }, // -4795
    Multiplier { upper: 0xa026989cef1399b8609ee7a481e001aa, lower: 0xa4e39846ad24658969e30e00c41fab32 }, // -4794
    Multiplier { upper: 0x801ee07d8c0fae2d1a18b95067e667bb, lower: 0xb71c79d2241d1e0787e8d8009ce6228e }, // -4793
    Multiplier { upper: 0xccfe33fc134c49e1c35ac21a3fd70c5f, lower: 0x8b60c2e9d361c9a5a641599a94a36a7d }, // -4792
    Multiplier { upper: 0xa3fe8ffcdc3d07e7cf7bce7b6645a37f, lower: 0xa2b3cf2175e7d4848501147baa1c5531 }, // -4791
    Multiplier { upper: 0x83320cca49ca6cb972c971fc51d14f99, lower: 0x4ef63f4df7ecaa039d9a76c954e3775a }, // -4790
    Multiplier { upper: 0xd1e9ae107610adf58475832d4fb54c28, lower: 0x7e56cbaff3144338fc2a57a887d25890 }, // -4789
    Multiplier { upper: 0xa7ee24d9f80d57f79d2acf5772f77020, lower: 0x65123c8cc2769c2d968846206ca846da }, // -4788
    Multiplier { upper: 0x86581d7b2cd77992e4223f7928c5f34d, lower: 0x1da830709b92168aded36b4d23b9d248 }, // -4787
    Multiplier { upper: 0xd6f3625eae258f516d0398c1dad65214, lower: 0xfc404d80f8e9bdaafe1f121505f61d40 }, // -4786
    Multiplier { upper: 0xabf5e84bbe8472a78a6947017bdea810, lower: 0xc9cd0acd93ee31559818db4404c4e433 }, // -4785
    Multiplier { upper: 0x899186a2fed05bb93b876c012fe55340, lower: 0xa170d5714324f44479ad7c366a371cf6 }, // -4784
    Multiplier { upper: 0xdc1c0a9e648092c1f8d8acceb3088534, lower: 0x358155820507ed3a5c48c6bd76be94bc }, // -4783
    Multiplier { upper: 0xb0166ee51d33a89b2d7a23d88f3a0429, lower: 0xc467779b37398a9516a09efdf89876fd }, // -4782
    Multiplier { upper: 0x8cdebf1db0f6207c2461b646d8fb3687, lower: 0xd052c615c5c7a210dee6e597fa139264 }, // -4781
    Multiplier { upper: 0xe16464fc4e569a603a35f0715b2b8a72, lower: 0xe6ead6893c729ce7cb0b08f329b8ea39 }, // -4780
    Multiplier { upper: 0xb45050c9d845484cfb5e59f448efa1f5, lower: 0x8588aba0fd287d863c08d3f5bafa54fb }, // -4779
    Multiplier { upper: 0x904040a179d106a3fc4b7b29d3f2e7f7, lower: 0x9e06efb3fdb9fe04fcd3dcc4959510c9 }, // -4778
    Multiplier { upper: 0xe6cd34358fb4d76cc6df2b761feb0cbf, lower: 0x633e4c532f8ffcd4c7b9613a88ee8141 }, // -4777
    Multiplier { upper: 0xb8a429c472f712bd6be5bc5e7fef3d65, lower: 0xe8fea375bfa663dd6c944dc86d8b9a9a }, // -4776
    Multiplier { upper: 0x93b687d05bf8dbcabcb7c9e53325cab7, lower: 0xed9882c49951e97df076a4a057a2e215 }, // -4775
    Multiplier { upper: 0xec573fb3c65af94461260fd51ea2ddf3, lower: 0x15c0d13a8ee975964d8aa1008c37d022 }, // -4774
    Multiplier { upper: 0xbd12995c9eaf2dd04db80caa7ee8b18f, lower: 0x449a40fba58791450ad54d9a09c6401b }, // -4773
    Multiplier { upper: 0x9742144a188c24a6a4933d553253c13f, lower: 0x6a1500c95139410408aaa47b3b050016 }, // -4772
    Multiplier { upper: 0xf20353a9c0e03aa43a852eeeb6ec6865, lower: 0x768801421b8ece6cdaaaa0c52b3b3356 }, // -4771
    Multiplier { upper: 0xc19c42ee33e695502ed0f2589256b9ea, lower: 0xc5399a9b493f0b8a4888809dbc2f5c45 }, // -4770
    Multiplier { upper: 0x9ae368be8febaaa68bda5b7a0eabc7ef, lower: 0x042e15490765a2d506d39a17c9bf7d04 }, // -4769
    Multiplier { upper: 0xf7d24130e645ddd7462a2bf67ddfa64b, lower: 0x39e35541a56f6aee715290260f98c806 }, // -4768
    Multiplier { upper: 0xc641cdc0b837e4ac3821bcc5317fb83c, lower: 0x2e4f7767b78c558b8ddba684d947066b }, // -4767
    Multiplier { upper: 0x9e9b0b00935fea23601afd6a8dffc696, lower: 0x8b72c5ec92d6aad60b161ed0add26b89 }, // -4766
    Multiplier { upper: 0xfdc4de675233103899c4c8aa7ccc70f0, lower: 0xdf1e097a848aaaf011bcfe1aafb71275 }, // -4765
    Multiplier { upper: 0xcb03e51f74f5a693ae3706eeca3d2727, lower: 0x18e4d46203a22259a7ca64e2262c0ec4 }, // -4764
    Multiplier { upper: 0xa26984192a5e1edc8b5f38bf0830ec1f, lower: 0x471d76b4cfb4e847b96eb71b51bcd89d }, // -4763
    Multiplier { upper: 0x81ee0347551818b06f7f6098d35a567f, lower: 0x6c17922a3fc3ed062df22c15dafd7a17 }, // -4762
    Multiplier { upper: 0xcfe3387221c02780b265675aebc3bd98, lower: 0xacf28376cc6cae70498379bc91959025 }, // -4761
    Multiplier { upper: 0xa64f605b4e3352cd5b8452af2302fe13, lower: 0xbd8ecf923d23bec03acf9496dade0cea }, // -4760
    Multiplier { upper: 0x850c4d15d8290f0aaf9d0ef28268cb42, lower: 0xfe0bd941ca82ff002f0c76df157e70bb }, // -4759
    Multiplier { upper: 0xd4e07b5626a8181118fb4b1d9d74786b, lower: 0x3012f53610d198004b4724982263e792 }, // -4758
    Multiplier { upper: 0xaa4d2f781eece00dad95d5b14ac39388, lower: 0xf3425dc4da414666a29f5079b51cb942 }, // -4757
    Multiplier { upper: 0x883dbf934bf0b33e2477de276f02dc6d, lower: 0x8f684b03e1cdd1ebb54c40615db09435 }, // -4756
    Multiplier { upper: 0xd9fc65b879811ec9d3f2fd0be4d160af, lower: 0x4bda119fcfafb645eee067022f80ed21 }, // -4755
    Multiplier { upper: 0xae63849394674bd4a98f30d650a7808c, lower: 0x3cae747fd9595e9e58b3859b5933f0e7 }, // -4754
    Multiplier { upper: 0x8b82d0761052a31087a5c0ab73b933a3, lower: 0x63bec3997aade54b7a2937af7a8ff3ec }, // -4753
    Multiplier { upper: 0xdf37b3f01a1dd1b40c3c6778b928529f, lower: 0x05fe05c25de30878c37525e590e65313 }, // -4752
    Multiplier { upper: 0xb292f659ae7e415cd696b92d60ed0ee5, lower: 0x9e64d1684b1c06c702c41e5140b84276 }, // -4751
    Multiplier { upper: 0x8edbf847becb677d787894244d8a7251, lower: 0x4b83dab9d5b0056c02367ea766f9cec5 }, // -4750
    Multiplier { upper: 0xe49326d9314572625a5a86a07c10b6e8, lower: 0x78d2f78fbc4cd5799d23fdd8a4c2e46e }, // -4749
    Multiplier { upper: 0xb6dc1f14276ac1e848486bb39673c586, lower: 0xc70f2c72fd0a44614a83317a1d68b6be }, // -4748
    Multiplier { upper: 0x9249b27685ef0186a039efc2dec3046b, lower: 0xd27289f5973b69e76ecf5ac81786f898 }, // -4747
    Multiplier { upper: 0xea0f83f0d64b35a4338fe604979e6d79, lower: 0x50b743228b92430be47ef7a68c0b275a }, // -4746
    Multiplier { upper: 0xbb3f9cc0ab6f5e1cf60cb803ac7ebdfa, lower: 0xa6f902820941cf3cb6cbf95209a285e2 }, // -4745
    Multiplier { upper: 0x95cc7d66ef8c4b4a5e709336239897fb, lower: 0xb8c73534d434a5ca2bd6610e6e1b9e4e }, // -4744
    Multiplier { upper: 0xefad95717f46dedd63e751f038f4265f, lower: 0x8e0b885486baa2dd12f09b4a49c5ca16 }, // -4743
    Multiplier { upper: 0xbfbe112799057f17831f74c02d901eb2, lower: 0xd80939dd38954f17425a15d507d16e78 }, // -4742
    Multiplier { upper: 0x9964da86140465ac68e5f70024734bc2, lower: 0x466dc7e42d443f45ceae77dd9fdabec7 }, // -4741
    Multiplier { upper: 0xf56e2a7020070913db098b336d854603, lower: 0xa3e2d96d1539fed6177d8c95cc91313e }, // -4740
    Multiplier { upper: 0xc45821f34cd26da97c07a28f8ad104cf, lower: 0xb64f1457442e657812cad6de3d40f432 }, // -4739
    Multiplier { upper: 0x9d134e5c3d752487966c820c6f0d9d72, lower: 0xf83f43790358512cdbd578b1ca9a5cf5 }, // -4738
    Multiplier { upper: 0xfb5216f9fbeea0d8f0ad9ce0b1af6251, lower: 0x8d32058e6bc081e15fbbf44faa9094ba }, // -4737
    Multiplier { upper: 0xc90e78c7fcbee713f3be171a27bf81da, lower: 0xd75b37a5230067e77fc9903fbba6dd62 }, // -4736
    Multiplier { upper: 0xa0d8609ffd6585a98fcb45ae8632ce48, lower: 0xac48f950e8cd1fec663ad9cc961f1782 }, // -4735
    Multiplier { upper: 0x80ad1a1997846aee0ca29e253828a506, lower: 0xf03a610d870a7ff051c8ae3d44e5ac68 }, // -4734
    Multiplier { upper: 0xcde1c35c25a0ab167a9dc9d526a76e71, lower: 0x805d6815a4dd998082dab06207d5e0a6 }, // -4733
    Multiplier { upper: 0xa4b49c49b7b3bc11fbb16e441eec585a, lower: 0xcd178677b717ae0068aef3819fde4d51 }, // -4732
    Multiplier { upper: 0x83c3b03af95c9674c95abe9ce589e048, lower: 0xa412d1f95f4624cd208bf6014cb1d774 }, // -4731
    Multiplier { upper: 0xd2d2b3918efa8a54755dfdc7d5a966da, lower: 0xa01e1cc23209d47b674656687ab62587 }, // -4730
    Multiplier { upper: 0xa8a88fa7a5953b76c44b316caaedebe2, lower: 0x19b1b09b5b3b1062b90511ed2ef81e06 }, // -4729
    Multiplier { upper: 0x86ed3fb951442f9236a28df088be564e, lower: 0x7af48d4915c8d9e894040e5758c67e6b }, // -4728
    Multiplier { upper: 0xd7e1ff8ee86d18e9f104164da796f07d, lower: 0x91874874efa7c30db9a016f227a3fd78 }, // -4727
    Multiplier { upper: 0xacb4cc72538a7a54c0d011d7b9458d31, lower: 0x413906c3f2ec9c0afae678c1b94ffdf9 }, // -4726
    Multiplier { upper: 0x8a2a3d2842d52eaa33d9a7dfc76ad75a, lower: 0x9a9405698f23b008c8b8609afaa664c8 }, // -4725
    Multiplier { upper: 0xdd1061da04884aa9ec8f72ffa577bef7, lower: 0x5db9a2427e9f800e0df3cdc4c43d6e0c }, // -4724
    Multiplier { upper: 0xb0d9e7e19d39d554bd3f8f32eac6325f, lower: 0x7e2e1b68654c6671a4c30b03d03124d6 }, // -4723
    Multiplier { upper: 0x8d7b1fe7b0fb111097660c28bbd1c1e5, lower: 0xfe8b49205109eb8e1d68d59ca68db712 }, // -4722
    Multiplier { upper: 0xe25e9972b4c4e81a8bd679dac61c696f, lower: 0xfdaba833b4dcac16957488faa415f1b6 }, // -4721
    Multiplier { upper: 0xb5187ac22a3720153cab94af04e3878c, lower: 0xcaefb9c2f716f012112a072ee9ab27c5 }, // -4720
    Multiplier { upper: 0x90e06234ee928010fd56108c03e9393d, lower: 0x6f262e359278c00e74219f58baef5304 }, // -4719
    Multiplier { upper: 0xe7cd69ee4a84001b2ef01a799fdb8ec8, lower: 0xb1d6b055b72799b0b9cf655ac4b21e6d }, // -4718
    Multiplier { upper: 0xb971218b6ed00015bf267b947fe2d8a0, lower: 0x8e4559de2c1fae26fb0c51156a281857 }, // -4717
    Multiplier { upper: 0x945a813c58a66677cc1ec943998246e6, lower: 0xd8377b18234c8b52627040ddee8679df }, // -4716
    Multiplier { upper: 0xed5d9b93c10a3d8c79cadb9f5c03a4a4, lower: 0x8d2591c0387a7883d0b39afcb0d72965 }, // -4715
    Multiplier { upper: 0xbde47c763408313d2e3be2e5e3361d50, lower: 0x70eadb002d2ec6cfda2948ca27128784 }, // -4714
    Multiplier { upper: 0x97e9fd2b5cd35a97582fe8b7e8f81773, lower: 0x8d88af3357589f0cae876d6e85a86c6a }, // -4713
    Multiplier { upper: 0xf30ffb7894855dbef37fdabfdb268bec, lower: 0x15a77eb88bc0fe7ab0d8af173c40ad76 }, // -4712
    Multiplier { upper: 0xc2732f93aa044aff2933156648eba323, lower: 0x4485fefa096731fbc0ad58df6366f12b }, // -4711
    Multiplier { upper: 0x9b8f5942ee69d598edc277850722e8e9, lower: 0x039e6594d4528e63008aad7f82b8c0ef }, // -4710
    Multiplier { upper: 0xf8e55b9e4a42ef5b1603f26e71d174a8, lower: 0x05ca3c2153b74a3800dde2659df467e5 }, // -4709
    Multiplier { upper: 0xc71de2e508358c48de698ebec1745d53, lower: 0x37d4fce7762c3b6000b181eae4c38651 }, // -4708
    Multiplier { upper: 0x9f4b1bea6cf7a36d7ebad8989ac37ddc, lower: 0x2caa63ec5e89c9199a279b22509c6b74 }, // -4707
    Multiplier { upper: 0xfede9310ae59057bfdf7c0f42ad262f9, lower: 0xe1109fe09742db5c29d8f836e760abed }, // -4706
    Multiplier { upper: 0xcbe54273bead9dfccb2c9a5cef0eb594, lower: 0xb40d4cb3ac357c49bb13f9c585e6eff1 }, // -4705
    Multiplier { upper: 0xa31dcec2fef14b30a28a151725a55e10, lower: 0x900aa3c2f02ac9d495a9949e04b8bff4 }, // -4704
    Multiplier { upper: 0x827e3f02658dd5c0820810df5151180d, lower: 0x4008830259bbd4aa115476e4d093ccc3 }, // -4703
    Multiplier { upper: 0xd0c9fe6a3c1622cd9cd9b498821b59ae, lower: 0xccda6b36f5f954434eed8b07b41fae05 }, // -4702
    Multiplier { upper: 0xa707febb6344e8a47d7af6e06815e158, lower: 0xa3e1ef5f2b2ddd02a58ad59fc34c8b37 }, // -4701
    Multiplier { upper: 0x859ffefc4f6a53b6cac8c5805344b446, lower: 0xe9818c4c228b1735513bde19690a08f9 }, // -4700
    Multiplier { upper: 0xd5cccb2d4bdd52be11413c00853aba0b, lower: 0x0f35ad469dab58554ec63028a8100e5b }, // -4699
    Multiplier { upper: 0xab0a3c243cb10efe743430006a9561a2, lower: 0x7291576bb155e0443f04f353b9a671e2 }, // -4698
    Multiplier { upper: 0x88d4fce9ca273f31f6902666bbaab481, lower: 0xf54112bc8dde4d03659d8f762e1ec182 }, // -4697
    Multiplier { upper: 0xdaee6176103ecb832419d70ac5dded9c, lower: 0xbb9b512dafca14d23c2f4bf049cacf36 }, // -4696
    Multiplier { upper: 0xaf251ac4d9cbd6028347df3bd17e57b0, lower: 0x9615da8af30810a83025d659d4a23f5f }, // -4695
    Multiplier { upper: 0x8c1daf03e16fde6869064c2fdacb795a, lower: 0x11ab153bf5a00d5359b7deae43b4ff7f }, // -4694
    Multiplier { upper: 0xe02f7e6c9be630a70e7079e62adf2890, lower: 0x1c44eec655cce21ef5f2fde39f87ff31 }, // -4693
    Multiplier { upper: 0xb35931f07cb826ec0b8d2e51bbe5ba0c, lower: 0xe36a589eab0a4e7f2b28cb1c7f9fff5b }, // -4692
    Multiplier { upper: 0x8f7a8e59fd601f233c70f1dafcb7c80a, lower: 0x4f8846e555a1d865bc20a27d32e665e2 }, // -4691
    Multiplier { upper: 0xe590e3c32f0031d1fa4e4fc4c78c7343, lower: 0xb273a4a2229c8d6f93676a61eb0a3c9d }, // -4690
    Multiplier { upper: 0xb7a71c9c2599c174c83ea6370609f5cf, lower: 0xc1f61d4e8216d78c75ec551b226e96e4 }, // -4689
    Multiplier { upper: 0x92ec16e35147cdf7069884f8d1a19173, lower: 0x0191b10b9b45793d2b237748e85878b7 }, // -4688
    Multiplier { upper: 0xeb1357d21ba616580a8da18e1c35b584, lower: 0xcf4f81ac2ba25b9511d25874a6f3f457 }, // -4687
    Multiplier { upper: 0xbc0f7974e2eb45133ba4813e7cf7c46a, lower: 0x3f72ce23561b7c7741751390858ff6ac }, // -4686
    Multiplier { upper: 0x9672c790b589040f62ea00feca5fd054, lower: 0xff8f0b4f7815fd2c345da9406ad99223 }, // -4685
    Multiplier { upper: 0xf0b7a5b455a8067f04a99b3143cc8087, lower: 0xff4b454bf35661e053c90ecd77c2836b }, // -4684
    Multiplier { upper: 0xc092eaf6aaecd1ff36ee15c1030a006c, lower: 0xcc3c376ff5deb4b3763a723df9686923 }, // -4683
    Multiplier { upper: 0x9a0f225eef23db329258116735a199f0, lower: 0xa3635f8cc4b22a292b61f4fe6120541c }, // -4682
    Multiplier { upper: 0xf67e9d64b1d2f850ea26823ebc35c31a, lower: 0x9f0565ae078376a8456987fd6833b9c6 }, // -4681
    Multiplier { upper: 0xc5321783c1759373ee8534fefcf7cf48, lower: 0x7f37848b3935f8869dee0664535c949f }, // -4680
    Multiplier { upper: 0x9dc1ac69679142c325375d98ca5fd906, lower: 0xcc2c6a08fa91939ee4be6b8375e3aa19 }, // -4679
    Multiplier { upper: 0xfc6913dbd8e86ad1d525628e10995b3e, lower: 0x137a434190e8ec316dfd78d256391027 }, // -4678
    Multiplier { upper: 0xc9eda97cad86bbdb10eab53e73ade298, lower: 0x0f95029ada53f0278b312d7511c7401f }, // -4677
    Multiplier { upper: 0xa18aedfd579efcaf40bbc431f624b546, lower: 0x72dd9baf150ff352d5c0f12a749f6680 }, // -4676
    Multiplier { upper: 0x813bf197794bfd590096368e5e83c438, lower: 0x5be47c8c10d98f7577cd8dbb907f8533 }, // -4675
    Multiplier { upper: 0xcec64f58c2132ef4cdbd2416fd9fa05a, lower: 0x2ca0c746815c18bbf2e27c5f4d98d51e }, // -4674
    Multiplier { upper: 0xa56b72ad680f58c3d7ca834597b2e6ae, lower: 0x8a1a39053449ad6328b5304c3e13ddb2 }, // -4673
    Multiplier { upper: 0x8455f5578672ad69796ecf6adfc25225, lower: 0x3b482d9dc36e244f53c426a364dcb15b }, // -4672
    Multiplier { upper: 0xd3bcbbbf3d8448a8c24ae577cc6a1d08, lower: 0x5ed9e296057d06e552d371056e2de891 }, // -4671
    Multiplier { upper: 0xa963c965cad03a209b6f1df97054e406, lower: 0xb247e878046405844242c0d124f186db }, // -4670
    Multiplier { upper: 0x87830784a2402e807c58e4c78d10b66b, lower: 0xc1d320600383379d01cf00a750c138af }, // -4669
    Multiplier { upper: 0xd8d1a5a10399e400c6f4a13f481abd79, lower: 0x361e9a3338d1f294cfb19aa54e01f44b }, // -4668
    Multiplier { upper: 0xad748480cfae50009f2a1a99067bcac7, lower: 0x5e7ee1c293db28770c8e15510b34c36f }, // -4667
    Multiplier { upper: 0x8ac39d33d95840007f54e214052fd56c, lower: 0x4b98b49ba97c205f3d3e777408f702c0 }, // -4666
    Multiplier { upper: 0xde05c852f55a0000cbbb03533b7fbbe0, lower: 0x78f4542c426033cb9530bf200e580466 }, // -4665
    Multiplier { upper: 0xb19e39dbf77b3333d62f35dc2f996319, lower: 0xfa5d1023684cf63c775a32800b799d1e }, // -4664
    Multiplier { upper: 0x8e182e4992c8f5c311bf5e49bfade8e1, lower: 0x9517401c5370c4fd2c4828666f947db2 }, // -4663
    Multiplier { upper: 0xe359e3a8eadb22d1b5fefd42cc49749c, lower: 0x21beccfa1f1ad4c846d9da3d7f53fc4f }, // -4662
    Multiplier { upper: 0xb5e182ed88af4f0e2b326435703ac3b0, lower: 0x1aff0a61b27bdd6d057b14fdff766373 }, // -4661
    Multiplier { upper: 0x9181358ad3bf7271bc28502ac02f02f3, lower: 0x48cc084e2863178a6ac8dd97ff91e929 }, // -4660
    Multiplier { upper: 0xe8cebc1152cbea4f9373b37799e4d185, lower: 0x414673b0409e8c10aadafc2665b641da }, // -4659
    Multiplier { upper: 0xba3efcdaa8a321d942c2f5f947ea4137, lower: 0x676b8fc033b209a6ef1596851e2b67e2 }, // -4658
    Multiplier { upper: 0x94ff30aeed4f4e47689bf7fa9fee9a92, lower: 0xb922d9668fc1a15258de12041822b982 }, // -4657
    Multiplier { upper: 0xee651ab17bb216d8a75ff32a997dc41d, lower: 0xf5048f0a7f9c35508e301cd359d128cf }, // -4656
    Multiplier { upper: 0xbeb7488dfc8e78ad52b328eee13169b1, lower: 0x90d0726ecc7cf773a4f34a42ae40ed73 }, // -4655
    Multiplier { upper: 0x9892a07196d8608aa88f53f24dc1215a, lower: 0xda405b8bd6ca5f8fb72908355833f129 }, // -4654
    Multiplier { upper: 0xf41dcd828af3cdaaa74bb983af9b6891, lower: 0x5d33c5ac8add65b2bea80d2226b981da }, // -4653
    Multiplier { upper: 0xc34b0aced58fd7bbb90961362615ed41, lower: 0x175c9e23a24ab7c232200a81b89467e2 }, // -4652
    Multiplier { upper: 0x9c3c08a577a6462fc73ab42b51ab2434, lower: 0x12b07e82e83bc634f4e66ece2d43864f }, // -4651
    Multiplier { upper: 0xf9f9a76f25d6d6b2d85ded121c4506b9, lower: 0xb780ca6b0d2c7054bb0a4ae37b9f3d4a }, // -4650
    Multiplier { upper: 0xc7faec58eb12455be04b240e7d040561, lower: 0x5f9a3b88d756c043c8d508b5fc7f643b }, // -4649
    Multiplier { upper: 0x9ffbf04722750449803c1cd864033781, lower: 0x19482fa0ac45669ca0aa6d5e63991cfc }, // -4648
    Multiplier { upper: 0xfff98071d0bb3a0f3393615a399ebf34, lower: 0xf5404c3446d570fa9aaa489705c1c7fa }, // -4647
    Multiplier { upper: 0xccc799f4a6fc2e728fa91aae947eff5d, lower: 0x91003cf69f11272ee221d3ac049b0662 }, // -4646
    Multiplier { upper: 0xa3d2e19085968b8ed954155876cbff7e, lower: 0x0d99ca5ee5a7528be81b0fbcd07c051b }, // -4645
    Multiplier { upper: 0x830f1ada04786fa57aa9aaad2bd665fe, lower: 0x7147d518b7b90ed65348d963d9fcd0e3 }, // -4644
    Multiplier { upper: 0xd1b1c49007271908c442aaaeac8a3cca, lower: 0x4ed954f4592817bd520e289fc32e1b04 }, // -4643
    Multiplier { upper: 0xa7c16a0cd285ada09d02222556d4fd6e, lower: 0xa57aaa5d142012fddb3e86e635be7c03 }, // -4642
    Multiplier { upper: 0x863454d70ed157b3b0ce81b778aa6458, lower: 0x846221e41019a8cb15cb9f1e91653003 }, // -4641
    Multiplier { upper: 0xd6ba215817b5591f814a69258ddd6d5a, lower: 0x6d69cfd34cf5dade8945cb641bd5199d }, // -4640
    Multiplier { upper: 0xabc81aacdfc4474c676eba84717df115, lower: 0x2454a642a3f7e24ba104a2b67caa7ae4 }, // -4639
    Multiplier { upper: 0x896ce223e6369f7052befb9d2797f410, lower: 0xe9dd51cee9931b6fb403b55eca21fbea }, // -4638
    Multiplier { upper: 0xdbe169d309f0ff1a1dfe5f61d8f3201b, lower: 0x0fc882e4a8eb5f192005eefe10365fdd }, // -4637
    Multiplier { upper: 0xafe787dc07f3ff4817feb2b4ad8f4ce2, lower: 0x7306cf1d53ef7f474cd18bfe735eb317 }, // -4636
    Multiplier { upper: 0x8cb9397cd329990679988ef6f13f70b5, lower: 0x28d23f4aa98c65d2a3dad66529188f46 }, // -4635
    Multiplier { upper: 0xe1285bfaeb75c1a3f5c0e4be4ecbe788, lower: 0x41506544427a3c84395e23d50e8db209 }, // -4634
    Multiplier { upper: 0xb4204995892b014ff7cd83cb723cb939, lower: 0xcdd9ea9d01fb639cfab1b6440ba48e6e }, // -4633
    Multiplier { upper: 0x9019d477a0ef343ff971363c5b63c761, lower: 0x717b221734c91c7d955af8366fb6d858 }, // -4632
    Multiplier { upper: 0xe68fba59017eb9fff581f06092393f02, lower: 0x4f2b69bebadb60c8eef7f38a4c57c08c }, // -4631
    Multiplier { upper: 0xb872fb7a679894ccc467f38074fa98ce, lower: 0xa5bc5498957c4d6d8bf98fa1d6ac9a0a }, // -4630
    Multiplier { upper: 0x938f2f951fad43d703865c66c3fbad72, lower: 0x1e3043ad446371246ffad94e4556e1a2 }, // -4629
    Multiplier { upper: 0xec184c21cc486c8b38d6fa3e065f7be9, lower: 0xc9e6d2aed3d24ea0b32af54a088b029c }, // -4628
    Multiplier { upper: 0xbce03ce7d6a056d5c71261cb384c6321, lower: 0x6e5242257641d8808f55910806d59bb0 }, // -4627
    Multiplier { upper: 0x9719ca531219df116c0eb4a293704f4d, lower: 0xf1db681df834ad33a5de0da00577afc0 }, // -4626
    Multiplier { upper: 0xf1c2dd51b68fcb4f134aba9db8b3b216, lower: 0x4fc5736326baaeb90963490008bf7f99 }, // -4625
    Multiplier { upper: 0xc168b10e2ba63c3f42a22ee493c2f4de, lower: 0xa6378f8285622560d44f6d99a09932e1 }, // -4624
    Multiplier { upper: 0x9aba273e8951c9cc354e8bea0fcf2a4b, lower: 0xb82c72ced11b511a4372be14807a8f1b }, // -4623
    Multiplier { upper: 0xf7903eca754fa946bbb0dfdce61843ac, lower: 0x59e0b7b14e921b5d38b7968733f74b5d }, // -4622
    Multiplier { upper: 0xc60cff085dd954389627197d84e03623, lower: 0x7b1a2c8dd874e2b0fa2c786c2992a2b1 }, // -4621
    Multiplier { upper: 0x9e70cc06b17aa9c6de85adfe03e691b5, lower: 0xfc14f07179f71bc0c8239389badbb55b }, // -4620
    Multiplier { upper: 0xfd8146711bf7760afda2affcd30a82bc, lower: 0xc687e71bf6582c67a69f5275f7c5eef7 }, // -4619
    Multiplier { upper: 0xcacdd1f4165f91a264822663dc086897, lower: 0x053985aff84689ec854c41f7f96b2593 }, // -4618
    Multiplier { upper: 0xa23e419011e60e1b839b51e97cd386df, lower: 0x376137bff9d207f06aa367f99455b7a9 }, // -4617
    Multiplier { upper: 0x81cb67a674b80b493615db2130a938b2, lower: 0x92b42c9994a80659eee91ffadd115fba }, // -4616
    Multiplier { upper: 0xcfabd90a5459aba856895e9b810ec11d, lower: 0xb786adc287733d5cb174fff7c81bcc5d }, // -4615
    Multiplier { upper: 0xa6231408437aefb9ded44baf9a723417, lower: 0xc60557ced2c2977d5ac3fff96ce309e4 }, // -4614
    Multiplier { upper: 0x84e8dcd3692f262e4bdd0959485b5cdf, lower: 0xd19ddfd8a89bac64489cccc78a4f3b1d }, // -4613
    Multiplier { upper: 0xd4a7c7b8a84b704a12fb422873c56166, lower: 0x1c2fcc8dda92ad6d40fae13f43b1f82e }, // -4612
    Multiplier { upper: 0xaa1fd2fa203c59d4dbfc34ed296ab451, lower: 0xb0263d3e4875578a9a624dcc3627f9be }, // -4611
    Multiplier { upper: 0x88197594e696ae43e3302a5754555d0e, lower: 0x2684fdcb6d2aac6ee1e83e3cf81ffaff }, // -4610
    Multiplier { upper: 0xd9c255bb0a8ab06c9eb376f2208894e3, lower: 0x70d4c9457b777a4b030d30618cfff7fe }, // -4609
    Multiplier { upper: 0xae3511626ed559f07ef5f8c1b3a0771c, lower: 0x5a43d43795f92ea268d759e7a3fff998 }, // -4608
    Multiplier { upper: 0x8b5da781f24447f398c4c7015c805f49, lower: 0xe1cfdcf944c75881ed7914b94ffffae0 }, // -4607
    Multiplier { upper: 0xdefc3f36506d3fec27a13e6894009876, lower: 0x3619618ed472273648c1bac219999166 }, // -4606
    Multiplier { upper: 0xb26365c50d24332352e765207666e05e, lower: 0x91ade7a576c1b8f83a349568147adab8 }, // -4605
    Multiplier { upper: 0x8eb5eb040a835c1c4252b74d2b85804b, lower: 0xa7be52eac567c72cfb5d445343957bc7 }, // -4604
    Multiplier { upper: 0xe45644d34405602d36eabee1df3c0079, lower: 0x0c63b7de08a60b7b2bc86d5205bbf93e }, // -4603
    Multiplier { upper: 0xb6ab6a429cd119bdc58898b4b29666c7, lower: 0x3d1c931806eb3c62896d24419e2ffa98 }, // -4602
    Multiplier { upper: 0x9222bb687d741497d13a13c3c211ebd2, lower: 0x974a0f466bef6382078a8367b1bffbad }, // -4601
    Multiplier { upper: 0xe9d12bda625354261b901f9f9ce97950, lower: 0xf2101870acb238d00c10d23f82ccc5e1 }, // -4600
    Multiplier { upper: 0xbb0dbcaeb50f7684e2d9b2e617212dda, lower: 0x5b40138d56f4fa4009a70e9935709e4e }, // -4599
    Multiplier { upper: 0x95a496f22a72c5371be15beb45b424ae, lower: 0xaf66760aabf72e99a15272142ac07ea5 }, // -4598
    Multiplier { upper: 0xef6dbe5043ead524f968931209203ab1, lower: 0x18a3f0111325175c3550b686aacd976e }, // -4597
    Multiplier { upper: 0xbf8afea69cbbddb72ded4274d419c88d, lower: 0xad4ff340dc1dac49c4409205557145f1 }, // -4596
    Multiplier { upper: 0x993bfeebb0964af8f18a9b90a9ae3a0a, lower: 0xf10cc29a49b156a169cd419dddf437f4 }, // -4595
    Multiplier { upper: 0xf52ccb12b423ab27e8ddc5b442b05cde, lower: 0x4e7ad0f6dc4ef10242e202962fed2653 }, // -4594
    Multiplier { upper: 0xc423d5a8901c88ecba4b04903559e3e5, lower: 0x0b9573f8b03f2735024e6878265751dc }, // -4593
    Multiplier { upper: 0x9ce977ba0ce3a0bd61d59d402aae4fea, lower: 0x6faac32d59cc1f5d9b71ed2ceb790e4a }, // -4592
    Multiplier { upper: 0xfb0f25f67b05cdfbcfbc2ecd1116e643, lower: 0xe5de05155c79cbc8f8b64847df2816dd }, // -4591
    Multiplier { upper: 0xc8d8eb2b959e3e630c968bd740df1e9c, lower: 0xb7e4d0dde394a3072d5ea0397f53457d }, // -4590
    Multiplier { upper: 0xa0ad88efaae4feb5a3aba3129a4c187d, lower: 0x5fea40b182dd4f38f118802dff75d131 }, // -4589
    Multiplier { upper: 0x808ad3f2ef1d98914fbc8275483ce064, lower: 0x4cbb66f468b10c2d8dad3357ff917427 }, // -4588
    Multiplier { upper: 0xcdaaecb7e4fc274ee5fa6a5540616706, lower: 0xe12bd7ed744e79e27c48522665b586a5 }, // -4587
    Multiplier { upper: 0xa488bd5fea6352a584c85511004dec05, lower: 0x80efdff129d86181fd06a81eb7c46bb8 }, // -4586
    Multiplier { upper: 0x83a0977feeb5dbb79d6d10da66a4bcd1, lower: 0x33f3198dbb138134ca6bb9b22c9d22f9 }, // -4585
    Multiplier { upper: 0xd29a8bffe4562c58fbe1b490a43ac7b5, lower: 0x1feb5c15f81f352143df8f837a9504c2 }, // -4584
    Multiplier { upper: 0xa87ba3331d11bd13fcb49073b6956c90, lower: 0xe655e344c67f5db4364c72cf954403ce }, // -4583
    Multiplier { upper: 0x86c94f5c1741640ffd5d405c921123a7, lower: 0x1eab1c370532b15cf83d28a61103363f }, // -4582
    Multiplier { upper: 0xd7a87ef9becf067ffbc866fa834e9f71, lower: 0xcaab605808511bc7f3950dd6819ebd31 }, // -4581
    Multiplier { upper: 0xac86cbfaff0c05332fd3859535d87f8e, lower: 0x3bbc4d1339da7c9ff610d7dece18975a }, // -4580
    Multiplier { upper: 0x8a056ffbff3cd0f5bfdc6addc4ad32d8, lower: 0x2fc9d74294aeca1991a71318a4e07915 }, // -4579
    Multiplier { upper: 0xdcd57ff998614e55ffc71162d4485159, lower: 0xe60fbed0ede4768f4f71b8276e33f4ee }, // -4578
    Multiplier { upper: 0xb0aaccc7ad1aa511996c0de8a9d37447, lower: 0xeb3fcbda57e9f872a5f49352be8ff725 }, // -4577
    Multiplier { upper: 0x8d55709fbdaeea747abcd7ed54a929d3, lower: 0x22996fe1dfee605bb7f6dc42320cc5b8 }, // -4576
    Multiplier { upper: 0xe2224dcc62b17720c461597bbaa842eb, lower: 0x6a8f1969664a33c5f324939d1ce13c59 }, // -4575
    Multiplier { upper: 0xb4e83e3d1bc12c1a36b447962eed0255, lower: 0xeed8e1211ea1c304c283a94a7d80fd14 }, // -4574
    Multiplier { upper: 0x90b9cb64163423482bc36c78258a6844, lower: 0xbf13e74db21b026a35362108646730dd }, // -4573
    Multiplier { upper: 0xe78fabd356b9d20d12d24726a2770d3a, lower: 0xcb530baf835e6a4388569b40a0a51afa }, // -4572
    Multiplier { upper: 0xb93fbca9122e41a40f0e9f521b9270fb, lower: 0xd5dc095935e521cfa045490080841595 }, // -4571
    Multiplier { upper: 0x9432fd540e8b67b67272190e7c75272f, lower: 0xde49a1142b1db4a619d107339a034477 }, // -4570
    Multiplier { upper: 0xed1e6220174572bd83e9c1b0c721d84c, lower: 0x96dc34ed11c92109c2e80b85c3386d8c }, // -4569
    Multiplier { upper: 0xbdb1e819ac378efe032167c09f4e46a3, lower: 0xabe35d8a74a0e73b02533c6b02938ad6 }, // -4568
    Multiplier { upper: 0x97c1867af02c7264cf4dec9a190b6bb6, lower: 0x231c4ad52a1a52959b75c9ef3542d578 }, // -4567
    Multiplier { upper: 0xf2cf3d9180471d6e187cadc35b457923, lower: 0x6b6077bb7690842292560fe5220488c0 }, // -4566
    Multiplier { upper: 0xc23f6474669f4abe79fd57cf7c37941c, lower: 0x55e6c62f920d36820eab3fea819d3a33 }, // -4565
    Multiplier { upper: 0x9b65e9f6b87f6efec7fddfd9302c767d, lower: 0x11856b5941a42b9b3eef6655347dc829 }, // -4564
    Multiplier { upper: 0xf8a30ff127324b313ffc995b804723fb, lower: 0x4f3bdef535d378f864b23d5520c94042 }, // -4563
    Multiplier { upper: 0xc6e8d98db8f508f433307aaf99d2832f, lower: 0x72964bf75e42c72d1d5b64441a3a99ce }, // -4562
    Multiplier { upper: 0x9f20ae0afa5da0c35c26c88c7b0ecf59, lower: 0x28783cc5e50238f0e4491d03482ee172 }, // -4561
    Multiplier { upper: 0xfe9ab0119095ce05603e0dad91b14bc1, lower: 0xda59fad63b36c1816d41c805404b0250 }, // -4560
    Multiplier { upper: 0xcbaef3414077d8044cfe7157a7c10967, lower: 0xe1e195782f5f01345767d33766a26840 }, // -4559
    Multiplier { upper: 0xa2f25c3433931336a3fec112ec9a6dec, lower: 0xb4b477935918cdc3791fdc2c521b8699 }, // -4558
    Multiplier { upper: 0x825b7cf68fa8dc2bb665674256e1f18a, lower: 0x2a29f942adad71692db31689db49387b }, // -4557
    Multiplier { upper: 0xd092618a7f74937923d57203be364f43, lower: 0x76a98ed115e24f0eaf84f0dc920ec0c4 }, // -4556
    Multiplier { upper: 0xa6db813b992a0f941caac19c982b729c, lower: 0x5eee0bda77e83f3ef2d0c0b074d89a37 }, // -4555
    Multiplier { upper: 0x857c6762e0ee72dce3bbce16e022c216, lower: 0xb258097b93203298c2409a26c3e07b5f }, // -4554
    Multiplier { upper: 0xd593d89e34b0b7c7d2c6168b00379cf1, lower: 0x1d59a8c5b83384279d3429d79fcd9231 }, // -4553
    Multiplier { upper: 0xaadcad4b5d5a2c9fdbd1aba26692e3f4, lower: 0x177aed6af9c2d01fb0f687dfb30adb5b }, // -4552
    Multiplier { upper: 0x88b08aa2b114f07fe30e22e8520f1cc3, lower: 0x45fbf1226168a67fc0c5397fc26f15e2 }, // -4551
    Multiplier { upper: 0xdab411044e87e73304e36b0d50182e05, lower: 0x3cc64e9d68a770cc67a1f59937182304 }, // -4550
    Multiplier { upper: 0xaef674037206528f371c55a440135804, lower: 0x309ea54aba1f8d7052e7f7adc5ace8d0 }, // -4549
    Multiplier { upper: 0x8bf85ccf8e6b753f5f49de1d000f799c, lower: 0xf3b21dd561b2d78d0f1ff957d15720a6 }, // -4548
    Multiplier { upper: 0xdff3c7b27d78bb989876302e667f28fb, lower: 0x1f8362ef02b7bf481833288c8225010a }, // -4547
    Multiplier { upper: 0xb3296c8ecac6fc7a1391c0251ecc20c8, lower: 0xe602b58c022c990679c286d6ce8400d5 }, // -4546
    Multiplier { upper: 0x8f5456d8a238c9fb42db001db23ce707, lower: 0x1e68913cce8a14052e3538abd8699a44 }, // -4545
    Multiplier { upper: 0xe553be2769f4765ed15e6695e9fb0b3e, lower: 0x970db52e1743533b7d21f446270f5d39 }, // -4544
    Multiplier { upper: 0xb77631b921905eb24118521187fc08fe, lower: 0xdf3e2a8b45cf75c930e7f69e85a5e42e }, // -4543
    Multiplier { upper: 0x92c4f4941ad9e55b6746a80e06633a65, lower: 0x7f64eed5d172c4a0f3ecc54b9e1e5025 }, // -4542
    Multiplier { upper: 0xead4ba86915ca22bd8710ce33d6b90a2, lower: 0x656e4aefb5846dce53146edf6363b36e }, // -4541
    Multiplier { upper: 0xbbdd62054116e823138da3e8fdefa6e8, lower: 0x512508bfc469f171dc1058b2b5e95c58 }, // -4540
    Multiplier { upper: 0x964ab4d100df201c0fa48320cb261f20, lower: 0x40ea6d6636bb278e49a6ad5bc4bab046 }, // -4539
    Multiplier { upper: 0xf07787b4ce31ccf9b2a0d1ce11d69833, lower: 0x9b10af09f12b727d42a44892d45de6d7 }, // -4538
    Multiplier { upper: 0xc05f9fc3d827d72e2880a7d80e45468f, lower: 0xaf408c07f422c1fdcee9d3a8a9e4b8ac }, // -4537
    Multiplier { upper: 0x99e6196979b978f1ba00864671d1053f, lower: 0xbf66d66cc34f0197d8bb0fba2183c6f0 }, // -4536
    Multiplier { upper: 0xf63cf5758f8f27e9299a7070b61b3b99, lower: 0x323e23e1387e68f2f45e7f90359fa4b3 }, // -4535
    Multiplier { upper: 0xc4fd912ad93f5320ee1526c091af62e0, lower: 0xf4fe831a939853f5904b99402ae61d5c }, // -4534
    Multiplier { upper: 0x9d97a7557a990f4d8b441f00748c4f1a, lower: 0x5d9868e20fad0ff7a6a2e1002251b116 }, // -4533
    Multiplier { upper: 0xfc25d888c428187c12069800ba7a182a, lower: 0x2f5a4169b2ae7ff2a437ce669d4f81bd }, // -4532
    Multiplier { upper: 0xc9b7e06d69b9ad300e6baccd61fb4688, lower: 0x25e1cdee288b998ee9c63eb87dd93498 }, // -4531
    Multiplier { upper: 0xa15fe6bdee2e242671efbd711b2f6ba0, lower: 0x1e4e3e58206fae0bee38322d317a9079 }, // -4530
    Multiplier { upper: 0x81198564be8b501ec18c978daf5922e6, lower: 0x7ea4feace6bfbe6ff1c68e8a8dfba6c8 }, // -4529
    Multiplier { upper: 0xce8f3bd4641219cacf4758e2b22837d7, lower: 0x3107fde17132ca4cb60a7daa7cc5d7a5 }, // -4528
    Multiplier { upper: 0xa53f6310500e7b08a5d2ad8228202cac, lower: 0x273997e78dc23b7091a1fe21fd6b12eb }, // -4527
    Multiplier { upper: 0x8432b5a6a671fc06eb0ef134ece68a23, lower: 0x529479860b01c926dae7fe819788dbef }, // -4526
    Multiplier { upper: 0xd38455d770b6600b11b181ee47d7436b, lower: 0xb753f5a344cfa83e2b0cca68f2749318 }, // -4525
    Multiplier { upper: 0xa936ab12c091e66f415ace58397902bc, lower: 0x92a9914f6a3fb9cb55a3d520c1f6dc13 }, // -4524
    Multiplier { upper: 0x875eef4233a7eb8c3448a513612d9bca, lower: 0x0eee0dd921cc94a2aae9774d67f8b00f }, // -4523
    Multiplier { upper: 0xd897e536b90cac1386daa1b89b7c2c76, lower: 0x7e49afc1cfadba9dde42587bd98de67f }, // -4522
    Multiplier { upper: 0xad4650f8940a2342d24881607c6356c5, lower: 0x31d48c9b0c8afbb17e9b79fcae0b1ecc }, // -4521
    Multiplier { upper: 0x8a9ea72d433b4f68a83a0119fd1c456a, lower: 0x8e43a3af3d3bfc8dfee2c7fd5808e570 }, // -4520
    Multiplier { upper: 0xddcaa515385ee574405cce8ffb606f10, lower: 0xe39f6c4b952cc74997d13ffbc00e3be6 }, // -4519
    Multiplier { upper: 0xb16eea77604beac366b0a53ffc4d25a7, lower: 0x1c7f89d610f09f6e130dccc96671c985 }, // -4518
    Multiplier { upper: 0x8df2552c4d09889c5226ea9996a41e1f, lower: 0x49ffa1780d8d4c580f3e3d6deb8e3ad1 }, // -4517
    Multiplier { upper: 0xe31d5513ae75a7608371775c2439c9cb, lower: 0xa9990259af487a267ec9fbe3127d2ae8 }, // -4516
    Multiplier { upper: 0xb5b110dc8b9152b39c5ac5e3502e3b09, lower: 0x547a6847bf6d2e85323b2fe8db975586 }, // -4515
    Multiplier { upper: 0x915a73e3a2daa88fb0489e4f73582f3a, lower: 0xa9fb869fcc57586a8e95bfed7c791138 }, // -4514
    Multiplier { upper: 0xe890b96c37c440e5e6da96e58559e52a, lower: 0xa99270ffad588d774a89331593f4e85a }, // -4513
    Multiplier { upper: 0xba0d61235fd033eb1f1545846aae50ee, lower: 0xee0ec0cc8aad3df9086dc277a990b9e2 }, // -4512
    Multiplier { upper: 0x94d780e919735cbc18ddd136bbbea725, lower: 0x8b3f00a3a224319406be352c87a6fb1b }, // -4511
    Multiplier { upper: 0xee259b0e8f1efac68e2fb5245f9771d5, lower: 0xab980105d039e8ecd796bb7a72a4c4f8 }, // -4510
    Multiplier { upper: 0xbe847c0ba5b2623871bfc41d1945f4aa, lower: 0xefaccd9e402e53f0ac7895fb8eea372d }, // -4509
    Multiplier { upper: 0x9869fcd61e284e938e33034a7a9e5d55, lower: 0x8c8a3e1833584326f06077fc7254f8f1 }, // -4508
    Multiplier { upper: 0xf3dcc7bcfd0d4a85b0519edd90fd6222, lower: 0x7a76c9c05226d1d7e700bffa5087f4b4 }, // -4507
    Multiplier { upper: 0xc3170630ca71086af3747f17a7311b4e, lower: 0xc85f07cd0e8574acb8cd6661da065d5d }, // -4506
    Multiplier { upper: 0x9c126b5a3b8da0558f9065ac85c0e2a5, lower: 0x6d18d30a72045d56fa3deb817b384ab1 }, // -4505
    Multiplier { upper: 0xf9b71229f8e29a227f4d6f7a6f9b043b, lower: 0xe1c151aa5006fbbe5d2fdf3591f3aab4 }, // -4504
    Multiplier { upper: 0xc7c5a82193e87b4ecc3df2c85948d02f, lower: 0xe7cddaeea66bfc984a8cb291418fbbc3 }, // -4503
    Multiplier { upper: 0x9fd1534e0fed2f723cfe5bd37aa0a68c, lower: 0xb9717bf21ebcca136ed6f541013fc969 }, // -4502
    Multiplier { upper: 0xffb552167fe1e58394ca2c8591010a7a, lower: 0xc24f2cb6979476857e24bb9b3532dbdb }, // -4501
    Multiplier { upper: 0xcc910e78664e513610a1bd37a7340862, lower: 0x350c23c546105ed131b6fc7c2a8f1649 }, // -4500
    Multiplier { upper: 0xa3a73ec6b83ea75e73b4975fb8f66d1b, lower: 0x5da34fd104d9e57427c596c9bba5ab6e }, // -4499
    Multiplier { upper: 0x82ec3238936552b1f62a12b2fa5ebdaf, lower: 0x7e1c3fda6a47eac3530478a162eaef8b }, // -4498
    Multiplier { upper: 0xd179e9f41f08844ff043511e5d6462b2, lower: 0x6360662a43a6446bb80727689e44b278 }, // -4497
    Multiplier { upper: 0xa794bb29b26d36a659cf74184ab6b55b, lower: 0x82b384ee9c8503896005b9207e9d5b93 }, // -4496
    Multiplier { upper: 0x861095baf5242bb847d929ad08922aaf, lower: 0x9bc2d0bee39d9c6de66afa80654aafa9 }, // -4495
    Multiplier { upper: 0xd680ef918839df8d3fc1dc480db6aab2, lower: 0x92d14dfe38fc2d7ca3de5d9a3baab2a8 }, // -4494
    Multiplier { upper: 0xab9a594139c7e60a9967e36cd7c5555b, lower: 0xa8a771982d968aca1cb1e47b62eef553 }, // -4493
    Multiplier { upper: 0x89484767616cb8087ab982bd796aaaaf, lower: 0xba1f8e1357aba23b4a27e9fc4f25910f }, // -4492
    Multiplier { upper: 0xdba6d8a568adf340c45c04625bdddde5, lower: 0xf698e35225df69f876a6432d4b6f4e7f }, // -4491
    Multiplier { upper: 0xafb8ad51208b29009d1669e8497e4b1e, lower: 0x5ee0b5db517f87f9f885028aa2bf71ff }, // -4490
    Multiplier { upper: 0x8c93bdda806f54007dab87ed07983c18, lower: 0x4be6f7e2a7993994c6d0ced54eff8e66 }, // -4489
    Multiplier { upper: 0xe0ec62f733e55333fc45a6480c26c68d, lower: 0x463e596aa5c1f5bad7b47e2217ff4a3c }, // -4488
    Multiplier { upper: 0xb3f04f2c2984428ffd048506701f053d, lower: 0xd1cb7abbb7ce5e2f12f6cb4e79990830 }, // -4487
    Multiplier { upper: 0x8ff37289bad0353ffd9d373859b26a97, lower: 0xdb092efc930b7e8c0f2bd5d8614739c0 }, // -4486
    Multiplier { upper: 0xe65250dc5e19eeccc8fb8b8d5c50aa8c, lower: 0x91a84b2db81264134b795627020b8f9a }, // -4485
    Multiplier { upper: 0xb841da49e4e18bd7072fa2d77d0d553d, lower: 0x41536f57c6751cdc3c6111b8ce6fa615 }, // -4484
    Multiplier { upper: 0x9367e1d4b71ad6459f594f12ca7110fd, lower: 0xcddc5913052a7d7cfd1a7493d85951aa }, // -4483
    Multiplier { upper: 0xebd96954582af06f655bb1b7aa4e8196, lower: 0x162d5b51a1dd9594c82a541fc08ee910 }, // -4482
    Multiplier { upper: 0xbcadeddd13558d25eaafc15fbb720144, lower: 0xde8aaf74817e1143d355101966d8ba73 }, // -4481
    Multiplier { upper: 0x96f18b1742aad751888c9ab2fc5b3437, lower: 0x186ef2c39acb41030f7740145246fb90 }, // -4480
    Multiplier { upper: 0xf18278253777bee8da7a911e6091ed24, lower: 0xf3e4b79f5e12019e7f253353b6d7f8e5 }, // -4479
    Multiplier { upper: 0xc1352cea92c63253e1fba74b8074bdb7, lower: 0x2983c619180e67b1ff50f5dc924660b8 }, // -4478
    Multiplier { upper: 0x9a90f0bba89e8ea981961f6f99f6fe2c, lower: 0x21363814133eb95b32a72b16db6b8093 }, // -4477
    Multiplier { upper: 0xf74e4df90dca7ddc0289cbe5c324c9e0, lower: 0x35238ceceb978ef8510b782492459a84 }, // -4476
    Multiplier { upper: 0xc5d83e60d7d5317cced4a31e35b707e6, lower: 0x90e93d8a5612d8c6a73c601d41d1486a }, // -4475
    Multiplier { upper: 0x9e46984d79775aca3f10827e915f3985, lower: 0x40ba97a1de757a3885c9e67dce4106bb }, // -4474
    Multiplier { upper: 0xfd3dc07bf58bc476cb4d9d974efec26e, lower: 0xcdf75902fd88c38da2dca3fc7d34d792 }, // -4473
    Multiplier { upper: 0xca97cd2ff7a303923c3e17ac3f323525, lower: 0x7192ad9bfe0702d7b57d4ffd30f712db }, // -4472
    Multiplier { upper: 0xa2130a8cc61c02db6364dfbcff5b5db7, lower: 0x8e0ef14998059bdfc4643ffdc0c5a8af }, // -4471
    Multiplier { upper: 0x81a8d53d6b499be2b5ea4c9732af7e2c, lower: 0x71a58dd4799e164c9d1cfffe33d153c0 }, // -4470
    Multiplier { upper: 0xcf748862454293045643adbeb77f3047, lower: 0x1c3c1620c2968a142e94ccc9ec821f99 }, // -4469
    Multiplier { upper: 0xa5f6d381d1020f36ab6957cbc5ff59d2, lower: 0x7cfcde809baba1a9bedd70a18a01b2e1 }, // -4468
    Multiplier { upper: 0x84c576017401a5c555eddfd637ff7b0e, lower: 0xca63e533afbc815498b126e7a19af581 }, // -4467
    Multiplier { upper: 0xd46f23358669093bbcafcc89f3325e7e, lower: 0x109fd51f7f940220f44ea4a5cf5e559a }, // -4466
    Multiplier { upper: 0xa9f2829138540762fd59706e5c284b98, lower: 0x0d4caa7f994334e729d883b7d918447c }, // -4465
    Multiplier { upper: 0x87f53540f9dcd2b5977ac05849b9d613, lower: 0x3dd6eecc7a9c2a5287e0695fe0e036c9 }, // -4464
    Multiplier { upper: 0xd9885534c2faeabc259133c075f62351, lower: 0xfc8b17ad90f9dd50d9670effce338adc }, // -4463
    Multiplier { upper: 0xae06aa909bfbeefceada8fcd2b2b4f74, lower: 0xca08dfbe0d94b10d7ab8d8cca4f608b0 }, // -4462
    Multiplier { upper: 0x8b388873affcbf30bbe20ca422890c5d, lower: 0x6e6d7fcb3e108da4622d7a3d50c4d3c0 }, // -4461
    Multiplier { upper: 0xdec0da52b32dfeb45fd01439d0db46fb, lower: 0xe3e26611fce74907037bf6c8813aec66 }, // -4460
    Multiplier { upper: 0xb233e1dbc28b3229e640102e40af6bfc, lower: 0xb64eb80e63ec3a6c02c9923a00fbf052 }, // -4459
    Multiplier { upper: 0x8e8fe7e30208f4ee51ccd9be9a25effd, lower: 0x5ea5600b832361f0023adb619a6326a8 }, // -4458
    Multiplier { upper: 0xe4197304d00e54b082e15c6429d64cc8, lower: 0x976f00126b6bcfe669f7c568f7050aa6 }, // -4457
    Multiplier { upper: 0xb67ac26a400b76f39be77d1cee450a3a, lower: 0x12bf3341ef89731ebb2c9ded926a6eeb }, // -4456
    Multiplier { upper: 0x91fbcebb666f925c7cb930e3f1d0d4fb, lower: 0x42328f67f2d45c1895bd4b247521f256 }, // -4455
    Multiplier { upper: 0xe992e45f0a4c1d60c78eb49fe94e2192, lower: 0x038418a65153c68dbc6211d3ee9cb6ef }, // -4454
    Multiplier { upper: 0xbadbe9e5a1d67de7060bc3b3210b4e0e, lower: 0x69367a1ea77638716381a7dcbee3c58c }, // -4453
    Multiplier { upper: 0x957cbb1e1b11fe526b3c9c8f4da2a4d8, lower: 0x542b94e552c4f9f44f9aecb098b637a4 }, // -4452
    Multiplier { upper: 0xef2df8302b4ffd50ab942db215d107c0, lower: 0x86ac216eead4c3207f5e4780f456bf6c }, // -4451
    Multiplier { upper: 0xbf57f9c022a66440894357c1ab0d9fcd, lower: 0x3889b458bbdd68e6cc4b6c6729deff8a }, // -4450
    Multiplier { upper: 0x99132e334eeb8366d435dfce22714ca4, lower: 0x2d3af6ad6317871f09d5f05287e5993b }, // -4449
    Multiplier { upper: 0xf4eb7d1ee4ac0571538966169d821439, lower: 0xe1f7f1156b58d831a9564d50d96f5b91 }, // -4448
    Multiplier { upper: 0xc3ef974bea23378ddc6deb454ace7694, lower: 0xb4c65a778913e027baab710d7abf7c74 }, // -4447
    Multiplier { upper: 0x9cbfac3cbb4f5fa4b057ef6aa23ec543, lower: 0xc3d1e1f93a764cec9555f40ac899305d }, // -4446
    Multiplier { upper: 0xfacc46c792189907808cb24436cad539, lower: 0x394fcff52a56e17a88898677a75b8095 }, // -4445
    Multiplier { upper: 0xc8a36bd2db46e0d2cd3d5b69c56f10fa, lower: 0x943fd990eeabe7953a079ec61f7c66dd }, // -4444
    Multiplier { upper: 0xa082bca8af6be70f0a977c549df273fb, lower: 0xa9ccae0d8bbcb9442e6c7f04e5fd1f18 }, // -4443
    Multiplier { upper: 0x806896ed59231f3f3bac6376e4c1f662, lower: 0xee3d580ad63094368b89ff371e6418e0 }, // -4442
    Multiplier { upper: 0xcd7424aef504fecb92ad6bf16e0323d1, lower: 0x7d2ef34489e7538a78dccb8b63d35aff }, // -4441
    Multiplier { upper: 0xa45cea2590d0cbd60ef123278b35b641, lower: 0x30f25c36d4b90fa1fa4a3c6f830f7c00 }, // -4440
    Multiplier { upper: 0x837d881e0d73d644d8c0e8ec6f5e2b67, lower: 0x5a5b7cf8aa2da61b2ea1c9f2cf3f9666 }, // -4439
    Multiplier { upper: 0xd262736348b956d48e0174ad7efd123e, lower: 0xf6f8c7f4437c3cf84a9c76514b98f0a3 }, // -4438
    Multiplier { upper: 0xa84ec2b5d3c778aa0b345d5798ca74ff, lower: 0x2bfa399035fcfd936ee391daa2e0c083 }, // -4437
    Multiplier { upper: 0x86a5689176392d54d5c37ddfad6ec3ff, lower: 0x5661c7a691973142bf1c74aee8b3cd35 }, // -4436
    Multiplier { upper: 0xd76f0db589f515548938c965e24ad332, lower: 0x23cfa5d74f584ed131c72117dab94855 }, // -4435
    Multiplier { upper: 0xac58d7c46e5daaaa0760a11e4ea2428e, lower: 0x830c84ac3f79d8a75b05b413156106ab }, // -4434
    Multiplier { upper: 0x89e0ac9d2517bbbb391a1a7ea54e9ba5, lower: 0x35a39d56992e46ec48d15cdc111a6bbc }, // -4433
    Multiplier { upper: 0xdc9aadc83b592c5ec1c35d976ee42c3b, lower: 0x8905c88a8eb0717a0e1bc7c681c3df93 }, // -4432
    Multiplier { upper: 0xb07bbe39c914237f016917ac58b689c9, lower: 0x3a6b06d53ef38dfb3e7c9fd201697fa9 }, // -4431
    Multiplier { upper: 0x8d2fcb616da9b5ff345412f046f86e3a, lower: 0x95226bddcbf60b2f65307fdb34546621 }, // -4430
    Multiplier { upper: 0xe1e612357c42bccb86eceb1a0b2716c4, lower: 0x21d0ac9613234518a1e732f853ba3d01 }, // -4429
    Multiplier { upper: 0xb4b80e91303563d6058a55ae6f52789c, lower: 0xe7da23ab42829dad4e528f2d0fc830cd }, // -4428
    Multiplier { upper: 0x90933eda8cf783119e08448b8c41fa17, lower: 0x1fe1b6229b9bb15771dba5bda639c0a4 }, // -4427
    Multiplier { upper: 0xe751fe2a7b259e829673a0df46cff68b, lower: 0x6635f0375f5f822582f9092f705c676d }, // -4426
    Multiplier { upper: 0xb90e64eec8eae53545294d7f6bd99209, lower: 0x1e918cf9191934eacf2da0f2c049ec58 }, // -4425
    Multiplier { upper: 0x940b83f23a55842a9dbaa465efe141a0, lower: 0xe5413d9414142a55728ae72899d4bd13 }, // -4424
    Multiplier { upper: 0xecdf39839088d37762c43a3cb302029b, lower: 0x086862868686aa2250de3ea75c8794eb }, // -4423
    Multiplier { upper: 0xbd7f61360d3a42c5e89cfb63c2680215, lower: 0xa0538205386bbb4ea718321f7d3943ef }, // -4422
    Multiplier { upper: 0x97991a91a42e9bd186e3fc4fceb99b44, lower: 0x8042ce6a938962a55279c1b2ca943659 }, // -4421
    Multiplier { upper: 0xf28e90e906b0f94f3e3993b2e45c2ba0, lower: 0xcd37b0aa85a89dd550c2cf8477538a28 }, // -4420
    Multiplier { upper: 0xc20ba720d2272dd8fe947628b6b022e7, lower: 0x0a92f3bb9e207e44409bd936c5dc6e86 }, // -4419
    Multiplier { upper: 0x9b3c85b3db528b13fedd2b53c559b585, lower: 0xa20f2962e4e6cb69cd497a9237e38b9f }, // -4418
    Multiplier { upper: 0xf860d5ec921dab533161deec6ef5ef3c, lower: 0x367ea89e3b0adf0faedbf750596c1297 }, // -4417
    Multiplier { upper: 0xc6b3de56db4aef75c11b18bd25918c30, lower: 0x2b9886e4fc08b272f24992a6adf00edf }, // -4416
    Multiplier { upper: 0x9ef64b78af6f25f7cdaf46fdb7a7a359, lower: 0xbc7a0583fcd3c1f58ea1421ef18cd8b3 }, // -4415
    Multiplier { upper: 0xfe56df277f183cbfaf7ed7fc590c388f, lower: 0x93f66f39948603227dced031827af451 }, // -4414
    Multiplier { upper: 0xcb78b285ff4696ffbf98acc9e0d693a6, lower: 0x0ff858fadd380281fe3f0cf468625d0e }, // -4413
    Multiplier { upper: 0xa2c6f537ff6babffcc7a23d4b3dedc84, lower: 0xd9937a624a933534cb65a3f6b9e84a72 }, // -4412
    Multiplier { upper: 0x8238c42ccc56233309fb4fdd5cb24a03, lower: 0xe142c84ea20f5dc3d5eae9922e536ec1 }, // -4411
    Multiplier { upper: 0xd05ad37ae089d1eb432bb2fbc783a99f, lower: 0xced1407dd0189606231175b6b0857e02 }, // -4410
    Multiplier { upper: 0xa6af0f95806e418902895bfc9f9c87b3, lower: 0x0bda99fe4013ab381c0df7c55a0464ce }, // -4409
    Multiplier { upper: 0x8558d94466be9ad402077cca194a0628, lower: 0xd6487b31ccdc88f9b00b2c9de19d1d72 }, // -4408
    Multiplier { upper: 0xd55af53a3dfdc48669a594768edcd6a7, lower: 0xbd40c51c7afa74c2b345142fcf61c8b6 }, // -4407
    Multiplier { upper: 0xaaaf2a94fe649d38548476c53f17121f, lower: 0xca9a3749fbfb909bc29da9bfd91b06f8 }, // -4406
    Multiplier { upper: 0x888c2210cb83b0f9dd36c56a98df41b3, lower: 0x087b5f6e632fa6e30217baffe0e26bfa }, // -4405
    Multiplier { upper: 0xda79d01adf391b2961f13bddc16535eb, lower: 0x40c5657d6b7f716b368c5e66349d798f }, // -4404
    Multiplier { upper: 0xaec7d9af18fa7c211b276317cdea9189, lower: 0x009deacabc65f455c53d1851c3b12e0c }, // -4403
    Multiplier { upper: 0x8bd3148c13fb9680e285e8dfd7eedad4, lower: 0x007e556efd1e5d116a9746a7cfc0f1a4 }, // -4402
    Multiplier { upper: 0xdfb820e01ff8f0ce373ca7cc8cb15e20, lower: 0x00ca224b2e96fb4f10f20aa61934b5d2 }, // -4401
    Multiplier { upper: 0xb2f9b3e67ffa5a3e9296eca3a3c11819, lower: 0x9a3b4ea28babfc3f40c1a21e7a909175 }, // -4400
    Multiplier { upper: 0x8f2e2985332eae9875458a1c8300e014, lower: 0x7b62a54ed62330329a3481b1fba6dac4 }, // -4399
    Multiplier { upper: 0xe516a8d51eb1175a553c102d9e67cced, lower: 0x92376ee489d1e6b75d20cf832c3e2ad3 }, // -4398
    Multiplier { upper: 0xb74553ddb22745e1ddc9a68ae51fd724, lower: 0x74f92583a174b892b0e70c68f031bbdc }, // -4397
    Multiplier { upper: 0x929ddcb15b529e4e4b07b86f1db31283, lower: 0x90c751361ac3c6dbc0b8d6ba59c16317 }, // -4396
    Multiplier { upper: 0xea962de8921dca16de72c0b1c91e8405, lower: 0xb4721b89c46c715f9ac157908f9bd1be }, // -4395
    Multiplier { upper: 0xbbab57ed41b16e78b1f566f4a0e5366a, lower: 0xf6c1afa169f05ab2e234460d3fafdafe }, // -4394
    Multiplier { upper: 0x9622acbdce278b93c1911f2a1a50f855, lower: 0x92348c81218d155be829d1a432f31598 }, // -4393
    Multiplier { upper: 0xf0377ac949d8df52cf4e98435d4e5a22, lower: 0x83874735027b555fd9dc82a05184ef5a }, // -4392
    Multiplier { upper: 0xc02c623aa17a4c423f7213691771e1b5, lower: 0x3605d290cec911197b16cee6a79d8c48 }, // -4391
    Multiplier { upper: 0x99bd1b621ac83d01cc5b42ba7927e7c4, lower: 0x2b37dba70bd40dadfc123f1eec7e09d3 }, // -4390
    Multiplier { upper: 0xf5fb5f035e0d2e6946f86ac3f50ca606, lower: 0xab8c92a4dfb9af7cc68398317a6342eb }, // -4389
    Multiplier { upper: 0xc4c918cf7e70f1edd260556990d6eb38, lower: 0x893d421d7fc7bf970536135ac84f68bc }, // -4388
    Multiplier { upper: 0x9d6dad72cb8d8e57db80445473df2293, lower: 0xa0fdce7dffd2ffac042b42af06a5ed64 }, // -4387
    Multiplier { upper: 0xfbe2af1e127c16f2f8cd3a20b965041f, lower: 0x67fc7d96661e65e006ab9de4d76fe239 }, // -4386
    Multiplier { upper: 0xc98225b1a863458f2d70fb4d611d9ce5, lower: 0xecc9fe11eb4b84b338894b1d79264e94 }, // -4385
    Multiplier { upper: 0xa134eaf486b5d13f578d95d780e47d84, lower: 0xbd6e64db22a2d08f606dd5b12db83edd }, // -4384
    Multiplier { upper: 0x80f7225d38917432ac7144ac671d3136, lower: 0xfdf1ea48e8824072b38b115a8af9cbe4 }, // -4383
    Multiplier { upper: 0xce5836fb8db586b77a4ed4470b61e857, lower: 0xfcb643a7da6a00b785ab4ef744c2dfd3 }, // -4382
    Multiplier { upper: 0xa5135f2fa4913892c83f1038d5e7ed13, lower: 0x3091cfb97b880092d155d8c5d09be642 }, // -4381
    Multiplier { upper: 0x840f7f5950742d4239cc0cfa44b98a75, lower: 0xc074a62dfc6ccd4241117a37da1651cf }, // -4380
    Multiplier { upper: 0xd34bfef54d86aed05c79ae5d3ac27722, lower: 0xcd87704993e1486a01b590595cf082e4 }, // -4379
    Multiplier { upper: 0xa90998c43e0558a6b061584a95685f4f, lower: 0x0ad2c03adcb439ee67c4737ab0c068b7 }, // -4378
    Multiplier { upper: 0x873ae09cfe6aad5226b446a211204c3f, lower: 0x3bdbccfbe3c3618b8636c2c88d66ba2c }, // -4377
    Multiplier { upper: 0xd85e342e63dde21d0aba0a9ce833ad31, lower: 0xf95fae5fd2d235ac09f137a748a45d12 }, // -4376
    Multiplier { upper: 0xad1829beb64b1b4a6efb3bb0b9c2f0f4, lower: 0xc77fbeb30f0e91566e5a92ec3a1d1742 }, // -4375
    Multiplier { upper: 0x8a79bafef83c15d52595c95a2e358d90, lower: 0x9f99655c0c0ba77858487589c81745cf }, // -4374
    Multiplier { upper: 0xdd8f9197f3935621d5bc755d16bc15b4, lower: 0x328f089346790bf3c073ef42d9bed617 }, // -4373
    Multiplier { upper: 0xb13fa7acc2dc44e7de305de41230115c, lower: 0xf53f3a0f6b94098fcd298c357aff11ac }, // -4372
    Multiplier { upper: 0x8dcc8623cf169d864b59e4b674f34117, lower: 0x2a98fb3f89433ad970ee09c46265a7bd }, // -4371
    Multiplier { upper: 0xe2e0d69fb1bdc8d6def63abd87eb9b58, lower: 0x4427f865a86b915be7e342d3d0a2a5fb }, // -4370
    Multiplier { upper: 0xb580abb2f497d3df18c4fbcad322e2ad, lower: 0x03532d1e20560de31fe902430d4eeb2f }, // -4369
    Multiplier { upper: 0x9133bc8f2a130fe5ad6a6308a8e8b557, lower: 0x35dc241819de71827fed9b68d77255bf }, // -4368
    Multiplier { upper: 0xe852c74b7684e63c48aa380ddb0deef1, lower: 0xefc6a0268fca4f373315c5748bea22cc }, // -4367
    Multiplier { upper: 0xb9dbd2a2c5371e96a0882cd7e2718bf4, lower: 0xbfd219b873083f5f5c116ac3a321b570 }, // -4366
    Multiplier { upper: 0x94afdbb56a927edee6d357131b8e0990, lower: 0x9974e1605c069919167455694f4e2ac0 }, // -4365
    Multiplier { upper: 0xede62c557750cafe3e1ef1b82c1675b4, lower: 0x28bb0233c670f4f4f0ba2242187d1133 }, // -4364
    Multiplier { upper: 0xbe51bd112c40a264fe7f27c689ab915c, lower: 0xed6268296b8d90c3f3c81b68139740f6 }, // -4363
    Multiplier { upper: 0x9841640dbd0081ea653286386e22dab0, lower: 0xbde85354560ada365ca015ecdc7900c5 }, // -4362
    Multiplier { upper: 0xf39bd3492e673643d51da38d7d04911a, lower: 0xc973b886f0115d23c766897afa5b346d }, // -4361
    Multiplier { upper: 0xc2e30f6dbeb8f8364417b60aca6a0daf, lower: 0x078fc6d259a77db6391ed46261e29058 }, // -4360
    Multiplier { upper: 0x9be8d9249893f9c503462b3bd521a48c, lower: 0x060c9f0eae1f97c4fa7f104eb4b54046 }, // -4359
    Multiplier { upper: 0xf9748ea0f41ff608053d11f95502a0e0, lower: 0x09adcb4ab0328c6e5d981a17878866d6 }, // -4358
    Multiplier { upper: 0xc790721a5ce65e6cd0fda7faaa6880b3, lower: 0x3af16f6ef35ba38b7e134812d2d38578 }, // -4357
    Multiplier { upper: 0x9fa6c1aeb0b84b8a40caecc888539a28, lower: 0xfbf459258f7c82d5fe75d3424242d12d }, // -4356
    Multiplier { upper: 0xff7135e44df3ac1067ab14740d529041, lower: 0x93208ea27f2d9e2330bc8536d06ae848 }, // -4355
    Multiplier { upper: 0xcc5a9183718fbcd9ec88dd29a4420d01, lower: 0x4280721b98f14b4f5a306a92405586a0 }, // -4354
    Multiplier { upper: 0xa37ba79c5ad963e18a07175483680a67, lower: 0x6866c1afad8dd5d914f3887500446bb3 }, // -4353
    Multiplier { upper: 0x82c952e37be11cb46e6c12aa02b9a1ec, lower: 0x538567bfbe0b117a772939f73369efc3 }, // -4352
    Multiplier { upper: 0xd1421e38c634faba4a468443378f697a, lower: 0x1f3bd932c9ab4f2a5841f65852431937 }, // -4351
    Multiplier { upper: 0xa768182d6b5d9561d505369c2c72bac8, lower: 0x18fcadc23aef7288469b2b79db68e0f9 }, // -4350
    Multiplier { upper: 0x85ece02455e4778177375ee356c22f06, lower: 0x7a63be34fbf2c2069ee2892e4920b3fb }, // -4349
    Multiplier { upper: 0xd647cd06efd3f268bebefe388ad04b3d, lower: 0x909f96bb2cb79cd7649da84a0e9ab991 }, // -4348
    Multiplier { upper: 0xab6ca4058ca98eba323264fa08a6a297, lower: 0xa6e6122f56f94a45ea17b9d4d87bc7a7 }, // -4347
    Multiplier { upper: 0x8923b66ad6ee0bc8282850c806ebb546, lower: 0x1f1e74f2abfaa1d18812fb10ad2fd2ec }, // -4346
    Multiplier { upper: 0xdb6c571157e3460d0d0d4e0cd7df8870, lower: 0x31ca54b7799102e8d9b7f81aaeb2eb13 }, // -4345
    Multiplier { upper: 0xaf89df41131c380a70d771a3dfe606c0, lower: 0x27d51092c7a7358714932ce2255bef43 }, // -4344
    Multiplier { upper: 0x8c6e4c340f49c66ec0ac5ae97feb3899, lower: 0xb97740756c85c46c1075bd81b77cbf69 }, // -4343
    Multiplier { upper: 0xe0b079ece542d7179aad5e426645275c, lower: 0x5bf200bbe0d607134d892f35f2613241 }, // -4342
    Multiplier { upper: 0xb3c0618a510245ac7bbde501eb6a85e3, lower: 0x7cc19a2fe7119f42a46dbf5e5b80f501 }, // -4341
    Multiplier { upper: 0x8fcd1ad50d9b6af062fe50ce55eed182, lower: 0xca347b5985a7b29bb6be32b1e2cd90cd }, // -4340
    Multiplier { upper: 0xe614f7bb48f8ab1a37fd4e16efe4826a, lower: 0xdd20c55c090c50f92463844fd148e7af }, // -4339
    Multiplier { upper: 0xb810c62f6d93bc14f99771abf31d3522, lower: 0x4a809de33a7040c7504f9d0ca76d8626 }, // -4338
    Multiplier { upper: 0x93409e8c57a96343fadf8e2328e42a81, lower: 0xd533b18295269a390d0c7da3b9246b51 }, // -4337
    Multiplier { upper: 0xeb9a9746f2a89ed32aff49d1db06aa69, lower: 0x551f826a883dc38e7b472f6c5b6d7882 }, // -4336
    Multiplier { upper: 0xbc7bac38c2207f0f559907db159eeeba, lower: 0xaa7f9b886cfe360b95d28c56af8ac6ce }, // -4335
    Multiplier { upper: 0x96c95693ce8065a5de140648de18befb, lower: 0xbb994939f0cb5e6fab0ed6abbfa238a5 }, // -4334
    Multiplier { upper: 0xf142241fb0cd6f6fc9b9a3a7c9c13192, lower: 0xc5c20ec31adefd7f7817bddf99038dd5 }, // -4333
    Multiplier { upper: 0xc101b67fc0a459263afae95307cdc142, lower: 0x37ce7235af18cacc6012fe4c7a693e44 }, // -4332
    Multiplier { upper: 0x9a67c53300837a84fbfbeddc063e3434, lower: 0xf971f4f7bf4708a3800f31d6c85431d0 }, // -4331
    Multiplier { upper: 0xf70c6eb800d25da1932cafc6706386bb, lower: 0x28b654bf9871a76c00184fbe0d5382e6 }, // -4330
    Multiplier { upper: 0xc5a38bc6670eb14e0f56f30526b60562, lower: 0x86f843cc79f485f0001372fe710f9beb }, // -4329
    Multiplier { upper: 0x9e1c6fd1ec0bc10b3f78c26a855e6ab5, lower: 0x38c69ca394c39e5999a928cb8da61656 }, // -4328
    Multiplier { upper: 0xfcfa4c83134601ab98c13710d563ddee, lower: 0xc13dc76c2138fd5c290ea7ac15d68a23 }, // -4327
    Multiplier { upper: 0xca61d6cf429e67bc7a342c0d778317f2, lower: 0x34316c5680fa6449ba721fbcde453b4f }, // -4326
    Multiplier { upper: 0xa1e7df0c354b863061c356712c68dff4, lower: 0xf68df04533fb836e2ec1b2fd7e9dc90c }, // -4325
    Multiplier { upper: 0x81864c09c43c6b59e7cf785a89ed7ff7, lower: 0x2ba4c0375cc935f1bf015bfdfee4a0d7 }, // -4324
    Multiplier { upper: 0xcf3d467606c7122972e58d5da97bfff1, lower: 0xdf6e00589475231c64cef99664a10157 }, // -4323
    Multiplier { upper: 0xa5ca9ec4d238db545bead77e212ffff4, lower: 0xb2be66ad4390e8e383d8c7ab83b40113 }, // -4322
    Multiplier { upper: 0x84a2189d74fa49104988ac64e7599990, lower: 0x8efeb88a9c73ed82cfe09fbc695ccda9 }, // -4321
    Multiplier { upper: 0xd4368dc8bb2a0e8075a77a3b0bc28f4d, lower: 0xb1978daa93ecaf37b300ff93dbc7af74 }, // -4320
    Multiplier { upper: 0xa9c53e3a2f54d866c485fb626fced90a, lower: 0xf4793e220ff08c2c8f33ffa97c9fbf90 }, // -4319
    Multiplier { upper: 0x87d0fe94f2aa46b89d37fc4ebfd8ada2, lower: 0x5d2dcb4e7326d68a0c29995463b2ffa7 }, // -4318
    Multiplier { upper: 0xd94e64218443a45a9526607dffc115d0, lower: 0x951612171ea48a7679dc288705eb32a4 }, // -4317
    Multiplier { upper: 0xadd8501ad0361d15441eb397ffcdab0d, lower: 0x4411a8127eea085ec7e3539f37ef5bb6 }, // -4316
    Multiplier { upper: 0x8b137348a691b0ddd0188faccca488d7, lower: 0x69a7b9a8658806b23982a94c2cbf7c92 }, // -4315
    Multiplier { upper: 0xde8585410a82b49619c0e5e1476da7bf, lower: 0x0f72c2a708d9a4505c0442137acbfa83 }, // -4314
    Multiplier { upper: 0xb2046a9a6ecef6de7b00b7e76c57b965, lower: 0xa5f56885a0ae1d0d1669ce75fbd66202 }, // -4313
    Multiplier { upper: 0x8e69eee1f23f2be52f33c652bd12fab7, lower: 0xb7f786d14d58173dab87d85e6311e802 }, // -4312
    Multiplier { upper: 0xe3dcb1698398463b7eb93d512e84c459, lower: 0x2658d7b5488cf1fc45a626fd6b4fd99d }, // -4311
    Multiplier { upper: 0xb64a27879c79d1c9322dcaa7586a36ad, lower: 0xb84712f76d3d8e636aeb526455d97ae4 }, // -4310
    Multiplier { upper: 0x91d4ec6c7d2e416dc1be3bb913882bbe, lower: 0x2d05a8c5f0fe0b82bbef751d117ac8b6 }, // -4309
    Multiplier { upper: 0xe954ad7a61e39be2cf96c5f4ec0d12c9, lower: 0xe1a2a7a31b30126ac64bee94e8c47457 }, // -4308
    Multiplier { upper: 0xbaaa2461e7e949823fabd190bcd7423b, lower: 0x1ae8861c15c00ebbd1d65877209d29df }, // -4307
    Multiplier { upper: 0x9554e9e7ecbaa134ffbca7a6fd7901c8, lower: 0xe2539e7cde333efca7dead2c1a1754b3 }, // -4306
    Multiplier { upper: 0xeeee430cadf76854cc610c3e625b360e, lower: 0x36ec30c7c9eb97faa63115135cf2211d }, // -4305
    Multiplier { upper: 0xbf2502708b2c537709e73cfeb515c4d8, lower: 0x2bf027063b22dffbb827440f7d8e80e4 }, // -4304
    Multiplier { upper: 0x98ea685a08f042c5a185ca655dab03e0, lower: 0x2326859e95b57ffc93529cd9313ecd84 }, // -4303
    Multiplier { upper: 0xf4aa40900e4d37a29c0943d562ab3966, lower: 0x9ea408fdbc5599941eea948eb53148d2 }, // -4302
    Multiplier { upper: 0xc3bb66d9a50a92e87cd436444eef611e, lower: 0xe55007316377ae1018bbaa0bc4276d75 }, // -4301
    Multiplier { upper: 0x9c95ebe150d5425397102b69d8bf80e5, lower: 0x844005c11c5fbe7346fc880969b9245e }, // -4300
    Multiplier { upper: 0xfa897968815536ec24e6abdc8dff34a2, lower: 0x6d333c682d65fd853e60d9a8a9283a2f }, // -4299
    Multiplier { upper: 0xc86dfaba0110f8bcea522316d7ff5d4e, lower: 0xbdc296b9bdeb3137651a47ba20ecfb59 }, // -4298
    Multiplier { upper: 0xa057fbc800da609721db4f4579991772, lower: 0x3168789497ef5a92b7483961b3f0c914 }, // -4297
    Multiplier { upper: 0x8046630667151a12817c3f6ac7adac5b, lower: 0x5ab9fa10798c48755f6cfab48ff3d410 }, // -4296
    Multiplier { upper: 0xcd3d6b3d71bb5cea68c6cbde0c4913c5, lower: 0x5df65ce728e073eeff14c4541986201a }, // -4295
    Multiplier { upper: 0xa43122978e2f7d8853d23cb1a36da96a, lower: 0xb191e3ec20b38ff265aa36a9ae04e67b }, // -4294
    Multiplier { upper: 0x835a8212d825fe06a974fd5ae9248788, lower: 0x8e0e4ff01a293ff51e21c5548b371ec9 }, // -4293
    Multiplier { upper: 0xd22a69b7c03cc9a44254c89175073f40, lower: 0xe34a198029db9988303608874524fe0e }, // -4292
    Multiplier { upper: 0xa821ee2c99ca3ae9ceaa3a0df738ff67, lower: 0x1c3b4799bb16146cf35e6d39041d980b }, // -4291
    Multiplier { upper: 0x86818b56e16e9587d8882e719293ff85, lower: 0xb02f6c7afc11a9f0c2b1f0fa69b14670 }, // -4290
    Multiplier { upper: 0xd735abbe357dbc0c8da6b0b5b753326f, lower: 0x804be0c4c682a98137831b2a42b53d7f }, // -4289
    Multiplier { upper: 0xac2aefcb5dfe300a0aebc0915f75c1f2, lower: 0xcd09809d6b9bbacdc6027c21cef76466 }, // -4288
    Multiplier { upper: 0x89bbf30917fe8cd4d58966dab2c49b28, lower: 0xa4079a178949623e3801fce7d8c5e9eb }, // -4287
    Multiplier { upper: 0xdc5feb41bffdae2155a8a4911e075ea7, lower: 0x6cd8f68c0edbd0638ccffb0c8e097645 }, // -4286
    Multiplier { upper: 0xb04cbc349997be811153b6da7e6c4bb9, lower: 0x23e0c53cd8afd9e93d732f3d3e6df837 }, // -4285
    Multiplier { upper: 0x8d0a302a147965340ddc924865236fc7, lower: 0x4fe70430ad597b20fdf5bf6431f1935f }, // -4284
    Multiplier { upper: 0xe1a9e6a9ba5bd520162db6da3b6be60b, lower: 0xb30b39e77bc25e9b2fef98a04fe8ebcb }, // -4283
    Multiplier { upper: 0xb487ebbafb7caa8011be2be1c9231e6f, lower: 0xc26f6185fc9b7ee28cbfad4d0cba563c }, // -4282
    Multiplier { upper: 0x906cbc9595fd55334164efe7d41c1859, lower: 0x68591ad196e2cbe870995770d6fb7830 }, // -4281
    Multiplier { upper: 0xe71460ef566221eb9bd4b30c86935a28, lower: 0xa6f4f7b5be37aca71a8ef24e24c58d1a }, // -4280
    Multiplier { upper: 0xb8dd1a5911e81b22e3108f3d3875e1ba, lower: 0x1f2a5fc4982c8a1f48725b71b70470e2 }, // -4279
    Multiplier { upper: 0x93e415140e5348e8b5a6d8fdc6c4b494, lower: 0xe5bb7fd079bd3b4c39f515f49269f3e8 }, // -4278
    Multiplier { upper: 0xeca021b9b085417455d7c1960ad45421, lower: 0x6f92661a5c61f879f654efedb70feca6 }, // -4277
    Multiplier { upper: 0xbd4ce7c7c06a9ac377dfce11a2437681, lower: 0x260eb81516b4c6c7f843f324927323b8 }, // -4276
    Multiplier { upper: 0x9770b96c99eee235f97fd80e1b692b9a, lower: 0x84d89344122a389ff9cff5b6db8f4fc6 }, // -4275
    Multiplier { upper: 0xf24df57a8fe49d2328cc8ce35f0eac2a, lower: 0x6e2752068376c0fff6198924927ee60a }, // -4274
    Multiplier { upper: 0xc1d7f7953fea174f53d6d71c4c0bbcee, lower: 0xbe85db38692bcd9991ae0750753251a2 }, // -4273
    Multiplier { upper: 0x9b132c776654df72a978ac16a33c9725, lower: 0x6537e29387563e14748b390d2a8ea7b5 }, // -4272
    Multiplier { upper: 0xf81ead8bd6ee32510f2779bdd1fa8b6f, lower: 0x08596a85a556c9ba5411f4e1ddb10c54 }, // -4271
    Multiplier { upper: 0xc67ef13cabf1c1da7285fafe41953c58, lower: 0xd37abb9e1ddf07c8434190b4b15a7043 }, // -4270
    Multiplier { upper: 0x9ecbf430898e34aec204c8cb67aa96ad, lower: 0x75fbc94b4b18d3069c3473c3c115269c }, // -4269
    Multiplier { upper: 0xfe13204da8e3877e033adadf0c442448, lower: 0xbcc60edede8e1e70f9ed860601bb70fa }, // -4268
    Multiplier { upper: 0xcb42803e20b605fe68fbe24c09d01d06, lower: 0xfd6b3f18b20b4b8d94be04d19afc5a62 }, // -4267
    Multiplier { upper: 0xa29b99cb4d5e6b31ed964ea33b0ce405, lower: 0x9788ff46f4d5d60add64d0a7af30484e }, // -4266
    Multiplier { upper: 0x821614a2a44b88f4be11d88295a3e99e, lower: 0x12d3ff6bf7117808b11d73b958f36d0b }, // -4265
    Multiplier { upper: 0xd02354376d45a7edfce95a6a89064296, lower: 0x848665798b4f26744e9585f55b1f14df }, // -4264
    Multiplier { upper: 0xa682a9c5f1048657fd877b886d9e9bab, lower: 0x9d38512e090c1ec3721137f77c18dd7f }, // -4263
    Multiplier { upper: 0x8535549e5a6a051331392fa057b21622, lower: 0xe42d0dbe6da34bcf8e742cc5fce0b133 }, // -4262
    Multiplier { upper: 0xd52220fd5d766e851b8eb29a25e9bd04, lower: 0xa04815fd7c38794c172047a32e344eb7 }, // -4261
    Multiplier { upper: 0xaa81b3fde45ebed0e2d88ee1b7ee30d0, lower: 0x8039ab31302d2dd678e69fb5be903ef9 }, // -4260
    Multiplier { upper: 0x8867c331837eff0d8246d8b49324f3da, lower: 0x002e228dc02424ab93ebb2f7cba698c7 }, // -4259
    Multiplier { upper: 0xda3f9eb59f3198159d3e278751d4b95c, lower: 0xcd169daf99d36ddf5312b7f2df70f472 }, // -4258
    Multiplier { upper: 0xae994bc47f5ae0114a981f9f74aa2de3, lower: 0xd7454af2e175f17f75a89328b2c0c38e }, // -4257
    Multiplier { upper: 0x8badd636cc48b3410879b2e5f6ee8b1c, lower: 0xac376f28b45e5acc5e2075ba289a360c }, // -4256
    Multiplier { upper: 0xdf7c89f146dab8680d8f84a324b0de94, lower: 0x46bf18412096f7ad636722c37429f012 }, // -4255
    Multiplier { upper: 0xb2ca07f438aef9ecd7a603b5b6f3e543, lower: 0x6bcc13674d4592f11c528235f687f342 }, // -4254
    Multiplier { upper: 0x8f08065cfa2594bd79519c915f298435, lower: 0xefd675ec3dd1425a7d0ece9192065c35 }, // -4253
    Multiplier { upper: 0xe4d9a3c7f6a287958ee8fa8231dc06bc, lower: 0xb2f0bcad2fb536f72e7e174f500a2d21 }, // -4252
    Multiplier { upper: 0xb71483065ee86c77a5872ece8e499efd, lower: 0x5bf3ca24262a925f5864df72a66e8a81 }, // -4251
    Multiplier { upper: 0x9276cf384bed2392ead28bd871d47f31, lower: 0x165ca1b684eedb7f79ea4c5bb8586ece }, // -4250
    Multiplier { upper: 0xea57b1f3acae9f5177b746271c8731e8, lower: 0x23c7692407e492658fdd46f926f3e47c }, // -4249
    Multiplier { upper: 0xbb795b2956f2190df95f6b527d38f4b9, lower: 0xb63920e99fea0eb7a64a9f2db8c31d30 }, // -4248
    Multiplier { upper: 0x95faaf54458e7a71944c55db9760c3c7, lower: 0xc4fa80bae654d892eb6ee5be2d68e426 }, // -4247
    Multiplier { upper: 0xeff77eed3c172a4f53ad562c25679fa6, lower: 0x07f7345e3d548db7df17d5fd1574a03d }, // -4246
    Multiplier { upper: 0xbff932576345bb72a9577823511fb2eb, lower: 0x3992904b6443a49318dfde64112a19cb }, // -4245
    Multiplier { upper: 0x99942845e90495f55445f9b5da7fc255, lower: 0xc7a8736f83695075ad7fe51cda8814a2 }, // -4244
    Multiplier { upper: 0xf5b9da0974d42322206ff5efc3ff9d56, lower: 0x0c40b8b26bdbb3ef7bffd4faf7402103 }, // -4243
    Multiplier { upper: 0xc494ae6df7101c1b4d265e5969994aab, lower: 0x3d0093c1efe2f6592fffdd959299b403 }, // -4242
    Multiplier { upper: 0x9d43bebe5f40167c3db84b7abae10888, lower: 0xfd9a0fce59825eadbfffe477a87af669 }, // -4241
    Multiplier { upper: 0xfb9f9796feccf0c6c926df2ac49b40db, lower: 0x2f5ce616f59d644933330725da5e570e }, // -4240
    Multiplier { upper: 0xc94c794598a3f3d23a857f556a15cd7c, lower: 0x25e3eb45914ab6a0f5c26c1e484b78d8 }, // -4239
    Multiplier { upper: 0xa109fa9e13b65ca82ed132aabb44a463, lower: 0x5183229e0dd55ee72b01f01839d5fa46 }, // -4238
    Multiplier { upper: 0x80d4c87e762b7d5358a75bbbc903b6b5, lower: 0xdacf4ee4d7dde585bc018ce02e44c838 }, // -4237
    Multiplier { upper: 0xce2140ca56abfbb88dd892c60e6c5789, lower: 0x5e187e3af2fca26f9335ae337d3ad9f3 }, // -4236
    Multiplier { upper: 0xa4e76708455662fa0b13a89e71f04607, lower: 0x7e79fe958f3081f2dc2af1c2ca957b29 }, // -4235
    Multiplier { upper: 0x83ec526d04451bfb3c0fba185b269e6c, lower: 0x652e6544728d34c249bbf49bd5446288 }, // -4234
    Multiplier { upper: 0xd313b714d3a1c65ec67f9026f83dca47, lower: 0x084a3ba0b748546a0f9320f9553a373f }, // -4233
    Multiplier { upper: 0xa8dc92770fb49eb238660cebf9cb0838, lower: 0xd36e961a2c39dd21a60f4d94442e9299 }, // -4232
    Multiplier { upper: 0x8716db9272f6e55b6051a3effb08d360, lower: 0xa92544e1bcfb174e1e72a4769cf20ee1 }, // -4231
    Multiplier { upper: 0xd8249283eb24a22bcd4f6cb32b415234, lower: 0x41d53b02c7f82549ca5107242e5017ce }, // -4230
    Multiplier { upper: 0xacea0ecfef5081bca43f8a28ef6774f6, lower: 0x9b10fc0239935107d50d9f50250cdfd8 }, // -4229
    Multiplier { upper: 0x8a54d8a6590d3496e9cc6e8725ec5d92, lower: 0x15a73001c7a90d9fdda47f7350d7197a }, // -4228
    Multiplier { upper: 0xdd548dd6f4e1edbe42e0b0d83cad6283, lower: 0x55d84ccfa5db48ffc90732521af1c25c }, // -4227
    Multiplier { upper: 0xb1107178c3e7f165024d5a4696f11b9c, lower: 0x44ad0a3fb7e2a0cca0d28ea8158e3516 }, // -4226
    Multiplier { upper: 0x8da6c12d69865ab7350aae9edf274949, lower: 0xd08a6e995fe880a3b3dba5534471c412 }, // -4225
    Multiplier { upper: 0xe2a46848a8d6f78b88111764983edba9, lower: 0x4daa4a8effda676c52f908853a4fa01d }, // -4224
    Multiplier { upper: 0xb550536d53df2c6fa00dac5079cbe2ed, lower: 0xd7bb6ed8ccaeb923759406d0fb72e67d }, // -4223
    Multiplier { upper: 0x910d0f8aa97f56bfb33e237394a31bf1, lower: 0x7962bf13d6f22db5f7a99f0d95f58531 }, // -4222
    Multiplier { upper: 0xe814e5aaa8cbbdff853038b8edd1c64f, lower: 0x289dfe8624b6af898c429815bcbc084e }, // -4221
    Multiplier { upper: 0xb9aa515553d631993759c6fa57db050c, lower: 0x207e65381d5ef2d470354677ca3006a5 }, // -4220
    Multiplier { upper: 0x948841110fde8e142c47d261dfe26a70, lower: 0x19feb760177f28a9f35dd1f96e8cd21e }, // -4219
    Multiplier { upper: 0xeda6ce81b2fdb02046d9509c996a43e6, lower: 0x8ffdf23358cb74431efc8328b0e1502f }, // -4218
    Multiplier { upper: 0xbe1f0b9af597c019d24773b07abb6985, lower: 0x3ffe5b5c470929cf4bfd35ba271aa68c }, // -4217
    Multiplier { upper: 0x9818d61591463347db6c5c8d2efc546a, lower: 0x999849169f3a87d909975e2e85aeeba4 }, // -4216
    Multiplier { upper: 0xf35af0228209eba62be0941517fa20aa, lower: 0x8f5a0e8a985da6280f5896b0d5e4ac39 }, // -4215
    Multiplier { upper: 0xc2af268201a18951bcb3a9aa7994e6ee, lower: 0xd914d86ee04aeb533f7a12271183bcfa }, // -4214
    Multiplier { upper: 0x9bbf52019ae7a10e308fbaeec7aa5258, lower: 0xadaa46bf19d5890f65fb41b8dacfca62 }, // -4213
    Multiplier { upper: 0xf9321ccf5e3f6816b4192b17a5dd508d, lower: 0xe2aa0acb5c88db4bd65ecf8e2ae6109c }, // -4212
    Multiplier { upper: 0xc75b4a3f7e99201229adbc12eb1773a4, lower: 0xb554d56f7d3a4909784bd93e88b80d4a }, // -4211
    Multiplier { upper: 0x9f7c3b65fee0e674ee24967588df8fb6, lower: 0xf7771125fdc83a6df9d647653a2cd76f }, // -4210
    Multiplier { upper: 0xff2d2bd6649b0a54b03a8a55a7cc1924, lower: 0xbf24e83cc9405d7cc2f0723b9047bf17 }, // -4209
    Multiplier { upper: 0xcc242311ea15a1dd59c86eaaeca34750, lower: 0x98ea5363d4337dfd68c05b62d9d2ff46 }, // -4208
    Multiplier { upper: 0xa3501c0e54de1b177b06beef23b5d2a6, lower: 0xe0bb75e9768f97fded66af8247dbff6b }, // -4207
    Multiplier { upper: 0x82a67cd843e4e2792f3898bf4fc4a885, lower: 0x8095f7edf872dffe5785593506499923 }, // -4206
    Multiplier { upper: 0xd10a615a063b03f5185a8dfee6077408, lower: 0xcdbcbfe3271e33308c088ebb3d428e9d }, // -4205
    Multiplier { upper: 0xa73b8114d1c8cff746aed7ff1e6c5cd3, lower: 0xd7ca331c1f4b5c26d66d3efc31020bb1 }, // -4204
    Multiplier { upper: 0x85c93410a7d3d9929ef24665b1f04a43, lower: 0x130828e34c3c49b8ab8a98c9c0ce6fc1 }, // -4203
    Multiplier { upper: 0xd60eb9b43fb95c1dcb1d3d6f831a106b, lower: 0x51a6a7d21393a92778ddc142ce171935 }, // -4202
    Multiplier { upper: 0xab3efaf69961167e3c17645935ae7389, lower: 0x0e1eeca80fa9541f93e49a9bd8127a91 }, // -4201
    Multiplier { upper: 0x88ff2f2bade74531c9ac50475e25293a, lower: 0x71b256ecd954434c76507bafe00ec874 }, // -4200
    Multiplier { upper: 0xdb31e512afd86eb60f7a1a0bc9d50ec3, lower: 0xe91d57e15bba054723b3f919667e0d86 }, // -4199
    Multiplier { upper: 0xaf5b1da88cad255e72c814d63b10d89c, lower: 0xba7ddfe77c94d105b629941451fe7138 }, // -4198
    Multiplier { upper: 0x8c48e486d6f0eab1f56cdd782f40ad4a, lower: 0x2ecb1985fd43da6af821434374cb8dc6 }, // -4197
    Multiplier { upper: 0xe074a0d7be4e444fef14958d18677ba9, lower: 0xe47828d662062a44c035386bee127c70 }, // -4196
    Multiplier { upper: 0xb39080ac983e9d0cbf43aad746b92fbb, lower: 0x1d2ced784e6b5503ccf76056580ec9f4 }, // -4195
    Multiplier { upper: 0x8fa6cd56e032173d65cfbbdf6bc75962, lower: 0x7dbd8ac6a522aa6970c5e6ab79a56e5d }, // -4194
    Multiplier { upper: 0xe5d7aef166b68b956fb2c632460bc237, lower: 0x2f95aad76e9ddd75813ca4458f6f16fa }, // -4193
    Multiplier { upper: 0xb7dfbf27855ed61126289e8e9e6fce92, lower: 0x8c77bbdf8bb17df79a96e9d13f8c1262 }, // -4192
    Multiplier { upper: 0x931965b9377f11a751ba18721859720e, lower: 0xd6c62fe6095acb2c7babee40ffa341e8 }, // -4191
    Multiplier { upper: 0xeb5bd5f525981c3ee929c0b68d5be9b1, lower: 0x57a37fd6755e11e0c5dfe39b329ecfd9 }, // -4190
    Multiplier { upper: 0xbc4977f751467cff20ee33c53de3215a, lower: 0xac82ccab91180e4d6b1982e28ee57314 }, // -4189
    Multiplier { upper: 0x96a12cc5da9eca65b3f1c30431828115, lower: 0x56cf0a22da79a50abc1468b53f1df5aa }, // -4188
    Multiplier { upper: 0xf101e13c90fe10a2b982d1a04f3734ee, lower: 0xf14b436af72908112ced745531c98910 }, // -4187
    Multiplier { upper: 0xc0ce4dca0d980d4efacf0e19d8f8f725, lower: 0x8dd5cf88c5ba6cda8a57904427d46da6 }, // -4186
    Multiplier { upper: 0x9a3ea4a1a479a43f2f0c0b47e0c72c1e, lower: 0x0b1172d3d161f0aed512d9d01fdd2485 }, // -4185
    Multiplier { upper: 0xf6caa102a0c2a0651813453fce0b79c9, lower: 0xab4f1e1fb5698117bb515c8032fb6da1 }, // -4184
    Multiplier { upper: 0xc56ee7354d688050e00f6a9971a2c7d4, lower: 0x890c18195dee00dfc90de399c262be1b }, // -4183
    Multiplier { upper: 0x9df252910aba0040b33f887ac14f0643, lower: 0xa0d679ade4be67196da4b6149b8231af }, // -4182
    Multiplier { upper: 0xfcb6ea81aac3339ab865a72acee4d6d2, lower: 0x9af0c2afd463d828af6df020f8d04f7e }, // -4181
    Multiplier { upper: 0xca2beece2235c2e22d1e1f557250abdb, lower: 0xaf27022643831353bf8b2680c70d0c65 }, // -4180
    Multiplier { upper: 0xa1bcbf0b4e9168b4f0e4e5ddf50d5649, lower: 0x58ec01b8360275dc993c1ecd6c0a7051 }, // -4179
    Multiplier { upper: 0x8163cc090ba786f7271d84b190d7783a, lower: 0xad899af9c4cec4b07a967f0abcd526a7 }, // -4178
    Multiplier { upper: 0xcf061341ac3f3e583e95a11c1af259f7, lower: 0x7c0f5e5c6e17a11a5dbd98112e21d772 }, // -4177
    Multiplier { upper: 0xa59e75ce2365cb79cbaae749af2847f9, lower: 0x300c4b7d24dfb41517cae00dbe817928 }, // -4176
    Multiplier { upper: 0x847ec4a4e91e3c616fbbec3af2869ffa, lower: 0x8cd6a2ca83e629aa796f19a498679420 }, // -4175
    Multiplier { upper: 0xd3fe076e41c9fa357f931391840a9990, lower: 0xe1576add9fd6a910c24b5c3a8d728699 }, // -4174
    Multiplier { upper: 0xa99805f1ce3b2e9132dc0fa79cd547a7, lower: 0x1aac557e197887409b6f7cfba45b9ee1 }, // -4173
    Multiplier { upper: 0x87acd18e3e95beda8f1672ec7d776c85, lower: 0xaef04464e12d39007c5930c950494be7 }, // -4172
    Multiplier { upper: 0xd914827d30ef97c41823eb13fbf2473c, lower: 0x4b1a0707ceaec19a608eb4754d42130c }, // -4171
    Multiplier { upper: 0xadaa01fdc0bfac9ce01cbc0ffcc1d296, lower: 0xa27b38d30bbf01484d3ef6c43dce75a3 }, // -4170
    Multiplier { upper: 0x8aee67fe33cc8a1719b09673309b0ede, lower: 0xe86293dc09659aa03dcbf89cfe3ec483 }, // -4169
    Multiplier { upper: 0xde4a3ffd1fada9be8f80f0b84dc4e497, lower: 0xda3752f9a8a2910062dff42e6397a0d1 }, // -4168
    Multiplier { upper: 0xb1d4fffdb2f1549872cd8d603e371d46, lower: 0x482c426153b540cd1be65cf1e9461a41 }, // -4167
    Multiplier { upper: 0x8e43fffe28c11079f5713de6982c176b, lower: 0x6cf0351aa95dcd70e31eb0c1876b4834 }, // -4166
    Multiplier { upper: 0xe39ffffd0e01b3f65581fca426acf245, lower: 0x7b19ee910efc7be7d1cab468d8aba6b9 }, // -4165
    Multiplier { upper: 0xb61999973e67c32b779b30835223f504, lower: 0x627b2540d8c9fcb974a229ed7a22ebc7 }, // -4164
    Multiplier { upper: 0x91ae1478feb968ef92e28d35db4ff736, lower: 0xb52f5100ad6e63c79081bb2461b5896c }, // -4163
    Multiplier { upper: 0xe9168727fdf574b2849daebc92198b8a, lower: 0xbb7ee801157d6c7280cf91d3cf88dbe0 }, // -4162
    Multiplier { upper: 0xba786c1ffe5df6f536e48bca0e7ad608, lower: 0x95ff2000ddfdf05b9a3fa7dca607164d }, // -4161
    Multiplier { upper: 0x952d234ccb7e5f2a92506fd4d86244d3, lower: 0xab328000b197f37c7b661fe3b805ab71 }, // -4160
    Multiplier { upper: 0xeeae9ee14596feaa83b3e6215a36d485, lower: 0xdeb733344f598593f8a36639266f78b4 }, // -4159
    Multiplier { upper: 0xbef218b437abfeeecfc31e8114f8aa04, lower: 0xb22c28f6a5e137a993b5eb60eb8c6090 }, // -4158
    Multiplier { upper: 0x98c1ad5cf956658bd968e53410c6ee6a, lower: 0x282353f884b42c87a95e55e722d6b3a7 }, // -4157
    Multiplier { upper: 0xf46915618ef0a2795bdb08534e0b1710, lower: 0x4038865a6ded140c42308971d15785d7 }, // -4156
    Multiplier { upper: 0xc387444e0bf3b52de315a042a4d5ac0d, lower: 0x002d384857f0dcd69b5a078e4112d179 }, // -4155
    Multiplier { upper: 0x9c6c36a4d65c90f18277b36883de233d, lower: 0x99bdc6a0465a4a454914d2d8340f0dfb }, // -4154
    Multiplier { upper: 0xfa46bdd48a2db4b59d8c5240d2fd052f, lower: 0x5c62d766d6f6dd3ba8215159ece4e32a }, // -4153
    Multiplier { upper: 0xc83897dd3b57c3c47e09db670f30d0f2, lower: 0xb04f12b8abf8b0fc86810de18a50b5bc }, // -4152
    Multiplier { upper: 0xa02d464a95dfcfd064d4af85a5c0a728, lower: 0x8d0c0efa232d5a639ecda4b46ea6f7c9 }, // -4151
    Multiplier { upper: 0x8024383bab19730d1d76f2d15166ec20, lower: 0x70d67261b5bde1e94bd7b6f6beebf96e }, // -4150
    Multiplier { upper: 0xcd06c05f7828b814fbf184821bd7e033, lower: 0xe7bd83cf892fcfdbac8c57f131798f16 }, // -4149
    Multiplier { upper: 0xa40566b2c686f9aa63279d34e31319c3, lower: 0x1fcacfd93a8ca64956d6acc0f4613f45 }, // -4148
    Multiplier { upper: 0x8337855bd20594884f52e42a4f427b02, lower: 0x7fd573142ed6eb6ddf1223cd904dcc37 }, // -4147
    Multiplier { upper: 0xd1f26ef95008eda6e5516d107ed0c4d0, lower: 0xcc88b8204af178afcb503948e6e2e058 }, // -4146
    Multiplier { upper: 0xa7f52594400724858441240d32409d73, lower: 0xd6d3c6803bf4608ca2a6943a524f19e0 }, // -4145
    Multiplier { upper: 0x865db7a9ccd2839e0367500a8e9a178f, lower: 0xdf0fd2002ff6b3a3b552102ea83f47e7 }, // -4144
    Multiplier { upper: 0xd6fc590fae1d9f6338a54cddb0f68c19, lower: 0x64e61ccd198ab905eee9b37dd9fed971 }, // -4143
    Multiplier { upper: 0xabfd140c8b4ae5e8fa1dd717c0c53ce1, lower: 0x1d84e3d747a22d9e58baf5fe47ff145a }, // -4142
    Multiplier { upper: 0x8997433d3c3beb20c817df4633d0fd80, lower: 0xe46a4fdf6c81be1846fbf7fe9fff437c }, // -4141
    Multiplier { upper: 0xdc253861f9f978347359653d1fb4c8ce, lower: 0x3a43b2ff1402c9c07193266433320592 }, // -4140
    Multiplier { upper: 0xb01dc6b4c7fac6905c478430e62a3a3e, lower: 0x9502f598dccf07cd27a8eb835c280475 }, // -4139
    Multiplier { upper: 0x8ce49ef7066238737d06035a51bb61cb, lower: 0xaa68c47a4a3f3970ec8722cf7cecd05e }, // -4138
    Multiplier { upper: 0xe16dcb24d7038d8594d66bc3b5f89c79, lower: 0x10a7a0c3a9fec24e473e9e18c7e14d62 }, // -4137
    Multiplier { upper: 0xb457d5b712693e047711efcfc4c6e394, lower: 0x0d52e702ee65683e9f654b47064dd782 }, // -4136
    Multiplier { upper: 0x904644927520fe69f8db263fd09f1c76, lower: 0x710f1f358b8453654c5109059ea4ac68 }, // -4135
    Multiplier { upper: 0xe6d6d41d8834ca4327c509ffb431c723, lower: 0xe81831ef45a0856ee081a808fdd4470d }, // -4134
    Multiplier { upper: 0xb8abdce46cf70835b96a6e6629c16c1c, lower: 0xb9acf4bf6ae6d1258067b9a0cb1038d7 }, // -4133
    Multiplier { upper: 0x93bcb0b6bd926cf7c7885851bb01234a, lower: 0x2e23f6ff88b8a75133862e1a3c0cfa46 }, // -4132
    Multiplier { upper: 0xec611abdfc1d7b260c0d5a1c5e683876, lower: 0xb0398b32745aa54eb8d6b029f9ae5d3c }, // -4131
    Multiplier { upper: 0xbd1a7bcb301795b809a44816b1ecf9f8, lower: 0x8cfad5c1f6aeeaa560abc021948b7dca }, // -4130
    Multiplier { upper: 0x97486308f346116007b6a01227f0c7fa, lower: 0x0a62449b2bbf221de6efcce7aa09316e }, // -4129
    Multiplier { upper: 0xf20d6b41853ce899a5f1001d0cb47329, lower: 0xaa36d42b7931d02fd7e614a5dcdb824a }, // -4128
    Multiplier { upper: 0xc1a455ce0430ba1484c0cce40a29f5ba, lower: 0xee924355fa8e40264651aa1e4a493508 }, // -4127
    Multiplier { upper: 0x9ae9de3e69c094dd3700a3e9a1bb2afb, lower: 0xf20e9c44c871cceb6b7488183b6dc407 }, // -4126
    Multiplier { upper: 0xf7dc96ca42cdbafb8b343975cf91de5f, lower: 0xe9b0fa07a71c7b1245874026c57c6cd7 }, // -4125
    Multiplier { upper: 0xc64a123b68a4959608f6945e3fa7e519, lower: 0x87c0c8061f49fc0e9e05ccebd1305712 }, // -4124
    Multiplier { upper: 0x9ea1a82f86ea1144d3f876b1cc8650e1, lower: 0x3967066b4c3b300bb19e3d897426ac0f }, // -4123
    Multiplier { upper: 0xfdcf737f3e434ed4865a5782e0d6e7ce, lower: 0xc23e70abad2b8012b5c9fc0f203de017 }, // -4122
    Multiplier { upper: 0xcb0c5c65cb690bdd384846024d78b972, lower: 0x34fec0895756000ef7d4c9a5b364b346 }, // -4121
    Multiplier { upper: 0xa27049eb0920d64a936d04cea460945b, lower: 0x5d989a07791199a59310a1515c508f6b }, // -4120
    Multiplier { upper: 0x81f36e55a0e711d542bd9d721d1a1049, lower: 0x17ad4805fa747aeadc0d4ddab04072bc }, // -4119
    Multiplier { upper: 0xcfebe3bc34a4e9553795c8b694f68074, lower: 0xf2aed9a32a53f7de2ce2162ab39a512d }, // -4118
    Multiplier { upper: 0xa6564fc9c3b72110f944a09210c53390, lower: 0xc2257ae8eea9931823e811bbc2e1da8b }, // -4117
    Multiplier { upper: 0x8511d96e362c1a73fa9d4d41a7042940, lower: 0x9b512f20beee0f4683200e2fcf1b153c }, // -4116
    Multiplier { upper: 0xd4e95be389e02a532a9548690b39db9a, lower: 0x921b7e9acb167ed7383349e6182b552c }, // -4115
    Multiplier { upper: 0xaa544982d4b3550f554439eda294afae, lower: 0xdb4932156f453245c68f6e51acef7757 }, // -4114
    Multiplier { upper: 0x88436e0243c2aa72aa9cfb2482108c8b, lower: 0xe2a0f4ddf29dc1d16ba5f1daf0bf92ac }, // -4113
    Multiplier { upper: 0xda057cd06c6aaa5110fb2b6d9ce74746, lower: 0x3767ee2fea9602e8ac3cb62b1acc1ddf }, // -4112
    Multiplier { upper: 0xae6aca4056bbbb740d95bc57b0b905d1, lower: 0xc5ecbe8cbbab3586f03091bc157017e6 }, // -4111
    Multiplier { upper: 0x8b88a1cd122fc929a477c9dfc09404a7, lower: 0xd18a320a2fbc2ad259c07496778cdfeb }, // -4110
    Multiplier { upper: 0xdf4102e1b6b2db75d3f2dc9934200772, lower: 0xe8dd1cdd192d11508f9a5423f27affdf }, // -4109
    Multiplier { upper: 0xb29a68b49228af91765be3adc34cd2c2, lower: 0x53e417174757410d3faea9b65b95997f }, // -4108
    Multiplier { upper: 0x8ee1ed5d41ba260df84982f1690a4235, lower: 0x0fe9ac129f7900d766255491e2de1466 }, // -4107
    Multiplier { upper: 0xe49caefb9c5d09aff3a8d18241aa0388, lower: 0x1975e01dcbf4ce25703bba8304968709 }, // -4106
    Multiplier { upper: 0xb6e3bf2fb04a6e265c870e01ce219c6c, lower: 0xe12b19b16ff70b5126962ecf36ded26d }, // -4105
    Multiplier { upper: 0x924fcc2626a1f1b84a05a4ce3e8149f0, lower: 0xb4227af459926f741ede8bd8f8b241f1 }, // -4104
    Multiplier { upper: 0xea1946a371031c5a100907b064020fe7, lower: 0x869d9186f5b718b9cafdac8e5ab6cfe8 }, // -4103
    Multiplier { upper: 0xbb476bb5f4027d14d9a0d2f38334d986, lower: 0x054adad25e2c13c7d597bd3eaef8a653 }, // -4102
    Multiplier { upper: 0x95d2bc919001fdaa47b3dbf60290ae04, lower: 0xd108af0eb1bcdc9fde12fdcbbf2d51dc }, // -4101
    Multiplier { upper: 0xefb7941c199cc91072b95ff0041ab007, lower: 0xb4dab1b11c6160ffc9b7fc7931e21c94 }, // -4100
    Multiplier { upper: 0xbfc610167ae3d40d28944cc003488cd2, lower: 0xf7155af416b44d996e2cc9fa8e4e7d43 }, // -4099
    Multiplier { upper: 0x996b4011fbe97670ed4370999c3a0a42, lower: 0x5f4448c3455d0ae124f0a1953ea53102 }, // -4098
    Multiplier { upper: 0xf57866832ca8bd817b9f1a8f605cdd36, lower: 0xfed3a79ed561ab01d4b435bb976eb4d0 }, // -4097
    Multiplier { upper: 0xc46052028a20979ac94c153f804a4a92, lower: 0x65761fb2444e2267dd5cf7c945f22a40 }, // -4096
    Multiplier { upper: 0x9d19db353b4d46156dd67766003b6edb, lower: 0x845e7fc1d03e81ecb1172ca104c1bb67 }, // -4095
    Multiplier { upper: 0xfb5c91eec548702249572570005f17c5, lower: 0xa09732cfb397364781beadce6e02c571 }, // -4094
    Multiplier { upper: 0xc916db256aa059b50778eac0004c1304, lower: 0x8078f572f61291d2ce3224a524cf045b }, // -4093
    Multiplier { upper: 0xa0df15b7888047c405fa556666a3426a, lower: 0x0060c45bf80edb0f0b5b50841d7269e2 }, // -4092
    Multiplier { upper: 0x80b277c606cd06366b2eaab8521c3521, lower: 0x99e7037cc67248d8d5e2a6d0178ebb1b }, // -4091
    Multiplier { upper: 0xcdea593cd7ae705711e4445a1cf9ee9c, lower: 0x29719f2e0a50748e23043e19bf4ac4f8 }, // -4090
    Multiplier { upper: 0xa4bb7a9712f1f378db1d037b4a618bb0, lower: 0x2127b28b3b739071b59cfe7aff6f03fa }, // -4089
    Multiplier { upper: 0x83c92edf425b292d7c1735fc3b813c8c, lower: 0xe752f53c2f8fa6c15e1731fbff8c032f }, // -4088
    Multiplier { upper: 0xd2db7e3203c50eaf2cf1eff9f8cec747, lower: 0xd884bb937f4c3e0230251cc665acd1e4 }, // -4087
    Multiplier { upper: 0xa8af982803040bbf5727f32e60a56c39, lower: 0x7a03c942cc3cfe68268417051e23db1d }, // -4086
    Multiplier { upper: 0x86f2e0200269a2ff78ecc28b80845694, lower: 0x619ca1023cfd98535203459db1b648e4 }, // -4085
    Multiplier { upper: 0xd7eb0033370f6b325b146a78cda08a87, lower: 0x029434d06195c08550053c2f82bd416c }, // -4084
    Multiplier { upper: 0xacbc0028f8d9228eaf438860a4806ed2, lower: 0x687690a6b477cd377337635935643457 }, // -4083
    Multiplier { upper: 0x8a300020c7141ba55902d3808399f241, lower: 0xed2ba6ebc3930a92c292b5e0f7835d12 }, // -4082
    Multiplier { upper: 0xdd1999ce0b535f6ef4d1526738f65069, lower: 0x7b790b12d284ddb79db78967f26bc81d }, // -4081
    Multiplier { upper: 0xb0e147d8090f7f8bf70ddb85c72b7387, lower: 0x95fa6f424203e492e492d453285639b1 }, // -4080
    Multiplier { upper: 0x8d8106466da5ffa32c0b16049f55f606, lower: 0x119525ce9b36507583a8a9dc2044faf4 }, // -4079
    Multiplier { upper: 0xe2680a0a490999051344f00765565670, lower: 0x1c21d6175ebd4d88d2a7762d006e5e53 }, // -4078
    Multiplier { upper: 0xb52008083a6e14040f6a599f844511f3, lower: 0x49b4ab45e5643e070eec5e8a66beb1dc }, // -4077
    Multiplier { upper: 0x90e66cd361f1a99cd921e14c69d0db29, lower: 0x07c3bc37eab69805a589e53b85655b16 }, // -4076
    Multiplier { upper: 0xe7d714856982a8faf5030213dc815ea8, lower: 0x0c6c6059778a8cd5d5a96ec5a23bc4f0 }, // -4075
    Multiplier { upper: 0xb978dd37879bba625d9c01a97d344bb9, lower: 0xa389e6adf93ba3de44878bd14e963727 }, // -4074
    Multiplier { upper: 0x9460b0f9394961e84ae33487975d0961, lower: 0x4fa18557fa961cb1d06c6fdaa544f8ec }, // -4073
    Multiplier { upper: 0xed67818ec20f030d449eba728bc80f02, lower: 0x19026ef32a89c782e713e62aa207f4ad }, // -4072
    Multiplier { upper: 0xbdec67a5680c027103b22ec2096cd8ce, lower: 0x7a6858c2886e393585a984eee8065d57 }, // -4071
    Multiplier { upper: 0x97f052eab9a3352736282568078a470b, lower: 0x9520470206be942ad1546a58b99eb112 }, // -4070
    Multiplier { upper: 0xf31a1e445c38550b89d9d5733f43a4df, lower: 0x5500719cd7975377b553dd5ac29781b7 }, // -4069
    Multiplier { upper: 0xc27b4b69e36044093b14aac29902ea4c, lower: 0x44005ae3dfac42c62aa97de23546015f }, // -4068
    Multiplier { upper: 0x9b95d5ee4f80366dc8dd55687a68bb70, lower: 0x3666af1cb2f0356b555464b4f76b344c }, // -4067
    Multiplier { upper: 0xf8efbcb07f338a4941622240c3dac580, lower: 0x570ab1c784b388abbbba3abb257853ad }, // -4066
    Multiplier { upper: 0xc726308d328fa1d4344e81cd697bd133, lower: 0x78d55b0603c2d3bc962e9562846042f1 }, // -4065
    Multiplier { upper: 0x9f51c070f53fb4a9c3720171212fda8f, lower: 0x93dde26b363576307825444ed04d025a }, // -4064
    Multiplier { upper: 0xfee933e7eecc5442d250024e9b7fc418, lower: 0xec963711f05589e726a206e4807b36f7 }, // -4063
    Multiplier { upper: 0xcbedc31ff23d1035750ccea549330347, lower: 0x23ab5f418d113b1f521b38b6cd2f5f2c }, // -4062
    Multiplier { upper: 0xa3249c198e97402ac40a3eeaa0f59c38, lower: 0xe955e5ce0a742f4c41af60923dbf7f56 }, // -4061
    Multiplier { upper: 0x8283b014721299bbd00832554d9149c7, lower: 0x211184a4d529bf70348c4d41caff9912 }, // -4060
    Multiplier { upper: 0xd0d2b353e9b75c5fb34050887c1ba93e, lower: 0x9b4f3aa1550f98b38746e202de65c1b6 }, // -4059
    Multiplier { upper: 0xa70ef5dcbaf916b2f5cd0d39fce2edcb, lower: 0xaf72954ddda613c2d29f1b357eb7ce2b }, // -4058
    Multiplier { upper: 0x85a5917d6260def59170d761971bf16f, lower: 0xbf8eddd7e484dc9bdbb27c2acbc63e89 }, // -4057
    Multiplier { upper: 0xd5d5b5956a3497ef4f1af235be931be5, lower: 0xff4afc8ca0d4942c92b72d114609fda8 }, // -4056
    Multiplier { upper: 0xab115e1121c3acbf727bf4f7cba8e31e, lower: 0x65d596d6e710768a0ef8f0da9e6e6486 }, // -4055
    Multiplier { upper: 0x88dab1a74e3623cc5b965d930953e8e5, lower: 0x1e4478abec0d2ba1a593f3e21858506c }, // -4054
    Multiplier { upper: 0xdaf782a549f03946f8f095b80eeca7d4, lower: 0xfd3a5aacace1df6908ecb969c08d4d79 }, // -4053
    Multiplier { upper: 0xaf2c68843b269438c726de2cd8bd5310, lower: 0xca951556f0b4b2ba6d8a2dee33a43dfa }, // -4052
    Multiplier { upper: 0x8c2386d02f52102d6c1f1823e09775a7, lower: 0x087744458d5d5bc857a1be5829503195 }, // -4051
    Multiplier { upper: 0xe038d7b37ee9b37be031c0396758bc3e, lower: 0x73f206d5aefbc60d5902ca26a8804f55 }, // -4050
    Multiplier { upper: 0xb360ac8f98baf5fcb35b002dec46fcfe, lower: 0xc3280577bf2fd1a447356e855399d911 }, // -4049
    Multiplier { upper: 0x8f808a0c7a2f2b308f7c0024bd059732, lower: 0x35b99df965bfdae9d29125377614ada7 }, // -4048
    Multiplier { upper: 0xe59a767a5d18451a7f2ccd0794d5beb6, lower: 0xbc5c2ff56f995e42ea81d52589baaf71 }, // -4047
    Multiplier { upper: 0xb7aec52eb0e0374865bd70d2dd77cbc5, lower: 0x637cf32abfade5025534aa846e2ef2c1 }, // -4046
    Multiplier { upper: 0x92f237588d802c39eafdf3dbe45fd637, lower: 0x82ca5c2232f18401ddc3bb9d24f25bce }, // -4045
    Multiplier { upper: 0xeb1d255a7c0046c3119652f96d66238c, lower: 0x0476f9d051826ccfc9392c2ea183c616 }, // -4044
    Multiplier { upper: 0xbc1751153000389c0e11dbfabdeb4fa3, lower: 0x36c594a6a79b8a3fd42dbcf21acfd1ab }, // -4043
    Multiplier { upper: 0x96790daa8cccfa1671a7e32efe55d94f, lower: 0x5f0476ebb9493b664357ca5b48a64156 }, // -4042
    Multiplier { upper: 0xf0c1af7747ae5cf0b5d96b7e63bc8ee5, lower: 0x64d3f17928752bd6d22610920dd6cef0 }, // -4041
    Multiplier { upper: 0xc09af2c5d2f1e3f3c4adef984fca0bea, lower: 0xb70ff460ed2a8978a81e73a80b123f26 }, // -4040
    Multiplier { upper: 0x9a158f04a8c183296a24bfad0ca1a322, lower: 0x2c0cc380bdbba12d534b8fb9a274ff52 }, // -4039
    Multiplier { upper: 0xf688e4d441359ea8a9d465e1adcf6b69, lower: 0xe0146c012f929b7bb878e5f5d0bb321c }, // -4038
    Multiplier { upper: 0xc53a50a9cdc47eed54a9eb1af172bc54, lower: 0xb343899a8c75492fc6c71e5e4095c1b0 }, // -4037
    Multiplier { upper: 0x9dc84087d7d0658aaa2188e25ac23043, lower: 0xc29c6e153d2aa0f3056c184b66de348d }, // -4036
    Multiplier { upper: 0xfc739a72f2e708dddd02749d5e03806c, lower: 0x6a93e3552eaa9b1e6f135a123e305415 }, // -4035
    Multiplier { upper: 0xc9f61528c2526d7e4a685d4ab19c66bd, lower: 0x220fe910f22215b1f275e1a831c04344 }, // -4034
    Multiplier { upper: 0xa191aa8701db8acb6eb9e43bc149ebca, lower: 0x81a6540d8e81aaf4c1f7e7b9c1669c36 }, // -4033
    Multiplier { upper: 0x81415538ce493bd5f22e502fcdd4bca2, lower: 0x0151dcd7a53488c3ce5fec949ab87cf8 }, // -4032
    Multiplier { upper: 0xceceeec14a0ec6231d16e6b2e2edfa9c, lower: 0xcee9615908540e0616ffe0edc45a618d }, // -4031
    Multiplier { upper: 0xa572589aa1a56b4f4a78b88f1bf1954a, lower: 0x3f211aada0433e6b459980be36aeb471 }, // -4030
    Multiplier { upper: 0x845b7a154e1def72a1fa2d3f498e1108, lower: 0x3280e2248035cb89047acd64f88bc38e }, // -4029
    Multiplier { upper: 0xd3c5902216964bea9cc37b9875b01b40, lower: 0x50ce36a0cd22df41a0c47bd4c0df9f49 }, // -4028
    Multiplier { upper: 0xa96ad9b4dedea3221702c946c48ce299, lower: 0xda3e921a3db57f67b3d063109a4c7f6e }, // -4027
    Multiplier { upper: 0x8788ae2a4be54f4e78cf076bd070b547, lower: 0xe1cba814fe2acc52f6404f407b7065f1 }, // -4026
    Multiplier { upper: 0xd8dab043aca2187d8e180bdfb3e78873, lower: 0x02df7354c9de13b7f066e533f8b3d64f }, // -4025
    Multiplier { upper: 0xad7bc03623b4e06471acd64c8fec6d28, lower: 0xcf192910a17e762cc05250f6608fdea5 }, // -4024
    Multiplier { upper: 0x8ac96691b62a4d1d27bd783d3ff05753, lower: 0xd8e0eda6e7985e8a33750d91e6d97eeb }, // -4023
    Multiplier { upper: 0xde0f0a82bd107b61d92f26c8664d5886, lower: 0x27ce490b0c26fda9ebee7c1ca48f3177 }, // -4022
    Multiplier { upper: 0xb1a5a20230d9fc4e4758ebd3850aad38, lower: 0x1fd83a6f3cebfe21898b967d50728df9 }, // -4021
    Multiplier { upper: 0x8e1e1b34f3e196a505e0bca9373bbdc6, lower: 0x7fe02ebf63effe813ad611fdd9f53e61 }, // -4020
    Multiplier { upper: 0xe3635ebb1fcf576e6fcdfaa8585f960a, lower: 0x66337dff064cca685e234ffc8feeca35 }, // -4019
    Multiplier { upper: 0xb5e91895b30c45f1f30b2eed137fab3b, lower: 0x84f5fe659ea3d5204b4f733073256e91 }, // -4018
    Multiplier { upper: 0x918746de28d69e5b28d5bf240f9955c9, lower: 0x372b31eae54fddb36f72c28d28eabeda }, // -4017
    Multiplier { upper: 0xe8d87163748a96f84155fea018f5560e, lower: 0xbeab83116ee62f857f1e04150e446490 }, // -4016
    Multiplier { upper: 0xba46c11c5d3babf9cdde654ce0c444d8, lower: 0x988935a78beb593798e4d010d836b6da }, // -4015
    Multiplier { upper: 0x95056749e42fbcc7d7e51dd71a369d7a, lower: 0x13a0f7b93cbc475fad83d9a7135ef8ae }, // -4014
    Multiplier { upper: 0xee6f0ba96d192e0c8ca1c95829f0fbf6, lower: 0x85ce5928612d3eff7c06290b52318de3 }, // -4013
    Multiplier { upper: 0xbebf3c878a7a8b3d3d4e3aacee5a632b, lower: 0x9e3eadb9e75765993004eda2a827a4b6 }, // -4012
    Multiplier { upper: 0x9898fd393b953c30fdd82ef0beaeb5bc, lower: 0x7e988afb1f791e14266a57b55352ea2b }, // -4011
    Multiplier { upper: 0xf427fb8ec5bb93819626b1813117892d, lower: 0x975a77f8325b635370aa25eeebb7dd12 }, // -4010
    Multiplier { upper: 0xc3532fa56afc760144ebc13427460757, lower: 0xac485ff9c1e2b5dc5a21b7f2562cb0db }, // -4009
    Multiplier { upper: 0x9c428c845596c4cdd0bc9a901f6b3912, lower: 0xf039e66167e8917d14e7c65b7823c0af }, // -4008
    Multiplier { upper: 0xfa041406ef57a1494dfa90e698ab8e84, lower: 0xb38fd7023fda8261bb0c709259d2cde5 }, // -4007
    Multiplier { upper: 0xc8034338bf794dd43e620d8546efa536, lower: 0xf60cac01ccaeceb495a38d41e1757184 }, // -4006
    Multiplier { upper: 0xa0029c2d65faa4a9cb81a46a9f261dc5, lower: 0x91a3bcce3d58a55d4482d767e791279d }, // -4005
    Multiplier { upper: 0x8002168ab7fbb6ee3c67b6bbb284e49e, lower: 0x0e1c970b6446eab1039bdf8652da8617 }, // -4004
    Multiplier { upper: 0xccd02411265f8b16c70c5792b73b0763, lower: 0x49c758123a0b111b38f965a3b7c409bf }, // -4003
    Multiplier { upper: 0xa3d9b6741eb2d5abd270460ef8fc05e9, lower: 0x07d2acdb61a27415c72deae95fd007cc }, // -4002
    Multiplier { upper: 0x831491f67ef577bca859d1a593fcd187, lower: 0x39755715e7b529ab05be55877fd99fd6 }, // -4001
    Multiplier { upper: 0xd1ba8323fe558c610d5c82a286614f3e, lower: 0xc25558230c550f78093088d8cc8f6623 }, // -4000
    Multiplier { upper: 0xa7c868e99844704da44a021b9eb43f65, lower: 0x6844468270440c60075a0713d6d91e83 }, // -3999
    Multiplier { upper: 0x8639ed87ad038d0ae9d4ce7c7ef6991d, lower: 0xed036b9b8d033d199f7b38dcabe0e536 }, // -3998
    Multiplier { upper: 0xd6c315a5e19f481176214a60cb24282f, lower: 0xe19f12927b3861c298c527c77967d522 }, // -3997
    Multiplier { upper: 0xabcf4484b47f6cdac4e76eb3d5b6868c, lower: 0xb47f420ec8f9e7cee09db96c611fddb5 }, // -3996
    Multiplier { upper: 0x89729d36f6cc57156a52bef64492053d, lower: 0x5d329b3f072e530be6e49456b4197e2b }, // -3995
    Multiplier { upper: 0xdbea9524be13be88aa1dfe56d41cd52e, lower: 0xfb842b980b7d51aca4a0ed57868f3044 }, // -3994
    Multiplier { upper: 0xafeeddb6fe763206ee7e6512434a4425, lower: 0x960356133c644156ea1a577938728d03 }, // -3993
    Multiplier { upper: 0x8cbf17c5985e8e6bf1feb741cf6e9cea, lower: 0xde6911a8fd1d011254e1df942d2870cf }, // -3992
    Multiplier { upper: 0xe131bfa28d6417131ccabecfb24a94aa, lower: 0xfd74e90e61c801b6ee363286aea71ae5 }, // -3991
    Multiplier { upper: 0xb427cc820ab678dc170898a6283baa22, lower: 0x645d873eb4a0015f24f8286bbeec1584 }, // -3990
    Multiplier { upper: 0x901fd6ce6ef860b0126d46eb5362ee81, lower: 0xe9e46c322a199ab283f9b9efcbf01137 }, // -3989
    Multiplier { upper: 0xe69957b0b18d67801d7ba4abb89e4a69, lower: 0x763a46b6a9c2911d9ff5f64c79801b8a }, // -3988
    Multiplier { upper: 0xb87aac8d5ad7860017961d562d4b6eba, lower: 0xc4fb6bc5549ba74ae65e5ea394667c6f }, // -3987
    Multiplier { upper: 0x939556d77bdf9e667944e444f1092562, lower: 0x372f896aaa161f6f1eb1e54fa9eb96bf }, // -3986
    Multiplier { upper: 0xec22248bf965ca3d8ed4a06e4e75089d, lower: 0x2518dbdddcf0324b644fd54c43128acb }, // -3985
    Multiplier { upper: 0xbce81d3cc784a1cad8aa19f1d85da07d, lower: 0xb747164b17268ea2b6a6443d02753bd6 }, // -3984
    Multiplier { upper: 0x97201763d2d0816f13bb47f4ad17b397, lower: 0xc5d2783c12853ee8921e9cfd9b90fcab }, // -3983
    Multiplier { upper: 0xf1ccf239514d9be4ec5ed9877b591f59, lower: 0x3c83f39350d531741cfdc7fc2c1b2dde }, // -3982
    Multiplier { upper: 0xc170c1c7743e1650bd18ae05fc474c47, lower: 0x639cc2dc40aa8df67d97d3302348f17f }, // -3981
    Multiplier { upper: 0x9ac09b05f69811da30e08b37fd05d69f, lower: 0x82e3cf169a220b2b97aca8f34f6d8dff }, // -3980
    Multiplier { upper: 0xf79a91a3242682f6b49a785994d62432, lower: 0x6b06182429d011df591441854be27ccb }, // -3979
    Multiplier { upper: 0xc615414f501ecf2bc3aec6ae10ab5028, lower: 0x559e79b687d9a7e5e0dd01376fe863d6 }, // -3978
    Multiplier { upper: 0x9e776772a67f0c2302f2388b40890ced, lower: 0x114b94920647b984b3e400f926538312 }, // -3977
    Multiplier { upper: 0xfd8bd8b770cb469e6b1d2745340e7b14, lower: 0xe878edb67072c26deca0018ea3b8d1b5 }, // -3976
    Multiplier { upper: 0xcad646f92709054b88e41f6a900b95aa, lower: 0x5393f15ec05bcebe56e667a54fc70e2b }, // -3975
    Multiplier { upper: 0xa24505941f3a6aa2d3e9b2bba66faaee, lower: 0xa943277f00497231df1eb9510c9f3e89 }, // -3974
    Multiplier { upper: 0x81d0d1434c2ebbb576548efc85262258, lower: 0x8768ec6599d45b5b18e5610da3b2986d }, // -3973
    Multiplier { upper: 0xcfb4820546b12c558a20e4c73b7036f4, lower: 0x0bdb13d5c2ed5ef827d56815d2b75a48 }, // -3972
    Multiplier { upper: 0xa62a019dd22756aad4e71d6c2f8cf8c3, lower: 0x3caf431168bde59353112011755f7b6d }, // -3971
    Multiplier { upper: 0x84ee67b174ec4555771f4abcf2d72d68, lower: 0xfd59027453cb1e0f75a74cdac44c62be }, // -3970
    Multiplier { upper: 0xd4b0a5e8bb13a2225832112e515848a7, lower: 0xfbc19d86ec783018bc3ee15e06e09dfc }, // -3969
    Multiplier { upper: 0xaa26eb2095a94e81e0280dbea779d3b9, lower: 0x96347e0589f9c013c9cbe77e6be6e4ca }, // -3968
    Multiplier { upper: 0x881f228077baa534b3533e321f94a961, lower: 0x44f6cb37a19499a96e3cb931efebea3b }, // -3967
    Multiplier { upper: 0xd9cb6a6725f76ebab885305032877568, lower: 0x6e57ab8c35ba8f757d2df51cb313105f }, // -3966
    Multiplier { upper: 0xae3c551f5192befbc6d0f3735b9f9120, lower: 0x584622d691620c5dfdbe5db08f42737f }, // -3965
    Multiplier { upper: 0x8b63774c414232630573f5f5e2e60db3, lower: 0x79d1b578744e704b316517c0729b8f99 }, // -3964
    Multiplier { upper: 0xdf058bad3536b704d586565637d67c52, lower: 0x5c82bbf3ed4a4d451bd4f2cd842c18f4 }, // -3963
    Multiplier { upper: 0xb26ad6242a922c03de0511de9311fd0e, lower: 0xb068965cbdd50a9dafdd8f0ad023472a }, // -3962
    Multiplier { upper: 0x8ebbde835541bccfe4d0db1875a7fda5, lower: 0x59ed4516fe44087e264ad8d5734f6c22 }, // -3961
    Multiplier { upper: 0xe45fca6bbb9c614ca14e2b5a55d995d5, lower: 0x5caed4f196d340c9d6de27bbebb2469c }, // -3960
    Multiplier { upper: 0xb6b308562fb04dd6e771bc4844ae1177, lower: 0x7d58aa5adf0f6707df181fc9895b6bb0 }, // -3959
    Multiplier { upper: 0x9228d3782626a4abec5afd069d580df9, lower: 0x3113bb7be5a5ec064c134ca13aaf895a }, // -3958
    Multiplier { upper: 0xe9daebf3703dd44646f7fb3dc88ce328, lower: 0x4e85f8c63c3cacd6e01ee101f77f4229 }, // -3957
    Multiplier { upper: 0xbb15898f8cfe436b6bf995cb06d71c20, lower: 0x3ed193d1c9ca23df19b24d9b2c65ce87 }, // -3956
    Multiplier { upper: 0x95aad472d731cf89232e116f38ac1680, lower: 0x3241430e3b081cb27af50ae289eb0b9f }, // -3955
    Multiplier { upper: 0xef77ba51584fb2750516824b8de02400, lower: 0x50686b49f80cfab72b21ab040fde78ff }, // -3954
    Multiplier { upper: 0xbf92fb7446a6285d9dab9b6fa4b35000, lower: 0x40538907f9a3fbc5bc1aef36731860cc }, // -3953
    Multiplier { upper: 0x994262c36bb8204ae48949261d5c4000, lower: 0x3376073994832fd16348bf5ec279e70a }, // -3952
    Multiplier { upper: 0xf537046bdf8d0077d40edb702efa0000, lower: 0x525671f5ba6b7fb56ba798979d8fd80f }, // -3951
    Multiplier { upper: 0xc42c03897fa4005fdcd8af8cf2619999, lower: 0xdb785b2afb8932f78952e0794ad979a6 }, // -3950
    Multiplier { upper: 0x9cf002d4661ccd197d7a260a5b8147ae, lower: 0x492d15bbfc6dc25fa10f19faa2479485 }, // -3949
    Multiplier { upper: 0xfb199e20a3614828c8c37010926872b0, lower: 0x7514ef932d7c6a329b4b5cc436d8eda1 }, // -3948
    Multiplier { upper: 0xc8e14b4d4f8106870702c00d41ed288d, lower: 0x2a77260f5796bb5baf6f7d69c57a57b4 }, // -3947
    Multiplier { upper: 0xa0b43c3dd9340538d26899a434bdba0a, lower: 0x885f51a5dfabc91625f2cabb0461dfc3 }, // -3946
    Multiplier { upper: 0x809030317a90042d75207ae9c3cafb3b, lower: 0xa04c41517fbca0de84c23bc8d04e4c9c }, // -3945
    Multiplier { upper: 0xcdb3804f2a8006af21cd9176061191f9, lower: 0x007a021bff9434973ad05fa7b3b07a93 }, // -3944
    Multiplier { upper: 0xa48f99d8eeccd225b4a4745e6b414194, lower: 0x00619b4999435d45c8a6b2ec8fc06210 }, // -3943
    Multiplier { upper: 0x83a614ad8bd70e849083904b89010143, lower: 0x33814907adcf7dd16d5228bd3fcd1b40 }, // -3942
    Multiplier { upper: 0xd2a35448dfbe7da0e738e6df419b3538, lower: 0x526874d91618c94f1550412ecc7b5ecc }, // -3941
    Multiplier { upper: 0xa882a9d3e631fe1a5293ebe5ce15c42d, lower: 0x0eb9f71411ad6dd8ddd9cdbf09fc4bd7 }, // -3940
    Multiplier { upper: 0x86ceee431e8e64e1dba98984a4de368a, lower: 0x722e5f4341578b13e4ae3e326e636fdf }, // -3939
    Multiplier { upper: 0xd7b17d3830e3d49c92a8dc076e305743, lower: 0xe9e3cb9ecef2781fd449fd1d7d6be631 }, // -3938
    Multiplier { upper: 0xac8dfdc68d83107d4220b005f1c045cf, lower: 0xee4fd618a58ec67fdd07fdb131231e8e }, // -3937
    Multiplier { upper: 0x8a0b316ba468d9fdce808cd18e336b0c, lower: 0xbea644e0847238664a6ccaf4274f4ba5 }, // -3936
    Multiplier { upper: 0xdcdeb579070e2996173414827d1f11ad, lower: 0xfdd6d49a6d838d70771477ed0bb212a1 }, // -3935
    Multiplier { upper: 0xb0b22ac738d82144df5cdd3530e5a7be, lower: 0x64abdd48579c7126c5a9f98a6fc1a881 }, // -3934
    Multiplier { upper: 0x8d5b556c2d79b4371917175dc0b7b965, lower: 0x1d564aa04616c0ebd154c7a1f301539b }, // -3933
    Multiplier { upper: 0xe22bbbe048c2b9f1c1be8bc9345928a1, lower: 0xc88a1100702467dfb554729cb8021f5d }, // -3932
    Multiplier { upper: 0xb4efc9803a35618e34986fd429e0ed4e, lower: 0x3a080d99f35053195ddd287d6001b2b1 }, // -3931
    Multiplier { upper: 0x90bfd46694f7813e9079f3102180bdd8, lower: 0x2e6cd7ae5c40427ab17db9fde667c227 }, // -3930
    Multiplier { upper: 0xe79953d754bf3530e72984e69c012fc0, lower: 0x4a47bf7d6066d0c44f2f8ffca3d936a5 }, // -3929
    Multiplier { upper: 0xb9477645dd65c4271f546a5216675966, lower: 0xa1d2ff978052409d0c260cca1cadc551 }, // -3928
    Multiplier { upper: 0x94392b6b17849cec1910550e7852adeb, lower: 0xb4a8cc793375007da351a3d4e3be3774 }, // -3927
    Multiplier { upper: 0xed28457825a0fb135b4d54e3f3b77cac, lower: 0x544147285254cd95d21c39549f96bf20 }, // -3926
    Multiplier { upper: 0xbdb9d12ceae72f42af7110b65c92ca23, lower: 0x769a9f537510a477db49c776e6123280 }, // -3925
    Multiplier { upper: 0x97c7da8a5585bf688c5a73c516dbd4e9, lower: 0x2baee5dc5da6e9f97c3b05f8b80e8ecd }, // -3924
    Multiplier { upper: 0xf2d95daa226f98a746f71fa1be2c87db, lower: 0x7917d62d62a4a98f2d2b3cc1267db148 }, // -3923
    Multiplier { upper: 0xc2477e21b52613b905927fb498239fe2, lower: 0xc74644f11bb6ee0c24229700eb97c106 }, // -3922
    Multiplier { upper: 0x9b6c64e7c41e762d9e0ecc9079b61982, lower: 0x390503f4162bf1a3501bac00bc796738 }, // -3921
    Multiplier { upper: 0xf8ad6e3fa030bd15c9b1474d8f89c269, lower: 0xf4d4d3202379829ee692accdfa5bd85a }, // -3920
    Multiplier { upper: 0xc6f124ffb35a30de3af4390ad93b01ee, lower: 0x5d770f4ce92e0218b875570b2eafe048 }, // -3919
    Multiplier { upper: 0x9f2750cc8f7b5a4b625cfa6f142f34be, lower: 0xb12c0c3d875801ad605ddf3c2559803a }, // -3918
    Multiplier { upper: 0xfea54e1418c55d456a2e5d7e86b1edfd, lower: 0xe84679fc0bc002af009631f9d55c005c }, // -3917
    Multiplier { upper: 0xcbb771a9ad6ab10454f1e465388e57fe, lower: 0x536b94c9a30002259a11c194aab0004a }, // -3916
    Multiplier { upper: 0xa2f927baf1222736aa5b1d1dc6d84665, lower: 0x0f8943d48266681e14db0143bbc0003b }, // -3915
    Multiplier { upper: 0x8260ec958db4ec2bbb7c174b0579d1ea, lower: 0x72d436439b85201810af34362fccccfc }, // -3914
    Multiplier { upper: 0xd09b14227c54ad12c593587808c2e977, lower: 0x1e2056d2926e99c01ab1ed237fae14c6 }, // -3913
    Multiplier { upper: 0xa6e27681fd108a756adc46c66d68bac5, lower: 0xb1b378a8752547cce227f0e932f1aa38 }, // -3912
    Multiplier { upper: 0x8581f867fda6d52abbe36bd1f120956a, lower: 0xf48f93b9f751063d81b98d875bf4882d }, // -3911
    Multiplier { upper: 0xd59cc0a662a488445fd2461cb500ef11, lower: 0x874c1f8ff21b3d2f35f5af3ef9874048 }, // -3910
    Multiplier { upper: 0xaae3cd51e883a036b30e9e7d5d9a58da, lower: 0xd2a34c732815ca8c2b2af298c79f66a0 }, // -3909
    Multiplier { upper: 0x88b63ddb20694cf88f3ee53117aead7b, lower: 0xdbb5d6c28677d53cef558ee09fb2b880 }, // -3908
    Multiplier { upper: 0xdabd2fc500a87b274b97d51b59177bf9, lower: 0x5f89579da3f2eec7e555b16765eac0cd }, // -3907
    Multiplier { upper: 0xaefdbfd0cd5395b909464415e0df9661, lower: 0x193aac7e1cc2589feaaaf452b7ef00a4 }, // -3906
    Multiplier { upper: 0x8bfe330d710faafa6dd1d01180b2deb4, lower: 0x142ef064e3cead4cbbbbf6a893259a1d }, // -3905
    Multiplier { upper: 0xdffd1e7be8191190afb619b59ab7cab9, lower: 0xb9e4b3d49fb1154792c657741ea2902e }, // -3904
    Multiplier { upper: 0xb330e52fece0dada262b47c47bc63bc7, lower: 0xc7ea2976e6274439423845f67ee87358 }, // -3903
    Multiplier { upper: 0x8f5a50f323e7157b51bc3969fc9e9639, lower: 0x6cbb545f1e85d02dce936b2b98b9f5e0 }, // -3902
    Multiplier { upper: 0xe55d4e51d30b55921c605bdcc764238f, lower: 0x145eed64fda2e6afb0ebdeac278fefcd }, // -3901
    Multiplier { upper: 0xb77dd84175a2aadb49e6afe3d2b682d8, lower: 0xdd18bdea6482522627231889b93ff30a }, // -3900
    Multiplier { upper: 0x92cb1367914eef15d4b88cb6422b9be0, lower: 0xb0e097eeb6cea81e85b5ad3afa998f3b }, // -3899
    Multiplier { upper: 0xeade85728217e4efbac0e1239d129301, lower: 0x1b00f3178ae44030d5ef7b9190f5b1f8 }, // -3898
    Multiplier { upper: 0xbbe5378ece7983f2fbcd80e94a754267, lower: 0x48cd8f4608b699c0ab25fc7473f7c194 }, // -3897
    Multiplier { upper: 0x9650f93f0b94698f2fd79a543b9101ec, lower: 0x3a3e0c3806f87b0088eb305d29930143 }, // -3896
    Multiplier { upper: 0xf0818ecb45ba427eb2f29086c5b4cfe0, lower: 0x5d30138cd7f3f800db11e6fb75b80204 }, // -3895
    Multiplier { upper: 0xc067a56f6afb68655bf5406bd15d7319, lower: 0xe426760a465cc66715a7ebfc5e2cce6a }, // -3894
    Multiplier { upper: 0x99ec84592262b9eaaff766bca77df5ae, lower: 0x501ec4d50517051f448656637e8a3ebb }, // -3893
    Multiplier { upper: 0xf6473a2837045caab325712dd8c98916, lower: 0xe697a154d4f1a1cba0d6f09f30dd312b }, // -3892
    Multiplier { upper: 0xc505c8202c037d555c1df424ad6e0745, lower: 0x85461aaa43f4816fb3df26e5c0b0f423 }, // -3891
    Multiplier { upper: 0x9d9e39b356693111167e5cea245805d1, lower: 0x376b4888365d34595cb285849a2729b6 }, // -3890
    Multiplier { upper: 0xfc305c5223db81b4f0ca2e436d59a2e8, lower: 0x58aba74056fb86f5611da26dc371dc55 }, // -3889
    Multiplier { upper: 0xc9c049db4fe2ce2a5a3b5835f1148253, lower: 0x7a22ec3378c938c44db14ebe35f4b044 }, // -3888
    Multiplier { upper: 0xa166a17c3fe8a4eeae95e02b27439b75, lower: 0xfb4f235c60a0fa36a48dd8982b2a269d }, // -3887
    Multiplier { upper: 0x811ee7969986ea588bab19bc1f69492b, lower: 0x2f7282b04d4d94f883a4ad4688ee854b }, // -3886
    Multiplier { upper: 0xce97d8f0f5a4aa2745de8f93657541de, lower: 0xb250d11a1548ee5a6c3aaed7417da211 }, // -3885
    Multiplier { upper: 0xa54647272aea21b904b20c75eac434b2, lower: 0x2840a748110725152362257901314e74 }, // -3884
    Multiplier { upper: 0x843838ec2254e7c736f4d6c4bbd02a28, lower: 0x2033b9067405b7441c4e8460cdc10b90 }, // -3883
    Multiplier { upper: 0xd38d27e036ee3fa524baf13ac619dd0d, lower: 0x0052c1a3ecd5f20693b0d3ce1601ac19 }, // -3882
    Multiplier { upper: 0xa93db9802bf1cc841d625a956b47e40a, lower: 0x66a89ae98a44c19edc8d763e7801567b }, // -3881
    Multiplier { upper: 0x87649466898e3d367de8487789065008, lower: 0x52207bee0837014be3a45e98600111fc }, // -3880
    Multiplier { upper: 0xd8a0ed70dc16c8572fda0d8c0e70800d, lower: 0x5033f97cd9f19bac9f6d64270001b660 }, // -3879
    Multiplier { upper: 0xad4d8ac0b01239df597b3e09a526ccd7, lower: 0x735cc79714c14956e5f11cec00015eb3 }, // -3878
    Multiplier { upper: 0x8aa46f008cdb617f7ac8fe6e1db8a3df, lower: 0x8f7d6c78dd676ddf1e5a7d89999ab229 }, // -3877
    Multiplier { upper: 0xddd3e4cdae2bcf325e0e63e362c10632, lower: 0x7f2f13f495724964fd5d95a8f5c45041 }, // -3876
    Multiplier { upper: 0xb17650a48b563f5b7e71e982b5673828, lower: 0x65bf432a11283ab73117aaed9169d9ce }, // -3875
    Multiplier { upper: 0x8df84083a2ab65e2cb8e5468911f6020, lower: 0x5165cf54da86955f5a79558adabb14a5 }, // -3874
    Multiplier { upper: 0xe326cd9f6aabd637ac16ed741b65669a, lower: 0x1bd61887c40a889890c22277c45e876e }, // -3873
    Multiplier { upper: 0xb5b8a47f8889782c89abf129af845214, lower: 0xe311ad3969a206e073ce81f969e53925 }, // -3872
    Multiplier { upper: 0x916083993a079356d4898dbaf2d041aa, lower: 0x4f415761214e6be6c30b9b2dee50fa84 }, // -3871
    Multiplier { upper: 0xe89a6c285cd8ebbe20dc15f7eae6cf76, lower: 0xe535589b687d7971381291e316e7f739 }, // -3870
    Multiplier { upper: 0xba1523537d7a5631b3e344c6558572c5, lower: 0x842aad4920646127600edb1c12532c2e }, // -3869
    Multiplier { upper: 0x94ddb5dc6461de8e29829d6b779df56a, lower: 0xd022243a80504db919a57c16750f568b }, // -3868
    Multiplier { upper: 0xee2f8960a09c9749dc042f1258fcbbde, lower: 0x19d039f733b3af8e8f6f2cf0bb4bbdab }, // -3867
    Multiplier { upper: 0xbe8c6de6e6e3ac3b1669bf41e0ca2fe4, lower: 0xe17361928fc2f2d872bf5726fc3c97bc }, // -3866
    Multiplier { upper: 0x987057ebebe95695ab87cc34b3d4f31d, lower: 0x81291adba6358f138eff78ebfcfd4630 }, // -3865
    Multiplier { upper: 0xf3e6f313130ef0ef78d946bab954b82f, lower: 0x350e915f7055b1b8e4cbf4acc7fba380 }, // -3864
    Multiplier { upper: 0xc31f28dc0f3f2725fa476bc89443c68c, lower: 0x2a720de5f377c160b709908a39961c66 }, // -3863
    Multiplier { upper: 0x9c18ed7cd8ff5284c8392306dd03053c, lower: 0xeec1a4b7f5f96780926e0d3b6144e385 }, // -3862
    Multiplier { upper: 0xf9c17bfaf4cbb73ad9f504d7c804d52e, lower: 0x4acf6df32328a59a83e3485f0207d26f }, // -3861
    Multiplier { upper: 0xc7cdfcc8c3d62c2f14c403dfd33710f1, lower: 0xd572be5c1c20847b9cb5d37f34d30ebf }, // -3860
    Multiplier { upper: 0x9fd7fd6d69782358dd699cb30f5f40c1, lower: 0x778efeb0168069fc7d5e42cc2a427232 }, // -3859
    Multiplier { upper: 0xffbffbe24259d227c8a8fab81898679b, lower: 0xf27e644cf0cd7660c896d146aa03e9ea }, // -3858
    Multiplier { upper: 0xcc99964e9b7b0e863a20c89346e052e3, lower: 0x28651d0a5a3df84d6d45743888032188 }, // -3857
    Multiplier { upper: 0xa3ae11d87c627204fb4d6d429f19dbe8, lower: 0xed1db0d514fe603df1045cfa0668e7a0 }, // -3856
    Multiplier { upper: 0x82f1a7e06381f4d0c90abdcee5ae4987, lower: 0x2417c0aa7731e697f4037d94d1ed861a }, // -3855
    Multiplier { upper: 0xd182a633d26987b474ddfc7e3c4a0f3e, lower: 0xa0260110beb63dbfecd26287b648d68f }, // -3854
    Multiplier { upper: 0xa79bb8297521395d2a4b3064fd080c32, lower: 0x19b800da322b64998a41e86c91d3ded9 }, // -3853
    Multiplier { upper: 0x86162cedf74dc77dbb6f59ea64067028, lower: 0x149333e1c1bc507ad50186bd41764be1 }, // -3852
    Multiplier { upper: 0xd689e17cbee2d8c92be55caa39a3e6a6, lower: 0x8751ec9c692d4d9154cf3dfb9bf07968 }, // -3851
    Multiplier { upper: 0xaba1813098b57a3a89844a21c7b6521e, lower: 0xd2a7f07d20f10adaaa3f64c9498d2ded }, // -3850
    Multiplier { upper: 0x894e00f3ad5dfb62079d081b062b74e5, lower: 0x755326ca80c0d57bbb65ea3aa13dbe57 }, // -3849
    Multiplier { upper: 0xdbb00185e22ff89cd8fb402b3d1254a2, lower: 0x5551d7aa679aef2c5f0976c4352f96f2 }, // -3848
    Multiplier { upper: 0xafc00137e826607d7a6299bc30db76e8, lower: 0x444179551faf25bd18d45f035dbfabf5 }, // -3847
    Multiplier { upper: 0x8c999a93201eb397951bae302715f8b9, lower: 0xd0346110e625b7ca7a437f35e499565d }, // -3846
    Multiplier { upper: 0xe0f5c41e99cab8f2882c49e6a4eff45c, lower: 0x8053ce81703c5943f6d26523075bbd62 }, // -3845
    Multiplier { upper: 0xb3f7d0187b0893f539bd07ebb7265d16, lower: 0xcd0fd8678cfd14365f0eb74f3916311b }, // -3844
    Multiplier { upper: 0x8ff97346c8d3a990fafd9fefc5b84a78, lower: 0xa40cad1fa3fda9c518d892a5c744f416 }, // -3843
    Multiplier { upper: 0xe65beba47485dc1b2b2f664c6f8d43f4, lower: 0x39ade1cc3995dc6e8e2751093ed4b9bc }, // -3842
    Multiplier { upper: 0xb84989505d37e348ef591ea38c710329, lower: 0xc7be4e3cfade49f20b52a73a98aa2e30 }, // -3841
    Multiplier { upper: 0x936e07737dc64f6d8c474bb609f40287, lower: 0xd2fea4fd957ea18e6f75529546ee8b5a }, // -3840
    Multiplier { upper: 0xebe33f1f2fa3b248e07212bcdcb99da6, lower: 0x1e643b2f559768e3e58884220b17455c }, // -3839
    Multiplier { upper: 0xbcb5cc18f2e95b6d805b4230b0947e1e, lower: 0x7eb695bf77ac53e9846d3681a279044a }, // -3838
    Multiplier { upper: 0x96f7d67a5bede2be004901c08d439818, lower: 0x655ede32c623765469f0f867b52d9d08 }, // -3837
    Multiplier { upper: 0xf18c8a5d5fe3046333a802cdaed28cf3, lower: 0xd56496b7a36bf0870fe7f3d921e294d9 }, // -3836
    Multiplier { upper: 0xc13d3b7de64f36b5c2eccf0af2420a5c, lower: 0xaab6def94f898d38d9865cadb4b543e1 }, // -3835
    Multiplier { upper: 0x9a9762cb1ea5c55e358a3f3bf501a1e3, lower: 0xbbc57f2dd93ad760ae0516f15d5dcfe8 }, // -3834
    Multiplier { upper: 0xf7589e11caa2d56388dd31f988029c9f, lower: 0x92d598495b91589ab00824b5622fb30c }, // -3833
    Multiplier { upper: 0xc5e07e74a21bdde93a4a8e61399bb07f, lower: 0xa8aae03aafa77a1559a01d5de82628d6 }, // -3832
    Multiplier { upper: 0x9e4d31f6e8164b20fb6ed84dc7afc066, lower: 0x2088b362261f94dde14ce44b201e8712 }, // -3831
    Multiplier { upper: 0xfd484ff17356de9b2be48d493f7f9a3d, lower: 0x00dab89d09cc21630214a07833640b50 }, // -3830
    Multiplier { upper: 0xcaa03ff45c457ee28983a43a9932e1ca, lower: 0x6715607da1701ab59b43b3935c50090d }, // -3829
    Multiplier { upper: 0xa219ccc37d046582079c83621428b4a1, lower: 0xec1119fe1ac0155e15cfc2dc49d9a0d7 }, // -3828
    Multiplier { upper: 0x81ae3d6930d05134d2e39c4e7686f6e7, lower: 0xf00dae64e233444b44a6357d07e14d79 }, // -3827
    Multiplier { upper: 0xcf7d2f0eb48081ee1e38fa17240b24a6, lower: 0x4ce2b0a169eba0786dd6bbfb3fcee25b }, // -3826
    Multiplier { upper: 0xa5fdbf3ef6cd34be7e93fb45b66f5085, lower: 0x0a4ef3b454bc806057defcc8ffd8b515 }, // -3825
    Multiplier { upper: 0x84caff65923dc3cb9876629e2b8c406a, lower: 0x6ea58fc376fd3380464bfd6d997a2a78 }, // -3824
    Multiplier { upper: 0xd477ff08e9fc6c78f3f09dc9df46cd77, lower: 0x176f4c6bf1951f33a3acc8af5bf6aa59 }, // -3823
    Multiplier { upper: 0xa9f998d3ee6389fa5cc07e3b1905712c, lower: 0x12bf70565addb28fb623d3bf7cc55514 }, // -3822
    Multiplier { upper: 0x87fae0a98b82d4c84a33982f47378dbc, lower: 0xdbcc59deaf17c20c91b642ff97044410 }, // -3821
    Multiplier { upper: 0xd9916775ac0487a6dd1f59e53ebf492e, lower: 0x2c7a29644b59367a82bd37ff5806d34d }, // -3820
    Multiplier { upper: 0xae0dec5e2336d2ebe41914b76565d424, lower: 0xf061bab6a2adc52ecefdc665e00575d7 }, // -3819
    Multiplier { upper: 0x8b3e56b1b5c57589834743c5eab7dcea, lower: 0x59e7c8921bbe3758a597d1eb199df7df }, // -3818
    Multiplier { upper: 0xdeca244f893bef426ba5393caabfc7dd, lower: 0x5ca60db692c9f2276f594fde8f632632 }, // -3817
    Multiplier { upper: 0xb23b503fa0fcbf68561dc763bbcc9fe4, lower: 0x4a1e715edbd4c1b925e10cb20c4f51c1 }, // -3816
    Multiplier { upper: 0x8e95d9cc80ca32b9de7e391c963d4cb6, lower: 0xa1b1f44be3109afa84b40a2809d90e34 }, // -3815
    Multiplier { upper: 0xe422f6140143845c97305b60f0621457, lower: 0x691cba1304e75e5da12010400fc1b054 }, // -3814
    Multiplier { upper: 0xb6825e76676936b078f37c4d8d1b4379, lower: 0x20e3c80f371f7eb14db340333fce26a9 }, // -3813
    Multiplier { upper: 0x9201e52b85edc559fa5c63713daf692d, lower: 0xb3e96cd8f8e5fef43e290028ffd81eee }, // -3812
    Multiplier { upper: 0xe99ca1df3cafa2299093d24ec918a849, lower: 0x1fdbe15b27d664b9fd0e66a7ffc0317d }, // -3811
    Multiplier { upper: 0xbae3b4b296f2e821407641d8a0e086a0, lower: 0xe6498115b9785094ca71ebb999668dfd }, // -3810
    Multiplier { upper: 0x9582f6f5458f201a99f834ad4d806bb3, lower: 0xeb6e00de2df9da10a1f4bc947ab87198 }, // -3809
    Multiplier { upper: 0xef37f1886f4b6690f659ede2159a45ec, lower: 0xabe33496aff629b4365460ed91271c25 }, // -3808
    Multiplier { upper: 0xbf5ff46d25d5eba72b7b24b4de1504bd, lower: 0x564f5d455991baf691dd1a57a7527ceb }, // -3807
    Multiplier { upper: 0x991990575177efb8ef95b6f71810d097, lower: 0x783f7dd1147495920e4a7b7952a863ef }, // -3806
    Multiplier { upper: 0xf4f5b3bee8bfe5f4b28924be8ce7b425, lower: 0x8d3262e820ba88e9b0772bf5510d6cb2 }, // -3805
    Multiplier { upper: 0xc3f7c2ff209984c3c207509870b95cea, lower: 0xd75b82534d62072159f8eff7740abd5b }, // -3804
    Multiplier { upper: 0x9cc63598e6e13703019f73ad26fab0bb, lower: 0xdf7c6842a44e6c1aae60bff929a23116 }, // -3803
    Multiplier { upper: 0xfad6bc27d7cebe6b35cbec483e5de792, lower: 0xff2d739dd3b0acf77d67998ea90381bc }, // -3802
    Multiplier { upper: 0xc8abc9b9797231ef5e3cbd06984b1fa8, lower: 0xcc245c7e42f3bd92cab947a55402ce30 }, // -3801
    Multiplier { upper: 0xa0896e2dfac1c18c4b63ca6bad08e620, lower: 0xa35049fe9bf631423bc76c84433571c0 }, // -3800
    Multiplier { upper: 0x806df1be62349ad6a2b63b89573a51b3, lower: 0xb5d9d4cbaff827682fd2bd369c2ac167 }, // -3799
    Multiplier { upper: 0xcd7cb5fd69edc48a9df05f42252a1c52, lower: 0xbc8fbadf7ff372404c8461f0f9de023e }, // -3798
    Multiplier { upper: 0xa463c4cabb249d3bb18d1901b754e375, lower: 0x63a62f19332928337069e7f3fb1801cb }, // -3797
    Multiplier { upper: 0x838303d56283b0fc8e0a7a67c5dd82c4, lower: 0x4fb825adc287535c59ee532995acce3c }, // -3796
    Multiplier { upper: 0xd26b39556a6c4e60e343f70c6fc8d13a, lower: 0x1926a2af9da5522d5cb0850f55e149f9 }, // -3795
    Multiplier { upper: 0xa855c7778856a51a4f699270596d742e, lower: 0x7a854ef2e48441bde3c06a72ab1aa194 }, // -3794
    Multiplier { upper: 0x86ab05f939deea7b72badb8d14579025, lower: 0x2ed10bf5839d0164b633885bbc154e10 }, // -3793
    Multiplier { upper: 0xd778098ec2fe43f8b7915f48208c19d5, lower: 0x17b4dfef38fb356df05273c5f9bbb01a }, // -3792
    Multiplier { upper: 0xac6007a568cb6993c60de5d34d3ce177, lower: 0x462a4cbf60c8f78b26a85c9e6162f348 }, // -3791
    Multiplier { upper: 0x89e66c8453d5ee0fd1a4b7dc3dca4df9, lower: 0x04eea3cc4d6d92d5b886b07eb44f2907 }, // -3790
    Multiplier { upper: 0xdca3e0d3b95649b2e9078c9396107cc1, lower: 0xa17dd2e07be28489273de731207ea80a }, // -3789
    Multiplier { upper: 0xb0831a42faab6e28ba6c707611a6ca34, lower: 0x81317580631b9d3a85cb1f5a8065533b }, // -3788
    Multiplier { upper: 0x8d35ae9bfbbc582095238d2b41523b5d, lower: 0x34279133827c7dc86b08e5e200510f63 }, // -3787
    Multiplier { upper: 0xe1ef7dc65f93c03421d27b786883922e, lower: 0xb9d8e8526a60c940ab416fd00081b237 }, // -3786
    Multiplier { upper: 0xb4bf97d1e60fccf681752f9386cfa825, lower: 0x617a537521e70766ef678ca666ce282c }, // -3785
    Multiplier { upper: 0x9099464184d970c5345dbfa938a6201d, lower: 0xe7950f90e7ec05ebf2b93d51ebd82024 }, // -3784
    Multiplier { upper: 0xe75ba39c07c24e0853c932a85aa36696, lower: 0x3f54e5b4a6466fdfeac1fbb6462699d2 }, // -3783
    Multiplier { upper: 0xb9161c7cd301d806a96dc2204882b878, lower: 0x32aa515d51d1f319889b2fc504ebae42 }, // -3782
    Multiplier { upper: 0x9411b063dc01799eedf16819d39bc6c6, lower: 0x8eeea77ddb0e5c146d48f30403efbe9b }, // -3781
    Multiplier { upper: 0xece91a3960025c317cb5735c85c60ad7, lower: 0x4b177262f816f9ba4874b8066cb2ca92 }, // -3780
    Multiplier { upper: 0xbd87482de66849c130912916d16b3bdf, lower: 0x6f45f51bf9abfafb6d2a2cd1f08f0875 }, // -3779
    Multiplier { upper: 0x979f6cf185203b00f3a754124122964c, lower: 0x5904c41661566262bdbb570e5a0c06c4 }, // -3778
    Multiplier { upper: 0xf298ae4f3b66c4ce52a55350683756e0, lower: 0x8e6e068a355703d12f9224e3c3467139 }, // -3777
    Multiplier { upper: 0xc213bea5c91f03d8421ddc40535f78b3, lower: 0xa524d2082aac030dbfa81d83029ec0fb }, // -3776
    Multiplier { upper: 0x9b42feeb074c03136817e366a9192d5c, lower: 0x841d74d3555668d7cc867e02687f00c9 }, // -3775
    Multiplier { upper: 0xf86b31780bacd1b8a68c9f0aa8284894, lower: 0x069587b8888a4159473d966a40cb3474 }, // -3774
    Multiplier { upper: 0xc6bc27933c8a4160853d4c088686a076, lower: 0x6baad2fa06d5011438fe11ee9a3c29f6 }, // -3773
    Multiplier { upper: 0x9efcec75ca08344d37643cd39ed219f8, lower: 0x562242619f10cda9c731a7f214fcee5f }, // -3772
    Multiplier { upper: 0xfe617a56100d207b8bd39485cae9c326, lower: 0xf036d09c31b47c42d84f731cee617d64 }, // -3771
    Multiplier { upper: 0xcb812eab400a8062d642dd37d587cf52, lower: 0x59c573b027c3969be03f8f4a584dfdea }, // -3770
    Multiplier { upper: 0xa2cdbeef666ecd1bde9be42caad30c41, lower: 0xe16ac2f35302dee319cc72a1e03e64bb }, // -3769
    Multiplier { upper: 0x823e32591ebf0a7cb2165023bbdc09ce, lower: 0x4def025c4268b24f47d6c21b19cb83c9 }, // -3768
    Multiplier { upper: 0xd06383c1cacb43fab68a19d2c62cdc7d, lower: 0x497e6a2d370dea1872f13691c2df3941 }, // -3767
    Multiplier { upper: 0xa6b603016f09032ef86e7b0f04f0b064, lower: 0x3acb88242c0b21ad28c0f8749be5c768 }, // -3766
    Multiplier { upper: 0x855e68cdf26d9c25938b95a59d8d59e9, lower: 0xc8a2d350233c1af0ed672d2a16516c53 }, // -3765
    Multiplier { upper: 0xd563dae31d7c2d08ec128908fc155ca9, lower: 0x4104854d052cf7e7e23eaea9bd4f13b8 }, // -3764
    Multiplier { upper: 0xaab648b5b13024072342073a63444a21, lower: 0x00d06aa40423f9864e988bbafdd8dc93 }, // -3763
    Multiplier { upper: 0x8891d3c48dc01cd2829b38fb829d081a, lower: 0x670d221cd01cc79ea546d62f317a4a0f }, // -3762
    Multiplier { upper: 0xda82ec6daf99c7b7375ec1926a94d9c3, lower: 0xd81503614cfad8fdd53e237eb590767f }, // -3761
    Multiplier { upper: 0xaecf238af2e16c9292b234752210ae36, lower: 0x467735e770c8ad97ddcb4f9891405ecc }, // -3760
    Multiplier { upper: 0x8bd8e93bf58123a8755b5d2a81a6f1c5, lower: 0x052c2b1f8d6d57acb16f72e074337f0a }, // -3759
    Multiplier { upper: 0xdfc1752cbc01d2a7222bc84402a4b608, lower: 0x0846ab65af1559144f18b7cd86b8cb42 }, // -3758
    Multiplier { upper: 0xb3012a8a3001755281bca0366883c4d3, lower: 0x39d222b7bf444743727a2ca46bc70902 }, // -3757
    Multiplier { upper: 0x8f3422082667910ece30802b86cfd0a8, lower: 0xfb0e822c99036c35f52e8a1d2305a0ce }, // -3756
    Multiplier { upper: 0xe520367370a5b4e47d1a66ac0ae61aa7, lower: 0xf81736adc19f1389884a769504d5ce17 }, // -3755
    Multiplier { upper: 0xb74cf85c5a1e2a5064151ef008b81553, lower: 0x2cdf5ef167b27607a03b9210d0ab0b45 }, // -3754
    Multiplier { upper: 0x92a3f9e37b4b550d1cddb259a0934442, lower: 0x8a4c4bf452f52b394cfc74da4088d5d1 }, // -3753
    Multiplier { upper: 0xea9ff638c54554e1c7c91d5c341ed39d, lower: 0xaa13acba1e5511f547fa54906741561b }, // -3752
    Multiplier { upper: 0xbbb32b609dd110b49fd4177cf67f0fb1, lower: 0x54dc8a2e7eaa74c43995107385cdde7c }, // -3751
    Multiplier { upper: 0x9628ef807e40da2a19767930c53272f4, lower: 0x43e3a1becbbb909cfadda6c2d1717eca }, // -3750
    Multiplier { upper: 0xf0417f33fd3490435bf0c1e7a1ea5186, lower: 0xd305cf97ac5f4dc7f7c90ad14f1bfe10 }, // -3749
    Multiplier { upper: 0xc03465c330f6d9cf7cc09b1fb4bb746b, lower: 0xdc04a612f04c3e3993073bdaa5affe73 }, // -3748
    Multiplier { upper: 0x99c3849c272be172ca33af4c9095f6bc, lower: 0xb003b80f26a364fadc05c97bb7bffec2 }, // -3747
    Multiplier { upper: 0xf605a0f9d846358476b9187a80eff12d, lower: 0xe66c59b1d76bd4c4933c7592bf99979d }, // -3746
    Multiplier { upper: 0xc4d14d94ad04f79d2bc746c867265a8b, lower: 0x1ebd148e45efdd6a0f63914232e14618 }, // -3745
    Multiplier { upper: 0x9d743e108a6a5fb0efd29f06b8eb7ba2, lower: 0x7efdaa0b6b264abb3f82da9b5be76b46 }, // -3744
    Multiplier { upper: 0xfbed301a7710991b1950fe7127df2c37, lower: 0x3195dcdf11d6ddf8659e2a922ca57870 }, // -3743
    Multiplier { upper: 0xc98a8ce1f8da1415adda65275318f02c, lower: 0x27ab1718db124b2d1e18220e8a1df9f3 }, // -3742
    Multiplier { upper: 0xa13ba3e7fa48101157e1ea85dc13f356, lower: 0x862278e0af41d5bdb1ace80ba1b194c3 }, // -3741
    Multiplier { upper: 0x80fc831ffb6cd9a77981886b16765c45, lower: 0x381b93e6f29b11648e23ecd61af47702 }, // -3740
    Multiplier { upper: 0xce60d1ccc57af5d8c268da44f0bd606e, lower: 0xc02c1fd7ea91b56db0397af02b20be6a }, // -3739
    Multiplier { upper: 0xa51a41709dfbf7e09b871503f3cab38b, lower: 0xccf01979887491248cfac8c022809855 }, // -3738
    Multiplier { upper: 0x84150126e4c9931a1605aa698fd55c6f, lower: 0xd7267ac7a05d40ea0a623a334ecd46aa }, // -3737
    Multiplier { upper: 0xd354cea4a14284f689a2aa427fbbc719, lower: 0x583d913f66fb9b10109d29ebb1487110 }, // -3736
    Multiplier { upper: 0xa910a550810203f86e1bbb68662fd27a, lower: 0xacfe0dcc5262e273407dbb22f439f40d }, // -3735
    Multiplier { upper: 0x874084406734cff9f1afc92051bfdb95, lower: 0x5731a4a3751be85c3397c8e8c361900a }, // -3734
    Multiplier { upper: 0xd8673a00a5214cc31c4c750082cc9288, lower: 0x8b82a105882ca6f9ec260e41389c19aa }, // -3733
    Multiplier { upper: 0xad1f619a1db43d68e3705d9a023d4206, lower: 0xd6021a6ad356ebfb2351a500fa167aef }, // -3732
    Multiplier { upper: 0x8a7f814817c36453e926b14801ca9b38, lower: 0xab34e1ef0f78bcc8e90e1d9a61ab958c }, // -3731
    Multiplier { upper: 0xdd98ced9bf9f06eca83de8733610f85a, lower: 0xab87cfe4e58dfadb0e7cfc2a35df55ac }, // -3730
    Multiplier { upper: 0xb1470be16618d256ecfe538f5e73f9e2, lower: 0x22d30cb71e0b2f15a530c9bb5e4c448a }, // -3729
    Multiplier { upper: 0x8dd26fe784e0a8458a650fa5e52994b4, lower: 0xe8a8d6f8e4d5bf44842707c9183d03a1 }, // -3728
    Multiplier { upper: 0xe2ea4ca5a16773a2770819096ea8edee, lower: 0x410e24c16e22cba0d371a60e8d2e6c35 }, // -3727
    Multiplier { upper: 0xb5883d514dec5c81f8d3473abeed8b25, lower: 0x00d81d678b4f094d75f484d870f1f02b }, // -3726
    Multiplier { upper: 0x9139caa77189e39b2d75d295658ad5b7, lower: 0x33e01786090c07712b2a03e05a5b2689 }, // -3725
    Multiplier { upper: 0xe85c77724f4305c5158950ef08de22be, lower: 0xb9668c09a8133f1b78433966f6f83da7 }, // -3724
    Multiplier { upper: 0xb9e392c1d9026b04113aa725a0b1b565, lower: 0x611ed66e200f65af9368fab8c5936486 }, // -3723
    Multiplier { upper: 0x94b60f017a68559cda955284808e2ab7, lower: 0x80e5785819a5eaf2dc53fbc70475ea05 }, // -3722
    Multiplier { upper: 0xedf018025d73bc2e2a8884073416aabf, lower: 0x34a25a268f6fde5160865fa4d3efdcd4 }, // -3721
    Multiplier { upper: 0xbe59acceb12963582206d005c3455565, lower: 0xc3b514eba5f318411a051950a98cb0aa }, // -3720
    Multiplier { upper: 0x9847bd7227544f79b4d240049c377784, lower: 0x9c90dd89518f469a7b374773bad6f3bb }, // -3719
    Multiplier { upper: 0xf3a5fbe9d886e58f87b6ccd42d258c07, lower: 0x60e7c8dbb5b20a90c5253f1f9157ec5e }, // -3718
    Multiplier { upper: 0xc2eb2fee46d2513f9fc570a9bdb7a339, lower: 0x1a5307162af4d5409db765b2daacbd18 }, // -3717
    Multiplier { upper: 0x9bef598b6bdb7432e6378d5497c61c2d, lower: 0xaea8d278225d7766e492b7c2488a30e0 }, // -3716
    Multiplier { upper: 0xf97ef5abdfc586b7d6bf4887593cf9e2, lower: 0xb10e1d8d03c8bf0b07512603a7438167 }, // -3715
    Multiplier { upper: 0xc798c4897fd138931232a06c4763fb1b, lower: 0xc0d817a40306ff3c05da84cfb902cdec }, // -3714
    Multiplier { upper: 0x9fad6a0799742d4274f54d236c4ffc16, lower: 0x33e012e99c0598fcd17b9d72fa68a4bd }, // -3713
    Multiplier { upper: 0xff7bdcd8f586aed0bb2215057a199356, lower: 0xb96684a8f9a28e614f2c2f1e5d743ac7 }, // -3712
    Multiplier { upper: 0xcc631713f79ef24095b4dd9dfb47a912, lower: 0x2deb9d53fae871e77289bf4b7df6956c }, // -3711
    Multiplier { upper: 0xa38278dcc618c1cd4490b14b2f6c8741, lower: 0xbe56177662538e52c207cc3c64c54457 }, // -3710
    Multiplier { upper: 0x82cec71704e09b0a9d408dd5bf8a05ce, lower: 0x31de792b81dc71dbce6ca36383d10379 }, // -3709
    Multiplier { upper: 0xd14ad824d49a91aa95341622cc100949, lower: 0xe963f5126960b62c7d7a9f059fb4d25b }, // -3708
    Multiplier { upper: 0xa76f1350aa1541554429ab4f09a66dd4, lower: 0xbab65da8544d5e89fdfbb26ae62a41e2 }, // -3707
    Multiplier { upper: 0x85f275da21aa9aaa9cee22a5a151f176, lower: 0xfbc517b9dd0ab207fe62f52251bb67e8 }, // -3706
    Multiplier { upper: 0xd650bc9035ddc4442e49d109021cb58b, lower: 0x2c6e8c5c94dde9a663d18836e92bd973 }, // -3705
    Multiplier { upper: 0xab73ca0cf7e49d03583b0da0ce7d5e08, lower: 0xf058704a10b187b84fdad35f20efe129 }, // -3704
    Multiplier { upper: 0x89296e70c6507d9c4695a480a5311807, lower: 0x26ad26a1a6f46c93731575e5b3f31a87 }, // -3703
    Multiplier { upper: 0xdb757d813d4d95c6d755d401084e8cd8, lower: 0x3de1d7690b20adb8b822563c531e90d8 }, // -3702
    Multiplier { upper: 0xaf913134310ade38ac44a99a6d0ba3e0, lower: 0x31817920d5b3be2d601b7830427eda47 }, // -3701
    Multiplier { upper: 0x8c74275cf408b1c6f036ee1524094fe6, lower: 0x8e012db3de2964f119af9359cecbe1d2 }, // -3700
    Multiplier { upper: 0xe0b9d894b9a782d7e6be49bb6cdbb30a, lower: 0x7cceaf8630423b1b5c4c1ef617ac9c83 }, // -3699
    Multiplier { upper: 0xb3c7e076faec68acb8983afc571628d5, lower: 0x30a55938269b627c49d67f2b4623b069 }, // -3698
    Multiplier { upper: 0x8fd319f8c8bd208a2d469596ac11ba44, lower: 0x26eaadc685491b96a17865bc381c8d21 }, // -3697
    Multiplier { upper: 0xe61e8ff47461cda9e20a88f1134f906d, lower: 0x0b11160a6edb5f5768c0a2c6c02dae9b }, // -3696
    Multiplier { upper: 0xb8187329f6b4a487e8086d8da90c738a, lower: 0x6f40de6ebf15e5df8700823899be2549 }, // -3695
    Multiplier { upper: 0x9346c287f890839fecd38ad7ba705c6e, lower: 0xbf67185898de517f9f339b607afe843a }, // -3694
    Multiplier { upper: 0xeba46a73274d9f6647b8de25f71a2d7d, lower: 0xff0b5a275afd4f3298529233f7fda05d }, // -3693
    Multiplier { upper: 0xbc83885c1f714c51d2fa4b51927b5797, lower: 0xff3c481f7bfdd8f546a874f65ffe19e4 }, // -3692
    Multiplier { upper: 0x96cfa049b2c109db0f2ea2a7a862ac79, lower: 0x98fd067f9664ad91055390c5199814b7 }, // -3691
    Multiplier { upper: 0xf14c33a91e01a95e7eb1043f73d113f5, lower: 0xc194d7328a3aaf4e6eec1ad4f5c02124 }, // -3690
    Multiplier { upper: 0xc109c2edb19aede53227369929740ff7, lower: 0xce10ac286e95590b8bf015772b001a83 }, // -3689
    Multiplier { upper: 0x9a6e358af47bf184281f5ee0edf6732c, lower: 0xa4da23538baaada2d659aac5bc001536 }, // -3688
    Multiplier { upper: 0xf716bc11872cb5a040323167e323eb7a, lower: 0xa15d0552791115d156f5de092ccceebc }, // -3687
    Multiplier { upper: 0xc5abc9a79f56f7b3668e8decb5b655fb, lower: 0xb44a6aa860da77daabf7e4d423d72564 }, // -3686
    Multiplier { upper: 0x9e2307b94c4592f5eba53e56f7c51196, lower: 0x29d522204d7b9315565fea434fdf511d }, // -3685
    Multiplier { upper: 0xfd04d9287a08eb2312a1fd57f2d4e8f0, lower: 0x42ee9d007bf8eb5556ffdd387fcbb4fa }, // -3684
    Multiplier { upper: 0xca6a475394d3ef4f421b311328aa53f3, lower: 0x68bee400632d891112664a93996fc3fb }, // -3683
    Multiplier { upper: 0xa1ee9f7610a98c3f6815c0dc20884329, lower: 0x2098b666b5be0740db85087614596996 }, // -3682
    Multiplier { upper: 0x818bb2c4da213cff8677cd7ce6d368ed, lower: 0xb3ad5eb89164d29a493739f8104787ab }, // -3681
    Multiplier { upper: 0xcf45ead490352e65a3f2e2617152417c, lower: 0x52aefdf41bd4842a0ebec326807272ab }, // -3680
    Multiplier { upper: 0xa5d188aa0cf758514ff581e78ddb6796, lower: 0xa88bfe5ce31069bb3eff0285338ec223 }, // -3679
    Multiplier { upper: 0x84a7a0880a5f79daa65e01860b15ec78, lower: 0x86d665171c0d216298cc0204293f01b6 }, // -3678
    Multiplier { upper: 0xd43f67401098c2f7709668d6782313f4, lower: 0x0af0a1be9348356a8e13366d0ecb35ef }, // -3677
    Multiplier { upper: 0xa9cc5299a6e09bf926deba452ce8dcc3, lower: 0x3bf3b49875d35deed80f5ebda56f5e59 }, // -3676
    Multiplier { upper: 0x87d6a87aebe6e32db8b22e9dbd871702, lower: 0x965c9079f7dc4b2579a5e56484591847 }, // -3675
    Multiplier { upper: 0xd95773f7dfd7d1e2c11d1762c8d824d0, lower: 0xf0941a5cbfc6dea25c3ca23a6d5b5a0b }, // -3674
    Multiplier { upper: 0xaddf8ff97fdfdb1bcdb0df823a4683da, lower: 0x5a101516ffd24bb51696e82ebde2ae70 }, // -3673
    Multiplier { upper: 0x8b193ffaccb315afd7c0b2ce95053648, lower: 0x480cddabffdb6fc41212535897e88b8d }, // -3672
    Multiplier { upper: 0xde8eccc47ab822b2f2cdeae421a1f073, lower: 0xa67afc46662be6068350855a8ca745ad }, // -3671
    Multiplier { upper: 0xb20bd70395601bc25bd7ef1ce7b4c05c, lower: 0x852f303851bcb80535da04487085d158 }, // -3670
    Multiplier { upper: 0x8e6fdf361119afceafdff27d862a337d, lower: 0x3758f3604163c66a917b36a05a04a779 }, // -3669
    Multiplier { upper: 0xe3e631f01b5c4c7de6331d95a376b8c8, lower: 0x588e52339bd2d710e8c52433c33aa58f }, // -3668
    Multiplier { upper: 0xb651c18ce2b03d3184f5b14482c560a0, lower: 0x46d841c2e30f1273ed6a835c9c2eead9 }, // -3667
    Multiplier { upper: 0x91db013d8226975ad0c48dd0689de6e6, lower: 0x9f1367cf1c0c0ec3245535e3b02588ad }, // -3666
    Multiplier { upper: 0xe95e686269d758914e07494d742fd7d7, lower: 0x64ebd94b60134ad1d3bb896c4d08daaf }, // -3665
    Multiplier { upper: 0xbab1ed1b87df7a0dd805d43df68cacac, lower: 0x50bcadd5e675d574a962d456a4071559 }, // -3664
    Multiplier { upper: 0x955b2416064c61a4acd17697f8708a23, lower: 0x73ca24ab1ec4aac3bab576abb66c1114 }, // -3663
    Multiplier { upper: 0xeef839bcd6e09c3aae1bf0f3271a769f, lower: 0x1fa9d444fe07779f9122577923e01b53 }, // -3662
    Multiplier { upper: 0xbf2cfafd78b3b02ef1aff3f5b8e1f87f, lower: 0x4c87dd03fe6c5fb2da81df941cb3490f }, // -3661
    Multiplier { upper: 0x98f0c8cac6f6268bf48cc32afa4e6065, lower: 0xd6d3173665237fc24867e61016f5d40c }, // -3660
    Multiplier { upper: 0xf4b47477a4bd0a7987479eab2a1700a2, lower: 0xf151bebd6e9f32d073d97019be562013 }, // -3659
    Multiplier { upper: 0xc3c3905fb6fda1fad29fb222881266e8, lower: 0xc10e3231254c28a6c31459ae31de800f }, // -3658
    Multiplier { upper: 0x9c9c737fc597b4c8a87fc1b539a85253, lower: 0xcda4f4f41dd686ebcf437af1c17eccd9 }, // -3657
    Multiplier { upper: 0xfa93ebffa28c547440cc6921f5da1d52, lower: 0xe2a187ecfc8a71794b9f2b1c68cae15b }, // -3656
    Multiplier { upper: 0xc87656661ba376c36709edb4c4ae7ddb, lower: 0xe881398a63a1f461094c227d20a24de3 }, // -3655
    Multiplier { upper: 0xa05eab84e2e92bcf85a18af703becb16, lower: 0x539a946eb61b29e73aa34eca8081d7e9 }, // -3654
    Multiplier { upper: 0x804bbc6a4f20efd937b46f2c02ff08de, lower: 0xa94876bef815bb1f621c3f0866ce4654 }, // -3653
    Multiplier { upper: 0xcd45fa43b1ce4c8ebf8718466b31a7ca, lower: 0xa873f1318cef91cbd02d31a70ae3a3b9 }, // -3652
    Multiplier { upper: 0xa437fb695b0b707232d279d1ef5aeca2, lower: 0x205cc0f470bfa7d6402427b8d582e961 }, // -3651
    Multiplier { upper: 0x835ffc5448d5f38e8f0ec7db25e256e8, lower: 0x19e3cd905a32ecab668352fa4468bab4 }, // -3650
    Multiplier { upper: 0xd2332d53a7bcb8e41817a62b6fd08b0c, lower: 0xf63948e6f6b7e1123d9eeb2a070df786 }, // -3649
    Multiplier { upper: 0xa828f10fb963c71ce012eb55f30d3c0a, lower: 0x5e943a525ef980db647f228805a4c605 }, // -3648
    Multiplier { upper: 0x8687273fc78305b0b34255de5c0a966e, lower: 0xb2102ea84bfacd7c5065b5399e1d6b37 }, // -3647
    Multiplier { upper: 0xd73ea532d8d1a2b45203bc96f9aa8a4a, lower: 0xb6804aa6dff7af2d4d6f885c302f11f2 }, // -3646
    Multiplier { upper: 0xac321dc2470e1bc374cfca1261553b6e, lower: 0xf866a21f1992f28aa45939e359bf418e }, // -3645
    Multiplier { upper: 0x89c1b16838d81635f70ca1a84dddc925, lower: 0x93854e7f47a8c208837a94b5e165ce0c }, // -3644
    Multiplier { upper: 0xdc691bd9f48cf056581435da162fa83c, lower: 0x1f3bb0cba5dad00d9f2a878968a2e345 }, // -3643
    Multiplier { upper: 0xb0541647f6d726ab79a9c4ae78262030, lower: 0x18fc8d6fb7e2400ae5bb9fa120824f6b }, // -3642
    Multiplier { upper: 0x8d1011d32bdf5222c7bb03bec684e68c, lower: 0xe0ca0abfc64e99a25162e61a80683f89 }, // -3641
    Multiplier { upper: 0xe1b34fb846321d0472c4d2cad73b0a7b, lower: 0x014344660a175c36e89e3cf733d9ff41 }, // -3640
    Multiplier { upper: 0xb48f72f9d1c1b0d05bd0a8a245c8d52f, lower: 0x3435d051a1ac49c586e4fd928fe19901 }, // -3639
    Multiplier { upper: 0x9072c261749af3d9e30d53b504a0aa8c, lower: 0x29c4a6a7b489d49e0583fe0ed9814734 }, // -3638
    Multiplier { upper: 0xe71e03cf20f7ec8fd1aeec54d4344413, lower: 0x7607710c540fba966f39967e28ced853 }, // -3637
    Multiplier { upper: 0xb8e4cfd8e72cbd3fdaf256aa435d0342, lower: 0xc4d2c0d6a9a62edebf614531ba3f1376 }, // -3636
    Multiplier { upper: 0x93ea3fe0b8f0976648c1deee9c4a6902, lower: 0x370f00abbaeb58b232b4375afb65a92b }, // -3635
    Multiplier { upper: 0xeca9ffcdf4b42570746964b0fa10a803, lower: 0x8b4b3445f7def45051205891923c41de }, // -3634
    Multiplier { upper: 0xbd54cca4c3c35126c38783c0c80d5336, lower: 0x0908f69e5fe5904040e6ad4141c9ce4b }, // -3633
    Multiplier { upper: 0x97770a1d69690db89c6c696706710f5e, lower: 0x6da0c54b7fead9cd00b88a9a9b07d83c }, // -3632
    Multiplier { upper: 0xf258102f0f0e7c5a93e0a8a4d71b4bca, lower: 0x49013babffde29480127442a91a626c7 }, // -3631
    Multiplier { upper: 0xc1e00cf27271fd15431a2083df49096e, lower: 0xa0cdc956664b54399a85d0220e1e856c }, // -3630
    Multiplier { upper: 0x9b19a3f5285b30ddcf481a0319073abe, lower: 0xe70b077851d5dcfae204a681a4e5378a }, // -3629
    Multiplier { upper: 0xf82906550d5eb49618735cd1c1a52acb, lower: 0x0b44d8c082efc7f7d00770cf6e3b8c0f }, // -3628
    Multiplier { upper: 0xc68738440ab22a11ad29170e3484223c, lower: 0x0903e09a02596cc64005f3d924fc700c }, // -3627
    Multiplier { upper: 0x9ed29369a22821a7bdba78d82a034e96, lower: 0x6d9cb3ae68478a383337f64750c9f33d }, // -3626
    Multiplier { upper: 0xfe1db8a90373690c62c3f48d10054a8a, lower: 0x48fab9170d3f438d1ebff0721adcb861 }, // -3625
    Multiplier { upper: 0xcb4afa20cf8f873d1bcff6d740043ba1, lower: 0xd3fbc745a4329c70e56659f4e24a2d1b }, // -3624
    Multiplier { upper: 0xa2a261b3d93f9f64163ff8ac3336961b, lower: 0x0ffc9f6ae9c216c0b78514c3e83b5749 }, // -3623
    Multiplier { upper: 0x821b815cadcc7f8344fffa235c2bab48, lower: 0xd996e5ef21681233c604109cb9c912a1 }, // -3622
    Multiplier { upper: 0xd02c022de2e0cc053b3329d22d12aba7, lower: 0xc28b097e9bd9b6b93cd34dc78fa81dce }, // -3621
    Multiplier { upper: 0xa6899b57e8b3d66a95c287db574222ec, lower: 0x9ba26dfee314922dca42a49fa62017d8 }, // -3620
    Multiplier { upper: 0x853ae2acba297855449b9fe2ac34e8bd, lower: 0x494ebe658276db57d5021d4c84e6797a }, // -3619
    Multiplier { upper: 0xd52b044790425a22075f663779ee412e, lower: 0xdbb130a26a57c55954d02ee0d4a3f58f }, // -3618
    Multiplier { upper: 0xaa88d039403514e805e5eb5f94be9a8b, lower: 0xe2f426e855130447770cf24d76e9913f }, // -3617
    Multiplier { upper: 0x886d7361002a772004b7ef7faa32153c, lower: 0xb5901f20440f369f9270c1d792547433 }, // -3616
    Multiplier { upper: 0xda48b89b33772500078cb265dd1ceec7, lower: 0x88e69833a0185765b71acfbf50872051 }, // -3615
    Multiplier { upper: 0xaea093af5c5f50ccd2d6f51e4a7d8bd2, lower: 0xd3ebacf619ad12b7c5af0c990d38e6a7 }, // -3614
    Multiplier { upper: 0x8bb3a95916b2a70a424590e508646fdb, lower: 0xdcbc8a5e7af0dbc637bf3d473dc71eec }, // -3613
    Multiplier { upper: 0xdf85dbc1bdeaa4dd36d5b4a1a707195f, lower: 0xc79410972b1af93d25fec871fc71cb13 }, // -3612
    Multiplier { upper: 0xb2d17c9afe5550b0f8aaf6e7b8d27ab3, lower: 0x06100d45bc159430eb3239f4c9f4a276 }, // -3611
    Multiplier { upper: 0x8f0dfd48cb7773c0c6ef2bec93db955c, lower: 0x04d9a437c9aadcf3ef5b6190a19081f8 }, // -3610
    Multiplier { upper: 0xe4e32edadf2586013e4b797a862c222c, lower: 0xd48f6d260f77c7ecb22bcf4dcf4d9cc0 }, // -3609
    Multiplier { upper: 0xb71c257be5b79e6765092dfb9e89b4f0, lower: 0xaa0c5751a5f96cbd5b563f7172a47d66 }, // -3608
    Multiplier { upper: 0x927ceac98492e51f840757fc7ed490c0, lower: 0x8809df7484c78a3115de99278ee9fdec }, // -3607
    Multiplier { upper: 0xea6177a8d41e3b65a00bbffa64874e00, lower: 0xd9a965873ad8dd1b5630f50c17dcc979 }, // -3606
    Multiplier { upper: 0xbb812c8710182f8480096661ea05d800, lower: 0xae211e05c8ad7daf78272a7013170794 }, // -3605
    Multiplier { upper: 0x9600f06c0ce0260399a11eb4bb37e000, lower: 0x8b4db19e3a24648c601f552675ac0610 }, // -3604
    Multiplier { upper: 0xf00180ace166a338f5ce978791f30000, lower: 0xdee2b5c9f6a0a0e099cbbb70bc467019 }, // -3603
    Multiplier { upper: 0xc00133bd811ee8fa5e3edf9fa7f5999a, lower: 0x4be8916e5ee6e71a14a2fc5a303859ae }, // -3602
    Multiplier { upper: 0x999a8fcacdb253fb7e98b2e61ff7ae15, lower: 0x0986dabeb252527b43b596ae8cf9e158 }, // -3601
    Multiplier { upper: 0xf5c419447c50865f30f451703325e354, lower: 0xdc0af79783b6ea5ed2bc244a7b29688c }, // -3600
    Multiplier { upper: 0xc49ce10396a6d1e5c0c37459c284b5dd, lower: 0x7cd592df9c925518a896836ec8eded3d }, // -3599
    Multiplier { upper: 0x9d4a4d9c788574b7cd6929e1686a2b17, lower: 0x9711424c7d41ddad53ab9c58a0be5764 }, // -3598
    Multiplier { upper: 0xfbaa15c7273bedf2e241dc9bda437825, lower: 0xbe8203ad95362f7bb91293c101308bd3 }, // -3597
    Multiplier { upper: 0xc954de38ec2ff18f1b67e3afe1cf9351, lower: 0x6534cfbe10f825fc940edc9a675a0976 }, // -3596
    Multiplier { upper: 0xa110b1c723598e0c15ecb6264e3fa90d, lower: 0xea90a631a72ceb3076724a151f7b3ac5 }, // -3595
    Multiplier { upper: 0x80da27d282ae0b3cde56f81ea4ffba71, lower: 0x8873b827b8f0bc26c5283b44192f6237 }, // -3594
    Multiplier { upper: 0xce29d950d116786163be59caa1992a4f, lower: 0x40b926a5f4b4603e08405ed35b7f038b }, // -3593
    Multiplier { upper: 0xa4ee4773da78604de96514a21ae0eea5, lower: 0xcd60ebb7f6f6b364d366b242af98cfa3 }, // -3592
    Multiplier { upper: 0x83f1d2c3152d19d7edea76e81580beeb, lower: 0x0ab3efc65f2bc2b70f855b688c7a3fb5 }, // -3591
    Multiplier { upper: 0xd31c846b5514f626497724a688cdfe44, lower: 0xddecb2d6feac6abe7f3bc57413f6cc55 }, // -3590
    Multiplier { upper: 0xa8e39d22aa772b51d45f50853a3e6503, lower: 0xe4bd5bdf3223889865c96ac3432bd6ab }, // -3589
    Multiplier { upper: 0x871c7db5552c22a7dd190d3761cb8403, lower: 0x1d64497f5b4fa079eb07889c35bcabbc }, // -3588
    Multiplier { upper: 0xd82d95eeeead043fc82815256945a004, lower: 0xfbd3a8cbc54c33f644d8da93892ddf93 }, // -3587
    Multiplier { upper: 0xacf144bf255736996cecddb7876ae66a, lower: 0x630fba3c9dd68ff83713e20fa0f17fa9 }, // -3586
    Multiplier { upper: 0x8a5a9d65b778f87abd8a4af9392251ee, lower: 0xb5a62e96e4aba6602c0fe80c80c132ed }, // -3585
    Multiplier { upper: 0xdd5dc8a2bf27f3f795aa118ec1d08317, lower: 0x8909e424a112a3cd134ca67a679b84af }, // -3584
    Multiplier { upper: 0xb117d3b565b98ff944880e0bce4068df, lower: 0xa0d4b683b40ee970dc3d51fb861603bf }, // -3583
    Multiplier { upper: 0x8daca95deafad99436d33e6fd8338719, lower: 0x4d76f8695cd8bac0b0310e62d1ab3633 }, // -3582
    Multiplier { upper: 0xe2addbc977f7c286be1eca4c8d1f3e8e, lower: 0xe257f3dbc7c12acde6b4e3d14f7856b7 }, // -3581
    Multiplier { upper: 0xb557e307932c9b9efe7f083d3db29872, lower: 0x4eacc31639675571855d830dd92d122c }, // -3580
    Multiplier { upper: 0x91131c060f56e2e59865a030fe2879f5, lower: 0x0bbd68de9452aac1377e02717a8a74f0 }, // -3579
    Multiplier { upper: 0xe81e933ce557d16f5a3c338196a72988, lower: 0x12c8a7ca86eaaacebf3003e8c410bb1a }, // -3578
    Multiplier { upper: 0xb9b20f63eaaca78c483029347885bad3, lower: 0x423a1fd538bbbbd898f33653d00d627b }, // -3577
    Multiplier { upper: 0x948e72b65556ec7039c020f6c6d16242, lower: 0x9b61b310fa2fc97a13f5c50fd9a44ec9 }, // -3576
    Multiplier { upper: 0xedb0b78a2224ad805c669b24714f039d, lower: 0xc5691e81904c75901fefa1b2f5d3b141 }, // -3575
    Multiplier { upper: 0xbe26f93b4e83be0049ebaf505aa59c7e, lower: 0x37874b9ad9d6c4734cbfb48f2b0fc101 }, // -3574
    Multiplier { upper: 0x981f2dc90b9c98003b22f2a6aeeae398, lower: 0x2c6c3c7be1789d290a32f6d8ef3fcd9a }, // -3573
    Multiplier { upper: 0xf365160e78fa8ccd2b6b1dd77e449f59, lower: 0xe0ad2d93025a950e76b7f15b186615c4 }, // -3572
    Multiplier { upper: 0xc2b744d860c870a422bc17df9836e5e1, lower: 0x808a8adc01e210d85ef98de279eb449d }, // -3571
    Multiplier { upper: 0x9bc5d0ad1a39f3b68230131946925181, lower: 0x33a208b00181a7137f2e0b1b94bc36e4 }, // -3570
    Multiplier { upper: 0xf93c8114f6c31f8a69e684f53db6e8ce, lower: 0xb90341199c02a4ebfeb011c5bac6be39 }, // -3569
    Multiplier { upper: 0xc7639a772bcf4c6ebb1ed0c4315f20a5, lower: 0x60cf6747b0021d89988cdb04956bcb61 }, // -3568
    Multiplier { upper: 0x9f82e1f8efd909f22f4bda368de5b3b7, lower: 0x80a5ec39599b4ad47a0a48d077896f81 }, // -3567
    Multiplier { upper: 0xff37cff4b2f4dcb6b212f6bdafd5ec58, lower: 0xcdd646c228f877ba5cdd414d8c0f18ce }, // -3566
    Multiplier { upper: 0xcc2ca65d5bf716f88e7592315977f047, lower: 0x0b11d234ed9392fb7d7dcdd7a33f470b }, // -3565
    Multiplier { upper: 0xa356eb7de32c126071f7a8277ac659d2, lower: 0x6f4174f724760f2f9797d7dfb5cc38d6 }, // -3564
    Multiplier { upper: 0x82abef97e8f00eb38e5fb9b92f0514a8, lower: 0x59012a5f505e728c7946464c91702d78 }, // -3563
    Multiplier { upper: 0xd11318f30e4ce4527d65f5f51808210d, lower: 0x5b35109880971dad8ed6d6e0e8b37bf3 }, // -3562
    Multiplier { upper: 0xa7427a5c0b70b6a864519190e00680d7, lower: 0x7c2a73ad33ac17be0bdf124d86f5fcc2 }, // -3561
    Multiplier { upper: 0x85cec849a2c0922050414140b3386712, lower: 0xc9bb8fbdc2f012fe6fe5a83e05919702 }, // -3560
    Multiplier { upper: 0xd617a6dc379a8366e6cececdeb8d71b7, lower: 0xa92c192f9e4ceb30b3090d3008e8f19c }, // -3559
    Multiplier { upper: 0xab461f1692e202b8b8a5723e560ac15f, lower: 0xba89adbfb1d7228d5c073dc00720c14a }, // -3558
    Multiplier { upper: 0x8904e5aba8b4cefa2d512831de6f0119, lower: 0x6207be32f4ac1ba4499f64999f4d676f }, // -3557
    Multiplier { upper: 0xdb3b0912a787b1904881d9e963e4ce8f, lower: 0x033f96b7ede02c3a0f656dc2987bd8b1 }, // -3556
    Multiplier { upper: 0xaf626da8860627a6a067e187831d720c, lower: 0x0299455ff1802361a5eabe3546c97a27 }, // -3555
    Multiplier { upper: 0x8c4ebe206b381fb880531ad2cf4ac1a3, lower: 0x35476ab32799b5e7b7eefe91056dfb52 }, // -3554
    Multiplier { upper: 0xe07dfd00ab8cff8d9a1e91514baacf6b, lower: 0x88724451d8f5efd9264b30e808aff884 }, // -3553
    Multiplier { upper: 0xb397fd9a22d732d7ae7edaa76fbbd922, lower: 0xd38e9d0e472b264751d5c0b9a08cc6d0 }, // -3552
    Multiplier { upper: 0x8faccae1b578f57958657bb9262fe0e8, lower: 0xa93ee40b6c228505db1166fae6d70573 }, // -3551
    Multiplier { upper: 0xe5e1449c558e558ef3d592c1d6b30174, lower: 0x41fe39abe0373b3c91b57191715808b8 }, // -3550
    Multiplier { upper: 0xb7e76a16aad844725caadbce455c0129, lower: 0xce64faefe69295ca0e2ac1412779a093 }, // -3549
    Multiplier { upper: 0x931f881222469d284a224971d1166754, lower: 0xa51d958cb87544a1a4ef0100ec614d43 }, // -3548
    Multiplier { upper: 0xeb65a6836a0a950d436a0f1c81bd7221, lower: 0x082f55adf3eed435d4b19b34ad687b9e }, // -3547
    Multiplier { upper: 0xbc515202bb3baa7102bb3f4a01645b4d, lower: 0xa025de24c325769176f47c2a24539618 }, // -3546
    Multiplier { upper: 0x96a774cefc2fbb8d9bc8ff6e67837c3e, lower: 0x19b7e4ea35b7920df8c396881d0fab46 }, // -3545
    Multiplier { upper: 0xf10bee17f9e5f8e292db324a3f38c6c9, lower: 0xc2bfd4a9ef8c1ce3279f57402e7f7870 }, // -3544
    Multiplier { upper: 0xc0d658132e5193e8757c283b65c7056e, lower: 0x356643bb2609b0b5b94c45ccf1ff938d }, // -3543
    Multiplier { upper: 0x9a4513428b7476539130202f849f378b, lower: 0x5deb696284d48d5e2dd69e3d8e660fa4 }, // -3542
    Multiplier { upper: 0xf6d4eb9dabed8a1f4eb366b26dcb8c12, lower: 0x2fdf0f0407ba7bc9e2f0fd2f4a3ce5d3 }, // -3541
    Multiplier { upper: 0xc57722e4898ad4e5d88f855b8b093cdb, lower: 0x597f3f366c952fd4b58d97590830b7dc }, // -3540
    Multiplier { upper: 0x9df8e8b6d46f10b7e072d11608d430af, lower: 0x7acc3291f0775976f7a47914068d5fe4 }, // -3539
    Multiplier { upper: 0xfcc17457ba4b4df300b7b4f00e204de5, lower: 0x9146b74fe7255bf18c3a5b533daeffd2 }, // -3538
    Multiplier { upper: 0xca345d12fb6f718f33c62a59a4e6a4b7, lower: 0xa76bc5d985b77cc13cfb7c4297bf330f }, // -3537
    Multiplier { upper: 0xa1c37da8c925f4728fd1bb7aea521d5f, lower: 0xb92304ae0492ca3430c9303546328f3f }, // -3536
    Multiplier { upper: 0x81693153d41e5d28730e2f958841b119, lower: 0x60e8d08b36dbd4f68d6dc02a9e8ed8ff }, // -3535
    Multiplier { upper: 0xcf0eb552ecfd61da51b04c22739c4e8f, lower: 0x017480debe2c87f0e24933776417c198 }, // -3534
    Multiplier { upper: 0xa5a55ddbf0cab4aea7c03ce85c7d0ba5, lower: 0x9ac39a4bcb56d3271b6dc2c5e9ac9ae0 }, // -3533
    Multiplier { upper: 0x84844b165a3bc3beec99ca537d30d61e, lower: 0x1569483ca2abdc1f49249bd187bd48b3 }, // -3532
    Multiplier { upper: 0xd406de8a29f939317a8faa1f2eb489c9, lower: 0xbbdba6c76aac936541d42c8272c87452 }, // -3531
    Multiplier { upper: 0xa99f186e87fa9427953fbb4c255d3b07, lower: 0xc97c856c5556dc5101768a01f56d29db }, // -3530
    Multiplier { upper: 0x87b279f20662101faa9962a35117626c, lower: 0xa1306abd111249da679208019124217c }, // -3529
    Multiplier { upper: 0xd91d8fe9a3d019cc44289dd21b589d7a, lower: 0x9b80aac81b50762a3f500ccf4ea03594 }, // -3528
    Multiplier { upper: 0xadb13fee1ca67b09d0207e41af7a1795, lower: 0x4933bbd3490d2b54ff733d72a54cf7a9 }, // -3527
    Multiplier { upper: 0x8af43324e3b8626e4019fe9af2c812dd, lower: 0xd429630f6da422aa65f5cac21dd72c88 }, // -3526
    Multiplier { upper: 0xde538507d2c09d7d335cca9184735162, lower: 0xed0f04e57c39d110a322de0362f1e0d9 }, // -3525
    Multiplier { upper: 0xb1dc6a6ca89a17975c4a3ba79d290de8, lower: 0xbda59d846361740d4f4f1802b58e4d7a }, // -3524
    Multiplier { upper: 0x8e49eebd53ae7945e36e961fb0eda4ba, lower: 0x31514ad04f8129a43f72799bc471d795 }, // -3523
    Multiplier { upper: 0xe3a97dfbb917286fd24a89cc4e490790, lower: 0x4ee877b3b26842a06583f5c6071c8c21 }, // -3522
    Multiplier { upper: 0xb62131962dac205975086e3d0b6d9fa6, lower: 0xa586c6295b869bb38469916b38e3a34e }, // -3521
    Multiplier { upper: 0x91b427ab57bce6adf739f1ca6f8ae61e, lower: 0xead238211605495c69ee0def60b61c3e }, // -3520
    Multiplier { upper: 0xe9203f788c617116585cb610b277d697, lower: 0xde1d269b566edbc70fe3497f01236064 }, // -3519
    Multiplier { upper: 0xba8032c6d6b45a7846b091a6f52cabac, lower: 0xb1b0ebaf7858afd2731c3acc00e919e9 }, // -3518
    Multiplier { upper: 0x95335bd2455d152d055a0e1f2a8a22f0, lower: 0x8e2722f2c6ad597528e3623ccd8747ee }, // -3517
    Multiplier { upper: 0xeeb892ea0894eeae6ef67cfeaa769e4d, lower: 0xb03e9e513de228bb749f03947c0ba649 }, // -3516
    Multiplier { upper: 0xbefa0f21a077255858c530cbbb92183e, lower: 0x26987ea764b4ed62c3b26943966fb83b }, // -3515
    Multiplier { upper: 0x98c80c1ae6c5b779e09dc0a2fc74e031, lower: 0xb879feec5090bde89c8eba9c7859602f }, // -3514
    Multiplier { upper: 0xf4734691713c58c300fc676b2d87cd1c, lower: 0x5a5ccb13b41ac9742db12a93f3c2337e }, // -3513
    Multiplier { upper: 0xc38f6ba78dc9e09c00c9ec55be063db0, lower: 0x484a3c0fc348a129be27554329682932 }, // -3512
    Multiplier { upper: 0x9c72bc860b07e6e333d4bd1164d1caf3, lower: 0x6d08300c9c3a1a87cb52aa9c212020f5 }, // -3511
    Multiplier { upper: 0xfa512da344d9716b86212e823ae944b8, lower: 0xae7380142d29c40c7884442d01cd0188 }, // -3510
    Multiplier { upper: 0xc840f14f6a478def9e80f201c8ba9d60, lower: 0x8b8f99a9bdbb033d2d369cf0ce3d9ad3 }, // -3509
    Multiplier { upper: 0xa033f43f88393e594b9a5b34a0954ab3, lower: 0xa2d947bafe2f35ca8a9217270b647bdc }, // -3508
    Multiplier { upper: 0x80299032d360feadd61515c3b3aaa229, lower: 0x4f14396264f2916ed541ac1f3c506317 }, // -3507
    Multiplier { upper: 0xcd0f4d1e1f01977c89bb5605ec4436a8, lower: 0x7e86c23707ea824aeecf79cb93b3d1bd }, // -3506
    Multiplier { upper: 0xa40c3db1b267ac63a162ab37f0369220, lower: 0x65389b5f3988683bf23f94a2dc8fdafe }, // -3505
    Multiplier { upper: 0x833cfe27c1ec89e94de888f98cf874e6, lower: 0xb7607c4c2e06b9c98e9943b57d3fe265 }, // -3504
    Multiplier { upper: 0xd1fb303f9cada97549740e5c14c0bb0a, lower: 0xbf00c6e049a45c75b0f5392261ffd0a1 }, // -3503
    Multiplier { upper: 0xa7fc26994a24879107900b7cdd66fc08, lower: 0x98cd6be6a15049f7c0c42db51b330d4e }, // -3502
    Multiplier { upper: 0x866352143b506c74060cd5fd7debfcd3, lower: 0xad71231ee7736e5fcd69be2a7c28d772 }, // -3501
    Multiplier { upper: 0xd70550205ee713ecd67aeffbfcacc7b9, lower: 0x1581d1cb0bebe3cc7bdc63772d0e2582 }, // -3500
    Multiplier { upper: 0xac044019e585a98a452f2663308a3960, lower: 0xde0174a26fefe9706316b5f8f0d81e02 }, // -3499
    Multiplier { upper: 0x899d0014b79e213b6a8c1eb5c06e944d, lower: 0x7e679081f3265459e8def7fa5a467e68 }, // -3498
    Multiplier { upper: 0xdc2e66878c30352bddacfdef9a4a86e2, lower: 0x63d8e73651d6ed5ca7cb265d5d3d970c }, // -3497
    Multiplier { upper: 0xb0251ed2d68cf7564af0cb2615086be8, lower: 0x4fe0b8f84178bde3b96f51e44a97ac0a }, // -3496
    Multiplier { upper: 0x8cea7f0f120a5f783bf3d5b810d38986, lower: 0xa64d60c69ac6fe4fc78c41836edfbcd5 }, // -3495
    Multiplier { upper: 0xe17731b1b676ff26c652ef8ce7b8dc0a, lower: 0xa3af013dc47196e60c139c057e32c7bb }, // -3494
    Multiplier { upper: 0xb45f5af491f8cc1f050f260a52fa49a2, lower: 0x1c8c00fe36c14584d676166acb5bd2fc }, // -3493
    Multiplier { upper: 0x904c48c3a7fa3ce59da5b8084261d481, lower: 0xb07000cb5f01046a452b45223c497596 }, // -3492
    Multiplier { upper: 0xe6e0746c3ff6c7d5c90926739d695402, lower: 0xb3e667abcb34d3dd3b786e9d2d4255bd }, // -3491
    Multiplier { upper: 0xb8b3905699923977d40751f617877668, lower: 0x8feb862308f70fe42f938bb0f101de31 }, // -3490
    Multiplier { upper: 0x93c2d9dee141c7931005db2b4605f853, lower: 0xa65604e8d3f8d9835942d6272734b1c1 }, // -3489
    Multiplier { upper: 0xec6af63168693f51b33c91ded66ff3b9, lower: 0x0a233b0e1ff48f388ed156a50b8782ce }, // -3488
    Multiplier { upper: 0xbd225e8ded20ff748f63a7e578598fc7, lower: 0x3b4f6271b32a0c2d3f0ddeea6f9f9bd8 }, // -3487
    Multiplier { upper: 0x974eb20b241a65f6d91c86512d147305, lower: 0xc90c4ec15c21a35765a4b2552619497a }, // -3486
    Multiplier { upper: 0xf21783450690a3248e940a1b7b53eb3c, lower: 0x74e07e022d029ef23c3ab6eea35ba8c3 }, // -3485
    Multiplier { upper: 0xc1ac690405408283a5433b492f7655c9, lower: 0xf719fe68240218c1c9c8925882afba35 }, // -3484
    Multiplier { upper: 0x9af054033766cecfb768fc3a8c5eab07, lower: 0xf8e198535001ad67d4a075139bbfc82b }, // -3483
    Multiplier { upper: 0xf7e6ecd1f23e17b2bf0e605dad6444d9, lower: 0x8e35c0854ccf7bd95433ee85c5ffa6ab }, // -3482
    Multiplier { upper: 0xc652570e5b64dfc23271e6b157836a47, lower: 0xa4f7cd3770a5fcaddcf6586b04cc8555 }, // -3481
    Multiplier { upper: 0x9ea845a515ea4c9b5b8e52277935ee9f, lower: 0xb72ca42c5a1e63be4a5ead226a3d3778 }, // -3480
    Multiplier { upper: 0xfdda090823107a922c16e9d8c1efe432, lower: 0xbeadd37a29ca393076fde1d0a9fb8bf2 }, // -3479
    Multiplier { upper: 0xcb14d40682739541bcdf217a34bfe9c2, lower: 0x3224a92e87d4fa8d2bfe4e4087fc6ff5 }, // -3478
    Multiplier { upper: 0xa2771005352944349718e794f6ffee34, lower: 0xf4ea20f20643fba42331d8339ffd265e }, // -3477
    Multiplier { upper: 0x81f8d99dc421035d45ad8610c5998b5d, lower: 0x90bb4d8e6b69961ce8f4acf6199751e5 }, // -3476
    Multiplier { upper: 0xcff48f62d36805620915a34e08f5abc8, lower: 0xe79215b0abdc236174baae568f588307 }, // -3475
    Multiplier { upper: 0xa65d3f8242b99de8074482a4d3f7bca0, lower: 0xb941aaf3bcb01c4df6fbbeaba5e068d3 }, // -3474
    Multiplier { upper: 0x85176601cefae4b99f6a021d765fca1a, lower: 0x2dce225c96f349d7f8c965561e4d20a9 }, // -3473
    Multiplier { upper: 0xd4f23ccfb1916df5cbdcd02f23cc7690, lower: 0x4949d09424b876265adbd55696e1cdda }, // -3472
    Multiplier { upper: 0xaa5b63d95adabe5e3cb0a68c1ca3920d, lower: 0x076e407683c6c4eb7be31112124e3e48 }, // -3471
    Multiplier { upper: 0x88491cade248984b63c0853ce3b60e70, lower: 0xd2be99f8696bd0bc631c0da80ea4fea0 }, // -3470
    Multiplier { upper: 0xda0e94496a0dc0789f9a6ec7d2bce3e7, lower: 0xb7975cc0a8ac812d6b6015d9b107fdcd }, // -3469
    Multiplier { upper: 0xae72103abb3e3393b2e1f2397563e986, lower: 0x2c79170086f067578919ab148d9ffe3e }, // -3468
    Multiplier { upper: 0x8b8e73622f64f60fc24e5b612ab6546b, lower: 0x56c7459a058d1f793a7aef43a47ffe98 }, // -3467
    Multiplier { upper: 0xdf4a5236b23b234c6a16f89b778a20ab, lower: 0xbe0ba29008e1cbf52a5e4b9f6d999759 }, // -3466
    Multiplier { upper: 0xb2a1db5ef4fc1c3d21abfa15f93b4d56, lower: 0x31a2e8733a4e3cc421e5094c57ae12ae }, // -3465
    Multiplier { upper: 0x8ee7e2b25d967cfdb48994de60fc3dde, lower: 0x8e1bed28fb71ca36818407704624dbbe }, // -3464
    Multiplier { upper: 0xe4a63783c8f0c7fc540f549701939630, lower: 0xe35fe1db2be9438a68d33f1a09d492ca }, // -3463
    Multiplier { upper: 0xb6eb5f9ca0c09ffd100c43ac0142de8d, lower: 0x82b31b15bcba9c6eba4298e1a176dbd5 }, // -3462
    Multiplier { upper: 0x9255e616e7007ffda670362334357ed7, lower: 0x9bc27c1163c87d2561cee0b4812be311 }, // -3461
    Multiplier { upper: 0xea2309be3e67332f70b389d1ed22648c, lower: 0x2c6a601bd2da61d5694b0120ceac9e81 }, // -3460
    Multiplier { upper: 0xbb4f3afe98528f5926f607db241b83a3, lower: 0x56bb801642484e44543c00e70bbd4b9a }, // -3459
    Multiplier { upper: 0x95d8fbfee0420c47525e6caf501602e9, lower: 0x122f99ab6839d836a9c99a526fcaa2e2 }, // -3458
    Multiplier { upper: 0xefc1933166d013a55097144bb3566b0e, lower: 0x837f5c45738fc057760f5d50b2ddd169 }, // -3457
    Multiplier { upper: 0xbfce0f5ab8a6761dda1276a2f5debc0b, lower: 0x9c65e36ac2d966ac5e72b10d5be4a788 }, // -3456
    Multiplier { upper: 0x9971a5e22d51f817e1a85ee8c4b23009, lower: 0x49eb1c5568adebbd185bc0d77cb6ec6d }, // -3455
    Multiplier { upper: 0xf582a3037bb659bfcf73cb0e0783800e, lower: 0xdcab6088a77cac61c092ce259457e0ad }, // -3454
    Multiplier { upper: 0xc46882692fc5149972c308d80602ccd8, lower: 0xb0891a06ec63bd1b007571b7a9dfe6f1 }, // -3453
    Multiplier { upper: 0x9d206854263743adf568d3e004cf0a46, lower: 0xf3a0e19f2382fdaf339127c6217febf4 }, // -3452
    Multiplier { upper: 0xfb670d5370586c4988a7b9666e181071, lower: 0x85ce35cb6c04c9185281d93d02664653 }, // -3451
    Multiplier { upper: 0xc91f3ddc59e056a13a1fc78524e00d27, lower: 0x9e3e916f899d6dad0ece476401eb6b76 }, // -3450
    Multiplier { upper: 0xa0e5cb16ae4d121a94e6393750b33db9, lower: 0x4b65412607b1248a723e9f8334bc55f8 }, // -3449
    Multiplier { upper: 0x80b7d5abbea40e7baa51c75f73c297c7, lower: 0x6f84341e6c8db6d528321935c3c9de60 }, // -3448
    Multiplier { upper: 0xcdf2ef7931067d92aa1c723252d0f2d8, lower: 0xb26d2030adaf8aeea6b68ebc6c76309a }, // -3447
    Multiplier { upper: 0xa4c2592dc0d1fe0eee7d28284240c246, lower: 0xf52419c08af2d58bb8920bc9f05e8d48 }, // -3446
    Multiplier { upper: 0x83ceadbe33db31a58b9753536833ce9f, lower: 0x2a8347cd3bf577a2fa0e6fd4c04ba43a }, // -3445
    Multiplier { upper: 0xd2e4493052f84f6f45beebb8a6b94a98, lower: 0x44053faec6558c37f67d7fbacd45d38f }, // -3444
    Multiplier { upper: 0xa8b6a0f3759372bf6aff22fa1efaa213, lower: 0x699dcc8bd1de09c65ecacc957104a93f }, // -3443
    Multiplier { upper: 0x86f880c2c475f565ef328261b2621b42, lower: 0xbae4a3a30e4b3b0518a23d445a6a2100 }, // -3442
    Multiplier { upper: 0xd7f40137a0bcbbd64b8403cf83d02b9d, lower: 0xf7d43904e3ab91a1c103953a2a4367ff }, // -3441
    Multiplier { upper: 0xacc3342c8096fcab6f9ccfd9364022e4, lower: 0xc64360d0b622dae7cd9c7761bb691fff }, // -3440
    Multiplier { upper: 0x8a35c356cd4596ef8c7d73142b668250, lower: 0x9e9c4d73c4e8af1fd7b05f8162ba7fff }, // -3439
    Multiplier { upper: 0xdd22d2247ba28b18e0c8b8204570d080, lower: 0xfdc6e252d4a77e99591a32689df73332 }, // -3438
    Multiplier { upper: 0xb0e8a81d2fb53c13e706f9b36ac0a6cd, lower: 0x97d24ea8aa1f987aadae8eba17f8f5c2 }, // -3437
    Multiplier { upper: 0x8d86ece4262a9676526bfaf5ef008571, lower: 0x4641d886ee7fad2ef158722e7993f7ce }, // -3436
    Multiplier { upper: 0xe2717b06a3775723b7132b231800d582, lower: 0x0a02f40b1732aeb182271d1728ecbfb0 }, // -3435
    Multiplier { upper: 0xb527959ee92c45b62c0f55b5accd779b, lower: 0x3b359008df5bbef4681f4a78ed8a32f3 }, // -3434
    Multiplier { upper: 0x90ec77b254236af8233f77c48a3df948, lower: 0xfc2ad9a0b2afcbf6b9b2a1fa57a1c25c }, // -3433
    Multiplier { upper: 0xe7e0bf83b9d244c038658c6da9fcc20e, lower: 0x60448f67844c798ac2b769908c3603c7 }, // -3432
    Multiplier { upper: 0xb98099362e41d099c6b7a38aee63ce71, lower: 0xe69d3f860370613bcef92140702b3639 }, // -3431
    Multiplier { upper: 0x9466e0f8250173ae3892e93bf1e971f4, lower: 0xb87dcc6b35f380fca5941a99f355c4fa }, // -3430
    Multiplier { upper: 0xed7167f36e68b916c0eb0ec64fdbe987, lower: 0x8d9613debcb8ce6108ecf75cb8893b2a }, // -3429
    Multiplier { upper: 0xbdf453292520941233ef3f050cafee06, lower: 0x0ade764bca2d71e73a572c4a2d3a95bb }, // -3428
    Multiplier { upper: 0x97f6a8edb74d4341c325cc040a265804, lower: 0xd57ec5096e8ac185c845bd08242ede2f }, // -3427
    Multiplier { upper: 0xf324417c587b9ecf9ea2e00676a3c007, lower: 0xbbfe080f174468d60d3c61a6a04afd18 }, // -3426
    Multiplier { upper: 0xc2836796ad2fb23fb21be66b921c999f, lower: 0xc998067279038711a4304e1ee6a26414 }, // -3425
    Multiplier { upper: 0x9b9c52def0f2f4ffc1afeb8941b07ae6, lower: 0x3ae0052860cf9f415026a4e5854eb676 }, // -3424
    Multiplier { upper: 0xf8fa1e318184bb32cf7fdf4202b3f7d6, lower: 0xc499a1da347f65354d0aa16f3bb123f0 }, // -3423
    Multiplier { upper: 0xc72e7e8e0136fc28a5ffe5ce688ff978, lower: 0x9d47b4ae9065ea910a6ee78c2fc0e98d }, // -3422
    Multiplier { upper: 0x9f58653e675f302084ccb7d853a6612d, lower: 0x4a9fc3bed9eb220da1f252d68c9a5471 }, // -3421
    Multiplier { upper: 0xfef3d530a56519cda1478c8d52a3ceae, lower: 0xddcc6c648fde9ce29cb6eaf0e0f6ed81 }, // -3420
    Multiplier { upper: 0xcbf64426eab747d7b4393d3ddbb63ef2, lower: 0x4b09f05073187d8216f8bbf3e72bf134 }, // -3419
    Multiplier { upper: 0xa32b69b8bbc5d312f69430fe495e98c1, lower: 0xd5a18d0d28e064681260965cb8eff42a }, // -3418
    Multiplier { upper: 0x828921609637dc0f2ba9c0cb6de54701, lower: 0x77b470d753e6b6b9a84d4516fa599022 }, // -3417
    Multiplier { upper: 0xd0db689a89f2f9b1df7601457ca20b35, lower: 0x8c53e7beeca4578f73aed4f1908f4d02 }, // -3416
    Multiplier { upper: 0xa715ed486e5bfaf4b2c4cdd13081a291, lower: 0x3d0fec98bd50460c5c8bdd8e0d3f70cf }, // -3415
    Multiplier { upper: 0x85ab2439f1e32f2a289d717426ce1ba7, lower: 0x640cbd46fdd9d1a37d3cb13e70ff8d72 }, // -3414
    Multiplier { upper: 0xd5dea05cb6384b76a7624f203e1692a5, lower: 0x6ce12ed7fc8fb5d261fab530b4cc1583 }, // -3413
    Multiplier { upper: 0xab18804a2b603c5eec4ea5b364dedbb7, lower: 0x8a4dbf133072f7db81955dc090a34469 }, // -3412
    Multiplier { upper: 0x88e066a1bc4cfd18bd0bb7c2b718afc6, lower: 0x083e3275c05bf97c67aab166da1c36bb }, // -3411
    Multiplier { upper: 0xdb00a435fa14c82794df8c6abe8de609, lower: 0xa6c9ea56009328c70c444f0af6938ac4 }, // -3410
    Multiplier { upper: 0xaf33b69194dd6cec77193d22320b1e6e, lower: 0x1f07eeab33a8ed6c09d03f3bf876089d }, // -3409
    Multiplier { upper: 0x8c295edadd7df0bd2c1430e82808e524, lower: 0xe59ff2228fba5789a17365c99391a07d }, // -3408
    Multiplier { upper: 0xe042315e2f2fe7951353817373416ea1, lower: 0x6f6650374c5d58dc35856fa8ec1c33fc }, // -3407
    Multiplier { upper: 0xb368277e8c2652dda90f9ac2c29abee7, lower: 0x8c51d9c5d6b113e35e045953f0168ffd }, // -3406
    Multiplier { upper: 0x8f8685fed6850f17ba72e235687bcbec, lower: 0x70417b04abc0dcb5e4d0477659aba664 }, // -3405
    Multiplier { upper: 0xe5a40997bda1b1bf90b7d05573f94647, lower: 0x1a025e6ddf9afabca14d3f23c2ac3d6c }, // -3404
    Multiplier { upper: 0xb7b66e12fe1af49940930d1129943838, lower: 0xe19b7ebe4c7bfbca1aa4328302236457 }, // -3403
    Multiplier { upper: 0x92f8580f31af2a1433a8d740ee102cfa, lower: 0x4e15fefea396630815502868ce82b6ac }, // -3402
    Multiplier { upper: 0xeb26f34b82b1dced1f748b9b168047f6, lower: 0xe35664ca9f5704d9bbb373dae4045779 }, // -3401
    Multiplier { upper: 0xbc1f2909355b1724192a0948decd065f, lower: 0x1c451d6ee5df37149629297be99d12c7 }, // -3400
    Multiplier { upper: 0x967f54075de278e9adbb3aa0b23d9eb2, lower: 0x7d04178beb18f8dd44edbac987b0dbd3 }, // -3399
    Multiplier { upper: 0xf0cbb9a56303f4a915f85dcde9fc311d, lower: 0x94d358dfde8e5afba17c5e0f3f815fb7 }, // -3398
    Multiplier { upper: 0xc0a2faeab59cc3ba77f9e4a4bb30274a, lower: 0xdd75e0b31871e262e796b1a5cc677fc6 }, // -3397
    Multiplier { upper: 0x9a1bfbeef7b09c952cc7ea1d628cec3b, lower: 0xe45e4d5c138e4eb5861227b7d6b93305 }, // -3396
    Multiplier { upper: 0xf6932cb18c4dc7551473102f0414ad2c, lower: 0xa096e22cec16e455a3503f8c8ac1eb3b }, // -3395
    Multiplier { upper: 0xc5428a27a3716c44105c0cf269aa2423, lower: 0xb3abe823f012504482a6993d3bce55c9 }, // -3394
    Multiplier { upper: 0x9dced4ec82c12369a6b00a5b87bb501c, lower: 0x8fbcb9b659a84036ceebadca963eab07 }, // -3393
    Multiplier { upper: 0xfc7e217a6ace9f0f7119aa2c0c5ee694, lower: 0x192df5f08f7399f14b12afaa89fdde71 }, // -3392
    Multiplier { upper: 0xc9fe812ebbd87f3f8dae21bcd6b25210, lower: 0x1424c4c072c2e18dd5a88c886e64b1f4 }, // -3391
    Multiplier { upper: 0xa19867589646cc32d7be8163def50e73, lower: 0x43509d66c235813e4486d6d38b83c190 }, // -3390
    Multiplier { upper: 0x8146b913ab6bd68f12fecde97f2a71f5, lower: 0xcf73b11f01c46765039f1242d6030140 }, // -3389
    Multiplier { upper: 0xced78e85df12f0e4eb3149759843e989, lower: 0x4bec4e9802d3d8a19f64ea04899e6867 }, // -3388
    Multiplier { upper: 0xa5793ed17f425a50bc276df7ad03213a, lower: 0xa3237213357646e7b2b7219d3ae52052 }, // -3387
    Multiplier { upper: 0x8460ff0dff6848409685f192f0cf4dc8, lower: 0x8282c1a8f791d252f55f4e176250e6a8 }, // -3386
    Multiplier { upper: 0xd3ce64e33240739a8a6fe8eb1ae54940, lower: 0xd0d135db25b61d5188987cf236e7d773 }, // -3385
    Multiplier { upper: 0xa971ea4f5b66c2e2085987227beaa100, lower: 0xa70dc4af515e7ddad3ad30c1c58645f6 }, // -3384
    Multiplier { upper: 0x878e550c491f024e6d146c1b96554d9a, lower: 0x1f3e36f2a77ecb15762427016ad1d192 }, // -3383
    Multiplier { upper: 0xd8e3bb46db64d07d7b53e02c23bbaf5c, lower: 0xfec9f1843f3144ef236d0b3577b61c1c }, // -3382
    Multiplier { upper: 0xad82fc38af83d9fdfc4319bce962f2b0, lower: 0xcbd4c13698f43725b5f0d5c45fc4e34a }, // -3381
    Multiplier { upper: 0x8acf302d593647fe6368e163ede8c227, lower: 0x097700f87a5cf8eaf7f3de36b303e908 }, // -3380
    Multiplier { upper: 0xde184d155b8a0cca38a7cf06497469d8, lower: 0x0f24ce5a5d618e44bfec96bdeb3974d9 }, // -3379
    Multiplier { upper: 0xb1ad0a777c6e70a1c6eca59ea129ee46, lower: 0x7283d8484ab471d0998a123188fac3e1 }, // -3378
    Multiplier { upper: 0x8e24085f96bec0816bf0847ee754be9e, lower: 0xc203136d08905b0d47a1a827a0c89cb4 }, // -3377
    Multiplier { upper: 0xe36cda328acacd9bdfe73a64a5546431, lower: 0x366b52480db3c4e20c35d9d90140fab9 }, // -3376
    Multiplier { upper: 0xb5f0ae8ed56f0ae31985c8508443835a, lower: 0x91ef7506715c9d81a35e47e0cdcd9561 }, // -3375
    Multiplier { upper: 0x918d58724458d5827ad16d0d369c6915, lower: 0x418c5d9ec116e467b5e5064d7171444e }, // -3374
    Multiplier { upper: 0xe8e2271d3a27bc03f7b57b485760a822, lower: 0x027a2f646824a0a5efd4d6e24f1ba07c }, // -3373
    Multiplier { upper: 0xba4e85b0fb52fccff95dfc39df808681, lower: 0x9b94f2b6b9b6e6eb2643df1b727c8064 }, // -3372
    Multiplier { upper: 0x950b9e272f75970cc77e63617f9a0534, lower: 0x7c7728922e2bebef51cfe5af8eca0050 }, // -3371
    Multiplier { upper: 0xee78fd0b7f228b47a5970568cc29a1ed, lower: 0x93f1da837d13131882e63c4c17a99a19 }, // -3370
    Multiplier { upper: 0xbec730d5ff4ed5d2eadf378709bae7f1, lower: 0x4327e202ca75a8e068b8303cdfbae1ae }, // -3369
    Multiplier { upper: 0x989f5a44cc3f117588b292d26e2f1ff4, lower: 0x35b9819bd52aed8053c68cfd7fc8b48b }, // -3368
    Multiplier { upper: 0xf4322a07ad31b588dab75150b04b6653, lower: 0x8928cf5fbb77e266ec70e195994120de }, // -3367
    Multiplier { upper: 0xc35b54d2f0f4913a4892a773c03c51dc, lower: 0x6dba3f7fc92cb51f238d81447a9a80b2 }, // -3366
    Multiplier { upper: 0x9c4910a8c0c3a761d3a885f6336374b0, lower: 0x57c832cca0f090e5b60acdd0621533c2 }, // -3365
    Multiplier { upper: 0xfa0e810e01390bcfb90da323856bede6, lower: 0xf2d9eae10180e7d5f011494d69bb8602 }, // -3364
    Multiplier { upper: 0xc80b9a719a940972fa714f4f9deff185, lower: 0x8f14bbe734671fde59a76dd787c93802 }, // -3363
    Multiplier { upper: 0xa009485ae210078f2ec10c3fb18cc137, lower: 0xa5aa2fec29ec197eae1f8b12d3076002 }, // -3362
    Multiplier { upper: 0x80076d1581a66c728bcda36627a3cdc6, lower: 0x1e21bff02189adfef1b2d5a8a8d2b335 }, // -3361
    Multiplier { upper: 0xccd8ae88cf70ad8412e29f09d9061609, lower: 0xc9cf998035a91664b5eaef7441511eba }, // -3360
    Multiplier { upper: 0xa3e08ba0a5f3be03424ee5a17a6b44d4, lower: 0xa172e1335e20deb6f7ef25f69aa74bc8 }, // -3359
    Multiplier { upper: 0x831a094d518fcb35cea584812ebc3710, lower: 0x8128b429181a4bc59325b7f87bb9096d }, // -3358
    Multiplier { upper: 0xd1c342154f4c7856176f3a684ac6be80, lower: 0xcea786a82690793c1ea2bff3f9280f15 }, // -3357
    Multiplier { upper: 0xa7cf68110c3d2d11ac58fb86a2389867, lower: 0x0bb93886854060fce54efff660ecd8dd }, // -3356
    Multiplier { upper: 0x863f867409ca8a7489e0c93881c6e052, lower: 0x6fc7606b9dcd1a63eaa59991e723e0b1 }, // -3355
    Multiplier { upper: 0xd6cc0a5342ddaa540fce0ec0cfa49a1d, lower: 0x7fa567129614f706443c28e971d3011b }, // -3354
    Multiplier { upper: 0xabd66ea9024aeea9a63e7233d9507b4a, lower: 0xcc84527544dd926b69c9ba545b0f3416 }, // -3353
    Multiplier { upper: 0x897858873508beee1e985b5cadd9fc3b, lower: 0xd6d041f76a4adb89216e2ea9e2729012 }, // -3352
    Multiplier { upper: 0xdbf3c0d854dacb16975a2bc77c8ff9f9, lower: 0x57b39cbf1077c5a8357d1776371db34f }, // -3351
    Multiplier { upper: 0xaff633e043e23c1212ae896c63a66194, lower: 0x46294a32739304869130df91c5b15c3f }, // -3350
    Multiplier { upper: 0x8cc4f64d031b6341a88ba12382eb8143, lower: 0x6b543b5b8fa8d06ba75a4c749e277d00 }, // -3349
    Multiplier { upper: 0xe13b23ae6b5f0535da7901d26b12686b, lower: 0xdeed2bc5b2a7b3df722a13edc9d8c7ff }, // -3348
    Multiplier { upper: 0xb42f4fbebc4c042b152d9b0ebc0eb9ef, lower: 0xe58a896af552f64c5b54dcbe3b13d333 }, // -3347
    Multiplier { upper: 0x9025d96563700355aa8ae272300bc7f3, lower: 0x1e086def2aa8c509e2aa4a31c8dca8f5 }, // -3346
    Multiplier { upper: 0xe6a2f56f05800555ddab03e9e6793feb, lower: 0x6340afe5110e080fd11076b60e2ddb22 }, // -3345
    Multiplier { upper: 0xb8825df26accd1117e226987eb943322, lower: 0xb5cd59840da4d33fda73922b3e8b15b5 }, // -3344
    Multiplier { upper: 0x939b7e5b88a3da7464e8546cbc768f4e, lower: 0xf7d77ad00aea42997b8fa822986f4491 }, // -3343
    Multiplier { upper: 0xec2bfd5f41062a53d4a6ed7ac724187e, lower: 0x5958c4801176d0f5927f736a8d7ed41b }, // -3342
    Multiplier { upper: 0xbceffde5cd9e884310858ac89f501398, lower: 0x477a36ccdac573f7a865f5eed798a9af }, // -3341
    Multiplier { upper: 0x972664b7d7b2069c0d37a23a190cdc79, lower: 0xd2c82bd7156ac32c86b7f7f24613baf2 }, // -3340
    Multiplier { upper: 0xf1d7078c8c500a9348590390281493f6, lower: 0x1e0d12f1bbde05140abff31d3cec5e50 }, // -3339
    Multiplier { upper: 0xc178d2d6d6a66edc39e0cfa68676dcc4, lower: 0xe4d7425afcb19da9a23328e430bd1840 }, // -3338
    Multiplier { upper: 0x9ac70f124551f249c7e70c85385f1703, lower: 0xea45ceaf308e17bae828ed835a30e034 }, // -3337
    Multiplier { upper: 0xf7a4e4ea08831d42d971ada1f3cb5806, lower: 0x43a2e44b80e3592b0d0e48d229e7cd1f }, // -3336
    Multiplier { upper: 0xc61d83ee6d35b102478e24818fd5e005, lower: 0x02e8b6a2cd82adbc0a71d3db54b970e6 }, // -3335
    Multiplier { upper: 0x9e7e0325242af401d2d81d3473118004, lower: 0x0253c54f0acef1633b8e4315dd61271e }, // -3334
    Multiplier { upper: 0xfd966b6ea044b99c848cfb871e82666c, lower: 0xd086087e77b182385f4a04efc89b71ca }, // -3333
    Multiplier { upper: 0xcadebc588036fae39d3d9605b201eb8a, lower: 0x406b39fec6279b604c3b37263a15f4a2 }, // -3332
    Multiplier { upper: 0xa24bc9e06692624fb0fe119e2801893b, lower: 0x66bc2e656b52e2b3702f5f51c8119081 }, // -3331
    Multiplier { upper: 0x81d63b19eba84ea62731a7b1b99ad42f, lower: 0x8563585122a8b55c59bf7f74a00e0d34 }, // -3330
    Multiplier { upper: 0xcfbd2b5cac407dd6a51c3f82c291537f, lower: 0x3bd226e8377455608f98cbedcce34854 }, // -3329
    Multiplier { upper: 0xa630ef7d5699fe4550e3660235410f98, lower: 0xfca81f202c5d111a0c7a3cbe3d82a043 }, // -3328
    Multiplier { upper: 0x84f3f2caabae650440b5eb34f7673fad, lower: 0x96ece5b356b0da7b3d2e96fe979bb369 }, // -3327
    Multiplier { upper: 0xd4b9847779170806cdefdebb2571ff7c, lower: 0x24ae3c52244e2a5ec84a8b30f292b8a7 }, // -3326
    Multiplier { upper: 0xaa2e0392c745a005718cb22f5127ff96, lower: 0x83be96a81d0b5518a03ba28d8edbc6ec }, // -3325
    Multiplier { upper: 0x8824cfa89f6ae66ac13d5b590db99945, lower: 0x36321220173c4413b362e8713f1638bd }, // -3324
    Multiplier { upper: 0xd9d47f743244a3de01fbc55b4928f53b, lower: 0x89e9b699bec6d352b89e40b531bd2795 }, // -3323
    Multiplier { upper: 0xae439929c1d083180196377c3a872a96, lower: 0x07ee2bae3238a90efa1833c427ca8611 }, // -3322
    Multiplier { upper: 0x8b6947549b0d35acce11c5fcfb9f5544, lower: 0xd324efbe8e93ba7261acf636863b9e74 }, // -3321
    Multiplier { upper: 0xdf0ed8875e7b89147ce93cc7f8feeed4, lower: 0x8507e5fdb0ec5d83cf7b238a705f63ec }, // -3320
    Multiplier { upper: 0xb27246d2b1fc6da9fd8763d32d98bf10, lower: 0x6a6cb7fe27237e030c6282d526b2b657 }, // -3319
    Multiplier { upper: 0x8ec1d24227fd2487fe05e975be13cc0d, lower: 0x21f09331b8e9319c09e868aa855bc512 }, // -3318
    Multiplier { upper: 0xe4695069d995073ffcd64255fcec79ae, lower: 0x9cb41eb5f4a84f600fda4110d55fa1b7 }, // -3317
    Multiplier { upper: 0xb6baa6bb147738fffd7835119723948b, lower: 0xb09018919086a5e6731500da444c815f }, // -3316
    Multiplier { upper: 0x922eebc8dd2c2d9997935da7ac1c76d6, lower: 0x26d9ad41406bb7eb8f4400ae9d0a0119 }, // -3315
    Multiplier { upper: 0xe9e4ac7495137c28f28562a5e02d8af0, lower: 0x3e29153533df8cac186ccde42e766828 }, // -3314
    Multiplier { upper: 0xbb1d56c3aa75fced8ed11bb7e68ad58c, lower: 0xfe87442a8fe60a2346bd7183585eb9b9 }, // -3313
    Multiplier { upper: 0x95b1123621f7fd8ad8a7495feba24470, lower: 0xcb9f69bba651a1b5d231279c46b22e2e }, // -3312
    Multiplier { upper: 0xef81b6bd03266277c10ba8997903a0b4, lower: 0x78ff0f92a3b5cf89504ea5c6d7837d16 }, // -3311
    Multiplier { upper: 0xbf9af89735b84ec6340953adfa694d5d, lower: 0x2d98d9421c9172d4403eeb057935fdab }, // -3310
    Multiplier { upper: 0x9948c6df5e2d0bd1c33aa957fb877117, lower: 0x57ad7a9b4a0df57699cbef37942b3156 }, // -3309
    Multiplier { upper: 0xf5413e32304812e9385ddbbff8d8b4f2, lower: 0x25e25dc5434988bdc2dfe525b9deb556 }, // -3308
    Multiplier { upper: 0xc43431c1c039a8ba937e496660ad5d8e, lower: 0x84b517d102a13a3168b31db7c7e55ddf }, // -3307
    Multiplier { upper: 0x9cf68e3499c7ba2edc6507851a244ad8, lower: 0x6a2a7974021a94f453c27e2c9feab17f }, // -3306
    Multiplier { upper: 0xfb2416ba8fa5f6b160a1a5a1c36d448d, lower: 0x76aa5becd02a87ed52d0c9e0ffdde8cb }, // -3305
    Multiplier { upper: 0xc8e9abc872eb2bc11a1aeae7cf8a9d3d, lower: 0xf888498a402206577573d4b3ffe4ba3c }, // -3304
    Multiplier { upper: 0xa0baefd38f228967481588b972d54a97, lower: 0xfa06a13b66819eac5df643c3331d61ca }, // -3303
    Multiplier { upper: 0x80958ca93f4ed452a0113a2df5776edf, lower: 0xfb3880fc52014bbd17f83635c27de7d5 }, // -3302
    Multiplier { upper: 0xcdbc1441fee486ea99b529e32258b166, lower: 0x5ec0ce60833545fb598d2389372fd954 }, // -3301
    Multiplier { upper: 0xa496769b32506beee15dbb1c1b7a2785, lower: 0x189a3eb39c2a9e62ae0a82d42c264776 }, // -3300
    Multiplier { upper: 0x83ab9215c1d9eff24de495b015fb52d0, lower: 0xe07b655c7ceee51bbe6ecf102351d2c5 }, // -3299
    Multiplier { upper: 0xd2ac1cef9c8fe6507ca0ef80232bb7b4, lower: 0x9a5f0893fb17d4f930b14b4d054fb7a2 }, // -3298
    Multiplier { upper: 0xa889b0bfb0731ea6ca1a59334f562c90, lower: 0x7b7f3a0ffc1310c75a276f70d10c92e8 }, // -3297
    Multiplier { upper: 0x86d48d6626c27eebd4e1e0f5d911bd40, lower: 0x62cc2e73300f409f7b52bf8d740a0f20 }, // -3296
    Multiplier { upper: 0xd7ba7bd6a46a64ac87cfce56281c6200, lower: 0x9e137d8519b200ff2bb798e253434b66 }, // -3295
    Multiplier { upper: 0xac952fdee9eeb6f06ca63eab5349e800, lower: 0x7e75fe04148e6732895fad81dc35d5eb }, // -3294
    Multiplier { upper: 0x8a10f318bb255f26bd51cbbc42a18666, lower: 0xcb91980343a51f5ba119579b169177f0 }, // -3293
    Multiplier { upper: 0xdce7eb5ac508983dfbb612c6d10270a4, lower: 0x78e8f3386c3b655f68288c2b574f264c }, // -3292
    Multiplier { upper: 0xb0b989156a6d4697fc91a89f0d9b8d50, lower: 0x60ba5c2d2362b77f8686d68912a5b83d }, // -3291
    Multiplier { upper: 0x8d613a7788576bacca0e207f3e160aa6, lower: 0xb3c849bdb5e892cc6b9f1207421e2cfe }, // -3290
    Multiplier { upper: 0xe2352a58da257914767d00cb9689aaa4, lower: 0x52da0f95efda847a45cb500b9cfd14c9 }, // -3289
    Multiplier { upper: 0xb4f75513e1b794105eca6709453aeee9, lower: 0xdbe1a6118caed061d16f733c7d9743d4 }, // -3288
    Multiplier { upper: 0x90c5dda9815fa9a6b23b85a1042f2587, lower: 0xe31aeb413d58a6b4a78c5c3064790310 }, // -3287
    Multiplier { upper: 0xe7a2fc4268990f711d2c0901a04b6f3f, lower: 0xd1c4ab9b955aa4543f46f9e7072804e6 }, // -3286
    Multiplier { upper: 0xb94f3035207a72c0e4233a67b36f8c33, lower: 0x0e36efafaaaee9dcff6bfb1f38ecd0b8 }, // -3285
    Multiplier { upper: 0x943f59c419fb8f00b682951fc2bfa35c, lower: 0x0b5f2626222587e3ff8995b293f0a6fa }, // -3284
    Multiplier { upper: 0xed322939c32c1801240421cc6acc3893, lower: 0x456509d69d08d96ccc0f55ea864dd7f6 }, // -3283
    Multiplier { upper: 0xbdc1ba949c23466750034e3d223cfa0f, lower: 0x6ab73b12173a478a3cd911886b717991 }, // -3282
    Multiplier { upper: 0x97ce2edd49b5d1ec4002a4fdb4fd94d9, lower: 0x222c2f41ac2e9fa1ca474139ef8dfadb }, // -3281
    Multiplier { upper: 0xf2e37e2edc561cad33376e62bb2f548e, lower: 0x9d137ecf79e4329c76d8685cb27cc491 }, // -3280
    Multiplier { upper: 0xc24f98257d11b08a8f5f8b822f591072, lower: 0x1742cbd92e50287d2be0537d5b9703a7 }, // -3279
    Multiplier { upper: 0x9b72e01dfda7c06ed9193c6825e0d9f4, lower: 0xdf68a314250ced30efe6a93116126953 }, // -3278
    Multiplier { upper: 0xf8b7ccfcc90c6717c1c1fa403c9af654, lower: 0x98a76b536e7b151b19710eb4f01d7551 }, // -3277
    Multiplier { upper: 0xc6f970ca3a70527967ce61ccfd48c510, lower: 0x7a1f890f8b95aa7c145a722a59b12aa7 }, // -3276
    Multiplier { upper: 0x9f2df3d4fb8d0ec7863eb4a3fdd3d0d9, lower: 0xfb4c6da609448863437b8e8847c0eeec }, // -3275
    Multiplier { upper: 0xfeafec87f8e1b13f3d31210662ec815c, lower: 0xc54715d6753a73d205927da6d934b17a }, // -3274
    Multiplier { upper: 0xcbbff06cc71af432975a80d1e8bd344a, lower: 0x376c11785dc85ca804753152475d5ac8 }, // -3273
    Multiplier { upper: 0xa2fff38a38e25cf545e200a7ed6429d4, lower: 0xf923412d17d37d5336c4277505e448a0 }, // -3272
    Multiplier { upper: 0x82665c6e93e84a5dd1819a1ff11cee43, lower: 0xfa829a8a7975fddc2bd01f90d1836d4d }, // -3271
    Multiplier { upper: 0xd0a3c717530d43c94f35c3664e94b06c, lower: 0xc4042a7728bcc9604619cc1ae8d2487b }, // -3270
    Multiplier { upper: 0xa6e96c12a8d7696dd8f7cf850baa26bd, lower: 0x699ceec5ba30a119d1ae3ce253db6d2f }, // -3269
    Multiplier { upper: 0x858789a88712babe472ca6040954ebca, lower: 0xbae3f237c826e747daf1ca4ea97c5759 }, // -3268
    Multiplier { upper: 0xd5a5a90da4eac463a5143cd342217944, lower: 0x5e39838c7371720c9182dd4aa8c6f228 }, // -3267
    Multiplier { upper: 0xaaeaeda483ef0382ea76970f681ac769, lower: 0xe4facfa38f8df4d6dacf176eed6bf4ed }, // -3266
    Multiplier { upper: 0x88bbf150698c02cf21f878d920156c54, lower: 0xb72f0c82d93e5d78af0c12bf24565d8a }, // -3265
    Multiplier { upper: 0xdac64ee70f466ae5032727c1ccef13ba, lower: 0xbeb1ad9e2863c8c118135131d3bd6277 }, // -3264
    Multiplier { upper: 0xaf050bec0c3855840285b967d725a962, lower: 0x3227be18204fd3cdacdc40f4a9644ec5 }, // -3263
    Multiplier { upper: 0x8c040989a36044699b9e2decac1e211b, lower: 0x5b52fe79b3730fd7bd7d00c3bab6a56b }, // -3262
    Multiplier { upper: 0xe00675a90566d3dc2c30497aacfd01c5, lower: 0x5eeb30c2b8b819592f2e679f91243bde }, // -3261
    Multiplier { upper: 0xb3385e20d11f0fe3568d07955730ce37, lower: 0x7f228d6893c67aadbf5852e60db6964b }, // -3260
    Multiplier { upper: 0x8f604b4d7418d982aba40611128d71c5, lower: 0xff4ed786dc9ec88aff79dbeb3e2bab6f }, // -3259
    Multiplier { upper: 0xe566dee2535af59ddf6cd681b748b609, lower: 0x987e25a4943140de658fc6453045df18 }, // -3258
    Multiplier { upper: 0xb7857f1b75e25e17e5f0ab9af906f807, lower: 0xad31b7b6dcf433e51e0c9e9dc037e5ad }, // -3257
    Multiplier { upper: 0x92d1327c5e4eb1acb7f3bc7bfa6bf99f, lower: 0xbdc15fc57d902984180a187e335feaf1 }, // -3256
    Multiplier { upper: 0xeae850c6fd4ab5e12652c72cc3dff5cc, lower: 0x62ceffa26280426cf3435a63856644b4 }, // -3255
    Multiplier { upper: 0xbbed0d6bfdd55e4db84238f09cb32b09, lower: 0xe8a5994eb53368572902aeb60451d090 }, // -3254
    Multiplier { upper: 0x96573deffe444b716034fa5a16f5bc07, lower: 0xed5147722a8f86ac20cef22b36a7da0d }, // -3253
    Multiplier { upper: 0xf08b964cca06df1bcd21909024bc600c, lower: 0xaee872504418d779ce17e9debdd95ce2 }, // -3252
    Multiplier { upper: 0xc06fab70a19f18e30a8140735096b33d, lower: 0x58b9f50d034712c7d813217efe477d81 }, // -3251
    Multiplier { upper: 0x99f2ef8d4e18e0b5a201005c40788f64, lower: 0x46fb2a70cf6c0f064675b46598393134 }, // -3250
    Multiplier { upper: 0xf6517f487cf49abc366800939a5a7f06, lower: 0xd7f843e7b2467e7070bc53d5c05b81ed }, // -3249
    Multiplier { upper: 0xc50dff6d30c3aefcf85333a94848659f, lower: 0x132d031fc1d1fec05a30431166af9b24 }, // -3248
    Multiplier { upper: 0x9da4cc575a3625972d0f5c876d06b7b2, lower: 0x75bd9c1967db32337b59cf411ef2e284 }, // -3247
    Multiplier { upper: 0xfc3ae08bc389d5beae7efa72480abf83, lower: 0xef95c68f0c91e9ebf88fb201cb1e3739 }, // -3246
    Multiplier { upper: 0xc9c8b3a302d4aafef1ff2ec1d33bcc69, lower: 0x8c77d20c0a0e54bcc6d95b34a27e9294 }, // -3245
    Multiplier { upper: 0xa16d5c8268aa22658e65bf0175c97054, lower: 0x705fdb3cd4d843ca38ade29081fedbaa }, // -3244
    Multiplier { upper: 0x81244a01ed54e8513eb7cc012b078d10, lower: 0x59e648fd7713696e93be4eda0198afbb }, // -3243
    Multiplier { upper: 0xcea076697bbb0d4ecabfacceab3f481a, lower: 0x297074c8be85757db9307e299c277f91 }, // -3242
    Multiplier { upper: 0xa54d2b87962f3dd8a232f0a555cc39ae, lower: 0x878d2a3a32045dfe2dc064ee1685ffa7 }, // -3241
    Multiplier { upper: 0x843dbc6c7825cb13b4f58d5111702e25, lower: 0x393dbb61c19d17fe8b0050be786b32ec }, // -3240
    Multiplier { upper: 0xd395fa4726a2de85ee55aee81be6b03b, lower: 0x8ec92bcf9c2e8cca78008130c0ab84ad }, // -3239
    Multiplier { upper: 0xa944c838ebb57ed18b77bf2016522696, lower: 0x0bd4230c7cf20a3b93339a8d66ef9d57 }, // -3238
    Multiplier { upper: 0x876a39c722f798a7a2c6328011db5211, lower: 0xa3101c09fd8e6e960f5c7ba452594aac }, // -3237
    Multiplier { upper: 0xd8a9f60b6b25c10c37a384001c921ce9, lower: 0x04e693432f4a4a89b22d92a083c21114 }, // -3236
    Multiplier { upper: 0xad54c4d5ef51673cf94f9ccce3a81720, lower: 0xd0b875cf59083ba15b57a88069680da9 }, // -3235
    Multiplier { upper: 0x8aaa37118c411f63faa6170a4fb9ac1a, lower: 0x40939172ada02fb44912ed3387867154 }, // -3234
    Multiplier { upper: 0xdddd24e8e06832399109be76e5f5e02a, lower: 0x00ec1beaaf66b2ba0e84aeb8d8d71bba }, // -3233
    Multiplier { upper: 0xb17db720b3868e947407cb9251918021, lower: 0x9a567cbbbf855bc80b9d5893e0ac162f }, // -3232
    Multiplier { upper: 0x8dfe2c1a293872105cd30941dadacce7, lower: 0xaeab96fc99377ca0094aad431a2344f2 }, // -3231
    Multiplier { upper: 0xe330469041f3e9b3c7b80ecfc49147d9, lower: 0x1778f1942858c7667544486b5d053b1d }, // -3230
    Multiplier { upper: 0xb5c0387367f6548fd2f9a57303a76cad, lower: 0xac60c143537a391ec436a055e4042f4a }, // -3229
    Multiplier { upper: 0x9166938f865eaa0ca8c7b78f361f8a24, lower: 0x89e70102a92e94189cf88044b669bf6f }, // -3228
    Multiplier { upper: 0xe8a41f4c0a311014413f8c185698dd07, lower: 0x430b34d10eb0ecf42e5a66d4570f98b1 }, // -3227
    Multiplier { upper: 0xba1ce5d66e8da6769a993ce045471739, lower: 0x026f5d740bc0bd9025151f1045a613c1 }, // -3226
    Multiplier { upper: 0x94e3eb11f20aeb92154763e69dd278fa, lower: 0x685917900966fe0cea774c0d0484dc9a }, // -3225
    Multiplier { upper: 0xee39781cb677df50220bd30a961d8e5d, lower: 0x73c1bf4cdbd7fce17725467b3a6e2dc3 }, // -3224
    Multiplier { upper: 0xbe946016f85fe5d9b4d6426ede7e0b7d, lower: 0xf634990a4979971ac5b76b95c858249c }, // -3223
    Multiplier { upper: 0x9876b345937feb1490ab6858b1fe6f97, lower: 0xf82a14083ac7ac156af922de39e01d4a }, // -3222
    Multiplier { upper: 0xf3f11ed5b8ccab541aabda278330b28c, lower: 0xc04353405e0c4688ab2837c9f6336210 }, // -3221
    Multiplier { upper: 0xc3274bde2d7089101556481f9c26f53d, lower: 0x669c4299e4d69ed3bc202ca191c2b4d9 }, // -3220
    Multiplier { upper: 0x9c1f6fe4f126d40cdddea01949b8c431, lower: 0x1ee3687b1d787f0fc9b356e7a7cef714 }, // -3219
    Multiplier { upper: 0xf9cbe63b1b715347c964335ba927a04e, lower: 0x97d240c4fbf3fe7fa91ef172a617f1ba }, // -3218
    Multiplier { upper: 0xc7d651c8e2c10f6ca11cf5e2edb94d0b, lower: 0xaca833d0c98ffecc874bf45bb81327c8 }, // -3217
    Multiplier { upper: 0x9fdea7d3e89a72bd4db0c4b58afaa409, lower: 0x56ecf640a13fff0a05d65d162cdc1fd3 }, // -3216
    Multiplier { upper: 0xffcaa61fda90b795491ad455ab2aa00e, lower: 0xf17b239a9b9998100956fb56ae2cffb8 }, // -3215
    Multiplier { upper: 0xcca21e7fe20d5faaa0e24377bc2219a5, lower: 0x8dfc1c7bafae13400778c91224f0cc94 }, // -3214
    Multiplier { upper: 0xa3b4e5331b3de6221a4e9c5fc9b4e151, lower: 0x3e6349fc8c8b42999f93d40e83f3d6dd }, // -3213
    Multiplier { upper: 0x82f71dc27c3184e8150bb04ca15d810d, lower: 0xcb82a196d6d5cee14c76433ecff6457d }, // -3212
    Multiplier { upper: 0xd18b62d0c6b5a17354df807a9bc8ce7c, lower: 0x78d1028af15617cee0bd38647ff06f2f }, // -3211
    Multiplier { upper: 0xa7a2b573d22ae78f77193395496d71fd, lower: 0x2d740208c111aca5809760506659f28c }, // -3210
    Multiplier { upper: 0x861bc45ca82252d92c1429443abdf4ca, lower: 0x8ac334d3cda7bd5133ac4d0d1eae5ba3 }, // -3209
    Multiplier { upper: 0xd692d3c7736a1e284686a86d2ac987aa, lower: 0x779ebaec7c3f954eb913ae7b644a2c38 }, // -3208
    Multiplier { upper: 0xaba8a96c5c54e4ed053886bdbbd46c88, lower: 0x5fb22f239699443efa76252f836e89c7 }, // -3207
    Multiplier { upper: 0x8953babd16aa50bd9dc6d231631056d3, lower: 0x7fc1bf4fabadd03261f81dbf9c586e39 }, // -3206
    Multiplier { upper: 0xdbb92ac82443b462960ae9e89e808aeb, lower: 0xff9c654c45e2e6b7032695ff608d7d27 }, // -3205
    Multiplier { upper: 0xafc7556ce9cfc38211a254ba1866d589, lower: 0x9949eaa36b1bebc59c1ede65e6d79752 }, // -3204
    Multiplier { upper: 0x8c9f778a54a63601a7b51094e052446e, lower: 0x143b221c55afefd149b24b84b8ac790f }, // -3203
    Multiplier { upper: 0xe0ff25aa2109f002a5ee80ee33b6d3e3, lower: 0x5391d02d55e64c820f83ac078de0c1b1 }, // -3202
    Multiplier { upper: 0xb3ff5154e73b266884becd8b5c92431c, lower: 0x42db0cf111850a01a602f0060b1a348e }, // -3201
    Multiplier { upper: 0x8fff7443ec2f51ed36ff0ad5e3a835b0, lower: 0x357c0a5a746a6e67b802599e6f482a0b }, // -3200
    Multiplier { upper: 0xe66586d3137ee97b8b31aaefd2a6bc4d, lower: 0x22601090ba43e3d9266a28fd7ed9dcde }, // -3199
    Multiplier { upper: 0xb85138a8dc65879608f488bfdbb896a4, lower: 0x1b800d4095031cadb854ed9798ae4a4b }, // -3198
    Multiplier { upper: 0x93742d53e3846c78072a06ffe2fa121c, lower: 0xe2ccd766dd9c16f16043f14613bea1d6 }, // -3197
    Multiplier { upper: 0xebed155305a0ad8cd8433e6637f68361, lower: 0x6ae158a495c68b1bcd398209b93102f0 }, // -3196
    Multiplier { upper: 0xbcbdaaa8d14d57a3e035cb84f99202b4, lower: 0x558113b6de386f4970face6e2dc0cf26 }, // -3195
    Multiplier { upper: 0x96fe2220a77112e9802b09372e0e6890, lower: 0x446742f8b1c6bf6df3fbd858249a3f52 }, // -3194
    Multiplier { upper: 0xf1969d010be81e4266ab41f1e34a40e6, lower: 0xd3d86b2782d798afecc626f36dc39883 }, // -3193
    Multiplier { upper: 0xc1454a673cb9b1ceb889018e4f6e9a52, lower: 0x431388ec68ac7a265704ebf5f16946cf }, // -3192
    Multiplier { upper: 0x9a9dd51f63c7c1722d3a67a50c587b75, lower: 0x0276072386f061b8459d89918dedd23f }, // -3191
    Multiplier { upper: 0xf762ee989fa60250485d72a1ad5a5f21, lower: 0x9d89a505a4b3cf8d3c2f42827cafb6cc }, // -3190
    Multiplier { upper: 0xc5e8bee07fb801d9d37df54e24484c1a, lower: 0xe46e1d9e1d5ca60a968c3535308c923d }, // -3189
    Multiplier { upper: 0x9e53cbe6cc9334ae42cb2aa4e9d37015, lower: 0x838b4ae4e44a1e6eded690f75a0a0e97 }, // -3188
    Multiplier { upper: 0xfd52dfd7adb8544a0478443b0fb8b355, lower: 0x9f4544a16d4363e497bdb4bef6767dbe }, // -3187
    Multiplier { upper: 0xcaa8b312f160436e69f9d02f3fc6f5de, lower: 0x190436e78a9c4fea12fe2a325ec53165 }, // -3186
    Multiplier { upper: 0xa2208f425ab369252194a68c3305917e, lower: 0x7a69c586087d0cbb4264ee8eb2375ab7 }, // -3185
    Multiplier { upper: 0x81b3a5ceaef5edb74e10853cf59e0dfe, lower: 0xc8549e04d3973d629b83f20bc1c5e22c }, // -3184
    Multiplier { upper: 0xcf85d6177e56492549b4086188fce331, lower: 0x4087633aec252f042c065012cfa3037a }, // -3183
    Multiplier { upper: 0xa604ab45feab6db76e29a04e0730b5c1, lower: 0x006c4f625684259cf0050cdbd94f35fb }, // -3182
    Multiplier { upper: 0x84d08904cbbc57c5f1bae6a4d28d5e34, lower: 0x0056a5e84536847d8cd0d71647729196 }, // -3181
    Multiplier { upper: 0xd480db3adf93bfa31c5e3dd484156386, lower: 0x66f10973a1f0d3fc14815823a5841c23 }, // -3180
    Multiplier { upper: 0xaa00af624c7632e8e37e97dd367782d1, lower: 0xebf4078fb4c0a99676cde01c8469b01c }, // -3179
    Multiplier { upper: 0x88008c4ea391c253e93213175ec60241, lower: 0x8990060c909a21452bd7e67d36baf34a }, // -3178
    Multiplier { upper: 0xd99a7a176c1c6a1fdb8351befe099d35, lower: 0xa8e670141a90353b795970c857918542 }, // -3177
    Multiplier { upper: 0xae152e792349ee7fe2cf7498cb3ae42a, lower: 0xed8526767ba690fc61145a39dfa79dcf }, // -3176
    Multiplier { upper: 0x8b44252db5d4beccb572c3ad6f625022, lower: 0x579db85ec9520d96b410482e4c8617d9 }, // -3175
    Multiplier { upper: 0xded36eaf8954647abbead2af189d4d03, lower: 0xbf62c097a88348f1201a0d16e0d68c8d }, // -3174
    Multiplier { upper: 0xb242bef2d443839563224225ad4aa402, lower: 0xff8233ac86cf6d8db3480a78b3ded6d8 }, // -3173
    Multiplier { upper: 0x8e9bcbf5769c69444f4e9b51576ee99b, lower: 0xff9b5c8a0572be0af5d33b93c318abe0 }, // -3172
    Multiplier { upper: 0xe42c7988bdc70ed3b2175ee88be4a8f9, lower: 0x98f8941008b79677efb85f52d1c112ff }, // -3171
    Multiplier { upper: 0xb689fad3cb05a5762812b253a31d53fa, lower: 0xe0c6dcd9a092dec659604c4241674266 }, // -3170
    Multiplier { upper: 0x9207fbdca26aeac4ecdbc1dc827ddcc8, lower: 0xb3d24a47b3a8b23847803d01cdec351f }, // -3169
    Multiplier { upper: 0xe9a65fc76a44aad4ae2c6960d0c96141, lower: 0x1fb6dd3f85dab6c07266c802e3138831 }, // -3168
    Multiplier { upper: 0xbaeb7fd2bb6a2243be89ede70d6de767, lower: 0x4c924a9937e22bcd2852399be8dc6cf4 }, // -3167
    Multiplier { upper: 0x9589330efc54e8363207f185a457ec52, lower: 0xa3a83badc64e8970ed0e947cba49f0c3 }, // -3166
    Multiplier { upper: 0xef41eb4b2d54a6bd1cd9826f6d597a1d, lower: 0xd2a6c5e2d6e40f1b14e420c790764e05 }, // -3165
    Multiplier { upper: 0xbf67ef6f5776ebca7d7acebf8aadfb4b, lower: 0x0eebd18245833f48dd834d6c7391d804 }, // -3164
    Multiplier { upper: 0x991ff2bf792befd5312f0bcc6ef195d5, lower: 0xa5897468379c32a0b135d789f60e466a }, // -3163
    Multiplier { upper: 0xf4ffeacbf51319551b7e794717e8efbc, lower: 0x3c0f20a6bf6051011b8958dcbce3a3dc }, // -3162
    Multiplier { upper: 0xc3ffef0990dc144415fec76c1320bfc9, lower: 0xc9a5b3b89919da67493aad7d63e94fe3 }, // -3161
    Multiplier { upper: 0x9cccbf3ada49a9d011989f89a8e6ffd4, lower: 0xa1515c93adae4852a0fbbdfde987731c }, // -3160
    Multiplier { upper: 0xfae131f7c3a90fb34f5a98dc41719954, lower: 0x354efa85e2b073b767f92ffca8d8b82d }, // -3159
    Multiplier { upper: 0xc8b427f969540c8f72aee0b0345ae110, lower: 0x2aa59537e88d295f8660f3308713c68a }, // -3158
    Multiplier { upper: 0xa0901ffabaa9a3a5f558b3c029e24da6, lower: 0x8884775fed3dbab2d1e728f39f43053c }, // -3157
    Multiplier { upper: 0x80734cc8955482eb2aad5c99bb1b7152, lower: 0x06d05f7ff0fe2ef574b8ed8fb29c0430 }, // -3156
    Multiplier { upper: 0xcd8547a7555404ab777bc75c5e924ee9, lower: 0xa48098ccb4c9e4bbedf4af4c50f9a04c }, // -3155
    Multiplier { upper: 0xa46a9fb9111003bc5f963916b20ea587, lower: 0xb6cd470a2a3b1d6324c3bf7040c7b370 }, // -3154
    Multiplier { upper: 0x83887fc740d99c96b2de9412280bb79f, lower: 0xc57105a1bb627de8ea3632c033d2f5f3 }, // -3153
    Multiplier { upper: 0xd273ffa5348f60f11e30ece9d9ac58ff, lower: 0xa24e6f692bd0c974a9f05133861e5652 }, // -3152
    Multiplier { upper: 0xa85ccc842a0c4d8db1c0bd87e156ad99, lower: 0x4ea525edbca7079087f374293818450f }, // -3151
    Multiplier { upper: 0x86b0a39cee703e0af49a31398112247a, lower: 0xa550eb2496ec060d398f9020f9ad040c }, // -3150
    Multiplier { upper: 0xd78105c7e3e6c9ab20f6b528ce836d91, lower: 0x0881783a8b133ce1f5b28034c2ae6cdf }, // -3149
    Multiplier { upper: 0xac6737d31cb8a155b3f890ed7202be0d, lower: 0xa067936208dc30b4c48eccf7022523e6 }, // -3148
    Multiplier { upper: 0x89ec2ca8e3c6e777c32d40bdf4cefe71, lower: 0x4d1fa91b3a49c0909d3f0a5f34ea831e }, // -3147
    Multiplier { upper: 0xdcad14416c71725938486796547e63e8, lower: 0x7b65db5ec3a9341a9531aa31ee4404fd }, // -3146
    Multiplier { upper: 0xb08a769abd278eadc6a052dea9feb653, lower: 0x95eb15e5695429aeddc154f4be9cd0cb }, // -3145
    Multiplier { upper: 0x8d3b9215641fa557d219dbe554cbc50f, lower: 0xab2277eabaa9baf24b0110c3cbb0a709 }, // -3144
    Multiplier { upper: 0xe1f8e9bbd365d55950295fd554793b4c, lower: 0x4503f3112aa92b1d44ce813945e771a7 }, // -3143
    Multiplier { upper: 0xb4c721630f84aaadd9bab3111060fc3d, lower: 0x040328da888755b103d8676104b927b9 }, // -3142
    Multiplier { upper: 0x909f4de8d936eef17afbc2740d1a6364, lower: 0x0335ba486d39115a6979ec4d9d60ec94 }, // -3141
    Multiplier { upper: 0xe76549748ebe4b1bf7f9372014f7056c, lower: 0xd1ef9073e1f4e890a8c313af6234adb9 }, // -3140
    Multiplier { upper: 0xb91dd45d3efea27cc660f8e6772c0457, lower: 0x0e59405cb4c3ed4087027625e82a2494 }, // -3139
    Multiplier { upper: 0x9417dd17659881fd6b80c71ec5bcd045, lower: 0xa514337d5d698a9a059b91b7ecee83aa }, // -3138
    Multiplier { upper: 0xecf2fb58a28d9cc8ac013e97a2c7b3a2, lower: 0xa1b9ebfbc8a8ddc33c2c1c597b173910 }, // -3137
    Multiplier { upper: 0xbd8f2f7a1ba47d6d566765461bd2f61b, lower: 0xb494bcc96d53e49c302349e12f45c740 }, // -3136
    Multiplier { upper: 0x97a5bf94e2e9fdf111ec5104e30f2b49, lower: 0x5d43ca3abddcb6e359b5d4b425d16c33 }, // -3135
    Multiplier { upper: 0xf2a2cc216b0ffcb4e97a1b3b04e5120e, lower: 0xfb9fa9f7962df16bc2bc8786a2e8ad1f }, // -3134
    Multiplier { upper: 0xc21bd68122733090bac815c8d0b741a5, lower: 0x961954c611be5abc9bca06054f208a7f }, // -3133
    Multiplier { upper: 0x9b4978674ec28d40956cde3a40929aea, lower: 0xde7aaa380e31e2307ca19e6aa5b3a1ff }, // -3132
    Multiplier { upper: 0xf8758d72179daecdbbe163906750f7de, lower: 0x30c4438ce3830380c768fd776f85cffe }, // -3131
    Multiplier { upper: 0xc6c4712812e48bd7c9811c7385da5fe4, lower: 0xf3d0360a4f9c02cd6c53fdf92604a665 }, // -3130
    Multiplier { upper: 0x9f038db9a8b6d6463acdb05c6b151983, lower: 0xf6402b3b72e33571237664c7519d51eb }, // -3129
    Multiplier { upper: 0xfe6c15f5dabe23a391491a2d7821c26c, lower: 0xbd33785f1e385581d25707a54f621caa }, // -3128
    Multiplier { upper: 0xcb89ab2b1564e94fa76dae8ac6816856, lower: 0xfdc2c6b27e93779b0eac061dd91b4a22 }, // -3127
    Multiplier { upper: 0xa2d488ef4450baa61f8af2089ecded12, lower: 0x649bd2286542c615a5566b4b1415d4e8 }, // -3126
    Multiplier { upper: 0x8243a0bf69da2eeb4c6f2806e5718a75, lower: 0x1d4974ed1dcf04de1ddebc3c10117720 }, // -3125
    Multiplier { upper: 0xd06c34657629e4abad7ea6716f1c10bb, lower: 0x620f217b62e4d49696312d2ce6825833 }, // -3124
    Multiplier { upper: 0xa6bcf6b791bb1d56246551f458e34095, lower: 0xe80c1ac91bea43abab5a8a8a5201e029 }, // -3123
    Multiplier { upper: 0x8563f892dafc17781d1ddb29e0b5cd44, lower: 0xb9a348a0e321cfbc89153ba1db34b354 }, // -3122
    Multiplier { upper: 0xd56cc0eaf7f9bf2694fc91dc9abc7ba1, lower: 0x290541016b694c60db552c362b878553 }, // -3121
    Multiplier { upper: 0xaabd67225ffaff5210ca0e4a1563961a, lower: 0x8737673455edd6b3e2aa89c4ef9f9ddc }, // -3120
    Multiplier { upper: 0x889785b51995990e73d4d83b444fab48, lower: 0x6c2c529044be455cb5553b03f2e617e4 }, // -3119
    Multiplier { upper: 0xda8c0921c288f4e3ec87c05ed3b2aba7, lower: 0x137a1db3a1306efabbbb919feb09bfd2 }, // -3118
    Multiplier { upper: 0xaed66db49ba0c3e98a06337f0fc222ec, lower: 0x0f94e48fb426bf2efc960e1988d49975 }, // -3117
    Multiplier { upper: 0x8bdebe2a161a36546e6b5c65a634e8bc, lower: 0xd943ea0c901eff58ca11a4e13a43adf7 }, // -3116
    Multiplier { upper: 0xdfcac9dcf029f08717122d6f7054a794, lower: 0x8ed3101419cb3227a9b5d49b906c498b }, // -3115
    Multiplier { upper: 0xb308a17d8cee5a05ac0e8abf8d108610, lower: 0x7242734347d5c1b9549176e2d9f03ad6 }, // -3114
    Multiplier { upper: 0x8f3a1acad72514d1567208993da6d1a6, lower: 0xc1cec29c3977ce2ddd412be8ae59c8ab }, // -3113
    Multiplier { upper: 0xe529c477bea1bae88a500dc1fc3e1c3e, lower: 0x02e46a938f2616afc868464116f60ddf }, // -3112
    Multiplier { upper: 0xb7549d2c98816253a1d9a49b3031b031, lower: 0x9be9eedc7284def306b9d1cdabf80b19 }, // -3111
    Multiplier { upper: 0x92aa1756e06781dc817aea15c027c027, lower: 0xafee58b05b9d7f28d22e4171566008e1 }, // -3110
    Multiplier { upper: 0xeaa9bef1670c02fa68c4a9bc66a6003f, lower: 0x7fe3c11a2c2f31dae9e39be88a334167 }, // -3109
    Multiplier { upper: 0xbbbaff2785a33595209d5496b884ccff, lower: 0x998300e1bcf28e48bb1c7cba0829011f }, // -3108
    Multiplier { upper: 0x962f3286048291441a1776defa03d732, lower: 0xe1359a4e30c20b6d627d3094d35400e6 }, // -3107
    Multiplier { upper: 0xf04b8409a0d0e86cf68bf164c3395851, lower: 0x6855c3b04e03457bd0c84dbaebb99b09 }, // -3106
    Multiplier { upper: 0xc03c69a14d73ed23f86ff4509c2de041, lower: 0x20449c8d0b35d12fda39d7c8bc947c07 }, // -3105
    Multiplier { upper: 0x99c9ee1aa45cbdb6605990407cf18034, lower: 0x19d07d3da2917426482e463a3076c9a0 }, // -3104
    Multiplier { upper: 0xf60fe35dd3c795f09a28e6cd94b599ec, lower: 0xf61a61fc374f203d404a09f6b3f14299 }, // -3103
    Multiplier { upper: 0xc4d982b1763944c07b53ebd7aa2ae18a, lower: 0x5e7b819692a5b364336e6e5ef65a9bad }, // -3102
    Multiplier { upper: 0x9d7acef45e94370062a9897954ef1ad5, lower: 0x1862ce120eeaf5e9c2bebeb25eaee2f1 }, // -3101
    Multiplier { upper: 0xfbf7b186fdb9f19a3775a8c2217e9154, lower: 0xf3d149b67e44bca937979783cab16b1b }, // -3100
    Multiplier { upper: 0xc992f46bfe2e5ae1c5f7ba34e7987443, lower: 0xf64107c531d096edc612df9ca22788e3 }, // -3099
    Multiplier { upper: 0xa1425d2331beaf1b04c62e90b946c369, lower: 0x91cd9fd0f4a6df249e757fb081b93a4f }, // -3098
    Multiplier { upper: 0x8101e41c27cbbf48d09e8ba6fa9f02ba, lower: 0xdb0ae640c3b8b283b1f7995a0160fb73 }, // -3097
    Multiplier { upper: 0xce696cf9d945fedae76412a4c4319df7, lower: 0xc4de3d346c5ab7391cbf5bc33567f8b7 }, // -3096
    Multiplier { upper: 0xa52123fb1437ff1585e9a883d027b193, lower: 0x03e4fdc389e22c2db0991635c4532d5f }, // -3095
    Multiplier { upper: 0x841a832f435fff446b21539ca68627a8, lower: 0xcfea649c6e4e89be26e0de9169dc244c }, // -3094
    Multiplier { upper: 0xd35d9eb20566653a45021f610a703f74, lower: 0x7fdd6dc716e40f96a49afdb5762d06e0 }, // -3093
    Multiplier { upper: 0xa917b2280451ea950401b2b40859cc5d, lower: 0x33178b05abe9a6121d48caf791bd9f1a }, // -3092
    Multiplier { upper: 0x874628200374bbaa699af55cd37b09e4, lower: 0x28dfa26aefee1e74e43a3bf941647f48 }, // -3091
    Multiplier { upper: 0xd870403338bac5dd75c4bbc7b8c4dca0, lower: 0x4165d0ab197cfd87d3905ff5356d9873 }, // -3090
    Multiplier { upper: 0xad2699c293c89e4ac49d63062d6a4a19, lower: 0xcdeb0d55adfd979fdc737ff75df146c3 }, // -3089
    Multiplier { upper: 0x8a8547cedca07ea236e44f3824550814, lower: 0xa4bc0aaaf197ac7fe38f9992b18dd235 }, // -3088
    Multiplier { upper: 0xdda20c7e2dcd9769f16d4b8d06ee7354, lower: 0x3ac67777e8f2ad996c18f5b7827c8388 }, // -3087
    Multiplier { upper: 0xb14e7064f17145ee5abdd60a6bf1f5dc, lower: 0xfbd1f92cba5bbe14567a5e2c68639c6d }, // -3086
    Multiplier { upper: 0x8dd859ea5ac104beaefe44d52327f7e3, lower: 0xfca7fa8a2eafcb437861e4f05382e38b }, // -3085
    Multiplier { upper: 0xe2f3c3109134d4644b306e21d1d98c9f, lower: 0xfaa65da9e44c786bf3cfd4b3b8d16c11 }, // -3084
    Multiplier { upper: 0xb58fcf40742a43836f59f1b4a7e13d4c, lower: 0xc88517bb1d09f9eff63fdd5c93dabcda }, // -3083
    Multiplier { upper: 0x913fd9005cee9c6925e18e2a1fe7643d, lower: 0x6d37462f4a6e618cc4ffe44a0fe230af }, // -3082
    Multiplier { upper: 0xe866280094b0fa41d635b043663f06c8, lower: 0xaebed6b210b09c146e663a101969e77d }, // -3081
    Multiplier { upper: 0xb9eb5333aa272e9b11c48d02b8326bd3, lower: 0xbeff12280d5a1676beb82e734787ec64 }, // -3080
    Multiplier { upper: 0x94bc428fbb528baf416a0a68935b8976, lower: 0x3265a8200aae785efef9bec29f9ff050 }, // -3079
    Multiplier { upper: 0xedfa04192bb745e53576770db8927589, lower: 0xea3c4033444a5a3197f5fe0432998080 }, // -3078
    Multiplier { upper: 0xbe619ce0efc5d1842ac52c0afa0ec46e, lower: 0x54fd0029036eae8e132b319cf5479a00 }, // -3077
    Multiplier { upper: 0x984e171a596b0e03556a89a261a569f1, lower: 0xdd97335402bef20b4288f47d910614cd }, // -3076
    Multiplier { upper: 0xf3b024f6f578166bbbdda903cf6f0fe9, lower: 0x628b85533797e9ab9da7ed95b4d687af }, // -3075
    Multiplier { upper: 0xc2f350c5912cdebc964aed9ca5f27321, lower: 0x1ba2d10f5facbaefb1532477c3ded2f2 }, // -3074
    Multiplier { upper: 0x9bf5da37a7571896dea257b084c1f5b4, lower: 0x161bda72b2f0958c8ddc1d2c9cb2425b }, // -3073
    Multiplier { upper: 0xf9895d25d88b5a8afdd08c4da13655ec, lower: 0xf02c90b784b4227a7c9361e0fab6d092 }, // -3072
    Multiplier { upper: 0xc7a117517a09153bfe40703e1a91de57, lower: 0x268a0d5f9d5ce861fd42b4b3fbc573a8 }, // -3071
    Multiplier { upper: 0x9fb412a794d410fccb66c031aedb1845, lower: 0xb86e71194ab0b9e7fdcef6f663045c87 }, // -3070
    Multiplier { upper: 0xff86843f5486819478a466b5e491c06f, lower: 0x8d7d81c2111ac30cc94b24bd6b3a2da4 }, // -3069
    Multiplier { upper: 0xcc6b9cff76d2014393b6b89183a7cd26, lower: 0x0acace34da7bcf3d6dd5b6fdef61be1d }, // -3068
    Multiplier { upper: 0xa3894a65f8a80102dc922d41361fd751, lower: 0xa23bd82a48630c3124aaf8cb25e7cb4a }, // -3067
    Multiplier { upper: 0x82d43b84c6eccd9be3a824342b4cac41, lower: 0x4e96468839e8d68db6ef2d6f51863c3c }, // -3066
    Multiplier { upper: 0xd153926e0b147c2c9f736d2045477a02, lower: 0x1756d7405ca7bdaf8b1848b21c09f9f9 }, // -3065
    Multiplier { upper: 0xa7760ebe6f43968a19292419d105fb34, lower: 0xdf78ac337d52fe2608e03a28166e6194 }, // -3064
    Multiplier { upper: 0x85f80bcb8c3612081420e9ae40d195c3, lower: 0xe5fa235c644264eb3a4cfb5345251add }, // -3063
    Multiplier { upper: 0xd659ac78e05683402034a916ce1c22d3, lower: 0x09903893d39d6e452a14c552083b5e2e }, // -3062
    Multiplier { upper: 0xab7af060b378690019c3ba78a4e34f0f, lower: 0x3ad9c6dca94abe9dbb43d10e6cfc4b58 }, // -3061
    Multiplier { upper: 0x892f26b3c2c6ba667b02fb93b71c3f3f, lower: 0x6247d24a2108987e2f69740b8a636f7a }, // -3060
    Multiplier { upper: 0xdb7ea452d13df70a5e6b2c1f8b606532, lower: 0x36d950769b40f3fd18a8b9ac109f18c2 }, // -3059
    Multiplier { upper: 0xaf9883757431926eb1ef567fa2b38428, lower: 0x2be10d2baf67299746ed615673b27a35 }, // -3058
    Multiplier { upper: 0x8c7a02c45cf475255b25decc82293686, lower: 0x8980d75625ec2145d2578111f62861c4 }, // -3057
    Multiplier { upper: 0xe0c337a094ba550891d6314736a8573d, lower: 0xa8ce2556a313686fb6f2681cbd0d6939 }, // -3056
    Multiplier { upper: 0xb3cf5fb3aa2eaa6d4178276c2bb9df64, lower: 0x870b51121c0f86bfc58eb9b0973dedc8 }, // -3055
    Multiplier { upper: 0x8fd9195c8825552434601f89bc94b2b6, lower: 0xd26f740e7cd938996ad8948d45cb24a0 }, // -3054
    Multiplier { upper: 0xe62828940d088839ed6698dc60edeabe, lower: 0x1d7f20172e285a8f115a87486fab6dcc }, // -3053
    Multiplier { upper: 0xb820207670d3a02e57854716b3f18898, lower: 0x1798e678f1b9e20c0de205d38c8924a4 }, // -3052
    Multiplier { upper: 0x934ce6c5270fb358460438def65ad3ac, lower: 0xdfad852d8e2e4e700b1b37dc706db6e9 }, // -3051
    Multiplier { upper: 0xebae3e083e7f855a09a05afe56f7b914, lower: 0x9915a1e27d16e3e6782b8c93e715f175 }, // -3050
    Multiplier { upper: 0xbc8b64d36532d114d48048cb78c62daa, lower: 0x14114e4eca78b651f9bc70765277f45e }, // -3049
    Multiplier { upper: 0x96d5ea42b75bda771066a0a2c704f154, lower: 0xdcdaa50bd52d5ea7fafd26c50ec65d18 }, // -3048
    Multiplier { upper: 0xf156439df22c90be80a43437a4d4b554, lower: 0x94910812eeaefdd991950ad4e47094f3 }, // -3047
    Multiplier { upper: 0xc111cfb18e8a0d6533b6902c83dd5ddd, lower: 0x43a739a8bef264ae0e10d5771d26dd8f }, // -3046
    Multiplier { upper: 0x9a74a627a53b3dea8fc540239cb117e4, lower: 0x361f6153cbf51d580b40aac5b0ebe473 }, // -3045
    Multiplier { upper: 0xf72109d9085ec9774c6ecd05c781bfd3, lower: 0x89cbceec79882ef34534446f81796d84 }, // -3044
    Multiplier { upper: 0xc5b407e0d37f0792a38bd737d2ce330f, lower: 0xa16fd8bd2e068bf5d0f69d26012df136 }, // -3043
    Multiplier { upper: 0x9e299fe70f98d2dbb60978f97571c272, lower: 0xe78cad6424d2099173f87db800f18dc5 }, // -3042
    Multiplier { upper: 0xfd0f663e7f5aeaf923425b28bbe9371e, lower: 0x3f477bd36e1cdc1becc0c92667e8e2d5 }, // -3041
    Multiplier { upper: 0xca72b831ff7bef2db5ceaf53c9875f4b, lower: 0x65d2c975f1b0b0165700a0eb8653e8aa }, // -3040
    Multiplier { upper: 0xa1f56027ff9658f15e3ef2a96e05e5d5, lower: 0xeb0f07918e26f3451266e722d1dcba22 }, // -3039
    Multiplier { upper: 0x819119b9994513f44b658eedf19e5177, lower: 0xef3f39413e858f6a751f1f4f0e4a2e82 }, // -3038
    Multiplier { upper: 0xcf4e8f8f5ba1b986df08e4afe8fd4f26, lower: 0x4b985b9b973c18aa54fe987e7d437d9c }, // -3037
    Multiplier { upper: 0xa5d872d9161afad24c071d5987310c1e, lower: 0xa2e0494945c9ad5510cbad31fdcf97b0 }, // -3036
    Multiplier { upper: 0x84ad28adab48c8a83cd27de138f409b2, lower: 0x1be6a1076b07bddda709575b3172dfc0 }, // -3035
    Multiplier { upper: 0xd4484115dedadaa6c7b72fcec18675e9, lower: 0xc63dce7244d92fc90b42255eb5849933 }, // -3034
    Multiplier { upper: 0xa9d36744b248aeebd2f8f30bce052b21, lower: 0x6b64a5283714263a6f681de55e03adc3 }, // -3033
    Multiplier { upper: 0x87dc529d5b6d58bca8c728d63e6a88e7, lower: 0x891d50ecf8dceb61f2b9b1844b36249c }, // -3032
    Multiplier { upper: 0xd960842ef8aef4610e0b7489fd774172, lower: 0x74fbb4ae5afb123651291c06debd075f }, // -3031
    Multiplier { upper: 0xade6d02593bf29e73e6f906e645f678e, lower: 0xc3fc908b7bfc0e91da87499f18973919 }, // -3030
    Multiplier { upper: 0x8b1f0ceadc98ee5298594058504c52d8, lower: 0x9cca0d3c63300ba7e205d47f46df60e1 }, // -3029
    Multiplier { upper: 0xde9814aafa8e4a1dc08ecd5a1a13b7c0, lower: 0xfadce1fa384cdf73033c87320aff0168 }, // -3028
    Multiplier { upper: 0xb21343bbfba50817cd3f0aae7b42f967, lower: 0x2f171b2e9370b2c268fd38f4d598cded }, // -3027
    Multiplier { upper: 0x8e75cfc9961da0130a98d558629bfab8, lower: 0xf278e28ba926f56853fdc72a447a3e57 }, // -3026
    Multiplier { upper: 0xe3efb2dc236299b810f4888d6a932ac1, lower: 0x83f49dac41d7ef0d532fa5106d9063be }, // -3025
    Multiplier { upper: 0xb6595be34f82149340c3a071220f5567, lower: 0x9cc3b1569b1325a4428c840d247382ff }, // -3024
    Multiplier { upper: 0x91e1164f72ce76dc33cfb38db4d9111f, lower: 0xb09c8ddee275b7b69ba39cd7505c68cc }, // -3023
    Multiplier { upper: 0xe96823b2514a57c6b94c527c548e81cc, lower: 0x4dc749649d8925f0f905c7bee6fa4146 }, // -3022
    Multiplier { upper: 0xbab9b62841084638943d0ec9dd3ece3d, lower: 0x0b05d4507e07518d94049fcbebfb676b }, // -3021
    Multiplier { upper: 0x95615e869a6d04fa1030d8a17dcbd830, lower: 0xd59e43739805dad7a99d4ca3232f85ef }, // -3020
    Multiplier { upper: 0xef0230d75d7b3b29b3815a9bfc7959e7, lower: 0xbc306bec266fc48c4295476b6b7f3cb2 }, // -3019
    Multiplier { upper: 0xbf34f3df7dfc2f548f9aaee3306114b9, lower: 0x6359eff01ebfd07035443922bc65ca28 }, // -3018
    Multiplier { upper: 0x98f7297f97fcf2aa0c7bbf1c26b41094, lower: 0x4f7b2659b2330d26910360e896b7d4ed }, // -3017
    Multiplier { upper: 0xf4bea8cc26618443472c64f9d78680ed, lower: 0x4bf83d5c5051aea41b389b0dbdf2ee48 }, // -3016
    Multiplier { upper: 0xc3cbba3ceb81369c38f050c7df9ecd8a, lower: 0xa32cfde373748bb67c2d48d7cb28bea0 }, // -3015
    Multiplier { upper: 0x9ca2fb63ef9a921693f373d3194bd7a2, lower: 0x1c23fe4f8f906fc530243a463c209880 }, // -3014
    Multiplier { upper: 0xfa9e5f064c2a8357531f1fb828795903, lower: 0x603996e5b280b2d519d3907060342733 }, // -3013
    Multiplier { upper: 0xc87eb26b702202ac427f4c9353944735, lower: 0xe69478b7c2008f10e1760d26b35cec29 }, // -3012
    Multiplier { upper: 0xa0655b8926819bbd01ff7075dc769f5e, lower: 0x52106093019a0c0d812b3db88f7d89ba }, // -3011
    Multiplier { upper: 0x8051160752014964019926c4b05ee5e5, lower: 0x0e7380759ae1a33e00ef6493a5fe07c8 }, // -3010
    Multiplier { upper: 0xcd4e89a550020f0668f50ad44d64a308, lower: 0x171f33ef5e35d1fcce4bd41f6ffcd940 }, // -3009
    Multiplier { upper: 0xa43ed4844001a59eba5da243711d4f39, lower: 0xac18f659182b0e63d83ca9b2bffd7a9a }, // -3008
    Multiplier { upper: 0x836576d03334847efb7e1b69274aa5c7, lower: 0xbce0c5141355a51cacfd548efffdfbae }, // -3007
    Multiplier { upper: 0xd23bf14d1eba6d97f8c9c5750baaa2d9, lower: 0x2e346e868555d4faae6220e4ccc992b0 }, // -3006
    Multiplier { upper: 0xa82ff43db22ebe132d6e3790d6221be0, lower: 0xf1c38b9ed111772ef1e81a50a3d4755a }, // -3005
    Multiplier { upper: 0x868cc3648e8bcb428abe92da44e8164d, lower: 0x8e36094bda745f58c1867b73b6439115 }, // -3004
    Multiplier { upper: 0xd7479f074a79453744641e2a07d9bd48, lower: 0xe389a8795d86fef468d72bec56d281bb }, // -3003
    Multiplier { upper: 0xac394c05d52dd0f903834b54d314976d, lower: 0x82d486c77e0598c387128989df0ece2f }, // -3002
    Multiplier { upper: 0x89c77004aa8b0d9402cf6f770f43ac57, lower: 0x9bdd389f98047a3605a86e07e5a571bf }, // -3001
    Multiplier { upper: 0xdc724cd44411af5337b24bf1b205e08c, lower: 0x2c952765c00729f0090d7cd96f6f1c65 }, // -3000
    Multiplier { upper: 0xb05b70a9d00e25dc2c8ea327c19e4d3c, lower: 0xf07752b7ccd287f33a7130adf2bf49eb }, // -2999
    Multiplier { upper: 0x8d15f3bb0cd81e49bd3ee8ec9ae50a97, lower: 0x26c5dbc63d75398f61f426f18eff6e55 }, // -2998
    Multiplier { upper: 0xe1bcb92b47c03075fb97db142b0810f1, lower: 0xd7a2f93d2f21f5b2365371827e657d55 }, // -2997
    Multiplier { upper: 0xb496fa89063359f7fc797c10226cda5b, lower: 0x12e8c76425b4c48e91dc5acecb846444 }, // -2996
    Multiplier { upper: 0x9078c86d9e8f7b2cc9fac9a681f0aeaf, lower: 0x4253d2b684909d3edb16af0bd603836a }, // -2995
    Multiplier { upper: 0xe727a715ca7f2b7adcc475d7364de44b, lower: 0x9d52eabda0e761fe2b577e79566c0576 }, // -2994
    Multiplier { upper: 0xb8ec85ab0865bc624a36c4ac2b71836f, lower: 0xb10f22314d85e7fe8912cb9445233792 }, // -2993
    Multiplier { upper: 0x93f06aef39eafd1b6e9236f022c135f2, lower: 0xf40c1b5aa46b1ffed40f09436a8292db }, // -2992
    Multiplier { upper: 0xecb3de4b8fde61c57db6be4d04685651, lower: 0x8679c55dd3de9997b9b1a86bdd9db7c4 }, // -2991
    Multiplier { upper: 0xbd5cb1d60cb1e7d1315efea40386ab74, lower: 0x6b949de4a97ee1462e27b9efe47e2c9d }, // -2990
    Multiplier { upper: 0x977d5b11a3c18640f44bfee99c6bbc5d, lower: 0x22dd4b1d54658104f1b9618cb6cb56e4 }, // -2989
    Multiplier { upper: 0xf2622b4f6c68d6ce53accb0f60ac6095, lower: 0x049544fbba3c01a182c235adf14557d3 }, // -2988
    Multiplier { upper: 0xc1e822a5f053df0b7623d5a5e6f04d44, lower: 0x03aa9d962e9667b4689b5e24c1044643 }, // -2987
    Multiplier { upper: 0x9b201bb7f3764c092b4fde1e5259d769, lower: 0x9c887e11bedeb95d207c4b509a69d1cf }, // -2986
    Multiplier { upper: 0xf8335f8cb8bd467512196363b6f62575, lower: 0xc740c9b5fe31289500c6dee75d761c7e }, // -2985
    Multiplier { upper: 0xc68f7fa3c6fdd1f741ade91c925e845e, lower: 0x3900a15e64f4207733d24bec4ac4e398 }, // -2984
    Multiplier { upper: 0x9ed932e96bfe41929af1874a0eb2037e, lower: 0x9400811850c34d2c29750989d56a4fad }, // -2983
    Multiplier { upper: 0xfe2851757996cf50f7e8d8767de99f30, lower: 0xeccd9b5a1ad2151375880f42ef107f7b }, // -2982
    Multiplier { upper: 0xcb53745dfadf0c40c653e05ecb214c27, lower: 0x23d7af7b48a810dc5e06729bf273992f }, // -2981
    Multiplier { upper: 0xa2a929e4c8b27033d1dcb37f08e7701f, lower: 0x4fdfbf95d3b9a716b19ec2165b8fadc0 }, // -2980
    Multiplier { upper: 0x8220ee50a08ec02974b08f98d3ec59b2, lower: 0xa64c9944a96152788e189b45160c8b00 }, // -2979
    Multiplier { upper: 0xd034b08100e466a8bab418f48646f5ea, lower: 0xa3adc207756883f4168dc53b567a77ff }, // -2978
    Multiplier { upper: 0xa6908d3400b6b886fbc3472a05059188, lower: 0x82f16805f786cff678716a95dec86000 }, // -2977
    Multiplier { upper: 0x854070f666f8939f2fcf6c219d9e0e06, lower: 0xcf27866b2c6bd991f9f45544b239e666 }, // -2976
    Multiplier { upper: 0xd533e7f0a4c0ec31e618ad0295c9b00a, lower: 0xe50c0a4513dfc2832986eed4505ca3d6 }, // -2975
    Multiplier { upper: 0xaa8fecc083cd89c184e08a6877d48cd5, lower: 0x8409a1d0dcb30202879f2576a6b08312 }, // -2974
    Multiplier { upper: 0x887323cd363e07ce03e6d5205fdd3d77, lower: 0x9cd48173e3c268020618eac55226cf42 }, // -2973
    Multiplier { upper: 0xda51d2e1f0633fb0063e21cd662ec8bf, lower: 0x615402530603d99cd68e446ee9d7b202 }, // -2972
    Multiplier { upper: 0xaea7dbe7f38299599e981b0ab8256d65, lower: 0xe77668426b3647b0aba5038bee462802 }, // -2971
    Multiplier { upper: 0x8bb97cb98f9bade14bace26ef9b78ab7, lower: 0xec5eb9cebc2b6c8d561d9c6ff1d1b99b }, // -2970
    Multiplier { upper: 0xdf8f2df5b292afcedf7b03e4c2bf4459, lower: 0x7a31294ac6abe0e2236293e64fb5f5c5 }, // -2969
    Multiplier { upper: 0xb2d8f1915ba88ca57f959cb702329d14, lower: 0x61c0edd56bbcb3e81c4edcb83fc4c49e }, // -2968
    Multiplier { upper: 0x8f13f4744953a3b799447d5f34f54a76, lower: 0xb49a57ddefca29867d0be3c6996a36e5 }, // -2967
    Multiplier { upper: 0xe4ecba53a885d2bf5ba0c89854bbaa57, lower: 0x875d5963194375a3fb46393dc2438b07 }, // -2966
    Multiplier { upper: 0xb723c842ed37dbcc494d6d46aa2fbb79, lower: 0x39177ab5adcf914ffc382dcb01cfa26c }, // -2965
    Multiplier { upper: 0x9283069bf0f97ca36dd78a9eee8c95fa, lower: 0x9412c89157d9410cc9c68b08ce3fb524 }, // -2964
    Multiplier { upper: 0xea6b3dc64e5bfa9f1625aa97e414232a, lower: 0x8684741bbfc201ae0fa411a7b065ee9f }, // -2963
    Multiplier { upper: 0xbb88fe383eaffbb2781e22131cdce8ee, lower: 0xd203901633019af1a61cdaec8d1e587f }, // -2962
    Multiplier { upper: 0x960731c6988cc95b934b4e75b0b0ba58, lower: 0xa802d9ab5c0148c151b0af23a41846cc }, // -2961
    Multiplier { upper: 0xf00b82d75a7adbc5b8787d891ab45d5a, lower: 0xa66af5def99ba79bb5e77e9f6cf3a47a }, // -2960
    Multiplier { upper: 0xc0093579152f1637c6c6cad4155d177b, lower: 0xb855917f2e161fafc4b9321923f61d2e }, // -2959
    Multiplier { upper: 0x99a0f79410f2782c9f056f10111745fc, lower: 0x9377a798f1ab4c8c9d60f4e0e991b0f2 }, // -2958
    Multiplier { upper: 0xf5ce58ece7ea59e0fe6f1819b4f20994, lower: 0x1f25d8f4b5dee0e0fbce549b0f4f8183 }, // -2957
    Multiplier { upper: 0xc4a513f0b98847e731f279ae2a5b3adc, lower: 0xe5b7e0c3c4b24d80c971dd48d90c679c }, // -2956
    Multiplier { upper: 0x9d50dcc0946d06528e5b948b5515c8b0, lower: 0xb7c64d696a283e00a127e43a473d1fb0 }, // -2955
    Multiplier { upper: 0xfbb4946753e1a3b74a2c20deee89411a, lower: 0xbfa3af0f10406334350ca05d3ec832b3 }, // -2954
    Multiplier { upper: 0xc95d4385dcb482f908234d7f253a9a7b, lower: 0xcc82f2727366b5c35da3b37dcbd35bc3 }, // -2953
    Multiplier { upper: 0xa1176937e3c39bfa6ce90acc1dc87b96, lower: 0x3d358ec1f5ebc49c4ae95c64a30f7c9c }, // -2952
    Multiplier { upper: 0x80df875fe969499523eda23ce4a062de, lower: 0x975e0bce5e5636e36f2116b6e8d9307d }, // -2951
    Multiplier { upper: 0xce3272330f0edc21d315d0616dcd6afd, lower: 0xbefcdfb096f057d24b682457daf51a61 }, // -2950
    Multiplier { upper: 0xa4f52828d8d8b01b0f44a6b457d788ca, lower: 0xff30b2f3abf3797509201d131590e1e7 }, // -2949
    Multiplier { upper: 0x83f75353e0ad59af3f6a1ef6acac6d6f, lower: 0x328d5bf623292df73a80174277a71b1f }, // -2948
    Multiplier { upper: 0xd325521fcde22918657697f11447157e, lower: 0xb74893236b7516585d99bed0bf71c4ff }, // -2947
    Multiplier { upper: 0xa8eaa8197181ba79eac5465a769f4465, lower: 0x5f6d4282bc5dab79e47aff0d65f49d99 }, // -2946
    Multiplier { upper: 0x872220145ace2ec7ef0438485ee5d051, lower: 0x19243535637e22c7e9fbff3deb2a17ad }, // -2945
    Multiplier { upper: 0xd83699ba2ae37e0cb1a05a0d64a2e6e8, lower: 0x2839eebbd2636ad9765ffec978435915 }, // -2944
    Multiplier { upper: 0xacf87afb5582cb3d5ae6ae711d4f1f20, lower: 0x202e589641e9224791e6656df9cf7a77 }, // -2943
    Multiplier { upper: 0x8a606262aacf08fde25225274aa5b280, lower: 0x19bead4501874e9fa7eb8457fb0c61f9 }, // -2942
    Multiplier { upper: 0xdd6703d1114b419636e9d50baaa2b733, lower: 0x5c64486e68d87dcc3fdf3a265e7a365b }, // -2941
    Multiplier { upper: 0xb11f3640daa29ade9254aa6fbbb55f5c, lower: 0x49e9d38b871397d6997f61b84b94f849 }, // -2940
    Multiplier { upper: 0x8db291cd7bb548b20eaa21f2fc911916, lower: 0xa187dc6f9f42dfdee132b4936faa603b }, // -2939
    Multiplier { upper: 0xe2b74faf2c55411ce4436984c74e8e8a, lower: 0x9c0c93e5cb9e32fe351dedb8b2aa3391 }, // -2938
    Multiplier { upper: 0xb55f72f289ddcdb0b69c546a390ba53b, lower: 0xb00a0feb094b5bfe90e4be2d5bbb5c74 }, // -2937
    Multiplier { upper: 0x911928c207e4a48d5ee376bb60d61dc9, lower: 0x59a1a655a109166540b6fe8aafc916c3 }, // -2936
    Multiplier { upper: 0xe828413673076daefe38bdf89af02fa8, lower: 0x8f690a229b41bd6ecdf197444c74f138 }, // -2935
    Multiplier { upper: 0xb9b9cdc528d2be25982d64c6e259bfba, lower: 0x0c54081baf67cabf0b27ac36a390c0fa }, // -2934
    Multiplier { upper: 0x9494a49dba4231b7acf11d6be847cc94, lower: 0xd6a9a01625eca2326f52f02bb60d672e }, // -2933
    Multiplier { upper: 0xedbaa0fc5d36b5f2ae4e957973a61421, lower: 0x5775ccf03cadd050b21e4d12bce23eb0 }, // -2932
    Multiplier { upper: 0xbe2ee7304a922b288b72112df61e7681, lower: 0x12c4a3f363be40408e7ea40efd81cbc0 }, // -2931
    Multiplier { upper: 0x982585c03ba82286d5f4da8b2b4b9200, lower: 0xdbd083291c983366d865500bfe016fcd }, // -2930
    Multiplier { upper: 0xf36f3c66c5d9d0d7bcbaf74512128334, lower: 0x92e73841c759ebd7c0a219acc99be615 }, // -2929
    Multiplier { upper: 0xc2bf63856b14a712fd625f6a74db9c2a, lower: 0x0f1f60349f7b23130081ae23d47cb811 }, // -2928
    Multiplier { upper: 0x9bcc4f9def43b8dbfde84c552a4949bb, lower: 0x3f4c4cf6e5fc1c0f339af1b64396f9a7 }, // -2927
    Multiplier { upper: 0xf946e5c97ed2c15ffca6e08843a875f8, lower: 0x6546e18b09936018529182bd38f18f71 }, // -2926
    Multiplier { upper: 0xc76beb0798a89ab33085806d02ed2b2d, lower: 0x1dd24e08d475e679dba79bca93f472c1 }, // -2925
    Multiplier { upper: 0x9f8988d2e086e228f39e0057358a88f0, lower: 0xe4a83e6d76c4b8617c86163ba9905bce }, // -2924
    Multiplier { upper: 0xff4274849a7169db1f6333bebc10db1b, lower: 0x077397158ad45a359409bd2c428092e3 }, // -2923
    Multiplier { upper: 0xcc352a03aec1217c191c29656340af48, lower: 0xd2c2df446f10482adcd497569b9a0f1c }, // -2922
    Multiplier { upper: 0xa35dbb3625674dfce0e354511c33bf6d, lower: 0x7568b29d25a6a0224a43ac4549480c16 }, // -2921
    Multiplier { upper: 0x82b16291b785d7fd80b5dd0db02965f1, lower: 0x2aba287db7b8801b6e9c89d1076cd678 }, // -2920
    Multiplier { upper: 0xd11bd0e925a2f32f34562e7c4d0f0981, lower: 0xddf6a72f8c5a66924a940fb4d8ae23f3 }, // -2919
    Multiplier { upper: 0xa74973edb7b58f58f6ab586370d8d467, lower: 0xe4c5528c7048520ea2100c90ad581cc3 }, // -2918
    Multiplier { upper: 0x85d45cbe2c913f7a5eef79e92713dd1f, lower: 0xea37753d26a041a54e733d408aace3cf }, // -2917
    Multiplier { upper: 0xd62094637a81ff2a317f29750b52fb66, lower: 0x438beec83dcd35d54a51fb9a777b0618 }, // -2916
    Multiplier { upper: 0xab4d4382c867ff54f465bac4090f2f85, lower: 0x02d658a03170f7ddd50e62e1f92f3813 }, // -2915
    Multiplier { upper: 0x890a9c68a05332aa5d1e2f033a728c6a, lower: 0x68ab7a19c1272cb1773eb5819425c676 }, // -2914
    Multiplier { upper: 0xdb442d7433b8511094fd18052a50e0aa, lower: 0x41125cf601d847825864559c203c70bc }, // -2913
    Multiplier { upper: 0xaf69bdf68fc6a7407730e00421da4d55, lower: 0x00db7d919b136c6846b6aae34cfd26fd }, // -2912
    Multiplier { upper: 0x8c5497f873055299f8f3e669b4aea444, lower: 0x00af97a7af42bd203892224f70ca8597 }, // -2911
    Multiplier { upper: 0xe087598d84d550f65b1fd70f877dd3a0, lower: 0x0118f2a5e53795005a836a18b4773c25 }, // -2910
    Multiplier { upper: 0xb39f7ad79d7773f848e645a605fe42e6, lower: 0x67472884b75faa66aecf8813c3929684 }, // -2909
    Multiplier { upper: 0x8fb2c8ac7df929936d850484d1983585, lower: 0x1f6c206a2c4c88522572d34302dbab9d }, // -2908
    Multiplier { upper: 0xe5eadaad965b75b8af3b3a6e1c26bc08, lower: 0x32469a437a140d503beaeb9e6af91295 }, // -2907
    Multiplier { upper: 0xb7ef1557ab7c5e2d58fc2ebe7cebc9a0, lower: 0x28387b692e76710cfcbbefb1ef2da877 }, // -2906
    Multiplier { upper: 0x9325aaac89304b577a63589863efd480, lower: 0x202d2f87585ec0d73096595b25be205f }, // -2905
    Multiplier { upper: 0xeb6f777a751a1225909ef427064c8733, lower: 0x66aeb27226fe01584dbd5bc5093033cc }, // -2904
    Multiplier { upper: 0xbc592c61f7480e8473b25cec050a05c2, lower: 0xb88bc1f4ebfe6779d7caafd0d4268fd6 }, // -2903
    Multiplier { upper: 0x96adbd1b2c39a536c2f51723373b37ce, lower: 0xfa0967f72331ec61796ef30d76853fdf }, // -2902
    Multiplier { upper: 0xf115fb5ead2908579e54f1d1f1f8594b, lower: 0x29a8a658384fe09bf57e51af24086631 }, // -2901
    Multiplier { upper: 0xc0de62b22420d3794b7727db27f9e108, lower: 0xee208513603fe6e32acb748c1cd384f4 }, // -2900
    Multiplier { upper: 0x9a4b82281ce70f943c5f5315b994b407, lower: 0x24e6d0dc4cffebe8ef092a09b0a9372a }, // -2899
    Multiplier { upper: 0xf6df36a694a4e5b9fa321e8928edecd8, lower: 0x3b0ae7c6e1997974b1a84342b441f1dc }, // -2898
    Multiplier { upper: 0xc57f5eebaa1d8494c828186dba57f0ac, lower: 0xfc08b96be7adfac3c153690229ce5b16 }, // -2897
    Multiplier { upper: 0x9dff7f22ee7e03aa39b9ad24951326f0, lower: 0xc9a0945652f195696775ed9b54a515ac }, // -2896
    Multiplier { upper: 0xfccbfe9e4a6339105c5c483a881ea4b4, lower: 0x75cdba23b7e8ef0f0befe292210822ac }, // -2895
    Multiplier { upper: 0xca3ccbb1d51c2da6b049d362067eea29, lower: 0xf7d7c81c9320bf3f3cbfe874e739b556 }, // -2894
    Multiplier { upper: 0xa1ca3c8e44168aebc03b0f819ecbee87, lower: 0xf9796ce3a8e6ff65ca33205d85c7c445 }, // -2893
    Multiplier { upper: 0x816e96d836786f23002f3f9ae56ff206, lower: 0x612df0b620b8cc516e8f4d179e3969d1 }, // -2892
    Multiplier { upper: 0xcf1757c057271838004b98f7d57fe9a3, lower: 0xceafe789cdf47a1be4187b58fd28a94e }, // -2891
    Multiplier { upper: 0xa5ac463378ec1360003c7a5fddffee1c, lower: 0xa5598607d7f6c816501395e0ca86edd8 }, // -2890
    Multiplier { upper: 0x8489d1c2c72342b3336395197e665816, lower: 0xeaae04d3132bd3450cdc77e7086bf17a }, // -2889
    Multiplier { upper: 0xd40fb60471d20451ebd28828ca3d59be, lower: 0x4449a151b8461ed4e160bfd80d79825c }, // -2888
    Multiplier { upper: 0xa9a62b36c174d041897539ba3b6447cb, lower: 0x69d4810e2d04e5771ab3ccacd794684a }, // -2887
    Multiplier { upper: 0x87b82292345d7367a12a9494fc50396f, lower: 0x87dd340b57371df8e229708a4610536e }, // -2886
    Multiplier { upper: 0xd9269db6ba2f1f0c3510edbb2d4d28b2, lower: 0x72fb86788b8b6327d0424daa09b3b8b0 }, // -2885
    Multiplier { upper: 0xadb87e2bc825b2702a73f1628aa4208e, lower: 0xc262d1fa093c4f530d01d7bb3af62d5a }, // -2884
    Multiplier { upper: 0x8af9fe896ceaf526885cc11ba21ce6d8, lower: 0x9b824194d4303f75a40179629591bde2 }, // -2883
    Multiplier { upper: 0xde5cca757b11883da6face929cfb0af4, lower: 0x2c039c21538065890668c23755b5fc9c }, // -2882
    Multiplier { upper: 0xb1e3d52ac8dad3648595720ee3fc08c3, lower: 0x566949b442cd1e073853ce92aaf7fd4a }, // -2881
    Multiplier { upper: 0x8e4fddbbd3e242b6d1445b3f1cc9a09c, lower: 0x452107c368a41805c6a9720eef2ccaa2 }, // -2880
    Multiplier { upper: 0xe3b2fc5fb96a0457b53a2b982e0f6760, lower: 0x6e9b3f9f0dd359a2d775834b1847aa9c }, // -2879
    Multiplier { upper: 0xb628c9e62dee69dfc42e89468b3f85e6, lower: 0xbee2994c0b0f7ae8ac5e02a279d2eee3 }, // -2878
    Multiplier { upper: 0x91ba3b1e8b25217fd0253a9ed5cc6b1e, lower: 0xff1badd66f3f9586f04b354ec7dbf24f }, // -2877
    Multiplier { upper: 0xe929f830dea1cf32e6a1f764894711cb, lower: 0x31c5e2f0b1ff55a4b3ab887e0c931d4b }, // -2876
    Multiplier { upper: 0xba87f9c0b21b0c28b88192b6d438db08, lower: 0xf49e4f26f4cc4483c2efa064d6dc1770 }, // -2875
    Multiplier { upper: 0x9539949a2815a353c6ce0ef8a9c715a0, lower: 0xc3b1d8ebf709d06968bfb383df167926 }, // -2874
    Multiplier { upper: 0xeec2875d0cef6bb93e167e5aa93e8901, lower: 0x391c8e46580fb3dbdacc526c9823f50a }, // -2873
    Multiplier { upper: 0xbf0205e40a5922fa9811feaeedcba0cd, lower: 0xc74a0b6b79a6297caf09db8a134ff73b }, // -2872
    Multiplier { upper: 0x98ce6b1cd5141bfbacdb32258b094d71, lower: 0x6c3b3c55faeb5463bf3b16080f732c2f }, // -2871
    Multiplier { upper: 0xf47d782e21b9c65f7af8503c11a87be8, lower: 0xad2b93bcc4abba3931f8234018b846b2 }, // -2870
    Multiplier { upper: 0xc39793581afb05192f2d0cfcdaed2fed, lower: 0x57560fca36efc82dc1934f667a2d055b }, // -2869
    Multiplier { upper: 0x9c7942ace2626a7a8c240a63e257598a, lower: 0xac44d96e92596cf167a90c51fb57377c }, // -2868
    Multiplier { upper: 0xfa5b9de16a3710c4136cdd6c9d588f44, lower: 0x46d48f17508f14b572a813b65ef1f260 }, // -2867
    Multiplier { upper: 0xc8494b1abb5f409cdc57178a177a0c36, lower: 0x9f1072790d3f43c45bb9a95eb25b284d }, // -2866
    Multiplier { upper: 0xa03aa27bc919007d7d12793b45fb3cf8, lower: 0x7f405b940a9903037c94877ef515b9d7 }, // -2865
    Multiplier { upper: 0x802ee863074733979741fa95d195ca60, lower: 0x65cd1610087a68cf96dd39325daafb13 }, // -2864
    Multiplier { upper: 0xcd17da380ba51f58f2032a894f56109a, lower: 0x3c7b56800d90a7b28afb8eb6fc44c4ea }, // -2863
    Multiplier { upper: 0xa41314f9a2ea7f7a5b35bba10c44da14, lower: 0xfd2f7866714086286f2fa55f303703ef }, // -2862
    Multiplier { upper: 0x8342772e1beecc61e29162e73d03e1aa, lower: 0x6425f9eb8dcd382058f2eab28cf8cff2 }, // -2861
    Multiplier { upper: 0xd203f1e35fe47a36374f04a52e6c9c43, lower: 0xd36ff645afaec033c184aab747f47fea }, // -2860
    Multiplier { upper: 0xa80327e9198394f82c3f36ea8b8a169c, lower: 0xa9265e9e2625668fce03bbc5d329ffee }, // -2859
    Multiplier { upper: 0x8668ecba7acfaa602365c5886fa1abb0, lower: 0x8751e54b51b7853fd802fc9e4287fff2 }, // -2858
    Multiplier { upper: 0xd70e4790c47f770038a2d5a71902ac4d, lower: 0xa54fd5454f8c0866266b2dca040cccb6 }, // -2857
    Multiplier { upper: 0xac0b6c73d065f8ccfa1bde1f473556a4, lower: 0x843fddd10c7006b81ebc24a19cd70a2b }, // -2856
    Multiplier { upper: 0x89a2bd297384c70a61afe4e5d291121d, lower: 0x36997e40d6c00560189683b47d78d4f0 }, // -2855
    Multiplier { upper: 0xdc37950f1f3ad8109c4ca16fb74e8361, lower: 0xf0f596ce24666f0027573920c8c154b2 }, // -2854
    Multiplier { upper: 0xb02c773f4c2f13407d0a1abfc5d8691b, lower: 0x272adf0b5051f26685df60e70701108f }, // -2853
    Multiplier { upper: 0x8cf05f65d68c0f66ca6e7bcc9e46ba7c, lower: 0x1f557f3c40418eb86b191a526c00da0c }, // -2852
    Multiplier { upper: 0xe18098a2f0e018a477172c7a96d790c6, lower: 0x9888cb939a027df3de8e9083e0015ce0 }, // -2851
    Multiplier { upper: 0xb466e0825a4ce0839278f06212460d6b, lower: 0xad3a3c7614cecb297ed8739cb3344a4d }, // -2850
    Multiplier { upper: 0x90524d35150a4d360ec726b4db6b3def, lower: 0xbdc8305e770bd5bacbe05c7d5c29d50a }, // -2849
    Multiplier { upper: 0xe6ea1521bb43aebce471d787c5786319, lower: 0x2fa6b3ca5812ef914633c72ef9dc8810 }, // -2848
    Multiplier { upper: 0xb8bb441afc362563e9f4ac6c9df9e8e0, lower: 0xf2ebc30846758c7438296c2594b06cda }, // -2847
    Multiplier { upper: 0x93c90348c9c4eab654c3bd23b194ba4d, lower: 0x8f23026d052ad6c36021235143c05715 }, // -2846
    Multiplier { upper: 0xec74d20e0fa1778a21392e9f8287907c, lower: 0x183803e1a1de246bcd01d21b9f9a24ed }, // -2845
    Multiplier { upper: 0xbd2a41a4d94df93b4dc7587f9b9fa6c9, lower: 0xacf99cb4817e838970ce41afb2e1b724 }, // -2844
    Multiplier { upper: 0x97550150add7fa95d7d2ad32e2e61f07, lower: 0xbd947d5d346536078d71ce2628b49284 }, // -2843
    Multiplier { upper: 0xf2219bb4495990efbfb77b849e3cfe72, lower: 0xc8ed9561ed6ebcd8e24fb03d0dedb739 }, // -2842
    Multiplier { upper: 0xc1b47c903aae0d8c995f9603b1ca6528, lower: 0xa0be111b24589713e83fc030d7f15f61 }, // -2841
    Multiplier { upper: 0x9af6ca0cfbbe713d477fab3627d51dba, lower: 0x1a31a748e9e078dcb9cc99c0acc1191a }, // -2840
    Multiplier { upper: 0xf7f14347f930b52ed8cc452372ee95f6, lower: 0x904f720e4300c16129475c677ace8e90 }, // -2839
    Multiplier { upper: 0xc65a9c399426f758ad70374f8f2544c5, lower: 0x403f8e71cf33cde7543916b92f0ba540 }, // -2838
    Multiplier { upper: 0x9eaee36143525f7a2459c5d93f5103d1, lower: 0x0032d85b0c297185dcfa789425a2ea9a }, // -2837
    Multiplier { upper: 0xfde49f02055098c36d5c6fc1fee8061b, lower: 0x33848d5e79dbe8d62e5d8db9d5d1775c }, // -2836
    Multiplier { upper: 0xcb1d4c019dda13cf8ab05967ff2004e2, lower: 0x8f9d3de52e498711beb13e2e44a792b0 }, // -2835
    Multiplier { upper: 0xa27dd667b17b430c6ef37ab998e66a4e, lower: 0xd94a97ea8b6e05a7cbc0fe8b6a1fa88d }, // -2834
    Multiplier { upper: 0x81fe451fc12f68d6bf292efae0b8550b, lower: 0xe10879886f8b37b96fcd986f881953a4 }, // -2833
    Multiplier { upper: 0xcffd3b6601e5748acb7517f7cdf3bb46, lower: 0x34da5c0d7f4525f57faf5a4c0cf552a0 }, // -2832
    Multiplier { upper: 0xa6642f84ce512a08a2c4132ca4c2fc38, lower: 0x2a4849a465d0eb2acc8c483cd72aa880 }, // -2831
    Multiplier { upper: 0x851cf2d0a50dbb3a1bd00f56ea359693, lower: 0x5506a1505173ef55707039ca45bbba00 }, // -2830
    Multiplier { upper: 0xd4fb1e1aa1af91f692e67ef176bc241e, lower: 0xee71021a1becb2224d805c76d5f9299a }, // -2829
    Multiplier { upper: 0xaa627e7bb48c74c54251ff2792301ce5, lower: 0x8b8d9b481656f4e83e0049f8ab2dbae1 }, // -2828
    Multiplier { upper: 0x884ecb962a09f704350e65b941c0171e, lower: 0x093e15d345125d8698003b2d55be2f1b }, // -2827
    Multiplier { upper: 0xda17ac2376765806bb4a3c5b9c668b63, lower: 0x41fcefb86e83c8d75999f84889304b5e }, // -2826
    Multiplier { upper: 0xae795682c52b799efc3b637c7d1ed5e9, lower: 0x0197262d25363a45e147f9d3a0f36f7e }, // -2825
    Multiplier { upper: 0x8b9445356a892e18c9c91c63974bde54, lower: 0x0145b8241dc4fb6b1a9ffb0fb3f5f2cc }, // -2824
    Multiplier { upper: 0xdf53a1ef10db7cf4760e93d28bac96ec, lower: 0xced5f36cfc6e5f11c4332b4c53231e12 }, // -2823
    Multiplier { upper: 0xb2a94e58da4930c391a5430ed623abf0, lower: 0xa577f5f0c9f1e5a7d028ef7042827e75 }, // -2822
    Multiplier { upper: 0x8eedd84715075a360e1dcf3f11b62326, lower: 0xeac65e5a3b27eaeca68725f36868652b }, // -2821
    Multiplier { upper: 0xe4afc071bb3ef6bce362e531b5f0383e, lower: 0x447096f6c50cab143da5098573da3b77 }, // -2820
    Multiplier { upper: 0xb6f3005afc325efd82b58427c4c02cfe, lower: 0x9d26df2bd0d6ef436484079df6482f93 }, // -2819
    Multiplier { upper: 0x925c0048c9c1e5979bc469b96a335732, lower: 0x17524c230d78bf691d366c7e5ea0260f }, // -2818
    Multiplier { upper: 0xea2ccd4142cfd5bf5fa0a928a9ebbeb6, lower: 0x8bb6e038158dff0e9523e0ca31003ce4 }, // -2817
    Multiplier { upper: 0xbb570a9a9bd977cc4c808753bb22fef8, lower: 0x6fc5802cde0b327210e980a1c0ccfd84 }, // -2816
    Multiplier { upper: 0x95df3baee3145fd6a39a05dc95b598c6, lower: 0xbfd133571808f5280d879a1b00a3fe03 }, // -2815
    Multiplier { upper: 0xefcb92b16b53cc8a9f5cd62dbc55c13d, lower: 0xffb51ef1c00e550ce272902b3439966b }, // -2814
    Multiplier { upper: 0xbfd60ef455dca3a2191711be30449a97, lower: 0xffc418c16671dda3e85ba688f6947856 }, // -2813
    Multiplier { upper: 0x99780bf6ab16e94e7a78dafe8d03aedf, lower: 0xffd013cdeb8e4ae986afb86d92106045 }, // -2812
    Multiplier { upper: 0xf58cdff111be42172a5af7fdae6c4aff, lower: 0xffb352e3127d44a8d77f8d7c1ce7006d }, // -2811
    Multiplier { upper: 0xc470b327416501ac21e25ffe25236f33, lower: 0x32f5dbe8db976a20ac660ac9b0b8cd24 }, // -2810
    Multiplier { upper: 0x9d26f5b9011d9af01b1b7ffe841c58f5, lower: 0xc25e49871612bb4d56b808a15a2d70ea }, // -2809
    Multiplier { upper: 0xfb71892801c8f7e691c5999739c6f4bc, lower: 0x6a3075a4f01df87bbdf3410229e24e43 }, // -2808
    Multiplier { upper: 0xc927a0ecce3a5feba7d147ac2e38c3c9, lower: 0xee8d2aea59b19396318f6734ee4ea503 }, // -2807
    Multiplier { upper: 0xa0ec80bd71c84cbc86410623582d696e, lower: 0x5870ef21e15adc7827a5ec2a583eea69 }, // -2806
    Multiplier { upper: 0x80bd33cac16d0a306b67381c468ababe, lower: 0xad2725b4b448b0601fb7f021e0325521 }, // -2805
    Multiplier { upper: 0xcdfb8611357b4380abd859c6d7445dfd, lower: 0xe1d83c5453a78099cc5980363383bb67 }, // -2804
    Multiplier { upper: 0xa4c9380dc4629c66efe047d245d04b31, lower: 0x8179c9dd0fb933ae3d146691c2cfc91f }, // -2803
    Multiplier { upper: 0x83d42cd7d04ee3858cb36ca837d9d5c1, lower: 0x34616e4a72fa8fbe9743854168a63a7f }, // -2802
    Multiplier { upper: 0xd2ed148c807e38d5adebe10d26295601, lower: 0xed68b0771e5db2ca8b9f3b9bdaa390cc }, // -2801
    Multiplier { upper: 0xa8bdaa0a0064fa448b231a70eb5444ce, lower: 0x5786f3927eb15bd53c7f62e3154fa709 }, // -2800
    Multiplier { upper: 0x86fe21a199ea61d06f4f485a55dd03d8, lower: 0x46058fa8655aafddc9ff824f443fb8d4 }, // -2799
    Multiplier { upper: 0xd7fd029c297702e7187eda2a22fb395a, lower: 0x09a27f73d55de62fa998d07ed39927ba }, // -2798
    Multiplier { upper: 0xacca687cedf8cf1f46cbe1bb4f2f6114, lower: 0xd481ff8fdde4b82621470d3242e0ec95 }, // -2797
    Multiplier { upper: 0x8a3b86ca57fa3f4c38a31afc3f591a77, lower: 0x1067ffa64b1d601e8105a4283580bd44 }, // -2796
    Multiplier { upper: 0xdd2c0add59906546c104f7f9fef4f724, lower: 0xe70ccc3d44fbccfd9b3c39d9ef346206 }, // -2795
    Multiplier { upper: 0xb0f008b1147384389a6a5ffb325d9283, lower: 0xec0a3cfdd0c970cae29694ae58f6b4d2 }, // -2794
    Multiplier { upper: 0x8d8cd3c0dd293693aebb7ffc284adb9c, lower: 0xbcd4fd97da3ac0a24ededd58472bc3db }, // -2793
    Multiplier { upper: 0xe27aec67c841f0ec4ac5999373aaf8fa, lower: 0xc7bb2f595d2acdd07e316226d846062b }, // -2792
    Multiplier { upper: 0xb52f238639ce5a56a237ae0f8fbbfa62, lower: 0x39628c477dbbd7d9fe8de81f136b3823 }, // -2791
    Multiplier { upper: 0x90f282d1c7d848454e92f1a60c9661e8, lower: 0x2de8703931631314cba4b9b275ef601c }, // -2790
    Multiplier { upper: 0xe7ea6ae93fc073a2175182a34757030d, lower: 0x1640b38eb56b51badf6df5ea564bccf9 }, // -2789
    Multiplier { upper: 0xb988558766338fb4df7468829f78cf3d, lower: 0xab66f60bc455dafbe5f19188450970c7 }, // -2788
    Multiplier { upper: 0x946d11391e8fa62a4c5d20687f93d8fe, lower: 0x22b8c4d636ab1596518e0e069da12706 }, // -2787
    Multiplier { upper: 0xed7b4ec1ca7f7043ad61cd73ff52f4c9, lower: 0xd127a156bdde88f0827ce33dc901d809 }, // -2786
    Multiplier { upper: 0xbdfc3f016ecc59cfbde7d78fff7590a1, lower: 0x741fb44564b20726ceca4f64a0ce466e }, // -2785
    Multiplier { upper: 0x97fcff3458a37b0c97ecac7332c473b4, lower: 0x5ce629d11d5b38ebd8a1d91d4d71d1f2 }, // -2784
    Multiplier { upper: 0xf32e65208dd25e7a8cade0b8513a52ba, lower: 0x2e3d0fb4fbc527dfc102f4fbaf1c831c }, // -2783
    Multiplier { upper: 0xc28b841a0b0eb1fba3be4d6040fb7561, lower: 0xbe973fc3fc9db97fcd9bf72fbf4a027d }, // -2782
    Multiplier { upper: 0x9ba2d014d5a55b2fb631d78033fc5de7, lower: 0xcbac3303307e2dffd7aff8f2ff6e6864 }, // -2781
    Multiplier { upper: 0xf904802155d55eb2bd1c8c00532d630c, lower: 0x791384d1e730499959198e5198b0a706 }, // -2780
    Multiplier { upper: 0xc736cce777dde55bca7d3ccd0f578270, lower: 0x60dc6a4185c03ae1141471dae08d526b }, // -2779
    Multiplier { upper: 0x9f5f0a52c64b1de3086430a40c4601f3, lower: 0x80b0550137ccfbe743438e48b3a441f0 }, // -2778
    Multiplier { upper: 0xfefe76ead6de96380d6d1aa013a33652, lower: 0x67808801f2e1930b9ed27d411f6d364c }, // -2777
    Multiplier { upper: 0xcbfec588abe544f9a45748800fb5c50e, lower: 0xb933a0018f1adc094bdb97674c575ea3 }, // -2776
    Multiplier { upper: 0xa33237a08984372e1d12a06672f7d0d8, lower: 0x94294cce0c157cd43cafac52a3791883 }, // -2775
    Multiplier { upper: 0x828e92e6d469c5be7da88051f5930d7a, lower: 0x10210a3e701130a9ca2623754f94139c }, // -2774
    Multiplier { upper: 0xd0e41e3e20a93c63fc40cd4fef51af29, lower: 0xb3681063e681e776103d05887f535293 }, // -2773
    Multiplier { upper: 0xa71ce4fe808763833033d77325daf287, lower: 0xc2b9a6b6520185f80cfd9e06cc42a875 }, // -2772
    Multiplier { upper: 0x85b0b732006c4f9c268fdf8f517bf539, lower: 0x6894855ea80137f9a3fe180570355391 }, // -2771
    Multiplier { upper: 0xd5e78b8333e07f603db2ff4bb59321f5, lower: 0x7420d5644001f329066359a24d221f4e }, // -2770
    Multiplier { upper: 0xab1fa2cf5cb39919caf599095e0f4e5d, lower: 0xf680aab6999b28ed9eb5e14ea41b4c3f }, // -2769
    Multiplier { upper: 0x88e61bd916f61414a25e14077e72a517, lower: 0xf866eef87ae287247ef7e7721ce2a366 }, // -2768
    Multiplier { upper: 0xdb09c62824bcecedd096867263eaa1bf, lower: 0xf3d7e4c0c49da507318ca583616a9f09 }, // -2767
    Multiplier { upper: 0xaf3b04ecea30bd8b0d45385b83221aff, lower: 0xf646509a36e48405c13d5135e7887f3a }, // -2766
    Multiplier { upper: 0x8c2f3723ee8d646f3dd0f9e2cf4e7bff, lower: 0xf838407b5f1d366b00fdda918606cc2f }, // -2765
    Multiplier { upper: 0xe04b8b6cb0e23a4b961b296ae54a5fff, lower: 0xf38d33f8982ebd7801962a82700ae04a }, // -2764
    Multiplier { upper: 0xb36fa2bd5a4e950944e28788b76eb333, lower: 0x293dc32d468bcac667ab5535266f19d5 }, // -2763
    Multiplier { upper: 0x8f8c8231150baa6dd0b5393a2c588f5c, lower: 0x20fe35bdd2096f051fbc442a8525ae44 }, // -2762
    Multiplier { upper: 0xe5ad9d1b54df77161abb8ec37a274bc6, lower: 0x9b3055fc83424b3b65fa06aa6ea2b06d }, // -2761
    Multiplier { upper: 0xb7be174910b2c5ab48960bcf94ec3c9e, lower: 0xe28d1196cf683c2f84c80555254ef38a }, // -2760
    Multiplier { upper: 0x92fe7907408f048906de6fd943f0307f, lower: 0x1ba40e123f86968c6a399dddb7725c6f }, // -2759
    Multiplier { upper: 0xeb30c1a534180741a497195b9fe6b3fe, lower: 0x92a0168398d75747105c2fc92583c717 }, // -2758
    Multiplier { upper: 0xbc270150f6799f67b6df477c7febc332, lower: 0x0ee678694712ac38d9e3596db79c9f46 }, // -2757
    Multiplier { upper: 0x96859aa72b947f862be5d2c9ffefcf5b, lower: 0x3f1ec6ba9f422360ae4f7abe2c7d4c38 }, // -2756
    Multiplier { upper: 0xf0d5c43eac20cc09dfd61e0fffe61891, lower: 0xfe97a45dcb9d05677d4bf796ad9546c0 }, // -2755
    Multiplier { upper: 0xc0ab03655680a33b1978180cccb813a7, lower: 0xfedfb6b16fb0d11f976ff94557aa9f00 }, // -2754
    Multiplier { upper: 0x9a22691ddecd4f627ac679a3d6f9a953, lower: 0x324c92278c8d741945f32dd112eee59a }, // -2753
    Multiplier { upper: 0xf69d74fc97aee56a5e0a5c3957f5dbb8, lower: 0x507a83727a7becf53cb8494e84b16f5c }, // -2752
    Multiplier { upper: 0xc54ac3fd46258455180849c779917c93, lower: 0x739535f52ec98a5dca2d077203c125e3 }, // -2751
    Multiplier { upper: 0x9dd569976b5136aa79a03b05fadaca0f, lower: 0x8faa9190f23ad517d4f0d2c19c9a84b6 }, // -2750
    Multiplier { upper: 0xfc88a8f2454ebddd8f66c4d65e2adce5, lower: 0xb2aa8281839154f2ee4e1e02942a6df0 }, // -2749
    Multiplier { upper: 0xca06ed8e9dd897e472b89d784b557d84, lower: 0x8eeecece02daaa5bf1d818021021f18d }, // -2748
    Multiplier { upper: 0xa19f247217e079838efa17936f77979d, lower: 0x3f25723e68aeeeaff4ace001a6818e0a }, // -2747
    Multiplier { upper: 0x814c1d281319facfa594dfa925f94617, lower: 0x65b78e9853bf2559908a4cce1ece0b3b }, // -2746
    Multiplier { upper: 0xcee02ea684f65e1908ee32a83cc209bf, lower: 0x0925b0f3b931d55c1a76e149cae3452c }, // -2745
    Multiplier { upper: 0xa580255203f84b473a5828869701a165, lower: 0xa0eaf3f62dc1777ce1f8b43b08b5d0f0 }, // -2744
    Multiplier { upper: 0x846684419cc6a29f61e0206bac014dea, lower: 0xe7225cc4f16792ca4e60902f3a2b0d8d }, // -2743
    Multiplier { upper: 0xd3d73a029471043236336712accee311, lower: 0x71d0946e4f0c1e107d674d185d11af47 }, // -2742
    Multiplier { upper: 0xa978fb35438d9cf4f8291f4223d8b5a7, lower: 0x8e4076bea5a34b406452a4137da7bf6c }, // -2741
    Multiplier { upper: 0x8793fc2a9c714a5d93541901b646f7b9, lower: 0x3e99f8988482a299e9dbb675fe1fcc57 }, // -2740
    Multiplier { upper: 0xd8ecc6aa93e876fc1eecf4cf8a0b25f5, lower: 0x30f65a8da0d10429762c57233032e08a }, // -2739
    Multiplier { upper: 0xad8a3888765392634bf0c3d93b3c1e5d, lower: 0xc0c5153e1a40d0212b56ac1c268f1a08 }, // -2738
    Multiplier { upper: 0x8ad4fa06c50fa84f6ff3cfe0fc30184b, lower: 0x009daa981500a680ef7889b01ed8e1a0 }, // -2737
    Multiplier { upper: 0xde21900ad4e5da18b31fb301938026de, lower: 0x6762aa8cee6770ce4bf40f80315b029a }, // -2736
    Multiplier { upper: 0xb1b4733bdd84ae7a28e628ce0f99b8b1, lower: 0xec4eeed7251f8d71d65cd9335aaf3548 }, // -2735
    Multiplier { upper: 0x8e29f5c97e03bec820b820a4d947c6f4, lower: 0xbd0bf245b74c7127deb0adc2aef29107 }, // -2734
    Multiplier { upper: 0xe376560f3005fe0d01269aa15ba60b21, lower: 0x2e7983a2bee0b50c978116044b1db4d7 }, // -2733
    Multiplier { upper: 0xb5f844d8f337fe70cdb87bb44951a280, lower: 0xf1facfb5658090d6df9a78036f4af713 }, // -2732
    Multiplier { upper: 0x91936a4728f9985a3e2d2fc36ddae867, lower: 0x27fbd95deacd40abe6152ccf8c3bf8dc }, // -2731
    Multiplier { upper: 0xe8ebdd3ea7f5c090637b7f9f162b0d71, lower: 0xd992f563114867797021e14c139327c6 }, // -2730
    Multiplier { upper: 0xba564a98865e33a6b5fc6618de88d78e, lower: 0x47a8c44f4106b92df34e4dd6760f5305 }, // -2729
    Multiplier { upper: 0x9511d546d1e4f61ef7fd1e7a4ba0ac71, lower: 0xd2ed69d900d22dbe5c3ea4ab91a5dc04 }, // -2728
    Multiplier { upper: 0xee82eed7b63b2364bffb63f6df677a4f, lower: 0xb7e242f4ce1d15fd60643aac1c3c9339 }, // -2727
    Multiplier { upper: 0xbecf25795e95b5ea332f832be5ec61d9, lower: 0x5fe83590a4e4119780502ef01696dc2e }, // -2726
    Multiplier { upper: 0x98a5b7944baaf7ee8f5935bcb7f04e47, lower: 0x7fecf7a6ea500e12cd0cf259ababe358 }, // -2725
    Multiplier { upper: 0xf43c58ed45de597db22855fabfe6e3a5, lower: 0x997b25d7dd4ce3514814b6f5df796bbf }, // -2724
    Multiplier { upper: 0xc3637a576b184797c1b9de62331f1c84, lower: 0x7ac8eb131770b5daa010925e4c612300 }, // -2723
    Multiplier { upper: 0x9c4f9512bc136c7967c7e51b5c18e39d, lower: 0x2f072275ac5a2b154cda0eb1d6b41c00 }, // -2722
    Multiplier { upper: 0xfa18ee84601f13f572d96e922cf49f61, lower: 0xe4d83722ad5d11bbae29b11c8ab9c666 }, // -2721
    Multiplier { upper: 0xc813f2038018dcc45be12541bd907f81, lower: 0x83e02c1bbde40e2fbe87c0e3a22e3852 }, // -2720
    Multiplier { upper: 0xa00ff4cf99ad7d69e31a843497a6cc67, lower: 0x9cb3567c97e9a4f2fed300b61b582d0e }, // -2719
    Multiplier { upper: 0x800cc3d947bdfdee4f4869c3ac857052, lower: 0xe3c2ab96dfee1d8f324266f815e0240b }, // -2718
    Multiplier { upper: 0xcce1395ba5fcc97d4ba70f9f7a6f1a1e, lower: 0x393778f16649c8e51d370b268966a012 }, // -2717
    Multiplier { upper: 0xa3e761161e63d4643c85a6192ebf4818, lower: 0x2dc5fa5ab83b071db0f8d5b86debb342 }, // -2716
    Multiplier { upper: 0x831f80de7eb64383639e1e7a8bcc39ac, lower: 0xf16b2eaef9c8d27e272d77c6be562901 }, // -2715
    Multiplier { upper: 0xd1cc0163fdf06c056c3030c412e05c47, lower: 0xe8ab7de4c2daea6371e2593dfd56a802 }, // -2714
    Multiplier { upper: 0xa7d66783318d233789c02703424d169f, lower: 0xed55fe509be2551c5b1b7a97fddeeccf }, // -2713
    Multiplier { upper: 0x86451f9c27a41c2c6e33526901d7454c, lower: 0xbdde650d4981ddb048e2c87997e58a3f }, // -2712
    Multiplier { upper: 0xd6d4ff603f6cf9e0b0521d74cfbed547, lower: 0x9630a1aedc02fc4d416ada5c263c1064 }, // -2711
    Multiplier { upper: 0xabdd9919cc572e4d59db4ac3d965776c, lower: 0x7826e7bf1668c9d76788aeb01e967384 }, // -2710
    Multiplier { upper: 0x897e1414a378f1d77b15d5697ab792bd, lower: 0x2cebec98deba3b12b93a2559b211f603 }, // -2709
    Multiplier { upper: 0xdbfcecedd25b1c8bf822ef0f2abf512e, lower: 0xae46475afdf6c4eac1f6a2291ce9899e }, // -2708
    Multiplier { upper: 0xaffd8a57db7c16d6601bf27288990dbe, lower: 0xf1d1d2af3192372234c54e874a546e18 }, // -2707
    Multiplier { upper: 0x8ccad51315fcdf11e67cc1f53a140aff, lower: 0x27db0ef28e0e9281c3d10b9f6ea9f1ad }, // -2706
    Multiplier { upper: 0xe144881e8994981ca3facfeec35344cb, lower: 0x72f817ea7ce41d9c6c81ac324aa982ae }, // -2705
    Multiplier { upper: 0xb436d34ba143ace3b6623ff235dc3709, lower: 0x28c6798863e9b149f067bcf508879bbf }, // -2704
    Multiplier { upper: 0x902bdc3c8102f0b62b81ccc1c4b02c07, lower: 0x53d1fad383215aa18d1fca5da06c7c99 }, // -2703
    Multiplier { upper: 0xe6ac9394019e4df0459c7acfa119e00b, lower: 0xb94ff7b8d1cef768e1cc76fc33e0c75a }, // -2702
    Multiplier { upper: 0xb88a0fa99ae50b269e16c8a61a7b19a2, lower: 0xfaa65fc70e3f2c53e7d6c5968fe705e2 }, // -2701
    Multiplier { upper: 0x93a1a62148b73c1ee4df06eb48627ae8, lower: 0xc885196c0b65bd0fecabd1453fec04b5 }, // -2700
    Multiplier { upper: 0xec35d69ba78b9364a164d7deda372b0e, lower: 0x0da1c24678a2c8197aac820866466dee }, // -2699
    Multiplier { upper: 0xbcf7dee2ec6fa91d4dea464be1c5bc0b, lower: 0x3e1b01d1fa1bd3479556ce6d1e9ebe58 }, // -2698
    Multiplier { upper: 0x972cb24f238c874aa4bb6b6fe7d1633c, lower: 0x31af34a7fb4975d2dddf0b8a7ee56513 }, // -2697
    Multiplier { upper: 0xf1e11d4b6c140baaa12bdf1972e89ec6, lower: 0xb5e5210cc542561e2fcb45aa64a23b52 }, // -2696
    Multiplier { upper: 0xc180e43c56766fbbb42318e128ba189e, lower: 0xf7ea80d7043511b1bfd5d1551d4e95db }, // -2695
    Multiplier { upper: 0x9acd8363785ebfc95ce8e0b42094e07f, lower: 0x2cbb9a459cf7415affde4110e43ede49 }, // -2694
    Multiplier { upper: 0xf7af389f26fdffa894a7cded00ee33fe, lower: 0xadf8f6d5c7f2022b32fd34e7d397ca0e }, // -2693
    Multiplier { upper: 0xc625c6e5b8cb32ed43b9718a6724f665, lower: 0x57fa5f116cc19b55c2642a530faca1a5 }, // -2692
    Multiplier { upper: 0x9e849f1e2d6f5bf102fac13b85b72b84, lower: 0x4661e5a78a347c449b83550f3fbd4e1e }, // -2691
    Multiplier { upper: 0xfda0fe96af18931b37f79b926f8b78d3, lower: 0xa3cfd5d8dd20c6d42c0554e532c87cfc }, // -2690
    Multiplier { upper: 0xcae7321225ad427c2cc6160ebfa2c70f, lower: 0xb63fde47174d6bdcf00443ea8f06ca63 }, // -2689
    Multiplier { upper: 0xa2528e74eaf101fcf09e780bcc8238d9, lower: 0x5e997e9f45d7897d8cd036553f38a1e9 }, // -2688
    Multiplier { upper: 0x81dba52a558d9b30c07ec66fd6ce93e1, lower: 0x187acbb29e460797a3d9c510ff608187 }, // -2687
    Multiplier { upper: 0xcfc5d51088e291e79a6470b2f14a8634, lower: 0xf3f7ac50fd3cd8f29fc2d4e7ff00cf3f }, // -2686
    Multiplier { upper: 0xa637dda6d3e874b948505a28c1086b5d, lower: 0x8ff956a730fd7a5bb30243eccc00a5cc }, // -2685
    Multiplier { upper: 0x84f97e1f0fed2a2dd3737b53cda055e4, lower: 0x732ddeec27312eafc2683657099a1e3d }, // -2684
    Multiplier { upper: 0xd4c26364e648437c8585921faf66efd3, lower: 0xeb7c97e03eb5177f9d738a24dc29c9fb }, // -2683
    Multiplier { upper: 0xaa351c50b839cf96d137a819591f2643, lower: 0x22ca1319cbc412cc7df6081d7cee3b2f }, // -2682
    Multiplier { upper: 0x882a7d0d602e3fabda92ece11418eb68, lower: 0xe8a1a8e16fd00f09fe5e6ce463f1c8f2 }, // -2681
    Multiplier { upper: 0xd9dd94e2337d32ac90eb149b535b1241, lower: 0x7435db024c80180ffd63e16d6cb60e50 }, // -2680
    Multiplier { upper: 0xae4add81c2ca8ef073ef43af75e27501, lower: 0x29c4af350a00133ffde9812456f80b74 }, // -2679
    Multiplier { upper: 0x8b6f179b023ba58d298c3625f7e85d9a, lower: 0x87d08c2a6e6675cccb21341d12600929 }, // -2678
    Multiplier { upper: 0xdf1825c4d05f6f484279f03cbfda2f5d, lower: 0xa61a79dd7d70bc7ade9b8694ea3341dc }, // -2677
    Multiplier { upper: 0xb279b7d0a6b2bf6d01fb2696ffe1bf7e, lower: 0x1e7b94b13126fd2f187c6baa54f5ce49 }, // -2676
    Multiplier { upper: 0x8ec7c640855bcc5734c8ebabffe7cc64, lower: 0xe52faa275a859758e063895510c4a508 }, // -2675
    Multiplier { upper: 0xe472d6cda22c7a2521417913330c7a3b, lower: 0x084c43722a6f588e33d27554e7a1080c }, // -2674
    Multiplier { upper: 0xb6c245714e89fb50e767940f5c09fb62, lower: 0x6d09cf8e885913a4f641f7771fb40670 }, // -2673
    Multiplier { upper: 0x9235045aa53b2f73ec52dcd9166e62b5, lower: 0x2407d93ed37a761d91ce5f927fc3385a }, // -2672
    Multiplier { upper: 0xe9ee6d5dd52b7f1fe084948e8a4a3788, lower: 0x39a628648590bcfc1c7d65b732d1f3c2 }, // -2671
    Multiplier { upper: 0xbb25244b10ef98e64d36dd3ed5082c6c, lower: 0xfaeb53839e0d63fce39784928f0e5c9c }, // -2670
    Multiplier { upper: 0x95b7503c0d8c7a51d75f17657739bd23, lower: 0xfbef7602e4d78330b612d0753f3eb07d }, // -2669
    Multiplier { upper: 0xef8bb39348e0c3b62564f23bf1f5fb6c, lower: 0xc64bf004a158d1e789b7b3eecb9780c7 }, // -2668
    Multiplier { upper: 0xbfa2f60f6d809c91b783f4fcc19195f0, lower: 0x9ea3266a1aad74b93af95cbf0946009f }, // -2667
    Multiplier { upper: 0x994f2b3f8acd4a0e2c6990ca347477f3, lower: 0xb21c1ebb488ac3c7626116ff3a9e66e6 }, // -2666
    Multiplier { upper: 0xf54b7865aae21016ad75b476ba53f31f, lower: 0x8360312ba7446c723701be652a970b09 }, // -2665
    Multiplier { upper: 0xc43c60515581a6788ac4905efb765c19, lower: 0x35e68dbc85d056c1c59afeb75545a26e }, // -2664
    Multiplier { upper: 0x9cfd19daaace1ec6d56a0d18c92b7ce0, lower: 0xf7eba496d173789b047bfef9110481f2 }, // -2663
    Multiplier { upper: 0xfb2e8fc4447cfe0aef1014f475126167, lower: 0xf312a0f14f1f275e6d93318e81a0cfe9 }, // -2662
    Multiplier { upper: 0xc8f20c9d039731a258d9aa5d2a751ab9, lower: 0x8f421a5aa5b285e52475c13ece1a3fed }, // -2661
    Multiplier { upper: 0xa0c1a3b0cfac27b513e15517552a7bc7, lower: 0xa5ce7b7bb7c204b7505e34323e7b6658 }, // -2660
    Multiplier { upper: 0x809ae95a3fbcec90dcb44412aa886306, lower: 0x1e3ec92fc634d092a6b1c35b652f8513 }, // -2659
    Multiplier { upper: 0xcdc4a89065fb141afaba0684440d6b3c, lower: 0xfd3141e609ee1a843de938923b7f3b51 }, // -2658
    Multiplier { upper: 0xa49d53a6b7fc101595619ed036712297, lower: 0x30f434b807f1aed031876074fc65c90e }, // -2657
    Multiplier { upper: 0x83b10fb893300cde111ae5735ec0e878, lower: 0xf3f69093398e25735ad2b390c9eb073e }, // -2656
    Multiplier { upper: 0xd2b4e5f41eb347c9b4f7d5856467da5b, lower: 0x1ff0e751f5b03bebc48452814311a530 }, // -2655
    Multiplier { upper: 0xa890b7f67ef5d307c3f9779de9ecaeaf, lower: 0x4cc0b90e5e26965636d0420102748427 }, // -2654
    Multiplier { upper: 0x86da2cc5325e426c9cc792e4bb23bef2, lower: 0xa3cd60d84b5211de924034cd9b9069b9 }, // -2653
    Multiplier { upper: 0xd7c37ad51d639d7a947284a12b6c64b7, lower: 0x6c7bce26dee9b630ea00547c2c1a42c1 }, // -2652
    Multiplier { upper: 0xac9c62441782e462105b9d4dbc56b6f9, lower: 0x23963e857f215e8d8800439689ae9bce }, // -2651
    Multiplier { upper: 0x8a16b5034602504e737c7dd7c9def8c7, lower: 0x4fab653798e77ed7a000361207bee30b }, // -2650
    Multiplier { upper: 0xdcf1219ed66a1a171f2d96260fcb27a5, lower: 0x4c456ebf5b0bfe25cccd23500c649e78 }, // -2649
    Multiplier { upper: 0xb0c0e7b24521ae78e5be11b80ca2861d, lower: 0xd69df232af3ccb5170a41c4009ea1860 }, // -2648
    Multiplier { upper: 0x8d671fc1d0e7bec71e31a7c6708204e4, lower: 0xabb18e8ef297090df3b67d0007ee79e6 }, // -2647
    Multiplier { upper: 0xe23e99361b0c6471c9e90c70b4033b07, lower: 0x791c174b1dbe74e31f8a6199a64a5ca4 }, // -2646
    Multiplier { upper: 0xb4fee0f815a3838e3b20d6c09002959f, lower: 0x94167908e4985d827fa1e7ae1ea1e3b6 }, // -2645
    Multiplier { upper: 0x90cbe72cde1c693e95b3df007335447f, lower: 0xa9ab94071d46b13532e7ec8b4bb4b62b }, // -2644
    Multiplier { upper: 0xe7aca5149693db9755ec9800b8553a65, lower: 0xdc45b9a4fba44ebb84a6474545edf045 }, // -2643
    Multiplier { upper: 0xb956ea76dedcafac44bd4666f9ddc851, lower: 0x7d049483fc83722f9d51d29dd18b269e }, // -2642
    Multiplier { upper: 0x9445885f18b08c89d0976b8594b16d0d, lower: 0xfd9d439cca02c1bfb10e4217dad5b87e }, // -2641
    Multiplier { upper: 0xed3c0d64f44dada94dbf126f544f14e3, lower: 0x2f6205c7a99e02cc4e7d368c9155f3fd }, // -2640
    Multiplier { upper: 0xbdc9a450c37157baa498db8c4372771c, lower: 0x25e8049fbae4cf09d8642ba3a777f664 }, // -2639
    Multiplier { upper: 0x97d48373cf8ddfc883ad7c7035f52c16, lower: 0x84b99d4c9583d8d4ad1cefb61f932b83 }, // -2638
    Multiplier { upper: 0xf2ed9f1fb27c9940d2af2d8056551357, lower: 0x3ac29547559fc154482e4c5698eb78d2 }, // -2637
    Multiplier { upper: 0xc257b27fc1fd47670ef28acd11dda912, lower: 0x9568776c447fcddd068b70454722c70f }, // -2636
    Multiplier { upper: 0x9b795b9967fdd2b8d8c208a40e4aeda8, lower: 0x7786c5f036cca4b0d209269dd28238d9 }, // -2635
    Multiplier { upper: 0xf8c22c28a662eac15ad00dd34a117c40, lower: 0xbf3e098057add44e1cdb70fc84038e27 }, // -2634
    Multiplier { upper: 0xc701bced51e8bbcde2400b0f6e746366, lower: 0xff64d466ac8b103e7d7c5a639ccfa4ec }, // -2633
    Multiplier { upper: 0x9f3497244186fca4b50008d92529e91f, lower: 0x32b7105223a273653130484fb0a61d8a }, // -2632
    Multiplier { upper: 0xfeba8b6d35a4c76dee66748ea1dca831, lower: 0xeabe80836c371f084eb3a6e5e7702f42 }, // -2631
    Multiplier { upper: 0xcbc86f8a91509f8b251ec3a54e4a2027, lower: 0xeefecd35f02c18d37229525185f35902 }, // -2630
    Multiplier { upper: 0xa306bfa20dda193c1db2361dd83b4cec, lower: 0xbf323dc4c023470f8e87750e04c2ad9b }, // -2629
    Multiplier { upper: 0x826bcc81a4ae7a967e282b4b1362a3f0, lower: 0x98f4fe37001c38d93ed2c40b3702247c }, // -2628
    Multiplier { upper: 0xd0ac7a69077d90f0c9d9dede856a9fe7, lower: 0x5b2196be66938e2864846cdebe69d3fa }, // -2627
    Multiplier { upper: 0xa6f061ed9f97a72707e17f186abbb31f, lower: 0x7c1adefeb8760b53839d23e565217662 }, // -2626
    Multiplier { upper: 0x858d1b247fac85b8d31acc13889628e5, lower: 0xfce24bfef9f8090f9c7db6511db45eb5 }, // -2625
    Multiplier { upper: 0xd5ae91d3ff7a6f8e1e914685a756a7d6, lower: 0x616a13318ff341b293fc56e82f86fded }, // -2624
    Multiplier { upper: 0xaaf20e4332c8593e7eda9ed152abb978, lower: 0x4dee75c13ff5ce28766378b9bf9f318b }, // -2623
    Multiplier { upper: 0x88c1a5028f06adcb98aee5744222fac6, lower: 0xa4bec49a999171b9f84f93c7cc7f5ad6 }, // -2622
    Multiplier { upper: 0xdacf6e6a7e7116128de4a2539d04c471, lower: 0x0797a0f75c1be9298d4c1fa613fef7bc }, // -2621
    Multiplier { upper: 0xaf0c585531f411a87183b50fb0d09d27, lower: 0x39461a5f7ce320ee0aa34c84dccbf963 }, // -2620
    Multiplier { upper: 0x8c09e04427f67486c1362a72f3da1752, lower: 0x9438151930b5b3f1a21c3d371709944f }, // -2619
    Multiplier { upper: 0xe00fcd39d98a540acebd10b7ec902550, lower: 0xed2688284def864f69c6c85824dc207f }, // -2618
    Multiplier { upper: 0xb33fd7617ad51008a5640d5ff073510d, lower: 0x8a8539b9d7f2d1d9216bd379b7168066 }, // -2617
    Multiplier { upper: 0x8f6645e795774006eab671198d290da4, lower: 0x6ed0fafb1328a7e0e78975faf8decd1e }, // -2616
    Multiplier { upper: 0xe5706fd8ef25333e44571b5c150e7c3a, lower: 0x4ae7f7f81ea77301727589918e314830 }, // -2615
    Multiplier { upper: 0xb78d264725b75c31d045af7cdda5302e, lower: 0xa2532cc67eec5c01285e07a7a4f439c0 }, // -2614
    Multiplier { upper: 0x92d751d28492b027d9d15930b150f358, lower: 0x81dc23d1ff237ccdb9e4d2ec83f6949a }, // -2613
    Multiplier { upper: 0xeaf21c84075119d95c82284de881855a, lower: 0x6960394ffe9f2e15f63aeb1406575429 }, // -2612
    Multiplier { upper: 0xbbf4e39cd2a747e116ce86a4ba01377b, lower: 0x87802dd9987f581191c8bc100512a9ba }, // -2611
    Multiplier { upper: 0x965d82e3dbb9064dabd86bb6fb342c62, lower: 0xd2ccf17ae065e00e0e3a300cd0dbbafc }, // -2610
    Multiplier { upper: 0xf0959e395f8e707c462712be5eb9e09e, lower: 0x1e14b5916709667ce3904ce14e2c5e5f }, // -2609
    Multiplier { upper: 0xc077b1c77fa526c9d1b8dbcb7efb1a18, lower: 0x181091411f3ab863e9403d810b56b1e6 }, // -2608
    Multiplier { upper: 0x99f95b05ffb7523b0e2d7ca2cbfc14e0, lower: 0x1340743418fbc6b6543364673c455b1e }, // -2607
    Multiplier { upper: 0xf65bc4d665f21d2b49e2610479935499, lower: 0xb86720535b2c7123b9ebd3d8606ef830 }, // -2606
    Multiplier { upper: 0xc5163711eb281755d4b51a69fadc43ae, lower: 0x2d1f4d0f7c238db62e5643138058c68d }, // -2605
    Multiplier { upper: 0x9dab5f4188ecdf77dd5daebb2f169c8b, lower: 0x574c3da5fce93e2b584502760047053e }, // -2604
    Multiplier { upper: 0xfc456535a7e1658c9562b12b7e8a9412, lower: 0x2546c90994a863788d3b372333a4d52f }, // -2603
    Multiplier { upper: 0xc9d11dc4864dead6dde88dbc653ba9a8, lower: 0x1dd23a6e1086b5fa0a95c5b5c2ea4426 }, // -2602
    Multiplier { upper: 0xa17417d06b7188abe4ba0afd1dc95486, lower: 0x7e41c8580d389194d5449e2b02550352 }, // -2601
    Multiplier { upper: 0x8129aca6bc5ad3bcb6fb3bfdb16ddd38, lower: 0x65016d133dc6dadd776a1822684402a8 }, // -2600
    Multiplier { upper: 0xcea9143dfa2aec6124c52cc91be2fb8d, lower: 0x6e68ae852fa4916258a9c0370d399dd9 }, // -2599
    Multiplier { upper: 0xa554103194ef2380ea375707498262d7, lower: 0x8b86f204261d411b7a21669270fae4ae }, // -2598
    Multiplier { upper: 0x84434027aa58e933ee92ac05d4684f12, lower: 0xd6058e69b81767492e811edb8d9583be }, // -2597
    Multiplier { upper: 0xd39ecd0c43c1751fe41de00953da181e, lower: 0x233c170f8cf23edb7d9b64927c226c63 }, // -2596
    Multiplier { upper: 0xa94bd73d03012a7fe9b180077648134b, lower: 0x4f6345a60a5b657c647c5075301b89e9 }, // -2595
    Multiplier { upper: 0x876fdf6402675533215accd2c50675d5, lower: 0xd91c37b808491dfd1d30405dc01607ee }, // -2594
    Multiplier { upper: 0xd8b2ff066a3eeeb8355e14846e70bc89, lower: 0x5b60592673a82ffb61e6cd62ccf00caf }, // -2593
    Multiplier { upper: 0xad5bff3854ff25602ab1aa038b8d63a1, lower: 0x15e6adb85c868cc91b1f0ab570c00a26 }, // -2592
    Multiplier { upper: 0x8aafff6043ff5119bbc154cfa2d782e7, lower: 0x44b88af9e39ed70748e5a22ac099a1b8 }, // -2591
    Multiplier { upper: 0xdde66566d3321b5c5f9bbae5d158d172, lower: 0x078dab296c31580ba7d5d044675c35f3 }, // -2590
    Multiplier { upper: 0xb1851debdc2815e37fafc8b7daad745b, lower: 0x393e228789c1133c8644a69d1f7cf7f6 }, // -2589
    Multiplier { upper: 0x8e0417efe35344b5ffbfd3c6488ac37c, lower: 0x2dcb4ed2d49a75ca0503b87db2ca5ff8 }, // -2588
    Multiplier { upper: 0xe339bfe638853abccc661fa3a7446bf9, lower: 0xe2dee484875d89433b39272f8476fff3 }, // -2587
    Multiplier { upper: 0xb5c7ccb82d376230a384e61c85d05661, lower: 0x824bea039f7e0768fc2db8f2d05f3329 }, // -2586
    Multiplier { upper: 0x916ca3c68a92b4f3b603eb4a04a6ab81, lower: 0x35098802e5fe6c53fcf160c2404c28ee }, // -2585
    Multiplier { upper: 0xe8add2d7441dee52bcd3121007711268, lower: 0x54dc0cd16ffd7a1ffb1bce039a1374af }, // -2584
    Multiplier { upper: 0xba24a8ac367e584230a8db4005f40eb9, lower: 0xdd7cd70df3312e7ffc163e69480f908c }, // -2583
    Multiplier { upper: 0x94ea2089c531e034f3ba490004c33efb, lower: 0x179712718f5a8b99967831edd33fa6d7 }, // -2582
    Multiplier { upper: 0xee436742d51c99ee52c3a800079ecb2b, lower: 0x58f1b71c1890df5c23f383161ecc3e24 }, // -2581
    Multiplier { upper: 0xbe9c529bddb07b250f02ecccd2e56f55, lower: 0xe0c15f49ad40b2b01cc2cf44e57031b6 }, // -2580
    Multiplier { upper: 0x987d0ee317c062840c02570a425125de, lower: 0x4d677f6e2433c2267d68a5d0b78cf492 }, // -2579
    Multiplier { upper: 0xf3fb4b04f2cd6a6ce003be76d081d630, lower: 0x7bd8cbe36d1f9d0a6241094df27b20e9 }, // -2578
    Multiplier { upper: 0xc32f6f3728a45523e669652bda017826, lower: 0xc97a3cb5f0e6173b81cda10b286280bb }, // -2577
    Multiplier { upper: 0x9c25f29286e9ddb651edea897b34601f, lower: 0x0794fd5e5a51ac2f9b0ae73c204ecd62 }, // -2576
    Multiplier { upper: 0xf9d650ea71762f8a1cafdda8c52099cb, lower: 0x3f54c896f6e9137f5e77d86033b1489d }, // -2575
    Multiplier { upper: 0xc7dea721f45e8c6e7d597e209db3ae3c, lower: 0x32aa3a125f20dc65e52cad19c2f43a17 }, // -2574
    Multiplier { upper: 0x9fe55281904ba38b977acb4d4af624fc, lower: 0xf554fb41e5b3e384b756f0e168c361ac }, // -2573
    Multiplier { upper: 0xffd550cf4d45d278f25e121544bd07fb, lower: 0x22219203091fd26df224b49bdad235e0 }, // -2572
    Multiplier { upper: 0xccaaa70c3dd1752d8eb1a81103ca6cc8, lower: 0xe81adb35a0e641f18e83c3afe241c4b3 }, // -2571
    Multiplier { upper: 0xa3bbb8d697dac4247227b9a7363b8a3a, lower: 0x5348af5e1a51ce5ad869695981ce36f6 }, // -2570
    Multiplier { upper: 0x82fc93dedfe236838e862e1f5e96082e, lower: 0xa906f2b1aea7d848ad21211467d82bf8 }, // -2569
    Multiplier { upper: 0xd1941fcaffd05738e409e3656423404a, lower: 0xa80b1de91772f3a77b6834ed72f3798d }, // -2568
    Multiplier { upper: 0xa7a9b308cca6ac2d833b1c511ce9003b, lower: 0xb9a27e5412c25c85fc535d8ac25c613d }, // -2567
    Multiplier { upper: 0x86215c070a1ef02468fc16a74a54002f, lower: 0xc7b531dcdbceb06b3042b13bceb04dcb }, // -2566
    Multiplier { upper: 0xd69bc671a9cb19d3db2cf10baa20004c, lower: 0x72bb82faf94ab3deb39de85fb11a1611 }, // -2565
    Multiplier { upper: 0xabafd1f487d5ae4315bd8da2ee80003d, lower: 0x2896026261088fe55c7e537fc0e1ab41 }, // -2564
    Multiplier { upper: 0x895974c39fde250277cad7b58b9999ca, lower: 0x86de684eb406d98449fea93300b48901 }, // -2563
    Multiplier { upper: 0xdbc2546c32fd0803f2de25ef45c28faa, lower: 0x7163da1786715c06dccaa8519aba74ce }, // -2562
    Multiplier { upper: 0xafcea9f028ca6ccff57e84bf6b020c88, lower: 0x5ab64812d1f4499f170886a7aefb90a5 }, // -2561
    Multiplier { upper: 0x8ca554c020a1f0a65dfed09922680a06, lower: 0xaef839a8a7f6a14c126d388625960d51 }, // -2560
    Multiplier { upper: 0xe1088799cdcfe770966480f503d9a9a4, lower: 0x4b26c2a77324354683e1f409d5bce21a }, // -2559
    Multiplier { upper: 0xb406d2e171731f8d451d33f73647bae9, lower: 0xd5b89bb928e9c43869819007de30b4e2 }, // -2558
    Multiplier { upper: 0x90057581278f4c7104175cc5c5062f21, lower: 0x77c6e2fa872169c6bace0cd31826f71b }, // -2557
    Multiplier { upper: 0xe66f22683f4bad81a025613c6e704b68, lower: 0xbfa49e5da50242d79149ae1e8d0b24f8 }, // -2556
    Multiplier { upper: 0xb858e85365d62467b3511a96bec03c53, lower: 0xcc83b1e48401cf12daa1581870d5b72d }, // -2555
    Multiplier { upper: 0x937a5375eb11b6b95c40e21232336376, lower: 0x3d3627ea0334a5a8aee779ad27115f57 }, // -2554
    Multiplier { upper: 0xebf6ebefde82bdf56067d01d1d1f0589, lower: 0xfb89d9766b876f744b0bf5e1d81bcbbf }, // -2553
    Multiplier { upper: 0xbcc5898cb202319119eca67db0e59e07, lower: 0xfc6e4791ef9f8c5d08d65e4e467ca2ff }, // -2552
    Multiplier { upper: 0x97046e0a2801c140e18a1ecaf3eae4d3, lower: 0x305839418c7fa37da0ab7ea505308266 }, // -2551
    Multiplier { upper: 0xf1a0b0104002cece35a9cade53116e1e, lower: 0xb3c05b9c13ff6bfc3445976e6eb403d6 }, // -2550
    Multiplier { upper: 0xc14d59a6999bd8a4f7bb08b1dc0df1b2, lower: 0x2966afb00fff89969037ac5858900311 }, // -2549
    Multiplier { upper: 0x9aa447b87ae313b72c95a08e49a4c15b, lower: 0x545226267332d478735fbd137a0ccf41 }, // -2548
    Multiplier { upper: 0xf76d3f8d916b52beadbc3416dc3acef8, lower: 0x86e9d6a3eb8487271eff94ebf67ae535 }, // -2547
    Multiplier { upper: 0xc5f0ffa47455dbcbbe3029abe3623f2d, lower: 0x38bb121cbc6a05b8e59943eff86250f7 }, // -2546
    Multiplier { upper: 0x9e5a661d29de496fcb59baefe91b65bd, lower: 0xc6fc0e7d63880493eae10326604ea72c }, // -2545
    Multiplier { upper: 0xfd5d702ea963a8b2def5f7e641c56f96, lower: 0x0b2ce3fbd2733a86449b383d66e43ead }, // -2544
    Multiplier { upper: 0xcab1268bbab6208f18c4c651ce378c78, lower: 0x08f0b6630ec2953836e2936452503224 }, // -2543
    Multiplier { upper: 0xa2275209622b4d3f4703d1db0b5fa393, lower: 0x3a5a2b827235442cf8b542b6a840281d }, // -2542
    Multiplier { upper: 0x81b90e6de822a4329f36417c09194fa8, lower: 0xfb7b5601f4f769bd93c4355eed002017 }, // -2541
    Multiplier { upper: 0xcf8e7d7ca69dd38431f068c674f54c41, lower: 0x925ef003218bdc628606bbcb14cd0025 }, // -2540
    Multiplier { upper: 0xa60b9796ebb176035b26ba385d9109ce, lower: 0x0eb2599c1ad649e86b38963c10a4001e }, // -2539
    Multiplier { upper: 0x84d612df22f45e6915b894f9e47407d8, lower: 0x0bc1e149af11d4b9ef6078300d500018 }, // -2538
    Multiplier { upper: 0xd489b7cb6b20970e892754c307200c8c, lower: 0xdf9c9ba9181c878fe56726b348800026 }, // -2537
    Multiplier { upper: 0xaa07c63c55b3ac0ba0ec43cf38e67070, lower: 0xb2e3afba79b06c731dec1ef5d39999b8 }, // -2536
    Multiplier { upper: 0x88063830448fbcd61a569ca5c71ec05a, lower: 0x28b6262ec7c056c27e567f2b0fae1493 }, // -2535
    Multiplier { upper: 0xd9a38d1a074c6156908a943c71cacd5d, lower: 0x0df03d17a6008ad0ca23feab4c49ba85 }, // -2534
    Multiplier { upper: 0xae1c70e19f704ddeda087696c16f0ab0, lower: 0xd7f36412eb33a240a1b66555d6a16204 }, // -2533
    Multiplier { upper: 0x8b49f3e7b2c03e4be1a05edf0125a227, lower: 0x13291cdbef5c81cd4e2b8444abb44e6a }, // -2532
    Multiplier { upper: 0xdedcb972b799fd4635cd649801d5d03e, lower: 0x850e9493189402e216ac06d445ed4a42 }, // -2531
    Multiplier { upper: 0xb24a2df55fae64382b0ab6e00177d9cb, lower: 0x9da543a8e07668b4def005769e576e9c }, // -2530
    Multiplier { upper: 0x8ea1be5de6251cf9bc08924ccdf97b09, lower: 0x4aea9c8719f853c3e58cd12bb1df8bb0 }, // -2529
    Multiplier { upper: 0xe435fd6309d4fb292cda83ae165bf80e, lower: 0xde442da4f65a1f9fd5ae1b791c98df7f }, // -2528
    Multiplier { upper: 0xb69197826e43fc20f0aecfbe7849933f, lower: 0x18368aea5eae7fb3115815fa7d471933 }, // -2527
    Multiplier { upper: 0x920e12cebe9cc9b3f3bf0c98603adc32, lower: 0x79c53beeb22532f5a779ab2eca9f475c }, // -2526
    Multiplier { upper: 0xe9b01e17976142b985fe7a8d66c49383, lower: 0xf6085fe4503b84bc3f2911e477653ef9 }, // -2525
    Multiplier { upper: 0xbaf34b4612b4356137fec8711f03a936, lower: 0x5e6d19837362d09698eda7e9f91dcbfb }, // -2524
    Multiplier { upper: 0x958f6f6b4229c44dc6656d274c02edc5, lower: 0x1857479c5c4f0d4547248654c74b0995 }, // -2523
    Multiplier { upper: 0xef4be57869dc6d493d6f150bacd17c6e, lower: 0x8d587293c6e4e20871d40a213ede75bc }, // -2522
    Multiplier { upper: 0xbf6feac6bb16bdd43125aa6fbd74638b, lower: 0xa446c20fd250b4d38e433b4dcbe52afd }, // -2521
    Multiplier { upper: 0x9926556bc8defe435a848859645d1c6f, lower: 0xb69f01a641da2a42d835c90b09842264 }, // -2520
    Multiplier { upper: 0xf50a22460e3196d22a6da6f56d61c719, lower: 0x24319c3d3629dd37c0560e780f39d09f }, // -2519
    Multiplier { upper: 0xc4081b6b3e8e1241bb8aebf78ab49f47, lower: 0x5027b030f8217dc633780b933f6173b3 }, // -2518
    Multiplier { upper: 0x9cd349229871a8349608bcc608907f6c, lower: 0x401fc0272ce797d1c2c66fa8ff81295c }, // -2517
    Multiplier { upper: 0xfaeba8375a4f73875674613cda80cbe0, lower: 0x66993371e1728c82d13d7f74cc01dbc6 }, // -2516
    Multiplier { upper: 0xc8bc8692aea5f605dec380fd7b9a3cb3, lower: 0x85475c5b1ac20a0240fdff90a334afd2 }, // -2515
    Multiplier { upper: 0xa096d20ef21e5e6b189c67312fae96f6, lower: 0x043916af489b3b3500cb32da1c2a2641 }, // -2514
    Multiplier { upper: 0x8078a80bf4e51855ad49ec27595878c4, lower: 0xd02dabbf6d48fc2a6708f57b49bb51ce }, // -2513
    Multiplier { upper: 0xcd8dd9acbb0826ef7ba979d88ef3f46e, lower: 0x19e2ac657ba7f9dd71a7ef2ba92bb616 }, // -2512
    Multiplier { upper: 0xa4717af095a01f25fc8794ad3f299058, lower: 0x14b556b7961ffb178e1ff2895422f812 }, // -2511
    Multiplier { upper: 0x838dfbf3aae67f5196d2dd5765bad9e0, lower: 0x1091122c781995ac71b3286ddce8c675 }, // -2510
    Multiplier { upper: 0xd27cc652ab0a654f57b7c88bd5f7c300, lower: 0x1a81b6ad8cf5bc471c51da49617470bb }, // -2509
    Multiplier { upper: 0xa863d1dbbc08510c462ca06fde5fcf33, lower: 0x4867c557a3f7c9d27d0e483ab45d26fc }, // -2508
    Multiplier { upper: 0x86b6417c966d0da36b56e6bfe519728f, lower: 0x6d1fd112e99307db973ea02ef6b0ebfd }, // -2507
    Multiplier { upper: 0xd78a0260f0ae7c38abbe3dffd4f58418, lower: 0xae994e84a8eb3fc5beca99e4bde7dffa }, // -2506
    Multiplier { upper: 0xac6e684d8d5863608964fe6643f79ce0, lower: 0x8badd86a20bc330498a214b6fe531995 }, // -2505
    Multiplier { upper: 0x89f1ed0ad779e91a0783feb8365fb0b3, lower: 0xa2f179ee80968f36e081aa2bfea8e144 }, // -2504
    Multiplier { upper: 0xdcb6481158c30e900c066459f0991ab9, lower: 0x04b58fe400f0e5249a6910466441686d }, // -2503
    Multiplier { upper: 0xb091d34113cf3ed9a3385047f3adaefa, lower: 0x6a2ad98333f3ea83aeba736b836786be }, // -2502
    Multiplier { upper: 0x8d4175cda97298ae1c2d0d065c8af261, lower: 0xee88ae028ff655362561f5ef9c52d231 }, // -2501
    Multiplier { upper: 0xe2025615dbea8de3604814d6fa77ea36, lower: 0x4a74499db323bb89d569897f60848382 }, // -2500
    Multiplier { upper: 0xb4ceab44afeed7e919d343df2ec654f8, lower: 0x3b903ae48f4fc93b11213acc4d36cf9b }, // -2499
    Multiplier { upper: 0x90a555d08cbf1320e175cfe5bf0510c6, lower: 0x960cfbea0c3fd42f40e7623d0a923fb0 }, // -2498
    Multiplier { upper: 0xe76eefb41464eb67cf22e63c64d4e7a4, lower: 0x2347f97679ffb9e534a569fb441d32b2 }, // -2497
    Multiplier { upper: 0xb9258c901050bc530c1beb6383dd861c, lower: 0xe906612b94cc94b75d512195d0175bc2 }, // -2496
    Multiplier { upper: 0x941e0a0cd9da3042701655e9364ad1b0, lower: 0xba6b80efaa3d43c5e440e7ab0cdf7c9b }, // -2495
    Multiplier { upper: 0xecfcdce15c904d3719bd5641f077b5e7, lower: 0x90ac017f76c86c6fd39b0c44e165942b }, // -2494
    Multiplier { upper: 0xbd97171ab07370f8e16445018d2c9186, lower: 0x0d5667992bd389f30faf3d03e7847689 }, // -2493
    Multiplier { upper: 0x97ac127bc05c5a60b450373470f0746b, lower: 0x3ddeb9475642d4c272f2973652d05ed4 }, // -2492
    Multiplier { upper: 0xf2acea5f9a2d5d6786e6beba4e4d8711, lower: 0xfc978ed88a04879d84b75856eae6fe20 }, // -2491
    Multiplier { upper: 0xc223eeb2e1bde452d252322ea50ad274, lower: 0xca12d8ad3b36d2e46a2c46abef1f31b3 }, // -2490
    Multiplier { upper: 0x9b4ff228b497e9dbdb74f4f21da241f7, lower: 0x080f13bdc8f8a8b6bb569eeff27f5af6 }, // -2489
    Multiplier { upper: 0xf87fe9daba8ca95fc587ee502f6a0324, lower: 0xd9b1b92fa7f441245ef0fe4cb7322b23 }, // -2488
    Multiplier { upper: 0xc6ccbb15620a21196ad3250cf2bb35b7, lower: 0x148e2dbfb990341d18c0cb70928e88e9 }, // -2487
    Multiplier { upper: 0x9f0a2f444e6e80e12242840a5bc8f7c5, lower: 0xaa0b57cc94735ce413cd6f8d420ba0ba }, // -2486
    Multiplier { upper: 0xfe76b206e3e4016836d0d343c60e593c, lower: 0x4345594753ebc7d352e24c153679012a }, // -2485
    Multiplier { upper: 0xcb922805831ccdecf8a70f696b3eadc9, lower: 0xcf6aadd2a9896ca90f1b7010f860cdbb }, // -2484
    Multiplier { upper: 0xa2db53379c170b23fa1f3f8788fef16e, lower: 0x3f888b0eee078a20d8e2c00d9380a496 }, // -2483
    Multiplier { upper: 0x82490f5fb0126f4ffb4c32d2d3ff278b, lower: 0x6606d5a58b393b4d7a4f000adc66ea11 }, // -2482
    Multiplier { upper: 0xd074e565e683e54cc546b7b7b9983f45, lower: 0x700aef6f45285ee25d4b334493d7dce8 }, // -2481
    Multiplier { upper: 0xa6c3eab7eb9cb7709dd22c92fae0329d, lower: 0xf33bf2bf6a86b24eb108f5d076464a54 }, // -2480
    Multiplier { upper: 0x8569889322e3c5f3b174f0759580287e, lower: 0x5c2ff565eed2283ef4072b0d2b6b6ea9 }, // -2479
    Multiplier { upper: 0xd575a751d16c6fec4f2180bc2266a730, lower: 0x937fef097e1d0d318671de7b78abe442 }, // -2478
    Multiplier { upper: 0xaac485db0df05989d8e79a301b85528d, lower: 0x42ccbf3acb4a70f46b8e4b95fa231d02 }, // -2477
    Multiplier { upper: 0x889d37e2718d146e471fae8ce2d10ed7, lower: 0x68a3cc2f09085a5d22d83c77fb4f4a68 }, // -2476
    Multiplier { upper: 0xda9526371c14ed7d3e991747d14e7e25, lower: 0x743946b1a80d5d61d159fa599218770c }, // -2475
    Multiplier { upper: 0xaeddb82c167724643214129fdaa531b7, lower: 0x902dd227b9a44ab4a77b2eae0e79f8d7 }, // -2474
    Multiplier { upper: 0x8be49356785f505028100ee6488427c6, lower: 0x0cf174ec94836ef6ec628bbe71fb2d79 }, // -2473
    Multiplier { upper: 0xdfd41ef0c09880804019b1707406a609, lower: 0xae4f217a8738b18b13d0df971cc5158e }, // -2472
    Multiplier { upper: 0xb31018c09a139a003347c126c33884d4, lower: 0x8b72812ed293c13c0fda4c78e3d0de0b }, // -2471
    Multiplier { upper: 0x8f4013cd480fae668f6c9a8568fa03dd, lower: 0x3c5b9a8bdba967633fe1d6c71ca71809 }, // -2470
    Multiplier { upper: 0xe53352e20ce5e3d74be0f73bdb299fc8, lower: 0x609290dfc5dbd89ecc9c8ad82dd82674 }, // -2469
    Multiplier { upper: 0xb75c424e70b7e9790980c5c97c214ca0, lower: 0x4d420d7fd17cad4bd6e3a2468b1351f7 }, // -2468
    Multiplier { upper: 0x92b0350b8d5fedfa6e009e3ac9b43d4d, lower: 0x0a9b3dffdaca243cabe94e9ed5a90e5f }, // -2467
    Multiplier { upper: 0xeab388127bccaff71667639142b9fbae, lower: 0x775ec9995e1039faaca87dcaef74e3cb }, // -2466
    Multiplier { upper: 0xbbc2d341fca3bff8deb91c7435619625, lower: 0x2c4bd47ab1a694c88a2064a2592a4fd6 }, // -2465
    Multiplier { upper: 0x963575ce63b6332d7efa7d29c44e11b7, lower: 0x56a3106227b87706d4e6b6e847550cab }, // -2464
    Multiplier { upper: 0xf055894a3923851597f72ea93a1682be, lower: 0xf104e70372c0be7154a457da0bbb4778 }, // -2463
    Multiplier { upper: 0xc0446dd4fa82d0de132c25542e786898, lower: 0xc0d0b8cf8f00985aaa1d1314d62f6c60 }, // -2462
    Multiplier { upper: 0x99d057dd953573e4dc235110252d207a, lower: 0x33da2d72d8cd46aeee7da8dd7825f04d }, // -2461
    Multiplier { upper: 0xf61a262f55225307c69ee819d51500c3, lower: 0x8629e2515ae20ab17d95dafbf36fe6e1 }, // -2460
    Multiplier { upper: 0xc4e1b825ddb50f396bb25347ddaa6702, lower: 0xd1bb1b7448b4d55acade48c98f8cb8b4 }, // -2459
    Multiplier { upper: 0x9d81601e4af73f6122f50f6cb1551f35, lower: 0x7495af903a2a4448a24b6d6e0c7093c3 }, // -2458
    Multiplier { upper: 0xfc023363ab25323504bb4be11bbb6522, lower: 0x5422b2805d106d4103abe249ad80ec6c }, // -2457
    Multiplier { upper: 0xc99b5c4fbc1dc1c403c90980e2fc50e8, lower: 0x434ef5337da6bdcd9c8981d48acd89f0 }, // -2456
    Multiplier { upper: 0xa14916a63017ce36696da133e8c9da53, lower: 0x690bf75c648564a47d3ace43a23e07f3 }, // -2455
    Multiplier { upper: 0x81074551c0130b5ebabe1a8fed6e4842, lower: 0xba6ff916b6d11d50642f0b694e98065c }, // -2454
    Multiplier { upper: 0xce720882cceb45645dfcf74caf16da04, lower: 0x5d7ff4f12481c880a04b45754a8cd6fa }, // -2453
    Multiplier { upper: 0xa52806cf0a55d11d17fd92a3bf457b36, lower: 0xb1332a5a839b06cd4d09045dd53d78c8 }, // -2452
    Multiplier { upper: 0x842005726eab0db0dffe0ee965d12f5e, lower: 0xf428eeaecfaf38a43da0d04b10fdfa3a }, // -2451
    Multiplier { upper: 0xd3666f1d7dde7c4e333017dbd61b7efe, lower: 0x5374b117b2b1f439fc3480781b2ff6c2 }, // -2450
    Multiplier { upper: 0xa91ebf4acb186371c28cdfe311af98cb, lower: 0x75f6f412f55b29c7fcf6cd2ce28cc568 }, // -2449
    Multiplier { upper: 0x874bcc3bd5ad1c5b020a4cb5a7bfad6f, lower: 0x91925cdbf77c216cca5f0a8a4ed70454 }, // -2448
    Multiplier { upper: 0xd87946c622ae93c4d0107abc3f99157f, lower: 0x4f509493259368ae109810dd4af1a085 }, // -2447
    Multiplier { upper: 0xad2dd2381bbedc9d7340623032e0ddff, lower: 0x72a6dd428475ed580d4673e43bf4806b }, // -2446
    Multiplier { upper: 0x8a8b0e9349657d4ac299e8268f1a4b32, lower: 0xc21f176869f7f1133dd1f6502ff6cd22 }, // -2445
    Multiplier { upper: 0xddab4a85423bfbaad0f6403db1c3ab84, lower: 0x69cb58a70ff31b51fc8323b37ff14837 }, // -2444
    Multiplier { upper: 0xb155d537682ffc88a72b6697c1695603, lower: 0x87d5e085a65c15db3068e95c665aa02c }, // -2443
    Multiplier { upper: 0x8dde442c535996d3b8ef8546345444cf, lower: 0x9fde4d37b849ab15c053ede385154cf0 }, // -2442
    Multiplier { upper: 0xe2fd39e0855c2485f4b26ed6ba206e18, lower: 0xffca1525f3a911bc66ecafd26e887b19 }, // -2441
    Multiplier { upper: 0xb59761806ab01d37f6f5257894e6be7a, lower: 0x663b441e5c874163858a2641f206c8e1 }, // -2440
    Multiplier { upper: 0x9145e799eef34a932bf7512d43ebcb95, lower: 0x1e95d0184a05cde937a1b834c19f071b }, // -2439
    Multiplier { upper: 0xe86fd8f64b1eddb8465881e206461288, lower: 0x30efb35a1009497525cf8d2135cb3e91 }, // -2438
    Multiplier { upper: 0xb9f313f83c18b1603846ce4e6b6b4206, lower: 0x8d8c8f7b40076df75172d74dc4a29874 }, // -2437
    Multiplier { upper: 0x94c276603013c119c69f0b71ef89019e, lower: 0xd7a3a5fc333924c5dac245d7d0821390 }, // -2436
    Multiplier { upper: 0xee03f099e68601c2d764df1cb274cf64, lower: 0x8c39099385283ad62ad06fbfb4035280 }, // -2435
    Multiplier { upper: 0xbe698d47eb9e67cf12b718e3c1f70c50, lower: 0x702da142d0ecfbde88a6bfcc9002a866 }, // -2434
    Multiplier { upper: 0x985471065618530c0ef8e0b634c5a373, lower: 0x8cf14dcf0d8a63186d52330a0cceed1f }, // -2433
    Multiplier { upper: 0xf3ba4e7089c084e017f49abd213c38b8, lower: 0xe182161815aa3827155051a9ae17e1ca }, // -2432
    Multiplier { upper: 0xc2fb71f3a166d0b3465d48974dc9c6fa, lower: 0x4e01ab4677bb601f444041548b464e3b }, // -2431
    Multiplier { upper: 0x9bfc5b294debda2905176d45d7d49f2e, lower: 0xa4ce229ec62f801903669aaa09050b63 }, // -2430
    Multiplier { upper: 0xf993c50ee312f6a808257ba2f2edcb7d, lower: 0xd47d04313d18ccf4d23dc44341a1abd1 }, // -2429
    Multiplier { upper: 0xc7a96a724f425eecd3512fb58f24a2cb, lower: 0x1064035a97470a5d74fe369c34815641 }, // -2428
    Multiplier { upper: 0x9fbabb8ea5ceb2570f74262ad8ea1bd5, lower: 0xa6b6691545d26eb12a64f87cf6cdde9b }, // -2427
    Multiplier { upper: 0xff912c176fb11d5818b9d6aaf4a9c622, lower: 0xa4570e886fb71781dd6e5a618ae2fdc4 }, // -2426
    Multiplier { upper: 0xcc742345f2f41779ad617888c3bb04e8, lower: 0x8378d86d262c12ce4abeaeb46f1bfe36 }, // -2425
    Multiplier { upper: 0xa3901c37f59012c7bde793a09c959d86, lower: 0xcf93e05751bcdbd83bcbbef6bf49982c }, // -2424
    Multiplier { upper: 0x82d9b02cc473423964b942e6e3aae46b, lower: 0xd94319df74971646963c98c565d479bd }, // -2423
    Multiplier { upper: 0xd15c4d146d8536c23ac204a49f77d3df, lower: 0xc204f6325424f070f060f46f0953f5fa }, // -2422
    Multiplier { upper: 0xa77d0a76be042bce956803b6e5f9764c, lower: 0x9b372b5b7683f38d8d1a5d25a10ff7fb }, // -2421
    Multiplier { upper: 0x85fda1f89803563eddeccfc584c791d6, lower: 0xe2928915f8698fa470e1e41e1a732cc9 }, // -2420
    Multiplier { upper: 0xd6629cc0f33889fe2fe14c6f3ad8e957, lower: 0xd0ea74eff3dc19071b03069690b847a8 }, // -2419
    Multiplier { upper: 0xab821700c293a198264dd6bf62472113, lower: 0x0d885d8cc3167a6c159c054540936c87 }, // -2418
    Multiplier { upper: 0x8934df33cedc8146850b1232b505b40f, lower: 0x3e06b13d68dec85677b0043766dc56d2 }, // -2417
    Multiplier { upper: 0xdb87cb8617c7353da1ab505121a2b9b1, lower: 0xfcd781fbdafe0d5725e66d2571608aea }, // -2416
    Multiplier { upper: 0xaf9fd604dfd290fe1aef73741ae8948e, lower: 0x63df9b2fe264d778eb1ebdb78de6d588 }, // -2415
    Multiplier { upper: 0x8c7fde6a4ca873fe7bf2c2c348ba1071, lower: 0xe97faf5981ea45fa55b2315fa4b8aad3 }, // -2414
    Multiplier { upper: 0xe0cc97107aa71ffd931e046ba7901a4f, lower: 0xdbff7ef59caa0990891d1bcc3ac11151 }, // -2413
    Multiplier { upper: 0xb3d6df40621f4ccadc18038952d9aea6, lower: 0x4999325e16ee6e0d3a7dafd69567410e }, // -2412
    Multiplier { upper: 0x8fdf19004e7f70a249accfa10f148bb8, lower: 0x3ae0f5181258580a953159787785cda5 }, // -2411
    Multiplier { upper: 0xe631c19a17324dd075e14c34e4edac59, lower: 0xf7ce54f3508d59aa884ef58d8c094908 }, // -2410
    Multiplier { upper: 0xb827ce14df5b7173918109c3ea57bd14, lower: 0xc63eaa5c407114886d0bf7a470076da0 }, // -2409
    Multiplier { upper: 0x93530b43e5e2c129413407cfeeac9743, lower: 0xd1cbbb7d005a76d38a6ff950599f8ae6 }, // -2408
    Multiplier { upper: 0xebb812063c9e01db9b8672e64aadbed2, lower: 0xe945f8c80090be1f43e65bb3c298de3d }, // -2407
    Multiplier { upper: 0xbc93419e96e4ce4949385beb6ef16575, lower: 0x876b2d6ccd409819031eafc30213e4fe }, // -2406
    Multiplier { upper: 0x96dc347edf1d71d43a937cbc58c11df7, lower: 0x9f88f123d766e014027ef302680fea65 }, // -2405
    Multiplier { upper: 0xf16053fe31c8b6205db8c793c134fcbf, lower: 0x65a7e83958a499b99d97eb370ce643d4 }, // -2404
    Multiplier { upper: 0xc119dccb5b06f819e493d2dc9a90ca32, lower: 0xb7b9869446ea14947e13229270b83643 }, // -2403
    Multiplier { upper: 0x9a7b1709159f2ce183a9757d4873d4f5, lower: 0x5fc79edd05881076cb42820ec0935e9c }, // -2402
    Multiplier { upper: 0xf72b580e88feae359f7588c873ec87ee, lower: 0xffa5cafb3c0ce724786a69b1341efdc7 }, // -2401
    Multiplier { upper: 0xc5bc4672073224f7b2c46d6d298a0658, lower: 0xcc84a2629670b8e9f9eebaf429b2649f }, // -2400
    Multiplier { upper: 0x9e30385b38f4ea5fc236bdf0ee080513, lower: 0xd6d081e8785a2d87fb25625cee28507f }, // -2399
    Multiplier { upper: 0xfd19f3c527ee43cc69f12fe7e340081f, lower: 0xbe1a6973f3c37c0cc5089d617d0d4d98 }, // -2398
    Multiplier { upper: 0xca7b296a8658363d218dbfecb5ccd34c, lower: 0x981521298fcf96709da07de7973dd7ad }, // -2397
    Multiplier { upper: 0xa1fc212205135e974e0afff09170a90a, lower: 0x13441a87a63fab8d4ae6cb1fac317957 }, // -2396
    Multiplier { upper: 0x819680e8040f7edf71a2665a0df3ba6e, lower: 0x75d0153951cc893dd5856f4c89c12de0 }, // -2395
    Multiplier { upper: 0xcf5734a66ce597cbe903d6f67cb92a4a, lower: 0x5619bb8ee94741fc88d57ee0dc684965 }, // -2394
    Multiplier { upper: 0xa5df5d51f0b7aca320cfdf2b96fa883b, lower: 0x7814960bedd29b306d7798b3e386a11e }, // -2393
    Multiplier { upper: 0x84b2b10e5a2c8a1c1a3fe5bc78c86cfc, lower: 0x601078098b0ee28d245fad5cb6054db2 }, // -2392
    Multiplier { upper: 0xd4511b4a29e0dcf9c3996f93f473e193, lower: 0xcce72675ab4b041506ff7bc789a215e9 }, // -2391
    Multiplier { upper: 0xa9da7c3b54b3e3fb02e1260ff6c31adc, lower: 0xa3ec1ec48908d010d265fc9fa14e77ee }, // -2390
    Multiplier { upper: 0x87e1fcfc43c31cc8cf1a84d99235af16, lower: 0xe989b236d4070cda41eb307fb43ec658 }, // -2389
    Multiplier { upper: 0xd96994c6d2d1c7a7b1c407c283891824, lower: 0xa8dc5057b9a4e15d36451a65ed313d59 }, // -2388
    Multiplier { upper: 0xadee109f0f0e3952f49cd30202d41350, lower: 0x8716a6ac9483e77dc504151e575a977a }, // -2387
    Multiplier { upper: 0x8b24da18d8d82ddbf6e3dc019bdcdc40, lower: 0x6c121ef076cfec649d9cddb1df7bac62 }, // -2386
    Multiplier { upper: 0xdea15cf48e26afc657d2f99c2c94939a, lower: 0x468364b3f14cad6dc8fafc4fcbf913d0 }, // -2385
    Multiplier { upper: 0xb21ab0c3a4ebbfd1dfdbfae356dd42e1, lower: 0xd202b6f65aa3bdf16d9596a63cc7430d }, // -2384
    Multiplier { upper: 0x8e7bc09c83efcca7e6499582abe43581, lower: 0x74cef8c5154fcb278ade121e9705cf3d }, // -2383
    Multiplier { upper: 0xe3f9342d9fe6143fd6dc226aaca0559b, lower: 0xee17f46e887fab7277c9b69758094b95 }, // -2382
    Multiplier { upper: 0xb660f68ae651a9ccabe34ebbbd4d1149, lower: 0x8b465d2539ffbc5b9307c545e0076fab }, // -2381
    Multiplier { upper: 0x91e72ba251daee3d564f722fcaa40dd4, lower: 0x6f6b7db76199637c759fd104b3392622 }, // -2380
    Multiplier { upper: 0xe971df6a1c917d2ef07f1d194439afba, lower: 0x4bdf2f8bcf5bd260bc32e80785283d03 }, // -2379
    Multiplier { upper: 0xbac17f8816daca8bf398e41436948c95, lower: 0x097f593ca5e30eb3c9c2533937536403 }, // -2378
    Multiplier { upper: 0x95679939abe23ba329471cdcf876d6dd, lower: 0xa132adca1e4f3ef63b01dc2dc5dc5002 }, // -2377
    Multiplier { upper: 0xef0c285c4636c5d1dba4fafb27248afc, lower: 0x351de2dcfd4b97f05e6960493c93b337 }, // -2376
    Multiplier { upper: 0xbf3ced169e9237db161d9595b8ea08c9, lower: 0xc417e8b0caa2dff37ebab36dca0fc292 }, // -2375
    Multiplier { upper: 0x98fd8a787edb5fe27817aade2d880707, lower: 0xd013208d6ee8b329322ef5f16e73020f }, // -2374
    Multiplier { upper: 0xf4c8dd8d97c56637268c4496af400b3f, lower: 0xb351cdaf17dab841e9e4bcb57d84d017 }, // -2373
    Multiplier { upper: 0xc3d3e471463784f8eba36a1225ccd5cc, lower: 0x8f74a48c13156034bb1d63c4646a4013 }, // -2372
    Multiplier { upper: 0x9ca9838dd1c603fa561c54db5170ab0a, lower: 0x0c5d50700f444cf6fc17830383883342 }, // -2371
    Multiplier { upper: 0xfaa8d27c82d66cc3bcfa215ee8b444dc, lower: 0xe0954d80186d47f19358d19f38d9eb9d }, // -2370
    Multiplier { upper: 0xc8870eca024523cfca61b44bed5d03e3, lower: 0xe6ddd799ad24398e0f7a414c2d7b22e4 }, // -2369
    Multiplier { upper: 0xa06c0bd4ce9db63fd51af6a3244a6983, lower: 0x1f17dfae241cfad80c61cdd68ac8e8b6 }, // -2368
    Multiplier { upper: 0x80566fdd7217c4ffddaf2bb5b6a1ee02, lower: 0x7f464c8b50172f133d1b0b1208a0ba2c }, // -2367
    Multiplier { upper: 0xcd571962502607ffc91845ef8a9cb003, lower: 0xfed6e0dee68b7e852e91ab500dcdf6ac }, // -2366
    Multiplier { upper: 0xa445ade8401e6ccca0e037f2d54a2669, lower: 0x98abe718b86f986a8ba7bc400b0b2bbd }, // -2365
    Multiplier { upper: 0x836af18699b1f0a3b3e69328aaa1b854, lower: 0x7a231f46f9f2e0553c8630333c08efca }, // -2364
    Multiplier { upper: 0xd244b5a4291cb4391fd751daaa9c5a20, lower: 0xc36b653e5cb7cd552da38051f9a7e610 }, // -2363
    Multiplier { upper: 0xa836f7b6874a29c74cac417bbbb0481a, lower: 0x35ef8431e3c63dddbe1c66a7faecb80d }, // -2362
    Multiplier { upper: 0x86925fc53908216c3d569ac962f36ce1, lower: 0xc4bf9cf4b638317e31b0521ffbf0933e }, // -2361
    Multiplier { upper: 0xd750993b8e7368ad2ef0f7a89e5247cf, lower: 0xa13294babd26b596b5e6e9ccc64db863 }, // -2360
    Multiplier { upper: 0xac407a960b8f86f0f25a5fba1841d30c, lower: 0x80f543c897522adef7ebee3d6b71604f }, // -2359
    Multiplier { upper: 0x89cd2ede6fa6058d8eaeb2fb469b0f3d, lower: 0x33f7696d45db557f2cbcbe978927803f }, // -2358
    Multiplier { upper: 0xdc7b7e30b2a33c15b11784c53dc4e52e, lower: 0xb98bdbe2095eef31e12dfdbf41d8cd32 }, // -2357
    Multiplier { upper: 0xb062cb5a28829677c0df9d6a97d0b758, lower: 0x946fe31b3ab258f4b424caff67e0a428 }, // -2356
    Multiplier { upper: 0x8d1bd5e1ba0211f967194abbaca6f913, lower: 0xa9f31c15c88ead90901d6f32b9808353 }, // -2355
    Multiplier { upper: 0xe1c62302c3368328a4f5445f7aa4c1b9, lower: 0x0feb6022da7de280e6957eb78f340552 }, // -2354
    Multiplier { upper: 0xb49e82689c2b9c2083f769e5fbb70160, lower: 0xd98919b57b97e8671eddfef93f5cd10e }, // -2353
    Multiplier { upper: 0x907eceba168949b39cc5ee51962c011a, lower: 0x47a0e15dfc7986b8e57e659432b0a73f }, // -2352
    Multiplier { upper: 0xe7314ac357420f85c7a316e8f046682a, lower: 0x0c349bc993f5a45b08ca3c20511aa531 }, // -2351
    Multiplier { upper: 0xb8f43bcf7901a6049fb5abed8d052021, lower: 0xa35d496e0ff7b6af3a3b634d0daeea8e }, // -2350
    Multiplier { upper: 0x93f6963f9401519d4c915657a40419b4, lower: 0x82b1078b3ff95ef294fc4f70d7bf220b }, // -2349
    Multiplier { upper: 0xecbdbd3286688295474ef08c39a02920, lower: 0xd11b3f45332897ea87fa18b48c650344 }, // -2348
    Multiplier { upper: 0xbd64975b9eba021105d8c0702e19ba80, lower: 0xa748ff6a8f53acbb9ffb46f6d6b735d0 }, // -2347
    Multiplier { upper: 0x9783ac494bc801a737e099f358149533, lower: 0xb90732bba5dc8a2fb32f6bf8abc5c4a7 }, // -2346
    Multiplier { upper: 0xf26c46dbac7335d859675cb88cedbb85, lower: 0xf4d8512c3c94104c51e5798ddfa2d43e }, // -2345
    Multiplier { upper: 0xc1f038afbd28f7e04785e3c6d7249604, lower: 0xc3e040f0307673704184613e4c824365 }, // -2344
    Multiplier { upper: 0x9b2693bfca872cb36c6b1c9f1283ab37, lower: 0x0319cd8cf391f5f3679d1a983d3502b7 }, // -2343
    Multiplier { upper: 0xf83db932dda514524711c764ea6c4524, lower: 0xd1c2e27b1f4fefebd8fb5dc061ee6abe }, // -2342
    Multiplier { upper: 0xc697c75be4841041d2749f83eebd041d, lower: 0x749be8627f732656472f7e33818b8898 }, // -2341
    Multiplier { upper: 0x9edfd2afea034034a85d4c698bca69b1, lower: 0x2a165381ff8f51de9f5931c2ce093a14 }, // -2340
    Multiplier { upper: 0xfe32eab31005338773c87a427943dc4e, lower: 0xa9bd526998e54fca988eb6047cdb901f }, // -2339
    Multiplier { upper: 0xcb5beef5a66a8f9f8fd39501fa9cb03e, lower: 0xee310ebae0b773087a0bc4d063e2d9b2 }, // -2338
    Multiplier { upper: 0xa2aff25e1ebba6193fdc7734c87d59cb, lower: 0xf1c0d8958092c26d2e6fd0a6b64f148f }, // -2337
    Multiplier { upper: 0x82265b7e7efc84e0ffe39290a06447d6, lower: 0x5b00ad4466dbcebdbebfda1ef83f43a6 }, // -2336
    Multiplier { upper: 0xd03d5f30cb2da167ffd2841a9a3a0c8a, lower: 0x2b34486d715fb12f97995cfe59fed2a2 }, // -2335
    Multiplier { upper: 0xa6977f5a3c24811fffdb9ce214fb3d3b, lower: 0x55c36d245ab2f42612e11731e198a882 }, // -2334
    Multiplier { upper: 0x8545ff7b6350674cccafb0b4dd95ca95, lower: 0xde35f0e9e228c351a8b4128e4e13ba02 }, // -2333
    Multiplier { upper: 0xd53ccbf89ee70bae144c4dee2f5610ef, lower: 0xc9efe7dc9d0e054f745350e3b01f9002 }, // -2332
    Multiplier { upper: 0xaa970993b2526fbe76a3718b5911a726, lower: 0x3b265316e40b3772c375da4fc0194002 }, // -2331
    Multiplier { upper: 0x8878d4762841f2fec54f8e09140e1f51, lower: 0xc8eb75abe9a292c235f7e1d9667a999b }, // -2330
    Multiplier { upper: 0xda5aed89da031e646ee5b00e867cfee9, lower: 0x4178bc46429db79d23263628a3f75c2b }, // -2329
    Multiplier { upper: 0xaeaf246e48027eb6bf1e26720530cbed, lower: 0xcdfa3038354af94a8284f820832c49bc }, // -2328
    Multiplier { upper: 0x8bbf5058399b9892327e85280427098b, lower: 0x0b2e8cf9c43bfaa20203f9b39c236e30 }, // -2327
    Multiplier { upper: 0xdf98808d28f8f41d1d973b7339d80f44, lower: 0xdeb0e18fa05ff7699cd3291f6038b04d }, // -2326
    Multiplier { upper: 0xb2e066d753fa5ce417ac2f8f6179a5d0, lower: 0xb2271ad94d1992bae3dc20e5e693c03e }, // -2325
    Multiplier { upper: 0x8f19ebdf7661e3e9ac89bfa5e79484a6, lower: 0xf4ec157aa41475624fe34d84b8763365 }, // -2324
    Multiplier { upper: 0xe4f6463257030642ada932a30c20d43e, lower: 0x54acef2aa020bbd07fd215a12723856e }, // -2323
    Multiplier { upper: 0xb72b6b5b78cf383557ba8ee8d680a9cb, lower: 0x76f0bf554ce6fca6cca8114db8e9378b }, // -2322
    Multiplier { upper: 0x928922af93d8f9c4462ed8ba4533bb09, lower: 0x2bf3cc443d8596ebd6ecdaa493edc609 }, // -2321
    Multiplier { upper: 0xea75044c1fc18fa0704af45d3b85f80e, lower: 0xacb946d395a28b12f17af76db97c700e }, // -2320
    Multiplier { upper: 0xbb90d03ce63472e6c03bf6b0fc6b2cd8, lower: 0x8a2dd242de1ba2758dfbf92494638cd8 }, // -2319
    Multiplier { upper: 0x960d7363eb5d28b899c992273055bd7a, lower: 0x0824a8357e7c81f7a4c9941d4382d713 }, // -2318
    Multiplier { upper: 0xf015856cabc841275c75b6a51a22c8c3, lower: 0x403aa6bbfd940325d475b9c86c048b52 }, // -2317
    Multiplier { upper: 0xc011378a23069a85e3915eea7b4f0702, lower: 0x99c88563314335b7dd2afb06bcd06f75 }, // -2316
    Multiplier { upper: 0x99a75fa1b59ee204b60de58862a59f35, lower: 0x47d39de8f435c4931755959efd738c5e }, // -2315
    Multiplier { upper: 0xf5d89902bc3169a123496f409dd5cb88, lower: 0x72ec2fdb20560751beef55cb2f1f46fc }, // -2314
    Multiplier { upper: 0xc4ad4735635abae74f6df29a17de3c6d, lower: 0x28bcf315b37805daff25de3c25b29f30 }, // -2313
    Multiplier { upper: 0x9d576c2ab5e22f1f72be5bae797e96bd, lower: 0xba30c277c2c66b1598eb18301e287f5a }, // -2312
    Multiplier { upper: 0xfbbf13778969e4ff1dfd5f7d8f30f12f, lower: 0x904e03f2d13d78228e44f3803040cbc2 }, // -2311
    Multiplier { upper: 0xc965a92c6dee50cc17fde5fe0c272759, lower: 0x403e698f0dcac6820b6a5c668d00a302 }, // -2310
    Multiplier { upper: 0xa11e20f057f1da3cdffe519809b8ec47, lower: 0x66985472716f0534d5eeb0520a66e8ce }, // -2309
    Multiplier { upper: 0x80e4e726acc17b63e6650e133afa569f, lower: 0x8546a9f5278c042a44bef374d51f20a5 }, // -2308
    Multiplier { upper: 0xce3b0b711468c56ca3d4e351f7f6f0ff, lower: 0x3ba44321d8e006aa0797ebee21cb676f }, // -2307
    Multiplier { upper: 0xa4fc092743870456e9771c41932bf3ff, lower: 0x62e9cf4e47199eee6c79898b4e3c52bf }, // -2306
    Multiplier { upper: 0x83fcd41f6938d04587927d0142898fff, lower: 0x8254a5d838e14bf1f0613ad5d8304232 }, // -2305
    Multiplier { upper: 0xd32e203241f4806f3f50c802040f4ccc, lower: 0x03baa2f38e35464fe701f7bc8d1a0384 }, // -2304
    Multiplier { upper: 0xa8f1b35b67f6cd25cc40a0019cd90a3c, lower: 0xcfc8825c71c4383fec0192fd3dae6936 }, // -2303
    Multiplier { upper: 0x8727c2af865f0a84a366e667b0ada1ca, lower: 0x3fd39b7d27d02cfff00142643158542b }, // -2302
    Multiplier { upper: 0xd83f9de5a3cb44076bd7d70c4de29c76, lower: 0xcc85c5950c8047ffe6686a39e88d5378 }, // -2301
    Multiplier { upper: 0xacffb18483090339231312703e4ee392, lower: 0x3d37d1440a003999852054fb20710f94 }, // -2300
    Multiplier { upper: 0x8a66279d35a0cf60e8dc0ec031d8b60e, lower: 0x975fda9cd4ccfae1374d10c8e6c0d943 }, // -2299
    Multiplier { upper: 0xdd703f61ef67b234a7c67e004fc1234a, lower: 0x8bcc90faee14c49b8bae814171348ed1 }, // -2298
    Multiplier { upper: 0xb126991b25ec8e90863864cd0c9a82a2, lower: 0x097073fbf1aa36e2d62534345a907241 }, // -2297
    Multiplier { upper: 0x8db87a7c1e56d8739e9383d73d486881, lower: 0xa126c32ff4882be8ab50f69048738e9b }, // -2296
    Multiplier { upper: 0xe2c0c3f9ca248d85ca859fbec873da69, lower: 0x01d79eb320d9dfdaabb4bdb3a71f4a91 }, // -2295
    Multiplier { upper: 0xb567032e3b507137d537b2ff06c31520, lower: 0xce46188f4d7b197bbc9097c2ec190874 }, // -2294
    Multiplier { upper: 0x911f35be95d9f42caa92f598d235aa80, lower: 0xa504e072a4627ac963a6dfcf234739f6 }, // -2293
    Multiplier { upper: 0xe831ef97562986adddb7ef5ae9ef7734, lower: 0x3b3b00b76d6a5e0f05d7cc7e9ed85cbd }, // -2292
    Multiplier { upper: 0xb9c18c7911bad224b15ff2af218c5f5c, lower: 0xfc2f33c5f121e4d8d17970654be04a31 }, // -2291
    Multiplier { upper: 0x949ad6c7416241b6f44cc225b4704c4a, lower: 0x6358f637f41b1d7a412df3843cb36e8e }, // -2290
    Multiplier { upper: 0xedc48ad8689d35f186e136a2ba4d46dd, lower: 0x6bc189f3202b625d3516526d2debe416 }, // -2289
    Multiplier { upper: 0xbe36d579ed4a918e0580f8822ea438b1, lower: 0x23013b28e6891b7dc411db8a8b231cde }, // -2288
    Multiplier { upper: 0x982bddfb243ba7a4d133fa01bee9c6f4, lower: 0x1c00fc20b86daf97d00e493ba2827d7f }, // -2287
    Multiplier { upper: 0xf379632b6d2c3f6e1b865ccf97dc7186, lower: 0x9334c69ac0af7f594ce3a85f6a6a6264 }, // -2286
    Multiplier { upper: 0xc2c78289242365f1af9eb0a61316c138, lower: 0x75c3d21566f2cc4770b6204c5521e850 }, // -2285
    Multiplier { upper: 0x9bd2ced41ce91e5af2e55a1e75abcdc6, lower: 0xc49ca8111f28a36c5a2b4d09ddb4b9da }, // -2284
    Multiplier { upper: 0xf9514aecfb0e96f7eb089030bc46160a, lower: 0xd42dd9b4fea76be09045480fc921295c }, // -2283
    Multiplier { upper: 0xc7743bf0c8d878c655a0735a303811a2, lower: 0x4357e15d9885efe6d9d10673074dbab0 }, // -2282
    Multiplier { upper: 0x9f902ff3d3e0609eaae6c2ae8cf9a7b5, lower: 0x02acb44ae06b265247da6b8f390afbc0 }, // -2281
    Multiplier { upper: 0xff4d19861fcd676444a46ab0e18f72bb, lower: 0x377aba116711d6ea0c90ac185b44c600 }, // -2280
    Multiplier { upper: 0xcc3dae04e63dec5036e9eef3e7a5f562, lower: 0x92c894dab8db1254d6da2346af6a3800 }, // -2279
    Multiplier { upper: 0xa3648b371e97f0402bee58c31fb7f782, lower: 0x0f06dd7bc715a843df14e9055921c667 }, // -2278
    Multiplier { upper: 0x82b6d5c5b2132699bcbead68e62cc601, lower: 0xa59f179638de20364c10ba6aadb49eb9 }, // -2277
    Multiplier { upper: 0xd124893c501ea4292dfde2417047a335, lower: 0xd5cb58f05afd0056e01ac3dde2ba978d }, // -2276
    Multiplier { upper: 0xa7506dc9d9b21cedbe64b501269fb5c4, lower: 0xab0913f37bfd99df19af0317e895460b }, // -2275
    Multiplier { upper: 0x85d9f16e47c1b0be31ea2a6752195e36, lower: 0xef3a765c633147e5ae259c1320776b3c }, // -2274
    Multiplier { upper: 0xd629824a0c691ac9e976aa3ee9c23057, lower: 0xe52a56fa384ed96f7d08f9b833f2452c }, // -2273
    Multiplier { upper: 0xab54683b3d20e23b212bbb6587ce8d13, lower: 0x1dbb78c82d0be125fda0c7c68ff50424 }, // -2272
    Multiplier { upper: 0x89105362974d81c8e7562f846ca53da8, lower: 0xe495fa39bda31a84cae70638732a69b6 }, // -2271
    Multiplier { upper: 0xdb4d5237587c02db0bbd18d3e10862a7, lower: 0xd42329f5fc382a6e1171a38d8510a923 }, // -2270
    Multiplier { upper: 0xaf710e92ad300248d630e0a980d3821f, lower: 0xdce8ee5e636021f1a78e1c7137408750 }, // -2269
    Multiplier { upper: 0x8c5a720ef0f3350711c0b3bacd7601b3, lower: 0x1720beb1e919b4c152d816c0f9006c40 }, // -2268
    Multiplier { upper: 0xe090b67e4e51ee71b6011f9148bccf84, lower: 0xf1cdfde974f5ee021e268ace5b33e066 }, // -2267
    Multiplier { upper: 0xb3a6f8650b74bec15e674c743a30a603, lower: 0xf4a4cb212a5e5801b1b86f0b7c298051 }, // -2266
    Multiplier { upper: 0x8fb8c6b73c5d65677eb909f694f3b803, lower: 0x2a1d6f4dbb7eacce27c6bf3c635466a8 }, // -2265
    Multiplier { upper: 0xe5f471252d623bd8cac1a98a87ec599e, lower: 0xa9c8b215f8caae16a60acb93d220a43f }, // -2264
    Multiplier { upper: 0xb7f6c0ea8ab4fcad6f01546ed3237ae5, lower: 0x54a08e77fa3bbe7884d56fa974e6e9cc }, // -2263
    Multiplier { upper: 0x932bcd886ef7308abf34438bdc1c6251, lower: 0x108071f994fc98606a4459545d8587d7 }, // -2262
    Multiplier { upper: 0xeb7948da4b251a7798539f462cfa36e8, lower: 0x1a671cc287fa8d67106d5bba2f3c0c8a }, // -2261
    Multiplier { upper: 0xbc61071508ea7b92e042e5d1bd94f8b9, lower: 0xaeb8e3ced32ed785a6bde2fb58fcd6d5 }, // -2260
    Multiplier { upper: 0x96b405aa6d8862dbe69beb0e3143fa2e, lower: 0x2560b63f0f58ac6aebcb1bfc4730abde }, // -2259
    Multiplier { upper: 0xf1200910af409e2ca42cab49e86cc37d, lower: 0x089abd31b2277a44ac782cc6d84ddfc9 }, // -2258
    Multiplier { upper: 0xc0e66da6f29a1823b68a22a186bd6930, lower: 0xd3aefdc15b52c836f06023d246a4b307 }, // -2257
    Multiplier { upper: 0x9a51f1525bae79b62ba1b54e05645427, lower: 0x0fbf31677c4239c58d19b641d21d5c06 }, // -2256
    Multiplier { upper: 0xf6e9821d5f7d8f89df6922166f06ed0b, lower: 0x4c651bd8c6d05c6f4829239c83622cd6 }, // -2255
    Multiplier { upper: 0xc5879b4ab2cad93b1920e811f26bf0d5, lower: 0xd6b7497a38a6b05906874fb0691b5712 }, // -2254
    Multiplier { upper: 0x9e0615d55bd57a95adb3ecdb28565a44, lower: 0xabc5d461c6ebc047386c3fc05415df42 }, // -2253
    Multiplier { upper: 0xfcd689555fbbf755e2b97af8408a2a07, lower: 0x793c8702d7df9a0b8d79ff9a2022fecf }, // -2252
    Multiplier { upper: 0xca453aaab2fcc5de4efac8c69a08219f, lower: 0x94306c02464c7b3c712e6614e6826572 }, // -2251
    Multiplier { upper: 0xa1d0fbbbc263d17ea5956d6bae6ce7b2, lower: 0xdcf3899b6b706296c0f1eb43eb9b845c }, // -2250
    Multiplier { upper: 0x8173fc96351ca79884778abc8b8a52f5, lower: 0x7d8fa14922c04edf00c1890322e2d049 }, // -2249
    Multiplier { upper: 0xcf1ffa89ee943f5a6d8c112dac1084bb, lower: 0xfc19020e9e007e319acf419e9e37b3a8 }, // -2248
    Multiplier { upper: 0xa5b32ed4bedcff7b8ad6742489a6d096, lower: 0x634734d87e66cb5ae23f67b2182c8fba }, // -2247
    Multiplier { upper: 0x848f58aa324a65fc6f11f683a1524078, lower: 0x4f6c2a46cb856f7be832b95b468a0c95 }, // -2246
    Multiplier { upper: 0xd4188ddd1d43d660b1b65739021d33f3, lower: 0xb246aa0adf3be5930d1df55ed7434754 }, // -2245
    Multiplier { upper: 0xa9ad3e4a7dcfdeb3c15eac2d9b4a8ff6, lower: 0x28388808b296514270e4c44bdf6905dd }, // -2244
    Multiplier { upper: 0x87bdcb6ecb0cb229677ef0247c3ba65e, lower: 0x8693a006f5450dcec0b7036fe5ed9e4b }, // -2243
    Multiplier { upper: 0xd92fabe4781450423f31803a605f7097, lower: 0x3db9000b220816179abe6be63caf63aa }, // -2242
    Multiplier { upper: 0xadbfbcb6c676a69b65c13361e6b2c078, lower: 0xfe2d99a281a011ac7bcb8984fd591c88 }, // -2241
    Multiplier { upper: 0x8affca2bd1f885491e34291b1ef566c7, lower: 0x31be1482014cdaf063093ad0caadb06d }, // -2240
    Multiplier { upper: 0xde6610461cc0d541c9ed0e91cb223e0b, lower: 0x82c9ba699bae2b1a380ec48144491a48 }, // -2239
    Multiplier { upper: 0xb1eb40381700aa9b07f0d874a281cb3c, lower: 0x68a161ee1624ef482cd89d3436a0e1d3 }, // -2238
    Multiplier { upper: 0x8e55ccf9ac00887c065a46c3b534a296, lower: 0xba1ab4be781d8c39bd7a175cf880b4a9 }, // -2237
    Multiplier { upper: 0xe3bc7b2913340d933d5d3e05eeba9dbd, lower: 0xf6912130c02f46c2c8c35894c0cdeddb }, // -2236
    Multiplier { upper: 0xb630628742900adc311764d18bc87e31, lower: 0x920db4270025d2356d6913aa33d7f17c }, // -2235
    Multiplier { upper: 0x91c04ed29ba66f168dac50a7a306cb5a, lower: 0xdb3e29b8cceb0e9124540fbb5cacc130 }, // -2234
    Multiplier { upper: 0xe933b150f90a4b574913b43f6b3e122a, lower: 0xf86375f47b11b0e83a20192bc77aceb3 }, // -2233
    Multiplier { upper: 0xba8fc10d94083c45d40fc365ef64db55, lower: 0x9382c4c395a7c0b9c819adbc9f957229 }, // -2232
    Multiplier { upper: 0x953fcda4766cfd04a9a635eb25ea4911, lower: 0x42cf03cfaaec9a2e39ae2496e6112821 }, // -2231
    Multiplier { upper: 0xeecc7c3a5714c80775d6bcab6fdd41b5, lower: 0x37b19fb2ab1429e38f7d0757d681d9ce }, // -2230
    Multiplier { upper: 0xbf09fcfb78dd6cd2c4abca22bfe43490, lower: 0xf95ae62888dcee4fa5fd9f797867e172 }, // -2229
    Multiplier { upper: 0x98d4ca62c7178a4236efd4e899835d40, lower: 0xc77beb53a0b0bea61e647f9460531ac2 }, // -2228
    Multiplier { upper: 0xf487aa37a4f276d057e6217428d22ece, lower: 0x0bf97885cde7977030a0cc209a1e9135 }, // -2227
    Multiplier { upper: 0xc39fbb5fb7285f0d131e8129ba41bf0b, lower: 0x3cc7939e3e52df8cf3b3d6807b4ba75e }, // -2226
    Multiplier { upper: 0x9c7fc9195f537f3da8e5342161ce326f, lower: 0x63d2dc7e98424c70c2f6453395d61f7e }, // -2225
    Multiplier { upper: 0xfa660e8efeebfec90e3b869bcfb050b2, lower: 0x395160ca8d36e0b46b23a1ec22f03264 }, // -2224
    Multiplier { upper: 0xc851a53f3256656da4fc6bafd959da28, lower: 0x2ddab3d53dc5809055b61b234f268eb6 }, // -2223
    Multiplier { upper: 0xa04150ff5b78512483fd22f31447e1b9, lower: 0xbe488fddcb0466d9de2b48e90c1ed892 }, // -2222
    Multiplier { upper: 0x803440cc492d0db6cffdb58f436cb494, lower: 0x983a0cb16f36b8ae4b55d3eda34be075 }, // -2221
    Multiplier { upper: 0xcd2067ad41e1af8ae662bc186be120ed, lower: 0xc05ce11be5245ab078895315d21300bb }, // -2220
    Multiplier { upper: 0xa419ec8a9b1af2d5851bc9ad231a80be, lower: 0x337d80e31db6aef393a10f44a80f33c9 }, // -2219
    Multiplier { upper: 0x8347f06ee27bf5779dafd48a827b9a31, lower: 0xc2cacd827e2bbf2942e73f6a200c296d }, // -2218
    Multiplier { upper: 0xd20cb3e49d932258fc4c874403f8f6b6, lower: 0x0477af373045fea86b0b98a9cce04248 }, // -2217
    Multiplier { upper: 0xa80a2983b14281e0c9d6d29ccffa5ef8, lower: 0x0392f2928d04cbb9ef3c7a2170b3683a }, // -2216
    Multiplier { upper: 0x866e879c8dcece4d6e45754a3ffb7f2c, lower: 0xcfa8c20ed73709618c3061b45a29202e }, // -2215
    Multiplier { upper: 0xd7173f60e2e47d48b06f2210665f31e1, lower: 0x4c41367e2524dbcf46b3cf86f6a8337d }, // -2214
    Multiplier { upper: 0xac12991a4f1d3106f38c1b4051e5c181, lower: 0x09cdc531b750afd9055ca60592202931 }, // -2213
    Multiplier { upper: 0x89a87a7b727dc0d25c7015cd0e51679a, lower: 0x6e3e375af90d597a6ab084d141b35427 }, // -2212
    Multiplier { upper: 0xdc40c3f8b72f9aea2d8022e1b0823f5d, lower: 0x7d3058918e7bc25d7780d48202b886a5 }, // -2211
    Multiplier { upper: 0xb033cffa2c2615882466824e26ce9917, lower: 0x9759e07471fc9b7df933dd34cefa0551 }, // -2210
    Multiplier { upper: 0x8cf63ffb5684de068385350b523ee0df, lower: 0xac47e6c38e63af97fa8fe42a3f2e6aa7 }, // -2209
    Multiplier { upper: 0xe189fff88a6e300a6c0854dee9fe3499, lower: 0x13a63e05b09f7f5990e639dd31e3ddd8 }, // -2208
    Multiplier { upper: 0xb46e66606ebe8cd52339dd7f21982a14, lower: 0x0fb8319e26e5ff7ada51c7e427e97e47 }, // -2207
    Multiplier { upper: 0x905851e6befed710e8fb1798e7acee76, lower: 0x72f9c14b5251992f150e3983532131d2 }, // -2206
    Multiplier { upper: 0xe6f3b63dfe648b4e4191bf5b0c47e3f0, lower: 0xb7f602121d4f5b7e8816c26bb8351c83 }, // -2205
    Multiplier { upper: 0xb8c2f83198506f71ce0e32af3d064ff3, lower: 0xc65e680e7dd915fed34568562cf74a03 }, // -2204
    Multiplier { upper: 0x93cf2cf479d9f2c171a4f558fd9ea65c, lower: 0x9eb1ecd864adab32429ded11bd92a19c }, // -2203
    Multiplier { upper: 0xec7eae53f6298468b5d4bbc195caa3c7, lower: 0x644fe15a3aaf78506a96481c628435c6 }, // -2202
    Multiplier { upper: 0xbd32250ff82136ba2b10963477d54fd2, lower: 0xb6a64de1c88c60405545067d1b9cf7d2 }, // -2201
    Multiplier { upper: 0x975b50d9934dc561bc0d44f6c6443fdb, lower: 0xc551d7e7d3a38033776a6b97494a5fdb }, // -2200
    Multiplier { upper: 0xf22bb48f5216089c60153b24706d32f9, lower: 0x3bb6263fb90599ebf243df587543cc91 }, // -2199
    Multiplier { upper: 0xc1bc9072a811a07d19aa95b6c0575bfa, lower: 0x962b51cc94047b2328364c46c4363d41 }, // -2198
    Multiplier { upper: 0x9afd405bb9a7b39747bbaaf899df7cc8, lower: 0x7822a7d6dcd062828691d69f035e9767 }, // -2197
    Multiplier { upper: 0xf7fb9a2c5c3f85bed92c44c0f6326140, lower: 0xc03772f1614d6a6a70e95764d230f23f }, // -2196
    Multiplier { upper: 0xc662e1bd169937cbe0f03700c4f51a9a, lower: 0x335f8f27810abb885a5445ea41c0c1cc }, // -2195
    Multiplier { upper: 0x9eb5816412142ca31a59c59a372a7bae, lower: 0x8f7fa5b934089606aea9d188349a34a3 }, // -2194
    Multiplier { upper: 0xfdef356ce9b9e104f6f608f6beaa5f7d, lower: 0xb265d5f5200dbcd77ddc8273875d2105 }, // -2193
    Multiplier { upper: 0xcb25c457216180d0c591a0c565551931, lower: 0x5b84ab2a800afd79317d352939174d9e }, // -2192
    Multiplier { upper: 0xa2849d12811acd73d1414d6ab777475a, lower: 0xaf9d55bb99a26460f4642a8760df714b }, // -2191
    Multiplier { upper: 0x8203b0db9a7bd78fda9aa4555f929f7b, lower: 0xbfb11162e14eb6b3f6b6886c4d7f8dd6 }, // -2190
    Multiplier { upper: 0xd005e7c5c3f958e62a9106eeff50ff2c, lower: 0x65e81bd1687df11ff1240d7a1598e2ef }, // -2189
    Multiplier { upper: 0xa66b1fd16994471e8874058bff73ff56, lower: 0xb7ece30ded318db327500ac811471bf3 }, // -2188
    Multiplier { upper: 0x85227fdabadd05b206c337a332c332ab, lower: 0xc6571c0b2427a48f52a66f067438e329 }, // -2187
    Multiplier { upper: 0xd503ffc45e2e6f833e0525d1ead1eaac, lower: 0x708b6011d372a0e5510a4b3d86c16b74 }, // -2186
    Multiplier { upper: 0xaa699969e4f1f2cf64d0eb0e5574bbbd, lower: 0x26d5e674a92880b774083c31389abc5d }, // -2185
    Multiplier { upper: 0x88547abb1d8e5bd91d73ef3eaac3c964, lower: 0x1f11852a20ed33c5f66cfcf42d4896b1 }, // -2184
    Multiplier { upper: 0xda20c45e95b092f4fbecb1fdde060f06, lower: 0x981c084367e1ec6ff0ae6186aeda8ab4 }, // -2183
    Multiplier { upper: 0xae809d1877c07590c98a27fe4b380c05, lower: 0x467cd3691fe7f0598d584e0558aed55d }, // -2182
    Multiplier { upper: 0x8b9a1746c6339140a13b5331d5c67004, lower: 0x3863dc54198659e13de03e6aad58aab1 }, // -2181
    Multiplier { upper: 0xdf5cf20ad6b8e867685eeb82efa3e66d, lower: 0x27062d535c0a2968630063dde2277781 }, // -2180
    Multiplier { upper: 0xb2b0c1a24560b9ec537f22cf261cb857, lower: 0x526b5775e33b54538266b64b1b52c601 }, // -2179
    Multiplier { upper: 0x8ef3ce1b6ab3c7f042cc1bd8eb4a2d12, lower: 0xa855df918295dd0f9b855ea27c423801 }, // -2178
    Multiplier { upper: 0xe4b949c577860cb39e135fc17876ae84, lower: 0x408965b59dbc94e5c5a23103fa038cce }, // -2177
    Multiplier { upper: 0xb6faa16ac604d6f6180f7fcdf9f88b9d, lower: 0x006deaf7b163aa516ae82736619c70a5 }, // -2176
    Multiplier { upper: 0x92621abbd19d78c4e00c663e6193a2e4, lower: 0x0057ef2c8de9550def201f5eb47d26ea }, // -2175
    Multiplier { upper: 0xea36912c82958e07cce0a3970285d16c, lower: 0xcd597eadafdbbb497e99cbcaba61d7dd }, // -2174
    Multiplier { upper: 0xbb5eda8a02113e6ca3e6e9459b9e4123, lower: 0xd77acbbe264962a13214a308951b1317 }, // -2173
    Multiplier { upper: 0x95e57ba19b40febd4febedd1494b674f, lower: 0xdf956fcb51d44ee75b43b5a07748dc13 }, // -2172
    Multiplier { upper: 0xefd5929c2b9b312ee646494edbabd87f, lower: 0xcc224c7882ed4b0bc539229a58749351 }, // -2171
    Multiplier { upper: 0xbfde0ee35615c0f251d1d43f16231399, lower: 0x701b706068bdd5a3042db54846c3a90e }, // -2170
    Multiplier { upper: 0x997e724f781167284174a9cc11b5a947, lower: 0x8ce2c04d2097de1c0357c439d23620d8 }, // -2169
    Multiplier { upper: 0xf5971d4bf34f0b739beddc79b5ef753f, lower: 0x47d133ae9a8c9693388c6d2950569af3 }, // -2168
    Multiplier { upper: 0xc478e43cc2a5a2c2e324b0615e592a99, lower: 0x0640f62548707875c6d6bdbaa6abaf29 }, // -2167
    Multiplier { upper: 0x9d2d8363ceeae89be8ea26b44b7a887a, lower: 0x6b672b5106c0605e38abcafbb88958ed }, // -2166
    Multiplier { upper: 0xfb7c056c7e44a75fdb103ded4590da5d, lower: 0x78a5121b3e009a305aac77f9274227e2 }, // -2165
    Multiplier { upper: 0xc9300456cb6a1f7fe27364bdd140aeb1, lower: 0x2d50db48fe66e1c04889f9941f681fe8 }, // -2164
    Multiplier { upper: 0xa0f336abd5ee7f9981f5ea317433bef4, lower: 0x2440af6d98524e336d3b2e1019201986 }, // -2163
    Multiplier { upper: 0x80c29223118b99479b2b21c129c2ff29, lower: 0xb69a25f146a83e8f8a95be73474ce138 }, // -2162
    Multiplier { upper: 0xce041d04e8df5ba5c511cf9b7604cb75, lower: 0xf0f6a31ba4406418ddbc63eba547cec0 }, // -2161
    Multiplier { upper: 0xa4d0173720b2afb7d0db0c7c5e6a3c5e, lower: 0x5a5ee8e2e9cd1ce0b1638322ea9fd89a }, // -2160
    Multiplier { upper: 0x83d9ac2c1a288c930d7c09fd1854fd18, lower: 0x484bed8254a4171a2782cf4f22197a15 }, // -2159
    Multiplier { upper: 0xd2f5e0469040e0eb48c67661c087fb5a, lower: 0x0d4648d0876cf1c3726ae54b69c25cee }, // -2158
    Multiplier { upper: 0xa8c4b36ba69a4d8907052b8166d32f7b, lower: 0x3dd1d3da05f0c1692855843c549b7d8b }, // -2157
    Multiplier { upper: 0x8703c2bc85483e0738d0ef9ab8a8f2c8, lower: 0xfe41764804c09aba86aad03043af97a3 }, // -2156
    Multiplier { upper: 0xd8060460d540633ec14e4c2ac10e5141, lower: 0x96cf23a66e00f790d777b3806c4c25d1 }, // -2155
    Multiplier { upper: 0xacd19d1a443382989aa509bbcda50dce, lower: 0x123f4fb85800c60d792c8f99f03ceb0e }, // -2154
    Multiplier { upper: 0x8a414a7b69c2cee07bb73afca4840b0b, lower: 0x41cc3fc6accd6b3dfa8a0c7b26972271 }, // -2153
    Multiplier { upper: 0xdd3543f8a937b1672c585e610739ab45, lower: 0x3613993de148ab965da9ad91d758371c }, // -2152
    Multiplier { upper: 0xb0f76993ba92f45289e04b80d2948904, lower: 0x2b42e0fe4dd3bc784aee2474ac46927d }, // -2151
    Multiplier { upper: 0x8d92badc95425d0ed4b36f9a42106d9c, lower: 0xef68b3fea4a963936f24e9f6f0387531 }, // -2150
    Multiplier { upper: 0xe2845e2dbb9d61b154524c2a034d7c2e, lower: 0x4bdab9976ddbd2857ea17657e6c0bb81 }, // -2149
    Multiplier { upper: 0xb536b1be2fb11af4437509bb35d7968b, lower: 0x6fe22e12be49753798812b798566fc67 }, // -2148
    Multiplier { upper: 0x90f88e31bfc0e25d02c407c8f7dfaba2, lower: 0xbfe824dbcb6df75fad3422c79debfd1f }, // -2147
    Multiplier { upper: 0xe7f416b5ff9b03c8046cd9418c99129d, lower: 0xffd9d492df165899152037a5c97994ff }, // -2146
    Multiplier { upper: 0xb990122b32e2696cd0571434707a754b, lower: 0x3314aa0f18dead474419c61e3ac7aa65 }, // -2145
    Multiplier { upper: 0x947341bc28b52123d9df435d26c85dd5, lower: 0xc276ee727a4bbdd29ce16b4b6239551e }, // -2144
    Multiplier { upper: 0xed8535f9dabb68395c986bc83e0d62ef, lower: 0x9d8b171d90792fb76168ababd05bbb63 }, // -2143
    Multiplier { upper: 0xbe042b2e4895ecfab079efd364d78259, lower: 0x4ad5ac17a6c7595f81208956404962b6 }, // -2142
    Multiplier { upper: 0x980355bea077f0c88d2e5975ea4601e1, lower: 0x08aaf012ebd2ade600e6d445003ab55e }, // -2141
    Multiplier { upper: 0xf338893100bfe7a7484a28bcaa099c9b, lower: 0x4111801e461de3099b0aed3b33912230 }, // -2140
    Multiplier { upper: 0xc293a0f40099861f6d082096ee6e16e2, lower: 0x9a74667e9e7e4f3ae26f242f5c741b5a }, // -2139
    Multiplier { upper: 0x9ba94d90007ad1b2bda01a125858124e, lower: 0xe1f6b8654b983f624ebf5025e39015e1 }, // -2138
    Multiplier { upper: 0xf90ee28000c482b795ccf683c08cea17, lower: 0xcff1270878f3989d4acbb36fd2802302 }, // -2137
    Multiplier { upper: 0xc73f1b999a36cef944a3f86966d721ac, lower: 0xa65a85a060c2e07dd56fc2bfdb99b59b }, // -2136
    Multiplier { upper: 0x9f65afae14f8a59436e993878578e7bd, lower: 0x51e204804d68b397ddf3023316149149 }, // -2135
    Multiplier { upper: 0xff09191687f43c2057dc1f3f3bf4a5fb, lower: 0xb6366d9a1574528c96519d1e89ba820e }, // -2134
    Multiplier { upper: 0xcc07474539903019dfe34c32965d5196, lower: 0x2b5ebe14ddf6a87078414a7ed49534d8 }, // -2133
    Multiplier { upper: 0xa33905d0fad9c014b31c3cf545177478, lower: 0x22b231aa4b2bb9f393676ecbdd442a47 }, // -2132
    Multiplier { upper: 0x829404a72f1499aa28e363f76a7929f9, lower: 0xb55b5aeea289618fa91f8bd64a9cee9f }, // -2131
    Multiplier { upper: 0xd0ecd43eb1ba8f76a7d2398bdd8ea98f, lower: 0x88922b176a7568e5db65ac8a10fb1765 }, // -2130
    Multiplier { upper: 0xa723dcfef4953f921fdb613cb13eee0c, lower: 0x6d41bc12bb9120b7e2b7bd3b40c8df84 }, // -2129
    Multiplier { upper: 0x85b64a659077660e7fe2b4308dcbf1a3, lower: 0x8a9afcdbc940e6f9822c97629a3a4c6a }, // -2128
    Multiplier { upper: 0xd5f07708e725701733045380e2dfe905, lower: 0xaa919492db9b0b28d047589dc3907a42 }, // -2127
    Multiplier { upper: 0xab26c5a0b8eac0128f36a933e8b320d1, lower: 0x554143a8afaf3c20a69f7a17cfa6c835 }, // -2126
    Multiplier { upper: 0x88ebd14d60bbccdba5c5542986f5b3da, lower: 0xaa9a9c86f2f29680854c61aca61f0691 }, // -2125
    Multiplier { upper: 0xdb12e87bcdf947c5d60886a8d7ef862a, lower: 0xaa90fa7184b75734087a35e109cb3db4 }, // -2124
    Multiplier { upper: 0xaf4253963e610637de6d3887132604ee, lower: 0xeeda61f46a2c45c339fb5e4da16f6490 }, // -2123
    Multiplier { upper: 0x8c350fab651a6b5fe5242d38dc1e6a58, lower: 0xbf151b29ee89d168fb2f7ea48125ea0d }, // -2122
    Multiplier { upper: 0xe054e5df082a45663b6d1527c697108d, lower: 0xfe882b764a761bdb2b7f31073509767b }, // -2121
    Multiplier { upper: 0xb3771e4c06883784fc57441fd21273a4, lower: 0xcba022c5085e7caf55ff5a6c2a6df863 }, // -2120
    Multiplier { upper: 0x8f927ea3386cf9373045d01974db8fb7, lower: 0x094ce89da04b96f2ab32aebceebe604f }, // -2119
    Multiplier { upper: 0xe5b731052714c1f1e6d619c254927f8b, lower: 0x4214a7629a128b1ddeb77dfb1797007e }, // -2118
    Multiplier { upper: 0xb7c5c0d0ec109b27ebde7b01dd41ffa2, lower: 0x9b43b91bae753c17e55f97fc12df3398 }, // -2117
    Multiplier { upper: 0x93049a40bcda15b9897ec8ce4a9b32e8, lower: 0x7c362dafbec430131de613300f18f614 }, // -2116
    Multiplier { upper: 0xeb3a9067949022c27597a7b0775eb7da, lower: 0x6056af7f97a04ceb6309b84ce4f4bcec }, // -2115
    Multiplier { upper: 0xbc2ed9ec76d9b5685e12ec8d2c4bc648, lower: 0x4d1225ffac803d891c07c6a3ea5d63f0 }, // -2114
    Multiplier { upper: 0x968be189f8ae2ab9e4dbf070f03c9ea0, lower: 0x3da81e662399cad4166c9ee9884ab65a }, // -2113
    Multiplier { upper: 0xf0dfcf43277d11296e2cb3e7e6c76433, lower: 0x95d9ca3d05c2de2023e0fe4273aabd5c }, // -2112
    Multiplier { upper: 0xc0b30c35b930da878b56f6531f05e9c2, lower: 0xde47d4fd9e357e801cb3fe9b8fbbcab0 }, // -2111
    Multiplier { upper: 0x9a28d69160f3e20609125ea8e59e549b, lower: 0xe50643fe182acb99b08ffee2d963088d }, // -2110
    Multiplier { upper: 0xf6a7bdb567ec9cd674ea310e3c30875f, lower: 0xd4d6d33026aadf5c4db3316af56b40e1 }, // -2109
    Multiplier { upper: 0xc552fe2ab98a1711f721c0d83026d2b3, lower: 0x10abdc2685557f7d0af5c1225def671b }, // -2108
    Multiplier { upper: 0x9ddbfe88946e78db2c1b00acf3524228, lower: 0xda23168537779930d591674eb18c527c }, // -2107
    Multiplier { upper: 0xfc9330da871727c5135e677b1eea0374, lower: 0x9038240858bf5b8155b57217827a1d93 }, // -2106
    Multiplier { upper: 0xca0f5a486c12863742b1ec627f219c5d, lower: 0x402ce9a046ff7c6777c45b4601fb4adc }, // -2105
    Multiplier { upper: 0xa1a5e1d389a86b5f688e56b5328149e4, lower: 0x3357214d05993052c636af6b34c908b0 }, // -2104
    Multiplier { upper: 0x8151817607b9ef7f86d8455dc20107e9, lower: 0xc2ac1aa4047a8d0f04f88c55c3d406f3 }, // -2103
    Multiplier { upper: 0xcee8cf233f8fe598d7c06efc699b3fdc, lower: 0x6aacf76cd3f7481807f413bc6c867185 }, // -2102
    Multiplier { upper: 0xa5870c1c32d9847a46338bfd2148ffe3, lower: 0x888a5f8a432c39acd329a9638a05279e }, // -2101
    Multiplier { upper: 0x846c09b028ae039504f609974dd3ffe9, lower: 0x3a084c6e9c2361570f548782d4d0ec7e }, // -2100
    Multiplier { upper: 0xd3e00f8041166c21a189a8f2161fffdb, lower: 0x900d471760389bbe7eeda59e214e4730 }, // -2099
    Multiplier { upper: 0xa9800c669a7856814e07ba5b44e66649, lower: 0x400a9f45e693afcb98be1e181aa505c0 }, // -2098
    Multiplier { upper: 0x8799a385486045343e6c9515d0b851d4, lower: 0x333bb29e520fbfd613cb4b467bb737cd }, // -2097
    Multiplier { upper: 0xd8f5d26eda33a1ed30adbb561ac082ed, lower: 0x1ec5ea96e9b2cc89b945453d92bebfae }, // -2096
    Multiplier { upper: 0xad9175257b5c818a8d57c911af0068bd, lower: 0xb237eedf215bd6d494376a97a8989958 }, // -2095
    Multiplier { upper: 0x8adac41dfc4a013ba4463a748c0053ca, lower: 0xf4f98be5b44978aa102c5546207a1447 }, // -2094
    Multiplier { upper: 0xde2ad3632d43352c3a09f720e0008611, lower: 0x87f5aca2ba0f27768046eed69a5ced3e }, // -2093
    Multiplier { upper: 0xb1bbdc4f5768f75694d4c5b3e666d1a7, lower: 0x9ff7bd4efb3f52c5336bf245484a5765 }, // -2092
    Multiplier { upper: 0x8e2fe372ac53f91210aa37c31eb8a7b9, lower: 0x4cc6310bfc32a89dc2bcc1d106a1df84 }, // -2091
    Multiplier { upper: 0xe37fd25113b98e834ddd2604fdf43f8e, lower: 0xe13d1b4660510dc93794694e7102ff39 }, // -2090
    Multiplier { upper: 0xb5ffdb740fc7a535d7e41e6a64c3660b, lower: 0xe76415d1e6a73e3a92dd210b8d9bff61 }, // -2089
    Multiplier { upper: 0x91997c5cd96c842b131ce521ea35eb3c, lower: 0xb91cde418552982edbe41a6fa47ccc4e }, // -2088
    Multiplier { upper: 0xe8f593c7c24739de84fb083643897861, lower: 0x282e3068d550f37e2ca02a4c3a6146e2 }, // -2087
    Multiplier { upper: 0xba5e0fd301d294b203fc0691cfa12d1a, lower: 0x868b59ed7773f5fe8a19bb702eb438b5 }, // -2086
    Multiplier { upper: 0x95180ca8ce42108e69966ba7d94dbdae, lower: 0xd20914bdf92991986e7afc59bef693c4 }, // -2085
    Multiplier { upper: 0xee8ce10e16d01a7d75bd790c8ee2c917, lower: 0xb674edfcc1dc1c27172b2d5c64bdb939 }, // -2084
    Multiplier { upper: 0xbed71a71abd9aecac497940a0be8a0df, lower: 0xc52a57fd67e349b8df55bde383cafa94 }, // -2083
    Multiplier { upper: 0x98ac1527bcae256f03ac766e6fed4d7f, lower: 0xd0eeaccab982a160b2aafe4f9ca26210 }, // -2082
    Multiplier { upper: 0xf446883f9449d57e6c4723e3e6487bff, lower: 0xb4b114778f37689ab777fd4c2dd09ce7 }, // -2081
    Multiplier { upper: 0xc36ba032dd07ddfebd05b64feb6d2fff, lower: 0xc3c0dd2c7292ba155f933109be407d86 }, // -2080
    Multiplier { upper: 0x9c5619c24a6cb1989737c50cbc575999, lower: 0x69671756c20efb444c75c0d49833979e }, // -2079
    Multiplier { upper: 0xfa235c6a10ade8f425260814608bc28f, lower: 0x0f0b588ad017f86d4722ce20f385bf63 }, // -2078
    Multiplier { upper: 0xc81c49ee73be53f6841e6cdd1a096872, lower: 0x726f7a08a679938a9f4f0b4d8f9e32b6 }, // -2077
    Multiplier { upper: 0xa016a18b8fcb765ed0185717480786c1, lower: 0xf525fb3a1ec7a93bb2a5a2a472e4f55e }, // -2076
    Multiplier { upper: 0x80121ad60ca2c518a679df45d339389b, lower: 0x2a84c8fb4bd2edc95bb7b5505bea5de5 }, // -2075
    Multiplier { upper: 0xcce9c489add13b5aa3f6320951f5275e, lower: 0xaa6e0e5edfb7e2dbc5f2bbb3c643c96e }, // -2074
    Multiplier { upper: 0xa3ee36d48b0dc9154ff8280774c41f7e, lower: 0xeebe71e57fc64f1637f562f638363abf }, // -2073
    Multiplier { upper: 0x8324f8aa08d7d4110cc6866c5d69b2cb, lower: 0xf231f4b7996b72782cc44f2b602b6232 }, // -2072
    Multiplier { upper: 0xd1d4c1100e26201b47a40a46fbdc5146, lower: 0x504fedf28f1250c047a07eabcd1236b7 }, // -2071
    Multiplier { upper: 0xa7dd67400b51b349061cd5059649da9e, lower: 0xa6a657f53f41da336c8065563da82bc5 }, // -2070
    Multiplier { upper: 0x864ab900090e2907381710d14507e218, lower: 0x8551dff765ce48292399eaab6486896b }, // -2069
    Multiplier { upper: 0xd6ddf4ccdb49db3ec024e7b53b3fd027, lower: 0x3bb633256fb0737505c311123a70dbde }, // -2068
    Multiplier { upper: 0xabe4c3d715d4af656683ec90fc330cec, lower: 0x2fc4f5b78c8d292a6b02740e9527164b }, // -2067
    Multiplier { upper: 0x8983cfdf44aa25eab8698a0d968f3d89, lower: 0xbfd0c492d6d75421ef3529a5441f4509 }, // -2066
    Multiplier { upper: 0xdc0619653aa9d6445a42767c24186275, lower: 0xffb46db7be2553697ebb75d539cba1a8 }, // -2065
    Multiplier { upper: 0xb004e11dc887de9d1501f863501381f7, lower: 0xffc38af964eaa921322f9177616fb486 }, // -2064
    Multiplier { upper: 0x8cd0b417d39fe54a7734c6b5d9a934c6, lower: 0x663608c783eeedb428260df91abfc39f }, // -2063
    Multiplier { upper: 0xe14decf2ec33087725213defc2a85470, lower: 0xa389a7a59fe4af86a6a3498e9132d297 }, // -2062
    Multiplier { upper: 0xb43e5728bcf5a05f50e764bfceed105a, lower: 0x1c6e1fb7b31d5938854f6e0ba75bdbac }, // -2061
    Multiplier { upper: 0x9031df53ca5e19e5da52b6ffd8bda6ae, lower: 0x7d24e62c8f4aadc6d10c580952afe2f0 }, // -2060
    Multiplier { upper: 0xe6b6321faa30296fc3b78b32f462a44a, lower: 0x61d4a37a7edde2d7b4e08cdbb77fd180 }, // -2059
    Multiplier { upper: 0xb891c1b2ee8cedf302f93c28c3821d08, lower: 0x4e43b5fb98b182462a4d3d7c92cca79a }, // -2058
    Multiplier { upper: 0x93a7ce28bed724c268c76353cf9b4a6d, lower: 0x0b695e62e08e01d1bb70fdfd423d52e2 }, // -2057
    Multiplier { upper: 0xec3fb04131583ad0a7a56bb94c2baa48, lower: 0x1242309e3416694f924e632ed0621e36 }, // -2056
    Multiplier { upper: 0xbcffc0342779c8a6ec84562dd6895506, lower: 0x7501c07e9011edd941d84f58a6b4e4f8 }, // -2055
    Multiplier { upper: 0x97330029b92e3a1f239d11be453aaa6b, lower: 0x90ce339873418b1434ad0c46ebc3ea60 }, // -2054
    Multiplier { upper: 0xf1eb3375f516c36505c81c63a1f77712, lower: 0x8149ec271ecf44ed2114e07179397700 }, // -2053
    Multiplier { upper: 0xc188f5f7f745691d9e39b04fb4c5f8db, lower: 0x9aa189b8e5729d8a80dd805ac7612c00 }, // -2052
    Multiplier { upper: 0x9ad3f7f9929dedb14b6159d95d6b2d7c, lower: 0x7bb46e2d845bb13b9a4acd156c4dbccd }, // -2051
    Multiplier { upper: 0xf7b98cc2842fe2b545688fc22f11e260, lower: 0xc5ed7d15a092b52c2a11482246e2c7ae }, // -2050
    Multiplier { upper: 0xc62e0a35368cb55dd1207301bf4181e7, lower: 0x04bdfdaae6dbc42354daa01b6be89fbe }, // -2049
    Multiplier { upper: 0x9e8b3b5dc53d5de4a74d28ce329ace52, lower: 0x6a3197bbebe3034f77154ce2bcba1965 }, // -2048
    Multiplier { upper: 0xfdab922fa1fbc96dd87b747d1dc47d50, lower: 0xa9e8f2c64638054bf1bbae37945cf56e }, // -2047
    Multiplier { upper: 0xcaefa8261b2fd457e062c3974b039773, lower: 0xbb20c238382cd1098e2fbe92dd172abf }, // -2046
    Multiplier { upper: 0xa2595351af5976acb3823612a26945f6, lower: 0x2f4d682cf9bd7407a4f2fedbe4128899 }, // -2045
    Multiplier { upper: 0x81e10f748c479223c2ce91a881edd191, lower: 0xbf712023fafdf66c83f598afe9a86d47 }, // -2044
    Multiplier { upper: 0xcfce7f20e072836c6ae41c40cfe2e8e9, lower: 0x324e99d32b2ff0ad9fef5ab30f73e20b }, // -2043
    Multiplier { upper: 0xa63ecc1a4d28692388b67d00a64f20ba, lower: 0x8ea547dc228cc08ae659155c0c5cb4d6 }, // -2042
    Multiplier { upper: 0x84ff09aea420541c6d5eca66eb728095, lower: 0x3eea9fe34ed7006f1eadaab009e3c3de }, // -2041
    Multiplier { upper: 0xd4cb42b1069a202d7bcadd7178b73421, lower: 0xfe4433054af19a4b64491119a96c6c96 }, // -2040
    Multiplier { upper: 0xaa3c355a6bae80246308b12793c5c34e, lower: 0x65035c043bf47b6f836da747babd23ac }, // -2039
    Multiplier { upper: 0x88302aaebc8b99b6b5a08db943049c3e, lower: 0xb735e336965d2f8c692485d2fbca82f0 }, // -2038
    Multiplier { upper: 0xd9e6aab12dac292455cdaf8ed1a0f9fd, lower: 0xf1efd1f0f09518e0a83a6fb7f94404b3 }, // -2037
    Multiplier { upper: 0xae52222757bcedb6ab0af2d8a7b3fb31, lower: 0x8e5974c0c077471a202ebfc6610336f5 }, // -2036
    Multiplier { upper: 0x8b74e81f7963f15eef3bf57a1fc32f5a, lower: 0xd847909a33929f4819beffd1e735c591 }, // -2035
    Multiplier { upper: 0xdf2173658f064efe4b93225cff9eb22a, lower: 0xf3a5b429ec1dcba68f97ffb63ebc6f4e }, // -2034
    Multiplier { upper: 0xb281291e0c050bfea2dc1b7d994bc1bb, lower: 0xf61e29bb234b09520c79995e9896bf72 }, // -2033
    Multiplier { upper: 0x8ecdba7e700409988249af97add63496, lower: 0x5e7e87c8e908d441a3947ab213abcc5b }, // -2032
    Multiplier { upper: 0xe47c5d9719a00f5a6a0f7f5916238756, lower: 0xfd973fa7db41539c38ed911cec4613c5 }, // -2031
    Multiplier { upper: 0xb6c9e478e14cd91521a5ff7a781c6c45, lower: 0x97ac32ecaf67761693f140e3f0380fd1 }, // -2030
    Multiplier { upper: 0x923b1d2d810a47441aeb32c86016bd04, lower: 0x79568f23bf85f8120ff433e98cf9a641 }, // -2029
    Multiplier { upper: 0xe9f82eaf34dd3ed35e451e0d668ac807, lower: 0x288a7e9f98d659b67fed1fdc14c2a39b }, // -2028
    Multiplier { upper: 0xbb2cf225c3e43242b1d0e4d7853bd338, lower: 0xed3b987fad7847c53324197cdd6882e2 }, // -2027
    Multiplier { upper: 0x95bd8e849cb68e9bc173ea46042fdc2d, lower: 0x8a96139957936c9dc28347971786cf1b }, // -2026
    Multiplier { upper: 0xef95b0d42df0e42c68b976d66d196048, lower: 0xddbcec288c1f142f9d9ed8f1bf3e182c }, // -2025
    Multiplier { upper: 0xbfaaf3dcf18d8356ba2df8ab8a7ab36d, lower: 0x7e30bced3ce5a9bfb14be0c165cb4689 }, // -2024
    Multiplier { upper: 0x99558fe3f47135defb57fa22d52ef5f1, lower: 0x31c0972430b7baffc109809ab7d5d208 }, // -2023
    Multiplier { upper: 0xf555b30653e8563192265d04884b231b, lower: 0x82cdbea04df2c4cc680f342abfbc833f }, // -2022
    Multiplier { upper: 0xc4448f38432044f474eb7d9d39d5b5af, lower: 0x9bd7cbb3718f03d6b9a5c355663068ff }, // -2021
    Multiplier { upper: 0x9d03a5c69c19d0c390bc647dc7de2af2, lower: 0xe313095c5ad8cfdefaeb02aab826ba66 }, // -2020
    Multiplier { upper: 0xfb39093dc68fb46c1ac7072fa63044b7, lower: 0xd1b80efa2af47fcb2b119dddf3712a3c }, // -2019
    Multiplier { upper: 0xc8fa6dcb053fc389af059f5951c036f9, lower: 0x74933f2e88c3996f55a7b17e5c5a8830 }, // -2018
    Multiplier { upper: 0xa0c857d59dcc9c6e259e191441669261, lower: 0x2a0f65bed3cfadf2aaec8dfeb0486cf4 }, // -2017
    Multiplier { upper: 0x80a046447e3d49f1b7b1ada9cdeba84d, lower: 0xbb3f8498a972f18eef23a4cbc039f0c3 }, // -2016
    Multiplier { upper: 0xcdcd3d3a6395431c591c490fafdf73af, lower: 0x91ff3a8ddbeb1c17e505d479338fe79e }, // -2015
    Multiplier { upper: 0xa4a430fb82ddcf49e0e36da6264c5c8c, lower: 0x74cc2ed7e3227cdfea6b1060f60cb94b }, // -2014
    Multiplier { upper: 0x83b68d96024b0c3b1a4f8aeb51d6b070, lower: 0x5d7025798281fd7feebc0d1a5e70943c }, // -2013
    Multiplier { upper: 0xd2bdaf566a11ad2b5d4c117882f11a4d, lower: 0x624d08c26a6995997df9ae90971a86c7 }, // -2012
    Multiplier { upper: 0xa897bf7854daf0ef7dd6746068c0e1d7, lower: 0x81d73a3521ee114797faf20d45aed239 }, // -2011
    Multiplier { upper: 0x86dfcc6043e25a5931785d19ed671b12, lower: 0xce45c82a818b4106132f280a9e2574fa }, // -2010
    Multiplier { upper: 0xd7cc7a339fd0908eb58d61c31571c4ea, lower: 0xe3a2d9dd9c1201a351e50cddc9d587f7 }, // -2009
    Multiplier { upper: 0xaca394f61973a6d8913de7cf445b03ef, lower: 0x1c8247e47cdb3482a7ea70b16e446cc5 }, // -2008
    Multiplier { upper: 0x8a1c772b478fb8ad40fe530c36af3658, lower: 0xe39b6cb6ca48f6ceecbb8d5abe9d23d1 }, // -2007
    Multiplier { upper: 0xdcfa58453f4c5aaece63b8138ab1f08e, lower: 0x38f8adf143a7f14b145f489130fb6c82 }, // -2006
    Multiplier { upper: 0xb0c8469dcc3d1558a51c9342d55b26d8, lower: 0x2d93be5a9c865aa276b2a074272f8a01 }, // -2005
    Multiplier { upper: 0x8d6d054b09ca777a1db075cf1115b8ac, lower: 0xf142feaee39eaee85ef54d29b8f2d4ce }, // -2004
    Multiplier { upper: 0xe24808780faa58c362b3efb1b4ef8de1, lower: 0x8204cab16c3117da31887b75f4b7bae3 }, // -2003
    Multiplier { upper: 0xb5066d2cd95513cf82298c8e2a593e4e, lower: 0x019d6ef4568dacae8e06c92b2a2c9582 }, // -2002
    Multiplier { upper: 0x90d1f0f0addda972ce87a3a4eeadcb71, lower: 0x9ae458c3787156f20b38a0ef54f0779c }, // -2001
    Multiplier { upper: 0xe7b64e4de2fc42514a729f6e4aafabe8, lower: 0xf7d3c138c0b557e9ab8dce4bbb1a58f9 }, // -2000
    Multiplier { upper: 0xb95ea50b1bfd01daa1f54c583bbfbcba, lower: 0x5fdc9a93cd5ddfee22d7d83c95aead94 }, // -1999
    Multiplier { upper: 0x944bb73c1664017bb4c43d1362ffca2e, lower: 0xb316e20fd77e4cbe82464696de2557aa }, // -1998
    Multiplier { upper: 0xed45f1f9bd6ccf2c546d2e856b32dd17, lower: 0x84f169b2f263adfd9d3d3dbe303bbf76 }, // -1997
    Multiplier { upper: 0xbdd18e6164570c2376bdbed1228f1746, lower: 0x03f4548f284fbe647dca97cb59c965f8 }, // -1996
    Multiplier { upper: 0x97dad84de9df3ce92bcaff0db53f45d1, lower: 0x9cc376d8ed0c985064a2130914a11e60 }, // -1995
    Multiplier { upper: 0xf2f7c07ca9652e41dfab31af88653c82, lower: 0x946bf15b14e0f3b3d43684db5434fd66 }, // -1994
    Multiplier { upper: 0xc25fcd30878425017fbc27bfa050fd35, lower: 0x43898de2771a5c8fdcf86a49102a6452 }, // -1993
    Multiplier { upper: 0x9b7fd75a060350cdffc9b96619da642a, lower: 0x9c6e0b1b927b7d3fe3f9eea0d9bb8375 }, // -1992
    Multiplier { upper: 0xf8cc8bc33cd21ae332dc5bd68fc3d377, lower: 0x60b011c5b72bfb996cc31767c2c59f21 }, // -1991
    Multiplier { upper: 0xc70a0968fd74e24f5be37caba63642c5, lower: 0xe6f3416af8effc7abd68df86356ae5b4 }, // -1990
    Multiplier { upper: 0x9f3b3aba645d81d9164f96efb82b689e, lower: 0x525c345593f330623120b2d1c4558490 }, // -1989
    Multiplier { upper: 0xfec52ac3d3c8cfc1bd4c24b2c0457430, lower: 0x83c6ba228651e70381cdeae93a226db3 }, // -1988
    Multiplier { upper: 0xcbd0ef030fd3d967caa3508f00379026, lower: 0xcfd22e82050e526934a4bbedc81b8af6 }, // -1987
    Multiplier { upper: 0xa30d8c02730fe11fd54f73a599c60ceb, lower: 0xd974f2019da50eba9083c98b067c6f2b }, // -1986
    Multiplier { upper: 0x82713ccec2731a7fddd9295147d1a3ef, lower: 0xe12a5b347e1da5620d363ad59ec9f289 }, // -1985
    Multiplier { upper: 0xd0b52e179d84f732fc8ea8820c829fe6, lower: 0x351091ed9695d569aebd2aef647650db }, // -1984
    Multiplier { upper: 0xa6f75812e46a5f5bfd3eed34d6cee651, lower: 0xc40d418adede44548bca88bf8391da49 }, // -1983
    Multiplier { upper: 0x8592acdbe9eeb2affdcbf0f7123f1ea7, lower: 0xd00a9ad57f1836aa096ed3cc69417b6d }, // -1982
    Multiplier { upper: 0xd5b77af9764ab77ffc79818b5064fdd9, lower: 0x4cddc488cb59f1100f17b9470ecf2be2 }, // -1981
    Multiplier { upper: 0xaaf92f2df83bc5fffd2e013c4050cb14, lower: 0x3d7e36d3d5e18da672796105a5728982 }, // -1980
    Multiplier { upper: 0x88c758f1936304ccca8b34303373d5a9, lower: 0xcacb5f0fde4e0aeb8ec780d151286e01 }, // -1979
    Multiplier { upper: 0xdad88e4f523807ae10deb9e6b8b955dc, lower: 0x77abcb4c96e344ac17a59ae881da499c }, // -1978
    Multiplier { upper: 0xaf13a50c41c66c8b40b22e522d61117d, lower: 0x2c896f7078b5d089ac847bed34aea149 }, // -1977
    Multiplier { upper: 0x8c0fb73d016b8a09008e8b74f11a7464, lower: 0x23a125f393c4a6d48a0396575d588108 }, // -1976
    Multiplier { upper: 0xe019252e68ac100e674a78bb1b5d8706, lower: 0x9f683cb8ec6dd7ba766c23befbc0ce72 }, // -1975
    Multiplier { upper: 0xb34750f1ed56733eb9086095af7e059e, lower: 0xe5ecfd60bd24ac952b89b6326300a528 }, // -1974
    Multiplier { upper: 0x8f6c40c18aab8f6560d38077bf98047f, lower: 0x1e57311a30ea23aa893af8284f33b754 }, // -1973
    Multiplier { upper: 0xe57a0135aaac18a234859a59328cd3fe, lower: 0x96f1e829e7dd05dda85e59da1852beec }, // -1972
    Multiplier { upper: 0xb794cdc48889ad4e906ae1e0f53d7665, lower: 0x458e5354b97d9e4aed1847e1ad0eff23 }, // -1971
    Multiplier { upper: 0x92dd716a06d48aa540558180c4312b84, lower: 0x37a50f76facae508bdad064e240bff4f }, // -1970
    Multiplier { upper: 0xeafbe8a9a487443b9a2268ce06b5126d, lower: 0x25d4e58b2ade3b412f7b3d49d346654c }, // -1969
    Multiplier { upper: 0xbbfcba21506c369614e853d8055da857, lower: 0x51771e08ef182f67592f643b0f6b843d }, // -1968
    Multiplier { upper: 0x9663c81aa6bcf87810b9dcacd117b9df, lower: 0x745f4b3a58e025ec47591cfc0c560364 }, // -1967
    Multiplier { upper: 0xf09fa6910ac7f3f34df62de14e8c5c98, lower: 0xba3211f6f499d646d88e94c67a23389f }, // -1966
    Multiplier { upper: 0xc07fb874089ff65c3e5e8b1aa53d16e0, lower: 0x94f4db2bf6e17838ad3edd6b94e8fa19 }, // -1965
    Multiplier { upper: 0x99ffc6c33a1991e365186f488430df1a, lower: 0x10c3e289924df9c6f0ff178943ed94e1 }, // -1964
    Multiplier { upper: 0xf6660ad1f68f4fd23b5a4ba739e7cb5c, lower: 0xe79fd0dc1d498fa4b4cb58db9fe287ce }, // -1963
    Multiplier { upper: 0xc51e6f0e5ed90ca82f7b6fb8fb1fd5e3, lower: 0xec7fda49b107a61d5d6f7a494cb53972 }, // -1962
    Multiplier { upper: 0x9db1f271e57a70868c62bfc72f4cab1c, lower: 0xbd331507c0d2eb4ab125fb6dd6f76128 }, // -1961
    Multiplier { upper: 0xfc4fea4fd590b40a7a37993eb21444fa, lower: 0xc851bb3f9aeb12111b6ff8afbe589b73 }, // -1960
    Multiplier { upper: 0xc9d9883fde0d5cd52e92e0fef4dd03fb, lower: 0xd37495cc7bef41a74926608c9846e2c2 }, // -1959
    Multiplier { upper: 0xa17ad3664b3de3ddbedbe7325d7d9cc9, lower: 0x75f6de3d2ff29aec3a851a0a136be89c }, // -1958
    Multiplier { upper: 0x812f0f8508fe4fe498afec284acae3d4, lower: 0x5e5f1830f3287bf02ed0e1a1a923207d }, // -1957
    Multiplier { upper: 0xceb1b26e74ca196dc11979da11449fba, lower: 0x309826b4b840c64d17b49c35db6b672d }, // -1956
    Multiplier { upper: 0xa55af5252a3b478b00e12e480dd07fc8, lower: 0x26e01ef6f9cd6b70dfc3b02b15ef85be }, // -1955
    Multiplier { upper: 0x8448c41dbb629fa2671a8b6cd7d9ffd3, lower: 0x524ce592617122c0b302f355ab260498 }, // -1954
    Multiplier { upper: 0xd3a7a02f923765d0a4f7457af2f6661e, lower: 0xea14a283cf1b6acdeb37ebbc4509a0f3 }, // -1953
    Multiplier { upper: 0xa952e68c74f91e4083f904625bf851b2, lower: 0x54dd4ecfd8e2bbd7ef5fefc9d0d480c3 }, // -1952
    Multiplier { upper: 0x8775853d2a60e50069940381e32d0e28, lower: 0x43e43f0cad822fdff2b3263b0d76cd69 }, // -1951
    Multiplier { upper: 0xd8bc0861dd67d4cd75b99f36384816a6, lower: 0xd306cb477c037fccb78509f8158ae241 }, // -1950
    Multiplier { upper: 0xad6339e7e45310a45e2e18f82d067885, lower: 0x759f0905fccf997092d0d4c677a24e9a }, // -1949
    Multiplier { upper: 0x8ab5c7ecb6a8da1d1824e0c68a6b939d, lower: 0xf7b26d9e63d9478d4240aa385fb50baf }, // -1948
    Multiplier { upper: 0xddefa6478aa7c361c03b013daa45b8fc, lower: 0xbf83e2970628727b9d34438d65ee7917 }, // -1947
    Multiplier { upper: 0xb18c8506088635e7ccfc00fe21d160ca, lower: 0x32cfe878d1b9f52fb0f69c711e5860df }, // -1946
    Multiplier { upper: 0x8e0a0404d39e91863d966731b4a780a1, lower: 0xc23fed2d7494c426272bb05a7ead1a4c }, // -1945
    Multiplier { upper: 0xe34339a152974f3d2f570b82baa59a9c, lower: 0x69ffe1e2542139d6a512b3c3fde1c3ad }, // -1944
    Multiplier { upper: 0xb5cf614ddbac3f6425df3c689551487d, lower: 0x21998181dce76178840ef63664b49c8b }, // -1943
    Multiplier { upper: 0x9172b43e4956991ceb18fd20777439fd, lower: 0xb47ace017d85e7939cd8c4f850907d3c }, // -1942
    Multiplier { upper: 0xe8b786ca0ef0f4fb11c19500bf205cc9, lower: 0x20c47ccf2f3ca5b8faf46e5a1a80c85f }, // -1941
    Multiplier { upper: 0xba2c6bd4d8c0c3fc0e347733cc19e3d4, lower: 0x1a36ca3f58fd5160c8c38b7b486706b3 }, // -1940
    Multiplier { upper: 0x94f05643e09a36633e905f5ca347e976, lower: 0x7b5f0832ad97744d6d693c62a0526bc2 }, // -1939
    Multiplier { upper: 0xee4d56d300f6bd6b974d6561053fdbf0, lower: 0xc564d9eaaf58ba157bdb93d10083df9d }, // -1938
    Multiplier { upper: 0xbea445759a5efdefac3deab40433165a, lower: 0x3783e1888c46fb4463160fda66cfe617 }, // -1937
    Multiplier { upper: 0x98836ac47b7f318c89cb22299cf5ab7b, lower: 0x5f9cb46d3d0595d04f44d97b85731e79 }, // -1936
    Multiplier { upper: 0xf40577a0c5984f4742de9d0f6189125e, lower: 0xff6120aec808efb3b207c25f3beb63f5 }, // -1935
    Multiplier { upper: 0xc33792e70479d905cf187da5e7a0db7f, lower: 0x32b41a256cd3f2f628063518fcbc4ff7 }, // -1934
    Multiplier { upper: 0x9c2c75859d2e4737d8e06484b94d7c65, lower: 0xc229ae84570ff591b99e90e0ca303ff9 }, // -1933
    Multiplier { upper: 0xf9e0bc08fb7d3ebfc167073ac21593d6, lower: 0x0375e406f1b32282c2974e3476b3998e }, // -1932
    Multiplier { upper: 0xc7e6fcd3fc643233011f38fbce77a978, lower: 0x02c4b66bf48f4ecf0212a4f6c55c7ad8 }, // -1931
    Multiplier { upper: 0x9febfd7663835b5c00e5c72fd85fbac6, lower: 0x689d5ebcc3a5d8a59b421d92377d2f13 }, // -1930
    Multiplier { upper: 0xffdffbf09f38922cce3c71e626ff913d, lower: 0x742efdfad2a2f43c2b9cfc1d2595181f }, // -1929
    Multiplier { upper: 0xccb32ff3b293a823d8305b1e859940fd, lower: 0xf68bfe62421bf696894a634a8477467f }, // -1928
    Multiplier { upper: 0xa3c28cc2f542ece979c048e537adcd97, lower: 0xf86ffeb501aff8786dd51c3b9d2c3866 }, // -1927
    Multiplier { upper: 0x83020a35910257212e336d842c8b0adf, lower: 0xf9f3322a67bff9f9f17749c94a89c6b8 }, // -1926
    Multiplier { upper: 0xd19cdd22819d583516b8af39e0de77cc, lower: 0xc31eb6aa3f998ff64f2542dbaa760ac0 }, // -1925
    Multiplier { upper: 0xa7b0b0e867b1135dabc6f294b3e52ca3, lower: 0xcf4bc554ffae0cc50c1dcf1621f80899 }, // -1924
    Multiplier { upper: 0x8626f3ed1fc0dc4aefd25baa298423b6, lower: 0x3f6fd110cc8b3d6a7017d8de81933a14 }, // -1923
    Multiplier { upper: 0xd6a4b97b66016077e61d5f76a8d36c56, lower: 0xcbe61b4e1411fbdd802627ca68eb9020 }, // -1922
    Multiplier { upper: 0xabb6fac91e67805feb4ab2c553dc56ab, lower: 0xd651af71a9a7fcb13351b96eba560ce7 }, // -1921
    Multiplier { upper: 0x895f2f074b86004cbc3bc2377649deef, lower: 0xdea7bf8e2153308dc2a7c78bc844d71f }, // -1920
    Multiplier { upper: 0xdbcb7e721270007ac6c6038bf076317f, lower: 0xcaa5ff49ceeb80e2d10c7279406e24fe }, // -1919
    Multiplier { upper: 0xafd5fec1a85999fbd23802d659f82799, lower: 0x6eeb32a1725600b57409f52dcd24ea65 }, // -1918
    Multiplier { upper: 0x8cab323486ae14c974f99bdeae601fad, lower: 0xf255c21ac1de66f79007f757d750bb84 }, // -1917
    Multiplier { upper: 0xe111e9eda449badbee5c2c977d669916, lower: 0x508936913630a4bf4cd98bbfbee7926d }, // -1916
    Multiplier { upper: 0xb40e54be1d07c8aff1e356df97854745, lower: 0x0d3a920dc4f3b6ff70ae09663252db8a }, // -1915
    Multiplier { upper: 0x900b76fe7d9fd3bff4b5df1946043904, lower: 0x0a9541a49d8fc59926f1a11e8ea8afa2 }, // -1914
    Multiplier { upper: 0xe678be63fc32ec66545631c209a05b39, lower: 0xaa886907627fa28ea4b5ce974aa77f69 }, // -1913
    Multiplier { upper: 0xb860984ffcf589eb76ab5b01a14d15c7, lower: 0xbba05405e8661ba550917212a21f9921 }, // -1912
    Multiplier { upper: 0x938079d9972ad4bc5eef7c014dd7449f, lower: 0xc94d1004b9eb49510d41280ee819474e }, // -1911
    Multiplier { upper: 0xec00c2f5beaaedfa317f2ccee2f20766, lower: 0x0ee1b33ac3120ee815350ce4a68ed87c }, // -1910
    Multiplier { upper: 0xbccd68c49888be61c1328a3f1bf4d2b8, lower: 0x0be7c29568db3f2010f73d83b87246ca }, // -1909
    Multiplier { upper: 0x970aba36e06d651b00f53b65aff70ef9, lower: 0xa31fcedded7c32800d92979c938e9f08 }, // -1908
    Multiplier { upper: 0xf1aac38b00af082b34bb923c4cbe7e5c, lower: 0x3832e49648c6b73348ea8c2db8e431a6 }, // -1907
    Multiplier { upper: 0xc155693c008c0688f6fc74fd0a31feb0, lower: 0x2cf583ab6d6bc5c2a0bba357c71cf485 }, // -1906
    Multiplier { upper: 0x9aaaba9666d66ba0c596c3fda1c1988c, lower: 0xf0c46955f123049bb3c94f796c172a04 }, // -1905
    Multiplier { upper: 0xf77790f0a48a45ce08f13995cf9c2747, lower: 0xe7a0a88981d1a0f91fa87f28acf1dcd3 }, // -1904
    Multiplier { upper: 0xc5f940c083a1d171a0c0fade3fb01f6c, lower: 0xb94d53a134a7b3fa7fb9ff53bd8e4a42 }, // -1903
    Multiplier { upper: 0x9e61009a02e7dac14d672f1832f34c56, lower: 0xfaa442e75d52f661ffc7ff76313ea1cf }, // -1902
    Multiplier { upper: 0xfd6800f66b0c913548a51826b7ebad57, lower: 0xf76d37d895518a36660ccbf04eca9c7e }, // -1901
    Multiplier { upper: 0xcab99a5ebc0a0dc43a1dacebc6562446, lower: 0x5f8a9313aaa7a1c51e70a326a56ee398 }, // -1900
    Multiplier { upper: 0xa22e1518966e7169c817bd896b781d05, lower: 0x193ba8dc88861b04185a1c1eeabf1c7a }, // -1899
    Multiplier { upper: 0x81be7746debec1216cdfcad455f9b0d0, lower: 0xe0fc8716d39e7c0346ae7ce58898e395 }, // -1898
    Multiplier { upper: 0xcf97253e3131350247cc77ba23291ae7, lower: 0xce60d82485ca60053de3fb08da8e38ee }, // -1897
    Multiplier { upper: 0xa6128431c0f42a6839705fc81c20e253, lower: 0x0b80acea04a1e66a97e995a0aed82d8b }, // -1896
    Multiplier { upper: 0x84db9cf49a5ceeb9c78d196ce34d81dc, lower: 0x0933bd8803b4b855465477b3bf1357a2 }, // -1895
    Multiplier { upper: 0xd49294ba9094b1293f4828ae387c02f9, lower: 0xa852c8d99f878d553d53f2b931b88c37 }, // -1894
    Multiplier { upper: 0xaa0edd620d43c0edcc39ba24f9fccf2e, lower: 0x20423a47b2d2d7776443289427c6d692 }, // -1893
    Multiplier { upper: 0x880be44e710300be3cfafb50c7fd728b, lower: 0x4d01c8395bdbdf92b69c20768638aba8 }, // -1892
    Multiplier { upper: 0xd9aca07d819e6796c7f7f8813ffbea78, lower: 0x7b360d2892f965b78a93672409f445da }, // -1891
    Multiplier { upper: 0xae23b3979ae51fabd32cc6cdccc98860, lower: 0x6291a4207594515fa20f85b66e5d04ae }, // -1890
    Multiplier { upper: 0x8b4fc2dfaf1db2efdc23d23e3d6e06b3, lower: 0x820e1ce6c476a77fb4d937c5251736f2 }, // -1889
    Multiplier { upper: 0xdee60499182f84b2f9d2e9fd2f16711f, lower: 0x367cfb0ad3f10bff87c1f2d5082524b6 }, // -1888
    Multiplier { upper: 0xb2519d47468c6a28c7dbee6425ab8db2, lower: 0x91fd95a243273ccc6c9b28aa6cea83c5 }, // -1887
    Multiplier { upper: 0x8ea7b105d209ee8706498b8351560af5, lower: 0x4197aae835b8fd7056e286eebd88696b }, // -1886
    Multiplier { upper: 0xe43f81a2e9a97da4d6dc126bb55677ee, lower: 0xcf5911738927fbe6f16a717dfc0d7577 }, // -1885
    Multiplier { upper: 0xb6993482548797b71249a8562aab9325, lower: 0x72ada78fa0ecc9858deec13196712ac6 }, // -1884
    Multiplier { upper: 0x92142a01dd39462c0ea153782222dc1d, lower: 0xf557b93fb3f0a137a4bf00f4785a889e }, // -1883
    Multiplier { upper: 0xe9b9dccfc85ba379b1021f269d049363, lower: 0x2225f532b98101f2a1319b20c090da96 }, // -1882
    Multiplier { upper: 0xbafb170ca0494f948d9b4c1ee403a91c, lower: 0x1b5190f56134018ee75ae2809a0d7bac }, // -1881
    Multiplier { upper: 0x9595ac0a19d43faa0ae2a34be99c8749, lower: 0xaf7473f780f667a585e24ecd480ac956 }, // -1880
    Multiplier { upper: 0xef55e01029539910116a9edfdc2da542, lower: 0xb253ecbf34bd72a26fd07e1540114223 }, // -1879
    Multiplier { upper: 0xbf77e6735442e0d9a7887f197cf15102, lower: 0x284323cc2a312881f30d31aa99a7681c }, // -1878
    Multiplier { upper: 0x992cb85c4368b3e152d398e130c10d9b, lower: 0x5368e97021c0ed34c270f4887aec534a }, // -1877
    Multiplier { upper: 0xf5145a2d38a7863551528e351ace7c2b, lower: 0xb8a7dbe69c67e1ee03e7eda72b13b876 }, // -1876
    Multiplier { upper: 0xc41048242d52d1c4410ed82a7bd86356, lower: 0x2d53165216b9818b36532485bc0fc6c5 }, // -1875
    Multiplier { upper: 0x9cd9d35024424169cda579bb9646b5de, lower: 0x8aa8dea8122e013c2b75b6d1633fd237 }, // -1874
    Multiplier { upper: 0xfaf61ee6a06a0242e2a25c5f56d78964, lower: 0x110e310ce9e3352d1255f14f0532e9f2 }, // -1873
    Multiplier { upper: 0xc8c4e5854d219b68b54eb04c45793ab6, lower: 0x740b5a70bb1c2a8a75118dd8d0f587f5 }, // -1872
    Multiplier { upper: 0xa09d846aa41ae2ba2aa559d69dfa955e, lower: 0xc33c485a2f49bba1f7413e470d913991 }, // -1871
    Multiplier { upper: 0x807e03888348b561bbb77b1217fbaab2, lower: 0x35c9d37b5907c94e5f676505a4742e0d }, // -1870
    Multiplier { upper: 0xcd966c0d9edabbcf92bf2b50265f7783, lower: 0x8942ebf88e72dbb098a56e6f6d86b015 }, // -1869
    Multiplier { upper: 0xa47856714be22fd94232890ceb7f92cf, lower: 0xa102566071f57c8d46eabebf8ad22677 }, // -1868
    Multiplier { upper: 0x8393785aa31b597a9b5ba0d722cc7572, lower: 0xe73511e6c1913071058898993bdb51f9 }, // -1867
    Multiplier { upper: 0xd2858d5dd1c55bf75ef9015837ad88b7, lower: 0xd854e97135b51a4e6f40f4285fc54ff5 }, // -1866
    Multiplier { upper: 0xa86ad77e416aaff918c7344692f13a2c, lower: 0xad10bac0f7c4150b8c33f686b3043ff7 }, // -1865
    Multiplier { upper: 0x86bbdf983455599413d29038758dc823, lower: 0xbda6fbcd930344093cf65ed228d0332c }, // -1864
    Multiplier { upper: 0xd792ff59ed555c201fb74d27227c736c, lower: 0x62a4c615b80539a8618a3150414d1ead }, // -1863
    Multiplier { upper: 0xac759914bddde34ce62c3db8e8638f89, lower: 0xe883d1aaf99dc7b9e7a1c10d010a7ef1 }, // -1862
    Multiplier { upper: 0x89f7adaa317e4f70b8236493ed1c72d4, lower: 0xba030e22614b062e52e7cda400d5325a }, // -1861
    Multiplier { upper: 0xdcbf7c438263b24df36bd41fe1c71e21, lower: 0x299e7d03cede704a1e3faf6cce21ea2a }, // -1860
    Multiplier { upper: 0xb099303601e95b718f89767fe7d27e80, lower: 0xee1864030be526a1b1cc8c570b4e54ee }, // -1859
    Multiplier { upper: 0x8d4759c4ce544927a60791ffeca86533, lower: 0xf1ad1ccf3cb7521af4a3a378d5d843f2 }, // -1858
    Multiplier { upper: 0xe20bc2d47d53a83f700c1cccadda3b86, lower: 0x4f7b614b9458835e5439058e22f39fe9 }, // -1857
    Multiplier { upper: 0xb4d63576caa95365f33ce3d6f17b62d1, lower: 0xd92f8109437a02b1dcfa6ad81bf61988 }, // -1856
    Multiplier { upper: 0x90ab5df8a2210f84c2971cabf462b574, lower: 0xadbf9a6dcf94cef4b0c85579aff8146d }, // -1855
    Multiplier { upper: 0xe778965a9d01b26e0424faacba3788ba, lower: 0xaf98f71618ee17ede7a6ef29198ced7a }, // -1854
    Multiplier { upper: 0xb92d45154a67c1f19cea6223c82c6d62, lower: 0x2613f8de7a581324b95258edae0a5795 }, // -1853
    Multiplier { upper: 0x942437443b8634c14a551b4fd356bde8, lower: 0x1e7660b1fb79a8ea2ddb7a57be6eac77 }, // -1852
    Multiplier { upper: 0xed06bed39270546876ee92195224630c, lower: 0xfd8a344ff8c2a7dd162bf6f2ca4aad8b }, // -1851
    Multiplier { upper: 0xbd9eff0fa859dd205f2541addb504f3d, lower: 0x97a1c3732d68864a78232bf56ea22470 }, // -1850
    Multiplier { upper: 0x97b265a62047e419e5b767be490d0c31, lower: 0x461b02c28aba0508601c232abee81d26 }, // -1849
    Multiplier { upper: 0xf2b70909cd3fd35ca2bf0c63a814e04e, lower: 0xd6919e041129a1a7002d0511317361d6 }, // -1848
    Multiplier { upper: 0xc22c073b0a9975e3b565a382ecdd803f, lower: 0x120e180340ee1aec0024040dc1291b12 }, // -1847
    Multiplier { upper: 0x9b566c2f3badf7e95deae9358a4accff, lower: 0x41a4e0029a58158999b669a49a8748db }, // -1846
    Multiplier { upper: 0xf88a46b1f91659756311752276de14cb, lower: 0x9c3b00042a2688dc2923dc3a90d87492 }, // -1845
    Multiplier { upper: 0xc6d5055b2dab7ac44f412a81f8b1aa3c, lower: 0x7cfc000354eba0b020e97cfba7139075 }, // -1844
    Multiplier { upper: 0x9f10d115be22c89d0c34220193c154fd, lower: 0x30c9999c43efb3c01a5463fc85a9405e }, // -1843
    Multiplier { upper: 0xfe814e893037a761ad203668ec6887fb, lower: 0x81428f606cb2b9335d53d32da2a866fc }, // -1842
    Multiplier { upper: 0xcb9aa53a8cf952b48a802b872386d32f, lower: 0x9a9ba5e6bd5bc75c4aa975be1bb9ebfd }, // -1841
    Multiplier { upper: 0xa2e21dc870c7755d3b99bc6c1c6bdc26, lower: 0x1549518564496c49d5545e31afc7effd }, // -1840
    Multiplier { upper: 0x824e7e39f3d2c44a961496bce3897ceb, lower: 0x443aa79de9d456a17776b1c1596cbffe }, // -1839
    Multiplier { upper: 0xd07d96c31fb7a077568757949f426178, lower: 0x6d2aa5c976208a9bf25782cef57accc9 }, // -1838
    Multiplier { upper: 0xa6cadf027fc619f91205dfaa1901e793, lower: 0x8a8884a12b4d3baff512cf0bf79570a1 }, // -1837
    Multiplier { upper: 0x856f18cecc9e7b2da804b2ee7a67ec76, lower: 0x086d36e755d762f32a75726ff9445a1b }, // -1836
    Multiplier { upper: 0xd57e8e17adca5eaf733ab7e3f70cad89, lower: 0xa71524a556256b1eaa5583e65ba0902a }, // -1835
    Multiplier { upper: 0xaacba4dfbe3b7ef2c2955fe992708ad4, lower: 0x85aa83b7781def4bbb779cb8494d4022 }, // -1834
    Multiplier { upper: 0x88a2ea4c982f98c235444cbadb8d3bdd, lower: 0x37bb9c92c67e590962c616f9d43dcce8 }, // -1833
    Multiplier { upper: 0xda9e43adc04c279d2206e12af8e1f961, lower: 0xf2c5c7513d96f4dbd13cf18fb9fc7b0d }, // -1832
    Multiplier { upper: 0xaee502f166a352e41b38b42260b4c781, lower: 0x8f049f74314590afda9727a62e6395a4 }, // -1831
    Multiplier { upper: 0x8bea68c11ee90f1ce293c34eb3c3d2ce, lower: 0x0c03b2c35a9e0d597bac1fb8251c77b6 }, // -1830
    Multiplier { upper: 0xdfdd74683174e4fb041f9ee452d2eae3, lower: 0x466c513890fce228c5e032c03b60bf8a }, // -1829
    Multiplier { upper: 0xb31790535ac3ea6269b2e583757588b5, lower: 0xd1f040fa0d971b53d1802899c91a32d5 }, // -1828
    Multiplier { upper: 0x8f460d0f7bcfeeb5215beacf912ad3c4, lower: 0xa7f3672e7145af76413353ae3a7b5bde }, // -1827
    Multiplier { upper: 0xe53ce1b25fb31788355fde18e8448607, lower: 0x731f0b7d820918bd351eec49f72bc62f }, // -1826
    Multiplier { upper: 0xb763e7c1e628dfa02ab31813ed039e6c, lower: 0x5c18d5fe01a0e0975db256a192896b59 }, // -1825
    Multiplier { upper: 0x92b6530184ed7fb3555c13432402e523, lower: 0x7ce0ab319ae71a12b15b788142078914 }, // -1824
    Multiplier { upper: 0xeabd519c07e265ebbbc68538399e3b6b, lower: 0xfb0111e8f7d829b7822bf402033f41b9 }, // -1823
    Multiplier { upper: 0xbbcaa7b0064eb7efc96b9dc6947e95ef, lower: 0xfc00db20c64687c601bcc334cf65ce2e }, // -1822
    Multiplier { upper: 0x963bb9599ea55ff307894b05439877f3, lower: 0x3000af4d6b6b9fd19afd68f70c5171be }, // -1821
    Multiplier { upper: 0xf05f8ef5caa2331e727544d538f3f31e, lower: 0xb3344baf1245cc82919574be7a1be930 }, // -1820
    Multiplier { upper: 0xc04c725e3bb4f5b1f52a9d7760c328e5, lower: 0x5c29d625a837d6cedaddf6fec8165427 }, // -1819
    Multiplier { upper: 0x99d6c1e4fc90c48e5dbbb12c4d68ed84, lower: 0x49bb11b7b9c6457248b192656cdea9b9 }, // -1818
    Multiplier { upper: 0xf624696e60e7a0e3c92c4ead48a7e26d, lower: 0x42c4e925f60a08b6dab5b708ae310f8e }, // -1817
    Multiplier { upper: 0xc4e9edf1e71fb3e96dbd0bbdd3b981f1, lower: 0x023720eb2b3b3a2be22af8d3be8da60b }, // -1816
    Multiplier { upper: 0x9d87f18e527fc32124973c97dc9467f4, lower: 0x01c5b3ef55c8fb564e88c70fcba484d6 }, // -1815
    Multiplier { upper: 0xfc0cb5b083ff9e9b6dbec75960ed7320, lower: 0x02d5ecb222db2bbd4a7471b2df6da156 }, // -1814
    Multiplier { upper: 0xc9a3c48d3666187c57cbd2ade7245c19, lower: 0x9bde56f4e8af5631085d27c24c57b445 }, // -1813
    Multiplier { upper: 0xa14fd070f851ad30463ca88b1f5049ae, lower: 0x164b78c3ed5911c0d37db9683d12f69d }, // -1812
    Multiplier { upper: 0x810ca6c0c6a7bdc0383086d5b2a6a158, lower: 0x11d5fa36577a749a42cafab9ca759218 }, // -1811
    Multiplier { upper: 0xce7aa467a43f960059e73e22b7710226, lower: 0x82eff6bd58c3edc39e11912943ef5026 }, // -1810
    Multiplier { upper: 0xa52ee9ec83661199e185cb4ef92734eb, lower: 0x9bf32bcaad698b02e4dada87698c401e }, // -1809
    Multiplier { upper: 0x842587f0691e747b1ad16f7260ec2a56, lower: 0x165c23088abad59bea48aed2bad699b2 }, // -1808
    Multiplier { upper: 0xd36f3fe70e9720c4f7b57f1d67e043bc, lower: 0xf0936b40ddf7bc2caa0de4845e24291c }, // -1807
    Multiplier { upper: 0xa925ccb8d878e703f95dff4ab9803630, lower: 0xc075ef6717f96356ee71839d181cedb0 }, // -1806
    Multiplier { upper: 0x87517093e060b8cffab19908946691c0, lower: 0x99f7f2b8dffab5df25279c7dace3f15a }, // -1805
    Multiplier { upper: 0xd8824db9670127b32ab5c1a753d74f9a, lower: 0x8ff31df4999122fea1d8fa62ae398229 }, // -1804
    Multiplier { upper: 0xad350afab8cdb95c222b0152a9790c7b, lower: 0xa65c17f6e140e8cbb4ad951bbe946821 }, // -1803
    Multiplier { upper: 0x8a90d59560a49449b4ef3442212da396, lower: 0x1eb0132be76720a2f6f144163210534e }, // -1802
    Multiplier { upper: 0xddb488ef010753a9217eba03684905bc, lower: 0xfde685130bd83437f1820689e9b3b87c }, // -1801
    Multiplier { upper: 0xb15d3a58cd9f7620e79894cf86a0d163, lower: 0xfe52040f3cacf693279b386e548fc6ca }, // -1800
    Multiplier { upper: 0x8de42ead714c5e80b946dd72d21a411c, lower: 0xcb74d00c308a5edc1faf605843a638a2 }, // -1799
    Multiplier { upper: 0xe306b1158213ca678ed7c8b7b690682e, lower: 0x1254801380dd649365e566f39f705a9c }, // -1798
    Multiplier { upper: 0xb59ef41134dca1ec72463a2c920d2024, lower: 0xdb76ccdc671783a91e511f294c59e216 }, // -1797
    Multiplier { upper: 0x914bf6742a4a1b238e9e94f074d74cea, lower: 0x492bd716b8df9c874b7418edd6ae4e78 }, // -1796
    Multiplier { upper: 0xe8798a5376dcf838e430ee4d87bee176, lower: 0xdb7958245aff60d878b9c17c8ab07d8d }, // -1795
    Multiplier { upper: 0xb9fad50f924a602d835a583e06324df8, lower: 0xaf9446837bff80ad2d616796d559fe0b }, // -1794
    Multiplier { upper: 0x94c8aa72db6eb3579c48469804f50b2d, lower: 0x59436b9c6332cd5757811fabdde19809 }, // -1793
    Multiplier { upper: 0xee0ddd84924ab88c2d4070f33b21ab7b, lower: 0xc20578fa3851488bbf34ff7963028cda }, // -1792
    Multiplier { upper: 0xbe717e03a83bc6d68a99f3f5c8e7bc63, lower: 0x019dfa61c6a76d3c98f732c7826870af }, // -1791
    Multiplier { upper: 0x985acb36202fd2453bae5cc4a0b96382, lower: 0x67b1951b0552bdca13f8f56c68538d59 }, // -1790
    Multiplier { upper: 0xf3c4785699e61d3b92b0946dcdf56c03, lower: 0xd91c21c4d5512fa9b98e557a4085aef4 }, // -1789
    Multiplier { upper: 0xc30393787b1e7dc94226dd24a4c45669, lower: 0x7a7ce7d0aaa759549471ddfb66d158c3 }, // -1788
    Multiplier { upper: 0x9c02dc60627ecb07681f175083d04521, lower: 0x2eca530d5552addd438e4b2f85744703 }, // -1787
    Multiplier { upper: 0xf99e2d6703fe11a57364f21a6c806e9b, lower: 0x7e1084e2221de2fb9f4a11e5a253a4d1 }, // -1786
    Multiplier { upper: 0xc7b1bdec0331a7b78f83f4e1f066bee2, lower: 0xcb406a4e81b18262e5d4db1e1b761d74 }, // -1785
    Multiplier { upper: 0x9fc164bccf5aec92d9365d818d1eff1b, lower: 0xd5cd21d867c1351beb10af4b492b4ac3 }, // -1784
    Multiplier { upper: 0xff9bd4614bc4adb7c1f0959c14fe64f9, lower: 0x561502f3d93521c644e77ededb78779e }, // -1783
    Multiplier { upper: 0xcc7ca9e76fd08af967f3aae343feb72d, lower: 0xde77358fe0f74e38371f98b2492d2c7f }, // -1782
    Multiplier { upper: 0xa396ee52bfda08c7865c88b5cffef8f1, lower: 0x7ec5c4731a5f71c6927fad5b6dbdbd32 }, // -1781
    Multiplier { upper: 0x82df250effe1a09f9eb06d5e3fff2d8d, lower: 0xff049d28e1e5f49edb99577c57cafdc2 }, // -1780
    Multiplier { upper: 0xd1650817ffcf6765cab3e230666515af, lower: 0xfe6dc841696fedcaf8f558c6f2de62d0 }, // -1779
    Multiplier { upper: 0xa78406799972b91e3bc31b59eb841159, lower: 0x9857d367878cbe3bfa5de09f28b1e8a6 }, // -1778
    Multiplier { upper: 0x86033861478efa7e9635af7b22d00de1, lower: 0x46aca91f9fa3cb632eb1807f53c186eb }, // -1777
    Multiplier { upper: 0xd66b8d68727e5d9756bc4bf837b34968, lower: 0x711441cc329fabd1e44f33feec68d7df }, // -1776
    Multiplier { upper: 0xab893ded286517ac45636ff9c6290786, lower: 0xc0dd0170287fbca7e9d8f66589ed797f }, // -1775
    Multiplier { upper: 0x893a97f0ed1dac89d11c59949e873938, lower: 0x9a4a678ced32fd53217a5eb7a18ac799 }, // -1774
    Multiplier { upper: 0xdb90f31b14fc4742e82d5c20fda5285a, lower: 0x90770c14aeb7fbb83590978c35aad8f5 }, // -1773
    Multiplier { upper: 0xafa728e27730390253577ce73150ed15, lower: 0x405f3cdd58932fc69140793cf7bbe0c4 }, // -1772
    Multiplier { upper: 0x8c85ba4ec5c02d9b75df971f5aa72411, lower: 0x004c30b113a8f305410060fd92fcb3d0 }, // -1771
    Multiplier { upper: 0xe0d5f6e46f99e29256328b655dd839b4, lower: 0xcd46b44e85db1e6ece670195b7fab94c }, // -1770
    Multiplier { upper: 0xb3de5f1d2614b541de8ed5eab179c7c3, lower: 0xd76bc37204af4b8bd85267aaf995610a }, // -1769
    Multiplier { upper: 0x8fe518e41e76f767e53f11888dfb0636, lower: 0x45efcf8e6a25d60979db862261444da2 }, // -1768
    Multiplier { upper: 0xe63b5b069724bf0ca1fe8274165e7056, lower: 0xd64c7f4a436fbcdbf62c09d09ba07c36 }, // -1767
    Multiplier { upper: 0xb82f7c0545b6ff3d4e653529ab7ec045, lower: 0x783d32a1cf8c97165e89a173afb39691 }, // -1766
    Multiplier { upper: 0x9359300437c598fdd850f7548932336a, lower: 0xc6975bb4a60a12784ba14df626294541 }, // -1765
    Multiplier { upper: 0xebc1e66d2608f4c95a1b25540eb6b8aa, lower: 0xd75892baa34350c079021656a3753b9b }, // -1764
    Multiplier { upper: 0xbc9b1ebdb8072a3aae7c1ddcd8922d55, lower: 0x7913a8954f690d66c734deabb5f762e3 }, // -1763
    Multiplier { upper: 0x96e27efe2cd2882ef1fce4b0ad41bddd, lower: 0xfa76207772ba711f05c3e5562b2c4f1c }, // -1762
    Multiplier { upper: 0xf16a64c9e150d9e4b6616de77b9c62fc, lower: 0xc3f033f2512a4e9809396ef04513b1c6 }, // -1761
    Multiplier { upper: 0xc121ea3b1aa714b6f84df185fc7d1bfd, lower: 0x698cf65b7421d879a0fabf269da95b05 }, // -1760
    Multiplier { upper: 0x9a81882f4885aa2bf9d7f46b30641664, lower: 0x5470c515f68179fae72eff5217baaf37 }, // -1759
    Multiplier { upper: 0xf735a6b20da2a9dff62653deb3d35706, lower: 0xed813b5657358ff7d84b321cf2c44b8b }, // -1758
    Multiplier { upper: 0xc5c4855b3e1bbb1991b843188fdc459f, lower: 0x246762ab78f7a65fe03c2817289d093c }, // -1757
    Multiplier { upper: 0x9e36d115cb49627adaf9cf46d97d047f, lower: 0x5052b555fa5fb84cb3635345ba173a97 }, // -1756
    Multiplier { upper: 0xfd2481bc78756a5e2b294ba48f2e6d98, lower: 0x808455565d65f3adebd21ed5f68b90f1 }, // -1755
    Multiplier { upper: 0xca839afd2d2abb7e88edd61d3f5857ad, lower: 0x339d1111e4518fbe5641b244c53c73f4 }, // -1754
    Multiplier { upper: 0xa202e26424222f986d8b11b0ff79dfbd, lower: 0xc2e40da7e9dad96511ce283704305cc3 }, // -1753
    Multiplier { upper: 0x819be8501ce826138ad5a7c0cc617fcb, lower: 0x02500aecbb157ab74171b9c59cf37d69 }, // -1752
    Multiplier { upper: 0xcf5fda19c7d9d685aaef72ce13cf32de, lower: 0x6a19ab145e88c45868b5f608fb1f2f0e }, // -1751
    Multiplier { upper: 0xa5e648149fe1786aef25f571a9728f18, lower: 0x54e155a9e53a36ad209191a0c8e5bf3f }, // -1750
    Multiplier { upper: 0x84b839aa19812d2258eb2ac1545ba5ad, lower: 0x10b44487ea94f88a80747480a0b7cc32 }, // -1749
    Multiplier { upper: 0xd459f5dcf59b7b6a27deaaceed5f6f7b, lower: 0x4ded3a7310ee5a7733ed8734345946b7 }, // -1748
    Multiplier { upper: 0xa9e1917d91492f881fe55572577f8c62, lower: 0xa4bdc85c0d8b7b928ff138f690476bc5 }, // -1747
    Multiplier { upper: 0x87e7a797a76dbfa01984445b7932d6b5, lower: 0x5097d37cd7a2c9420cc0fa5ed9d2bc9e }, // -1746
    Multiplier { upper: 0xd972a5bf72493299c26d3a2bf51e2455, lower: 0x4dbfb8c7bf6adb9ce134c3caf61dfa96 }, // -1745
    Multiplier { upper: 0xadf55165f5075bae35242e8990e4e9dd, lower: 0xd7cc93d2ff88afb0b42a363bf817fbab }, // -1744
    Multiplier { upper: 0x8b2aa784c405e2f1c41cf207a71d87e4, lower: 0xaca3a975993a2626f6882b632cdffc89 }, // -1743
    Multiplier { upper: 0xdeaaa5a139a304b60694b672a4fc0ca1, lower: 0x14390f228ec3703e5740456b7afffa75 }, // -1742
    Multiplier { upper: 0xb2221e1a94826a2b3876f85bb7300a1a, lower: 0x76940c1ba569269845cd0455fbfffb91 }, // -1741
    Multiplier { upper: 0x8e81b1aedd3521bc2d2bf9e2f8f33b48, lower: 0x5edcd67c84541ee037d736ab2ffffc74 }, // -1740
    Multiplier { upper: 0xe402b5e49521cf937b798fd18e51f873, lower: 0xcafaf0c73a203166bfbebddeb3332d86 }, // -1739
    Multiplier { upper: 0xb6689183aa8172dc62c7a6413ea7f9f6, lower: 0x3bfbf3d294e68debcc9897e55c28f138 }, // -1738
    Multiplier { upper: 0x91ed4136220128b04f061e9a98866191, lower: 0xc9965ca8771ed7efd6e0798449ba5a93 }, // -1737
    Multiplier { upper: 0xe97b9b89d001dab3b1a3642a8da3cf4f, lower: 0xa8f09440be97bfe6249a5c06dc5d5db8 }, // -1736
    Multiplier { upper: 0xbac9493b0cce488fc14f83553e1ca5d9, lower: 0x53f3a9cd6546331e83aeb0057d177e2d }, // -1735
    Multiplier { upper: 0x956dd42f3d71d3a6343f9c4431b084ad, lower: 0xdcc2ee3dea9e8f4b9c8bc0046412cb57 }, // -1734
    Multiplier { upper: 0xef16204b9582ec3d2065c6d382b4077c, lower: 0x946b16c977641878fa79333a39b7abbf }, // -1733
    Multiplier { upper: 0xbf44e6a2de0256974d1e38a9355cd2ca, lower: 0x1055abd45f8346c72ec75c2e9492efcc }, // -1732
    Multiplier { upper: 0x9903ebb57e684545d74b60875de3dbd4, lower: 0xd9de23104c69056c256c49bedd425970 }, // -1731
    Multiplier { upper: 0xf4d312bbfd73a20958789a722fd2f954, lower: 0x8fc9d1b3ad74d579d57a0f97c86a28b3 }, // -1730
    Multiplier { upper: 0xc3dc0efccac2e80779fa152826426110, lower: 0x7307daf6245d7794aac80c796d21ba29 }, // -1729
    Multiplier { upper: 0x9cb00bfd6f0253392e61aa868501e740, lower: 0x5c0648c4e9e45faa2239a394574e2e87 }, // -1728
    Multiplier { upper: 0xfab346624b36eb8eb09c440a6e697200, lower: 0x933d413b0fd3cc4369f5d286f216b0d8 }, // -1727
    Multiplier { upper: 0xc88f6b81d5c5893ef3b0366ebebac19a, lower: 0x0f64342f3fdca36921917538c1abc0ad }, // -1726
    Multiplier { upper: 0xa072bc67de37a0ff2959c5256562347b, lower: 0x3f835cf2997d4f874e0df7609aefcd57 }, // -1725
    Multiplier { upper: 0x805bc9ecb1c61a65baae37511de829fc, lower: 0x32cf7d8ee1310c6c3e7192b3af263ddf }, // -1724
    Multiplier { upper: 0xcd5fa97ab609c3d5f77d254e9640432d, lower: 0x1e18c8e49b81ad79fd828452b1d6c965 }, // -1723
    Multiplier { upper: 0xa44c87955e6e3644c5fdb77211cd028a, lower: 0x7e7a3a507c67bdfb313536a88e456deb }, // -1722
    Multiplier { upper: 0x83706c777ebe91d09e6492c1a7d7353b, lower: 0x9861c84063863195c0f75eed3e9df189 }, // -1721
    Multiplier { upper: 0xd24d7a58caca82e763d41e02a62521f8, lower: 0xf3cfa6cd6c09e8ef9b2564aeca964f41 }, // -1720
    Multiplier { upper: 0xa83dfb7a3bd53585e9767e6884ea8193, lower: 0xf63fb8a4566e53f2e284508bd5450c34 }, // -1719
    Multiplier { upper: 0x8697fc61c9775e04bac531ed37220143, lower: 0x2b662d5045250ff5820373a3110409c3 }, // -1718
    Multiplier { upper: 0xd75993cfa8befcd45e084fe1f1d00205, lower: 0x123d154d3b6e7fef366bec381b39a938 }, // -1717
    Multiplier { upper: 0xac47a972ed6597104b39d9818e40019d, lower: 0xa830ddd762beccbf5ebcbcf9af61542d }, // -1716
    Multiplier { upper: 0x89d2edf58ab7ac0d08fb1467a500014a, lower: 0xecf3e4ac4eff0a32b230972e25e7768a }, // -1715
    Multiplier { upper: 0xdc84afef445913480e5e870c3b333544, lower: 0xae53077a17fe76b78380f1e36fd8bdaa }, // -1714
    Multiplier { upper: 0xb06a2659037a75d33eb205a3628f5dd0, lower: 0x8b759f94dffec55f9c6727e92646fe22 }, // -1713
    Multiplier { upper: 0x8d21b84735fb9175cbc19e1c4ed917da, lower: 0x092ae610b332377fb05286541e9f31b5 }, // -1712
    Multiplier { upper: 0xe1cf8d3ebcc5b58946029693b15b595c, lower: 0xdb77d6811eb6bf32b3b73d536431e921 }, // -1711
    Multiplier { upper: 0xb4a60a989704913a9e687876277c477d, lower: 0x7c5fdecdb22bcc288fc5caa91cf4ba81 }, // -1710
    Multiplier { upper: 0x9084d546df36da954b86c6c4ec636c64, lower: 0x637fe5715b563ced3fd16eedb0c3c867 }, // -1709
    Multiplier { upper: 0xe73aeed7cb8af75545a4713b13d24707, lower: 0x05996f1bc556c7e1ffb57e491ad2da3e }, // -1708
    Multiplier { upper: 0xb8fbf2463c6f2c4437b6c0fc0fdb6c05, lower: 0x9e1458e304456cb4cc9131d415757b65 }, // -1707
    Multiplier { upper: 0x93fcc1d1c9f289d02c9233fcd97c566a, lower: 0xe4dd13e8d0378a2a3d40f4a9aac462b7 }, // -1706
    Multiplier { upper: 0xecc79c82dcb742e6adb6b9948f2d5711, lower: 0x6e2e86414d25a9dd2ece5442aad3d125 }, // -1705
    Multiplier { upper: 0xbd6c7d357d5f68b88af89476d8f11274, lower: 0x582538343db7bb1758a51035557640ea }, // -1704
    Multiplier { upper: 0x9789fdc4644c53c6d593a9f8ad8da85d, lower: 0x1350f9c36492fc12ad50d9c4445e9a55 }, // -1703
    Multiplier { upper: 0xf27662d3d3ad52d7bc1f765aaf490d61, lower: 0xb8818f9f07519351154e293a06fdc3bb }, // -1702
    Multiplier { upper: 0xc1f84f0fdc8aa8ac967f91e225d40ab4, lower: 0x939ad94c05dadc40ddd820fb38cb02fc }, // -1701
    Multiplier { upper: 0x9b2d0c0cb06eed56decc74b4eb100890, lower: 0x76157aa337e249cd7e4680c8fa3c0264 }, // -1700
    Multiplier { upper: 0xf848134780b17bbe314721217819a74d, lower: 0x89bbf76b8c9d42e263a40141906003d2 }, // -1699
    Multiplier { upper: 0xc6a00f6c66f462fe8dd280e79347b90a, lower: 0xd4965f893d4a9be84fb66767a6b33642 }, // -1698
    Multiplier { upper: 0x9ee672bd1f29e8cba4a8671fa9062da2, lower: 0x43ab7fa0fdd54986a62b85ec855c2b68 }, // -1697
    Multiplier { upper: 0xfe3d8461cb764145d440a4ff74d6af6a, lower: 0x05df329b2fbba8d77045a314089378a6 }, // -1696
    Multiplier { upper: 0xcb6469e7d5f83437dd0083ff90abbf88, lower: 0x04b28ee28c9620ac59d14f433a0f93b8 }, // -1695
    Multiplier { upper: 0xa2b6bb1fde6029c64a66cfffa6efcc6c, lower: 0xd08ed8b53d44e6f047daa5cf61a60fc7 }, // -1694
    Multiplier { upper: 0x822bc8e64b80216b6eb8a6661f263d23, lower: 0xda0be090fdd0b8c0397bb7d91aeb3fd2 }, // -1693
    Multiplier { upper: 0xd0460e3d4599cf124ac10a3cfea39506, lower: 0x29ac9a81961ac1338f2c595b5e4532ea }, // -1692
    Multiplier { upper: 0xa69e71ca9e14a5a83bcda1ca654faa6b, lower: 0x548a15347815675c7289e115e50428bb }, // -1691
    Multiplier { upper: 0x854b8e3bb1aa1e202fd7b4a1eaa621ef, lower: 0x76d4ddc3934452b05ba180de50d02096 }, // -1690
    Multiplier { upper: 0xd545b05f82a9c9cd195921031109cfe5, lower: 0x8aee2f9f5206eab3c5cf3496e7b36756 }, // -1689
    Multiplier { upper: 0xaa9e26b2ceee3b0a7aadb4027407d984, lower: 0x6f24f2e5db38bbc304a5c3abec8f85de }, // -1688
    Multiplier { upper: 0x887e855bd8be95a1fbbe299b9006479d, lower: 0x25b728b7e293c968d0849c898a0c6b18 }, // -1687
    Multiplier { upper: 0xda640892f464229cc5fd0f5f4cd6d8fb, lower: 0x6f8b74596a860f0e1a6dc742767a44f3 }, // -1686
    Multiplier { upper: 0xaeb66d425d1ce87d6b30d9190a457a62, lower: 0xbfa2c37abb9e7271aebe3901f861d0c3 }, // -1685
    Multiplier { upper: 0x8bc52435174a539788f3e0e0d50461e8, lower: 0x994f02c896185b8e2564fa67f9e7da36 }, // -1684
    Multiplier { upper: 0xdfa1d3882543b8f274b967ce21a09ca7, lower: 0x5bb19e0dbcf3c5b03bd4c3d98fd95d22 }, // -1683
    Multiplier { upper: 0xb2e7dc6cea9c93f52a2deca4e7b3b085, lower: 0xe2f47e7163f637c02fdd697ad97ab0e8 }, // -1682
    Multiplier { upper: 0x8f1fe38a554a0ff754f18a1d86295a04, lower: 0xb5906527832b5fccf31787957ac88d87 }, // -1681
    Multiplier { upper: 0xe4ffd276eedce65887e8dcfc09dbc33a, lower: 0xbc1a3b726b789947eb58d8ef2ada7c0a }, // -1680
    Multiplier { upper: 0xb7330ec58be3eb7a0653e3fcd4afcf62, lower: 0x3014fc5b892d476cbc4713f288aec9a2 }, // -1679
    Multiplier { upper: 0x928f3f046fe9892e6b764ffd76f30c4e, lower: 0x8cdd96afa0f105f0969f43286d58a14f }, // -1678
    Multiplier { upper: 0xea7ecb3a4ca8db7d78bd4cc8be51ad4a, lower: 0x7afc244c34b4d64dbdcb9ea7155a9bb1 }, // -1677
    Multiplier { upper: 0xbb98a2950a20af9793caa3d3cb748aa1, lower: 0xfbfce9d69090ab7164a2e552777bafc1 }, // -1676
    Multiplier { upper: 0x9613b544081a2612dca21ca96f906ee7, lower: 0xfcca54aba6da22c11d4f1ddb92c95967 }, // -1675
    Multiplier { upper: 0xf01f886cd9c3701e2dd02ddbe5b3e4a6, lower: 0x6143baac3e29d134fbb1c95f514228a4 }, // -1674
    Multiplier { upper: 0xc01939f0ae35f34b57d9be49848fea1e, lower: 0xb4362ef031bb0dc3fc8e3ab2a7682084 }, // -1673
    Multiplier { upper: 0x99adc7f3be918f6f797afea136d98818, lower: 0x902b58c027c8d7cffd3e955bb9201a03 }, // -1672
    Multiplier { upper: 0xf5e2d985fdb5b24bf591976857c2735a, lower: 0x80455acd0c748c7ffb97555f8e99c338 }, // -1671
    Multiplier { upper: 0xc4b57ad197c48ea32adadf86ac9b8f7b, lower: 0x99d11570d6c3a3999612aab2d87b0293 }, // -1670
    Multiplier { upper: 0x9d5dfbdadfd0721c2248b2d223afa5fc, lower: 0x7b0daac0abcfb614780eeef579fc020f }, // -1669
    Multiplier { upper: 0xfbc992f7cc80b6936a0deae9d2b2a32d, lower: 0x91af779aac7f89ba59b17e558ff99ce5 }, // -1668
    Multiplier { upper: 0xc96e0f2ca39a2ba921a4bbee4228828a, lower: 0xdaf2c61556cc6e2eae279844732e171e }, // -1667
    Multiplier { upper: 0xa124d8f082e1bc874e1d632501ba0208, lower: 0xaf289e7778a38b588b52e036c28b45b1 }, // -1666
    Multiplier { upper: 0x80ea4726cf1afd390b4ab5b73494ce6d, lower: 0x58ed4b92c6e93c46d5dbe692353c37c1 }, // -1665
    Multiplier { upper: 0xce43a50ae4f7fb8e7877892520ee1715, lower: 0x5b1545b7a4a86071562ca41d21f9f2cf }, // -1664
    Multiplier { upper: 0xa502ea6f1d932fa52d2c6db74d8b45aa, lower: 0xaf4437c61d53805aab56e9b0e7fb28a5 }, // -1663
    Multiplier { upper: 0x84025525b1428c8424238af90ad5d155, lower: 0x59035fd1b10f99e222abee271ffc2084 }, // -1662
    Multiplier { upper: 0xd336eea2b5374739d36c118e77bc8222, lower: 0x2805661c4e7f5c9d044649d8332d00d3 }, // -1661
    Multiplier { upper: 0xa8f8bee890f905c7dc567471f9639b4e, lower: 0x866ab816a532b07d9d0507e028f0cd76 }, // -1660
    Multiplier { upper: 0x872d6586da60d16cb04529f4c782e2a5, lower: 0x385560121dc226cae404064ced8d712b }, // -1659
    Multiplier { upper: 0xd848a2715d67b57ab3a1dcbad8d16aa1, lower: 0xf3bbcce9c936a477d339a3ae48e24eab }, // -1658
    Multiplier { upper: 0xad06e85ab11fc462294e4a2f13dabbb4, lower: 0xc2fca3ee3a921d2ca8fae9583a4ea556 }, // -1657
    Multiplier { upper: 0x8a6bed155a7fd04e8771d4f27648962a, lower: 0x3596e98b620e7dbd53fbede02ea55112 }, // -1656
    Multiplier { upper: 0xdd797b555d994d4a724fbb1d8a0dbd10, lower: 0x55be42789ce3fc621ff97c99e43bb4e9 }, // -1655
    Multiplier { upper: 0xb12dfc444ae10aa1f50c95b13b3e30d9, lower: 0xde31cec6e3e996b4e661307b1cfc90ba }, // -1654
    Multiplier { upper: 0x8dbe6369d580d54e5da3aaf42f64f3e1, lower: 0x7e8e3f058321455d851a8d2f4a63a6fc }, // -1653
    Multiplier { upper: 0xe2ca38a9559aeee3c905de537f07ec9b, lower: 0xfdb064d59e9ba22f3b5daeb2109f7192 }, // -1652
    Multiplier { upper: 0xb56e93baaae258b63a6b1842cc0656e3, lower: 0x3159ea447ee2e825c917bef4da1927a8 }, // -1651
    Multiplier { upper: 0x912542fbbbe846f82ebc1368a3384582, lower: 0x8de18836cbe8b9b7d412ff2a48141fba }, // -1650
    Multiplier { upper: 0xe83b9e5f930d3e59e4601f0dd1f3a26a, lower: 0x7c9c0d2479745c5953519843a6869929 }, // -1649
    Multiplier { upper: 0xb9c94b7fa8d76514b6b34c0b0e5c81ee, lower: 0xca1670e9fac37d1442a7ad02eb9ee0ee }, // -1648
    Multiplier { upper: 0x94a10932ed791daa2bc2a33c0b7d34bf, lower: 0x0811f3ee6235fda9ceec8a68bc7f1a58 }, // -1647
    Multiplier { upper: 0xedce751e48c1c910460438601261edfe, lower: 0x734fecb09d232f7617e0dd7460cb5d59 }, // -1646
    Multiplier { upper: 0xbe3ec4183a34a0d9d19cf9e6751b24cb, lower: 0x8f7323c07db5bf91acb3e45d1a3c4aae }, // -1645
    Multiplier { upper: 0x98323679c82a1a47dae3fb1ec415b709, lower: 0x3f8f4fcd315e32daf08fe9e414fd088b }, // -1644
    Multiplier { upper: 0xf3838a5c73769072f7d32b646cef8b41, lower: 0xff4bb2e1e896b7c4b4197639bb2e7412 }, // -1643
    Multiplier { upper: 0xc2cfa1e38f920d28c642891d23f2d5ce, lower: 0x65d628b4ba122c9d5ce12b61628b900e }, // -1642
    Multiplier { upper: 0x9bd94e4fa60e70ed6b686db0e98f1171, lower: 0xeb11ba2a2e74f07de3e755e78209400c }, // -1641
    Multiplier { upper: 0xf95bb07f70171b1578a715e7dc181be9, lower: 0x781c5d104a54b3fc9fd8897269a86679 }, // -1640
    Multiplier { upper: 0xc77c8d32c0127c112d5277ecb0134987, lower: 0x9349e40d0843c3307fe06df52153852d }, // -1639
    Multiplier { upper: 0x9f96d75bccdb96742441f98a2675d46c, lower: 0x75d4b670d36968f3998057f74ddc6a8b }, // -1638
    Multiplier { upper: 0xff57bef947c5bd86a0698f4370bc8713, lower: 0xefbabd8152424185c266f3254960aa77 }, // -1637
    Multiplier { upper: 0xcc4632610637cad219ee0c35f3ca05a9, lower: 0x8c9564677501ce049b858f5107808860 }, // -1636
    Multiplier { upper: 0xa36b5b80d1c63bdb47f1a35e5ca19e21, lower: 0x3d445052c401719d4937a5da6c66d380 }, // -1635
    Multiplier { upper: 0x82bc4933db04fcaf6cc14f7eb0814b4d, lower: 0xca9d0d0f03345ae43a92eb1523857600 }, // -1634
    Multiplier { upper: 0xd12d41ec91a1944be1354bfde7354549, lower: 0x442e7b4b3853c4a05db7de8838d58999 }, // -1633
    Multiplier { upper: 0xa75767f07481436fe75dd664b8f76aa1, lower: 0x035862a2937636e6b15fe539c7113ae1 }, // -1632
    Multiplier { upper: 0x85df8659f6cdcf8cb917deb6fa5f8880, lower: 0xcf79e8820f91c5855ab31dc7d2742f1b }, // -1631
    Multiplier { upper: 0xd632708ff1494c145b596457f6ff40ce, lower: 0x18c30d9ce5b608d55deb62d950b9e4f7 }, // -1630
    Multiplier { upper: 0xab5b8d3ff43aa3437c4783799265cd71, lower: 0xad68d7b0b7c4d3dde4bc4f144094b72c }, // -1629
    Multiplier { upper: 0x89160a99902ee902c9d2cf94751e3df4, lower: 0x8aba4626f96a4317ea303f4366dd5f57 }, // -1628
    Multiplier { upper: 0xdb56775c19e4a804761e18ed88306320, lower: 0xddf6d6a4c2439e8ca9e6cb9f0afbcbbd }, // -1627
    Multiplier { upper: 0xaf785f7ce183b99d2b4b47246cf38280, lower: 0xb19245509b694ba3bb1f094c08c96fcb }, // -1626
    Multiplier { upper: 0x8c604c63e79c947dbc3c38e9f0c2cecd, lower: 0x5adb6aa6e2baa2e9627f3aa33a3abfd6 }, // -1625
    Multiplier { upper: 0xe09a13d30c2dba62c6c6c1764e047e15, lower: 0x5e2bddd7d12a9e423731f76b905dffbc }, // -1624
    Multiplier { upper: 0xb3ae76427024951bd2389ac50b36cb44, lower: 0x4b564b130dbbb1ce928e5f89404b32fd }, // -1623
    Multiplier { upper: 0x8fbec501f350774974fa156a6f5f0903, lower: 0x6f783c0f3e2fc1720ed84c6dcd08f597 }, // -1622
    Multiplier { upper: 0xe5fe08031ee7254254c3557718980e6b, lower: 0xe58d2ce5304c68b67e26e0afae74bc25 }, // -1621
    Multiplier { upper: 0xb7fe6ccf4bec1dceaa35ddf8e079a523, lower: 0x1e0a8a50f37053c531b8b3bfbec3c9b7 }, // -1620
    Multiplier { upper: 0x9331f0a5d6567e3eee917e60b394841c, lower: 0x18086ea72926a96a8e2d5c9965696e2c }, // -1619
    Multiplier { upper: 0xeb831aa2f08a6397e41bfd6785ba6cf9, lower: 0xc00d7dd841d7757749e22dc23bdbe379 }, // -1618
    Multiplier { upper: 0xbc68e21bf3a1e94650166452d161f0c7, lower: 0xccd797e034ac5df907e8249b63164f94 }, // -1617
    Multiplier { upper: 0x96ba4e7cc2e7edd1d9ab8375744e5a39, lower: 0x70ac79802a237e60d3201d491c11d944 }, // -1616
    Multiplier { upper: 0xf12a172e04a6494fc2ac0588ba16f6c2, lower: 0x4de0c266a9d263ce1e99c874f9b6286c }, // -1615
    Multiplier { upper: 0xc0ee78f19d51d43fcef0046d61abf89b, lower: 0x71809b8554a84fd8187b06c3faf82056 }, // -1614
    Multiplier { upper: 0x9a5860c14aa7dcffd8c0038ab48993af, lower: 0x8e007c6aaa203fe013959f032f2ce6ac }, // -1613
    Multiplier { upper: 0xf6f3ce02110c94cc8e0005aaba75b918, lower: 0xe333fa444366cc99b8ef64d1e514a446 }, // -1612
    Multiplier { upper: 0xc58fd801a73d43d6d8000488952afa7a, lower: 0x4f5cc8369c523d47c725ea418410836b }, // -1611
    Multiplier { upper: 0x9e0cacce1f64364579999d3a10ef2ec8, lower: 0x3f7d6cf87d0e976c9f51883469a6cf89 }, // -1610
    Multiplier { upper: 0xfce1147cff06bd3bf5c29529b4b1e473, lower: 0x98c8ae5a61b0f247654f4053dc3e18db }, // -1609
    Multiplier { upper: 0xca4da9fd98d230fcc49baa87c3c1838f, lower: 0xad6d58484e2728391dd90043169813e2 }, // -1608
    Multiplier { upper: 0xa1d7bb31470e8d9703afbb9fcfce02d9, lower: 0x578aad06a4ec202db17a669c1213431c }, // -1607
    Multiplier { upper: 0x8179628dd2720adf36262fb30ca4cf14, lower: 0x46088a6bb7234cf15ac8521674dc35b0 }, // -1606
    Multiplier { upper: 0xcf289dafb71cde31f03d191e7aa14b53, lower: 0xa340dd79250547e891408357216055e6 }, // -1605
    Multiplier { upper: 0xa5ba17bfc5b0b1c18cfdadb1fbb43c42, lower: 0xe900b12db7376cba0dcd35df4de6ab1e }, // -1604
    Multiplier { upper: 0x8494dfcc9e26f49ad73157c19629c9cf, lower: 0x20cd5a8af8f923c80b0a917f718555b2 }, // -1603
    Multiplier { upper: 0xd4216614303e542af1e88c68f042dc7e, lower: 0x9ae22a77f4c1d2d9ab441bff1c08891c }, // -1602
    Multiplier { upper: 0xa9b451a9c031dcef27ed3d20c0357d32, lower: 0x1581bb932a34a8ae229ce3327cd3a0e4 }, // -1601
    Multiplier { upper: 0x87c37487ccf4b0bf532430e7002aca8e, lower: 0x779afc75bb5d53be82171c2863dc80b6 }, // -1600
    Multiplier { upper: 0xd938ba72e18781321ea04e3e66aaddb0, lower: 0xbf5e60bc5efbb930d024f9da3960cdf0 }, // -1599
    Multiplier { upper: 0xadc6fb8f1ad2cdc1b219d831ebbbe48d, lower: 0x65e51a304bfc94270cea617b611a3e5a }, // -1598
    Multiplier { upper: 0x8b05960c15757167c1ae468e562fea0a, lower: 0xb7ea7b59d663a9b8d721e795e74831e1 }, // -1597
    Multiplier { upper: 0xde6f5679bbef1bd935e3a416f04ca9aa, lower: 0xbfdd92295705dc5af1cfd8efd8738302 }, // -1596
    Multiplier { upper: 0xb1f2ab949658e3142b1c83458d0a2155, lower: 0x664adb54459e49e25b0cad8cad29359b }, // -1595
    Multiplier { upper: 0x8e5bbc76dead827688e39c37a4081aaa, lower: 0xb83be2a9d14b6e4eaf3d57a3bdba9149 }, // -1594
    Multiplier { upper: 0xe3c5fa57caaf37240e38f9f2a00cf777, lower: 0x8d2c9ddc82124a177ec88c392f90e875 }, // -1593
    Multiplier { upper: 0xb637fb796ef292833e93fb28800a5f92, lower: 0xd756e4b0680ea1ac656d3cfa8c73ed2a }, // -1592
    Multiplier { upper: 0x91c662c78bf5420298766286ccd51942, lower: 0x45df1d59ecd88156b78a972ed6c32422 }, // -1591
    Multiplier { upper: 0xe93d6ad8dfeed0042723d0d7ae21c203, lower: 0xa2fe955cae2735578c10f1e48ad1d369 }, // -1590
    Multiplier { upper: 0xba9788ad7ff2400352830d79581b019c, lower: 0x8265444a24ec2aac700d8e506f0e42bb }, // -1589
    Multiplier { upper: 0x954606f133283335db9c0ac779af347d, lower: 0x351dd03b50bceef059a471d9f271cefc }, // -1588
    Multiplier { upper: 0xeed67181eb738522f8f9aad8c2b1ed95, lower: 0x21c94d2bb4617e4d5c3a4fc31d82e4c6 }, // -1587
    Multiplier { upper: 0xbf11f467ef8f9db593faef13cef4be10, lower: 0xe7d43dbc904dfea449c83fcf4acf1d6b }, // -1586
    Multiplier { upper: 0x98db29ecbfa617c4766258dca590980d, lower: 0x86436496d9d7fee9d4a0330c3bd8e456 }, // -1585
    Multiplier { upper: 0xf491dcadff70260723d08e2dd5b4267c, lower: 0x0a056dbe295997dc8766b81392f4a089 }, // -1584
    Multiplier { upper: 0xc3a7e3be65f3519f4fda0b57de29b863, lower: 0x3b378afe877adfe39f85600fa8c3b3a1 }, // -1583
    Multiplier { upper: 0x9c864fcb84c2a7b2a64809131821604f, lower: 0x6292d5986c624cb61937800c8702f61a }, // -1582
    Multiplier { upper: 0xfa707fac079dd91dd6d9a81e8d0233b2, lower: 0x375155c0ad6a14568ebf33473e6b235d }, // -1581
    Multiplier { upper: 0xc859ffbcd2e4adb178ae201870ce8fc1, lower: 0xc5daab008abb437872328f6c31ef4f7e }, // -1580
    Multiplier { upper: 0xa047ffca42508af4608b4ce05a3ed967, lower: 0xd17bbc006efc35f9f4f53f89c18c3f98 }, // -1579
    Multiplier { upper: 0x8039996e9b73a25d1a090a4d14ff1453, lower: 0x0dfc9666bf302b2e5d90ffa167a36613 }, // -1578
    Multiplier { upper: 0xcd28f57dc585d094f674dd4821982084, lower: 0xe32dbd7131e6ab7d628199023f6bd685 }, // -1577
    Multiplier { upper: 0xa420c4649e04a6dd91f7176ce7ace6d0, lower: 0xb5be31275b1eef9782014734ff89786a }, // -1576
    Multiplier { upper: 0x834d69ea1803b8b141927923ec8a5240, lower: 0x9164f41f7c18bfac680105c3ffa12d22 }, // -1575
    Multiplier { upper: 0xd2157643599f8de868ea5b6cadaa1d34, lower: 0x1bd4b9cbf9c132ad7334d60665ceae9d }, // -1574
    Multiplier { upper: 0xa8112b69147fa4b9ed884923be21b0f6, lower: 0x7caa2e3cc7cdc2245c2a44d1eb0bbee4 }, // -1573
    Multiplier { upper: 0x867422ba76cc83c7f139d41c981af3f8, lower: 0x63bb58309fd7ce837cee9d74bc096583 }, // -1572
    Multiplier { upper: 0xd7203790be14060cb5295360f35e5327, lower: 0x05f88d1a99594a6bfb176254600f08d1 }, // -1571
    Multiplier { upper: 0xac19c60d64dcd1a3c4210f80c2b1dc1f, lower: 0x37fa0a7bade1085662791b76b33f3a41 }, // -1570
    Multiplier { upper: 0x89ae380ab7170e1c9ce73f9a355b167f, lower: 0x5ffb3b9624b406ab81fa7c5ef5cc2e9b }, // -1569
    Multiplier { upper: 0xdc49f3445824e360fb0b98f6bbc4f0cb, lower: 0xccc52c236decd778cff72d64bc79e42a }, // -1568
    Multiplier { upper: 0xb03b290379b71c4d95a2e0c56303f3d6, lower: 0x3d6a89b5f18a45fa3ff8f11d6394b688 }, // -1567
    Multiplier { upper: 0x8cfc20cf94927d0ade1be7044f365cab, lower: 0x64553af7f46e9e61ccc7274ab6109207 }, // -1566
    Multiplier { upper: 0xe19367b28750c811635fd806e523c778, lower: 0xa0885e59871763cfae0b7211234db671 }, // -1565
    Multiplier { upper: 0xb475ec8ed2a706744f7fe005841c9f93, lower: 0xb3a04b7ad2791ca624d5f4da82a491f4 }, // -1564
    Multiplier { upper: 0x905e56d8a8859ec372ccb3379ce3b2dc, lower: 0x8fb36f95752db084ea44c3e2021d4190 }, // -1563
    Multiplier { upper: 0xe6fd57c10da2979f1e1451f2949f8494, lower: 0x191f18ef21e2b407dd3ad303369535b3 }, // -1562
    Multiplier { upper: 0xb8caac9a714edfb27e76a7f543b2d076, lower: 0x7a7f4725b4b55cd317624268f8775e29 }, // -1561
    Multiplier { upper: 0x93d556e1f43f195b985eecc43628a6c5, lower: 0x2ecc38eaf6f77d75ac4e9b872d2c4b54 }, // -1560
    Multiplier { upper: 0xec888b032064f55f5a317ad389daa46e, lower: 0xb146c177f18bfbef7a175f3eaead4553 }, // -1559
    Multiplier { upper: 0xbd3a08cf4d1d911914f46242d4aee9f2, lower: 0x276bcdf98e0996592e7918fef2243776 }, // -1558
    Multiplier { upper: 0x9761a0a5d74ada7a7729e83576f254c1, lower: 0xb9230b2e0b3adeadbec747325b502c5e }, // -1557
    Multiplier { upper: 0xf235cdd6254490c3f1dca6bbf183bacf, lower: 0x8e9e7849ab916449313ed8509219e097 }, // -1556
    Multiplier { upper: 0xc1c4a4ab5103a70327e3b8965acfc8a6, lower: 0x0bb1f9d489411d075a98ad0d41ae4d45 }, // -1555
    Multiplier { upper: 0x9b03b6ef7402ec02864fc6deaf0ca084, lower: 0xd627fb106dcdb0d2aee08a7101583dd1 }, // -1554
    Multiplier { upper: 0xf805f17f2004acd0d6e60afde4e100d4, lower: 0x89d991b3e2e2b4844b00dd819bc062e8 }, // -1553
    Multiplier { upper: 0xc66b2798e66a23da4584d597ea4d9a43, lower: 0xa17adaf64f1bc39d08cd7e014966b587 }, // -1552
    Multiplier { upper: 0x9ebc1fad8521b648379d77acbb714836, lower: 0x1ac8af2b727c9c7da0a464cdd4522ad2 }, // -1551
    Multiplier { upper: 0xfdf9cc48d502bd4058fbf2adf8b54056, lower: 0x9141184583fa93fc343a3ae2ed504483 }, // -1550
    Multiplier { upper: 0xcb2e3d0710cefdcd13fcc224c6f766ab, lower: 0xa767469e032edcc9c361c8b58aa69d36 }, // -1549
    Multiplier { upper: 0xa28b6405a70bfe3da99701b70592b889, lower: 0x52b9054b35bf1707cf816d5e08854a92 }, // -1548
    Multiplier { upper: 0x82091cd1526ffe97badf34926adbc6d4, lower: 0x422d9dd5c498df3972cdf11806d10875 }, // -1547
    Multiplier { upper: 0xd00e94821d7ffdbf916520ea4492d7ba, lower: 0x037c2fbc6dc16528b7afe826714e73ed }, // -1546
    Multiplier { upper: 0xa6721068179997cc7450e721d0757961, lower: 0x9c6359638b011dba2c8cb9b85aa5298b }, // -1545
    Multiplier { upper: 0x85280d2012e1463d29da528173912de7, lower: 0xb04f7ab608cdb161bd3d61604884213c }, // -1544
    Multiplier { upper: 0xd50ce1cceb0209fb762a1d9bec1b7ca5, lower: 0xe6e5912341491bcf952f0233a739cec6 }, // -1543
    Multiplier { upper: 0xaa70b4a3ef34d4c92b54e47cbce2ca1e, lower: 0x525140e901074972ddbf34f61f617238 }, // -1542
    Multiplier { upper: 0x885a2a1cbf5d770755dd8396fd823b4b, lower: 0x750dcd873405d45be498f72b4c4df4fa }, // -1541
    Multiplier { upper: 0xda29dcfacbc8be7222fc05be6269f878, lower: 0xbb4948d8533c86f96dc18b787a1654c3 }, // -1540
    Multiplier { upper: 0xae87e3fbd63a31f4e8c99e31e854c6c6, lower: 0xfc3aa0ad0f639f2df167a2c6c811dd69 }, // -1539
    Multiplier { upper: 0x8b9fe99644fb5b2a53d47e8e5377056b, lower: 0xfcfbb3bda5e94c24c11fb56bd3417ded }, // -1538
    Multiplier { upper: 0xdf66428a07f891dd52ed974a1f24d579, lower: 0x94c5ec62a30ee03ace9922461ecf2fe2 }, // -1537
    Multiplier { upper: 0xb2b8353b3993a7e44257ac3b4c1d7794, lower: 0x7704bd1bb5a5802f0badb504e5728cb5 }, // -1536
    Multiplier { upper: 0x8ef9c42f6142ecb69b795695d67df943, lower: 0x926a30e2f7b799bf3c8af7371df53d5e }, // -1535
    Multiplier { upper: 0xe4c2d37f0204adf0f8c22422f0c98ed2, lower: 0x83dd1b04bf8c2931fa77f1f1c988622f }, // -1534
    Multiplier { upper: 0xb70242cc019d57f3fa34e9b58d6e0bdb, lower: 0x9cb0e26a32d6875b2ec65b27d46d1b59 }, // -1533
    Multiplier { upper: 0x92683570014aacc32e90baf7a458097c, lower: 0x7d5a4ebb5bded2af589eaf5310574914 }, // -1532
    Multiplier { upper: 0xea4055800211146b7db45e5906f34260, lower: 0xc8907df892fe1de55a977eeb4d5874ed }, // -1531
    Multiplier { upper: 0xbb66aaccce741055fe29e514058f684d, lower: 0x6d4064c6dbfe7e511545ff22a446c3f1 }, // -1530
    Multiplier { upper: 0x95ebbbd70b900d11982184100472b9d7, lower: 0x8a99ea38affecb741104cc1bb69f0327 }, // -1529
    Multiplier { upper: 0xefdf92f1ac19ae828d026ce66d845c8c, lower: 0x10f6438de66478b9b4d479c5f0fe6b71 }, // -1528
    Multiplier { upper: 0xbfe60f27bce1586870cebd852469e3a3, lower: 0x40c502d7eb8393c7c3dd2e37f3febc5b }, // -1527
    Multiplier { upper: 0x9984d8ec971aad205a3efe041d2182e9, lower: 0x009d9bdfef9c7639697dbe93299896af }, // -1526
    Multiplier { upper: 0xf5a15b1424f77b66f6cb300695026b0e, lower: 0x676292ffe5c7238f0f2f9751dc27577e }, // -1525
    Multiplier { upper: 0xc48115a9b72c62b8c56f599edd9b88d8, lower: 0x52b54266516c1c72728c790e49b912cb }, // -1524
    Multiplier { upper: 0x9d3411549289e893d125e14be47c6d79, lower: 0xdbc4351ea789b05b8ed6c73ea160dbd6 }, // -1523
    Multiplier { upper: 0xfb868220ea7640ec81d635463a60af29, lower: 0x5fa054fdd8dc4d5f4af13eca9bce2c89 }, // -1522
    Multiplier { upper: 0xc938681a552b67239b11c4382eb3bf54, lower: 0x4c8043fe4716a44c3bf4323bafd823a1 }, // -1521
    Multiplier { upper: 0xa0f9ece1ddbc5282e2749cf9bef632a9, lower: 0xd6cd0331d27883702ff68e96264682e7 }, // -1520
    Multiplier { upper: 0x80c7f0b4b163753581f6e3faff2b5bbb, lower: 0x123d9c27db939c59bff87211b83868b9 }, // -1519
    Multiplier { upper: 0xce0cb4544f0588559cbe399198455f91, lower: 0xb6c8f9d95f5293c2ccc0b682c05a4128 }, // -1518
    Multiplier { upper: 0xa4d6f6a9d8d139de16fe947479d11941, lower: 0x5f072e477f7543023d66f86899e1cdba }, // -1517
    Multiplier { upper: 0x83df2bbb13da94b1abfedd29fb0dadcd, lower: 0xe59f583932c4359b64526053ae4e3e2e }, // -1516
    Multiplier { upper: 0xd2feac5e862a8782accafb765e7c4949, lower: 0x6f6559f51e06bc2bd3b70085e3b0637d }, // -1515
    Multiplier { upper: 0xa8cbbd186b5539355708c92b7ec9d43a, lower: 0xbf8447f74b389689762c006b1c8d1c64 }, // -1514
    Multiplier { upper: 0x870964138910fa91126d6dbc656e4362, lower: 0x32d03992a293aba12b5666bc16d749ea }, // -1513
    Multiplier { upper: 0xd80f0685a81b2a81b7157c60a24a0569, lower: 0xeae6c2843752ac351223d79357bedca9 }, // -1512
    Multiplier { upper: 0xacd8d204867c22015f44638081d4d121, lower: 0x88b89b9cf90ef02a74e97942ac98b087 }, // -1511
    Multiplier { upper: 0x8a470e6a05301b344c36b60067dd741a, lower: 0xd3c6e2e3fa7259bb90bac7688a13c06c }, // -1510
    Multiplier { upper: 0xdd3e7d766eb35eba138abccd72fbecf7, lower: 0xb93e37d32a508f92812ad8a74352cd7a }, // -1509
    Multiplier { upper: 0xb0fecac5255c4bc80fa230a45bfcbd92, lower: 0xfa982ca8eea6d94200ef13b902a8a462 }, // -1508
    Multiplier { upper: 0x8d98a2375116a30672e826e9e33097a8, lower: 0xc879bd53f21f1434cd8c0fc73553b6b5 }, // -1507
    Multiplier { upper: 0xe28dd05881bdd1a3eb0d0b0fd1e7590e, lower: 0x0d8f95531cfe86bae279b2d85552bded }, // -1506
    Multiplier { upper: 0xb53e4046ce3174832270d5a64185e0d8, lower: 0x0ad944427d986bc8b52e28ad110efe58 }, // -1505
    Multiplier { upper: 0x90fe99d23e8df6cf4ec0aaeb679e4d79, lower: 0xa24769cecae0563a2a8b53bda73f31e0 }, // -1504
    Multiplier { upper: 0xe7fdc2e9fdaff14bb13444abd8fd48c2, lower: 0x9d3f0fb1449a239044121f95d8651c99 }, // -1503
    Multiplier { upper: 0xb997cf2197bff43c8dc36a2313fdd3ce, lower: 0xe43272f436e1b60d0341b2de46b74a14 }, // -1502
    Multiplier { upper: 0x94797281463329ca0b02bb4f4331763f, lower: 0x1cf528c35f1af80a69015be5055f6e77 }, // -1501
    Multiplier { upper: 0xed8f1d9ba3850fa9ab3792186b8256cb, lower: 0x61884138982b26770e6893080898b0bd }, // -1500
    Multiplier { upper: 0xbe0c17afb6040c87bc2c74e05601df09, lower: 0x1ad3676079bc1ec5a52075a006e08d64 }, // -1499
    Multiplier { upper: 0x9809ac8c919cd6d2fcf05d8044ce4c07, lower: 0x48a91f8061634bd150e6c4800580711d }, // -1498
    Multiplier { upper: 0xf342adadb5c7be1e6180959a07b079a5, lower: 0x410e98cd689edfb54e3e07333c00b4fb }, // -1497
    Multiplier { upper: 0xc29bbe24916c98184e0077ae6c8d2e1d, lower: 0xcda5470aba18b2f771cb38f5c99a2a63 }, // -1496
    Multiplier { upper: 0x9bafcb507456e0137199f95856d75817, lower: 0xd7b76c0894e08f2c5b08fa5e3ae1bb82 }, // -1495
    Multiplier { upper: 0xf919454d86f16685828ff55a248bc026, lower: 0x25f2467421674b7a2b419096c49c5f36 }, // -1494
    Multiplier { upper: 0xc7476aa46bf4520468732aae83a3001e, lower: 0x84c1d1f6811f6f94ef67a6df03b04c2c }, // -1493
    Multiplier { upper: 0x9f6c5550565d0e69ed28eef202e8cce5, lower: 0x370174c534192610bf861f18cfc03cf0 }, // -1492
    Multiplier { upper: 0xff13bbb3bd61b0a97b74b18337dae16e, lower: 0xbe68bad520283ce798d69827b2cd2e4c }, // -1491
    Multiplier { upper: 0xcc0fc95c97815a212f908e0293158125, lower: 0x652095774cecfd8613dee01fc23dbea3 }, // -1490
    Multiplier { upper: 0xa33fd44a12cde1b4260d3e6875aacdb7, lower: 0x841a112c3d8a646b4318b34c9b649883 }, // -1489
    Multiplier { upper: 0x829976a1a8a4b4901e70feb9f7bbd7c6, lower: 0x03480dbcfe085055cf46f5d6e2b6e069 }, // -1488
    Multiplier { upper: 0xd0f58a9c4107874cfd81978ff2c62609, lower: 0x9ed9af94c9a6e6efb20b22f16abe33db }, // -1487
    Multiplier { upper: 0xa72ad549cd9f9f70cace12d98f04eb3a, lower: 0xe57af2dd6e1f1f262808e8c12231c315 }, // -1486
    Multiplier { upper: 0x85bbddd4a47fb2c0a23e757ad8d0bc2f, lower: 0x1dfbf57df1b27f51b9a0ba341b5b0278 }, // -1485
    Multiplier { upper: 0xd5f962edd3ff846769fd88c48e1ac6b1, lower: 0xc99322631c50cbb5f5cdf6b9c55e6a59 }, // -1484
    Multiplier { upper: 0xab2de8be4332d052bb313a36d8156bc1, lower: 0x6e0f4eb5b040a2f7f7d7f8949de521e1 }, // -1483
    Multiplier { upper: 0x88f186fe9c28a6a895c0fb5f13445634, lower: 0x580c3ef7c033b5932cacc6dd4b1db4b4 }, // -1482
    Multiplier { upper: 0xdb1c0b30f9daa440ef9b2bcb5206f053, lower: 0xc01397f2cd1f88eb7aae0afbab62bab9 }, // -1481
    Multiplier { upper: 0xaf49a28d94aee9cd8c7c23090e6bf376, lower: 0x3342dff570e60722c88b3bfc891bc894 }, // -1480
    Multiplier { upper: 0x8c3ae87143bf21713d301c073ebcc2c4, lower: 0xf5cf1991271e6c1bd3a29663a0e306dd }, // -1479
    Multiplier { upper: 0xe05e40b53931cf1b9519c671fdfad13b, lower: 0x22e4f5b50b63e02c85d0f09f67d1a494 }, // -1478
    Multiplier { upper: 0xb37e9a2a9427d8e2ddae385b3195742f, lower: 0x4f1d915da2b64cf06b0d8d4c530e1d44 }, // -1477
    Multiplier { upper: 0x8f987b55435313e8b1582d15c1445cf2, lower: 0xa5b14117b55ea3f388d7a43d0f3e7dd0 }, // -1476
    Multiplier { upper: 0xe5c0c5553884eca78226ae89353a2e51, lower: 0x091b9b5922310652748c39fb4b972fb3 }, // -1475
    Multiplier { upper: 0xb7cd6aaa939d8a1f9b52253a90fb5840, lower: 0xd41615e0e8273841f6d694c90945bfc2 }, // -1474
    Multiplier { upper: 0x930abbbba94ad4e615db50fba72f79cd, lower: 0x76781180b9b8f9ce5f1210a0d437cc9b }, // -1473
    Multiplier { upper: 0xeb445f92a877bb09bc921b2c3eb25c7b, lower: 0xf0c01c012927f616fe834dce2059475f }, // -1472
    Multiplier { upper: 0xbc36b2dbb9f9626e3074e289cbc1e396, lower: 0x5a33499a87532b4598690b0b4d143919 }, // -1471
    Multiplier { upper: 0x969228afc7fab524f390b53b0967e945, lower: 0x14f5d47b9f75bc37ad20d5a2a4102dae }, // -1470
    Multiplier { upper: 0xf0e9dab2d99121d4b8e7885e75730ed4, lower: 0xee5620c5cbef938c4834890439b37c49 }, // -1469
    Multiplier { upper: 0xc0bb155be140e7dd60b939e52ac27243, lower: 0xf1de809e3cbfa93d06906d9cfaf5fd07 }, // -1468
    Multiplier { upper: 0x9a2f44498100b97de6fa94b755685b69, lower: 0x8e4b9a1830995430d20d247d95919739 }, // -1467
    Multiplier { upper: 0xf6b206dc019ac2630b2a878bbbda2bdc, lower: 0x16df5cf380f553815015072f55b5bec1 }, // -1466
    Multiplier { upper: 0xc55b38b001489b826f55393c96482316, lower: 0x78b2b0c2cd910f9aa67738f2aaf7cbce }, // -1465
    Multiplier { upper: 0x9de293c00106e2cebf7760fd45068278, lower: 0x608ef3cf0ada72e21ec5c72888c63ca5 }, // -1464
    Multiplier { upper: 0xfc9db93334d7d14acbf234c86e70d0c0, lower: 0x9a7e52e4de2a5169cad60b740e09faa1 }, // -1463
    Multiplier { upper: 0xca17c75c2a464108a3282a39f1f3da33, lower: 0xaecb7583e4eea787d5780929a4d4c881 }, // -1462
    Multiplier { upper: 0xa1ac9f7cee9e9a6d4f5354fb27f64829, lower: 0x58a2c46983f21f9fddf9a0ee1d7706cd }, // -1461
    Multiplier { upper: 0x8156e5fd8bb215243f75dd95b991d354, lower: 0x46e89d21365b4c7fe4c7b3f1b12c0571 }, // -1460
    Multiplier { upper: 0xcef16ffc12b68839ff22fc22c282ebba, lower: 0x0b0dc83523c5473307a5ecb5e8466f1b }, // -1459
    Multiplier { upper: 0xa58df3300ef86cfb3282634f0202562e, lower: 0x6f3e39c41c9dd28f39518a2b203858e3 }, // -1458
    Multiplier { upper: 0x84718f59a5938a628eceb5d8ce6844f1, lower: 0xf2982e367d4b0ed8faa7a1bc19c6ad82 }, // -1457
    Multiplier { upper: 0xd3e8e55c3c1f43d0e47defc14a406e4f, lower: 0xea8d16bd9544e48e5dd902c68fa448d0 }, // -1456
    Multiplier { upper: 0xa9871de3634c3640b6cb26343b66bea6, lower: 0x553dabcaddd0b6d84b14023872e9d3da }, // -1455
    Multiplier { upper: 0x879f4b1c4f702b66f8a284f695ebcbb8, lower: 0x4431563be4a6f8ad08dcce938f217648 }, // -1454
    Multiplier { upper: 0xd8fede93b24d123e5a9da18a897945f3, lower: 0xa04ef05fd43e5aae74947db8e50256d9 }, // -1453
    Multiplier { upper: 0xad98b20fc1d741cb7bb14e086dfa9e5c, lower: 0x803f26b31031e2252a106493ea68457b }, // -1452
    Multiplier { upper: 0x8ae08e730179016f962771a057fbb1e3, lower: 0x99cc1ef5a68e4e8421a6b6dcbb869dfc }, // -1451
    Multiplier { upper: 0xde34171e68c19be5bd0be9008cc5e96c, lower: 0x294697ef70e3b0d3690abe2df8d7632c }, // -1450
    Multiplier { upper: 0xb1c345b1ed67afeafda320cd3d6b2123, lower: 0x5438798c5a4fc0a920d564f193df828a }, // -1449
    Multiplier { upper: 0x8e35d15b2452f322648280a4312280e9, lower: 0x102d2e09e1d966edb3ddea5adcb2ced5 }, // -1448
    Multiplier { upper: 0xe3894ef83a1e51d0a0d0cdd381d0ce41, lower: 0xb37b7cdc9c8f0b15ec9643c494514aee }, // -1447
    Multiplier { upper: 0xb60772602e7ea7da1a40a4a934a70b67, lower: 0xc2c930b07d3f3c118a11cfd076a76f25 }, // -1446
    Multiplier { upper: 0x919f8eb358655314e1cd50875d526f86, lower: 0x356dc08d30ff63413b41730d2bb925b7 }, // -1445
    Multiplier { upper: 0xe8ff4ab88d6eeb549c7bb40bc883e5a3, lower: 0x88af9a7b81989ecec53584e1df8ea2be }, // -1444
    Multiplier { upper: 0xba65d560712589107d2fc33ca0698482, lower: 0xd3bfaec9347a18a56a91371b193ee898 }, // -1443
    Multiplier { upper: 0x951e444d27513a73975968fd4d2136cf, lower: 0x0fcc8bd429fb46eabba75f48e0ff207a }, // -1442
    Multiplier { upper: 0xee96d3aea54ec3ec255bdb2ee1cebe18, lower: 0x19474620432ba4aac5d898749b31cd90 }, // -1441
    Multiplier { upper: 0xbedf0fbeeaa56989b77caf58b4a564e0, lower: 0x143904e69c22ea2237e079f6e28e3e0d }, // -1440
    Multiplier { upper: 0x98b272ff221dee07c5fd5913c3b783e6, lower: 0x769403ebb01bee81c64d2e5f1ba4fe71 }, // -1439
    Multiplier { upper: 0xf450b7fe9cfcb00c6ffbc1b939259fd7, lower: 0x24200645e69317360a1516fe92a1971a }, // -1438
    Multiplier { upper: 0xc373c6654a63c009f32fce2dc7514cac, lower: 0x1ce66b6b1edc1291a1aa78cba88145af }, // -1437
    Multiplier { upper: 0x9c5c9eb76eb6333b28f30b57d2a77089, lower: 0xb0b855ef4be3420e1aeec709539a9e26 }, // -1436
    Multiplier { upper: 0xfa2dcabf1789eb91db1e788c843f1a75, lower: 0xe78d564bac9ed016917e0b421f5dc9d5 }, // -1435
    Multiplier { upper: 0xc824a232793b22db15b1fa0a0365aec4, lower: 0xb93ddea2f07f0cdedacb3c34e5e4a178 }, // -1434
    Multiplier { upper: 0xa01d4e8ec7628248de27fb3b35eaf236, lower: 0xfa97e54f26cc0a4be23c302a5183b460 }, // -1433
    Multiplier { upper: 0x8017720bd2b53507181ffc2f5e558e92, lower: 0x62131dd8ebd66ea31b6359bb74695d19 }, // -1432
    Multiplier { upper: 0xccf25012eabb880b59ccc6b23088e41d, lower: 0x69b82fc17957176b5f055c5f20a894f5 }, // -1431
    Multiplier { upper: 0xa3f50cdbeefc6cd5e1709ef4f3a0b67d, lower: 0xee2cf3012ddf45ef7f377d18e6ed43f8 }, // -1430
    Multiplier { upper: 0x832a70aff2638a44b45a18c3f61a2b97, lower: 0xf1bd8f3424b29e593292ca7a52576993 }, // -1429
    Multiplier { upper: 0xd1dd811983d276d453c35ad3235d128c, lower: 0xb5fc18536dea96f51db7aa5d508bdc1e }, // -1428
    Multiplier { upper: 0xa7e467479ca85f104302af0f4f7da870, lower: 0x919679dc57eedf2a7e2c884aa6d649b2 }, // -1427
    Multiplier { upper: 0x8650529fb086b27368cef272a5fe205a, lower: 0x0e11fb16acbf18eecb56d36eebdea15b }, // -1426
    Multiplier { upper: 0xd6e6ea991a711d85747e50b76ffd0090, lower: 0x16832b577acb5b17abbe1f17dfca9bc5 }, // -1425
    Multiplier { upper: 0xabebeee0e1f4179df6cb73c5f330cd40, lower: 0x12028912c8a2af4622fe7f464ca21637 }, // -1424
    Multiplier { upper: 0x89898be71b29ac7e5f09296b28f3d766, lower: 0x74ced40f06e88c381bfecc383d4e782c }, // -1423
    Multiplier { upper: 0xdc0f463e91dc4730980ea8ab74b958a3, lower: 0xee17b9b1a4a746c02ccae059fbb0c046 }, // -1422
    Multiplier { upper: 0xb00c38320e49d28d467220892a2de083, lower: 0x24dfc7c15085d2335708b37b2fc099d2 }, // -1421
    Multiplier { upper: 0x8cd6935b3ea1753dd1f4e6d421be4d35, lower: 0xb7196c9aa6d174f5df3a292f5966e175 }, // -1420
    Multiplier { upper: 0xe157522b9768bb961cbb0aed02ca1522, lower: 0xbe8f142aa48254bc985d0eb228a49bee }, // -1419
    Multiplier { upper: 0xb445db5612ba2fab4a2f3bf0cf0810e8, lower: 0x98727688839b76fd46b0d88e86ea1658 }, // -1418
    Multiplier { upper: 0x9037e2ab422e8c890825c98d726cda53, lower: 0xad285ed39c7c5f31055a46d86bee7846 }, // -1417
    Multiplier { upper: 0xe6bfd112037dada80d09427bea47c3b9, lower: 0x150d6485c72d651b3bc3a48d797d8d3d }, // -1416
    Multiplier { upper: 0xb899740e693157b9a407686321d302fa, lower: 0x773dea049f578415c96950712dfe0a97 }, // -1415
    Multiplier { upper: 0x93adf671edc112fae99f86b5b4a8cf2e, lower: 0xc5cb219d4c460344a1210d2757fe6ee0 }, // -1414
    Multiplier { upper: 0xec498a4fe2ce84c4a8ff3def87747eb1, lower: 0x3c7835c87a099ed43501aea5599717cc }, // -1413
    Multiplier { upper: 0xbd07a1d9823ed09d53ff64bf9f90655a, lower: 0x96c6916d2e6e18a9c401588447ac130a }, // -1412
    Multiplier { upper: 0x97394e479b6573b10fff83cc7fa6b77b, lower: 0xabd20df0f1f1ad549ccde069d2f00f3b }, // -1411
    Multiplier { upper: 0xf1f54a0c2bd585e81998d2e0cc3df25f, lower: 0x7950164e4fe915542e1633dc84b34b91 }, // -1410
    Multiplier { upper: 0xc1910809bcaad1867ae0a8b3d697f519, lower: 0x2dd9ab71d98744435811c316d08f6fa8 }, // -1409
    Multiplier { upper: 0x9ada6cd496ef0e052f1a208fdedff747, lower: 0x57e155f4ae05d035e00e35abda0c5953 }, // -1408
    Multiplier { upper: 0xf7c3e15424b1b0084b5d00e631665872, lower: 0x2635565449a2e6bc99b055dfc346f551 }, // -1407
    Multiplier { upper: 0xc6364ddcea27c006a2b0cd84f451e05b, lower: 0x51c445103ae8b896e159de4c9c38c441 }, // -1406
    Multiplier { upper: 0x9e91d7e3ee86333882270ad0c374b37c, lower: 0x4169d0d9c8ba2d458114b1d6e3609d01 }, // -1405
    Multiplier { upper: 0xfdb626397da3852736a4de1ad2545260, lower: 0x68a94e294129e208ce8782f16bcdc801 }, // -1404
    Multiplier { upper: 0xcaf81e946482d0ec2bb71815751041e6, lower: 0xba210b54342181a0a539358defd7d334 }, // -1403
    Multiplier { upper: 0xa2601876b6cf0d89bc9279aac40d0185, lower: 0x61b4091029b467b3b760f7a4bfdfdc2a }, // -1402
    Multiplier { upper: 0x81e679f8923f3e07ca0ec7bbd00a679d, lower: 0xe7c33a73549052f62c4d92ea33197cee }, // -1401
    Multiplier { upper: 0xcfd7298db6cb9672dce472c619aa3f63, lower: 0x0c6b90b8874d5189e07c1e4384f594b0 }, // -1400
    Multiplier { upper: 0xa645bad7c56fab8f171d289e7aee991c, lower: 0x09efa6fa05d7746e4d30183603f7aa27 }, // -1399
    Multiplier { upper: 0x850495796abfbc7278e4207ec8bee0e3, lower: 0x3b261f2e6b12c38b70f346919cc621b9 }, // -1398
    Multiplier { upper: 0xd4d4225bddff93ea5b069a6474649b05, lower: 0x2b7031e3de846c124e520a82947035f4 }, // -1397
    Multiplier { upper: 0xaa434eafe4cc7655159ee1e9f6b6e26a, lower: 0x89268e4fe536bcdb71db3b9ba9f35e5d }, // -1396
    Multiplier { upper: 0x8835d88cb709f844114be7ee5ef8b522, lower: 0x07520b731dc563e2c17c2fafbb29184b }, // -1395
    Multiplier { upper: 0xd9efc0e124dcc06ce8797316fe5abb69, lower: 0xa5501251c93bd30468c6b2b2c50e8d44 }, // -1394
    Multiplier { upper: 0xae59671a83e3cd23ed2df5abfeaefc54, lower: 0x84400ea7d42fdc0387055bc2373ed769 }, // -1393
    Multiplier { upper: 0x8b7ab8e2031ca41cbdbe5e23322596aa, lower: 0x0366721fdcf3166938d11634f8ff12bb }, // -1392
    Multiplier { upper: 0xdf2ac1699e9439c795fd636b836f5776, lower: 0x6bd71cffc7eb570ec14e89ee5b31b791 }, // -1391
    Multiplier { upper: 0xb2889abae543616c77fde922cf8c45f8, lower: 0x5645b0cc9fef78d89aa53b2515c15fa7 }, // -1390
    Multiplier { upper: 0x8ed3aefbea9c4df05ffe541bd93d04c6, lower: 0xab6af3d6e6592d7a1550fc1dab011953 }, // -1389
    Multiplier { upper: 0xe485e4c6442d49809996ecf95b94d471, lower: 0x1244b957d6f51590221b2cfc44ce8eeb }, // -1388
    Multiplier { upper: 0xb6d183d1d0243acd47abf0c77c77105a, lower: 0x7503c77978c411401b48f0c9d0a53f22 }, // -1387
    Multiplier { upper: 0x9241364173502f0a9fbcc09f96c5a6ae, lower: 0xc40305fac703410015d3f3d4a6ea98e8 }, // -1386
    Multiplier { upper: 0xea01f068b8804b4432c79a98f13c3de4, lower: 0x6cd1a32ad80534ccefb986210b10f4a6 }, // -1385
    Multiplier { upper: 0xbb34c053c6cd09035bd2e213f4303183, lower: 0x8a414f55799dc3d7262e04e73c0d9085 }, // -1384
    Multiplier { upper: 0x95c3cd0fd23da0cf7ca8b4dcc359c136, lower: 0x08343f77947e3645b824d0b8fcd7a6d1 }, // -1383
    Multiplier { upper: 0xef9fae7fb6c9014bfaa787c79ef601f0, lower: 0x0d20658c20c9f06f8d07b45b2e25d7b5 }, // -1382
    Multiplier { upper: 0xbfb2f1ffc56d9aa32eec6c9fb25e67f3, lower: 0x3db384701a3b26bfa40629e28b51795d }, // -1381
    Multiplier { upper: 0x995bf4cc9df148828bf056e6284b865c, lower: 0x315c69f3482f5232e99e87e86f746118 }, // -1380
    Multiplier { upper: 0xf55fee142fe87404131a24a373ac0a2d, lower: 0x1bc70feba6b21d1e42973fda4bed6826 }, // -1379
    Multiplier { upper: 0xc44cbe768cb9f669a8e1b6e929566e8a, lower: 0x7c9f3fefb88e7db1cedf66483cbdeceb }, // -1378
    Multiplier { upper: 0x9d0a31f87094c52153e7c5875445253b, lower: 0x96e5ccbfc6d8648e3f191ea03097f0bc }, // -1377
    Multiplier { upper: 0xfb4383271a87a1ceeca608d886d5085f, lower: 0x57d614660af3d416cb5b643380f31ac6 }, // -1376
    Multiplier { upper: 0xc902cf527b9fb4a58a1e6d7a057739e5, lower: 0xdfde76b808c310123c491cf600c27bd2 }, // -1375
    Multiplier { upper: 0xa0cf0c41fc7fc3b7a1b1f12e6ac5c7eb, lower: 0x197ec56007027341c9d4172b33cec975 }, // -1374
    Multiplier { upper: 0x80a5a367fd3302f94e27f4252237d322, lower: 0x7acbd1199f3529016e4345bc29723ac4 }, // -1373
    Multiplier { upper: 0xcdd5d23ffb84d18ee373203b69f2eb6a, lower: 0x5e12e828febb74cf16d2092d0f1d2ad3 }, // -1372
    Multiplier { upper: 0xa4ab0e999603dad8b5f5b362bb28bc55, lower: 0x180f2020cbc92a3f4574d4240c175576 }, // -1371
    Multiplier { upper: 0x83bc0bae119caf13c4c48f822f53c9dd, lower: 0xacd8e680a30754ff6ac3dce9a345ddf8 }, // -1370
    Multiplier { upper: 0xd2c6791682944b52d46db269e552dc95, lower: 0xe15b0a676b3eee65779fc7dc386fc98c }, // -1369
    Multiplier { upper: 0xa89ec74535436f7576be2854b7757d44, lower: 0xb448d51f88ff251df94c9fe360596e0a }, // -1368
    Multiplier { upper: 0x86e56c375dcf8c5df8982043c5f7976a, lower: 0x29d3ddb2d3ff50e4c7707fe919e124d5 }, // -1367
    Multiplier { upper: 0xd7d579f22fb27a2ff4269a06098c2576, lower: 0xa952fc5153321b07a580cca829683aee }, // -1366
    Multiplier { upper: 0xacaac7f4f2f52e8cc35214d1a13ceac5, lower: 0x54426374428e7c061e00a3b9bab9c8be }, // -1365
    Multiplier { upper: 0x8a223990c25dbed702a810a7b430bbd1, lower: 0x10351c5d020b966b4b33b62e2efb06ff }, // -1364
    Multiplier { upper: 0xdd038f4e03c9315804401aa5ed1ac61b, lower: 0x4d21c6fb3678f0abab85f049e4c4d7fe }, // -1363
    Multiplier { upper: 0xb0cfa5d803075aacd0334884bdaf04e2, lower: 0xa41b0595c52d8d5622d18d07ea371331 }, // -1362
    Multiplier { upper: 0x8d72eb13359f7bbd735c3a03caf26a4e, lower: 0xe9af37ab04247111b57470d321c5a8f4 }, // -1361
    Multiplier { upper: 0xe251781ebc325f9585605cd2de50aa17, lower: 0xdc4b8c44d36d81b5ef20b48502d5db20 }, // -1360
    Multiplier { upper: 0xb50df9b230284c779de6b0a8b1da21ac, lower: 0xb03c70370f8ace2b25b3c39d9bde48e7 }, // -1359
    Multiplier { upper: 0x90d7faf4f353705fb1855a208e481af0, lower: 0x8cfd269272d571bc1e29694ae3183a52 }, // -1358
    Multiplier { upper: 0xe7bff7ee521f1a32b5a229cdb0735e4d, lower: 0xae61d750b7bbe92cfd0f0ede3826c3b7 }, // -1357
    Multiplier { upper: 0xb9665ff1db4c14f55e1b54a48d29183e, lower: 0x251b12a6f96320f0ca72724b601f02f9 }, // -1356
    Multiplier { upper: 0x9451e65b15d6772ab1af76ea0a874698, lower: 0x1daf421f2de8e727085b8ea2b34c0261 }, // -1355
    Multiplier { upper: 0xed4fd6f822f0beaab5e58b1010d870f3, lower: 0x62b20365164171d80d5f4a9debacd09a }, // -1354
    Multiplier { upper: 0xbdd978c6825a32222b1e08d9a7138d8f, lower: 0x822802b7450127e00ab2a217efbd73af }, // -1353
    Multiplier { upper: 0x97e12d6b9b7b5b4e88e4d3e152760ad9, lower: 0x34eccef90400ecb33bc21b4659645c8c }, // -1352
    Multiplier { upper: 0xf301e245c5922bb0db07b96883f0115b, lower: 0x87e14b280667e11ec6035ed6f56d60df }, // -1351
    Multiplier { upper: 0xc267e837d141bc8d7c062ded3659a77c, lower: 0x6cb43c20051fe74bd19c4bdf2abde719 }, // -1350
    Multiplier { upper: 0x9b86535fda9afd3dfcd1be575eae1f96, lower: 0xbd5cfce66a7fec3ca7b03cb28897ec14 }, // -1349
    Multiplier { upper: 0xf8d6ebcc90f7fb96614f96f2311698f1, lower: 0x2efb2e3d773313943f80611da75979ba }, // -1348
    Multiplier { upper: 0xc712563d40c662deb43fabf4f41213f4, lower: 0x2595be97928f42dcff99e74aec479495 }, // -1347
    Multiplier { upper: 0x9f41de9767051be55cffbcc3f674dcc3, lower: 0x51449879420c357d9947ec3bf03943aa }, // -1346
    Multiplier { upper: 0xfecfca8bd8082ca22e65fad323ee2e05, lower: 0x4ed4272869ad22628ed979f9805b9f77 }, // -1345
    Multiplier { upper: 0xcbd96ed6466cf081beb7fbdc1cbe8b37, lower: 0x72435286baf0e84ed8adfb2e00494c5f }, // -1344
    Multiplier { upper: 0xa31458ab6b8a5a01655ffcb016fed5c5, lower: 0xf502a86bc8c0b9d8ad57fc24cd07704c }, // -1343
    Multiplier { upper: 0x8276ad55efa1e19ab77ffd59abff116b, lower: 0x2a6886bca09a2e46f113301d70d2c03d }, // -1342
    Multiplier { upper: 0xd0bde223190302912599955c4664e8ab, lower: 0x770da46100f6b07181b84cfbe7b799fb }, // -1341
    Multiplier { upper: 0xa6fe4e827a68ceda847adde36b83ed55, lower: 0xf8d7b6b400c559f467c6a3fcb95fae62 }, // -1340
    Multiplier { upper: 0x85983ecec853d8aed0624b1c56032444, lower: 0xc712f890009de19053054ffd6119584f }, // -1339
    Multiplier { upper: 0xd5c0647e0d52f44ae703ab60899ea06e, lower: 0x0b518db3342fcf4d51a2199568288d4b }, // -1338
    Multiplier { upper: 0xab005064d775903bec02ef806e188058, lower: 0x090e0af5c35972a4414e7addeced3dd5 }, // -1337
    Multiplier { upper: 0x88cd0d1d792ad9c9899bf2cd24e066ac, lower: 0xd40b3bf7cf7ac21d010b957e57243178 }, // -1336
    Multiplier { upper: 0xdae1ae958eaaf60f42931e1507cd7114, lower: 0x86785ff2e5913694ce78ef308b6d1bf2 }, // -1335
    Multiplier { upper: 0xaf1af2113eef2b3f6875b1aa6ca45a76, lower: 0xd1f9e65beada9210a52d8c26d5f0e328 }, // -1334
    Multiplier { upper: 0x8c158e743258ef65ed2af48856e9e1f8, lower: 0xa7fb1eafef1541a6ea8ad68577f3e8ed }, // -1333
    Multiplier { upper: 0xe0227d86b6f4b23caeab20da24a9698d, lower: 0xd991cab3182202a4aa77bda25986417b }, // -1332
    Multiplier { upper: 0xb34ecad22bf6f4fd5888e714ea21213e, lower: 0x47a7d55c134e6883bb92fe1b7ad1cdfc }, // -1331
    Multiplier { upper: 0x8f723bdb565f2a6446d3ec10bb4db431, lower: 0xd2ecaab00f71ed362fa8cb492f0e3e63 }, // -1330
    Multiplier { upper: 0xe58392f88a31dd6d3e1fe01ac549204f, lower: 0xb7e11119b24fe1f04c414541e4e39705 }, // -1329
    Multiplier { upper: 0xb79c7593a1c17df0fe7fe67bd1074d0c, lower: 0x931a74148ea64e59d69a9dce50b6126b }, // -1328
    Multiplier { upper: 0x92e39142e7cdfe5a65331ec97405d73d, lower: 0x427b9010721ea514abaee4a50d5e7522 }, // -1327
    Multiplier { upper: 0xeb05b537d94996f70851cadbecd6252e, lower: 0xd0c5b34d83643b5445e4a1081563ee9d }, // -1326
    Multiplier { upper: 0xbc0490f97aa145926d0e3be323de8425, lower: 0x73d15c3e02b695dd04b6e739aab6587e }, // -1325
    Multiplier { upper: 0x966a0d94621a9e0ebda4fcb5b64b9cea, lower: 0xc30de364cef877e403c585c7bbc51398 }, // -1324
    Multiplier { upper: 0xf0a9af53d02a967dfc3b2def8a1294aa, lower: 0xd1afd23ae4c0bfd3393c093f92d4ec26 }, // -1323
    Multiplier { upper: 0xc087bf76402211fe63628b26080edd55, lower: 0x748ca82f1d66ffdc2dc9a0ffa8aa5685 }, // -1322
    Multiplier { upper: 0x9a0632c5001b41984f8208eb39a57ddd, lower: 0xf6d6ecf27debffe357d480cc86eeab9d }, // -1321
    Multiplier { upper: 0xf670513b335ecf5a18d00e452908c963, lower: 0x248b14b72fdfffd22620ce140b1778fc }, // -1320
    Multiplier { upper: 0xc526a7628f7f0c4813d9a50420d3d44f, lower: 0x506f43c5bfe66641b81a3e766f45fa63 }, // -1319
    Multiplier { upper: 0x9db885e872cc09d3431484034d764372, lower: 0xa6bf696affeb85016014fec525d1951c }, // -1318
    Multiplier { upper: 0xfc5a6fda5146761ed1ba6cd2158a0584, lower: 0x3dff0f119978d4cf002197a1d61c21c6 }, // -1317
    Multiplier { upper: 0xc9e1f3150dd1f818a7c8570e77a19e03, lower: 0x64cc0c0e1460aa3f334e12e7de7ce7d2 }, // -1316
    Multiplier { upper: 0xa1818f440b0e6013b96d1271f94e1802, lower: 0xb709a33e76b3bb65c2a4dbecb1fd8642 }, // -1315
    Multiplier { upper: 0x8134729cd5a519a961240ec1943e799b, lower: 0xc5a14f652bc2fc516883e323c1979e9b }, // -1314
    Multiplier { upper: 0xceba50faef6e8f756839b135b9fd8f5f, lower: 0xa29bb23b7937fa1bda6c9e9f9c25ca91 }, // -1313
    Multiplier { upper: 0xa561da6259253f91202e275e2e6472b2, lower: 0xe87c8e95fa932e7caebd4bb2e3516edb }, // -1312
    Multiplier { upper: 0x844e484eadb7660db3581f7e8b838ef5, lower: 0x86ca0bab2edc25308bcaa2f582a78be2 }, // -1311
    Multiplier { upper: 0xd3b073b115f23ce2b88cff30df38e4bc, lower: 0x0adcdf784af9d51a794437ef3772796a }, // -1310
    Multiplier { upper: 0xa959f62744c1ca4efa0a65c0b293ea30, lower: 0x08b0b2c6a261774861035ff292c1fabb }, // -1309
    Multiplier { upper: 0x877b2b529d67d50bfb3b849a287654f3, lower: 0x3a26f56bb51ac5d380cf7ff54234c896 }, // -1308
    Multiplier { upper: 0xd8c5121dc8a621acc52c075d0d8a2185, lower: 0x29d7ef12bb5e095267b2665536bada89 }, // -1307
    Multiplier { upper: 0xad6a74e4a084e7bd6a899f7da46e8137, lower: 0x54acbf422f7e6ddb862851ddc562486e }, // -1306
    Multiplier { upper: 0x8abb90b6e6d0b964553ae5fe1d25342c, lower: 0x43bd65ce8c6524af9e86a7e49de839f1 }, // -1305
    Multiplier { upper: 0xddf8e78b0ae78f06eec4a3302ea1ed13, lower: 0x9f956fb0e0a1d44c30d77307630d2982 }, // -1304
    Multiplier { upper: 0xb193ec6f3bec726bf236e8f358818a76, lower: 0x1944595a4d4e43702712c26c4f3dbace }, // -1303
    Multiplier { upper: 0x8e0ff058fcbd28565b5f20c2ad346ec4, lower: 0xe1037aaea43e9c59b8dbcebd0c31623f }, // -1302
    Multiplier { upper: 0xe34cb3c19461da23c56501377b8717a1, lower: 0x680591176d30fa2927c61794e04f0397 }, // -1301
    Multiplier { upper: 0xb5d6f63476b4ae830450cdc5fc6c12e7, lower: 0x866ada7924272e875304dfaa4d0c02e0 }, // -1300
    Multiplier { upper: 0x9178c4f6c55d5868d040a49e6389a8b9, lower: 0x38557b941cec25390f3719550a70024d }, // -1299
    Multiplier { upper: 0xe8c13b246efbc0a7b39aa0fd6c0f745b, lower: 0x8d55928694ad085b4b8b5bbb43e66a14 }, // -1298
    Multiplier { upper: 0xba342f5058c966ec8faee731233f9049, lower: 0x3dde0ed2108a6d15d609162f698521aa }, // -1297
    Multiplier { upper: 0x94f68c404707858a0c8bec274f660d07, lower: 0x64b1a574da085744ab3a7825ee041aee }, // -1296
    Multiplier { upper: 0xee5746cd3e726f43474646a54bd67b3f, lower: 0x0782a254900d586ddec3f36fe339c4b0 }, // -1295
    Multiplier { upper: 0xbeac38a431f525cf6c3838843cab95cc, lower: 0x06021b76d9a446be4bcff5f31c2e36f3 }, // -1294
    Multiplier { upper: 0x9889c6e9c190eb0c56936069ca22de3c, lower: 0xd19b492be15038983ca65e5c168b5f29 }, // -1293
    Multiplier { upper: 0xf40fa4a935b4ab46f0ebcd761037c9fa, lower: 0xe8f875130219f426c77096f9bdabcb75 }, // -1292
    Multiplier { upper: 0xc33fb6edc49089058d89712b402ca195, lower: 0x872d2a759b47f6856c5a126164896f91 }, // -1291
    Multiplier { upper: 0x9c32f8be36da0737a46df42299bd4e11, lower: 0x38f0eec47c39920456ae751ab6d45941 }, // -1290
    Multiplier { upper: 0xf9eb2796be29a525d3e320375c621681, lower: 0xf4b4b13a605c1cd3bde3ee912486f534 }, // -1289
    Multiplier { upper: 0xc7ef52defe87b751764f4cf916b4dece, lower: 0x5d5d5a9519e34a42fe4ff20db6d25dc3 }, // -1288
    Multiplier { upper: 0x9ff2a8b265395f745ea5d72dabc3e571, lower: 0xe44aaeddae4f6e9bfea65b3e2bdb7e36 }, // -1287
    Multiplier { upper: 0xffeaa783d52898ba3109584912d308b6, lower: 0x3a1117c916e57dc6643d5ec9dfc596bc }, // -1286
    Multiplier { upper: 0xccbbb93644207a2e8da1136da8a8d3c4, lower: 0xfb40dfd41251316b83644bd4b3047897 }, // -1285
    Multiplier { upper: 0xa3c960f8368061bed7b40f8aed53dc9d, lower: 0x95cd7fdcdb74278935e9d643c269fa12 }, // -1284
    Multiplier { upper: 0x830780c692004e324629a608bddcb07e, lower: 0x1171331715f686075e54ab696854c80f }, // -1283
    Multiplier { upper: 0xd1a59ad750007d1d3d0f700dfc944d96, lower: 0x824eb824eff0d672308778a8a6ee0ce4 }, // -1282
    Multiplier { upper: 0xa7b7af12a666ca7dca72c00b3076a478, lower: 0x683ef9b7265a452826d2c6ed52580a50 }, // -1281
    Multiplier { upper: 0x862c8c0eeb856ecb085bccd5c05ee9f9, lower: 0xecff2e2c1eae9db9b8a89f2441e00840 }, // -1280
    Multiplier { upper: 0xd6adace4ac08b144da2c7aef9a31765c, lower: 0xae6516acfde42f8f8dda983a03000d33 }, // -1279
    Multiplier { upper: 0xabbe23ea233a276a4823958c7b5ac516, lower: 0xf1ea788a64b68c72d7e213619c000a90 }, // -1278
    Multiplier { upper: 0x8964e9881c2e85eea01c77a395e23745, lower: 0x8e552d3b83c53d28acb4dc4e16666ed9 }, // -1277
    Multiplier { upper: 0xdbd4a8d9c6b0d64a99c725d28969f208, lower: 0xe3bb7b926c6ec841145493b023d717c2 }, // -1276
    Multiplier { upper: 0xafdd53e16bc0ab6ee16c1e420787f4d3, lower: 0xe962c941f058a0341043a959b645ac9b }, // -1275
    Multiplier { upper: 0x8cb10fe78966ef8be789b1ce6c6cc3dc, lower: 0xbab56dce59e08029a69c877af837bd49 }, // -1274
    Multiplier { upper: 0xe11b4ca5a8a4b2797275e94a47146c94, lower: 0x5def1616f6340042a42da5918d25fba8 }, // -1273
    Multiplier { upper: 0xb415d6eaed508ec78ec4baa1d276bd43, lower: 0x7e58de78c4f6669bb68aeadad7519620 }, // -1272
    Multiplier { upper: 0x901178bbf10d3f060bd0954e41f89769, lower: 0x31e0b1fa372b85495ed588af12a7ab4d }, // -1271
    Multiplier { upper: 0xe6825ac64e7b9809ac80eee39cc0f241, lower: 0xe9678329f1df3ba897bc0de4eaa5dee1 }, // -1270
    Multiplier { upper: 0xb868489ea52facd48a00bf1c7d672834, lower: 0xbab935bb27e5c953ac967183eeeb18b4 }, // -1269
    Multiplier { upper: 0x9386a07eea8c8a43a19a327d311f535d, lower: 0x622dc495b984a10fbd45279cbf227a2a }, // -1268
    Multiplier { upper: 0xec0a9a64aa7a76d29c29ea61e8321efb, lower: 0xd0493a8928d434e5fba1d8facb6a5d0f }, // -1267
    Multiplier { upper: 0xbcd548508861f8a87cee551b202818c9, lower: 0x736dc86dba435d84c94e472f0921e40c }, // -1266
    Multiplier { upper: 0x971106a6d38193b9fd8b7748e6867a3a, lower: 0xc2be39f161cf7e03d43e9f58d41b1cd7 }, // -1265
    Multiplier { upper: 0xf1b4d7715268ec5cc8df254170d729f7, lower: 0x9dfd29823618c99fb9fdcbc1535e948b }, // -1264
    Multiplier { upper: 0xc15d79277520bd170718ea9ac0ac2192, lower: 0xe4ca879b5e7a3ae62e64a3010f7edd3c }, // -1263
    Multiplier { upper: 0x9ab12db92a8097459f47221566f01adb, lower: 0xea3b9faf7ec82f1e8b83b59a72cbe430 }, // -1262
    Multiplier { upper: 0xf781e2c1dd9a8ba29871d0223e4cf7c6, lower: 0x43929918cad9e4fdac05ef5d84796d19 }, // -1261
    Multiplier { upper: 0xc6018234b1486fb546c1734e983d9305, lower: 0x02dbadad6f14b731566b25e469fabdae }, // -1260
    Multiplier { upper: 0x9e679b5d5aa0595dd2345c3ee031426a, lower: 0x68afbe2458dd5f5aab88eb1d2195648b }, // -1259
    Multiplier { upper: 0xfd72922ef766f562e9ed606499e86a43, lower: 0xdab2c9d3c162322aac0e44fb68ef0745 }, // -1258
    Multiplier { upper: 0xcac20e8bf91f2ab587f119ea14b9ee9c, lower: 0xaef56e43011b5b555671d0c920bf3904 }, // -1257
    Multiplier { upper: 0xa234d86ffa7f555e065a7b21aa2e587d, lower: 0x58c458359a7c491111f4a7074d65c736 }, // -1256
    Multiplier { upper: 0x81c3e0599532aab19eaec8e7bb5846ca, lower: 0xad69e02ae1fd0740db2a1f390ab7d292 }, // -1255
    Multiplier { upper: 0xcf9fcd5c21eaaab5cab14172c55a0add, lower: 0xe24300449cc80b9af843652811261db6 }, // -1254
    Multiplier { upper: 0xa6197116818888916ef4345bd114d57e, lower: 0x4e9c0036e3d33c7bf9cf84200db817c5 }, // -1253
    Multiplier { upper: 0x84e12745346d3a0df25cf6afda771131, lower: 0xd87cccf8b64296c994a6034cd7c6796b }, // -1252
    Multiplier { upper: 0xd49b720853e1f67cb6fb244c90be81e9, lower: 0x5a6147f456d0f14287700547bfa3f577 }, // -1251
    Multiplier { upper: 0xaa15f4d3764e5eca2bfc1d0a0d6534ba, lower: 0xaeb439904573f43539266a9fcc832ac6 }, // -1250
    Multiplier { upper: 0x881190a92b71e56e89967da1a450f6fb, lower: 0xbef694736ac329c42db8554ca39c2238 }, // -1249
    Multiplier { upper: 0xd9b5b441df1ca24a75bd95cf6d4e57f9, lower: 0x318a871f113842d37c5a221438f9d059 }, // -1248
    Multiplier { upper: 0xae2af69b18e3b5085e3144a5f10b7994, lower: 0x27a205b2742d0242c9e1b4dcfa61737b }, // -1247
    Multiplier { upper: 0x8b559215ad82f739e4f436eb273c6143, lower: 0x52e8048ec35735023b1af7172eb45c62 }, // -1246
    Multiplier { upper: 0xdeef5022af37f1f63b2057dea52d686b, lower: 0xb7d9a0e46bbebb36c4f7f1beb12093d0 }, // -1245
    Multiplier { upper: 0xb2590ce88c2cc191c8e6acb21dbded22, lower: 0xf97ae71d22fefc2bd0c65afef41a0fda }, // -1244
    Multiplier { upper: 0x8eada3ed3cf09adb071ef08e7e318a82, lower: 0x612f1f4a8265968973d1e2659014d97b }, // -1243
    Multiplier { upper: 0xe44906486180f7c4d83180e3fd1c10d0, lower: 0x9b7e98773708f0dbec8303d5b3548f2b }, // -1242
    Multiplier { upper: 0xb6a0d1d38133f96a468e00b6641673da, lower: 0x15fee05f5f3a5a498a026977c2aa0c22 }, // -1241
    Multiplier { upper: 0x921a417600f66121d20b33c51cdec314, lower: 0xde65804c4c2eaea13b35212c9bbb3ce8 }, // -1240
    Multiplier { upper: 0xe9c39bf0018a3502e9ab86082e313821, lower: 0x63d59a13ad177dcec521ceadc5f86174 }, // -1239
    Multiplier { upper: 0xbb02e32667a1c402548938068b5a934d, lower: 0xe977ae762412cb0bd0e7d88b04c6b45d }, // -1238
    Multiplier { upper: 0x959be8eb861b0335106dc66ba2aedc3e, lower: 0x545fbec4e9a8a26fda5313a26a38904a }, // -1237
    Multiplier { upper: 0xef5fdb12702b3854e7160a45d117c6ca, lower: 0x2099313b0f7437195d51b903dd274d43 }, // -1236
    Multiplier { upper: 0xbf7fe2752688f9dd85ab3b6b0dac9f08, lower: 0x1a14276272c35f477ddafa697db90a9c }, // -1235
    Multiplier { upper: 0x99331b90eba0c7e46aef62bc0af07f39, lower: 0xae7685e85bcf7f6c64af2ebacafa6ee4 }, // -1234
    Multiplier { upper: 0xf51e928179013fd3de4bd12cde4d985c, lower: 0x4a573ca6f94bff13d44b7df7ab2a4b05 }, // -1233
    Multiplier { upper: 0xc418753460cdcca97ea30dbd7ea479e3, lower: 0x6eac3085943ccc0fdd093192ef5508d1 }, // -1232
    Multiplier { upper: 0x9ce05dc380a4a3bacbb5a497988394b5, lower: 0xf2235a04769709a64a6dc1425910d3db }, // -1231
    Multiplier { upper: 0xfb0096059aa105f7ac55d425c0d28789, lower: 0x836bc33a57580f7077160203c1b4862a }, // -1230
    Multiplier { upper: 0xc8cd44d14880d192f044a9b7cd75393a, lower: 0xcf8968fb79133f8d2c119b3634906b55 }, // -1229
    Multiplier { upper: 0xa0a4370dd39a414259d087c63df760fb, lower: 0xd93aba62c742993dbcdae291c3a6bc44 }, // -1228
    Multiplier { upper: 0x80835f3e42e1cdceae406c9e97f91a63, lower: 0x142efb823902143163e24edb02ebc9d0 }, // -1227
    Multiplier { upper: 0xcd9efeca049c7c7de39a4764265b5d6b, lower: 0x537e5f36c19ced1bd303b15e6b12dc80 }, // -1226
    Multiplier { upper: 0xa47f323b36e396cb1c7b6c501eaf7def, lower: 0x75feb292347d8a7ca8cfc11855a8b067 }, // -1225
    Multiplier { upper: 0x8398f4fc2be9456f49fc56a67ef2cb25, lower: 0xf7fef541c397a1fd53d96746aaed59ec }, // -1224
    Multiplier { upper: 0xd28e54c6aca86f1876608aa3fe514509, lower: 0x8ccb2202d28c36621fc23ed777e22979 }, // -1223
    Multiplier { upper: 0xa871dd6bbd538c1391e6d54ffea76a6e, lower: 0x0a3c1b35753cf84e7fce98ac5fe8212e }, // -1222
    Multiplier { upper: 0x86c17defcaa93cdc74b8aaa66552bb8b, lower: 0x3b6348f790fd9371ffd87a237fece758 }, // -1221
    Multiplier { upper: 0xd79bfcb2dddb9493edf4443d6eeac5ab, lower: 0x923874bf4e62858332f3f69f3314a559 }, // -1220
    Multiplier { upper: 0xac7cca28b17c76dcbe5d036458bbd156, lower: 0x0e9390990b820468f58ff87f5c108447 }, // -1219
    Multiplier { upper: 0x89fd6e86f463924a31e402b6ad630dde, lower: 0x720fa6e0d6019d20c4732d32b00d36a0 }, // -1218
    Multiplier { upper: 0xdcc8b0d7ed6c1d4383066abde2381630, lower: 0xb67f7167bccf61ce071eaeb780152432 }, // -1217
    Multiplier { upper: 0xb0a08d798abce436026b8897e82cde8d, lower: 0x5ecc5ab963d91b0b38e55892ccddb68f }, // -1216
    Multiplier { upper: 0x8d4d3dfad563e9c4cebc6d4653571871, lower: 0x18a37bc7831415a293eaad423d7e2ba5 }, // -1215
    Multiplier { upper: 0xe2152ff7bbd30fa14ac7153d5224f3e8, lower: 0x276bf93f3820229db9777b9d2f3045d5 }, // -1214
    Multiplier { upper: 0xb4ddbff9630f3fb43bd2776441b72986, lower: 0x85effa98f9b34ee4945f961758f36b11 }, // -1213
    Multiplier { upper: 0x90b166611c0c32f69641f91d015f546b, lower: 0x9e5995472e290bea104c7812ad8f88db }, // -1212
    Multiplier { upper: 0xe7823d682ce0518a8a03282e68988712, lower: 0x96f5bba516a813101a13f35115b27491 }, // -1211
    Multiplier { upper: 0xb934fdecf0b3746ed4cf535853ad38db, lower: 0xabf7c950deecdc0ce1a98f74115b9074 }, // -1210
    Multiplier { upper: 0x942a64bd8d5c5d25770c42ad0fbdc716, lower: 0x232ca10d7f23e33d815472c341160d29 }, // -1209
    Multiplier { upper: 0xed10a12f4893c83bf1ad377b4c62d823, lower: 0x6b7a9b48cb6c9ec8ceed846b9b567b75 }, // -1208
    Multiplier { upper: 0xbda6e75906dca02ff48a92c909e8ace9, lower: 0x22c87c3a3c56e56d72579d22e2ab95f8 }, // -1207
    Multiplier { upper: 0x97b8b914057d4cf32a08756da186f0ba, lower: 0x8239fcfb6378b78ac1dfb0e8b5561193 }, // -1206
    Multiplier { upper: 0xf2c1282008c87b1ea9a722490271812a, lower: 0x69f6619238c125aacfcc4e4122234f51 }, // -1205
    Multiplier { upper: 0xc2342019a0a0627eee1f4ea0cec13421, lower: 0xee5eb474fa341e223fd6a500e81c3f74 }, // -1204
    Multiplier { upper: 0x9b5ce67ae6e6b53258190bb3d89a901b, lower: 0x2518905d94f67e81ccabb733ece365f7 }, // -1203
    Multiplier { upper: 0xf894a3f7d7d788508cf4df86275db35e, lower: 0xa1c0e6fc218a6402e112beb97b056ff1 }, // -1202
    Multiplier { upper: 0xc6dd4ff9797939da0a5d7f9e85e48f7e, lower: 0xe7cd8596813b833580dbcbc7959df327 }, // -1201
    Multiplier { upper: 0x9f17732dfac7617b3b7dffb204b6d932, lower: 0x530ad145342f9c2acd7ca306114b28ec }, // -1200
    Multiplier { upper: 0xfe8beb7cc4723591f8c9991cd457c1ea, lower: 0x1e77b53b86b29377af2dd1a34edea7e0 }, // -1199
    Multiplier { upper: 0xcba322ca36c1c474c707adb0a9dfce54, lower: 0xe52c90fc6bc20f92f28b0e1c3f18864d }, // -1198
    Multiplier { upper: 0xa2e8e8a1c567d05d6c06248d54b30b77, lower: 0x1dbd40c9efce72dbf53c0b49cc139ea4 }, // -1197
    Multiplier { upper: 0x8253ed4e3786404abcd1b6d776f5a2c5, lower: 0xb16433d4bfd85be32a966f6e3cdc7eea }, // -1196
    Multiplier { upper: 0xd086487d25a39a112e1c57bf24bc37a2, lower: 0xb56d1fbacc8d5fd1ddbd7f16c7c73176 }, // -1195
    Multiplier { upper: 0xa6d1d397514fae7424e37965b6fcf94e, lower: 0xf78a7fc8a3a44ca7e49798df0638f45e }, // -1194
    Multiplier { upper: 0x8574a945daa62529b71c611e2bfd943f, lower: 0x2c6ecca082e9d6ecb6dfad7f382d904b }, // -1193
    Multiplier { upper: 0xd587753c9109d50f8b609b637995b9fe, lower: 0xad7e143404a957e12499159859e28078 }, // -1192
    Multiplier { upper: 0xaad2c4307407dda6091a15e92e116198, lower: 0x8acb435cd0877980ea141146ae4ecd2d }, // -1191
    Multiplier { upper: 0x88a89cf390064aeb3a7b44ba8b411ae0, lower: 0x6f0902b0a6d2c79a54dcda9ef1d8a424 }, // -1190
    Multiplier { upper: 0xdaa76185b33d44ab90c53ac41201c49a, lower: 0x4b419de771513f5d549490fe4fc106a0 }, // -1189
    Multiplier { upper: 0xaeec4e048f6436efa7042f03419b03ae, lower: 0xa29ae4b9277432b11076da650c9a6bb3 }, // -1188
    Multiplier { upper: 0x8bf03e6a0c502bf2ec0358cf67af3625, lower: 0x4ee250941f90288da6c57b840a1522f6 }, // -1187
    Multiplier { upper: 0xdfe6ca4346e6acb7e0055ae572b1f03b, lower: 0xb16a1a8698e6a7490ad5926cdcee9e56 }, // -1186
    Multiplier { upper: 0xb31f0835d25223c64cd115845bc18cfc, lower: 0x8dee7b9ee0b885d408aadb8a4a587eab }, // -1185
    Multiplier { upper: 0x8f4c0691750e83050a40de037c9ad730, lower: 0x718b9618b3c6d1766d557c6ea1e06556 }, // -1184
    Multiplier { upper: 0xe54670e8bb4a6b3b439afcd260f7beb3, lower: 0xe8df568dec714f23e22260b10300a223 }, // -1183
    Multiplier { upper: 0xb76b8d86fc3b88fc3615970eb3f9655c, lower: 0xba4c453e56c10c1cb4e84d5a68cd4e83 }, // -1182
    Multiplier { upper: 0x92bc7138c9c93a635e77ac0bc32deab0, lower: 0x9509d0feabcda34a2a53711520a43ecf }, // -1181
    Multiplier { upper: 0xeac71b8e0fa85d6bca5913460516444d, lower: 0xbb42e7fddfaf6ba9dd524e883439fe18 }, // -1180
    Multiplier { upper: 0xbbd27c71a6204abca1e0dc380411d03e, lower: 0x2f68b997e625efbb17750ba029c7fe79 }, // -1179
    Multiplier { upper: 0x9641fd27b819d563b4b3e36003417364, lower: 0xf2ba2e131e84bfc8df90d619bb06652e }, // -1178
    Multiplier { upper: 0xf069950c59c2ef05edec9f000535856e, lower: 0x5129e351ca6dffa7cc1af0292b3d6eb0 }, // -1177
    Multiplier { upper: 0xc054773d149bf26b24bd4c00042ad125, lower: 0x0dbb1c416ebe661fd67bf35422978bc0 }, // -1176
    Multiplier { upper: 0x99dd2c30dd498ebc1d643cccd02240ea, lower: 0x71627d0125651e7fdec98f768212d633 }, // -1175
    Multiplier { upper: 0xf62ead1afba8e4602f06c7ae19d067dd, lower: 0x82372e683bd4fd996475b257368489eb }, // -1174
    Multiplier { upper: 0xc4f224159620b6b358d2395814a6b97e, lower: 0x01c5beb9c977314783915b78f86a07ef }, // -1173
    Multiplier { upper: 0x9d8e8344781a2bc2ad74faacdd522dfe, lower: 0x67d165616df8f439360de2c72d219ff3 }, // -1172
    Multiplier { upper: 0xfc17386d8cf6ac6aaf21911495504997, lower: 0x0c823bcf165b205b89afd13eae9c331e }, // -1171
    Multiplier { upper: 0xc9ac2d2470c556bbbf4e0daa110d07ac, lower: 0x0a01c9727848e6afa15974322549c27e }, // -1170
    Multiplier { upper: 0xa1568a838d6aabc965d80aee740a6c89, lower: 0xa19b078ec6a0b88c81145cf4eaa16865 }, // -1169
    Multiplier { upper: 0x811208693deeefd45179a2585cd523a1, lower: 0x4e159fa56bb3c6d6cda9e3f7221ab9eb }, // -1168
    Multiplier { upper: 0xce8340a86317e620825c36f3c7bb6c35, lower: 0x49bc32a245ec7157af76398b69c45caa }, // -1167
    Multiplier { upper: 0xa535cd53827984e6ceb02bf63962bcf7, lower: 0x6e302881d189f44625f82e092169e3bc }, // -1166
    Multiplier { upper: 0x842b0aa9352e03ebd88ceff82de8972c, lower: 0x582686ce413b29d1b7f9be6db454b630 }, // -1165
    Multiplier { upper: 0xd378110ebb7cd312f414b326afda8b7a, lower: 0x26a40ae39b91dc82bff5fd7c53babd19 }, // -1164
    Multiplier { upper: 0xa92cda722f970f425cdd5c1ef3153c61, lower: 0xb8833be949417d35665e6463762efdae }, // -1163
    Multiplier { upper: 0x875715282612729b7d7de34bf5aa96b4, lower: 0x939c2fedd434642ab84b8382c4f2648b }, // -1162
    Multiplier { upper: 0xd88b550d09b71dc5959638798910f120, lower: 0xec2d197c86ba39ddf3ac059e07ea3a78 }, // -1161
    Multiplier { upper: 0xad3c440a6e2c17d144782d2e0740c0e7, lower: 0x23574796d22e94b18fbcd14b39882ec6 }, // -1160
    Multiplier { upper: 0x8a969cd524f0130dd0602424d29a33ec, lower: 0x1c45d2df0e8baa27a630a76f6139bf05 }, // -1159
    Multiplier { upper: 0xddbdc7bb6e4ceb494d66a03aea905313, lower: 0x606fb7cb4a79103f704dd8b2352931a2 }, // -1158
    Multiplier { upper: 0xb1649fc9250a55d43debb36255404275, lower: 0xe6bfc63c3b940cff8d0b13c1c420f481 }, // -1157
    Multiplier { upper: 0x8dea196db73b77dcfe56291b77669b91, lower: 0x856638302fa9a3ffa408dc9b034d9068 }, // -1156
    Multiplier { upper: 0xe31028af8b92596196f041c58bd75f4f, lower: 0x3bd6c04d190f6ccc39a7c75e6baf4d72 }, // -1155
    Multiplier { upper: 0xb5a686f2d60eade7abf367d13cac4c3f, lower: 0x63123370e0d923d6948639185625d78f }, // -1154
    Multiplier { upper: 0x9152058f11a557ec898f8640fd56a365, lower: 0xe8db5c5a4d7a8312106b60e044eb12d9 }, // -1153
    Multiplier { upper: 0xe8833c181c3bbfe0dc18d6ce622438a3, lower: 0x0e2bc6f6e25d9e834d789b006e44eaf4 }, // -1152
    Multiplier { upper: 0xba029679b02fccb3e347123eb4e9c6e8, lower: 0xd82305924eb14b9c3dfa1599f1d0bbf6 }, // -1151
    Multiplier { upper: 0x94cedec7c0263d5cb5d274fef7216bed, lower: 0x79b59e0ea55aa2e364c81147f4a6fcc5 }, // -1150
    Multiplier { upper: 0xee17cad93370622defb72197f1cf1315, lower: 0x8f88fce43bc437d23ad9b53fedd7fad5 }, // -1149
    Multiplier { upper: 0xbe796f142926b4f18c9281465b0c0f44, lower: 0x72d3fd8363035fdb6247c43324acc8aa }, // -1148
    Multiplier { upper: 0x986125a9ba855d8e0a0ecdd1e2700c36, lower: 0xc2433135e8cf7fe2b506368f508a3a22 }, // -1147
    Multiplier { upper: 0xf3cea2a92a6efc16767e161c9d80138a, lower: 0xd06b81efdae5996abb3d241880dd29d0 }, // -1146
    Multiplier { upper: 0xc30bb55421f263452b9811b07e000fa2, lower: 0x4056018caf1e1455629750139a4a87d9 }, // -1145
    Multiplier { upper: 0x9c095ddce7f51c3756134159fe6672e8, lower: 0x3378013d58e4dd111bac400faea20648 }, // -1144
    Multiplier { upper: 0xf9a8962e3fee938bbceb9bc330a3eb0d, lower: 0x1f26686227d494e82c46cce5e4367072 }, // -1143
    Multiplier { upper: 0xc7ba11be998ba93c9722e3028d4fef3d, lower: 0xb285204e8643aa53569f0a51835ec05c }, // -1142
    Multiplier { upper: 0x9fc80e32146fba96df4f1c020aa658fe, lower: 0x286a803ed1cfbb75dee5a1dacf7f0049 }, // -1141
    Multiplier { upper: 0xffa67d1ced7f90f1654b6003443d5b30, lower: 0x40aa66cae94c5f22fe3c362ae5980075 }, // -1140
    Multiplier { upper: 0xcc8530e3f132da5ab76f80029cfde28d, lower: 0x0088523bedd6b28264fcf822514666c4 }, // -1139
    Multiplier { upper: 0xa39dc0b65a8f15155f8c66687d97e870, lower: 0xcd39db6324abc201ea63f9b50dd1ebd0 }, // -1138
    Multiplier { upper: 0x82e49a2b7ba5aa777fa38520647986c0, lower: 0xa42e491c1d5634ce551cc7c40b0e5640 }, // -1137
    Multiplier { upper: 0xd16dc378c5d5dd8bff6c0833d3f5a467, lower: 0x6d16db602ef0547d54fad939ab4a239a }, // -1136
    Multiplier { upper: 0xa78b02c704ab17a332bcd35ca9915052, lower: 0xbdabe2b358c04397772f142e22a1b615 }, // -1135
    Multiplier { upper: 0x8608cf059d55ac828efd75e3badaa6a8, lower: 0x97bcb55c47003612c5bf43581bb491aa }, // -1134
    Multiplier { upper: 0xd6747e6f6222ad9db195896c5e2aa440, lower: 0xf2c78893a4cd23513c65388cf920e910 }, // -1133
    Multiplier { upper: 0xab906525e81bbe17c1446df04b555033, lower: 0xf56c6d42ea3db5da96b76070c74d8740 }, // -1132
    Multiplier { upper: 0x894050eb201631ac9a9d24c03c444029, lower: 0x91238a9bee97c4aedef919f3d2a46c33 }, // -1131
    Multiplier { upper: 0xdb9a1b11ccf04f7a90fb6e00606d3375, lower: 0xb505aa9317593ab164c1c31fb76d79ec }, // -1130
    Multiplier { upper: 0xafae7c0e3d8d0c620d95f199e6bdc2c4, lower: 0x90d1554279142ef4509b027fc5f12e56 }, // -1129
    Multiplier { upper: 0x8c8b9671cad73d1b3e118e14b897cf03, lower: 0xa70dddcec74358c373af353304c0f1df }, // -1128
    Multiplier { upper: 0xe0df571c77bec82b96827cedf4261805, lower: 0xd8162fb13ed2279f1f7ebb84d467e964 }, // -1127
    Multiplier { upper: 0xb3e5df49f9656cefab9b9724c351acd1, lower: 0x79ab595a98a81fb27f989603dd1fedea }, // -1126
    Multiplier { upper: 0x8feb1907fab78a5956161283cf748a41, lower: 0x2e22ade213b9b2f532e07803174cbe55 }, // -1125
    Multiplier { upper: 0xe644f4d99125aa2889bcea6c7f20dd35, lower: 0x169de30352c2b7eeb7cd8cd1bee13087 }, // -1124
    Multiplier { upper: 0xb8372a47a75154ed3afd8856cc1a4a90, lower: 0xdee4b59c42355ff22ca470a7cbe75a06 }, // -1123
    Multiplier { upper: 0x935f55061f7443f0fbfe06abd67b6eda, lower: 0x4bea2ae3682ab32823b6c0863cb914d2 }, // -1122
    Multiplier { upper: 0xebcbbb3cff206cb4c6633ddfbd924af6, lower: 0xdfdd116bd9ddeb736c579a706128214f }, // -1121
    Multiplier { upper: 0xbca2fc30cc19f0909eb5cb19647508c5, lower: 0x7fe40defe17e55f5f0461526b4201aa6 }, // -1120
    Multiplier { upper: 0x96e8c9c0a347f3a6e55e3c14505da09d, lower: 0xffe9a4bfe79844c4c03810ebc34ce21e }, // -1119
    Multiplier { upper: 0xf1747601053fec3e3bc9f9ba1a2f6763, lower: 0x330f6dffd8f3a13acd268179387b0363 }, // -1118
    Multiplier { upper: 0xc129f800d0fff031c96e6161ae8c52b5, lower: 0xc272be6647294dc8a41ecdfa93959c50 }, // -1117
    Multiplier { upper: 0x9a87f99a40ccc027d4584de7bed6a891, lower: 0x685bcb8505baa4a0834bd7fba9447d0d }, // -1116
    Multiplier { upper: 0xf73ff5c39ae13372ed5a163f97bdda82, lower: 0x4092df3b3c5dd4340546265f753a61ad }, // -1115
    Multiplier { upper: 0xc5ccc49c7be75c5bf114de9946317b9b, lower: 0x66dbe5c8fd17dcf66a9e85192a951af1 }, // -1114
    Multiplier { upper: 0x9e3d6a16c985e37cc0dd7ee104f462e2, lower: 0xb8afeb0730dfe3f8554b9dadbbaa7bf4 }, // -1113
    Multiplier { upper: 0xfd2f102475a3059467c8cb01a187049d, lower: 0xf44cab3eb4996cc08878fc492c43f987 }, // -1112
    Multiplier { upper: 0xca8c0ce9f7b59e10530708ce1ad26a17, lower: 0xf6a3bc322a1457006d2d96a0f0366139 }, // -1111
    Multiplier { upper: 0xa209a3ee5fc47e73759f3a3e7bdb8813, lower: 0x2bb6302821a9df338a8adee72691e761 }, // -1110
    Multiplier { upper: 0x81a14ff1e636cb8f914c2e9863160675, lower: 0xbc91c0201aee4c293ba24bec1edb1f81 }, // -1109
    Multiplier { upper: 0xcf687fe97057ac18e879e42704f00a55, lower: 0xfa82cd002b16e041f903acacfe2b659a }, // -1108
    Multiplier { upper: 0xa5ed332126ac89ad86c7e9b8d0c00844, lower: 0xc868a4002278b367fa6956f0cb55eae2 }, // -1107
    Multiplier { upper: 0x84bdc280ebbd3af1389fee2d73ccd36a, lower: 0x39ed50001b93c2b99521125a3c44bbe8 }, // -1106
    Multiplier { upper: 0xd462d0ce45fb9181f43316af1fae1f10, lower: 0x5caee6669286045c21ce83c393a12ca6 }, // -1105
    Multiplier { upper: 0xa9e8a70b6b2fa79b29c2788c195818d9, lower: 0xe3bf1eb87538037ce7d8696942e756eb }, // -1104
    Multiplier { upper: 0x87ed526f88f2ec7c2168607014467a47, lower: 0xe965b22d2a9335fd8646baba9bec4589 }, // -1103
    Multiplier { upper: 0xd97bb718db1e472d02409a4ced3d9073, lower: 0x0f091d1510eb8995a3a45df75fe06f42 }, // -1102
    Multiplier { upper: 0xadfc927a48e505bd9b66e1d72431405c, lower: 0x0c074a7740bc6e114fb6b192b319f29b }, // -1101
    Multiplier { upper: 0x8b30752ea0b737cae2b8b4ac1cf4337c, lower: 0xd66c3b929a30580dd95ef4755c14c216 }, // -1100
    Multiplier { upper: 0xdeb3eeb1012526116ac121136186b8c7, lower: 0xbd79f8ea904d59afc23187222cee0356 }, // -1099
    Multiplier { upper: 0xb2298bc0cdb751a7889a80dc4e05609f, lower: 0xcac7fa55403de15968279f4e8a5802ab }, // -1098
    Multiplier { upper: 0x8e87a300a492a7b93a1533e3719de6e6, lower: 0x3bd32eaa99cb1aadecec7f7208466889 }, // -1097
    Multiplier { upper: 0xe40c380107510c5b9021ec9f1c2fd7d6, lower: 0xc61eb110f611c4497b13ff1cda0a40db }, // -1096
    Multiplier { upper: 0xb6702ccd9f7409e2d9b4bd4c168cacab, lower: 0xd1b22740c4db036dfc0fff4a480833e2 }, // -1095
    Multiplier { upper: 0x91f3570ae5f66e4f14909770120a23bc, lower: 0xa7c1b9009d7c02be633fff6ea0068fe8 }, // -1094
    Multiplier { upper: 0xe98558116ff0b07e874dbf19b6769f94, lower: 0x3f9c5b342f2cd1309ecccbe4333db30d }, // -1093
    Multiplier { upper: 0xbad11341265a26cb9f7165ae2b921943, lower: 0x6616af5cf28a40f3b23d6fe9c297c271 }, // -1092
    Multiplier { upper: 0x95740f6751e1b8a2e5f4515822db4769, lower: 0x1e788c4a5ba1cd8fc1cabfee35463527 }, // -1091
    Multiplier { upper: 0xef2018a54fcf8dd16fed4ef36af87241, lower: 0xca5a7a10929c7c1936113316bba3883e }, // -1090
    Multiplier { upper: 0xbf4ce0843fd93e412657725c55938e9b, lower: 0x084861a6dbb063475e7428defc82d365 }, // -1089
    Multiplier { upper: 0x990a4d36997a98341eac5b7d1142d87c, lower: 0x06a04e1f1626b5d2b1f68718ca0242b7 }, // -1088
    Multiplier { upper: 0xf4dd48575bf759ecfde09261b537c0c6, lower: 0x71007cfe89d789511cbda4f4766a0458 }, // -1087
    Multiplier { upper: 0xc3e439df7cc5e18a64b3a84e2a93009e, lower: 0xc0cd30cba1793aa74a3150c391ee69e0 }, // -1086
    Multiplier { upper: 0x9cb694b2ca37e7a1ea295371bba8cd4b, lower: 0xcd70f3d61ac7621f6e8dda360e5854b4 }, // -1085
    Multiplier { upper: 0xfabdbab7a9f30c364375524f92a7aedf, lower: 0xaf1b1fbcf7a569cbe41629f016f3bab9 }, // -1084
    Multiplier { upper: 0xc897c892ee5c09c502c441d9421fbf19, lower: 0x58e27fca5fb787d65011bb2678c2fbc7 }, // -1083
    Multiplier { upper: 0xa0796d425849a16a689d017a9b4c98e1, lower: 0x13e8663b7fc606450cdafc1ec7026306 }, // -1082
    Multiplier { upper: 0x80612435136e1abb86e4012ee2a3ad80, lower: 0xdcb9eb62cc9e6b6a70af30189f351c05 }, // -1081
    Multiplier { upper: 0xcd6839ee857cf792716cceb16a9f7c01, lower: 0x6129789e1430abdd81184cf431ee933a }, // -1080
    Multiplier { upper: 0xa453618b9dfd92db8df0a55abbb2c99a, lower: 0xb4212d4b435a23179a79d729c18ba8fc }, // -1079
    Multiplier { upper: 0x8375e7a2e4cadbe2d7f3b77bc95bd47b, lower: 0xc34dbdd5cf7b4f46152e45bb013c8730 }, // -1078
    Multiplier { upper: 0xd2563f6b07aaf96af31f8bf9422c872c, lower: 0x6baf9622e592187021e3a2c4cec73eb3 }, // -1077
    Multiplier { upper: 0xa844ff88d2ef2def28e6099434f06c23, lower: 0x895944e8b7a8138ce7e94f03d89f655c }, // -1076
    Multiplier { upper: 0x869d993a4258f18c20b807a9c3f389b6, lower: 0x077a9d86f95342d71fedd8cfe07f844a }, // -1075
    Multiplier { upper: 0xd7628ec39d5b1c13678cd90f9fec0f89, lower: 0xa590fc0b288537be997c8e1967326d42 }, // -1074
    Multiplier { upper: 0xac4ed89c7de27cdc52d7140c7ff00c6e, lower: 0x1e0d966f539dc6321463a4e11f5b8a9b }, // -1073
    Multiplier { upper: 0x89d8ad49fe4eca49dbdf433d33267058, lower: 0x180adebf7617d1c1a9e950b41916087c }, // -1072
    Multiplier { upper: 0xdc8de20ffd4add42f9653861eb70b3c0, lower: 0x2677cacbf0261c690fdbb4535b5673fa }, // -1071
    Multiplier { upper: 0xb07181a6643be4359450f9e7ef8d5c99, lower: 0xb85fd56ff351b0540cafc375e2ab8ffb }, // -1070
    Multiplier { upper: 0x8d279aeb83631cf7a9da6186593de3ae, lower: 0x2d19778cc2a7c0433d59692b1bbc7330 }, // -1069
    Multiplier { upper: 0xe1d8f7df389e94bf762a35a3c1fc9f7d, lower: 0x14f58c146aa6006b955bdb782c60b84c }, // -1068
    Multiplier { upper: 0xb4ad9318fa1876ff91bb5e1c9b307f97, lower: 0x43f7a3438884cd22dde315f9bd1a2d0a }, // -1067
    Multiplier { upper: 0x908adc13fb46c5994162b1b07c26cc79, lower: 0x032c829c6d370a824b1c119497482408 }, // -1066
    Multiplier { upper: 0xe74493532ba46f5b9bd11c4d93714728, lower: 0x0514042d7b8b4403ab601c20f20d0672 }, // -1065
    Multiplier { upper: 0xb903a90f561d25e2e30db03e0f8dd286, lower: 0x6a7669bdfc6f699c8919b01a5b3d9ec2 }, // -1064
    Multiplier { upper: 0x9402eda5de7db7e8b5a48cfe72d7db9e, lower: 0xbb91ee3196bf87b06dae267b7c314bcf }, // -1063
    Multiplier { upper: 0xecd17c3c972f8ca7890747fd848c9297, lower: 0x928316b5bdff3f80af7d0a5f2d1bac7d }, // -1062
    Multiplier { upper: 0xbd746363ac260a1fa0d29ffe03a3a879, lower: 0x4202789164cc32cd5930d518f0e2f064 }, // -1061
    Multiplier { upper: 0x97904f82f01e6e7fb3dbb3319c82ed2d, lower: 0xce68607450a35bd77a8d7747271bf384 }, // -1060
    Multiplier { upper: 0xf2807f37e6971732b95f851c2d9e4849, lower: 0x4a409a53b43892f25daf253ea4f9859f }, // -1059
    Multiplier { upper: 0xc20065c6521278f561193749be1839d4, lower: 0x3b66e1dc902d425b7e25b76550c79e19 }, // -1058
    Multiplier { upper: 0x9b33849ea80ec72ab4142c3afe79c7dc, lower: 0xfc524e4a0cf101e2cb515f84409fb1ae }, // -1057
    Multiplier { upper: 0xf8526dcaa67e0b778686ad2b30c2d961, lower: 0x93b6e3a9ae4e696adee898d39a991c49 }, // -1056
    Multiplier { upper: 0xc6a857d551fe6f92d2055755c09be11a, lower: 0xdc924fbaf1d854557f207a42e21416a1 }, // -1055
    Multiplier { upper: 0x9eed13110e65260f0e6aac449a164daf, lower: 0x16db72fbf4ad104465b395024e767881 }, // -1054
    Multiplier { upper: 0xfe481e81b0a1d67e7d777a075cf07c4b, lower: 0x57c584c654481a07091f54d07d8a5a67 }, // -1053
    Multiplier { upper: 0xcb6ce5348d4e4531fdf92e6c4a59fd09, lower: 0x13046a38436ce19f3a7f770d313b7b86 }, // -1052
    Multiplier { upper: 0xa2bd842a0aa50427fe60f1f03b7b30d4, lower: 0x0f36bb6035f0b47f61ff9270f42f9605 }, // -1051
    Multiplier { upper: 0x823136880884035331e727f362c8f3dc, lower: 0xd8f895e6918d5d32b4cc752729bfab37 }, // -1050
    Multiplier { upper: 0xd04ebda674066bb84fd83febd141862e, lower: 0x27f4230a827bc851214721d842cc4525 }, // -1049
    Multiplier { upper: 0xa6a56485299ebc937313665641013824, lower: 0xecc34f3b9b9639da8105b4ad023d041d }, // -1048
    Multiplier { upper: 0x85511d37547efd42c275eb783400f9b7, lower: 0x23cf72961611c7e200d15d5734fd9ce4 }, // -1047
    Multiplier { upper: 0xd54e952553fe62046a56458d20018f8b, lower: 0x6c7f1dbcf01c730334822ef1ee6294a0 }, // -1046
    Multiplier { upper: 0xaaa5441ddccb819d21de9e0a80013fa2, lower: 0xbd327e30c016c268f6ce8bf4beb543b4 }, // -1045
    Multiplier { upper: 0x8884367e4a3c67b0e7e54b3b999a994e, lower: 0xfdc1fe8d66789b872bd86ff6fef7695d }, // -1044
    Multiplier { upper: 0xda6d23fd4393d91b0ca211f8f5c4287e, lower: 0x62cffdaf0a5a9271dfc0b324cb257561 }, // -1043
    Multiplier { upper: 0xaebdb664360fe0e27081a7fa5e3686cb, lower: 0x823ffe25a1e20ec17fcd5c1d6f512ab4 }, // -1042
    Multiplier { upper: 0x8bcaf8502b3fe71b8d348661e4f86bd6, lower: 0x01cccb514e4e7234663de34abf74222a }, // -1041
    Multiplier { upper: 0xdfab26e6ab9971c5aeba709ca18d7956, lower: 0x6947abb54a171d20a396387798b9d042 }, // -1040
    Multiplier { upper: 0xb2ef525222e127d1589526e3b4712dde, lower: 0xba9fbc9108127db3b611c6c613c7d9cf }, // -1039
    Multiplier { upper: 0x8f25db74e8b41fdaad441f1c905a8b18, lower: 0x954c96da6cdb97c2f80e389e76397b0c }, // -1038
    Multiplier { upper: 0xe5095f217453662aaed364fa8090de8d, lower: 0xbbadbe2a47c5bf9e59b05a97238f2b46 }, // -1037
    Multiplier { upper: 0xb73ab28129dc51bbbf0f83fb9a0d7ed7, lower: 0xc957cb550637cc7eae26aedf4fa5bc38 }, // -1036
    Multiplier { upper: 0x92955b9a87e374963272cffc7b3dff13, lower: 0x07796f77382ca3988b52257f72eafcfa }, // -1035
    Multiplier { upper: 0xea889290d96bedbd1d847ffa5ec9981e, lower: 0x725be58b8d1438f4121d08cbeb1194c2 }, // -1034
    Multiplier { upper: 0xbba07540adeff164179d332eb23ae018, lower: 0x5b7cb7a2d74360c341b0d3d655a7aa35 }, // -1033
    Multiplier { upper: 0x9619f766f18cc11cdfb0f5bef4fbe679, lower: 0xe2ca2c8245cf809c348d76451152ee91 }, // -1032
    Multiplier { upper: 0xf0298bd7e8e134faff81893187f970c3, lower: 0x0476ad9d3c7f342d20e256d4e884b0e8 }, // -1031
    Multiplier { upper: 0xc0213cacba4dc3fbff9ad4279ffac09c, lower: 0x0392247dc9ff5cf0e71b78aa539d5a53 }, // -1030
    Multiplier { upper: 0x99b4308a2ea49cc99948a9b94cc89a16, lower: 0x6941b6cb07ff7d8d85af93bb76177b76 }, // -1029
    Multiplier { upper: 0xf5ed1a76b10761428edaa9287ada9023, lower: 0xdb9c57ab3fff2f48d5e5b92bf0259256 }, // -1028
    Multiplier { upper: 0xc4bdaec55a6c4dced8aeedb9fbe20ce9, lower: 0x7c7d12ef6665bf6d77eafa898ceadb78 }, // -1027
    Multiplier { upper: 0x9d648bd11523717246f257c7fcb4d721, lower: 0x30640f25eb8499245fef2ed470bbe2c6 }, // -1026
    Multiplier { upper: 0xfbd412e821d24f1d3e508c732dee2501, lower: 0xe7067ea3126dc1d3ccb1e4871ac637a4 }, // -1025
    Multiplier { upper: 0xc976758681750c17650d3d28f18b50ce, lower: 0x526b988275249b0fd6f4b6d27bd1c61d }, // -1024
    Multiplier { upper: 0xa12b91386790d6791da430ed8e090d71, lower: 0xdb8946cec41d48d978c3c5752fdb04e4 }, // -1023
    Multiplier { upper: 0x80efa76052da452db150272471a0d78e, lower: 0x493a9f0bd0176d7ac703045dbfe26a50 }, // -1022
    Multiplier { upper: 0xce4c3f0084906eaf8219d83a4f67bf4a, lower: 0x0ec431ac80257bf7a4d1a095ffd0aa19 }, // -1021
    Multiplier { upper: 0xa509cc006a0d255934e179c83f8632a1, lower: 0xa569c156cceac992ea414d44cca6ee7b }, // -1020
    Multiplier { upper: 0x8407d666bb3db77a90b4616cff9e8ee7, lower: 0xb787cddf0a556e0f21cdd76a3d525862 }, // -1019
    Multiplier { upper: 0xd33fbd712b95f25db453cf14cc30e4a5, lower: 0xf272e2fe76ef167e9c7c8bdd2eea2703 }, // -1018
    Multiplier { upper: 0xa8ffcac0efab284af6a9727709c0b6eb, lower: 0x285be8cb9258decbb063a31758bb5269 }, // -1017
    Multiplier { upper: 0x8733089a5955b9d59221285f3b009255, lower: 0xb9e320a2db7a4bd626b61c12ad62a854 }, // -1016
    Multiplier { upper: 0xd851a75d5bbc5c88e9cea6fec4cdb6ef, lower: 0x8fd1cdd15f2a12f03df02ceaaf044086 }, // -1015
    Multiplier { upper: 0xad0e1f7de2fd16d3ee3eebff03d7c58c, lower: 0x730e3e4118ee758cfe59bd888c0366d2 }, // -1014
    Multiplier { upper: 0x8a71b2cb1bfdabdcbe98bccc03130470, lower: 0x5c0b6500e0bec470cb7afe06d6691f0f }, // -1013
    Multiplier { upper: 0xdd82b7ab5ffc462dfdc12e13381e6d80, lower: 0x93456e67cdfe071adf2b300af0a831b1 }, // -1012
    Multiplier { upper: 0xb1355fbc4cc9d1be649a8b42934b8acd, lower: 0x429df1eca4cb38e24c228cd58d535af4 }, // -1011
    Multiplier { upper: 0x8dc44c96a3d4a7cb83aed5cedc3c6f0a, lower: 0x9bb18e56ea3c2d81d6820a44710f7bf6 }, // -1010
    Multiplier { upper: 0xe2d3adbdd2edd9459f7e22e49393e4dd, lower: 0xc5e8e3be43937c02f0d0106d81b25ff0 }, // -1009
    Multiplier { upper: 0xb5762497dbf17a9e1931b583a9431d7e, lower: 0x37ed82fe9c75fccf270cd9f1348eb327 }, // -1008
    Multiplier { upper: 0x912b50797cc12ee4e0f4913621027dfe, lower: 0x932468cbb05e63d8ec0a47f42a0bc285 }, // -1007
    Multiplier { upper: 0xe8454d8f2e01e4a167edb5236803fcca, lower: 0x85070e12b3ca395b1343a6537679373c }, // -1006
    Multiplier { upper: 0xb9d10ad8f19b1d4decbe2a82b99cca3b, lower: 0x9d9f3e755ca1c77c0f6951dc5ec75f63 }, // -1005
    Multiplier { upper: 0x94a73be0c148e43e56fe8868947d6e96, lower: 0x17b2985de3b49f9672baa7e37f05e5e9 }, // -1004
    Multiplier { upper: 0xedd85fce020e39fd57fda70dba624a89, lower: 0xbf8426fc9f8765bd845dd96bfe6fd641 }, // -1003
    Multiplier { upper: 0xbe46b30b34d82e64466485a4951b6ed4, lower: 0x99368596e605eafe037e478998597834 }, // -1002
    Multiplier { upper: 0x98388f3c2a468b836b839e1d4415f243, lower: 0xadc537abeb37ef319c650607ad14602a }, // -1001
    Multiplier { upper: 0xf38db1f9dd3dac0578d2969539bcb6d2, lower: 0xafa1f2acab8cb1e8fa3b3cd914ed66a9 }, // -1000
    Multiplier { upper: 0xc2d7c194b0fe233793dbabaa9496f8a8, lower: 0x8c818ef0893d5b20c82f63e0dd8ab887 }, // -999
    Multiplier { upper: 0x9bdfce108d981c2c764956221078c6ed, lower: 0x3d34725a076448e7068c4fe717a22d39 }, // -998
    Multiplier { upper: 0xf9661680e28cf9e0bd422369b3f4717b, lower: 0x9520b6f6723a0e3e70e07fd825d0485b }, // -997
    Multiplier { upper: 0xc784decd820a618097681c548ff6c12f, lower: 0xaa80925ec1c80b652719ffe01e4039e3 }, // -996
    Multiplier { upper: 0x9f9d7f0ace6eb466df867d10732bcdbf, lower: 0xbb9a0eb234a0091db8e1998018336182 }, // -995
    Multiplier { upper: 0xff6264de1717870aff3d94e71eac7c65, lower: 0xf8f67de9edccdb62c168f599c052359d }, // -994
    Multiplier { upper: 0xcc4eb718127938d598fe10b8e556c9eb, lower: 0x2d91fe54be3d7c4f0120c47b0041c47e }, // -993
    Multiplier { upper: 0xa3722c1341fa93de13fe73c71ddf07ef, lower: 0x57a7feaa31cac9d8cdb3d062669b0398 }, // -992
    Multiplier { upper: 0x82c1bcdc34c8764b4331f638e4b26cbf, lower: 0x79533221c16f07e0a48fd9e852159c79 }, // -991
    Multiplier { upper: 0xd135faf9ee0d8a12051cbd27d450adff, lower: 0x28851d02cf180c9aa0e62973b688fa5c }, // -990
    Multiplier { upper: 0xa75e62618b3e080e6a7d641fdd0d57ff, lower: 0x539db0cf0c133d4880b821295ed3fb7d }, // -989
    Multiplier { upper: 0x85e51b813c31a00b886450197da44665, lower: 0xdc7e270c09a8fdd39a2ce7544bdcc931 }, // -988
    Multiplier { upper: 0xd63b5f352d1c3345a706e68f2f6d3d6f, lower: 0xc7303e79a90e62ec29e17220796141e7 }, // -987
    Multiplier { upper: 0xab62b290f0e35c37b8d2520c25f0fdf3, lower: 0x05c031faeda51bf021812819fab434b9 }, // -986
    Multiplier { upper: 0x891bc20d8d82b02c93db74d684c0cb28, lower: 0xd1668e6257b7498ce79a867b2ef69094 }, // -985
    Multiplier { upper: 0xdb5f9ce27c044d141fc587bda1347841, lower: 0x4f0a7d6a25f20f47d8f73d91e4bdb420 }, // -984
    Multiplier { upper: 0xaf7fb0b5300370dce6379fcae75d2d01, lower: 0x0c086454eb280c397a5f6474b6fe29b3 }, // -983
    Multiplier { upper: 0x8c6626f7599c5a4a51c6196f1f7dbd9a, lower: 0x7006b6aa55b9a3612eb2b6c3c598215c }, // -982
    Multiplier { upper: 0xe0a3718bc293c3aa1c7028b1cbfc6290, lower: 0xb33df110892905684ab78ad2d5c03560 }, // -981
    Multiplier { upper: 0xb3b5f46fcedc9c8816c0208e3cc9e873, lower: 0xc297f40d3a873786a22c6f0f1166911a }, // -980
    Multiplier { upper: 0x8fc4c38ca57d4a067899b3a4fd6e538f, lower: 0xcedff670fb9f5f9ee8238c0c0deba748 }, // -979
    Multiplier { upper: 0xe6079f476f2edcd7275c52a1957d527f, lower: 0xb166571b2c323297d9d279ace312a540 }, // -978
    Multiplier { upper: 0xb8061905f28be3df52b0421addfddb99, lower: 0x5ab845af568e8edfe1752e23e8dbb766 }, // -977
    Multiplier { upper: 0x93381404c20983190ef368157e64afad, lower: 0xe22d048c453ed8b31ac424e987162c52 }, // -976
    Multiplier { upper: 0xeb8cecd469a8d1c1b185735597077f7c, lower: 0x9d14d413a1fe2784f7a03b0f3e89e083 }, // -975
    Multiplier { upper: 0xbc70bd76baed749af46ac2aadf3932ca, lower: 0x1743dcdc81981f9d92e695a5cba18069 }, // -974
    Multiplier { upper: 0x96c097922f245d48c3889bbbe5c75bd4, lower: 0xdf697d7d3479b2e475854484a2e799ed }, // -973
    Multiplier { upper: 0xf13425b6b1d3c8746c0dc5f96fa55fba, lower: 0xff0f2f2eba5c516d88d53a6dd1728fe2 }, // -972
    Multiplier { upper: 0xc0f6849227dca05d233e37fabfb77fc8, lower: 0xcc0c25befb7d0df13a442ebe4128731b }, // -971
    Multiplier { upper: 0x9a5ed074ecb0804a82982cc8995f996d, lower: 0x7009b7cbfc640b2761d0256500ed28e3 }, // -970
    Multiplier { upper: 0xf6fe1a54ade733aa6a8d14742898f57b, lower: 0xe675f2dffa39ab723619d56e67e1db04 }, // -969
    Multiplier { upper: 0xc59815108b1f5c88553da9f686e0c463, lower: 0x1ec4c24cc82e22c1c4e1778b864e48d0 }, // -968
    Multiplier { upper: 0x9e13440d3c1916d3776487f86be70382, lower: 0x7f03cea3d3581bce371ac609383ea0a7 }, // -967
    Multiplier { upper: 0xfceba0152cf4f15258a0d98d79719f37, lower: 0x319fb1061ef35fb0582ad67526ca9aa4 }, // -966
    Multiplier { upper: 0xca5619aa8a5d8ddb7a1a47a46127b292, lower: 0x8e195a6b4bf5e626acef11f7523baeea }, // -965
    Multiplier { upper: 0xa1de7aeed517a4af94e1d2e9e752f542, lower: 0x0b477b89099184ebbd8c0e5f74fc8bee }, // -964
    Multiplier { upper: 0x817ec8bf10dfb6f2dd817587ec425dce, lower: 0x6f6c62d407a79d8964700b7f90ca098b }, // -963
    Multiplier { upper: 0xcf314131b49924b7c8cf2273139d62e3, lower: 0xe57a37b9a5d8fc0f0719abff4e100f45 }, // -962
    Multiplier { upper: 0xa5c100f4907a83c63a3f4ec27617824f, lower: 0xeac82c9484ad96726c1489990b400c37 }, // -961
    Multiplier { upper: 0x849a672a0d2ecfd1c832a5685e79350c, lower: 0xbbd356dd36f145285676d47a6f66702c }, // -960
    Multiplier { upper: 0xd42a3ea9aeb14c82d9eaa240972854e1, lower: 0x2c8557c857e86ea6f0be20c3e570b37a }, // -959
    Multiplier { upper: 0xa9bb65548bc10a0247eee833ac2043e7, lower: 0x56d11306acb9f21f26fe809cb78d5c62 }, // -958
    Multiplier { upper: 0x87c91ddd3c9a6e68398becf6234d031f, lower: 0x78a7426bbd618e7f526533b092d77d1b }, // -957
    Multiplier { upper: 0xd941c961fa90b0a6c2797b236bae6b65, lower: 0x8dd86a45fbcf4a6550a1ec4db7bf2e91 }, // -956
    Multiplier { upper: 0xadce3ab4c873c08568612f4f895855ea, lower: 0xd7e05504c972a1eaa6e7f03e2c98f20e }, // -955
    Multiplier { upper: 0x8b0b622a39f6339ded1a8c3fa11377ef, lower: 0x1319dd9d6df54e555253269823ad8e72 }, // -954
    Multiplier { upper: 0xde789d105cbd1f6314f746cc34ebf318, lower: 0x1e8fc8fbe32216eeea1ea4269f7c171c }, // -953
    Multiplier { upper: 0xb1fa17404a30e5e8dd929f09c3eff5ac, lower: 0xe53fd3fcb5b4df25881883521930127d }, // -952
    Multiplier { upper: 0x8e61ac336e8d84ba4adbb26e36599157, lower: 0x1dcca996f7c3e5b7a0139c41adc00eca }, // -951
    Multiplier { upper: 0xe3cf79ebe415a12a115f83e38a28e88b, lower: 0x62e10f57f2d30925ccec2d35e2cce477 }, // -950
    Multiplier { upper: 0xb63f94bcb677b421a77f9cb60820ba09, lower: 0x1be73f798f0f3a84a3f0242b1bd71d2c }, // -949
    Multiplier { upper: 0x91cc76fd5ec629b485ffb091a01a2e6d, lower: 0xafec32c7a5a5c86a1cc01cef4978e423 }, // -948
    Multiplier { upper: 0xe94724c897a375eda332b41c335d1715, lower: 0xe646b7a5d5d60d76946694b20f27d36b }, // -947
    Multiplier { upper: 0xba9f50a0794f918ae8f55ce35c4a78de, lower: 0x51d22c84ab11a45edd1edd5b3f530f89 }, // -946
    Multiplier { upper: 0x954c4080610c746f20c44a4f7d0860b1, lower: 0xdb0e8a03bc0e1d18b0e57de2990f3fa1 }, // -945
    Multiplier { upper: 0xeee06733ce7a53e5013a107f2e73cde9, lower: 0x5e7da99f9349c827816f2fd0f4e5329b }, // -944
    Multiplier { upper: 0xbf19ec2971fb7650cdc80d328b8fd7ed, lower: 0xe531547fa907d352cdf28ca72a50f549 }, // -943
    Multiplier { upper: 0x98e189bac195f840a4a00a8ed60cacbe, lower: 0x50f44399540642a8a4c20a1f550d9107 }, // -942
    Multiplier { upper: 0xf49c0f9135bcc0676dccddb1567aadfd, lower: 0x4e539f5bb9a39ddaa13676988815b4d8 }, // -941
    Multiplier { upper: 0xc3b00c742afd66b924a3e48ddec88b31, lower: 0x0b7619162e1c7e4880f85ee06cde2a46 }, // -940
    Multiplier { upper: 0x9c8cd6c355978560ea1cb6d7e56d3c27, lower: 0x3c5e7a7824e3983a00c6b24d23e4ee9f }, // -939
    Multiplier { upper: 0xfa7af13888f26f01769457bfd57b9371, lower: 0xfa30c3f36e38f390013dea15063b1764 }, // -938
    Multiplier { upper: 0xc8625a93a0c1f26792104633112fa927, lower: 0xfb5a365c582d8fa66764bb4404fc12b7 }, // -937
    Multiplier { upper: 0xa04eaedc809b2852db403828da8c8753, lower: 0x2f7b5eb0468ad951ec5095d003fcdbc5 }, // -936
    Multiplier { upper: 0x803ef24a007c204249002ced7ba39f75, lower: 0xbf95e559d208addb2373ab0ccffd7c9e }, // -935
    Multiplier { upper: 0xcd3183a99a60339d4199e17bf905cbef, lower: 0x98efd55c8341162b6bec44e14cc8c763 }, // -934
    Multiplier { upper: 0xa4279c87aeb35c7dce14b4632d9e3cbf, lower: 0xad8caab06900de8923236a4dd70705e9 }, // -933
    Multiplier { upper: 0x8352e39fbef5e397d810904f57b1ca32, lower: 0xf13d5559ed9a4ba0e8e921d7df38d187 }, // -932
    Multiplier { upper: 0xd21e38ff97efd28c8ce74d4bbf82dd1e, lower: 0x4ec8888fe290790174a8362631f48272 }, // -931
    Multiplier { upper: 0xa8182d994659753d3d85d76fcc68b0e5, lower: 0x0bd3a0731ba6c7345d535e84f4c39b8e }, // -930
    Multiplier { upper: 0x8679be14384790fdcad179263d208d84, lower: 0x097619f5afb89f5d1775e5372a36160c }, // -929
    Multiplier { upper: 0xd72930205a0c1b2faae8c1d6c83415a0, lower: 0x0f235cbc4c5a9894f2563b8b76bcf012 }, // -928
    Multiplier { upper: 0xac20f34d14d67c262253ce456cf677b3, lower: 0x3f4f7d6370487a10c1de96092bca59a8 }, // -927
    Multiplier { upper: 0x89b3f5d743dec9b81b763e9df0c52c8f, lower: 0x65d9311c59d394da34b211a0efd51487 }, // -926
    Multiplier { upper: 0xdc5322f2063142c02bf0642fe7a1e0e5, lower: 0x6fc1e82d5c85baf6bab6829b1954eda4 }, // -925
    Multiplier { upper: 0xb042825b38276899bcc0502652e7e71d, lower: 0xf301868ab06afbf8955ecee27aaa57b6 }, // -924
    Multiplier { upper: 0x8d0201e29352ba149700401ea8b985b1, lower: 0x8f346ba226bbfcc6dde5724ec888462c }, // -923
    Multiplier { upper: 0xe19ccfd0ebb79020f19a00310df5a2b5, lower: 0xb1ed7903712cc7a4963bea17a7407046 }, // -922
    Multiplier { upper: 0xb47d730d895fa680c14800273e5e1bc4, lower: 0x8e579402c0f09fb6de9654dfb90059d1 }, // -921
    Multiplier { upper: 0x90645c0ad44c8533cdd33352984b496a, lower: 0x0b7943356726e62be54510b2fa66ae41 }, // -920
    Multiplier { upper: 0xe706f9aaed473b86161eb88426dedbdc, lower: 0xdf286b88a50b09dfd53b4deb2a3de39b }, // -919
    Multiplier { upper: 0xb8d261558a9f62d1ab4bc6d01f18afe3, lower: 0xe5b9efa08408d4b310fc3e55bb64b616 }, // -918
    Multiplier { upper: 0x93db81113bb2b57489096bd9b27a264f, lower: 0xeafb261a033a43c273fcfeaafc5091ab }, // -917
    Multiplier { upper: 0xec92681b92b788ba74dbdfc2b729d6e6, lower: 0x44c509c3385d39371ffb311193b41c45 }, // -916
    Multiplier { upper: 0xbd41ece2dbc606fb90afe6355f54abeb, lower: 0x6a373b02937dc75f4cc8f40e0fc349d1 }, // -915
    Multiplier { upper: 0x9767f0b57c9e6bfc73bfeb5de5dd5655, lower: 0xee92959ba9316c4c3d6d900b3fcf6e41 }, // -914
    Multiplier { upper: 0xf23fe788c763dffa52ccabc96fc88a23, lower: 0x1750ef5f751be079fbe28011ffb24a01 }, // -913
    Multiplier { upper: 0xc1ccb93a391cb32ea8a3bca1263a081c, lower: 0x12a725e5f7498061964eccdb32f50801 }, // -912
    Multiplier { upper: 0x9b0a2dc82db08f5886e963b41e94d349, lower: 0xa885b7eb2c3acd1adea570af5bf7399a }, // -911
    Multiplier { upper: 0xf8104940491a7ef40b0f05ecfdbaeba9, lower: 0x0da2bfdead2ae1c4976f1ab22cbec290 }, // -910
    Multiplier { upper: 0xc6736dcd0748659008d8d18a64958954, lower: 0x0ae8997ef0ef1b03ac58e22823cbceda }, // -909
    Multiplier { upper: 0x9ec2be3d9f6d1e0cd3e0a7a1ea113aa9, lower: 0xa253adff2725af36237a4e8683097248 }, // -908
    Multiplier { upper: 0xfe046395cbe1c9ae1fcdd903101b910f, lower: 0x6a1f7ccb71d5e5236bf6e40a6b425073 }, // -907
    Multiplier { upper: 0xcb36b6116fe7d48b4ca4ad9c0ce2da72, lower: 0xbb4c63d5f4ab1db5eff8b66ebc350d29 }, // -906
    Multiplier { upper: 0xa2922b412653106f7083be1670b57b8e, lower: 0xfc3d1cab2a227e2b266091f2302a70ee }, // -905
    Multiplier { upper: 0x820e8900eb75a6bf8d3631ab8d5dfc72, lower: 0x636416ef54e864ef51e6db2826885a58 }, // -904
    Multiplier { upper: 0xd017419b1255d798e1f04f78e22ffa50, lower: 0x9f068b1887da3b18830af8403da6f6f2 }, // -903
    Multiplier { upper: 0xa6790148db77dfad818d0c60b4f32ea6, lower: 0xe59ed5ad397b627a026f2d0031525f28 }, // -902
    Multiplier { upper: 0x852d9aa0af9319579ad73d1a2a5c2552, lower: 0x514bde242dfc4ec801f28a668ddb7f54 }, // -901
    Multiplier { upper: 0xd515c4344c1e8ef2915861c376f9d550, lower: 0x8212fd06affa17a6698410a4162bfeec }, // -900
    Multiplier { upper: 0xaa77d029d67ed8c20de04e35f8c7ddda, lower: 0x01a8ca6bbffb461ebad00d5011bccbf0 }, // -899
    Multiplier { upper: 0x885fd9bb11ff13ce71803e9193d317e1, lower: 0x9aed6ebc9995d1b22f0cd7734163d65a }, // -898
    Multiplier { upper: 0xda32f5f81ccb52e3e8cd30e8ec84f302, lower: 0x917be460f5bc82b6b1ae2585356c8a29 }, // -897
    Multiplier { upper: 0xae8f2b2ce3d5dbe9870a8d87239d8f35, lower: 0x412fe9e72afd355ef48b51375df06e87 }, // -896
    Multiplier { upper: 0x8ba5bc23e977e32138d53e05b617a5c4, lower: 0x342654b8ef30f77f2a090dc5e4c0586c }, // -895
    Multiplier { upper: 0xdf6f936ca8bfd1cec155300923590939, lower: 0xed0a2127e51b25984341afa3079a2713 }, // -894
    Multiplier { upper: 0xb2bfa923ba330e3f0110f33a82ada0fb, lower: 0x24081a8650e28479cf67bfb59fae85a9 }, // -893
    Multiplier { upper: 0x8effba82fb5c0b659a73f5c8688ae72f, lower: 0x50067b9ea71b9d2e3f8632f7b2f20487 }, // -892
    Multiplier { upper: 0xe4cc5d9e5ef9abd5c3ecbc73da77d84b, lower: 0xb33d929771c5c849ff3d1e591e50073f }, // -891
    Multiplier { upper: 0xb709e47eb26156449cbd638fe1f979d6, lower: 0x28fe0edf8e37d36e65ca7eadb1d99f66 }, // -890
    Multiplier { upper: 0x926e50655b8111d07d644fa64e612e44, lower: 0xed980be60b5fdc58516ecbbe27e14c51 }, // -889
    Multiplier { upper: 0xea4a1a3bc59b4fb3fbd3b2a3b09b7d3b, lower: 0x15c01309abcc93c0824adf96a63546e8 }, // -888
    Multiplier { upper: 0xbb6e7b63047c3fc32fdc8ee95a15fdc8, lower: 0xde33426e230a0fcd3508b2deeb5dd253 }, // -887
    Multiplier { upper: 0x95f1fc4f36c9cc9c264a0bede1ab316d, lower: 0x7e8f68581c080ca42a6d5be58917db76 }, // -886
    Multiplier { upper: 0xefe993b1f142e0f9d6dcdfe302ab8248, lower: 0xca7f0d59c673476d10aef96f41bfc589 }, // -885
    Multiplier { upper: 0xbfee0fc18dcf1a6178b0b31c0222cea0, lower: 0xa1ff3de16b8f6c57408bfabf67cc9e08 }, // -884
    Multiplier { upper: 0x998b3fce0b0c151ac6f3c27cce823ee6, lower: 0xe7ff64b4560c56ac33a32eff863d4b39 }, // -883
    Multiplier { upper: 0xf5ab9949ab46882ad7ec6a614a69fe3e, lower: 0x3fff0786f013bde0529eb198d6c8785c }, // -882
    Multiplier { upper: 0xc489476e229ed3557989eeb43b87fe98, lower: 0x33326c6bf342fe4d0ee55ae0abd3937d }, // -881
    Multiplier { upper: 0x9d3a9f8b4ee575ddfad4bef696066546, lower: 0x8f5b89eff5cf31d73f1de24d5642dc64 }, // -880
    Multiplier { upper: 0xfb90ff454b08bc965e21318a89a3d53d, lower: 0xb22c0fe656184fbecb6303aef06afa39 }, // -879
    Multiplier { upper: 0xc940cc376f3a30784b4dc13ba14fddca, lower: 0xf4f00cb844e03fcbd5e8cfbf26bbfb61 }, // -878
    Multiplier { upper: 0xa100a35f8c2e8d2d090b00fc810cb16f, lower: 0x2a59a3c69d80330977ed72ff522ffc4e }, // -877
    Multiplier { upper: 0x80cd4f7fa35870f0d408cd96cda3c125, lower: 0xbb7ae96bb1335c0793245bff74f3303e }, // -876
    Multiplier { upper: 0xce154bff6bc0b4b486747c247c393509, lower: 0x2bf7dbdf81ebc6728506f998bb1eb396 }, // -875
    Multiplier { upper: 0xa4ddd665efcd5d5d385d301d302dc407, lower: 0x565fe31934bc9ec20405947a2f4bc2df }, // -874
    Multiplier { upper: 0x83e4ab84bfd77de42d1759b0f357d005, lower: 0xdeb31c142a307f019cd14394f2a3024c }, // -873
    Multiplier { upper: 0xd30778d466259639e1bef5e7ebbfb33c, lower: 0x9784f9b9dd1a64cf614ed287ea9e6a13 }, // -872
    Multiplier { upper: 0xa8d2c71051b7ab61816591865632f5ca, lower: 0x12d0c7c7e4151d72b43f0ed3221854dc }, // -871
    Multiplier { upper: 0x870f05a6a7c622b46784746b7828c4a1, lower: 0xa8a706398344178ef698d8a8e8137716 }, // -870
    Multiplier { upper: 0xd818090aa609d120a5a0ba458d0e0769, lower: 0x0dd809f59ed358e4bdc15aa7d9b8be8a }, // -869
    Multiplier { upper: 0xace0073bb807da808480950470d805ed, lower: 0xa4acd4c47f0f7a5097cde21fe160986e }, // -868
    Multiplier { upper: 0x8a4cd2962cd315339d33aa69f3e004be, lower: 0x1d57109d3272c840797181b31ab3ad25 }, // -867
    Multiplier { upper: 0xdd47b756ae1e8852951f770fec99a130, lower: 0x2ef1b42eb71e0d33f582691e911f7b6f }, // -866
    Multiplier { upper: 0xb1062c4558186d0eddb2c5a656e14dc0, lower: 0x258e29bef8e4d75cc468541874192f8c }, // -865
    Multiplier { upper: 0x8d9e89d11346bda57e289e1eabe77166, lower: 0x8471baff2d83df7d69ed10139014260a }, // -864
    Multiplier { upper: 0xe29742e81ed795d596a76364463f1bd7, lower: 0x3a4f919848d2ff2f0fe1b35280203cdc }, // -863
    Multiplier { upper: 0xb545cf2018ac77de121f82b69e98e312, lower: 0x950c7479d3dbff58d9815c420019ca49 }, // -862
    Multiplier { upper: 0x9104a5b346f05fe4db4c6892187a4f42, lower: 0x10d6c394a97ccc4714677d0199ae3b6e }, // -861
    Multiplier { upper: 0xe8076f853e4d663af87a40e9c0c3b203, lower: 0x4e246c210f2e13a4ed72619c2916c57d }, // -860
    Multiplier { upper: 0xb99f8c6a983deb626061cd87cd695b35, lower: 0xd81d234da5be761d8ac1e7b020df0464 }, // -859
    Multiplier { upper: 0x947fa38879cb22b519e7d79fd7877c2b, lower: 0x134a82a484985e7e089b1fc01a4c0383 }, // -858
    Multiplier { upper: 0xed9905a729450454f63fbf6625a59378, lower: 0x1edd9dd4075a30c9a75e99335d466c05 }, // -857
    Multiplier { upper: 0xbe140485ba9d9d10c4ffcc51b7b7a92c, lower: 0xe57e17dcd2ae8d6e1f7ee0f5e438566a }, // -856
    Multiplier { upper: 0x9810039e2ee47da703ffd6a7c62c8757, lower: 0x1dfe797d75587124e5ff1a5e502d11ef }, // -855
    Multiplier { upper: 0xf34cd296b16d95d80666243fa37a7224, lower: 0xfcca5bfbeef3e83b09982a3080481cb1 }, // -854
    Multiplier { upper: 0xc2a3dbabc12477e0051e83661c61f4ea, lower: 0x63d51663258fecfc07acee8d336ce3c1 }, // -853
    Multiplier { upper: 0x9bb64956341d2cb3374b9c51b04e5d88, lower: 0x4fddab82847323fcd2f0bed75c571c9a }, // -852
    Multiplier { upper: 0xf923a889ecfb7ab85878fa1c4d4a2f40, lower: 0x7fc9126a6d8506615181315893be942a }, // -851
    Multiplier { upper: 0xc74fba07f0c92ef9e060c816a43b5900, lower: 0x663a7521f137384ddacdc113a9654355 }, // -850
    Multiplier { upper: 0x9f72fb398d6dbf2e4d1a39abb695e0cd, lower: 0x1e952a818dc5c6a4af0b00dc878435de }, // -849
    Multiplier { upper: 0xff1e5ec27be2cb7d4829f5df8a8967ae, lower: 0x975510cf493c71077e780160d8d38962 }, // -848
    Multiplier { upper: 0xcc184bcec9823c6439bb2b193ba11fbe, lower: 0xdf7740a5d4305a6c652ccde713dc6de8 }, // -847
    Multiplier { upper: 0xa346a30bd46830502e2f55adc94db2ff, lower: 0x192c33b7dcf37b89ea8a3e527649f187 }, // -846
    Multiplier { upper: 0x829ee8d643868d0cf1bf77be3aa48f32, lower: 0x7a89c2f97d8f9607eed4fea85ea18e05 }, // -845
    Multiplier { upper: 0xd0fe4156d270e1ae4f98bf96c43a7eb7, lower: 0x2a7604c2627f567317bb310d6435b008 }, // -844
    Multiplier { upper: 0xa731cddf0ec0b48b72e0994569c8655f, lower: 0x552b3701e865dec279628da4502af33a }, // -843
    Multiplier { upper: 0x85c1717f3f00906f8f1a143787d3844c, lower: 0x44229267ed1e4bcec7820ae9d9bbf5c8 }, // -842
    Multiplier { upper: 0xd6024f31fe674d7f4b5ced25a61f3a13, lower: 0xa03750a64830794ad8d01176292cbc73 }, // -841
    Multiplier { upper: 0xab350c27feb90acc3c4a575151b294dc, lower: 0x802c4085068d2dd57a400df820f096c3 }, // -840
    Multiplier { upper: 0x88f73ceccbc73bd696a1df74415baa4a, lower: 0x002366d0d20a8b112e99a4c680c0789c }, // -839
    Multiplier { upper: 0xdb252e47ac71f95757696586cef91076, lower: 0x669f0ae7b67744e84a8f6e0a679a5a92 }, // -838
    Multiplier { upper: 0xaf50f1d2f05b2ddf79211e057260d9f8, lower: 0x5218d5862b929d86a20c580852e1e20f }, // -837
    Multiplier { upper: 0x8c40c1758d15be4c60e74b378eb3e193, lower: 0x74e0aad1bc754ad21b3d1339dbe7e80c }, // -836
    Multiplier { upper: 0xe0679bef4822ca13ce3edebf4ab968eb, lower: 0xee344482c72211502b94eb8fc63fd9ad }, // -835
    Multiplier { upper: 0xb386165906823b430b657eff6efaba56, lower: 0x5829d0689f4e744022dd893fd1ccae24 }, // -834
    Multiplier { upper: 0x8f9e784738682f68d5eacbff8bfbc845, lower: 0x1354a6ba190b90334f17a0ffdb0a24e9 }, // -833
    Multiplier { upper: 0xe5ca5a0b8d737f0e23114665acc60d3b, lower: 0x52210ac35b45b3854b5901995e76a175 }, // -832
    Multiplier { upper: 0xb7d514d60ac2cc0b4f41051e23d1a42f, lower: 0x74e73bcf7c37c2d1091401477ec54df7 }, // -831
    Multiplier { upper: 0x9310dd78089bd66f729a6a7e830e1cf2, lower: 0xc3ec2fd9302c9bda6da99a9f989dd7f9 }, // -830
    Multiplier { upper: 0xeb4e2f26742c8a4bea90aa6404e36184, lower: 0x6cad195b80475fc3e2a8f765c0fc8cc2 }, // -829
    Multiplier { upper: 0xbc3e8c1ec356d5098873bb83371c4e03, lower: 0x8a241449336c4c9cb553f91e33fd3d68 }, // -828
    Multiplier { upper: 0x969870189c45773ad38fc935c5b03e69, lower: 0x3b50103a8f89d6e3c4432db1c330fded }, // -827
    Multiplier { upper: 0xf0f3e68dc6d58b91527fa8560919fd75, lower: 0x2bb34d2a7f42f16c6d38491c6b819647 }, // -826
    Multiplier { upper: 0xc0c31ed7d2446fa77532ed11a0e19790, lower: 0xefc2a421ff68c1238a936db056014506 }, // -825
    Multiplier { upper: 0x9a35b24641d05952c428bda7b3e7ac73, lower: 0xf3021ce7ff8700e93ba9248d119a9d9f }, // -824
    Multiplier { upper: 0xf6bc5070694d5bb7a0412f72b972ad86, lower: 0x519cfb0ccc0b34a85f7507481c2a95ca }, // -823
    Multiplier { upper: 0xc563738d210aafc619cdbf8efac2246b, lower: 0x747d95a3d66f5d537f90d2a0168877d5 }, // -822
    Multiplier { upper: 0x9de9293db4088c9e7b0affa595681d22, lower: 0xc397aae978591775ffa70ee6786d2cab }, // -821
    Multiplier { upper: 0xfca841fc5340e0fd91ab32a288a69504, lower: 0x6c25de425a282589990b4b0a5a484777 }, // -820
    Multiplier { upper: 0xca2034c9dc33e7314155c21ba0854403, lower: 0x89b7e501e1b9b7a1473c3c084839d2c6 }, // -819
    Multiplier { upper: 0xa1b35d6e49c31f5a9aab01afb39dd002, lower: 0xd4931d9b1afaf94dd296966d0694a89e }, // -818
    Multiplier { upper: 0x815c4abea168e5e215559af2f617d99b, lower: 0xdd427e15af2f2dd7dbabab8a6baa207f }, // -817
    Multiplier { upper: 0xcefa113102416fd022229184bcf2f5c6, lower: 0x2ed0c9bc4b7eafbfc5df78dd791033fe }, // -816
    Multiplier { upper: 0xa594da8d9b678ca681b54136fd8f2b04, lower: 0xf240a1636f988c996b192d7dfa735ccb }, // -815
    Multiplier { upper: 0x8477153e15ec7085349100f8cad8ef37, lower: 0x2833b44f8c7a0a1455adbdfe61f5e3d6 }, // -814
    Multiplier { upper: 0xd3f1bb96897a4da1edb4ce5ade27e525, lower: 0x0d1f86e5ad9010208915fcca36563956 }, // -813
    Multiplier { upper: 0xa98e2faba12ea4818af70b7be4ecb750, lower: 0xd74c6beaf1400ce6d41197082b782dde }, // -812
    Multiplier { upper: 0x87a4f2efb4255067a25f3c631d8a2c40, lower: 0xac3d23225a99a3ebdcdadf39bc6024b2 }, // -811
    Multiplier { upper: 0xd907eb19203bb3d903cb93d1c8dd139a, lower: 0xad2e9e9d5dc29fdfc7c4985c6099d44f }, // -810
    Multiplier { upper: 0xad9fef474cfc8fe0cfd60fdb071742e2, lower: 0x24254bb117cee64c9fd079e3807b1040 }, // -809
    Multiplier { upper: 0x8ae65905d730731a3fde73159f45cf1b, lower: 0x501dd627463f1ea3b30d2e4f99fc0d00 }, // -808
    Multiplier { upper: 0xde3d5b3c8b80b829ffca51bc32094b5e, lower: 0xe696237209fe976c51aeb07f5cc67b33 }, // -807
    Multiplier { upper: 0xb1caaf63a2cd6021996ea7c9c1a10918, lower: 0xb8781c5b3b3212bd0e2559ff7d6b95c2 }, // -806
    Multiplier { upper: 0x8e3bbf82e8a44ce7adf21fd49ae73a7a, lower: 0x2d2ce37c2f5b4230d81de1993122de35 }, // -805
    Multiplier { upper: 0xe392cc04a76d47d9165032edc4a52a5d, lower: 0x15149f2d1892038159c968f51b6afd21 }, // -804
    Multiplier { upper: 0xb60f099d52bdd31411d9c257d08421e4, lower: 0x10dd4c2413a802cde16ded90e2bbfdb4 }, // -803
    Multiplier { upper: 0x91a5a14aa897dc100e47ceaca6d01b1c, lower: 0xda4aa3500fb99bd7e78b2473e8966490 }, // -802
    Multiplier { upper: 0xe90902110dbfc68016d94aadd7b35e94, lower: 0x90776bb34c5c2c8ca5ab6d8640f0a0e7 }, // -801
    Multiplier { upper: 0xba6d9b40d7cc9eccdf143bbe46291876, lower: 0xd9f922f5d6b023a3b7bc579e9a5a1a52 }, // -800
    Multiplier { upper: 0x95247c33dfd6e570b2769631d1ba79f8, lower: 0xae60e8c4abc01c82f963794baeae7b75 }, // -799
    Multiplier { upper: 0xeea0c6b96624a24dea5756b61c5d8ff4, lower: 0x4a34a7a112ccfa6b289f2879177d9255 }, // -798
    Multiplier { upper: 0xbee705611e83b50b21df7891b04ad990, lower: 0x3b5d52e7423d952286e5b9fa793141dd }, // -797
    Multiplier { upper: 0x98b8d11a7ecfc408e7e5fa0e26a247a6, lower: 0x95e442529b64774ed25161952dc1017e }, // -796
    Multiplier { upper: 0xf45ae82a647fa00e3fd65ce37103a5d7, lower: 0x563a03b75f07254aea1bcf5516019bfd }, // -795
    Multiplier { upper: 0xc37beceeb6cc800b6645171c5a695179, lower: 0x11c802f918d2843bee7ca5ddab347cca }, // -794
    Multiplier { upper: 0x9c6323f22bd6ccd5eb6a78e37b877460, lower: 0xdb0668c7470ed02ff1fd517e229063d5 }, // -793
    Multiplier { upper: 0xfa3839837957ae231243f49f2c0bed67, lower: 0xc4d70e0ba4e4804cb6621bfd041a3955 }, // -792
    Multiplier { upper: 0xc82cfacf944624e8db69907f566ff11f, lower: 0xd0ac0b3c83ea003d5eb4e330d014faaa }, // -791
    Multiplier { upper: 0xa023fbd9436b50ba49214065debff419, lower: 0x73bcd5ca032199cab22a4f5a4010c888 }, // -790
    Multiplier { upper: 0x801cc97a9c55da2ea0e766b7e5665ce1, lower: 0x2963de3b35b47b088e883f7b6673d3a0 }, // -789
    Multiplier { upper: 0xccfadbf760895d1767d8a4596f0a2e35, lower: 0x0f06305ebc53f80db0d9ff2bd71fb900 }, // -788
    Multiplier { upper: 0xa3fbe32c4d3ab0df8646e9e125a1be90, lower: 0xd8d1c04bc9dcc6715a47ff5645b2fa67 }, // -787
    Multiplier { upper: 0x832fe8f03dc88d7f9e9f2180eae7cba7, lower: 0x13db003ca17d6b8de1d332ab6af5951f }, // -786
    Multiplier { upper: 0xd1e6418062da7bff6431cf34ab0c790b, lower: 0x52f80061026245afcfb8511244bc21cb }, // -785
    Multiplier { upper: 0xa7eb6799e8aec9991cf4a5c3bc09fa6f, lower: 0x75933380ceb5048ca62d0da836fce7d6 }, // -784
    Multiplier { upper: 0x8655ec7b208bd47a7d90849c966e61f2, lower: 0xc475c2cd722a6a0a1e8a71535f30b978 }, // -783
    Multiplier { upper: 0xd6efe0c500dfba5d95b40760f0b09cb7, lower: 0xa0bc6ae25043dcdcfdaa4eebcb8128bf }, // -782
    Multiplier { upper: 0xabf31a3733e62eb1449005e726f3b092, lower: 0xe6fd224ea69cb0b0caeea5896f9a8700 }, // -781
    Multiplier { upper: 0x898f482c2984f2276a0cd185b8c2f3a8, lower: 0xb8ca81d8854a26f3d58bb7a1261538cd }, // -780
    Multiplier { upper: 0xdc187379dc07e9d8a9ae1c09279e52a7, lower: 0x8e10cfc0d5437186227925cea35527ad }, // -779
    Multiplier { upper: 0xb0138f94b00654ad548b49a0ec7ea886, lower: 0x0b40a633ddcf8e04e860eb0bb5ddb958 }, // -778
    Multiplier { upper: 0x8cdc72dd599eaa2443a2a14d89feed38, lower: 0x090084f64b0c719d86b3ef3c917e2de0 }, // -777
    Multiplier { upper: 0xe160b7c88f64436d39043548dccb1526, lower: 0x74cda18a11ad8295a4531860e8c9e2ff }, // -776
    Multiplier { upper: 0xb44d5fd3a5e9cf8a94035dd3e3d5aa85, lower: 0x2a3e1ad4daf135448375ad1a53d4b599 }, // -775
    Multiplier { upper: 0x903de642eb2172d54335e4a983115537, lower: 0x54fe7bdd7bf42a9d35f7bdaea976f7ae }, // -774
    Multiplier { upper: 0xe6c9706b11cf1e22052307759e8221f2, lower: 0x21972c959320442ebcbf95e44257f2b0 }, // -773
    Multiplier { upper: 0xb8a126bc0e3f4b4e6a826c5e18681b28, lower: 0x1adf56de0f4d035896ffab1d01dff559 }, // -772
    Multiplier { upper: 0x93b41efcd832a2a52201f04b46b9af53, lower: 0x48b2abe4d90a6913abffbc1734b32aae }, // -771
    Multiplier { upper: 0xec5364c7c051043b699cb3aba45c4bb8, lower: 0x74511307c1aa41b91332c68b87851116 }, // -770
    Multiplier { upper: 0xbd0f83d30040d02f87b08fbc837d0960, lower: 0x5d0da8d301550160dc289ed606040dab }, // -769
    Multiplier { upper: 0x973f9ca8cd00a68c6c8d3fca02ca6de6, lower: 0xb0d7ba426777344d7ced4bde6b367156 }, // -768
    Multiplier { upper: 0xf1ff610e14cdd747141532dcd143e30a, lower: 0xb48c5d370bf1ed48c7e212fd78571bbc }, // -767
    Multiplier { upper: 0xc1991a71aa3e45d276775be3da9cb5a2, lower: 0x2a09e42c098e576d6cb4dbfdf9df4964 }, // -766
    Multiplier { upper: 0x9ae0e1f48831d1752b92afe97bb0914e, lower: 0x8807e9bcd471df8abd5d7ccb2e4c3ab6 }, // -765
    Multiplier { upper: 0xf7ce36540d1c825512844ca8c5e74ee4, lower: 0x0cd975faed82ff44622f2e11e3ad2abd }, // -764
    Multiplier { upper: 0xc63e91dcd74a01dda869d6ed6b1f7250, lower: 0x0a4791958acf329d1b58f1a7e9575564 }, // -763
    Multiplier { upper: 0x9e9874b0ac3b34b15387df2455b2c1d9, lower: 0xa1d2dade08a5c2174913f4865445ddea }, // -762
    Multiplier { upper: 0xfdc0bab446c5211bb8d96506ef84695c, lower: 0x361e2afcdaa2d02541b9873d53a2fca9 }, // -761
    Multiplier { upper: 0xcb00955d056a80e2fa4784058c69ede3, lower: 0x5e7e88ca4882401dce2e05caa94f3087 }, // -760
    Multiplier { upper: 0xa266dde4045533e8c839366ad6bb24b5, lower: 0xe53207083a01cce4a4f19e3bbaa5c06c }, // -759
    Multiplier { upper: 0x81ebe4b669ddc320a02dc522456283c4, lower: 0xb75b38d3619b0a5083f47e962eeb0057 }, // -758
    Multiplier { upper: 0xcfdfd4570fc93834337c6e9d3bd0d2d4, lower: 0x5891f48568f81080d320ca89e4ab33be }, // -757
    Multiplier { upper: 0xa64ca9df3fd42cf68f96bee42fda4243, lower: 0x7a0e5d37872cda00a8e7086e5088f631 }, // -756
    Multiplier { upper: 0x850a217f6643572ba612325026483502, lower: 0xc80b7dc605bd7b33ba526d250d3a5e8e }, // -755
    Multiplier { upper: 0xd4dd0265706bbeac3ce9ea19d6d9ee6a, lower: 0xd9abfc70092f2b85f6ea483b485d6416 }, // -754
    Multiplier { upper: 0xaa4a685126bc9889ca54bb47df14bebb, lower: 0xe156638cd425bc6b2beea02f6d178345 }, // -753
    Multiplier { upper: 0x883b86a752307a07d51095d318dd6563, lower: 0x1aab82d7101e3055bcbee68c5746029e }, // -752
    Multiplier { upper: 0xd9f8d7721d1a5cd954e7561e8e2f089e, lower: 0x91126af1b36380892dfe3dad5870042f }, // -751
    Multiplier { upper: 0xae60ac5b4a7b7d7aaa52ab4ba4f26d4b, lower: 0xa741ef27c2b6006dbe64fe2446c00359 }, // -750
    Multiplier { upper: 0x8b8089e2a1fc646221dbbc3c83f5243c, lower: 0x85ce58ec9bc4cd249850cb5038999c47 }, // -749
    Multiplier { upper: 0xdf340fd1032d6d69cfc5f9fa6cbb6d2d, lower: 0xa2e3c17a92d47b6dc081454d275c2d3f }, // -748
    Multiplier { upper: 0xb2900ca735bdf1217304c7fb8a2f8a8a, lower: 0xe8b634620f1062be339a9dd752b02432 }, // -747
    Multiplier { upper: 0x8ed9a3b8f7cb274df59d6cc93b593ba2, lower: 0x53c4f6b4d8d9e89829487e45dbc01cf5 }, // -746
    Multiplier { upper: 0xe48f6c5b2611d87cbc2f14752bc1f903, lower: 0xb93b24548e297426a873fd3c92ccfb21 }, // -745
    Multiplier { upper: 0xb6d9237c1e74ad30968c105dbc9b2d9c, lower: 0x942f5043a4edf685538ffdca0f0a6281 }, // -744
    Multiplier { upper: 0x92474f967ec3bdc078700d17ca15be16, lower: 0xdcf2a69c83f1920442d997d4d8d51b9b }, // -743
    Multiplier { upper: 0xea0bb28a646c62cd8d8014f2dcef968a, lower: 0xfb1dd760d31c1cd39e28f2ee27bb5f5e }, // -742
    Multiplier { upper: 0xbb3c8ed51d23823e0accdd8f17261208, lower: 0xc8e4ac4d75b0170fb1ba5bf1b962b2b1 }, // -741
    Multiplier { upper: 0x95ca0bddb0e934fe6f0a4ad8df51a807, lower: 0x071d56a45e2678d95afb7cc1611bc228 }, // -740
    Multiplier { upper: 0xefa9ac95e7db87fd7e76de27cbb5d9a4, lower: 0xd82ef106fd0a5af55e5f2e0234f936a5 }, // -739
    Multiplier { upper: 0xbfbaf077ecaf9ffdfec57e863c917aea, lower: 0x468bf405973b7bf77eb28b34f72dc551 }, // -738
    Multiplier { upper: 0x996259f98a261997ff04653830746255, lower: 0x053cc337ac2f965f988ed5c3f8f16aa8 }, // -737
    Multiplier { upper: 0xf56a298f437028f331a0a1f380ba36ee, lower: 0x6ec79ebf79e5bd65c0e489398e4f110c }, // -736
    Multiplier { upper: 0xc454ee0c35f353f5c14d4e5c66fb5f25, lower: 0x256c7eff94b7cab7cd83a0fad83f40d6 }, // -735
    Multiplier { upper: 0x9d10be702b290ff7cdd771e38595e5b7, lower: 0x512398cc76f96ef971361a62469900ac }, // -734
    Multiplier { upper: 0xfb4dfd80450e7ff2e2f24fd26f563c58, lower: 0x81d28e13f18f17f581f02a36d75b3445 }, // -733
    Multiplier { upper: 0xc90b31336a71fff5825b730ebf783046, lower: 0xce420b4327a5acc467f354f8ac48f69e }, // -732
    Multiplier { upper: 0xa0d5c0f5eec199913515f5a565f9c038, lower: 0xa501a29c1fb7bd69ecc2aa6089d3f87e }, // -731
    Multiplier { upper: 0x80ab00c4bf0147a75dab2aeab7fb002d, lower: 0x50ce1bb0195fcabb23ceeeb3a1766065 }, // -730
    Multiplier { upper: 0xcdde67a1319ba5d895deab11265e66ae, lower: 0xe7b02c4cf566112b6c7e4ab9025700a2 }, // -729
    Multiplier { upper: 0xa4b1ec80f47c84ad44b222741eb1ebbf, lower: 0x1fc02370c451a755f065089401df33b5 }, // -728
    Multiplier { upper: 0x83c18a00c396d08a9d5b4ec34bc18965, lower: 0xb3001c5a36a7b9118d1da07667e5c2f7 }, // -727
    Multiplier { upper: 0xd2cf43346c2480ddc892179edf9c0f09, lower: 0x1e6693c38aa5f4e8e1c900bd730937f1 }, // -726
    Multiplier { upper: 0xa8a5cf5d23506717d3a812e57fb00c07, lower: 0x4b854302d55190ba4e3a66fdf5a0f98e }, // -725
    Multiplier { upper: 0x86eb0c4a82a6b8dfdc86758466267005, lower: 0xd604359bdddada2ea4fb8597f7b3fad8 }, // -724
    Multiplier { upper: 0xd7de7a10d10ac1662da3ef3a3d0a4cd6, lower: 0x2339ef5fc95e29e43b2c08f325ecc48d }, // -723
    Multiplier { upper: 0xacb1fb40a73bcdeb57b658fb64083d78, lower: 0x1c2e59196de4ee502f566d8f518a36d7 }, // -722
    Multiplier { upper: 0x8a27fc33b8fca4bc462b7a62b66cfdf9, lower: 0xb025141457ea584025debe0c413b5f13 }, // -721
    Multiplier { upper: 0xdd0cc6b927faa12d3d125d6abd7b2ff5, lower: 0xe6a1b9ba2643c066a2fdfce0685efe84 }, // -720
    Multiplier { upper: 0xb0d70560ecc880f0fda84abbcac8f32b, lower: 0x1ee7c7c81e9c99ebb597fd80537f3203 }, // -719
    Multiplier { upper: 0x8d78d11a5706cd8d97b9d56308a0c288, lower: 0xe586396ce54a14bc91466466a9328e69 }, // -718
    Multiplier { upper: 0xe25ae82a24d7af48f2c2ef04da9ad0db, lower: 0x08d6c247d5435460e870a0a441ea7d74 }, // -717
    Multiplier { upper: 0xb51586881d795907289bf26a487bda48, lower: 0xd3df01d31102a9e7205a1a1d0188645d }, // -716
    Multiplier { upper: 0x90de0539b12de0d286e3285506c97b6d, lower: 0x764c0175a73554b8e6ae7b4a67a0504b }, // -715
    Multiplier { upper: 0xe7c9a1f5e84967b73e3840880adbf8af, lower: 0x23accf22a5222127d77d9210a5cd4d44 }, // -714
    Multiplier { upper: 0xb96e1b2b203ab95f64f9cd39a24993bf, lower: 0x4fbd72821db4e75312cadb4084a43dd0 }, // -713
    Multiplier { upper: 0x945815bc19c8944c50c7d7614ea142ff, lower: 0x72fdf534e490b90f423be29a03b697da }, // -712
    Multiplier { upper: 0xed59bc602940ed46e7a625687dced198, lower: 0xb7fcbb87d41ac1b2039304299f8a8c8f }, // -711
    Multiplier { upper: 0xbde163802100bdd252eb512064a5747a, lower: 0x2cca2f9fdce2348e694269bae6087073 }, // -710
    Multiplier { upper: 0x97e782cce733cb0ea8bc40e6b6eac394, lower: 0xf0a1bfb3171b5d3eba9b87c8b806c05c }, // -709
    Multiplier { upper: 0xf30c047b0b8611b10dfa017124aad287, lower: 0xe76932b824f895312a9272dac00acd60 }, // -708
    Multiplier { upper: 0xc2700395a2d1a7c0d7fb345a83bbdb9f, lower: 0xec54289350c6ddc0eedb8f15666f0ab3 }, // -707
    Multiplier { upper: 0x9b8ccfaae8a7b967132f5d15362fe2e6, lower: 0x56a9ba0f73d24b00bf160c111ebf3bc3 }, // -706
    Multiplier { upper: 0xf8e14c44a772c23e851894eebd196b0a, lower: 0x2442c34bec83ab3464f0134e97985f9d }, // -705
    Multiplier { upper: 0xc71aa36a1f8f01cb9dad43f230e1226e, lower: 0x83689c3cbd36229050c00f7212e04c7e }, // -704
    Multiplier { upper: 0x9f4882bb4c7267d617bdcff4f3e74ebe, lower: 0xcf86e363ca91b5404099a5f4dbe6a398 }, // -703
    Multiplier { upper: 0xfeda6ac5471d72f025fc7fee530bb131, lower: 0x4c0b056c774f8866cdc2a3215fd76c26 }, // -702
    Multiplier { upper: 0xcbe1ef0438e45bf35196ccbea8d6275a, lower: 0xa33c0456c5d939ebd7cee8e77fdf89b8 }, // -701
    Multiplier { upper: 0xa31b259cfa50498f7478a3cbba44ec48, lower: 0x829669df04adc7efdfd8ba52ccb2d494 }, // -700
    Multiplier { upper: 0x827c1e172ea6a13f9060830961d0bd06, lower: 0xcedebb18d08b06597fe0950f0a28aa10 }, // -699
    Multiplier { upper: 0xd0c6968b7dd76865b3cd9e75694dfb3e, lower: 0x17cac4f480de708f3300ee7e76a7767f }, // -698
    Multiplier { upper: 0xa705453c64ac53848fd7b1f7877195cb, lower: 0x463bd0c39a4b8d3f5c00becb921f91ff }, // -697
    Multiplier { upper: 0x859dd0fd1d56a936d9795b2c6c5ade3c, lower: 0x382fda3615093dcc499a323c74e60e66 }, // -696
    Multiplier { upper: 0xd5c94e61c88aa857c25bc513e0916393, lower: 0x8d195d2354db9613a8f6b6c721701709 }, // -695
    Multiplier { upper: 0xab0771e7d3a22046351637431a0de942, lower: 0xd7477db5dd7c780fba5ef89f4df345a1 }, // -694
    Multiplier { upper: 0x88d2c18642e819d1c411c5cf480b2102, lower: 0x45d2caf7e463933fc84bfa190b290481 }, // -693
    Multiplier { upper: 0xdaeacf3d37d9c2e939b6094ba67834d0, lower: 0x6fb7ab263a38eb994079902811db3a68 }, // -692
    Multiplier { upper: 0xaf223f642cae3587615e6dd61ec690a6, lower: 0xbfc62284fb60bc7a99fad9b9a7e29520 }, // -691
    Multiplier { upper: 0x8c1b65e9bd582ad2b44b8b11b23873b8, lower: 0x996b4ed0c91a306214c8ae2e1fe8774d }, // -690
    Multiplier { upper: 0xe02bd642c88d11512078de82b6c0b927, lower: 0x5bdee48141c3809cee0de37cffda587b }, // -689
    Multiplier { upper: 0xb35645023a0a7440e6c718689233c752, lower: 0xafe5839a9b02cd4a580b1c63ffe1e062 }, // -688
    Multiplier { upper: 0x8f783734fb3b9033ebd279ed41c305db, lower: 0xbfeacfaee268a43b79a27d1cccb4b382 }, // -687
    Multiplier { upper: 0xe58d252191f8e6b97950c3153604d62c, lower: 0x66447f7e370dd3925c372e947abab8d0 }, // -686
    Multiplier { upper: 0xb7a41db474c71efac773cf442b3711bd, lower: 0x1e9d32cb5f3e42db7cf8f210622efa40 }, // -685
    Multiplier { upper: 0x92e9b15d2a38e5956c5ca5d022927497, lower: 0x4bb0f56f7f65024930c7280d1b58c833 }, // -684
    Multiplier { upper: 0xeb0f822ea9f4a288ad61094d041d8758, lower: 0x791b224bff0803a84e0b73482bc14051 }, // -683
    Multiplier { upper: 0xbc0c682554c3b53a244da10a69b13913, lower: 0x9415b50998d336203e6f8f6cefcdcd0e }, // -682
    Multiplier { upper: 0x96705351109c90fb503e1a6ebaf42da9, lower: 0x434490d47a4291b365260c57263e3da5 }, // -681
    Multiplier { upper: 0xf0b3b881b42db4c54d302a4ac4b9e2a8, lower: 0x6ba0e7ba5d374f856ea346f1d6c9fc3b }, // -680
    Multiplier { upper: 0xc08fc6ce29be2a3770f355089d618220, lower: 0x561a52fb7dc5d9378bb5d25b123b302f }, // -679
    Multiplier { upper: 0x9a0c9f0b549821c5f3f5dda07de79b4d, lower: 0x11aea8c9316b142c6fc4a848db628cf3 }, // -678
    Multiplier { upper: 0xf67a981220f3693cb989629a630c2bae, lower: 0x82b10e0eb5782047193aa6daf89dae51 }, // -677
    Multiplier { upper: 0xc52ee00e80c2ba96fad44ee1e8d68958, lower: 0x688da4d8912ce69f47621f1593b15841 }, // -676
    Multiplier { upper: 0x9dbf19a533cefbabfbdd0be7ed786de0, lower: 0x53a483e07423ebb29f81b277a95aad01 }, // -675
    Multiplier { upper: 0xfc64f5d51fb192acc62e7973158d7c9a, lower: 0x1f6d9fcd869fdf8432691d8c422aae67 }, // -674
    Multiplier { upper: 0xc9ea5e44195adbbd6b586128de0aca14, lower: 0xe5f14ca46bb319368eba7e09ce888b86 }, // -673
    Multiplier { upper: 0xa1884b69ade2496455e04dba4b3bd4dd, lower: 0x84c10a1d22f5adc53efb9807d86d3c6b }, // -672
    Multiplier { upper: 0x8139d5ee24b5078377e6a49508fcaa4a, lower: 0xd09a6e7db59157d0ff2facd3138a96bc }, // -671
    Multiplier { upper: 0xcec2efe36dee726bf30aa0ee74c776de, lower: 0x1a90b0c92282261b31e5e151b8ddbdfa }, // -670
    Multiplier { upper: 0xa568bfe924bec1eff5a21a585d6c5f18, lower: 0x15408d6db534eb48f4b7e77493e497fb }, // -669
    Multiplier { upper: 0x8453ccba83cbce59914e7b79e456b279, lower: 0xaa9a0abe2a90bc3a5d5fec5d431d4663 }, // -668
    Multiplier { upper: 0xd3b94790d2dfb08f4ee3f8c306f11d8f, lower: 0x775cddfd10e79390956646fb9e953d6a }, // -667
    Multiplier { upper: 0xa961060d757fc072a5832d68d25a7e0c, lower: 0x5f7d7e640d860fa6ddeb6bfc7eddcabb }, // -666
    Multiplier { upper: 0x8780d1a45dffcd288468f120a84864d6, lower: 0xb2cacb833e04d9524b22bcc9ff17d563 }, // -665
    Multiplier { upper: 0xd8ce1c3a2fffaea73a4181cdda0d6e24, lower: 0x514478d1fcd48eea11d12e0ffe8c889e }, // -664
    Multiplier { upper: 0xad71b02e8ccc8bb8fb679b0b14d78b50, lower: 0x410393db30aa0bee74a7580ccba3a07e }, // -663
    Multiplier { upper: 0x8ac159bed70a0960c91faf3c10ac6f73, lower: 0x67360fe28d54d6585d52acd7094fb398 }, // -662
    Multiplier { upper: 0xde02293158100f0141cc4b934de0b252, lower: 0x3ebce6374887bd5a2eeaae24dbb2b8f3 }, // -661
    Multiplier { upper: 0xb19b542779a6726767d6a2dc3e4d5b74, lower: 0xfefd84f906d2fde1bf2224ea495bc729 }, // -660
    Multiplier { upper: 0x8e15dcec6151f51f86454f16983de2c3, lower: 0xff31372d9f0f318165b4ea55077c9f54 }, // -659
    Multiplier { upper: 0xe3562e47021cbb65a3a2182426c96ad3, lower: 0x31e85848fe7eb59bd5ee43bb3f2dcbba }, // -658
    Multiplier { upper: 0xb5de8b6c01b095eae94e79b6856def0f, lower: 0x5b2046a0cb98914977f1cfc8ff57d62e }, // -657
    Multiplier { upper: 0x917ed5f0015a1188baa52e2b9df18c0c, lower: 0x48e69ee70946daa12cc1730732acab58 }, // -656
    Multiplier { upper: 0xe8caefe668901c0df76eb045c98279ad, lower: 0x4170fe3e753e2a9b7acf1e71eaaddef4 }, // -655
    Multiplier { upper: 0xba3bf31eba0ce33e5f8bc037d4686157, lower: 0x678d9831f764eee2c8a5b1f4bbbe4bf6 }, // -654
    Multiplier { upper: 0x94fcc27efb3d82984c6fccf976b9e779, lower: 0x1fa479c192b725823a1e27f6fc983cc5 }, // -653
    Multiplier { upper: 0xee61373191fc0426e0b2e18f245ca58e, lower: 0x99072935b78b6f36c3637324c759fad5 }, // -652
    Multiplier { upper: 0xbeb42c27a7fcd01f1a28b472837d513e, lower: 0xe0d2875e2c6f8c2bcf82c283d2ae6244 }, // -651
    Multiplier { upper: 0x98902352ecca4018e1ba29f535fdda98, lower: 0xb3db9f7e89f2d68972cf02030ef1e836 }, // -650
    Multiplier { upper: 0xf419d21e47aa0027cf904321effc90f4, lower: 0x52f8ff30dcb7bda8b7b19cd1b1830d23 }, // -649
    Multiplier { upper: 0xc347db4b6c88001fd94035b4bffd40c3, lower: 0x7593ff5a4a2c97ba2c8e170e279c0a83 }, // -648
    Multiplier { upper: 0x9c397c3c56d3334cadccf7c3ccca9a35, lower: 0xf7a999150823ac94f071ac0b52e33b9c }, // -647
    Multiplier { upper: 0xf9f59393be1eb87aafae593947aa9056, lower: 0x590f5b54d9d2adbb1a4f79abb7d1f8f9 }, // -646
    Multiplier { upper: 0xc7f7a942fe7ef9fbbfbeadc76c887378, lower: 0x473f7c43e17557c8e1d92e22f974c72e }, // -645
    Multiplier { upper: 0x9ff95435986594c96632249f8a06c2c6, lower: 0x9f65fd031ac4463a4e47581bfac3d28b }, // -644
    Multiplier { upper: 0xfff55388f3d5badbd6b6a0ff433e0470, lower: 0xff0994d1c46d3d2a16d88cf9913950de }, // -643
    Multiplier { upper: 0xccc442d3f644957cabc54d990298038d, lower: 0x98d4770e36bdca881246d72e0dc773e5 }, // -642
    Multiplier { upper: 0xa3d035765e9d4463bc9dd7ad9baccfa4, lower: 0x7a439271c564a206750578f1a49f8feb }, // -641
    Multiplier { upper: 0x830cf791e54a9d1c96e4ac8ae2f0a61d, lower: 0x2e9c7527d11d4e6b90d12d8e1d4c7322 }, // -640
    Multiplier { upper: 0xd1ae58e96eddc82dbe3aadab04b43cfb, lower: 0x7dc721d94e954a45b481e27cfbad8503 }, // -639
    Multiplier { upper: 0xa7bead878be4a024982ef1559d5cfd95, lower: 0xfe38e7e10baaa1d15d34b530c9579d9c }, // -638
    Multiplier { upper: 0x8632246c6fea19b6e0258dde177d97ab, lower: 0x31c71fe73c8881744a9090f3d44617b0 }, // -637
    Multiplier { upper: 0xd6b6a0ad7fdcf5f166a27c968bfc25de, lower: 0xb60b663ec740cf20774db4b953a3591a }, // -636
    Multiplier { upper: 0xabc54d57997d918debb530786ffceb18, lower: 0x91a2b8323900a5b392a4909442e91415 }, // -635
    Multiplier { upper: 0x896aa44614647471895dc0605997227a, lower: 0x0e1bc68e9400848fa883a6dd02541011 }, // -634
    Multiplier { upper: 0xdbddd3a353d3ed827562cd66f5be9d90, lower: 0x1692d74a86673a7f7405d7c803b9b34e }, // -633
    Multiplier { upper: 0xafe4a94f764324685de8a4525e3217a6, lower: 0x787579086b85c865f66b130669615c3e }, // -632
    Multiplier { upper: 0x8cb6edd92b68e9ed17ed5041e4f4dfb8, lower: 0x605dfa6d22d16d1e5ebc0f38544de365 }, // -631
    Multiplier { upper: 0xe124afc1df0e4314f3154d363b2165f3, lower: 0xcd632a4837b57b63cac67ec086e3056e }, // -630
    Multiplier { upper: 0xb41d5967e5a5027728ddd75e95b4518f, lower: 0xd7828839c62ac91ca2386566d24f378b }, // -629
    Multiplier { upper: 0x90177ab9848401f8ed7e45e54490413f, lower: 0xdf9ba02e38223a7d4e93845241d8f93c }, // -628
    Multiplier { upper: 0xe68bf78f3a6ccff4af306fd53a806866, lower: 0x329299e38d0390c87db8d3b6cfc18ec7 }, // -627
    Multiplier { upper: 0xb86ff93f61f0a65d58f38caa953386b8, lower: 0x287547e93d9c73d397c70fc573013f06 }, // -626
    Multiplier { upper: 0x938cc765e7f3b84aad8fa3bbaa8f9ef9, lower: 0xb9f76cba97b05ca94638d96ac267659e }, // -625
    Multiplier { upper: 0xec14723ca652c0777c1905f910e5cb29, lower: 0x298be12a8c4d610ed6c15bde03d8a296 }, // -624
    Multiplier { upper: 0xbcdd2830850f005f967a6b2da71e3c20, lower: 0xee0980eed6a44da5789aafe4cfe08212 }, // -623
    Multiplier { upper: 0x9717535a040c004c7861ef57b8e4fce7, lower: 0x24d46725788371512d488cb70cb39b42 }, // -622
    Multiplier { upper: 0xf1beebc339accd472703188c5b07fb0b, lower: 0x6e20a508c0d24ee84874145814529202 }, // -621
    Multiplier { upper: 0xc1658968faf0a438ec027a09e26cc8d5, lower: 0xf1b3b73a33db72536d29a9e010420e68 }, // -620
    Multiplier { upper: 0x9ab7a120c8c08360bccec807e8570711, lower: 0x8e295f61c315f50f8a87bb19a69b3eba }, // -619
    Multiplier { upper: 0xf78c350141340567947e0cd973be71b5, lower: 0xb042323604efee7f440c5e8f70f8645d }, // -618
    Multiplier { upper: 0xc609c40100f66ab943980a478fcb8e2a, lower: 0xf368282b37265865d009e53f8d93837d }, // -617
    Multiplier { upper: 0x9e6e366733f8556102e008393fd60b55, lower: 0x8f868688f8eb79eb0cd4b7660adc6931 }, // -616
    Multiplier { upper: 0xfd7d23d85326ef019e33405b99567888, lower: 0xe5a40a74c178c311ae2125701160a84e }, // -615
    Multiplier { upper: 0xcaca831375b8bf347e8f66afaddec6d3, lower: 0xeae9a1f7012d68daf1b41df3411a203f }, // -614
    Multiplier { upper: 0xa23b9c0f916098f6cba5ebbfbe4bd243, lower: 0x22548192675787158e29b18f674819cc }, // -613
    Multiplier { upper: 0x81c949a60de6e0c56fb7efcc983ca835, lower: 0xb51067a852ac6c113e87c13f85d347d6 }, // -612
    Multiplier { upper: 0xcfa875d67ca49ad57f8cb2e0f3944055, lower: 0xee80a5da1de0ace8640c6865a2eba624 }, // -611
    Multiplier { upper: 0xa6205e453083af1132d6f580c2dd0044, lower: 0xbecd517b4b1a23ed1cd6b9eae8bc84e9 }, // -610
    Multiplier { upper: 0x84e6b1d0f39c8c0dc2459133cf17336a, lower: 0x323ddac908e1b6574a456188ba306a54 }, // -609
    Multiplier { upper: 0xd4a44fb4b8fa79af9d3c1b8618251f10, lower: 0x5062f7a80e35f08baa089c0df6b3dd54 }, // -608
    Multiplier { upper: 0xaa1d0c9093fb948c7dc9af9e79b74c0d, lower: 0x0d1bf9533e918d3c8806e33e5ef64aa9 }, // -607
    Multiplier { upper: 0x88173d407662dd3d316e2618615f700a, lower: 0x70e32ddc320e0a96d338b5cb7f2b6eee }, // -606
    Multiplier { upper: 0xd9bec86723d161fb8249d68d6898b343, lower: 0xe7d1e2f9e9b010f151f4561265124b16 }, // -605
    Multiplier { upper: 0xae3239ec1ca7819601d4aba453ad5c36, lower: 0x530e4f2e548cda5aa7f6ab41ea7508df }, // -604
    Multiplier { upper: 0x8b5b6189b0860144ce43bc83762449c5, lower: 0x0f3ea5beaa0a4848865eef67eec40719 }, // -603
    Multiplier { upper: 0xdef89c0f80d6686e16d2c738bd06dc6e, lower: 0x7ecaa2caa9aa0d40d6fe4bd97e0671c1 }, // -602
    Multiplier { upper: 0xb2607cd933deb9f1abdbd293ca6be38b, lower: 0x98a21bd554880a9a45983cadfe6b8e34 }, // -601
    Multiplier { upper: 0x8eb39714297efb27bcafdba96ebcb609, lower: 0x46e8164443a0087b6ae0308b31efa4f6 }, // -600
    Multiplier { upper: 0xe4528b537597f83f944c92a8b12df00e, lower: 0xd7d9bd3a05ccda5f1166b411e97f6e57 }, // -599
    Multiplier { upper: 0xb6a86f75f7acc69943707553c0f18cd8, lower: 0xacae30fb37d71518dab8900e5465f1df }, // -598
    Multiplier { upper: 0x9220592b2c8a387a9c59f77633f470ad, lower: 0x56f1c0c8f978ddad7bc6d9a510518e4c }, // -597
    Multiplier { upper: 0xe9cd5b7847438d90fa298bf05320b448, lower: 0x8b1c67a7f58e2f7bf93e29081a1c16e0 }, // -596
    Multiplier { upper: 0xbb0aaf936c360ada61bad659dc1a29d3, lower: 0xa27d1fb9913e8c632dcb54067b49abe6 }, // -595
    Multiplier { upper: 0x95a2260f89c4d57b81624514b014ee42, lower: 0xe864196140fed6b5be3c433862a15652 }, // -594
    Multiplier { upper: 0xef69d67f42d488c59bd06e8780217d37, lower: 0xda39c23534caf122c9fa0527043556e9 }, // -593
    Multiplier { upper: 0xbf87decc3576d3d149738b9f99b4642c, lower: 0xae949b5dc3d58db56e619db8d02aabee }, // -592
    Multiplier { upper: 0x99397f09c45f0fdaa1293c7fae29e9bd, lower: 0x5876e2b16977a491251ae493d9bbbcbe }, // -591
    Multiplier { upper: 0xf528cb42d3cb4c9101db93ff7d0fdc62, lower: 0x27249de8a8bf6db5082b0752f5f92dfd }, // -590
    Multiplier { upper: 0xc420a29bdca2a3a734afa99930d97d1b, lower: 0x5283b186ed65f15da0226c425e60f197 }, // -589
    Multiplier { upper: 0x9ce6e87cb0821c85c3bfbae0f3e130e2, lower: 0xa8695ad25784c117b34ebd01e51a5ae0 }, // -588
    Multiplier { upper: 0xfb0b0d944d9cfa6f9f992b0186351b04, lower: 0x40a891508c079b591ee4619ca1c3c499 }, // -587
    Multiplier { upper: 0xc8d5a476a47d95261947559ad1c4159d, lower: 0x0086daa6d66c7c474be9e7b081696a14 }, // -586
    Multiplier { upper: 0xa0aae9f88397aa84e105de15749cde17, lower: 0x339f15524523969f6fee52f39ababb43 }, // -585
    Multiplier { upper: 0x8088bb2d3612eed0b404b1aac3b0b1ac, lower: 0x294c110e9db612192658425c7bc895d0 }, // -584
    Multiplier { upper: 0xcda791e1f01e4ae7866de911391ab5e0, lower: 0x42134e7dc92350283d5a03c72c7422e5 }, // -583
    Multiplier { upper: 0xa4860e4e59b1d5860524ba742daef7e6, lower: 0x9b42a5316db5d9b9caae696c23901beb }, // -582
    Multiplier { upper: 0x839e71d847c1779e6a83c85cf158c652, lower: 0x15ceea8df15e47c7d558545682d9afef }, // -581
    Multiplier { upper: 0xd2971c8d3f9bf29710d2da2e4ef47083, lower: 0x5617ddafe896d93fbbc086f0d15c4cb1 }, // -580
    Multiplier { upper: 0xa878e3a432e32878da4248250bf6c069, lower: 0x11acb15986df1432fc9a058d7449d6f4 }, // -579
    Multiplier { upper: 0x86c71c835be8ed2d7b6839b73cc566ba, lower: 0x748a277ad24c1028ca14d13df6a178c4 }, // -578
    Multiplier { upper: 0xd7a4fa6bc6417b7bf8a6c2bec7a23df7, lower: 0x20dd0bf7b6e019dadcee1b965768c139 }, // -577
    Multiplier { upper: 0xac83fb896b6795fcc6ebceff061b64c5, lower: 0xb3e40992f8b347e24a581611df8700fa }, // -576
    Multiplier { upper: 0x8a032fa122b944ca38bca598d1af83d1, lower: 0x5cb66e0f2d5c3981d51344db1938cd95 }, // -575
    Multiplier { upper: 0xdcd1e5ce9df53add27943c27b5e59fb5, lower: 0x6123e34b7bc6c26954eba15e8ec148ee }, // -574
    Multiplier { upper: 0xb0a7eb0bb190fbe41fa9c9b95e514c91, lower: 0x1a831c3c6305685443efb44ba5676d8c }, // -573
    Multiplier { upper: 0x8d53226fc140c9834c87d4944b743d40, lower: 0xe2027cfd1c0453769cbfc36fb785f13d }, // -572
    Multiplier { upper: 0xe21e9d7f9b9adc05473fba86df206201, lower: 0x699d94c82cd3b8bdc79938b2bf3cb52d }, // -571
    Multiplier { upper: 0xb4e54acc7c7be3376c32fb9f18e6b4cd, lower: 0xee17aa39bd762d649fadc6f565ca2a8b }, // -570
    Multiplier { upper: 0x90b76f09fd2fe8f9235bfc7f471ef70b, lower: 0x24dfbb61645e8ab6e6249f2ab7d4eed6 }, // -569
    Multiplier { upper: 0xe78be4dcc84ca7f5055ffa653e97f1ab, lower: 0x6e32c568a0974457d6a0feaabfbb17bc }, // -568
    Multiplier { upper: 0xb93cb71706a3b990d119951dcbacc155, lower: 0xf1c23786e6df69dfdee7322232fc12fd }, // -567
    Multiplier { upper: 0x94309278d21c9473da7addb16fbd6777, lower: 0xf49b5f9f1f19217fe585c1b4f5967597 }, // -566
    Multiplier { upper: 0xed1a83f48360ed862a5e2f824c623f26, lower: 0x542bcc31cb5b68cca26f9c54bc23ef58 }, // -565
    Multiplier { upper: 0xbdaecff6cf80be04eeb1bf9b704e98eb, lower: 0x76897027d5e2ba3d4ebfb043c9b65913 }, // -564
    Multiplier { upper: 0x97bf0cc572cd64d0bef4994926a54722, lower: 0xc53ac01fde4efb643effc0363af84743 }, // -563
    Multiplier { upper: 0xf2cb47a25148a14dfe5428750aa20b6a, lower: 0xd52accffca17f8a064cc66bd2b26d86a }, // -562
    Multiplier { upper: 0xc23c394ea76d4dd7fea9b9f73bb4d5ef, lower: 0x10ef0a663b46608050a38564228579ef }, // -561
    Multiplier { upper: 0x9b63610bb9243e46655494c5c95d77f2, lower: 0x73f26eb82f6b8066a6e937834ed12e59 }, // -560
    Multiplier { upper: 0xf89f01ac5b6d3070a220ee09422f2650, lower: 0xb983e459e578cd710b0ebf387e1b7d5a }, // -559
    Multiplier { upper: 0xc6e59af0492426c081b3f1a101bf51da, lower: 0x2e031d14b793d78da27232939815fde2 }, // -558
    Multiplier { upper: 0x9f1e158d07501f0067c327b40165db14, lower: 0xf19c1743c60fdfa481f4f542e01197e8 }, // -557
    Multiplier { upper: 0xfe9688e1a54cfe670c6b72b99bd62b54, lower: 0xb5c68b9fa34c99073654bb9e334f5973 }, // -556
    Multiplier { upper: 0xcbaba0b4843d98527055f561497822aa, lower: 0x2b053c7fb5d6e0d291dd62e4f5d9145c }, // -555
    Multiplier { upper: 0xa2efb3c39cfe137526ab2ab43ac68221, lower: 0xbc0430662b124d75417de8b72b14104a }, // -554
    Multiplier { upper: 0x82595c9c7d980f90ebbc2229c89ece81, lower: 0x63368d1e88db712a9acb209288dcd9d5 }, // -553
    Multiplier { upper: 0xd08efa93fc267f4e45f9d042da97b0cf, lower: 0x052414fda7c581ddc478341da7c7c2ee }, // -552
    Multiplier { upper: 0xa6d8c8766351ff71d194a69be212f3d8, lower: 0xd0e9aa6486379b17d06029b15306358b }, // -551
    Multiplier { upper: 0x857a39f84f74cc5b0e10854981a8c313, lower: 0xda5488506b5faf46404cee27759e913c }, // -550
    Multiplier { upper: 0xd5905cc07f2146f81680d542690e04ec, lower: 0x90874080abcc4ba39a14b03f22974ec6 }, // -549
    Multiplier { upper: 0xaad9e3cd328105934533ddceba719d8a, lower: 0x0d390066efd6a2e948108cff4edf7238 }, // -548
    Multiplier { upper: 0x88ae4fd75b9a6adc375cb1722ec14ad4, lower: 0xd760cd1f26454f210673a3ff724c5b60 }, // -547
    Multiplier { upper: 0xdab07fbef8f7116058944f1d179baaee, lower: 0x2567ae983d3bb1ce70b9066583ad5f00 }, // -546
    Multiplier { upper: 0xaef3996593f8dab37a103f4a7949558b, lower: 0x511fbee030fc8e3ec094051e02f118cd }, // -545
    Multiplier { upper: 0x8bf61451432d7bc2c80cff6ec76dde09, lower: 0x0db2ff19c0ca0b6566dcd0e4cf27470b }, // -544
    Multiplier { upper: 0xdff02082051592d14014cbe472496341, lower: 0xaf84cb5c67a9abd571614e3ae50ba4de }, // -543
    Multiplier { upper: 0xb3268068041142410010a31d283ab5ce, lower: 0x2603d5e3862156445ab43e95840950b1 }, // -542
    Multiplier { upper: 0x8f52005336743500ccda1c1753622b0b, lower: 0x519cab1c6b4dde9d155cfede033aa6f4 }, // -541
    Multiplier { upper: 0xe550008523ed219ae15cf9beebd044de, lower: 0xe8faab60abafca94eefb3163385dd7ed }, // -540
    Multiplier { upper: 0xb773339db6574e1581172e3256403718, lower: 0xba6222b3bc8ca210bf2f5ab5c6b1798b }, // -539
    Multiplier { upper: 0x92c28fb15eac3e779a78f1c1de99c5ad, lower: 0x61e81bc2fd3d4e73cc25e22b055ac7a2 }, // -538
    Multiplier { upper: 0xead0e5e89779fd8c2a5b1c6964293c48, lower: 0x9ca692d1952ee3ec79d636ab3bc4729d }, // -537
    Multiplier { upper: 0xbbda5186df94cad68848e3878354303a, lower: 0x16eba8a7aa8be989fb11c555c969f54a }, // -536
    Multiplier { upper: 0x96484138b2dd6f1206a0b60602a9c02e, lower: 0x78bc86ec886fee07fc0e3777d454c43c }, // -535
    Multiplier { upper: 0xf0739b8deafbe4e9a43456700442cd17, lower: 0x27940b140d7fe33ff9b058bfba2139f9 }, // -534
    Multiplier { upper: 0xc05c7c7188c983ee1cf6ab8cd03570df, lower: 0x52dcd5a9a4664f666159e09961b42e61 }, // -533
    Multiplier { upper: 0x99e396c13a3acff1b0c5560a402ac0b2, lower: 0xa8b0aaee1d1ea5eb8114b3ade7c3584d }, // -532
    Multiplier { upper: 0xf638f13529f7b31c4e0889aa00446784, lower: 0x411aab1694fdd6459b5452afd9388d48 }, // -531
    Multiplier { upper: 0xc4fa5a90ee5fc27d0b3a07bb3369ec69, lower: 0xcdaeef4543fe45047c4375597a93a43a }, // -530
    Multiplier { upper: 0x9d951540beb301fda294d2fc292189ee, lower: 0x3e258c3769983736c9cf9114620fb695 }, // -529
    Multiplier { upper: 0xfc21bb9acab8032f6a87b7f9db68dcb0, lower: 0x636f46bf0f59f1f142e5b4ed69b2bdbb }, // -528
    Multiplier { upper: 0xc9b496156ef99c25eed2f994af8716f3, lower: 0x82bf6bcc0c47f4c102515d8abaf56495 }, // -527
    Multiplier { upper: 0xa15d44ddf26149b7f2426143bf9f458f, lower: 0x9bcc563cd69ff700cea77e0895911d44 }, // -526
    Multiplier { upper: 0x81176a4b284dd49328351a9c994c37a6, lower: 0x163d11ca454cc59a3eec64d3aada7dd0 }, // -525
    Multiplier { upper: 0xce8bdd450d49541ea6bb5dc75bad25d6, lower: 0x89fb4faa087ad5c397e0a152aaf72fb4 }, // -524
    Multiplier { upper: 0xa53cb1040aa110188562b16c49575178, lower: 0x6e62a621a062449c7980810eef2c2629 }, // -523
    Multiplier { upper: 0x84308d9cd54da67a044ef456a112a793, lower: 0x8b821e814d1b6a16c79a00d8bf5684ee }, // -522
    Multiplier { upper: 0xd380e294887c3d9006e4ba2434eaa5b8, lower: 0xdf369735482bdcf13f5cce27988a6e49 }, // -521
    Multiplier { upper: 0xa933e876d39697a66bea2e835d888493, lower: 0xe5c545c439bcb0c0ff7d71b946d52508 }, // -520
    Multiplier { upper: 0x875cb9f8a945461ebcbb586917a06a0f, lower: 0xeb0437d02e308d6732cac161057750d3 }, // -519
    Multiplier { upper: 0xd8945cc10ed53cfdfac55a41bf671019, lower: 0x7806bfb37d1a7bd85144689b3bf21aeb }, // -518
    Multiplier { upper: 0xad437d673f10fd97fbd1150165ec0ce1, lower: 0x2cd232f5fdaec979da9d207c2ff4e256 }, // -517
    Multiplier { upper: 0x8a9c645298da64799640dd9ab7f00a4d, lower: 0xbd74f59197bf0794aee419fcf32a4eab }, // -516
    Multiplier { upper: 0xddc706ea8e2a3a5c239afc2abfe676e2, lower: 0xc8bb22828c64d8ede4a02994b843b111 }, // -515
    Multiplier { upper: 0xb16c058871bb61e34faf3022331ec582, lower: 0x3a2f4eced6b713f183b35476f9cfc0db }, // -514
    Multiplier { upper: 0x8df0046d27c91b1c3fbf59b4f5b2379b, lower: 0x61bf723f122c0ff4695c4392617300af }, // -513
    Multiplier { upper: 0xe319a0aea60e91c6cc655c54bc5058f8, lower: 0x9c6583981d134cba422d38ea3584cde5 }, // -512
    Multiplier { upper: 0xb5ae1a2551a5416bd6b77d1096a6ad93, lower: 0xb05136134a75d6fb68242d882ad0a4b7 }, // -511
    Multiplier { upper: 0x915814eaa7b767897892ca73abb88adc, lower: 0x8d0dc4dc3b9178c9201cf139bbda1d5f }, // -510
    Multiplier { upper: 0xe88cee443f8bd8dbf41e10b912c0de2d, lower: 0xae7c6e2d2c1bf475002e4ec2c629c898 }, // -509
    Multiplier { upper: 0xba0a5836993cad7cc34b40940f00b1be, lower: 0x253058242349905d99bea5689e87d3ad }, // -508
    Multiplier { upper: 0x94d5135ee0fd579702a29a100c008e31, lower: 0xb759e01ce907a6b147cbb786e5397624 }, // -507
    Multiplier { upper: 0xee21b897ce6225be6a9dc34ce000e382, lower: 0xbef6336174d90ab53fac58d7d528bd06 }, // -506
    Multiplier { upper: 0xbe81607971e81e31eee49c3d8000b602, lower: 0x325e8f812a473bc432f0471310ed6405 }, // -505
    Multiplier { upper: 0x9867806127ece4f4bf1d49cacccd5e68, lower: 0x284ba600ee9f63035bf36c0f40bde99e }, // -504
    Multiplier { upper: 0xf3d8cd683fe16e5464fba9447ae230a6, lower: 0xa6df70017dcbd19ef98579b2012fdc2f }, // -503
    Multiplier { upper: 0xc313d7869981251050c95436c8b4f3b8, lower: 0x857f8ccdfe3ca7b26137948e67597cf3 }, // -502
    Multiplier { upper: 0x9c0fdf9ee1341da6a70776923a2a5c93, lower: 0x9dffa3d7fe96ec8eb42c76d852adfd8f }, // -501
    Multiplier { upper: 0xf9b2ff649b8695d771a58a839043c752, lower: 0x9665d2f330f17a7ded13f15a1de32f4b }, // -500
    Multiplier { upper: 0xc7c265ea160544ac5aead5360d0305db, lower: 0xab84a8c28d8dfb97f0dcc114e4b5bf6f }, // -499
    Multiplier { upper: 0x9fceb7ee780436f048bbddc4d7359e49, lower: 0x5603ba353e0b2facc0b09a771d5e32c0 }, // -498
    Multiplier { upper: 0xffb1264a59a057e6dac62fa15855ca0e, lower: 0xf005f6bb96784c479ab42a582efd1dff }, // -497
    Multiplier { upper: 0xcc8db83b7ae6acb8af04f2e779de3b3f, lower: 0x266b2bc9452d09d2e229bb79bf30e4cc }, // -496
    Multiplier { upper: 0xa3a49362c8b88a2d58d0c252c7e4fc32, lower: 0x8522896dd0f0d4a8b4ee2f9498f3ea3d }, // -495
    Multiplier { upper: 0x82ea0f823a2d3b577a409b756cb73028, lower: 0x6a82078b0d8d76ed5d8b5943ad8fee97 }, // -494
    Multiplier { upper: 0xd1767f36c37b922590675f22478b8040, lower: 0xaa69a5ab48e257e22f455b9f7c197dbf }, // -493
    Multiplier { upper: 0xa791ff5f02c941b7a6b918e8393c669a, lower: 0x21ee1e22a0b5131b5904494c634797cc }, // -492
    Multiplier { upper: 0x860e65e59bd43492ebc747202dc9ebae, lower: 0x818b4b4ee6f7427c4736a109e906130a }, // -491
    Multiplier { upper: 0xd67d6fd5c620541e460ba500494312b0, lower: 0xcf45454b0b25372d3ebdce7641a351a9 }, // -490
    Multiplier { upper: 0xab978cab04e6a9b1d1a2ea66a102755a, lower: 0x3f6a9dd5a2842c24323171f83482a7ba }, // -489
    Multiplier { upper: 0x89460a226a52215b0e1beeb880cec448, lower: 0x32bbb177b53689b68e8df4c69068862f }, // -488
    Multiplier { upper: 0xdba3436a43b69bc4e35fe45a67b13a0d, lower: 0x1df91bf2bb8a75f0e4165470e70da37d }, // -487
    Multiplier { upper: 0xafb5cf88362bafd0b5e6504852f42e70, lower: 0xe4c7498efc6ec4c0b678438d85a482cb }, // -486
    Multiplier { upper: 0x8c9172d35e895973c4b84039dbf68b8d, lower: 0x83d2a13f30589d66f860360ad15068a2 }, // -485
    Multiplier { upper: 0xe0e8b7b8974228b93ac066c2f98a78e2, lower: 0x6c843531e6f42f0b27005677b54d7437 }, // -484
    Multiplier { upper: 0xb3ed5fc6df6820942f005235946ec71b, lower: 0x8a035dc1859025a28599dec62aa45cf9 }, // -483
    Multiplier { upper: 0x8ff1196be5ece6dcf266a82add256c16, lower: 0x0802b1679e0ceae86ae17f04eee9e3fa }, // -482
    Multiplier { upper: 0xe64e8f13097b0afb1d710d1161d579bc, lower: 0xd99de8a5c9ae44a71168cb3b17dc9ff6 }, // -481
    Multiplier { upper: 0xb83ed8dc0795a2627df40a744e446163, lower: 0xe14b2084a15836ec0ded6f62797d4cc5 }, // -480
    Multiplier { upper: 0x93657a499faae84ecb29a1f6a503811c, lower: 0xb43c1a03b4469256718abf81facaa3d1 }, // -479
    Multiplier { upper: 0xebd59075cc44a6e478429cbdd4d2682d, lower: 0xed2cf66c53a41d571c1132699144394e }, // -478
    Multiplier { upper: 0xbcaad9f7d69d525060354a31770eb9be, lower: 0x57572b89dc834aac167428547436943f }, // -477
    Multiplier { upper: 0x96ef14c6454aa8404cf76e8df8d89498, lower: 0x45df5607e39c3bbcdec35376c35edcff }, // -476
    Multiplier { upper: 0xf17e87a3a2110d33ae58b0e327c0edc0, lower: 0x6fcbbcd96c2d2c61646bb8be056494cb }, // -475
    Multiplier { upper: 0xc132061c81a73dc2f1e08d828633f166, lower: 0xbfd630adf02423811d22fa319dea10a3 }, // -474
    Multiplier { upper: 0x9a8e6b4a015297cf27e6d79b9e8ff452, lower: 0x3311c08b26834f9a7db594f47e54da1c }, // -473
    Multiplier { upper: 0xf74a45433550f2e50ca48c2c30e653b6, lower: 0xb81c67450a6bb290c92287ed96ee29c6 }, // -472
    Multiplier { upper: 0xc5d50435c440c250d6ea09bcf3eb762b, lower: 0xc67d1f6a6ebc8eda3a820657abf1bb05 }, // -471
    Multiplier { upper: 0x9e44035e369a350d78bb3afd8fef91bc, lower: 0x9eca7f885896d8ae9534d1dfbcc1626a }, // -470
    Multiplier { upper: 0xfd399efd2429ee7bf45ec4c8e64c1c60, lower: 0xfe10cc0d5a8af44a885482ff94689d76 }, // -469
    Multiplier { upper: 0xca947f30e9bb252ff6b237071ea349e7, lower: 0x31a709a4486f29d539dd35994386e45f }, // -468
    Multiplier { upper: 0xa21065c0bafc1dbff88e926c1882a185, lower: 0xc1526e1d06bf54aa94b0f7adcf9f1d19 }, // -467
    Multiplier { upper: 0x81a6b7cd62634afffa0ba8567a021ad1, lower: 0x677524e40565dd5543c0c624a618e414 }, // -466
    Multiplier { upper: 0xcf7126156a3877fff6790d57299cf7b5, lower: 0x725507d33bd62eeed2ce09d43cf4a020 }, // -465
    Multiplier { upper: 0xa5f41e77882d2cccc52da445bae3f95d, lower: 0xf510d30f6311bf257571a176972a19b3 }, // -464
    Multiplier { upper: 0x84c34b92d357570a3757b69e2f1cc77e, lower: 0x5da70f3f827498eac45ae7921288148f }, // -463
    Multiplier { upper: 0xd46bac1e1ef224dd255924304b613f30, lower: 0x95d818659d875b113a2b0c1cea735418 }, // -462
    Multiplier { upper: 0xa9efbce4e58e83e41de0e9c03c4dcc26, lower: 0xde4679eae46c48da94ef3ce3eec2a9ad }, // -461
    Multiplier { upper: 0x87f2fd83ead869834b1a5499c9d7d685, lower: 0x7e9ec7ef1d236d7baa58fd83256887be }, // -460
    Multiplier { upper: 0xd984c8d3115a426bab5d542942f2f0d5, lower: 0x976473182e9f1592aa27fc0508a73f96 }, // -459
    Multiplier { upper: 0xae03d3dc0de1cebc8917768768c25a44, lower: 0x791d28e0254c114221b9966a6d529945 }, // -458
    Multiplier { upper: 0x8b364316718172306dac5ed2ba351503, lower: 0x941753e6843cda9b4e2e11eebddbadd1 }, // -457
    Multiplier { upper: 0xdebd3823e8cf1d1a4913caeac388219f, lower: 0x5358863da0615dc549e34fe462f9161a }, // -456
    Multiplier { upper: 0xb230f9b653d8e415074308bbcfa01ae5, lower: 0xdc46d1cae6b44b043b1c3fe9e8c744e2 }, // -455
    Multiplier { upper: 0x8e8d9491dcad834405cf3a2fd94ce251, lower: 0x7d0574a25229d59cfc169987ed6c371b }, // -454
    Multiplier { upper: 0xe415ba82faaf386cd6185d195bae36e8, lower: 0xc808ba9d5042ef6193575c0caf138b5e }, // -453
    Multiplier { upper: 0xb677c868c88c2d23de79e41449582bed, lower: 0x6cd3c87dd9cf25e7a912b00a25a93c4c }, // -452
    Multiplier { upper: 0x91f96d20a070241cb1fb1cdd0779bcbd, lower: 0xf0a96d317b0c1e52eda88cd4eaedc9d6 }, // -451
    Multiplier { upper: 0xe98f150100b36cfab65e9494d8c2c796, lower: 0x4ddbe1e8c4e03084af741487de4942f0 }, // -450
    Multiplier { upper: 0xbad8dd9a66f5f0c891e543aa47023945, lower: 0x0b164e53d0b35a03bf90106cb1d4358d }, // -449
    Multiplier { upper: 0x957a4ae1ebf7f3d3a7ea9c8838ce9437, lower: 0x3c11d8430d5c4802ffa6738a27dcf7a4 }, // -448
    Multiplier { upper: 0xef2a1169798cb952a6442da6c14a86be, lower: 0xc682f39e7bc6d99e65d71f4372fb25d3 }, // -447
    Multiplier { upper: 0xbf54dabac7a3c77551d02485676ed232, lower: 0x3868c2e52fd247b1eb127f6928c8eb0f }, // -446
    Multiplier { upper: 0x9910aefbd2e96c5ddb0cea0452bf0e8e, lower: 0x93870250f30e9fc188db9920ed6d88d9 }, // -445
    Multiplier { upper: 0xf4e77e5fb7dbe0962b47dcd3b798174a, lower: 0x85a4d08184e432cf415f5b67e248daf5 }, // -444
    Multiplier { upper: 0xc3ec65195fe31a11bc397d762c79ac3b, lower: 0x9e1d739ad0b68f0c344c491fe83a48c4 }, // -443
    Multiplier { upper: 0x9cbd1dade64f480e302dfdf8239489c9, lower: 0x4b4ac2e240920c09c3703a7fecfb6d6a }, // -442
    Multiplier { upper: 0xfac82f7ca3b20ce380499659d28742db, lower: 0xabaad16a00e9acdc6be6c3ffe19248a9 }, // -441
    Multiplier { upper: 0xc8a025fd4fc1a3e9336e11e175390249, lower: 0x562241219a548a49efebcfffe7a83a21 }, // -440
    Multiplier { upper: 0xa0801e643fce1cba8f8b41812a9401d4, lower: 0x44e8341ae1dd3b6e598973331fb9c81a }, // -439
    Multiplier { upper: 0x80667eb69971b0953fa29acdbba99b10, lower: 0x372029af1b1762beae078f5c19616ce2 }, // -438
    Multiplier { upper: 0xcd70cabdc24f80eecc375e15f90f5e80, lower: 0x583375e4f8256acab00c18935bcf149c }, // -437
    Multiplier { upper: 0xa45a3bcb01d933f23cf91811940c4b99, lower: 0xe0292b1d9351223bc009ad42afd8dd4a }, // -436
    Multiplier { upper: 0x837b6308ce475cc1ca60e00e1009d614, lower: 0xb354227e0f741b630007bdcef313e43b }, // -435
    Multiplier { upper: 0xd25f04dae3a56136109b0016800fbced, lower: 0xebb9d0c9b2535f04ccd92fb184eca05e }, // -434
    Multiplier { upper: 0xa84c03e24fb780f80d48ccdeccd963f1, lower: 0x896173d48ea918d0a3e0f2f46a56e6b2 }, // -433
    Multiplier { upper: 0x86a3364ea62c672cd76d70b23d7ab65a, lower: 0xd44df643a55413da1cb3f59055125228 }, // -432
    Multiplier { upper: 0xd76b8a1770470b7af248b450625df091, lower: 0x53aff06c3bb9b95cfab988e6ee83b6a6 }, // -431
    Multiplier { upper: 0xac560812c038d5fbf506f6a6b517f3a7, lower: 0x762659f02fc7c77d95613a5258695eec }, // -430
    Multiplier { upper: 0x89de6cdbccfa44c990d25eebc4132952, lower: 0xc4eb7b268c9fd2cadde761db79ede589 }, // -429
    Multiplier { upper: 0xdc971492e1906e0f4e1d64ac6ceb7551, lower: 0x3b125ea41432eade2fd89c925cafd5a8 }, // -428
    Multiplier { upper: 0xb078dd424e0d24d90b4ab6f05722c440, lower: 0xfc0eb21cdcf588b1bfe07d41e3bfde20 }, // -427
    Multiplier { upper: 0x8d2d7dcea4d750ada2a22bf378e89d00, lower: 0xc9a55b4a4a5e06f499806434b633181a }, // -426
    Multiplier { upper: 0xe1e262e43af21aaf6a9d131f27da94ce, lower: 0x0f6ef876dd633e5428cd6d212384f35c }, // -425
    Multiplier { upper: 0xb4b51be9c8c1aef2bbb0dc18ecaedd71, lower: 0xa5f2605f1782984353d78a80e9372917 }, // -424
    Multiplier { upper: 0x9090e3216d67bf289627167a56f24ac1, lower: 0x518eb37f460213690fdfa200ba928746 }, // -423
    Multiplier { upper: 0xe74e38357bd931da89d823f6f183aace, lower: 0xe8e452653cd01f0e7fcc366790ea7209 }, // -422
    Multiplier { upper: 0xb90b602ac97a8e486e46832bf4695572, lower: 0x53e9db8430a67f3ecca35eb940bb8e6d }, // -421
    Multiplier { upper: 0x940919bbd4620b6d250535bcc387778e, lower: 0xa987e2d026eb98ff0a1c4bc766fc71f1 }, // -420
    Multiplier { upper: 0xecdb5c5fba3678aea1a1ef946c0bf27d, lower: 0xdc0c9e19d7df5b31a9c6dfa57193e982 }, // -419
    Multiplier { upper: 0xbd7c49e62e91fa254e1b2610566ff531, lower: 0x7cd6e4e1797f7c27bb057fb78e0fee01 }, // -418
    Multiplier { upper: 0x9796a184f20e61b771af51a6ab8cc427, lower: 0x971250b46132c9b9626acc92d80cbe68 }, // -417
    Multiplier { upper: 0xf28a9c07e9b09c58b5e54f71127ad372, lower: 0x8b5081209b8475f56a447a848ce130a6 }, // -416
    Multiplier { upper: 0xc2087cd3215a16ad5e510c5a752f0f8e, lower: 0xd5da00e6e2d05e5dee9d2ed070b426eb }, // -415
    Multiplier { upper: 0x9b39fd75b44812244b7409e1f758d93f, lower: 0x117b33ebe8a6b1e4bee425738d5cebef }, // -414
    Multiplier { upper: 0xf85cc8bc53a6836d45867636588e2864, lower: 0xe8c51fdfdaa44fd464a03bec1561797e }, // -413
    Multiplier { upper: 0xc6b0a096a95202bdd1385e91e071b9ea, lower: 0x53d0e64caee9d976b6e6965677812dff }, // -412
    Multiplier { upper: 0x9ef3b3abbaa80231742d1874b38e2e55, lower: 0x0fda51d6f254adf8925211dec600f199 }, // -411
    Multiplier { upper: 0xfe52b912c4400382537b5a54527d16ee, lower: 0x7fc3b624b6ede32750834fcad667e8f4 }, // -410
    Multiplier { upper: 0xcb7560dbd0333601dc62aea9db97458b, lower: 0x99695e83c58b1c1f739c3fd5785320c3 }, // -409
    Multiplier { upper: 0xa2c44d7ca68f5e67e3822554afac37a2, lower: 0xe12118696ad5b0192949ccaac6a8e703 }, // -408
    Multiplier { upper: 0x8236a463b872b1ecb601b776f2f02c82, lower: 0x4db4138788aaf347543b0a2238871f36 }, // -407
    Multiplier { upper: 0xd0576d6c5a511cadf002bf24b7e6ad9d, lower: 0x49201f3f4111853eed2b4369f40b6522 }, // -406
    Multiplier { upper: 0xa6ac5789e1da7d57f33565b6f98557b1, lower: 0x074ce5cc340e04325755cf87f66f841c }, // -405
    Multiplier { upper: 0x8556ac6e4e4864465c2ab7c5946aac8d, lower: 0x9f70b7d6900b368eac44a6065ebf9ce3 }, // -404
    Multiplier { upper: 0xd5577a4a16da3a0a2d112608ed777a7c, lower: 0x324df2f0e678574aad3aa33d6465c7d1 }, // -403
    Multiplier { upper: 0xaaac61d4df14fb3b5740eb3a5792c863, lower: 0x5b718f271ec6ac3bbdc8829783849fdb }, // -402
    Multiplier { upper: 0x8889e7dd7f43fc2f7900bc2eac756d1c, lower: 0x4927a5b8e56bbcfc97d39bac6936e649 }, // -401
    Multiplier { upper: 0xda763fc8cb9ff9e58e67937de0bbe1c6, lower: 0xdb72a2c16f12c7fa8c85c5e0a857d6da }, // -400
    Multiplier { upper: 0xaec4ffd3d61994b7a51fa93180964e38, lower: 0xaf8ee89abf4239953d37d18086acabe2 }, // -399
    Multiplier { upper: 0x8bd0cca9781476f950e620f466dea4fa, lower: 0x260bed489901c7aa975fdacd388a231b }, // -398
    Multiplier { upper: 0xdfb47aa8c020be5bb4a367ed71643b29, lower: 0xd6797ba75b360c4425662ae1f410382b }, // -397
    Multiplier { upper: 0xb2f6c887001a31e2f6e91ff127836287, lower: 0xdec7961f7c2b3d03511e88b4c3402cf0 }, // -396
    Multiplier { upper: 0x8f2bd39f334827e8c5874cc0ec691b9f, lower: 0xe56c781930229735da7ed3c3cf668a59 }, // -395
    Multiplier { upper: 0xe512ec31eba6a6413c0bae017a41c5cc, lower: 0xa247268eb36a8b895d97b9394bd743c2 }, // -394
    Multiplier { upper: 0xb742568e561eeb67633c8b3461ce37d6, lower: 0xe838eba55c553c6de47960faa3129c9b }, // -393
    Multiplier { upper: 0x929b7871de7f22b91c306f5d1b0b5fdf, lower: 0x202d895116aa96be50611a621c0ee3af }, // -392
    Multiplier { upper: 0xea925a4fca65045b604d7efb5e789965, lower: 0x0048dbb4f110f130809b5d69c67e3918 }, // -391
    Multiplier { upper: 0xbba8483fd51d9d15e6a46595e52d4784, lower: 0x003a495d8da7275a007c4abb0531c747 }, // -390
    Multiplier { upper: 0x962039ccaa7e1744b8838477ea8a9f9c, lower: 0xccfb6de4715285e199fd08959dc16c39 }, // -389
    Multiplier { upper: 0xf0338faddd968ba12738d3f310ddcc2e, lower: 0x14c57ca0b550d635c32e7422960246c1 }, // -388
    Multiplier { upper: 0xc0293fbe4aded61a85c70ff5a717d68b, lower: 0x43d13080910d782b028b901bab350567 }, // -387
    Multiplier { upper: 0x99ba996508b244e2049f3ff7b8dfded5, lower: 0xcfda8d33a73df9bc020940162290d11f }, // -386
    Multiplier { upper: 0xf5f75bd4dab6d49cd431fff2c1663156, lower: 0x195daeb90b965c60034200236a814e98 }, // -385
    Multiplier { upper: 0xc4c5e310aef8aa171027fff56784f444, lower: 0xe117befa6fab7d199c34cce922010bad }, // -384
    Multiplier { upper: 0x9d6b1c0d58c6ee78d9b999911f9d9037, lower: 0x1a7965952622ca7ae35d70ba819a6fbe }, // -383
    Multiplier { upper: 0xfbde93488e0b1727c2c28f4e98fc19f1, lower: 0xc3f56f5509d143f7d22f1ac40290b2c9 }, // -382
    Multiplier { upper: 0xc97edc3a0b3c1286356872a5473014c1, lower: 0x699125dda174365fdb58e2366873c23b }, // -381
    Multiplier { upper: 0xa13249c808fcdb9e91205bb76c267701, lower: 0x2140eb17b45cf84caf7a4e91ed29682f }, // -380
    Multiplier { upper: 0x80f507d33a63e2e540e6afc5f01ec59a, lower: 0x8100bc12f6b0c6a3bf950ba7f0edecf2 }, // -379
    Multiplier { upper: 0xce54d951f70637d534a44c6fe697a290, lower: 0xce6793518ab47105ff54df731b1647ea }, // -378
    Multiplier { upper: 0xa510addb2c04f9775d503d265212e873, lower: 0xd852dc413bc38d9e65dd7f8f48de9fef }, // -377
    Multiplier { upper: 0x840d57e2899d945f7dd9ca850e7586c3, lower: 0x13757d00fc9c714b84b132d907187ff2 }, // -376
    Multiplier { upper: 0xd3488c9da8fc2098c95c773b4a55a46b, lower: 0x525594ce60fa4edf3ab51e280b5a6650 }, // -375
    Multiplier { upper: 0xa906d6e487301a13d449f8fc3b77b6bc, lower: 0x41de10a51a61d8b2955db1b9a2aeb840 }, // -374
    Multiplier { upper: 0x8738abea05c014dca9d4c7302f92f896, lower: 0x9b180d50e1e7e08edde48e2e1bbef9cd }, // -373
    Multiplier { upper: 0xd85aaca9a2ccee2ddc87a519e5b7f424, lower: 0x2b59aee7cfd9674afca0e37cf9318fae }, // -372
    Multiplier { upper: 0xad1556ee1bd724f17d3950e1849329b6, lower: 0x89148beca64785d596e71c63fa8e0c8b }, // -371
    Multiplier { upper: 0x8a7778be7cac1d8dfdc773e79d4287c5, lower: 0x3a76d656eb6c6b114585b04ffba4d6d6 }, // -370
    Multiplier { upper: 0xdd8bf463faacfc1662d8b97295373fa1, lower: 0xf7248a24abe0ab4ed5a2b3b32c3af156 }, // -369
    Multiplier { upper: 0xb13cc3832ef0c9ab8246fac210f8ffb4, lower: 0xc5b6d4ea231a22a577b55c8f56958dde }, // -368
    Multiplier { upper: 0x8dca36028bf3d489350595680d93ffc3, lower: 0xd15f10bb4f481bb792f77d3f7877a4b2 }, // -367
    Multiplier { upper: 0xe2dd23374652eda854d5bbd9af5332d2, lower: 0xe8981ac54ba692bf518bfb98c0bf6de9 }, // -366
    Multiplier { upper: 0xb57db5c5d1dbf153771163148c428f0f, lower: 0x2079af043c854232a7a32fad66ff8b21 }, // -365
    Multiplier { upper: 0x91315e37db165aa92c0de8dd3d020c0c, lower: 0x19faf269ca0434f552e8f2f11f32d5b4 }, // -364
    Multiplier { upper: 0xe84efd262b56f775134974952e69ace0, lower: 0x299183dc766d218884a7eb1b651e22ba }, // -363
    Multiplier { upper: 0xb9d8ca84ef78c5f742a12a10f1ee23e6, lower: 0x87a79cb05ebdb46d36ecbc15ea7e822e }, // -362
    Multiplier { upper: 0x94ad6ed0bf93d1929bb421a727f1b652, lower: 0x061fb08d1897c38a9256fcde553201bf }, // -361
    Multiplier { upper: 0xede24ae798ec82842c53690b731c56e9, lower: 0xa365e748275938ddb6f19496eeb66931 }, // -360
    Multiplier { upper: 0xbe4ea252e0bd353689dc540928e378ba, lower: 0xe91e52a01f7a93e4925add458bc520f4 }, // -359
    Multiplier { upper: 0x983ee8424d642a9207e3766dba4f93c8, lower: 0xba7ea880192edcb6db7be437a3041a5d }, // -358
    Multiplier { upper: 0xf397da03af06aa833fd25715f6e5b941, lower: 0x2a6440ccf517c78af8c639f29e6cf6fb }, // -357
    Multiplier { upper: 0xc2dfe19c8c055535cca845ab2beafa9a, lower: 0x885033d72a796c6f2d6b618ee523f8c9 }, // -356
    Multiplier { upper: 0x9be64e16d66aaa9170869e228988c87b, lower: 0xa0402978eec789f28abc4e0bea832d6d }, // -355
    Multiplier { upper: 0xf9707cf1571110e8b40a969da8dada5f, lower: 0x66cd0f27e4727650ddfa1679773848af }, // -354
    Multiplier { upper: 0xc78d30c112740d86f66edee487157b7f, lower: 0x8570d8ecb6c1f840b194dec792936d59 }, // -353
    Multiplier { upper: 0x9fa42700db900ad25ebf18b6d27795ff, lower: 0x9df3e0bd5f019366f477189fa875f114 }, // -352
    Multiplier { upper: 0xff6d0b34928011509798278aea58efff, lower: 0x631fcdfbcb35b8a4ba582765da564e86 }, // -351
    Multiplier { upper: 0xcc573c2a0eccdaa6dfacec6f21e0bfff, lower: 0x827fd7fca2916083c84685eb1511d86b }, // -350
    Multiplier { upper: 0xa378fcee723d7bb8b2f0bd25b4b3cccc, lower: 0x68664663b5411a03069ed188dda7e056 }, // -349
    Multiplier { upper: 0x82c730bec1cac9608f26fdb7c3c30a3d, lower: 0x2051d1e95dcdae68d218a7a0b15319de }, // -348
    Multiplier { upper: 0xd13eb464694475674b7195f2d2d1a9fb, lower: 0x66e94fdbc949170e1cf43f67821e8fca }, // -347
    Multiplier { upper: 0xa7655d1d2103911f6f8e118f0f0e2195, lower: 0xebedd97ca10745a4e3f6991f9b4ba63b }, // -346
    Multiplier { upper: 0x85eab0e41a6940e5f2d80e0c0c0b4e11, lower: 0x898b1463b405d150b65ee0e615d61e96 }, // -345
    Multiplier { upper: 0xd6444e39c3db9b09848ce34679abb01c, lower: 0x0f44ed6c533c821abd649b09bc89ca89 }, // -344
    Multiplier { upper: 0xab69d82e364948d46a0a4f6b948959b0, lower: 0x0c372456a8fd34e2311d48d496d4a207 }, // -343
    Multiplier { upper: 0x892179be91d43a4388083f8943a1148c, lower: 0xd69283788730f71b5a7dd3dd4576e806 }, // -342
    Multiplier { upper: 0xdb68c2ca82ed2a05a67398db9f6820e1, lower: 0x5750d25a71e7f1c55d961fc86f24a670 }, // -341
    Multiplier { upper: 0xaf87023b9bf0ee6aeb8fad7c7f8680b4, lower: 0x45da41e1f4b98e377e11b306bf508526 }, // -340
    Multiplier { upper: 0x8c6c01c9498d8b88bc72f130660533c3, lower: 0x6b150181909471c5fe748f38990d3752 }, // -339
    Multiplier { upper: 0xe0accfa875af45a793eb1b80a33b8605, lower: 0x78219c0280ed82d663edb1f428152550 }, // -338
    Multiplier { upper: 0xb3bd72ed2af29e1fa988e2cd4f62d19d, lower: 0xf9b47ccecd8acf11e98af4c353441dd9 }, // -337
    Multiplier { upper: 0x8fcac257558ee4e6213a4f0aa5e8a7b1, lower: 0x949063d8a46f0c0e546f2a35dc367e48 }, // -336
    Multiplier { upper: 0xe61136f2227e3b09cec3b1aaa30dd91c, lower: 0x20e706276d7e79b08718438960573072 }, // -335
    Multiplier { upper: 0xb80dc58e81fe95a1723627bbb5a4adb0, lower: 0x1a526b52bdfec7c06c13693ab378f38f }, // -334
    Multiplier { upper: 0x933e37a534cbaae78e91b962f7b6f159, lower: 0xaea855dbcb323966bcdc542ef5fa5c72 }, // -333
    Multiplier { upper: 0xeb96bf6ebadf77d8e41c5bd18c57e88f, lower: 0x7dda22f9451d28a4616086b1899093ea }, // -332
    Multiplier { upper: 0xbc789925624c5fe0b67d16413d132072, lower: 0xcb14e8c76a7dba1d1ab39ef46e0d4322 }, // -331
    Multiplier { upper: 0x96c6e0eab509e64d5eca783430dc19f5, lower: 0x6f43ed6c553161b0e2294bf6be710281 }, // -330
    Multiplier { upper: 0xf13e34aabb430a15647726b9e7c68fef, lower: 0x186caf13bb8235e7d042132463e80402 }, // -329
    Multiplier { upper: 0xc0fe908895cf3b44505f522e53053ff2, lower: 0x79f08c0fc934f7eca69b428383200335 }, // -328
    Multiplier { upper: 0x9a65406d44a5c903737f74f1dc043328, lower: 0x618d3cd96dc3f98a1ee29b9c68e668f7 }, // -327
    Multiplier { upper: 0xf70867153aa2db38b8cbee4fc66d1ea7, lower: 0x027b948f16065c10316a9293db0a418b }, // -326
    Multiplier { upper: 0xc5a05277621be293c7098b7305241885, lower: 0x9b961072780516735abba87648d5013c }, // -325
    Multiplier { upper: 0x9e19db92b4e31ba96c07a2c26a8346d1, lower: 0x4944d9f52cd0dec2aefc86c50710cdca }, // -324
    Multiplier { upper: 0xfcf62c1dee382c4246729e03dd9ed7b5, lower: 0x4207c321e14e31377e60d7a1a4e7afa9 }, // -323
    Multiplier { upper: 0xca5e89b18b602368385bb19cb14bdfc4, lower: 0x34d30281810b5a92cb80ac8150b95954 }, // -322
    Multiplier { upper: 0xa1e53af46f801c5360495ae3c1097fd0, lower: 0x2a4268679a6f7ba8a2cd56cdda2de110 }, // -321
    Multiplier { upper: 0x81842f29f2cce375e6a1158300d46640, lower: 0x21ceb9ec7b8c62ed4f0aabd7e1be4da7 }, // -320
    Multiplier { upper: 0xcf39e50feae16befd768226b34870a00, lower: 0x36178fe0c5ad6b154b44462635fd490a }, // -319
    Multiplier { upper: 0xa5c7ea73224deff312b9b522906c0800, lower: 0x2b460cb3d15788ddd5d0381e91976da2 }, // -318
    Multiplier { upper: 0x849feec281d7f328dbc7c41ba6bcd333, lower: 0x55d1a3c30ddfa0b177d9c67edadf8ae8 }, // -317
    Multiplier { upper: 0xd433179d9c8cb8415fa60692a46151eb, lower: 0xbc829f9e7c99011bf2f60a649165ab0d }, // -316
    Multiplier { upper: 0xa9c2794ae3a3c69ab2eb3875504ddb22, lower: 0xfd354c7eca1400e328c4d51d411e2271 }, // -315
    Multiplier { upper: 0x87cec76f1c8305488f2293910d0b15b5, lower: 0x975dd6cbd4dccd828703ddb100e4e85a }, // -314
    Multiplier { upper: 0xd94ad8b1c738087418375281ae7822bc, lower: 0x2562f146216148d0d8062f819b07da2a }, // -313
    Multiplier { upper: 0xadd57a27d29339f679c5db9af1f9b563, lower: 0x511bf4381ab43a40acd1bf9ae26cae88 }, // -312
    Multiplier { upper: 0x8b112e86420f6191fb04afaf27faf782, lower: 0xa749902ce229c833bd749948b523bed3 }, // -311
    Multiplier { upper: 0xde81e40a034bcf4ff8077f7ea65e58d1, lower: 0x0ba8e6ae36a94052c8ba8edabb6c6485 }, // -310
    Multiplier { upper: 0xb201833b35d63f732cd2cc6551e513da, lower: 0x6fba5224f88766a8a0953f1562bd1d37 }, // -309
    Multiplier { upper: 0x8e679c2f5e44ff8f570f09eaa7ea7648, lower: 0x5961db50c6d2b886e6ddcc111bca7dc6 }, // -308
    Multiplier { upper: 0xe3d8f9e563a198e558180fddd97723a6, lower: 0xf5695ee7a4845a717162e01b5faa62d6 }, // -307
    Multiplier { upper: 0xb6472e511c81471de0133fe4adf8e952, lower: 0x5dede5861d36aec127824ce2b2eeb578 }, // -306
    Multiplier { upper: 0x91d28b7416cdd27e4cdc331d57fa5441, lower: 0xe4be5138175ef2341f9b70b55bf22ac6 }, // -305
    Multiplier { upper: 0xe950df20247c83fd47c6b82ef32a2069, lower: 0x6dfd4ec02564b6b9cc2be788931d113d }, // -304
    Multiplier { upper: 0xbaa718e68396cffdd30560258f54e6ba, lower: 0xbe643f001dea2bc7d6898606dc1740fe }, // -303
    Multiplier { upper: 0x95527a5202df0ccb0f37801e0c43ebc8, lower: 0x985032667e54efd312079e6be345cd98 }, // -302
    Multiplier { upper: 0xeeea5d50049814781858ccfce06cac74, lower: 0x26e6b70a63bb1951b6729713053c7c26 }, // -301
    Multiplier { upper: 0xbf21e44003acdd2ce0470a63e6bd56c3, lower: 0x52522c084fc8e10e2b8edf426a96c9b8 }, // -300
    Multiplier { upper: 0x98e7e9cccfbd7dbd8038d51cb897789c, lower: 0x41db566d0ca0b40b560be5cebbabd493 }, // -299
    Multiplier { upper: 0xf4a642e14c6262c8cd27bb612758c0fa, lower: 0x02f88a481434534556796fb12c4620ec }, // -298
    Multiplier { upper: 0xc3b8358109e84f070a862f80ec4700c8, lower: 0x02606ea01029dc3778612627569e80bd }, // -297
    Multiplier { upper: 0x9c935e00d4b9d8d26ed1bf9a569f33d3, lower: 0x3519f219a687e35f9380eb52abb20097 }, // -296
    Multiplier { upper: 0xfa856334878fc150b14f98f6f0feb951, lower: 0xee8fe9c2a40c9eff5267deeaac5000f1 }, // -295
    Multiplier { upper: 0xc86ab5c39fa634408dd9472bf3fefaa7, lower: 0xf20cbb021cd6e5990eb97f22237333f4 }, // -294
    Multiplier { upper: 0xa0555e361951c366d7e105bcc332621f, lower: 0xf4d6fc01b0abeae0d89465b4e928f65d }, // -293
    Multiplier { upper: 0x80444b5e7aa7cf857980d163cf5b81b3, lower: 0x2a459667c08988b3e076b7c3edba5eb1 }, // -292
    Multiplier { upper: 0xcd3a1230c43fb26f28ce1bd2e55f35eb, lower: 0x76d5bd72cda8dab9672459397c5d644e }, // -291
    Multiplier { upper: 0xa42e74f3d032f525ba3e7ca8b77f5e55, lower: 0xf8aafdf57153e22dec1d142dfd178372 }, // -290
    Multiplier { upper: 0x83585d8fd9c25db7c831fd53c5ff7eab, lower: 0x2d5597f78ddcb4f189b0dcf1974602c2 }, // -289
    Multiplier { upper: 0xd226fc195c6a2f8c73832eec6fff3111, lower: 0xe2228cbf4961218275e7c7e8f2099e02 }, // -288
    Multiplier { upper: 0xa81f301449ee8c705c68f256bfff5a74, lower: 0xb4e870990780e79b918639872807b19b }, // -287
    Multiplier { upper: 0x867f59a9d4bed6c049ed8eabcccc485d, lower: 0x5d86c07a6c671fafa79e946c200627b0 }, // -286
    Multiplier { upper: 0xd732290fbacaf133a97c177947ad4095, lower: 0x627133f713d832b2a5ca871366703f7f }, // -285
    Multiplier { upper: 0xac2820d9623bf429546345fa9fbdcd44, lower: 0x4ec0f65f43135bc21e3b9f42b859cc66 }, // -284
    Multiplier { upper: 0x89b9b3e11b6329baa9e904c87fcb0a9d, lower: 0x0bcd91e5cf42afce7e9619022d14a385 }, // -283
    Multiplier { upper: 0xdc5c5301c56b75f77641a140cc7810fb, lower: 0x4615b63c7ed1194a64235b36ae876c07 }, // -282
    Multiplier { upper: 0xb049dc016abc5e5f91ce1a9a3d2cda62, lower: 0x9e77c4fd3240e108501c48f88b9f899f }, // -281
    Multiplier { upper: 0x8d07e33455637eb2db0b487b6423e1e8, lower: 0x7ec63730f500b406a67d072d3c7fa14c }, // -280
    Multiplier { upper: 0xe1a63853bbd264515e7873f8a0396973, lower: 0xfe09f1e7ee6786710a61a5152d990214 }, // -279
    Multiplier { upper: 0xb484f9dc9641e9dab1f9f660802dedf6, lower: 0x64d4c1865852d1f4084e1daa8ae0ce76 }, // -278
    Multiplier { upper: 0x906a617d450187e227fb2b80668b24c5, lower: 0x1d77013846a8a7f66d0b4aeed580a52b }, // -277
    Multiplier { upper: 0xe7109bfba19c0c9d0cc512670a783ad4, lower: 0xfbf19b8d3ddaa65714dede4aef343b78 }, // -276
    Multiplier { upper: 0xb8da1662e7b00a173d6a751f3b936243, lower: 0xfcc1493dcb1551df43e57ea258f695fa }, // -275
    Multiplier { upper: 0x93e1ab8252f33b45cabb90e5c942b503, lower: 0x309aa0fe3c110e4c3651321b7a5ede62 }, // -274
    Multiplier { upper: 0xec9c459d51852ba2ddf8e7d60ed1219e, lower: 0xb42a9b30601b4a138a1b835f2a3163cf }, // -273
    Multiplier { upper: 0xbd49d14aa79dbc824b2d8644d8a74e18, lower: 0x902215c04ce2a1a93b4935e5bb5ab640 }, // -272
    Multiplier { upper: 0x976e41088617ca01d5be0503e085d813, lower: 0xa681ab003d821aedc9075e5162aef833 }, // -271
    Multiplier { upper: 0xf24a01a73cf2dccfbc633b39673c8cec, lower: 0x3d9c44cd2f36917c74d896e89de4c051 }, // -270
    Multiplier { upper: 0xc1d4ce1f63f57d72fd1c2f611f63a3f0, lower: 0x3149d0a425c541305d7a1253b183cd0e }, // -269
    Multiplier { upper: 0x9b10a4e5e9913128ca7cf2b4191c8326, lower: 0x8dd4a6e9b7d100f37dfb41dc8e030a72 }, // -268
    Multiplier { upper: 0xf81aa16fdc1b81dadd94b7868e94050a, lower: 0x7c877175f2e80185965ecfc7499e771c }, // -267
    Multiplier { upper: 0xc67bb4597ce2ce48b143c6053edcd0d5, lower: 0x306c5ac4c253346adeb23fd2a14b927d }, // -266
    Multiplier { upper: 0x9ec95d1463e8a506f4363804324a40aa, lower: 0x8d237bd09b75c388b228330ee76fa864 }, // -265
    Multiplier { upper: 0xfe0efb53d30dd4d7ed238cd383aa0110, lower: 0xe1d25fb42bef9f411d0d1e7e3f190d6c }, // -264
    Multiplier { upper: 0xcb3f2f7642717713241c70a936219a73, lower: 0xe7db7fc356594c34173db1fe98e0d78a }, // -263
    Multiplier { upper: 0xa298f2c501f45f428349f3ba91b47b8f, lower: 0xecaf996911e109c345caf4cbad80ac6f }, // -262
    Multiplier { upper: 0x8213f56a67f6b29b9c3b29620e29fc73, lower: 0x23bfadeda7e73b029e3bf709579a238c }, // -261
    Multiplier { upper: 0xd01fef10a657842c2d2b7569b0432d85, lower: 0x05ff7caf730b919dc9f98b4225c36c12 }, // -260
    Multiplier { upper: 0xa67ff273b84603568a892abaf368f137, lower: 0x37ff96f2c26fa7b16e613c34eb02bcdc }, // -259
    Multiplier { upper: 0x8533285c936b35ded53a88958f87275f, lower: 0x5fffabf5685952f4584dc9c3ef3563e3 }, // -258
    Multiplier { upper: 0xd51ea6fa85785631552a74227f3ea565, lower: 0x6665dfef0d5bb7ed5a160f9fe522396b }, // -257
    Multiplier { upper: 0xaa7eebfb9df9de8dddbb901b98feeab7, lower: 0x851e4cbf3de2f98aae780c7fea81c789 }, // -256
    Multiplier { upper: 0x8865899617fb18717e2fa67c7a658892, lower: 0xd0e50a3297e8c7a2252cd6ccbb9b0607 }, // -255
    Multiplier { upper: 0xda3c0f568cc4f3e8c9e5d72d90a2741e, lower: 0x1b081050f30e0c36a1e157adf8f809a5 }, // -254
    Multiplier { upper: 0xae9672aba3d0c320a184ac2473b529b1, lower: 0xaf39a6a728d809c54e4ddfbe60c66e1e }, // -253
    Multiplier { upper: 0x8bab8eefb6409c1a1ad089b6c2f7548e, lower: 0x25c7b885ba466e3771d7e631e70524e5 }, // -252
    Multiplier { upper: 0xdf78e4b2bd342cf6914da9246b255416, lower: 0xa2d9273c5d3d7d2582f309e971a1d4a1 }, // -251
    Multiplier { upper: 0xb2c71d5bca9023f8743e20e9ef511012, lower: 0x1be0ec304a979751358f3b2127b4aa1a }, // -250
    Multiplier { upper: 0x8f05b1163ba6832d29cb4d87f2a7400e, lower: 0x7cb3f026a212df742ad8fc1a862a21af }, // -249
    Multiplier { upper: 0xe4d5e82392a405150fabaf3feaa5334a, lower: 0x611fe6a4368498b9de27f9c409dd02b1 }, // -248
    Multiplier { upper: 0xb7118682dbb66a773fbc8c33221dc2a1, lower: 0xe74cb8835ed07a2e4b532e366e4a688d }, // -247
    Multiplier { upper: 0x92746b9be2f8552c32fd3cf5b4e49bb4, lower: 0xb90a2d35e57394f1d5dc24f8583b86d8 }, // -246
    Multiplier { upper: 0xea53df5fd18d551384c86189216dc5ed, lower: 0xf4dd152308b8ee4fbc936e5a26c5a48c }, // -245
    Multiplier { upper: 0xbb764c4ca7a4440f9d6d1ad41abe37f1, lower: 0x90b0ddb5a093f1d963a92514ebd15070 }, // -244
    Multiplier { upper: 0x95f83d0a1fb69cd94abdaf101564f98e, lower: 0x0d5a4af7b3a98e4782edb743efdaa6c0 }, // -243
    Multiplier { upper: 0xeff394dcff8a948eddfc4b4cef07f5b0, lower: 0x155d44bf85dc16d8d17c586cb2f77133 }, // -242
    Multiplier { upper: 0xbff610b0cc6edd3f17fd090a58d32af3, lower: 0x444a9d6604b012470dfd138a28c5f429 }, // -241
    Multiplier { upper: 0x9991a6f3d6bf1765acca6da1e0a8ef29, lower: 0x036ee4519d59a838d7fda93b53d19021 }, // -240
    Multiplier { upper: 0xf5b5d7ec8acb58a2ae10af696774b1db, lower: 0x38b16d4f62290d27bffc41f8861c19ce }, // -239
    Multiplier { upper: 0xc491798a08a2ad4ef1a6f2bab92a27e2, lower: 0x93c1243f81ba70ec99969b2d38167b0b }, // -238
    Multiplier { upper: 0x9d412e0806e88aa58e1f289560ee864e, lower: 0xdc9a83660161f3f07adee28a93452f3c }, // -237
    Multiplier { upper: 0xfb9b7cd9a4a7443c169840ef017da3b1, lower: 0x60f738a33569864d91649daa853b7ec7 }, // -236
    Multiplier { upper: 0xc94930ae1d529cfcdee033f26797b627, lower: 0x80c5c6e8f7879ea474507e22042f989f }, // -235
    Multiplier { upper: 0xa1075a24e4421730b24cf65b8612f81f, lower: 0x9a37d253f9394bb6c373981b368c7a19 }, // -234
    Multiplier { upper: 0x80d2ae83e9ce78f3c1d72b7c6b426019, lower: 0x482ca8432dc76fc56929467c2ba394e1 }, // -233
    Multiplier { upper: 0xce1de40642e3f4b936251260ab9d668e, lower: 0xd9e10d38493f193bdb753d937905bb01 }, // -232
    Multiplier { upper: 0xa4e4b66b68b65d60f81da84d5617853f, lower: 0x14b40a936dcc142fe2c43142c737c8ce }, // -231
    Multiplier { upper: 0x83ea2b892091e44d934aed0aab460432, lower: 0x76f66edc57d6768cb569c10238f96d71 }, // -230
    Multiplier { upper: 0xd31045a8341ca07c1ede48111209a050, lower: 0xbe5717c6f2f0bdadef0f9b36c18f1582 }, // -229
    Multiplier { upper: 0xa8d9d1535ce3b3967f1839a741a14d0d, lower: 0x6512796bf58d648b25a615c567a5aacf }, // -228
    Multiplier { upper: 0x8714a775e3e95c7865acfaec34810a71, lower: 0x1da861232ad783a28484de37861e223f }, // -227
    Multiplier { upper: 0xd8210befd30efa5a3c47f7e05401aa4e, lower: 0x95da35051158d29da0d496bf3cfd0398 }, // -226
    Multiplier { upper: 0xace73cbfdc0bfb7b636cc64d1001550b, lower: 0xab14f7374113dbb14d76deff63fd9c79 }, // -225
    Multiplier { upper: 0x8a5296ffe33cc92f82bd6b70d99aaa6f, lower: 0xbc10c5c5cda97c8dd7924bff833149fb }, // -224
    Multiplier { upper: 0xdd50f1996b947518d12f124e28f77719, lower: 0x2ce7a2d615dbfa7c8c1d46659eb5432b }, // -223
    Multiplier { upper: 0xb10d8e1456105dad7425a83e872c5f47, lower: 0x571fb578117cc863a34a9eb7b22a9c22 }, // -222
    Multiplier { upper: 0x8da471a9de737e245ceaecfed289e5d2, lower: 0xac195df9a79706b61c3bb22c8e887ce8 }, // -221
    Multiplier { upper: 0xe2a0b5dc971f303a2e44ae64840fd61d, lower: 0xe028965c3f580abcf9f91d141740c7da }, // -220
    Multiplier { upper: 0xb54d5e4a127f59c82503beb6d00cab4b, lower: 0x19ba11e365e008972e60e410129a397b }, // -219
    Multiplier { upper: 0x910ab1d4db9914a01d9c9892400a22a2, lower: 0x7afb4182b7e66d45beb3e9a675482dfc }, // -218
    Multiplier { upper: 0xe8111c87c5c1ba99c8fa8db6ccdd0437, lower: 0x2b2b9c045970aed5fdeca90a55404993 }, // -217
    Multiplier { upper: 0xb9a74a0637ce2ee16d953e2bd7173692, lower: 0x88efb0037ac08bde64bd540844336e0f }, // -216
    Multiplier { upper: 0x9485d4d1c63e8be78addcb5645ac2ba8, lower: 0x6d8c8ccf9566d64b83caa9a0368f8b40 }, // -215
    Multiplier { upper: 0xeda2ee1c7064130c1162def06f79df73, lower: 0xe27a7ae5bbd7bd459faaa900574c11ff }, // -214
    Multiplier { upper: 0xbe1bf1b059e9a8d6744f18c0592e4c5c, lower: 0xb52ec8b7c9796437b2eeed99df700e66 }, // -213
    Multiplier { upper: 0x98165af37b2153dec3727a337a8b704a, lower: 0x2a8bd3c63ac7835fc258be14b2c00b85 }, // -212
    Multiplier { upper: 0xf356f7ebf83552fe0583f6b8c4124d43, lower: 0x77461fa3913f389936f46354513345a1 }, // -211
    Multiplier { upper: 0xc2abf989935ddbfe6acff893d00ea435, lower: 0xf904e61c743293adc5904f76a75c37b4 }, // -210
    Multiplier { upper: 0x9bbcc7a142b17ccb88a66076400bb691, lower: 0x9403eb49f68edc8b047372c552b02c90 }, // -209
    Multiplier { upper: 0xf92e0c3537826145a7709a56ccdf8a82, lower: 0x866caba98a7e2dab3a52513bb780474d }, // -208
    Multiplier { upper: 0xc75809c42c684dd152c07b78a3e60868, lower: 0x6b8a22ee0864f155c841da962c669f71 }, // -207
    Multiplier { upper: 0x9f79a169bd203e410f0062c6e984d386, lower: 0xbc6e825806b72777d367e211bd1ee5f4 }, // -206
    Multiplier { upper: 0xff290242c83396ce7e67047175a15271, lower: 0x2d7d9d59a4583f261f0c9ce92e97d652 }, // -205
    Multiplier { upper: 0xcc20ce9bd35c78a531ec038df7b441f4, lower: 0x24647de1504698eb4c0a1720f21311dc }, // -204
    Multiplier { upper: 0xa34d721642b0608427f002d7f95d0190, lower: 0x1d1d31810d054722a33b45b3f4dc0e49 }, // -203
    Multiplier { upper: 0x82a45b450226b39cecc0024661173473, lower: 0x4a7dc1340a6a9f4ee8fc37c32a49a508 }, // -202
    Multiplier { upper: 0xd106f86e69d785c7e13336d701beba52, lower: 0x10c9352010aa987e41938c6b76dc3b3f }, // -201
    Multiplier { upper: 0xa738c6bebb12d16cb428f8ac016561db, lower: 0x40a0f74cda221398347609ef9249c8ff }, // -200
    Multiplier { upper: 0x85c7056562757456f6872d5667844e49, lower: 0x0080c5d714e80facf6c4d4bfa83b0733 }, // -199
    Multiplier { upper: 0xd60b3bd56a5586f18a71e223d8d3b074, lower: 0xcd9ad624ee401914be07bacc405e71eb }, // -198
    Multiplier { upper: 0xab3c2fddeeaad25ad527e81cad7626c3, lower: 0xd7af11b72500141098062f09cd185b22 }, // -197
    Multiplier { upper: 0x88fcf317f22241e2441fece3bdf81f03, lower: 0x12f274928400100d466b58d4a4137c1b }, // -196
    Multiplier { upper: 0xdb2e51bfe9d0696a06997b05fcc0319e, lower: 0x84b720ea6ccce67ba3def4876cebf9c5 }, // -195
    Multiplier { upper: 0xaf58416654a6babb387ac8d1970027b2, lower: 0x03c5b3eebd70b862e97f2a05f0bcc7d1 }, // -194
    Multiplier { upper: 0x8c469ab843b8956293956d7478ccec8e, lower: 0x696af658978d604f21328804c0970641 }, // -193
    Multiplier { upper: 0xe070f78d3927556a85bbe253f47b1417, lower: 0x0f118a2758e233b1ceb740079a8b3d34 }, // -192
    Multiplier { upper: 0xb38d92d760ec445537c981dcc395a9ac, lower: 0x0c0e081f7a4e8fc1722c3339486f642a }, // -191
    Multiplier { upper: 0x8fa475791a569d10f96e017d694487bc, lower: 0xd671a0192ea53fcdf4f028faa0591cef }, // -190
    Multiplier { upper: 0xe5d3ef282a242e818f1668c8a86da5fa, lower: 0xf0b5ccf5176ecc7cbb19db2a9a282e4a }, // -189
    Multiplier { upper: 0xb7dcbf5354e9bece0c11ed6d538aeb2f, lower: 0x26f7d72a79257063c8e17c2214ecf1d5 }, // -188
    Multiplier { upper: 0x9316ff75dd87cbd809a7f12442d588f2, lower: 0x8593128860eac04fd3e79681aa5727de }, // -187
    Multiplier { upper: 0xeb57ff22fc0c7959a90cb506d155a7ea, lower: 0x6f51b7409b1133b2eca5bd9c43bea62f }, // -186
    Multiplier { upper: 0xbc4665b596706114873d5d9f0dde1fee, lower: 0xbf74929a15a75c8f23b7cae3696551c0 }, // -185
    Multiplier { upper: 0x969eb7c47859e7439f644ae5a4b1b325, lower: 0x65f6dbae77b916d8e95fd582bab77499 }, // -184
    Multiplier { upper: 0xf0fdf2d3f3c30b9f656d44a2a11c51d5, lower: 0x6ff15f7d8c5b57c17566226ac458ba8f }, // -183
    Multiplier { upper: 0xc0cb28a98fcf3c7f84576a1bb416a7dd, lower: 0xf3277f97a37c46345deb4ebbd046fba5 }, // -182
    Multiplier { upper: 0x9a3c2087a63f639936ac54e2f678864b, lower: 0x28ec6612e9303829e4bc3efca69f2fb8 }, // -181
    Multiplier { upper: 0xf6c69a72a3989f5b8aad549e57273d45, lower: 0x0e4709b7db8059dca12d31943dcb7f8c }, // -180
    Multiplier { upper: 0xc56baec21c7a1916088aaa1845b8fdd0, lower: 0xd838d493160047e3b42427a9cb0932d6 }, // -179
    Multiplier { upper: 0x9defbf01b061adab3a0888136afa64a7, lower: 0x1360aa0f44cd064fc3501fbb08d428ac }, // -178
    Multiplier { upper: 0xfcb2cb35e702af785cda735244c3d43e, lower: 0x8567767ed47b3d4c6bb365f80e204112 }, // -177
    Multiplier { upper: 0xca28a291859bbf937d7b8f7503cfdcfe, lower: 0xd11f91ff1062977056291e600b4d00dc }, // -176
    Multiplier { upper: 0xa1ba1ba79e1632dc6462d92a69731732, lower: 0x40e60e65a6b545f37820e519a2a400b0 }, // -175
    Multiplier { upper: 0x8161afb94b44f57d1d1be0eebac278f5, lower: 0x00b80b84855dd18f934d8414821ccd59 }, // -174
    Multiplier { upper: 0xcf02b2c21207ef2e94f967e45e03f4bb, lower: 0x3459ac073bc94f4c1ee26ced9cfae228 }, // -173
    Multiplier { upper: 0xa59bc234db398c2543fab9837e699095, lower: 0xc37af005c96dd909b24ebd8ae3fbe820 }, // -172
    Multiplier { upper: 0x847c9b5d7c2e09b769956135febada11, lower: 0x692f266b078b1407c1d897a24ffcb9b4 }, // -171
    Multiplier { upper: 0xd3fa922f2d1675f242889b8997915ce8, lower: 0xa84b70ab3f44ecd936275903b32df5ec }, // -170
    Multiplier { upper: 0xa99541bf57452b28353a1607ac744a53, lower: 0xb9d5f3bc329d8a475e85e0cfc28b2b23 }, // -169
    Multiplier { upper: 0x87aa9aff7904228690fb44d2f05d0842, lower: 0xfb118fc9c217a1d2b204b3d9686f55b6 }, // -168
    Multiplier { upper: 0xd910f7ff28069da41b2ba1518094da04, lower: 0xc4e8e60f9cf29c8450078628a7188923 }, // -167
    Multiplier { upper: 0xada72ccc20054ae9af561aa79a10ae6a, lower: 0x3720b80c7d8ee39d0cd2d1ba1f46d41c }, // -166
    Multiplier { upper: 0x8aec23d680043bee25de7bb9480d5854, lower: 0xf8e6f9a397a582e40a424161b29f1016 }, // -165
    Multiplier { upper: 0xde469fbd99a05fe36fca5f8ed9aef3bb, lower: 0x27d7f5d28c3c04a0106a0235ea9819bd }, // -164
    Multiplier { upper: 0xb1d219647ae6b31c596eb2d8ae258fc8, lower: 0xecacc4a8703003b34054ce918879ae31 }, // -163
    Multiplier { upper: 0x8e41ade9fbebc27d14588f13be847307, lower: 0x23bd6a2059c002f5cd10a54139faf1c1 }, // -162
    Multiplier { upper: 0xe39c49765fdf9d94ed5a7e85fda0b80b, lower: 0x6c624366f60004bc7b4dd535299182ce }, // -161
    Multiplier { upper: 0xb616a12b7fe617aa577b986b314d6009, lower: 0x2381cf8591999d6395d7ddc421413572 }, // -160
    Multiplier { upper: 0x91abb422ccb812eeac62e055c10ab33a, lower: 0x82ce3f9e0e147de944acb169b4342ac1 }, // -159
    Multiplier { upper: 0xe912b9d1478ceb177a37cd5601aab85d, lower: 0x9e16cc3016872fdba1144f0f86b9de02 }, // -158
    Multiplier { upper: 0xba756174393d88df94f971119aeef9e4, lower: 0x7e78a359ab9f597c80dd0c0c6bc7e4cf }, // -157
    Multiplier { upper: 0x952ab45cfa97a0b2dd945a747bf26183, lower: 0x986082ae22e5e13067173cd6bc9fea3f }, // -156
    Multiplier { upper: 0xeeaaba2e5dbf678495ba2a53f983cf38, lower: 0xf3cd9de36b09684d71bec7bdfa9976cb }, // -155
    Multiplier { upper: 0xbeeefb584aff8603aafb550ffacfd8fa, lower: 0x5ca47e4f88d4537127cbd2fe62145f09 }, // -154
    Multiplier { upper: 0x98bf2f79d5993802ef2f773ffbd97a61, lower: 0xe3b6cb72d3dd0f8db96fdbfeb4dd18d4 }, // -153
    Multiplier { upper: 0xf46518c2ef5b8cd17eb258665fc25d69, lower: 0x6c57abeaec94e5af8f195ffdee2e8e20 }, // -152
    Multiplier { upper: 0xc38413cf25e2d70dfef5138519684aba, lower: 0xbd12efef23aa51593f477ffe58253e80 }, // -151
    Multiplier { upper: 0x9c69a97284b578d7ff2a760414536efb, lower: 0xca758cbf4fbb744765d2cccb79b76533 }, // -150
    Multiplier { upper: 0xfa42a8b73abbf48ccb772339ba1f17f9, lower: 0x43ef47987f9253a56fb7ae125c58a1eb }, // -149
    Multiplier { upper: 0xc83553c5c8965d3d6f92829494e5acc7, lower: 0x698c3946cc750fb78c92f1a849e08189 }, // -148
    Multiplier { upper: 0xa02aa96b06deb0fdf2db9baa10b7bd6c, lower: 0x54702dd23d2a72f93d425aed07e6ce07 }, // -147
    Multiplier { upper: 0x802221226be55a64c2494954da2c9789, lower: 0xdd268b0e975528c76435158a6cb8a4d3 }, // -146
    Multiplier { upper: 0xcd036837130890a136dba887c37a8c0f, lower: 0xc83dab4a8bbb747239ee88dd7ac107b7 }, // -145
    Multiplier { upper: 0xa402b9c5a8d3a6e75f16206c9c6209a6, lower: 0x39caef6ed62f905b618ba0b12f00d2f9 }, // -144
    Multiplier { upper: 0x8335616aed761f1f7f44e6bd49e807b8, lower: 0x2e3bf2bf11bfa6af813c808dbf33dbfb }, // -143
    Multiplier { upper: 0xd1ef0244af2364ff3207d795430cd926, lower: 0xb05feacb4f990ab26860cdaf9852f991 }, // -142
    Multiplier { upper: 0xa7f26836f282b7328e6cac7768d7141e, lower: 0xf37fef090c7a6ef5204d715946a8c7a7 }, // -141
    Multiplier { upper: 0x865b86925b9bc5c20b8a2392ba45a9b2, lower: 0x5c6658d409fb8bf74d0ac1143887061f }, // -140
    Multiplier { upper: 0xd6f8d7509292d60345a9d2845d3c42b6, lower: 0xfa3d5aecdcc5acbee1aace86c0d809cb }, // -139
    Multiplier { upper: 0xabfa45da0edbde690487db9d17636892, lower: 0x61caaf23e3d156ff1aef0b9f00acd4a3 }, // -138
    Multiplier { upper: 0x899504ae72497eba6a06494a791c53a8, lower: 0x4e3bbf4fe9744598e258d618cd571082 }, // -137
    Multiplier { upper: 0xdc21a1171d42645d76707543f4fa1f73, lower: 0xb05f987fdbed3c27d08e235ae224e737 }, // -136
    Multiplier { upper: 0xb01ae745b101e9e45ec05dcff72e7f8f, lower: 0xc04c79ffe324301fda0b4f7be81d85c5 }, // -135
    Multiplier { upper: 0x8ce2529e2734bb1d1899e4a65f58660c, lower: 0x99d6c7ffe8e9c0197b3c3f96534ad16b }, // -134
    Multiplier { upper: 0xe16a1dc9d8545e94f4296dd6fef3d67a, lower: 0x8fbe0ccca7dc668f2b9398f085448244 }, // -133
    Multiplier { upper: 0xb454e4a179dd187729babe4598c311fb, lower: 0xa631a3d6ecb0520c22dc7a5a0436ce9d }, // -132
    Multiplier { upper: 0x9043ea1ac7e4139287c89837ad68db2f, lower: 0xb827b6458a26a809b57d2eae69c57217 }, // -131
    Multiplier { upper: 0xe6d3102ad96cec1da60dc059157491e5, lower: 0xf372bd3c103dd9a92261e44a42d58358 }, // -130
    Multiplier { upper: 0xb8a8d9bbe123f017b80b0047445d4184, lower: 0xc2c230fcd9cb14874eb4b6a1cf1135e0 }, // -129
    Multiplier { upper: 0x93ba47c980e98cdfc66f336c36b10137, lower: 0x0234f3fd7b08dd390bc3c54e3f40f7e7 }, // -128
    Multiplier { upper: 0xec5d3fa8ce427affa3e51f138ab4cebe, lower: 0x69ee532f2b4161f4df9fa216cb9b263e }, // -127
    Multiplier { upper: 0xbd176620a501fbffb650e5a93bc3d898, lower: 0x54bea8f289011b2a4c7fb4df0948eb65 }, // -126
    Multiplier { upper: 0x9745eb4d50ce6332f840b7ba963646e0, lower: 0x43cbba5ba0cdaf5509ffc3e5a10722b7 }, // -125
    Multiplier { upper: 0xf209787bb47d6b84c0678c5dbd23a49a, lower: 0x0612c3c5ce15e554dccc6ca29b3e9df1 }, // -124
    Multiplier { upper: 0xc1a12d2fc39789370052d6b1641c83ae, lower: 0x6b423637d8118443e3d6bd4ee2987e5b }, // -123
    Multiplier { upper: 0x9ae757596946075f3375788de9b06958, lower: 0x55ce91c6467469cfe97897724ee06516 }, // -122
    Multiplier { upper: 0xf7d88bc24209a5651f225a7ca91a4226, lower: 0xefb0e93d3d870fb30f2758b6e49a3b55 }, // -121
    Multiplier { upper: 0xc646d63501a1511db281e1fd541501b8, lower: 0xbfc0ba97646c0c8f3f52ad5f1d482f78 }, // -120
    Multiplier { upper: 0x9e9f11c4014dda7e2867e7fddcdd9afa, lower: 0x33009545e9f00a0c32a88ab27dd3592d }, // -119
    Multiplier { upper: 0xfdcb4fa002162a6373d9732fc7c8f7f6, lower: 0xb800eed64319a9ad1dda7783fc855b7a }, // -118
    Multiplier { upper: 0xcb090c8001ab551c5cadf5bfd3072cc5, lower: 0x6000bf11cf47baf0e4aec603306aaf95 }, // -117
    Multiplier { upper: 0xa26da3999aef7749e3be5e330f38f09d, lower: 0xe666ff41729fc8c0b6f238028d222611 }, // -116
    Multiplier { upper: 0x81f14fae158c5f6e4fcb7e8f3f60c07e, lower: 0x51ebff678ee63a33c58e93353db4eb41 }, // -115
    Multiplier { upper: 0xcfe87f7cef46ff16e612641865679a63, lower: 0xb64665727e3d29ec6f4a8521fc54ab9b }, // -114
    Multiplier { upper: 0xa6539930bf6bff4584db8346b786151c, lower: 0x91d1eac1fe9754bd25d5374e6376efaf }, // -113
    Multiplier { upper: 0x850fadc09923329e03e2cf6bc604ddb0, lower: 0x74a7ef019879109751775f71e92bf2f3 }, // -112
    Multiplier { upper: 0xd4e5e2cdc1d1ea966c9e18ac7007c91a, lower: 0x543fe4cf5a5b4dbee8beff1ca8465184 }, // -111
    Multiplier { upper: 0xaa51823e34a7eedebd4b46f0599fd415, lower: 0x10331d72aeaf716586ff327d536b746a }, // -110
    Multiplier { upper: 0x884134fe908658b23109058d147fdcdd, lower: 0xa68f4ac2255927846bff5b9775ef9055 }, // -109
    Multiplier { upper: 0xda01ee641a708de9e80e6f4820cc9495, lower: 0xd74baad03bc1d8d3dffef8f2564c1a21 }, // -108
    Multiplier { upper: 0xae67f1e9aec07187ecd8590680a3aa11, lower: 0x7909557363017a431998c7284509ae81 }, // -107
    Multiplier { upper: 0x8b865b215899f46cbd79e0d20082ee74, lower: 0x60d4445c4f3461cf47ad6c20373af201 }, // -106
    Multiplier { upper: 0xdf3d5e9bc0f653e12f2967b66737e3ed, lower: 0x67ba06fa1853cfb20c48ad00585e5001 }, // -105
    Multiplier { upper: 0xb2977ee300c50fe758edec91ec2cb657, lower: 0x862e6bfb46a972f4d6a08a66ad184001 }, // -104
    Multiplier { upper: 0x8edf98b59a373fec4724bd4189bd5eac, lower: 0x6b5856629eedf590abb3a1ebbdad0001 }, // -103
    Multiplier { upper: 0xe498f455c38b997a0b6dfb9c0f956447, lower: 0x1226f09dcb1655b445ec3645fc480001 }, // -102
    Multiplier { upper: 0xb6e0c377cfa2e12e6f8b2fb00c77836c, lower: 0x0e858d4b08deaaf69e5691d196a00001 }, // -101
    Multiplier { upper: 0x924d692ca61be758593c2626705f9c56, lower: 0x72047108d3e555921845417478800001 }, // -100
    Multiplier { upper: 0xea1575143cf97226f52d09d71a3293bd, lower: 0x833a4e74863bbc1cf3a20253f4000001 }, // -99
    Multiplier { upper: 0xbb445da9ca61281f2a8a6e45ae8edc97, lower: 0x9c2ea52a04fc967d8fb4cea990000001 }, // -98
    Multiplier { upper: 0x95d04aee3b80ece5bba1f1d158724a12, lower: 0xe35884219d96decad95d722140000001 }, // -97
    Multiplier { upper: 0xefb3ab16c59b14a2c5cfe94ef3ea101e, lower: 0x388da035c8f16477c22f1d0200000001 }, // -96
    Multiplier { upper: 0xbfc2ef456ae276e89e3fedd8c321a67e, lower: 0x93a4802b0727839301bf4a6800000001 }, // -95
    Multiplier { upper: 0x9968bf6abbe85f207e998b13cf4e1ecb, lower: 0xa9506688d28602dc0165d52000000001 }, // -94
    Multiplier { upper: 0xf5746577930d6500ca8f44ec7ee36479, lower: 0x0ee70a7484099e2ccf09550000000001 }, // -93
    Multiplier { upper: 0xc45d1df942711d9a3ba5d0bd324f8394, lower: 0x0bec085d366e1823d8d4440000000001 }, // -92
    Multiplier { upper: 0x9d174b2dcec0e47b62eb0d64283f9c76, lower: 0x6ff006b0f858134fe0a9d00000000001 }, // -91
    Multiplier { upper: 0xfb5878494ace3a5f04ab48a04065c723, lower: 0xe64cd7818d59b87fcddc800000000001 }, // -90
    Multiplier { upper: 0xc913936dd571c84c03bc3a19cd1e38e9, lower: 0x850a46013de160663e4a000000000001 }, // -89
    Multiplier { upper: 0xa0dc75f1778e39d6696361ae3db1c721, lower: 0x373b6b34318119eb6508000000000001 }, // -88
    Multiplier { upper: 0x80b05e5ac60b6178544f8158315b05b4, lower: 0x2c2f88f68e00e1891da0000000000001 }, // -87
    Multiplier { upper: 0xcde6fd5e09abcf26ed4c0226b55e6f86, lower: 0xad18db241667cf41c900000000000001 }, // -86
    Multiplier { upper: 0xa4b8cab1a1563f52577001b891185938, lower: 0x8a7a48e9ab863f67d400000000000001 }, // -85
    Multiplier { upper: 0x83c7088e1aab65db792667c6da79e0fa, lower: 0x0861d3ee22d1cc531000000000000001 }, // -84
    Multiplier { upper: 0xd2d80db02aabd62bf50a3fa490c30190, lower: 0x0d6953169e1c7a1e8000000000000001 }, // -83
    Multiplier { upper: 0xa8acd7c0222311bcc40832ea0d68ce0c, lower: 0xd78775abb1b061b20000000000000001 }, // -82
    Multiplier { upper: 0x86f0ac99b4e8dafd69a028bb3ded71a3, lower: 0xdf9f915627c04e280000000000000001 }, // -81
    Multiplier { upper: 0xd7e77a8f87daf7fbdc33745ec97be906, lower: 0x3298e889d933b0400000000000000001 }, // -80
    Multiplier { upper: 0xacb92ed9397bf99649c2c37f07965404, lower: 0xf547206e475c8d000000000000000001 }, // -79
    Multiplier { upper: 0x8a2dbf142dfcc7ab6e3569326c784337, lower: 0x2a9f4d2505e3a4000000000000000001 }, // -78
    Multiplier { upper: 0xdd15fe86affad91249ef0eb713f39ebe, lower: 0xaa987b6e6fd2a0000000000000000001 }, // -77
    Multiplier { upper: 0xb0de65388cc8ada83b25a55f43294bcb, lower: 0xbbad2f8b8ca880000000000000000001 }, // -76
    Multiplier { upper: 0x8d7eb76070a08aecfc1e1de5cf543ca2, lower: 0xfc8a8c6fa3ba00000000000000000001 }, // -75
    Multiplier { upper: 0xe264589a4dcdab14c696963c7eed2dd1, lower: 0x9410e0b29f9000000000000000000001 }, // -74
    Multiplier { upper: 0xb51d13aea4a488dd6babab6398bdbe41, lower: 0x4340b3c2194000000000000000000001 }, // -73
    Multiplier { upper: 0x90e40fbeea1d3a4abc8955e946fe31cd, lower: 0xcf66f634e10000000000000000000001 }, // -72
    Multiplier { upper: 0xe7d34c64a9c85d4460dbbca87196b616, lower: 0x18a4bd21680000000000000000000001 }, // -71
    Multiplier { upper: 0xb975d6b6ee39e436b3e2fd538e122b44, lower: 0xe083ca81200000000000000000000001 }, // -70
    Multiplier { upper: 0x945e455f24fb1cf88fe8caa93e74ef6a, lower: 0x4d363b9a800000000000000000000001 }, // -69
    Multiplier { upper: 0xed63a231d4c4fb274ca7aaa863ee4bdd, lower: 0x4856c5c4000000000000000000000001 }, // -68
    Multiplier { upper: 0xbde94e8e43d0c8ec3d52eeed1cbea317, lower: 0x6d1237d0000000000000000000000001 }, // -67
    Multiplier { upper: 0x97edd871cfda3a5697758bf0e3cbb5ac, lower: 0x5741c640000000000000000000000001 }, // -66
    Multiplier { upper: 0xf316271c7fc3908a8bef464e3945ef7a, lower: 0x25360a00000000000000000000000001 }, // -65
    Multiplier { upper: 0xc2781f49ffcfa6d53cbf6b71c76b25fb, lower: 0x50f80800000000000000000000000001 }, // -64
    Multiplier { upper: 0x9b934c3b330c857763cc55f49f88eb2f, lower: 0x73f9a000000000000000000000000001 }, // -63
    Multiplier { upper: 0xf8ebad2b84e0d58bd2e0898765a7deb2, lower: 0x53290000000000000000000000000001 }, // -62
    Multiplier { upper: 0xc722f0ef9d80aad6424d3ad2b7b97ef5, lower: 0x0f540000000000000000000000000001 }, // -61
    Multiplier { upper: 0x9f4f2726179a224501d762422c946590, lower: 0xd9100000000000000000000000000001 }, // -60
    Multiplier { upper: 0xfee50b7025c36a0802f236d04753d5b4, lower: 0x8e800000000000000000000000000001 }, // -59
    Multiplier { upper: 0xcbea6f8ceb02bb399bf4f8a69f764490, lower: 0x72000000000000000000000000000001 }, // -58
    Multiplier { upper: 0xa321f2d7226895c7aff72d52192b6a0d, lower: 0x28000000000000000000000000000001 }, // -57
    Multiplier { upper: 0x82818f1281ed449fbff8f10e7a8921a4, lower: 0x20000000000000000000000000000001 }, // -56
    Multiplier { upper: 0xd0cf4b50cfe20765fff4b4e3f741cf6d, lower: 0x00000000000000000000000000000001 }, // -55
    Multiplier { upper: 0xa70c3c40a64e6c51999090b65f67d924, lower: 0x00000000000000000000000000000001 }, // -54
    Multiplier { upper: 0x85a36366eb71f04147a6da2b7f864750, lower: 0x00000000000000000000000000000001 }, // -53
    Multiplier { upper: 0xd5d238a4abe9806872a4904598d6d880, lower: 0x00000000000000000000000000000001 }, // -52
    Multiplier { upper: 0xab0e93b6efee00538eea0d047a457a00, lower: 0x00000000000000000000000000000001 }, // -51
    Multiplier { upper: 0x88d8762bf324cd0fa5880a69fb6ac800, lower: 0x00000000000000000000000000000001 }, // -50
    Multiplier { upper: 0xdaf3f04651d47b4c3c0cdd765f114000, lower: 0x00000000000000000000000000000001 }, // -49
    Multiplier { upper: 0xaf298d050e4395d69670b12b7f410000, lower: 0x00000000000000000000000000000001 }, // -48
    Multiplier { upper: 0x8c213d9da502de454526f422cc340000, lower: 0x00000000000000000000000000000001 }, // -47
    Multiplier { upper: 0xe0352f62a19e306ed50b2037ad200000, lower: 0x00000000000000000000000000000001 }, // -46
    Multiplier { upper: 0xb35dbf821ae4f38bdda2802c8a800000, lower: 0x00000000000000000000000000000001 }, // -45
    Multiplier { upper: 0x8f7e32ce7bea5c6fe4820023a2000000, lower: 0x00000000000000000000000000000001 }, // -44
    Multiplier { upper: 0xe596b7b0c643c7196d9ccd05d0000000, lower: 0x00000000000000000000000000000001 }, // -43
    Multiplier { upper: 0xb7abc627050305adf14a3d9e40000000, lower: 0x00000000000000000000000000000001 }, // -42
    Multiplier { upper: 0x92efd1b8d0cf37be5aa1cae500000000, lower: 0x00000000000000000000000000000001 }, // -41
    Multiplier { upper: 0xeb194f8e1ae525fd5dcfab0800000000, lower: 0x00000000000000000000000000000001 }, // -40
    Multiplier { upper: 0xbc143fa4e250eb3117d955a000000000, lower: 0x00000000000000000000000000000001 }, // -39
    Multiplier { upper: 0x96769950b50d88f41314448000000000, lower: 0x00000000000000000000000000000001 }, // -38
    Multiplier { upper: 0xf0bdc21abb48db201e86d40000000000, lower: 0x00000000000000000000000000000001 }, // -37
    Multiplier { upper: 0xc097ce7bc90715b34b9f100000000000, lower: 0x00000000000000000000000000000001 }, // -36
    Multiplier { upper: 0x9a130b963a6c115c3c7f400000000000, lower: 0x00000000000000000000000000000001 }, // -35
    Multiplier { upper: 0xf684df56c3e01bc6c732000000000000, lower: 0x00000000000000000000000000000001 }, // -34
    Multiplier { upper: 0xc5371912364ce3056c28000000000000, lower: 0x00000000000000000000000000000001 }, // -33
    Multiplier { upper: 0x9dc5ada82b70b59df020000000000000, lower: 0x00000000000000000000000000000001 }, // -32
    Multiplier { upper: 0xfc6f7c40458122964d00000000000000, lower: 0x00000000000000000000000000000001 }, // -31
    Multiplier { upper: 0xc9f2c9cd04674edea400000000000000, lower: 0x00000000000000000000000000000001 }, // -30
    Multiplier { upper: 0xa18f07d736b90be55000000000000000, lower: 0x00000000000000000000000000000001 }, // -29
    Multiplier { upper: 0x813f3978f89409844000000000000000, lower: 0x00000000000000000000000000000001 }, // -28
    Multiplier { upper: 0xcecb8f27f4200f3a0000000000000000, lower: 0x00000000000000000000000000000001 }, // -27
    Multiplier { upper: 0xa56fa5b99019a5c80000000000000000, lower: 0x00000000000000000000000000000001 }, // -26
    Multiplier { upper: 0x84595161401484a00000000000000000, lower: 0x00000000000000000000000000000001 }, // -25
    Multiplier { upper: 0xd3c21bcecceda1000000000000000000, lower: 0x00000000000000000000000000000001 }, // -24
    Multiplier { upper: 0xa968163f0a57b4000000000000000000, lower: 0x00000000000000000000000000000001 }, // -23
    Multiplier { upper: 0x878678326eac90000000000000000000, lower: 0x00000000000000000000000000000001 }, // -22
    Multiplier { upper: 0xd8d726b7177a80000000000000000000, lower: 0x00000000000000000000000000000001 }, // -21
    Multiplier { upper: 0xad78ebc5ac6200000000000000000000, lower: 0x00000000000000000000000000000001 }, // -20
    Multiplier { upper: 0x8ac7230489e800000000000000000000, lower: 0x00000000000000000000000000000001 }, // -19
    Multiplier { upper: 0xde0b6b3a764000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -18
    Multiplier { upper: 0xb1a2bc2ec50000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -17
    Multiplier { upper: 0x8e1bc9bf040000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -16
    Multiplier { upper: 0xe35fa931a00000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -15
    Multiplier { upper: 0xb5e620f4800000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -14
    Multiplier { upper: 0x9184e72a000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -13
    Multiplier { upper: 0xe8d4a510000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -12
    Multiplier { upper: 0xba43b740000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -11
    Multiplier { upper: 0x9502f900000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -10
    Multiplier { upper: 0xee6b2800000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -9
    Multiplier { upper: 0xbebc2000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -8
    Multiplier { upper: 0x98968000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -7
    Multiplier { upper: 0xf4240000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -6
    Multiplier { upper: 0xc3500000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -5
    Multiplier { upper: 0x9c400000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -4
    Multiplier { upper: 0xfa000000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -3
    Multiplier { upper: 0xc8000000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -2
    Multiplier { upper: 0xa0000000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // -1
    Multiplier { upper: 0x80000000000000000000000000000000, lower: 0x00000000000000000000000000000001 }, // 0
    Multiplier { upper: 0xcccccccccccccccccccccccccccccccc, lower: 0xcccccccccccccccccccccccccccccccd }, // 1
    Multiplier { upper: 0xa3d70a3d70a3d70a3d70a3d70a3d70a3, lower: 0xd70a3d70a3d70a3d70a3d70a3d70a3d8 }, // 2
    Multiplier { upper: 0x83126e978d4fdf3b645a1cac083126e9, lower: 0x78d4fdf3b645a1cac083126e978d4fe0 }, // 3
    Multiplier { upper: 0xd1b71758e219652bd3c36113404ea4a8, lower: 0xc154c985f06f694467381d7dbf487fcc }, // 4
    Multiplier { upper: 0xa7c5ac471b4784230fcf80dc33721d53, lower: 0xcddd6e04c059210385c67dfe32a0663d }, // 5
    Multiplier { upper: 0x8637bd05af6c69b5a63f9a49c2c1b10f, lower: 0xd7e45803cd141a6937d1fe64f54d1e97 }, // 6
    Multiplier { upper: 0xd6bf94d5e57a42bc3d32907604691b4c, lower: 0x8ca08cd2e1b9c3db8c8330a1887b6425 }, // 7
    Multiplier { upper: 0xabcc77118461cefcfdc20d2b36ba7c3d, lower: 0x3d4d3d758161697c7068f3b46d2f8351 }, // 8
    Multiplier { upper: 0x89705f4136b4a59731680a88f8953030, lower: 0xfdd7645e011abac9f387295d242602a7 }, // 9
    Multiplier { upper: 0xdbe6fecebdedd5beb573440e5a884d1b, lower: 0x2fbf06fcce912adcb8d8422ea03cd10b }, // 10
    Multiplier { upper: 0xafebff0bcb24aafef78f69a51539d748, lower: 0xf2ff38ca3eda88b093e034f219ca40d6 }, // 11
    Multiplier { upper: 0x8cbccc096f5088cbf93f87b7442e45d3, lower: 0xf598fa3b657ba08d4319c3f4e16e9a45 }, // 12
    Multiplier { upper: 0xe12e13424bb40e132865a5f206b06fb9, lower: 0x88f4c3923bf900e204f606549be42a07 }, // 13
    Multiplier { upper: 0xb424dc35095cd80f538484c19ef38c94, lower: 0x6d909c74fcc733e803f805107cb68806 }, // 14
    Multiplier { upper: 0x901d7cf73ab0acd90f9d37014bf60a10, lower: 0x57a6e390ca38f6533660040d3092066b }, // 15
    Multiplier { upper: 0xe69594bec44de15b4c2ebe687989a9b3, lower: 0xbf716c1add27f08523ccd3484db670ab }, // 16
    Multiplier { upper: 0xb877aa3236a4b44909befeb9fad487c2, lower: 0xff8df0157db98d374fd70f6d0af85a23 }, // 17
    Multiplier { upper: 0x9392ee8e921d5d073aff322e62439fcf, lower: 0x32d7f344649470f90cac0c573bf9e1b6 }, // 18
    Multiplier { upper: 0xec1e4a7db69561a52b31e9e3d06c32e5, lower: 0x1e2652070753e7f4e11346f1f98fcf89 }, // 19
    Multiplier { upper: 0xbce5086492111aea88f4bb1ca6bcf584, lower: 0x181ea8059f76532a4da9058e613fd93a }, // 20
    Multiplier { upper: 0x971da05074da7beed3f6fc16ebca5e03, lower: 0x467eecd14c5ea8eea48737a51a997a95 }, // 21
    Multiplier { upper: 0xf1c90080baf72cb15324c68b12dd6338, lower: 0x70cb148213caa7e43a71f2a1c428c421 }, // 22
    Multiplier { upper: 0xc16d9a0095928a2775b7053c0f178293, lower: 0x8d6f439b430886502ec18ee7d0209ce8 }, // 23
    Multiplier { upper: 0x9abe14cd44753b52c4926a9672793542, lower: 0xd78c3615cf3a050cf23472530ce6e3ed }, // 24
    Multiplier { upper: 0xf79687aed3eec5513a83ddbd83f52204, lower: 0x8c1389bc7ec33b47e9ed83b814a49fe1 }, // 25
    Multiplier { upper: 0xc612062576589dda95364afe032a819d, lower: 0x3cdc6e306568fc3987f1362cdd507fe7 }, // 26
    Multiplier { upper: 0x9e74d1b791e07e48775ea264cf55347d, lower: 0xca49f1c05120c9c79ff42b5717739986 }, // 27
    Multiplier { upper: 0xfd87b5f28300ca0d8bca9d6e188853fc, lower: 0x76dcb60081ce0fa5ccb9def1bf1f5c09 }, // 28
    Multiplier { upper: 0xcad2f7f5359a3b3e096ee45813a04330, lower: 0x5f16f80067d80c84a3c7e58e327f7cd4 }, // 29
    Multiplier { upper: 0xa2425ff75e14fc31a1258379a94d028d, lower: 0x18df2ccd1fe00a03b6398471c1ff9710 }, // 30
    Multiplier { upper: 0x81ceb32c4b43fcf480eacf948770ced7, lower: 0x4718f0a419800802f82e038e34cc78da }, // 31
    Multiplier { upper: 0xcfb11ead453994ba67de18eda5814af2, lower: 0x0b5b1aa028ccd99e59e338e387ad8e29 }, // 32
    Multiplier { upper: 0xa6274bbdd0fadd61ecb1ad8aeacdd58e, lower: 0x6f7c154ced70ae1847e8fa4f9fbe0b54 }, // 33
    Multiplier { upper: 0x84ec3c97da624ab4bd5af13bef0b113e, lower: 0xbf967770bdf3be79d320c83fb2fe6f76 }, // 34
    Multiplier { upper: 0xd4ad2dbfc3d07787955e4ec64b44e864, lower: 0x65bd8be79652ca5c85014065eb30b257 }, // 35
    Multiplier { upper: 0xaa242499697392d2dde50bd1d5d0b9e9, lower: 0xeafe098611dbd516d0cdcd1e55c08eac }, // 36
    Multiplier { upper: 0x881cea14545c75757e50d64177da2e54, lower: 0xbbfe6e04db16441240a4a418449a0bbd }, // 37
    Multiplier { upper: 0xd9c7dced53c7225596e7bd358c904a21, lower: 0x2cca49a15e8a06839aa1068d3a9012c8 }, // 38
    Multiplier { upper: 0xae397d8aa96c1b77abec975e0a0d081a, lower: 0x8a3b6e1ab2080536154d9ed7620cdbd3 }, // 39
    Multiplier { upper: 0x8b61313bbabce2c62323ac4b3b3da015, lower: 0x3b62be7bc1a0042b443e18ac4e70afdc }, // 40
    Multiplier { upper: 0xdf01e85f912e37a36b6c46dec52f6688, lower: 0x5f0463f935ccd3786d30277a171ab2f9 }, // 41
    Multiplier { upper: 0xb267ed1940f1c61c55f038b237591ed3, lower: 0x7f36b660f7d70f938a8cec61ac155bfb }, // 42
    Multiplier { upper: 0x8eb98a7a9a5b04e377f3608e92adb242, lower: 0xcc2bc51a5fdf3fa93ba3f04e23444996 }, // 43
    Multiplier { upper: 0xe45c10c42a2b3b058cb89a7db77c506a, lower: 0xe046082a32fecc41f9064d49d206dc22 }, // 44
    Multiplier { upper: 0xb6b00d69bb55c8d13d607b97c5fd0d22, lower: 0x4d04d354f598a367fa6b7107db38b01b }, // 45
    Multiplier { upper: 0x9226712162ab070dcab3961304ca70e8, lower: 0x3d9d75dd9146e91ffb8927397c2d59b0 }, // 46
    Multiplier { upper: 0xe9d71b689dde71afaab8f01e6e10b4a6, lower: 0xc8fbefc8e87174fff8db71f5937bc2b2 }, // 47
    Multiplier { upper: 0xbb127c53b17ec1595560c018580d5d52, lower: 0x3a63263a538df7332d7c5b2adc630228 }, // 48
    Multiplier { upper: 0x95a8637627989aaddde7001379a44aa8, lower: 0x2eb5b82ea93e5f5c24637c2249e8ce87 }, // 49
    Multiplier { upper: 0xef73d256a5c0f77c963e66858f6d4440, lower: 0x4abc59e441fd65603a38c69d430e173e }, // 50
    Multiplier { upper: 0xbf8fdb78849a5f96de98520472bdd033, lower: 0x6efd14b69b311de694fa387dcf3e78fe }, // 51
    Multiplier { upper: 0x993fe2c6d07b7fabe546a8038efe4029, lower: 0x259743c548f417ebaa61c6cb0c31fa65 }, // 52
    Multiplier { upper: 0xf53304714d9265dfd53dd99f4b3066a8, lower: 0x3c25393ba7ecf312aa360ade79e990a2 }, // 53
    Multiplier { upper: 0xc428d05aa4751e4caa97e14c3c26b886, lower: 0x96842dc95323f5a8882b3be52e5473b5 }, // 54
    Multiplier { upper: 0x9ced737bb6c4183d55464dd69685606b, lower: 0xab9cf16ddc1cc486d355c98425105c91 }, // 55
    Multiplier { upper: 0xfb158592be068d2eeed6e2f0f0d56712, lower: 0xac2e4f162cfad40aebbc75a03b4d60e7 }, // 56
    Multiplier { upper: 0xc8de047564d20a8bf245825a5a445275, lower: 0x568b727823fbdcd58963914cfc3de71f }, // 57
    Multiplier { upper: 0xa0b19d2ab70e6ed65b6aceaeae9d0ec4, lower: 0x453c5b934ffcb0aad44fa770c9cb1f4c }, // 58
    Multiplier { upper: 0x808e17555f3ebf11e2bbd88bbee40bd0, lower: 0x37637c75d996f3bbdd0c85f3d4a27f70 }, // 59
    Multiplier { upper: 0xcdb02555653131b63792f412cb06794d, lower: 0x256bfa5628f185f961ada31fba9d98b3 }, // 60
    Multiplier { upper: 0xa48ceaaab75a8e2b5fa8c3423c052dd7, lower: 0x51232eab53f46b2de7be1c196217ad5c }, // 61
    Multiplier { upper: 0x83a3eeeef9153e891953cf68300424ac, lower: 0x40e8f222a99055be52fe7ce11b46244a }, // 62
    Multiplier { upper: 0xd29fe4b18e88640e8eec7f0d19a03aad, lower: 0x34a7e9d10f4d55fd51972e34f8703a10 }, // 63
    Multiplier { upper: 0xa87fea27a539e9a53f2398d747b36224, lower: 0x2a1fee40d90aab310e128b5d938cfb40 }, // 64
    Multiplier { upper: 0x86ccbb52ea94baea98e947129fc2b4e9, lower: 0xbb4cbe9a473bbc273e753c4adc70c900 }, // 65
    Multiplier { upper: 0xd7adf884aa8791775b0ed81dcc6abb0f, lower: 0x9214642a0b92c6a530bb93aafa4e0e66 }, // 66
    Multiplier { upper: 0xac8b2d36eed2dac5e272467e3d222f3f, lower: 0xa8105021a2dbd21dc0960fbbfb71a51f }, // 67
    Multiplier { upper: 0x8a08f0f8bf0f156b1b8e9ecb641b58ff, lower: 0xb9a6a6814f1641b166de72fcc927b74c }, // 68
    Multiplier { upper: 0xdcdb1b2798182244f8e431456cf88e65, lower: 0xf5d770cee4f0691bd7ca5194750c5879 }, // 69
    Multiplier { upper: 0xb0af48ec79ace8372d835a9df0c6d851, lower: 0x9179270bea59edafdfd50e105da379fa }, // 70
    Multiplier { upper: 0x8d590723948a535f579c487e5a38ad0e, lower: 0x0dfa85a321e18af319773e737e1c6195 }, // 71
    Multiplier { upper: 0xe2280b6c20dd523225c6da63c38de1b0, lower: 0x165da29e9c9c1184f58b971f302d68ef }, // 72
    Multiplier { upper: 0xb4ecd5f01a4aa8281e38aeb6360b1af3, lower: 0x4517b54bb07cdad0c46fac18f3578725 }, // 73
    Multiplier { upper: 0x90bd77f3483bb9b9b1c6f22b5e6f48c2, lower: 0x9dac910959fd7bda36bfbce0c2ac6c1e }, // 74
    Multiplier { upper: 0xe7958cb87392c2c2b60b1d1230b20e04, lower: 0x2f7a81a88ffbf95d2465fb01377a4696 }, // 75
    Multiplier { upper: 0xb94470938fa89bcef808e40e8d5b3e69, lower: 0xbf953486d99661175051959a92c83878 }, // 76
    Multiplier { upper: 0x9436c0760c86e30bf9a0b6720aaf6521, lower: 0x6610f6d247ab80df737477aedbd36060 }, // 77
    Multiplier { upper: 0xed246723473e3813290123e9aab23b68, lower: 0xa34e57b6d91267cbebed8c4af95233cd }, // 78
    Multiplier { upper: 0xbdb6b8e905cb600f5400e987bbc1c920, lower: 0x82a512f8ada85309898ad6a2610e8fd7 }, // 79
    Multiplier { upper: 0x97c560ba6b0919a5dccd879fc967d41a, lower: 0x021da8c6f15375a13ad57881e73ed979 }, // 80
    Multiplier { upper: 0xf2d56790ab41c2a2fae27299423fb9c3, lower: 0x3695dad7e8858901f7bbf4030b97c25b }, // 81
    Multiplier { upper: 0xc24452da229b021bfbe85badce996168, lower: 0xf877e246539e0734c62ff668d61301e2 }, // 82
    Multiplier { upper: 0x9b69dbe1b548ce7cc986afbe3ee11aba, lower: 0x605fe83842e4d2909e8cc520ab4267e8 }, // 83
    Multiplier { upper: 0xf8a95fcf88747d9475a44c6397ce912a, lower: 0x33cca6c06b07b74dca7ad5011203d974 }, // 84
    Multiplier { upper: 0xc6ede63fa05d314391503d1c79720dbb, lower: 0x5ca3b899ef395f716ec8aa67419cadf6 }, // 85
    Multiplier { upper: 0x9f24b832e6b0f4360dd9ca7d2df4d7c9, lower: 0x16e9607b25c77f8df23a21ec347d57f8 }, // 86
    Multiplier { upper: 0xfea126b7d78186bce2f610c84987bfa8, lower: 0x24a89a5ea2d8cc16505d0313872ef327 }, // 87
    Multiplier { upper: 0xcbb41ef979346bca4f2b40a03ad2ffb9, lower: 0xb6ed484bb57a3cdea6b0cf42d28bf5b9 }, // 88
    Multiplier { upper: 0xa2f67f2dfa90563b728900802f0f32fa, lower: 0xf8bdd36fc461ca4bb88d729bdba32afa }, // 89
    Multiplier { upper: 0x825ecc24c873782f8ed400668c0c28c8, lower: 0xc6fe42bfd04e3b6fc6d78ee3161c2262 }, // 90
    Multiplier { upper: 0xd097ad07a71f26b27e2000a41346a7a7, lower: 0xa4ca04661a16c57fa48c17d1bcf9d09c }, // 91
    Multiplier { upper: 0xa6dfbd9fb8e5b88ecb4ccd500f6bb952, lower: 0xea3b36b814df04661d3cdfdafd94a6e3 }, // 92
    Multiplier { upper: 0x857fcae62d8493a56f70a4400c562ddb, lower: 0xee95c56010b269eb4a97197bfe108583 }, // 93
    Multiplier { upper: 0xd59944a37c0752a24be76d3346f0495f, lower: 0xe422d566811d76454424f593301a6f38 }, // 94
    Multiplier { upper: 0xaae103b5fcd2a881d652bdc29f26a119, lower: 0x834f111ecdb12b6a9cea5e0f59aebf60 }, // 95
    Multiplier { upper: 0x88b402f7fd75539b11dbcb0218ebb414, lower: 0x690c0db23e2755eee3eeb1a5e1589919 }, // 96
    Multiplier { upper: 0xdab99e59958885c4e95fab368e45eced, lower: 0x74e015e9fd0bbcb16cb11c3c9bc0f4f5 }, // 97
    Multiplier { upper: 0xaefae51477a06b03ede622920b6b23f1, lower: 0x2a4cde54ca6fca278a2749ca1633f72b }, // 98
    Multiplier { upper: 0x8bfbea76c619ef3657eb4edb3c55b65a, lower: 0x883d7eaa3b8ca1b93b52a16e78299289 }, // 99
    Multiplier { upper: 0xdff9772470297ebd59787e2b93bc56f7, lower: 0x40626443927a9c5b921dcf1726a8ea74 }, // 100
    Multiplier { upper: 0xb32df8e9f354656447939822dc96abf9, lower: 0x004eb69c752ee37c74e4a5ac1eed885d }, // 101
    Multiplier { upper: 0x8f57fa54c2a9eab69fa946824a12232d, lower: 0x99d89216c42582c9f71d51567f246d17 }, // 102
    Multiplier { upper: 0xe55990879ddcaabdcc420a6a101d0515, lower: 0xc2f41cf139d59e0ff1c88223fea0ae8b }, // 103
    Multiplier { upper: 0xb77ada0617e3bbcb09ce6ebb40173744, lower: 0x9bf67d8dc7de180cc16d34e998808ba3 }, // 104
    Multiplier { upper: 0x92c8ae6b464fc96f3b0b8bc90012929d, lower: 0x4991fe0b064b46709abdc3ee139a094f }, // 105
    Multiplier { upper: 0xeadab0aba3b2dbe52b45ac74ccea842e, lower: 0xdc1cc9ab3d453d80f7960649b8f6754b }, // 106
    Multiplier { upper: 0xbbe226efb628afea890489f70a55368b, lower: 0xe34a3aef643764672c780507c72b9109 }, // 107
    Multiplier { upper: 0x964e858c91ba26553a6a07f8d510f86f, lower: 0xe9082f25e9c5e9ec239337396c22da6e }, // 108
    Multiplier { upper: 0xf07da27a82c370885d767327bb4e5a4c, lower: 0xa80d183ca93ca979d2852528ad0490af }, // 109
    Multiplier { upper: 0xc06481fb9bcf8d39e45ec2862f71e1d6, lower: 0xecd74696edca212e42041dba2403a6f3 }, // 110
    Multiplier { upper: 0x99ea0196163fa42e504bced1bf8e4e45, lower: 0x8a45d21257d4e75834d017c81ccfb8c2 }, // 111
    Multiplier { upper: 0xf64335bcf065d37d4d4617b5ff4a16d5, lower: 0xaa09501d5954a559ee19bfa6947f8e03 }, // 112
    Multiplier { upper: 0xc5029163f384a9310a9e795e65d4df11, lower: 0x54d440177aaa1de18b47cc8543993e69 }, // 113
    Multiplier { upper: 0x9d9ba7832936edc0d54b944b84aa4c0d, lower: 0xdd7699ac6221b1813c39706a9c7a9854 }, // 114
    Multiplier { upper: 0xfc2c3f3841f17c67bbac2078d443ace2, lower: 0xfbf0f5e09d02b59b938f1a442d90f3b9 }, // 115
    Multiplier { upper: 0xc9bcff6034c13052fc89b393dd02f0b5, lower: 0x965a5e4d4a68914942d8e1d02473f62e }, // 116
    Multiplier { upper: 0xa163ff802a3426a8ca07c2dcb0cf26f7, lower: 0xab7b7ea43b86daa102471b0ce9f65e8b }, // 117
    Multiplier { upper: 0x811ccc668829b8870806357d5a3f525f, lower: 0xbc62cbb696057bb401d27c0a54c51870 }, // 118
    Multiplier { upper: 0xce947a3da6a9273e733d226229feea32, lower: 0xc7047924233bf92002ea601087a1c0b2 }, // 119
    Multiplier { upper: 0xa54394fe1eedb8fec2974eb4ee658828, lower: 0x9f36c7501c2ffa80025519a6d2e7cd5b }, // 120
    Multiplier { upper: 0x843610cb4bf160cbcedf722a585139ba, lower: 0x18f89f7349bffb999b7747b8a8b97116 }, // 121
    Multiplier { upper: 0xd389b478798234794aff1d108d4ec2c3, lower: 0x5b27658542ccc5c2925872c10df581bd }, // 122
    Multiplier { upper: 0xa93af6c6c79b5d2dd598e40d3dd89bcf, lower: 0x7c1f846a9bd7049ba846c2340b2ace31 }, // 123
    Multiplier { upper: 0x87625f056c7c4a8b11471cd764ad4972, lower: 0xc9b2d0554978d07c869f01c33c223e8d }, // 124
    Multiplier { upper: 0xd89d64d57a607744e871c7bf077ba8b7, lower: 0xa91e1a220f27b3fa70fe69386036ca7c }, // 125
    Multiplier { upper: 0xad4ab7112eb3929d86c16c98d2c953c6, lower: 0x20e4e1b4d8ec8ffb8d98542d19c56ec9 }, // 126
    Multiplier { upper: 0x8aa22c0dbef60ee46bcdf07a423aa96b, lower: 0x4d83e7c3e0bd3ffc7146a9bdae378bd4 }, // 127
    Multiplier { upper: 0xddd0467c64bce4a0ac7cb3f6d05ddbde, lower: 0xe26ca6063461fffa4ed775fc49f27953 }, // 128
    Multiplier { upper: 0xb1736b96b6fd83b3bd308ff8a6b17cb2, lower: 0x4ebd519e904e6661d8ac5e636e5b9443 }, // 129
    Multiplier { upper: 0x8df5efabc5979c8fca8d3ffa1ef463c1, lower: 0xd897747ed9d851e7e089e51c58494369 }, // 130
    Multiplier { upper: 0xe3231912d5bf60e610e1fff697ed6c69, lower: 0x5a8bed97c2f3b63fcda96e93c07538a7 }, // 131
    Multiplier { upper: 0xb5b5ada8aaff80b80d819992132456ba, lower: 0xaed657ac9bf62b663e212543005dc6ec }, // 132
    Multiplier { upper: 0x915e2486ef32cd600ace1474dc1d122e, lower: 0xf24512f07cc4ef84fe80ea9c004b058a }, // 133
    Multiplier { upper: 0xe896a0d7e51e156677b020baf9c81d17, lower: 0xea081e4d946e4c07fd9b10f99a11a276 }, // 134
    Multiplier { upper: 0xba121a4650e4ddeb92f34d62616ce413, lower: 0x21a0183e10583cd33148da61480e1b92 }, // 135
    Multiplier { upper: 0x94db483840b717efa8c2a44eb4571cdc, lower: 0x1ae679cb4046970f5aa0aeb439a4e2db }, // 136
    Multiplier { upper: 0xee2ba6c0678b597f746aa07ded582e2c, lower: 0xf7d7294533a424e55dcde4538f6e37c5 }, // 137
    Multiplier { upper: 0xbe89523386091465f6bbb397f1135823, lower: 0xf978edd0f61cea5117d7e9dc72be9304 }, // 138
    Multiplier { upper: 0x986ddb5c6b3a76b7f89629465a75e01c, lower: 0xc793f173f81721da797987e38efedc03 }, // 139
    Multiplier { upper: 0xf3e2f893dec3f1265a89dba3c3efccfa, lower: 0xd8ecb58659be9c90c25c0c9f4b316005 }, // 140
    Multiplier { upper: 0xc31bfa0fe5698db8486e494fcff30a62, lower: 0x4723c46b7afee3a701e33d4c3c278004 }, // 141
    Multiplier { upper: 0x9c1661a651213e2d06bea10ca65c084e, lower: 0x9f4fd055fbff1c859b1c3109c9b93336 }, // 142
    Multiplier { upper: 0xf9bd690a1b68637b3dfdce7aa3c673b0, lower: 0xfee61a232ccb60d5c4f9e80fa92851f0 }, // 143
    Multiplier { upper: 0xc7caba6e7c5382c8fe64a52ee96b8fc0, lower: 0xcbeb481c23d5e7116a618672edb9db27 }, // 144
    Multiplier { upper: 0x9fd561f1fd0f9bd3feb6ea8bedefa633, lower: 0xd655d349b644b8dabb81385bf1617c1f }, // 145
    Multiplier { upper: 0xffbbcfe994e5c61ffdf17746497f7052, lower: 0xf089520f8a078e2ac59b8d5fe89bf9cb }, // 146
    Multiplier { upper: 0xcc963fee10b7d1b3318df905079926a8, lower: 0xc06ddb3fa19fa4ef047c711986e32e3c }, // 147
    Multiplier { upper: 0xa3ab66580d5fdaf5c13e60d0d2e0ebba, lower: 0x338b15cc814c83f269fd27479f1c24fd }, // 148
    Multiplier { upper: 0x82ef85133de648c49a984d73dbe722fb, lower: 0x5c6f44a39aa39cc1ee641f6c7f49b731 }, // 149
    Multiplier { upper: 0xd17f3b51fca3a7a0f75a15862ca504c5, lower: 0x60b2076c2a9f61364a39cbe0cba9251b }, // 150
    Multiplier { upper: 0xa798fc4196e952e72c48113823b73704, lower: 0x4d5b3923554c4dc5082e3cb3d620ea7c }, // 151
    Multiplier { upper: 0x8613fd0145877585bd06742ce95f5f36, lower: 0xa448fa82aaa3716a6cf1ca29781a5530 }, // 152
    Multiplier { upper: 0xd686619ba27255a2c80a537b0efefebd, lower: 0xd3a7f737776be8aa47e943758cf6eeb3 }, // 153
    Multiplier { upper: 0xab9eb47c81f5114f066ea92f3f326564, lower: 0xa9532c2c5f8986ee9fedcf913d92588f }, // 154
    Multiplier { upper: 0x894bc396ce5da7726b8bba8c328eb783, lower: 0xbaa8f0237fa138bee657d940fe0ead40 }, // 155
    Multiplier { upper: 0xdbac6c247d62a583df45f746b74abf39, lower: 0x2aa7e69f329b8dfe3d595b9b30177b99 }, // 156
    Multiplier { upper: 0xafbd2350644eeacfe5d1929ef90898fa, lower: 0x88865218f5493e64fde11615c012c947 }, // 157
    Multiplier { upper: 0x8c974f73837255731e414218c73a13fb, lower: 0xa06b74e0c43a9850cb1a781166756dd2 }, // 158
    Multiplier { upper: 0xe0f218b8d25088b8306869c13ec3532c, lower: 0x33df2167a05dc08144f726823d88afb7 }, // 159
    Multiplier { upper: 0xb3f4e093db73a09359ed216765690f56, lower: 0x8fe5b452e6b166cdd0c5b868313a262c }, // 160
    Multiplier { upper: 0x8ff71a0fe2c2e6dc47f0e785eaba72ab, lower: 0xa6515d0f1ef4523e409e2d202761b823 }, // 161
    Multiplier { upper: 0xe65829b3046b0afa0cb4a5a3112a5112, lower: 0xa3b561b1cb208396cdc9e1cd0bcf8d05 }, // 162
    Multiplier { upper: 0xb84687c269ef3bfb3d5d514f40eea742, lower: 0x1c911af4a2806945716e4e3da30c70d1 }, // 163
    Multiplier { upper: 0x936b9fcebb25c995cab10dd900beec34, lower: 0xe3a748c3b533876ac1250b6482705a41 }, // 164
    Multiplier { upper: 0xebdf661791d60f56111b495b3464ad21, lower: 0x6c3edad2bb85a5779b6e78a0d0b3c39b }, // 165
    Multiplier { upper: 0xbcb2b812db11a5de7415d448f6b6f0e7, lower: 0x89cbe2422f9e1df949252d4d73c302e2 }, // 166
    Multiplier { upper: 0x96f5600f15a7b7e529ab103a5ef8c0b9, lower: 0x3b0981ce8c7e7e610750f10ac30268b5 }, // 167
    Multiplier { upper: 0xf18899b1bc3f8ca1dc44e6c3cb279ac1, lower: 0xf80f36174730ca34d88181aad19d7455 }, // 168
    Multiplier { upper: 0xc13a148e3032d6e7e36a52363c1faf01, lower: 0x933f5e7905c0a1c3e0679aef0e179044 }, // 169
    Multiplier { upper: 0x9a94dd3e8cf578b982bb74f8301958ce, lower: 0x0f65e52d9e33b49cb386158c0b460d03 }, // 170
    Multiplier { upper: 0xf7549530e188c128d12bee59e68ef47c, lower: 0xe56fd515c9ec542dec09bc13453ce19e }, // 171
    Multiplier { upper: 0xc5dd44271ad3cdba40eff1e1853f29fd, lower: 0x84597744a189dcf189a163429dca4e18 }, // 172
    Multiplier { upper: 0x9e4a9cec15763e2e9a598e4e043287fe, lower: 0x037ac5d0813b1727a14de90217d50b47 }, // 173
    Multiplier { upper: 0xfd442e4688bd304a908f4a166d1da663, lower: 0x38c46fb401f8250c354974d02621aba4 }, // 174
    Multiplier { upper: 0xca9cf1d206fdc03ba6d90811f0e4851c, lower: 0x2d69f2f667f9b73cf76df70ceb4e22ea }, // 175
    Multiplier { upper: 0xa21727db38cb002fb8ada00e5a506a7c, lower: 0xf1218f2b86615f63f924c5a3ef71b588 }, // 176
    Multiplier { upper: 0x81ac1fe293d599bfc6f14cd848405530, lower: 0xc0e7a5bc6b81191cc7509e1cbf8e2ad3 }, // 177
    Multiplier { upper: 0xcf79cc9db955c2cc7182148d4066eeb4, lower: 0x67d9092d78ce8e94721a969465b04485 }, // 178
    Multiplier { upper: 0xa5fb0a17c777cf09f468107100525890, lower: 0x5314075793d872105b487876b7c036d1 }, // 179
    Multiplier { upper: 0x84c8d4dfd2c63f3b29ecd9f40041e073, lower: 0x75a99f7943138e737c39f9f893002bda }, // 180
    Multiplier { upper: 0xd47487cc8470652b7647c3200069671f, lower: 0x22a8ff286b527d85938ff65a84cd12f7 }, // 181
    Multiplier { upper: 0xa9f6d30a038d1dbc5e9fcf4ccd211f4c, lower: 0x1bba65b9ef753137a93ff8486a3da8c5 }, // 182
    Multiplier { upper: 0x87f8a8d4cfa417c9e54ca5d70a80e5d6, lower: 0x7c951e2e592a8dc620fff9d3883153d1 }, // 183
    Multiplier { upper: 0xd98ddaee19068c763badd624dd9b0957, lower: 0x2dbb637d5b77493d01998fb8d9e8861b }, // 184
    Multiplier { upper: 0xae0b158b4738705e9624ab50b148d445, lower: 0xbe2f82caaf92a0fd9ae13fc714ba04e3 }, // 185
    Multiplier { upper: 0x8b3c113c38f9f37ede83bc408dd3dd04, lower: 0x9826023bbfa880cae24dcc9f43c803e9 }, // 186
    Multiplier { upper: 0xdec681f9f4c31f316405fa00e2ec94d4, lower: 0x26a336c5ff7401449d49476539400641 }, // 187
    Multiplier { upper: 0xb23867fb2a35b28de99e619a4f23aa43, lower: 0x521c2bd199299a9d4aa105ea94333834 }, // 188
    Multiplier { upper: 0x8e938662882af53e547eb47b7282ee9c, lower: 0x41b0230e1421487dd54d9e55435c2cf6 }, // 189
    Multiplier { upper: 0xe41f3d6a7377eeca20caba5f1d9e4a93, lower: 0x9c4d04e3536873fc887c30886bc6ae57 }, // 190
    Multiplier { upper: 0xb67f6455292cbf081a3bc84c17b1d542, lower: 0xe370d0b5dc538ffd39fcf3a056388b79 }, // 191
    Multiplier { upper: 0x91ff83775423cc067b6306a34627ddcf, lower: 0x1c5a40917d0fa6642e63f619de93a2c7 }, // 192
    Multiplier { upper: 0xe998d258869facd72bd1a438703fc94b, lower: 0x6090674f2e7f70a04a3989c2fdb90471 }, // 193
    Multiplier { upper: 0xbae0a846d21957128974836059cca109, lower: 0x1a0d1f728b9926e6a1c7a168cafa69f4 }, // 194
    Multiplier { upper: 0x9580869f0e7aac0ed45d35e6ae3d4da0, lower: 0xe1a419286fadb8b8816c8120a261ee5d }, // 195
    Multiplier { upper: 0xef340a98172aace486fb897116c87c34, lower: 0x9c39c1da4c49278d9be0ce9a9d697d62 }, // 196
    Multiplier { upper: 0xbf5cd54678eef0b6d262d45a78a0635d, lower: 0x49c7ce483d0752d7afe70baee454644e }, // 197
    Multiplier { upper: 0x991711052d8bf3c5751bdd152d4d1c4a, lower: 0xa16ca50697390f12f31f3c8be9dd1d0c }, // 198
    Multiplier { upper: 0xf4f1b4d515acb93bee92fb5515482d44, lower: 0x357aa1a42528181e51cb94130fc82e79 }, // 199
    Multiplier { upper: 0xc3f490aa77bd60fcbedbfc4411068a9c, lower: 0xf7954e1cea8679b1db09434273068b94 }, // 200
    Multiplier { upper: 0x9cc3a6eec6311a63cbe3303674053bb0, lower: 0xc6110b4a5538615b15a1029b8f386faa }, // 201
    Multiplier { upper: 0xfad2a4b13d1b5d6c796b805720085f81, lower: 0x3ce81210885a355e89019dc5b1f3e5dc }, // 202
    Multiplier { upper: 0xc8a883c0fdaf7df06122cd128006b2cd, lower: 0xca5341a6d37b5de53a67b16af4c31e49 }, // 203
    Multiplier { upper: 0xa086cfcd97bf97f380e8a40eccd228a4, lower: 0xa1dc348575fc4b1dc852f455909c183b }, // 204
    Multiplier { upper: 0x806bd9714632dff600ba1cd8a3db53b6, lower: 0xe7e35d379196a27e39dbf6aada1679c9 }, // 205
    Multiplier { upper: 0xcd795be87051665667902e276c921f8b, lower: 0x0c9efb8c1c2437305c9324449023f60e }, // 206
    Multiplier { upper: 0xa46116538d0deb7852d9be85f074e608, lower: 0xd6e59609b01cf8f37d42836a0ce991a5 }, // 207
    Multiplier { upper: 0x8380dea93da4bc604247cb9e59f71e6d, lower: 0x78b7ab3af34a60c2ca9b9c54d7214151 }, // 208
    Multiplier { upper: 0xd267caa862a12d66d072df63c324fd7b, lower: 0xf45911f7ebaa346addc5c6ee2502021a }, // 209
    Multiplier { upper: 0xa8530886b54dbdebd9f57f830283fdfc, lower: 0xc37a74c65621c388b16b058b50ce6815 }, // 210
    Multiplier { upper: 0x86a8d39ef77164bcae5dff9c02033197, lower: 0x02c85d6b781b02d3c1226ad5da3eb9ab }, // 211
    Multiplier { upper: 0xd77485cb25823ac77d633293366b828b, lower: 0x37a6fbdf26919e1f9b6a44895d312911 }, // 212
    Multiplier { upper: 0xac5d37d5b79b6239311c2875c522ced5, lower: 0xc61f2fe5b8747e7faf8836d44a8dba74 }, // 213
    Multiplier { upper: 0x89e42caaf9491b60f41686c49db57244, lower: 0x9e7f598493906532f2d35f103ba4952a }, // 214
    Multiplier { upper: 0xdca04777f541c567ecf0d7a0fc5583a0, lower: 0xfd988f3a85b3d51e515231b392a0eea9 }, // 215
    Multiplier { upper: 0xb080392cc4349decbd8d794d96aacfb3, lower: 0xfe13a5c86af64418410e8e29421a5887 }, // 216
    Multiplier { upper: 0x8d3360f09cf6e4bd64712dd7abbbd95c, lower: 0xcb42eb06bbf83679cda53e876815139f }, // 217
    Multiplier { upper: 0xe1ebce4dc7f16dfbd3e8495912c62894, lower: 0x786b11a45ff38a5c7c3b973f0cee85cb }, // 218
    Multiplier { upper: 0xb4bca50b065abe630fed077a756b53a9, lower: 0xf9ef41504cc2d516c9c945cc0a586b09 }, // 219
    Multiplier { upper: 0x9096ea6f3848984f3ff0d2c85def7621, lower: 0x94bf6773709bddabd4a104a33b79ef3b }, // 220
    Multiplier { upper: 0xe757dd7ec07426e5331aeada2fe589cf, lower: 0x546572524dc62f795434d4385f297ec4 }, // 221
    Multiplier { upper: 0xb913179899f6858428e2557b59846e3f, lower: 0x76b78ea83e3825faa9c3dcf9e5bacbd0 }, // 222
    Multiplier { upper: 0x940f4613ae5ed136871b7795e136be99, lower: 0x2bc60bb9cb601e6221697d94b7c8a30d }, // 223
    Multiplier { upper: 0xece53cec4a314ebda4f8bf5635246428, lower: 0x4609ac5c7899ca369bdbfc21260dd1ae }, // 224
    Multiplier { upper: 0xbd8430bd0827723150c6ff782a838353, lower: 0x6b3af049fa14a1c5497cc9b41e71748b }, // 225
    Multiplier { upper: 0x979cf3ca6cec5b5aa705992ceecf9c42, lower: 0xbc2f26a194dd4e376dfd6e29b1f45d3c }, // 226
    Multiplier { upper: 0xf294b943e17a2bc43e6f5b7b17b2939d, lower: 0xf9e50a9c216216bf166249dc4fed61fa }, // 227
    Multiplier { upper: 0xc21094364dfb5636985915fc12f542e4, lower: 0xc7ea6ee34de81232784ea17d0cbde7fb }, // 228
    Multiplier { upper: 0x9b407691d7fc44f879e0de63425dcf1d, lower: 0x6cbb8be90b200e8ec6a54dfda3cb1ffc }, // 229
    Multiplier { upper: 0xf867241c8cc6d4c0c30163d203c94b62, lower: 0x47927974de99b0e471087cc90611ccc7 }, // 230
    Multiplier { upper: 0xc6b8e9b0709f109a359ab6419ca1091b, lower: 0x6c752df7187af3e9f406ca3a6b41709f }, // 231
    Multiplier { upper: 0x9efa548d26e5a6e1c47bc5014a1a6daf, lower: 0x89f757f8e0625cbb299f082ebc345a19 }, // 232
    Multiplier { upper: 0xfe5d54150b090b02d3f93b35435d7c4c, lower: 0x0ff2265b009d612b75cb404ac6ba29c1 }, // 233
    Multiplier { upper: 0xcb7ddcdda26da268a9942f5dcf7dfd09, lower: 0xa65b51e266e44dbc5e3c336f0561bb01 }, // 234
    Multiplier { upper: 0xa2cb1717b52481ed54768c4b0c64ca6e, lower: 0x1eaf74b51f1d0afd183029259de7c8ce }, // 235
    Multiplier { upper: 0x823c12795db6ce5776c53d08d6b70858, lower: 0x188c5d5db27da2641359ba847e53070b }, // 236
    Multiplier { upper: 0xd0601d8efc57b08bf13b94daf124da26, lower: 0x8dad622f83fc3706855c5da0ca1e71ab }, // 237
    Multiplier { upper: 0xa6b34ad8c9dfc06ff42faa48c0ea481e, lower: 0xd7bde82603302c05377d17b3d4e527bc }, // 238
    Multiplier { upper: 0x855c3be0a17fcd265cf2eea09a55067f, lower: 0x12fe53519c26899dc5fdac8fdd841fca }, // 239
    Multiplier { upper: 0xd5605fcdcf32e1d6fb1e4a9a90880a64, lower: 0xeb30854f603da8fc6ffc474c95a032dc }, // 240
    Multiplier { upper: 0xaab37fd7d8f58178c8e5087ba6d33b83, lower: 0xef5a043f803153fd26636c3d448028b0 }, // 241
    Multiplier { upper: 0x888f99797a5e012d6d8406c952429603, lower: 0x25e19cff99c10ffdb84f89ca9d3353c0 }, // 242
    Multiplier { upper: 0xda7f5bf590966848af39a475506a899e, lower: 0xa30294cc2934e662c07f42ddc8521f9a }, // 243
    Multiplier { upper: 0xaecc49914078536d58fae9f773886e18, lower: 0x82687709ba90b84f0065cf17d374e615 }, // 244
    Multiplier { upper: 0x8bd6a141006042bde0c8bb2c5c6d24e0, lower: 0x6853926e2eda2d0c0051727975f71e77 }, // 245
    Multiplier { upper: 0xdfbdcece67006ac967a791e093e1d49a, lower: 0x4085b716b15d14e0008250c2565830be }, // 246
    Multiplier { upper: 0xb2fe3f0b8599ef07861fa7e6dcb4aa15, lower: 0x006af8def44a77199a01da3511e026ff }, // 247
    Multiplier { upper: 0x8f31cc0937ae58d2d1b2ecb8b0908810, lower: 0xcd2260b25d085f47ae67e1c40e4cebff }, // 248
    Multiplier { upper: 0xe51c79a85916f48482b7e12780e7401a, lower: 0xe1d09ab6fb409872b0a636067d47dffe }, // 249
    Multiplier { upper: 0xb749faed14125d36cef980ec671f667b, lower: 0xe7da155f2f66e05bc084f80531064ccb }, // 250
    Multiplier { upper: 0x92a1958a7675175f0bfacd89ec191ec9, lower: 0x86481118f2b8b37c9a03f99dc0d1d709 }, // 251
    Multiplier { upper: 0xea9c227723ee8bcb465e15a979c1cadc, lower: 0x0a0ce827eac11f2dc3398f62ce1c8b42 }, // 252
    Multiplier { upper: 0xbbb01b9283253ca29eb1aaedfb016f16, lower: 0x6e70b9b9889a7f57cf613f823e7d3c35 }, // 253
    Multiplier { upper: 0x96267c7535b763b54bc1558b2f3458de, lower: 0xbec094946d4865dfd91a9934feca9691 }, // 254
    Multiplier { upper: 0xf03d93eebc589f88793555ab7eba27ca, lower: 0xcacdba871540a2ffc1c42854caddbdb4 }, // 255
    Multiplier { upper: 0xc0314325637a1939fa911155fefb5308, lower: 0xa23e2ed27766e8cc9b03537708b16490 }, // 256
    Multiplier { upper: 0x99c102844f94e0fb2eda7444cbfc426d, lower: 0x4e9825752c5253d6e2690f926d5ab6da }, // 257
    Multiplier { upper: 0xf6019da07f549b2b7e2a53a146606a48, lower: 0x7dc03beead5086249d74e5b7155df15c }, // 258
    Multiplier { upper: 0xc4ce17b399107c22cb550fb4384d21d3, lower: 0x97ccfcbef10d381d4ac3eaf8dde4c116 }, // 259
    Multiplier { upper: 0x9d71ac8fada6c9b56f773fc3603db4a9, lower: 0x463d96ff273dc67dd56988c717ea3412 }, // 260
    Multiplier { upper: 0xfbe9141915d7a9224bf1ff9f0062baa8, lower: 0x70628b31d862d72fbbdc0e0b5976b9b6 }, // 261
    Multiplier { upper: 0xc987434744ac874ea327ffb266b56220, lower: 0x59e86f5b138245bfc97cd809145efaf8 }, // 262
    Multiplier { upper: 0xa139029f6a239f721c1fffc1ebc44e80, lower: 0x47ed25e27601d1663aca466da9e59594 }, // 263
    Multiplier { upper: 0x80fa687f881c7f8e7ce66634bc9d0b99, lower: 0xd3241e4ec4ce411e956e9ebe218477a9 }, // 264
    Multiplier { upper: 0xce5d73ff402d98e3fb0a3d212dc8128f, lower: 0xb839ca17a14a01ca88b0fdfd026d8c42 }, // 265
    Multiplier { upper: 0xa5178fff668ae0b6626e974dbe39a872, lower: 0xf9c7d4dfb43b34a206f3fe6401f13d02 }, // 266
    Multiplier { upper: 0x8412d9991ed58091e858790afe9486c2, lower: 0x616caa4c902f5d4e6bf6651cce5a9735 }, // 267
    Multiplier { upper: 0xd3515c2831559a830d5a5b44ca873e03, lower: 0xcf1443adb37efbb0acbd6e947d5dbeba }, // 268
    Multiplier { upper: 0xa90de3535aaae202711515d0a205cb36, lower: 0x3f436957c2cbfc8d56fdf210644afefb }, // 269
    Multiplier { upper: 0x873e4f75e2224e685a7744a6e804a291, lower: 0xcc35eddfcf0996d778cb280d1d08cbfc }, // 270
    Multiplier { upper: 0xd863b256369d4a4090bed43e40076a82, lower: 0xe0564966180f57bf27ab73482e747994 }, // 271
    Multiplier { upper: 0xad1c8eab5ee43b66da3243650005eecf, lower: 0x19dea11e79a5dfcc1fbc5c39bec39476 }, // 272
    Multiplier { upper: 0x8a7d3eef7f1cfc52482835ea666b2572, lower: 0x7b1880e52e1e4ca34c96b02e3236105f }, // 273
    Multiplier { upper: 0xdd95317f31c7fa1d40405643d711d583, lower: 0xf82734a1e363add214244d16b6bce6fe }, // 274
    Multiplier { upper: 0xb1442798f49ffb4a99cd11cfdf41779c, lower: 0xc685c3b4b5e957db43503dabc563ebfe }, // 275
    Multiplier { upper: 0x8dd01fad907ffc3bae3da7d97f6792e3, lower: 0xd2049c909187797c35d9caefd11cbccb }, // 276
    Multiplier { upper: 0xe2e69915b3fff9f916c90c8f323f516c, lower: 0x833a941a82725bf9efc2de4c81c79478 }, // 277
    Multiplier { upper: 0xb58547448ffffb2dabd40a0c2832a78a, lower: 0x02954348685b7cc7f3024b7067d2dd2d }, // 278
    Multiplier { upper: 0x91376c36d99995be23100809b9c21fa1, lower: 0x9baa9c39ed15fd6cc2683c59eca8b0f1 }, // 279
    Multiplier { upper: 0xe858ad248f5c22c9d1b3400f8f9cff68, lower: 0xf910f9f648232f146a40608fe10de7e8 }, // 280
    Multiplier { upper: 0xb9e08a83a5e34f07daf5ccd93fb0cc53, lower: 0xfa73fb2b6ce8f276bb66b3a64da4b986 }, // 281
    Multiplier { upper: 0x94b3a202eb1c3f397bf7d71432f3d6a9, lower: 0x952995bc5720c1f895ebc2eb7150946c }, // 282
    Multiplier { upper: 0xedec366b11c6cb8f2cbfbe86b7ec8aa8, lower: 0xeea8ef93be9acff42312d178b54dba45 }, // 283
    Multiplier { upper: 0xbe5691ef416bd60c23cc986bc656d553, lower: 0xf220bfa96548a65ce8dbdac6f77161d1 }, // 284
    Multiplier { upper: 0x9845418c345644d6830a13896b78aaa9, lower: 0x8e8099545106eb7d8716489f2c5ab4a7 }, // 285
    Multiplier { upper: 0xf3a20279ed56d48a6b43527578c1110f, lower: 0x4a675bba1b3e4595a4f07431e091210c }, // 286
    Multiplier { upper: 0xc2e801fb244576d5229c41f793cda73f, lower: 0x6eb9162e7c31d14483f39027e6da80d6 }, // 287
    Multiplier { upper: 0x9becce62836ac5774ee367f9430aec32, lower: 0xbefa78253027da9d365c73531f1533df }, // 288
    Multiplier { upper: 0xf97ae3d0d2446f254b0573286b44ad1d, lower: 0xfe5d8d084d0c90fb8a2d8551cb551fca }, // 289
    Multiplier { upper: 0xc795830d75038c1dd59df5b9ef6a2417, lower: 0xfeb13da03da3a72fa1be04416f774ca2 }, // 290
    Multiplier { upper: 0x9faacf3df73609b177b191618c54e9ac, lower: 0xcbc0fe19cae9528c8164d034592c3d4f }, // 291
    Multiplier { upper: 0xff77b1fcbebcdc4f25e8e89c13bb0f7a, lower: 0xdf9b302944a88414023ae6ba2846c87d }, // 292
    Multiplier { upper: 0xcc5fc196fefd7d0c1e53ed49a96272c8, lower: 0xb2e28cedd086d01001c8b894ed056d31 }, // 293
    Multiplier { upper: 0xa37fce126597973ce50ff107bab528a0, lower: 0x8f1ba3f1739f0cd99b06fa10bd9df0f4 }, // 294
    Multiplier { upper: 0x82cca4db847945ca50d98d9fc890ed4d, lower: 0x3f494ff45c7f3d7ae26bfb4097b18d90 }, // 295
    Multiplier { upper: 0xd1476e2c07286faa1af5af660db4aee1, lower: 0xfedbb32093fec8c49d799200f2b5af4d }, // 296
    Multiplier { upper: 0xa76c582338ed2621af2af2b80af6f24e, lower: 0x657c8f4d43323a36e461419a5bc48c3e }, // 297
    Multiplier { upper: 0x85f0468293f0eb4e25bbf56008c58ea5, lower: 0x1dfd3f71028e94f8b6b4347b7c9d3cfe }, // 298
    Multiplier { upper: 0xd64d3d9db981787d092cbbccdad5b108, lower: 0x2ffb98b4d0e4218df12053f8c761fb30 }, // 299
    Multiplier { upper: 0xab70fe17c79ac6ca6dbd630a48aaf406, lower: 0x8cc946f70d834e0b274d0ffa391b2f5a }, // 300
    Multiplier { upper: 0x892731ac9faf056ebe311c083a225cd2, lower: 0x0a3a9f2c0acf71a285d73ffb60e28c48 }, // 301
    Multiplier { upper: 0xdb71e91432b1a24ac9e82cd9f69d6150, lower: 0x105dcb79aae5829da2f1fff89b0413a6 }, // 302
    Multiplier { upper: 0xaf8e5410288e1b6f07ecf0ae5ee44dd9, lower: 0xa6b16f9488b79bb14f27fffa159cdc85 }, // 303
    Multiplier { upper: 0x8c71dcd9ba0b49259ff0c08b7f1d0b14, lower: 0x855abfaa06f9495aa5b99994de1716d1 }, // 304
    Multiplier { upper: 0xe0b62e2929aba83c331acdabfe94de87, lower: 0x3bc465dcd7f5422aa2c28f54968b57b4 }, // 305
    Multiplier { upper: 0xb3c4f1ba87bc86968f48a4899877186c, lower: 0x2fd0517d799101bbb56872aa120912f7 }, // 306
    Multiplier { upper: 0x8fd0c16206306baba5d3b6d479f8e056, lower: 0x8ca6a79794740162f786c221a807425f }, // 307
    Multiplier { upper: 0xe61acf033d1a45df6fb92487298e33bd, lower: 0xadd7728c20b99bd18c0ad035d9a536fe }, // 308
    Multiplier { upper: 0xb8157268fdae9e4c5960ea05bad82964, lower: 0x8b12c209b3c7afdad66f0cf7e150f8cb }, // 309
    Multiplier { upper: 0x93445b8731587ea37ab3ee6afbe0211d, lower: 0x3c0f01a15c9fbfe24525a3f9810d93d6 }, // 310
    Multiplier { upper: 0xeba09271e88d976bf7864a44c633682e, lower: 0xc67e69022dcc6636d509065c01af52f0 }, // 311
    Multiplier { upper: 0xbc807527ed3e12bcc605083704f5ecf2, lower: 0x386520ce8b09eb5f10d4051667bf758d }, // 312
    Multiplier { upper: 0x96cd2a865764dbca380406926a5e5728, lower: 0x2d1db3d86f3b22b273dcd0deb965f7a4 }, // 313
    Multiplier { upper: 0xf148440a256e2c76c00670ea43ca250d, lower: 0x14fc52f3e52b6ab71fc7b4978f098c39 }, // 314
    Multiplier { upper: 0xc1069cd4eabe89f8999ec0bb696e840a, lower: 0x7730425cb755eef8e6395d460c07a361 }, // 315
    Multiplier { upper: 0x9a6bb0aa55653b2d47b233c92125366e, lower: 0xc5c03516f9118bfa51c77dd1a3394f81 }, // 316
    Multiplier { upper: 0xf712b443bbd52b7ba5e9ec7501d523e4, lower: 0x6f99ee8b281c132a1c7262e905287f34 }, // 317
    Multiplier { upper: 0xc5a890362fddbc62eb2189f734aa831d, lower: 0x2614bed5b9b00f54e38eb587375398f7 }, // 318
    Multiplier { upper: 0x9e20735e8cb1638255b46e5f5d5535b0, lower: 0xeb43cbde2e2672aa4fa55e05c5dc7a5f }, // 319
    Multiplier { upper: 0xfd00b897478238d08920b098955522b4, lower: 0xab9fac96b03d8443b2a230093c93f6fe }, // 320
    Multiplier { upper: 0xca66fa129f9b60a6d41a26e077774ef6, lower: 0xefb2f0788cfe03695bb4f33a96dcc598 }, // 321
    Multiplier { upper: 0xa1ebfb4219491a1f1014ebe6c5f90bf8, lower: 0xbfc259fa0a64cf877c90c295457d6ae0 }, // 322
    Multiplier { upper: 0x818995ce7aa0e1b27343efebd1940993, lower: 0xcc9b7b2e6eb70c6c63a7021104645580 }, // 323
    Multiplier { upper: 0xcf42894a5dce35ea52064cac828675b9, lower: 0x475f2b7d7df1ad7a390b3681a0a088cd }, // 324
    Multiplier { upper: 0xa5ced43b7e3e9188419ea3bd35385e2d, lower: 0xd2b28931318e2461c73c2b9ae6e6d3d7 }, // 325
    Multiplier { upper: 0x84a57695fe98746d014bb630f7604b57, lower: 0xdbc2075a8e0b504e38fcefaf1f1f0fe0 }, // 326
    Multiplier { upper: 0xd43bf0effdc0ba480212bd1b2566def2, lower: 0xf936722a7cdee6e38e617f7e9831b2ff }, // 327
    Multiplier { upper: 0xa9c98d8ccb009506680efdaf511f18c2, lower: 0x60f85b5530b2524fa51acc65468e28cc }, // 328
    Multiplier { upper: 0x87d4713d6f33aa6b8672648c40e5ad68, lower: 0x4d937c4426f50ea61daf09ea9ed820a3 }, // 329
    Multiplier { upper: 0xd953e8624b85dd78d71d6dad34a2af0d, lower: 0x48ebfa06a4bb4aa362b1a977648d0105 }, // 330
    Multiplier { upper: 0xaddcb9e83c6b1793df4abe242a1bbf3d, lower: 0xd3effb3883c90882b55aedf91d3d9a6b }, // 331
    Multiplier { upper: 0x8b16fb203055ac764c3bcb5021afcc31, lower: 0x765995c6cfd406cef77bf19417647b89 }, // 332
    Multiplier { upper: 0xde8b2b66b3bc4723ad2c788035e61382, lower: 0x56f5bc714c86714b25931c20256d9274 }, // 333
    Multiplier { upper: 0xb208ef855c969f4fbdbd2d335e51a935, lower: 0x125e305aa39ec108eadc16801df141f6 }, // 334
    Multiplier { upper: 0x8e6d8c6ab0787f72fe30f0f5e50e20f7, lower: 0x41e4f37bb6189a6d88b0120017f434c5 }, // 335
    Multiplier { upper: 0xe3e27a444d8d98b7fd1b1b2308169b25, lower: 0x363b1f2c568dc3e2744ce999bfed213b }, // 336
    Multiplier { upper: 0xb64ec836a47146f99748e2826cdee284, lower: 0x2b627f56aba49cb529d72147ccbdb42f }, // 337
    Multiplier { upper: 0x91d8a02bb6c1059479071b9b8a4be869, lower: 0xbc4ecc45561d4a2a87df4dd30a315cf3 }, // 338
    Multiplier { upper: 0xe95a99df8ace6f53f4d82c2c107973dc, lower: 0x607e13a2236210440c987c84dd1bc7eb }, // 339
    Multiplier { upper: 0xbaaee17fa23ebf765d79bcf00d2df649, lower: 0xe6cb42e81c4e7369a3ad306a4a7c9fef }, // 340
    Multiplier { upper: 0x9558b4661b6565f84ac7ca59a424c507, lower: 0xebd5cf2016a529214fbdc0550863b326 }, // 341
    Multiplier { upper: 0xeef453d6923bd65a113faa2906a13b3f, lower: 0xdfbc7e99bdd50e9bb2c933bb409f8509 }, // 342
    Multiplier { upper: 0xbf29dcaba82fdeae7432ee873880fc33, lower: 0x1963987afe440bafc23a8fc9007f9da1 }, // 343
    Multiplier { upper: 0x98ee4a22ecf3188b9028bed2939a635c, lower: 0x144fad2f31d00959682ed96d99ffb14e }, // 344
    Multiplier { upper: 0xf4b0769e47eb5a78e6a797b752909ef9, lower: 0xba1915184fb34228a6b15be28fff8215 }, // 345
    Multiplier { upper: 0xc3c05ee50655e1fa521fac92a873b261, lower: 0x61adaa79d95c34ed52277cb53fff9b44 }, // 346
    Multiplier { upper: 0x9c99e584051181950e7fbd42205c8eb4, lower: 0x4e2488617ab02a5774ec63c43332e29d }, // 347
    Multiplier { upper: 0xfa8fd5a0081c02881732c869cd60e453, lower: 0xb03a73cf2ab376f254ad6c6d1eb7d0fb }, // 348
    Multiplier { upper: 0xc873114cd3499ba0128f06bb0ab3e9dc, lower: 0x8cfb8fd8eef5f8c1dd5789f0e55fda63 }, // 349
    Multiplier { upper: 0xa05c0dd70f6e1619a8726bc8d55cbb16, lower: 0xd72fa647259193ce4aac6e5a51197b82 }, // 350
    Multiplier { upper: 0x8049a4ac0c5811ae205b896d777d6278, lower: 0xac261e9f5141430b6ef0584840e12f9c }, // 351
    Multiplier { upper: 0xcd42a11346f34f7d0092757bf2623727, lower: 0x79d697654eced1abe4b3c0739b01e5c5 }, // 352
    Multiplier { upper: 0xa4354da9058f72ca66db912ff51b5f52, lower: 0xc7dedf843f0bdaefea2966c2e267eb04 }, // 353
    Multiplier { upper: 0x835dd7ba6ad928a1ebe2da8cc415e5db, lower: 0xd318b2d0326fe25988211f024eb988d0 }, // 354
    Multiplier { upper: 0xd22fbf90aaf50dcfdfd15dae06896fc6, lower: 0x1e8deae6b7196a28d9ce9803b128dae7 }, // 355
    Multiplier { upper: 0xa82632da225da4a64ca77e24d2078c9e, lower: 0x7ed7ef1ef8e121ba47d8799c8dba48b9 }, // 356
    Multiplier { upper: 0x8684f57b4eb150850a1f981d74d2d6e5, lower: 0x324658e593e74e2e9fe0614a0afb6d61 }, // 357
    Multiplier { upper: 0xd73b225ee44ee73b4365c02f215157d5, lower: 0x1d3d5b08eca549e433009ba9ab2be234 }, // 358
    Multiplier { upper: 0xac2f4eb2503f1f629c51668c1aa77977, lower: 0x4a977c0723b76e5028cd495488efe82a }, // 359
    Multiplier { upper: 0x89bf722840327f8216a7853ce21f945f, lower: 0x6edf966c1c92bea6870aa1106d8cb9bb }, // 360
    Multiplier { upper: 0xdc65837399ea659cf10c086169cc2098, lower: 0xb165bd79c751310a71aa9b4d7c145c5e }, // 361
    Multiplier { upper: 0xb05135f614bb847d8da339e787d6807a, lower: 0x278497949f74273b8e2215d79676b04b }, // 362
    Multiplier { upper: 0x8d0dc4c4dd62d064714f618606453394, lower: 0xec6a12dd4c5cec2fa4e81179452bc03c }, // 363
    Multiplier { upper: 0xe1afa13afbd14d6d82189c09a3a1ec21, lower: 0x7a43516213c7e04c3b0ce8c208460060 }, // 364
    Multiplier { upper: 0xb48c80fbfca771246813b007b61b234d, lower: 0xfb690de80fd319d695a3ed68069e66b4 }, // 365
    Multiplier { upper: 0x9070672ffd52c0e9ecdc8cd2f815b5d7, lower: 0xfc540b200ca8e17877b657866bb1ebc3 }, // 366
    Multiplier { upper: 0xe71a3eb32eeace4314941484c022bc8c, lower: 0xc6ecde99addb025a5923bf3d791cac6b }, // 367
    Multiplier { upper: 0xb8e1cbc28bef0b68dd43439d66823070, lower: 0x9f23e547be48ceaeadb632979416f056 }, // 368
    Multiplier { upper: 0x93e7d6353cbf3c53e435cfb11ece8d26, lower: 0xe5b6510631d3d88bbe2b5bac7678c045 }, // 369
    Multiplier { upper: 0xeca623886131fa1fd3894c4e97b0e1d7, lower: 0xd5f081a382ec8dac637892ad8a5acd3a }, // 370
    Multiplier { upper: 0xbd51b606b427fb4ca93aa37212f3e7df, lower: 0xde5a014f9bf07156b5fa0ef13b7bd762 }, // 371
    Multiplier { upper: 0x9774919ef68662a3ba954f8e758fecb3, lower: 0x1848010c7cc05aabc4c80bf42f9645e8 }, // 372
    Multiplier { upper: 0xf2541c318a709dd2c42218e3ef4cadeb, lower: 0x5a0cce7a6133c44607a67986b28a0973 }, // 373
    Multiplier { upper: 0xc1dce35ad526e4a89ce813e98c3d57ef, lower: 0x7b3d71fb80f6369e6c852e055ba1a129 }, // 374
    Multiplier { upper: 0x9b171c48aa8583ba17200fee09caacbf, lower: 0x95cac19600c4f87ebd375804494e1a87 }, // 375
    Multiplier { upper: 0xf824fa0ddda26c5cf1cce649a9444798, lower: 0xefaacf5667a18d97952559a07549c40b }, // 376
    Multiplier { upper: 0xc683fb3e4ae856b0c170b83aedd03947, lower: 0x26223f7852e7a479441de14d2aa169a3 }, // 377
    Multiplier { upper: 0x9ecffc31d586abc09ac0936257d9c76c, lower: 0x1e81cc604252e9fa9ce4b43dbbb45482 }, // 378
    Multiplier { upper: 0xfe199382ef3ddf9a91341f03bfc2d8ac, lower: 0xfd9c7a339d51765dc7d45395f9208736 }, // 379
    Multiplier { upper: 0xcb47a9358c317faeda9018cfcc9be08a, lower: 0x647d2e8fb10df84b06437611941a05c5 }, // 380
    Multiplier { upper: 0xa29fba913cf466257ba67a3fd6e31a08, lower: 0x5064253fc0d7f9d59e9c5e74767b37d1 }, // 381
    Multiplier { upper: 0x8219620dca5d1e8462eb94ffdf1c14d3, lower: 0x738350ffcd7994aae549e529f862930e }, // 382
    Multiplier { upper: 0xd0289ce2dd61ca6d6b1287ffcb602152, lower: 0x526bb4cc7bf5baab08763b765a3751af }, // 383
    Multiplier { upper: 0xa686e3e8b11b085788db9fffd5e6810e, lower: 0xa8562a3d2ff7c888d391c92b7b5f748c }, // 384
    Multiplier { upper: 0x8538b653c0e26d12d3e2e66644b8673e, lower: 0xed11bb64265fd3a0a9416dbc62b2c3a4 }, // 385
    Multiplier { upper: 0xd5278a1f9b03e1b7b96b0a3d3ac0a531, lower: 0x7b4f9239d6ffb9010ecf15fa37846c39 }, // 386
    Multiplier { upper: 0xaa86081948cfe7c62def3b642f008427, lower: 0x95d941c7df32fa673f0c1194f936bcfa }, // 387
    Multiplier { upper: 0x886b39add3d9863824bf62b68c0069b9, lower: 0x44adce397f5bfb85cc09a7aa60f8972f }, // 388
    Multiplier { upper: 0xda4529161fc27059d4656abdaccd75f5, lower: 0x3aafb05bfef9926facdc3f77018dbeb1 }, // 389
    Multiplier { upper: 0xae9dba78196859e176b78897bd712b2a, lower: 0x955959e3326141f2f0b032c59ad7cbc1 }, // 390
    Multiplier { upper: 0x8bb161f9aded14b45ef93a12fdf42288, lower: 0x777aae4f5b81018f26f35bd148aca301 }, // 391
    Multiplier { upper: 0xdf82365c497b5453cb285ceb2fed040d, lower: 0x8bf77d4bc59b35b1d7ebc61ba77a9e67 }, // 392
    Multiplier { upper: 0xb2ce91e36dfc43763c204a55bff0d00a, lower: 0xd65f976fd148f7c179896b4952c87eb9 }, // 393
    Multiplier { upper: 0x8f0ba7e924c9cf91c9b36eaafff3d9a2, lower: 0x451945f30dd3f967946def6ddbd39894 }, // 394
    Multiplier { upper: 0xe4df730ea142e5b60f857dde6652f5d0, lower: 0x6e8ed651afb98f0c20afe57c92ec2753 }, // 395
    Multiplier { upper: 0xb71928d88102515e72d1317eb8425e40, lower: 0x5872450e262e0c09b3bfeaca0f2352a9 }, // 396
    Multiplier { upper: 0x927a87139a6841185bda8dfef9ceb1cd, lower: 0x138e9da4eb5809a15c9988a1a5b5dbba }, // 397
    Multiplier { upper: 0xea5da4ec2a406826f95daffe5c7de948, lower: 0x1f4a95d4abc00f689428da9c3c562c5d }, // 398
    Multiplier { upper: 0xbb7e1d89bb66b9b8c77e266516cb2106, lower: 0x7f6ede43bc99a5ed4353e21696ab56b1 }, // 399
    Multiplier { upper: 0x95fe7e07c91efafa3931b850df08e738, lower: 0x65f24b6963ae1e57690fe8121222abc1 }, // 400
    Multiplier { upper: 0xeffd9672db64c4c38eb5f3b4980e3ec0, lower: 0xa31d45756c49ca2574e6401ce9d112ce }, // 401
    Multiplier { upper: 0xbffe11f57c509d693ef7f62a133e989a, lower: 0x1c176ac456a16e845d85001721740f0b }, // 402
    Multiplier { upper: 0x99980e5dfd0d4aba98c65e880f6546e1, lower: 0xb012bbd0454df2037e0400128129a5a3 }, // 403
    Multiplier { upper: 0xf5c016fcc815445dc13d640ce56ed7cf, lower: 0x801df94d3bafe99f3006668401dc3c37 }, // 404
    Multiplier { upper: 0xc499abfd6cddd04b00fde9a3eabf130c, lower: 0x667e610a9626547f599eb8699b169693 }, // 405
    Multiplier { upper: 0x9d47bccabd7e403c00cb214feeff4270, lower: 0x51feb408781ea9ff7ae560547c12120f }, // 406
    Multiplier { upper: 0xfba5faddfbfd33933478354cb1986a4d, lower: 0x4ffdecda59caa998c4a233ba601ce9b2 }, // 407
    Multiplier { upper: 0xc951957e6330f60f5d2cf7708e13883d, lower: 0xd997f0aeae3bbae09d4e8fc84ce3ee28 }, // 408
    Multiplier { upper: 0xa10e1131e8f3f80c4a8a5f8d3e760697, lower: 0xe1465a25582fc8b3b10ba639d71cbe86 }, // 409
    Multiplier { upper: 0x80d80dc18729933d086eb2d7652b3879, lower: 0x810514eaacf306f6273c84fb127d6538 }, // 410
    Multiplier { upper: 0xce267c68d842852e73e45158a1dec0c2, lower: 0x680821777b1e7189d860d4c4ea623b8d }, // 411
    Multiplier { upper: 0xa4eb96ba469b9dbec31d0de0817f009b, lower: 0x866ce792c8e527a179e7109d884e960b }, // 412
    Multiplier { upper: 0x83efabc8387c7e3235b0d7e6cdff33af, lower: 0x9ebd860f071db94dfb1f407e06a544d5 }, // 413
    Multiplier { upper: 0xd31912d9f3fa6383891af30ae331ec4c, lower: 0x312f3ce4d82f8ee32b6533fcd76ed488 }, // 414
    Multiplier { upper: 0xa8e0dbe18ffb82cfa0e25c08b5c189d6, lower: 0x8dbf63ea468c724f55ea8ffd792576d3 }, // 415
    Multiplier { upper: 0x871a49813ffc68a61a4eb006f7ce07de, lower: 0xd7cc4fee9ed6c1d9118873312db79243 }, // 416
    Multiplier { upper: 0xd82a0f35332d743cf6e44cd7f2e33fca, lower: 0xf2e07fe431579c8e8273eb81e2bf506b }, // 417
    Multiplier { upper: 0xacee7290f5bdf6972be9d71328b5cca2, lower: 0x5be6ccb68ddfb07201f656018232a6bc }, // 418
    Multiplier { upper: 0x8a585ba72afe5edf5654ac0f53c4a3b5, lower: 0x16523d5ed7e626c19b2b780134f55230 }, // 419
    Multiplier { upper: 0xdd5a2c3eab3097cbbd54467eec6dd2bb, lower: 0x56e9fbcaf309d79c2b78c001ee55504c }, // 420
    Multiplier { upper: 0xb114f032228d463c97769ecbf057dbc9, lower: 0x1254c96f28d4ac7cef93ccce5844403d }, // 421
    Multiplier { upper: 0x8daa59c1b53dd1ca12c54bd659dfe307, lower: 0x41dd6df2871089fd8c763d71e03699cb }, // 422
    Multiplier { upper: 0xe2aa2935eec94fa9b7a212f08fcc9e72, lower: 0x02fbe31da4e7432f4723958300575c77 }, // 423
    Multiplier { upper: 0xb554edc4bf0772ee2c81a8c0730a185b, lower: 0x35964f4aea529c25d282de0266ac49f9 }, // 424
    Multiplier { upper: 0x9110be36ff3928be8a0153cd28d4e048, lower: 0xf7ab72a2550ee35175357e6852236e61 }, // 425
    Multiplier { upper: 0xe81ac9f1985b746410021faea7bb0074, lower: 0xbf78b76a21b16bb58855970d5038b09b }, // 426
    Multiplier { upper: 0xb9af07f479e2c3834001b2f21fc8cd2a, lower: 0x32c6f921b48defc46d1145a4402d5a16 }, // 427
    Multiplier { upper: 0x948c065d2e4f02cf6667c25b4ca0a421, lower: 0xc238c74e2a0b2636bda76ae9ccf114de }, // 428
    Multiplier { upper: 0xedacd6fb7d4b37b23d72d092143439cf, lower: 0x9d27a549dcdea38ac90bde42e181bafd }, // 429
    Multiplier { upper: 0xbe23df2f976f5fc1cac24074dcf694a6, lower: 0x1752eaa17d7ee93bd4097e9be79afbfe }, // 430
    Multiplier { upper: 0x981cb28c7925e634a235005d7d921084, lower: 0xdf7588813132542fdcd4654986159665 }, // 431
    Multiplier { upper: 0xf3611dad8ea309edd054cd6262834da1, lower: 0x6588da684eb6ed196153d54270228a3a }, // 432
    Multiplier { upper: 0xc2b417be0bb5a18b0d10a44eb535d7b4, lower: 0x513a4853722bf0e11aa9776859b53b62 }, // 433
    Multiplier { upper: 0x9bc34631a2f7b46f3da6e9d890f7dfc3, lower: 0x742ea042c1bcc0b415545f86ae2a95e8 }, // 434
    Multiplier { upper: 0xf938704f6b25ed7ec90b0fc0e7f2ff9f, lower: 0x204a9a04692e0120222098d77d10efd9 }, // 435
    Multiplier { upper: 0xc76059d92284bdff073c0c9a5328cc7f, lower: 0x4d087b36ba8b3419b4e6e0ac640d8cae }, // 436
    Multiplier { upper: 0x9f8047e0e86a3198d296707b75ba3d32, lower: 0xa406c8f8953c29ae2a524d56b6713d58 }, // 437
    Multiplier { upper: 0xff33a634a7104f5aea8a4d9255f6c851, lower: 0x0671418dbb9375e376ea15578a4ec88c }, // 438
    Multiplier { upper: 0xcc2951c3b8d9d915886ea475119239da, lower: 0x6b8dce0afc75f7e92bee77793b723a0a }, // 439
    Multiplier { upper: 0xa354416960ae47446d25505da7a82e48, lower: 0x560b0b3bfd2b2cba898b92c762c1c808 }, // 440
    Multiplier { upper: 0x82a9cdede6f1d29d241dd9e486202506, lower: 0xab3c08fcca88f0953ad60f05e89b066d }, // 441
    Multiplier { upper: 0xd10fafe30b1c842ea02fc3073d003b3d, lower: 0xdec674c7aa74b421f7bce4d640f80a48 }, // 442
    Multiplier { upper: 0xa73fbfe8d5b069bee68c9c05ca6695cb, lower: 0x189ec3d2eec3c34e5fca50ab672cd506 }, // 443
    Multiplier { upper: 0x85cc99871159ee32520a166b0852116f, lower: 0x46e569758bcfcf71e63b73bc528a4405 }, // 444
    Multiplier { upper: 0xd61428d81bc316b6e9a9bd780d501be5, lower: 0x3e3bdbef46194be9705f1f93b743a008 }, // 445
    Multiplier { upper: 0xab4353e01635abc587bafdf9a4401650, lower: 0xfe96498c38143cbac04c1942f902e66d }, // 446
    Multiplier { upper: 0x8902a98011c4896ad2fbfe615033450d, lower: 0x98783ad6934363c899d67a9bfa68b857 }, // 447
    Multiplier { upper: 0xdb377599b607424484c663cee6b86e7c, lower: 0x2726c48a85389fa75c8a5dc65d745a25 }, // 448
    Multiplier { upper: 0xaf5f9147c4d29b6a03d1e972522d2530, lower: 0x1f5236d537607fb916d517d1e45d14ea }, // 449
    Multiplier { upper: 0x8c4c74396a4215ee6974bac1db5750f3, lower: 0x4c41c5775f80662dabddaca7e9e410bc }, // 450
    Multiplier { upper: 0xe07a538f1069bcb0a8bac4695ef21b1e, lower: 0xe0693bf2326709e2ac95e10ca96ce792 }, // 451
    Multiplier { upper: 0xb3950fa5a6bafd5a209569ede58e7c18, lower: 0xb387632828526e4ef077e73d54571fa8 }, // 452
    Multiplier { upper: 0x8faa72eaebc8caae807787f18471fce0, lower: 0x8f9f828686a8583f26c6529776ac1954 }, // 453
    Multiplier { upper: 0xe5dd84ab12dadde400bf3fe8d3e9949a, lower: 0x7f659da40aa6f3983e0a1dbf24468eec }, // 454
    Multiplier { upper: 0xb7e46a22757be4b666ff6653dcbadd48, lower: 0x65eae4833bb8c2e031a1b165b69ed8bd }, // 455
    Multiplier { upper: 0x931d21b52ac983c51f32b84316fbe439, lower: 0xeb225068fc93cf19c14e27849218ad64 }, // 456
    Multiplier { upper: 0xeb61cf8844759fa1cb845a04f19306c3, lower: 0x11d080a7fa8618293549d8d41cf4489f }, // 457
    Multiplier { upper: 0xbc4e3fa036c47fb4a2d04803f4759f02, lower: 0x74a6cd532ed1acedc43b13dce3f6a080 }, // 458
    Multiplier { upper: 0x96a4ffb35f03995d4f0d0669905e18ce, lower: 0xc3b8a4428bdaf0be3695a97d832bb399 }, // 459
    Multiplier { upper: 0xf107ff8564d28efbb1ae70a8e6fcf47e, lower: 0x05f43a0412f7e796bdbc42626b791f5c }, // 460
    Multiplier { upper: 0xc0d332d11d753f2fc1585a20b8ca5d31, lower: 0x9e5cfb3675931fabcafd01e855fa7f7d }, // 461
    Multiplier { upper: 0x9a428f0db12a98f301137b4d60a1e427, lower: 0xb1e3fc2b91427fbca2640186ab2ecc64 }, // 462
    Multiplier { upper: 0xf6d0e4e2b510f4b801b8c5489a9ca03f, lower: 0x83066045b53732c76a399c0aab7e13d2 }, // 463
    Multiplier { upper: 0xc573ea4ef740c3c667c7043a154a19cc, lower: 0x68d1e69e2a928f05ee947cd555fe7642 }, // 464
    Multiplier { upper: 0x9df6550bf9009c9eb96c0361aaa1ae3d, lower: 0x20a7ebb1bba8726b2543971111985e9b }, // 465
    Multiplier { upper: 0xfcbd54dff4cdc7645be005691102b061, lower: 0xcdd9791c5f73ea45086c24e81c26fdc5 }, // 466
    Multiplier { upper: 0xca3110b32a3e391d164cd120da688d1b, lower: 0x0b1460e37f8fee9da05683ece352649e }, // 467
    Multiplier { upper: 0xa1c0da28ee982db0dea3da80aeba0a7c, lower: 0x08dd1a4f993ff217b378698a4f751d4b }, // 468
    Multiplier { upper: 0x816714ed8bacf15a4bb64866f22e6ec9, lower: 0xa0b0e1d947665b46292d213b72c4176f }, // 469
    Multiplier { upper: 0xcf0b54af45e1822a12bd40a4b6b0b142, lower: 0x9ab49c8ed8a3c53d0eae9b925139bf18 }, // 470
    Multiplier { upper: 0xa5a2aa25d18134ee756433b6f88d5a9b, lower: 0xaef6e3a57a1c9dca72254941da9498e0 }, // 471
    Multiplier { upper: 0x848221b7dacdc3f1f7835c9260711549, lower: 0x58c582eac816e4a1f4eaa1017baa13e7 }, // 472
    Multiplier { upper: 0xd40369262ae2d31cbf38941d671b5542, lower: 0x27a26b114024a103217768025f76863e }, // 473
    Multiplier { upper: 0xa99c541e88b575b098fa101785af7768, lower: 0x1fb52274335080cf4df92001e5f86b65 }, // 474
    Multiplier { upper: 0x87b0434ba0912af3ad94d9ac6af2c5ec, lower: 0xe62a81f68f739a3f7194199b1e6055ea }, // 475
    Multiplier { upper: 0xd91a0545cdb51185e287c2ad77ead647, lower: 0xd6aa698a7f1f5d324f535c2b63cd5643 }, // 476
    Multiplier { upper: 0xadae6a9e3e2a746b1b9fcef12cbbde9f, lower: 0xdeeebad5327f7dc1d90f7cef830aab69 }, // 477
    Multiplier { upper: 0x8af1eee4fe885d227c7fd8c0f0964bb3, lower: 0x18befbddc1ff97ce473f9726026eef87 }, // 478
    Multiplier { upper: 0xde4fe4a197409503fa66279b1a8a12b8, lower: 0x2797f962cfff594a0b98f1d66a4b18d8 }, // 479
    Multiplier { upper: 0xb1d983b47900773661eb52e27ba1a893, lower: 0x52dffab57332add4d613f4ab883c13e0 }, // 480
    Multiplier { upper: 0x8e479c9060cd2c2b81890f1b961aed42, lower: 0xa8b32ef78f5bbe43de765d560696764d }, // 481
    Multiplier { upper: 0xe3a5c74d67aead1268db4b5f56917b9d, lower: 0xdab84b25b22c639fca56fbbcd75723ae }, // 482
    Multiplier { upper: 0xb61e390ab9588a7520af6f7f787462e4, lower: 0xaef9d5b7c1bd1c7fd51262fd791282f2 }, // 483
    Multiplier { upper: 0x91b1c73bc77a085db3bf8c65f9f6b583, lower: 0xbf2e4493016416ccaa751bfdfa75358f }, // 484
    Multiplier { upper: 0xe91c71f93f29a6fc52cc13d65cbdef39, lower: 0x31e3a0eb356cf1477721c6632a55227d }, // 485
    Multiplier { upper: 0xba7d27fa98ee1f30423cdcab7d64bf60, lower: 0xf4b61a55c457276c5f4e384f5510e864 }, // 486
    Multiplier { upper: 0x9530ecc87a5818f36830b089311d65e7, lower: 0x2a2b48449d1285f04c3e9372aa73ed1d }, // 487
    Multiplier { upper: 0xeeb4ae0d908cf4b8a6b44da84e956fd8, lower: 0x437873a0fb50d64d46ca858443ecae95 }, // 488
    Multiplier { upper: 0xbef6f1a473a3f6fa1ef6a486a5445979, lower: 0xcf938fb3fc40ab71056ed1369cbd5877 }, // 489
    Multiplier { upper: 0x98c58e1d294ff8c818c5506bb769e12e, lower: 0x3fa93fc33033bc5a6abf0dc54a311393 }, // 490
    Multiplier { upper: 0xf46f49c842198e0cf46ee712bf0fceb0, lower: 0x65db99384d1f93c3ddfe7c6edd1b5284 }, // 491
    Multiplier { upper: 0xc38c3b069b47a4d729f2527565a63ef3, lower: 0x84afadc6a419430317fec9f24a7c4203 }, // 492
    Multiplier { upper: 0x9c702f387c3950ac218ea85deaeb658f, lower: 0x9d5957d21ce10268dfff07f508636803 }, // 493
    Multiplier { upper: 0xfa4d185a605bb4469c1773c977df08e5, lower: 0xc88ef2e9c7ce6a416664d9880d6bd99e }, // 494
    Multiplier { upper: 0xc83dad1519e2f69ee345f63ac64c071e, lower: 0x3a0bf587d30b883451ea47a00abcae18 }, // 495
    Multiplier { upper: 0xa031574414b59218b5d191c89ea338e4, lower: 0xfb3cc46ca8d606904188394cd563be7a }, // 496
    Multiplier { upper: 0x8027790343c474e0917474a07ee8fa50, lower: 0xc8fd69f087119ed9ce06943d7782fec8 }, // 497
    Multiplier { upper: 0xcd0bf4d2060721674f20ba9a64a7f6e7, lower: 0xa7fbdcb40b4f648fb00a86c8bf37fe0c }, // 498
    Multiplier { upper: 0xa40990a804d2811f7280954850865f1f, lower: 0xb9964a29a2a5ea0c8cd538a098f9980a }, // 499
    Multiplier { upper: 0x833ada2003db9a7f8ecd4439da0518e6, lower: 0x2e11d4ee1bb7ee7070aa93b3ad9479a2 }, // 500
    Multiplier { upper: 0xd1f7c3666c9290cc17aed38fc33b5b09, lower: 0xe34fbb1692bfe3e71aaa85ec48ed8f69 }, // 501
    Multiplier { upper: 0xa7f9691ebd420d7012f242d968fc48d4, lower: 0xb5d9627875664fec155537f03a57a5ed }, // 502
    Multiplier { upper: 0x866120e56434d78cdbf5024787303a43, lower: 0xc4ade8605deb732344442cc02eac84be }, // 503
    Multiplier { upper: 0xd701ce3bd387bf47c654d07271e6c39f, lower: 0xa116409a2fdf1e9ed3a04799e4473ac9 }, // 504
    Multiplier { upper: 0xac0171c97606329fd1dd738ec185694c, lower: 0x80de9a14f318e54bdc803947e9d2956e }, // 505
    Multiplier { upper: 0x899ac16df804f54ca7e45c72346abaa3, lower: 0x9a4bae7728e0b76fe399c76cbb0eddf2 }, // 506
    Multiplier { upper: 0xdc2acf1659a1887aa63a2d8387112a9f, lower: 0x5d45e3f1db01257fd28fa57ac4e4964f }, // 507
    Multiplier { upper: 0xb0223f45148139fbb82e8acf9f40eee5, lower: 0xe437e98e48cdb799753fb7956a50783f }, // 508
    Multiplier { upper: 0x8ce8329daa00fb2fc68ba23fb29a58b7, lower: 0xe9c65471d3d7c6145dcc92ddeea6c699 }, // 509
    Multiplier { upper: 0xe173842f7667f84c70df69ff842a278c, lower: 0xa93d53e952f2d686fc7a84964aa470f5 }, // 510
    Multiplier { upper: 0xb45c69bf91ecc6a38d7f87ff9cee860a, lower: 0x20fddcbaa8c24538c9fb9d4508838d91 }, // 511
    Multiplier { upper: 0x9049ee32db23d21c7132d332e3f204d4, lower: 0xe7317d62209b6a93d4c94a9da0693e0d }, // 512
    Multiplier { upper: 0xe6dcb0515e9fb693e85151eb065007bb, lower: 0x0b8262369a92441fbadbaa95cd753015 }, // 513
    Multiplier { upper: 0xb8b08d0de54c920fed0ddb226b733962, lower: 0x6f9b81c54875034c957c8877d790f344 }, // 514
    Multiplier { upper: 0x93c070d7eaa3a80cbda4af4ebc5c2de8, lower: 0x5949349dd390cf707796d39312da5c37 }, // 515
    Multiplier { upper: 0xec671af31105d9adfc3ab21793c6afda, lower: 0x287520fc85b47f1a58f15284eaf6f9f1 }, // 516
    Multiplier { upper: 0xbd1f48c27404ae24c9c88e794305597b, lower: 0x5390e7306af6cc1513f44203ef2bfb27 }, // 517
    Multiplier { upper: 0x974c3a35299d581d6e3a0b94359de12f, lower: 0x760d85c055923cdda99034cff28995b9 }, // 518
    Multiplier { upper: 0xf21390550f6226957d29ac2055c9684b, lower: 0xf015a2cd55b6c7c90f4d214cb7428928 }, // 519
    Multiplier { upper: 0xc1a940440c4e85446421568044a1203c, lower: 0xc0114f0aaaf89fd40c3db43d5f686dba }, // 520
    Multiplier { upper: 0x9aedcd033d0b9dd0501aab99d080e697, lower: 0x000dd8d55593b31009caf6977f86be2e }, // 521
    Multiplier { upper: 0xf7e2e19ec812961a19c445c2e734a424, lower: 0xcce2f48888ec51b342de5758cc0ac9e3 }, // 522
    Multiplier { upper: 0xc64f1ae56cdbab48149d049bec2a1cea, lower: 0x3d825d3a0723748f68b1df7a3cd56e4f }, // 523
    Multiplier { upper: 0x9ea5af1df0afbc39aa1736e32354e3ee, lower: 0x979b7dc805b5f6d9208e4c61ca445840 }, // 524
    Multiplier { upper: 0xfdd5e4fcb44c605c435857d1d2216cb0, lower: 0xf29262d9a2bcbe283416e09c76d3c066 }, // 525
    Multiplier { upper: 0xcb1183fd5d09e6b035e0464174e78a27, lower: 0x28751be14efd64ecf678b3b05f0fcd1e }, // 526
    Multiplier { upper: 0xa27469977da18559c4b36b6790b93b52, lower: 0x86c4164dd8cab723f8608fc04c0ca418 }, // 527
    Multiplier { upper: 0x81f6badf97b46aae36f5ef860d60fc42, lower: 0x0569ab717a3bc5b6604d3fcd09a3b67a }, // 528
    Multiplier { upper: 0xcff12aff5920aab057efe5a3489b2d36, lower: 0x6f0f78b5905fa2bd66e1ffae75d2bd8f }, // 529
    Multiplier { upper: 0xa65a88cc474d5559dff31e1c3a15bdc5, lower: 0x25a5fa2ad9e61bcab8b4cc8b91756473 }, // 530
    Multiplier { upper: 0x85153a3d05d7777b198f4b49c811649d, lower: 0xb7b7fb557b1e7ca22d5d706fa7911d29 }, // 531
    Multiplier { upper: 0xd4eec394d6258bf828e54542d9b56dc9, lower: 0x25f32bbbf830c769e22f1a4c3f4e950e }, // 532
    Multiplier { upper: 0xaa589c7711b7a32ced843768ae2abe3a, lower: 0x84c289632cf3d2bb1b58e1d6990baa72 }, // 533
    Multiplier { upper: 0x8846e3927492e8f0be035f86f1bbcb62, lower: 0x03ced44f572975627c471b1214095528 }, // 534
    Multiplier { upper: 0xda0b05b720eb0e4dfcd2327182c61236, lower: 0x6c7e207ef1dbef03fa0b5e83534221d9 }, // 535
    Multiplier { upper: 0xae6f37c5b3ef3ea4ca41c1f4689e74f8, lower: 0x56cb4d325b1658cffb3c4b9c429b4e47 }, // 536
    Multiplier { upper: 0x8b8c2c9e298c321d6e9b019053b1f72d, lower: 0x123c3dc1e278470cc8fd0949cee2a506 }, // 537
    Multiplier { upper: 0xdf46adc9dc1383624a919c1a1f832514, lower: 0xe9f9fc696a5a0b47a7fb420fb16aa1a3 }, // 538
    Multiplier { upper: 0xb29ef16e49a935e83ba7b014e6028410, lower: 0xbb2e6387884809061ffc34d95abbb482 }, // 539
    Multiplier { upper: 0x8ee58df1d4875e5362ec8cdd84ced00d, lower: 0x628b82d2d36cd404e6635d7aaefc9068 }, // 540
    Multiplier { upper: 0xe4a27cb620d896ebd17a7afc07b14ce2, lower: 0x37459e1e1f14866e3d6bc8c44b2db3da }, // 541
    Multiplier { upper: 0xb6e863c4e713abefdac86263395aa3e8, lower: 0x2c37b1b1b276d1f1cabca09d08f15cae }, // 542
    Multiplier { upper: 0x92538303ec0fbcbfe239e84f61154fec, lower: 0xf02c8e27c1f8a7f4a230807da0c116f2 }, // 543
    Multiplier { upper: 0xea1f3806467f946636c30d4bce887fe1, lower: 0x804749d9365aa65436b400c90134f183 }, // 544
    Multiplier { upper: 0xbb4c2cd1d1ffa9eb5f0271097206ccb4, lower: 0x669f6e475eaeeb7692299a3a675d8e02 }, // 545
    Multiplier { upper: 0x95d68a4174cc87ef7f35273ac19f0a29, lower: 0xebb2be9f7ef255f874ee14fb85e4719c }, // 546
    Multiplier { upper: 0xefbdaa02547a7318cb883ec468fe76a9, lower: 0x791dfdcbfe50898d87e354c5a3071c2c }, // 547
    Multiplier { upper: 0xbfcaee68439528e0a2d36569ed985eed, lower: 0xfa7e64a331da07a46cb5dd6ae8d27cf0 }, // 548
    Multiplier { upper: 0x996f25203610ed808242b787f146b257, lower: 0xfb9850828e48061d23c4b12253db9726 }, // 549
    Multiplier { upper: 0xf57ea1cd234e48cd9d378c0cb53dea26, lower: 0x5f5a1a6a7d4009c8393ab503b95f583d }, // 550
    Multiplier { upper: 0xc4654e3db5d83a3e175fa33d5dcb21b8, lower: 0x4c481521fdccd4a02dc890cfc77f79cb }, // 551
    Multiplier { upper: 0x9d1dd8315e4694fe79194f644b08e7c6, lower: 0xa36cddb4cb0a43b357d3a70c9f992e3c }, // 552
    Multiplier { upper: 0xfb62f3823070ee63f4f54bd3ab4172d7, lower: 0x6be162bade76d2b88c85d814328eb05f }, // 553
    Multiplier { upper: 0xc91bf601c05a584ff72aa30fbc345bdf, lower: 0x89811bc8b1f8a893a39e46768ed88d19 }, // 554
    Multiplier { upper: 0xa0e32b3499e1e03ff8eee8d9635d164c, lower: 0x6e00e306f4c6ed42e94b6b920be070e1 }, // 555
    Multiplier { upper: 0x80b5bc2a14b4b36660bf20ade9174509, lower: 0xf19a4f38c3d25768baa2bc74d64d271b }, // 556
    Multiplier { upper: 0xcdef9376878785709acb677ca8253b43, lower: 0x1c2a185ad2ea25745dd12d87bd483e91 }, // 557
    Multiplier { upper: 0xa4bfa92b9f9f9df3af091f96ecea95cf, lower: 0x49bb46af0f21b7904b0dbe0631069874 }, // 558
    Multiplier { upper: 0x83cc8756194c7e5c8c074c78bd8877d9, lower: 0x07c90558d8e7c60d08d7cb38273879f6 }, // 559
    Multiplier { upper: 0xd2e0d889c213fd60e00bad8dfc0d8c8e, lower: 0x72db3bc15b0c7014daf2dec03ec0c323 }, // 560
    Multiplier { upper: 0xa8b3e06e34dccab3e66fbe0b300ad6d8, lower: 0x5be2963448d6c010af28b23365670283 }, // 561
    Multiplier { upper: 0x86f64d24f717088feb8c9808f33bdf13, lower: 0x7cb544f6a0abccda25ba28291dec0202 }, // 562
    Multiplier { upper: 0xd7f07b6e5824da7fdf4759a7eb92fe85, lower: 0x94553b24344614903c5d0d0e9646699d }, // 563
    Multiplier { upper: 0xacc062beacea48664c391486560f3204, lower: 0x76aa95b690381073637da40bab6b87b1 }, // 564
    Multiplier { upper: 0x8a33823223eea051d694106b780c2803, lower: 0x9222115ed9c6738f82cae9a2ef89395b }, // 565
    Multiplier { upper: 0xdd1f36b69fe433b624201a458ce04005, lower: 0xb69ce897c2d71f4c0477dc37e5a85bc4 }, // 566
    Multiplier { upper: 0xb0e5c55ee650295e834ce1d13d803337, lower: 0xc54a53ac9bdf4c3cd05fe35feaed1636 }, // 567
    Multiplier { upper: 0x8d849de5850cede535d71b0dcaccf5c6, lower: 0x376ea956e31909ca404cb5e6558a782c }, // 568
    Multiplier { upper: 0xe26dc96f3b47e3085624f8161147efa3, lower: 0x8be442249e8e761066e1230a227726ac }, // 569
    Multiplier { upper: 0xb524a125c9064f39de83f9ab4106594f, lower: 0xa31d01b6e53ec4d9ebe74f3b4ec5b889 }, // 570
    Multiplier { upper: 0x90ea1a84a0d1d8fb1869948900d1e10c, lower: 0x827d9af8b7656a47efec3f62a56afa08 }, // 571
    Multiplier { upper: 0xe7dcf73a9ae95b2b5a4287419ae96814, lower: 0x03fc2b278bd576d97fe0656aa244c33f }, // 572
    Multiplier { upper: 0xb97d929548baaf55e1ced29ae2545343, lower: 0x366355b93caac57accb384554e9d68ff }, // 573
    Multiplier { upper: 0x946475443a2ef2ab1b0bdbaf1b76a902, lower: 0x91e91160fd556ac8a3c2d0443ee45400 }, // 574
    Multiplier { upper: 0xed6d886d29e4b7782b462c4b5f24419d, lower: 0xb641b567fbbbde0dd2d14d39fe3a1fff }, // 575
    Multiplier { upper: 0xbdf139f0ee5092c68904f03c4c1d014a, lower: 0xf834911ffc964b3e42410a94cb61b333 }, // 576
    Multiplier { upper: 0x97f42e5a5840756ba0d0c0303ce40108, lower: 0xc690741996dea2983500d543d5e7c28f }, // 577
    Multiplier { upper: 0xf3204a2a26cd88ac34813380616cce74, lower: 0x70e72028f1643759ee67bb9fbca60418 }, // 578
    Multiplier { upper: 0xc2803b54ebd7a089c39a8f99e78a3ec3, lower: 0x8d85b353f4502c47f1ec961963b80346 }, // 579
    Multiplier { upper: 0x9b99c910bcac806e36153fae52d4ff02, lower: 0xd79e290ff6a689d327f078144fc66905 }, // 580
    Multiplier { upper: 0xf8f60e812de0cd7d235532b08487fe6a, lower: 0xf296a8198aa40fb83fe72686e60a41a1 }, // 581
    Multiplier { upper: 0xc72b3ecdbe4d7130e910f55a039ffebb, lower: 0xf5455347a21cd960331f520584d5014e }, // 582
    Multiplier { upper: 0x9f55cbd7cb71275a540d9114cfb3322f, lower: 0xf76aa9061b4a478028e5db379d77343f }, // 583
    Multiplier { upper: 0xfeefac8c78b50bc3b9af4e87b2b8504c, lower: 0xbf110e702baa0c00416fc525c8beb9fd }, // 584
    Multiplier { upper: 0xcbf2f0706090d6362e25d86c8ef9d9d6, lower: 0xff40d859bc880999cdf3041e3a322e64 }, // 585
    Multiplier { upper: 0xa328c059e6da44f824eb138a0bfb14ab, lower: 0xff67137afd39a147d7f59ce4fb5b5850 }, // 586
    Multiplier { upper: 0x82870047ebe1d0c683ef42d4d66276ef, lower: 0xff85a92f30fae76cacc47d83fc491374 }, // 587
    Multiplier { upper: 0xd0d800731302e7a4064b9e215703f17f, lower: 0xff3c41e51b2b0be1146d959ffa0e8586 }, // 588
    Multiplier { upper: 0xa713338f4268b95005094b4ddf365acc, lower: 0xcc3034b748ef3cb41057aae661a5379e }, // 589
    Multiplier { upper: 0x85a8f60c3520944004076f717f5eaf0a, lower: 0x3cf35d5f6d8c30900d12ef1eb4842c7f }, // 590
    Multiplier { upper: 0xd5db2346bb675399a00be58265644b43, lower: 0x94b895657c1380e67b517e978739e0ca }, // 591
    Multiplier { upper: 0xab15b5d22f85dc7ae66feaceb7836f69, lower: 0x43c6ddeac9a933eb95dacbac6c2e4d6f }, // 592
    Multiplier { upper: 0x88de2b0e8c6b16c8b85988a55f9c5921, lower: 0x03057e556e20f656117bd62389bea459 }, // 593
    Multiplier { upper: 0xdafd11b0e0ab57a78d5c0dd565c6f501, lower: 0x9e6f3088b034bd56825fbd05a93106f4 }, // 594
    Multiplier { upper: 0xaf30daf3e6ef7952d77cd7ddeb0590ce, lower: 0x1858f3a08cf6fddeceb2fd9e20f40590 }, // 595
    Multiplier { upper: 0x8c27158febf2c7757930acb188d140a4, lower: 0xe047294d3d9264b23ef597b1b3f66ada }, // 596
    Multiplier { upper: 0xe03e88e646513f225b81144f414ecdd4, lower: 0x9a0b75486283d45064bc25e91ff0aaf6 }, // 597
    Multiplier { upper: 0xb3653a51d1da98e84934103f67723e43, lower: 0xae6f9106b536437383c9b7edb326ef2b }, // 598
    Multiplier { upper: 0x8f842ea7db1547203a900cff85f4fe9c, lower: 0x8b8c74055dc502c2cfd493248f5258ef }, // 599
    Multiplier { upper: 0xe5a04aa62b553e99f74ce198d654ca94, lower: 0x127a533bc93b379e19541ea0e5508e4b }, // 600
    Multiplier { upper: 0xb7b36eeb55ddcbae5f70b47a4510a210, lower: 0x0ec842963a95c61814434bb3eaa6d83c }, // 601
    Multiplier { upper: 0x92f5f255de4b09584c5a29fb6a73b4d9, lower: 0xa56d0211c877d1acdd02a2f655524697 }, // 602
    Multiplier { upper: 0xeb231d5630780ef3ad5d0ff8aa52baf5, lower: 0xd57b3682da594f7afb376b23bbb6d758 }, // 603
    Multiplier { upper: 0xbc1c177826c6725c8ab0d993bb75625e, lower: 0x44629202484772c8c8f92282fc9245e0 }, // 604
    Multiplier { upper: 0x967cdf9352385b7d3bc0ae0fc92ab518, lower: 0x36b5419b6d05f56d6d941b9bfd41d180 }, // 605
    Multiplier { upper: 0xf0c7cc1ee9f3c5952c677ce60eaabb59, lower: 0xf1220292480988af15b9c5c66202e8cc }, // 606
    Multiplier { upper: 0xc09fd67f218fd1442385fd84d88895e1, lower: 0x8db4cedb6cd46d58de2e37d1e80253d7 }, // 607
    Multiplier { upper: 0x9a197865b4730dd01c6b313713a077e7, lower: 0xa490a57c5710577a4b582ca7eccea979 }, // 608
    Multiplier { upper: 0xf68f270920b81619c711e8581f67263f, lower: 0x6db43bfa24e6f25d4559e10cae17758e }, // 609
    Multiplier { upper: 0xc53f526db3c678149f4186ace5ec1e99, lower: 0x24902ffb50b8c1e4377b1a708b45f7a5 }, // 610
    Multiplier { upper: 0x9dcc41f15c9ec676e5ce05571e567ee0, lower: 0xea0cf32f73c701835f95aec06f6b2c84 }, // 611
    Multiplier { upper: 0xfc7a031bc76470be3c7cd558308a649b, lower: 0x1014b84bec719c0565bc4acd7f11e0d3 }, // 612
    Multiplier { upper: 0xc9fb35afd2b6c0983063dde026d51d48, lower: 0xd9aa2d0989f47cd11e303bd798db1a42 }, // 613
    Multiplier { upper: 0xa195c48ca89233acf38317e685774aa0, lower: 0xae21bda13b29fd741826964613e27b68 }, // 614
    Multiplier { upper: 0x81449d3d53a829572935acb86ac5d54d, lower: 0x581afe1a95bb3129acebab6b431b95ed }, // 615
    Multiplier { upper: 0xced42ec885d9dbbea855e127113c887b, lower: 0xc02b302a892b81dc47df78ab9e92897b }, // 616
    Multiplier { upper: 0xa5768bd39e47e2feed1180ec0dca06c9, lower: 0x6688f3553a8934b0397f93bc7edba12f }, // 617
    Multiplier { upper: 0x845ed642e5064f32574133f00b08056d, lower: 0xeba0c2aa953a908cfacc7630657c80f3 }, // 618
    Multiplier { upper: 0xd3caf06b080a18508b9b864cde733be3, lower: 0x129ad110eec41a7b2ae0bd1a3bfa67ea }, // 619
    Multiplier { upper: 0xa96f26bc066e79da0949383d7ec2964f, lower: 0x4215740d8bd0152f558097482ffb8655 }, // 620
    Multiplier { upper: 0x878c1efcd1f1fb14d43a93646568783f, lower: 0x681129a46fd9aa8c4466df6cf32f9eab }, // 621
    Multiplier { upper: 0xd8e03194831cc4ee205db8a0a240c065, lower: 0x734ea907195c4413a0a498ae51e5caaa }, // 622
    Multiplier { upper: 0xad8027aa027d6a5819e493b3b50099ea, lower: 0xc2a55405ade369a94d507a250e516eef }, // 623
    Multiplier { upper: 0x8accec8801fdeeace183a95c90cd47ef, lower: 0x021ddcd157e921543dd9fb50d841258c }, // 624
    Multiplier { upper: 0xde14ada669964aae359f7560e7aed97e, lower: 0x69c9614ef30e9bb9fc8ff8815a01d5ad }, // 625
    Multiplier { upper: 0xb1aa24852145088b5e192ab3ec8be131, lower: 0xee3ab43f28d87c94ca0cc6cde19b1157 }, // 626
    Multiplier { upper: 0x8e21b6d0e76a6d3c4b47555cbd3cb427, lower: 0xf1c89032871396dd6e709f0b1ae27446 }, // 627
    Multiplier { upper: 0xe36924817243e1fa120bbbc7952ded0c, lower: 0xb60db3840b528afbe3e764de916a53a2 }, // 628
    Multiplier { upper: 0xb5edb6cdf5031b2e74d62fd2ddbe573d, lower: 0x5e715c69a2a86f2fe985ea4ba78842e8 }, // 629
    Multiplier { upper: 0x918af8a4c4027c252a44f30f17cb78fd, lower: 0xe5277d214eed25bfee04bb6fb939cf20 }, // 630
    Multiplier { upper: 0xe8de5aa1399d936eaa07eb4b59458e63, lower: 0x083f2e9bb17b6f997cd45f19285c7e9a }, // 631
    Multiplier { upper: 0xba4b7bb42e17a92554d322a2add13eb5, lower: 0xa0328bafc12f8c7aca437f47537d3215 }, // 632
    Multiplier { upper: 0x95092fc35812edb7770f4ee88b0dcbc4, lower: 0x80286fbfcdbfa3956e9c65d2a930f4de }, // 633
    Multiplier { upper: 0xee7519388ceb15f258187e40de7c793a, lower: 0x66a71932e2cc38ef1760a2eaa84e5495 }, // 634
    Multiplier { upper: 0xbec4142d3d88de5b79ad31cd7ec9fa95, lower: 0x1eec1428b5702d8c12b3b58886a51078 }, // 635
    Multiplier { upper: 0x989cdcf0fe0718492e2427d798a19544, lower: 0x18bcdced5df357a342295e06d21da6c6 }, // 636
    Multiplier { upper: 0xf42e2e4e633e8d41e36d0c8c2768eed3, lower: 0x5ac7c7e22febbf6b9d0efcd7b695d7a3 }, // 637
    Multiplier { upper: 0xc358250b8298710182bda3a352ba58a9, lower: 0x156c9fe8265632bc7da59712f877dfb6 }, // 638
    Multiplier { upper: 0x9c4684093546c0ce02314fb5dbc846ed, lower: 0xaabd4cb9b844f56397b7ac0f2d2cb2f8 }, // 639
    Multiplier { upper: 0xfa0a6cdb8871347cd04ee5efc60d3e49, lower: 0x112ee12926d4bbd28c59134b7b7ab7f3 }, // 640
    Multiplier { upper: 0xc808571606c0f6ca403f1e596b3dcb6d, lower: 0xa758b420ebdd630ed6ada9092f955ff6 }, // 641
    Multiplier { upper: 0xa006ac119f00c56e99cc184788fe3c57, lower: 0xb913c34d897de8d8abbe20d426111991 }, // 642
    Multiplier { upper: 0x800556747f33d12547d679d2d3fe96ac, lower: 0x940fcf713acb20ad5631b3dceb40e141 }, // 643
    Multiplier { upper: 0xccd55720cb861b6ed95729515330f114, lower: 0x20194be85e11cde22382b9617867cece }, // 644
    Multiplier { upper: 0xa3dddf4d6f9e7c58addf54410f5a5a76, lower: 0x80143cb9e4db0b1b4f9bc7812d1fd8a5 }, // 645
    Multiplier { upper: 0x8317e5d78c7ec9e08b1910340c48485e, lower: 0xccdcfd6183e26f490c7c9f9a8a7fe084 }, // 646
    Multiplier { upper: 0xd1bfd625ad97a96744f4e6b9ad4073ca, lower: 0xe1619568d303e541ad943290dd99673a }, // 647
    Multiplier { upper: 0xa7ccab5157ac8785d0c3ebc7bdcd296f, lower: 0x1ab477870f36510157a9c20d7e145295 }, // 648
    Multiplier { upper: 0x863d55daac8a0604a70323063170edf2, lower: 0x7bc392d27291da6779549b3dfe76a877 }, // 649
    Multiplier { upper: 0xd6c8895de0dcd66dd80504d6b5817cb7, lower: 0x2c6c1e1d841c90a58eedc52ffd8aa725 }, // 650
    Multiplier { upper: 0xabd3a117e71711f1799d9d78913463c5, lower: 0xbd234b4ad016da1e0bf16a8ccad55284 }, // 651
    Multiplier { upper: 0x89761a7985ac0e5ac7b14ac6da904fd1, lower: 0x641c3c3bd9abe1b1a3278870a2444203 }, // 652
    Multiplier { upper: 0xdbf02a5c09134a2ad91baad7c41a194f, lower: 0x06939392f5dfcf829ea5a71a9d3a0338 }, // 653
    Multiplier { upper: 0xaff355166da908224749557969ae7aa5, lower: 0x9edc760f2b1972cee551527bb0fb35c6 }, // 654
    Multiplier { upper: 0x8cc2aa7857ba6ce839077794548b9551, lower: 0x4be391a5bc145bd8b77441fc8d95c49f }, // 655
    Multiplier { upper: 0xe1377726f2c3e1738e7258ed54128882, lower: 0x1305b5d5f9ba2c8df2539cc748efa0fe }, // 656
    Multiplier { upper: 0xb42c5f525bcfe78fa5284724434206ce, lower: 0x759e2b119494f0718ea94a3907261a65 }, // 657
    Multiplier { upper: 0x90237f75163fec72ea869f5035ce6bd8, lower: 0x5e18227476dd8d27a5543b60d284e1ea }, // 658
    Multiplier { upper: 0xe69f3254f066471e440a9880561712f3, lower: 0xc9c03720be2f483f6eed2bce1da16977 }, // 659
    Multiplier { upper: 0xb87f5b7726b838e5033bad337812758f, lower: 0xd499c5b3cb590699258a8971b14dedf9 }, // 660
    Multiplier { upper: 0x939915f8ebc693ea68fc8a8f9341f7a6, lower: 0x43ae37c309140547513ba127c10b24c7 }, // 661
    Multiplier { upper: 0xec282327dfa41fdd74c74418eb9cbf70, lower: 0x6c49f2d1a82008721b929b72ce783ad8 }, // 662
    Multiplier { upper: 0xbcece8ecb2e9b317909f69ad894a32c0, lower: 0x56a18f0e2019a05b494215f571f9c8ad }, // 663
    Multiplier { upper: 0x9723ed8a28baf5ac73b2baf13aa1c233, lower: 0x78813f3e801480490768119127fb06f1 }, // 664
    Multiplier { upper: 0xf1d315a9dac4bc471f845e4ec4360385, lower: 0x8d9b98640020cd41a5734f4ea65e7181 }, // 665
    Multiplier { upper: 0xc175aaee489d636c1936b1d89cf802d1, lower: 0x3e161383334d710151290c3eeb7ec134 }, // 666
    Multiplier { upper: 0x9ac488bea07de923475ef4ad4a600240, lower: 0xfe780f9c290ac0cdda873cff22cbcdc3 }, // 667
    Multiplier { upper: 0xf7a0daca9a630e9ed897ede210999d34, lower: 0xca59b29374de01495da52e6504794938 }, // 668
    Multiplier { upper: 0xc61a48a2151c0bb246dff181a6e14a90, lower: 0xa1e15ba92a4b343ab150f1ea69faa0fa }, // 669
    Multiplier { upper: 0x9e7b6d4e7749a2f5057ff467b8b43ba6, lower: 0xe7e77c875508f6955aa727eebb2ee72e }, // 670
    Multiplier { upper: 0xfd92487d8ba904bb3bffed72c1205f71, lower: 0x730bfa7221a7f0eef771d97df84b0b7d }, // 671
    Multiplier { upper: 0xcadb6d313c8736fc2ffff1289a804c5a, lower: 0xc26ffb8e8153272592c17acb2d08d5fe }, // 672
    Multiplier { upper: 0xa2492427639f5f3026665a86e2003d15, lower: 0x6859960b9aa8ec1e0f012f08f0d3de65 }, // 673
    Multiplier { upper: 0x81d41cec4fb2b28ceb851538b4ccfdaa, lower: 0xb9e144d61553f0180c00f26d8d764b84 }, // 674
    Multiplier { upper: 0xcfb9c7e07f8450e178d4eec12147fc44, lower: 0x5c9ba15688864cf34667ea48e256df39 }, // 675
    Multiplier { upper: 0xa62e3980660373e793dd8bcdb439969d, lower: 0x16e2e7786d383d8f6b8655071b78b294 }, // 676
    Multiplier { upper: 0x84f1c799eb35f652dcb13ca4902e1217, lower: 0x458252c6bdc697a5ef9eaa6c15fa2877 }, // 677
    Multiplier { upper: 0xd4b60c29785656eafab52dd419e35025, lower: 0x3c03b7a462d759097f6443e02329da57 }, // 678
    Multiplier { upper: 0xaa2b3cedf9deabef2ef757dce182a684, lower: 0x3002f9504f12ada132b69cb34f54aeac }, // 679
    Multiplier { upper: 0x88229724c7e55658f25f797d81355203, lower: 0x599bfaa6a5a88ae75bc54a290c43bef0 }, // 680
    Multiplier { upper: 0xd9d0f1d473088a27ea325bfc01eee99e, lower: 0xf5c65dd76f7411722c6edd0e7a05fe4d }, // 681
    Multiplier { upper: 0xae40c176c26d3b5321c1e330018bee18, lower: 0xc49eb17925f6745b56bf173ec804cb71 }, // 682
    Multiplier { upper: 0x8b67012bcebdc90f4e34b5c0013cbe7a, lower: 0x36e55ac75191f6af7898df656cd0a2c1 }, // 683
    Multiplier { upper: 0xdf0b3512e462db4bb054560001faca5d, lower: 0x24a22ad88283244bf427cbd57ae76ace }, // 684
    Multiplier { upper: 0xb26f5da8b6b57c3c8d1044ccce623b7d, lower: 0xb6e82246cecf503cc35309779585ef0b }, // 685
    Multiplier { upper: 0x8ebf7e20922ac9ca0a736a3d71e82f97, lower: 0xc58681d23f0c40309c426df9446b25a2 }, // 686
    Multiplier { upper: 0xe465969a8377a94343ebdd2f1ca6b28c, lower: 0x6f3d9c83981399e7606a498ed3dea29d }, // 687
    Multiplier { upper: 0xb6b7abaecf92edcf69897dbf4a1ef53d, lower: 0x25cae39c79a947ec4d21d47243188217 }, // 688
    Multiplier { upper: 0x922c8958a60f24a5ee0797cc3b4bf764, lower: 0x1e3be949faedd32370e7dd2835ad34e0 }, // 689
    Multiplier { upper: 0xe9e0dbc109b1d43cb00c26139213256c, lower: 0xfd2ca8765e4951d24e3fc84055e1ee32 }, // 690
    Multiplier { upper: 0xbb1a49673af4a9ca26701e760e75b78a, lower: 0x6423b9f84b6ddb0ea4ffd366ab1b24f5 }, // 691
    Multiplier { upper: 0x95aea11f625d54a1b859b1f80b915fa1, lower: 0xe9b62e603c57e2721d9975ebbc15b72b }, // 692
    Multiplier { upper: 0xef7dce989d622102c08f832678e89903, lower: 0x0f89e3cd2d596a502f5befdf9355f1de }, // 693
    Multiplier { upper: 0xbf97d87a1781b40233a602852d86e0cf, lower: 0x3fa1830a8aadeea68c498cb2dc44c17e }, // 694
    Multiplier { upper: 0x994646c812ce299b5c84ced0f138b3d8, lower: 0xffb468d53bbe58853d07a3c249d09acb }, // 695
    Multiplier { upper: 0xf53d3e0ceae375c560d47e1b1b8dec8e, lower: 0x65ed74885f96f40861a5d2d0761a9145 }, // 696
    Multiplier { upper: 0xc430fe70bbe92b044d76cb48e2d7f071, lower: 0xeb245d39e6125cd38151757391aeda9e }, // 697
    Multiplier { upper: 0x9cf3fec096542269d7923c3a4f1326c1, lower: 0x88e9e42e51a84a42cddac45c748be218 }, // 698
    Multiplier { upper: 0xfb1ffe00f0869d7625b6c6c3b1b83e02, lower: 0x74a96d16e90d439e162ad3c720dfd026 }, // 699
    Multiplier { upper: 0xc8e664cd8d387df81e2bd23627c69801, lower: 0xf6edf0df20d7694b44ef0fd280b30ceb }, // 700
    Multiplier { upper: 0xa0b850a470f9fe6018230e91b96bacce, lower: 0x5f24c0b280ac543c3725a642008f3d89 }, // 701
    Multiplier { upper: 0x809373b6c0c7feb34682720e2defbd71, lower: 0xe5b7008ecd56a9c9c5b7b834cd3f646e }, // 702
    Multiplier { upper: 0xcdb8b92467a664520a6a5016afe5fbe9, lower: 0x6f8b3417aef10fa93c5926bae1ff0716 }, // 703
    Multiplier { upper: 0xa493c75052eb8374d521d9abbfeb2fed, lower: 0xf2d5c346258da620fd141efbe7ff38de }, // 704
    Multiplier { upper: 0x83a96c40425602c3ddb4ae22ffef598b, lower: 0x28ab029e847151b3fda9b2631fff60b2 }, // 705
    Multiplier { upper: 0xd2a8ad339d566ad2fc5449d1997ef5ab, lower: 0x7444d0fda0b54f8662a91d6b66656783 }, // 706
    Multiplier { upper: 0xa886f0f61778557596a9d4a7adff2aef, lower: 0x90370d97b3c43f9eb55417891eb78602 }, // 707
    Multiplier { upper: 0x86d25a5e792d112adeee43b957ff558c, lower: 0x735f3e12f636994bc44346074bc604cf }, // 708
    Multiplier { upper: 0xd7b6f6fd8eae81de317d39288ccbbc13, lower: 0xebcb9684bd2428793a053cd8793cd47e }, // 709
    Multiplier { upper: 0xac925f313ef2017e8dfdc753a3d6300f, lower: 0xefd61203ca8353942e6a97139430a9fe }, // 710
    Multiplier { upper: 0x8a0eb28dcbf4cdfed7fe390fb644f33f, lower: 0xf311a80308690fa9bebbac0fa9c087ff }, // 711
    Multiplier { upper: 0xdce450e2dfee16648cc9f4e5f06e51ff, lower: 0xeb4f73380d74e5dc645f79b2a9340ccb }, // 712
    Multiplier { upper: 0xb0b6a71be65811ea0a3b2a518d250e66, lower: 0x55d928f9a45d84b0504c615bba900a3c }, // 713
    Multiplier { upper: 0x8d5eec1651e00e54d4fc21dad750d851, lower: 0xde4753fae9e46a26a6a381162ed9a1ca }, // 714
    Multiplier { upper: 0xe23179bd4fcce3baee60362af21af3b6, lower: 0x30721ff7dca0a9d771059b56b15c360f }, // 715
    Multiplier { upper: 0xb4f461643fd71c958b802b558e7bf62b, lower: 0x59f4e65fe3b3bb12c0d14912277cf80c }, // 716
    Multiplier { upper: 0x90c3811cffdf4a113c6689113ec991bc, lower: 0x47f71eb31c8fc8dbcd743a74ec63f9a3 }, // 717
    Multiplier { upper: 0xe79f34fb32fedce860a40e81fe0f4f93, lower: 0xa658311e9419415faf205d87e09ff5d2 }, // 718
    Multiplier { upper: 0xb94c2a628f324a5380833ece64d90c76, lower: 0x1eacf418767a9ab2f2804ad31a199175 }, // 719
    Multiplier { upper: 0x943ceeb53f5b6ea9339c323eb71409f8, lower: 0x188a5ce05ec87bc25b99d575ae7adac4 }, // 720
    Multiplier { upper: 0xed2e4abb98924aa8529383978b534326, lower: 0x8daa2e33cada5f9d5f5c88bc4a5e2ad3 }, // 721
    Multiplier { upper: 0xbdbea22fad41d5537542cfac6f75cf52, lower: 0x0aee8b5ca2484c7de5e3a096a1e4ef0f }, // 722
    Multiplier { upper: 0x97cbb4f2f1017775f768a6238c5e3f74, lower: 0xd58ba2b081d37064b7e94d454e50bf3f }, // 723
    Multiplier { upper: 0xf2df87eb1b358beff24109d27a306587, lower: 0xbc129de7361f1a3abfdbaed54a1acb98 }, // 724
    Multiplier { upper: 0xc24c6cbc15c46ff3283407db94f3846c, lower: 0x96754b1f5e7f482effe2f2443b48a2e0 }, // 725
    Multiplier { upper: 0x9b7056fcde36bff5b9c3397c772936bd, lower: 0x452aa27f7ecc39bf331bf50362a0824d }, // 726
    Multiplier { upper: 0xf8b3be61638accbc5c6b8f2d8b752462, lower: 0x084437326479f5feb82cbb389dcd9d48 }, // 727
    Multiplier { upper: 0xc6f631e782d57096b0560c246f90e9e8, lower: 0x069cf8f51d2e5e656023c8fa17d7b106 }, // 728
    Multiplier { upper: 0x9f2b5b1f9bddf3abc044d6838c73ee53, lower: 0x387d93f74a8b7eb7801ca0c81312f405 }, // 729
    Multiplier { upper: 0xfeabc4ff5fc985df9a07bd9f471fe3b8, lower: 0x5a6286587745978c002dce0ceb51866f }, // 730
    Multiplier { upper: 0xcbbc9d99196e04b2e19fcae5d27fe960, lower: 0x484ed1e05f6adfa33357d80a55dad1f2 }, // 731
    Multiplier { upper: 0xa2fd4ae0e124d08f1ae63beb0eccbab3, lower: 0x6d0bdb19e5ef194f5c46466eab1574c2 }, // 732
    Multiplier { upper: 0x82643be71a83da0c1584fcbc0bd6fbc2, lower: 0xbda315ae518c143f7d05052555aac3ce }, // 733
    Multiplier { upper: 0xd0a05fd82a6c901355a1946012f192d1, lower: 0x2f6b55e3b5aced3261a1a1d555de0617 }, // 734
    Multiplier { upper: 0xa6e6b3135523a675de1add19a8c14240, lower: 0xf2bc44b62af0bdc1e7b4817777e4d1ac }, // 735
    Multiplier { upper: 0x85855c0f774fb85e4b48b0e153cdce9a, lower: 0x5bc9d091bbf3cb01862a012c5fea4156 }, // 736
    Multiplier { upper: 0xd5a22ce58bb2c096dedab49bb9494a90, lower: 0x92dc80e92cb944cf3d1001e09976cef0 }, // 737
    Multiplier { upper: 0xaae823ead6289a124be22a162dd43ba6, lower: 0xdbe39a5423c76a3f640cce4d47923f27 }, // 738
    Multiplier { upper: 0x88b9b65578207b41d64e8811be4362eb, lower: 0xe31c7b768305ee991cd70b71060e98ec }, // 739
    Multiplier { upper: 0xdac2bd558d00c53623b0d9b5fd389e46, lower: 0x382d925738097dc1c7be78b4d67dc179 }, // 740
    Multiplier { upper: 0xaf0231113d9a375e82f3e15e642d4b6b, lower: 0x60247512933acb016c986090ab97cdfb }, // 741
    Multiplier { upper: 0x8c01c0da97ae92b2025cb44b83576f89, lower: 0x19b6c40edc2f08cdf079e6da22dfd7fc }, // 742
    Multiplier { upper: 0xe002ce2a8c4a845003c786df388be5a8, lower: 0x29246ce4937e747cb3f63e29d166265f }, // 743
    Multiplier { upper: 0xb33571bba36ed0400306057f606feaec, lower: 0xedb6bd83a931f6ca2991cb54a784eb80 }, // 744
    Multiplier { upper: 0x8f5df4961c58a6999c04d132b38cbbf0, lower: 0xbe2bcacfba8e5f0821416f76ec6a5600 }, // 745
    Multiplier { upper: 0xe56320f02d5aa428f9a14eb785adf981, lower: 0x3046114c5db0980d02024bf17a43bccc }, // 746
    Multiplier { upper: 0xb78280c024488353fae7722c6af19467, lower: 0x59d1a7704af3acd734cea3279502fd70 }, // 747
    Multiplier { upper: 0x92cecd66836d35dcc8b9282388c14385, lower: 0xe17485f36f29571290a54f52dd9bfdf3 }, // 748
    Multiplier { upper: 0xeae47bd738aebc94745b736c0e0205a3, lower: 0x025409857ea88b50e76ee55162932fec }, // 749
    Multiplier { upper: 0xbbe9fcac2d5896dd29e2c2bcd8019e1c, lower: 0x01dcd46acbba090d85f2510de875bff0 }, // 750
    Multiplier { upper: 0x9654ca23577a124a87e89bca4667b1b0, lower: 0x017d76bbd62e6da46b2840d7ed2afff3 }, // 751
    Multiplier { upper: 0xf087a9d225901d440ca75faa0a3f82b3, lower: 0x35958ac6237d7c3a450d348caeab331e }, // 752
    Multiplier { upper: 0xc06c87db51401769a3b91954d4ff9bc2, lower: 0x91446f04e931302e9da42a0a2555c27f }, // 753
    Multiplier { upper: 0x99f06caf743345ee1c941443dd994968, lower: 0x7436bf3720f4268bb15021a1b777cecc }, // 754
    Multiplier { upper: 0xf64d7ab253853cb02db9ba062f5ba8a7, lower: 0x2057985834b9d745e88035cf8bf2e479 }, // 755
    Multiplier { upper: 0xc50ac88ea93763c0249494d1bf7c86ec, lower: 0x19dfad135d617904ba002b0c6ff58394 }, // 756
    Multiplier { upper: 0x9da23a0bba92b6335076dd7499306bf0, lower: 0x14b2f0dc4ab460d094ccef3d265e02dd }, // 757
    Multiplier { upper: 0xfc36c345f75123854d8afbedc1e71319, lower: 0xbab7e7c6dded67b42147e52ea3c99e2e }, // 758
    Multiplier { upper: 0xc9c56904c5da82d10ad59657ce5275ae, lower: 0x2ef98638b18ab95ce76cb7588307b1bf }, // 759
    Multiplier { upper: 0xa16aba6a37e20240d577ab7971db9158, lower: 0x25946b608e08944a52bd5f7a026c8e32 }, // 760
    Multiplier { upper: 0x81222ebb5fe801cd7792ef945b160de0, lower: 0x1e1055e6d806dd084231192e6856d828 }, // 761
    Multiplier { upper: 0xce9d1792330ccfaf25b7e5ba2b567c99, lower: 0xc9b3bca48cd7c80d36b4f5170d57c040 }, // 762
    Multiplier { upper: 0xa54a7941c270a625b7c65161bc45307b, lower: 0x07c2fd5070aca00a922a5dac0aac99cd }, // 763
    Multiplier { upper: 0x843b94349b8d51b7c638411afd0426c8, lower: 0xd30264405a23b33ba821e489a223ae3e }, // 764
    Multiplier { upper: 0xd39286ba927bb5f2d6c0682b2e6d0ada, lower: 0xeb3706cd5d05eb92a69ca0dc369f7d2f }, // 765
    Multiplier { upper: 0xa94205620ec95e5bdf005355bebda248, lower: 0xbc2c05711737efa8854a1a49c54c6426 }, // 766
    Multiplier { upper: 0x8768044e723ab1e318cd0f77cbcae83a, lower: 0x3023378dac2cbfba043b483b043d1ceb }, // 767
    Multiplier { upper: 0xd8a66d4a505de96b5ae1b25946117390, lower: 0x4d0525af79e132c339f87391a061c7de }, // 768
    Multiplier { upper: 0xad51f108404b2122af1af514380df60d, lower: 0x0a6a848c6180f568fb2d29414d1b064c }, // 769
    Multiplier { upper: 0x8aa7f40699d5b41bbf48c4102cd7f80a, lower: 0x6ebb9d3d1acd9120c8f0edcdd748d1d6 }, // 770
    Multiplier { upper: 0xddd98670f622b9c5fedad34d148cc010, lower: 0xb12c2ec82ae281ce0e4e4949587482f0 }, // 771
    Multiplier { upper: 0xb17ad1f3f81bc7d198af0f70dd3d6673, lower: 0xc0f0256cef1b9b0b3ea5076de05d358d }, // 772
    Multiplier { upper: 0x8dfbdb2993496ca7ad58d927176451f6, lower: 0x33f35123f27c7c08feea6c57e6b0f7a4 }, // 773
    Multiplier { upper: 0xe32c91dc1edbe10c488e283e8bd3b656, lower: 0xb9854e9fea60c674cb10ad59711b25d3 }, // 774
    Multiplier { upper: 0xb5bd417ce57cb409d3a4ecfed642f845, lower: 0x61377219884d6b90a273bde12748eb0f }, // 775
    Multiplier { upper: 0x91643463eaca29a1761d8a657835936a, lower: 0xb42c5b47a03defa6e85c97e752a0bc0c }, // 776
    Multiplier { upper: 0xe8a053d3114375cf23627708c055b8aa, lower: 0xb9e0920c33964c3e4094263eea9ac67a }, // 777
    Multiplier { upper: 0xba19dca8da9c5e3f4f81f8d3cd116088, lower: 0x94b3a809c2dea365007684ff22156b95 }, // 778
    Multiplier { upper: 0x94e17d53e216b1cc3f9b2d763da7806d, lower: 0x43c2ecd49be54f84005ed0cc1b445611 }, // 779
    Multiplier { upper: 0xee359553035782e065c51589fc3f33e2, lower: 0x0604ae20f96ee5a00097b479c53a234e }, // 780
    Multiplier { upper: 0xbe9144426912cf19eb04113b30328fe8, lower: 0x04d08b4d9458b7b333ac90616a94e90b }, // 781
    Multiplier { upper: 0x9874369b87423f47ef36742f59c20cb9, lower: 0x9d73a2a476ad5fc28fbd404deedd873c }, // 782
    Multiplier { upper: 0xf3ed242c0b9d320cb1f0b9e55c69adf5, lower: 0xc8b9043a577bcc6a7f9533afe495a52d }, // 783
    Multiplier { upper: 0xc3241cf0094a8e708e5a2e5116baf191, lower: 0x6d60d02eac6309eecc775c8cb6de1dbd }, // 784
    Multiplier { upper: 0x9c1ce3f33aa20b8d3eae8b74122f27a7, lower: 0x8ab3d9bef04f3b25705f7d3d5f1817cb }, // 785
    Multiplier { upper: 0xf9c7d31ec43678e1fde41253504b72a5, lower: 0xaab95c64b3b1f83be6ff2ec898268c77 }, // 786
    Multiplier { upper: 0xc7d30f4bd02b93e7fe500ea90d092884, lower: 0x889449ea295b2cfcb8cc256d46853d2c }, // 787
    Multiplier { upper: 0x9fdc0c3ca689431ffea67220d73a86d0, lower: 0x6d436e54ede28a63c709b78a9ed0fdbd }, // 788
    Multiplier { upper: 0xffc679faa40ed1cccaa3e9ce252a714d, lower: 0x7b9f16ee496a77060b42bf44314e62c8 }, // 789
    Multiplier { upper: 0xcc9ec7fbb6724170a21cbb0b50eec10a, lower: 0xc94c12583abb926b3c3565d02771e8a0 }, // 790
    Multiplier { upper: 0xa3b239962b8e9ac081b095a2a725673b, lower: 0xd43cdb79c8960ebc302ab7d9b927ed4d }, // 791
    Multiplier { upper: 0x82f4fade893ee2339af3aae885b785c9, lower: 0x769715fb06de723026889314941ff10b }, // 792
    Multiplier { upper: 0xd187f7ca753169ec2b1f77da6f8c0942, lower: 0x5758232b3e30b6b370da84edb9ccb4dd }, // 793
    Multiplier { upper: 0xa79ff96ec42787f0227f93152609a101, lower: 0xdf79b5bc31c092292715372494a3c3e4 }, // 794
    Multiplier { upper: 0x861994589cec6cc01b99427751a14d9b, lower: 0x192e2afcf49a0e8752775f5076e96984 }, // 795
    Multiplier { upper: 0xd68f53c0fb13e1335f5b9d8bb5cee291, lower: 0xc1e377fb20f67da550befee724a8a8d2 }, // 796
    Multiplier { upper: 0xaba5dc9a62764dc2b2afb13c91724edb, lower: 0x0182c66280c531510d6598b8ea20870f }, // 797
    Multiplier { upper: 0x89517d484ec50b02288c8dca0df50be2, lower: 0x679bd1e8670427740ab7ad60bb4d38d9 }, // 798
    Multiplier { upper: 0xdbb595407e08119d0dadafa9afee796a, lower: 0x3f5fb640a4d3725344591567921527c1 }, // 799
    Multiplier { upper: 0xafc47766cb39a7b0d7be2621598b9454, lower: 0xff7fc50083dc5b75d0474452db441fce }, // 800
    Multiplier { upper: 0x8c9d2c523c2e1fc0ac981e81146fa9dd, lower: 0x99330400697d15f7d9d29d0f15d01971 }, // 801
    Multiplier { upper: 0xe0fb7a1d2d1699344759ca6820b2a962, lower: 0x8eb806670f2e898c8fb761b1bc8028b5 }, // 802
    Multiplier { upper: 0xb3fc61b0f0dee0f69f7b08534d5bbab5, lower: 0x3ef99eb8d8f207a3a62c4e27ca002091 }, // 803
    Multiplier { upper: 0x8ffd1af3f3e580c54c626d0f71162ef7, lower: 0x65947efa4728061c84f03e863b334d41 }, // 804
    Multiplier { upper: 0xe661c4b9863c013bad6a4818b4f04b25, lower: 0x6f53fe5d3ea6702da1806409f8521534 }, // 805
    Multiplier { upper: 0xb84e36fad1c99a962455067a2a59d5b7, lower: 0x8c4331e4321ec0248133833b2d0e775d }, // 806
    Multiplier { upper: 0x9371c59574a148781d10d1fb5514aaf9, lower: 0x3d028e50281899b6cdc2cf628a71f917 }, // 807
    Multiplier { upper: 0xebe93c22543540c02e814ff88821118e, lower: 0xc80416e6a68dc2be16047f0410b65b58 }, // 808
    Multiplier { upper: 0xbcba9681dcf7670025343ffa0680dad8, lower: 0xa0034585520b0231ab36cc034091e2ad }, // 809
    Multiplier { upper: 0x96fbab9b172c52668429ccc80533e246, lower: 0xe669046aa808ce8e22923ccf66db1bbe }, // 810
    Multiplier { upper: 0xf192ac2b5846ea3da042e140085303a4, lower: 0xa3db3a44400e1749d0e9fae5715e92c9 }, // 811
    Multiplier { upper: 0xc1422355e038bb648035810006a8cfb6, lower: 0xe97c2e9d000b45d4a72195845ab20f07 }, // 812
    Multiplier { upper: 0x9a9b4f77e693c91d335e00ccd220a62b, lower: 0xedfcf217333c37dd52814469e2280c06 }, // 813
    Multiplier { upper: 0xf75ee58ca41fa82eb89667ae1d0109df, lower: 0xe32e50251ec6bfc88402070fd040133c }, // 814
    Multiplier { upper: 0xc5e58470834c868bc6deb958173407e6, lower: 0x4f58401db238996d366805a640334297 }, // 815
    Multiplier { upper: 0x9e5136c0690a053c9f18944678f66cb8, lower: 0x3f79cce48e93adf0f85337b8335c3546 }, // 816
    Multiplier { upper: 0xfd4ebe00a8100860fe8dba0a5b23e126, lower: 0xcbf614a0e41f7cb4c08525f38560553c }, // 817
    Multiplier { upper: 0xcaa564cd534006b3fed7c80848e980eb, lower: 0xd65e76e71ce5fd5d66d0eb2937804430 }, // 818
    Multiplier { upper: 0xa21dea3ddc33388fff13066d072133ef, lower: 0xdeb1f8b8e3eb31178573ef542c669cf3 }, // 819
    Multiplier { upper: 0x81b188317cf5c6d998dc052405b4298c, lower: 0xb227fa2d83228dac6ac325dcf0521729 }, // 820
    Multiplier { upper: 0xcf82738261893e28f4933b6cd5ed0f47, lower: 0x837329e26b6a7c4711383c94b3b68b75 }, // 821
    Multiplier { upper: 0xa601f601e7a0fe872a0f62bd77f0d906, lower: 0x02c287e855eec9d2742cfd43c2f86f91 }, // 822
    Multiplier { upper: 0x84ce5e67ec80cb9f54d91bcac65a4738, lower: 0x02353986ab256e41f68a643635938c74 }, // 823
    Multiplier { upper: 0xd47d63d97a67ac32215b5faad6f6d859, lower: 0x9d21f5a44508b0698a7706bd2285ad86 }, // 824
    Multiplier { upper: 0xa9fde97ac852f0281aaf7fbbdf2be047, lower: 0xb0e7f7b69da08d213b926bca82048ad2 }, // 825
    Multiplier { upper: 0x87fe546239dbf353488c662fe5bcb36c, lower: 0x8d865fc54ae6d74dc941efd534d06f0e }, // 826
    Multiplier { upper: 0xd996ed69f62cb88540e0a37fd5fab8ad, lower: 0xaf3d660877d7bee2db9cb2eebae71816 }, // 827
    Multiplier { upper: 0xae125787f823c6d100b3b5ffde622d57, lower: 0xbf6451a05fdfcbe8afb08f25625279ac }, // 828
    Multiplier { upper: 0x8b41df9ff9b638a733c2f7ffe51b5779, lower: 0x65e9dae6b3196fed595a0c1de841faf0 }, // 829
    Multiplier { upper: 0xdecfcc3329238dd852d18ccca1c558c2, lower: 0x3ca95e3deb5be6488ef679c9739cc4b3 }, // 830
    Multiplier { upper: 0xb23fd68f541c7179dbdad70a1b044701, lower: 0xca211831891651d3a591fb078fb09d5c }, // 831
    Multiplier { upper: 0x8e997872a9b05ac7e31578d4e269d267, lower: 0xd4e7468e07450e42eadb2f393fc07de3 }, // 832
    Multiplier { upper: 0xe428c0b775e6f7a638225aee370fb70c, lower: 0x87d870e33ed4e39e4491e5286600c96b }, // 833
    Multiplier { upper: 0xb6870092c4b8c61e934eaf24f8d95f3d, lower: 0x3979f3e8ff10b61836db1db9eb33d456 }, // 834
    Multiplier { upper: 0x92059a0f03c704e542a558ea60ade5ca, lower: 0x94618fed98da2b469248e494bc2976ab }, // 835
    Multiplier { upper: 0xe9a29018060b3b086aa227dd677ca2dd, lower: 0xba35b315c15d120a83a7d4212d0f2445 }, // 836
    Multiplier { upper: 0xbae873466b3c2f39eee81fe452ca1be4, lower: 0x94f7c277cde40e6ecfb97680f0d8e9d1 }, // 837
    Multiplier { upper: 0x9586c29ebc3025c7f2534cb6a8a1afea, lower: 0x10c6352ca4b671f23fc79200c0ad87da }, // 838
    Multiplier { upper: 0xef3e04312d19d60cb6ebadf10dcf7fdc, lower: 0xe7a388476df0b650660c1cce0115a62a }, // 839
    Multiplier { upper: 0xbf64d0275747de70925624c0d7d93317, lower: 0x1fb6069f8b26f84051a34a3e674484ee }, // 840
    Multiplier { upper: 0x991d7352ac397ec07511b700acadc278, lower: 0xe62b387fa2859366a7b5d4feb9039d8b }, // 841
    Multiplier { upper: 0xf4fbebb779f5979a54e924cde11603f4, lower: 0xa3785a65d0d5b8a43f8954cac19f6278 }, // 842
    Multiplier { upper: 0xc3fcbc92c7f7ac7b7720ea3e4dab365d, lower: 0x4f937b84a7116083660777089ae5e860 }, // 843
    Multiplier { upper: 0x9cca30756cc62395f8e721cb7155c517, lower: 0x72dc62d085a780691e6c5f3a1584b9e7 }, // 844
    Multiplier { upper: 0xfadd1a557ad69f565b0b69458222d4f2, lower: 0x51609e1a6f72670e9713cb90226df63e }, // 845
    Multiplier { upper: 0xc8b0e1ddfbdee5deaf3c54379b4f10c1, lower: 0xdab3b1aebf8eb8d878dca2d9b524c4fe }, // 846
    Multiplier { upper: 0xa08d817e6318b7e558fd102c7c3f409b, lower: 0x155c8e25660bc71393e3b57af7509d98 }, // 847
    Multiplier { upper: 0x807134651c13c65113fda689fcff66e2, lower: 0x777d3e8451a305a9431c912f2c407e14 }, // 848
    Multiplier { upper: 0xcd81ed6e9352d6e81ffc3da994cbd7d0, lower: 0xbf2eca6d4f6b3c4204fa81e5139a6352 }, // 849
    Multiplier { upper: 0xa467f12542a8abece6636487aa3caca6, lower: 0xff58a1f10c55c9ce6a6201840faeb5dc }, // 850
    Multiplier { upper: 0x83865a843553bcbd851c506c88308a1f, lower: 0x32ad4e5a7044a171eeb4ce033fbef7e3 }, // 851
    Multiplier { upper: 0xd27090d38885fac8d4fa1a47404da9cb, lower: 0x84487d5d806dcf1cb121499ecc64bfd1 }, // 852
    Multiplier { upper: 0xa85a0d7606d1956d772e7b6c337154a2, lower: 0xd039fde466be3f4a274dd47f09ea330e }, // 853
    Multiplier { upper: 0x86ae712b38a7aabdf8f1fc568f8ddd4f, lower: 0x0cfb31838564ff6e85d7dd326e54f5a5 }, // 854
    Multiplier { upper: 0xd77d81dec10c446327e993bdb27c954b, lower: 0x47f84f38d56e657da2f2fb83e3bb22a1 }, // 855
    Multiplier { upper: 0xac6467e5673d0382865476315b96ddd5, lower: 0xd32d0c2d778b8464825bfc6982fc1bb4 }, // 856
    Multiplier { upper: 0x89e9ecb785ca6935384391c116124b11, lower: 0x75bda35792d603839b7cc9ee0263495d }, // 857
    Multiplier { upper: 0xdca97abf3c770ebb8d38e934f01d44e8, lower: 0xbc629ef284899f38f8c7a97cd09edbc8 }, // 858
    Multiplier { upper: 0xb0879565c9f8d8960a93edc3f34a9d86, lower: 0xfd1bb25b9d3ae5c72d6c87970d4be306 }, // 859
    Multiplier { upper: 0x8d3944516e60ad44d543249cc2a2179f, lower: 0x30e2f5161762516c2456d2df3dd64f38 }, // 860
    Multiplier { upper: 0xe1f53a1be3cde207bb9ea0fad10358fe, lower: 0xb49e54f0256a1be03a24849862f07ec0 }, // 861
    Multiplier { upper: 0xb4c42e7cb63e4e6c961880c8a735e0cb, lower: 0xc3b1dd8ceabb49802e839d46b58d3233 }, // 862
    Multiplier { upper: 0x909cf1fd5e983ebd44e06706ec2b1a3c, lower: 0x9c8e4ad7222f6e002536176bc470f4f6 }, // 863
    Multiplier { upper: 0xe761832efdc0646207cd71a4ad11c394, lower: 0x2db077be9d18b0003b89bf12d3e7ee56 }, // 864
    Multiplier { upper: 0xb91acf58cb00504e6ca45aea240e3610, lower: 0x248d2c987dad5999c93aff42431ff1df }, // 865
    Multiplier { upper: 0x941572ad6f337371f0837bee833e91a6, lower: 0x83a423ad31577ae16dc8cc35027ff4b2 }, // 866
    Multiplier { upper: 0xecef1de24b8585831a6bf97d9eca82a4, lower: 0x05d36c484ef25e357c7479ee6a665450 }, // 867
    Multiplier { upper: 0xbd8c17e83c6ad135aebcc797b23b9bb6, lower: 0x6b0f89d3725b7e91305d2e58551ea9da }, // 868
    Multiplier { upper: 0x97a346536388a75e2563d2dfc1c9495e, lower: 0xbc0c6e42c1e2cba759e42513774bbb15 }, // 869
    Multiplier { upper: 0xf29ed6ebd2743efd089fb7cc69420efd, lower: 0xf9ad7d379c9e12a55ca03b5258792b54 }, // 870
    Multiplier { upper: 0xc218abefdb90326406e62ca387680bfe, lower: 0x6157975fb07e755116e695db79fa8910 }, // 871
    Multiplier { upper: 0x9b46eff3160cf51cd251bd4f9f866ffe, lower: 0xb44612b2f3985dda78b877e2c7fba0da }, // 872
    Multiplier { upper: 0xf8717feb567b21c7b6e92ee5cc0a4cca, lower: 0xba09b784b8f3c95d8df3f304732c348f }, // 873
    Multiplier { upper: 0xc6c13322ab95b49fc58758b7d66ea3d5, lower: 0x61a15f9d60c3077e0b298f36c289c3a6 }, // 874
    Multiplier { upper: 0x9f00f5b556115d4c9e05e09311f21caa, lower: 0xb481194ab3cf3931a287a5c5686e361e }, // 875
    Multiplier { upper: 0xfe67ef8889b5621430096751b6502ddd, lower: 0xed9b5baab94b8eb5d0d9093bda49f030 }, // 876
    Multiplier { upper: 0xcb86593a07c44e768cd452a7c50cf17e, lower: 0x57af7c88943c722b0d7a6dc97b6e59c0 }, // 877
    Multiplier { upper: 0xa2d1e0fb3969d85ed710421fd0d72798, lower: 0x4625fd3a10305b55a461f16dfc5847cd }, // 878
    Multiplier { upper: 0x824180c8fabb137f1273681973df52e0, lower: 0x381e642e7359e2aae9e7f457fd136ca4 }, // 879
    Multiplier { upper: 0xd068ce0e5df81f31b71f0cf586321e33, lower: 0x8cfd6d171ef63777dca653bffb52476d }, // 880
    Multiplier { upper: 0xa6ba3e71e4c67f5af8e5a3f79e8e7e8f, lower: 0xa3fdf0df4bf82c5fe3b842fffc41d2be }, // 881
    Multiplier { upper: 0x8561cb8e509ecc48c71e1cc61871fed9, lower: 0x4ffe5a4c3cc689e64fc69bfffd017565 }, // 882
    Multiplier { upper: 0xd56945b080fe13a7a4fcfad68d83315b, lower: 0xb3309079fad7430a193dc666619bef07 }, // 883
    Multiplier { upper: 0xaaba9e26cd980fb950ca62453e028de2, lower: 0xf5c07394c8ac35a1adcb051eb47cbf39 }, // 884
    Multiplier { upper: 0x88954b523e133fc773d51b6a98020b1b, lower: 0xf7cd2943d3bcf7b48b08d0e55d3098fa }, // 885
    Multiplier { upper: 0xda887883968532d8b954f8aa8cd011c6, lower: 0x594842061f94bf8744dae7d561e75b2a }, // 886
    Multiplier { upper: 0xaed3939c786a8f13c7772d553d73416b, lower: 0x7aa034d1b2dd6605d0af1fdde7ec48ef }, // 887
    Multiplier { upper: 0x8bdc7616c6bba5a96c5f5777645c3455, lower: 0xfbb35d748f1784d173bf4cb18656a0bf }, // 888
    Multiplier { upper: 0xdfc72357a45f6f757a32258bd3c6ba23, lower: 0x2c522f20e4f26e1bec654782708a9acb }, // 889
    Multiplier { upper: 0xb305b5dfb6b2bf912e8e846fdc9efb4f, lower: 0x56a825b3ea5b8b4989ea9f9b8d3baf09 }, // 890
    Multiplier { upper: 0x8f37c4b2f88effa75872038cb07f2f72, lower: 0xabb9b7c321e2d5d46e554c7c70fc8c07 }, // 891
    Multiplier { upper: 0xe5260784c0e4cc3ef3e99f4780cb7f1d, lower: 0xdf8f8c6b696aefba4a2213fa4e60e00b }, // 892
    Multiplier { upper: 0xb7519f9d671d70325cbae5d2cd6f98e4, lower: 0xb2d93d22babbf2fb6e81a9950b80b33c }, // 893
    Multiplier { upper: 0x92a7b2e4527df35b7d625175712613ea, lower: 0x28adca822efcc262bece21440933c297 }, // 894
    Multiplier { upper: 0xeaa5eb06ea631ef8c89d4f224ea35310, lower: 0x411610d04b2e03d13149ced341ec6a8a }, // 895
    Multiplier { upper: 0xbbb7ef38bb827f2d6d4aa5b50bb5dc0d, lower: 0x00de73d9d5be6974276e3f0f67f0553c }, // 896
    Multiplier { upper: 0x962cbf609601ff578aa21e2a6fc4b00a, lower: 0x67185cae4498545cec583272b98d10fd }, // 897
    Multiplier { upper: 0xf047989a899ccbbf443696aa4c6de677, lower: 0x0b5a2de3a0f3ba2e46f383eac27b4e61 }, // 898
    Multiplier { upper: 0xc03946e207b0a2ff69c5455509f1852c, lower: 0x0914f182e72961be9f2936556862a51a }, // 899
    Multiplier { upper: 0x99c76be80626e8cc549dd110d4c13756, lower: 0x6daa5acf1f544e3218edc511204eea7b }, // 900
    Multiplier { upper: 0xf60bdfd9a371747a20fc81b4879b8bbd, lower: 0x7c43c47e9886e3835b16081b66e4aa5f }, // 901
    Multiplier { upper: 0xc4d64cae1c5ac394e73067c39fafa2fd, lower: 0xfd0303987a0582cf7c11a015ebea21e5 }, // 902
    Multiplier { upper: 0x9d783d5816af02dd85c05302e6261bfe, lower: 0x64026946c80468a5fcdae677efee8184 }, // 903
    Multiplier { upper: 0xfbf39559bde4d1626f9a1e6b09d69330, lower: 0xa003dba4733a4109949170bfe64a68d4 }, // 904
    Multiplier { upper: 0xc98faaae3183dab52614e5226e45428d, lower: 0x4ccfe2e9f5c83407aa0df3ccb83b8710 }, // 905
    Multiplier { upper: 0xa13fbbbe8e03155db810b74ebe9dced7, lower: 0x70a64f21916cf66c880b29709362d273 }, // 906
    Multiplier { upper: 0x80ffc9653e68dde4934092a5654b0bdf, lower: 0x8d51d8e7a78a5ebd39a2878d42b57529 }, // 907
    Multiplier { upper: 0xce660f0863dafca0eb9a843bd544dfcc, lower: 0x154fc172a5aa312ec29da5aed122550e }, // 908
    Multiplier { upper: 0xa51e726d1caf3080bc7b9cfcaa9d7fd6, lower: 0x77730128848827589bb15158a74eaa72 }, // 909
    Multiplier { upper: 0x84185b8a7d58f39a3062e3fd554accab, lower: 0x92c267539d39b913afc10de085d8885b }, // 910
    Multiplier { upper: 0xd35a2c10c88e52904d6b066222114778, lower: 0xead0a5529529281f7f9b49673c8da6f8 }, // 911
    Multiplier { upper: 0xa914f00d6d3ea87371226b81b4da9f93, lower: 0xef0d510eddba867f99490785ca0aebfa }, // 912
    Multiplier { upper: 0x8743f33df0feed29274ebc67c3e21943, lower: 0x25a440d8b1620532e1073937d4d58995 }, // 913
    Multiplier { upper: 0xd86cb8631b317b750bb12d72d3035b9e, lower: 0xa2a067c11bd00851680b8ebfbaef4287 }, // 914
    Multiplier { upper: 0xad23c6b5af5ac92a6fc0f128a8cf7c7e, lower: 0xe8805300e30cd374533c7232fbf29b9f }, // 915
    Multiplier { upper: 0x8a83055e25e23a8859672753ba3f96cb, lower: 0xed33759a4f3d75f6a8fd2828c98ee2e6 }, // 916
    Multiplier { upper: 0xdd9e6efd0969f7408f0b721f9065be13, lower: 0x151f22907ec8bcbddb2ea6a7a8e49e3d }, // 917
    Multiplier { upper: 0xb14b8bfda121929a0c092819405164dc, lower: 0x10e5b540656d63cb15beebb953ea1831 }, // 918
    Multiplier { upper: 0x8dd60997b41adbae7007534766a783e3, lower: 0x40b7c43384578308de32562ddcbb468d }, // 919
    Multiplier { upper: 0xe2f00f59202af91719a5520bd7726c9e, lower: 0xcdf2d385a08c04dafd1d56afc7920a7b }, // 920
    Multiplier { upper: 0xb58cd91419bbfa78e1510e6fdf8ebd4b, lower: 0xd7f57604807003e26417788c9fa80863 }, // 921
    Multiplier { upper: 0x913d7a767afcc860b440d8597fa5643c, lower: 0xacc45e6a00599cb51cdf93a3b2ecd382 }, // 922
    Multiplier { upper: 0xe8625d8a5e61409aba015a28cc3bd394, lower: 0x47a09710008f6121c7cc1f6c517aec03 }, // 923
    Multiplier { upper: 0xb9e84ad5184dcd4894cde1ba3cfca943, lower: 0x6c8078d99a0c4db49fd67f89dac8bcd0 }, // 924
    Multiplier { upper: 0x94b9d57746a4a43a10a4b494fd96edcf, lower: 0x8a0060ae14d6a4907fdecc6e48a0970d }, // 925
    Multiplier { upper: 0xedf6225871076d29b43aba87fc24afb2, lower: 0x7667011687bdd41a66314716da9a8b47 }, // 926
    Multiplier { upper: 0xbe5e81e05a6c5754902efb9ffcea2628, lower: 0x5eb8cdab9fcb10151e8dd278aee20906 }, // 927
    Multiplier { upper: 0x984b9b19e1f045dd402596199721b820, lower: 0x4bc70aefb308d9aa7ed7db93bf1b3a6b }, // 928
    Multiplier { upper: 0xf3ac2b5c9cb3a2fb99d5bcf5be9c59cd, lower: 0x460b44b2b80e2910caf2f8ec64f85d78 }, // 929
    Multiplier { upper: 0xc2f022b07d5c8262e177ca5e3216ae3d, lower: 0xd1a29d5bc671ba73d58f2d89ea604ac6 }, // 930
    Multiplier { upper: 0x9bf34ef3977d351be793084b5b455831, lower: 0x7482177c9ec161f644728ad4bb803bd2 }, // 931
    Multiplier { upper: 0xf9854b1f58c854f97284da122ba226b5, lower: 0x87368bfa979bcff06d8411545f3392e9 }, // 932
    Multiplier { upper: 0xc79dd5b2ad6d10c78ed0ae74efb4ebc4, lower: 0x6c2ba32edfafd98d2469a776b28fa8bb }, // 933
    Multiplier { upper: 0x9fb177c22457409fa573bec3f2f72303, lower: 0x89bc828be62647a41d2152c55ba62096 }, // 934
    Multiplier { upper: 0xff825936a08b9a9908b9313984be9e6c, lower: 0x0f94041309d6d90695021e0892a36755 }, // 935
    Multiplier { upper: 0xcc68475ee6d615473a2dc0fad0987ebc, lower: 0xd9433675a178ad9edd9b4b3a0ee91f78 }, // 936
    Multiplier { upper: 0xa3869f7f1f11aa9f61be33fbda139897, lower: 0x1435c52ae793be18b14908fb3f20e5f9 }, // 937
    Multiplier { upper: 0x82d219327f41554c4e31c32fe1a946df, lower: 0x435e3755860fcb46f43a6d95cc1a5194 }, // 938
    Multiplier { upper: 0xd1502850cb9bbbad49e9384c9c420afe, lower: 0xd2305888d67faba4b9f715bc79c3b5ba }, // 939
    Multiplier { upper: 0xa7735373d6162fbdd4ba93707d01a265, lower: 0x74f37a0711ffbc83c7f8de3061695e2e }, // 940
    Multiplier { upper: 0x85f5dc5cab44f2fe43c875f3973481ea, lower: 0xc3f5fb38db32fd363993e4f381211825 }, // 941
    Multiplier { upper: 0xd6562d611207eb306c73efec2520cfde, lower: 0x06565ec15eb7fb89f5b96e526834f36f }, // 942
    Multiplier { upper: 0xab78244da80655c056c32656841a3fe4, lower: 0xd1deb2344bc662d4c4945841ecf72925 }, // 943
    Multiplier { upper: 0x892ce9d7b99eab004568eb7869ae9983, lower: 0xdb188e903c9eb57703a9e034bd928751 }, // 944
    Multiplier { upper: 0xdb7b0fbf8f6444cd3bdb125a42b0f59f, lower: 0xc4f4174d2dcabbf19f76338795b73ee8 }, // 945
    Multiplier { upper: 0xaf95a632d91d03d76315a848355a5e19, lower: 0x6a5cdf70f16efcc14c5e8f9faaf8ff20 }, // 946
    Multiplier { upper: 0x8c77b828adb0cfdf8277b9d35de1e4e1, lower: 0x21e3e5f3f458ca343d1872e62260cc1a }, // 947
    Multiplier { upper: 0xe0bf8d0de2b47fcc03f2c2ebc9696e35, lower: 0x03063cb986f476b9fb5a51703701468f }, // 948
    Multiplier { upper: 0xb3cc70d7e890663ccff568bca12124f7, lower: 0x359e96fad25d2bc7fc48412692676ba6 }, // 949
    Multiplier { upper: 0x8fd6c0acba0d1e970cc453ca1a80ea5f, lower: 0x5e1878c8a84a896cc9d367520eb922eb }, // 950
    Multiplier { upper: 0xe624677ac34830f1ae06ec7690ce43cb, lower: 0xc9c0c1410d440f14761f0bb67df504ab }, // 951
    Multiplier { upper: 0xb81d1f9569068d8e24d256c540a50309, lower: 0x6e33cdcda4367276c4e5a2f864c403bc }, // 952
    Multiplier { upper: 0x934a7faaba6ba471b70eabd10084026d, lower: 0xf1c30b0ae9c5285f03eae8c6b7033630 }, // 953
    Multiplier { upper: 0xebaa65ddf712a0b5f1b112e800d33716, lower: 0x4f9e7811760840980644a7a458052380 }, // 954
    Multiplier { upper: 0xbc88517e5f421a2b27c0dbeccd75c5ab, lower: 0x72e52cdac4d366e00503b950466a82cd }, // 955
    Multiplier { upper: 0x96d374651901ae88ec9a498a3df7d155, lower: 0xf58423e2370f85800402faa69ebb9bd7 }, // 956
    Multiplier { upper: 0xf15253d4f4cf7da7e0f6dc1063261bbc, lower: 0xbc069fd05818d599a004c43dcac5c625 }, // 957
    Multiplier { upper: 0xc10ea9772a3f97b980c57cd9e8eb4963, lower: 0xc99ee640467a447ae66a3697d56b04eb }, // 958
    Multiplier { upper: 0x9a72212c21cc796133d130ae53ef6de9, lower: 0x6e18b8336b9503958521c54644559d89 }, // 959
    Multiplier { upper: 0xf71d01e03613f56852e84de3b97f1642, lower: 0x49c126b8ac219f55a1cfa20a06ef6274 }, // 960
    Multiplier { upper: 0xc5b0ce4cf80ff786a8b9d7e961327835, lower: 0x07cdb893bce7b2aae7d94e6e6bf2b52a }, // 961
    Multiplier { upper: 0x9e270b70c6732c6bba2e46544dc1f9c4, lower: 0x063e2d42fd862888b97aa525232890ee }, // 962
    Multiplier { upper: 0xfd0b45813d8513df904a0a207c698fa0, lower: 0x09fd1537fc09da745bf76ea1d1da817d }, // 963
    Multiplier { upper: 0xca6f6acdcad0dcb2d9d4d4e6c9ee0c80, lower: 0x07fdaa933007e1f6aff9254e417b9aca }, // 964
    Multiplier { upper: 0xa1f2bbd7d573e3c247dd771f07f1a399, lower: 0x9ffe220f599fe7f88cc7510b6796156f }, // 965
    Multiplier { upper: 0x818efcacaac31c9b6cb12c18d327b614, lower: 0x7ffe81a5e14cb993a3d2a73c52de778c }, // 966
    Multiplier { upper: 0xcf4b2de111382dc57ab5135aeb72bced, lower: 0x999735d635478f529fb771fa1e30bf46 }, // 967
    Multiplier { upper: 0xa5d5be4da760249dfbc40f7bef8efd8a, lower: 0xe145c4ab5dd2d90ee62c5b2e7e8d65d2 }, // 968
    Multiplier { upper: 0x84aafea485e683b1963672c98c72646f, lower: 0x1a9e36ef7e42473f1e89e28b98711e41 }, // 969
    Multiplier { upper: 0xd444caa0d63d9f8289f0b7a8e0b70718, lower: 0x2a96be4bfd36d864fda96a78f3e83068 }, // 970
    Multiplier { upper: 0xa9d0a21a44fe19353b26f953e6f8d279, lower: 0xbbabcb6ffdc579ea64878860c32026ba }, // 971
    Multiplier { upper: 0x87da1b483731adc42f52610febfa41fa, lower: 0xfc896f8ccb046188506c6d1a35b3522f }, // 972
    Multiplier { upper: 0xd95cf8738b82afa04bb701b3132a032b, lower: 0x2da8b27ade6d68da1a4714f6bc521d17 }, // 973
    Multiplier { upper: 0xade3f9f60935594d095f348f42880288, lower: 0xf153c1fbe52453e1ae9f43f896a81746 }, // 974
    Multiplier { upper: 0x8b1cc7f8075de10a6de5c3a5ced3353a, lower: 0x5aa967fcb750431af219032d455345d1 }, // 975
    Multiplier { upper: 0xde947326722fce77163c6c3c7e1ebb90, lower: 0x910f0cc78bb39e91835b38486eeba2e8 }, // 976
    Multiplier { upper: 0xb2105c1ec1bfd85f44fd23639818960d, lower: 0x40d8d706095c7edacf7c2d06bf22e8ba }, // 977
    Multiplier { upper: 0x8e737ce567ccad1903fdb5e9467a11a4, lower: 0x33e0ac04d449ff1572c9bd9eff4f2095 }, // 978
    Multiplier { upper: 0xe3ebfb08a61448280662bca870c34f6d, lower: 0x1fcde007ba0ffe88b7a92f64cbb1cdbb }, // 979
    Multiplier { upper: 0xb656626d51a9d353384efd538d690c57, lower: 0x4ca4b33961a6653a2c87591d6fc17162 }, // 980
    Multiplier { upper: 0x91deb5244154a90f603f310fa45409df, lower: 0x7083c2944e1eb761bd3914178c9ac11c }, // 981
    Multiplier { upper: 0xe9645506ceeddb4bcd31e81906ecdc98, lower: 0xb40604207cfdf235fb8e868c142ace92 }, // 982
    Multiplier { upper: 0xbab6aa6bd8be490970f4b9ad9f23e3ad, lower: 0x5cd19ce6ca64c1c4c93ed209a9bbd875 }, // 983
    Multiplier { upper: 0x955eeebcad65073ac0c3c7be18e982f1, lower: 0x170e171f08509b03d43241a1549646c4 }, // 984
    Multiplier { upper: 0xeefe4ac77bd4d85e01393f968e426b1b, lower: 0x58168b64da1a919fb9ea029bba8a0ad3 }, // 985
    Multiplier { upper: 0xbf31d56c6310ad1800fa99453e9b88e2, lower: 0xacded5ea4815414c94bb3549620808a9 }, // 986
    Multiplier { upper: 0x98f4aabd1c0d5746672ee1043216071b, lower: 0xbd7f118839aa9aa3aa2f5dd44e6cd3ba }, // 987
    Multiplier { upper: 0xf4baaac82ce2253d71e49b39e9bcd82c, lower: 0x6264e8d9f5ddc439104bc953b0ae1f90 }, // 988
    Multiplier { upper: 0xc3c888a023e81dcac183af6187ca4689, lower: 0xe850ba47f7e49cfa736fd442f3be7fa7 }, // 989
    Multiplier { upper: 0x9ca06d4ce9867e3bce02f2b46ca1d207, lower: 0xed0d61d32cb6e3fb8f8ca9cf296532ec }, // 990
    Multiplier { upper: 0xfa9a487b0f3d96c6166b1ded7a9c833f, lower: 0xe1af02eb7abe39927f477618423b84ac }, // 991
    Multiplier { upper: 0xc87b6d2f3f64789e7855b18ac87d35cc, lower: 0xb48c0255fbcb6141ff6c5e79ce9603bd }, // 992
    Multiplier { upper: 0xa062bdbf65e9fa1860448e08a0642b0a, lower: 0x2a099b77fca2b434cc56b1fb0bab3631 }, // 993
    Multiplier { upper: 0x804efe32b7ee61ad19d071a08050226e, lower: 0x8807af93308229c3d6abc195a2ef5e8e }, // 994
    Multiplier { upper: 0xcd4b3051264a35e1c2e71c3400803717, lower: 0x400c4c1eb40376062446028904b230e3 }, // 995
    Multiplier { upper: 0xa43c26a751d4f7e7cf1f49c33399c5ac, lower: 0x333d09b2299c5e6b5038020736f4f3e9 }, // 996
    Multiplier { upper: 0x8363521f74aa5feca5b2a168f6149e23, lower: 0x5c30d48e87b04b890cf99b38f8c3f654 }, // 997
    Multiplier { upper: 0xd23883658776ffe1091dcf0e5687636b, lower: 0xc6b4874a72b3ac0e7b28f85b279ff086 }, // 998
    Multiplier { upper: 0xa82d35ead2c59980d417d8d845391c56, lower: 0x38906c3b8ef6233ec8ed937c1fb326d1 }, // 999
    Multiplier { upper: 0x868a9188a89e1467101313e03760e378, lower: 0x2d4056960bf81c323a57a930195c1f0e }, // 1000
    Multiplier { upper: 0xd7441c0dda96870b4ceb5300589b058d, lower: 0x1533bdbcdff360505d590eb35bc69816 }, // 1001
    Multiplier { upper: 0xac367cd7e21205a2a3ef7599e07c0470, lower: 0xddc2fe30b32919d9e4473ef5e3054678 }, // 1002
    Multiplier { upper: 0x89c530acb4db37b54ff2c47b19fcd05a, lower: 0x4b0264f3c28747e1836c325e4f376b94 }, // 1003
    Multiplier { upper: 0xdc6eb44787c525eee6513a5e8ffae6f6, lower: 0xde6a3b1f9da53fcf38ad1d63b1f245b9 }, // 1004
    Multiplier { upper: 0xb0589039396a84bf1ea761e53ffbebf8, lower: 0xb1ee95b2e484330c2d574ab627f50494 }, // 1005
    Multiplier { upper: 0x8d13a6942deed098e552b4b76663232d, lower: 0x5b25448f1d368f3cf112a22b532a6a10 }, // 1006
    Multiplier { upper: 0xe1b90a86afe480f4a21dedf23d6b6b7b, lower: 0xc5086db1c8574b94b4ea9d121eaa434c }, // 1007
    Multiplier { upper: 0xb494086bbfea00c3b4e4be5b6455ef96, lower: 0x3739f15b06ac3c76f7221741b221cf70 }, // 1008
    Multiplier { upper: 0x90766d22ffee6702f71d6515e9de5944, lower: 0xf8fb277c055696c59281ac348e8172c0 }, // 1009
    Multiplier { upper: 0xe723e1d1997d719e582f08230fca286e, lower: 0x5b2b7260088a8ad5b735e05417358467 }, // 1010
    Multiplier { upper: 0xb8e981747acac14b79bf39b5a63b538b, lower: 0x7c22c1e66d3ba2449291804345c469ec }, // 1011
    Multiplier { upper: 0x93ee0129fbd5676f9498faf7b82f7609, lower: 0x301bce51f0fc81d075413369049d218a }, // 1012
    Multiplier { upper: 0xecb001dcc6223f18edc1918c59e589a8, lower: 0x4cf94a1cb4c7361a55351f0e6dc835a9 }, // 1013
    Multiplier { upper: 0xbd599b1704e8327a57ce0e09e1846e20, lower: 0x3d943b4a2a38f81510f74c0b8b069154 }, // 1014
    Multiplier { upper: 0x977ae278d0b9c1fb7971a4d4b469f1b3, lower: 0x647695d4ee93f9aa73f909a2d59edaaa }, // 1015
    Multiplier { upper: 0xf25e3727b45c69925be907baba431c52, lower: 0x3a5756217db98f771ff4dc37bc315ddc }, // 1016
    Multiplier { upper: 0xc1e4f8ec9049ee0eafed9fc895027d0e, lower: 0x9512ab4dfe2e0c5f4cc3e35fc9c117e3 }, // 1017
    Multiplier { upper: 0x9b1d93f0736e580bbff14ca0773530d8, lower: 0x774222a4cb5809e5d7031c4ca167464f }, // 1018
    Multiplier { upper: 0xf82f531a524a2679331badcd8b884e27, lower: 0x25369dd4788cdca2f19e93adcf0ba3b2 }, // 1019
    Multiplier { upper: 0xc68c427b75081ec75c1624a46fa03e85, lower: 0xb75ee4a9fa0a4a1bf47edc8b0c094fc2 }, // 1020
    Multiplier { upper: 0x9ed69b95f739b23916781d50594cfed1, lower: 0x5f7f1d54c8083b4990657d3c09a10c9b }, // 1021
    Multiplier { upper: 0xfe242c2325291d2823f3621a287b314e, lower: 0xff31c887a673920f4d6f2ec675ce7a91 }, // 1022
    Multiplier { upper: 0xcb50234f50edb0ece98f81ae86c8f43f, lower: 0x328e3a061ec2db3f7125bf052b0b9541 }, // 1023
    Multiplier { upper: 0xa2a682a5da57c0bd87a601586bd3f698, lower: 0xf53e94d1b2357c32c0eaff3755a2ddce }, // 1024
    Multiplier { upper: 0x821eceeb151300979fb8011389765ee0, lower: 0xc43210a7c1c4635bcd88cc2c44824b0b }, // 1025
    Multiplier { upper: 0xd0314b11bb519a8c32c001b8dbf097ce, lower: 0x06b6810c693a3892e27479e06d9d44de }, // 1026
    Multiplier { upper: 0xa68dd5a7c90e153cf56667c7165a130b, lower: 0x389200d6ba94fa0f1b90618057b103e5 }, // 1027
    Multiplier { upper: 0x853e44863a71aa972ab85305ab7b426f, lower: 0x6074cd789543fb3f49404e0046273651 }, // 1028
    Multiplier { upper: 0xd5306da390b5ddbeaac084d5df2b9d7f, lower: 0x00bae25a886cc5320ecd499a09d856e8 }, // 1029
    Multiplier { upper: 0xaa8d2482da2b17cbbbcd37117f561798, lower: 0xcd624eaed38a375b3f0aa14807e04586 }, // 1030
    Multiplier { upper: 0x8870ea024822796fc970f8dacc44dfad, lower: 0x711b722576082c48ff3bb4399fe69e05 }, // 1031
    Multiplier { upper: 0xda4e4336d9d0c24c75818e2ae06e32af, lower: 0x1b5f1d08bcd9e074cb92b9f5cca43008 }, // 1032
    Multiplier { upper: 0xaea5029247da3509f79ad8224d24f558, lower: 0xe2b27da09714b390a2dbc7f7d6e9c006 }, // 1033
    Multiplier { upper: 0x8bb73541d314f73b2c7be01b70ea5de0, lower: 0xb55b97b3ac108fa6e8afd32cabee3338 }, // 1034
    Multiplier { upper: 0xdf8b886951bb252b7a5fccf8b4aa2fcd, lower: 0xeef8f2b9134db2a4a77fb847797d1ec0 }, // 1035
    Multiplier { upper: 0xb2d606baa7c8ea892eb30a609088263e, lower: 0x58c728940f715bb6ec662d05faca7f00 }, // 1036
    Multiplier { upper: 0x8f119efbb96d886dbef5a1e6da0684fe, lower: 0xad6c207672c1162bf051bd9e623b98cd }, // 1037
    Multiplier { upper: 0xe4e8fe5f8f15a715fe55cfd7c33da197, lower: 0x7be033f0b79b56acb3b5fc309d2c27af }, // 1038
    Multiplier { upper: 0xb720cb7fa5aaec119844a64635cae7ac, lower: 0x6319c326f9491223c2f7fcf3b0f01fbf }, // 1039
    Multiplier { upper: 0x9280a2cc8488bcdae036eb6b5e3bec89, lower: 0xe8e168ebfaa0db4fcf2cca5c8d8ce632 }, // 1040
    Multiplier { upper: 0xea676ae0d40dfaf7cd24abdefd2cada9, lower: 0x749bdb132a9af87fb1e143c748e17050 }, // 1041
    Multiplier { upper: 0xbb85ef1a433e625fd750897f30f08aed, lower: 0xf6e315a8eee2606627e7696c3a4df374 }, // 1042
    Multiplier { upper: 0x9604bf4835cb81e645da0798f3f3a257, lower: 0xf8b5aaed8be84d1e8652babcfb718f90 }, // 1043
    Multiplier { upper: 0xf007987389459ca3a2f6728e531f6a26, lower: 0x5abc44af46407b640a1df794c5827f4c }, // 1044
    Multiplier { upper: 0xc006138fa1047d4fb591f53ea8e5ee85, lower: 0x15636a25d1cd2f833b4b2c77046865d7 }, // 1045
    Multiplier { upper: 0x999e760c80d0643fc474c43220b7f204, lower: 0x111c54eb0e3dbf9c2f6f56c59d205179 }, // 1046
    Multiplier { upper: 0xf5ca567a67b3d3993a546d1d01265006, lower: 0x81c6ee44e395ff604be557a29500825a }, // 1047
    Multiplier { upper: 0xc4a1dec852f642e0fb76bdb0cdb84005, lower: 0x349f2503e944cc4d0984461baa66ceaf }, // 1048
    Multiplier { upper: 0x9d4e4bd37591cf1a62c5648d71603337, lower: 0x5d4c1d9cba9d703da1369e7c88523ef2 }, // 1049
    Multiplier { upper: 0xfbb0795255b6182a37a23a7be899eb8b, lower: 0xc879c8fac42f19fc352430c7408397ea }, // 1050
    Multiplier { upper: 0xc959faa84491acee92e82ec986e1893c, lower: 0xa0616d9569bf47fcf7502705cd361321 }, // 1051
    Multiplier { upper: 0xa114c8869d415725425358a138b46dca, lower: 0x19e78addee329ffd92a6859e3dc4dc1b }, // 1052
    Multiplier { upper: 0x80dd6d387dcddf5101dc46e7609057d4, lower: 0xe18608b18b5bb331421ed14b649d7ce2 }, // 1053
    Multiplier { upper: 0xce2f15272fafcbb4cfc6d7d89a808c87, lower: 0xcf3cdab5abc5eb82036482123a95949d }, // 1054
    Multiplier { upper: 0xa4f277528c8ca2f70c9f1313aecd3d39, lower: 0x7297155e2304bc6802b6ce74fbaadd4b }, // 1055
    Multiplier { upper: 0x83f52c420a0a1bf8d6e5a8dc8bd7642d, lower: 0xf545aab1b59d638668923ec3fc88b109 }, // 1056
    Multiplier { upper: 0xd321e069a9a9c65af16f749412f239e3, lower: 0x2209111c55c89f3d741d3139940de80d }, // 1057
    Multiplier { upper: 0xa8e7e6baee216b7bf4592a100f282e4f, lower: 0x4e6da749de3a18fdf67dc0fadcd7ecd8 }, // 1058
    Multiplier { upper: 0x871febc8be8122c9904754d9a5b9bea5, lower: 0xd857b907e4fb473191fe33fbe3dff0ad }, // 1059
    Multiplier { upper: 0xd83312daca6837a8e6d887c2a2c2caa2, lower: 0xf3bf8e7307f871e8e996b99306331aae }, // 1060
    Multiplier { upper: 0xacf5a8af08535fba5246d3021bcf0882, lower: 0x5c993ec26cc6c187214561426b5c1558 }, // 1061
    Multiplier { upper: 0x8a5e208c06a91961db6bdc01afd8d39b, lower: 0x7d4765685705679f4dd11a9b89167779 }, // 1062
    Multiplier { upper: 0xdd636746710e8f02f8ac9335e627b8f8, lower: 0xc8723bda24d572987c81c42c0e8a58c2 }, // 1063
    Multiplier { upper: 0xb11c529ec0d87268c6f075c4b81fc72d, lower: 0x6d282fe1b7112879fd349cf00ba1e09b }, // 1064
    Multiplier { upper: 0x8db042189a46c1ed6bf3916a2ce638f1, lower: 0x2420264e2c0db9fb30f6e3f33c81807c }, // 1065
    Multiplier { upper: 0xe2b39cf42a0acfe2465282437b09f4b5, lower: 0x0699d6e379af8ff84e57d31ec7359a60 }, // 1066
    Multiplier { upper: 0xb55c7d9021a23fe8384201cf95a19090, lower: 0xd214abe92e260cc6a5130f4bd291484d }, // 1067
    Multiplier { upper: 0x9116cad9b481ccb9c69b34a6114e0d40, lower: 0xa8108987581e709eea75a5d6420dd371 }, // 1068
    Multiplier { upper: 0xe82477c2ba69478fa42b87701bb01534, lower: 0x401a75a559ca4dcb10bc3c8a0349524e }, // 1069
    Multiplier { upper: 0xb9b6c63561edd2d95022d2c01626775d, lower: 0x00152aeaae3b716f409696d4cf6ddb72 }, // 1070
    Multiplier { upper: 0x9492382ab4be4247734f0f0011b85f7d, lower: 0x99aa88bbbe95f459007878aa3f8b15f5 }, // 1071
    Multiplier { upper: 0xedb6c04454639d3f1ee4e4cce926ff2f, lower: 0x5c440df930efed5b33f3f44398de8987 }, // 1072
    Multiplier { upper: 0xbe2bcd0376b61765b250b70a541f328c, lower: 0x49d00b2dc0bff115c329903613e53ad3 }, // 1073
    Multiplier { upper: 0x98230a692bc4df848ea6f8d51018f53d, lower: 0x07d9a28b00998dab0287a691a9842f0f }, // 1074
    Multiplier { upper: 0xf36b43db793aff3a7dd7f48819c18861, lower: 0xa62904119a8f49119da5d74f75a04b4b }, // 1075
    Multiplier { upper: 0xc2bc36492dc8cc2ecb132a067b0139e7, lower: 0xb820d00e153f6da7b151790c5e19d5d6 }, // 1076
    Multiplier { upper: 0x9bc9c50757d3d68bd5a8ee6b959a94b9, lower: 0x601a400b4432be1fc10dfa704b47de45 }, // 1077
    Multiplier { upper: 0xf942d4d88c862412ef74b0ac2290edf5, lower: 0x669066786d1dfcff9b4990b3aba6306e }, // 1078
    Multiplier { upper: 0xc768aa46d6d1b6758c5d5a234eda57f7, lower: 0x854051f9f0e4ca6615d473c2efb826be }, // 1079
    Multiplier { upper: 0x9f86ee9f12415ec4704aae82a57b7992, lower: 0xd1004194c0b70851ab105c9bf2f9b898 }, // 1080
    Multiplier { upper: 0xff3e4a981d35646d80777d9dd5925c1e, lower: 0x1b339c2134580d4f781a2dc6518f8dc0 }, // 1081
    Multiplier { upper: 0xcc31d5467dc4505799f9314b1141e34b, lower: 0x48f61680f6acd772c67b57d1dad93e33 }, // 1082
    Multiplier { upper: 0xa35b11053169d9dfae60f43c0dce4f6f, lower: 0x6d91ab9a5ef0ac5bd1fc46417be0fe90 }, // 1083
    Multiplier { upper: 0x82af40d0f454ae4c8b80c3633e3ea5f2, lower: 0xbe0e22e1e58d56afdb303834631a6540 }, // 1084
    Multiplier { upper: 0xd11867b4ba2116e0df346bd1fd310984, lower: 0x6349d1696f488ab2f84d26ba382a3b99 }, // 1085
    Multiplier { upper: 0xa746b95d61b4124d7f5d230e64273ad0, lower: 0x4f6e412125d3a228c6a41efb6021c947 }, // 1086
    Multiplier { upper: 0x85d22de44e29a83dff7db5a51cec2f0d, lower: 0x0c58341a84a94e87055018c919b4a106 }, // 1087
    Multiplier { upper: 0xd61d163a16a90d2fff2f89082e46b1ae, lower: 0x7a26b9c407754a71a219c141c2ba9b3c }, // 1088
    Multiplier { upper: 0xab4a782e78873dbfff593a6cf1d227be, lower: 0xc81efb03392aa1f481ae34349bc87c30 }, // 1089
    Multiplier { upper: 0x890860252d38fe3332adc85727db52ff, lower: 0x067f2f35c7554e5d348b5cf6e306c9c0 }, // 1090
    Multiplier { upper: 0xdb4099d51527fd1eb77c73bea62bb7fe, lower: 0x70cb7ebc722216fb8745618b04d7a934 }, // 1091
    Multiplier { upper: 0xaf66e177441ffdb22c638fcbb822f998, lower: 0x5a3c65638e81abfc6c37813c03dfba90 }, // 1092
    Multiplier { upper: 0x8c524df9034ccaf4f04fa63c934f2e13, lower: 0x7b63844fa5348996bcf934300319620d }, // 1093
    Multiplier { upper: 0xe083aff4d21477ee4d4c3d2db87eb01f, lower: 0x2bd26d4c3b87428ac7f5204cd1c2367a }, // 1094
    Multiplier { upper: 0xb39c8cc3db4393250aa3642493988ce5, lower: 0xbca857702f9f686f065db370a7ce91fc }, // 1095
    Multiplier { upper: 0x8fb0709caf6942840882b683a946d71e, lower: 0x3086ac59bfb2b9f26b7e2926eca54196 }, // 1096
    Multiplier { upper: 0xe5e71a944bdb9da00d9df0d2a8715830, lower: 0x4da446f5ff845cb71263750b143b9c23 }, // 1097
    Multiplier { upper: 0xb7ec15436fe2e4800ae4c0a886c11359, lower: 0xd7b69f2b32d04a2c0eb5f73c102fb01c }, // 1098
    Multiplier { upper: 0x93234435f31bea0008b70086d2340f7b, lower: 0x12f87f55c2403b56722b2c300cf2f34a }, // 1099
    Multiplier { upper: 0xeb6ba05651c643334124cda483867f2b, lower: 0x518d988936cd2bbd837846b347eb1edc }, // 1100
    Multiplier { upper: 0xbc5619dea7d1cf5c341d7150693865bc, lower: 0x413e13a0f8a422fe02c69ef5d3227f17 }, // 1101
    Multiplier { upper: 0x96ab47e5530e3f7cf67df440542d1e30, lower: 0x3431a94d93b68264cf054bf7dc1b98df }, // 1102
    Multiplier { upper: 0xf1120ca21e7d32618a632066ed14fd19, lower: 0xed1c4215b92403d47e6edff2f9c5c165 }, // 1103
    Multiplier { upper: 0xc0db3d4e7eca8eb46eb5b3858a7730e1, lower: 0x8a7d01aafa8336439858b328c7d16784 }, // 1104
    Multiplier { upper: 0x9a48fdd8656ed89058915c6ad52c271a, lower: 0xd530ce22620291cfad13c28706411f9d }, // 1105
    Multiplier { upper: 0xf6db2fc0a24af41a274efa448846a4f7, lower: 0xbb8149d09cd0e94c481f9da4d6ce98fb }, // 1106
    Multiplier { upper: 0xc57c2633b508c3481f7261d06d0550c6, lower: 0x2f9aa173b0a72109d34c7e1d78a5472f }, // 1107
    Multiplier { upper: 0x9dfceb5c90d3cf6ce5f51b0d2404409e, lower: 0x8c7bb45c8d5280d4a909fe7dfa1dd28c }, // 1108
    Multiplier { upper: 0xfcc7defa8152e57b09882b4839a06764, lower: 0x13f920941550ce210e7663fcc362ea79 }, // 1109
    Multiplier { upper: 0xca397f2ecddbeac8d46cef6cfae6b91c, lower: 0xdcc74d434440a4e73ec51cca35e8bb94 }, // 1110
    Multiplier { upper: 0xa1c798f23e4988a0a9f0bf8a62522db0, lower: 0xb09f71029d0083ec32374a3b5e53c944 }, // 1111
    Multiplier { upper: 0x816c7a5b6507a08087f3cc6eb50e8af3, lower: 0xc07f8d9bb0cd36568e92a1c918430769 }, // 1112
    Multiplier { upper: 0xcf13f6f8a1a5cd9a731fad7dee7dab1f, lower: 0x9a65af5f814856f0e41dcfa826d1a575 }, // 1113
    Multiplier { upper: 0xa5a99260815171485c195797f1fe227f, lower: 0xaeb7bf7f9aa0458d834b0c868574845e }, // 1114
    Multiplier { upper: 0x8487a84d3441276d167aac798e64e866, lower: 0x255fcc66154d047135d5a39ed12a037e }, // 1115
    Multiplier { upper: 0xd40c407b86cea57b572aad8f4a3b0d70, lower: 0x3bcc7a3ceee1a0b522ef6c314ea99f30 }, // 1116
    Multiplier { upper: 0xa9a366c938a5512f78eef13f6e95a459, lower: 0xc97061ca58b48090e8bf89c10bbae5c0 }, // 1117
    Multiplier { upper: 0x87b5ebd42d510dbf93f25a992544837b, lower: 0x078d1b0846f6cd40ba32d49a6fc8b7cd }, // 1118
    Multiplier { upper: 0xd92312ed154e7c65b983c4283ba0d25e, lower: 0x727b5e73a4be15345d1e20f719412615 }, // 1119
    Multiplier { upper: 0xadb5a8bdaaa5305161363686961a41e5, lower: 0x2862b1f61d64ddc37db1b3f8e100eb44 }, // 1120
    Multiplier { upper: 0x8af7ba315550f3744dc4f86bab4834b7, lower: 0x538227f81783e49c648e2993e733ef6a }, // 1121
    Multiplier { upper: 0xde5929e888818586e2d4c0ac45405458, lower: 0x859d0cc0259fd42d6db042863eb97f0f }, // 1122
    Multiplier { upper: 0xb1e0ee53a0679e058243cd569dcd1046, lower: 0xd14a7099b7b3102457c03538322dff3f }, // 1123
    Multiplier { upper: 0x8e4d8b7619ec7e6ace9ca4454b0a736b, lower: 0xdaa1f3ae2c8f401d13002a935b57ff66 }, // 1124
    Multiplier { upper: 0xe3af4589c313fd77b0faa06ede771f12, lower: 0xf76985e37a7eccfb5199ddb892266570 }, // 1125
    Multiplier { upper: 0xb625d13b0276645fc0c88058b1f8e5a8, lower: 0xc5ee04b5fb98a3fc4147e493a81eb78d }, // 1126
    Multiplier { upper: 0x91b7da959b91e9e633d399e08e60b7ba, lower: 0x37f19d5e62e08330343983a9534bc60a }, // 1127
    Multiplier { upper: 0xe9262a88f8e9763d1fb8f634170125f6, lower: 0xbfe8fbca37cd9eb386c26c421edfa343 }, // 1128
    Multiplier { upper: 0xba84eed3fa545e974c93f829ac00eb2b, lower: 0xccba63082ca47ef60568569b4be61c36 }, // 1129
    Multiplier { upper: 0x9537257661dd18790a0ff9baf000bc23, lower: 0x0a2eb5a023b6cbf80453787c3cb81692 }, // 1130
    Multiplier { upper: 0xeebea25702fb5a5b434cc2c4b3346038, lower: 0x104abc336c57acc006ebf3f9fac0241c }, // 1131
    Multiplier { upper: 0xbefee8459bfc484902a3cf03c2904cf9, lower: 0xa6a230292379570005898ffb2f001ce3 }, // 1132
    Multiplier { upper: 0x98cbed047cc9d36d9bb63f3635403d94, lower: 0x854e8cedb5faac00046e0cc8f2667d83 }, // 1133
    Multiplier { upper: 0xf4797b3a6142ebe292bd31f0553395ba, lower: 0x6ee414af899113333a49ae0e50a3fc04 }, // 1134
    Multiplier { upper: 0xc39462951a9befe8756427f3775c77c8, lower: 0x58b676f2d4740f5c2ea1580b73b66336 }, // 1135
    Multiplier { upper: 0x9c76b54415498cb9f78353292c49f96d, lower: 0x13c52bf576c33f7cf21aacd5f62b8292 }, // 1136
    Multiplier { upper: 0xfa57886ceedc145cbf38850ead4328ae, lower: 0x860846558ad1ff2e502aae232378d0e9 }, // 1137
    Multiplier { upper: 0xc84606bd8be3437d65c6d0d88a9c208b, lower: 0x9e6d05113bdb328b7355581c1c60a721 }, // 1138
    Multiplier { upper: 0xa03805646fe902cab7d240ad3bb01a09, lower: 0x4b8a6a742fe28ed5f5dde0167d1a1f4e }, // 1139
    Multiplier { upper: 0x802cd11d2654023bc641cd5762f34807, lower: 0x6fa1eec359820bde5e4b19ab9748190b }, // 1140
    Multiplier { upper: 0xcd1481c83d5336c60a02e2256b1ed9a5, lower: 0x7f697e055c03463096de8f78f20cf4de }, // 1141
    Multiplier { upper: 0xa41067d36442923808024e8455b247b7, lower: 0x9921319de335d1c078b20c60c1a3f718 }, // 1142
    Multiplier { upper: 0x8340530f836874f9a001d869de28395f, lower: 0xadb427b182917499fa2809e7014ff8e0 }, // 1143
    Multiplier { upper: 0xd20084e59f0d87f5cccfc0a963738eff, lower: 0x7c5372b59db5875cc373430b354cc167 }, // 1144
    Multiplier { upper: 0xa8006a514c0ad32b0a3fcd544f8fa599, lower: 0x3042c22ae491391702c29c08f7709ab9 }, // 1145
    Multiplier { upper: 0x8666bb743cd575bc08330aa9d93fb7ad, lower: 0xc035682250742dac023549a0c5f3aefa }, // 1146
    Multiplier { upper: 0xd70ac586c7bbef934051aaa95b9925e2, lower: 0xcd224036e720491336bba9013cb917f7 }, // 1147
    Multiplier { upper: 0xac089e056c96594299daeeede2e0eb1b, lower: 0xd74e99c585b36da8f89620cdca2dacc5 }, // 1148
    Multiplier { upper: 0x89a07e6abd45143547e258be4f1a55af, lower: 0xdf72149e048f8aed93ab4d716e8af09e }, // 1149
    Multiplier { upper: 0xdc33fd77953b53887303c1307e908919, lower: 0x65835430074c117c1f787be8b0de4dc9 }, // 1150
    Multiplier { upper: 0xb0299792ddc90fa05c0300f39873a0e1, lower: 0x1e02a9c005d674634c6063208d7ea4a1 }, // 1151
    Multiplier { upper: 0x8cee12dbe4a0d94d1668cd8fad294d80, lower: 0xe4ceee3337dec382a3804f4d3dfeea1b }, // 1152
    Multiplier { upper: 0xe17ceaf96dce287b570e15b2aea87c01, lower: 0x6e17e385263138d1059a187b9664a9c4 }, // 1153
    Multiplier { upper: 0xb463ef2df171b9fc45a4de288bb9fccd, lower: 0xf1acb6041e8dc70d9e14e062deb6ee36 }, // 1154
    Multiplier { upper: 0x904ff28b278e2e636aea4b53a2fb30a4, lower: 0xc156f8034ba49f3e1810b3824bc58b5f }, // 1155
    Multiplier { upper: 0xe6e650dea5b04a38ab107885d191e76e, lower: 0x0224c00545d431fcf34dec03ac6f4564 }, // 1156
    Multiplier { upper: 0xb8b840b21e26a1c6ef40606b0e0e52be, lower: 0x681d666a9e435b30c2a4bccfbd25d11d }, // 1157
    Multiplier { upper: 0x93c69a28181ee7d259004d2271a50efe, lower: 0xb9b11ebbb1cf7c27021d63d9641e40e4 }, // 1158
    Multiplier { upper: 0xec70f6a68cfe3fb6f4cd48371c3b4b31, lower: 0x291b645f82e593719cfbd2f56cfd34a0 }, // 1159
    Multiplier { upper: 0xbd272bb870cb662bf70aa02c1695d5c0, lower: 0xedaf837f9beadc5ae3fca8c45730f6e6 }, // 1160
    Multiplier { upper: 0x975289605a3c51bcc5a219bcdede449a, lower: 0x57bf9c6616557d158330870378f3f8b8 }, // 1161
    Multiplier { upper: 0xf21da89a29fa1c613c368f9497ca075d, lower: 0x593293d68a2261bc051a719f27ecc127 }, // 1162
    Multiplier { upper: 0xc1b153ae87fb49e7635ed943aca19f7d, lower: 0xe0f54312081b816337485ae5b98a341f }, // 1163
    Multiplier { upper: 0x9af442f20662a185e918adcfbd4e1931, lower: 0x80c435a8067c678292a048b7c7a1c34c }, // 1164
    Multiplier { upper: 0xf7ed37e9a3d1026fdb5aafb2c87cf51c, lower: 0x0139ef733d93d8d0ea9a0df2d902d213 }, // 1165
    Multiplier { upper: 0xc6575fee1ca735264915595bd3972a7c, lower: 0xcdc7f2c297a97a40bbae718f140241a9 }, // 1166
    Multiplier { upper: 0x9eac4cbe7d5290eb6daaade30fac21fd, lower: 0x716cc23546212e9a2fbec13f43350154 }, // 1167
    Multiplier { upper: 0xfde07aca621db4abe2aaafd1b2ad032f, lower: 0x1be136bba3684a904c6468653854ceed }, // 1168
    Multiplier { upper: 0xcb19fbd51b4af6efe8888ca7c224028c, lower: 0x164dc562e9203ba6a38386b76043d8be }, // 1169
    Multiplier { upper: 0xa27b2fddaf6f2bf3206d3d5301b66870, lower: 0x11d7d11bedb362ebb602d22c4d0313cb }, // 1170
    Multiplier { upper: 0x81fc264af2bf565c19f0fddc015eb9f3, lower: 0x4179741657c2b5895e68a82370cf4309 }, // 1171
    Multiplier { upper: 0xcff9d6de513223c68fe7fc9335645cb8, lower: 0x68c25356f2d1227563daa69f1ae5380e }, // 1172
    Multiplier { upper: 0xa66178b1da8e83053fecca0f5de9e3c6, lower: 0xba350f78c240e85de97bb87f48b7600b }, // 1173
    Multiplier { upper: 0x851ac6f4aed868d0fff0a1a5e4bb1c9e, lower: 0xfb5da5fa3500b9e4bac96065d3c5e66f }, // 1174
    Multiplier { upper: 0xd4f7a4bab15a414e664dcf6fd45e9431, lower: 0x922f6ff6bb345ca12adbcd6fb93ca3e5 }, // 1175
    Multiplier { upper: 0xaa5fb6fbc115010b850b0c5976b21027, lower: 0xa825f32bc8f6b080ef163df2fa96e984 }, // 1176
    Multiplier { upper: 0x884c926300dd9a6f9da2704792280cec, lower: 0x8684c2896d9226cd8c11cb28c878bad0 }, // 1177
    Multiplier { upper: 0xda141d6b3495c3e5c903e6d8e9d9ae47, lower: 0x3da1374248e9d7af4682dea7a727914d }, // 1178
    Multiplier { upper: 0xae767def5d449cb7d4031f13ee47be9f, lower: 0x6480f901d3ee4625d2024bb952860dd7 }, // 1179
    Multiplier { upper: 0x8b91fe59176a16f97668e5a98b6c987f, lower: 0x839a60ce432504eb0e683c944204d7e0 }, // 1180
    Multiplier { upper: 0xdf4ffd5b58a9be5bf0a7d5dc12475a65, lower: 0x9f5d67b06b6e6e44e3d9fa86d007bfcc }, // 1181
    Multiplier { upper: 0xb2a6644913bafeaff3b977e341d2aeb7, lower: 0xb2b11fc055f1f1d0b647fb9f0cd2ffd6 }, // 1182
    Multiplier { upper: 0x8eeb836da96265598fc7931c34a88bc6, lower: 0x288db30044c18e4091d32fb270a8ccac }, // 1183
    Multiplier { upper: 0xe4ac057c4237088f4c7284f9edda793d, lower: 0x0daf84cd3acf4a00e951e5ea4ddae112 }, // 1184
    Multiplier { upper: 0xb6f00463682c06d909f5372e57e1fa97, lower: 0x3e2603d7623f6e67210e51883e48b40f }, // 1185
    Multiplier { upper: 0x92599d1c53566be0d4c42c25131b2edf, lower: 0x64eb3645e832beb8e73ea7a031d3c33f }, // 1186
    Multiplier { upper: 0xea28fb6085571301546d136e84f84aff, lower: 0x07debd3ca6b7978e3ecaa5cd1c860531 }, // 1187
    Multiplier { upper: 0xbb53fc4d3778dc01105742bed0c6a265, lower: 0x9fe56430855fac71cbd55170e39e6a8e }, // 1188
    Multiplier { upper: 0x95dcc9d75f93e3340d129bcbda3881ea, lower: 0xe6511cf39de6238e3caaa78d82e5220b }, // 1189
    Multiplier { upper: 0xefc7a95898ec9eb9ae842c795d273644, lower: 0xa3b4fb1f6309d27d2dddd8e26b083678 }, // 1190
    Multiplier { upper: 0xbfd2ede07a56e5615869bd2de41f5e9d, lower: 0x4fc3fc191c07db9757e4ad81ef39c52d }, // 1191
    Multiplier { upper: 0x99758b19fb78b7811387ca8b1ce5e54a, lower: 0xa6366347499fe2df7983be018c2e3757 }, // 1192
    Multiplier { upper: 0xf588de8ff8c1259b5272ddab616fd544, lower: 0x3d23d20ba8ffd1658f39300279e38bbf }, // 1193
    Multiplier { upper: 0xc46d7ed993cdb7af7528b155e78caa9c, lower: 0xfdb641a2ed9974513f60f3352e4fa2ff }, // 1194
    Multiplier { upper: 0x9d24657adca492f2c4208dde52d6eee3, lower: 0xfe2b67b58ae129da991a5c2a8b72e8cc }, // 1195
    Multiplier { upper: 0xfb6d6f2afaa0eb1e069a7c96eaf17e39, lower: 0x96abd92277cea95dc1c3c6aa78b7dae0 }, // 1196
    Multiplier { upper: 0xc92458ef2ee7227e6baeca12558dfe94, lower: 0x78897a81f9722117ce36388860931580 }, // 1197
    Multiplier { upper: 0xa0e9e0bf58b8e86522f23b41de0b3210, lower: 0x606dfb9b2df4e7463e91c6d38075aacd }, // 1198
    Multiplier { upper: 0x80bb1a32ad60b9ea825b629b1808f4d9, lower: 0xe6be62e28b2a529e98749f0f99f7bbd7 }, // 1199
    Multiplier { upper: 0xcdf829eaaf01297736f89dc4f34187c3, lower: 0x0aca37d0deaa1dca8d8764e5c325f958 }, // 1200
    Multiplier { upper: 0xa4c687eef267545f5f2d4b03f5ce0635, lower: 0xa23b5fda4bbb4b0871391d849c1e6113 }, // 1201
    Multiplier { upper: 0x83d20658c1ec437f7f576f365e3e6b5e, lower: 0x1b62b3150962a26d2760e46a167eb410 }, // 1202
    Multiplier { upper: 0xd2e9a3c13646d265988be523c9fd7896, lower: 0x923784ee756a9d7b7234a0a9bd97867f }, // 1203
    Multiplier { upper: 0xa8bae9675e9f0eb7ad3cb74fd4cac6de, lower: 0xdb5f9d8b91221795f4f6e6ee31460533 }, // 1204
    Multiplier { upper: 0x86fbedec4bb2722c8a96f90caa3bd24b, lower: 0xe2b2e46fa74e7944c3f8b8be8dd19dc2 }, // 1205
    Multiplier { upper: 0xd7f97cad45ea50474424c1addd2c83ac, lower: 0x9deb07190bb0c2079ff45aca7c829603 }, // 1206
    Multiplier { upper: 0xacc796f104bb736c3683ce24b0f06956, lower: 0xe4bc05ada2f3ce6c7ff6af08639bab36 }, // 1207
    Multiplier { upper: 0x8a39458d9d62c2bcf86971b6f3f38778, lower: 0xb6fcd157b58fd856ccc558d382e2ef5e }, // 1208
    Multiplier { upper: 0xdd286f48fbd13794c0a8b5f18652725a, lower: 0xbe614ef2bc195a247ad55aec049e4bca }, // 1209
    Multiplier { upper: 0xb0ed25d3fca75faa33ba2b279ea85b7b, lower: 0xcb810bf563477b50624448bcd07ea308 }, // 1210
    Multiplier { upper: 0x8d8a84a996ec4c882961bc1fb220492f, lower: 0xd600d65de905fc404e9d06fd7398826d }, // 1211
    Multiplier { upper: 0xe2773aa8f17a140d0f02c6991d007519, lower: 0x5667bd630e6ffa007dc80b2f1f5a6a47 }, // 1212
    Multiplier { upper: 0xb52c2eed8dfb433da59bd214173390e1, lower: 0x11ec978271f32e66cb066f58e5e1eea0 }, // 1213
    Multiplier { upper: 0x90f0258ad7fc35caeae30e7678f60d80, lower: 0xdb23ac685b28f1ebd59ebf7a51818bb3 }, // 1214
    Multiplier { upper: 0xe7e6a277bff9efab116b4a5727f0159a, lower: 0xf83913da2b74b646229798c3b59c12b8 }, // 1215
    Multiplier { upper: 0xb9854ec6332e5955a7890845b98cde15, lower: 0x9360dcae892a2b6b4edfad695e167560 }, // 1216
    Multiplier { upper: 0x946aa56b5c251444860739d1613d7e77, lower: 0xa91a4a253a8822bc3f1957877e785de6 }, // 1217
    Multiplier { upper: 0xed776f122d08206da33ec2e89b959725, lower: 0xdb5d436ec40d046064f558d8ca5a2fd7 }, // 1218
    Multiplier { upper: 0xbdf925a824068057b5cbcf207c77ac1e, lower: 0x4917692569a4038050c44713d514f312 }, // 1219
    Multiplier { upper: 0x97fa8486833866ac916fd8e6c9f9567e, lower: 0xa0df8751215002cd0d69d2764410c275 }, // 1220
    Multiplier { upper: 0xf32a6da405270aadb57fc17143288a64, lower: 0x3498d881cee66ae1af0fb723a01ad0bb }, // 1221
    Multiplier { upper: 0xc28857b66a85a2249133012768ed3b83, lower: 0x5d47139b0beb88b48c0c9282e67bda2f }, // 1222
    Multiplier { upper: 0x9ba0462b886ae81d40f59a85ed8a9602, lower: 0xb105a948d65606f6d6707535852fe1c0 }, // 1223
    Multiplier { upper: 0xf9007045a71173620188f73caf442337, lower: 0x81a2a8748a233e57bd80bb88d5196932 }, // 1224
    Multiplier { upper: 0xc7338d0485a78f819ad3f8fd59034f5f, lower: 0x9ae886c3a1b5cb796466fc6d7747875c }, // 1225
    Multiplier { upper: 0x9f5c70d06aec72ce157660caad9c3f7f, lower: 0xaf206bcfb4916f945052638ac5d2d2b0 }, // 1226
    Multiplier { upper: 0xfefa4e1a44ad847cef23ce1115c6cbff, lower: 0x7e9a461920e8b286e6ea38de09515119 }, // 1227
    Multiplier { upper: 0xcbfb71ae9d579d30bf4fd80dab056fff, lower: 0x987b6b474d86f538b8bb60b1a10dda7a }, // 1228
    Multiplier { upper: 0xa32f8e254aac7dc0990cacd7bc045999, lower: 0x46c9229f7138c42d6095e6f480d7e1fc }, // 1229
    Multiplier { upper: 0x828c71b76ef0649a140a23dfc99d147a, lower: 0x9f074ee5f42d69bde6de525d33dfe7fd }, // 1230
    Multiplier { upper: 0xd0e0b5f24b1a3a90201039660f61ba5d, lower: 0xcb3ee4a32048a92fd7ca1d61ec99732d }, // 1231
    Multiplier { upper: 0xa71a2b283c14fba6800cfab80c4e2eb1, lower: 0x6f6583b5b36d5426463b4ab4bd478f58 }, // 1232
    Multiplier { upper: 0x85ae88ecfcdd961eccd72ef9a371bef4, lower: 0x591e02f7c2bddceb6b62a22a31060c46 }, // 1233
    Multiplier { upper: 0xd5e40e47fafc23647af1e4c29f1c64ba, lower: 0x283004bf9dfc94abdf0436a9e809ad3d }, // 1234
    Multiplier { upper: 0xab1cd839959682b6c8c183cee5b05094, lower: 0xecf336ffb196dd564c035eee533af0fe }, // 1235
    Multiplier { upper: 0x88e3e02e1145355f0701363f1e26a6dd, lower: 0x8a5c2bffc1457ddea335e58b75c8c0cb }, // 1236
    Multiplier { upper: 0xdb06337ce86ebbcb3e6856cb63710afc, lower: 0x10937999353bfc976b896f4589413478 }, // 1237
    Multiplier { upper: 0xaf382930b9f22fd5cb86abd5e9273bfc, lower: 0xda0f947a90fcca12bc6df29e07675d2d }, // 1238
    Multiplier { upper: 0x8c2cedc094c1bfde3c6bbcab20ec2ffd, lower: 0x7b3fa9fba730a1a896be5bb19f85e424 }, // 1239
    Multiplier { upper: 0xe047e2cdbacf996393df94450179e662, lower: 0x5ecc432c3eb435da8aca2c4f65a3069f }, // 1240
    Multiplier { upper: 0xb36cb571623fade94319436a6794b84e, lower: 0xb23d0289cbc35e486f082372b7b59ee6 }, // 1241
    Multiplier { upper: 0x8f8a2ac11b6624ba9c1435eeb943c6a5, lower: 0x5b640207d635e506bf39b5f55fc47f1f }, // 1242
    Multiplier { upper: 0xe5a9de01c5703ac42ced23178ed2d76e, lower: 0xf8a0033fbd23080acb8f8988993a64fd }, // 1243
    Multiplier { upper: 0xb7bb18016ac02f0357241c12d8a8ac58, lower: 0xc6e668ffca826cd56fa607a07a951d98 }, // 1244
    Multiplier { upper: 0x92fc133455668c02ac1ce34246ed56ad, lower: 0x6beb873308685711261e6c806210e479 }, // 1245
    Multiplier { upper: 0xeb2ceb86ef0a799de02e386a0b15577b, lower: 0xdfdf3eb80d73be81d69714009ce7d3f5 }, // 1246
    Multiplier { upper: 0xbc23ef9f25a1fae4b3582d21a277792f, lower: 0xe64c322cd78fcb9b12127666e3eca991 }, // 1247
    Multiplier { upper: 0x96832618eae7fbea2913574e1b92c759, lower: 0x8509c1bd793fd615a80ec51f1cbd5474 }, // 1248
    Multiplier { upper: 0xf0d1d68e44a65fdd0e85587cf8ead88f, lower: 0x3b42cf958ecc89bc4017a1cb612eed86 }, // 1249
    Multiplier { upper: 0xc0a7ded836eb7fe40b9de063fa557a0c, lower: 0x2f68a6113f0a07c9ccdfb4a2b4258ad2 }, // 1250
    Multiplier { upper: 0x9a1fe579c589331cd617e6b661ddfb3c, lower: 0xf2ba1e74326e6ca170b2f6e8901e08a8 }, // 1251
    Multiplier { upper: 0xf6996f293c0eb82e23597123cfc991fb, lower: 0x1df6972050b0adcf1ab7f17419c9a773 }, // 1252
    Multiplier { upper: 0xc5478c20fcd893581c478db63fd474c8, lower: 0xe4c545b373c08b0c155ff45ce16e1f8f }, // 1253
    Multiplier { upper: 0x9dd2d680ca46dc467d060af833105d6d, lower: 0x83d1048f8fcd3c09aab329e3e78b4c73 }, // 1254
    Multiplier { upper: 0xfc848a67aa0afa0a61a344c051b3c8af, lower: 0x394e6db27faec675ddeb763972787a51 }, // 1255
    Multiplier { upper: 0xca03a1ec8808c8084e1c3700415ca08c, lower: 0x2dd857c1ffbf052b17ef91c78ec6c841 }, // 1256
    Multiplier { upper: 0xa19c818a066d6cd371b02c00344a1a09, lower: 0xbe46ac9b32ff3755acbfa7d2d89f069a }, // 1257
    Multiplier { upper: 0x814a013b38578a42c159bcccf6a1ae6e, lower: 0x31d223af5bff5f77bd661fdbe07f387c }, // 1258
    Multiplier { upper: 0xcedccec526f276d1355c6147f102b0b0, lower: 0x4fb69f7ef99898bf957032f96731f3f9 }, // 1259
    Multiplier { upper: 0xa57d7237525b9240f77d1a9ff40226f3, lower: 0x72f87f98c7ad46ffaac028c785c18ffa }, // 1260
    Multiplier { upper: 0x84645b5f75160e9a5f97487ff6681f29, lower: 0x28c6cc7a39576bffbbcced6c6b013ffb }, // 1261
    Multiplier { upper: 0xd3d3c56588234a9098f20d998a4031db, lower: 0x74714729f558accc5fae48ad7801fff8 }, // 1262
    Multiplier { upper: 0xa97637846ce90873ad8e7147a1ccf4af, lower: 0x905a9f54c446f0a37fbea08ac667fffa }, // 1263
    Multiplier { upper: 0x8791c6038a5406c2f13ec1061b0a5d59, lower: 0x40487f77036bf3b5ffcbb3a23853332e }, // 1264
    Multiplier { upper: 0xd8e93cd276ecd79e4ecace702b43c88e, lower: 0xcd40cbf19f131f899945ec36c0851eb0 }, // 1265
    Multiplier { upper: 0xad8763db925712e50bd571f355cfd3a5, lower: 0x7100a327b275b2d47a9e5692339db227 }, // 1266
    Multiplier { upper: 0x8ad2b64941df4250d6445b2911730fb7, lower: 0x8d9a1c1fc1f7c243954b7874f617c1b9 }, // 1267
    Multiplier { upper: 0xde1df075363203b48a06f841b584e5f2, lower: 0x7c29c699365936d28878c0bb235935f4 }, // 1268
    Multiplier { upper: 0xb1b18d2a91c19c906e6bf9ce2ad0b7f5, lower: 0x30216badc5142bdba0609a2f4f7a9190 }, // 1269
    Multiplier { upper: 0x8e27a4220e347d4058566171bbda2cc4, lower: 0x268122f16a76897c804d4825d92edada }, // 1270
    Multiplier { upper: 0xe372a0367d20c866f3bd68b5f95d146d, lower: 0x0a6837e8aa574260cd48736fc1e4915c }, // 1271
    Multiplier { upper: 0xb5f54cf8641a39ebf6312091944a76bd, lower: 0xa1ecf986eeac351a3dd38f8c9b1d4117 }, // 1272
    Multiplier { upper: 0x91910a605014fb232b5a807476a1f897, lower: 0xb4bd946bf2235dae97dc72d6e27dcdac }, // 1273
    Multiplier { upper: 0xe8e8109a19bb2b6b7890cd8724365a8c, lower: 0x546287131d0562b0f2fa5157d0c94913 }, // 1274
    Multiplier { upper: 0xba53407b47c8ef892d40a46c1cf84870, lower: 0x438205a8e4044ef3f5950ddfda3aa0dc }, // 1275
    Multiplier { upper: 0x950f66c9063a593a8a9a1d234a6039f3, lower: 0x6934d153e99d0bf65e10d7e6482ee716 }, // 1276
    Multiplier { upper: 0xee7f0adb3d2a285daa902e9edd66c31f, lower: 0x0ebae8864294dff096815970737e3e8a }, // 1277
    Multiplier { upper: 0xbecc08af6421b9e48873587f178568e5, lower: 0xa562539e9baa4cc078677ac05c64fed5 }, // 1278
    Multiplier { upper: 0x98a33a25e9b494b6d38f79ff460453ea, lower: 0xeab50fb21621d7006052c899e383ff11 }, // 1279
    Multiplier { upper: 0xf4385d0975edbabe1f4bf6653cd3b977, lower: 0xddee7f83569c8b33cd5140f638d331b4 }, // 1280
    Multiplier { upper: 0xc3604a6df7f16231b2a32b8430a9612c, lower: 0xb18b9935dee3a28fd77433f82d75c15d }, // 1281
    Multiplier { upper: 0x9c4d0857f98de827c21c22d026ede756, lower: 0xf46fadc4b24fb53fdf9029935791677e }, // 1282
    Multiplier { upper: 0xfa14da265c16403f9cf9d14d0b163ef1, lower: 0x8719160783b2bb9965b375b88c1bd8c9 }, // 1283
    Multiplier { upper: 0xc810ae8516783366172e410a6f44ff27, lower: 0x9f4744d2cfc22fadeaf5f7c6d67cad6e }, // 1284
    Multiplier { upper: 0xa00d586a7860291e78f1cda1f29d98ec, lower: 0x7f6c370f0c9b5957ef2b2c9f11fd578b }, // 1285
    Multiplier { upper: 0x800aad21f9e6874b93f4a4818ee47a56, lower: 0xcc569272707c47798c228a18db3112d6 }, // 1286
    Multiplier { upper: 0xccdde1cff63da545b9876d9c17d3f6f1, lower: 0x46f0ea50b3fa0bf5ad041027c51b5156 }, // 1287
    Multiplier { upper: 0xa3e4b4a65e97b76afad2be1679765f27, lower: 0x6bf3eea6f661a32af0d00cec9daf7445 }, // 1288
    Multiplier { upper: 0x831d5d51e5462c55957564dec791e5b9, lower: 0x23298bb8c51ae8ef270cd723b15929d1 }, // 1289
    Multiplier { upper: 0xd1c8954fd53d13bc22556e313f4fd5f5, lower: 0x050f45f46e9174b1d8148b6c4ef50fb4 }, // 1290
    Multiplier { upper: 0xa7d3aaa64430dc9681ddf1c0ff731190, lower: 0xd0d904c38ba7908e4676d5f03f2a72f6 }, // 1291
    Multiplier { upper: 0x8642eeeb69c0b07867e4c16732c27473, lower: 0xda473702d61fa6d8385f118cff5528c5 }, // 1292
    Multiplier { upper: 0xd6d17e4576011a5a3fd468a51e03ed86, lower: 0x2a0b8b37bcff7159f3cb4f47feeea7a2 }, // 1293
    Multiplier { upper: 0xabdacb6ac4cdaeae9976ba1db19cbe04, lower: 0xee6fa292fd99277b296f729fff2552e8 }, // 1294
    Multiplier { upper: 0x897bd5ef03d7bef2145efb4af47d64d0, lower: 0xbebfb542647a85fc2125f54ccc1ddbed }, // 1295
    Multiplier { upper: 0xdbf9564b3959318353cb2bab20c8a14d, lower: 0xfdff886a3a5da32d01d65547acfc9314 }, // 1296
    Multiplier { upper: 0xaffaab6f6114279c4308efbc1a3a1aa4, lower: 0xcb32d3882eb14f5734ab776c8a63a8dd }, // 1297
    Multiplier { upper: 0x8cc88925e74352e368d3f2fce1c81550, lower: 0xa28f0fa0255aa5df5d55f923a1e953e4 }, // 1298
    Multiplier { upper: 0xe140db6fd86bb7d241531e616940221a, lower: 0x9db1b299d55dd6322eeff505cfdbb96d }, // 1299
    Multiplier { upper: 0xb433e2bfe0562ca834427eb454334e7b, lower: 0xb15af547dde4ab5b58bff737d97c9457 }, // 1300
    Multiplier { upper: 0x9029823319de8a2029cecbc3768f71fc, lower: 0x8de25dd317ea22af7a332c2cadfd4379 }, // 1301
    Multiplier { upper: 0xe6a8d051c2fda9cd0fb146058a7f1cc7, lower: 0x496a2fb826436ab25d1ead14499538c1 }, // 1302
    Multiplier { upper: 0xb8870d0e3597bb0a72f438046ecc1705, lower: 0xd454f2f9b835eef5174bbda9d477609b }, // 1303
    Multiplier { upper: 0x939f3da4f7ac95a1f5902cd058a3459e, lower: 0x437728c7c6918bf745d63154a9f91a15 }, // 1304
    Multiplier { upper: 0xec31fc3b25e0ef6988e6ae1a276ba296, lower: 0xd258413fa41c13253c89e887765b5cef }, // 1305
    Multiplier { upper: 0xbcf4c9c8eb1a59213a5224e1b922e878, lower: 0xa8469a99501675b763a186d2c515e3f2 }, // 1306
    Multiplier { upper: 0x972a3b07227b7a80fb74ea4e2db586c6, lower: 0xed05487aa6785e2c4fb46bdbd0de4ff5 }, // 1307
    Multiplier { upper: 0xf1dd2b3e9d925d9b2bee43b04922713e, lower: 0x480873f770c096ad4c53dfc61afd4cbb }, // 1308
    Multiplier { upper: 0xc17dbc3217a84ae2898b6959d41b8dcb, lower: 0x6cd38ff92700788aa3764c9e7bfdd6fc }, // 1309
    Multiplier { upper: 0x9acafcf4dfb9d58207a2baae43493e3c, lower: 0x570fa660ec00606ee92b707ec997df30 }, // 1310
    Multiplier { upper: 0xf7ab2e549929559cd9045de39edb96c6, lower: 0xf1b2a3ce466700b175124d97a8f2feb3 }, // 1311
    Multiplier { upper: 0xc6228b76e0edde1714037e4fb249456b, lower: 0xf48ee971d1ec008df741d7ac8728cbc3 }, // 1312
    Multiplier { upper: 0x9e82092be724b1ac1002cb72f5076abc, lower: 0xc3a5878e41899a0b2c34ac8a05ba3c9c }, // 1313
    Multiplier { upper: 0xfd9cdb7971d44f79b337abeb21a57794, lower: 0x6c3c0c16cf429011e05447433c5d2dc6 }, // 1314
    Multiplier { upper: 0xcae3e2c78e4372c7c292efef4e1df943, lower: 0x89c9a345729ba674b3769f68fd1757d2 }, // 1315
    Multiplier { upper: 0xa24fe89fa502c23968758cbf71b19436, lower: 0x07d4829df54951f6f5f87f8730df7975 }, // 1316
    Multiplier { upper: 0x81d986e61d9bce9453913d65f48e102b, lower: 0x3976cee4c43aa7f8c4c6cc6c27192df7 }, // 1317
    Multiplier { upper: 0xcfc271702f5fb0ed5281fbd654168045, lower: 0x28be17d46d2aa65ad471471371c1e324 }, // 1318
    Multiplier { upper: 0xa635278cf2b2f3f10ece6311dcdecd04, lower: 0x20981310575551e2438dd275f49b1c1d }, // 1319
    Multiplier { upper: 0x84f752d7288f298da571e8db1718a403, lower: 0x4d4675a6ac444181cfa4a85e5d48e34b }, // 1320
    Multiplier { upper: 0xd4beeaf1da7ea8e2a24fdaf824f4399e, lower: 0xe20a55d77a06cf36190773ca2edb0544 }, // 1321
    Multiplier { upper: 0xaa32558e486553e881d97bf9b729c7b2, lower: 0x4e6eab12c8057291ad9f8fd4f248d103 }, // 1322
    Multiplier { upper: 0x88284471d384432067e12ffaf8ee395b, lower: 0x71f222756cd128748ae60caa5b6d7403 }, // 1323
    Multiplier { upper: 0xd9da071c85a06b670c9b7ff7f4b05bc5, lower: 0x831d03ef1481da5411701443c57becd1 }, // 1324
    Multiplier { upper: 0xae4805b06ae6bc52707c665ff6f37c9e, lower: 0x027d9cbf439b15100df343696ac98a41 }, // 1325
    Multiplier { upper: 0x8b6cd159ef1efd0ec0638519925c63b1, lower: 0x9b97b09902e277400b2902babbd46e9a }, // 1326
    Multiplier { upper: 0xdf1482297e97fb4acd6c0828ea2d6c4f, lower: 0x5f591a8e6b03f20011db37912c87175d }, // 1327
    Multiplier { upper: 0xb276ce87987995d5712339ba54f12372, lower: 0xb2adaed8559cc199a7e292da8a05ac4b }, // 1328
    Multiplier { upper: 0x8ec57206139477ddf41c2e2eaa5a82c2, lower: 0x288af246aae3ce14864edbe2080489d5 }, // 1329
    Multiplier { upper: 0xe46f1cd685ba5963202d16b11090d136, lower: 0xa744b6d777d2e3540a17c636733a7622 }, // 1330
    Multiplier { upper: 0xb6bf4a4537c84782802412274073da92, lower: 0x1f6a2bdf930f1c433b46382b8f61f81b }, // 1331
    Multiplier { upper: 0x9232a1d0f96d0602001cdb5299f64874, lower: 0xe5ee897fa8d8e368fc382cefa5e7f9af }, // 1332
    Multiplier { upper: 0xe9ea9c818f14d66999c7c550f656da54, lower: 0xa3174265daf49f0e6059e17f6fd98f7f }, // 1333
    Multiplier { upper: 0xbb2216ce0c10ab87ae396aa72b78aeaa, lower: 0x1c129b84af2a18d84d14b465f31472cc }, // 1334
    Multiplier { upper: 0x95b4df0b3cda22d2f1c78885bc608bbb, lower: 0x49a87c6a25bb471370dd5d1e5c105bd6 }, // 1335
    Multiplier { upper: 0xef87cb452e29d15182d8da6f93cdac5e, lower: 0xdc40c7103c5ed81f1afbc830934d5fbd }, // 1336
    Multiplier { upper: 0xbf9fd5d0f1bb0ddacf13e1f2dca489e5, lower: 0x7d009f40304be018e263068d42a44c97 }, // 1337
    Multiplier { upper: 0x994cab0d8e2f3e48a5a9818f16ea07ea, lower: 0xca66e5ccf36fe67a4eb59ed768837079 }, // 1338
    Multiplier { upper: 0xf5477815b04b96daa2a8cf4b57dcd977, lower: 0xaa3e3c7b1f1970c3b12297bf0d9f1a5b }, // 1339
    Multiplier { upper: 0xc4392cde26a2df154eed72a2acb0adf9, lower: 0x54fe96c8e5adf3cfc0e87965a47f4849 }, // 1340
    Multiplier { upper: 0x9cfa8a4b521be5aaa58ac21bbd5a24c7, lower: 0x7732123a5157f63fcd86c784839906a1 }, // 1341
    Multiplier { upper: 0xfb2a76dee9c63c443c113692c8903ad8, lower: 0xbeb68390822656cc7c0ad8d405c1a435 }, // 1342
    Multiplier { upper: 0xc8eec57f216b6369c9a75edbd3a6957a, lower: 0x322b9c739b51df09fcd57a4337ce1cf7 }, // 1343
    Multiplier { upper: 0xa0bf0465b455e9216e1f7f1642ebaac8, lower: 0x2822e38faf74b26e63ddfb68f971b0c6 }, // 1344
    Multiplier { upper: 0x8098d0515d11874df1b2cc11cf22ef06, lower: 0x86824fa625f6f5251cb195ed945af3d1 }, // 1345
    Multiplier { upper: 0xcdc14d4efb4f3ee31c514682e504b1a4, lower: 0x0a6a1909d657eea1c782897c2091861c }, // 1346
    Multiplier { upper: 0xa49aa43f2f7298b5b04105358403c150, lower: 0x0854e0d4ab798bb49f9ba1301a0e04e3 }, // 1347
    Multiplier { upper: 0x83aee9cc25f546f7c034042ad003010c, lower: 0xd3771a43bc613c907fafb4267b3e6a4f }, // 1348
    Multiplier { upper: 0xd2b176136feed7f2cd2006aae66b34e1, lower: 0x52582a05fa352db3ff7f86a3f863dd4b }, // 1349
    Multiplier { upper: 0xa88df80f8cbf1328a4199eef1ebc2a4d, lower: 0xdb79bb37fb5dbe299932d21cc6b64aa3 }, // 1350
    Multiplier { upper: 0x86d7f9a60a3275ba1ce14bf27efceea4, lower: 0xaf9495c662b164ee1428a817055ea21c }, // 1351
    Multiplier { upper: 0xd7bff5d676b722c361687983fe617dd4, lower: 0x4c20efa3d11bd4b020410cf1a2310360 }, // 1352
    Multiplier { upper: 0xac9991785ef8e89c4ded2e0331e797dd, lower: 0x09b3f2e9741643c019cda3f481c0cf80 }, // 1353
    Multiplier { upper: 0x8a1474604bfa53b03e5758028e52dfe4, lower: 0x07c328bac345030014a4832a01670c66 }, // 1354
    Multiplier { upper: 0xdced8700799085e6ca25599db084996c, lower: 0xd938412ad20804ccedd40510023e7a3d }, // 1355
    Multiplier { upper: 0xb0be0599fada04b8a1b77ae48d36e123, lower: 0xe0f9cdbbdb399d70be43374001cb94fe }, // 1356
    Multiplier { upper: 0x8d64d147fbe19d60815f9583a42be74f, lower: 0xe72e3e2fe2947df3cb68f900016faa65 }, // 1357
    Multiplier { upper: 0xe23ae8732c9c2f00ceff559f6d130bb3, lower: 0x0b7d304c9dba631fabdb2800024c43d4 }, // 1358
    Multiplier { upper: 0xb4fbed28f07cf2670bff77b2bda8d628, lower: 0xd5fdc03d4afb827fbcaf53333509cfdd }, // 1359
    Multiplier { upper: 0x90c98a8726ca5b85a332c62897ba44ed, lower: 0x77fe33643bfc6866308c428f5da17317 }, // 1360
    Multiplier { upper: 0xe7a8dda50add5f3c38513d0dbf906e48, lower: 0xbffd1f06c660a709e746d0e5629beb58 }, // 1361
    Multiplier { upper: 0xb953e48408b118fcf9da973e32d9f1d3, lower: 0xccca7f389eb3b8d4b90573eab5498913 }, // 1362
    Multiplier { upper: 0x94431d366d5a7a63fb1545cb5be18e43, lower: 0x0a3b98fa188fc71094045cbbc43ad410 }, // 1363
    Multiplier { upper: 0xed382ebd7bc3f7065e886fabc635b06b, lower: 0x43928e5cf4193e80ecd3c792d391534c }, // 1364
    Multiplier { upper: 0xbdc68bcac969926b7ed38c896b5e26bc, lower: 0x360ed84a5ce0fecd8a43060f0fa775d6 }, // 1365
    Multiplier { upper: 0x97d2096f0787a855ff0fa3a122b1b896, lower: 0x91a579d5171a65713b68d1a5a61f9178 }, // 1366
    Multiplier { upper: 0xf2e9a8b1a5a5da2331b29f683782c0f0, lower: 0xe908c2ee8b5d6f1b92414f6f7032825a }, // 1367
    Multiplier { upper: 0xc25486f48484ae828e287f8692cf00c0, lower: 0xba6d68bed5e458e2db6772bf8cf53515 }, // 1368
    Multiplier { upper: 0x9b76d25d36d08b9ba4ed32d20f0c009a, lower: 0x2ebded6577e9e0b57c52c232d72a90de }, // 1369
    Multiplier { upper: 0xf8be1d61f14dac2c3b151e1ce4e000f6, lower: 0xb12fe23bf30fcdef2d5136b7beaa8162 }, // 1370
    Multiplier { upper: 0xc6fe7de7f43e235695aa7e7d83e6672b, lower: 0xc0f31b6328d9718c2440f892feeecde8 }, // 1371
    Multiplier { upper: 0x9f31fe5329cb4f7877bb986469851f56, lower: 0x33f5af8287145ad683672d42658bd7ed }, // 1372
    Multiplier { upper: 0xfeb663b842dee58d8c5f5a3a426e9889, lower: 0xecbc4c040b53c48a6bd8486a3c12f315 }, // 1373
    Multiplier { upper: 0xcbc51c9368b2513e09e5e1c8352546d4, lower: 0xbd6370033c4303a1efe039ee96758f44 }, // 1374
    Multiplier { upper: 0xa30416dc53c1da9807eb1b0690ea9f10, lower: 0x9782c002969c02e7f319c7f211f7a5d0 }, // 1375
    Multiplier { upper: 0x8269abe37634aee00655af3873eee5a6, lower: 0xdf9bcccedee335865c149ff4db2c84a6 }, // 1376
    Multiplier { upper: 0xd0a9130589ede499a3bc4b8d864b090a, lower: 0xff5fae17cb052270935433215eada10a }, // 1377
    Multiplier { upper: 0xa6eda8d13b24b6e14fc9d60ad1d5a0d5, lower: 0x9919581308d0e85a0f768f4de557b408 }, // 1378
    Multiplier { upper: 0x858aed742f50924dd96e44d574aae711, lower: 0x474779a8d3da537b3f920c3e5112f66d }, // 1379
    Multiplier { upper: 0xd5ab1586b21a83afc24a07bbedde3e82, lower: 0x0ba58f74862a1f2b98e9ad3081b7f0ae }, // 1380
    Multiplier { upper: 0xaaef446bc1aecfbfcea19fc98b183201, lower: 0xa2ead92a04ee7f5613ee2426ce2cc08b }, // 1381
    Multiplier { upper: 0x88bf69efce2572ffd8814ca13c135b34, lower: 0x82557a8803f1ff780ff1b68571bd66d6 }, // 1382
    Multiplier { upper: 0xdacbdcb2e36f1e6627354768601ef854, lower: 0x03bbf740064fff267fe92408b5fbd7bc }, // 1383
    Multiplier { upper: 0xaf097d5be925b1eb529105ed19b26043, lower: 0x362ff900050ccc1eccba833a2b2fdfca }, // 1384
    Multiplier { upper: 0x8c07977cba848e55dba737f0e15b8035, lower: 0xc4f32d999da3d67f0a2ecf61bc264ca2 }, // 1385
    Multiplier { upper: 0xe00c25945da0e3bc92a5264e355f3389, lower: 0x3b1eaf5c2f6c8a64dd17b235f9d6e103 }, // 1386
    Multiplier { upper: 0xb33ceadd17b3e963a8841ea4f77f5c6d, lower: 0xc8e559168c56d51d7dac8e9194abe735 }, // 1387
    Multiplier { upper: 0x8f63ef1746298782ed367eea5f9916be, lower: 0x3a51141209df10e4648a0ba7aa231f5e }, // 1388
    Multiplier { upper: 0xe56cb1bed6a8d8d17b8a64aa328e8ac9, lower: 0xf6e8201cdc981b07074345d910383230 }, // 1389
    Multiplier { upper: 0xb78a27cbdeed7a412fa1ea21c20ba23b, lower: 0x2bece67d7d467c059f6904ada6935b59 }, // 1390
    Multiplier { upper: 0x92d4eca318bdfb67594e54e7ce6fb4fc, lower: 0x2323eb97976b966ae5ed9d57b875e2ae }, // 1391
    Multiplier { upper: 0xeaee476b5ac9923ef54a2172e3e5ee60, lower: 0x383978f28bdf57116fe2955927230449 }, // 1392
    Multiplier { upper: 0xbbf1d2bc48a141cbf76e8128b6518b80, lower: 0x2cfac7286fe5df41264edde0ec1c036e }, // 1393
    Multiplier { upper: 0x965b0efd06e767d65f8b9a86f8413c66, lower: 0x8a6238ed26517f6751d8b180bce335f2 }, // 1394
    Multiplier { upper: 0xf091b194d7d8a623cc1290d7f39b93d7, lower: 0x43d05b150a1bff0bb6278267949ebcb6 }, // 1395
    Multiplier { upper: 0xc0748e10acad51b63cdba71329494312, lower: 0x9ca6af44081665a2f81f9b86107efd5e }, // 1396
    Multiplier { upper: 0x99f6d80d56f10e2b63e2ec0f543a9c0e, lower: 0xe3b88c366cdeb7b5934c7c6b4065977f }, // 1397
    Multiplier { upper: 0xf657c01557e816abd304ace55390f9b1, lower: 0x6c5a79f0ae3125ef5213fa4533d5bf31 }, // 1398
    Multiplier { upper: 0xc5130011132012230f36f0b7760d948d, lower: 0xf048618d5827518c41a995042977cc27 }, // 1399
    Multiplier { upper: 0x9da8ccda75b341b5a5c58d5f91a476d7, lower: 0xf36d1ad779b90e09ce214403545fd686 }, // 1400
    Multiplier { upper: 0xfc4147c3ef8535ef6fa27bcc1c3a57bf, lower: 0xebe1c48bf5f4e342e3686cd22099573c }, // 1401
    Multiplier { upper: 0xc9cdd30326042b25f2e86309b02eac99, lower: 0x89816a099190b5cf1c538a41b3addf63 }, // 1402
    Multiplier { upper: 0xa171759c1e69bc1e5bed1c07c02556e1, lower: 0x3acdee6e0e0d5e3f49dc6e9af624b2b6 }, // 1403
    Multiplier { upper: 0x81279149b1ee3018498a7cd3001ddf1a, lower: 0x95718b8b3e711832a17d2548c4ea2892 }, // 1404
    Multiplier { upper: 0xcea5b542b649e68d42772e1e669631c4, lower: 0x224f45ab971b59ea9bfb6edad4a9da82 }, // 1405
    Multiplier { upper: 0xa5515dcef83b1ed7685f58185211c169, lower: 0xb50c37bc78e2ae554995f248aa217b9c }, // 1406
    Multiplier { upper: 0x844117d8c695b245ed191346a80e3454, lower: 0x90d692fd2d82251107ab283a21b462e3 }, // 1407
    Multiplier { upper: 0xd39b595ad755ea097b5b520aa67d2087, lower: 0x4e241e61e269d4e80c450d29cf87049e }, // 1408
    Multiplier { upper: 0xa9491448ac44bb3ac915db3bb8641a05, lower: 0xd81ce51b1b87dd8670373dbb0c6c03b2 }, // 1409
    Multiplier { upper: 0x876da9d3bd03c8fbd4117c2fc6b67b37, lower: 0xe0171daf49397e05269297c8d6bccfc2 }, // 1410
    Multiplier { upper: 0xd8af761f94d2db2c8682604c7123f859, lower: 0x668b62b20ec2633b70ea8c748ac7b2cf }, // 1411
    Multiplier { upper: 0xad592b4c770f15bd38684d09f41cc6ad, lower: 0xeba2b55b3f01e8fc5a553d2a089fc23f }, // 1412
    Multiplier { upper: 0x8aadbc3d2c0c11642d203da190170557, lower: 0xefb55de298ce53fd1510fdbb3a196833 }, // 1413
    Multiplier { upper: 0xdde2c6c84679b56d1500629c19be6ef3, lower: 0x19222fd0f47d532e881b2f91f68f0d1e }, // 1414
    Multiplier { upper: 0xb18238a038615df0dd99e87ce165258f, lower: 0x474e8ca729fddc2539af5941920c0a7e }, // 1415
    Multiplier { upper: 0x8e01c6e6938117f3e47b2063e7841e0c, lower: 0x390ba3b8ee64b01dc7bf7a9adb3cd532 }, // 1416
    Multiplier { upper: 0xe3360b0a859b59863a5e9a39726cfce0, lower: 0x5b45d2c17d6de6960c6590f7c52e21e9 }, // 1417
    Multiplier { upper: 0xb5c4d5a2047c479e95187b61285730b3, lower: 0x7c37dbcdfdf18544d6b7a72c9dbe8187 }, // 1418
    Multiplier { upper: 0x916a44819d30394baa79fc4db9df5a29, lower: 0x302cafd7fe5ad103def9528a17cb9ad3 }, // 1419
    Multiplier { upper: 0xe8aa0735c84d287910c32d4929655d0e, lower: 0xb37ab2f330914e6c97f550dcf2df5e1e }, // 1420
    Multiplier { upper: 0xba219f5e39d753940d68f1075451173e, lower: 0xf5fbc25c26daa523acc440b0c24c4b4b }, // 1421
    Multiplier { upper: 0x94e7b2b1c7df76100aba5a6c43741298, lower: 0xc4c96849b8aeea82f09d008d683d0909 }, // 1422
    Multiplier { upper: 0xee3f844fa6325680112a2a46d25350f4, lower: 0x6e0f0d42c117dd9e4dc800e24061a80e }, // 1423
    Multiplier { upper: 0xbe9936a61e8eab99a754ee9f0ea90d90, lower: 0x580c0a9bcdacb14b716ccd81cd1aecd8 }, // 1424
    Multiplier { upper: 0x987a921e7ed88947b910bee5a5540ad9, lower: 0xe009a2163e23c109278a3e0170e25713 }, // 1425
    Multiplier { upper: 0xf3f75030caf40ed9281acb09088677c3, lower: 0x000f69bd303934db7276c99be7d08b52 }, // 1426
    Multiplier { upper: 0xc32c402708c33f1420156f3a6d385fcf, lower: 0x333f87ca8cfa90af8ec56e16530d3c42 }, // 1427
    Multiplier { upper: 0x9c236685a09c3276801125c857604ca5, lower: 0xc299396ed72eda260bd124dea8d76368 }, // 1428
    Multiplier { upper: 0xf9d23da29a9383f0cce83c73bf007aa2, lower: 0xd0f528b1584af6a3461b6e310e256bd9 }, // 1429
    Multiplier { upper: 0xc7db64821542cff3d720305c98cd2ee8, lower: 0xa72a86f446a25ee904e2be8da4eabcae }, // 1430
    Multiplier { upper: 0x9fe2b6ce7768a65cac19c04a13d758ba, lower: 0x1f5538c36bb518ba6a4efed7b722308b }, // 1431
    Multiplier { upper: 0xffd1247d8bdaa3c779c2cd4352f22790, lower: 0x3221f46bdf882790aa17fe25f1d04dab }, // 1432
    Multiplier { upper: 0xcca750646fe21c9f949bd7690f281fa6, lower: 0x8e8190564c6cec73bb4664eb27d9d7bc }, // 1433
    Multiplier { upper: 0xa3b90d1d264e7d4c76e312ba72867fb8, lower: 0x7201404509f0bd29629eb7228647dfca }, // 1434
    Multiplier { upper: 0x82fa70e41ea53109f8b5a895286b9960, lower: 0x5b34336a6e5a30ede87ef8e86b6cb308 }, // 1435
    Multiplier { upper: 0xd190b4a031084e765abc40eea7128f00, lower: 0x91ed1f10b0904e4973fe5b0d78adeb40 }, // 1436
    Multiplier { upper: 0xa7a6f6e68da03ec51563672552753f33, lower: 0xa7f0e5a6f3a6a5078ffeaf3dfa24bc33 }, // 1437
    Multiplier { upper: 0x861f2beba4803237444f85b7752a98f6, lower: 0x1ff3eaebf61eea6c733225cb2e83c9c3 }, // 1438
    Multiplier { upper: 0xd6984645d40050586d4c0925884427f0, lower: 0x331fde465697dd7a51e9d611e4060f9d }, // 1439
    Multiplier { upper: 0xabad0504a999d9e05770075139d01ff3, lower: 0x5c197e9eabacb12ea7ee44db1cd1a618 }, // 1440
    Multiplier { upper: 0x89573736ee14ae4d12c005da94a67ff5, lower: 0xe347987eefbd5a8bb98b6a48e3daeb46 }, // 1441
    Multiplier { upper: 0xdbbebebe49bab07b51333c90edd73323, lower: 0x053f5a64b2c890df8f4576db062b120a }, // 1442
    Multiplier { upper: 0xafcbcbcb6e2ef395da8f63a724ac28e8, lower: 0xd0ff7b83c23a0d7fa5d12be26b55a808 }, // 1443
    Multiplier { upper: 0x8ca3096f8b58c2de4872b61f5089ba53, lower: 0xda65fc69682e7132eb0dbcb522aaecd3 }, // 1444
    Multiplier { upper: 0xe104dbe5abc137ca0d84569880dc5d52, lower: 0xf70993dbd9e3e8517815fabb6aab1485 }, // 1445
    Multiplier { upper: 0xb403e31e2300f96e7136abad33e37ddb, lower: 0xf8d476497b1cb9dac677fbc9222276d1 }, // 1446
    Multiplier { upper: 0x90031c181c00c78b8dc556242982cb16, lower: 0x60a9f83ac8e3c7e2385ffca0e81b9241 }, // 1447
    Multiplier { upper: 0xe66b602693347278e2d556a0426ade8a, lower: 0x344326c4749fa636c0999434a692839a }, // 1448
    Multiplier { upper: 0xb855e68542905b93e8aaabb368557ed4, lower: 0xf69c1f03907fb82bcd47a9c3b8753615 }, // 1449
    Multiplier { upper: 0x9377eb9dced9e2dcba2222f5ed113243, lower: 0xf87ce59c739960230a9fbb02f9f75e77 }, // 1450
    Multiplier { upper: 0xebf3129617c304945d036b2314e8506c, lower: 0xc0c7d5c71f5bcd04ddcc5e6b298bca58 }, // 1451
    Multiplier { upper: 0xbcc27544dfcf36dd1735ef4f43ed0d23, lower: 0xcd6cab05b2afd73717d6b1ef546fd514 }, // 1452
    Multiplier { upper: 0x9701f76a4ca5c57dac2b25d903240a83, lower: 0x0abd559e288cac2c131227f2a9f310dd }, // 1453
    Multiplier { upper: 0xf19cbf107aa2d595e045095b3839aa6b, lower: 0x44622296a74779e01e83731ddcb81afa }, // 1454
    Multiplier { upper: 0xc14a3273954f1144b36a6de293615522, lower: 0x9d1b4edeec392e4ce535f5b17d601595 }, // 1455
    Multiplier { upper: 0x9aa1c1f6110c0dd08f8857e875e7774e, lower: 0xe415d8b25694250a50f7f7c13119aade }, // 1456
    Multiplier { upper: 0xf769365681ace2e74c0d5973efd8bee4, lower: 0xa022f4508a86a1aa1b2659351b5c4496 }, // 1457
    Multiplier { upper: 0xc5edc51201571bec3cd77ac32646ff1d, lower: 0x4ce8c373a2054e21af51e0f749169d45 }, // 1458
    Multiplier { upper: 0x9e57d0db3445aff030ac6235b838cc17, lower: 0x70ba35f61b3771b48c4180c5d412176a }, // 1459
    Multiplier { upper: 0xfd594e2b86d5e64d1aad69ef8d27acf2, lower: 0x4df6bcbcf858b5edad359ad6201cf243 }, // 1460
    Multiplier { upper: 0xcaadd822d244b83daef1218c70ec8a5b, lower: 0x719230972d13c4be242ae244e67d8e9c }, // 1461
    Multiplier { upper: 0xa224ace8a836f9caf25a813d2723a1e2, lower: 0xc141c078f0dc9d64e9bbe8371ecad87d }, // 1462
    Multiplier { upper: 0x81b6f0ba202bfb08c1e200fdb8e94e4f, lower: 0x010166c72716e450bafcb9c5b23be064 }, // 1463
    Multiplier { upper: 0xcf8b1ac366acc4dacfd00195f4a87d4b, lower: 0x34cf0ad83e8b06e791945c6f839300a0 }, // 1464
    Multiplier { upper: 0xa608e235ebbd6a48a6400144c3b9fdd5, lower: 0xc3d8d579cba26bec7476b059360f33b3 }, // 1465
    Multiplier { upper: 0x84d3e82b22fdeea085000103cfc7fe44, lower: 0x9cad7794a2e85656c39226adc4d8f629 }, // 1466
    Multiplier { upper: 0xd486404504c97dcda1999b394c73306d, lower: 0xc77bf2876b0d56f138e9d77c6e27f042 }, // 1467
    Multiplier { upper: 0xaa050037370797d7b47ae2943d28f38b, lower: 0x05fcc205ef3ddf2760bb12c9f1b98d01 }, // 1468
    Multiplier { upper: 0x8804002c2c061312f6c8b5436420c2d5, lower: 0x9e63ce6b25cb18ec4d62756e5afad734 }, // 1469
    Multiplier { upper: 0xd9a00046acd684eb24745538a0346aef, lower: 0x63d2e3dea2de8e46e237224a2b2af1ed }, // 1470
    Multiplier { upper: 0xae1999d223ded0bc1d29ddc6e690558c, lower: 0x4fdbe97ee8b20b6be82c1b6e88ef27f1 }, // 1471
    Multiplier { upper: 0x8b47ae41b64bda301754b16beba6aad6, lower: 0xa6498798ba280923202349253a58ecc1 }, // 1472
    Multiplier { upper: 0xded916cf8a12f6b35887824645d777bd, lower: 0xd6dc0c2790400e9e99d20ea1f6f4ae01 }, // 1473
    Multiplier { upper: 0xb2474572d4dbf88f7a0601d1d1792c97, lower: 0xdf16701fa699a54bae41a54e5f2a24ce }, // 1474
    Multiplier { upper: 0x8e9f6ac243e32d3f94d19b0e412dbd46, lower: 0x4c11f34c8547b76fbe9aeaa518ee83d8 }, // 1475
    Multiplier { upper: 0xe432446a06384865bae8f816ceaf953d, lower: 0x46831ee0d53f8be5fdc4aaa1c17d9fc0 }, // 1476
    Multiplier { upper: 0xb68e9d219e936d1e2f20c678a5594431, lower: 0x0535b24d77660984cb03bbb49acae633 }, // 1477
    Multiplier { upper: 0x920bb0e7b20f8a7e8c1a3860844769c0, lower: 0xd0f7c1d792b8079d6f362fc3af08b829 }, // 1478
    Multiplier { upper: 0xe9ac4e3f834c10ca79c38d673a0bdc67, lower: 0xb4bf9c8c1df33f624b89e605e4dac041 }, // 1479
    Multiplier { upper: 0xbaf03e9935d673d52e360ab8fb3cb052, lower: 0xf6ffb07017f5cc4ea2d4b804b715669b }, // 1480
    Multiplier { upper: 0x958cfee0f7dec310f1c4d560c8fd59db, lower: 0xf8cc8d267991703ee8aa2cd092778549 }, // 1481
    Multiplier { upper: 0xef47fe34bfcad1b4b607bbce0e62295f, lower: 0xf47a7b70c2824d3174437ae750bf3ba7 }, // 1482
    Multiplier { upper: 0xbf6ccb5d663bdaf6f8062fd80b81bab3, lower: 0x29fb95f3cecea4279035fbec4098fc86 }, // 1483
    Multiplier { upper: 0x9923d5e451c97bf8c66b5979a2ce2ef5, lower: 0xbb2fab29723ee9b9402b2ff033ad96d1 }, // 1484
    Multiplier { upper: 0xf5062306e9425ff470abc25c37b04b22, lower: 0xc51911dbe9fe42c20045198052af57b5 }, // 1485
    Multiplier { upper: 0xc404e8d2543519905a2301e35fc03c1b, lower: 0xd0e0db1654cb689b336a7acd0ef2ac91 }, // 1486
    Multiplier { upper: 0x9cd0ba41dcf747a6ae8267e91966967c, lower: 0xa71a48deaa3c53af5c552f0a725bbd41 }, // 1487
    Multiplier { upper: 0xfae79069618ba5d77d9d730e8f0a8a61, lower: 0x0b5d41644393b91893bb7e771d5f9534 }, // 1488
    Multiplier { upper: 0xc8b940544e095179314ac2720c086eb4, lower: 0x091767836942fa7a0fc931f8e44c775d }, // 1489
    Multiplier { upper: 0xa0943376a4d4412dc1089b8e7006bef6, lower: 0x6dac52cf8768c861a63a8e60b6a392b1 }, // 1490
    Multiplier { upper: 0x80768f921d769a8b00d3afa5266bcbf8, lower: 0x57bd0f0c6c53d38151c871e6f882dbc1 }, // 1491
    Multiplier { upper: 0xcd8a7f502f242a780152b2a1d712dff3, lower: 0xbf94e4e0ad52ec021c73e9718d9e2c68 }, // 1492
    Multiplier { upper: 0xa46ecc4025b68860010ef54e45a8b329, lower: 0x6610b71a2442566816c32127a47e89ed }, // 1493
    Multiplier { upper: 0x838bd699b7c539e6673f2aa50486f5ba, lower: 0xb80d5f481d01deb9abcf4db950653b24 }, // 1494
    Multiplier { upper: 0xd279575c593b8fd70b98443b3a71892a, lower: 0xc01565402e69645c46187c5bb3d52b6c }, // 1495
    Multiplier { upper: 0xa86112b04762d978d61369c8fb8e0755, lower: 0x6677843358545049d1ad30495caa8923 }, // 1496
    Multiplier { upper: 0x86b40ef36c4f1460ab42bb072fa4d2aa, lower: 0xb85f9cf5e043736e415759d44a220750 }, // 1497
    Multiplier { upper: 0xd7867e5246e4ed67786ac4d84c3aeaaa, lower: 0xc098fb23006bebe39bbef620769cd87f }, // 1498
    Multiplier { upper: 0xac6b9841d250bdec60556a46a3625555, lower: 0x66e0c8e8cd23231c7c98c4e6c54a46cc }, // 1499
    Multiplier { upper: 0x89efad01750d64bd19ddee9ee91b7777, lower: 0x8580a0ba3db5b5b063ad6a52376e9f0a }, // 1500
    Multiplier { upper: 0xdcb2ae68bb48a12e8fc97dcb0e9258bf, lower: 0x3c010129fc55ef809f7bdd5058b0fe76 }, // 1501
    Multiplier { upper: 0xb08ef1ed62a080f20ca1316f3edb7a32, lower: 0x9667342196ab26007f964aa6ad5a652b }, // 1502
    Multiplier { upper: 0x8d3f27f11bb39a5b3d4dc125cbe2c828, lower: 0x7852901adeef5199ffab6eebbde1ea89 }, // 1503
    Multiplier { upper: 0xe1fea64e92b8f6f8621601d613047373, lower: 0xf3b74cf7cb18828fff78b1792fcfdda8 }, // 1504
    Multiplier { upper: 0xb4cbb83edbc72bf9e8119b11a8d05c5c, lower: 0xc2f90a5fd5ad353fff93c12dbfd97e20 }, // 1505
    Multiplier { upper: 0x90a2f9cbe305bcc7ecdae274870d16b0, lower: 0x9bfa6eb311575dcccc763424997acb4d }, // 1506
    Multiplier { upper: 0xe76b294638092e0cae2b03eda4e1bde7, lower: 0x5ff71784e88bc947ad89ed075bf7abae }, // 1507
    Multiplier { upper: 0xb922876b6007580a24ef3657b71afe52, lower: 0xb32c12d0ba096dd2f13b2405e32c8958 }, // 1508
    Multiplier { upper: 0x941b9f89199f79a1b725c512f8e2650e, lower: 0xf5bcdbda2e6df1758dc8e99e4f56d447 }, // 1509
    Multiplier { upper: 0xecf8ff41c298c29c583c6e84c16a3b4b, lower: 0x22c7c629e3e31bef494175ca188aed3d }, // 1510
    Multiplier { upper: 0xbd93ff67cee09bb04696bed09abb62a2, lower: 0x82396b54b64f498c3a9ac4a1ad3bf0fe }, // 1511
    Multiplier { upper: 0x97a9991fd8b3afc0387898a6e22f821b, lower: 0x9b6122aa2b72a13cfbaf03b48a965a65 }, // 1512
    Multiplier { upper: 0xf2a8f4ffc11f7f99f3f4277169e59cf8, lower: 0xf89b6aa9df1dcec7f91805edaa8a2a3b }, // 1513
    Multiplier { upper: 0xc220c3ffcdb2cc7b29901f8dee514a60, lower: 0xc6e2bbbb18e4a56cc7466b24886e882f }, // 1514
    Multiplier { upper: 0x9b4d6999715bd6c8ee0ce60b250dd51a, lower: 0x38b562fc13ea1df09f6b88ea06bed359 }, // 1515
    Multiplier { upper: 0xf87bdc28b55fbe0e49ae3cdea1afbb5d, lower: 0x27889e601fdcfcb43245a7dcd797b88e }, // 1516
    Multiplier { upper: 0xc6c97ced5de631a507be9718815962b0, lower: 0xec6d4b80197d96f68e9e1fe3dfac93a5 }, // 1517
    Multiplier { upper: 0x9f0797244b1e8e1d9fcbac139aade88d, lower: 0x89f109334797abf8721819831956dc84 }, // 1518
    Multiplier { upper: 0xfe728b6d44fdb02f6612acec2aafda7c, lower: 0x0fe80eb8728c465a50268f38288afa6d }, // 1519
    Multiplier { upper: 0xcb8ed5f103fe268c51a88a56888caec9, lower: 0xa6533ef9f53d05150ceba5c686d59524 }, // 1520
    Multiplier { upper: 0xa2d8ab273664eba37486d51206d6f23a, lower: 0xeb75cbfb2a9737440a561e386bde10e9 }, // 1521
    Multiplier { upper: 0x8246ef5291ea561c5d38aa74d2458e95, lower: 0x892b0995bbac2c366eab4b60564b40bb }, // 1522
    Multiplier { upper: 0xd0717eea831089c6fb8ddd87b6d5b0ef, lower: 0x41de75bc5f79e0571778789a23ab9ac4 }, // 1523
    Multiplier { upper: 0xa6c1325535a6d49f2fa4b1395f115a59, lower: 0x017ec496b2c7e6ac12c6c6e1b622e237 }, // 1524
    Multiplier { upper: 0x85675b775e1f107f59508dc77f411514, lower: 0x013236def56cb889a89f05815e824e92 }, // 1525
    Multiplier { upper: 0xd5722bf23031b3fef54dafa5986821b9, lower: 0x9b838afe557ac0dc40fe6f356403b0ea }, // 1526
    Multiplier { upper: 0xaac1bcc1c027c3325dd7bfb7ad201afa, lower: 0xe2cfa265112f00b033febf5de99c8d88 }, // 1527
    Multiplier { upper: 0x889afd67ccec9c284b12ffc62419af2f, lower: 0x1bd94eb740f266f35ccbcc4b214a0ad3 }, // 1528
    Multiplier { upper: 0xda919572e17a9373ab51993d068f7eb1, lower: 0xc6287df20183d7ebc7ac7a11cedcde1e }, // 1529
    Multiplier { upper: 0xaedaddf5812edc5c890e1430d20c655b, lower: 0x04ed318e679cacbc9fbd2e74a57d7e7f }, // 1530
    Multiplier { upper: 0x8be24b2acdbf16b06da4dcf3db3d1de2, lower: 0x6a575ad852e3bd63b2fdbec3b7979866 }, // 1531
    Multiplier { upper: 0xdfd078447c64f11a4907c7ec91fb6303, lower: 0xdd58915a1e392f05eb2f979f8c25c0a2 }, // 1532
    Multiplier { upper: 0xb30d2d0396b727483a6c9ff074c91c03, lower: 0x177a0de1b1c758d188f2dfb2d6849a1c }, // 1533
    Multiplier { upper: 0x8f3dbd9c789285d361f07ff390a0e335, lower: 0xac61a4b48e3913dad3f57fc24536e1b0 }, // 1534
    Multiplier { upper: 0xe52f95c72750d61f031a665281016b89, lower: 0x13cf6dedb05b52f7b988cc6a0857cf7f }, // 1535
    Multiplier { upper: 0xb759449f52a711b268e1eb75340122d4, lower: 0x0fd924be26af7592fad3d6bb39dfd933 }, // 1536
    Multiplier { upper: 0x92add07f7552748eba4e55f75ccdb576, lower: 0x73141d64ebbf91426243122f617fe0f5 }, // 1537
    Multiplier { upper: 0xeaafb3ff221d874ac3b0898bc7af88bd, lower: 0x84ecfbd4ac65b537039e837f026634bc }, // 1538
    Multiplier { upper: 0xbbbfc33281b139089c8d3ad639593a31, lower: 0x3723fcaa238490f8cfb202cc01eb5d63 }, // 1539
    Multiplier { upper: 0x9633028ece2760d3b070fbde944761c0, lower: 0xf8e996ee82d073fa3fc19bd667ef7de9 }, // 1540
    Multiplier { upper: 0xf0519db149d89aec4d8192fdba0bcf9b, lower: 0x27dc24b0d14d865d32cf5fbd7318c974 }, // 1541
    Multiplier { upper: 0xc0414af43b13af2371347597c80972e2, lower: 0x8649b6f3daa46b7dc23f7fcac27a3ac4 }, // 1542
    Multiplier { upper: 0x99cdd5902f42f282c0f6c4796cd45be8, lower: 0x6b6e2bf6488389316832cca2352e9569 }, // 1543
    Multiplier { upper: 0xf61622804b9e50d134be0728ae20930d, lower: 0x78b04656da6c0eb573847a9d21e42242 }, // 1544
    Multiplier { upper: 0xc4de82003c7ea70dc3cb38ed581a0f3d, lower: 0xfa269eabe1f00bc45c69fbb0e7e9b502 }, // 1545
    Multiplier { upper: 0x9d7ece6696cbb8d7cfd5c724467b3f64, lower: 0xc81ee5564e59a3037d2196271fee2a68 }, // 1546
    Multiplier { upper: 0xfbfe170a8adf8e2619560b6d3d91ff07, lower: 0xa697d556e3c29e6bfb68f03e997d10a6 }, // 1547
    Multiplier { upper: 0xc998126ed57fa4eb47780924314198d2, lower: 0xebacaaabe9687ebcc920c03214640d52 }, // 1548
    Multiplier { upper: 0xa1467525779950bc392cd41cf4347a42, lower: 0x5623bbbcbab9fefd6db3ccf4dd1cd775 }, // 1549
    Multiplier { upper: 0x81052a845fadda302dbd767d9029fb68, lower: 0x44e962fd622e65978af63d90b0e3df91 }, // 1550
    Multiplier { upper: 0xce6eaa6d65e2f6b37c62572f4d0ff8a6, lower: 0xd4a89e6236b0a28c1189fc1ab49fcc1a }, // 1551
    Multiplier { upper: 0xa525552451825ef5fd1b78f2a40cc6eb, lower: 0xdd53b1e82bc08209a7a1967bc3b309af }, // 1552
    Multiplier { upper: 0x841dddb6a79b7f2b30e2c728833d6bef, lower: 0xe442f4b9bc9a01a152e7ab963628d48c }, // 1553
    Multiplier { upper: 0xd362fc5772926511e7d13ea73862464c, lower: 0xa06b21292dc335ceeb0c45bd23748746 }, // 1554
    Multiplier { upper: 0xa91bfd12c20eb7418640feec2d1b6b70, lower: 0x8055b420f168f7d8bc09d1641c5d3905 }, // 1555
    Multiplier { upper: 0x8749974234d8929ad1cd98bcf0e2bc5a, lower: 0x0044901a5aba5fe0966e411ce37dc737 }, // 1556
    Multiplier { upper: 0xd875bed0548db75e1c7c2794b49dfa29, lower: 0x9a074cf6f79099675716ce949f2fa525 }, // 1557
    Multiplier { upper: 0xad2aff0d10715f7e7d301faa2a17fb54, lower: 0x7b390a5f2c73adec45abd876e5bfb751 }, // 1558
    Multiplier { upper: 0x8a88cc0a738de5feca8ce621bb4662a9, lower: 0xfc2da1e5bd2957f037bcad2beaffc5da }, // 1559
    Multiplier { upper: 0xdda7acdd85afd6647747d69c5ed70443, lower: 0x2d15cfd5fb755980592de1dfde66095d }, // 1560
    Multiplier { upper: 0xb152f0b137bfdeb6c5d31216b2459d02, lower: 0x8a77d977fc5de1337a8b1b197eb8077d }, // 1561
    Multiplier { upper: 0x8ddbf3c0f9664bc56b0f41abc1d14a68, lower: 0x6ec64793304b1a8f953c15adfef99f98 }, // 1562
    Multiplier { upper: 0xe2f986018f0a12d578186912cfb543da, lower: 0x4ad6d8eb80782a7f552cef7ccb28ff59 }, // 1563
    Multiplier { upper: 0xb5946b34726e75779346ba7572f7697b, lower: 0x6f124722cd2ceecc4423f2ca3c20cc47 }, // 1564
    Multiplier { upper: 0x914388f6c1f1f792dc38952ac25f8795, lower: 0xf27505b570f0bf09d01cc23b634d7039 }, // 1565
    Multiplier { upper: 0xe86c0e579cb658eaf9f421de03cc0c23, lower: 0x1d8809224e4dfe7619c79d2bd215805b }, // 1566
    Multiplier { upper: 0xb9f00b794a2b7a5594c34e4b363cd682, lower: 0x7e066db50b71985e7b06175641aacd16 }, // 1567
    Multiplier { upper: 0x94c0092dd4ef951143cf71d5c4fd7868, lower: 0x64d1f15da2c146b1fc04df783488a411 }, // 1568
    Multiplier { upper: 0xee000eafbb18ee820618b622d4c8c0a7, lower: 0x07b64efc379ba44ff9a1658d20daa01c }, // 1569
    Multiplier { upper: 0xbe6672262f472534d1ad5e8243d3cd52, lower: 0x6c91d8c9c6161d0cc7b4513db3e219b0 }, // 1570
    Multiplier { upper: 0x9851f4eb5905b75d748ab201cfdca441, lower: 0xf074ad6e3811b0d70629da97c31b47c0 }, // 1571
    Multiplier { upper: 0xf3b654abc1a2befbedaab6694c943a03, lower: 0x1a5448b059b5e7be7042f759382ba600 }, // 1572
    Multiplier { upper: 0xc2f843bc9ae898c98aeef8543d43619c, lower: 0x15103a26ae2b1fcb8d025f7a93561e66 }, // 1573
    Multiplier { upper: 0x9bf9cfca1586e0a13bf260436435e7b0, lower: 0x10d9c81ef1bc196fa401e5fba911b1eb }, // 1574
    Multiplier { upper: 0xf98fb2dcef3e34352cb7006bd38972b3, lower: 0x4e29403182c68f1906696ff90e82b645 }, // 1575
    Multiplier { upper: 0xc7a628b0bf64f690f09266bca93ac229, lower: 0x0b54335acf053f47385459940b9bc504 }, // 1576
    Multiplier { upper: 0x9fb8208d65ea5eda5a0eb896edc89b54, lower: 0x09102915726a9905c6a9e1433c7c9d9d }, // 1577
    Multiplier { upper: 0xff8d00e23caa315d5ce45a8b160dc553, lower: 0x41b374ef1d775b3c710fced1fa60fc2e }, // 1578
    Multiplier { upper: 0xcc70cd81ca21c1177d837ba2780b0442, lower: 0x9af5f725b12c48fd273fd8a7fb80c9bf }, // 1579
    Multiplier { upper: 0xa38d7134a1b49a793135fc81f9a269ce, lower: 0xe25e5f515a89d3fdb8ffe08662cd6e32 }, // 1580
    Multiplier { upper: 0x82d78dc3b4907b94275e639b2e1b87d8, lower: 0xb5184c41153b0ffe2d99806b823df1c2 }, // 1581
    Multiplier { upper: 0xd158e2d2ba80c5b9d89705c5169272f4, lower: 0x54f3ad34eec4e6637c28cd78d0631c69 }, // 1582
    Multiplier { upper: 0xa77a4f0efb9a37c7e078d16a787528c3, lower: 0x7729575d8bd0b84f96870ac70d1c16bb }, // 1583
    Multiplier { upper: 0x85fb727262e1c6398060a788605dba35, lower: 0xf8eddf7e0973c6a61205a238d749abc9 }, // 1584
    Multiplier { upper: 0xd65f1d83d1693d28cd677273cd62c389, lower: 0x8e49659675860aa35009038e2542ac74 }, // 1585
    Multiplier { upper: 0xab7f4acfdaba9753d785f529711bcfa1, lower: 0x3ea11e11f79e6ee90cd402d81dcef05d }, // 1586
    Multiplier { upper: 0x8932a23fe22edf764604c421274972e7, lower: 0x654db1a7f94b8beda3dccf134b0bf37e }, // 1587
    Multiplier { upper: 0xdb8436cc9d17cbf07007a0350ba8b7d8, lower: 0xa215e90cc212797c39614b5211acb8c9 }, // 1588
    Multiplier { upper: 0xaf9cf8a3b0dfd659f3394cf73c86f97a, lower: 0x1b44ba709b41fac9c781090e748a2d6d }, // 1589
    Multiplier { upper: 0x8c7d93b627197847f5c770c5ca059461, lower: 0xaf6a2ec07c34c8a16c673a71f6d4f124 }, // 1590
    Multiplier { upper: 0xe0c8ec56a4f58d3fefa5813c766f53cf, lower: 0x7f104acd9387a768ad71f71cbe2181d3 }, // 1591
    Multiplier { upper: 0xb3d3f04550c470fff2eacdc9f8590fd9, lower: 0x32736f0adc6c85ed578e5f4a31b467dc }, // 1592
    Multiplier { upper: 0x8fdcc03773d05a665bef0b07f9e0d97a, lower: 0x8ec2bf3be38a04bddfa5190827c3864a }, // 1593
    Multiplier { upper: 0xe62e0058b94d5d70931811a65c9af590, lower: 0xe46acb9305a9a12fcc3b5b403f9f3d43 }, // 1594
    Multiplier { upper: 0xb824cd13c771178d4279a7b84a159140, lower: 0xb6bbd60f37bae759702f7c336618fdcf }, // 1595
    Multiplier { upper: 0x9350a40fd2c0dfa4352e1fc6a1aada9a, lower: 0x2bc9780c2c9585e1268c635c51ad97d9 }, // 1596
    Multiplier { upper: 0xebb439b2eace32a05516993dcf77c429, lower: 0xdfa8c0137a88d6350a7a3893b5e28c8e }, // 1597
    Multiplier { upper: 0xbc902e28bbd828804412143172c63687, lower: 0xe62099a92ed3de90d52e93a95e4ed6d8 }, // 1598
    Multiplier { upper: 0x96d9be86fcaced3369a810278f04f86c, lower: 0xb81a148758a97eda442542ede50bdf14 }, // 1599
    Multiplier { upper: 0xf15c640b2de17b8575d9b3727e6e5a47, lower: 0x8cf6873ef44264906d086b163b4631b9 }, // 1600
    Multiplier { upper: 0xc116b66f57e796045e47c2c1febeae9f, lower: 0xa3f86c325d01ea0d2406bc11c904f494 }, // 1601
    Multiplier { upper: 0x9a7891f2acb944d04b6c9bce6565587f, lower: 0xb660568eb0ce54d7500563416d9d9076 }, // 1602
    Multiplier { upper: 0xf7274feaadf53ae6df142c7d6f088d99, lower: 0x23cd574ab47d548bb33bd20248fc1a57 }, // 1603
    Multiplier { upper: 0xc5b90cbbbe5dc8b8b27689fdf26d3e14, lower: 0x1ca445d55d31106fc296419b6d967b79 }, // 1604
    Multiplier { upper: 0x9e2da3c96517d3c6f52ba197f52431a9, lower: 0xb0836b11175a738c9bab67af8adec92d }, // 1605
    Multiplier { upper: 0xfd15d2dbd4f2ec718845cf598839e90f, lower: 0x80d244e8255d85adc5df0c4c11647515 }, // 1606
    Multiplier { upper: 0xca77dbe310c256c139d172ae0694ba72, lower: 0xcd7503eceab137be37e5a3700de9f744 }, // 1607
    Multiplier { upper: 0xa1f97cb5a701df00fb0df5580543c85b, lower: 0xd790cff0bbc0f964f98482c00b21929d }, // 1608
    Multiplier { upper: 0x819463c4859b18cd95a4c4466a9ca049, lower: 0x7940a65a2fcd9450c79d35666f4e0ee4 }, // 1609
    Multiplier { upper: 0xcf53d2d408f827af55d46d3d77610075, lower: 0x8ecdd6f6b2e286e7a5c85570b2167e3a }, // 1610
    Multiplier { upper: 0xa5dca8a9a0c68625de438a9792b4005e, lower: 0x0bd7df2bc24ed252eb06aac08e7864fb }, // 1611
    Multiplier { upper: 0x84b086ee1a386b517e9c6edfa890004b, lower: 0x3cacb289683f0ea8bc055566d86050c9 }, // 1612
    Multiplier { upper: 0xd44da4b029f3dee8ca93e4990db333ab, lower: 0x9447840f0d31b10df9a2223e27008141 }, // 1613
    Multiplier { upper: 0xa9d7b6f354c318ba3ba983ada48f5c89, lower: 0x436c69a5a427c0d7fae81b64ec006767 }, // 1614
    Multiplier { upper: 0x87dfc58f77027a2e9621362483a5e3a1, lower: 0x02bd2151501fcd7995867c50bccd1f86 }, // 1615
    Multiplier { upper: 0xd96608e58b3729e4236856a0d2a305ce, lower: 0x6ac8354ee69948c288d72d4dfae1cc09 }, // 1616
    Multiplier { upper: 0xadeb3a513c2c21834f86abb3dbb59e3e, lower: 0xbbd35dd8b87aa09ba0ac243e624e3cd4 }, // 1617
    Multiplier { upper: 0x8b22950dc9bce79c3f9eefc3162ae4fe, lower: 0xfca917e093954d494d5683651b71ca44 }, // 1618
    Multiplier { upper: 0xde9dbb4942c7d8f9ff64b2d1bd116e64, lower: 0xc774f300ec221542155738a1c582dd39 }, // 1619
    Multiplier { upper: 0xb217c907689fe0c7ff83c241640df1ea, lower: 0x392a5c00bce81101aaac2d4e379be42d }, // 1620
    Multiplier { upper: 0x8e796d9f86e64d6ccc696834500b27ee, lower: 0x9421e333ca5340ce22235771c6165024 }, // 1621
    Multiplier { upper: 0xe3f57c3271707be1470f0d208011d97d, lower: 0xb9cfd1ec76eb9ae369d22582d68a19d4 }, // 1622
    Multiplier { upper: 0xb65dfcf5278d2fe76c0c0a806674adfe, lower: 0x2e3fdb2392561582bb0e8468aba1ae43 }, // 1623
    Multiplier { upper: 0x91e4ca5db93dbfec56700866b85d57fe, lower: 0x8b6648e941de779bc8d869ed561af1cf }, // 1624
    Multiplier { upper: 0xe96e1095f52f997a23e673d78d622664, lower: 0x123d41753630bf5fa7c0a97bbcf7e94b }, // 1625
    Multiplier { upper: 0xbabe73ab2a8c7ac81cb85cac711b51e9, lower: 0xa831012a91c099195300879630c6543c }, // 1626
    Multiplier { upper: 0x95652955bba3956ce3c6b089f415db21, lower: 0x535a67554166e0e10f339fab5a384364 }, // 1627
    Multiplier { upper: 0xef084222c5d288ae393de7432022f835, lower: 0x522a3eeecf0b01681852991229f39f05 }, // 1628
    Multiplier { upper: 0xbf39ce8237dba08b60fe529c19b5935d, lower: 0xdb54ff25726f345346a87a74ee5c7f38 }, // 1629
    Multiplier { upper: 0x98fb0b9b5fe2e6d5e731dbb0149142b1, lower: 0x7c43ff512858f6a90553952a5849ff60 }, // 1630
    Multiplier { upper: 0xf4c4df5effd171563eb62c4cedb53782, lower: 0x606ccbb50d5b2441a21f55108d433233 }, // 1631
    Multiplier { upper: 0xc3d0b2b266412778322b56a3f15dc601, lower: 0xe6bd6fc40aaf503481b2aa73a435c1c2 }, // 1632
    Multiplier { upper: 0x9ca6f55b8500ec602822abb65ab16b34, lower: 0xb8978c9cd5590cf6ce28885c835e349b }, // 1633
    Multiplier { upper: 0xfaa4bbc5a19b13cd0d0445f0911bdeba, lower: 0xc0f27a94888e7b247d0da6fa6bc9edc5 }, // 1634
    Multiplier { upper: 0xc883c96ae7af430a70d037f3a7497efb, lower: 0xcd8ec876d3a52f50640aebfb896e57d1 }, // 1635
    Multiplier { upper: 0xa0696def1fbf68d5270cf98fb90798c9, lower: 0x713f06c5761dbf73833beffc6df1dfdb }, // 1636
    Multiplier { upper: 0x805457f27fcc53ddb8d72e0c940613d4, lower: 0x5a98d23791b165f602965996be5b197c }, // 1637
    Multiplier { upper: 0xcd53bfea6613b962c15849adb9a352ed, lower: 0x5dc15058e91bd6566a8a28f13091c25f }, // 1638
    Multiplier { upper: 0xa442ffeeb80fc7823446a157c7b5dbf1, lower: 0x17cdd9e0ba7cab78553b53f426db01e6 }, // 1639
    Multiplier { upper: 0x8368ccbef9a63934f69ee7796c917cc0, lower: 0xdfd7e1809530892d10fc4329b8af34b8 }, // 1640
    Multiplier { upper: 0xd2414797f5d6c1ee5764a58f141bface, lower: 0x32f30267551a7514e7fa050f8de52126 }, // 1641
    Multiplier { upper: 0xa83439465e4567f1df83b7a5a9affbd8, lower: 0x28c26852aa7b90dd86619da60b1db41f }, // 1642
    Multiplier { upper: 0x86902dd1e5045327e602f951548cc979, lower: 0xba35204221fc73e46b814aeb3c17c34c }, // 1643
    Multiplier { upper: 0xd74d161ca1a0850ca337f54eedae0f29, lower: 0x29ee9a036993eca0ac02117860260546 }, // 1644
    Multiplier { upper: 0xac3dab4a1ae6d0d6e8f9910bf1580c20, lower: 0xee587b35ee0ff080899b412d19b80438 }, // 1645
    Multiplier { upper: 0x89caef6e7bebda45872e0da32779a34d, lower: 0x8b79fc2b24d98d33a14900f0e1600360 }, // 1646
    Multiplier { upper: 0xdc77e57d9312f6d5a5167c383f290548, lower: 0xdf2993783af5aeb9020e67e7cf000566 }, // 1647
    Multiplier { upper: 0xb05feacadc0f2bde1dab969365ba6aa0, lower: 0xb287a92cfbf7befa680b86530c000452 }, // 1648
    Multiplier { upper: 0x8d1988a249a5bcb1b156120f8495221a, lower: 0x286c87572ff965952009384270000375 }, // 1649
    Multiplier { upper: 0xe1c27436dc3c611c4ef01ce5a0ee9cf6, lower: 0xa7140bbeb328a2883341f39d80000587 }, // 1650
    Multiplier { upper: 0xb49b902be36380e37259b0b7b3f2172b, lower: 0xb8dcd63228ed4ed35c34c2e466666ad3 }, // 1651
    Multiplier { upper: 0x907c73564f82cd82c1e15a2c8ff4df56, lower: 0x2d7d782820bdd8a916909be9eb852242 }, // 1652
    Multiplier { upper: 0xe72d8556e59e159e030229e0e6549889, lower: 0xe26259d9cdfc8ddb574dc643126e9d37 }, // 1653
    Multiplier { upper: 0xb8f13778b7b1aae4cf34ee4d85107a07, lower: 0xe84eae47d7fd3e4912a49e9c0ebee42c }, // 1654
    Multiplier { upper: 0x93f42c6092f488b70c2a583e040d2e6c, lower: 0xb9d88b6cacca983a75507ee33eff1cf0 }, // 1655
    Multiplier { upper: 0xecb9e09a84ba74581376f3966ce1e3e1, lower: 0x295a78ade14426c3eee7316b97fe94b3 }, // 1656
    Multiplier { upper: 0xbd61807b9d61f6acdc5f294523e7e980, lower: 0xede1fa24b43685698bec2789466543c2 }, // 1657
    Multiplier { upper: 0x9781339617819223e37f54374fecbacd, lower: 0x8b1b2e83c35ed1213cbcec6dd1ea9c9c }, // 1658
    Multiplier { upper: 0xf2685289bf35b69fd265538bb3145e15, lower: 0xab5eb0d2d2314e9b94617a494fddc75f }, // 1659
    Multiplier { upper: 0xc1ed0ed498f7c54ca8510fa2f5a9e4de, lower: 0x22b2270f0e8dd87c76b461d43fe49f7f }, // 1660
    Multiplier { upper: 0x9b240bdd472c9dd6ed0da61bf7bb1d7e, lower: 0x82281f3f3ed7e0639229e7dcffea1933 }, // 1661
    Multiplier { upper: 0xf839ac953eadc957e1af702cbf91c8ca, lower: 0x69d9cb98648c9a38e9dca62e66435b84 }, // 1662
    Multiplier { upper: 0xc6948a10fef16ddfe7bf8cf099416d6e, lower: 0xbb14a2e050707b60bb16eb5851cf7c6a }, // 1663
    Multiplier { upper: 0x9edd3b40cbf457e652ffa3f3adcdf125, lower: 0x6276e8b3738d2f8095abef79db0c6388 }, // 1664
    Multiplier { upper: 0xfe2ec5347986f30a1e65d31f7c7cb508, lower: 0x9d8b0debec1518cdbc464bf62b4705a6 }, // 1665
    Multiplier { upper: 0xcb589dc3946bf5a1b1eb0f4c6396f73a, lower: 0x17a2718989aa7a3e30383cc4ef6c0485 }, // 1666
    Multiplier { upper: 0xa2ad4b02dd232ae7c188d909e9459294, lower: 0xdfb527a13aeec831c02cfd6a592336d1 }, // 1667
    Multiplier { upper: 0x82243c024a8288b967a0ada1876adbaa, lower: 0x4c90ec80fbf239c1668a6455141c2bda }, // 1668
    Multiplier { upper: 0xd039f99d44040df5729aaf68d8aaf910, lower: 0x7a817a67f9838f9bd743d3bb5360462a }, // 1669
    Multiplier { upper: 0xa694c7b103367191287bbf8713bbfa73, lower: 0x953461ecc79c72e3129ca962a919d1bb }, // 1670
    Multiplier { upper: 0x8543d2f40291f4742062ff9f42fcc85c, lower: 0x775d1b23d2e38f1c0ee3bab55414a7c9 }, // 1671
    Multiplier { upper: 0xd53951866a8320b9cd6b32986b2e0d60, lower: 0xbefb5e9fb7d27e934b05f788868772db }, // 1672
    Multiplier { upper: 0xaa9441385535b3c7d788f546bc24d780, lower: 0x98c9187fc641fedc3c04c606d205f57c }, // 1673
    Multiplier { upper: 0x88769a93775e296cac6d91056350ac66, lower: 0xe0a0e0663834cbe3633704d2419e5dfd }, // 1674
    Multiplier { upper: 0xda575db8befd0f144715b4d56bb4470b, lower: 0x01016709f387ac9f0524d4839c309661 }, // 1675
    Multiplier { upper: 0xaeac4afa32640c1038de2a445629d26f, lower: 0x34011f3b293956e59db7106949c0784e }, // 1676
    Multiplier { upper: 0x8bbd08c8285009a693e4ee9d11bb0ebf, lower: 0x5ccdb295ba9445847e2c0d2107cd2d0b }, // 1677
    Multiplier { upper: 0xdf94dad9da19a90a863b1761b5f81798, lower: 0x947c50ef90ed3c0730467b680c7b7b45 }, // 1678
    Multiplier { upper: 0xb2dd7be17b47ba6ed1c8df815e6012e0, lower: 0x76c9da5940bdc99f59d1fc533d2f95d1 }, // 1679
    Multiplier { upper: 0x8f17964dfc3961f2416d7f9ab1e67580, lower: 0x5f07e1e10097d47f7b0e6375ca8c77da }, // 1680
    Multiplier { upper: 0xe4f28a16605bcfea0248cc2ab63d88cd, lower: 0x64d9696800f2ed98c4e3d25610e0bfc3 }, // 1681
    Multiplier { upper: 0xb7286e784d163fee683a3ceef8313a3d, lower: 0xea4787866728be13d0b641de73e6ffd0 }, // 1682
    Multiplier { upper: 0x9286bec6a411ccbeb9c830bf2cf42e97, lower: 0xee9f9f9eb8ed64dca6f834b1f6526640 }, // 1683
    Multiplier { upper: 0xea71313dd34fadfdf60d1acb7b204a8c, lower: 0xb0ff65cac17bd4943e59ede98a1d7066 }, // 1684
    Multiplier { upper: 0xbb8dc0fe42a624cb2b3daf092f4d0870, lower: 0x8d991e3bcdfcaa1031e18b213b4ac052 }, // 1685
    Multiplier { upper: 0x960b00cb6884ea3c2297bf3a8c3da05a, lower: 0x0ae0e4fca4ca21a68e4e08e762a23375 }, // 1686
    Multiplier { upper: 0xf0119adf0da176c69dbf985dad2f66f6, lower: 0x77ce3b2dd4769c3db07cdb0bd1038587 }, // 1687
    Multiplier { upper: 0xc00e157f3e1ac56bb166137e2425ebf8, lower: 0x5fd82f57dd2bb03159fd7c097402d139 }, // 1688
    Multiplier { upper: 0x99a4ddff64e237895ab80f981ceb232d, lower: 0x1979bf797dbc8cf447fdfcd45ccf0dc7 }, // 1689
    Multiplier { upper: 0xf5d496656e36bf422ac018f361783848, lower: 0x28c2cbf595fa7b20732ffaed614b493e }, // 1690
    Multiplier { upper: 0xc4aa11eabe92329b55667a5c4df9c6a0, lower: 0x209bd65e11952f4d28f32f244dd5d432 }, // 1691
    Multiplier { upper: 0x9d54db22320e8ee2aab861e371949ee6, lower: 0x807cab7e7477590a8728f2837177dcf5 }, // 1692
    Multiplier { upper: 0xfbbaf836b67db16aaac09c9f1c20fe3d, lower: 0x9a611263ed8bc1aa71db1d9f1bf2fb21 }, // 1693
    Multiplier { upper: 0xc962602bc5315abbbbcd4a18e34d9831, lower: 0x484da84ff13c9aeec17c17b27cc26281 }, // 1694
    Multiplier { upper: 0xa11b802304277bc9630aa1ad82a479c1, lower: 0x06a486a65a96e2589ac9ac8eca351b9b }, // 1695
    Multiplier { upper: 0x80e2cce8d01f963ab5a21af135506167, lower: 0x38839eeb7babe846e23af0723b5dafaf }, // 1696
    Multiplier { upper: 0xce37ae414cff56c455d02b1b88809bd8, lower: 0x5a6c3178c5dfda0b039180b6c562b2b1 }, // 1697
    Multiplier { upper: 0xa4f958343d991236ab0cef493a007cad, lower: 0x15235ac704b314d59c7466f89de88ef4 }, // 1698
    Multiplier { upper: 0x83faacf697ada82bbc0a59076199fd57, lower: 0x441c489f36f5aa447d29ebfa17ed3f2a }, // 1699
    Multiplier { upper: 0xd32aae575915d9df9343c1a568f66225, lower: 0x39c6da9857ef76d3fb76465cf31531dc }, // 1700
    Multiplier { upper: 0xa8eef1df7a77e17fa903015120c51b50, lower: 0xfb057bad1325f8a995f8384a5c10f4b0 }, // 1701
    Multiplier { upper: 0x87258e4c61f98132ed9c010db3d0e2a7, lower: 0x2f3796240f5193bade602d0849a72a27 }, // 1702
    Multiplier { upper: 0xd83c16e09cc268517c2cce7c52e7d10b, lower: 0x7ebf56a0188285f7ca337b4075d84371 }, // 1703
    Multiplier { upper: 0xacfcdf1a1701ed0dfcf0a53042530da2, lower: 0xcbcc454ce0686b2ca1c2c9005e469c5a }, // 1704
    Multiplier { upper: 0x8a63e5ae78ce573e63f3b759cea8d7b5, lower: 0x6fd69dd719ed228a1b023a66b1d216af }, // 1705
    Multiplier { upper: 0xdd6ca2b0c14a25309fec588fb10e25ef, lower: 0x195762f1c31504102b36c3d782e9bde4 }, // 1706
    Multiplier { upper: 0xb123b55a343b50f3b3237a0c8da4eb25, lower: 0xaddf825b0277367355c569793587cb1d }, // 1707
    Multiplier { upper: 0x8db62aae902f73f628e92e707150bc1e, lower: 0x24b2ceaf352c2b8f77d1212dc46ca27e }, // 1708
    Multiplier { upper: 0xe2bd11174d18b989db0eb0b3e8812cfd, lower: 0x07847de521e045b2594e9b7c6d7a9d96 }, // 1709
    Multiplier { upper: 0xb5640dac3dad613b15a55a2986cdbd97, lower: 0x3936cb1db4b36af5143ee2c9f12ee478 }, // 1710
    Multiplier { upper: 0x911cd7bcfe244dc8de1de1bad23e3145, lower: 0xc75f08e4908f88c410324f07f4258393 }, // 1711
    Multiplier { upper: 0xe82e25fb303a160e302fcf9150638209, lower: 0x3efe74a0e74c0e0680507e73203c05b8 }, // 1712
    Multiplier { upper: 0xb9be84c8f361ab3e8cf30c74404f9b3a, lower: 0x98cb9080b909a4d200406528e6966afa }, // 1713
    Multiplier { upper: 0x94986a3a5c4e229870c2705d003faf62, lower: 0x13d60d33c73aea4199cd1dba5211ef2e }, // 1714
    Multiplier { upper: 0xedc0a9f6fa169dc0b46a4d6199ff7f03, lower: 0x52f0151fa52b1068f614fc5d501cb1e3 }, // 1715
    Multiplier { upper: 0xbe33bb2bfb454b0090550ab47b32cc02, lower: 0xa8c010e61dbc0d20c4dd96b10ce3c183 }, // 1716
    Multiplier { upper: 0x9829628995d108cd40440890628f099b, lower: 0xba3340b817c9a41a3717abc0d71c9acf }, // 1717
    Multiplier { upper: 0xf3756a75bc81a7aecd39a74d6a7e75c5, lower: 0xf6b8678cf2dc39c38b5912ce24fa914b }, // 1718
    Multiplier { upper: 0xc2c4552afd34862570faec3deecb916b, lower: 0x2bc6b93d8f16949c6f7a7571b72edaa3 }, // 1719
    Multiplier { upper: 0x9bd04422642a04eac0c8bcfe58a2dabc, lower: 0x230560fe0c12107d25fb9127c5bf154f }, // 1720
    Multiplier { upper: 0xf94d39d0a0433b1134746196f437c460, lower: 0x38089b3013501a61d65f4ea60931bbb1 }, // 1721
    Multiplier { upper: 0xc770fb0d4d0295a75d29e7abf6930380, lower: 0x2cd3af59a90ce1e7deb2a551a0f49628 }, // 1722
    Multiplier { upper: 0x9f8d95a43d9baaec4a87ec89920f3600, lower: 0x23dc8c47ba70b4b97ef5510e1a5d44ed }, // 1723
    Multiplier { upper: 0xff48ef6d2f5f77e0773fe0dc1ce52333, lower: 0x6c9413a5f71abac264bbb4e35d6207e1 }, // 1724
    Multiplier { upper: 0xcc3a592425e5f9805f664d7ce3ea828f, lower: 0x8a100fb7f8e22f01ea2fc3e917819fe7 }, // 1725
    Multiplier { upper: 0xa361e0e9b7eb2e004c51d7971cbb9ba6, lower: 0x080cd95ffa4e8c018826365412ce1986 }, // 1726
    Multiplier { upper: 0x82b4b3ee2cbc24cd09db12df4a2fafb8, lower: 0x0670ade661d8700139b82b767571ae05 }, // 1727
    Multiplier { upper: 0xd1211fe37ac6a1480fc4eafedd191926, lower: 0x70b449709c8d8001f5f378bd88b5e33a }, // 1728
    Multiplier { upper: 0xa74db31c623881067303ef324a7a7a85, lower: 0x26f6a126e3a46667f7f5fa313a2b1c2f }, // 1729
    Multiplier { upper: 0x85d7c27d1b6067385c0325c1d52ec86a, lower: 0x85921a8582e9eb865ff7fb5a94ef49bf }, // 1730
    Multiplier { upper: 0xd62603fb5f00a526f99ea2cfbb7e0d77, lower: 0x3c1cf73c04a978d6fff32bc4217edc65 }, // 1731
    Multiplier { upper: 0xab519cc918cd50ebfae54f0c95fe712c, lower: 0x30172c3003bac712665c23034dff16b7 }, // 1732
    Multiplier { upper: 0x890e1707470aa7232f1dd8d6de652756, lower: 0x8cdf568ccfc89f41eb7ce8cf7198def9 }, // 1733
    Multiplier { upper: 0xdb49be720b443e9eb1c95af163d50bbd, lower: 0xae3224147fa765364594a7b24f5afe5b }, // 1734
    Multiplier { upper: 0xaf6e31f4d5d032188e3aaf278310d631, lower: 0x58281cdd32ec50f837aa1fc1d9159849 }, // 1735
    Multiplier { upper: 0x8c5827f711735b46d82ef2860273de8d, lower: 0xe02017175bf040c692ee7fce474479d4 }, // 1736
    Multiplier { upper: 0xe08d0cbe82522ba48d17ea7003ec9749, lower: 0x6699be8bc64d3470eb1732e3a53a5c86 }, // 1737
    Multiplier { upper: 0xb3a40a3201db561d3dacbb8ccff07907, lower: 0x8547cba3050a905a55ac28b61dc84a05 }, // 1738
    Multiplier { upper: 0x8fb66e8e67e2ab4a97bd62d70cc060d2, lower: 0xd1063c826a6ed9e1de2353c4e4a03b37 }, // 1739
    Multiplier { upper: 0xe5f0b0e3d96aabaa8c6237be7acd67b7, lower: 0xb4d6c73710b15c9c969eec6e3a99f858 }, // 1740
    Multiplier { upper: 0xb7f3c0b6478889553d1b5fcb95711fc6, lower: 0x2a456c2c0d5ab07d454bf0582ee1937a }, // 1741
    Multiplier { upper: 0x932966f8393a07776415e63c778db304, lower: 0xee9df0233de226ca9dd659e0258142c8 }, // 1742
    Multiplier { upper: 0xeb75718d285cd8bf06897060bf491e6e, lower: 0x4a964d052fd03e10fc8a2966a2686ad9 }, // 1743
    Multiplier { upper: 0xbc5df470ed1713cc053ac04d65d41858, lower: 0x3bab70d0f30cfe73fd3b54521b86bbe1 }, // 1744
    Multiplier { upper: 0x96b1905a5745a970042f003deb101379, lower: 0xc955f3da5c0a65299762a9db4938964e }, // 1745
    Multiplier { upper: 0xf11c1a2a253c424cd37e66c97819b8c2, lower: 0xdbbcb95d6010a1dc256aa95edb8dbd49 }, // 1746
    Multiplier { upper: 0xc0e34821b763683d75feb8a12ce1609b, lower: 0xe2fd6117800d4e49b788877f160afdd4 }, // 1747
    Multiplier { upper: 0x9a4f6ce7c5e920312b322d4dbd811a16, lower: 0x4f311a79333dd83af93a05ff44d597dd }, // 1748
    Multiplier { upper: 0xf6e57b0c6fdb66b511e9e215fc01c356, lower: 0xe51b5d8eb862f3918ec33ccba155bfc7 }, // 1749
    Multiplier { upper: 0xc5846270597c522a74bb1b44c99b02ab, lower: 0xea7c4ad893825c747235ca3c81116639 }, // 1750
    Multiplier { upper: 0x9e0381f37ac9db552a2f4903d47c0223, lower: 0x21fd08ad42ceb05d282b083067411e94 }, // 1751
    Multiplier { upper: 0xfcd269859142f888437edb3953f99d05, lower: 0x032e74486ae44d61d9de7380a534fdba }, // 1752
    Multiplier { upper: 0xca41ee04743593a035ff15c776614a6a, lower: 0x68f1f6a05583711b14b1f600842a6495 }, // 1753
    Multiplier { upper: 0xa1ce5803902adc802b3277d2c51aa1ee, lower: 0xba5b2bb3779c5a7c108e5e66d021ea11 }, // 1754
    Multiplier { upper: 0x8171e002d9bbe399bc285fdbd0e21b25, lower: 0x61e2895c5fb048634071e51f0ce7ee74 }, // 1755
    Multiplier { upper: 0xcf1c999e292c9f5c6040995fb49cf83b, lower: 0xcfd0dbc6ff8073d200b63b64e173171f }, // 1756
    Multiplier { upper: 0xa5b07ae4edbd4c49e69a144c907d9363, lower: 0x0ca71638cc66c30e66f82f83e78f45b3 }, // 1757
    Multiplier { upper: 0x848d2f1d8afdd6a18548103d406475e8, lower: 0xd6ec11c709ebcf3eb8c68c69860c37c2 }, // 1758
    Multiplier { upper: 0xd415182f44c95768d54019fb9a3a5641, lower: 0x57e01c71a9794b978e0a7a4270138c6a }, // 1759
    Multiplier { upper: 0xa9aa79bf6a3aac53ddcce19614fb7834, lower: 0x464ce38e212dd612d80861cec00fa388 }, // 1760
    Multiplier { upper: 0x87bb949921c889dcb170b47810c92cf6, lower: 0x9ea3e93e80f1780f1339e7d899a61c6d }, // 1761
    Multiplier { upper: 0xd92c20f502da762de8b453f34e0eae57, lower: 0x64397530ce4f267e852972f42909c714 }, // 1762
    Multiplier { upper: 0xadbce72a68aec4f186f6a98f71a55845, lower: 0xe9c790f3d83f51fed0edf59020d49f44 }, // 1763
    Multiplier { upper: 0x8afd85bb86f237279f2bbad927b779d1, lower: 0x87d2da5cacff74cbda57f7a680aa1903 }, // 1764
    Multiplier { upper: 0xde626f9271838b729845f7c1d9258fb5, lower: 0xa61e2a2de198badfc3bff2a401102804 }, // 1765
    Multiplier { upper: 0xb1e85941f4693c5bad04c634adb7a62a, lower: 0xeb4b54f18146fbe636332883340cecd0 }, // 1766
    Multiplier { upper: 0x8e537a9b29edc9e2f0d09e908af951bb, lower: 0xef6f77279a9f2feb5e8f539c29a3f0a7 }, // 1767
    Multiplier { upper: 0xe3b8c42b76494304b480fdb4118ee92c, lower: 0xb24bf1d8f7651978974bb8f9dc39810b }, // 1768
    Multiplier { upper: 0xb62d69bc5ea1026a2a00caf674725423, lower: 0xc1d65b13f91dadfa12a2fa617cfacda2 }, // 1769
    Multiplier { upper: 0x91bdee304bb401ee8800a25ec38ea9b6, lower: 0x34ab7c0ffa7e24c80ee8c84dfd95714f }, // 1770
    Multiplier { upper: 0xe92fe38079200317400103cad27ddc56, lower: 0xbaabf9b32a636e0ce4a7a6e32f558217 }, // 1771
    Multiplier { upper: 0xba8cb60060e668df6667363bdb97e378, lower: 0x9556615c21e924d71d52ebe8f2aace79 }, // 1772
    Multiplier { upper: 0x953d5e66b3eb87191eb8f82fe2dfe92d, lower: 0x44451ab01b20ea45b10f2320c2223ec7 }, // 1773
    Multiplier { upper: 0xeec8970ab978d8283127f37fd16641e2, lower: 0x06d4f7802b67dd3c4e7e9e9ad036cad8 }, // 1774
    Multiplier { upper: 0xbf06df3bc793e020275329330deb67e8, lower: 0x05772c66891fe4303ecbb215735f08ad }, // 1775
    Multiplier { upper: 0x98d24c2fd2dcb34cec42875c0b22b986, lower: 0x6ac5bd1ed4198359cbd628112918d3be }, // 1776
    Multiplier { upper: 0xf483ad1951611ee17a040bc678378f3d, lower: 0x77a2c831535c055c7956a681db5aec63 }, // 1777
    Multiplier { upper: 0xc39c8a7aa780e5812e69a3052cf93f64, lower: 0x5fb56cf442b00449faabb867e2af2382 }, // 1778
    Multiplier { upper: 0x9c7d3b9552cd84675854826a8a60ff83, lower: 0x7fc45729cef336a195562d1fe88c1c68 }, // 1779
    Multiplier { upper: 0xfa61f8eeeae26d7226ed9d7743ce659f, lower: 0x32d3bea94b1ebdcf5556ae99741360a6 }, // 1780
    Multiplier { upper: 0xc84e60bf224ebdf4ebf14ac5cfd8514c, lower: 0x28a965543c1897d911122547900f8085 }, // 1781
    Multiplier { upper: 0xa03eb3cc1b723190bcc1089e3fe04109, lower: 0xba211ddcfce0797a740e8439400c66d1 }, // 1782
    Multiplier { upper: 0x8032297015f4f473ca3406e4ffe69a6e, lower: 0x2e80e4b0ca4d2dfb900b9cfa99a38574 }, // 1783
    Multiplier { upper: 0xcd1d0f19bcbb20b94386716e663dc3e3, lower: 0x7d9b078143aeaff8e678fb2a8f6c08ba }, // 1784
    Multiplier { upper: 0xa4173f47ca2f4d6102d1f45851cb031c, lower: 0x647c060102f22660b860c8eed9233a2e }, // 1785
    Multiplier { upper: 0x8345cc396e8c3de73574c379db08cf49, lower: 0xe9fcd19a68c1b84d604d6d8be0e8fb58 }, // 1786
    Multiplier { upper: 0xd20946c24a79fca522546bf62b414ba9, lower: 0x76614f5d746926e233af15ac9b0e5ef3 }, // 1787
    Multiplier { upper: 0xa8076bcea1fb30841b76bcc4ef676fba, lower: 0xc51aa5e45d20ebe82958de23af3eb25c }, // 1788
    Multiplier { upper: 0x866c563ee7fc26d015f89703f2b9262f, lower: 0x041551837db3efecede0b1b625cbc1e4 }, // 1789
    Multiplier { upper: 0xd713bd31732d0ae6898dbe6cb78ea37e, lower: 0x6ceee8d262b97fe17c9ab5f03c793639 }, // 1790
    Multiplier { upper: 0xac0fca8df5bda25207a49856f93ee931, lower: 0xf0bf20a84efaccb463aef7f363942b61 }, // 1791
    Multiplier { upper: 0x89a63ba4c497b50e6c83ad1260ff20f4, lower: 0xc098e6ed0bfbd6f6b62593291c76891a }, // 1792
    Multiplier { upper: 0xdc3d2c3ad425ee7d7a6c481d67fe9b21, lower: 0x3427d7e1acc624bdf03c1ea82d8a74f6 }, // 1793
    Multiplier { upper: 0xb030f02f101e586461f039b11ffee280, lower: 0xf686464e23d1b6fe59c9b220246ec3f8 }, // 1794
    Multiplier { upper: 0x8cf3f358d9b1e0504e59c7c0e6658200, lower: 0xc538383e830e2bfeae3af4e6838bcffa }, // 1795
    Multiplier { upper: 0xe1865227c2b633b3b08fa60170a2699a, lower: 0xd526c06404e379977d2b2170d2794cc3 }, // 1796
    Multiplier { upper: 0xb46b74ec9bc4f6295a0c84cdf3b52148, lower: 0xaa8566b66a4f947930ef4df3db943d69 }, // 1797
    Multiplier { upper: 0x9055f723afd0c4ede1a39d718fc41aa0, lower: 0x886ab891eea61060f3f2a4c316103121 }, // 1798
    Multiplier { upper: 0xe6eff1d2b2e7a17c9c38fbe8e6069100, lower: 0xda445a8317701a34b9843ad1bce6b501 }, // 1799
    Multiplier { upper: 0xb8bff4a88f1fb463b02d9653eb387400, lower: 0xae9d1535ac59ae909469c8a7ca522a67 }, // 1800
    Multiplier { upper: 0x93ccc3ba0c195d1c8cf1450fef605ccd, lower: 0x587daa9156ae254076bb06eca1db551f }, // 1801
    Multiplier { upper: 0xec7ad2c3468efb60e18208197f00947b, lower: 0xc0c910e88ab03b9a5791a4adcfc554ff }, // 1802
    Multiplier { upper: 0xbd2f0f029ed8c91a4e01a014659a1063, lower: 0x00a0da53a226961512daea24a6377732 }, // 1803
    Multiplier { upper: 0x9758d8cee57a3a7b719ae676b7ae7382, lower: 0x66e7150fb4ebab440f15881d51c5f8f5 }, // 1804
    Multiplier { upper: 0xf227c14b08c390c5829170bdf2b0b8d0, lower: 0xa4a4ee7f87df786ce4ef402ee93cc188 }, // 1805
    Multiplier { upper: 0xc1b9676f3a360d6acedac097f55a2d73, lower: 0xb6ea5866064c60571d8c3358ba97013a }, // 1806
    Multiplier { upper: 0x9afab925c82b3def0be233acc448245c, lower: 0x92551384d1d6b378e4702913c878cdc8 }, // 1807
    Multiplier { upper: 0xf7f78ea2d9dec97e7969ec47a0736d60, lower: 0xea21b8d482f11f27d3e6a81fa727afa6 }, // 1808
    Multiplier { upper: 0xc65fa54f14b23acb9454bd0619f5f11a, lower: 0x54e7c71068c0e5b9765220195286261e }, // 1809
    Multiplier { upper: 0x9eb2eaa5aa282f094376fd9e7b2b2748, lower: 0x43ec9f4053cd84945ea819addb9e84e5 }, // 1810
    Multiplier { upper: 0xfdeb110910404b42058b2f63f8450ba6, lower: 0xd31432008615a0ed644029162c30d4a2 }, // 1811
    Multiplier { upper: 0xcb22740740336f68046f591cc69da2eb, lower: 0xdc1028006b4480bde9ccedab568d76e8 }, // 1812
    Multiplier { upper: 0xa281f66c335c5920038c474a387e1bef, lower: 0xe340200055d066fe54a3f155ded79253 }, // 1813
    Multiplier { upper: 0x820191f02916adb33609d2a1c6cb498c, lower: 0xb5cce666ab0d1f31dd4ff444b2460ea9 }, // 1814
    Multiplier { upper: 0xd0028319db577c51f00fb7693e120f47, lower: 0x8947d70aab4831e9621986d450701775 }, // 1815
    Multiplier { upper: 0xa66868e17c45fd0e59a62c5431a80c39, lower: 0x3a9fdf3bbc39c18781ae0576a6c012c4 }, // 1816
    Multiplier { upper: 0x852053e7969e640b7aeb56a9c1533cfa, lower: 0x954cb296302e346c67be6ac552334236 }, // 1817
    Multiplier { upper: 0xd500863f5763d34591788aa93551fb2a, lower: 0x887ab756b37d20ad72ca446ee9eb9d23 }, // 1818
    Multiplier { upper: 0xaa66d1cc45e975d1412d3bba910e6288, lower: 0x6d2ef9122930e6f128a1d058bb22e41c }, // 1819
    Multiplier { upper: 0x8852417037edf7da9a8a962eda71e86d, lower: 0x2425940e875a525a86e7d9e095b5834a }, // 1820
    Multiplier { upper: 0xda1d3580597cbfc42a7756b15d830d7b, lower: 0x6d08ece40bc3b6f73e3fc300ef88d210 }, // 1821
    Multiplier { upper: 0xae7dc466adfd6636885f788de468d795, lower: 0xf0d3f0b66fcfc5929833026726070e73 }, // 1822
    Multiplier { upper: 0x8b97d05224cab82ba04c6071838712de, lower: 0x5a4326f859730475468f351f519f3ec3 }, // 1823
    Multiplier { upper: 0xdf594d503addf379007a33e8d271b7ca, lower: 0x2a050b26f584d3eed74b88321c31fe04 }, // 1824
    Multiplier { upper: 0xb2add773624b292d99fb5cba41f49308, lower: 0x219da28591370ff245d6068e7cf4cb36 }, // 1825
    Multiplier { upper: 0x8ef179291b6f54247b2f7d61ce5d426c, lower: 0xe7b14ed140f8d98e9e44d20b972a3c2c }, // 1826
    Multiplier { upper: 0xe4b58ea82be5536d91e595694a2ed0ae, lower: 0x3f8217b534c15c1763a150128b76c6ac }, // 1827
    Multiplier { upper: 0xb6f7a55356510f8adb1e1121082573be, lower: 0x9934dfc42a3449ac4fb4400ed5f89ef0 }, // 1828
    Multiplier { upper: 0x925fb775dea73fa248e4da80d3512965, lower: 0x475d7fd021c36e2372f699a577fa18c0 }, // 1829
    Multiplier { upper: 0xea32bf22fdd865d074a15d9aebb50f08, lower: 0x722f32e69c6be36beb242908bff68e00 }, // 1830
    Multiplier { upper: 0xbb5bcc1bfe46b7d9f6e77e15895da5a0, lower: 0x5b58f58549efe92322835406fff8719a }, // 1831
    Multiplier { upper: 0x95e309affe9ef97b2bec64de077e1e19, lower: 0xe2ad91376e59874f4ecf766bfff9f47b }, // 1832
    Multiplier { upper: 0xefd1a9199764c25eacad6e300bfcfcf6, lower: 0x377c1b8be3c272187e18bd79998fed91 }, // 1833
    Multiplier { upper: 0xbfdaedae12b701e556f124f33cca63f8, lower: 0x2c63493cb63528139813cac7ae0cbe0e }, // 1834
    Multiplier { upper: 0x997bf1580ef8ce51125a83f5ca3b832c, lower: 0xf04f6dca2b5db9a946763bd2f1a3cb3e }, // 1835
    Multiplier { upper: 0xf5931bc017f47d4e83c40656105f3847, lower: 0xe6e57c76abc9290ed72392eb1c394530 }, // 1836
    Multiplier { upper: 0xc475afccdff6caa536366b780d18f9d3, lower: 0x1f1dfd2bbca0eda578e94255b02dd0f4 }, // 1837
    Multiplier { upper: 0x9d2af30a4cc56eea91c522c670e0c7dc, lower: 0x18e4ca8963b3f1512d8768448cf173f6 }, // 1838
    Multiplier { upper: 0xfb77eb43ae08b1774fa1d13d8167a62c, lower: 0xf4a1440f05ecb54eaf3f0d3a7b1becbd }, // 1839
    Multiplier { upper: 0xc92cbc3624d3c12c3fb4a76467861e8a, lower: 0x5d4dd00c04bd5dd88c3270fb95aff097 }, // 1840
    Multiplier { upper: 0xa0f09691b70fcdbcffc3b91d1f9e7ed5, lower: 0x1771733cd0977e46d68ec0c9448cc079 }, // 1841
    Multiplier { upper: 0x80c0787492730afd996960e4194b98aa, lower: 0x79278f63da12cb6bded89a3a9d3d66c7 }, // 1842
    Multiplier { upper: 0xce00c0ba83eb44c8f57567d35bac2777, lower: 0x283f4bd2f68478ac97c0f6c42ec8a472 }, // 1843
    Multiplier { upper: 0xa4cd66fb9cbc37072ac4530f7c89b92c, lower: 0x2032a30f2b9d2d56dfcd92368bd3b6c2 }, // 1844
    Multiplier { upper: 0x83d7859616fcf8d2889d0f3f96d49423, lower: 0x4cf54f3f56175778b30adb5ed642f89b }, // 1845
    Multiplier { upper: 0xd2f26f568b2e5aea742e7ecc2487536b, lower: 0xae554b9889bef25ab8115efe239e5a91 }, // 1846
    Multiplier { upper: 0xa8c1f2aba28b7beec35865701d390f89, lower: 0x58443c7a07cbf515600de5981c7eaedb }, // 1847
    Multiplier { upper: 0x87018eefb53c632569138459b0fa72d4, lower: 0x469cfd2e6ca32a77800b1e1349fef249 }, // 1848
    Multiplier { upper: 0xd8027e4c552d6b6f0e85a08f8190b7ba, lower: 0x0a94c84a476b772599ab63520ffe5074 }, // 1849
    Multiplier { upper: 0xaccecb70442455f272048072ce0d5fc8, lower: 0x087706a1d2bc5f5147bc4f74d998405d }, // 1850
    Multiplier { upper: 0x8a3f09269ce9de5b8e6a005bd80ab306, lower: 0x6d2c054e42304c4106303f90ae1366b1 }, // 1851
    Multiplier { upper: 0xdd31a83dc7dc96f8e3dccd5fc0111e70, lower: 0xaeacd54a03807a01a38065b449b8a44e }, // 1852
    Multiplier { upper: 0xb0f48697d316df2d83170ab3000db1f3, lower: 0xbef0aaa19c66c8014f99eaf6a1608371 }, // 1853
    Multiplier { upper: 0x8d906baca8df18f135ac088f333e27f6, lower: 0x325a221ae3856ccdd947ef2bb44d35f4 }, // 1854
    Multiplier { upper: 0xe280ac47749827e855e00db1eb96a656, lower: 0xb6f69cf7d26f147c8ed97eac53aebcba }, // 1855
    Multiplier { upper: 0xb533bd05f6e01fed11800af4bc788512, lower: 0x2bf87d930ebf4396d8adfef042f23095 }, // 1856
    Multiplier { upper: 0x90f630d1924ce65741333bf6fd2d3741, lower: 0xbcc6cadc0bcc361246f198c0358e8d44 }, // 1857
    Multiplier { upper: 0xe7f04e1c1d47d6f201eb9324c8485869, lower: 0x2e0ade2cdfad235071828e0055b0e206 }, // 1858
    Multiplier { upper: 0xb98d0b49b106458e67efa8ea39d379ed, lower: 0xbe6f1823e6241c405aced800448d819f }, // 1859
    Multiplier { upper: 0x9470d5d48d9e9e0b865953ee94a92e57, lower: 0xcb8c134feb501699e23f13336a0ace19 }, // 1860
    Multiplier { upper: 0xed815620e2976345a3c21fe4210eb08c, lower: 0x78e01ee6454cf0f636cb51ebdcde168d }, // 1861
    Multiplier { upper: 0xbe0111b3e8791c37b634e6501a7226d6, lower: 0xc719b251d10a5a5e923c41897d7e7871 }, // 1862
    Multiplier { upper: 0x9800daf653941692f82a51d9aec1b8ab, lower: 0xd27af50e40d5151874fd013acacb938e }, // 1863
    Multiplier { upper: 0xf334918a1f5357518d1082f5e4692779, lower: 0x50c4bb4a0154ee8d87fb352ade1285b0 }, // 1864
    Multiplier { upper: 0xc290746e7f75df7470da025e50541f94, lower: 0x409d62a19aaa58713995c4224b42048d }, // 1865
    Multiplier { upper: 0x9ba6c38b992b1929f3e19b7ea6a9b2dd, lower: 0x007de881488846c0fade3681d5ce6a0a }, // 1866
    Multiplier { upper: 0xf90ad278f511c1dcb968f8caa442b7c8, lower: 0x00c974020da6d79b2afd2402efb0a9aa }, // 1867
    Multiplier { upper: 0xc73bdb93f74167e3c7872d6ee9cef96c, lower: 0xcd6df6680aebdfaf55975002595a2155 }, // 1868
    Multiplier { upper: 0x9f63160ff9011fe96c6c2458bb0bfabd, lower: 0x7124c52008bcb2f2aadf733514481aaa }, // 1869
    Multiplier { upper: 0xff04f0198e68330f13e03a2791acc462, lower: 0x4ea13b6674611e5111658521ba0cf776 }, // 1870
    Multiplier { upper: 0xcc03f347a52028d8dcb361b941570381, lower: 0xd880fc51f6b41840dab79db494d72c5f }, // 1871
    Multiplier { upper: 0xa3365c3950e68713e3c2b49434459c67, lower: 0xe06730419229ad00aef94af6dd78f04c }, // 1872
    Multiplier { upper: 0x8291e3610d8538dcb6355d435d047d1f, lower: 0xe6b8f367a8215733bf2dd5924ac726a3 }, // 1873
    Multiplier { upper: 0xd0e96bce7c085afabd222ed22e6d94ff, lower: 0xd78e523f73688b85feafbc1d4471d76b }, // 1874
    Multiplier { upper: 0xa721230b966d1595641b58a825247733, lower: 0x12d841cc5c53a2d1988c967dd05b12bc }, // 1875
    Multiplier { upper: 0x85b41c09452411445015e086841d2c28, lower: 0xdbe034a37d0fb5747a0a11fe4048dbca }, // 1876
    Multiplier { upper: 0xd5ecf9a86ea01ba0802300d739c846a7, lower: 0xc633876bfb4c558729a9b6639a0e2c76 }, // 1877
    Multiplier { upper: 0xab23faed254ce2e6cce8cd78fb069eec, lower: 0x9e8f9f8995d6aad287baf84fae71bd2b }, // 1878
    Multiplier { upper: 0x88e9958a843d82523d870ac72f387f23, lower: 0xb20c7fa144abbbdb9fc8c6a62527ca89 }, // 1879
    Multiplier { upper: 0xdb0f55aa6d2f36e9fc0b4471e52731d2, lower: 0xb67a65ced445f95f660e0aa36ea610db }, // 1880
    Multiplier { upper: 0xaf3f77bb8a8c2bee633c36c1841f5b0e, lower: 0xf861eb0bdd04c77f84d80882beeb40af }, // 1881
    Multiplier { upper: 0x8c32c62fa209bcbeb5c9c5679ce5e272, lower: 0x604e55a3173705ff9d79a06898bc33c0 }, // 1882
    Multiplier { upper: 0xe0513d190342c7978942d57294a303ea, lower: 0x33b08904f1f1a332958f670dc12d1f99 }, // 1883
    Multiplier { upper: 0xb37430e0cf689fac6dcf112876e8cfee, lower: 0x8fc06d9d8e5ae8f54472b8d7cdbdb2e1 }, // 1884
    Multiplier { upper: 0x8f90271a3f86e6238b0c0db9f8ba3ff2, lower: 0x0c99f14ad848ba5dd05bc7130afe28b4 }, // 1885
    Multiplier { upper: 0xe5b371c398d7d69f44e015f65ac39983, lower: 0x475cb5448d412a2fb3c60b51ab30411f }, // 1886
    Multiplier { upper: 0xb7c2c1694713121903e677f8489c7acf, lower: 0x6c4a2a9d3dcdbb595c9e6f7488f3674c }, // 1887
    Multiplier { upper: 0x9302345438dc0e7a69852cc6a07d2f0c, lower: 0x56a1bbb0fe3e2f7ab07ebf906d8f85d7 }, // 1888
    Multiplier { upper: 0xeb36ba205af9b0c3dc0847a433fb7e7a, lower: 0x2435f91b30637f2ab3fdff4d7c18d624 }, // 1889
    Multiplier { upper: 0xbc2bc819e2615a3649a039502995fec8, lower: 0x1cf7fa7c26b5ff555ccb32a4634711b7 }, // 1890
    Multiplier { upper: 0x96896ce181e77b5ea14cfaa687ab3239, lower: 0xb0c661fcebc4cc444a3c2883829f415f }, // 1891
    Multiplier { upper: 0xf0dbe168cfd8c5643547f770d911e9f5, lower: 0xe7a3cffb12d47a06dd2d0d9f37653565 }, // 1892
    Multiplier { upper: 0xc0afe7870cad6ab691065f8d7a74bb2b, lower: 0x1fb63ffc0f10619f17573e18f91dc451 }, // 1893
    Multiplier { upper: 0x9a2652d2708abbc540d1e60ac85d6288, lower: 0xe62b66633f404e18df78fe7a60e49d0d }, // 1894
    Multiplier { upper: 0xf6a3b7b71a7792d5348309aada2f040e, lower: 0x3d123d6b9866e35aff27fd909b0761af }, // 1895
    Multiplier { upper: 0xc54fc62c152c75775d35a1557b58d00b, lower: 0x640e978946b8b5e265b997a6e26c4e25 }, // 1896
    Multiplier { upper: 0x9dd96b567756c45f7dc481112f7a4009, lower: 0x1cd8793a9efa2b1b849479524ebd0b51 }, // 1897
    Multiplier { upper: 0xfc8f1223f2246d65960734e84bf6ccdb, lower: 0x615a5b90fe5d11c5a0ed8eea1794dee8 }, // 1898
    Multiplier { upper: 0xca0c0e83281d245144d290b9d65f0a49, lower: 0x1aaeafa731e40e37b3f13f21ac7718ba }, // 1899
    Multiplier { upper: 0xa1a33ecf534a8374370eda2e4518d507, lower: 0x488bbfb8f4b671c6298dcc1af05f46fb }, // 1900
    Multiplier { upper: 0x814f6572a9086929c5a57b58374710d2, lower: 0xa06fcc93f6f85b04ee0b09af26b29f2f }, // 1901
    Multiplier { upper: 0xcee56f1ddb40a842d5d59226bed81aea, lower: 0x9a4c7a8657f3c4d4b011a9183dea984c }, // 1902
    Multiplier { upper: 0xa58458e4af66ed0244aadb5232467bee, lower: 0xe1d6c86b798fd0aa2674874697eee03d }, // 1903
    Multiplier { upper: 0x8469e0b6f2b8bd9b6a22490e8e9ec98b, lower: 0xe7df06bc613fda21b85d39054658b364 }, // 1904
    Multiplier { upper: 0xd3dc9abe512795c5769d41b0e4314279, lower: 0x72fe712d686629cf8d61f4d53d5ab89f }, // 1905
    Multiplier { upper: 0xa97d489840ec77d12bb1015a50276861, lower: 0x28cb8dbded1e87d93de7f710fde22d4c }, // 1906
    Multiplier { upper: 0x87976d469a56c640efc0cde1d9b9204d, lower: 0xba3c7164bdb2064764b99273fe4e8aa4 }, // 1907
    Multiplier { upper: 0xd8f24870f6f13d34b2ce1636292833af, lower: 0x9060b56dfc500a0bd45c1d8663b0ddd2 }, // 1908
    Multiplier { upper: 0xad8ea05a5f27642a28a4de91ba868fbf, lower: 0xa6b3c457fd0cd4d6437ce46b82f3e4a8 }, // 1909
    Multiplier { upper: 0x8ad880484c1f8354ed50b20e2ed20c99, lower: 0x522969dffda3dd7835fd8389358fea20 }, // 1910
    Multiplier { upper: 0xde2733a6e0326bbb154de9b04ae9adc2, lower: 0x1d0f0fccc9062f26bcc8d275227fdd00 }, // 1911
    Multiplier { upper: 0xb1b8f61f19c1efc8ddd7ee26a2548b01, lower: 0xb0d8d970a0d1bf5230a0a85db5331733 }, // 1912
    Multiplier { upper: 0x8e2d91b27b018ca0b1798b521b76d59a, lower: 0xf3e0adf3b3daff74f3b3b9e490f5ac29 }, // 1913
    Multiplier { upper: 0xe37c1c50c4cf4767825c121cf8be2291, lower: 0x86344985ec9198bb1f85f63a81891375 }, // 1914
    Multiplier { upper: 0xb5fce373d0a5d2b9351674e3fa31b541, lower: 0x3829d46b23a7ad627f9e5e95346da92a }, // 1915
    Multiplier { upper: 0x91971c5ca6eb0efa90dec3e994f49100, lower: 0xf9bb1055b61fbde866184baa9057ba88 }, // 1916
    Multiplier { upper: 0xe8f1c6faa4ab4b2a81646ca8ee541b34, lower: 0xc2c4e6ef89cc630d7026df774d592a74 }, // 1917
    Multiplier { upper: 0xba5b0595508908eecde9f087251015c3, lower: 0xcf03ebf2d4a3827126857f92a4475529 }, // 1918
    Multiplier { upper: 0x95159e110d3a6d8bd7ee5a05b7401169, lower: 0x7269898f1082cec0eb9dffa8836c4421 }, // 1919
    Multiplier { upper: 0xee88fce8152a48dfbfe3c33c58668242, lower: 0x50a8dc181a6ae467df6332a738ad39ce }, // 1920
    Multiplier { upper: 0xbed3fd8677550719664fcf6379eb9b68, lower: 0x40871679aebbe9ecb2b5c21f608a94a5 }, // 1921
    Multiplier { upper: 0x98a9979ec5dd9f47850ca5e92e5615ed, lower: 0x006c11faf22fee56f55e34e5e6d543b7 }, // 1922
    Multiplier { upper: 0xf4428c313c95cba5a1add641e3bcefe1, lower: 0x9a46832b1d197d57eefd216fd7bb9f8c }, // 1923
    Multiplier { upper: 0xc368702763ab09514e24ab67e963f31a, lower: 0xe1d20288e414644658ca8126462fb2d6 }, // 1924
    Multiplier { upper: 0x9c538cec4fbc07743e83bc53211cc27b, lower: 0xe7db353a5010503847086751d1bfc245 }, // 1925
    Multiplier { upper: 0xfa1f47e07f933f206405fa1e9b61372c, lower: 0xa62b885d4ce6e6c071a70bb61c6603a1 }, // 1926
    Multiplier { upper: 0xc819064d32dc32805004c8187c4dc5bd, lower: 0x51bc6d1770b8b899f485a2f816b802e8 }, // 1927
    Multiplier { upper: 0xa014050a8f168ecd0cd0a01396a49e31, lower: 0x0e305745f3c6fa14c39e1bf9abc668b9 }, // 1928
    Multiplier { upper: 0x801004087278723da3da19a945507e8d, lower: 0xa4f37904c30594dd694b4994896b86fb }, // 1929
    Multiplier { upper: 0xcce66cda50c0b6c90629c2a86ee730e2, lower: 0xa1858e6e04d5bafbdbaba8eda8ac0b2b }, // 1930
    Multiplier { upper: 0xa3eb8a48409a2bd404ee35538bec271b, lower: 0xb46ad85803de2f2fe2efba57ba233c22 }, // 1931
    Multiplier { upper: 0x8322d5069a14efdcd0be910fa323527c, lower: 0x905579e0031825bfe8bfc8462e829682 }, // 1932
    Multiplier { upper: 0xd1d154d75cee4c948130e819050550c7, lower: 0x4d558fccd1c03c664132da09e4042403 }, // 1933
    Multiplier { upper: 0xa7daaa45e3f1d6dd342720140404409f, lower: 0x71113fd70e33638500f57b3b1cd01ccf }, // 1934
    Multiplier { upper: 0x86488837e98e457dc352801003369a19, lower: 0x2740ffdf3e8f82d0cd912f627d734a3f }, // 1935
    Multiplier { upper: 0xd6da738ca8e3a262d21d99b338575cf5, lower: 0x0b9b32feca7f37b47c1b7f03fbeba9ff }, // 1936
    Multiplier { upper: 0xabe1f60a20b61b8241b147c29379172a, lower: 0x6faf5bff0865c629fce2cc032fefbb32 }, // 1937
    Multiplier { upper: 0x898191a1b3c4e2ce9af4396875fa78ee, lower: 0xbfbf7ccc06b7d1bb30b570028cbfc8f5 }, // 1938
    Multiplier { upper: 0xdc02829c52d49e175e538f0d8990c17d, lower: 0xff98c7acd78c82c51abbe66a7acc74bb }, // 1939
    Multiplier { upper: 0xb0020216a8aa1812b1dc72713ada3464, lower: 0xcc7a395712d6cf0415631ebb95705d63 }, // 1940
    Multiplier { upper: 0x8cce68122088134227e38ec0fbe1c383, lower: 0xd6c82ddf42457269aab5b22faac04ab5 }, // 1941
    Multiplier { upper: 0xe14a401d00d9b869d96c179b2c9c6c06, lower: 0x24737c986a08b70f77891d191133aabb }, // 1942
    Multiplier { upper: 0xb43b667d9a47c6bb14567948f07d2338, lower: 0x1d293079ee6d5f3f92d4174740f62230 }, // 1943
    Multiplier { upper: 0x902f853148396bc8dd11faa0c0641c2c, lower: 0xe420f394bebde5cc75767905cd91b4f3 }, // 1944
    Multiplier { upper: 0xe6b26eb5405bdfa7c81cc4346706937b, lower: 0x069b1f54646309472257280948e92184 }, // 1945
    Multiplier { upper: 0xb88ebef766afe61fd34a3690526ba92f, lower: 0x387c1910504f3a9f4eac20076d874e04 }, // 1946
    Multiplier { upper: 0x93a56592b88cb81975d4f8737522edbf, lower: 0x60634740403f62190bbce66c579f719d }, // 1947
    Multiplier { upper: 0xec3bd5b78dadf35befbb271f21d17c65, lower: 0x67053ecd33989cf4df94a3e08c324f61 }, // 1948
    Multiplier { upper: 0xbcfcaaf93e24c2aff2fc1f4c1b0dfd1d, lower: 0xec04323dc2e07d90b2dd4fe6d68ea5e7 }, // 1949
    Multiplier { upper: 0x973088c764ea35598f301909af3e6417, lower: 0xf0035b649be6cada28b10cb8aba55186 }, // 1950
    Multiplier { upper: 0xf1e7413f07dd2228e519c1a91863d359, lower: 0x80055f075fd7aaf6a781adf445d54f3c }, // 1951
    Multiplier { upper: 0xc185cdcc064a81ba50e167ba79e975e1, lower: 0x33377f39197955921f9af19037ddd8fd }, // 1952
    Multiplier { upper: 0x9ad17170050867c840b452fb94bac4b4, lower: 0x28f9329414611141b2e25ad9c64b13fe }, // 1953
    Multiplier { upper: 0xf7b5824cd4da3fa6cded519287913ab9, lower: 0xdb2850eced681b9c516a2af60a11b996 }, // 1954
    Multiplier { upper: 0xc62acea3dd7b661f0b244142060dc894, lower: 0xaf5373f0bdece2e37454ef2b3b416145 }, // 1955
    Multiplier { upper: 0x9e88a54fe462b818d5b69a9b380b06dd, lower: 0x590f8ff3cb23e8b5f6aa58ef629ab437 }, // 1956
    Multiplier { upper: 0xfda76ee63a378cf489242a91f344d7c8, lower: 0x8e7f4cb9450641232443c17f042ab9f1 }, // 1957
    Multiplier { upper: 0xcaec58b82e92d72a0750220e5c371306, lower: 0xd865d6fa9d9e9a8283696798d0222e5b }, // 1958
    Multiplier { upper: 0xa256ad60254245bb390ce80b7cf8dc05, lower: 0x79eb126217b2153535edec7a401b5849 }, // 1959
    Multiplier { upper: 0x81def119b76837c8fa70b9a2ca60b004, lower: 0x6188db81ac8e775dc4be56c83349136d }, // 1960
    Multiplier { upper: 0xcfcb1b5c58a6bfa7f71ac29e109ab33a, lower: 0x35a7c59c474a58960796f140520e857c }, // 1961
    Multiplier { upper: 0xa63c15e37a1effb9927bcee4da155c2e, lower: 0x9153047d05d513ab39458dcd0e720463 }, // 1962
    Multiplier { upper: 0x84fcde4f94e5996141fca583e1aab025, lower: 0x410f36ca6b10dc88fa9e0b0a71f4d04f }, // 1963
    Multiplier { upper: 0xd4c7ca18ee3c289b9cc76f39691119d5, lower: 0x34e5247711b4940e5dc9ab43e987b3b2 }, // 1964
    Multiplier { upper: 0xaa396e7a5830207c7d6c58faba7414aa, lower: 0x90b7505f415d433eb16e229cbad2f628 }, // 1965
    Multiplier { upper: 0x882df1fb79c019fd31237a622ec343bb, lower: 0xa6f90d19011768fef4581bb0957591ba }, // 1966
    Multiplier { upper: 0xd9e31cc58f99c32eb505909d179ed2c5, lower: 0xd7f4e1c19b58a7fe53c02c4dbbef4f8f }, // 1967
    Multiplier { upper: 0xae4f4a37a6149c255d9e0d4a794bdbd1, lower: 0x7990b49ae2ad5331dc99bd0afcbf72d9 }, // 1968
    Multiplier { upper: 0x8b72a1c61e76e35117b1a43b943cafda, lower: 0xc7a6f6e24ef10f5b16e16408ca32c247 }, // 1969
    Multiplier { upper: 0xdf1dcfa363f16bb4f2b5d39286c77fc4, lower: 0x72a4be36e4b4e55e8b0239a7a9ead072 }, // 1970
    Multiplier { upper: 0xb27e3fb5e98defc3f55e42db9f05ffd0, lower: 0x5bb6fe925090b77ed59b6152ee55738e }, // 1971
    Multiplier { upper: 0x8ecb662b213e59699118357c7f37ffd9, lower: 0xe2f8cba84073c5ff11491aa8beaac2d8 }, // 1972
    Multiplier { upper: 0xe478a37835308f0f4e8d2260cb8ccc8f, lower: 0xd18e12a6cd8609981ba82aa797779e27 }, // 1973
    Multiplier { upper: 0xb6c6e92cf75a0c0c3ed74eb3d60a3d3f, lower: 0xdad80eebd79e6e1349535552df92e4ec }, // 1974
    Multiplier { upper: 0x9238ba8a5f7b3cd698ac3ef644d4fdcc, lower: 0xaf133f2312e524dc3aa9110f194250bd }, // 1975
    Multiplier { upper: 0xe9f45daa325ec7bdc11397f06e219614, lower: 0x4b51fe9e84a1d493910e81b1c203b461 }, // 1976
    Multiplier { upper: 0xbb29e488284bd2fe340facc0581ade76, lower: 0xa2a7fee536e7dd42da72015b019c904e }, // 1977
    Multiplier { upper: 0x95bb1d39b9d64264f672f099e0157ec5, lower: 0x4eeccbea92531768aec19aaf347d403e }, // 1978
    Multiplier { upper: 0xef91c85c5c8a03d4bd84b4296688cad5, lower: 0x4b1479775084f241179c2ab1ed953396 }, // 1979
    Multiplier { upper: 0xbfa7d37d16d4cfdd646a29bab86d6f11, lower: 0x08dd2df90d37283412e3555b24775c78 }, // 1980
    Multiplier { upper: 0x99530f9745770cb11d21bafbc6bdf274, lower: 0x071757fa70f8ecf67582aaaf505f7d2d }, // 1981
    Multiplier { upper: 0xf551b28ba258144e9502c4c60ac983ec, lower: 0xd8255990b4c17b23ef37777ee6ff2eae }, // 1982
    Multiplier { upper: 0xc4415ba2e84676a544023704d56e0323, lower: 0xe01de140909ac8e98c2c5f98b8cc2558 }, // 1983
    Multiplier { upper: 0x9d01161bed052bb7699b5f371124cf4f, lower: 0xe67e4dcd407bd3ee09bd1946fa3ceaad }, // 1984
    Multiplier { upper: 0xfb34f02cae6eac58a8f898581b6e187f, lower: 0xd7307c7b9a5fb97cdc61c20b29fb1115 }, // 1985
    Multiplier { upper: 0xc8f7268a252556ad53fa1379af8b46cc, lower: 0xac26c9fc7b7fc79716b49b3c2195a744 }, // 1986
    Multiplier { upper: 0xa0c5b86e841ddef10ffb42c7bfa29f0a, lower: 0x23523b3062cc9fac122a15c9b477b903 }, // 1987
    Multiplier { upper: 0x809e2d25367e4bf40cc90239661bb26e, lower: 0x82a82f59e8a3b2f00e88116e29f960d0 }, // 1988
    Multiplier { upper: 0xcdc9e1d523fd465347a8038f09c5ea4a, lower: 0x6aa6b22974391e4ce40ce8b043289ae5 }, // 1989
    Multiplier { upper: 0xa4a181774ffdd1dc3953360c07d1883b, lower: 0x88855b545cfa7ea3e9a3ed59cf53af1e }, // 1990
    Multiplier { upper: 0x83b46792a664a7e3610f5e70064139c9, lower: 0x3a0449104a61fee987b6577b0c42f27f }, // 1991
    Multiplier { upper: 0xd2ba3f510a3aa6389b4bca4cd6cec2db, lower: 0x9006db4d43cffe4272bd58c4e06b1d97 }, // 1992
    Multiplier { upper: 0xa894ff74082eeb607c3ca1d7123f0249, lower: 0x40057c3dcfd9983528977a3719ef4adf }, // 1993
    Multiplier { upper: 0x86dd9929a0258919fcfd4e45a832683a, lower: 0x999dfcfe3fe14690ed45fb5f47f2a24c }, // 1994
    Multiplier { upper: 0xd7c8f50f66a274f661954a090d1d7390, lower: 0xf5c994c9ffced74e486ff898731dd07a }, // 1995
    Multiplier { upper: 0xaca0c40c521b90c51addd4d40a7df60d, lower: 0x916e10a1997245d839f32d46c27e4062 }, // 1996
    Multiplier { upper: 0x8a1a367041afa704157e43dcd53191a4, lower: 0x74580d4e145b6b13618f576bcecb66b5 }, // 1997
    Multiplier { upper: 0xdcf6bd8069190b39bbfd3961551c1c3a, lower: 0x53c01549ba2bde8568e558ac7e123ded }, // 1998
    Multiplier { upper: 0xb0c56466ba7a6f616330fab444167cfb, lower: 0x7633443afb564b9ded8446f064db64be }, // 1999
    Multiplier { upper: 0x8d6ab6b8952ebf811c272ef69cdeca62, lower: 0xc4f5d02f2f783c7e579d058d1d7c5098 }, // 2000
    Multiplier { upper: 0xe244578dbb7dff34f9d84b242e3143d1, lower: 0x3b22e6b1e58d2d96f294d5ae9593b426 }, // 2001
    Multiplier { upper: 0xb503793e2f97ff5d94ad08e9be8dcfda, lower: 0x95b5855b1e0a8adf2877115877a95ceb }, // 2002
    Multiplier { upper: 0x90cf9431bfaccc4add573a5498717315, lower: 0x4491377c18086f18ed2c0de05fbab0bc }, // 2003
    Multiplier { upper: 0xe7b286b5ff7ae077c88b90875a4f1e88, lower: 0x6db5259359a71827e1e01633cc5de794 }, // 2004
    Multiplier { upper: 0xb95b9ef7ff95805fd3a2da05e1d8e539, lower: 0xf15db7a91485acecb4b344f63d17ec76 }, // 2005
    Multiplier { upper: 0x94494bf9994466b30fb57b37e7e0b761, lower: 0x8de492edaa048a56f6f5d0c4fdacbd2c }, // 2006
    Multiplier { upper: 0xed421328f53a3deb4c5591f30c9abf02, lower: 0x7ca0eb15dcd4108b24bc813b2f7ac845 }, // 2007
    Multiplier { upper: 0xbdce75ba5dc8318909de0e5c0a15659b, lower: 0x96e72277e3dcda08ea3067628c6239d1 }, // 2008
    Multiplier { upper: 0x97d85e2eb16cf46da17e71e33b445149, lower: 0x4585b52cb64a480721c052b53d1b6174 }, // 2009
    Multiplier { upper: 0xf2f3c9e44f14ba490263e96b9206e875, lower: 0x3c0921e123aa0cd8360084552e923586 }, // 2010
    Multiplier { upper: 0xc25ca1837276fb6d9b832122db38b9f7, lower: 0x633a8180e954d7135e66d0442541c46c }, // 2011
    Multiplier { upper: 0x9b7d4e02c1f8c9247c68e74f15c6fb2c, lower: 0x4f620133eddd78dc4b857369b767d056 }, // 2012
    Multiplier { upper: 0xf8c87cd1365adb6d93db0bb1bc7191e0, lower: 0x7f03351fe2fbf493ac08b8a92572e6f0 }, // 2013
    Multiplier { upper: 0xc706ca40f848af8adcaf3c8e305adb19, lower: 0xff35c41982632a0fbcd3c6edb78f1f27 }, // 2014
    Multiplier { upper: 0x9f38a1cd936d593be3bf63a4f37be27b, lower: 0x329169ae01e8ee72fd7638be2c727f52 }, // 2015
    Multiplier { upper: 0xfec102e2857bc1f96c656c3b1f2c9d91, lower: 0xea8242b0030e4a519589f4637a50cbb6 }, // 2016
    Multiplier { upper: 0xcbcd9be86ac967fabd1df02f4c23b141, lower: 0x886835599c0b6ea7aad4c382c840a2f8 }, // 2017
    Multiplier { upper: 0xa30ae320556decc8974b268c3ce95a9a, lower: 0xd38691147cd5f21fbbdd69356d008260 }, // 2018
    Multiplier { upper: 0x826f1c19ddf18a3a12a2853cfd877baf, lower: 0x0f9eda76ca44c1b2fcb120f78a66ceb4 }, // 2019
    Multiplier { upper: 0xd0b1c68fc98276c35104086195a592b1, lower: 0xb297c3f143a135eb2de834bf43d7b11f }, // 2020
    Multiplier { upper: 0xa6f49ed96e01f89c40d006b477b7a88e, lower: 0x2879698dcfb42b228b202a329cac8db3 }, // 2021
    Multiplier { upper: 0x85907f14580193b033d99ef6c62c86d8, lower: 0x2061213e3fc355b53c19bb5bb08a0af5 }, // 2022
    Multiplier { upper: 0xd5b3fe86f335b919ec8f64be09e0d7c0, lower: 0x33ce9b96cc6bbc552cf5f892b4101188 }, // 2023
    Multiplier { upper: 0xaaf66538c29160e18a0c509807e71300, lower: 0x297216123d22fd10f0c4c6dbc3400e07 }, // 2024
    Multiplier { upper: 0x88c51dc7020de71ad4d6a6e006527599, lower: 0xbac1ab41ca82640d8d6a38afcf66719f }, // 2025
    Multiplier { upper: 0xdad4fc719ce30b5e215771667083ef5c, lower: 0x5e02ab9c7737067c1576c1194bd71c31 }, // 2026
    Multiplier { upper: 0xaf10c9f47d826f7e8112c11ec0698c49, lower: 0xe4ceefb05f5f3863445f00e10978e35b }, // 2027
    Multiplier { upper: 0x8c0d6e5d313525fecda89a7f0054703b, lower: 0x1d725959e5e5c6b5d04c00b40793e916 }, // 2028
    Multiplier { upper: 0xe0157d61e8550997af742a64cd53e6c4, lower: 0xfbea288fd63c7122e6e001200c1fdb55 }, // 2029
    Multiplier { upper: 0xb344644e53773adfbf9021ea3ddcb89d, lower: 0x9654ed3fde96c0e8b8b33419a34caf78 }, // 2030
    Multiplier { upper: 0x8f69e9d842c5c8b2ffa68188317d607e, lower: 0x11dd8a997edf00ba2d5c29ae1c3d592d }, // 2031
    Multiplier { upper: 0xe57642f39e09411e65d735a6b5956730, lower: 0x1c95aa8f3164cdf6aef9dc49c6c88ead }, // 2032
    Multiplier { upper: 0xb791cf294b3a9a7eb7df5e1ef7aab8f3, lower: 0x4a11553f5ab70b2bbf2e49d49f06d88b }, // 2033
    Multiplier { upper: 0x92db0c2108fbaecbc64c4b4bf95560c2, lower: 0xa1a77765e22c08efcc2507dd4c057a09 }, // 2034
    Multiplier { upper: 0xeaf813680e5f7e12d6e078798eef0137, lower: 0x690bf23c9d13417fad080c95466f29a7 }, // 2035
    Multiplier { upper: 0xbbf9a9200b7f980f124d2d2e0bf2675f, lower: 0x873cc1ca17429acc8a6cd6ddd1f287b9 }, // 2036
    Multiplier { upper: 0x96615419a2cc79a5a83dbdbe6ff51f7f, lower: 0x9f63ce3b45cee23d3b8a457e418ed2fb }, // 2037
    Multiplier { upper: 0xf09bb9c29e13f5d5d9fc62ca4cbb6598, lower: 0xff0616c53c7e36c85f43a2639c17b7f7 }, // 2038
    Multiplier { upper: 0xc07c949bb1a99177e196b56ea3c91e13, lower: 0xff38123763982bd37f694eb616795ff9 }, // 2039
    Multiplier { upper: 0x99fd43afc154745fe7abc45883074b43, lower: 0x329341c5e9468975ff87722b452de661 }, // 2040
    Multiplier { upper: 0xf66205e60220ba330c4606f404d8786b, lower: 0x841ecfa30ed7425665a583786eafd701 }, // 2041
    Multiplier { upper: 0xc51b37eb34e6fb5c09d19f299d79f9ef, lower: 0x9ce572e8d8ac3511eaeacf938bbfdf34 }, // 2042
    Multiplier { upper: 0x9daf5fef5d8595e33b0e18ee1794c7f2, lower: 0xe3eac253e089c40e5588a60fa2ffe5c3 }, // 2043
    Multiplier { upper: 0xfc4bccb22f3c23052b49c17cf287a651, lower: 0x6caad086340fa016ef4109b29e663c6c }, // 2044
    Multiplier { upper: 0xc9d63d5b58fce8d0ef6e3463f53951da, lower: 0xbd55739e900c80125900d48ee51e96bd }, // 2045
    Multiplier { upper: 0xa1783115e0ca53da5924f6b65dc774ae, lower: 0xfdddf618733d3341e0cd76d8b74babca }, // 2046
    Multiplier { upper: 0x812cf41180a1dcaeadb72bc517d2c3bf, lower: 0x317e5e79f5ca8f67e70ac57a2c3c896f }, // 2047
    Multiplier { upper: 0xceae534f34362de4492512d4f2ead2cb, lower: 0x8263ca5cbc774bd971aad59046c7424a }, // 2048
    Multiplier { upper: 0xa55842a5c35e8b1d0750dbdd8f22423c, lower: 0x684fd516fd2c3cadf488aad9d23901d5 }, // 2049
    Multiplier { upper: 0x84469bb7cf7ed5b0d2a7164ad8e834fd, lower: 0x203fddabfdbcfd57f6d3bbe174fa67de }, // 2050
    Multiplier { upper: 0xd3a42c594bfe22b4843e8a115b0d2195, lower: 0x00662f7995fb2ef32485f968bb2a3fc9 }, // 2051
    Multiplier { upper: 0xa950237aa331b55d36986e7448d74e10, lower: 0xcd1e8c6144c8f25c1d37faba2f54ffd4 }, // 2052
    Multiplier { upper: 0x87734f954f5af77dc546bec36d790b40, lower: 0xa418704dd0a0c1e34a932efb5910ccaa }, // 2053
    Multiplier { upper: 0xd8b87f554bc4bf2fa20acad248c1ab9a, lower: 0xa0271a161a9acfd210eb7e5ef4e7addc }, // 2054
    Multiplier { upper: 0xad6065ddd636ff594e6f08a83a348948, lower: 0x801f4811aee23fdb40bc6518c3ec8b17 }, // 2055
    Multiplier { upper: 0x8ab384b1782bff7aa525a08694f6d43a, lower: 0x001906748be83315cd638413cff06f45 }, // 2056
    Multiplier { upper: 0xddec078259dfff2aa1d5cda4218aed29, lower: 0x99c1a3edaca6b822e238d352e64d7ed5 }, // 2057
    Multiplier { upper: 0xb1899f9b7b1998eee7de3e1ce7a25754, lower: 0x7b014ff156ebc6824e93dc4251d798ab }, // 2058
    Multiplier { upper: 0x8e07b2e2c8e14725864b64e3ec81df76, lower: 0xc8cdd98ddf2305350ba97d01db12e089 }, // 2059
    Multiplier { upper: 0xe33f849e0e353ea27078a16cad9c98be, lower: 0x0e1628e2fe9e6ebb45dbfb362b516741 }, // 2060
    Multiplier { upper: 0xb5cc6a180b5dcbb526c6e78a247d46fe, lower: 0x71ab53e8cbb1f22f6b166291bc411f67 }, // 2061
    Multiplier { upper: 0x917054e00917d62a856bec6e83976bfe, lower: 0xc155dcba3c8e5b5922784edafd00e5ec }, // 2062
    Multiplier { upper: 0xe8b3bb000e8c89dda246471738f24664, lower: 0x68896129fa7d5ef503f3b15e619b097a }, // 2063
    Multiplier { upper: 0xba296266720a07e481d1d278fa5b6b83, lower: 0x86d44dbb2ecab25d9cc2f44b8148d461 }, // 2064
    Multiplier { upper: 0x94ede851f4d4d31d34a7db93fb7c5602, lower: 0xd24371628bd55b7e17025d09343a4381 }, // 2065
    Multiplier { upper: 0xee4973b65487b82ebaa62c1ff8c6f004, lower: 0x839f1bd0dfbbc5968b36fb41ed2a059b }, // 2066
    Multiplier { upper: 0xbea1295eaa062cf22eeb567ffa38c003, lower: 0x9c7f4973e62fd1453c2bfc34bdbb37af }, // 2067
    Multiplier { upper: 0x9880ede554d1bd8e8bef786661c70002, lower: 0xe399078feb5974376356635d6495c626 }, // 2068
    Multiplier { upper: 0xf4017ca2214f95b0dfe58d709c71999e, lower: 0x38f4d8e6455bed256bbd6bc8a0efa370 }, // 2069
    Multiplier { upper: 0xc33463b4e772de2719847126e38e147e, lower: 0x93f713eb6aaff0eabc97896d4d8c82c0 }, // 2070
    Multiplier { upper: 0x9c29e95d85f57e85ae038db8b60b4398, lower: 0x765f4322bbbff3eefd46078aa470689a }, // 2071
    Multiplier { upper: 0xf9dca895a3226409166c15f456786c27, lower: 0x23cb9e9df9331fe4c8700c11071a40f6 }, // 2072
    Multiplier { upper: 0xc7e3ba114f4eb66dab89ab29dec6bcec, lower: 0x1ca2e54b2dc27fea39f33cda6c1500c5 }, // 2073
    Multiplier { upper: 0x9fe961a772a55ebe22d488ee4bd230bc, lower: 0xe3b5843c249b99882e5c30aebcdd9a37 }, // 2074
    Multiplier { upper: 0xffdbcf72510897969e20db16dfb6b461, lower: 0x6c55a0603a928f404a2d1ab12e2f5d24 }, // 2075
    Multiplier { upper: 0xccafd92840d3ac787e80af457fc55d1a, lower: 0xbd114d19c8753f66a1bdaef424f2b0ea }, // 2076
    Multiplier { upper: 0xa3bfe0ed00a956c6cb9a25d133044a7b, lower: 0xca743dae39f765ebb497bf29b7288d88 }, // 2077
    Multiplier { upper: 0x82ffe7240087789f09481e40f59d0863, lower: 0x085cfe24fb2c51895d463287c5ba0ad3 }, // 2078
    Multiplier { upper: 0xd19971d3340bf431a873639b2294da38, lower: 0x0d6196a191e082756209ea72d5f677b8 }, // 2079
    Multiplier { upper: 0xa7adf4a8f66ff68e205c4faf4edd7b60, lower: 0x0ab478814180685de807eec244c52c94 }, // 2080
    Multiplier { upper: 0x8624c3ba5ebff871b37d0c8c3f1795e6, lower: 0x6ef6c6cdce00537e53398bce9d6a8a10 }, // 2081
    Multiplier { upper: 0xd6a1392a3133271c5261adad31bf563d, lower: 0x7e57a47c7ccd5263b85c12e42f10dce6 }, // 2082
    Multiplier { upper: 0xabb42dbb5a8f527d0eb48af0f49911ca, lower: 0xcb795063970aa84fc6b00f1cf273e3eb }, // 2083
    Multiplier { upper: 0x895cf162aed90eca722a08c0c3ada7d5, lower: 0x6f94404fac0886a6388cd8e3f5298323 }, // 2084
    Multiplier { upper: 0xdbc7e89de48e7e10b6a9a79ad2af72ef, lower: 0x18ed33b2acda7109f4148e3988426b6a }, // 2085
    Multiplier { upper: 0xafd3207e5071fe73c5548615755928bf, lower: 0x4724295bbd7b8da1901071c7a03522bb }, // 2086
    Multiplier { upper: 0x8ca8e6cb738e65296aaa04ddf77a86ff, lower: 0x6c1cede2fdfc714e0cd9f49fb35db563 }, // 2087
    Multiplier { upper: 0xe10e3e12527d6ea8aaa9a1632590d7ff, lower: 0x13617c9e632d82167af65432b895ef04 }, // 2088
    Multiplier { upper: 0xb40b64db75312553bbbae7828473dfff, lower: 0x42b463b1e8f134dec8c5102893ab259d }, // 2089
    Multiplier { upper: 0x90091d7c5dc0eaa962fbec6869f64ccc, lower: 0x355d1c8e53f42a4bd3d0d9ba0fbc1e17 }, // 2090
    Multiplier { upper: 0xe674fbfa2f9b110f04c6470d7656e146, lower: 0xbbc82db0865376dfb94e2929b2c6968b }, // 2091
    Multiplier { upper: 0xb85d9661bfaf40d8d09e9f3df8458105, lower: 0x63068af39ea92be62dd820ee289eded6 }, // 2092
    Multiplier { upper: 0x937e11e7cc8c33e0a6e54c31936acd9d, lower: 0xe8d208c2e554231e8b134d8b53b24bdf }, // 2093
    Multiplier { upper: 0xebfce972e0e053010b0879e8ebde15c9, lower: 0x74834137d5536b6411b87c121f83ac97 }, // 2094
    Multiplier { upper: 0xbcca545be719dc00d5a061872318116d, lower: 0xf6cf675fdddc55e9a7c6c9a8193623ac }, // 2095
    Multiplier { upper: 0x9708437cb8e17ccd77b38138e8e00df1, lower: 0x923f85e64b16ab2153056e20142b4fbd }, // 2096
    Multiplier { upper: 0xf1a6d26127cf2e158c52685b0e334982, lower: 0x8398d63d44f111ceeb3be36686abb2c8 }, // 2097
    Multiplier { upper: 0xc15241e7530c24de09db86af3e8f6e02, lower: 0x02e0ab643727417255c982b86bbc8f06 }, // 2098
    Multiplier { upper: 0x9aa834b90f3cea4b3b160558fed924ce, lower: 0x68b3bc502c1f678eab079bc6bc96d8d2 }, // 2099
    Multiplier { upper: 0xf773878e7ec7dd452b566ef4caf507b0, lower: 0xa785fa19e0323f4aab3f5fa460f15ae9 }, // 2100
    Multiplier { upper: 0xc5f6060b989fe43755debf2a3bf7395a, lower: 0x1f9e61ae4cf4ff6eef65e61d1a5aaf21 }, // 2101
    Multiplier { upper: 0x9e5e6b3c7a19835f77e565bb632c2de1, lower: 0xb2e51af1d72a65f2591e51b0e1e225b4 }, // 2102
    Multiplier { upper: 0xfd63dec729c26bcbf308a2c56b79e302, lower: 0xb7d4f7e95843d6508e96e91b03036f86 }, // 2103
    Multiplier { upper: 0xcab64bd287cebca328d3b56abc618268, lower: 0x9310c654469cab73a5458748cf35f2d2 }, // 2104
    Multiplier { upper: 0xa22b6fdb9fd896e8ed762abbc9e79b86, lower: 0xdc0d6b769ee3bc5c84379f6d72918f0e }, // 2105
    Multiplier { upper: 0x81bc597c7fe078ba5791bbc96e52e2d2, lower: 0x49a455f87f1c96b069c619245ba7a5a5 }, // 2106
    Multiplier { upper: 0xcf93c260cc9a5ac3bf4f92dbe3b7d150, lower: 0x75d3bcc0cb60f11a42d68ea092a5d5d5 }, // 2107
    Multiplier { upper: 0xa60fceb3d6e1e23632a60f164fc6410d, lower: 0x2b0fca33d5e727483578721a0eeb1177 }, // 2108
    Multiplier { upper: 0x84d9722978b4b4f82884d8dea638340a, lower: 0x88d96e8fde5285d35df9f4e1a588dac6 }, // 2109
    Multiplier { upper: 0xd48f1d0f278787f37407c1643d26b9aa, lower: 0x748f174c96ea6fb8965cbb02a274913c }, // 2110
    Multiplier { upper: 0xaa0c173f52d2d329299fcde9ca856155, lower: 0x2a0c12a3abeebfc6deb0959bb52a0dca }, // 2111
    Multiplier { upper: 0x8809ac32a8a8a8edbae63e54a2044ddd, lower: 0xbb3cdbb623256638b226de162a880b08 }, // 2112
    Multiplier { upper: 0xd9a91384410ddb15f7d6ca21033a162f, lower: 0x91faf9236b6f09f4503e3023774011a6 }, // 2113
    Multiplier { upper: 0xae20dc69cda4af44c6456e80cf61ab59, lower: 0x4195941c55f26e5d0cfe8ce92c334152 }, // 2114
    Multiplier { upper: 0x8b4d7d2171508c37050458670c4e22ad, lower: 0xce114349de5b8b7da3fed720f029010e }, // 2115
    Multiplier { upper: 0xdee261cf1bb4138b3b3a270b46e36aaf, lower: 0xb01b9edc96f8df2f6ccaf1ce4d0e6817 }, // 2116
    Multiplier { upper: 0xb24eb4a5afc342d5c8fb526f6be92226, lower: 0x267c7f16df2d7f5923d58e3ea40b8679 }, // 2117
    Multiplier { upper: 0x8ea55d5159690244a0c90ebf89874e84, lower: 0xeb96cc124c2465e0e977a4fee9a2d1fa }, // 2118
    Multiplier { upper: 0xe43bc88228a803a10141b13275a54a6e, lower: 0x45be135079d3d634a8bf6e64a904832a }, // 2119
    Multiplier { upper: 0xb6963a01ba2002e734348dc1f7b76ebe, lower: 0x9e31a90d2e4311c3ba32beb6ed9d35bb }, // 2120
    Multiplier { upper: 0x9211c80161b33585c35d3e34c62c5898, lower: 0x7e8e20d75835a7cfc828989257b0f7c9 }, // 2121
    Multiplier { upper: 0xe9b60ccf02b855a2d22ec9ee09e08dc0, lower: 0xca7d01588d22a6194040f41d591b260e }, // 2122
    Multiplier { upper: 0xbaf80a3f3560448241bf07f1a1807167, lower: 0x08640113a41bb814336729b11415b80b }, // 2123
    Multiplier { upper: 0x95933b65c44d039b67cc065ae799f452, lower: 0x6d1ccda950162cdcf5ec215a7677c670 }, // 2124
    Multiplier { upper: 0xef51f8a2d3ae6c2bd9467091728fed50, lower: 0xae947c4219bd1494bcad022a57260a4c }, // 2125
    Multiplier { upper: 0xbf74c6e8a95856897a9ec0745ba65773, lower: 0xbedd3034e1641076fd5734eeac1e6ea3 }, // 2126
    Multiplier { upper: 0x992a38ba2113786dfbb233904951df8f, lower: 0xcbe42690b4500d2bfddf5d8bbce5254f }, // 2127
    Multiplier { upper: 0xf5105ac3681f27165f8385b3a882ff4c, lower: 0x796d0a81208015132fcbc8df94a1d54c }, // 2128
    Multiplier { upper: 0xc40d15692018ec11e602d15c86cf32a3, lower: 0x94573b9a806677428ca3071943b4aaa3 }, // 2129
    Multiplier { upper: 0x9cd7445419ad89a7eb35744a05728ee9, lower: 0x4378fc7b99eb929ba3b59f47695d554f }, // 2130
    Multiplier { upper: 0xfaf206ecf5e275d9785586dcd58417db, lower: 0x9f27fa5f5cac1dc5d2bc320bdbc8887e }, // 2131
    Multiplier { upper: 0xc8c19f23f7e85e4793779f171136797c, lower: 0x7f532eb2b089b16b0efcf4d6496d39ff }, // 2132
    Multiplier { upper: 0xa09ae5b65fed183942c618df40f86130, lower: 0x65dc255bc06e2788d8ca5d783abdc7ff }, // 2133
    Multiplier { upper: 0x807beaf84cbdacfa9bd1ad7f672d1a8d, lower: 0x1e49b77c99f1b93a47084ac695649fff }, // 2134
    Multiplier { upper: 0xcd93118d4795e190f94f7bff0b7b5dae, lower: 0x96dc58c75cb5f52a0b4077a4223a9998 }, // 2135
    Multiplier { upper: 0xa475a7a43944b473faa5fccc092f7e25, lower: 0x457d13d2b09190ee6f66c61ce82ee147 }, // 2136
    Multiplier { upper: 0x839152e9c76a29f6621e63d66dbf981d, lower: 0xd130dca88d4140bebf856b4a5358b439 }, // 2137
    Multiplier { upper: 0xd2821e42d8a9dcbd69ca395715ff59c9, lower: 0x4eb49440e2020131326f1210855ab9f4 }, // 2138
    Multiplier { upper: 0xa86818357a217d6454a1c778de65e16d, lower: 0xd890769a4e6800f42858db406aaefb2a }, // 2139
    Multiplier { upper: 0x86b9acf794e7978376e7d2c718518124, lower: 0xad405ee1d85333f686ad7c33888bfc22 }, // 2140
    Multiplier { upper: 0xd78f7b25bb0c259f24a61e0b5a1c01d4, lower: 0x4866fe3626eb86573de2605274132d02 }, // 2141
    Multiplier { upper: 0xac72c8eafc09b7b283b8180914e334a9, lower: 0xd385982b5256051297e84d0ec3428a68 }, // 2142
    Multiplier { upper: 0x89f56d88c9a15fc202f9acd410b5c3bb, lower: 0x0f9e1355db78040edfed0a7235ced520 }, // 2143
    Multiplier { upper: 0xdcbbe27475ceff9cd18f7aece789392b, lower: 0x4c301eefc58cd34affe1aa505617bb67 }, // 2144
    Multiplier { upper: 0xb0964ec3917266170e0c62571fa0fa89, lower: 0x09c018bfd13d75d59981550d11ac95ec }, // 2145
    Multiplier { upper: 0x8d450bcfa78eb81271a381df4c80c86d, lower: 0xa1667a330dcac4aae134440a748a118a }, // 2146
    Multiplier { upper: 0xe20812e5d8e459b71c38cfcbad9ada49, lower: 0x023d9051afaad4449b86d343eda9b5a9 }, // 2147
    Multiplier { upper: 0xb4d342517a5047c5b02d730957af1507, lower: 0x34fe0d0e2622436a160575cff1549154 }, // 2148
    Multiplier { upper: 0x90a901dac840396af3578f3aac8c10d2, lower: 0x90cb3da4eb4e9c54de6ac4a65aaa0ddd }, // 2149
    Multiplier { upper: 0xe774cfc47399f577ebbf4b9114134e1d, lower: 0xb47862a1787dc6ee30aad43d5ddce2fa }, // 2150
    Multiplier { upper: 0xb92a3fd05c7b2ac65632a2da7675d817, lower: 0xc393821ac6cb058b5a2243644b171bfc }, // 2151
    Multiplier { upper: 0x9421cca6b062889eab5bb57b91f7e013, lower: 0x02dc68156bd59e0914e835e9d5ac1663 }, // 2152
    Multiplier { upper: 0xed02e10ab3d0da977892bbf8e98c99b8, lower: 0x0493d9bbdfbc300e87d9efdc89135704 }, // 2153
    Multiplier { upper: 0xbd9be73bc30d7bac6075632d87a3ae2c, lower: 0xd07647c97fc9c00b9fe18cb06da9126a }, // 2154
    Multiplier { upper: 0x97afec2fcf3dfc89e6c44f579fb624f0, lower: 0xa6c5063acca1666fb31ad6f38aeda855 }, // 2155
    Multiplier { upper: 0xf2b3137fb1fcc7430ad3b225cc56a181, lower: 0x0ad4d6c47a9bd7191e9157ec117c4088 }, // 2156
    Multiplier { upper: 0xc228dc6627fd6c35a242f4eb09dee79a, lower: 0x6f10abd0621645adb20ddff00dfd006d }, // 2157
    Multiplier { upper: 0x9b53e384eccabcf7b5025d88d4b252e1, lower: 0xf273bca6b4de9e248e717ff33e640057 }, // 2158
    Multiplier { upper: 0xf88638d4ae112e59219d62748783b7cf, lower: 0xea52c7712164303a7d826651fd6ccd58 }, // 2159
    Multiplier { upper: 0xc6d1c7108b40f1e0e7b11b906c695fd9, lower: 0x884239274de9c02ecaceb841978a3de0 }, // 2160
    Multiplier { upper: 0x9f0e38da0900c180b95a7c7389ede647, lower: 0xa034fa85d7ee3358a23ef9ce12d4fe4d }, // 2161
    Multiplier { upper: 0xfe7d27c3419acf345bc3fa5276497072, lower: 0x99ee5da2f316b88dd064c2e35154ca14 }, // 2162
    Multiplier { upper: 0xcb9753029ae23f5d163661db91d459f5, lower: 0x47f1e4825c122d3e40509be90ddd6e77 }, // 2163
    Multiplier { upper: 0xa2df759baf1b65e411c51b160e437b2a, lower: 0x9ff4b6ceb00e8a983373afeda4b1252c }, // 2164
    Multiplier { upper: 0x824c5e1625af84b6749daf44d835fc22, lower: 0x1990923ef33ed5468f8fbff1508db756 }, // 2165
    Multiplier { upper: 0xd07a30236f7f3abd8762b207c0566036, lower: 0x8f4db6cb1ecaeed74c19331bb415f223 }, // 2166
    Multiplier { upper: 0xa6c82682bf98fbcad2b55b3966ab802b, lower: 0xa5d7c56f4bd58bdf701428e2f677f4e9 }, // 2167
    Multiplier { upper: 0x856ceb9bcc7a6308a89115c785560022, lower: 0xeb1304590977a3192676871bf85ff721 }, // 2168
    Multiplier { upper: 0xd57b1292e0c3d1a7741b560c088999d1, lower: 0x781e6d5b425904f50a573e9326fff1ce }, // 2169
    Multiplier { upper: 0xaac8dba8b3cfdaec5ce2ab3cd3a147da, lower: 0xc67ebde29b7a6a5da1df654285998e3f }, // 2170
    Multiplier { upper: 0x88a0afba29731589e3e888fd761a9fe2, lower: 0x386564b5492ebb7e1b191dced147a4ff }, // 2171
    Multiplier { upper: 0xda9ab2c37584ef430640db2f235dcc9d, lower: 0x2708a1220eb12bfcf8282fb14ed907fe }, // 2172
    Multiplier { upper: 0xaee2289c5e03f29c0500af58e917d6e4, lower: 0x1f3a1a81a55a89972cecf2f43f140665 }, // 2173
    Multiplier { upper: 0x8be8207d1803287cd0cd5913edacabe9, lower: 0xb294e20151153adf5723f59032766b84 }, // 2174
    Multiplier { upper: 0xdfd9cd94f33840c7b47bc1b97c477975, lower: 0xea87d0021b552afef1d3228050bd78d3 }, // 2175
    Multiplier { upper: 0xb314a47728f9cd6c9063016130392df7, lower: 0xeed30cce7c4422658e428200409793dc }, // 2176
    Multiplier { upper: 0x8f43b6c5ba617123a6b59ab4269424c6, lower: 0x58a8d70b969ce8513e9b9b3366dfa97d }, // 2177
    Multiplier { upper: 0xe539246f909be8390abc2ab9d7536e0a, lower: 0x27748b45bdc7da1b975f5eb8a4990f2e }, // 2178
    Multiplier { upper: 0xb760e9f2da165360d5635561790f8b3b, lower: 0x52c3a29e316cae7c79191893b6e0d8f2 }, // 2179
    Multiplier { upper: 0x92b3ee5be1ab75e7111c444dfa72d5c9, lower: 0x0f02e87e8df08b96c74746dc924d7a5b }, // 2180
    Multiplier { upper: 0xeab97d5fcf78bca4e82d3a165d848941, lower: 0xb19e40ca7cb4128ad8720afa83af2a2b }, // 2181
    Multiplier { upper: 0xbbc7977fd92d63b720242e784ad06dce, lower: 0x27b1cd6eca29a86f138e6f2ecfbf54ef }, // 2182
    Multiplier { upper: 0x963945ffe0f11c92801cf1f9d5738b0b, lower: 0x52f4a458a1baed25a93ebf58a632aa59 }, // 2183
    Multiplier { upper: 0xf05ba3330181c750ccfb1cc2ef1f44de, lower: 0xeb2106f435f7e1d5db97988dd6b776f5 }, // 2184
    Multiplier { upper: 0xc0494f5c01349f73d72f4a358c1903e5, lower: 0x88e738c35e5fe7de494613a4abc5f8c4 }, // 2185
    Multiplier { upper: 0x99d43f7ccdc3b2c3128c3b5e09ad9cb7, lower: 0xa0b8fa35e519864b6dd1a950896b2d6a }, // 2186
    Multiplier { upper: 0xf62065947c6c51381dad2bc9a915c78c, lower: 0x345b29efd4f5a3abe2e90ee742451576 }, // 2187
    Multiplier { upper: 0xc4e6b7a9fd23742ce48a896e20de393c, lower: 0xf6af54bfdd914fbcb5873f1f6837445e }, // 2188
    Multiplier { upper: 0x9d855fbb30e929bd83a2078b4d7e9430, lower: 0xc55910997e0dd963c46c327f86929d18 }, // 2189
    Multiplier { upper: 0xfc08992b81750f959f69a5abaf30ed1a, lower: 0xd55b4dc263495bd2d3e050cc0a842e8d }, // 2190
    Multiplier { upper: 0xc9a07a89345da6114c54848958f3f0e2, lower: 0x44490b01e9077ca8a98040a33b9cf20a }, // 2191
    Multiplier { upper: 0xa14d2ed429e484daa376d06de0c3271b, lower: 0x69d408ce5405fd53bacd008296172808 }, // 2192
    Multiplier { upper: 0x810a8bdcee506a4882c5738b1a35b8e2, lower: 0xbb10070b766b310fc8a400687812866d }, // 2193
    Multiplier { upper: 0xce77462e4a1a43a737a2527829ef8e37, lower: 0x91b33e78bd784e7fa76ccd73f350d715 }, // 2194
    Multiplier { upper: 0xa52c3825081502ec2c81db9354bfa4f9, lower: 0x415c31fa312d0b9952bd71298f73df44 }, // 2195
    Multiplier { upper: 0x8423601da010cf2356ce4942aa32ea61, lower: 0x01168e61c0f0d6144231275472c31903 }, // 2196
    Multiplier { upper: 0xd36bccfc334e18388ae3a86aa9eb109b, lower: 0x34f0e3cf9b1af02069e83eed846b5b38 }, // 2197
    Multiplier { upper: 0xa9230a635c3e79c6d582ed222188da15, lower: 0xc3f3e972e27bf34d218698be038915c7 }, // 2198
    Multiplier { upper: 0x874f3b82b031fb05779bf0e81ad3e1ab, lower: 0x0329878f1b965c3db46bad64cfa0de39 }, // 2199
    Multiplier { upper: 0xd87ec59de6b65e6f25c64e402aec9c44, lower: 0xd1dc0c182c23c6c920ac48a14c3496c1 }, // 2200
    Multiplier { upper: 0xad3237b1855eb1f2849ea5002256e36a, lower: 0x417cd679bce96bd41a236d4dd690789a }, // 2201
    Multiplier { upper: 0x8a8e92f46ab227f536e550cce84582bb, lower: 0x679711fafd8789767b4f8aa4aba6c6e2 }, // 2202
    Multiplier { upper: 0xddb0eb20aab6a65524a21ae173a26ac5, lower: 0x728b4ff7fc0c0f23f87f443aac3e0b03 }, // 2203
    Multiplier { upper: 0xb15a55b3bbc551ddb6e81581294ebbd1, lower: 0x286f732cc9a33f4ff9ff69c889cb3c02 }, // 2204
    Multiplier { upper: 0x8de1de296304417e2becde00edd89640, lower: 0xed25f5bd6e1c32a66199216d3b08fccf }, // 2205
    Multiplier { upper: 0xe302fd0f04d39bfd13149667e2f4239b, lower: 0x1509892f1693843d68f502485e74c7b1 }, // 2206
    Multiplier { upper: 0xb59bfda59d7616640f43ab864f29b615, lower: 0xaa6e0758dedc69caba5d9b6d185d6c8e }, // 2207
    Multiplier { upper: 0x914997b7b12b451cd902ef9ea5baf811, lower: 0x5524d2ad7f16bb089517af8a79e456d8 }, // 2208
    Multiplier { upper: 0xe875bf8c4eaba1c7c19e4c31092b2682, lower: 0x21d48448cb5791a754f2b277296d57bf }, // 2209
    Multiplier { upper: 0xb9f7cc703eefb49fce183cf40755b868, lower: 0x1b1069d3d5dfa7b910c2285f54577966 }, // 2210
    Multiplier { upper: 0x94c63d2698bfc3b30b4697299f77c6b9, lower: 0xaf4054a977e61fc7409b537f76ac611f }, // 2211
    Multiplier { upper: 0xee09fb70f46605eb453dbea8ff260ac2, lower: 0xb20087758ca3660b9a921f32577a34fd }, // 2212
    Multiplier { upper: 0xbe6e62c0c384d18904316553ff51a235, lower: 0x5b339f913d4f84d61541b28eac61c3fe }, // 2213
    Multiplier { upper: 0x98584f009c6a413a69c11ddccc414e91, lower: 0x15c2e60dcaa603de7767c20bbd1b0332 }, // 2214
    Multiplier { upper: 0xf3c07e6760aa01f70f9b62fae0687db4, lower: 0xef9e3ce2ddd66c972572d012c82b384f }, // 2215
    Multiplier { upper: 0xc300651f8088019272e2b595805397c3, lower: 0xf2e4fd824b11f078eac2400f0688f9d9 }, // 2216
    Multiplier { upper: 0x9c0050e6006cce0ec24ef7aacd0fac9c, lower: 0xc250cacea274c060bbce99a59ed3fb14 }, // 2217
    Multiplier { upper: 0xf99a1b099a47b0179d4b25de14e5e0fa, lower: 0xd081447dd0bacd6792e42908fe1ff820 }, // 2218
    Multiplier { upper: 0xc7ae7c07ae9fc012e43c1e4b43eb1a62, lower: 0x406769fe4095711fa8b6873a64e6601a }, // 2219
    Multiplier { upper: 0x9fbec99fbee633425030183c3655aeb5, lower: 0x0052bb31cd445a7fba2b9f61ea51e67b }, // 2220
    Multiplier { upper: 0xff97a8ff97d6b86a19e68d2d23bc4abb, lower: 0x33b791e9486d5d9929df656976e970c5 }, // 2221
    Multiplier { upper: 0xcc7953ffacabc6bb47eba4241c96a22f, lower: 0x5c92db2106bde47a87e5eabac5878d6a }, // 2222
    Multiplier { upper: 0xa3944332f0896bc906561ce9b07881bf, lower: 0x7d4248e73897e9fb9feb222f046c7122 }, // 2223
    Multiplier { upper: 0x82dd028f26d4563a6b78172159fa0165, lower: 0xfdcea0b8fa1321961988e8259d238db5 }, // 2224
    Multiplier { upper: 0xd1619db1d7ba2390abf358355cc3356f, lower: 0xfc7dcdf4c351cf568f41736f61d27c54 }, // 2225
    Multiplier { upper: 0xa7814af4ac94e940898f79c44a35c459, lower: 0x96cb0b2a35db0c453f678f8c4e41fd10 }, // 2226
    Multiplier { upper: 0x860108c3bd43edcd3ad92e36a1c49d14, lower: 0x78a26f54f7e2703765ec72d6a5019740 }, // 2227
    Multiplier { upper: 0xd6680e05fb9fe2e1f7c1e38a9c6dc820, lower: 0xc103e554bfd0b38bd6471e243b35becd }, // 2228
    Multiplier { upper: 0xab86719e62e64f1b2c9b1c6ee38b0680, lower: 0x9a698443cca6f6097838e4e9c8f7cbd7 }, // 2229
    Multiplier { upper: 0x89385ae51beb727c23af49f24fa26b9a, lower: 0x1521369ca3b8c4d4602d83ee3a5fd646 }, // 2230
    Multiplier { upper: 0xdb8d5e3b5fdf1d936c4ba983b29d78f6, lower: 0x8835242dd2c13aed66af397d2a32f06f }, // 2231
    Multiplier { upper: 0xafa44b62b318e475f03c879c8ee460c5, lower: 0x39c41cf1756762578558faca8828c059 }, // 2232
    Multiplier { upper: 0x8c836f8228e0b6c4c0306c7d3f1d1a37, lower: 0x6169b0c12ab91b79377a623ba02099e1 }, // 2233
    Multiplier { upper: 0xe0d24c03749abe0799e713fb982e9058, lower: 0x9bdc4e01ddf4f8c1f25d69f900342968 }, // 2234
    Multiplier { upper: 0xb3db7002c3aefe6c7b1f432facf20d13, lower: 0xafe3719b17f72d67f51787fa66902120 }, // 2235
    Multiplier { upper: 0x8fe2c00236259856c8e5cf5957280a76, lower: 0x264f8e15acc5bdecc412d32eb8734db3 }, // 2236
    Multiplier { upper: 0xe637999d236f5a2474a2e55bbea67723, lower: 0x707f49bc47a2c97ad35151e45a5215eb }, // 2237
    Multiplier { upper: 0xb82c7ae41c5914e9f6e8b77c98852c1c, lower: 0x59ff6e30394f079575daa7e9e1db44bc }, // 2238
    Multiplier { upper: 0x9356c8b67d1410bb2bed5f96e06a89b0, lower: 0x47ff8b59c7726c77917bb987e7e29d64 }, // 2239
    Multiplier { upper: 0xebbe0df0c8201ac5131565be33dda91a, lower: 0x0ccc12293f1d7a58e8c5f5a63fd0fbd2 }, // 2240
    Multiplier { upper: 0xbc980b270680156a75aab7cb5cb15414, lower: 0xd709a820ff4ac847209e5e1e9973fca8 }, // 2241
    Multiplier { upper: 0x96e008ec053344552aeef96f7d5aa9aa, lower: 0x45a1534d9908a038e6e518187ac33087 }, // 2242
    Multiplier { upper: 0xf16674acd51ed3bb77e4c24bfbc442aa, lower: 0x09021ee28e74338e3e3b59c0c46b80d7 }, // 2243
    Multiplier { upper: 0xc11ec3bd774bdc95f983cea32fd03554, lower: 0xd401b24ed85cf60b64fc47cd69ef9a46 }, // 2244
    Multiplier { upper: 0x9a7f02fdf9097d44c79ca54f59735ddd, lower: 0x7667c1d8ad172b3c50c9d30abb261505 }, // 2245
    Multiplier { upper: 0xf7319e63280f2ed472943bb228b8962f, lower: 0x23d936277b58452d4e0fb8112b7021a1 }, // 2246
    Multiplier { upper: 0xc5c14b8286728bdd287696282093ab58, lower: 0xe97a91b92f79d0f10b3fc67422c01ae7 }, // 2247
    Multiplier { upper: 0x9e343c686b8ed64a86c544ece6dc8913, lower: 0xedfba7c7592e40c0d5cc9ec34f001586 }, // 2248
    Multiplier { upper: 0xfd2060a7127e23aa713ba17b0afa74ec, lower: 0xaff90c72284a01348947646bb199bc09 }, // 2249
    Multiplier { upper: 0xca804d527531b621f42fb4626f2ec3f0, lower: 0x8cc73d28203b342a076c505627ae3008 }, // 2250
    Multiplier { upper: 0xa2003ddb90f491b4c3595d1b8c25698d, lower: 0x3d6c30ece695c354d2bd0d11b958266d }, // 2251
    Multiplier { upper: 0x8199cb160d9074909c477dafa351213d, lower: 0xcabcf3f0b877cf770efda40e2de01ebd }, // 2252
    Multiplier { upper: 0xcf5c782348e720e7607262b29ee8352f, lower: 0xaac7ecb45a594bf1b195d349e300312f }, // 2253
    Multiplier { upper: 0xa5e3934f6d85b3ec4d284ef54becf759, lower: 0x556cbd5d15143cc15ade42a182668dbf }, // 2254
    Multiplier { upper: 0x84b60f72be048ff03db9d8c43cbd92ad, lower: 0xddf0977daa769701157e9bb468520aff }, // 2255
    Multiplier { upper: 0xd4567f1dfcd4198062c2f46d2dfc1de2, lower: 0xfcb42595dd8a8b34ef30f920a6e9ab32 }, // 2256
    Multiplier { upper: 0xa9decc17fd767acd1bcf29f0f1967e4f, lower: 0x30901e117e086f5d8c272db3b8baef5b }, // 2257
    Multiplier { upper: 0x87e57013312b9570e30c218d8e11fea5, lower: 0xc0734b4131a05917a3528af62d625916 }, // 2258
    Multiplier { upper: 0xd96f19b84eac224e381368e27ce9976f, lower: 0x9a521201e9008e8c38841189e236f4ef }, // 2259
    Multiplier { upper: 0xadf27af9d889b50b600f871b972145f2, lower: 0xe1db419b20cd3ed6939cdad4b4f8c3f3 }, // 2260
    Multiplier { upper: 0x8b2862617a07c40919a605afac1a9e5b, lower: 0xe7e29ae280a4324542e3e243c3fa365c }, // 2261
    Multiplier { upper: 0xdea703cf29a60674f5d66f7f79c43093, lower: 0x0c9dc49d9aa0506ed16c9d39399056f9 }, // 2262
    Multiplier { upper: 0xb21f363f5484d1f72b11f2cc6169c075, lower: 0xa3b16a17aee6a6bf0df07dc761404594 }, // 2263
    Multiplier { upper: 0x8e7f5e99106a419288db28a3812166c4, lower: 0x82f454dfbf1eebcc0b26cb05e7669e10 }, // 2264
    Multiplier { upper: 0xe3fefdc1b3dd35b7415ea76c01cf0ad4, lower: 0x04ba2165fe97dfacdea47809723dc9b3 }, // 2265
    Multiplier { upper: 0xb66597ce297dc4929ab21f899b0c08a9, lower: 0x9d61b45198797fbd7ee9f9a128316e29 }, // 2266
    Multiplier { upper: 0x91eadfd821316a0ee228193ae27006ee, lower: 0x17815d0e139466313254c7b420278b54 }, // 2267
    Multiplier { upper: 0xe977cc8d01e8a9b169d9c1f7d0b33e49, lower: 0xbf3561b01f53d6b51d5472b9cd0c1220 }, // 2268
    Multiplier { upper: 0xbac63d3d9b2087c1217b01930d5c31d4, lower: 0x98f78159b2a97890e4438efb0a700e80 }, // 2269
    Multiplier { upper: 0x956b643148e6d300e7959adc0ab027dd, lower: 0x472c677af5546073e9cfa595a1f33ecd }, // 2270
    Multiplier { upper: 0xef1239e874a484ce3f55c493444d0c95, lower: 0x3ead725e5553cd8642e5d5bc3651fe15 }, // 2271
    Multiplier { upper: 0xbf41c7ed2a1d370b65de36dc36a40a10, lower: 0xfef1284b77763e05025177c9c50e64dd }, // 2272
    Multiplier { upper: 0x99016cbdbb4a926f84b1c57cf8833b40, lower: 0xcbf4203c5f91cb37350df96e373eb718 }, // 2273
    Multiplier { upper: 0xf4cf1462c5441d7f3ab608c7f4052b9a, lower: 0xdfed006098e9452521aff57d253124f2 }, // 2274
    Multiplier { upper: 0xc3d8dd1bd1034acc2ef807065cd0efaf, lower: 0x198a66b3ad876a841af32aca842750c2 }, // 2275
    Multiplier { upper: 0x9cad7dafda6908a358c66c05170d8c8c, lower: 0x146eb88fbe05eed0158f556ed01f73ce }, // 2276
    Multiplier { upper: 0xfaaf2f7fc3db41055ad7133b5815adac, lower: 0xed7df41930097e19bc1888b14cff1fb0 }, // 2277
    Multiplier { upper: 0xc88c25ffcfe29a6aaf1275c913448af0, lower: 0xbdfe5ce0f33acb47c9ad3a2770cc195a }, // 2278
    Multiplier { upper: 0xa0701e663fe87b888c0ec4a0dc36d58d, lower: 0x64cb7d80c2956f6ca15761b92709ade2 }, // 2279
    Multiplier { upper: 0x8059b1eb66539606d67236e716924471, lower: 0x1d6f979a35445923b445e7c7526e24b5 }, // 2280
    Multiplier { upper: 0xcd5c4fdf0a1f5671571d24a4f0ea071b, lower: 0x624c25c3886d5b6c53a30c721d7d0787 }, // 2281
    Multiplier { upper: 0xa449d97f3b4c452778e41d50c0bb38e2, lower: 0xb509b7cfa0577c56a94f3d2817973939 }, // 2282
    Multiplier { upper: 0x836e4798fc3d041f93e9b10d66fc2d82, lower: 0x2a6e2ca619df96abbaa5ca867945c761 }, // 2283
    Multiplier { upper: 0xd24a0c27f9fb39cc1fdc4e7bd7f9e269, lower: 0xdd7d143cf6328aac5dd610d7286fa568 }, // 2284
    Multiplier { upper: 0xa83b3cecc7fc2e3ce649d863132e4ebb, lower: 0x17974363f8286ef04b11a71286bfb786 }, // 2285
    Multiplier { upper: 0x8695ca5706635830b83b138275bea562, lower: 0x7945cf832ced258d08daec0ed232f938 }, // 2286
    Multiplier { upper: 0xd756108b3d6bc04df391b8d0bc643bd0, lower: 0xc2094c0514aea27b415e467e1d1e5b8d }, // 2287
    Multiplier { upper: 0xac44da08fdefcd0b294160a6fd1cfca7, lower: 0x01a1099daa254ec901183864e418493e }, // 2288
    Multiplier { upper: 0x89d0ae6d97f30a6f54344d5264173085, lower: 0x9ae73ae4881dd8a0cdacf9ea50136dcb }, // 2289
    Multiplier { upper: 0xdc811715bfeb43e55386e21d6cf1e73c, lower: 0x2b0b916da6962767af7b2976e6857c78 }, // 2290
    Multiplier { upper: 0xb06745aaffef698442d24e7df0c185c9, lower: 0xbc0941248544ec52f2c8edf8b86ac9f9 }, // 2291
    Multiplier { upper: 0x8d1f6aef3325ee0368a83ecb270137d4, lower: 0x966dcdb6d103f0425bd3f193c6bbd4c8 }, // 2292
    Multiplier { upper: 0xe1cbde4b85097cd2410d31450b352620, lower: 0xf0afaf8ae8064d36f9531c1fa45fbad9 }, // 2293
    Multiplier { upper: 0xb4a3183c6a6dfd7500d75a9da290eb4d, lower: 0x8d59593becd1d75f2ddc167fb6b2fbe1 }, // 2294
    Multiplier { upper: 0x908279c9eebe645d9a45e217b540bc3e, lower: 0x0aade0fcbd74ac4c24b011ffc55bfcb4 }, // 2295
    Multiplier { upper: 0xe7372943179706fc2a0969bf88679396, lower: 0x777c9b2dfbede079d44ce9993bc6611f }, // 2296
    Multiplier { upper: 0xb8f8edcf46126bfcee6dee32d3860fab, lower: 0x92ca15be6324b394a9d7214763051a80 }, // 2297
    Multiplier { upper: 0x93fa57d904db89972524be8f0f9e72ef, lower: 0xa8a1aafeb5b6f61087df4dd2b59daecd }, // 2298
    Multiplier { upper: 0xecc3bfc1a15f428b6ea130e4e5ca517f, lower: 0x7435de6455f189b40c987c8455c917ae }, // 2299
    Multiplier { upper: 0xbd69663481190209254dc0b71e3b7465, lower: 0xf6917eb6ab27a15cd6e0639d116dac8b }, // 2300
    Multiplier { upper: 0x978784f6cdad9b3a843e33c5b1c929eb, lower: 0x2ba7989222861ab0abe6b61741248a09 }, // 2301
    Multiplier { upper: 0xf2726e57af7c2b90d396b93c4fa84311, lower: 0xdf728db69da35de779712358683a7674 }, // 2302
    Multiplier { upper: 0xc1f52512f2c9bc73dc7894303fb9cf41, lower: 0x7f8ed7c54ae917ec61274f79ecfb91f7 }, // 2303
    Multiplier { upper: 0x9b2a840f28a1638fe393a9c032fb0c34, lower: 0x660bdfd108ba7989e752a5fb23fc74c5 }, // 2304
    Multiplier { upper: 0xf844067ea7689f4c9f52a93384c4e053, lower: 0xd679661b412a5c0fd8843cc50660bad5 }, // 2305
    Multiplier { upper: 0xc69cd1feec53b2a3b2a8875c6a3719dc, lower: 0xab9451af67551673139cfd6a6b809577 }, // 2306
    Multiplier { upper: 0x9ee3db3256a95bb62886d2b054f8e17d, lower: 0x561041591f774528dc7d978856007793 }, // 2307
    Multiplier { upper: 0xfe395eb6f10ef923740aeab3bb27cf2e, lower: 0xf01a022832586ea7c72f58da2333f284 }, // 2308
    Multiplier { upper: 0xcb6118925a7260e929a2555c95b9728b, lower: 0xf34801b9c1e0588638f2ad7b4f5cc204 }, // 2309
    Multiplier { upper: 0xa2b413a8485b80ba87b51116de2df53c, lower: 0xc2a0016167e6ad382d8ef12f72b09b36 }, // 2310
    Multiplier { upper: 0x8229a9536d160095395da7457e8b2a97, lower: 0x02199ab4531ef0f9be0bf425f55a15c5 }, // 2311
    Multiplier { upper: 0xd042a8857b5667552895d86f30deaa8b, lower: 0x368f5ded51cb1b293013203cbbc35608 }, // 2312
    Multiplier { upper: 0xa69bba0462ab85ddba1179f28d7eeed5, lower: 0xc53f7e5774a27c20f34280309635de6d }, // 2313
    Multiplier { upper: 0x8549619d1bbc6b17c80dfb28713258ab, lower: 0x0432cb792a1b9680c29b99c0782b1857 }, // 2314
    Multiplier { upper: 0xd54235c82c60ab5940165ea71b83c111, lower: 0xa051458ea9c5bd9ad0f8f600c044f3be }, // 2315
    Multiplier { upper: 0xaa9b5e39bd1a22adccdeb21f4936340e, lower: 0x19da9e0bbb0497af0d93f80099d0c2ff }, // 2316
    Multiplier { upper: 0x887c4b616414e88b0a4bc1b2a0f829a4, lower: 0xe17bb1a2fc03ac8c0adcc666e173cf32 }, // 2317
    Multiplier { upper: 0xda60789bd354a744dd4602b767f375d4, lower: 0x9bf91c37f99f7a79aafad70b0252e51d }, // 2318
    Multiplier { upper: 0xaeb393afdc43b903e438022c53292b10, lower: 0x7cc749c6614c61faef2f126f350f1db1 }, // 2319
    Multiplier { upper: 0x8bc2dc8cb0362d9cb69334f0428755a6, lower: 0xca3907d1e7704e6258f27525c40c17c1 }, // 2320
    Multiplier { upper: 0xdf9e2dade6bd15c78a8521806a7222a4, lower: 0x76c1a61ca5807d6a27ea550939acf2ce }, // 2321
    Multiplier { upper: 0xb2e4f157ebca77d2d5374e0055281bb6, lower: 0xc567b816eacd3121b9884407615728a5 }, // 2322
    Multiplier { upper: 0x8f1d8ddfefd52ca8aa92a4cd10ece2f8, lower: 0x9dec934588a4274e2e069cd2b445ba1d }, // 2323
    Multiplier { upper: 0xe4fc16331955144110eaa1481b149e5a, lower: 0x96475208daa03ee37cd76151206f902f }, // 2324
    Multiplier { upper: 0xb73011c27aaa769a73eee76ce276e515, lower: 0x4505db3a4880324f9712b440e6bfa68c }, // 2325
    Multiplier { upper: 0x928cdb01fbbb9215298bec571b9250dd, lower: 0xd0d17c2ea0668ea612755d00b899520a }, // 2326
    Multiplier { upper: 0xea7af8032c5f5021dc1313be9283b496, lower: 0x1ae8c6b100a417701d8894cdf4288342 }, // 2327
    Multiplier { upper: 0xbb959335bd190ce7e34276320ecfc3ab, lower: 0x48ba388d9a1cdf8ce46d43d7f686cf68 }, // 2328
    Multiplier { upper: 0x9611429164140a531c352b5b3f0c9c89, lower: 0x06fb60714817193d838a9cacc538a5ed }, // 2329
    Multiplier { upper: 0xf01b9db56cecdd51c6bb7891fe7a940e, lower: 0x719233e8735828626c10faae085aa315 }, // 2330
    Multiplier { upper: 0xc01617c45723e4416bc92d419862100b, lower: 0x8e0e8fed29135381f00d955806aee8de }, // 2331
    Multiplier { upper: 0x99ab4636ac1cb69abca0f10146b4d9a2, lower: 0xd80ba657540f76018cd7aaacd2258718 }, // 2332
    Multiplier { upper: 0xf5ded6bde02df0f79434b4ced787c29e, lower: 0x26790a25534bf0027af2aaae1d08d826 }, // 2333
    Multiplier { upper: 0xc4b24564b357f3f9435d5d724606354b, lower: 0x51fa6e8442a32668625bbbbe7da0aceb }, // 2334
    Multiplier { upper: 0x9d5b6ab6f5dff66102b1178e9e6b5dd5, lower: 0xdb2ebed0354f51ed1b7c9631fe1a23ef }, // 2335
    Multiplier { upper: 0xfbc5778b22fff09b3781bf4a97122fbc, lower: 0x91e46480554bb6482bfa89e99690397f }, // 2336
    Multiplier { upper: 0xc96ac608e8ccc07c2c67cc3bac0e8c96, lower: 0xdb1d1d33776fc50689953b2145402dff }, // 2337
    Multiplier { upper: 0xa122380720a3cd3023863cfc89a53d45, lower: 0x7c174a8f92bfd0d207aa95b437668b32 }, // 2338
    Multiplier { upper: 0x80e82cd280830a8ce93830ca07b76437, lower: 0x96790872dbcca70e6c8877c35f853c28 }, // 2339
    Multiplier { upper: 0xce4047b73404ddae41f381433f8bd38c, lower: 0x23f4da515fadd817140d8c6bcc086040 }, // 2340
    Multiplier { upper: 0xa500395f5cd0b15834c2cdcf66097609, lower: 0xb65d7b744c8b1345a9a470563cd38034 }, // 2341
    Multiplier { upper: 0x84002de5e3da2779c3cf0b0c51a12b3a, lower: 0xf84ac929d6d5a90487b6c044fd760029 }, // 2342
    Multiplier { upper: 0xd3337ca30629d8c2d2e4de7a1c3511f7, lower: 0xf3aadb7624890e6da5f133a1958999dc }, // 2343
    Multiplier { upper: 0xa8f5fd4f38217a357583e52e7cf74193, lower: 0x29557c5e83a0d857b7f4294e113ae17d }, // 2344
    Multiplier { upper: 0x872b310c2ce794f7913650f1fd929adc, lower: 0x2111304b9c80ad12f990210b40fbe797 }, // 2345
    Multiplier { upper: 0xd8451b46ae3f54bf4ebd4e4ffc1dc493, lower: 0x681b8078fa677b518f4d01ab9b2ca5be }, // 2346
    Multiplier { upper: 0xad0415d224ff76ff72310b733017d075, lower: 0xece2cd2d951f95dad90a67bc7c23b7cb }, // 2347
    Multiplier { upper: 0x8a69ab0e83ff9265f4f40928f346405e, lower: 0x571bd757aa7fab157a6eb9639682f970 }, // 2348
    Multiplier { upper: 0xdd75de7d9fff50a32186750e520a0096, lower: 0xf1c6255910cc44ef2a4ac238f0d18f19 }, // 2349
    Multiplier { upper: 0xb12b18647fff73b5b46b90d841a19a12, lower: 0x5b04eaada709d0bf55089b60c0a7a5ad }, // 2350
    Multiplier { upper: 0x8dbc13839999295e29efa71367b47b41, lower: 0xe26a5557b8d4a6ff773a15e700861e24 }, // 2351
    Multiplier { upper: 0xe2c6859f5c28423043190b523f872b9c, lower: 0x9d76eef2c1543e658b90230b3409c9d4 }, // 2352
    Multiplier { upper: 0xb56b9e1916869b59cf473c41cc6c22e3, lower: 0xb12bf25bcddcfeb7a2d9b5a29007d4a9 }, // 2353
    Multiplier { upper: 0x9122e4e0ded215e1729f6367d6bce8b6, lower: 0x27565b7ca4b0cbc61be15e1ba66caa21 }, // 2354
    Multiplier { upper: 0xe837d49afe1cefcf1dcbd23fbdfb0df0, lower: 0x3ef0926107814609c635635f70addd02 }, // 2355
    Multiplier { upper: 0xb9c643af31b0bfd8e4a30e9964c8d7f3, lower: 0x658d41e739343807d1c44f7f8d57e401 }, // 2356
    Multiplier { upper: 0x949e9c8c27c0997a5082721450a0acc2, lower: 0xb7a434b8fa902cd30e36a5ffa4465001 }, // 2357
    Multiplier { upper: 0xedca941372cdc25d4d9d8353b434479d, lower: 0xf2a0545b2a8047b816bdd665d3a3b335 }, // 2358
    Multiplier { upper: 0xbe3ba9a928a49b7dd7b135dc9029d2e4, lower: 0xc219dd15bb99d2f9abcb11eb0fb628f7 }, // 2359
    Multiplier { upper: 0x982fbaedba1d4931795a917d40217583, lower: 0xce7b17449614a8c7bca274bc0c91ba5f }, // 2360
    Multiplier { upper: 0xf37f917c5cfba84f2890e8c8669bef39, lower: 0x4a5e8ba0f0210e0c6103edf9adb5f6ff }, // 2361
    Multiplier { upper: 0xc2cc74637d96203f53a720a0521658fa, lower: 0xa1e53c80c01a71a380cff1948af7f8cc }, // 2362
    Multiplier { upper: 0x9bd6c382cade8032a952808041ab7a62, lower: 0x1b1dca0099aec14f9a3ff476d5932d70 }, // 2363
    Multiplier { upper: 0xf9579f37aafd99eaa88400cd35df2a36, lower: 0x91c9433429179bb2906653f155b848b3 }, // 2364
    Multiplier { upper: 0xc7794c2c88cae18886d000a42b18ee92, lower: 0x0e3a9c29ba79495ba6b8432777c6a08f }, // 2365
    Multiplier { upper: 0x9f943cf06d6f1ad39f0ccd50227a5874, lower: 0xd82ee354952dd449522d0285f96bb3a6 }, // 2366
    Multiplier { upper: 0xff5394b3e24b5e1f64e14880372a2721, lower: 0x59e49eedbb7c86dbb6ae6a6ff5791f70 }, // 2367
    Multiplier { upper: 0xcc42dd5cb50918191d8106ccf8ee85b4, lower: 0x47ea18be2f96d2495ef1eebff7941926 }, // 2368
    Multiplier { upper: 0xa368b116f73a79adb1340570c72537c3, lower: 0x6cbb46fe8c78a83ab25b25665fa9adb8 }, // 2369
    Multiplier { upper: 0x82ba274592952e248dc3378d6c1dc635, lower: 0xf095d2653d2d53622848eab84c87be2d }, // 2370
    Multiplier { upper: 0xd129d86f50eeb03a7c6b8c1579c93d23, lower: 0x1a8950a1fb7bb89d0d41778d473f96ae }, // 2371
    Multiplier { upper: 0xa754ad25da588cfb96bc70112e3a974f, lower: 0x486dda1b2f962d4a71012c7105cc788b }, // 2372
    Multiplier { upper: 0x85dd57517b7a0a62defd267424fbac3f, lower: 0x6d24ae7c2611bdd52734238d9e3d2d3c }, // 2373
    Multiplier { upper: 0xd62ef21bf8c343d164c83d86a192ad32, lower: 0x483ab0c6a34f9621d8536c15c9fb7b94 }, // 2374
    Multiplier { upper: 0xab58c1affa35cfdab706979ee7a88a8e, lower: 0xa02ef3d21c3fab4e46a92344a195fc76 }, // 2375
    Multiplier { upper: 0x8913ce2661c4a648926bac7f1fba0872, lower: 0x19bf2974e36622a505541c36e7ab305f }, // 2376
    Multiplier { upper: 0xdb52e3709c6dd6da83df7a64ff900d83, lower: 0x5c650f216bd69dd4d5536057d911e6fe }, // 2377
    Multiplier { upper: 0xaf7582c07d24abe203192eb732d9a469, lower: 0x16b73f4defdee4aa4442b3797a74b8cb }, // 2378
    Multiplier { upper: 0x8c5e0233975089819c14255f5be15054, lower: 0x122c32a4bfe583bb69cef5fac85d60a2 }, // 2379
    Multiplier { upper: 0xe09669ec254da8cf60203bcbc6354d53, lower: 0x5046b76dffd59f9242e4bcc473c89a9d }, // 2380
    Multiplier { upper: 0xb3ab87f01dd7ba3f8019c96fd1c43ddc, lower: 0x403892be66447fa83583ca36c306e218 }, // 2381
    Multiplier { upper: 0x8fbc6cc017dfc832cce16df30e3697e3, lower: 0x6693a89851d066202acfd4f89c0581ad }, // 2382
    Multiplier { upper: 0xe5fa4799bfcc73847b024984e38a8c9f, lower: 0x0a85da8d4fb3d699de1954c0f9a26914 }, // 2383
    Multiplier { upper: 0xb7fb6c7affd6c2d062683ad0b608707f, lower: 0x3b9e48710c8fdee17e7aaa33fae85410 }, // 2384
    Multiplier { upper: 0x932f89fbffdf02404eb9c8a6f806c065, lower: 0xc94b6d273d3fe58131fbbb5cc8b9dcda }, // 2385
    Multiplier { upper: 0xeb7f432ccc98039a178fa7718cd79a3c, lower: 0x75457b71fb996f351cc5f894745c948f }, // 2386
    Multiplier { upper: 0xbc65cf570a133614dfa61f8e0a4614fd, lower: 0x2a9dfc5b2fadf290e3d193a9f6b076d9 }, // 2387
    Multiplier { upper: 0x96b7d9126e75c4dd7fb8193e6e9e7730, lower: 0xeee4c9e28c8b2873e97476219226c57a }, // 2388
    Multiplier { upper: 0xf126281d7d893afbff8cf530b0fd8b81, lower: 0x7e3adc9dadab73eca8ba569c1d0ad590 }, // 2389
    Multiplier { upper: 0xc0eb534acad42f2fffa3f75a27313c67, lower: 0x982f16e48aef8ff086fb787ce408aada }, // 2390
    Multiplier { upper: 0x9a55dc3bd5768c26661cc5e1b8f43052, lower: 0xe025abea08bfa65a0595f9fd833a2248 }, // 2391
    Multiplier { upper: 0xf6efc6c6225746a3d6946fcf8e538084, lower: 0x99d5dfdcdacc3d5cd5bcc32f385d03a6 }, // 2392
    Multiplier { upper: 0xc58c9f04e845d21caba9f30c71dc66d0, lower: 0x7b117fe3e23cfde3de309c25c6b0cfb8 }, // 2393
    Multiplier { upper: 0x9e0a18d0b9d174e3bc87f5a38e49ebd9, lower: 0xfc0dffe981ca64b64b5a16849ef3d960 }, // 2394
    Multiplier { upper: 0xfcdcf481294f216c60d98905b0764629, lower: 0x934999759c77078a1229bda0fe52f567 }, // 2395
    Multiplier { upper: 0xca4a5d34210c1abd1a47a0d159f83821, lower: 0x42a1479149f8d2d4db5497b3fea8c452 }, // 2396
    Multiplier { upper: 0xa1d5175ce73ce230e1d2e70de193601a, lower: 0x9bb4394107fa4243e2aa12f66553d042 }, // 2397
    Multiplier { upper: 0x817745e3ec30b4f3e7dbec0b1adc4ce2, lower: 0x1629c767399501cfe8880f2b84430d02 }, // 2398
    Multiplier { upper: 0xcf253c9fe04dee530c931344f7c6e169, lower: 0xbd0fa571f5bb3619740ce5126d3814cf }, // 2399
    Multiplier { upper: 0xa5b763b319d7f1dc0a0f429d93058121, lower: 0x640c845b2afc2b47900a50db8a9343d9 }, // 2400
    Multiplier { upper: 0x8492b628e1798e49a1a5cee4759e00e7, lower: 0x833d36af559689060cd50d7c6edc3647 }, // 2401
    Multiplier { upper: 0xd41df04168c27d429c3c7e3a55c99b0c, lower: 0x052ebde555bda809ae21af2d7e2d23a5 }, // 2402
    Multiplier { upper: 0xa9b18d01209b97687cfd31c844a148d6, lower: 0x6a8bcb1dde31533af1b48c2464f0e951 }, // 2403
    Multiplier { upper: 0x87c13d9a807c792063fdc16d03b43a45, lower: 0x22096f4b182775c8c15d3ce9ea5a5441 }, // 2404
    Multiplier { upper: 0xd9352f5d9a60c1cd6cc9357b39205d3b, lower: 0x69a8b211c03f22dacefb94a976f6ed34 }, // 2405
    Multiplier { upper: 0xadc425e47b809b0abd6dc4629419e42f, lower: 0x87ba280e3365b57bd8c943bac592575d }, // 2406
    Multiplier { upper: 0x8b03518396007c08978b03821014b68c, lower: 0x6c94ecd8291e2ac97a3a9c956adb7917 }, // 2407
    Multiplier { upper: 0xde6bb59f56672cda8c119f3680212413, lower: 0xe0ee47c041c9de0f29f760ef115f2825 }, // 2408
    Multiplier { upper: 0xb1efc47f78528a48700e18f86680e9a9, lower: 0x80be9fcd016e4b3f54c5e725a77f5351 }, // 2409
    Multiplier { upper: 0x8e5969ff93753b6d2671ad938533ee21, lower: 0x33cbb30a678b6f65dd6b1f5152cc42a7 }, // 2410
    Multiplier { upper: 0xe3c2433285885f150a4f7c1f3b8649ce, lower: 0xb945eb43d8df18a2fbde98821e139dd8 }, // 2411
    Multiplier { upper: 0xb635028ed139e5aa6ea5fce5c9383b0b, lower: 0xc76b229cad7f46e8c97ee068180fb17a }, // 2412
    Multiplier { upper: 0x91c4020bda94b7bb8bb7fd84a0f9c8d6, lower: 0x39228216f1329f20a1324d20133fc12e }, // 2413
    Multiplier { upper: 0xe9399cdfc42125f8df8cc8d434c2daf0, lower: 0x5b6a69be4eb7650101ea15001ecc684a }, // 2414
    Multiplier { upper: 0xba947d7fd01a84c7193d6d76909be259, lower: 0xe2bb87cb722c50cd9b21aa667f09ed08 }, // 2415
    Multiplier { upper: 0x9543979973486a38e0fdf12ba6e31b7b, lower: 0x1bc9396f8e89da3e15b48851ff3b2406 }, // 2416
    Multiplier { upper: 0xeed28c28b873dd27ce631b790b04f8c4, lower: 0xf941f57f4a7629fcef87408331f839a4 }, // 2417
    Multiplier { upper: 0xbf0ed686f9f64a863eb5af9408d0c703, lower: 0xfa9b2acc3b91bb30bf9f66cf5b2cfae9 }, // 2418
    Multiplier { upper: 0x98d8ab9f2e5ea204fef7bfa9a0a7059c, lower: 0xc87c223cfc7495c0994c523f7c23fbee }, // 2419
    Multiplier { upper: 0xf48ddf6516fdd007fe5932a9010b3c2e, lower: 0x0d9369fb2d875600f546e9ff2d065fe3 }, // 2420
    Multiplier { upper: 0xc3a4b2b74597d99ffeadc220cda2968b, lower: 0x3e0f87fc246c44cd910587ff57384cb6 }, // 2421
    Multiplier { upper: 0x9c83c22c37acae19988b01b3d7b5453c, lower: 0x31a6066350569d7140d1399912937091 }, // 2422
    Multiplier { upper: 0xfa6c69e0591449c28dab35ec8c553b93, lower: 0x82a33d6bb3bdc8b53481f5c1b7524db5 }, // 2423
    Multiplier { upper: 0xc856bb19e0dd07ced7bc2b23a37762dc, lower: 0x688297895c97d3c42a019167c5db715e }, // 2424
    Multiplier { upper: 0xa045627b1a4a6ca5796355b61c5f8249, lower: 0xed3546077d46430354ce0dec9e49277e }, // 2425
    Multiplier { upper: 0x803781fc150856eac782aaf816b2cea1, lower: 0x8a9104d2ca9e9c02aa3e718a183a85ff }, // 2426
    Multiplier { upper: 0xcd259cc6880d57de0c0444c024514a9c, lower: 0x10e807b7aa97600443971c1026c40997 }, // 2427
    Multiplier { upper: 0xa41e170539a4464b3cd037001d0dd549, lower: 0xa720062c8879199d02df49a68569a146 }, // 2428
    Multiplier { upper: 0x834b459dc7b69ea2970cf8cce40b1107, lower: 0xb8e66b56d394147d9be5d4853787b438 }, // 2429
    Multiplier { upper: 0xd21208fc72bdca9dbe7b27ae39ab4e72, lower: 0xc170abbe1f5353fc2ca2eda1f272b9f3 }, // 2430
    Multiplier { upper: 0xa80e6d96c2316ee498628624faef71f5, lower: 0x678d5631b2a90ffcf08257b4c1f5618f }, // 2431
    Multiplier { upper: 0x8671f14568278bea138204ea625927f7, lower: 0x860aab5af5540cca5a01dfc3ce5de7a6 }, // 2432
    Multiplier { upper: 0xd71cb53bd9d8dfdcec033b109d5b7325, lower: 0xa344455e555347aa299c99394a2fd909 }, // 2433
    Multiplier { upper: 0xac16f76314ad7fe3f00295a6e44928ea, lower: 0xe9036ab1dddc3954ee16e0faa1bfe0d4 }, // 2434
    Multiplier { upper: 0x89abf91c108accb6599baaebe9d420bb, lower: 0xed9c555b17e36110be78b3fbb49980aa }, // 2435
    Multiplier { upper: 0xdc465b601a77adf08f5f77dfdc869ac6, lower: 0x48fa222b596bce8130c11ff920f59aa9 }, // 2436
    Multiplier { upper: 0xb0384919aec624c072b2c64cb06baf05, lower: 0x072e81bc47897200f3cdb32db3f7aeee }, // 2437
    Multiplier { upper: 0x8cf9d4148bd1b7005bc2383d59efbf37, lower: 0x38f201636c6df4cd8fd7c28af65fbf25 }, // 2438
    Multiplier { upper: 0xe18fb9ba794f8b33c6038d2ef64c6525, lower: 0x27e99bd24716547c19593744bd65fea1 }, // 2439
    Multiplier { upper: 0xb472fafb943fa28fd19c70f25ea3841d, lower: 0xb987afdb6c11dd3014475f6a311e654e }, // 2440
    Multiplier { upper: 0x905bfbfc76994ed9747d27284bb6034a, lower: 0xfad2f315f00e4a8cdd05e5ee8db1eaa5 }, // 2441
    Multiplier { upper: 0xe6f9932d8a8ee48f20c83ea6df899ede, lower: 0x5e1e51bcb34a10e161a3097daf831107 }, // 2442
    Multiplier { upper: 0xb8c7a8f13ba583a5b3d365524c6e18b1, lower: 0xe4e50e308f6e73e7814f3acaf2cf40d3 }, // 2443
    Multiplier { upper: 0x93d2ed8dc951361e2975eaa83d24e08e, lower: 0x50b73e8d3f8b8fec6772956f28a5cd75 }, // 2444
    Multiplier { upper: 0xec84af49421b89c9dbefddd9fb6e3416, lower: 0xe78b974865ac197a3f1dbbe50dd61588 }, // 2445
    Multiplier { upper: 0xbd36f2a101afa16e498cb17b2f8b5cdf, lower: 0x1fa2df6d1e234794ff4afcb73e44de07 }, // 2446
    Multiplier { upper: 0x975f2880ce261abea13d5ac8f2d5e3e5, lower: 0xb2e8b2bdb1b5d2dd9908ca2c31d0b19f }, // 2447
    Multiplier { upper: 0xf231da67b03cf79768622adb1e23063c, lower: 0x5174512f82bc8495c1a7a9e04fb44f65 }, // 2448
    Multiplier { upper: 0xc1c17b8626972c79204e88af4b4f3830, lower: 0x4129da8c6896d077ce1fbb19d95d0c51 }, // 2449
    Multiplier { upper: 0x9b012f9e8545bd2db37206f2a2a5c68d, lower: 0x00ee487053abd9f971b2fc14ade409da }, // 2450
    Multiplier { upper: 0xf801e5ca6ed5fb7c52500b1dd1093dae, lower: 0x67e3a71a1f795cc24f84c6877ca00fc3 }, // 2451
    Multiplier { upper: 0xc667eb0858ab2f96a84008e4a73a97be, lower: 0xb982ec14e5fab09b72d09ed2ca19a636 }, // 2452
    Multiplier { upper: 0x9eb988d37a228c788699a0b6ec2edfcb, lower: 0xc79bf010b7fbc07c5bda18a8a1ae1e92 }, // 2453
    Multiplier { upper: 0xfdf5a7b8c36a7a5a70f5cdf179e49946, lower: 0x0c2cb34df32c672d5fc35aa76916974f }, // 2454
    Multiplier { upper: 0xcb2aec93cf8861e1f3f7d7f46183add1, lower: 0xa356f5d7f5bd1f577fcf7bb920dedf73 }, // 2455
    Multiplier { upper: 0xa288bd430c6d1b1b29931329e79c8b0e, lower: 0x1c45917991641912cca5fc941a4be5f5 }, // 2456
    Multiplier { upper: 0x8206fdcf3d2415af5475a8ee52e3a271, lower: 0xb037a7947450140f0a1e63a9aea31e5e }, // 2457
    Multiplier { upper: 0xd00b2fb1fb6cef7eed890e4a1e3903e9, lower: 0x19f2a5ba53b3534b4363d2a9176b63c9 }, // 2458
    Multiplier { upper: 0xa66f595b2f8a593257a0d83b4b60cfed, lower: 0xae5bb7c842f5dc3c35e9755412bc4fd4 }, // 2459
    Multiplier { upper: 0x8525e115bfa1e0f512e71362a2b3d98a, lower: 0xf1e2f96d025e49c9c4bac44342303fdd }, // 2460
    Multiplier { upper: 0xd5096822cc3634bb5171b89dd11fc277, lower: 0xe96b28ae6a30760fa12ad39ed04d32fb }, // 2461
    Multiplier { upper: 0xaa6dece8a35e9095dac1607e40e6352c, lower: 0xbabc208b8826c4d94dbbdc7f0d0a8f2f }, // 2462
    Multiplier { upper: 0x8857f0ba1c4ba6de489ab39833eb5dbd, lower: 0x62301a0939b89d7aa49649ff3da20c26 }, // 2463
    Multiplier { upper: 0xda264df693ac3e30742ab8f3864562c8, lower: 0x9d19c341f5f42f2aa0f076652f69ad09 }, // 2464
    Multiplier { upper: 0xae850b2ba9569826c35560c2d1d11bd3, lower: 0xb0e16901919025bbb3f391ea8c548a6e }, // 2465
    Multiplier { upper: 0x8b9da2895445468569111a3574a74976, lower: 0x271aba67a7a68496298fa7eed6aa0858 }, // 2466
    Multiplier { upper: 0xdf629da886d53da241b4f6bbedd87589, lower: 0xd82ac3d90c3da0f0427f7317bddcda26 }, // 2467
    Multiplier { upper: 0xb2b54aed38aa97b5015d922ff179f7a1, lower: 0x79bbcfe0d697b3f36865f5ac97e3e1b8 }, // 2468
    Multiplier { upper: 0x8ef76f242d55462a677e0e8cc12e5fb4, lower: 0x61630cb3dedfc32920519156dfe98160 }, // 2469
    Multiplier { upper: 0xe4bf1839e22209dd72634a7aceb09920, lower: 0x9bd1adec97cc6b750082822499759bcd }, // 2470
    Multiplier { upper: 0xb6ff4694b4e807e45b82a1fbd88d474d, lower: 0x49748b23aca3892a66cece83adf7afd7 }, // 2471
    Multiplier { upper: 0x9265d21090b99fe9e2cee7fcad3dd2a4, lower: 0x3ac3a282f082d421ebd8a53624c62646 }, // 2472
    Multiplier { upper: 0xea3c834db45c330fd14b0cc77b961dd3, lower: 0x91390404b404869cac8dd5236e09d6d6 }, // 2473
    Multiplier { upper: 0xbb639c3e29e35c0ca76f3d6c62de7e42, lower: 0xda940336f66a054a23a4aa82be6e4578 }, // 2474
    Multiplier { upper: 0x95e949cb54b5e33d52bf6456b57ecb68, lower: 0xaedccf5f2b88043b4fb6eecefebe9dfa }, // 2475
    Multiplier { upper: 0xefdba945545638621dff06f1226478a7, lower: 0x7e2e189845a66d2bb2be4ae4caca965c }, // 2476
    Multiplier { upper: 0xbfe2edd11044f9e817ff38c0e8506085, lower: 0xfe8b46e037b8575628983bea3bd54517 }, // 2477
    Multiplier { upper: 0x998257da736a61867998fa33ed0d1a04, lower: 0xcba29f19c62d12ab53acfcbb63110412 }, // 2478
    Multiplier { upper: 0xf59d595d85770270c28e5d1fe1ae9007, lower: 0xac3764f609e1b77885e1945f04e80683 }, // 2479
    Multiplier { upper: 0xc47de1179df8cec09ba5174cb48ba66c, lower: 0x89c5ea5e6e4e2c606b1add18d0b99ecf }, // 2480
    Multiplier { upper: 0x9d3180dfb193d89a161dac3d5d3c8523, lower: 0xa16b21e5250b56b388e24a7a40947f0c }, // 2481
    Multiplier { upper: 0xfb8267cc4f52f429bcfc46c8952da1d2, lower: 0x9bde9ca1d4def11f416a10c39a8731ad }, // 2482
    Multiplier { upper: 0xc9351fd6a5dbf687ca636bd3aa8ae7db, lower: 0xafe54a1b10b25a7f67880d69486c27be }, // 2483
    Multiplier { upper: 0xa0f74cabb7e32b9fd51c5642eed58649, lower: 0x59843b48da284865ec6cd7876d2352fe }, // 2484
    Multiplier { upper: 0x80c5d6efc64f56197749de9bf2446b6d, lower: 0xe13695d3e1b9d384bd23df9f8a82a8cc }, // 2485
    Multiplier { upper: 0xce0957e60a1889c2587630f983a0abe3, lower: 0x01f0efb96929526dfb6c98ff44044146 }, // 2486
    Multiplier { upper: 0xa4d44651a1ad3b01e05e8d94694d564f, lower: 0x34c0bfc7875441f195f07a65d003676b }, // 2487
    Multiplier { upper: 0x83dd050e1af0fc01804ba476baa4450c, lower: 0x2a33cc9f9f769b27ab26c8517335ec56 }, // 2488
    Multiplier { upper: 0xd2fb3b49c4b4c668cd45d3f12aa06e79, lower: 0xdd1fadcc32575ea5dea473b5852313bc }, // 2489
    Multiplier { upper: 0xa8c8fc3b03c3d1ed7104a98dbbb38b94, lower: 0xb0e624a35b791884b21d295e041c0fca }, // 2490
    Multiplier { upper: 0x8707302f3636418ac0d087a496293c76, lower: 0xf3eb5082af94139d5b4a877e69b00ca1 }, // 2491
    Multiplier { upper: 0xd80b804b89f068de014da5d423752d8b, lower: 0x1fdee7377f5352955edda5970f801435 }, // 2492
    Multiplier { upper: 0xacd6003c6e59ed7e6771517682c4246f, lower: 0x4cb25292cc42a8777f17b7ac0c667691 }, // 2493
    Multiplier { upper: 0x8a44ccfd2514bdfeb927745ecf035059, lower: 0x0a28420f09ceed2c65ac92f009eb920e }, // 2494
    Multiplier { upper: 0xdd3ae19508212ffdf50bed647e6bb3c1, lower: 0xa9da034b42e4aead6f7a84b343128349 }, // 2495
    Multiplier { upper: 0xb0fbe7aa6ce75997f73cbde9febc8fce, lower: 0x217b35d5cf1d588abf9536f5cf4202a1 }, // 2496
    Multiplier { upper: 0x8d9652eebd85e1465f63cb219896d971, lower: 0xb4629177d8e446d56610f8c4a5ce6881 }, // 2497
    Multiplier { upper: 0xe28a1e4ac8d6353d656c7835c0f15be9, lower: 0x209db58c8e3a0aef09b4c13aa2e3da67 }, // 2498
    Multiplier { upper: 0xb53b4b6f0711c4311df0602b00c11654, lower: 0x1a17c47071c808bf3af700fbb5831520 }, // 2499
    Multiplier { upper: 0x90fc3c58d2749cf417f380226700dea9, lower: 0xae7969f38e39a098fbf8cd962acf4419 }, // 2500
    Multiplier { upper: 0xe7f9fa27b720fb202652669d719afddc, lower: 0x4a5bdcb8e38f675b2cc148f0447ed35b }, // 2501
    Multiplier { upper: 0xb994c81fc5b3fc19b841ebb127af317d, lower: 0x08497d60b60c52af570107269d3242b0 }, // 2502
    Multiplier { upper: 0x9477067fd15cc9ae2d01895a8625c130, lower: 0xd36dfde6f809dbbf78cd9f52175b688d }, // 2503
    Multiplier { upper: 0xed8b3d994efadc49e19c0ef73d09351a, lower: 0xebe32fd7f342f9325ae29883589240e1 }, // 2504
    Multiplier { upper: 0xbe08fe143f2f16a18149a592973a90e2, lower: 0x564f59798f68c75b7be87a02ad41cd81 }, // 2505
    Multiplier { upper: 0x980731a9cc25abb4676e1e0edf620d81, lower: 0xdea5e12e0c53d2af965394cef1017134 }, // 2506
    Multiplier { upper: 0xf33eb5dc79d5df870be3634aff0348cf, lower: 0xcaa301e346ec844c23b8ee17e8024eb9 }, // 2507
    Multiplier { upper: 0xc298917d2e44b2d26fe91c3bff35d3d9, lower: 0x6ee8ce4f6bf069d682fa58132001d894 }, // 2508
    Multiplier { upper: 0x9bad4130f1d08f0ebfedb02fff5e4314, lower: 0x58ba3ea5eff387decf2eacdc199b13aa }, // 2509
    Multiplier { upper: 0xf915351b1c80e4e4664919e665639e86, lower: 0xf45d31097fec0c97b1e447c68f5e85dc }, // 2510
    Multiplier { upper: 0xc7442a7c16cd83e9eb6dae51eab6186b, lower: 0xf6b0f4079989a3ac8e50396ba5e537e3 }, // 2511
    Multiplier { upper: 0x9f69bb9678a46987ef8af1db222b46bc, lower: 0xc55a5cd2e13ae956d8402defb7ea931c }, // 2512
    Multiplier { upper: 0xff0f928a5aa0a8d97f44b62b69ded794, lower: 0x6ef6faeb01f7dbbe26cd164c597751c7 }, // 2513
    Multiplier { upper: 0xcc0c753b7bb3ba479903c4ef87e57943, lower: 0x8bf8c8bc01931631b8a411d6adf90e39 }, // 2514
    Multiplier { upper: 0xa33d2a95fc8fc8394736372606512dcf, lower: 0xa32d6d633475ab5afa1cdb1224c73e94 }, // 2515
    Multiplier { upper: 0x82975544ca0ca02dd291c5b8050dbe3f, lower: 0xb5bdf11c29f7bc48c81715a81d6c3210 }, // 2516
    Multiplier { upper: 0xd0f22207a9adcd161db609266e7c6399, lower: 0x22c981c6a98c6074735822a69579e9b3 }, // 2517
    Multiplier { upper: 0xa7281b39548b0a7817c4d41ebec9e947, lower: 0x4f079b0554704d29f5e01bb87794baf6 }, // 2518
    Multiplier { upper: 0x85b9af61106f3b934637101898a1876c, lower: 0x3f3948d11059d754c4b349605faa2f2b }, // 2519
    Multiplier { upper: 0xd5f5e5681a4b92853d24e68dc1027246, lower: 0xcb8edae81a295887a11edbcd65dd1845 }, // 2520
    Multiplier { upper: 0xab2b1dece1d60ed0fdb71ed7cd9b8e9f, lower: 0x093f15867b5446d2e74be30ab7e4136a }, // 2521
    Multiplier { upper: 0x88ef4b23e7de7240caf8e57971493ee5, lower: 0xa0ff446b95dd057585d64f3bc6500f88 }, // 2522
    Multiplier { upper: 0xdb18783972fd839ade5b08c24edb97d5, lower: 0xce653a45bc94d588d623b1f93d4ce5a6 }, // 2523
    Multiplier { upper: 0xaf46c6945bfe02e24b7c0701d8afacab, lower: 0x0b842e9e3077113a44e95b2dcaa3eaec }, // 2524
    Multiplier { upper: 0x8c389edd1664cf1b6f966c017a2623bc, lower: 0x09368bb1c05f40fb6a5448f16ee988bd }, // 2525
    Multiplier { upper: 0xe05a97c823d47e924c23e0025d09d2c6, lower: 0x752412b6009867f8aa2074b57e427461 }, // 2526
    Multiplier { upper: 0xb37baca01ca9fedb701cb335173b0f05, lower: 0x2a83422b33ad1ffa21b3909131cec381 }, // 2527
    Multiplier { upper: 0x8f9623b34a2198af8ce3c290df62726a, lower: 0x886901bc29574cc81af60d40f4a56934 }, // 2528
    Multiplier { upper: 0xe5bd05eba9cf5ab27b06041aff03ea44, lower: 0x0d74cf9375587ad9c4bce201876f0eb9 }, // 2529
    Multiplier { upper: 0xb7ca6b22ee3f7bc1fc04d01598cfee9c, lower: 0xd790a60f9113957b03ca4e679f8c0bc7 }, // 2530
    Multiplier { upper: 0x930855b58b65fc9b3003d9aae0a6587d, lower: 0x794084d940dc77959ca1d852e609a306 }, // 2531
    Multiplier { upper: 0xeb40892278a32dc5199fc2ab010a272f, lower: 0x28673af53493f288fa9c8d51700f6b3c }, // 2532
    Multiplier { upper: 0xbc33a0e860828b04147fceef34081f58, lower: 0xed1f625dc3a98ed3fbb0710df33f88fd }, // 2533
    Multiplier { upper: 0x968fb3ed1a0208d010663f25c339b2ad, lower: 0x8a7f81e49c87a57662f38da4c2993a64 }, // 2534
    Multiplier { upper: 0xf0e5ecae9003414ce709fea2d1f5eaaf, lower: 0x43ff363a940c3bf09e527c3ad0f52a3a }, // 2535
    Multiplier { upper: 0xc0b7f08ba669010a526e654f0e5e5559, lower: 0x033291c876702ff3b1db969573f754fb }, // 2536
    Multiplier { upper: 0x9a2cc06fb85400d50ebeb77271e51114, lower: 0x028edb06c5268cc2f4afabaac32c43fc }, // 2537
    Multiplier { upper: 0xf6ae00b2c08667bb4acabf1d83081b53, lower: 0x374af80ad50a7ad1877f79113846d32d }, // 2538
    Multiplier { upper: 0xc558008f006b862f6f0898e468d3490f, lower: 0x5f6f2cd5773b95746c65fa742d0575bd }, // 2539
    Multiplier { upper: 0x9de0007266bc6b5925a07a5053dc3a72, lower: 0xb2bf57112c2faac389eb2ec357379164 }, // 2540
    Multiplier { upper: 0xfc999a50a460abc1d5cd9080862d2a51, lower: 0x1dfef1b5137f779f4311e46bbebf4f07 }, // 2541
    Multiplier { upper: 0xca147b73b6b3bc9b11714066d1bdbb74, lower: 0x17ff27c40f992c7f68db1d22feff726c }, // 2542
    Multiplier { upper: 0xa1a9fc5c922963af412766b8a7cafc5c, lower: 0xdfff53033fadbd32ba48e41bff32c1f0 }, // 2543
    Multiplier { upper: 0x8154c9e3a8211c8c341f8560863bfd17, lower: 0x19990f35cc8afdc22ea0b67ccc289b27 }, // 2544
    Multiplier { upper: 0xceee0fd2a69b60e05365a23409f994f1, lower: 0xc28e7ebc7a77fc69e434572e13742b71 }, // 2545
    Multiplier { upper: 0xa58b3fdbb87c4d8042b7b4f66e6143f4, lower: 0x9ba5323061f996bb1cf6ac24dc5cef8d }, // 2546
    Multiplier { upper: 0x846f6649606371336892f72b8b81032a, lower: 0x161dc1c04e6145627d922350b04a593e }, // 2547
    Multiplier { upper: 0xd3e57075670581ebda84beac12680510, lower: 0x2362cf9a1702089d95b69ee78076f530 }, // 2548
    Multiplier { upper: 0xa98459f7859e01897b9d65567520040c, lower: 0xe91bd948126806e477c54bec66c590f3 }, // 2549
    Multiplier { upper: 0x879d14c6047e67a12fb11ddec4199cd7, lower: 0x20e31439a85338b6c6376ff05237a729 }, // 2550
    Multiplier { upper: 0xd8fb54700730a5ceb2b4fc97a028faf1, lower: 0xce38205c4085278ad6bf1980838c3ea8 }, // 2551
    Multiplier { upper: 0xad95dd266c26eb0bc22a63ac8020c8c1, lower: 0x71c68049cd3752d57898e1339c703220 }, // 2552
    Multiplier { upper: 0x8ade4a85235255a301bb82f06680a09a, lower: 0xc16b99d4a42c4244607a4dc2e38cf4e6 }, // 2553
    Multiplier { upper: 0xde30773b6bb6ef6b35f8d180a40100f7, lower: 0x9bdf5c876d139d3a33f6e2d16c14bb0a }, // 2554
    Multiplier { upper: 0xb1c05f62bc9259229193dacd5000cd92, lower: 0xe31916d2bda94a94f65f1bdabcdd626e }, // 2555
    Multiplier { upper: 0x8e337f823075141ba7a97bd77333d7a8, lower: 0xb5adabdbcaedd543f84c1648971781f2 }, // 2556
    Multiplier { upper: 0xe38598d04d88202c3f7592f251ec8c41, lower: 0x22af795fab1622065a1356da8b58cfe9 }, // 2557
    Multiplier { upper: 0xb6047a403e06802365f7a8c1db23a367, lower: 0x4ef2c77fbc11b4d1e1a912486f7a3fee }, // 2558
    Multiplier { upper: 0x919d2e99cb386682b7f953ce48e94f85, lower: 0xd8c23932fcdaf70e4e20db6d25fb6658 }, // 2559
    Multiplier { upper: 0xe8fb7dc2dec0a404598eec7d41754c09, lower: 0x5ad05b84c7c4be7d49ce2be1d65f0a26 }, // 2560
    Multiplier { upper: 0xba62cb024bcd50037ad8bd31012aa33a, lower: 0xaf0d1603d303cb976e3e8981784c081f }, // 2561
    Multiplier { upper: 0x951bd59b6fd77335fbe0975a67554f62, lower: 0x25a4119ca8cfd612be986e012d09a019 }, // 2562
    Multiplier { upper: 0xee92ef5f1958b8565fcdbef70bbbb236, lower: 0xa2a01c2ddae6235130f3e33514dc335a }, // 2563
    Multiplier { upper: 0xbedbf2b27aad6045197165926fc95b5e, lower: 0xe880168b1584e90dc0c31c2a77168f7c }, // 2564
    Multiplier { upper: 0x98aff55b95578037478deadb8ca115e5, lower: 0x86ccded5aad0ba7167027ceec5aba5fd }, // 2565
    Multiplier { upper: 0xf44cbbc5bbbf338ba5afde2c1434efd5, lower: 0xa47afe22aae790b5719d94b13c45d661 }, // 2566
    Multiplier { upper: 0xc3709637c965c2d61e264b567690bfde, lower: 0x1d2f31b555860d5df47e108dc9d1784d }, // 2567
    Multiplier { upper: 0x9c5a11c63ab7cf11b1b83c452ba6ffe4, lower: 0xe425c15dde04d77e5d31a6d7d4a79371 }, // 2568
    Multiplier { upper: 0xfa29b609f78c7e82b5f393a1df71996e, lower: 0x39d6022fc9a158ca2eb5d7bfbaa5b8b5 }, // 2569
    Multiplier { upper: 0xc8215e6e5fa39868918fa94e4c5ae124, lower: 0xfb119b596e1aad6e8bc4ac99621e2d5e }, // 2570
    Multiplier { upper: 0xa01ab1f1e61c79ed413fbaa509e24db7, lower: 0x2f4149145815578ba303bd4781b1bde5 }, // 2571
    Multiplier { upper: 0x80155b27eb49fb243432fbb73b1b715f, lower: 0x5901074379aaac6fb59c976c67c164b7 }, // 2572
    Multiplier { upper: 0xcceef83fdedcc506b9eb2c585e924efe, lower: 0xf4ce72058f777a4c55c758ad72cf078b }, // 2573
    Multiplier { upper: 0xa3f2603318b09d9efb2289e04ba83f32, lower: 0x5d71f4d13f92c83d116c46f128a59fa2 }, // 2574
    Multiplier { upper: 0x83284cf5ad5a17b2628207e6a2ecff5b, lower: 0x7df4c3da994239ca74569f2753b7b2e8 }, // 2575
    Multiplier { upper: 0xd1da14bc489025ea3736730a9e47fef8, lower: 0xc9879fc42869f610ba2431d885f2b7da }, // 2576
    Multiplier { upper: 0xa7e1aa303a0ceb21c5c528d54b6ccbfa, lower: 0x3ad2e63686bb2b4094e9c17a04c22cae }, // 2577
    Multiplier { upper: 0x864e21c02e70bc1b049dba443c570994, lower: 0xfbdbeb5ed22f55cd43ee34619d6823bf }, // 2578
    Multiplier { upper: 0xd6e369337d812cf80762c3a0608b4287, lower: 0xf95fdefe1d1889486cb053cf62403931 }, // 2579
    Multiplier { upper: 0xabe920f5fe00f0c66c4f02e6b3a29b9f, lower: 0xfab318cb4a7a076d23c0430c4e99c75b }, // 2580
    Multiplier { upper: 0x89874d919800c09ebd0c0252294ee2e6, lower: 0x6228e0a2a1fb39241c99cf3d0bae3915 }, // 2581
    Multiplier { upper: 0xdc0baf4f599acdcac81336e9dbb16b0a, lower: 0x36a7cdd1032b8ea02dc2e52e7916c1bb }, // 2582
    Multiplier { upper: 0xb009590c47af0b08a00f5f217c8def3b, lower: 0x5eeca4a735bc7219be3584252dabce30 }, // 2583
    Multiplier { upper: 0x8cd4473d0625a26d4cd918e796d7f295, lower: 0xe58a1d5291638e7afe913684248971c0 }, // 2584
    Multiplier { upper: 0xe153a52e703c371547c1c1728af31dbc, lower: 0xa2769550e89f4a5e641b8a6d07424f99 }, // 2585
    Multiplier { upper: 0xb442ea8b8cfcf8ddd301678ed58f4afd, lower: 0x4ec54440ba19084b83493b8a6c350c7a }, // 2586
    Multiplier { upper: 0x9035886fa3fd93e4a8cdec724472a264, lower: 0x3f04369a2e7a6d0935d42fa1f02a7062 }, // 2587
    Multiplier { upper: 0xe6bc0d7f6cc8eca10e16471d3a5103d3, lower: 0x9806bdc37d90ae7522ed190319dd809d }, // 2588
    Multiplier { upper: 0xb8967132bd6d8a1a71ab6c1761da6976, lower: 0x133897cf97a6f1f74f2414027b179a17 }, // 2589
    Multiplier { upper: 0x93ab8dc231246e7b8e22bcdf817b8791, lower: 0xa8fa130c79525b2c3f501001fc12e1ac }, // 2590
    Multiplier { upper: 0xec45af9d1b6d7d927d0461659bf8d8e9, lower: 0x0e5ceb472883c5139880199cc6849c46 }, // 2591
    Multiplier { upper: 0xbd048c7daf8acadb9736b4514993e0ba, lower: 0x71e3ef6c20696a761399ae170536e36c }, // 2592
    Multiplier { upper: 0x9736d6caf2d56f16129229daa1431a2e, lower: 0xc18325f019edeec4dc7af1ac042be923 }, // 2593
    Multiplier { upper: 0xf1f157ab1e224b56841d0fc4353829e4, lower: 0x68d1d64cf6497e07c72b1c466d130e9e }, // 2594
    Multiplier { upper: 0xc18ddfbc181b6f7869b0d969c42cee50, lower: 0x53db11d72b6dfe6c9f55b03857427218 }, // 2595
    Multiplier { upper: 0x9ad7e630134925f9ee2714549cf0bea6, lower: 0xa97c0e45bc57febd4c448cf9df685b47 }, // 2596
    Multiplier { upper: 0xf7bfd6b3520ea3297d0b53ba94b4643d, lower: 0xdbf9b06f93bffdfbad3a7b296573c53d }, // 2597
    Multiplier { upper: 0xc63312290e721c2130d5dc9543c38364, lower: 0xaffaf38c76333196242ec8edeac30431 }, // 2598
    Multiplier { upper: 0x9e8f41ba71f4e34dc0ab16ddcfcf9c50, lower: 0x8cc8c2d6c4f5c144e9bf0724bbcf368e }, // 2599
    Multiplier { upper: 0xfdb202c3e987d2160111be2fb2e5c6e7, lower: 0x47a79e246e560207dc64d83ac6185749 }, // 2600
    Multiplier { upper: 0xcaf4cf03213974de674164f2f5849f1f, lower: 0x6c86181d25119b397d1d79c89e79df6e }, // 2601
    Multiplier { upper: 0xa25d7268e7612a4b85cdea5bf79d4c19, lower: 0x239e79b0ea747c2dfdb12e3a18617f8b }, // 2602
    Multiplier { upper: 0x81e45b871f80eea2d171884992e43ce0, lower: 0xe94b948d885d3024caf424fb46b46609 }, // 2603
    Multiplier { upper: 0xcfd3c5a4ff34b104824f4075b7d3949b, lower: 0x0edf5415a6fb803ade536e5ed78709a8 }, // 2604
    Multiplier { upper: 0xa6430483ff5d5a6a01d9005e2ca943af, lower: 0x3f1910115262ccfbe50f8b7f12d26e20 }, // 2605
    Multiplier { upper: 0x85026a0332b115219b14004b56edcfbf, lower: 0x65ada67441e8a3fcb73fa2cc0f0ebe80 }, // 2606
    Multiplier { upper: 0xd4d0a99eb781bb68f82000788b161932, lower: 0x3c490a539ca76cc78b990479b1b130cc }, // 2607
    Multiplier { upper: 0xaa4087b22c67c920c68000606f44e0f4, lower: 0xfd073b7616ec5706094736c7c15a8d70 }, // 2608
    Multiplier { upper: 0x88339fc1bd1fd41a386666b38c371a5d, lower: 0x9738fc5e78bd126b3a9f5f0634487127 }, // 2609
    Multiplier { upper: 0xd9ec32cf94ffb9c38d70a45279f1c3c8, lower: 0xf1f4c6fd8dfb50ab90fefe7053a71b71 }, // 2610
    Multiplier { upper: 0xae568f0c7732fb02d78d5041fb27cfd3, lower: 0xf4c3d2647195da22da659859dc85af8e }, // 2611
    Multiplier { upper: 0x8b7872705f5bfc02460aa69b2f530ca9, lower: 0x909ca8505ade481be1eae047e39e260b }, // 2612
    Multiplier { upper: 0xdf271d8098932cd070110a91e551addc, lower: 0x1a9440809163a693031166d96c303cde }, // 2613
    Multiplier { upper: 0xb285b133ad428a4059a73ba7eaa7be49, lower: 0xaedd0066dab61edc0274524789c030b2 }, // 2614
    Multiplier { upper: 0x8ed15a8fbdced50047b8fc865552fea1, lower: 0x58b0cd1f155e7f16685d0e9fa1668d5b }, // 2615
    Multiplier { upper: 0xe4822a7f9617bb33a5f4c73d55519768, lower: 0x8de7ae982230cb570d61b0ff68a4155f }, // 2616
    Multiplier { upper: 0xb6ce886611ac95c2eb2a38fddddadf86, lower: 0xd7ec8bace8270912711af3ff86e9aab2 }, // 2617
    Multiplier { upper: 0x923ed384daf077cf22882d97e4af1938, lower: 0xacbd3c8a53526da85a7bf6660587bbc2 }, // 2618
    Multiplier { upper: 0xe9fe1f3af7e72618374048f3077e8ec1, lower: 0x1461fa76ebb715da2a5ff0a33c0c5f9c }, // 2619
    Multiplier { upper: 0xbb31b295931f51acf9003a5c05fed89a, lower: 0x76b4c85f22f8de4821e65a1c3009e617 }, // 2620
    Multiplier { upper: 0x95c15baadc190e23fa6695166b3246e1, lower: 0xf890a04c1bfa4b6ce7eb7b49c007eb45 }, // 2621
    Multiplier { upper: 0xef9bc5de2cf4e36cc3d754f0ab83a49c, lower: 0xc0e766e02cc3abe173125edc66731208 }, // 2622
    Multiplier { upper: 0xbfafd17e8a5d82bd697910c089361d4a, lower: 0x33ec524cf09c898128db7f16b85c0e6d }, // 2623
    Multiplier { upper: 0x995974653b7e0231212da7006dc4e43b, lower: 0x5cbd0ea3f3b06e00ed7c65abc6b00b8b }, // 2624
    Multiplier { upper: 0xf55bed6ec59669e83515d800afa16d2b, lower: 0xc794e43985e71667e260a2ac7119ac11 }, // 2625
    Multiplier { upper: 0xc4498abf047854b9c411799a261abdbc, lower: 0x9faa502e04b8deb981e6e889f41489a7 }, // 2626
    Multiplier { upper: 0x9d07a23269f9dd6169a7947b51aefe30, lower: 0x7fbb735803c7189467ebed3b29aa07b9 }, // 2627
    Multiplier { upper: 0xfb3f69ea4329623575d8ed921c4b304d, lower: 0x992bebc0060b5a870cacaec50f7672c1 }, // 2628
    Multiplier { upper: 0xc8ff87ee9c211b5df7e0be0e7d08f371, lower: 0x4756563338091538d6f08bd0d92b8f01 }, // 2629
    Multiplier { upper: 0xa0cc6cbee34daf7e5fe6fe71fda0c2c1, lower: 0x05deab5c2cd410fa458d3ca71422d8ce }, // 2630
    Multiplier { upper: 0x80a38a324f715931e6526527fe1a3567, lower: 0x37e555e357100d950470fd527682470b }, // 2631
    Multiplier { upper: 0xcdd276b6e582284fd6ea3b733029ef0b, lower: 0x8ca223055819af54d3e7fbb72403a4de }, // 2632
    Multiplier { upper: 0xa4a85ef8b79b53731254fc5c2687f26f, lower: 0xa3b4e8d11347bf770fecc95f5002ea4c }, // 2633
    Multiplier { upper: 0x83b9e593c615dc5c0eaa637ceb9ff526, lower: 0x1c90ba40dc3965f8d98a3ab2a668bb70 }, // 2634
    Multiplier { upper: 0xd2c308ec7022fa2ce443d26178ffeea3, lower: 0x60e79067c6c23cc15c105deaa3dac57f }, // 2635
    Multiplier { upper: 0xa89c07238ce8c823e9cfdb812d998bb5, lower: 0xe71fa6b96bce970116737e554fe23799 }, // 2636
    Multiplier { upper: 0x86e338e93d87068321731600f147a2f7, lower: 0xec19522defd878cdab8f98443fe82c7b }, // 2637
    Multiplier { upper: 0xd7d1f4a86271a4050251bcce4ed904bf, lower: 0xe028837cb2f3f47c45b28d39ffd9e0c4 }, // 2638
    Multiplier { upper: 0xaca7f6ed1b8e1cd0cea7ca3ea57a6a33, lower: 0x19ba02ca28c329fd048ed761997b1a36 }, // 2639
    Multiplier { upper: 0x8a1ff8bdafa4e3da3eeca1cbb79521c2, lower: 0x7afb356e870287fd9d3f12b47ac8e1c5 }, // 2640
    Multiplier { upper: 0xdcfff462b2a16c9064adcfac58ee9c6a, lower: 0x5e5ebbe40b373ffc2ecb5120c4749c6e }, // 2641
    Multiplier { upper: 0xb0ccc382288123a6b6f172f0472549ee, lower: 0xb1e5631cd5c5ccc9bf090db3d05d49f2 }, // 2642
    Multiplier { upper: 0x8d709c6820674fb8925ac259d2843b25, lower: 0x5b1de8e3de37d707cc073e29737dd4c2 }, // 2643
    Multiplier { upper: 0xe24dc70d00a54c5a83c46a2950d391d5, lower: 0x5e96416c96bfbe72e00b96a8b8c95469 }, // 2644
    Multiplier { upper: 0xb50b05a400843d153636bb5440a94177, lower: 0x7ede9abd456631f580094553c70776ba }, // 2645
    Multiplier { upper: 0x90d59e1ccd3697442b5efc4366edcdf9, lower: 0x324baefdd11e8e5e00076aa96c05f895 }, // 2646
    Multiplier { upper: 0xe7bc302e15242539defe606bd7e2e328, lower: 0x507917fc81ca7d63333f110f133cc0ee }, // 2647
    Multiplier { upper: 0xb96359be77501dc7e5984d23131be8ed, lower: 0x0d2dacca016ecab5c298da7275ca33f2 }, // 2648
    Multiplier { upper: 0x944f7afec5d9b16cb7ad0a8275afed8a, lower: 0x70f1570801256ef7cee0aec1f7d4f65b }, // 2649
    Multiplier { upper: 0xed4bf7fe095c4f145914dd9d89197c10, lower: 0xb4b5580ccea24b2617cde4698c87f092 }, // 2650
    Multiplier { upper: 0xbdd65ffe6de37276adaa4ae46dadfcda, lower: 0x2a2aacd70bb508eb463e5054706cc075 }, // 2651
    Multiplier { upper: 0x97deb331f182c1f88aeea25057be63e1, lower: 0xbb5557126fc407229e9840438d23cd2a }, // 2652
    Multiplier { upper: 0xf2fdeb831c04698dab176a1a25fd6c9c, lower: 0x5eeef1b71939a50430f39a05ae9faeaa }, // 2653
    Multiplier { upper: 0xc264bc68e336bad7bc12bb481e6456e3, lower: 0x7f258e2c142e1d9cf3f614d1587fbeee }, // 2654
    Multiplier { upper: 0x9b83c9ed82922f12fcdbc9067eb6abe9, lower: 0x328471bcdcf1b14a5cc4dd7446cc98bf }, // 2655
    Multiplier { upper: 0xf8d2dcaf37504b519492db3d978aaca8, lower: 0x50d3e92e2e4f8210946e2f2071475acb }, // 2656
    Multiplier { upper: 0xc70f16f292a6a2a7aa0f15cadfa223b9, lower: 0xda4320f1bea601a6dd24f2805a9f7bd5 }, // 2657
    Multiplier { upper: 0x9f3f458edbb8821fbb3f44a24c81b62e, lower: 0x4835b3f49884ce1f1750c200487f9644 }, // 2658
    Multiplier { upper: 0xfecba27e2c5a69cc5ecba103ad9c56b0, lower: 0x73891fedc0d47cfe8bb4699a0d98f06d }, // 2659
    Multiplier { upper: 0xcbd61b98237b87d6b23c80cfbe16abc0, lower: 0x5c6db3249a439732095d21480ae0c057 }, // 2660
    Multiplier { upper: 0xa311aface92f9fdef4fd33d964deefcd, lower: 0x16be28ea1502df5b3ab0e76cd58099e0 }, // 2661
    Multiplier { upper: 0x82748c8a5426197f2a64297ab718bfd7, lower: 0x4564ed8810cf1915c88d85f0aacd47e6 }, // 2662
    Multiplier { upper: 0xd0ba7a76ed09c26510a0425df1c132f2, lower: 0x08a17c0ce7b1c1bc7415a31aaae20ca3 }, // 2663
    Multiplier { upper: 0xa6fb952bf0d49b840d4d01e4c1675bf4, lower: 0xd3b4633d8627ce305cde1c155581a3b6 }, // 2664
    Multiplier { upper: 0x859610eff3dd4936710a67ea3452aff7, lower: 0x0fc382979e863e8d17181677779ae95e }, // 2665
    Multiplier { upper: 0xd5bce7e652fba8571b43d976ba1de658, lower: 0x1938d0f2973d30e1be8cf0bf25c4a897 }, // 2666
    Multiplier { upper: 0xaafd8651dbfc86ac15cfe12bc817eb79, lower: 0xadc70d8edf64271afed726ff516a2079 }, // 2667
    Multiplier { upper: 0x88cad1db16639ef011731a896cdfef94, lower: 0x8b05a4724c501f48cbdf5265dabb4d2d }, // 2668
    Multiplier { upper: 0xdade1c91bd6c31801beb5da8ae3318ed, lower: 0xab3c3a507a19cba7ac9883d62ac54848 }, // 2669
    Multiplier { upper: 0xaf1816dafdf02799afef7e208b5c13f1, lower: 0x55c9c84061ae3c8623ad3644ef0439d4 }, // 2670
    Multiplier { upper: 0x8c13457bfe59b947bff2cb4d3c49a98d, lower: 0xde3b0699e7be96d1b6242b6a58d02e43 }, // 2671
    Multiplier { upper: 0xe01ed593308f8ed9331e12152d42a8e2, lower: 0xfd2b3dc30c642482bd06abdd5ae6b06b }, // 2672
    Multiplier { upper: 0xb34bde0f5a0c72475c180e775768871b, lower: 0xfdbc3168d6b6839bca6bbcb1158559ef }, // 2673
    Multiplier { upper: 0x8f6fe4d914d6c1d2b0133ec5df86d27c, lower: 0xcafcf453def869496ebc96f411377b26 }, // 2674
    Multiplier { upper: 0xe57fd48e87be02eab351fe0965a483fa, lower: 0xde6186ec97f3dba8b12dbe534ebf2b6f }, // 2675
    Multiplier { upper: 0xb79976d86c9802555c41980784839cc8, lower: 0xb1e79f23acc316208dbe31dc3eff55f3 }, // 2676
    Multiplier { upper: 0x92e12be056e001dde367acd2d0694a3a, lower: 0x27ec7f4fbd68de807164f4b03265de5c }, // 2677
    Multiplier { upper: 0xeb01dfcd57cccfc96bd9148480a876c3, lower: 0x7313fee5fbdafd9a4f07ede6b70963c6 }, // 2678
    Multiplier { upper: 0xbc017fd77970a63abcadaa039a205f02, lower: 0xc2766584c97bfe150c0657ebc5a11c9f }, // 2679
    Multiplier { upper: 0x966799792df3b82efd57bb3614e6b268, lower: 0x9b91ead0a12ffe773cd1dfefd14db07f }, // 2680
    Multiplier { upper: 0xf0a5c25b7cb926b195592b89bb0ab70d, lower: 0xc5b6448101e663f1fae9664c8215e731 }, // 2681
    Multiplier { upper: 0xc0849b7c63c75227aaadbc6e2f3bc5a4, lower: 0x9e2b6a00ce51e98e625451d6ce77ec28 }, // 2682
    Multiplier { upper: 0x9a03af96b6390e86222496be8c2fd150, lower: 0x7e89219a3ea7ee0b81dd0e4571f989b9 }, // 2683
    Multiplier { upper: 0xf66c4c2456c1b0d69d07579746b2e880, lower: 0xca750290643fe3459c94e3a24ff5a928 }, // 2684
    Multiplier { upper: 0xc523701d12348d787d9f7945d228ba00, lower: 0xa1f7354050331c37b0771c81d9915420 }, // 2685
    Multiplier { upper: 0x9db5f34a74f6d79397b2c76b0e86fb33, lower: 0xb4c5c433735c1692f3927d34ae0ddce7 }, // 2686
    Multiplier { upper: 0xfc565210bb248c1f591e0bde7da4c51f, lower: 0x87a2d3858560241e5283fb877ce2fb0a }, // 2687
    Multiplier { upper: 0xc9dea80d6283a34c474b3cb1fe1d6a7f, lower: 0x9fb576046ab3501842032f9f971bfc08 }, // 2688
    Multiplier { upper: 0xa17eecd78202e909d2a296f4cb4abb99, lower: 0x4c912b36bbc2a679ce68f2e6127cc9a0 }, // 2689
    Multiplier { upper: 0x81325712ce68ba6e421babf709089614, lower: 0x3d40ef5efc9bb86171ed8f1e7530a14d }, // 2690
    Multiplier { upper: 0xceb6f1b7b0a790b069c5dff1a80dbced, lower: 0x2ece4bcb2dc5f3cf1caf4b63eeb43548 }, // 2691
    Multiplier { upper: 0xa55f27c626ec73c0549e4cc1533e30bd, lower: 0xbf0b6fd5be37f63f4a25d5e98bc35dd3 }, // 2692
    Multiplier { upper: 0x844c1fd1b8bd2966aa183d6775cb5a31, lower: 0x65a2bfde31c65e99081e44bad635e4a9 }, // 2693
    Multiplier { upper: 0xd3acffb5f461dbd7768d2f0befabc382, lower: 0x3c37996382d6fdc1a696d45e23896ddb }, // 2694
    Multiplier { upper: 0xa95732f7f6b4afdf920a8c098c896934, lower: 0xfcf94782cf12649aebabdd181c6df17c }, // 2695
    Multiplier { upper: 0x8778f5932bc3bfe60e6ed66e0a07875d, lower: 0x972dd2cf0c0eb6e2562317467d24c130 }, // 2696
    Multiplier { upper: 0xd8c188eb79393309b0b157167672722f, lower: 0x5849514b467df16a236b5870c83aceb3 }, // 2697
    Multiplier { upper: 0xad67a0bc60fa8f3af3c112785ec1f4f2, lower: 0xad07743c3864c121b5ef79f3d3623ef6 }, // 2698
    Multiplier { upper: 0x8ab94d6380c872958fcda8604bce5d8e, lower: 0xf0d2c36360509a815e592e5ca91b6592 }, // 2699
    Multiplier { upper: 0xddf5489f3473ea88e615da33ac7d627e, lower: 0x4e1e056bcd4dc402308eb09441c56f4f }, // 2700
    Multiplier { upper: 0xb19106e5c38feed3eb44ae8fbd311b98, lower: 0x3e7e6abca43e366826d88d4367d125d9 }, // 2701
    Multiplier { upper: 0x8e0d9f1e360cbf0fef6a253fca8dafac, lower: 0xfecb8896e9cb5eb9b8ad3dcf8640eb14 }, // 2702
    Multiplier { upper: 0xe348fe96bce131b318a9d532ddaf7f7b, lower: 0x3145a757dc78978f8de1fc7f3d34ab53 }, // 2703
    Multiplier { upper: 0xb5d3fedefd80f48f46ee4428b15932c8, lower: 0xf437b91316c6dfa60b1b3065ca90890f }, // 2704
    Multiplier { upper: 0x9176657f3133f6d9058b69ba277a8f07, lower: 0x29c62da8df057fb808e28d1e3ba6d40c }, // 2705
    Multiplier { upper: 0xe8bd6f31e853248e6f4575f6a590e4d8, lower: 0x42d6af749808cc59a7d0e1c9f90aece0 }, // 2706
    Multiplier { upper: 0xba3125c186a8ea0b8c3791921e0d83e0, lower: 0x35788c5d466d7047b973e7d4c73bf0b4 }, // 2707
    Multiplier { upper: 0x94f41e346bba54d609c60e0e7e71364c, lower: 0xf793a37dd1f1269fc78fecaa38fcc090 }, // 2708
    Multiplier { upper: 0xee53638712c3baf00fa349b0ca4ebd47, lower: 0xf285d262e981d7660c197aa9f4c79a7f }, // 2709
    Multiplier { upper: 0xbea91c6c0f02fbf33fb5d48d6ea56439, lower: 0x8ed1751bee01791e70146221909faecc }, // 2710
    Multiplier { upper: 0x988749f00c026328ffc4aa0abeeab694, lower: 0x72412a7cbe67941859a9e81ada1958a4 }, // 2711
    Multiplier { upper: 0xf40ba9801337050e6607767797ddf0ed, lower: 0x839b772dfd72868d5c430cf7c35bc106 }, // 2712
    Multiplier { upper: 0xc33c8799a8f8d0d8519f91f9464b2724, lower: 0x69492c24cac2053de368d72c9c496738 }, // 2713
    Multiplier { upper: 0x9c306c7aed93da46a7b2db2dd1d5b8e9, lower: 0xedd42350a234d0fe4f87128a16a11f60 }, // 2714
    Multiplier { upper: 0xf9e713f7e2862a0aa5eaf8494fbc5b0f, lower: 0xe2ed054dd0548196e5a4ea768a9b6566 }, // 2715
    Multiplier { upper: 0xc7ec0ff98204ee6eeb22603aa63048d9, lower: 0x825737717376ce125150bb92087c511e }, // 2716
    Multiplier { upper: 0x9ff00cc79b37252588e84cfbb826a0ae, lower: 0x01df5f8df5f8a4db7440960e6d3040e5 }, // 2717
    Multiplier { upper: 0xffe67ad8f8583b6f4173ae5f8d0a9ab0, lower: 0x02feff49898dd492539a89b0aeb39b08 }, // 2718
    Multiplier { upper: 0xccb862472d1362bf678fbeb2d73baef3, lower: 0x3598cc3ad47176db76153af3bef615a0 }, // 2719
    Multiplier { upper: 0xa3c6b505bda91bcc52d9655bdf62f25c, lower: 0x2ae0a362438df8af91aa958fcbf8114d }, // 2720
    Multiplier { upper: 0x83055d9e3154163d0f1451164c4f2849, lower: 0xbbe6e91b693e608c748877a63cc6743e }, // 2721
    Multiplier { upper: 0xd1a22f6382202394e4ed4e8a13b1da0f, lower: 0x930b0e9241fd674720da5909fad72063 }, // 2722
    Multiplier { upper: 0xa7b4f2b601b34faa50bdd86e7627e1a6, lower: 0x0f3c0ba834cab905b3e1e0d4c8ac19e9 }, // 2723
    Multiplier { upper: 0x862a5bc4ce290c884097e0585e864e1e, lower: 0x72966fb9c3d560d15cb4b3dd6d567b21 }, // 2724
    Multiplier { upper: 0xd6aa2c6e16a8140d342633c0973d49ca, lower: 0x50f0b2c2d2ef014efabab962488a5e9a }, // 2725
    Multiplier { upper: 0xabbb56be78867670f684f633ac3107d5, lower: 0x0d8d5bcf0f259aa595622de83a084baf }, // 2726
    Multiplier { upper: 0x8962abcb939ec5272b9d91c2f0273977, lower: 0x3e0aafd8d8eae21e111b57ecfb39d625 }, // 2727
    Multiplier { upper: 0xdbd112df5297a1d845c8e937e6a528be, lower: 0xc9aab2f48e449cfce82bbfe191f6236f }, // 2728
    Multiplier { upper: 0xafda757f75461b136b0720f98550ed65, lower: 0x6e2228c3a503b0ca5356331adb2b4f8c }, // 2729
    Multiplier { upper: 0x8caec465f76b48dc559f4d946aa72451, lower: 0x24e8209c8402f3d50f7828e248ef72d6 }, // 2730
    Multiplier { upper: 0xe117a0a325787493bc3215ba443ea081, lower: 0xd4a69a94066b1fbb4bf3749d417f1e24 }, // 2731
    Multiplier { upper: 0xb412e6e8eac6c3a9635b449503654d34, lower: 0xaa1ee21005227fc9098f907dcdff4b50 }, // 2732
    Multiplier { upper: 0x900f1f20bbd236211c4903aa691dd75d, lower: 0x54e581a66a81ffd407a60d317199090d }, // 2733
    Multiplier { upper: 0xe67e98345fb6bd01c6db3910a82fbefb, lower: 0xbb08cf70aa6999533f70151be8f4db47 }, // 2734
    Multiplier { upper: 0xb86546904c9230ce38af60da20263262, lower: 0xfc070c5a21ee144299267749872a4906 }, // 2735
    Multiplier { upper: 0x938438737074f3d82d591a4819b8284f, lower: 0x3005a37b4e5810354751f9079f550738 }, // 2736
    Multiplier { upper: 0xec06c0b8b3ee52f37bc1c3a68f8d0d4b, lower: 0x8009059216f34d220bb65b3f6554d859 }, // 2737
    Multiplier { upper: 0xbcd233c6f658425c630169520c70d76f, lower: 0x99a0d141abf5d74e6fc515cc5110ad14 }, // 2738
    Multiplier { upper: 0x970e8fd25ead01e382678774d6c0ac59, lower: 0x47b3da9aeff7df71f304117040da2410 }, // 2739
    Multiplier { upper: 0xf1b0e61d644803059d7272548acde08e, lower: 0xd91fc42b198c98b651a01be6ce29d34d }, // 2740
    Multiplier { upper: 0xc15a51b11d0668d14ac1f5106f0b1a0b, lower: 0xe0e63688e13d46f8414ce31f0b54a90b }, // 2741
    Multiplier { upper: 0x9aaea7c0e40520a76f0190d9f26f4809, lower: 0x80b82ba0b43105936770b5b26f76eda2 }, // 2742
    Multiplier { upper: 0xf77dd934a008343f1802815cb7187342, lower: 0x678d129ab9e808ebd8b455ea4bf17c36 }, // 2743
    Multiplier { upper: 0xc5fe475d4cd35cff4668677d5f46c29b, lower: 0x860a754894b9a0bcad5d11883cc1302c }, // 2744
    Multiplier { upper: 0x9e6505e43d75e3ff6b86b9311905687c, lower: 0x6b3b9106dd614d63bde40e069700f356 }, // 2745
    Multiplier { upper: 0xfd6e6fd395896ccbdf3df51b5b3bda60, lower: 0xab9281a495687bd2c96ce33dbe67ebbd }, // 2746
    Multiplier { upper: 0xcabebfdc77a123d64c3190e2af63151a, lower: 0x22db9aea1120630f078a4f64985322fd }, // 2747
    Multiplier { upper: 0xa2323316c61a8311d68e0d8225e8ddae, lower: 0x824948bb40e6b5a59fa1d91d46a8e8cb }, // 2748
    Multiplier { upper: 0x81c1c2789e7b9c0e453e7134eb20b158, lower: 0x683aa095cd855e1e194e474a9eed8709 }, // 2749
    Multiplier { upper: 0xcf9c6a5a972c2ce3a1fd81ee45011bc0, lower: 0xa6c43422e26efcfcf54a0baa97e271a7 }, // 2750
    Multiplier { upper: 0xa616bb7bac23571c81979b250400e300, lower: 0x8569c34f1b8bfd972aa1a2eedfe85aec }, // 2751
    Multiplier { upper: 0x84defc62f01c45b067ac7c1d9ccd8266, lower: 0xd121690c160997ac221ae8bf1986af24 }, // 2752
    Multiplier { upper: 0xd497fa37e693a2b3d913f9c8fae26a3e, lower: 0x1b68a8135675bf79d02b0dfe8f3de505 }, // 2753
    Multiplier { upper: 0xaa132e931edc82297a76616d9581ee98, lower: 0x15ed5342ab9165fb0cef3e653f64b738 }, // 2754
    Multiplier { upper: 0x880f5875b24a01bac85eb457aace5879, lower: 0xab24429bbc745195a3f29850ff83c5c6 }, // 2755
    Multiplier { upper: 0xd9b22722b6dccf91409786f2aae3c0c2, lower: 0xab6d375f93ed4f55d31dc08198d2d60a }, // 2756
    Multiplier { upper: 0xae281f4ef8b0a60dcd46058eef1c9a35, lower: 0x55f0f91943243f77dc17cd347a4244d5 }, // 2757
    Multiplier { upper: 0x8b534c3f2d5a1e717104d13f25b07b5d, lower: 0xde5a60e1028365f97cdfd75d2e9b6a44 }, // 2758
    Multiplier { upper: 0xdeebad31e229ca4f1b3ae865091a5efc, lower: 0x96f7016804056ff594995895175f106c }, // 2759
    Multiplier { upper: 0xb2562427e8216ea5af62538407484bfd, lower: 0x45926786699df32add477a10df7f4057 }, // 2760
    Multiplier { upper: 0x8eab501fece78bb7bf81dc699f6d0997, lower: 0x6adb8605214b28ef176c61a7193299df }, // 2761
    Multiplier { upper: 0xe4454cffe1727925ff362d75cbe1a8f2, lower: 0x4492700835450e4b58ad690b5b842965 }, // 2762
    Multiplier { upper: 0xb69dd7331ac1fa84cc2b57916fe7ba5b, lower: 0x6a0ec00691040b6f7a24540916035451 }, // 2763
    Multiplier { upper: 0x9217df5c1567fb9d7022ac7459862eaf, lower: 0x880bccd20d9cd5f2c81d100744cf76a7 }, // 2764
    Multiplier { upper: 0xe9bfcbc688a65f624d0447208f3d177f, lower: 0x4012e15015c7bcb7a694e67207b25771 }, // 2765
    Multiplier { upper: 0xbaffd6386d51e5e83d9d05b3a5ca7932, lower: 0x99a8b440116c96f95210b85b395b7927 }, // 2766
    Multiplier { upper: 0x9599782d244184b9cae4048fb7d52dc2, lower: 0x1486f699a78a12610e73c6af6115fa86 }, // 2767
    Multiplier { upper: 0xef5bf37b6d35a12944a0074c59551603, lower: 0x540b24290c101d68171fa44bce8990d6 }, // 2768
    Multiplier { upper: 0xbf7cc2c9242ae75436e66c3d1444119c, lower: 0x433c1ceda340178678e61d097207a712 }, // 2769
    Multiplier { upper: 0x99309bd41cef1f769251f030dd034149, lower: 0xcf634a57b5ccdf9ec71e7da128061f42 }, // 2770
    Multiplier { upper: 0xf51a92ecfb183257508319e7c8053542, lower: 0xe56baa25efae3297a4fd95cea6703202 }, // 2771
    Multiplier { upper: 0xc41542572f468eac4068e186399dc435, lower: 0x845621b7f2f1c212ea6477d885268e68 }, // 2772
    Multiplier { upper: 0x9cddceac25d20bbd0053e79e947e3691, lower: 0x36ab4e2cc25b01a8bb8393139db871ed }, // 2773
    Multiplier { upper: 0xfafc7de03c8345fb33b9729753fd241b, lower: 0x8aabb0479d5e690df8d284ec2f8d8315 }, // 2774
    Multiplier { upper: 0xc8c9fe4cfd35d195c2fac212a9975016, lower: 0x088959d2e44b873e60a86a568c7135aa }, // 2775
    Multiplier { upper: 0xa0a1983d975e41449bfbce7554790cde, lower: 0x6d3aae42503c6c31e6ed21ded6c0f7bc }, // 2776
    Multiplier { upper: 0x80814697ac4b676a16630b911060d718, lower: 0x57622501d9c9f027ebf0e7e5789a5fc9 }, // 2777
    Multiplier { upper: 0xcd9ba425e078a5768a381281b3ce24f3, lower: 0xbf036e695c764d0cacb4a63bf42a32db }, // 2778
    Multiplier { upper: 0xa47c83518060845ed4f9a867c30b50c2, lower: 0xff35f1ede391d73d56f6eb6329bb5be3 }, // 2779
    Multiplier { upper: 0x8396cf7466b39d18aa61538635a2a702, lower: 0x65c4c18b1c74ac31125f22b5bafc4982 }, // 2780
    Multiplier { upper: 0xd28ae5870ab8fb5aaa35527055d10b37, lower: 0x093acf44fa5446b4ea31d122c4c6dc04 }, // 2781
    Multiplier { upper: 0xa86f1e05a22d95e221c441f377da6f5f, lower: 0x3a95729d95103890bb5b0db56a38b003 }, // 2782
    Multiplier { upper: 0x86bf4b37b4f144b4e7d034c2c6485918, lower: 0xfbaac217aa736073c915a49121c6f336 }, // 2783
    Multiplier { upper: 0xd798785921820787d94d2137a3a6f4f4, lower: 0xc5de035910b89a52db55d41b693e51ef }, // 2784
    Multiplier { upper: 0xac79f9e0e79b39397aa41a92e9525d90, lower: 0x9e4b35e0da2d48424911767c5431db26 }, // 2785
    Multiplier { upper: 0x89fb2e4d8615c7612ee9aedbeddb7e0d, lower: 0x4b6f5e4d7b576d01d40df863768e48eb }, // 2786
    Multiplier { upper: 0xdcc516e27022d89b7e42b15fe2f8c9ae, lower: 0xdf1896e25ef24802ece327058a7d4178 }, // 2787
    Multiplier { upper: 0xb09dabe859b57a15fe9bc1198260a158, lower: 0xb27a124eb25b6ccf23e8ec046eca9ac6 }, // 2788
    Multiplier { upper: 0x8d4aefed14912e77fee300e1351a1aad, lower: 0x5b94db72284923d8e9872336bf087bd2 }, // 2789
    Multiplier { upper: 0xe2117fe1ba81e3f3316b349b8829c448, lower: 0x9287c58373a8395b0f3e9ebdfe73f950 }, // 2790
    Multiplier { upper: 0xb4daccb49534b65c2788f6e2d3549d06, lower: 0xdb9fd135f6202de272987efe65299440 }, // 2791
    Multiplier { upper: 0x90af0a2a10f6f849b93a5f1bdc43b0d2, lower: 0x494ca75e5e8024b52879ff31ea87a9cd }, // 2792
    Multiplier { upper: 0xe77e76a9b4be5a0f8ec3cb5fc6d2b483, lower: 0xa87aa563ca66a121da5ccb8310d90fae }, // 2793
    Multiplier { upper: 0xb931f887c3cb7b3fa5696f7fd2422a02, lower: 0xed2eeab63b854db4aeb0a2cf40ada625 }, // 2794
    Multiplier { upper: 0x9427fa06363c6299512125ffdb68219b, lower: 0xf0f2555e96043e2a255a1bd9008aeb51 }, // 2795
    Multiplier { upper: 0xed0cc33d2393d0f54e9b6fffc57368f9, lower: 0x8183bbca89a06376a229c62800de454e }, // 2796
    Multiplier { upper: 0xbda3cf641c7640c43ee2bfffd12920c7, lower: 0x9acfc96ed4804f921b549e8667183771 }, // 2797
    Multiplier { upper: 0x97b63f8349f833d0324effffda874d6c, lower: 0x7bd96df24399d941af76e5385279c5f4 }, // 2798
    Multiplier { upper: 0xf2bd326ba98d1fb383b199995da548ad, lower: 0x92f57cb6d28fc202b257d526ea5c6fed }, // 2799
    Multiplier { upper: 0xc230f522ee0a7fc2cfc147ade4843a24, lower: 0x75913092420c9b355b7977525516bff1 }, // 2800
    Multiplier { upper: 0x9b5a5db58b3b9968a6343957ea0361b6, lower: 0xc47426db680a15c4492df90eaa78998e }, // 2801
    Multiplier { upper: 0xf89095ef452c28a770538ef310056924, lower: 0x6d86a492401022d3a8498e7ddd8dc27c }, // 2802
    Multiplier { upper: 0xc6da118c375686ec59dc725c0cd120e9, lower: 0xf13883a833401bdc86a13ecb17a49b97 }, // 2803
    Multiplier { upper: 0x9f14dad692ab9f237b16c1e33d741a54, lower: 0xc0fa02ecf5cce316d21a98a279507c79 }, // 2804
    Multiplier { upper: 0xfe87c48a8445cb6bf824696b95869087, lower: 0x9b299e47efae3824835dc103f54d93f4 }, // 2805
    Multiplier { upper: 0xcb9fd06ed037d5eff9b6babc779eda06, lower: 0x15bae50659582cea02b167365dd7a990 }, // 2806
    Multiplier { upper: 0xa2e64058a693118cc7c562305fb24804, lower: 0xde2f1d9eade023ee688dec2b7e462140 }, // 2807
    Multiplier { upper: 0x8251cd13b875a7a3d3044e8d195b6cd0, lower: 0xb1bf4ae557e68325207189bc6504e767 }, // 2808
    Multiplier { upper: 0xd082e1b92722a5d2eb3a1748289247b4, lower: 0x4f9877d55970d1d500b5a92d6e6e3f0a }, // 2809
    Multiplier { upper: 0xa6cf1afa85b5517588fb45d353a8395d, lower: 0x0c79f9777ac0a7dd9a2aedbdf1f1cc08 }, // 2810
    Multiplier { upper: 0x85727bfb9e2aa7913a629e42a9536117, lower: 0x3d2e612c6233b97e14ef2497f4c17007 }, // 2811
    Multiplier { upper: 0xd583f99296aaa5b52a37639ddbb89b58, lower: 0x61e3cead69ec5bfcee4b6dbfee024cd7 }, // 2812
    Multiplier { upper: 0xaacffadbabbbb7c421c5e94b162d4913, lower: 0x81830bbdee56affd8b6f8afff19b70ac }, // 2813
    Multiplier { upper: 0x88a66249562fc636816b2108de8aa0dc, lower: 0x679c0964beabbffe092608ccc14926f0 }, // 2814
    Multiplier { upper: 0xdaa3d07556b2d6bd9bde9b4164110160, lower: 0xa5c6756dfddf99967509a7ae020ea4b3 }, // 2815
    Multiplier { upper: 0xaee973911228abcae3187c34500d9ab3, lower: 0xb7d1f78b317fae11f73aec8b34d883c3 }, // 2816
    Multiplier { upper: 0x8bedf60da820896f1c139690400ae229, lower: 0x5fdb2c6f5acc8b4192958a08f7139c9c }, // 2817
    Multiplier { upper: 0xdfe323490d00dbe4f9b8f0e6ccde36a8, lower: 0x995ead7ef7adab9c1dbc100e581f60f9 }, // 2818
    Multiplier { upper: 0xb31c1c3a70cd7cb72e2d8d8570b1c553, lower: 0xade55798c6248949b163400b79b2b3fb }, // 2819
    Multiplier { upper: 0x8f49b02ec0a463c5be8ad79df3c16aa9, lower: 0x57eaac7a381d3aa15ab5ccd5faf55cc9 }, // 2820
    Multiplier { upper: 0xe542b37e0107060930de25c986024442, lower: 0x26444729f361f7689122e1565e556141 }, // 2821
    Multiplier { upper: 0xb7688f9800d26b3a8d7e84a13801d034, lower: 0xeb69d287f5e7f920741be7784b778101 }, // 2822
    Multiplier { upper: 0x92ba0c799a41ef620acb9d4dc667d9c3, lower: 0xef87db9ff7ecc74d29afec603c5f9a67 }, // 2823
    Multiplier { upper: 0xeac34728f6cfe569aadf62160a3fc2d3, lower: 0x18d95f66597ad87b75e647006098f70b }, // 2824
    Multiplier { upper: 0xbbcf6c20c5731dee224c4e7808330242, lower: 0x7a477f85146246c92b1e9f33807a5f3c }, // 2825
    Multiplier { upper: 0x963f89b3d128e4be81d6a52cd35c01ce, lower: 0xc83932d0dd1b6bd4227ee5c2cd2eb297 }, // 2826
    Multiplier { upper: 0xf065a91fb50e3aca69576eae1ef99c7e, lower: 0x0d28514e2e92462037316f9e15178424 }, // 2827
    Multiplier { upper: 0xc05154195da4fbd52112bef1b26149fe, lower: 0x70ed0dd82541d1b35f5abfb1aa793683 }, // 2828
    Multiplier { upper: 0x99daa9ade483fcaa80dbcbf48eb43b31, lower: 0xf3f0d7e01dce415c4c48995aeec75ecf }, // 2829
    Multiplier { upper: 0xf62aa9163a6cc7773492dfedb1205eb6, lower: 0x531af3002fb06893ad40f55e4ad897b2 }, // 2830
    Multiplier { upper: 0xc4eeedab61f09f9290757ff15a804bc5, lower: 0x0f48c2668c8d20762433f77ea246dfc2 }, // 2831
    Multiplier { upper: 0x9d8bf155e7f3b2dba6c4665aaecd096a, lower: 0x72a09b853d3db391b68ff9321b6be635 }, // 2832
    Multiplier { upper: 0xfc131bbca652b7c5d7a0a3c44ae1a8aa, lower: 0x5100f8d52ec91f4f8a7ff51cf8aca387 }, // 2833
    Multiplier { upper: 0xc9a8e2fd51dbc637dfb3b636a24e2088, lower: 0x40cd93ddbf074c3fa1fff74a608a1c6c }, // 2834
    Multiplier { upper: 0xa153e8caa7e304f97fc2f82bb50b4d39, lower: 0xcd714317cc05d6994e665f6eb3a1b057 }, // 2835
    Multiplier { upper: 0x810fed6eecb59d94663593562a6f70fb, lower: 0x0ac102797004abadd851e5f2294e26ac }, // 2836
    Multiplier { upper: 0xce7fe24b1455c8ed7055b889dd7f1b2b, lower: 0x446803f58007791626e96fe9dbb03ddf }, // 2837
    Multiplier { upper: 0xa5331b6f4377d3f126aafa07e465af55, lower: 0xd053365e0005fa781f212654afc03180 }, // 2838
    Multiplier { upper: 0x8428e2bf692ca98db888c80650515911, lower: 0x7375c5180004c86018e751dd59668e00 }, // 2839
    Multiplier { upper: 0xd3749dff0eaddc15f40e0cd6e6e88e82, lower: 0x52560826666e0d668e3ee96228a41666 }, // 2840
    Multiplier { upper: 0xa92a17ff3ef17cde5cd80a458586d868, lower: 0x41de6ceb8524d7853e98bab4ed5011eb }, // 2841
    Multiplier { upper: 0x8754dfff658dfd7eb0acd5046ad246b9, lower: 0xce4b8a56041d79376546fbc3f10cdb23 }, // 2842
    Multiplier { upper: 0xd887cccbd5affbfde77aee6d77b6d78f, lower: 0xb078dd566cfbf5256ed7f93981ae2b6a }, // 2843
    Multiplier { upper: 0xad3970a311599664b92f25245fc5793f, lower: 0xc060b111f0c990eabf132dc79af1bc55 }, // 2844
    Multiplier { upper: 0x8a945a1c0de1451d60f2841d196ac766, lower: 0x33808da7f3d473eeff428b06158e3044 }, // 2845
    Multiplier { upper: 0xddba29c67c9ba1c89b1da02e8f113f09, lower: 0xec00e2a652ed864b320411a355b04d3a }, // 2846
    Multiplier { upper: 0xb161bb05307c816d48e480253f40ff3b, lower: 0x2333e8850f246b6f5b367482aaf370fb }, // 2847
    Multiplier { upper: 0x8de7c8d0f396cdf1071d3350ff673295, lower: 0xb5c3206a72838925e291f6ceef29272f }, // 2848
    Multiplier { upper: 0xe30c748185be164e71c8521b323eb755, lower: 0xef9e9a43ea6c0ea3041cbe17e50ea518 }, // 2849
    Multiplier { upper: 0xb5a390679e31ab71f4a041af5b655f77, lower: 0xf2e5483655233ee8d016fe79840bb747 }, // 2850
    Multiplier { upper: 0x914fa6b94b5aef8e5d4d015915eab2c6, lower: 0x5beaa02b774f65870cdf31fad0095f6c }, // 2851
    Multiplier { upper: 0xe87f712878917f4a2ee19bc1bcaab7a3, lower: 0xc6443378bee56f3e7afeb65e19a898ac }, // 2852
    Multiplier { upper: 0xb9ff8db9fa0dff6e8be7afce308892e9, lower: 0x6b69c2c6ff1df29862655eb1ae207a23 }, // 2853
    Multiplier { upper: 0x94cc716194d7ff8ba31fbfd826d3a8ba, lower: 0xbc549bd265b18ee04eb77ef48b4d2e83 }, // 2854
    Multiplier { upper: 0xee13e89c215998df6b65ffc03e1f745d, lower: 0xfa20f950a2b5b166e458cb20dee1e404 }, // 2855
    Multiplier { upper: 0xbe7653b01aae13e5ef84cc99cb4c5d17, lower: 0xfb4d9440822af452504708e718b4b66a }, // 2856
    Multiplier { upper: 0x985ea959aef1a984bf9d707b0909e413, lower: 0x2f714366ce88c3750d05a0b8e09091ee }, // 2857
    Multiplier { upper: 0xf3caa88f7e4f75a1329580c4db430685, lower: 0x18b538a47da79f21ae6f678e341a8317 }, // 2858
    Multiplier { upper: 0xc30886d931d92ae75baacd6a49026b9d, lower: 0xad5dc6e9fe1fb28158591fa4f67b9c12 }, // 2859
    Multiplier { upper: 0x9c06d2475b142252afbbd7883a685617, lower: 0xbde49f2198195b9aad141950c52fb00f }, // 2860
    Multiplier { upper: 0xf9a483a55e869d51192c8c0d2a4089bf, lower: 0x963a9835c028929114ecf54e084c4ce4 }, // 2861
    Multiplier { upper: 0xc7b6cfb77ed217741423a33dbb66d499, lower: 0x44fbacf7cced420daa572aa4d3703d83 }, // 2862
    Multiplier { upper: 0x9fc572f93241ac5cdce94f6495ebdd47, lower: 0x6a62f0c63d8a9b3e21df5550a926979c }, // 2863
    Multiplier { upper: 0xffa2518eb6cf7a2e2e4218a0efdfc872, lower: 0x43d1813d2f442b969c9888810ea425c7 }, // 2864
    Multiplier { upper: 0xcc81dad8923f94f1be9b46e7264ca05b, lower: 0x6974676425d022dee3ad3a00d883516c }, // 2865
    Multiplier { upper: 0xa39b157a0e9943f4987c38b8eb708049, lower: 0x2129ec501e401be582f0fb33e0690df0 }, // 2866
    Multiplier { upper: 0x82e27794d87a9cc3ad302d60bc5a003a, lower: 0x80ee56a67e99afeacf272f5cb3873e5a }, // 2867
    Multiplier { upper: 0xd16a58ee272a946c484d156793c33390, lower: 0xce4a243d975c4caae50b7efab8d863c2 }, // 2868
    Multiplier { upper: 0xa7884724ec221056a03daab943028fa7, lower: 0x0b6e83647916a3bbea6f98c893e04fcf }, // 2869
    Multiplier { upper: 0x86069f50bce80d1219caeefa9c020c85, lower: 0xa2becf8394121c96552613d3a9803fd9 }, // 2870
    Multiplier { upper: 0xd670fee794a67b502944b190f99ce0d5, lower: 0xd1314c05b9b69423bb701fb90f33995b }, // 2871
    Multiplier { upper: 0xab8d98b943b862a6876a27a72e171a44, lower: 0xa75aa337c7c5434fc9267fc73f5c7aaf }, // 2872
    Multiplier { upper: 0x893e13c769604eeb9f881fb8f1ac1503, lower: 0xb9154f5fd30435d96db86638ff7d2ef2 }, // 2873
    Multiplier { upper: 0xdb96860bdbcd4b1298d9cc5b1c468805, lower: 0xf4eee5661e6d22f57c5a3d27ff2eb184 }, // 2874
    Multiplier { upper: 0xafab9e6fe30aa2754714a37c169ed337, lower: 0xf7258451b1f0e8c4637b641fff588e03 }, // 2875
    Multiplier { upper: 0x8c894b8cb5a21b9105aa1c63454bdc2c, lower: 0xc5b79d0e27f3ed69e92f834ccc46d802 }, // 2876
    Multiplier { upper: 0xe0dbac1455d02c1b3c43609ed5462d14, lower: 0x6f8c2e7d0cb97bdca84c0547ad3e266a }, // 2877
    Multiplier { upper: 0xb3e2f01044a689af63691a18aa9e8a76, lower: 0xbfa358640a2dfcb086a3376c8a981ebb }, // 2878
    Multiplier { upper: 0x8fe8c00d03b86e25e920e1ad554ba1f8, lower: 0x994f79e9a1be63c06bb5c5f06ee01896 }, // 2879
    Multiplier { upper: 0xe641334805f3e36fdb67cf7bbbac365a, lower: 0x8ee58fdc35fd6c6712bc6fe717ccf423 }, // 2880
    Multiplier { upper: 0xb83429066b2982bfe2b972c962f02b7b, lower: 0xa5847316919789ec0efd26527970c34f }, // 2881
    Multiplier { upper: 0x935ced9ebc2135664efac23ab58cef96, lower: 0x1e038f45414607f00bfdb841fac09c3f }, // 2882
    Multiplier { upper: 0xebc7e297936855707e5e0391227b18f0, lower: 0x3005b20868700cb34662c06991342d32 }, // 2883
    Multiplier { upper: 0xbc9fe87942b9ddf3984b360db52f4726, lower: 0x8cd15b39ed26708f6b823387a75cf0f5 }, // 2884
    Multiplier { upper: 0x96e6539435617e5c79d5c4d7c425d285, lower: 0x3d7448fb241ec072bc68293952b0c0c4 }, // 2885
    Multiplier { upper: 0xf17085b9ef0263c7295607bfa03c8408, lower: 0x6253a7f839cacd8460a6a85bb781346d }, // 2886
    Multiplier { upper: 0xc126d1618c01e96c21119fcc803069a0, lower: 0x4ea9532cfb08a469e6ebb9e2f93429f1 }, // 2887
    Multiplier { upper: 0x9a85744e099b21234da7b30a0026bae6, lower: 0xa554428a626d5054b8bc94b59429bb27 }, // 2888
    Multiplier { upper: 0xf73bed49a8f83505490c51a999d79171, lower: 0x0886d0dd6a4880878dfa8788ed0f91d8 }, // 2889
    Multiplier { upper: 0xc5c98aa153f9c4043a7041547b12dac0, lower: 0xd39f0d7deea066d2d7fb9fa0bda60e46 }, // 2890
    Multiplier { upper: 0x9e3ad54ddcc7d00361f36776c8dbe233, lower: 0xdc7f3dfe588052424662e61a3151a505 }, // 2891
    Multiplier { upper: 0xfd2aeee2fad94cd236523f2474930386, lower: 0x2d9863308d9a1d36d704a35d1bb5d4d5 }, // 2892
    Multiplier { upper: 0xca88bf1bfbe10a41c50e98e9f6dc02d1, lower: 0xbe13828d3e14e42bdf36e917495e43dd }, // 2893
    Multiplier { upper: 0xa206ff49964da1ce373ee0bb2be33574, lower: 0x980f9ba431aa502318f8ba79077e9cb1 }, // 2894
    Multiplier { upper: 0x819f32a1450ae7d82c324d628982912a, lower: 0x133fafb68e21d9b5ad93c860d2cbb08e }, // 2895
    Multiplier { upper: 0xcf651dced4de3fc046b6e237426a81dc, lower: 0xeb991924169c8f8915b9409aeadf80e3 }, // 2896
    Multiplier { upper: 0xa5ea7e3f10b1cc99d22be82c3522017d, lower: 0x894747501216d93a77c766e2557f9a4f }, // 2897
    Multiplier { upper: 0x84bb983273c1707b0e898689c41b3464, lower: 0x6dd29f7341abe0fb9305ebe84466150c }, // 2898
    Multiplier { upper: 0xd45f59ea52cf1a5e7da8d742d35eba3a, lower: 0x4950ff1ecf7967f8eb3caca6d3d68813 }, // 2899
    Multiplier { upper: 0xa9e5e188423f484b97ba45cf0f7efb61, lower: 0xd440cc18a5fab993ef63bd5243120676 }, // 2900
    Multiplier { upper: 0x87eb1ad36832a03c7961d17272cbfc4e, lower: 0x436709ad5195614325e96441cf419ec5 }, // 2901
    Multiplier { upper: 0xd9782aebd9ea99fa5bcfb583eadffa16, lower: 0xd23e75e21c2235383ca8a0694b9c313a }, // 2902
    Multiplier { upper: 0xadf9bbefe1887b2eafd95e03224cc812, lower: 0x41cb9181b01b5dc696ed4d210949c0fc }, // 2903
    Multiplier { upper: 0x8b2e2ff31ad395bef3144b35b50a39a8, lower: 0x34a2dace267c4b05458aa41a6dd49a63 }, // 2904
    Multiplier { upper: 0xdeb04cb82aec22cb1e86debc54dd290d, lower: 0x21049149d72d44d53c110690afba909e }, // 2905
    Multiplier { upper: 0xb226a3c688bce8a27ed24bc9dd7dba70, lower: 0xe736daa178f103ddc9a73873bfc873b2 }, // 2906
    Multiplier { upper: 0x8e854fd206fd86e86575096e4acafb8d, lower: 0x85c57bb460c0cfe4a152938fcca05c8e }, // 2907
    Multiplier { upper: 0xe4087fb67195a4a708bb424a1144c5af, lower: 0x3c6f2c53ce014ca1021db8e61433c74a }, // 2908
    Multiplier { upper: 0xb66d32f85ade1d526d629b6e7437048c, lower: 0x3058f0430b343d4d9b4afa51a9c305d5 }, // 2909
    Multiplier { upper: 0x91f0f5937be4e441f11baf8b902c03a3, lower: 0x59e0c035a290310ae2a261daee359e44 }, // 2910
    Multiplier { upper: 0xe98188ebf96e3a031b5f7f45b3799f6b, lower: 0xc30133890419e8116a9d695e49ef63a0 }, // 2911
    Multiplier { upper: 0xbace07232df1c8027c4c65d15c614c56, lower: 0x359a8fa0d014b9a7887dede507f2b619 }, // 2912
    Multiplier { upper: 0x95719f4f57f4a001fd09eb0de38109de, lower: 0x914872e70cdd6152d397f184065bc4e1 }, // 2913
    Multiplier { upper: 0xef1c32188cba999cc80fde7c9f34dc97, lower: 0x4eda5171ae2f021e1f59826cd6f93b02 }, // 2914
    Multiplier { upper: 0xbf49c1ad3d62147d6cd97eca18f716df, lower: 0x72484127be8c01b1b2ae01f0abfa959b }, // 2915
    Multiplier { upper: 0x9907ce24311b43978a4798a1ad9278b2, lower: 0xc1d36752fed667c15bbe67f3bcc877af }, // 2916
    Multiplier { upper: 0xf4d949d381c538f276d8f435e283f451, lower: 0x361f0bb7fe23d9355f970cb92e0d8c4b }, // 2917
    Multiplier { upper: 0xc3e107dc67d0fa5b924729c4b5365d0d, lower: 0xc4e5a2f9981cadc44c78d6fa8b3e09d6 }, // 2918
    Multiplier { upper: 0x9cb40649eca72eafa838ee36f75eb0d7, lower: 0xd0b7b59479b08b037060abfba29807df }, // 2919
    Multiplier { upper: 0xfab9a3a97aa5177f738e49f18bcab48c, lower: 0x8125ef53f5e744d24d6779929dc00c97 }, // 2920
    Multiplier { upper: 0xc89482edfbb745ff8fa507f46fd55d3d, lower: 0x341e590ff7ec370ea452c7a87e333d46 }, // 2921
    Multiplier { upper: 0xa076cf24c95f6b32d950d329f3111764, lower: 0x29b1e0d993235f3ee9dbd2ed31c2976b }, // 2922
    Multiplier { upper: 0x805f0c1d6de5ef5be10d75bb28da791c, lower: 0xee27e71475b5e5cbee49758a8e3545ef }, // 2923
    Multiplier { upper: 0xcd64e02f163cb22c9b48bc5ea7c3f4fb, lower: 0x16a63e8722bca2dfe3a8bc10e3886fe5 }, // 2924
    Multiplier { upper: 0xa450b358de96f4f07c3a304bb96990c8, lower: 0xdeeb6538e896e8b31c86fcda4fa05984 }, // 2925
    Multiplier { upper: 0x8373c2ad7edf2a59fcfb59d62dee0d6d, lower: 0x7f22b760ba1253c27d38ca483fb37ad0 }, // 2926
    Multiplier { upper: 0xd252d11597cb76f661922956afe348af, lower: 0x31d12567901d52d0c85add4065ebf7b3 }, // 2927
    Multiplier { upper: 0xa84240de13092bf84e0e87788cb5d3bf, lower: 0x5b0db7860ce44240a048b100518992f6 }, // 2928
    Multiplier { upper: 0x869b67180f3a899371a5392d3d5e42ff, lower: 0x7c0af9380a503500803a2733746e0f2b }, // 2929
    Multiplier { upper: 0xd75f0b59b1f7428582a1f5152efd37ff, lower: 0x2cde5b8cdd4d219a66c371ebed7ce512 }, // 2930
    Multiplier { upper: 0xac4c09148e5f686acee7f74425975fff, lower: 0x5718493d7dd74e151f02c1898aca50db }, // 2931
    Multiplier { upper: 0x89d66daa0b7f86bbd8b9929ceadf7fff, lower: 0x78e03a9797df71aa7f3567a13bd50d7c }, // 2932
    Multiplier { upper: 0xdc8a49101265a45fc128ea94aaff3332, lower: 0x5b005dbf596582aa65223f685fbb48c6 }, // 2933
    Multiplier { upper: 0xb06ea0d9a851504c9a87221088cc28f5, lower: 0x1599e499145135551db4ff86b2fc3a38 }, // 2934
    Multiplier { upper: 0x8d254d7aed0dd9d6e205b4da0709ba5d, lower: 0xaae183ada9da9110e490cc6bc26361c7 }, // 2935
    Multiplier { upper: 0xe1d548c4ae7c8fbe366f87c33e75f6fc, lower: 0x449c05e2a95db4e7d41ae0ac6a389c71 }, // 2936
    Multiplier { upper: 0xb4aaa09d5863a631c5260635cb919263, lower: 0x6a166b1bbab15d864348b3bd21c6e38e }, // 2937
    Multiplier { upper: 0x9088807de04fb827d0eb382b094141e9, lower: 0x21ab88e2fbc1179e9c3a29641b0582d8 }, // 2938
    Multiplier { upper: 0xe740cd9633b2c03fb4ab8d11a8686975, lower: 0x02ac0e37f934f297605d0f0691a26af3 }, // 2939
    Multiplier { upper: 0xb900a478295bccffc3bc70daed20545d, lower: 0x9bbcd82cc75d8edf804a726ba7b5225c }, // 2940
    Multiplier { upper: 0x94008393544970cc9c96c0af2419dd17, lower: 0xafca468a3917a57f99d528561fc41b7d }, // 2941
    Multiplier { upper: 0xeccd9f522075814760f1344b6cf62e8c, lower: 0x4c76d7438e8c3bff5c884089cc6cf8c7 }, // 2942
    Multiplier { upper: 0xbd714c41b39134391a5a903c572b5870, lower: 0x3d2bdf693ed69665e3a033a170572d6c }, // 2943
    Multiplier { upper: 0x978dd69af60dc360e1e20cfd1289138c, lower: 0xfdbcb2ba98abab84b619c2e78d128abd }, // 2944
    Multiplier { upper: 0xf27c8a9189af9f016969ae61b741b8e1, lower: 0x95fab790f445df3abcf604a5ae84112e }, // 2945
    Multiplier { upper: 0xc1fd3ba7a1594c012121584e2c3493e7, lower: 0xab2ef940c36b18fbca5e6a1e25367425 }, // 2946
    Multiplier { upper: 0x9b30fc861aadd6674db446a4f02a0fec, lower: 0x88f261009c55ad963b7ebb4b50f85ceb }, // 2947
    Multiplier { upper: 0xf84e60d6911623d87c53a43b19dce647, lower: 0x4183ce67608915bd2bfdf878818d6177 }, // 2948
    Multiplier { upper: 0xc6a51a4540de831396a9502f47e3eb6c, lower: 0x346971ec4d3a77ca8997f9fa013de793 }, // 2949
    Multiplier { upper: 0x9eea7b6a9a4b9c0fabbaa68c398322bc, lower: 0xf6bac189d761f96ed47994c800fe52dc }, // 2950
    Multiplier { upper: 0xfe43f8aa9078f9b2ac5dd746c26b6ac7, lower: 0xf12acf42f2365be48728ee0cce63b7c6 }, // 2951
    Multiplier { upper: 0xcb6993bba6c72e2889e4ac389b892239, lower: 0x8dbbd9025b5eafea05ba580a3eb62c9e }, // 2952
    Multiplier { upper: 0xa2badc961f05be86d4b6f02d493a81c7, lower: 0xa496473515e559880495133b655e8a18 }, // 2953
    Multiplier { upper: 0x822f16de7f37cb9f109259bdd42ece39, lower: 0x507838f744b77ad336dda8fc51186e7a }, // 2954
    Multiplier { upper: 0xd04b57ca652612981a83c2c9537e16c2, lower: 0x1a59f4bed458c4852495db2d4e8d7d90 }, // 2955
    Multiplier { upper: 0xa6a2aca1ea84dbace203023aa931abce, lower: 0x7b7b2a32437a36d0ea117c243ed797a6 }, // 2956
    Multiplier { upper: 0x854ef081886a49571b359b6220f48971, lower: 0xfc62882835fb5f0d880dfce9cbdfac85 }, // 2957
    Multiplier { upper: 0xd54b1a68da43a88b5ebc2bd034ba7583, lower: 0x2d6a7373899231af4016617612ff7a6e }, // 2958
    Multiplier { upper: 0xaaa27b871502ed3c4bc9bca690952acf, lower: 0x57885c5c6e0e8e25ccdeb45e75992ebf }, // 2959
    Multiplier { upper: 0x8881fc6c10cf24303ca163b873aa88a5, lower: 0xdfa049e38b3ed81e3d7ef6b1f7adbeff }, // 2960
    Multiplier { upper: 0xda6993e01ae506b394356c5a52aa743c, lower: 0x99007638decaf3639597f11cbf7c64cb }, // 2961
    Multiplier { upper: 0xaebadcb348b7388fa9c456aea8885cfd, lower: 0x473391c718a25c4faadff416ff96b709 }, // 2962
    Multiplier { upper: 0x8bc8b08f6d5f6072ee36abbeed39e3fd, lower: 0xd28fa7d27a1b7d0c88b329abffabc5a1 }, // 2963
    Multiplier { upper: 0xdfa780e57bcbcd84b05779317b8fd32f, lower: 0xb74c3fb729c594e0dab842accc460901 }, // 2964
    Multiplier { upper: 0xb2ec671dfca30ad08d12c75ac93fdc26, lower: 0x2c3cffc5bb04771a4893688a3d04d401 }, // 2965
    Multiplier { upper: 0x8f2385b196e8d573a40f05e23a997ceb, lower: 0x56973304959d2c1506dc53a1ca6a4334 }, // 2966
    Multiplier { upper: 0xe505a2b5be415585d34b3c9d2a8f2e45, lower: 0x575851a0ef61e021a493b902dd76d1ec }, // 2967
    Multiplier { upper: 0xb737b55e31cdde04a908fd4a88728b6a, lower: 0xac46a7b3f2b4b34e1d42fa68b12bdb24 }, // 2968
    Multiplier { upper: 0x9292f77e8e3e4b36eda0caa206c20922, lower: 0x236bb95cc22a290b4a9bfb86f42315b6 }, // 2969
    Multiplier { upper: 0xea84bf30e396debe4901443671367503, lower: 0x6bdf8efad04374deddc65f3e536b55f0 }, // 2970
    Multiplier { upper: 0xbb9d65c0b6124bcb6d9a9cf85a91f735, lower: 0xefe60bfbd9cf90b24b0518fea922ab27 }, // 2971
    Multiplier { upper: 0x9617849a2b41d63c57aee3f9e20e5f5e, lower: 0x5984d66314a60d5b6f37473220e888ec }, // 2972
    Multiplier { upper: 0xf025a0f6ab9c89fa25e49ff6367d6563, lower: 0xc26e23d1baa348924b8ba51d01740e46 }, // 2973
    Multiplier { upper: 0xc01e1a5eefb06e61b7ea1991c5311de9, lower: 0x68581ca7c882a075093c8417345cd838 }, // 2974
    Multiplier { upper: 0x99b1aeb25959f1e7c654e1416a8db187, lower: 0x86ace3b96d354d2a6dca0345c37d79c6 }, // 2975
    Multiplier { upper: 0xf5e91783c229830c7087cecf10e2b5a5, lower: 0xa447d2c248554843e2dcd20938c8c2d7 }, // 2976
    Multiplier { upper: 0xc4ba793634ee02705a063f0c0d822aea, lower: 0xe9d30f01d3776d031be3db3a93d3cf12 }, // 2977
    Multiplier { upper: 0x9d61fa91c3f19b8d14d1cc09a4682255, lower: 0x87dc0c0175f924027cb648fba9763f42 }, // 2978
    Multiplier { upper: 0xfbcff74f9fe8f8e1bae94675d3d9d088, lower: 0xd9601335898ea003fabd4192a8bd3203 }, // 2979
    Multiplier { upper: 0xc9732c3fb320c71afbedd1f7dcae406d, lower: 0x7ab342913ad880032efdce0eed642802 }, // 2980
    Multiplier { upper: 0xa128f032f5b3d27bfcbe419316f1cd24, lower: 0x6229020dc8ad3335bf3171a58ab68668 }, // 2981
    Multiplier { upper: 0x80ed8cf5915ca86330983475abf4a41d, lower: 0x1b5401a4a08a8f5e328df4846ef86b87 }, // 2982
    Multiplier { upper: 0xce48e188e894409eb426ba55dfedd361, lower: 0xc55335d43410e5638416540717f3df3e }, // 2983
    Multiplier { upper: 0xa5071ad3ed4366e55cebc844b324a91b, lower: 0x04429176900d844f9cdea99f465cb298 }, // 2984
    Multiplier { upper: 0x8405af0ff102b8b77d896d03c283ba7c, lower: 0x0368745ed9a469d94a4bbae5d1e3c213 }, // 2985
    Multiplier { upper: 0xd33c4b4cb4d1278bfc0f14d2d0d2c3f9, lower: 0x9f0d86fe29070fc210792b094fd2d01e }, // 2986
    Multiplier { upper: 0xa8fd090a2a40ec6ffcd8dd7573dbcffa, lower: 0xe5a46bfe8738d9680d2dbc07730f0ce5 }, // 2987
    Multiplier { upper: 0x8730d40821cd89f330ad7df78fe30cc8, lower: 0xb7b6bccb9f60adecd757c99f8f3f3d84 }, // 2988
    Multiplier { upper: 0xd84e200d02e27651e77bfcbf4c9e7ada, lower: 0xbf8ac7ac3234497af2260f65b1fec8d3 }, // 2989
    Multiplier { upper: 0xad0b4cd73581f84185fcca32a3b1fbe2, lower: 0x32d56c89c1c36dfbf4eb3f848e656d76 }, // 2990
    Multiplier { upper: 0x8a6f70ac2ace60346b30a1c21c8e631b, lower: 0x5bddf06e349c57fcc3ef6603a51df12b }, // 2991
    Multiplier { upper: 0xdd7f1aad114a338711e76936941704f8, lower: 0x92fcb3e387608cc79fe57005d4fcb512 }, // 2992
    Multiplier { upper: 0xb1327bbda76e8f9f4185edc543459d93, lower: 0xa8ca2982d2b3a3d2e651266b10ca2a75 }, // 2993
    Multiplier { upper: 0x8dc1fc97b9253fb29ad18b0435d14adc, lower: 0x87082135755c830f1ea751ef40a1bb91 }, // 2994
    Multiplier { upper: 0xe2cffa8c5b6ecc50f7b5ab39efb54494, lower: 0x0b4035225560d1b1caa54fe53435f8e7 }, // 2995
    Multiplier { upper: 0xb5732ed6af8bd6a72c9155c7f2f76a10, lower: 0x09002a81dde70e27d5510cb75cf7fa53 }, // 2996
    Multiplier { upper: 0x9128f245593cabb8f074449ff592bb40, lower: 0x07335534b185a4ecaaa73d5f7d932ea9 }, // 2997
    Multiplier { upper: 0xe84183a2286112c180ba076655b79200, lower: 0x0b8555211c0907e1110b956595b84aa7 }, // 2998
    Multiplier { upper: 0xb9ce02e8204da89acd619f85115fa800, lower: 0x0937774db0073980da6faab7aaf9d553 }, // 2999
    Multiplier { upper: 0x94a4cf2019d7ba15711ae6040de62000, lower: 0x075f92a48cd294671526222c88c7dddc }, // 3000
    Multiplier { upper: 0xedd47e99c2f2c35581c4a339afd69999, lower: 0xa565b76dae1dba3e883d037a7472fc93 }, // 3001
    Multiplier { upper: 0xbe43987b025bcf779b03b5c7bfdee147, lower: 0xb78492be24e494fed36402c85d28ca0f }, // 3002
    Multiplier { upper: 0x983613959b7ca5f948cfc49fccb24dd2, lower: 0xf936dbcb50b6dd98a91ccf06b0ed6e72 }, // 3003
    Multiplier { upper: 0xf389b8ef5f2dd65ba7b2d432e11d4951, lower: 0x8ebe2c78812495c10e947e711b157d84 }, // 3004
    Multiplier { upper: 0xc2d493f2b28b11e2ec8f1028b4176dda, lower: 0xd89823939a83ab00d876cb8daf446469 }, // 3005
    Multiplier { upper: 0x9bdd43288ed5a7e8bd3f40209012be48, lower: 0xad4682dc7b9c88cd79f8a2d7bf69e9ee }, // 3006
    Multiplier { upper: 0xf962050db155d97461fecd00e68463a7, lower: 0x7ba40493f8fa747bf65a9e25ff0fdcb0 }, // 3007
    Multiplier { upper: 0xc7819da48dde47904e6570cd8536b61f, lower: 0x961cd07660c85d2ff8487e84cc0cb08d }, // 3008
    Multiplier { upper: 0x9f9ae483a4b1d2d9d851270ad0f891b2, lower: 0xde7d7391e706b0f32d06cb9d700a26d7 }, // 3009
    Multiplier { upper: 0xff5e3a6c3ab61e295a1b71aae7f41c51, lower: 0x63fbec1ca4d7818514d7ac2f19a9d7be }, // 3010
    Multiplier { upper: 0xcc4b61f02ef8182114e2c155865ce374, lower: 0x4ffcbce3b712ce0410ac89bf47bb12ff }, // 3011
    Multiplier { upper: 0xa36f818cf260134daa4f0111384a4f90, lower: 0x3ffd63e95f423e69a6f06e329fc8dbff }, // 3012
    Multiplier { upper: 0x82bf9ad7284cdc3e21d8cda7603b72d9, lower: 0xcccab6544c34febaebf38b5bb3071666 }, // 3013
    Multiplier { upper: 0xd1329158407af9fd02f47c3f005f1e29, lower: 0x47aabd53ad2197917985abc5eb3e8a3c }, // 3014
    Multiplier { upper: 0xa75ba779cd2f2e64025d303266b27e87, lower: 0x6c889776241adfa7946aefd188fed4fd }, // 3015
    Multiplier { upper: 0x85e2ec6170f28b83351759c1ebc1fed2, lower: 0xbd3a12c4e9af1952dd2259746d98aa64 }, // 3016
    Multiplier { upper: 0xd637e09be7ea78d1ee8bc2cfdf9ccaea, lower: 0xc85cead4a91828849503c253e28ddd6d }, // 3017
    Multiplier { upper: 0xab5fe6e31feec70e586fcf0cb2e3d588, lower: 0xa04a5576edaced36dd9c9b764ed7e457 }, // 3018
    Multiplier { upper: 0x891985827ff238d846bfd8d6f583113a, lower: 0x19d5112bf157242be47d492b72465046 }, // 3019
    Multiplier { upper: 0xdb5c08d0ccb6c15a0acc8e24bc04e85c, lower: 0xf621b5131bbea0463a620eabea0a1a09 }, // 3020
    Multiplier { upper: 0xaf7cd3da3d5f0114d57071b6fcd0b9e3, lower: 0xf81af7427c9880382eb4d889880814d4 }, // 3021
    Multiplier { upper: 0x8c63dcae977f3410aac05af8ca4094b6, lower: 0x6015929b96e066935890ad3ad339aa43 }, // 3022
    Multiplier { upper: 0xe09fc77dbf31ece7779a2b27aa00edf0, lower: 0x99bc1dc5be33d752274de1f7b85c439e }, // 3023
    Multiplier { upper: 0xb3b305fe328e571f92e1bc1fbb33f18d, lower: 0x47c9b16afe8fdf74ec3e4e5fc6b03618 }, // 3024
    Multiplier { upper: 0x8fc26b31c20b78e60f1afce62f5cc13d, lower: 0xd307c122653fe5f723650b7fd22691ad }, // 3025
    Multiplier { upper: 0xe603deb603458e3ce4f7fb09e561352f, lower: 0xb80c683708663cbe9f0812661d0a82af }, // 3026
    Multiplier { upper: 0xb80318919c37a4fd83f995a1844dc426, lower: 0x2cd6b9c5a051ca3218d341eb4a6ecef2 }, // 3027
    Multiplier { upper: 0x9335ad4149c61d979cc7aae79d0b0351, lower: 0xbd78949e19db082813dc34bc3b8bd8c2 }, // 3028
    Multiplier { upper: 0xeb89153542d695bf613f77d8fb44d21c, lower: 0x625a87635c91a6a6862d212d2c12f469 }, // 3029
    Multiplier { upper: 0xbc6daa91024544991a992cad95d0a816, lower: 0xb515391c4a0e1eeb9e8a80f0f00f29ee }, // 3030
    Multiplier { upper: 0x96be220d9b6a9d47487a8a2477da2012, lower: 0x2a7760e36e71b256186ecd8d8cd8ee58 }, // 3031
    Multiplier { upper: 0xf130367c2bddc8720d90dd072629cce9, lower: 0xdd8bce38b0b5ea235a4ae27c148e4a26 }, // 3032
    Multiplier { upper: 0xc0f35ec9bcb16d280ada4a6c1e87d721, lower: 0x7e0971c6f3c4bb4f7b6f1b9676d83b52 }, // 3033
    Multiplier { upper: 0x9a5c4bd496f457533be1d5234b9fdf4d, lower: 0xfe6df49f296a2f72c925afab924695db }, // 3034
    Multiplier { upper: 0xf6fa12edbe53beeb9302ee9edf663216, lower: 0x63e320fea8a9e5847509191283a422f8 }, // 3035
    Multiplier { upper: 0xc594dbf1650fcbefa8cf254be5eb5b45, lower: 0x1cb5b3feed54b79d2a6dada869501bf9 }, // 3036
    Multiplier { upper: 0x9e10aff450d96ff2ed72843cb7ef7c37, lower: 0x4a2af6658aaa2c7dbb8af15387734994 }, // 3037
    Multiplier { upper: 0xfce77fed4e28b31e48b739fabfe5938b, lower: 0xa9de5708dddd13fc5f44b55272520f54 }, // 3038
    Multiplier { upper: 0xca52ccbdd8208f4b6d5f6195665142d6, lower: 0x217eac0717e40ffd1903c441f50e72a9 }, // 3039
    Multiplier { upper: 0xa1dbd6fe468072a2bde5e7aab8410244, lower: 0xe798899f46500cca7a6969ce5da52888 }, // 3040
    Multiplier { upper: 0x817cabfe9ecd28823184b955603401d0, lower: 0xb946d47f6b733d6ec85454a517b753a0 }, // 3041
    Multiplier { upper: 0xcf2ddffdcae1da69e8d45bbbcd2002e7, lower: 0x8ed7ba6578b8624ada20876e8c5885cc }, // 3042
    Multiplier { upper: 0xa5be4ccb08b4aebb20a9e2fca4199bec, lower: 0x72462eb793c6b508ae806c587046d170 }, // 3043
    Multiplier { upper: 0x84983d6f3a2a25628087e8ca1ce14989, lower: 0xf504f22c763890d3becd2379f36bdac0 }, // 3044
    Multiplier { upper: 0xd426c8b1f6a9d56a673fdadcfb020f43, lower: 0x21a1837a56c0e7b9314838c31f12f79a }, // 3045
    Multiplier { upper: 0xa9b8a08e5eee44551f6648b0c8ce729c, lower: 0x1ae79c61df00b960f439c7027f425fae }, // 3046
    Multiplier { upper: 0x87c6e6d84bf1d044191ea08d6d71f549, lower: 0xaf1fb04e4c00944d902e38cecc351958 }, // 3047
    Multiplier { upper: 0xd93e3e26dfe94d39c1ca9a7be24feedc, lower: 0x4b65e6e3accdba15b37d27b146bb5bc0 }, // 3048
    Multiplier { upper: 0xadcb64ebe6543dc7ce3baec981d98be3, lower: 0x6f84b8b623d7c8115c641fc10562afcd }, // 3049
    Multiplier { upper: 0x8b091d898510316ca4fc8bd467e13cb5, lower: 0xf2d093c4e9796cdab05019673782263e }, // 3050
    Multiplier { upper: 0xde74fc0f3b4d1be107fa7953d9686123, lower: 0x1e1a8607dbf57af7808028a5259d09fc }, // 3051
    Multiplier { upper: 0xb1f7300c2f70e31a6cc8610fe1204db5, lower: 0xb1aed19fe32ac8c6006686ea847da197 }, // 3052
    Multiplier { upper: 0x8e5f59a359271c1523d380d980e6a491, lower: 0x5af2414cb5bbd3d199eb9f220397b479 }, // 3053
    Multiplier { upper: 0xe3cbc29ef50b6021d2ec015c0171074e, lower: 0xf7ea021455f952e8f645cb699f5920c1 }, // 3054
    Multiplier { upper: 0xb63c9bb25da2b34e4256677ccdf405d8, lower: 0xc654ce76ab2ddbed91d16f87b2adb3cd }, // 3055
    Multiplier { upper: 0x91ca16284ae88f71ceab85fd719004ad, lower: 0x6b770b92228b1657a7dabf9fc2248fd8 }, // 3056
    Multiplier { upper: 0xe94356a6de40e582e445a32f1c19a115, lower: 0x78be78e9d0de8a25d95dff66036db2f2 }, // 3057
    Multiplier { upper: 0xba9c45524b671e025037b5bf49ae1a77, lower: 0x93cb93ee40b2081e477e65eb35f15bf5 }, // 3058
    Multiplier { upper: 0x9549d10ea2b8e4cea692f7cc3af1aec6, lower: 0x0fd60ff1cd5b39b1d2cb84bc2b277cc4 }, // 3059
    Multiplier { upper: 0xeedc81b1045b07b10a84bfad2b1c4ad6, lower: 0x7fbce64faef85c4fb7ac0793783f2e06 }, // 3060
    Multiplier { upper: 0xbf16ce2736af395a6ed0995755b03bde, lower: 0xcc971ea625937d0c92f0060f9365be6c }, // 3061
    Multiplier { upper: 0x98df0b529225c77b8bda1445de26964b, lower: 0xd6df4bb81e0f973d42599e72dc516523 }, // 3062
    Multiplier { upper: 0xf498121db6a2d8c5ac90206fc9d756df, lower: 0xbe3212c03018f1fb9d5c30b7c6e8a1d1 }, // 3063
    Multiplier { upper: 0xc3acdb4af88247048a0ce6bfd4ac457f, lower: 0xcb5b423359ad8e62e449c0930586e7db }, // 3064
    Multiplier { upper: 0x9c8a4908c6ce9f36d4d71effdd569dff, lower: 0xd5e29b5c47be0b82503b00759e058649 }, // 3065
    Multiplier { upper: 0xfa76db413e17652487be97ffc88a9666, lower: 0x23042bc6d930126a19f800bc3008d6da }, // 3066
    Multiplier { upper: 0xc85f15cdcb45ea839fcbaccca06edeb8, lower: 0x1c035638adc00ebb47f99a30266d78af }, // 3067
    Multiplier { upper: 0xa04c11716f6b2202e63c8a3d4d257ef9, lower: 0xb002ab608b000bc9066148268524608c }, // 3068
    Multiplier { upper: 0x803cdac125ef4e68b8306e9770eacbfa, lower: 0xf33555e6d599a307384dd352041d1a0a }, // 3069
    Multiplier { upper: 0xcd2e2acea3187d7459e71758b4aadff7, lower: 0xeb88897155c29e71f3afb88339c829a9 }, // 3070
    Multiplier { upper: 0xa424ef0bb5ad3129e185ac46f6ef1993, lower: 0x22d3a12777cee527f6262d35c7d35487 }, // 3071
    Multiplier { upper: 0x8350bf3c91575a87e79e236bf8bf47a8, lower: 0xe8a94db92ca5841ff81e8a916ca9106c }, // 3072
    Multiplier { upper: 0xd21acb941bbef73fd8fd05798dfed90e, lower: 0x410ee2c1e108d36659ca774f1441b3e0 }, // 3073
    Multiplier { upper: 0xa8156fa9afcbf8ffe0ca6ac7a4cbe0d8, lower: 0x340be89b1a6d75eb7b085f72769af64d }, // 3074
    Multiplier { upper: 0x86778c87bfd660ccb3d5223950a31a46, lower: 0x900986e27b8ac4bc626d19285ee25ea4 }, // 3075
    Multiplier { upper: 0xd725ada5ffbd67adec8836c21a9e9070, lower: 0xe675a49d9277a12d6a48284097d0976d }, // 3076
    Multiplier { upper: 0xac1e2484cc978624bd39c568154ba6c0, lower: 0xb85e1d4adb92e7578839b9cd46407924 }, // 3077
    Multiplier { upper: 0x89b1b6d0a3ac6b5097616ab9aaa2ebcd, lower: 0x604b4aa2494252ac6cfafb0a9e99fa83 }, // 3078
    Multiplier { upper: 0xdc4f8ae76c47121a8bcf11291104ac7b, lower: 0xcd454436db9d5113e19191aa975cc405 }, // 3079
    Multiplier { upper: 0xb03fa252bd05a8153ca5a7540d9d56c9, lower: 0x71043692494aa7431adadaeedf7d699d }, // 3080
    Multiplier { upper: 0x8cffb50efd9e2010fd5152a9a47ddf07, lower: 0x8d9cf875076eec35af157bf24c64547e }, // 3081
    Multiplier { upper: 0xe19921b195c9cce7fbb5510f6d9631a5, lower: 0xaf618d880be4ad22b1bbf983ad6d53fd }, // 3082
    Multiplier { upper: 0xb47a815ade3b0a532fc440d9247827b7, lower: 0xbf813e066fea241bc1632e02f1244331 }, // 3083
    Multiplier { upper: 0x906201157e95a1dc26369a4750601fc6, lower: 0x32cdcb3859881ce3011c24cf275035c1 }, // 3084
    Multiplier { upper: 0xe70334ef30ef69603d242a0bb3ccffa3, lower: 0x847c785a28d9c7d19b603ae50bb38934 }, // 3085
    Multiplier { upper: 0xb8cf5d8c2725ede6975021a2f63d994f, lower: 0x9d30604820ae39747c4cfbea6fc2d42a }, // 3086
    Multiplier { upper: 0x93d917a35284be5212a6814f2b647aa6, lower: 0x1759e6a01a24fac396a3fcbb8c9bdcee }, // 3087
    Multiplier { upper: 0xec8e8c38840796e9b770cee5123a5dd6, lower: 0x8bc30a99c36e5e05bdd32df8e0f9617d }, // 3088
    Multiplier { upper: 0xbd3ed6939cd2df215f8d7250db61e4ab, lower: 0xa3026ee16925180497dc24c71a611aca }, // 3089
    Multiplier { upper: 0x97657876170f18e77fa45b73e2b4b6ef, lower: 0xb59b8be78750e003acb01d6c151a7bd5 }, // 3090
    Multiplier { upper: 0xf23bf3f024e4f4a59906f8b96ababe4c, lower: 0x55c5aca5a54e3339144cfbe021c3f955 }, // 3091
    Multiplier { upper: 0xc1c98ff350b72a1e140593c788956509, lower: 0xde37bd51510b5c2da9d72fe681699444 }, // 3092
    Multiplier { upper: 0x9b07a65c40928818100476393a111da1, lower: 0x7e92fddaa73c49be2178f31ecdee1036 }, // 3093
    Multiplier { upper: 0xf80c3d606750d9c019a0bd285ce82f68, lower: 0xca84c95dd86075fd025b1e97afe34d23 }, // 3094
    Multiplier { upper: 0xc6703119ec40ae3347b3ca86b0b9bf87, lower: 0x086a3ab179e6c4ca6848e546264f70e9 }, // 3095
    Multiplier { upper: 0x9ec02747f033be8f6c8fd5388d616605, lower: 0xa054fbc12e523708536d84381ea5f3ee }, // 3096
    Multiplier { upper: 0xfe003ed98052ca7f14195527489bd66f, lower: 0x66ee5f9b7d50580d5248d38cfdd65316 }, // 3097
    Multiplier { upper: 0xcb33657acd0f0865a9adddb906e311f2, lower: 0xb8beb2e2caa6acd775070fa3fe450f45 }, // 3098
    Multiplier { upper: 0xa28f84623da5a051548b17c738b5a7f5, lower: 0x60988f1bd55223df90d272e998373f6a }, // 3099
    Multiplier { upper: 0x820c69e831514d0ddd3c1305c6f7b991, lower: 0x1a13a5afdddb4fe60d7528bae02c32bc }, // 3100
    Multiplier { upper: 0xd013dca6b54ee1afc8601e6fa4bf8f4e, lower: 0x901f6f7fc95ee63ce2550df7cd13845f }, // 3101
    Multiplier { upper: 0xa6764a1ef7724e2639e67ebfb6ffa5d8, lower: 0x734c5933077f1e971b773e5fd742d04c }, // 3102
    Multiplier { upper: 0x852b6e7f2c5b71b82e51feffc5995179, lower: 0xf5d6adc26c65b2127c5f65197902403d }, // 3103
    Multiplier { upper: 0xd5124a6513c582c04a1ccb32d5c21bf6, lower: 0x5624493713d5e9b72d656e8f280399fb }, // 3104
    Multiplier { upper: 0xaa750850dc9e02336e7d6f5bde34e32b, lower: 0x781d075f431187c5bdeabed8eccfae62 }, // 3105
    Multiplier { upper: 0x885da040b07e6829253125e3182a4f55, lower: 0xf9b0d2b29c0e0637cb22324723d9584f }, // 3106
    Multiplier { upper: 0xda2f66cde730a6a83b81d63826aa1889, lower: 0x8f81511dc67cd6bfab69ea0b6c8ef3b1 }, // 3107
    Multiplier { upper: 0xae8c523e528d52202f9b11c68554e06e, lower: 0x0c677417d1fd789955ee54d5f0725c8e }, // 3108
    Multiplier { upper: 0x8ba374fea8710e802615a7d20443e6be, lower: 0x7052c346419793adde5843de59f516d8 }, // 3109
    Multiplier { upper: 0xdf6bee6440b4e4003cef72e9a06ca463, lower: 0xe6ead20a028c1f7c96f39fca2988248c }, // 3110
    Multiplier { upper: 0xb2bcbeb69a2a500030bf8f214d23b6b6, lower: 0x525574d4ced67f96df294ca1bad35070 }, // 3111
    Multiplier { upper: 0x8efd655ee1bb73335a32d8e770e95ef8, lower: 0x41ddf710a57866124c210a1afbdc405a }, // 3112
    Multiplier { upper: 0xe4c8a231692beb855d1e27d8b4a897f3, lower: 0x9c96581aa25a3cea1368102b2c939a29 }, // 3113
    Multiplier { upper: 0xb706e827875656044a7e8646f6ed465c, lower: 0x7d45134881e1ca54dc5340228a0fae88 }, // 3114
    Multiplier { upper: 0x926becec6c45119d08653838c58a9eb0, lower: 0x643742a067e7d510b04299b53b3fbed3 }, // 3115
    Multiplier { upper: 0xea4647e0ad3b4f61a70859f46f44311a, lower: 0x39f20433d972ee811a042921f865fe1e }, // 3116
    Multiplier { upper: 0xbb6b6cb3bdc90c4e1f39e19059035a7b, lower: 0x618e69c3145bf200e19cedb4c6b7fe7f }, // 3117
    Multiplier { upper: 0x95ef8a2964a0d6a4e5c7e7a6ad9c4862, lower: 0xb471ee35a9e32800b47d8af7055ffecc }, // 3118
    Multiplier { upper: 0xefe5a9dbd4348aa16fa63f7115c6da37, lower: 0x871cb055dc9ea667872f44be6efffe12 }, // 3119
    Multiplier { upper: 0xbfeaee4976906ee78c84ff8dab057b5f, lower: 0x9f4a26ab16e551ec6c25d09858cccb42 }, // 3120
    Multiplier { upper: 0x9988bea12ba6bf1fa39d993e226ac919, lower: 0x4c3b522278b774bd235173ad13d70902 }, // 3121
    Multiplier { upper: 0xf5a7976845d798329f628ec9d0aadb5b, lower: 0xad2bb69d8df25461d21bec481fbe74cf }, // 3122
    Multiplier { upper: 0xc48612b9d179468ee5e8723b0d557c49, lower: 0x57562bb13e5b76b4a81656a019652a40 }, // 3123
    Multiplier { upper: 0x9d380efb0dfa9ed8b7ed282f3dddfd07, lower: 0x7911bc8dcb7c5ef6ecdeabb3478421cd }, // 3124
    Multiplier { upper: 0xfb8ce4c4e32a97c12648404b962ffb3f, lower: 0x281c60e2df2d64be47caac520c069c7a }, // 3125
    Multiplier { upper: 0xc93d83d0b5bbac9a850699d611bffc32, lower: 0x867d1a4f18f11d65063bbd0e700549fb }, // 3126
    Multiplier { upper: 0xa0fe030d5e2fbd486a6bae44dafffcf5, lower: 0x3864150c13f4178404fc973ec0043b30 }, // 3127
    Multiplier { upper: 0x80cb35a44b596439eebc8b6a48ccca5d, lower: 0xc6b6773cdcc34603373078ff0003628d }, // 3128
    Multiplier { upper: 0xce11ef6d455bd38fe460df10747add62, lower: 0xd78a586161387005251a5b31999f0414 }, // 3129
    Multiplier { upper: 0xa4db25f10449760cb6b3e5a6c3957de8, lower: 0xac6ead1ab42d266a841515c147b269aa }, // 3130
    Multiplier { upper: 0x83e284c0d03ac4d6f88feaebcfaacb20, lower: 0x89f224155cf0eb8869aa77cdd2f52155 }, // 3131
    Multiplier { upper: 0xd304079ae6c46e24c0e644ac7f77ab67, lower: 0x431d068894b4ac0d75dd8c7c84bb6887 }, // 3132
    Multiplier { upper: 0xa8d006158569f1b700b836f065f955ec, lower: 0x35b0d206dd5d56712b17a396d095ed39 }, // 3133
    Multiplier { upper: 0x870cd1aad1218e2c00935f26b7faab23, lower: 0x5e270e6be44aab8dbc12e94573ab242e }, // 3134
    Multiplier { upper: 0xd81482aae835b046675231d78cc44505, lower: 0x6371b0aca07778e2c684a86f1f7839e2 }, // 3135
    Multiplier { upper: 0xacdd3555869159d1ec41c1793d69d0d1, lower: 0x1c5af3bd4d2c60b56b9d538c192cfb1c }, // 3136
    Multiplier { upper: 0x8a4a9111387447db2367cdfa9787da40, lower: 0xe37bf6310a89e6f7894aa93ce0f0c8e3 }, // 3137
    Multiplier { upper: 0xdd441b4ec0ba0c91d23faff758d95d34, lower: 0x9f2cbd1b440fd7f2754441fb0181416b }, // 3138
    Multiplier { upper: 0xb103490bcd61a3a7db66265f7a477dc3, lower: 0xb28a30e29cd9798ec4369b2f34676789 }, // 3139
    Multiplier { upper: 0x8d9c3a6fd7814fb97c51b84c61d2cb02, lower: 0xf53b5a4ee3e12e0bd02baf58f6b91fa1 }, // 3140
    Multiplier { upper: 0xe29390b2f2687f8f2d4f8d4702eade6b, lower: 0x21f8907e396849ac8045e55b245b65ce }, // 3141
    Multiplier { upper: 0xb542da28c1ed32d8f10c71059bef1855, lower: 0xb4c6d9fe94536e2399d18448e9e2b7d8 }, // 3142
    Multiplier { upper: 0x910248209b2428ad8da38d9e1658e044, lower: 0x909f14cba9dc581c7b0e036d87e89313 }, // 3143
    Multiplier { upper: 0xe803a69a91d37448e29f48fcf08e33a0, lower: 0xe764ee12a9608cfa5e7cd248d9741e85 }, // 3144
    Multiplier { upper: 0xb99c854874a929d3e87f6d9726d8294d, lower: 0x85ea580eede6d72eb1fd7507145ce537 }, // 3145
    Multiplier { upper: 0x947d376d2a20ee432065f145b8acedd7, lower: 0x9e55133f24b8ac255b312a6c104a50f9 }, // 3146
    Multiplier { upper: 0xed95257b769b16d1cd6fe86f8de17c8c, lower: 0x30881ecb6df446a22b81dd79b3aa1b28 }, // 3147
    Multiplier { upper: 0xbe10eac92baf4574a45986bfa4b463a3, lower: 0x5a067f0924c36bb4ef9b17948fbb48ed }, // 3148
    Multiplier { upper: 0x980d88a0efbf6ac3b6ae05661d5d1c82, lower: 0xae6b98d41d6922f72615ac76d962a0bd }, // 3149
    Multiplier { upper: 0xf348da9b1932446c577cd5702efb60d1, lower: 0x17128e202f0e9e583cef7a57c2376795 }, // 3150
    Multiplier { upper: 0xc2a0aee27a8e9d237930aac02595e70d, lower: 0xac0ed819bf3ee51363f2c84634f91fab }, // 3151
    Multiplier { upper: 0x9bb3bf1b953ee41c60f3bbcceade5271, lower: 0x5672467aff65840f8328a0382a60e622 }, // 3152
    Multiplier { upper: 0xf91f982c21fe39c70185f947de3083e8, lower: 0x8a5070c4cbd5a018d1da99f377017036 }, // 3153
    Multiplier { upper: 0xc74c79bce7fe949f346b2dd31826cfed, lower: 0x3b738d6a3caae67a417bae5c5f3459c5 }, // 3154
    Multiplier { upper: 0x9f706163eccbaa18f6bc24a8e01f0cbd, lower: 0xc9293dee96ef1ec83462f1e37f5d149e }, // 3155
    Multiplier { upper: 0xff1a356cae12a9c18ac6a10e3364e12f, lower: 0xa841fcb0f17e97a6ba37e96bfefb542f }, // 3156
    Multiplier { upper: 0xcc14f78a24dbbb013bd21a71c2b71a8c, lower: 0x869b308d8dfedfb894f9878998c91026 }, // 3157
    Multiplier { upper: 0xa343f93b50afc8cdc974e1f49bc5aed6, lower: 0xd215c0713e657fc6dd946c6e13d40ceb }, // 3158
    Multiplier { upper: 0x829cc762a6f3070b0790b4c3afd158ab, lower: 0xdb4499f431eacc9f17a9f0580fdcd723 }, // 3159
    Multiplier { upper: 0xd0fad89dd7eb3e780c1abad2b2e88ddf, lower: 0xc53a8fed1caae0fe8c431a267fc7be9e }, // 3160
    Multiplier { upper: 0xa72f13b17988fec67015624228ba0b19, lower: 0x6a953ff0e3bbe73209cf481ecc9fcbb2 }, // 3161
    Multiplier { upper: 0x85bf42f4613a656b8cdde834ed61a27a, lower: 0xbbaa998d82fcb8f4d4a5d34bd6e63c8e }, // 3162
    Multiplier { upper: 0xd5fed18701f708ac14964054af029d91, lower: 0x2c4428e26b2df4baedd61edfbe3d2db0 }, // 3163
    Multiplier { upper: 0xab324138ce5f3a2343ab66aa259bb140, lower: 0xf036871b88f190958b11b24c9830f15a }, // 3164
    Multiplier { upper: 0x88f500fa3eb294e902ef8554eae2f433, lower: 0xf35ed27c6d8e0d446f415b7079c0c115 }, // 3165
    Multiplier { upper: 0xdb219b29fdea87db37e5a22177d186b9, lower: 0x856483fa48e3486d7ecef8b3f60134ed }, // 3166
    Multiplier { upper: 0xaf4e15bb31886caf5feae81ac6413894, lower: 0x6ab6cffb6d82a05798a593c32b342a58 }, // 3167
    Multiplier { upper: 0x8c3e77c8f46d23bf7fef20156b676076, lower: 0xbbc5732f8acee6ac7a1e0fcf55c35513 }, // 3168
    Multiplier { upper: 0xe063f2db20ae9f98ccb1ccef123f00bd, lower: 0xf93beb7f447e3de0c3634c7eef9eee85 }, // 3169
    Multiplier { upper: 0xb38328af4d587fad708e3d8c0e98cd64, lower: 0xc76322cc36cb64b3cf82a398bfb2586a }, // 3170
    Multiplier { upper: 0x8f9c208c3de066245a0b64700bad711d, lower: 0x6c4f4f09c56f83c30c6882e0995b79ef }, // 3171
    Multiplier { upper: 0xe5c69a79fc9a3d06f678a0b345e24e95, lower: 0x7a187e7608b26c6b470d9e3428925cb1 }, // 3172
    Multiplier { upper: 0xb7d2152e63ae9738c52d4d5c37e83edd, lower: 0xfb46cb91a08ebd229f3e1829ba0eb08d }, // 3173
    Multiplier { upper: 0x930e77584fbedf609dbdd77cf98698b1, lower: 0x95d23c74807230e87f64e02161a55a0b }, // 3174
    Multiplier { upper: 0xeb4a588d4c64989a95fc8bfb28d75ab5, lower: 0xbc8393ed9a504e40cbd499cf02a229ab }, // 3175
    Multiplier { upper: 0xbc3b7a0aa383ad4877fd3cc8ed79155e, lower: 0x306943247b7371cd6fdd47d8cee82155 }, // 3176
    Multiplier { upper: 0x9695fb3bb602f106c66430a0bdfa777e, lower: 0x8d21028395f5f4a4597dd313d8b9b444 }, // 3177
    Multiplier { upper: 0xf0eff85f899e4e713d6d1a9ac990bf30, lower: 0xe1ce6a6c23232106f5961e86278f86d4 }, // 3178
    Multiplier { upper: 0xc0bff9e607b1d85a978a7baf07a6ff5a, lower: 0x4e3ebb89b5b5b4059144e5381fa60576 }, // 3179
    Multiplier { upper: 0x9a332e519fc179e212d52fbf395265e1, lower: 0xd8322fa15e2af66ada9d842ce61e6ac5 }, // 3180
    Multiplier { upper: 0xf6b84a1c32cf2969b7bb7f985bb70969, lower: 0x59e9e5cefd118a4490fc06ae3cfd77a1 }, // 3181
    Multiplier { upper: 0xc5603b49c23f545492fc66137c926ded, lower: 0xe187eb0bfda7a1d073fcd224fd9792e8 }, // 3182
    Multiplier { upper: 0x9de695d49b65dd107596b80f96db8b24, lower: 0xb46cbc0997b94e405cca41b731460f20 }, // 3183
    Multiplier { upper: 0xfca422edc56fc81a55bdf34c2492783a, lower: 0xba4793428c5bb066fadd35f1e8701833 }, // 3184
    Multiplier { upper: 0xca1ce8be378ca0151164c2a350752cfb, lower: 0xc839429ba37c8d1f2f175e5b2059acf5 }, // 3185
    Multiplier { upper: 0xa1b0ba31c60a19aa74509bb5d9f7572f, lower: 0xd36102161c63a418f2791848e6ae23f8 }, // 3186
    Multiplier { upper: 0x815a2e8e380814885d0d495e47f9128c, lower: 0xa91a6811b04fb67a5b94136d85581cc6 }, // 3187
    Multiplier { upper: 0xcef6b0e38cd9ba73c815423073281dad, lower: 0xdb5d734f807f8a5d5f535248d559c7a3 }, // 3188
    Multiplier { upper: 0xa592271c70ae2ec306776826c2867e24, lower: 0xaf7df5d933993b7de5dc41d3dde16c83 }, // 3189
    Multiplier { upper: 0x8474ec16c08b589c052c5352353864ea, lower: 0x25fe5e475c7a95fe517d01764b1abd35 }, // 3190
    Multiplier { upper: 0xd3ee468acdabc0f9a1e08550552707dd, lower: 0x0996fd3efa5dbcca1bfb358a11c461ef }, // 3191
    Multiplier { upper: 0xa98b6ba23e2300c7b4b39dd9ddb8d317, lower: 0x3adf30ff2eb163d4e32f5e080e36b4bf }, // 3192
    Multiplier { upper: 0x87a2bc81cb4f33d2f6f617e17e2d75ac, lower: 0x2f18f3ff588de9771c25e4d33e922a33 }, // 3193
    Multiplier { upper: 0xd90460cfabb1ec84be568c9bfd158913, lower: 0x7e8e53322749758b603ca151fdb6a9ea }, // 3194
    Multiplier { upper: 0xad9d1a3fbc8e56d098453d4997446da9, lower: 0x320b75c1b907913c4cfd4ddb315eee55 }, // 3195
    Multiplier { upper: 0x8ae414ffca0b78a6e037643adf69f154, lower: 0x28092b0160d2da96a3fdd7e28de58b77 }, // 3196
    Multiplier { upper: 0xde39bb32dcdf277166bf06c498a98220, lower: 0x400eab3567b7c42439962637496f458b }, // 3197
    Multiplier { upper: 0xb1c7c8f57d7f52c11eff389d46ee01b3, lower: 0x667222911fc636836144eb5f6df29e09 }, // 3198
    Multiplier { upper: 0x8e396d913132a89a7f3293b1058b348f, lower: 0x85281ba74c9e9202b43722b2be5bb1a1 }, // 3199
    Multiplier { upper: 0xe38f15b51b8440f731ea85e808deba7f, lower: 0x3b735f721430e99ded2504513092b5ce }, // 3200
    Multiplier { upper: 0xb60c115daf9d00c5c1886b2007189532, lower: 0x95f5e5f4dcf3ee17f0ea69da8d422b0c }, // 3201
    Multiplier { upper: 0x91a34117bfb0cd6b0139ef4cd27a10f5, lower: 0x44c4b7f717298b465a55217ba434ef3d }, // 3202
    Multiplier { upper: 0xe90534f2cc4e157801f64bae1d901b22, lower: 0x07a12658250f453d5d55025f6d217ec7 }, // 3203
    Multiplier { upper: 0xba6a90c23d0b44600191d624e47348e8, lower: 0x061a851350d9043117773519241acbd2 }, // 3204
    Multiplier { upper: 0x95220d6830d5d04cce0e44ea505c3a53, lower: 0x38153742a714035a792c2a7a8348a30f }, // 3205
    Multiplier { upper: 0xee9ce2404e22e6e149b06e43b3c6c3b8, lower: 0x59bb8b9dd820055d8ead10c4054104e4 }, // 3206
    Multiplier { upper: 0xbee3e83371b5858107c05836296bcfc6, lower: 0xae2fa2e4ace66ab13ef0da366a9a6a50 }, // 3207
    Multiplier { upper: 0x98b6535c5af79e00d3004691babca638, lower: 0x8b594f1d571ebbc0ff2714f85548550d }, // 3208
    Multiplier { upper: 0xf456ebc6f7f29667b80070e92ac7705a, lower: 0x788ee4fbbe9792ce650b54c08873bb48 }, // 3209
    Multiplier { upper: 0xc378bc9f2cc211ec93338d87556c59e1, lower: 0xfa0bea62fedfa8a51da2aa33a05c95d3 }, // 3210
    Multiplier { upper: 0x9c6096e5bd680e56dc293e05ddf047e7, lower: 0xfb3cbb82657fba1db14eee8fb37d44a9 }, // 3211
    Multiplier { upper: 0xfa3424a2c8a67d57c6a8633c964d3fd9, lower: 0x91fac59d6f32c362b54b174c52620775 }, // 3212
    Multiplier { upper: 0xc829b6e8a085311305538296dea43314, lower: 0x74c89e178c289c4ef76f45d6a84e6c5d }, // 3213
    Multiplier { upper: 0xa0215f20806a8da8d10f9babe55028dd, lower: 0x2a3a1812d686e3725f8c37deed0b89e4 }, // 3214
    Multiplier { upper: 0x801ab28066bba4870da616231dd9ba4a, lower: 0x882e79a8ab9f1c5b7fa35fe58a6fa184 }, // 3215
    Multiplier { upper: 0xccf78400a45f6da4e2a3569e96292a10, lower: 0xd9e3f5daac31c6f8cc38996f43e5cf39 }, // 3216
    Multiplier { upper: 0xa3f93666e9e5f150b54f787ede8754da, lower: 0x47e9917bbcf49f2d702d478c36517294 }, // 3217
    Multiplier { upper: 0x832dc51f2184c10d5dd92d324b9f7715, lower: 0x06547462fd907f578cf10609c50df543 }, // 3218
    Multiplier { upper: 0xd1e2d4fe9c079b489628485078ff24ee, lower: 0x7087209e6280cbbf47e809a93b49886b }, // 3219
    Multiplier { upper: 0xa7e8aa65499faf6d44ed06a6c73283f1, lower: 0xf39f4d4b8200a2ff6cb9a1542f6e06bc }, // 3220
    Multiplier { upper: 0x8653bb843ae625f103f0d21f05c20327, lower: 0xf6190aa2ce66e8cc56fae7768c580564 }, // 3221
    Multiplier { upper: 0xd6ec5f39f7d6a31b39815031a2d0050c, lower: 0xbcf4ddd14a3e4146f191725746f33bd2 }, // 3222
    Multiplier { upper: 0xabf04c2e5fdee8e29467735ae8a66a70, lower: 0x972a4b0dd4fe9a9f27a78eac38c29642 }, // 3223
    Multiplier { upper: 0x898d09beb318ba4edd1f8f7bed51eec0, lower: 0x78eea2717732154c1fb93ef02d687835 }, // 3224
    Multiplier { upper: 0xdc14dc6451c12a17c8327f2caee97e00, lower: 0xc17dd0b58b835546992864b37bda59ee }, // 3225
    Multiplier { upper: 0xb010b050416754dfd35b98f08bedfe67, lower: 0x013173c46f9c44387a86b6f5fcaeae58 }, // 3226
    Multiplier { upper: 0x8cda26a69ab910b30f7c7a5a098b31ec, lower: 0x00f45c9d26169cf9fb9ef8c4ca255846 }, // 3227
    Multiplier { upper: 0xe15d0aa42ac1b451b260c3c342784fe0, lower: 0x0186fa9509bdc7f65f64c13add088d3d }, // 3228
    Multiplier { upper: 0xb44a6ee9bbce29daf51a3635cec6a64c, lower: 0xce05954407cb065eb2b700fbe406d764 }, // 3229
    Multiplier { upper: 0x903b8bee2fd8217bf7482b5e3f0551d7, lower: 0x0b37aa9cd308d1e55bc59a631cd245ea }, // 3230
    Multiplier { upper: 0xe6c5acb04c8d025ff20d123064d54fbe, lower: 0x785910faeb414fd55fa2909e9483a310 }, // 3231
    Multiplier { upper: 0xb89e23c03d3d9b7ff4d741c050aaa631, lower: 0xf9e0da6255cdd9777fb5407edd361c0d }, // 3232
    Multiplier { upper: 0x93b1b633643149332a45ce3373bbb827, lower: 0xfb1a484eab0b145f995dcd324a91b00a }, // 3233
    Multiplier { upper: 0xec4f89ebd3820eb843a2e38585f926a6, lower: 0x5e9073b111ab53cc2896151d441c4cdd }, // 3234
    Multiplier { upper: 0xbd0c6e5642ce722d02e8b6046b2db885, lower: 0x18738fc0daef763ced44ddb10349d717 }, // 3235
    Multiplier { upper: 0x973d2511cf0b8e8a68ba2b36bc24939d, lower: 0xad293fcd7bf2c4fd8a9d7e2735d4ac13 }, // 3236
    Multiplier { upper: 0xf1fb6e82e4df4a770df6ab8ac6a0ec2f, lower: 0x7b7532e25fead4c8ddc8c9d856211351 }, // 3237
    Multiplier { upper: 0xc195f20250b2a1f8d7f8893bd21a568c, lower: 0x62c428b51988aa3a4b0707e044e742a7 }, // 3238
    Multiplier { upper: 0x9ade5b350d5bb4c7132d3a9641aeaba3, lower: 0x823686f747a0882ea26c064d03ec3552 }, // 3239
    Multiplier { upper: 0xf7ca2b88155f87a4eb7b90f069177905, lower: 0x9d240b253f67404a9d79a3ae6cad221d }, // 3240
    Multiplier { upper: 0xc63b5606777f9fb722c940c05412c737, lower: 0xb0e9a28432b9003bb12e1c8b8a241b4b }, // 3241
    Multiplier { upper: 0x9e95de6b92cc7fc5b56dcd66a9a89f5f, lower: 0xc0bae869c22d99c95a8b4a093b5015d5 }, // 3242
    Multiplier { upper: 0xfdbc9712847a6609224948a442a76566, lower: 0x012b0d76037c29422a7876752bb35622 }, // 3243
    Multiplier { upper: 0xcafd45a869fb84d41b6dd3b69bb91deb, lower: 0x3422712b35fcedce88605ec422f5de82 }, // 3244
    Multiplier { upper: 0xa26437b9ee62d0a9af8b0fc54960e4bc, lower: 0x29b52755c4ca57d86d19e569b5917ece }, // 3245
    Multiplier { upper: 0x81e9c62e584f0d548c6f3fd10780b6fc, lower: 0xee2a85de37084646bdae51215e0dff0c }, // 3246
    Multiplier { upper: 0xcfdc704a26e4e220e0b1ffb4d8cdf194, lower: 0xb04409638b4070712f7d4e9bc9affe79 }, // 3247
    Multiplier { upper: 0xa649f36e8583e81a4d5b32f713d7f476, lower: 0xf369a11c6f66c05a8c643ee307bffec7 }, // 3248
    Multiplier { upper: 0x8507f5f20469867b7115c25f431329f8, lower: 0xc2bae749f2b899e209e9cbe8d2ffff06 }, // 3249
    Multiplier { upper: 0xd4d989833a4270c581bc6a3204eb765a, lower: 0xd12b0ba9845a8fd00fdc797484cccb3c }, // 3250
    Multiplier { upper: 0xaa47a135c835270467c9ee8e6a55f848, lower: 0xa755a2ee037ba6400cb0612a03d708fd }, // 3251
    Multiplier { upper: 0x88394dc4a02a859d1fd4bed85511936d, lower: 0x52aae8be692fb8333d59e754cfdf3a64 }, // 3252
    Multiplier { upper: 0xd9f5493a99dda294ffbacaf3bb4f5248, lower: 0x8444a7970eb2c051fbc30bbae631f706 }, // 3253
    Multiplier { upper: 0xae5dd42ee17e1baa662f08c2fc3f7506, lower: 0xd036ec78d88f00419635a2fbeb5b2c05 }, // 3254
    Multiplier { upper: 0x8b7e4358b464e2eeb825a09bfcff90d2, lower: 0x402bf060ad3f3367ab5e1bfcbc48f004 }, // 3255
    Multiplier { upper: 0xdf306bc120a16b178d0900f994cc1aea, lower: 0x00464d677b98523f7896932dfa0e4cd3 }, // 3256
    Multiplier { upper: 0xb28d2300e6e788dfa40733fadd701588, lower: 0x00383dec62e041cc607875be61a50a42 }, // 3257
    Multiplier { upper: 0x8ed74f33ebec6d7fb66c29957df3446c, lower: 0xccf9cb23824d01704d2d2afeb4840835 }, // 3258
    Multiplier { upper: 0xe48bb1ecacad7bff8a46a8ef2feba0ae, lower: 0x14c2de9f36e19be6e1e1de6454067388 }, // 3259
    Multiplier { upper: 0xb6d627f08a246332d50553f28cbc808b, lower: 0x43cf187f5f1ae31f1b1b185043385c6d }, // 3260
    Multiplier { upper: 0x9244ecc06e83828f10d10ff53d639a09, lower: 0x030c139918e24f4c15af46a69c2d16be }, // 3261
    Multiplier { upper: 0xea07e133e4059db1b481b321fbd2900e, lower: 0x6b4685c1c16a1879bc4ba43dc6ae8ac9 }, // 3262
    Multiplier { upper: 0xbb3980f650047e27c39af5b4c975400b, lower: 0x890537ce3454e061636fb697d2253bd4 }, // 3263
    Multiplier { upper: 0x95c79a5ea669fe863615915d6df7666f, lower: 0xa0d0f971c37719e782bfc54641b76310 }, // 3264
    Multiplier { upper: 0xefa5c3caa3dcca705688e8957cbf0a4c, lower: 0x34818f1c6bf1c30c0466087069256b4d }, // 3265
    Multiplier { upper: 0xbfb7cfd54fe3d526aba0ba113098d509, lower: 0xc39ad8e3898e35a336b806c0541def71 }, // 3266
    Multiplier { upper: 0x995fd977731caa85561a2e7426e0aa6e, lower: 0x36157a4fa13e914f5ef99f00434b25f4 }, // 3267
    Multiplier { upper: 0xf56628bf1e94440889c37d86a49aaa49, lower: 0xf0225d4c3530e87efe5c319a05450986 }, // 3268
    Multiplier { upper: 0xc451ba327edd033a07cf979eea155507, lower: 0xf34eb109c42720659849c14804373ad1 }, // 3269
    Multiplier { upper: 0x9d0e2e8ecbe40294d30c794bee777739, lower: 0x8f72273b0352805146a1676cd02c2f0e }, // 3270
    Multiplier { upper: 0xfb49e417aca0042151ad8edfe3f2585c, lower: 0x18b6a52b388400820a9bd8ae19e04b49 }, // 3271
    Multiplier { upper: 0xc907e9ac8a199ce7748ad8b31cc1e049, lower: 0xad5eea88fa03339b3bafe08b47e6a2a1 }, // 3272
    Multiplier { upper: 0xa0d32156d4e14a52c3a246f5b09b19d4, lower: 0x8ab2553a619c2948fc8cb3a29febb54e }, // 3273
    Multiplier { upper: 0x80a8e778aa4dd50f02e838c48d48e176, lower: 0xd55b7761e7b0210730708fb54cbc910b }, // 3274
    Multiplier { upper: 0xcddb0bf443afbb4b37d9f46daedb0257, lower: 0xbbc58bcfd919ce71e71a7f887ac74e78 }, // 3275
    Multiplier { upper: 0xa4af3cc3695962a29314c38af248ceac, lower: 0x9637a30cadae3ec185aecc6d2f05d860 }, // 3276
    Multiplier { upper: 0x83bf63cf877ab54edc109c6f283a3ef0, lower: 0x782c82708af1cbce048bd6bdbf37e04d }, // 3277
    Multiplier { upper: 0xd2cbd2e5a5912217c680fa4b739064b3, lower: 0xf37a6a4dab1c7949a0dfbdfc652633ae }, // 3278
    Multiplier { upper: 0xa8a30f1e1e0db4dfd200c83c5c7383c3, lower: 0x292ebb7155b06107b3e63196b751c2f2 }, // 3279
    Multiplier { upper: 0x86e8d8e4e4d7c3e6419a39c9e38f9c9c, lower: 0x20f22f8dde26b4062984f47892a7cf28 }, // 3280
    Multiplier { upper: 0xd7daf4a16e26063d35c38fa96c18fa93, lower: 0x67e9e5afc9d78670426e53f41dd94b73 }, // 3281
    Multiplier { upper: 0xacaf2a1abe84d1ca91693fbabce0c875, lower: 0xecbb1e263b12d1f368584329b17aa2c2 }, // 3282
    Multiplier { upper: 0x8a25bb48986a416edaba996230b3d391, lower: 0x8a2f4b51c8dbdb2920469c215ac88235 }, // 3283
    Multiplier { upper: 0xdd092ba75a439be4912a8f03811fb8e8, lower: 0xdd187882daf95ea833a42d022ada69ee }, // 3284
    Multiplier { upper: 0xb0d422ec4836165074220c02cdb2fa53, lower: 0xe413939be26118868fb68a68224854bf }, // 3285
    Multiplier { upper: 0x8d768256a02b450d29b4d668a48f2ea9, lower: 0x8342dc7cb51a7a053fc53b8681d376ff }, // 3286
    Multiplier { upper: 0xe25736f100453b4842baf0a76db1e442, lower: 0x6b9e2d9454f729a1ffa1f8d7361f24cb }, // 3287
    Multiplier { upper: 0xb512925a669dc9069bc8c085f15b1d01, lower: 0xefb1be1043f8ee1b32e7fa45c4e5b709 }, // 3288
    Multiplier { upper: 0x90dba8485217d405496d66d18de27d9b, lower: 0x2627cb403660be7c28b995049d84926e }, // 3289
    Multiplier { upper: 0xe7c5da0d50262008757bd7b5afd0c8f8, lower: 0x3d0c7866bd67972d0df5bb3a95a0ea49 }, // 3290
    Multiplier { upper: 0xb96b14d77351b339f796462af30d6d93, lower: 0x6409f9ebcab945bda4c495c877b3eea1 }, // 3291
    Multiplier { upper: 0x9455aa45f5daf5c7f94504ef28d78adc, lower: 0x5007fb23089437caea36de39f95cbee7 }, // 3292
    Multiplier { upper: 0xed55dd3cbc91893ff53b3b184158de2d, lower: 0x4cd991d1a7538c77dd2496c3289464a5 }, // 3293
    Multiplier { upper: 0xbdde4a96fd413a9990fc2f469aad7e8a, lower: 0xa3e1417485dc705fe41d4568ed4383b7 }, // 3294
    Multiplier { upper: 0x97e50878ca9a9547a73025d21557986e, lower: 0xe981012a04b059e650176aba5769362c }, // 3295
    Multiplier { upper: 0xf3080d8e10f7553f71e6a2e9bbbf5a4b, lower: 0x0f34cea9a11a2970802577908bdb89e0 }, // 3296
    Multiplier { upper: 0xc26cd7a4da5f7765f4b882549632aea2, lower: 0x7290a55480e1bac066845fa6d6493b1a }, // 3297
    Multiplier { upper: 0x9b8a461d7b7f92b7f6fa01dd44f55881, lower: 0xf54084439a4e2f0052037fb8ab6dc8e1 }, // 3298
    Multiplier { upper: 0xf8dd3cfbf8cc1df324c3362ed4bbc0cf, lower: 0xeecda06c2a16b19a1cd265f4457c749c }, // 3299
    Multiplier { upper: 0xc71763fcc709b18f509c2b58aa2fcd73, lower: 0x25714d2354def47b4a41eb29d1305d49 }, // 3300
    Multiplier { upper: 0x9f45e99705a15ad90d49bc46ee8ca45c, lower: 0x1df43db5dd7f29fc3b67ef54a759e43b }, // 3301
    Multiplier { upper: 0xfed6428b3c355e281542c6d7e4143a2c, lower: 0xfcb9fc562f31dcc6c573188772296d2b }, // 3302
    Multiplier { upper: 0xcbde9ba296911820110238acb67694f0, lower: 0xca2e637825c17d6bd128e06c5b545755 }, // 3303
    Multiplier { upper: 0xa3187c82120dace67401c6f091f87727, lower: 0x08251c601e34645640ed8056af76ac44 }, // 3304
    Multiplier { upper: 0x8279fd34db3e23eb90016bf3a7f9f8ec, lower: 0x068416b34b5d1d11cd8acd1225f889d0 }, // 3305
    Multiplier { upper: 0xd0c32ebaf8636cac199bdfec3ff65b13, lower: 0x3da02452122e94e948de14e9d65a761a }, // 3306
    Multiplier { upper: 0xa7028bc8c6b5f089ae164cbcfff848dc, lower: 0x314ce9db41bedd876d7e772178485e7b }, // 3307
    Multiplier { upper: 0x859ba307055e5a07be783d63fff9d3e3, lower: 0x5aa3ee4901657e05f131f8e7936d1863 }, // 3308
    Multiplier { upper: 0xd5c5d1a4d563c33f9726c89ffff61fd2, lower: 0x2a9fe3a8023bfcd64eb65b0c1f14f3d1 }, // 3309
    Multiplier { upper: 0xab04a7b7111c9c32df523a199991b30e, lower: 0x887fe95334fcca450bc515a34c10c30e }, // 3310
    Multiplier { upper: 0x88d0862c0db07cf57f74fb47ae0e28d8, lower: 0x6d33210f5d9708373c9daae909a70271 }, // 3311
    Multiplier { upper: 0xdae73d13491a6188cbee5ed9167d0e27, lower: 0x151e9b4bc8f1a6bec762ab0e75d803e8 }, // 3312
    Multiplier { upper: 0xaf1f640f6daeb46d6ff1e57a78640b52, lower: 0x774baf6fd3f485656c4eef3ec4accfed }, // 3313
    Multiplier { upper: 0x8c191cd9248bc38abff4b7952d1cd5db, lower: 0x92a2f2bfdcc39deabd0bf2989d570cbe }, // 3314
    Multiplier { upper: 0xe0282e283a7938ddffedf288482e22f8, lower: 0xea9e5132fad2964461acb75a95581463 }, // 3315
    Multiplier { upper: 0xb35358202ec760b1998b286d068b4f2d, lower: 0x887ea75bfbdbab69e7bd5f7baaacdd1c }, // 3316
    Multiplier { upper: 0x8f75e019bf05e6f47ad5b9f0d2090c24, lower: 0x6d321f7cc97c89218631192fbbbd7db0 }, // 3317
    Multiplier { upper: 0xe589668f980971872aef8fe7b674e03a, lower: 0x485032614260db68d6b4f5192c6262b3 }, // 3318
    Multiplier { upper: 0xb7a11ed9466df46c22593fec91f719c8, lower: 0x39d9c1e7684d7c53def72a7a89e84ef5 }, // 3319
    Multiplier { upper: 0x92e74be10524c389b5143323a7f8e16c, lower: 0xfb149b1f86a463764bf8eec86e53725e }, // 3320
    Multiplier { upper: 0xeb0bac9b3b6e05a921b9eb6c3ff49be1, lower: 0x91ba91cc0aa09f23acc17e0d7d525096 }, // 3321
    Multiplier { upper: 0xbc0956e295f19e20e7c7ef89ccc3afe7, lower: 0xa7c874a33bb3b282f09acb3dfddb73ab }, // 3322
    Multiplier { upper: 0x966ddf1bab27b1b3ec9ff2d4a3cfbfec, lower: 0x8639f6e8fc8fc2025a156f64cb15f623 }, // 3323
    Multiplier { upper: 0xf0afcb5f783f82b97a9984876c7f997a, lower: 0x705cbe419419366a29bbe56e11bcbd04 }, // 3324
    Multiplier { upper: 0xc08ca2b2c69935612ee136d2bd32e12e, lower: 0xc04a31ce10142b8821631df1a7ca30d0 }, // 3325
    Multiplier { upper: 0x9a0a1bc2387a911a8be75f0efdc24dbf, lower: 0x003b5b0b401022d34de8e4c15308270d }, // 3326
    Multiplier { upper: 0xf67692d05a5db4f7463efe7e62d07c64, lower: 0xcd2bc4decce69e1ee30e3aceeb403e7b }, // 3327
    Multiplier { upper: 0xc52ba8a6aeb15d929e98cb984f0d3050, lower: 0xa42303e570b87e7f1c0b623f2299cb96 }, // 3328
    Multiplier { upper: 0x9dbc86ebbef44adbb213d6137270f373, lower: 0xb68269845a2d31ff49a2b4ff4ee16fab }, // 3329
    Multiplier { upper: 0xfc60d7df97ed4492b686235250b4b8b9, lower: 0x2403dc06f6aeb665429dee654b024c45 }, // 3330
    Multiplier { upper: 0xc9e7131946576a0ef86b4f750d5d6094, lower: 0x1ccfe338c55891ea9bb18b843c01d69e }, // 3331
    Multiplier { upper: 0xa185a8e10512bb3f2d22a5f73de44d43, lower: 0x4a3fe8fa377a0e55495ad6036334abb1 }, // 3332
    Multiplier { upper: 0x8137ba4d9da895cc241bb7f8fe503dcf, lower: 0x6e99872e92c80b776de244cf8290895b }, // 3333
    Multiplier { upper: 0xcebf907c2f7422e039c5f327fd4d2fb2, lower: 0x4a8f3eb0ead9abf2496a07b26a80dbc4 }, // 3334
    Multiplier { upper: 0xa5660d3025f6824cfb04c286643dbfc1, lower: 0xd53f655a557aeff5078806285533e303 }, // 3335
    Multiplier { upper: 0x8451a42684c5350a626a353850316634, lower: 0xaa991de1ddfbf32a6c6cd1b9ddc31c03 }, // 3336
    Multiplier { upper: 0xd3b5d370d46ebb43d0a9eec0804f09ed, lower: 0xddc1c969632cb843e0ae1c5c9604f99e }, // 3337
    Multiplier { upper: 0xa95e42c0a9f22f6973bb2566cd0c07f1, lower: 0x7e34a1211c23c69cb3be7d16de6a614b }, // 3338
    Multiplier { upper: 0x877e9bcd54c1bf878fc8eab8a4099ff4, lower: 0x64f6e74db01c9ee3c2feca78b1eeb43c }, // 3339
    Multiplier { upper: 0xd8ca92e22135ff3f4c74aac10675ccba, lower: 0x3b24a54919c7649f9e647727831786c6 }, // 3340
    Multiplier { upper: 0xad6edbe81a9198ff705d5567385e3d61, lower: 0xc8ea1dd4149f83b2e51d2c1f9c12d238 }, // 3341
    Multiplier { upper: 0x8abf165348747a65f37dddec2d18311b, lower: 0x0721b17676e602f58417567fb00f0e94 }, // 3342
    Multiplier { upper: 0xddfe8a1eda53f70985962fe04826b4f8, lower: 0x0b691bf0be3cd188d3588a65e67e7db9 }, // 3343
    Multiplier { upper: 0xb1986e7f150ff8d46ade8cb36cebc3f9, lower: 0xa2ba7cc09830a7a0a913a1eb1ecb97c7 }, // 3344
    Multiplier { upper: 0x8e138b98dda660a9ef18708f8a563661, lower: 0x4efb970079c0861a20dc8188e56fac9f }, // 3345
    Multiplier { upper: 0xe35278f495d7010fe4f3e74c1089f09b, lower: 0xb1928b33f600d69034940274a24c4765 }, // 3346
    Multiplier { upper: 0xb5db93f6de459a731d8fec3cda07f3af, lower: 0xc14208f65e67120cf6dccec3b509d2b7 }, // 3347
    Multiplier { upper: 0x917c765f1837aec27e0cbcfd7b398fbf, lower: 0xcdce6d91e51f41a3f8b0a5695da17560 }, // 3348
    Multiplier { upper: 0xe8c723cb59f2b1373014619591f5b2cc, lower: 0x7c7d7c1ca1cb9c398de76f0efc358899 }, // 3349
    Multiplier { upper: 0xba38e96f7b288dc5c0104e1141915bd6, lower: 0xc9fdfce3b4a2e3613e52bf3f302ad3ad }, // 3350
    Multiplier { upper: 0x94fa54592f53a49e33403e7434744978, lower: 0xa197fd82f6e8b5e7650eff65c02242f1 }, // 3351
    Multiplier { upper: 0xee5d53c1e552a0fd1ecd30b9ed86dbf4, lower: 0x35bffc04be41230bd4e4cbd60036d182 }, // 3352
    Multiplier { upper: 0xbeb10fce510ee730e570f3c7f138aff6, lower: 0x91666336fe9a826fdd83d644ccf8a79b }, // 3353
    Multiplier { upper: 0x988da63ea73f1f5a5127296cc0fa265e, lower: 0xdab84f5f321535264acfde9d70c6ec7c }, // 3354
    Multiplier { upper: 0xf415d6caa531cbc3b50b757ace5d0a31, lower: 0x5df3b231e9bb883d447fca95813e472d }, // 3355
    Multiplier { upper: 0xc344abd550f4a302f73c5dfbd84a6e8d, lower: 0xe4c2f4f4bafc6cfdd0663baacdcb6c24 }, // 3356
    Multiplier { upper: 0x9c36efddda5d4f359296b19646a1f20b, lower: 0x1d68c3f6fbfd23fe4051c955716f89b6 }, // 3357
    Multiplier { upper: 0xf9f17fc95d621855b757828a0a9cb678, lower: 0x2f0e0657f99506639a1c7555824c0f8a }, // 3358
    Multiplier { upper: 0xc7f4663ab11b46aaf912ced4d54a2b93, lower: 0x58d805132e10d1e94816c444683cd93b }, // 3359
    Multiplier { upper: 0x9ff6b82ef415d22260dbd8aa443b560f, lower: 0x7a466a75be73db2106789d0386971430 }, // 3360
    Multiplier { upper: 0xfff126b186895037015fc1106d2bbce5, lower: 0x9070aa55fd862b680a5a94d270f1b9e5 }, // 3361
    Multiplier { upper: 0xccc0ebc1386dd9c59ab300d9f0efca51, lower: 0x405a21de646b55ecd51543db8d8e2e51 }, // 3362
    Multiplier { upper: 0xa3cd89676057e16ae228cd7b27263b74, lower: 0x337b4e4b8389118a441103160ad8250e }, // 3363
    Multiplier { upper: 0x830ad452b37981224e870ac8ec1e95f6, lower: 0x8f95d83c693a746e9cda68de6f1350d8 }, // 3364
    Multiplier { upper: 0xd1aaed511f28ce9d4a71aadb13642324, lower: 0x18efc060a85d8717615d7497181ee7c0 }, // 3365
    Multiplier { upper: 0xa7bbf10db2870bb1085aef15a91ce8e9, lower: 0xad8c99e6ed179f45e77df6df467f1fcd }, // 3366
    Multiplier { upper: 0x862ff40af538d62739e258de20e3ed87, lower: 0xbe0a14b8bdac7f6b1f97f8b29ecc1971 }, // 3367
    Multiplier { upper: 0xd6b32011885af03ec303c16367d315a5, lower: 0xfcdcedf462ad98ab65bff450fe135be7 }, // 3368
    Multiplier { upper: 0xabc2800e06af26989c03011c530f4484, lower: 0xca4a57f6b557ad55eafff6a731a91653 }, // 3369
    Multiplier { upper: 0x896866719ef28546e3359a7d0f3f6a03, lower: 0xd508465ef7795777ef332bb8f487450f }, // 3370
    Multiplier { upper: 0xdbda3d8297ea6ed7d1ef5d94e5324339, lower: 0x54da0a318bf558bfe51eac5b20d86e7e }, // 3371
    Multiplier { upper: 0xafe1cacedfeebf130e5917aa50f50294, lower: 0x43e1a1c13cc446ffea7ef048e7138b98 }, // 3372
    Multiplier { upper: 0x8cb4a23f198bcc0f3eadac8840c40210, lower: 0x364e1b00fd69d266553259d3ec0fa2e0 }, // 3373
    Multiplier { upper: 0xe121039828dface53115e0da01399ce6, lower: 0xbd49c4ce6242ea3d551d5c86467f6b00 }, // 3374
    Multiplier { upper: 0xb41a69468719571dc0de4d7b342e171e, lower: 0xfdd49d71e835883110e44a050532bc00 }, // 3375
    Multiplier { upper: 0x9015210538e1127e33e50ac8f68b45b2, lower: 0x64aa178e535e068da71d080404289667 }, // 3376
    Multiplier { upper: 0xe68834d527ce83fd1fd4de0e57453c50, lower: 0xa11025b085633daf71c80cd339da8a3d }, // 3377
    Multiplier { upper: 0xb86cf710eca536641977180b79043040, lower: 0x80d9b7c06ab5caf2c16cd70f617ba1cb }, // 3378
    Multiplier { upper: 0x938a5f40bd50f850145f466f940359cd, lower: 0x33e15fcd222b08c234571272b462e7d6 }, // 3379
    Multiplier { upper: 0xec109867954e5a19ba320a4c20055c7b, lower: 0x8635661503780e0386f1b71ded6b0c89 }, // 3380
    Multiplier { upper: 0xbcda1386110b7b47c828083ce66ab062, lower: 0xd1c451aa692cd802d25af8e4bdef3d3a }, // 3381
    Multiplier { upper: 0x9714dc6b40d5fc396cecd363eb888d1b, lower: 0xdb0374885423e00241e260b6fe58fdc8 }, // 3382
    Multiplier { upper: 0xf1bafa453489938f14ae1f0645a7482c, lower: 0x919f20da2039666a0303cdf196f4c940 }, // 3383
    Multiplier { upper: 0xc16261d0f6d4760c108b4c050485d356, lower: 0xdae5b3e1b3611ebb359ca4c14590a100 }, // 3384
    Multiplier { upper: 0x9ab51b0d924391a3406f7004039e42ab, lower: 0xe2515cb48f80e562914a1d676ada1a67 }, // 3385
    Multiplier { upper: 0xf7882b48ea05b5d200b24cd338fd3779, lower: 0x6a1bc7874c016f041ba9c8a577c35d71 }, // 3386
    Multiplier { upper: 0xc6068907219e2b0e66f50a4293fdc5fa, lower: 0xbb496c6c3ccdf269afbb06eac635e45a }, // 3387
    Multiplier { upper: 0x9e6ba0d2814b55a51f2a6e9ba997d195, lower: 0x62a12389ca3e5b87bfc8d2556b5e5048 }, // 3388
    Multiplier { upper: 0xfd790150cedeef6e9843e42c428c8288, lower: 0x9dce9f42dd309272cc7483bbdefd4d40 }, // 3389
    Multiplier { upper: 0xcac73440a57f25f2136983569ba39ba0, lower: 0x7e3ee5cf175a0ec23d2a02fcb2643dcd }, // 3390
    Multiplier { upper: 0xa238f69a1dff518e75ee02abafb61619, lower: 0xfe98b7d8df7b3f01ca880263c1e9cb0b }, // 3391
    Multiplier { upper: 0x81c72bae7e65dad85e580222f2f811ae, lower: 0x6546f97a4c6298ce3ba001e967ee3c09 }, // 3392
    Multiplier { upper: 0xcfa512b0ca3c915a308cd037eb2682b0, lower: 0xa20b28c3ad6a8e16c5cccfdbd97d2cda }, // 3393
    Multiplier { upper: 0xa61da88d6e96daae8d3d735fef520226, lower: 0xe808ed69578871abd170a6497aca8a48 }, // 3394
    Multiplier { upper: 0x84e486d78babe2253dcac2b325db34eb, lower: 0xecd3f12112d38e230df3b83ac8a2083a }, // 3395
    Multiplier { upper: 0xd4a0d7bf45dfd03b96113785095ebb13, lower: 0x14864e9b51527d04e31f8d2ada9cd9f6 }, // 3396
    Multiplier { upper: 0xaa1a46329e4ca69611a75f9da11895a8, lower: 0xdd383ee2a77530d0b5b2d7557bb0ae5e }, // 3397
    Multiplier { upper: 0x881504f54b708544daec4c7e1a7a1153, lower: 0xe42cff1bb92a8d73c48f12aac95a2518 }, // 3398
    Multiplier { upper: 0xd9bb3b22124da207c4ad47302a5ce886, lower: 0x39e1982c5b7748b93a7e8444755d0827 }, // 3399
    Multiplier { upper: 0xae2f6281a83e1b396a2438f35517206b, lower: 0x61814689e2c5d3c761fed036c44a6cec }, // 3400
    Multiplier { upper: 0x8b591b9aecfe7c2dee8360c2aa78e6bc, lower: 0x4e01053b1bd176391b32402bd03b8a56 }, // 3401
    Multiplier { upper: 0xdef4f8f7e1972d164a6bce0443f4a460, lower: 0x7cce6ec4f94f238e91ea004619f8dd57 }, // 3402
    Multiplier { upper: 0xb25d93f98145bdab6ebca4d0365d504d, lower: 0x30a5256a610c1c720e54cd04e193e446 }, // 3403
    Multiplier { upper: 0x8eb1432e010497bc5896ea402b7dd9d7, lower: 0x5a1db7884da349f4d843d7371adcb69e }, // 3404
    Multiplier { upper: 0xe44ed1e334d425fa2757dd3378c95c8b, lower: 0xc362bf407c3876548d3958582afabdca }, // 3405
    Multiplier { upper: 0xb6a574b5c3dceb2e85dfe4292d6de3a3, lower: 0x02b565cd302d2b76d7611379bbfbcb08 }, // 3406
    Multiplier { upper: 0x921df6f7cfe3ef586b1983542457e94f, lower: 0x355deb0a8cf0ef9245e742c7c9963c06 }, // 3407
    Multiplier { upper: 0xe9c98b26196cb22711c26bb9d3bfdbb1, lower: 0xeefcab4414b4b283a30b9e0c75bd2cd7 }, // 3408
    Multiplier { upper: 0xbb07a284e123c1b8db01efc7dc997c8e, lower: 0x58ca229cdd5d5b9c826fb1a3916423df }, // 3409
    Multiplier { upper: 0x959fb5371a830160af34bfd316e13071, lower: 0xe0a1b54a4ab11616cebfc14fa7834fe6 }, // 3410
    Multiplier { upper: 0xef65eebe90d19bcde52132eb57ceb3e9, lower: 0x676922107781bcf14acc687f726bb309 }, // 3411
    Multiplier { upper: 0xbf84befeda414971841a8f22aca55cba, lower: 0xb920e80d2c67ca5aa23d2065f522f5a1 }, // 3412
    Multiplier { upper: 0x9936ff3248343ac1367ba5b556eab095, lower: 0x60e7200a89eca1e21b6419eb2a825e1a }, // 3413
    Multiplier { upper: 0xf524cb83a6b9f79b8a5f6f888b111a88, lower: 0x9b0b6677431436369239c311dd9d635d }, // 3414
    Multiplier { upper: 0xc41d6f9c856192e2d5192606d5a7486d, lower: 0x48d5eb929c102b5edb6168db17b11c4a }, // 3415
    Multiplier { upper: 0x9ce4594a044e0f1bddadb80577b906bd, lower: 0xd3de560ee34022b2491aba48dfc0e36f }, // 3416
    Multiplier { upper: 0xfb06f5433a167e92fc49266f25f4d796, lower: 0x1fca234b05336ab6db5df6daff9b057e }, // 3417
    Multiplier { upper: 0xc8d25dcf61ab987596a0eb8c1e5d7944, lower: 0xe63b4f6f375c555f15e4c57bffaf3798 }, // 3418
    Multiplier { upper: 0xa0a84b0c4e22e05e121a5609b1e46103, lower: 0xeb62a5f292b0444c1183d12fffbf5fad }, // 3419
    Multiplier { upper: 0x8086a2703e824d180e7b7807c18380cf, lower: 0xef821e5ba88d03700e030dbfffcc4c8a }, // 3420
    Multiplier { upper: 0xcda43719fd9d48267d9259a6026c014c, lower: 0xb269ca2c40e19f19b004e2cccc7a1410 }, // 3421
    Multiplier { upper: 0xa4835f47fe176ceb97a847b801f0010a, lower: 0x2854a1bd00b47f47c003e8a3d6c8100d }, // 3422
    Multiplier { upper: 0x839c4c399812bd8946203960018ccda1, lower: 0xb9dd4e30cd5d329fcccfed4fdf06733e }, // 3423
    Multiplier { upper: 0xd293ad28f3512f4209cd28999c147c35, lower: 0xf62ee38148951dcc7ae6487fcb3d852f }, // 3424
    Multiplier { upper: 0xa8762420c2a75901a170ed47b010635e, lower: 0x5e8be9343a10e4a3958506cca2979dc0 }, // 3425
    Multiplier { upper: 0x86c4e9b3ceec47348127243959a6b5e5, lower: 0x186fedc361a71d4faad0d23d4edfb166 }, // 3426
    Multiplier { upper: 0xd7a175ec7e46d85401d839f55c3defd4, lower: 0xf3e649389c3e954c4481506217cc4f0a }, // 3427
    Multiplier { upper: 0xac812b239838ad100179c7f77cfe5977, lower: 0x298507607cfeddd69d34404e79703f3b }, // 3428
    Multiplier { upper: 0x8a00ef4facfa240ccdfb065f9731e12c, lower: 0x21373919fd98b1787dc366a52df365c9 }, // 3429
    Multiplier { upper: 0xdcce4bb2ae5d067ae32b3d65beb63513, lower: 0x68585b5cc8f44f272f9f0aa1e31f0941 }, // 3430
    Multiplier { upper: 0xb0a5095bbeb0d1fbe8ef6451655e90dc, lower: 0x5379e2b0a0c37285bfb26ee7e8e5a101 }, // 3431
    Multiplier { upper: 0x8d50d449655a419653f2b6a7844ba716, lower: 0xa92e4ef3b3cf8ed1662858b9871e1a67 }, // 3432
    Multiplier { upper: 0xe21aed423bc39c23b98457726d45d824, lower: 0x41e3b185ec7f4ae8a373c128d8302a3f }, // 3433
    Multiplier { upper: 0xb4e257682fcfb01c9469df8ebdd179b6, lower: 0x9b1c8e04bd32a253b5f63420acf354ff }, // 3434
    Multiplier { upper: 0x90b512b9bfd959b076bb193efe412e2b, lower: 0xaf4a0b36fdc21b762b2b5ce6f0c2aa66 }, // 3435
    Multiplier { upper: 0xe7881df5ffc2291a5791c1fe639b7d12, lower: 0xb21011f196035f237845617181377709 }, // 3436
    Multiplier { upper: 0xb939b191996820e1dfa7ce651c7c640e, lower: 0xf4d9a7f47802b282c69de78e00f92c07 }, // 3437
    Multiplier { upper: 0x942e27a7adece71b19530b8416c9e9a5, lower: 0x90ae1ff6c6688ecf054b1fa4cd942339 }, // 3438
    Multiplier { upper: 0xed16a5d91647d82b5bb8126cf1430f6f, lower: 0x4de36657a3da7e18087832a148ed0528 }, // 3439
    Multiplier { upper: 0xbdabb7e0de9fe022afc67523f435a5f2, lower: 0xa4b5eb794fe1fe79a060288107240420 }, // 3440
    Multiplier { upper: 0x97bc931a4bb319b5596b90e9902aeb28, lower: 0x83c4bc610cb4cb94804ced3405b669b3 }, // 3441
    Multiplier { upper: 0xf2c751c3ac51c2bbc245b4a8e6ab11da, lower: 0x6c6dfa34e12145ba66e17b866f8a42b8 }, // 3442
    Multiplier { upper: 0xc2390e3623749bc96837c3ba522274ae, lower: 0xbd24c82a4db437c8524dfc6b8c6e9bc7 }, // 3443
    Multiplier { upper: 0x9b60d82b4f907ca1202c9c950e81f6f2, lower: 0x30ea39bb715cf96d0ea4c9efa38bafd2 }, // 3444
    Multiplier { upper: 0xf89af3787f4d9435004760ee7d9cbe50, lower: 0x4e438f924efb28ae7dd4764c38df7fb6 }, // 3445
    Multiplier { upper: 0xc6e25c6065d7a9c400391a58647d650d, lower: 0x0b693fa83f2f53becb105ea360b2cc92 }, // 3446
    Multiplier { upper: 0x9f1b7d19eb12ee36669415138397840a, lower: 0x6f876620328c42ff08d9e54f808f0a0e }, // 3447
    Multiplier { upper: 0xfe9261c311b7e38a3db9bb526c25a010, lower: 0xb2723d0050e06b31a7c3087f34181017 }, // 3448
    Multiplier { upper: 0xcba84e35a7c64fa1cafafc41f01e19a6, lower: 0xf52830cd0d8055c153026d3290134012 }, // 3449
    Multiplier { upper: 0xa2ed0b5e1fd1d94e3bfbfd018ce4e152, lower: 0x5db9c0a40acd1167759b8a8ed9a9000f }, // 3450
    Multiplier { upper: 0x82573c4b4ca7e10b632ffd9ad71d810e, lower: 0xb16166e9a23da785f7afa20be154000c }, // 3451
    Multiplier { upper: 0xd08b93abadd96812384cc8f7be959b4a, lower: 0xb568a4a90395d8d65919034635533346 }, // 3452
    Multiplier { upper: 0xa6d60fbc8b145341c6a3d3f965447c3b, lower: 0xc453b6ed9c77e0ab7a7a6904f775c29f }, // 3453
    Multiplier { upper: 0x85780c96d5a9dc349ee976611dd06363, lower: 0x03762bf149f980892ec85403f92b0219 }, // 3454
    Multiplier { upper: 0xd58ce0f155dc938764a8bd682fb3d238, lower: 0x0589dfe8765c00db7e0d53398eab368d }, // 3455
    Multiplier { upper: 0xaad71a5aab16dc6c5086fdecf2f641c6, lower: 0x6ad4b3205eb000af980aa8fad888f871 }, // 3456
    Multiplier { upper: 0x88ac151555abe389da0597f0c25e9b05, lower: 0x2243c2804bc0008c79a220c8ad3a605b }, // 3457
    Multiplier { upper: 0xdaacee88891305a95cd5bfe79d642b3b, lower: 0x6a06040079333413f5d03474485d66f7 }, // 3458
    Multiplier { upper: 0xaef0bed3a0dc04877d77ccb94ab688fc, lower: 0x54d19ccd2dc2900ff7d9c39039e4525f }, // 3459
    Multiplier { upper: 0x8bf3cbdc80b0039f97930a2dd55ed3fd, lower: 0x10a7b0a4249ba6732cae360cfb1d0eb3 }, // 3460
    Multiplier { upper: 0xdfec7960cde66c328c1e76afbbcaecc8, lower: 0x1aa5e76d075f70b8477d2347f82e7deb }, // 3461
    Multiplier { upper: 0xb323944d7185235ba34b92262fd58a39, lower: 0xaeeb1f8a6c4c5a2d05fdb5d32cf1fe55 }, // 3462
    Multiplier { upper: 0x8f4fa9d78e041c494f6fa81e8caad4fa, lower: 0xf255b2d52370482404caf7dc23f4cb78 }, // 3463
    Multiplier { upper: 0xe54c42f27cd360754be5d9ca7aaaee5e, lower: 0x50891e21d24d4039a144bfc69fee1259 }, // 3464
    Multiplier { upper: 0xb770358eca42b3910984ae3b95558b7e, lower: 0xa6d4181b0ea433614dd0996bb324db7a }, // 3465
    Multiplier { upper: 0x92c02ad8a1cef60da136f1c944446f98, lower: 0x857679af3ee9c2b43e407abc8f50af95 }, // 3466
    Multiplier { upper: 0xeacd115a9c7e567c3524b60ed3a0b28d, lower: 0xa257291864a93786ca00c460e54de5bb }, // 3467
    Multiplier { upper: 0xbbd7411549feab9690ea2b3f0fb3c20a, lower: 0xe845ba79ea20f938a19a36b3eaa4b7c9 }, // 3468
    Multiplier { upper: 0x9645cdaaa198894540bb55cc0c8fce6f, lower: 0x2037c861881a60fa1ae1c55cbbb6f96e }, // 3469
    Multiplier { upper: 0xf06faf7768f40ed5345eeface0e61718, lower: 0x338c73cf402a34c35e3608945f8b28af }, // 3470
    Multiplier { upper: 0xc059592c53f6724429e58c8a4d84df46, lower: 0x8fa38fd90021c3cf7e91a076b2d5ba26 }, // 3471
    Multiplier { upper: 0x99e11423765ec1d02184706ea46a4c38, lower: 0x72e93fe0cce7cfd9320e19f88f1161b8 }, // 3472
    Multiplier { upper: 0xf634ed058a313619cf3a4d7dd3dd46c0, lower: 0xb7db9967ae3fb2f51ce35cc0e4e89c59 }, // 3473
    Multiplier { upper: 0xc4f724046e8dc4e172950acb0fe4389a, lower: 0x2cafadec8b6628c4171c4a33ea53b047 }, // 3474
    Multiplier { upper: 0x9d928336bed7d0b45baa6f08d983607b, lower: 0x56f2f18a091e870345b03b5cbb7626a0 }, // 3475
    Multiplier { upper: 0xfc1d9ebdfe261aba2c43e4daf59f00c5, lower: 0x57eb1c100e973e6ba2b3922df8bd0a99 }, // 3476
    Multiplier { upper: 0xc9b14bcb31b81561bd031d7bf7b26704, lower: 0x4655b00cd878febc822941be60973bae }, // 3477
    Multiplier { upper: 0xa15aa308f493444e30cf4ac992f51f36, lower: 0x9eaaf33d79fa65639b5434984d45c958 }, // 3478
    Multiplier { upper: 0x81154f3a5d429d0b5a3f6f07a8c418f8, lower: 0x7eef28fdfb2eb782e2a9c3ad0a9e3aad }, // 3479
    Multiplier { upper: 0xce887ec3c86a94def6cbe4d90e068e5a, lower: 0x64b1db2ff84abf37d10f9f7b44305de1 }, // 3480
    Multiplier { upper: 0xa539ff0306bbaa4bf8a31d7a719ed848, lower: 0x508e48f32d0898f9740c7f95d026b181 }, // 3481
    Multiplier { upper: 0x842e659c0562eea32d4f4ac85ae579d3, lower: 0x73a50728f0d3ad945cd6cc77d9b88e01 }, // 3482
    Multiplier { upper: 0xd37d6f60089e4a9eaee54473c4a25c85, lower: 0x85d4d8418152af53c7be13f2f5f41667 }, // 3483
    Multiplier { upper: 0xa93125e66d4b6ee558b769f636e84a04, lower: 0x6b10ad01344225dc9fcb4328c4c3451f }, // 3484
    Multiplier { upper: 0x875a84b8576f8beaad5f87f82bed0803, lower: 0x88da2400f69b517d4ca29c209d690419 }, // 3485
    Multiplier { upper: 0xd890d45a257f46444898d98d1314d99f, lower: 0x415d0667f0f88262143760342f0e6cf5 }, // 3486
    Multiplier { upper: 0xad40a9e1b79905036d471470dc10ae19, lower: 0x01173853272d351b435f8029bf3ebd91 }, // 3487
    Multiplier { upper: 0x8a9a21815fad9d9c576c105a49a6f1ad, lower: 0x9a78f9dc1f575daf6919335498fefe0e }, // 3488
    Multiplier { upper: 0xddc368ceff7c2f608be01a2a0f7182af, lower: 0x5d8e5c93655895e574f51eedc197fce2 }, // 3489
    Multiplier { upper: 0xb16920a5993025e6d64ce1bb3f8e0225, lower: 0xe471e3a91de077eac3f74bf167acca4f }, // 3490
    Multiplier { upper: 0x8dedb3b7adc01e52450a4e2f660b34eb, lower: 0x1d27e95417e6c6556992a3278623d50c }, // 3491
    Multiplier { upper: 0xe315ec5916003083a1aa16b23cdebb11, lower: 0xc83fdbb9bfd7a3bbdc1dd1d8d69fbb46 }, // 3492
    Multiplier { upper: 0xb5ab237a780026cfb488122830b22f41, lower: 0x6cffe2faffdfb62fe34b0e471219629e }, // 3493
    Multiplier { upper: 0x9155b5fb9333523fc3a00e868d5b5901, lower: 0x23ffe8c8ccb2f8264f6f3e9f41ade87f }, // 3494
    Multiplier { upper: 0xe889232c1eb883993900173daef88e68, lower: 0x399974747ab7f3707f18643202afda64 }, // 3495
    Multiplier { upper: 0xba074f567efa02e0fa6678fe2593a520, lower: 0x2e145d29fbc65c59ff46b68e688caeb7 }, // 3496
    Multiplier { upper: 0x94d2a5decbfb3580c851fa64eadc8419, lower: 0xbe76b0ee630516ae65d22ba520708bc5 }, // 3497
    Multiplier { upper: 0xee1dd631465ebc0140832a3b1160d35c, lower: 0x63f11b1704d4f117095045d500b412d5 }, // 3498
    Multiplier { upper: 0xbe7e44f4384bc99a9a02882f411a42b0, lower: 0x4ff415ac03dd8dac07736b10cd5cdbde }, // 3499
    Multiplier { upper: 0x986503f6936fd47bae686cf29a7b688d, lower: 0x0cc344899cb13e2339292273d77d7cb2 }, // 3500
    Multiplier { upper: 0xf3d4d3241f1953f9170d7b1dc3f8a748, lower: 0x146ba0dc2de8636b8ea8371fbf2f2de9 }, // 3501
    Multiplier { upper: 0xc310a8e9b27aa99412712f4b032d52a0, lower: 0x10561a49be5382bc72202c1965bf57ed }, // 3502
    Multiplier { upper: 0x9c0d53ee2862214341f425d59c244219, lower: 0xa6ab483afea935638e80234784991324 }, // 3503
    Multiplier { upper: 0xf9aeecb0409d020536536fbc2d06d029, lower: 0x0aaba6c4caa8556c17336ba5a0f4eb6d }, // 3504
    Multiplier { upper: 0xc7bf23c033b0ce6a91dc59635738a687, lower: 0x3bbc856a3bb9ddf0128f89514d90bc57 }, // 3505
    Multiplier { upper: 0x9fcc1c99c2f3d855417d144f78fa1ed2, lower: 0x96306abb62fb17f3420c6ddaa473c9e0 }, // 3506
    Multiplier { upper: 0xffacfa8f9e52f3bb9bfb53b25b29caea, lower: 0x89e7112bd191bfeb9ce0afc43a52dc99 }, // 3507
    Multiplier { upper: 0xcc8a620c7ea8c2fc7cc90fc1e287d588, lower: 0x6e5274230e0e3322e3e6f30361dbe3ad }, // 3508
    Multiplier { upper: 0xa3a1e809feed68c9fd6da634b53977a0, lower: 0x5841f68271a4f5b5831f28cf817cb624 }, // 3509
    Multiplier { upper: 0x82e7ecd4cbf120a1978aeb5d5dc792e6, lower: 0xad019201f483f7c468e5ba3f9aca2b50 }, // 3510
    Multiplier { upper: 0xd1731487acb501028c11789562d8eb0a, lower: 0xae68e99cba6cbfa0a7d5f6cc2add121a }, // 3511
    Multiplier { upper: 0xa78f439fbd5d9a68700dfa111be0bc08, lower: 0x8b87214a2ebd661a1fde5f09bbe40e7b }, // 3512
    Multiplier { upper: 0x860c3619644ae1ed267194da7cb3c9a0, lower: 0x6f9f4dd4f2311e7b4cb1e5a1631cd863 }, // 3513
    Multiplier { upper: 0xd679f028a077cfe1d71c215d9452dc33, lower: 0xe5cbafbb1d1b63f87ab63c356b615a37 }, // 3514
    Multiplier { upper: 0xab94c020805fd98178e34de476a8b029, lower: 0x84a2f2fc17491cc6c891c9c455e77b60 }, // 3515
    Multiplier { upper: 0x8943cce6cd197acdfa4f718392208cee, lower: 0x03b58f3012a0e3d23a0e3b0377ec62b3 }, // 3516
    Multiplier { upper: 0xdb9fae3e14f59149907f1c05b69a7b16, lower: 0x6c55b1e684349fb6c349f8058cad6ab8 }, // 3517
    Multiplier { upper: 0xafb2f1cb43f7a76e0d327cd15ee1fc11, lower: 0xf0448e52035d4c9235d4c66ad6f1222d }, // 3518
    Multiplier { upper: 0x8c8f27d5cff952be70f530a77f1b300e, lower: 0x59d071db35e43d41c4aa385578c0e824 }, // 3519
    Multiplier { upper: 0xe0e50c894cc21dfd81884dd8cb5eb34a, lower: 0x294d82f85639fb9c6ddd26ef279b0d06 }, // 3520
    Multiplier { upper: 0xb3ea706dd701b1979ad3717a3c4bc2a1, lower: 0xbaa468c6ab619616be4a858c1faf3d9e }, // 3521
    Multiplier { upper: 0x8feec057df348e12e242c12e96a3021a, lower: 0xfbb6ba38891ade78983b9e09b2f297b2 }, // 3522
    Multiplier { upper: 0xe64acd596520e3516a04684a8a9e69c4, lower: 0xc5f129f40e9163f426c5c9a91e50f2b6 }, // 3523
    Multiplier { upper: 0xb83bd77ab74d82a7880386a2087ebb03, lower: 0xd18dbb29a5411cc35237d4874b73f55f }, // 3524
    Multiplier { upper: 0x936312c892a4688606693881a0656269, lower: 0x74716287b7674a35db5fdd3909299119 }, // 3525
    Multiplier { upper: 0xebd1b7a751070da33d752735cd6f03db, lower: 0xed82373f8bd876bc9232fb8e750f4e8d }, // 3526
    Multiplier { upper: 0xbca7c61f7405a4829790ec2b0abf3649, lower: 0x8ace92993cad2bca0e8f2fa52a72a53e }, // 3527
    Multiplier { upper: 0x96ec9e7f9004839bac73f0226eff5ea1, lower: 0x3bd8754763bdbca1a53f5950eec21dcb }, // 3528
    Multiplier { upper: 0xf17a9732800738f913ecb36a4b323101, lower: 0xf95a553f05fc6102a1fef54e4ad02fab }, // 3529
    Multiplier { upper: 0xc12edf5b999f60c74323c2bb6f5b5a67, lower: 0xfaaeaa98d196b4021b325dd83bd9bfbc }, // 3530
    Multiplier { upper: 0x9a8be5e2e14c4d6c35b63562bf7c4853, lower: 0x2ef22213dadef66815c1e4acfcae32fd }, // 3531
    Multiplier { upper: 0xf7463c9e3546e246bc56bbd1326073b8, lower: 0x4b1d0352f7cb23d9bc696de19449eb2e }, // 3532
    Multiplier { upper: 0xc5d1ca182a9f1b6bc9defca75b805c93, lower: 0x6f4a690f2ca2831496babe4e103b228c }, // 3533
    Multiplier { upper: 0x9e416e79bbb27c563b18ca1f7c66b075, lower: 0xf2a1eda5bd4ecf43abc8983e73628209 }, // 3534
    Multiplier { upper: 0xfd357d8f92b72d56c4f47698c70ab3ef, lower: 0xea9caf6f954ae53912da8d30b89d9cdc }, // 3535
    Multiplier { upper: 0xca91313fa8928aabd0c39213d26ef659, lower: 0x887d59261108b760dbe20a8d607e1716 }, // 3536
    Multiplier { upper: 0xa20dc0ffba0ed556409c74dca858c514, lower: 0x6d31141e7406f91a4981a20ab3981278 }, // 3537
    Multiplier { upper: 0x81a49a662e724445007d2a4a20470410, lower: 0x575a767ec338c7483ace1b3bc2e00ec7 }, // 3538
    Multiplier { upper: 0xcf6dc3d6b0b6d3a19a61dd4366d80680, lower: 0x8bc3f0cad1f4720d2ae35ec60499b13e }, // 3539
    Multiplier { upper: 0xa5f169788d5f0fb47b817dcf85799ecd, lower: 0x3c9cc0a241905b3dbbe9189e6a148dcb }, // 3540
    Multiplier { upper: 0x84c1212d3de5a629fc6797d937947f0a, lower: 0x96e3cd4e9ad9e297c98746e521aa0b09 }, // 3541
    Multiplier { upper: 0xd46835152fd5d6a993d8f2f525ba64dd, lower: 0xbe39487dc48fd0f2dc0ba4a1cf76780e }, // 3542
    Multiplier { upper: 0xa9ecf7442644abbadcad8f2a84951d7e, lower: 0x31c76d316a0ca728b009508172c52cd8 }, // 3543
    Multiplier { upper: 0x87f0c5d01e9d562f16f13f5536ddb131, lower: 0xc16c575abb3d5286f33aa6cdf56a8a46 }, // 3544
    Multiplier { upper: 0xd9813c8030fbbd1824b53221f162b51c, lower: 0x68ad58912b9550d7eb910ae322441070 }, // 3545
    Multiplier { upper: 0xae00fd335a62fdacea2a8e818de890e3, lower: 0x86f113a756110d798940d58281d00d27 }, // 3546
    Multiplier { upper: 0x8b33fdc2aeb597bd88220b9ad7ed40b6, lower: 0x058da952ab40d7946dcd779b9b0cd752 }, // 3547
    Multiplier { upper: 0xdeb996044abc25fc0d0345c48caecdf0, lower: 0x08e2a88445348c20afaf25c5c4e15884 }, // 3548
    Multiplier { upper: 0xb22e119d089684c9a4029e36d6f23e59, lower: 0xa0b5539d042a09b3bfbf516b03e77a03 }, // 3549
    Multiplier { upper: 0x8e8b414a6d453707b6687e92458e9847, lower: 0xb3c442e40354d48fcc990def3652c802 }, // 3550
    Multiplier { upper: 0xe4120210aed524d923da641d3c175a0c, lower: 0x52d39e399eee20e61428164b8a1e0cd0 }, // 3551
    Multiplier { upper: 0xb674ce73bf10ea474fe1e9b0fcdf7b3d, lower: 0x0f0fb1c7b2581a51a9b9ab6fa1b1a3da }, // 3552
    Multiplier { upper: 0x91f70b8fcc0d88390cb4baf3fd7f95ca, lower: 0x7272f49fc1e0150e216155f2e7c14fe2 }, // 3553
    Multiplier { upper: 0xe98b45b2e015a6c1adedf7ecc8cc22dd, lower: 0x83eb20ff9c99bb49cf02231e3f9bb302 }, // 3554
    Multiplier { upper: 0xbad5d15be677b89af18b2cbd6d701be4, lower: 0x6988e732e3ae2f6e3f34e8e4ffafc268 }, // 3555
    Multiplier { upper: 0x9577daafeb92fa158e08f0978ac01650, lower: 0x546d85c24fbe8c583290ba50cc8c9b87 }, // 3556
    Multiplier { upper: 0xef262ab31284c355b00e4dbf44668a1a, lower: 0x20af3c6a1930e08d1db45d4e14142c0b }, // 3557
    Multiplier { upper: 0xbf51bbc2753702aaf33ea49903853b48, lower: 0x1a25c9ee7a8d8070e4904aa4dcdcf009 }, // 3558
    Multiplier { upper: 0x990e2fcec42c02225c321d4736042f6c, lower: 0xe1b7d4bec871338d83a6a21d7d7d8cd4 }, // 3559
    Multiplier { upper: 0xf4e37fb139e0036a2d1cfba52339e57b, lower: 0x02bfbacada4eb8e26c3dd02f2f2f47b9 }, // 3560
    Multiplier { upper: 0xc3e932f42e4ccf8824172fb74f618462, lower: 0x6899623be1d893e85697d9bf58f29fc7 }, // 3561
    Multiplier { upper: 0x9cba8f29bea3d939b678f2f90c4e0381, lower: 0xed4781c9817a0fed1213149913f54ca0 }, // 3562
    Multiplier { upper: 0xfac41842ca9fc1f5f0c184c1ad499f36, lower: 0x4872694268c34cae8351ba8e86554765 }, // 3563
    Multiplier { upper: 0xc89ce0356ee634c4c09ad09af107b291, lower: 0xd38eba9b8702a3becf74953ed1ddd2b8 }, // 3564
    Multiplier { upper: 0xa07d802abf1e909d66e2407bf4062874, lower: 0xa93efbaf9f354fcbd92a10ff0e4b0ef9 }, // 3565
    Multiplier { upper: 0x8064668898e5407debe833965cd1b9f6, lower: 0xedcbfc8c7f5dd96fe0ee73ff3ea27261 }, // 3566
    Multiplier { upper: 0xcd6d70da8e3b9a63130d1f56fae9298b, lower: 0x16132dad989628b3017d86653103ea35 }, // 3567
    Multiplier { upper: 0xa4578d7ba4fc7b8275a419126254213c, lower: 0x11a8f157ad44ed5c01313850f40321c4 }, // 3568
    Multiplier { upper: 0x83793dfc83fd2f9b9150140eb5101a96, lower: 0x74872779576a577ccdc0f9da5ccf4e36 }, // 3569
    Multiplier { upper: 0xd25b9660d32eb2928219b9b121b35dbd, lower: 0x873ea58ef243bf2e16018fc3c7b216bd }, // 3570
    Multiplier { upper: 0xa849451a428bc20ece7afaf41af5e497, lower: 0x9f65513f2836328b44ce0c9c9fc1abcb }, // 3571
    Multiplier { upper: 0x86a104150209680bd862625ce25e5079, lower: 0x4c510dcc202b5ba29d71a3b07fce2309 }, // 3572
    Multiplier { upper: 0xd768068803424012f3d09d616a3080c2, lower: 0x13b4e2e03378929dc8b5d2b3ffb0380e }, // 3573
    Multiplier { upper: 0xac53386ccf6833425ca6e44dee8d33ce, lower: 0x762a4f19c2c6dbb16d5e42299959c671 }, // 3574
    Multiplier { upper: 0x89dc2d23d9202901e3b8b6a4bed75ca5, lower: 0x2b550c149bd2495abde501bae1149ec1 }, // 3575
    Multiplier { upper: 0xdc937b6c8e99db3639278aa13158943b, lower: 0x788813542c83a8912fd4cf916820fe02 }, // 3576
    Multiplier { upper: 0xb075fc56d87b15c4fa860880f446dcfc, lower: 0x606cdc4356cfba0dbfdd72dab9b3fe68 }, // 3577
    Multiplier { upper: 0x8d2b304579fc116a6204d39a5d057d96, lower: 0xb38a49cf78a62e71664ac248948ffeba }, // 3578
    Multiplier { upper: 0xe1deb3a25cc68243d007b8f6fb3bfc24, lower: 0x5276dc7f27704a4f0a1136da874ccac2 }, // 3579
    Multiplier { upper: 0xb4b2294eb09ece9ca66c93f8c8fcc9b6, lower: 0xa85f16cc1f8d083f3b40f8aed2a3d568 }, // 3580
    Multiplier { upper: 0x908e877226e57216eb8a0ffa3a63d492, lower: 0x204c123ce60a6cff629a608bdbb64453 }, // 3581
    Multiplier { upper: 0xe74a72503e3be9be45a9b329f70620e9, lower: 0xcd468394a343e1989dc3cdac92bd3a1f }, // 3582
    Multiplier { upper: 0xb9085b7364fcbafe9e215c21926b4d87, lower: 0xd76b9c76e9031ae07e363e23a89761b2 }, // 3583
    Multiplier { upper: 0x9406af8f83fd62654b4de34e0ebc3e06, lower: 0x45efb05f20cf48b3982b64e953ac4e28 }, // 3584
    Multiplier { upper: 0xecd77f4c06623708787c9ee34ac6c9a3, lower: 0xa3191a31ce1874528d123b0eec46e374 }, // 3585
    Multiplier { upper: 0xbd7932a3384e926d2d307f1c3bd23ae9, lower: 0x4f474827d81390420a74fc0bf038b5f6 }, // 3586
    Multiplier { upper: 0x9794288293720ebdbdc065b02fdb6254, lower: 0x3f6c39b979a94034d52a633cc02d5e5f }, // 3587
    Multiplier { upper: 0xf286a73752501795fc670919e62bd086, lower: 0xcbe05c5bf5db99ee21dd6b9466aefd64 }, // 3588
    Multiplier { upper: 0xc2055292a84012de6385a0e184efda05, lower: 0x6fe6b049917c7b24e7e4561052259783 }, // 3589
    Multiplier { upper: 0x9b3775422033424b82d14d8137264804, lower: 0x598559d4746395b71fe9de7374eadf9c }, // 3590
    Multiplier { upper: 0xf858bb9d005203ac0482159b8b70733a, lower: 0x28d55c87209f55f1cca963ebee4498fa }, // 3591
    Multiplier { upper: 0xc6ad62e400419c899d34de160926c294, lower: 0xed777d38e6e5de5b0a211cbcbe9d472e }, // 3592
    Multiplier { upper: 0x9ef11be999ce16d47dc3e4de6db89baa, lower: 0x5792ca93ebeb1848d4e74a30987dd28c }, // 3593
    Multiplier { upper: 0xfe4e930f5c7cf153fc6ca163e2c0f910, lower: 0x8c1e10ecacab5a0e2172104dc0c950df }, // 3594
    Multiplier { upper: 0xcb720f3f7d30c10ffd23b44fe89a60da, lower: 0x09b1a723bd55e1a4e78e7371670773e6 }, // 3595
    Multiplier { upper: 0xa2c1a5cc642700d9974fc373207b80ae, lower: 0x6e27b8e96444b483ec71f5f4526c5cb8 }, // 3596
    Multiplier { upper: 0x823484a383526714790c9c5c19fc66f1, lower: 0xf1b960bab69d5d3656c1919041f04a2d }, // 3597
    Multiplier { upper: 0xd054076c0550a4ed8e7a93c68ffa3e4f, lower: 0xe9289ac457622ebd579c1c1a031a1047 }, // 3598
    Multiplier { upper: 0xa6a99f899dda1d8ad8620fd20cc831d9, lower: 0x8753af03791b58977949b014cf480d06 }, // 3599
    Multiplier { upper: 0x85547fa14b14e46f1381a641a3d35b14, lower: 0x6c42f2692daf7a12c76e26770c39a405 }, // 3600
    Multiplier { upper: 0xd553ff6878216d7e859c3d35d2ebc4ed, lower: 0x7a04b70eaf7f29b7a57d0a58138f6cd4 }, // 3601
    Multiplier { upper: 0xaaa99920601abdfed149ca9175896a57, lower: 0x94d0927225ff5492eaca6eacdc72bd77 }, // 3602
    Multiplier { upper: 0x8887adb3801564cbdaa16edac46deeac, lower: 0x770d41f4eb32aa0f223b8bbd7d289792 }, // 3603
    Multiplier { upper: 0xda72af8599bbd4795dcf17c46d7cb113, lower: 0xf1aecfee451ddce50392792f2ea758ea }, // 3604
    Multiplier { upper: 0xaec226047afca9fab1727969f1308da9, lower: 0x8e2573250417e3ea6941fa8c2552ad88 }, // 3605
    Multiplier { upper: 0x8bce84d06263bb2ef45b9454c0f3a487, lower: 0xa4eac28403464feeba9b2ed68442246d }, // 3606
    Multiplier { upper: 0xdfb0d4809d6c5eb186f8ed5467ec3a72, lower: 0xa1779da0053d4cb12a91e48a6d36a0ae }, // 3607
    Multiplier { upper: 0xb2f3dd33b1237ef46bfa5776b989c85b, lower: 0xb45fb14cd0fdd6f4220e506ebdc54d58 }, // 3608
    Multiplier { upper: 0x8f297dc2f41c65905661df922e07d37c, lower: 0x904c8dd70d97df29b4d8405897d10aad }, // 3609
    Multiplier { upper: 0xe50f2f9e5360a2808a3632837cd95260, lower: 0xe6e0e2f1af59650f87c066f4261b4447 }, // 3610
    Multiplier { upper: 0xb73f594b75e6e866d4f8286930addb80, lower: 0xb8b3e8c1591450d93966b8c351af69d3 }, // 3611
    Multiplier { upper: 0x9299143c5e525385772ced20f3be4933, lower: 0xc6f653cde0dd0d7a94522d690e25ee42 }, // 3612
    Multiplier { upper: 0xea8e86c6fd5085a25847e1ce52ca0eb9, lower: 0x3e56ec7c9afb48c420837bdb49d64a04 }, // 3613
    Multiplier { upper: 0xbba5389f310d37b5136cb4a50f080bc7, lower: 0x651256ca1595d3d01a02c97c3b11d4d0 }, // 3614
    Multiplier { upper: 0x961dc6e5c0d75fc40f8a2a1da5a0096c, lower: 0x50db78a1aade430ce19bd4636274aa40 }, // 3615
    Multiplier { upper: 0xf02fa4a2ce2566067f437695d5ccdbe0, lower: 0x815f276911639e7b0292ed6bd0baaa00 }, // 3616
    Multiplier { upper: 0xc0261d4f0b511e6b9902c544ab0a4980, lower: 0x677f52ba744fb1fc020f2456409554cd }, // 3617
    Multiplier { upper: 0x99b817726f7418561402376a226ea133, lower: 0x85ff7561f6a627fcce72837833aaaa3d }, // 3618
    Multiplier { upper: 0xf5f358b718b9c089b99d25769d7dceb8, lower: 0xd665889cbdd6a6614a50d259ec444395 }, // 3619
    Multiplier { upper: 0xc4c2ad5f46fb006e2e17512bb131722d, lower: 0x78513a16fe4551e76ea70eae569d02de }, // 3620
    Multiplier { upper: 0x9d688ab29f2f338b5812a756275ac1bd, lower: 0xf9da94df31d10e52beec0bbeabb0cf18 }, // 3621
    Multiplier { upper: 0xfbda778431e51f4559b77223722acf96, lower: 0x5c90ee31e94e7d513179ac6445e7b1bf }, // 3622
    Multiplier { upper: 0xc97b92d027ea7f6aae2c5b4f8e88a611, lower: 0xe3a724f4baa5310dc12e23836b1fc166 }, // 3623
    Multiplier { upper: 0xa12fa8a6865532bbbe89e2a60ba084db, lower: 0x1c85b72a2eea8da49a8b4f9c55b3011f }, // 3624
    Multiplier { upper: 0x80f2ed520510f562fed4b551a2e6d0af, lower: 0x4a049288258871507ba2a616aaf59a7f }, // 3625
    Multiplier { upper: 0xce517bb66e81889e648788829e3e1ab2, lower: 0x100750d9d5a71bb3f9043cf11188f731 }, // 3626
    Multiplier { upper: 0xa50dfc91f2013a18506c6d354b64e228, lower: 0x0cd2a714aaec1629940363f40e072c27 }, // 3627
    Multiplier { upper: 0x840b3074c19a94e04056bdc43c50b4ec, lower: 0xd70eec1088bcde87a99c4ff6719f5686 }, // 3628
    Multiplier { upper: 0xd3451a5468f7549a008ac939fa1abb14, lower: 0x8b4b134da794973f75c6e6571c322409 }, // 3629
    Multiplier { upper: 0xa904151053f9107b33a23a94c8156276, lower: 0xd5d5a90aec76df65f7d251df49c1b66e }, // 3630
    Multiplier { upper: 0x87367740432da6c8f61b6210a0111b92, lower: 0x44aaeda256c57f84c641db1907ce2b8b }, // 3631
    Multiplier { upper: 0xd85725339eaf714189c569b4334e9283, lower: 0xa1117c36f13bff3ad6cfc4f4d949df45 }, // 3632
    Multiplier { upper: 0xad1284294bbf8dce07d1215cf5d87536, lower: 0x1a74635f2763329578a6372a476e4c37 }, // 3633
    Multiplier { upper: 0x8a7536876fcc71719fda81172b1390f8, lower: 0x1529e918ec4f5baac6eb5f5505f1d693 }, // 3634
    Multiplier { upper: 0xdd88573f19471be8ffc401beab52818c, lower: 0xeea974f4ad4bc5de0b123221a31c8a84 }, // 3635
    Multiplier { upper: 0xb139df65add27cba663667cbbc42013d, lower: 0x8bbac3f6f1096b1808db5b4e1c16d537 }, // 3636
    Multiplier { upper: 0x8dc7e5eaf17530951e91eca2fd019a97, lower: 0xa2fbcff8c0d455acd3e2af71b012442c }, // 3637
    Multiplier { upper: 0xe2d96fde4f21e754fdb6476b2e68f759, lower: 0x04c6198e0153bc47b96ab24f801d39df }, // 3638
    Multiplier { upper: 0xb57abfe50c1b1f77315e9f88f1ed92ad, lower: 0x9d6b47a4cddc969fc7888ea600176180 }, // 3639
    Multiplier { upper: 0x912effea7015b2c5c1187fa0c18adbbe, lower: 0x1789061d717d454c9fa0721e66791acd }, // 3640
    Multiplier { upper: 0xe84b3310b355ead601c0cc3468de2c63, lower: 0x58db3cfbe8c86ee0ff671cfd70c1c47a }, // 3641
    Multiplier { upper: 0xb9d5c273c2ab2244ce33d69053e4f04f, lower: 0x7a48fd9653d38be732b8e3fdf3ce36c8 }, // 3642
    Multiplier { upper: 0x94ab01f63555b503d82978737650c03f, lower: 0x950731450fdc6fec2893e997f63e923a }, // 3643
    Multiplier { upper: 0xedde6989eeef880626a8c0b8bd4e0065, lower: 0xbb3eb53b4c93e646a7530f5989fdb6c3 }, // 3644
    Multiplier { upper: 0xbe4b87a18bf2d3381eed66fa310b3384, lower: 0x95cbc42f707651d21f75a5e13b315f02 }, // 3645
    Multiplier { upper: 0x983c6c813cc242934bf11f2e8da28f9d, lower: 0x44a3035926c50e41b2c484b42f5ab268 }, // 3646
    Multiplier { upper: 0xf393e0cec79d3752131b6517490418fb, lower: 0xa104d2283e0816cf846da1204bc450a7 }, // 3647
    Multiplier { upper: 0xc2dcb3d89fb0f90e75af8412a0d013fc, lower: 0x80d0a82031a0123f9d2480e6a30373b9 }, // 3648
    Multiplier { upper: 0x9be3c313b2f3fa71f7bf9cdbb3d9a996, lower: 0xcd73b9b35ae674ffb0ea00b882692961 }, // 3649
    Multiplier { upper: 0xf96c6b52b7ecc3e98c65c7c5ec8f75be, lower: 0x1585f5ebc4a3ee65e7dccdf403db7567 }, // 3650
    Multiplier { upper: 0xc789ef755ff09cbad6b7d304bd3f9164, lower: 0xde04c4bc9d4ff1eb1fe3d7f6697c5dec }, // 3651
    Multiplier { upper: 0x9fa18c5de65a16fbdef9759d6432dab7, lower: 0x1803d096e43ff4bc1983132b8796b18a }, // 3652
    Multiplier { upper: 0xff68e0963d5cf192fe5bef6239eaf78b, lower: 0x599fb424a066546028d1b845a5bde8dc }, // 3653
    Multiplier { upper: 0xcc53e6de977d8e0f31e325e82e5592d5, lower: 0xe14c901d4d1ea9e6870e2d048497ed7d }, // 3654
    Multiplier { upper: 0xa376524bac6471a5c18284b9beaadbde, lower: 0x4dd6d9b10a7eee5205a4f0d06a132464 }, // 3655
    Multiplier { upper: 0x82c50ea2f0505aeb013536fafeef164b, lower: 0x7178ae273b98bea80483f3d9ee75b6b7 }, // 3656
    Multiplier { upper: 0xd13b4a9e4d4d5e44cebb8b2b317e8a12, lower: 0x4f277d0b928dfdd9a0d31fc31722bdf1 }, // 3657
    Multiplier { upper: 0xa762a2183dd77e9d722fa288f4653b41, lower: 0xd8ec6409420b317ae70f4c9c1282318d }, // 3658
    Multiplier { upper: 0x85e881acfe45fee45b594ed3f6b7629b, lower: 0x13f050076808f4625272a3b00ece8e0b }, // 3659
    Multiplier { upper: 0xd640cf7b306ffe3a2bc217b98abf042b, lower: 0x531a19a573418703b71dd2b34ae41677 }, // 3660
    Multiplier { upper: 0xab670c628d2664fb5634dfc7a23269bc, lower: 0x427b47b78f679f362c17dbc2a25011f9 }, // 3661
    Multiplier { upper: 0x891f3d1ba41eb72f782a4c9fb4f52163, lower: 0x68629fc60c52e5c4f01316354ea674c8 }, // 3662
    Multiplier { upper: 0xdb652e92a0312518c043adcc54bb689f, lower: 0x0d6a993ce084a2d4b351bd221770bad9 }, // 3663
    Multiplier { upper: 0xaf84254219c0ea7a336957d6aa2f86e5, lower: 0xa4554763e6d08243c2a7ca81ac5a2f14 }, // 3664
    Multiplier { upper: 0x8c69b768149a552e8f87797888260584, lower: 0x83776c4febda01cfceeca20156ae8c10 }, // 3665
    Multiplier { upper: 0xe0a92573542a21e418d8c25a737008d4, lower: 0x058be07fdfc336194b1436688ab0e019 }, // 3666
    Multiplier { upper: 0xb3ba845c4354e7e9ad7a351529266d76, lower: 0x6ad64d331968f8143c102b86d55a4ce1 }, // 3667
    Multiplier { upper: 0x8fc869e36910b987bdfb5daa8751f12b, lower: 0x88ab70f5aded9343634022d244483d81 }, // 3668
    Multiplier { upper: 0xe60d7638a81ac272c9922f773ee981df, lower: 0x41124e55e315b86bd20037b6d3a6c8ce }, // 3669
    Multiplier { upper: 0xb80ac4fa2015685bd474f2c5cbee017f, lower: 0x6741d844b5aaf9efdb335fc5761f070b }, // 3670
    Multiplier { upper: 0x933bd0c819aab9e3105d8f04a324cdff, lower: 0x85ce469d5e22618caf5c4c9df818d26f }, // 3671
    Multiplier { upper: 0xeb92e7a68f778fd1b3c8e4d4383ae332, lower: 0x6fb070fbc9d09c144bc6e0fcc027b718 }, // 3672
    Multiplier { upper: 0xbc75861ed92c730e296d83dcf9c8b5c1, lower: 0xf2f38d963b0d49a9d638b3fd66862c14 }, // 3673
    Multiplier { upper: 0x96c46b4be0f05c0b54579cb0c7d3c49b, lower: 0x28c2d7ab627107bb11c6f6645204f010 }, // 3674
    Multiplier { upper: 0xf13a454634b3c67886f2944e0c86075e, lower: 0xa79e25df03e80c5e82d7f0a0833b19b3 }, // 3675
    Multiplier { upper: 0xc0fb6a9e908fd1fa058edd0b3d3805e5, lower: 0x52e4eb18cfecd6b202465a1a0295ae29 }, // 3676
    Multiplier { upper: 0x9a62bbb20d3fdb2e6ad8b0d5ca9337ea, lower: 0xa8b7227a3ff0abc19b6b7b4802115821 }, // 3677
    Multiplier { upper: 0xf7045f8348662b7d77c11aefaa852644, lower: 0x412503f6ccb446029245920cd01bc034 }, // 3678
    Multiplier { upper: 0xc59d1935d384ef979300e259553751d0, lower: 0x341d9cc5709038020e9e0e70a67c99c3 }, // 3679
    Multiplier { upper: 0x9e17475e42d0bfac759a4eadddc5db0c, lower: 0xf67e17045a0cf99b3ee4d85a1eca149c }, // 3680
    Multiplier { upper: 0xfcf20bca048132ad88f6e44962d62b47, lower: 0xf0c9be6d5ce18f5ecb07c0903143542d }, // 3681
    Multiplier { upper: 0xca5b3ca19d34288ad3f8b6a11bde8906, lower: 0x5a3afebde3e7a5e56f3966d9c102a9be }, // 3682
    Multiplier { upper: 0xa1e296e7b0f686d57660921a7cb20738, lower: 0x482f3231831fb7eabf611f149a6887cb }, // 3683
    Multiplier { upper: 0x81821252f3f86bddf84d41aeca2805c6, lower: 0xa025c1c135b2f988991a7f43aeba063c }, // 3684
    Multiplier { upper: 0xcf3683b7ecc0ac965a1535e476a66fa4, lower: 0x336f9c6855eb28da8e90cb9f7df67060 }, // 3685
    Multiplier { upper: 0xa5c5362cbd66f0784810f7e9f885261c, lower: 0xf5f2e386ab2287153eda3c7f97f859e6 }, // 3686
    Multiplier { upper: 0x849dc4f097858d2d0673f987fa041e7d, lower: 0x918f1c6bbc1b9f4432483066132d14b8 }, // 3687
    Multiplier { upper: 0xd42fa180f26f48480a5328d99006972f, lower: 0x4f4b60ac602c3206b6d9e709b8482127 }, // 3688
    Multiplier { upper: 0xa9bfb467285906a008428714733878f2, lower: 0xa5d5e6f04cf028055f14b8d4936ce752 }, // 3689
    Multiplier { upper: 0x87cc905286ad9ee66d0205a9f5c6c728, lower: 0x84ab1f26a3f353377f43c71075f0b90f }, // 3690
    Multiplier { upper: 0xd9474d50d77c3170ae69a2a9893e0b74, lower: 0x077831d76cb88525986c71b3efe78e7e }, // 3691
    Multiplier { upper: 0xadd2a440ac635ac08b87b5546dcb3c5c, lower: 0xd2c68e45f0939db7ad238e298cb93ecb }, // 3692
    Multiplier { upper: 0x8b0ee9cd56b5e233a2d2f776be3c304a, lower: 0x423871d18d42e492f0e93e87a3c7656f }, // 3693
    Multiplier { upper: 0xde7e42e2245636b90484bf2463938076, lower: 0xd05a4fb5aed16db7e7db973f6c723be5 }, // 3694
    Multiplier { upper: 0xb1fe9be81d11c560d06a328382dc66c5, lower: 0x737b72f7bf0df15fecafac32bd282feb }, // 3695
    Multiplier { upper: 0x8e6549867da7d11a4054f5360249ebd1, lower: 0x292f8f2c98d7f44cbd59568efdb9bfef }, // 3696
    Multiplier { upper: 0xe3d54270c90c81c39a2188566a0fdfb5, lower: 0x0eb27eadc15986e12ef5574b2f8f997e }, // 3697
    Multiplier { upper: 0xb6443527073d349c7b4e06ab880cb2f7, lower: 0x3ef532249aae0580f25ddf6f593fadfe }, // 3698
    Multiplier { upper: 0x91d02a859f642a16c90b388939a3c25f, lower: 0x6590f4ea15580467284b1925e0ffbe65 }, // 3699
    Multiplier { upper: 0xe94d10d5cbd3768adb452741f5d2d098, lower: 0xa28187dceef33a3ea6de8ea3019930a2 }, // 3700
    Multiplier { upper: 0xbaa40d77d642c53be29db901917573ad, lower: 0x4ece064a58c294feebe53ee8ce1426e8 }, // 3701
    Multiplier { upper: 0x95500ac6450237631bb160ce0df78fbd, lower: 0xd8a4d1d513cedd98bcb765870b435253 }, // 3702
    Multiplier { upper: 0xeee677a3a19d256b5f82347ce325b2c9, lower: 0x5aa14fbb52e495c12df23c0b453883b8 }, // 3703
    Multiplier { upper: 0xbf1ec61c814a8455e601c3971c1e28a1, lower: 0x154dd962a8b6de3424c1c9a29dc6cfc7 }, // 3704
    Multiplier { upper: 0x98e56b4a010869de519b02df49b1ba1a, lower: 0x77717ab553c57e901d67d48217d23fd2 }, // 3705
    Multiplier { upper: 0xf4a2454334da42fd4f5e6afedc4f902a, lower: 0x58b591221fa26419c8a620d0261d32ea }, // 3706
    Multiplier { upper: 0xc3b50435c3e1cf310c4b88cbe372d9bb, lower: 0x7a2ada81b2e85014a084e70ceb4a8f21 }, // 3707
    Multiplier { upper: 0x9c90d02b031b0c273d093a3cb5f57afc, lower: 0x61bbe2015bed0cdd4d371f3d89087281 }, // 3708
    Multiplier { upper: 0xfa814d119e91ad0b94db906123225e60, lower: 0x9c5fd0022cae7afbaebe986274da50ce }, // 3709
    Multiplier { upper: 0xc86770dae541573c77160d1a8281e51a, lower: 0x16b30cce8a252f2fbefee04ec3e1da3f }, // 3710
    Multiplier { upper: 0xa052c0af1dcddf6392780a7b9b9b1dae, lower: 0x788f3d72081dbf596598b372364e4832 }, // 3711
    Multiplier { upper: 0x804233bf4b0b191c752cd52fafaf4af1, lower: 0xfa0c3128067e32adeae08f8e91d839c2 }, // 3712
    Multiplier { upper: 0xcd36b93211ab5b60bb7aeeb2b2b21183, lower: 0x29ad1b733d96b77cab00e5b0e959f603 }, // 3713
    Multiplier { upper: 0xa42bc75b4155e2b3c92f255bc2280e02, lower: 0x87bdaf8f647892ca22671e272114c4cf }, // 3714
    Multiplier { upper: 0x83563915cdde4ef63a8c1de301b9a4ce, lower: 0xd2fe260c5060756e81ec181f4daa370c }, // 3715
    Multiplier { upper: 0xd2238e894963b189f746963802c2a14a, lower: 0xeb303ce0809a557d9cacf36549105813 }, // 3716
    Multiplier { upper: 0xa81c72076de95ad4c5d211c6689bb43b, lower: 0xef59ca4d33aeaacae3bd8f843a7379a9 }, // 3717
    Multiplier { upper: 0x867d2805f1877bdd6b0e749eba1629c9, lower: 0x8c47d50a8fbeef08b6313f9cfb8f9487 }, // 3718
    Multiplier { upper: 0xd72ea66fe8d8c62f11b0ba979023760f, lower: 0x46d954ddb2cb180df04ecc2e5f4c20d8 }, // 3719
    Multiplier { upper: 0xac2551f320ad6b58daf3c879401c5e72, lower: 0x9f1443e48f08e00b26a570251909b3e0 }, // 3720
    Multiplier { upper: 0x89b774c2808abc47158fd3943349e528, lower: 0x7f436983a5a0b33c1eeac01dada15cb4 }, // 3721
    Multiplier { upper: 0xdc58bad0cdaac6d8227fb8ed1edca1da, lower: 0x6538a8d2a29ab860317799c915cefab9 }, // 3722
    Multiplier { upper: 0xb046fbda3e2238ace8662d8a7f16e7e1, lower: 0xea93ba421baef9e68df947d41172622d }, // 3723
    Multiplier { upper: 0x8d05964831b4fa23ed1e8ad53278b981, lower: 0x88762e9b4958c7eba4c76ca9a78eb4f1 }, // 3724
    Multiplier { upper: 0xe1a28a0d1c54c36cae97448850c128cf, lower: 0x40bd175edbc13fdf6e0be10f727dee4e }, // 3725
    Multiplier { upper: 0xb482080a7d109c56f2129d39da3420a5, lower: 0xcd6412b24967664c580980d92864bea5 }, // 3726
    Multiplier { upper: 0x9068066eca73b0458e754a94ae901a1e, lower: 0x3de9a88ea11f8509e0079a475383cbb8 }, // 3727
    Multiplier { upper: 0xe70cd717aa52b3a27d8877544a8029c9, lower: 0xfca90db101cc080fccd8f6d8859fac59 }, // 3728
    Multiplier { upper: 0xb8d71279550ef61b97a05f76a200216e, lower: 0x63ba715a67d66cd970ad9246d14c89e1 }, // 3729
    Multiplier { upper: 0x93df41faaa725e7c794d192bb4cce78b, lower: 0x82fb8de1ecab8a478d57a838a7706e4d }, // 3730
    Multiplier { upper: 0xec98699110b6fd93f5482845ee14a5ac, lower: 0x04c5afcfe11276d8e225d9f43f1a4a15 }, // 3731
    Multiplier { upper: 0xbd46bada73c597a99106869e58108489, lower: 0x9d6af30cb40ec57a4e84ae5cff483b44 }, // 3732
    Multiplier { upper: 0x976bc8aec30479547405387eacda03a1, lower: 0x4abbf5a3c33f0461d86a251732a02f6a }, // 3733
    Multiplier { upper: 0xf2460de46b3a5bba533b8d977af66c35, lower: 0x445fef6c6b980702f3dd08251dcd18a9 }, // 3734
    Multiplier { upper: 0xc1d1a4b6bc2eafc842960adf9591f02a, lower: 0x9d198c56bc799f358fe4068417d746ee }, // 3735
    Multiplier { upper: 0x9b0e1d5efcf22639cede6f194474c022, lower: 0x1747a37896c7b2913fe99ed013129f25 }, // 3736
    Multiplier { upper: 0xf8169564c7e9d6c2e49718286d8799d0, lower: 0x253f6bf42472b74ecca8fe19b81dcb6e }, // 3737
    Multiplier { upper: 0xc6787783d321789bea1279b9f13947d9, lower: 0xb765eff6838ef90bd6ed9814934b0925 }, // 3738
    Multiplier { upper: 0x9ec6c6030f4dfa1654db9494c0fa9fe1, lower: 0x5f84bff8693f2da31257acdd42a26db7 }, // 3739
    Multiplier { upper: 0xfe0ad66b4baff68a215f542134c43302, lower: 0x326dfff3db984904ea25e162043715f1 }, // 3740
    Multiplier { upper: 0xcb3bdebc3c8cc53b4de5dce75d69c268, lower: 0x2857fff64946a0d0bb51811b369277f4 }, // 3741
    Multiplier { upper: 0xa2964bc9ca0a3762a4b7e3ec4abb01ec, lower: 0xed13332b6dd21a4095dacdaf5edb932a }, // 3742
    Multiplier { upper: 0x8211d63b08082c4eea2cb656a22f34bd, lower: 0x8a75c28924a8150077e23e25e57c75bb }, // 3743
    Multiplier { upper: 0xd01c89f80cd9e07e437abd5769e5212f, lower: 0x43ef9da83aa68800bfd0636fd593ef92 }, // 3744
    Multiplier { upper: 0xa67d3b2cd714b39835fbcaac54b74dbf, lower: 0x698c7e202eeba000997382bfde0ff2db }, // 3745
    Multiplier { upper: 0x8530fc23df43c2e02b2fd556aa2c3e32, lower: 0xbad6cb4cf256199a145c68997e7328af }, // 3746
    Multiplier { upper: 0xd51b2d0632060499deb2eef11046c9ea, lower: 0xc48adee183bcf5c353c70dc263eb744b }, // 3747
    Multiplier { upper: 0xaa7c2404f4d19d47e55bf25a736bd4bb, lower: 0xd06f18b46963f7cf7638d7ceb655f6a3 }, // 3748
    Multiplier { upper: 0x88635003f70e176cb77cc1e1f5efdd63, lower: 0x0d25ad5d211cc63f91c7130bc511921c }, // 3749
    Multiplier { upper: 0xda38800658168be125946969897fc89e, lower: 0x7b6f7bc834fad6cc1c71b812d4e8e9c6 }, // 3750
    Multiplier { upper: 0xae93999eacded64db7a9edee07996d4b, lower: 0x95f2c96cf72f123ce38e2cdbdd87216b }, // 3751
    Multiplier { upper: 0x8ba947b223e5783e2c87f18b39478aa2, lower: 0xde5bd4572c25a830b60b57164ad28123 }, // 3752
    Multiplier { upper: 0xdf753f836ca259fd140cb5ab8ed8ddd1, lower: 0x63c6208b79d5d9e789abbe8a1150ce9e }, // 3753
    Multiplier { upper: 0xb2c432cf8a1b7b30dcd6f7bc724717da, lower: 0xb6381a092e44ae52d489653b410d7218 }, // 3754
    Multiplier { upper: 0x8f035bd93b492f5a4a4592fd2838dfe2, lower: 0x2b6014d42503bea8aa07842f673df4e0 }, // 3755
    Multiplier { upper: 0xe4d22c8ec541e55d43a284c8405affd0, lower: 0x456687b9d4d2caa776726d18a52fee33 }, // 3756
    Multiplier { upper: 0xb70e8a0bd101844a9c8203d366af330d, lower: 0x0452062e43dbd552c5285746ea8cbe8f }, // 3757
    Multiplier { upper: 0x92720809740136a216ce6975ebbf5c0a, lower: 0x69db3825031644423753790588709873 }, // 3758
    Multiplier { upper: 0xea500cdbeccebdd0247d758979322cdd, lower: 0x762b8d0804f06d36beebf4d5a71a8d84 }, // 3759
    Multiplier { upper: 0xbb733d7cbd72317350645e07942823e4, lower: 0x5e893da003f38a9232565d77b8e20ad0 }, // 3760
    Multiplier { upper: 0x95f5caca3128278f73837e6c7686831d, lower: 0x186dcae6698fa20e8eab7df960b4d573 }, // 3761
    Multiplier { upper: 0xefefaadd1b73727f1f38ca47240a6b61, lower: 0xc0afab0a427f69b0e445965bcdee2252 }, // 3762
    Multiplier { upper: 0xbff2ef1749292865b293d505b66ebc4e, lower: 0x33bfbc083532baf3e9d145163e581b75 }, // 3763
    Multiplier { upper: 0x998f25ac3a8753848edcaa6af85896a4, lower: 0xf632fcd35dc22f2987da9dab6513492a }, // 3764
    Multiplier { upper: 0xf5b1d5e05da5526db16110ab26f4243b, lower: 0x2384c7b896037ea8d95dc9123b520eaa }, // 3765
    Multiplier { upper: 0xc48e44b37e1ddb8af44da6ef525ce9c8, lower: 0xe937062d44cf9887144b0741c90e7222 }, // 3766
    Multiplier { upper: 0x9d3e9d5c64e4afa25d0aebf2a84a54a0, lower: 0xba926b576a3fad38dd08d29b073ec1b5 }, // 3767
    Multiplier { upper: 0xfb97622d6e3ab29d61ab131dda108767, lower: 0x90ea4558a9ff7b8e2e74842b3ecacf87 }, // 3768
    Multiplier { upper: 0xc945e824582ef54ab488dc17e1a6d2b9, lower: 0x40bb6aad54cc62d8252a0355cbd572d3 }, // 3769
    Multiplier { upper: 0xa104b9b6acf25dd55d3a49acb4857561, lower: 0x0095eef110a3824684219c44a31128a9 }, // 3770
    Multiplier { upper: 0x80d0949223f517dde42ea156f6d12ab4, lower: 0x0077f25a73b601d2034e169d4f40ed54 }, // 3771
    Multiplier { upper: 0xce1a87503988262fd37dcef18ae84453, lower: 0x33f31d5d85f002e99ee357621867e21f }, // 3772
    Multiplier { upper: 0xa4e205d9c7a01e8ca931725ad5869d0f, lower: 0x5cc27de46b2668bae582ac4e79ecb4e6 }, // 3773
    Multiplier { upper: 0x83e804ae394ce53d54278eaf11387da5, lower: 0xe3cecb1d22852095846889d8618a2a52 }, // 3774
    Multiplier { upper: 0xd30cd449f547d52eed0c177e81f3fc3c, lower: 0x9fb144fb6a6e9a88d3da76270276aa1c }, // 3775
    Multiplier { upper: 0xa8d7103b2a9fddbf2409ac6534c33030, lower: 0x7fc103fc5525486d76485e859b9221b0 }, // 3776
    Multiplier { upper: 0x87127362887fe498e9a156b75d68f359, lower: 0xffcd9cc9ddb76d245ea04b9e160e815a }, // 3777
    Multiplier { upper: 0xd81d856a73ffd427dc35578bc8a7ebc3, lower: 0x32e294762f8be1d3ca9a129689b0cef6 }, // 3778
    Multiplier { upper: 0xace46abb8fffdcecb02aac6fd3b98968, lower: 0xf582105e8c6fe7dca214dbaba15a3f2b }, // 3779
    Multiplier { upper: 0x8a505562d9997d8a268889f30fc7a120, lower: 0xc4680d187059864a1b43e2efb4483289 }, // 3780
    Multiplier { upper: 0xdd4d556af5c26276a40da984e60c3501, lower: 0x3a4014f3e6f5a3a9c5396b192073840e }, // 3781
    Multiplier { upper: 0xb10aaabbf7ceb52bb671546a51a35d9a, lower: 0x950010c31f2ae9549dc788e0e6c2d00b }, // 3782
    Multiplier { upper: 0x8da2222ff9722a895ec110550e1c4ae2, lower: 0x10ccda35b288baaa17d2d3e71f024009 }, // 3783
    Multiplier { upper: 0xe29d037ff58377423134e6ee7cfa1169, lower: 0xb47af6bc50dac4435951530b64d06675 }, // 3784
    Multiplier { upper: 0xb54a69332acf929b5a90b8beca61a787, lower: 0xc395923040af036914410f3c50a6b85d }, // 3785
    Multiplier { upper: 0x91085428ef0c7549154093cbd51aec6c, lower: 0x9c77a8269a259c5410340c304085604b }, // 3786
    Multiplier { upper: 0xe80d5374b1ad8874eecdb94621c4ad7a, lower: 0x93f2a6a429d5c6ece6b9ad1a00d566de }, // 3787
    Multiplier { upper: 0xb9a442c3c157a05d8bd7c76b4e36f12e, lower: 0xdcc21ee9bb116bf0b8948a7b33ddebe5 }, // 3788
    Multiplier { upper: 0x9483689c9aac804ad6463922a4f8c0f2, lower: 0x4a34e587c8dabcc093aa08628fe4bcb7 }, // 3789
    Multiplier { upper: 0xed9f0dc75de0cd448a09f5043b279b1d, lower: 0x4387d5a60e2ac79a85dcda374ca12df1 }, // 3790
    Multiplier { upper: 0xbe18d7d2b180a436d4d4c403628615b1, lower: 0x02d31151a4ef061537e3e1c5d6e757f4 }, // 3791
    Multiplier { upper: 0x9813dfdbc133b69243dd699c4ed1aaf4, lower: 0x0242744150bf3810f9831b04abec465d }, // 3792
    Multiplier { upper: 0xf352ffc601ec57506c9575c6e482ab20, lower: 0x039d86cee79859b4c26b5e6ddfe07095 }, // 3793
    Multiplier { upper: 0xc2a8cc9e67f045d9f077916bea022280, lower: 0x02e46bd8b946ae2a3522b1f17fe6c077 }, // 3794
    Multiplier { upper: 0x9bba3d4b8659d17b26c60defee681b99, lower: 0x9be9efe094388b54f74ef4c1331f0060 }, // 3795
    Multiplier { upper: 0xf929fbac0a294f2b713ce3197d735f5c, lower: 0x2ca97fcdb9f412218bb1879b84fe66ff }, // 3796
    Multiplier { upper: 0xc754c9566e8772892763e8e131291916, lower: 0x8a21330afb29a81ad6279faf9d985266 }, // 3797
    Multiplier { upper: 0x9f770778586c5ba0ec4fed80f420e0de, lower: 0xd4e75c08c8ee2015781fb2f2e479db85 }, // 3798
    Multiplier { upper: 0xff24d8c08d7a2c34ad4caf34b9ce3497, lower: 0xbb0bc67474b033558cff84b7d3f62c07 }, // 3799
    Multiplier { upper: 0xcc1d7a33a461bcf6f10a25c3c7d82a12, lower: 0xfc096b905d59c2aad732d0930ff82339 }, // 3800
    Multiplier { upper: 0xa34ac829504e30c58da1b7cfd31354db, lower: 0xfcd4560d177b022245c24075a6601c2e }, // 3801
    Multiplier { upper: 0x82a239baa6a4f3d13e1af9730f42aa49, lower: 0x971044d745fc01b5049b66c48519b025 }, // 3802
    Multiplier { upper: 0xd1038f910aa1861b96918f1e7ed11075, lower: 0xbe806e253cc66921a0f8a46da1c2b36e }, // 3803
    Multiplier { upper: 0xa7360c7408813816120e0c1865740d2a, lower: 0xfecd24ea970520e7b3fa1d2481688f8b }, // 3804
    Multiplier { upper: 0x85c4d6c33a00f9ab41a4d679eac33dbb, lower: 0xff0a83eedf374d862994e41d3453a609 }, // 3805
    Multiplier { upper: 0xd607be05299b291202a15729779ec92c, lower: 0xcb44064afebee2704287d361ed52a341 }, // 3806
    Multiplier { upper: 0xab3964d0ee15ba74cee778edf94bd423, lower: 0xd5d00508cbcbe859ced30f818aa8829b }, // 3807
    Multiplier { upper: 0x88fab70d8b44952a3f1f93f1943ca9b6, lower: 0x44a66a6d6fd6537b0bdc0c67a220687c }, // 3808
    Multiplier { upper: 0xdb2abe7c1207551064ff531c20610f8a, lower: 0x0770aa48b2f08591ac93470c369a40c6 }, // 3809
    Multiplier { upper: 0xaf5565300e6c440d1d990f49b380d93b, lower: 0x3926eea08f26d14156dc38d69215009e }, // 3810
    Multiplier { upper: 0x8c4450f33ebd033db1473f6e2933e0fc, lower: 0x2db8bee6d8ebda9aabe360aba810cd4b }, // 3811
    Multiplier { upper: 0xe06d4e51fdfb3862b53ecbe3751fce60, lower: 0x492797d7c1795dc446389aac401ae212 }, // 3812
    Multiplier { upper: 0xb38aa50e64c8f9e890ff0982c41971e6, lower: 0xa0ec797967944b036b607bbd001581a8 }, // 3813
    Multiplier { upper: 0x8fa21da51d6d94ba0d98d4689ce127eb, lower: 0xb3f0612dec76a26922b39630ccde0153 }, // 3814
    Multiplier { upper: 0xe5d02f6e957c2129af5aed742e350cac, lower: 0x531a35164724370e9dec238147c99bb8 }, // 3815
    Multiplier { upper: 0xb7d9bf8baac9b42159158ac3582a7089, lower: 0xdc14f74505b6927217f01c676ca14960 }, // 3816
    Multiplier { upper: 0x9314993c88a15ce77a77a235e021f3a1, lower: 0x7cdd929d9e2ba85b4659b052bd4dd44d }, // 3817
    Multiplier { upper: 0xeb542860da9bc7d8c3f29d230036529b, lower: 0xfafc1dc8fd12a6f8708f80846216207b }, // 3818
    Multiplier { upper: 0xbc435380aee3064703287db599c50ee3, lower: 0x2f3017d3fda885938d3f9a0381ab4d2f }, // 3819
    Multiplier { upper: 0x969c42cd58b59e9f35b9fe2ae16a724f, lower: 0x58f3464331539e0fa432e19c67bc3dc0 }, // 3820
    Multiplier { upper: 0xf0fa047bc122976522c330449bdd83b2, lower: 0x27eba39eb552967f6d1e35c70c6062cc }, // 3821
    Multiplier { upper: 0xc0c80396341bac50e89c269d497e02f4, lower: 0xecbc82e55ddbab9924182b05a3804f0a }, // 3822
    Multiplier { upper: 0x9a399c7829afbd0d86e352176dfe68c3, lower: 0xf096cf1de4afbc7a834688d14f99d8d5 }, // 3823
    Multiplier { upper: 0xf6c293f375e5fb48d7d21cf249970e06, lower: 0x4dbe182fd44c60c4053da7b54c295aee }, // 3824
    Multiplier { upper: 0xc568765c5e5195d3dfdb4a5b6e12719e, lower: 0xa498135976a3809cd0fe1fc43cede258 }, // 3825
    Multiplier { upper: 0x9ded2b7d184144a97fe2a1e2be7527b2, lower: 0x1d4675e12bb6007d73fe7fd030be4ead }, // 3826
    Multiplier { upper: 0xfcaeabfb5a020775996a9c9dfd883f83, lower: 0x620a563512bccd958663ffb381307de1 }, // 3827
    Multiplier { upper: 0xca255662ae6805f7adeee3b197a032cf, lower: 0x81a1de90dbca3e11384fffc2cdc064b4 }, // 3828
    Multiplier { upper: 0xa1b7784ef1ecd192f18be95adfb35bd9, lower: 0x34817eda496e980dc6a666357166b6f6 }, // 3829
    Multiplier { upper: 0x815f93725b23dadbf46fede24c8f7cad, lower: 0xc39acbe1d45879a49eeb84f78debc592 }, // 3830
    Multiplier { upper: 0xceff525091d2f7c653e6496a1418c77c, lower: 0x6c2adfcfba27290764ac07f27cac6f50 }, // 3831
    Multiplier { upper: 0xa5990ea6db0f2c9ea98507881013d2c9, lower: 0xf0224ca62e85ba6c50899ff53089f2a6 }, // 3832
    Multiplier { upper: 0x847a721f15a5bd4bbad0d2d3400fdbd4, lower: 0xc01b7084f204952373a14cc426d4c21f }, // 3833
    Multiplier { upper: 0xd3f71cfe89092edf914e1e1ecce62c87, lower: 0x99c580d4b66dbb6bec3547a03e213697 }, // 3834
    Multiplier { upper: 0xa9927d986da0f24c743e7e7f0a51bd39, lower: 0x47d133dd5ebe2f8989c4394cfe80f879 }, // 3835
    Multiplier { upper: 0x87a86479f14d8ea39031fecc0841642d, lower: 0xd30dc3177efe8c6e07d02dd73200c6c7 }, // 3836
    Multiplier { upper: 0xd90d6d8fe87c176c19e997acda0239e2, lower: 0xeb49382597fdad7cd94d16251cce0ad8 }, // 3837
    Multiplier { upper: 0xada457a65396792347ee12f0ae682e4f, lower: 0x22a0f9b7accaf130add744ea7d71a247 }, // 3838
    Multiplier { upper: 0x8ae9dfb842dec74f6cbe758d5853583f, lower: 0x4ee72e2c8a3bf426f17903eecac14e9f }, // 3839
    Multiplier { upper: 0xde42ff8d37cad87f1463ef488d5226cb, lower: 0xb171e37a76c65371825b397e11354a98 }, // 3840
    Multiplier { upper: 0xb1cf32d75fd579ff438325d3a441b8a2, lower: 0xf45b1c61f89ea9279b7c2dfe742aa213 }, // 3841
    Multiplier { upper: 0x8e3f5bdf7fddfb329c68eb0fb69afa1b, lower: 0xf6af49e7fa188752e2c9be6529bbb4dc }, // 3842
    Multiplier { upper: 0xe39892ff32fcc51dc70e44e5f0f7f693, lower: 0x244ba97329c0d8849e0f970842c5ee2d }, // 3843
    Multiplier { upper: 0xb613a8cc28ca374b05a503eb272cc542, lower: 0x836fbac287cd7a03b1a6126d0237f1be }, // 3844
    Multiplier { upper: 0x91a953d687082c3c0484032285bd6a9b, lower: 0x9c59623539712e695aeb41f0ce9327cb }, // 3845
    Multiplier { upper: 0xe90eec8a71a6ad2cd4066b6a6f95775f, lower: 0x608f03885be84a422b12031ae41ea611 }, // 3846
    Multiplier { upper: 0xba7256d527b88a8a433855eebfaac5e5, lower: 0xe6d8cfa04986a1ce88db35af1ce551a8 }, // 3847
    Multiplier { upper: 0x9528457752fa086e9c2d118bcc889e51, lower: 0x857a3fb36e054e3ed3e29158e3eaa7b9 }, // 3848
    Multiplier { upper: 0xeea6d58bb7f673e42d14e8dfada763b5, lower: 0xa25d32b8b0087d3153041bc16caaa5f5 }, // 3849
    Multiplier { upper: 0xbeebde095ff85cb68a7720b2f152b62a, lower: 0xe84a8efa266d30f44269afcdf08884c4 }, // 3850
    Multiplier { upper: 0x98bcb1a119937d5ed52c1a28c10ef822, lower: 0x536ed8c81ebdc0c368548ca4c06d3703 }, // 3851
    Multiplier { upper: 0xf4611c34f5b8c897bb79c3746817f36a, lower: 0x1f17c140312f9ad24087476e00aebe6c }, // 3852
    Multiplier { upper: 0xc380e35d9160a07962c7cf9053465c54, lower: 0xe5ac9a99c0f2e241cd3905f19a256523 }, // 3853
    Multiplier { upper: 0x9c671c4adab3b3944f063fa6a90516aa, lower: 0x5156e2149a5be834a42d9e5ae1b7841c }, // 3854
    Multiplier { upper: 0xfa3e93aaf785ec207e7065d774d4f110, lower: 0x82249cedc3c6405439e296f7cf8c0693 }, // 3855
    Multiplier { upper: 0xc8320fbbf937f019fec051792a43f40d, lower: 0x34ea17249c9e99dcfb1babf972d66ba9 }, // 3856
    Multiplier { upper: 0xa0280c9660f98ce19899dac7550329a4, lower: 0x2a54df507d4bae4a627c89945bdebc87 }, // 3857
    Multiplier { upper: 0x80200a11e72e0a4e13ae489f7735bae9, lower: 0xbb77190d3109583b81fd3add164bca06 }, // 3858
    Multiplier { upper: 0xcd00101ca51676e352b074325855f7dc, lower: 0x5f24f4e1e80ef39269952afb56dfa9a3 }, // 3859
    Multiplier { upper: 0xa4000ce3b7452be90ef3902846ab2cb0, lower: 0x4c1d90b4b9a58fa854775595df195482 }, // 3860
    Multiplier { upper: 0x83333d82f9042320d8c2d9b9d2228a26, lower: 0xa34ada2a2e1e0c86a9f91144b27aaa02 }, // 3861
    Multiplier { upper: 0xd1eb959e5b39d1ce279e292950374371, lower: 0x054490437cfce0d7765b4ed450c44336 }, // 3862
    Multiplier { upper: 0xa7efaae515c7db0b52e4edbaa6929c5a, lower: 0x6a9d4035fd971a45f8490bdd0d69cf5f }, // 3863
    Multiplier { upper: 0x86595584116caf3c4250be2eeba87d15, lower: 0x2217669197ac1504c6a0d64a712172b2 }, // 3864
    Multiplier { upper: 0xd6f555a01be118606a1ac9e4ac40c821, lower: 0xd02570e8f2acee6e0a9af0771b68b783 }, // 3865
    Multiplier { upper: 0xabf777b34980e04d21af07ea23670681, lower: 0x73512720c223f1f1a2158d2c15ed5f9c }, // 3866
    Multiplier { upper: 0x8992c629079a4d0a8158d321b5ec0534, lower: 0x5c40ec1a34e98e5ae8113dbcde577fb0 }, // 3867
    Multiplier { upper: 0xdc1e09db3f5d4810cef48502bcacd520, lower: 0x939b135d2175b091734ec92e308bff80 }, // 3868
    Multiplier { upper: 0xb01807e299176cda3f2a0402308a441a, lower: 0x0faf42b0e7915a0df5d8a0f1c06fff9a }, // 3869
    Multiplier { upper: 0x8ce0064ee0df8a4832880334f3a1d014, lower: 0xd95902271fa77b3e5e46e727cd266615 }, // 3870
    Multiplier { upper: 0xe166707e3498dd4050d99ebb1f694cee, lower: 0x288e69d832a591fd63a4a50c7b70a354 }, // 3871
    Multiplier { upper: 0xb451f3982a13e43373e14bc8e5edd724, lower: 0xed3ebb135bb7a7fde9508409fc5a1c43 }, // 3872
    Multiplier { upper: 0x90418facee7650292981096d84be45b7, lower: 0x24322f42afc61ffe544069a196ae7d03 }, // 3873
    Multiplier { upper: 0xe6cf4c47e3f08041dc01a8af3aca0925, lower: 0x06b6b2044c70333086cd75cf577d94d1 }, // 3874
    Multiplier { upper: 0xb8a5d69fe98d3367e33486f2956e6db7, lower: 0x389228037059c28d38a45e3f793143da }, // 3875
    Multiplier { upper: 0x93b7dee65470f5ecb5c39f28778b8af8, lower: 0xfa0e866926ae353dc6e9e4ff9427697c }, // 3876
    Multiplier { upper: 0xec5964a3ba4e56478938fea725ac118e, lower: 0x5ce40a41d77d21fc71763b3286a57592 }, // 3877
    Multiplier { upper: 0xbd145082fb71de9fa0fa65528489a7a5, lower: 0x171cd5017930e7fd2791c8f538845e0f }, // 3878
    Multiplier { upper: 0x9743739bfc5b187fb3fb844203a152ea, lower: 0x78e3dd9ac75a5330ec74a0c42d36b1a6 }, // 3879
    Multiplier { upper: 0xf20585c66091c0cc532c06d005ceeb10, lower: 0xc16c95c4722a1eb4ad8767a0485782a2 }, // 3880
    Multiplier { upper: 0xc19e049eb3a7cd7042899f0cd17255a7, lower: 0x0123ab038e8818908ad2b94d06ac6882 }, // 3881
    Multiplier { upper: 0x9ae4d07ef61fd78d0207b270a78eaaec, lower: 0x00e9559c72067a0d3bdbc770d22386ce }, // 3882
    Multiplier { upper: 0xf7d480cb236625ae69a5ea4dd8e444ac, lower: 0xce422293e9a3f67b92f93f1ae9d2714a }, // 3883
    Multiplier { upper: 0xc6439a3c1c51b7bebaeb21d7e0b69d57, lower: 0x0b681ba987b65ec94260ff48bb0ec108 }, // 3884
    Multiplier { upper: 0x9e9c7b6349daf9656255b4acb3c54aac, lower: 0x09201621395eb23a9b80cc3a2f3f00d3 }, // 3885
    Multiplier { upper: 0xfdc72bd20fc4c23bd089211452d54446, lower: 0x750023685bcab6c42c0146c37ecb3485 }, // 3886
    Multiplier { upper: 0xcb05bca80c9d682fda074da9dbddd038, lower: 0x5d99b5ed163bc569bccdd235ff08f6d1 }, // 3887
    Multiplier { upper: 0xa26afd533d4ab9bfe19f7154afe4a693, lower: 0x7e14918a782fd12163d7db5e65a0c574 }, // 3888
    Multiplier { upper: 0x81ef310f643bc7ccb47f8ddd5983b875, lower: 0xfe76dad52cf30db44fdfe2b1eae7045d }, // 3889
    Multiplier { upper: 0xcfe51b4bd392d94787327c955c05f3ef, lower: 0xfd8af7bb7b1e7c53b2ffd11cab0b3a2e }, // 3890
    Multiplier { upper: 0xa650e2a30fa8add2d28eca11166b298c, lower: 0xcad592fc627ec9dc8f330db088d5c825 }, // 3891
    Multiplier { upper: 0x850d821c0c86f175753f080dab88ee0a, lower: 0x3bde0f304ecbd4b0728f3e26d3de39b7 }, // 3892
    Multiplier { upper: 0xd4e269c67a7182558864d9af78db1676, lower: 0xc630184d4adfbab3ea7ec9d7b9638f8b }, // 3893
    Multiplier { upper: 0xaa4ebb052ec1351139ea47bf93e2785f, lower: 0x04f346a43be62ef655323b12fab60c6f }, // 3894
    Multiplier { upper: 0x883efc0425675da7618839660fe8604c, lower: 0x03f5d21cfcb82591ddc1c8dbfbc4d6c0 }, // 3895
    Multiplier { upper: 0xd9fe6006a23efc3f02738f09b30d66e0, lower: 0x06561cfb2df36f4fc9360e2cc607bdff }, // 3896
    Multiplier { upper: 0xae65199ee83263659b8fa5a15c0ab8b3, lower: 0x3844e3fc24c2bf73075e71bd6b3964cc }, // 3897
    Multiplier { upper: 0x8b84147f20284f847c72eae77cd5608f, lower: 0x60371cc9b70232c26c4b8e31229450a3 }, // 3898
    Multiplier { upper: 0xdf39ba6500407f3a60b7de3f2e223418, lower: 0x99f1c7a924d0513713ac16b504208105 }, // 3899
    Multiplier { upper: 0xb294951d99cd32951a2cb1cc24e829ad, lower: 0x47f49fba83d9da927623455d9ce6cd9e }, // 3900
    Multiplier { upper: 0x8edd4417ae3dc210e1bd5b09b7202157, lower: 0x6cc3b2fb9cae48752b4f6ab14a523e18 }, // 3901
    Multiplier { upper: 0xe49539bf7d2f9ce7cf955e75f1cd0225, lower: 0x7ad2b7f8fab073eeabb2444edd506359 }, // 3902
    Multiplier { upper: 0xb6ddc7cc6426171fd9444b918e3d9b51, lower: 0x2f0ef993fbc05cbeefc1d03f177382ae }, // 3903
    Multiplier { upper: 0x924b063d1ceb45b31436a2dad831490d, lower: 0xbf3f2e0ffc99e3cbf3017365ac5c688b }, // 3904
    Multiplier { upper: 0xea11a394fb12091e86bdd15e26b541af, lower: 0x9865167ffa8fd2dfeb35856f7a2d7412 }, // 3905
    Multiplier { upper: 0xbb414faa6274d4186bcb0de4ebc4348c, lower: 0x79ea7866620ca8b32291378c61bdf675 }, // 3906
    Multiplier { upper: 0x95cdd9551b90a9ad2308d7ea56369070, lower: 0x61886051e80a208f4eda92d6b497f85d }, // 3907
    Multiplier { upper: 0xefafc221c5b442ae9e748caa238a80b3, lower: 0xcf409a1ca6769a7ee490eaf120f326fc }, // 3908
    Multiplier { upper: 0xbfbfce816af69bbee52a0a21b60866f6, lower: 0x3f66e1b0852baecbea0d88c0e728ebfd }, // 3909
    Multiplier { upper: 0x99663ecdef2bafcbea88081af806b8c4, lower: 0xff85815a0422f23cbb3e0700b8ed8997 }, // 3910
    Multiplier { upper: 0xf570647cb1df7facaa73402b267127a1, lower: 0x98d59bc339d183945ec9a4cdf4af428b }, // 3911
    Multiplier { upper: 0xc459e9fd5b1932f0885c3355b85a861a, lower: 0xe0aae30294a79c76b23aea3e5d590209 }, // 3912
    Multiplier { upper: 0x9d14bb3115adc25a06b0291160486b48, lower: 0xb3bbe8cedd52e392282f21cb7de0ce6e }, // 3913
    Multiplier { upper: 0xfb545eb4ef7c6a29a44d0e8233a7120d, lower: 0xec5fdae495516c1d0d18361263014a49 }, // 3914
    Multiplier { upper: 0xc9104bc3f2c9ee87b6a40b9b5c85a80b, lower: 0x237fe2507774567da4135e751c01083a }, // 3915
    Multiplier { upper: 0xa0d9d6365bd4bed2f8833c7c4a04866f, lower: 0x4f9981d9f929decae9a9185db000d362 }, // 3916
    Multiplier { upper: 0x80ae44f84976ff0f2d35c9fd08039ebf, lower: 0x72e134ae60ee4bd587ba79e48ccd75e8 }, // 3917
    Multiplier { upper: 0xcde3a18d4257fe7eaebc7661a66c3132, lower: 0x5168544a34b07955a5f7296dae158973 }, // 3918
    Multiplier { upper: 0xa4b61ad768466532256391e7b8568dc1, lower: 0xdab9dd082a26c777b7f8edf158113ac2 }, // 3919
    Multiplier { upper: 0x83c4e245ed051dc1b782db1fc6aba49b, lower: 0x15617da021b89f92f993f18de00dc89c }, // 3920
    Multiplier { upper: 0xd2d49d3cae6e9602bf37c4ffa445d42b, lower: 0x5568c90035f43284c2864f49667c742c }, // 3921
    Multiplier { upper: 0xa8aa1763bebede6898f96a661d04a9bc, lower: 0x4453d4002b29c203ced1d90785305cf0 }, // 3922
    Multiplier { upper: 0x86ee791c9898b1ed472deeb81736ee30, lower: 0x36a9766688ee34cfd8a7e0d2d0f37d8d }, // 3923
    Multiplier { upper: 0xd7e3f4fa8dc11caed8497df35857e380, lower: 0x57758a3da7e387b2f43fce1e1b1f2f48 }, // 3924
    Multiplier { upper: 0xacb65d953e3416f246a1318f79dfe933, lower: 0x792ad4fe1fe9395bf69971b1af4c25d3 }, // 3925
    Multiplier { upper: 0x8a2b7e10fe90125b6bb427a5fb19875c, lower: 0x60ef10cb4cba944992145af48c3ceb0f }, // 3926
    Multiplier { upper: 0xdd12634e6419b6f8ac5372a32b5c0bc7, lower: 0x017e81454790ed428353c4ba79fb11b2 }, // 3927
    Multiplier { upper: 0xb0db82a51ce15f2d56a9288289166fd2, lower: 0x6798676a9fa7243535dc9d61fb2f415b }, // 3928
    Multiplier { upper: 0x8d7c6884171ab28aabba86ced411f30e, lower: 0xb946b9221952835dc4b07de7fc25cde3 }, // 3929
    Multiplier { upper: 0xe260a739be911daaac5da47e201cb817, lower: 0x8ed78e9cf550d22fa11a630cc6a2e304 }, // 3930
    Multiplier { upper: 0xb51a1f616540e48889e4839819b09346, lower: 0x0bdfa54a5dda41bfb4151c0a38824f36 }, // 3931
    Multiplier { upper: 0x90e1b2b45100b6d3a1839c79ae26dc38, lower: 0x097fb76eb17b67cc9010e33b60683f5f }, // 3932
    Multiplier { upper: 0xe7cf8453b4cdf1529c05c72916a4938c, lower: 0xdbff8be44f2bd9474ce7d1f89a406564 }, // 3933
    Multiplier { upper: 0xb972d042f70b2775499e38edabb6dc70, lower: 0xafffa31d0c2314390a530e607b66b783 }, // 3934
    Multiplier { upper: 0x945bd9cf2c08ec5dd47e93f1562be38d, lower: 0x59994f4a701c102da1dc0b8062b892d0 }, // 3935
    Multiplier { upper: 0xed5fc2e513417a2fba641fe889dfd27b, lower: 0xc28ee543e6934d15cfc678cd6ac0eae5 }, // 3936
    Multiplier { upper: 0xbde635840f6794f2fb834cba07e641fc, lower: 0x9ba58436520f70de3fd1fa3def00bbeb }, // 3937
    Multiplier { upper: 0x97eb5e033f8610c262cf7094d31e9b30, lower: 0x7c8469c50e72c0b1cca7fb64bf33c989 }, // 3938
    Multiplier { upper: 0xf312300532701ad09e18b42151ca91e7, lower: 0x2da0a93b4a51344fadd9923acb860f41 }, // 3939
    Multiplier { upper: 0xc274f3375b8ce2407e7a29b4416edb1f, lower: 0x57b3ba95d50dc372f17adb623c6b3f67 }, // 3940
    Multiplier { upper: 0x9b90c292afa3e8339861baf69abf15b2, lower: 0xac8fc877dda49c5bf462491b6388ff86 }, // 3941
    Multiplier { upper: 0xf8e79db77f6ca6b8f3cf918a9131bc51, lower: 0x141940bfc9076093209d41c56c0e65a3 }, // 3942
    Multiplier { upper: 0xc71fb15f9923b893f63fa7a20dc16374, lower: 0x101433cca0d2b3a8e6e4349df00b8482 }, // 3943
    Multiplier { upper: 0x9f4c8de6141c93a991cc861b3e344f90, lower: 0x0cdcf63d4d755c871f1cf6e4c00936cf }, // 3944
    Multiplier { upper: 0xfee0e309b9c752a8e9473cf86386e5b3, lower: 0x47c7f0621588940b64fb24a13341f14a }, // 3945
    Multiplier { upper: 0xcbe71c07c7d2a8872105ca604f9f1e29, lower: 0x06398d1b446d433c50c8ea1a8f67f43c }, // 3946
    Multiplier { upper: 0xa31f499fd30eed38e737d519d94c1820, lower: 0xd1c7a415d05768fd0d6d88153f865cfd }, // 3947
    Multiplier { upper: 0x827f6e1975a58a93ec2caa7b143ce01a, lower: 0x416c8344a6ac53fda457a010ff9eb0ca }, // 3948
    Multiplier { upper: 0xd0cbe35bef6f441fe047772b539499c3, lower: 0x9be0d2077113b995d3bf668198fde7aa }, // 3949
    Multiplier { upper: 0xa70982aff2bf69b319d2c5bc42dd47cf, lower: 0xafe70e6c5a762e117632b867ad97ec88 }, // 3950
    Multiplier { upper: 0x85a135598eff87c27b0f04969be43972, lower: 0xf31f3ebd152b580df828938624798a06 }, // 3951
    Multiplier { upper: 0xd5cebbc27e65a603f81807575fd38f1e, lower: 0x51cb9794eeabc01659da85a36d8f433d }, // 3952
    Multiplier { upper: 0xab0bc968651e1e6993466c45e642d8e5, lower: 0x0e3c7943f2230011e17b9e1c57a5cf64 }, // 3953
    Multiplier { upper: 0x88d63ab9ea7e7ebadc38569e51cf13ea, lower: 0x71c9fa9cc1b599a7e7961816ac84a5ea }, // 3954
    Multiplier { upper: 0xdaf05df643fd9791605a243082e4ecaa, lower: 0x4fa990facf88f5d97289c024473aa30f }, // 3955
    Multiplier { upper: 0xaf26b191cffe12dab37b5026cf1d8a21, lower: 0xd95473fbd93a5e478ed499b69f621c0c }, // 3956
    Multiplier { upper: 0x8c1ef474a664dbe2292f73523f4ad4e7, lower: 0xe1105cc97a9518393f107af87f81b00a }, // 3957
    Multiplier { upper: 0xe03187210a3af969db7f1ee9fede2173, lower: 0x01b3c7a8c421c05b981a5e5a659c4cdd }, // 3958
    Multiplier { upper: 0xb35ad280d4fbfabb15ff4bee657e8128, lower: 0xce296c87034e337c79aeb1e1eae370b1 }, // 3959
    Multiplier { upper: 0x8f7bdb9a43fcc895ab32a3251dfecdba, lower: 0x3e878a059c3e8f96c7bef4b4bbe926f4 }, // 3960
    Multiplier { upper: 0xe592f8f6d32e0dbc451dd1d4fccae2c3, lower: 0x973f433c2d30e5be0c64babac641d7ec }, // 3961
    Multiplier { upper: 0xb7a8c72bdc24d7c9d0e4a7dd9708b569, lower: 0x45cc35c9bdc0b7cb3d1d622f0501798a }, // 3962
    Multiplier { upper: 0x92ed6c231683dfd4a71d5317ac06f787, lower: 0x6b09c4a1649a2ca2974ab4f26a67946e }, // 3963
    Multiplier { upper: 0xeb1579d1bd9fcc8771c884f2acd7f272, lower: 0x44dc6dcf075d1437587787ea43d8ed7d }, // 3964
    Multiplier { upper: 0xbc112e41647fd6d2c16d37288a465b8e, lower: 0x9d7d24a59f7da9c5e05f9fee9cad8acb }, // 3965
    Multiplier { upper: 0x967425011d33124234575f53a1d1e2d8, lower: 0x7dfdb6eae5fe216b19e6198bb08ad56f }, // 3966
    Multiplier { upper: 0xf0b9d4ce951e839d208bcbb902e96af3, lower: 0xfcc924ab09969bde8fd68f45e74488b1 }, // 3967
    Multiplier { upper: 0xc094aa3eddb202e41a096fc7358788c3, lower: 0x30a0ea226e12164ba6453f6b1f6a06f4 }, // 3968
    Multiplier { upper: 0x9a1088324af4cf1ce1a12638f79fa09c, lower: 0x26e721b524db450951d0ff88e5ee6bf7 }, // 3969
    Multiplier { upper: 0xf680d9ea1187b1c7cf683d27f29900f9, lower: 0xd7d835eea15ed4dbb61b3274a3171324 }, // 3970
    Multiplier { upper: 0xc533e1880e0627d30c53641ff54733fb, lower: 0x13135e588118aa495e7c285d4f45a8ea }, // 3971
    Multiplier { upper: 0x9dc31ad33e6b530f3d0f834cc438f662, lower: 0x75a91846cdad55077ec9b9e43f6aed88 }, // 3972
    Multiplier { upper: 0xfc6b5e1eca4551b1fb4c0547a05b23d0, lower: 0xbc41c071491554d8cadc5ca06577e273 }, // 3973
    Multiplier { upper: 0xc9ef7e7f0837748e62a3376c8048e973, lower: 0xc9ce338dd41110ad6f16b080512cb529 }, // 3974
    Multiplier { upper: 0xa18c65326cf92a0b821c2c56cd072129, lower: 0x6e3e8fa4a9a7408abf455a0040f090ed }, // 3975
    Multiplier { upper: 0x813d1dc1f0c754d601b02378a405b421, lower: 0x24fed95087b9006eff6aae669a5a0d8b }, // 3976
    Multiplier { upper: 0xcec82f9cb47221566919d25aa0092035, lower: 0x07fe2880d92800b198aab0a42a29af44 }, // 3977
    Multiplier { upper: 0xa56cf2e3c38e8111edae41e219a0e690, lower: 0xd331ba00adb99a27ad555a1cee87bf6a }, // 3978
    Multiplier { upper: 0x845728b6360b9a74be250181ae1a520d, lower: 0x75c1619a24947b52f11114e3f20632bb }, // 3979
    Multiplier { upper: 0xd3bea789f01290bac9d4cf35e35d5015, lower: 0x893568f6a0ed921e4e81bb065009eac5 }, // 3980
    Multiplier { upper: 0xa96552d4c00eda2f07dd729182b10cde, lower: 0x075ded921a57a8183ece2f384007ef04 }, // 3981
    Multiplier { upper: 0x87844243ccd8ae8c064ac20e02273d7e, lower: 0x6c4b2474e1dfb9acff0b58f9ccd3259d }, // 3982
    Multiplier { upper: 0xd8d39d3947c1174670779ce336a52f30, lower: 0xad4507216965f5e1981227f6148508fb }, // 3983
    Multiplier { upper: 0xad7617610634129ec05fb0b5c550f28d, lower: 0x576a6c1abab7f7e7acdb532b439da0c9 }, // 3984
    Multiplier { upper: 0x8ac4df80d1c3421899e626f7d10d8ed7, lower: 0x7921f015622cc652f0af75bc3617b3d4 }, // 3985
    Multiplier { upper: 0xde07cc014f9ed0275ca3718c81af4af2, lower: 0x5b69802236ae0a1e4de5892d23591fb9 }, // 3986
    Multiplier { upper: 0xb19fd66772e57352b082c13d348c3bf5, lower: 0x15ee001b5ef1a1b1d7ead4241c474c94 }, // 3987
    Multiplier { upper: 0x8e197852c251290ef39bcdca90702ff7, lower: 0x44be667c4bf4815b13224350169f7077 }, // 3988
    Multiplier { upper: 0xe35bf3b79d4ea817ec2c7c774d804cbe, lower: 0xd463d72d4654022b51d06bb3576580bd }, // 3989
    Multiplier { upper: 0xb5e3295fb10bb9acbcf06392a466a3cb, lower: 0xdd1cac24384334ef74a6bc8f791e0098 }, // 3990
    Multiplier { upper: 0x9182877fc0d62e23ca59e9421d1ee96f, lower: 0xe416f01cf9cf5d8c5d523072c74b33ad }, // 3991
    Multiplier { upper: 0xe8d0d8cc67bd169faa29753694fe424c, lower: 0xa024b3618fb22f46fbb6b3ead87852ad }, // 3992
    Multiplier { upper: 0xba40ad7052fdabb2ee8790f87731cea3, lower: 0xb3508f813fc1bf6bfc922988ad2d0ef1 }, // 3993
    Multiplier { upper: 0x95008ac04264895bf2060d93928e3ee9, lower: 0x5c4072cdcc9aff8996db546d57573f28 }, // 3994
    Multiplier { upper: 0xee674466d0a0dbc65009af528416cb0e, lower: 0xfa00b7afadc4cc0f57c553e22558650c }, // 3995
    Multiplier { upper: 0xbeb9038573b3e3050cd48c4203456f3f, lower: 0x2e66f95957d0a33f796aa981b779ea70 }, // 3996
    Multiplier { upper: 0x989402d1295cb59da3dd3d019c378c32, lower: 0x8b8594477973b5cc6122213492c7eec0 }, // 3997
    Multiplier { upper: 0xf4200481dbc788fc3961fb35c6bf46b7, lower: 0x45a286d8c252bc7a350368541e0cb133 }, // 3998
    Multiplier { upper: 0xc34cd067e30607302de7fc2b0565d22c, lower: 0x37b538ad68423061c402b9dce4d6f429 }, // 3999
    Multiplier { upper: 0x9c3d73864f3805c024b99688d11e41bc, lower: 0xf95dc6f12034f381699bc7e3ea459021 }, // 4000
    Multiplier { upper: 0xf9fbec0a1859a2cd078f57414e96cf94, lower: 0xc22fa4b50054b8cf0f5fa63976d5b367 }, // 4001
    Multiplier { upper: 0xc7fcbcd4e047b570d2d9129aa54572dd, lower: 0x68261d5d99dd60a5a5e61e945f115c53 }, // 4002
    Multiplier { upper: 0x9ffd63dd80395df3dbe0dbaeea9df57d, lower: 0xeceb4ab147e44d515184e5437f4116a9 }, // 4003
    Multiplier { upper: 0xfffbd2fc005bc9862c9af917ddc988c9, lower: 0x7b12111ba63a154ee8d4a20598682441 }, // 4004
    Multiplier { upper: 0xccc9759666afd46b56e260dfe4a13a3a, lower: 0xc8db40e2eb61aaa58710819e13868367 }, // 4005
    Multiplier { upper: 0xa3d45e11ebbfdd22abe84d7fea1a94fb, lower: 0xd3e29a4f22b488846c0d347e760535ec }, // 4006
    Multiplier { upper: 0x83104b4189664a8223203dffee7baa63, lower: 0x0fe87b72822a06d05670f6cb919dc4bd }, // 4007
    Multiplier { upper: 0xd1b3ab9c0f0a10d0383396664a5f7704, lower: 0xe640c5840376714d571b2478e8fc6dfb }, // 4008
    Multiplier { upper: 0xa7c2efb00c080d736029451ea1e5f8d0, lower: 0xb833d136692b8dd778e28393ed96be63 }, // 4009
    Multiplier { upper: 0x86358c8cd66cd78f802104188184c70d, lower: 0x6029742b87560b12c71b9c7657abcb82 }, // 4010
    Multiplier { upper: 0xd6bc14148a47bf4c0034d35a68d471af, lower: 0x00425378d889ab513e9293f08c46126a }, // 4011
    Multiplier { upper: 0xabc9a9aa083965d66690a91520a9f48c, lower: 0x00350f93e06e22a765420ff3a36b41ee }, // 4012
    Multiplier { upper: 0x896e2154d3611e451eda20ddb3bb2a09, lower: 0x99c40c764d24e885ea9b3ff61c55ce58 }, // 4013
    Multiplier { upper: 0xdbe36887b89b63a1caf69afc52c5100f, lower: 0x5c6ce0bd483b0da310f8665693bc7d5a }, // 4014
    Multiplier { upper: 0xafe9206c93af82e7d5921596a89da672, lower: 0xb0571a310695a48273f9eb7876306448 }, // 4015
    Multiplier { upper: 0x8cba8056dc8c68b977a8114553b151f5, lower: 0x59df48273877b6cec32e55f9f826b6a0 }, // 4016
    Multiplier { upper: 0xe12a66f160e0a78f25d9b53bb91bb655, lower: 0x5c987371f3f2be179eb0898ff3712433 }, // 4017
    Multiplier { upper: 0xb421ebf44d80860c1e47c42fc7495eaa, lower: 0xb079f5f4c3289812e55a07a65c5a835c }, // 4018
    Multiplier { upper: 0x901b2329d79a04d67e9fd02639077eee, lower: 0xf394c4c3cf53acdbeaae6c8516aecf7d }, // 4019
    Multiplier { upper: 0xe691d1dc8c29a15730ffb3705b3f317e, lower: 0x5287a1394bb9149311171408244ae594 }, // 4020
    Multiplier { upper: 0xb874a7e3a35481128d995c59e298f465, lower: 0x0ed2e7610960dd427412766ce9d58477 }, // 4021
    Multiplier { upper: 0x9390864fb5dd340ed7ade37b1bad9050, lower: 0xd8a8b91a6de717685cdb91f0bb1136c5 }, // 4022
    Multiplier { upper: 0xec1a707f8961ece48c496bf82c48e6e7, lower: 0xc10df4f7163e8bda2e2c1cb45e81f13c }, // 4023
    Multiplier { upper: 0xbce1f3993ab4bd83a36deff9bd071f1f, lower: 0xcda4c3f8de986fe1be89b0904b9b2763 }, // 4024
    Multiplier { upper: 0x971b2947622a31361c57f32e30d27f4c, lower: 0xa483cffa4bad264e3207c0736faf52b6 }, // 4025
    Multiplier { upper: 0xf1c50ed89d104ebcfa2651e38150cbad, lower: 0xd406199079150a16b672cd857f7eeabc }, // 4026
    Multiplier { upper: 0xc16a7246e40d0bca61b84182cdda3c8b, lower: 0x1004e14060dda1abc528a46acc658897 }, // 4027
    Multiplier { upper: 0x9abb8e9f1cd73ca1e7c69acf0b14fd3c, lower: 0x0cd0b43380b14e2304208388a3846d45 }, // 4028
    Multiplier { upper: 0xf7927dcb615861030c70f7b1ab54c860, lower: 0x148120526782169e6d00d27438d3e208 }, // 4029
    Multiplier { upper: 0xc60ecb091aad1a68d6c0c627bc43d380, lower: 0x10674d0eb934dee52400a85cfa431b3a }, // 4030
    Multiplier { upper: 0x9e723c07488a7b871233d1b963697600, lower: 0x0d1f70d8942a4bea8333b9e3fb68e295 }, // 4031
    Multiplier { upper: 0xfd83933eda772c0b5052e9289f0f2333, lower: 0x48324e275376dfdd9eb9296cc5749dbb }, // 4032
    Multiplier { upper: 0xcacfa8ff152c233c404254207f3f4f5c, lower: 0x39c1d81f75f8b317b22dbabd6ac3b162 }, // 4033
    Multiplier { upper: 0xa23fba65aa89b5c9cd01dce6cc32a5e3, lower: 0x6167e0192b2d5c12f4f1623122362782 }, // 4034
    Multiplier { upper: 0x81cc951e2207c4a170ce4a523cf55182, lower: 0xb45319adbc2449a8c3f44e8db4f81f9b }, // 4035
    Multiplier { upper: 0xcfadbb6369a60768b47d43b6c7eee8d1, lower: 0x2084f5e2c6a075dad3207daf87f365c5 }, // 4036
    Multiplier { upper: 0xa62495e921519f86f6ca9c92398bed74, lower: 0x1a03f7e89ee6c4af0f4d3159398f849e }, // 4037
    Multiplier { upper: 0x84ea11874ddae605923bb074fad65790, lower: 0x14cff986e5856a25a5d75aadc7a603b1 }, // 4038
    Multiplier { upper: 0xd4a9b5a5495e3cd5b6c5e7219156f280, lower: 0x214cc2716f3bdd09095891160c3cd2b5 }, // 4039
    Multiplier { upper: 0xaa215e1dd44b63de2bd185b474458ecc, lower: 0xe7709b8df2964a6da113a744d6970ef7 }, // 4040
    Multiplier { upper: 0x881ab1b176a2b64b564137c39037a570, lower: 0xb926e2d7f5450857b40fb903dedf3f2c }, // 4041
    Multiplier { upper: 0xd9c44f82576abd4556cebf9f4d25d581, lower: 0x283e37bfeed4da25ece5f4d2fe31fead }, // 4042
    Multiplier { upper: 0xae36a601df88976aabd8994c3db7de00, lower: 0xecfe92fff243e1b7f0b7f70f31c1988b }, // 4043
    Multiplier { upper: 0x8b5eeb34b2d3ac555646e109caf97e67, lower: 0x23fedbfff5031af98d5ff8d8f49ae06f }, // 4044
    Multiplier { upper: 0xdefe45211e1f7a2223a49b42de5bfd71, lower: 0xd3315fffee6b5e5c15665af4ba916718 }, // 4045
    Multiplier { upper: 0xb265041a7e7f94e81c83af68b1e33127, lower: 0xdc277ffff1ef7eb0111eaf2a2edab8e0 }, // 4046
    Multiplier { upper: 0x8eb7367b986610b9b06959208e4f5a86, lower: 0x49b9333327f2cbc00db225bb58aefa4d }, // 4047
    Multiplier { upper: 0xe458572c2709b45c4d755b674a1890d6, lower: 0xdc5b851ea651460015e9d5f88de4c3ae }, // 4048
    Multiplier { upper: 0xb6ad1289b8d49049d79115ec3b46da45, lower: 0x7d160418850dd199ab2177fa0b1d6958 }, // 4049
    Multiplier { upper: 0x92240ed493dd403b12da77f02f6be1d1, lower: 0x30de69ad373e4147bc1ac661a27dede0 }, // 4050
    Multiplier { upper: 0xe9d34aedb962005e8490bfe6b246361b, lower: 0x8163dc4858639ba5f9c4709c372fe300 }, // 4051
    Multiplier { upper: 0xbb0f6f24944e66b203a6ffebc1d1c4e2, lower: 0xcde97d06ad1c7c84c7d05a16928cb599 }, // 4052
    Multiplier { upper: 0x95a5f283a9d8522802ebffefce416a4f, lower: 0x0b2130d22416ca03d30d14dedba3c47b }, // 4053
    Multiplier { upper: 0xef6fea6c42f3b6a66b1333194a0243b1, lower: 0xab684e1d068adcd2eb482164929fa0c4 }, // 4054
    Multiplier { upper: 0xbf8cbb89cf295eeb88dc28e10801cfc1, lower: 0x55ed0b4a6ba24a4255d34dea0ee61a37 }, // 4055
    Multiplier { upper: 0x993d62d4a5bab2560716871a6cce3fcd, lower: 0xde573c3b894ea1ceab0f71880beb482c }, // 4056
    Multiplier { upper: 0xf52f04876f911d5671bda4f7147d32e2, lower: 0xfd58605f4217694aab4be8d9acaba6ac }, // 4057
    Multiplier { upper: 0xc4259d39260db111f497b72c106428b5, lower: 0x9779e6b29b45edd555d653e156efb88a }, // 4058
    Multiplier { upper: 0x9ceae42db80af40e5d462c2340502091, lower: 0x45fb1ef54904be4444ab764ddf262d3b }, // 4059
    Multiplier { upper: 0xfb116d15f344b9b0953d136b9a19cdb5, lower: 0x3cc4fe5541a1306d3aabf07c983d152b }, // 4060
    Multiplier { upper: 0xc8dabdab2903c7c077640f894814a490, lower: 0xfd6a6511014dc057622326ca136410ef }, // 4061
    Multiplier { upper: 0xa0aefe2287363966c5e9a6076cdd5073, lower: 0xfdeeb740cdd7cd12b4e8ebd4dc500d8c }, // 4062
    Multiplier { upper: 0x808bfe8205c4fab89e5484d2bd7dd9f6, lower: 0x64bef900a4aca40ef720bcaa49d9a470 }, // 4063
    Multiplier { upper: 0xcdacca69a2d4c45a96eda1512f2fc323, lower: 0xd464c19aa11439b18b679443a95c3a4d }, // 4064
    Multiplier { upper: 0xa48a3b87b577037babf14dda8c2635b6, lower: 0x4383ce154da9c7c13c52dd02ede361d8 }, // 4065
    Multiplier { upper: 0x83a1c9395df8cf962327717ba351c491, lower: 0xcf9ca4ddd7bb063430424a68be4f8179 }, // 4066
    Multiplier { upper: 0xd29c7528965ae5bd050be8c5d21c6db6, lower: 0x18faa162f2c4d6b9e6d0770dfd4c025b }, // 4067
    Multiplier { upper: 0xa87d2a86deaf1e30d0d653d174e38af8, lower: 0x13fbb44f289d7894b8a6c5a4caa33516 }, // 4068
    Multiplier { upper: 0x86ca886be558e4f3da450fdac3e93bf9, lower: 0xa99629d8ed4ac6dd60856aea3bb5c412 }, // 4069
    Multiplier { upper: 0xd7aa73dfd55b07ec906e7fc46ca85ff5, lower: 0xdc237627e2113e2f00d577dd2c560682 }, // 4070
    Multiplier { upper: 0xac885cb311159ff0738b9969f086b32b, lower: 0x1682c4ecb4da98259a445fe423780535 }, // 4071
    Multiplier { upper: 0x8a06b08f40de198d293c7abb26d228ef, lower: 0x45356a56f71546847b69e6501c60042b }, // 4072
    Multiplier { upper: 0xdcd780e534968f4841fa5df83e1d0e4b, lower: 0xa1ef108b24eed73a5f0fd6e693ccd377 }, // 4073
    Multiplier { upper: 0xb0ac671dc3aba5d367fb7e6031b0d83c, lower: 0x818c0d3c1d8bdf61e5a64585430a42c6 }, // 4074
    Multiplier { upper: 0x8d56b8e49c895175ecc931e68e271363, lower: 0x9ad670fce46fe5e7eaeb6ad1026e9bd2 }, // 4075
    Multiplier { upper: 0xe2245b0760dbb5897adb830a7d0b5238, lower: 0xf7bd8194a0b309731178aae803e42c82 }, // 4076
    Multiplier { upper: 0xb4e9e26c4d7c913ac8af9c0864090e93, lower: 0xf96467aa1a28d45c0dfa22533650239c }, // 4077
    Multiplier { upper: 0x90bb1b89d796da956d5949a050073edc, lower: 0xc7838621ae871049a4c81b75c50ce949 }, // 4078
    Multiplier { upper: 0xe791c5a958f15dbbe22875cd4cd86494, lower: 0x726c09cf7da4e6dc3ad9c5893b47dba8 }, // 4079
    Multiplier { upper: 0xb9416aede0c117c981b9f7d770ad1d43, lower: 0x8ebcd4a5fe1d857cfbe16ad42f6cafba }, // 4080
    Multiplier { upper: 0x9434558b1a3413079afb2cac5a241769, lower: 0x3efd76eb31b137972fe788a9bf8a262e }, // 4081
    Multiplier { upper: 0xed2088de905351a5c4c51446f6a02575, lower: 0x31958b11e91b8c2519727442cc103d17 }, // 4082
    Multiplier { upper: 0xbdb3a0b20d0f74849d6a769f2bb3512a, lower: 0x8e113c0e541609b7478ec368a34030df }, // 4083
    Multiplier { upper: 0x97c2e6f4d73f906a17885ee5bc8f7422, lower: 0x0b40fcd84344d4929fa569208299c0b3 }, // 4084
    Multiplier { upper: 0xf2d17187becc1a4358da316f9418b9d0, lower: 0x1201948d386e20ea9908a83404293451 }, // 4085
    Multiplier { upper: 0xc241279fcbd67b6913e1c1261013c7d9, lower: 0xa80143a42d24e7221406ecf669ba9041 }, // 4086
    Multiplier { upper: 0x9b6752e63cab95eda9816751a676397a, lower: 0xeccdcfb68a83ec1b4338bd91ee2ed9cd }, // 4087
    Multiplier { upper: 0xf8a551706112897c4268a54f70bd28c4, lower: 0xae16192410d3135ed1f4628316b15c7b }, // 4088
    Multiplier { upper: 0xc6eaa78d1a753ac9ceba1dd926fdba36, lower: 0xf1ab47500d75a918a7f6b535abc116c9 }, // 4089
    Multiplier { upper: 0x9f221fa4152a956e3efb4b141f3161c5, lower: 0x8e229f733df7ba7a1ff890f7bc9a78a1 }, // 4090
    Multiplier { upper: 0xfe9cff6ceeaa88b064c544ecfeb5693c, lower: 0x169dcbeb96592a5cfff41b25fa90c102 }, // 4091
    Multiplier { upper: 0xcbb0cc5725553a26b7043723fef78763, lower: 0x454b0989451421e3fff67c1e620d6735 }, // 4092
    Multiplier { upper: 0xa2f3d6ac1dddc81ef8d02c1ccbf9391c, lower: 0x376f3ad437434e4ffff8634b81a45291 }, // 4093
    Multiplier { upper: 0x825cabbce4b16ce593d9bce3d660fa7c, lower: 0xf925c8a9c5cf71d9999382a2ce1d0eda }, // 4094
    Multiplier { upper: 0xd09445fb078247d5b95c616c8a34c3fb, lower: 0x283c7442d618b628f5b8d1047cfb4af6 }, // 4095
    Multiplier { upper: 0xa6dd04c8d2ce9fde2de38123a1c3cffc, lower: 0x20305d0244e091ba5e2d7403972f6f2c }, // 4096
    Multiplier { upper: 0x857d9d6d7572197e8b1c674fb49ca663, lower: 0x4cf37d9b6a4d4161e4f1299c78f2bf56 }, // 4097
    Multiplier { upper: 0xd595c8af225028ca782d721920faa3d2, lower: 0x14b8c8f8aa1535696e4ea8fa5b1dfef0 }, // 4098
    Multiplier { upper: 0xaade3a25b50ced6ec68ac1adb3fbb641, lower: 0xaa2d6d93bb442ababea553fb7c17ff26 }, // 4099
    Multiplier { upper: 0x88b1c81e2a70bdf2386f0157c32fc501, lower: 0x54f124762f69bbc89884432f967998ec }, // 4100
    Multiplier { upper: 0xdab60cfd10b4631d2718022605193b35, lower: 0x54b507237f0f92da8da06b7f5728f4ac }, // 4101
    Multiplier { upper: 0xaef80a640d5d1c1752799b519dadc8f7, lower: 0x76f738e93272dbe20ae6bc65df53f6f0 }, // 4102
    Multiplier { upper: 0x8bf9a1e9a44a7cdf752e15dae48b072c, lower: 0x5f2c2d875b8f164e6f1efd1e4c432bf3 }, // 4103
    Multiplier { upper: 0xdff5cfdc3a10c7cbeeb022f7d411a513, lower: 0xcb79e2722c1823b0b1cb2e96e06b7985 }, // 4104
    Multiplier { upper: 0xb32b0cb02e73d3098bc01bf97674840f, lower: 0xd5fb1b8e89ace95a27d5bedf19ef946b }, // 4105
    Multiplier { upper: 0x8f55a3c0252975a13c99affac52a033f, lower: 0xde627c7207bd877b5311657f47f2dd22 }, // 4106
    Multiplier { upper: 0xe555d2cd084255cec75c4cc46ea99ecc, lower: 0x9703fa500c62725eeb4f08cba65161d0 }, // 4107
    Multiplier { upper: 0xb777dbd739ceab0bd2b03d69f2214bd6, lower: 0xdf3661d9a381f518bc3f3a3c850de7da }, // 4108
    Multiplier { upper: 0x92c64978fb0bbc097559cabb281aa312, lower: 0x4c2b817ae934c413c9cc2e96d0d7ecae }, // 4109
    Multiplier { upper: 0xead6dbf4c4df9342555c7791d9c4381d, lower: 0x46ac025e41ee06860fad1757b48cade3 }, // 4110
    Multiplier { upper: 0xbbdf165d6a4c75ceaab05fa7e169c67d, lower: 0xd223351834be6b9e72f0df795d3d57e9 }, // 4111
    Multiplier { upper: 0x964c11e45509f7d8888d19531abb0531, lower: 0x74e8f746909856185bf3e5fab0fddfee }, // 4112
    Multiplier { upper: 0xf079b63a21a98c8da7482884f791a1e8, lower: 0xbb0e5870e75a235a2cb96ff781963316 }, // 4113
    Multiplier { upper: 0xc0615e94e7bad6d7b90686d0c60e1b20, lower: 0x95a5138d85e1b5e1bd61265f9ade8f45 }, // 4114
    Multiplier { upper: 0x99e77edd862f12462d9ed2409e71af4d, lower: 0x44840fa46b1af7e7cab41eb2e24ba5d1 }, // 4115
    Multiplier { upper: 0xf63f3162704b507048fe1d3430b5e548, lower: 0x6da0190711c4bfd9445364516a12a2e7 }, // 4116
    Multiplier { upper: 0xc4ff5ab526a2a6c03a64e429c0918439, lower: 0xf14ce0d2749d664769dc504121a88253 }, // 4117
    Multiplier { upper: 0x9d99155db8821f002eb71cee33a79cfb, lower: 0x2770b3db907deb6c54b040341aed350f }, // 4118
    Multiplier { upper: 0xfc28222f8d9cfe66b124fb16b90c2e5e, lower: 0xa5811fc5b3fcabe0878066b9c4aebb4b }, // 4119
    Multiplier { upper: 0xc9b9b4f2d7b0cb855a83fc122da3584b, lower: 0xb79a7fd15cca231a0600522e36f22f6f }, // 4120
    Multiplier { upper: 0xa1615d8f12f3d60448699674f14f79d6, lower: 0x2c7b99744a3b4f4804cd0e8b5f2825f3 }, // 4121
    Multiplier { upper: 0x811ab13f425cab36a054785d8dd92e44, lower: 0xf062e129d4fc3f6cd0a40ba2b28684c2 }, // 4122
    Multiplier { upper: 0xce911b986a2ddebdcd53f3c8e2f516d4, lower: 0xb3d16842ee60657ae76cdf6ab73da136 }, // 4123
    Multiplier { upper: 0xa540e2e054f17efe3ddcc3071bf74576, lower: 0xf64120358b80512f1f8a4c555f6480f8 }, // 4124
    Multiplier { upper: 0x8433e8b3772798cb64b09c05aff9045f, lower: 0x2b674cf7a2cd0dbf4c6ea3777f839a60 }, // 4125
    Multiplier { upper: 0xd386411f250c27abd44dc66f7ff4d3cb, lower: 0x78a547f29e14e2cbad7dd258cc05c3cd }, // 4126
    Multiplier { upper: 0xa9383418ea701fbca9d7d1f2ccc3dca2, lower: 0xc6ea9ff54b43e8a2f1317513d66b030b }, // 4127
    Multiplier { upper: 0x876029ad8859b2fd54aca7f5709cb082, lower: 0x38bbb32aa29cba1bf42790dcab88cf3c }, // 4128
    Multiplier { upper: 0xd899dc48da291e6221143fef1a944d9d, lower: 0x2792b844376129c65372816112747ec6 }, // 4129
    Multiplier { upper: 0xad47e36d7b54184e80dcfff27ba9d7b0, lower: 0xec75603692b4216b75f5344da85d3238 }, // 4130
    Multiplier { upper: 0x8a9fe92462a9ad0b9a4a665b9621795a, lower: 0x56c44cf8755ce7892b2a903e204a8e93 }, // 4131
    Multiplier { upper: 0xddcca83a3775e1ac2a10a3c5bd025bc3, lower: 0xbe06e18d8894a5a84510e6c9cd441752 }, // 4132
    Multiplier { upper: 0xb1708694f92b1af021a6e96afd9b7c9c, lower: 0x9805813e06dd51536a73ebd4a436790e }, // 4133
    Multiplier { upper: 0x8df39edd94227bf34e1f2122647c63b0, lower: 0x799e00fe6be4410f885cbcaa1cf860d8 }, // 4134
    Multiplier { upper: 0xe31f6495b9d0c65216983503d3fa391a, lower: 0x5c3001971306ce7f409461102e5a348d }, // 4135
    Multiplier { upper: 0xb5b2b6de2e409ea812135d9ca994fa7b, lower: 0x7cf33478dc0571ff66dd1a7358482a0b }, // 4136
    Multiplier { upper: 0x915bc57e8b66e55341a917b087aa61fc, lower: 0x63f5c393e3378e65ebe41529136cee6f }, // 4137
    Multiplier { upper: 0xe892d59745716eeb9c41bf80d9109cc7, lower: 0x065605b96b8c1709796ceea81f14b0b1 }, // 4138
    Multiplier { upper: 0xba0f1145d1278befb0349933e0da1705, lower: 0x9eab37c7893cdf3ac78a58867f43c08e }, // 4139
    Multiplier { upper: 0x94d8da9e40ec6ff2f35d475cb3e1ac04, lower: 0x7eef5fd2d430b2956c6ead3865cfcd3e }, // 4140
    Multiplier { upper: 0xee27c43067e0b31e522ed8945302acd3, lower: 0xfe4bcc8486b450ef13e4485a3c7faeca }, // 4141
    Multiplier { upper: 0xbe86368d1fe6f5b1db58ad43759bbd76, lower: 0x6509706a055d0d8c0fe9d37b639958a2 }, // 4142
    Multiplier { upper: 0x986b5ed74cb8c48e4913bdcf9149645e, lower: 0xb73ac054d1173e09a654a92f82e113b5 }, // 4143
    Multiplier { upper: 0xf3defe25478e074a0e85fc7f4edbd3ca, lower: 0xbec466ee1b586342a3baa84c049b52ba }, // 4144
    Multiplier { upper: 0xc318cb51060b39080b9e63990be30fd5, lower: 0x6569ebf1af79e9021c95537003af7562 }, // 4145
    Multiplier { upper: 0x9c13d5da6b3c2da0094b82e0d64f3fdd, lower: 0xeabb2327bf94ba6816dddc599c8c5de8 }, // 4146
    Multiplier { upper: 0xf9b9562a452d15ccdbac049af07ecc96, lower: 0x445e9ea5ff545d7357c9608f60e09640 }, // 4147
    Multiplier { upper: 0xc7c77821d0f0de3d7c899d48c0657078, lower: 0x36b21884cc437df5dfd44d3f80b3ab66 }, // 4148
    Multiplier { upper: 0x9fd2c68173f3e4fdfd3ae43a338459f9, lower: 0xc55b46d0a36931917fdd0a9933c2ef85 }, // 4149
    Multiplier { upper: 0xffb7a402531fd4c9952b06c385a08ff6, lower: 0x08920ae76bdb8282662e775b8604b26e }, // 4150
    Multiplier { upper: 0xcc92e99b75b310a144226bcf9e1a0cc4, lower: 0xd3a808b923160201eb585f7c6b36f525 }, // 4151
    Multiplier { upper: 0xa3a8bae2c48f4081034ebca61814d703, lower: 0xdc866d60e8de680189137f96bc2bf751 }, // 4152
    Multiplier { upper: 0x82ed624f03a5cd3402a563b81343df36, lower: 0x4a05244d871853346da932defceff90e }, // 4153
    Multiplier { upper: 0xd17bd07e6c3c7b866aa2392685396523, lower: 0xa9a1d3af3e8d51ed7c41eafe617ff4e2 }, // 4154
    Multiplier { upper: 0xa796406523639605221b60eb9dc7841c, lower: 0x87b4a958fed774bdfd0188cb81332a4f }, // 4155
    Multiplier { upper: 0x8611cd1db5e944d0e815e722e49f9ce3, lower: 0x9fc3baad98ac5d64ca67a0a2cdc2883f }, // 4156
    Multiplier { upper: 0xd682e1c9230ed48173563e9e3a98fb05, lower: 0xcc6c5de28de0956e10a5cdd149374065 }, // 4157
    Multiplier { upper: 0xab9be7d41c0bdd345c44fee4fbad959e, lower: 0x3d237e4ed7e6ddf1a6eb0b0dd42c3384 }, // 4158
    Multiplier { upper: 0x8949864349a3175d169d98b72fbe114b, lower: 0x641c650bdfebe4c15255a2717689c2d0 }, // 4159
    Multiplier { upper: 0xdba8d6d20f6b5894f0fc278b7f968212, lower: 0x39c70812ffdfd46883bc371bf0dc6ae6 }, // 4160
    Multiplier { upper: 0xafba4574d922ad43f3fcec6f994534db, lower: 0x616c0675997fdd2069635f498d7d2252 }, // 4161
    Multiplier { upper: 0x8c95045d7a8224365cca56bfadd0f715, lower: 0xe7899ec47accb0e6bab5e5d47130e842 }, // 4162
    Multiplier { upper: 0xe0ee6d625d9d06bd6143bdff7c818b56, lower: 0x3f4297a0c47ab4a45defd620b51b0d35 }, // 4163
    Multiplier { upper: 0xb3f1f11b7e1738978102fe65fd346f78, lower: 0x329bac809d2ef6e9e4bfde8090e270f8 }, // 4164
    Multiplier { upper: 0x8ff4c0e2cb45c6df9a68cb84ca90592c, lower: 0xf54956cd4a8bf8bb1d664b9a0d81f3f9 }, // 4165
    Multiplier { upper: 0xe65467d1453c7165c3dadf3addb3c1e1, lower: 0x887557aeddacc12b623d45c348cfecc2 }, // 4166
    Multiplier { upper: 0xb843864104305ab7cfe24c2f17c30181, lower: 0x39f77958b15700ef81ca9e35d3d98a35 }, // 4167
    Multiplier { upper: 0x936938340359e22ca64ea358dfcf3467, lower: 0x6192c77a2778cd8c67d54b5e43146e91 }, // 4168
    Multiplier { upper: 0xebdb8d20055c9d143d4a9ef4994b870b, lower: 0xcf513f29d8c148e0a62212306b53e41b }, // 4169
    Multiplier { upper: 0xbcafa4199de3b0dcfdd54bf6e10938d6, lower: 0x3f743287e09aa0b3b81b41c055dcb67c }, // 4170
    Multiplier { upper: 0x96f2e9ae17e95a4a64aaa32be73a93de, lower: 0x9929c2064d48808fc67c3499de4a2b96 }, // 4171
    Multiplier { upper: 0xf184a9168ca8907707776b7971f752fd, lower: 0xc1dc69a3aeda674c70c6ba8fca1045bd }, // 4172
    Multiplier { upper: 0xc136edaba3ba0d2c05f922c78e5f7597, lower: 0xce49ee1c8be1ec3d2705620ca1a69e31 }, // 4173
    Multiplier { upper: 0x9a9257bc82fb3dbcd1941bd2d84c5e13, lower: 0x0b6e5816d64e5697526ab4d6e7b87e8e }, // 4174
    Multiplier { upper: 0xf7508c60d191fc614f535fb7c07a301e, lower: 0x78b08cf156e3bdbeea44548b0c5a6415 }, // 4175
    Multiplier { upper: 0xc5da09e70e0e63810c42b2f966c8267e, lower: 0xc6f3a3f44582fe32550376d5a37b8344 }, // 4176
    Multiplier { upper: 0x9e4807ec0b3eb600d69bc2611f068532, lower: 0x38c2e990379bfe8eaa692bde1c62cf6a }, // 4177
    Multiplier { upper: 0xfd400cacdecabcce242c6a34fe70d51d, lower: 0x279e428058f9974aaa41dfc9c7047f10 }, // 4178
    Multiplier { upper: 0xca99a3bd7f08970b5023882a652710e4, lower: 0x1fb1cecd13fadf6eee9b196e38d065a6 }, // 4179
    Multiplier { upper: 0xa21482fdff3a126f734fa021ea85a71c, lower: 0xe627d8a40ffbe5f2587c14582d738485 }, // 4180
    Multiplier { upper: 0x81aa0264cc2e7525f5d94ce7eed1527d, lower: 0x84ecad500cc984c1e0634379bdf6039e }, // 4181
    Multiplier { upper: 0xcf766a3ae04a5509895bae3fe4821d95, lower: 0xa17aaee67adc079c9a386bf5fcbcd296 }, // 4182
    Multiplier { upper: 0xa5f854fbe6a1dda13aafbe99839b4ade, lower: 0x1ac88beb957cd2e3ae93899196fd7545 }, // 4183
    Multiplier { upper: 0x84c6aa631ee7e480fbbfcbae02e2a24b, lower: 0x48a06fefaaca424fbedc6e0e12645dd1 }, // 4184
    Multiplier { upper: 0xd471109e97d96d9b2c6612b0049dd078, lower: 0x7433e64c4476d07f97c7167cea3a2fb4 }, // 4185
    Multiplier { upper: 0xa9f40d4bacadf148f051a88cd07e4060, lower: 0x5cf651d69d2bd9ffac9f4530bb61bfc3 }, // 4186
    Multiplier { upper: 0x87f6710956f18dd3f37486d70d31cd19, lower: 0xe3f841787dbcae6623b29dc095e7cc9c }, // 4187
    Multiplier { upper: 0xd98a4e7557e8e2ecb8ba7158151c7b5c, lower: 0x9ff39bf3fc611709d2b762cdbca6142d }, // 4188
    Multiplier { upper: 0xae083ec44653e8bd60952779aa7d2f7d, lower: 0x4cc2e32996b4126e422c4f0afd51a9be }, // 4189
    Multiplier { upper: 0x8b39cbd038432097807752c7bb975931, lower: 0x0a358287abc341f1ce89d8d5977487cb }, // 4190
    Multiplier { upper: 0xdec2dfb38d3834259a588472c5bef51b, lower: 0x4388d0d912d2031c7da95aef58ba72de }, // 4191
    Multiplier { upper: 0xb2357fc2d76029b7aead36c237cbf749, lower: 0x02d3da4742419c16caede25913c85be5 }, // 4192
    Multiplier { upper: 0x8e91330245e687c625575f01c63cc5d4, lower: 0x02431505ce9ae3456f24b5140fd37cb7 }, // 4193
    Multiplier { upper: 0xe41b84d06fd73fa36ef2319c70613c86, lower: 0x6a04ee6fb0f7d208b1d454ece61f2df2 }, // 4194
    Multiplier { upper: 0xb67c6a405978ffb5f25b5ae38d1a96d1, lower: 0xee6a58595a5fdb3a27dd10bd84e5be5b }, // 4195
    Multiplier { upper: 0x91fd21cd1460cc918eaf7be93daedf0e, lower: 0x5855137aaeb315c81fe40d646a516516 }, // 4196
    Multiplier { upper: 0xe99502e1ba347a827de5930ec917cb4a, lower: 0x26ee85911784efa6996ce23a43b56e89 }, // 4197
    Multiplier { upper: 0xbadd9be7c829fb9b97eadc0bd4130908, lower: 0x1f2537a74603f2ebadf0b4fb695df207 }, // 4198
    Multiplier { upper: 0x957e16530687fc7c7988b0097675a0d3, lower: 0x4c1dc61f6b365befbe5a2a62bab18e6c }, // 4199
    Multiplier { upper: 0xef3023b80a732d93f5a7800f23ef67b8, lower: 0x79c93cff11f09319309043d12ab5b0ad }, // 4200
    Multiplier { upper: 0xbf59b62cd528f1432aec66728325ec93, lower: 0x94a0fd98db26dc1426d9cfda88915a24 }, // 4201
    Multiplier { upper: 0x991491bd7753f435bbf051f535b7f076, lower: 0x1080cae0af5249a9b8ae3fe206daae84 }, // 4202
    Multiplier { upper: 0xf4edb5fbf21fed22c64d4feebc5980bc, lower: 0xe73477cde55075dc5ab06636715de405 }, // 4203
    Multiplier { upper: 0xc3f15e6328198a82383dd98bc9e133ca, lower: 0x52905fd7eaa6c4b0488d1e91f44b1cd1 }, // 4204
    Multiplier { upper: 0x9cc1184f5347a201c697e13ca180f63b, lower: 0x75404cacbbb89d59d3a41874c36f4a41 }, // 4205
    Multiplier { upper: 0xface8d4bb8729ccfa426352dcf34bd2b, lower: 0xeecd477ac5f42ef61f6cf3ee057edd35 }, // 4206
    Multiplier { upper: 0xc8a53dd62d287d72e9b82a8b0c2a30ef, lower: 0xf23dd2c89e5cf25e7f8a5cbe6acbe42a }, // 4207
    Multiplier { upper: 0xa08431782420645bee2ceed5a354f3f3, lower: 0x2831756d4b7d8eb1ffa1e3cb88a31cef }, // 4208
    Multiplier { upper: 0x8069c12ce9b3837cbe8a58aae910c328, lower: 0xecf45df109313ef4cc8183093a1c1725 }, // 4209
    Multiplier { upper: 0xcd7601e175ec059464108dde41b46b74, lower: 0xae53c981a84ecb2147359e7529c68b6f }, // 4210
    Multiplier { upper: 0xa45e67e791899e10500d3e4b67c3892a, lower: 0x250fd467b9d8a28105c47ec4216ba2bf }, // 4211
    Multiplier { upper: 0x837eb9860e07b1a6a670fea2b9693a88, lower: 0x1da643862e46e86737d06569b4561bcc }, // 4212
    Multiplier { upper: 0xd2645c09b00c4f710a4e64378f0ec40c, lower: 0xfc3d38d6b07173d8594d6f0f86f02c7a }, // 4213
    Multiplier { upper: 0xa85049a159a372c0d50b835fa5a569a3, lower: 0xfcfdc71226c12979e10abf3f9f2689fb }, // 4214
    Multiplier { upper: 0x86a6a14de14f8f00aa6f9c4c84845483, lower: 0x30cb05a81f00edfb1a6eff6618eba196 }, // 4215
    Multiplier { upper: 0xd7710216354c180110b293ada0d3ba6b, lower: 0x8144d5d9cb34aff82a4b323cf4ac35bc }, // 4216
    Multiplier { upper: 0xac5a6811c43ce000da28762480a961ef, lower: 0x9a9d77e16f5d59935508f4fd9089c496 }, // 4217
    Multiplier { upper: 0x89e1ecdb0363e66714ed2b5066ede7f2, lower: 0xe217931abf7de142aa6d90cada07d078 }, // 4218
    Multiplier { upper: 0xdc9cae2b389fd70b54aeabb3d7e30cb7, lower: 0xd025b82acbfc9b9ddd7c1ade29a61a5a }, // 4219
    Multiplier { upper: 0xb07d582293b3126f76f222f6464f3d5f, lower: 0xd9b7c688a3307c7e4ac9af182151aeaf }, // 4220
    Multiplier { upper: 0x8d31134edc8f41f2c58e825e9ea5cab3, lower: 0x1493053a1c26c9fea23af279b441588c }, // 4221
    Multiplier { upper: 0xe1e81ee4941869846f4a6a30fdd6111e, lower: 0x8751a1f693714331039183f5ed355a79 }, // 4222
    Multiplier { upper: 0xb4b9b2507679ee038c3b882731780db2, lower: 0x05dae7f875f435c0cfa79cc4bdc44861 }, // 4223
    Multiplier { upper: 0x90948ea6c52e5802d6960685c12cd7c1, lower: 0x9e48b99391902b00a61fb09d649d06b4 }, // 4224
    Multiplier { upper: 0xe75417713b7d599e24233da2ceae2602, lower: 0x96dac285b5b3780109cc4dc8a0fb3dec }, // 4225
    Multiplier { upper: 0xb91012c0fc6447b1b68297b57224eb35, lower: 0x457bced15e292ccda1703e3a1a6297f0 }, // 4226
    Multiplier { upper: 0x940cdbcd96b69fc15ecedfc45b50bc2a, lower: 0x9dfca5744b5423d7b459cb61aeb5465a }, // 4227
    Multiplier { upper: 0xece15faf578a9935647e32d3c54df9dd, lower: 0xc9943bed45536c8c53c2df02b1220a29 }, // 4228
    Multiplier { upper: 0xbd81195912d5475de9fe8f0fd10b2e4b, lower: 0x07a9c98a9ddc56d6a968b2688db4d4ee }, // 4229
    Multiplier { upper: 0x979a7aada8aa9f7e54cba5a640d5bea2, lower: 0x6c87d46ee4b045788786f520715d7725 }, // 4230
    Multiplier { upper: 0xf290c4490dddcbfd5479090a0155fdd0, lower: 0xada620b16de6d58da5a4bb671bc8bea1 }, // 4231
    Multiplier { upper: 0xc20d69d40b17d6644394073b3444cb0d, lower: 0x57b81a278b1f113e1e1d62b8e306fee7 }, // 4232
    Multiplier { upper: 0x9b3dee433c1311e9cfa99f62903708d7, lower: 0x796014ec6f4c0dcb4b4ab560b59f3253 }, // 4233
    Multiplier { upper: 0xf86316d1f9b81ca94c42989db38b4158, lower: 0xc23354ad7ee016121211223455cb83b7 }, // 4234
    Multiplier { upper: 0xc6b5abdb2e2ce3baa3687a17c2d5cde0, lower: 0x9b5c43bdff19ab41a80db4f6ab09362c }, // 4235
    Multiplier { upper: 0x9ef7bcaf5823e9621c5394dfcf117180, lower: 0x7c49cfcb327aef67b9a490c555a0f824 }, // 4236
    Multiplier { upper: 0xfe592de559d30f036085baffb1b58267, lower: 0x2d42e611ea5e4bd929074e0889018d06 }, // 4237
    Multiplier { upper: 0xcb7a8b1de175a59c4d37c8cc8e2aceb8, lower: 0xf10251a7eeb1d6475405d806d4013d9e }, // 4238
    Multiplier { upper: 0xa2c86f4b1ac4847d0a93070a0b55722d, lower: 0x8d9b7486588e4505dcd1799f1000fe18 }, // 4239
    Multiplier { upper: 0x8239f2a27bd069fda20f38d4d5ddf4f1, lower: 0x3e15f6d1e071d0d17d74614c0ccd9813 }, // 4240
    Multiplier { upper: 0xd05cb76a5fb3dcc9034b8e21562fee4e, lower: 0xc9bcbe1c9a4fb4826253cee0147c2685 }, // 4241
    Multiplier { upper: 0xa6b092bb7fc3170735d60b4dde8cbea5, lower: 0x6e309816e1d95d351b763f19a9fceb9e }, // 4242
    Multiplier { upper: 0x855a0efc6635ac05c4ab3c3e4ba3cbb7, lower: 0x8b5a1345817ab0f7492b65ae219722e5 }, // 4243
    Multiplier { upper: 0xd55ce4c709ef79a2d4452d30790612bf, lower: 0x455ceba268c44e5875123c49cf5837d4 }, // 4244
    Multiplier { upper: 0xaab0b705a18c614f10375759fa6b4232, lower: 0x9de3efb5209d0b79f741c9d4a5e02caa }, // 4245
    Multiplier { upper: 0x888d5f37b4704dd8d9c5df7b2ebc34f5, lower: 0x4b1cbfc41a173c61929b07dd518023bb }, // 4246
    Multiplier { upper: 0xda7bcb8c53e6e2f48fa2ff2b7df9ee55, lower: 0x44facc6cf68b93cf50f80c954f336c5e }, // 4247
    Multiplier { upper: 0xaec96fa376524f2a0c8265bc64c7f1dd, lower: 0xd0c8a38a5ed60fd90d933d443f5c56b2 }, // 4248
    Multiplier { upper: 0x8bd4594f91db72880a01eafd1d6cc17e, lower: 0x40a082d518ab3fe0d7a8fdd032b0455b }, // 4249
    Multiplier { upper: 0xdfba287f4fc5840cdccfde61c8ae0263, lower: 0x9a9a6aee8ddecc9af2a7fc80511a0892 }, // 4250
    Multiplier { upper: 0xb2fb53990c9e033d7d73184e3a24ceb6, lower: 0x1548558ba4b23d48c21ffd337414d3a8 }, // 4251
    Multiplier { upper: 0x8f2f76140a180297978f46a4fb50a55e, lower: 0x776d113c83c1caa09b4cca8f9010a953 }, // 4252
    Multiplier { upper: 0xe518bcecdcf33758f27ed76e5ee76efd, lower: 0x8be1b52d9f9c77675ee14418e6810eeb }, // 4253
    Multiplier { upper: 0xb746fd8a4a5c2c472865792518b92597, lower: 0xa31af757b2e392b918b4367a5200d8bc }, // 4254
    Multiplier { upper: 0x929f313b6eb0236c20512db746fa8479, lower: 0x4f48c5dfc24fa89413c35ec8419a46fd }, // 4255
    Multiplier { upper: 0xea984ec57de69f1366e849253e5da0c2, lower: 0x18746fcc6a190db9b93897a6cf5d3e62 }, // 4256
    Multiplier { upper: 0xbbad0bd131854c0f8586a0ea984ae701, lower: 0xad29f309ee7a716160fa12ebd917651b }, // 4257
    Multiplier { upper: 0x96240974279dd672d13880bbad08b8ce, lower: 0x24218f3b252ec11ab3fb42564745ea7c }, // 4258
    Multiplier { upper: 0xf039a8b9d8fc8a514ec0cdf914dac149, lower: 0xd368e52b6eb134f7865ed08a0ba310c6 }, // 4259
    Multiplier { upper: 0xc02e2094ad96d50dd89a3e60dd7bcdd4, lower: 0xa920b755f2275d92d1e573a1a2e8da38 }, // 4260
    Multiplier { upper: 0x99be8076f145773e46e1cb80b12fd7dd, lower: 0x541a2c44c1b917a8a7eac2e7b58714fa }, // 4261
    Multiplier { upper: 0xf5fd9a57e86f25307169459ab5195962, lower: 0x2029e06e02c1bf743fde04a5ef3e87f6 }, // 4262
    Multiplier { upper: 0xc4cae1dfed25b759f45437aef7477ab4, lower: 0xe687e6be689aff90331803b7f2986cc5 }, // 4263
    Multiplier { upper: 0x9d6f1b198a8492ae5d102c8bf905fbc3, lower: 0xeb9febcb86e2660cf5accfc65bad23d1 }, // 4264
    Multiplier { upper: 0xfbe4f828dda0eab094e6adacc1a32c6c, lower: 0xac3312df3e3709ae55e14c7092ae9fb4 }, // 4265
    Multiplier { upper: 0xc983f9ba4ae72226dd8557bd67b5bd23, lower: 0xbcf5a8b2982c07beab1aa38d42254c90 }, // 4266
    Multiplier { upper: 0xa1366161d585b4ebe46aac97862afdb6, lower: 0x30c486f546899fcbbc154fa434eaa3a7 }, // 4267
    Multiplier { upper: 0x80f84de7de0490bcb6bbbd4604ef315e, lower: 0x8d6a0591053ae63c967772e9c3eee952 }, // 4268
    Multiplier { upper: 0xce5a163fc9a0e7945792c87007e51bca, lower: 0x7bdcd5b4d52b09fa8a58b7dc6cb17550 }, // 4269
    Multiplier { upper: 0xa514de996e1a52dd12dbd38cd31dafd5, lower: 0x2fe3de2a44226e620846f97d23c12aa7 }, // 4270
    Multiplier { upper: 0x8410b21458150f174249760a427e2644, lower: 0x264fe4ee9ce8584e6d0594641c9a8885 }, // 4271
    Multiplier { upper: 0xd34de9ba2688182536dbf0106a63706d, lower: 0x0a196e4a94a6f3b0ae6f53d360f740d5 }, // 4272
    Multiplier { upper: 0xa90b2161b86ce01dc57cc00d21e926bd, lower: 0xa1adf1d543b8c2f3bebf7642b3f900ab }, // 4273
    Multiplier { upper: 0x873c1ab4938a4ce49dfd6670e7edb897, lower: 0xb48b27ddcfc7025c98992b688ffa66ef }, // 4274
    Multiplier { upper: 0xd8602aba85aa14a0fcc8a3e7d97c5a8c, lower: 0x5411d962e60b36fa8dc1df0db32a3e4b }, // 4275
    Multiplier { upper: 0xad19bbc86aee76e730a0831fe1304870, lower: 0x43417ab584d5c5953e34b2715c21cb6f }, // 4276
    Multiplier { upper: 0x8a7afca0558b92528d4d35b31a8d06c0, lower: 0x35cdfbc46a449e10fe908ec116816f8c }, // 4277
    Multiplier { upper: 0xdd919433bc1283b7487b891e90e1a466, lower: 0xbc7cc607106dc9b4ca80e46824024c13 }, // 4278
    Multiplier { upper: 0xb141435c9675362c39fc6db20d815052, lower: 0x3063d19f4057d490a200b6b9b6683cdc }, // 4279
    Multiplier { upper: 0x8dcdcf7d452a91bcfb3057c1a4677374, lower: 0xf3830e19004643a6e800922e2b869717 }, // 4280
    Multiplier { upper: 0xe2e2e5953b774f94c51a2602a0a58587, lower: 0xec04e35b33a39f7173341d16ac0a8b57 }, // 4281
    Multiplier { upper: 0xb58251442f92a6109dae84cee6ead139, lower: 0x899d82af5c82e5f45c29b0def0086f79 }, // 4282
    Multiplier { upper: 0x91350dd0260eeb407e25370bebef0dc7, lower: 0xa14acef2b068b7f6b0215a4bf339f2c7 }, // 4283
    Multiplier { upper: 0xe854e2e6a34b1200c9d524dfdfe4e2d9, lower: 0x02114b1de70df3244d022a131ec31e0c }, // 4284
    Multiplier { upper: 0xb9dd82521c3c0e6707ddb7197fea4f14, lower: 0x01a76f4b1f3e5c1d0a6821a8e568e4d6 }, // 4285
    Multiplier { upper: 0x94b1350e7cfcd8526cb15f4799883f43, lower: 0x3485f2a27f65167da1ece7ba5120b712 }, // 4286
    Multiplier { upper: 0xede854e3fb2e26ea4782320c28d9fed1, lower: 0xeda31dd0cbd4f0c90314a5f6e834581c }, // 4287
    Multiplier { upper: 0xbe53771cc8f1b8bb6c682809ba47ff0e, lower: 0x57b5b173d643f3d40276eb2becf6ace3 }, // 4288
    Multiplier { upper: 0x9842c5b0a0c16095f053533afb6ccc0b, lower: 0x795e278fde9cc31001f8bc2323f88a50 }, // 4289
    Multiplier { upper: 0xf39e091a9acf00efe6ebb85e5f1479ab, lower: 0xf563727fca946b4ccff46038398daa19 }, // 4290
    Multiplier { upper: 0xc2e4d41548a59a598589604b7f439489, lower: 0x911c5b996edd22a3d9904cf9c7a48814 }, // 4291
    Multiplier { upper: 0x9bea43443a1e15146ad44d09329c76d4, lower: 0x7416afadf24a821cae0d0a616c83a010 }, // 4292
    Multiplier { upper: 0xf976d206c36354ed77ba14db842d8aed, lower: 0x868ab2afea10d02de348109be0d299b3 }, // 4293
    Multiplier { upper: 0xc792419f02b5dd8ac62e77160357a257, lower: 0x9ed55bbfee73d9be4f6cda164d7547c2 }, // 4294
    Multiplier { upper: 0x9fa8347f355e4ad56b585f44cf794eac, lower: 0x7f11163325297afea5f0ae783df76c9c }, // 4295
    Multiplier { upper: 0xff738731eefd4488abc0986e18c2177a, lower: 0x64e8238508425e643cb44a59fcbf142c }, // 4296
    Multiplier { upper: 0xcc5c6c27f26436d3bc9a138b4701ac61, lower: 0xea534f9da035185030903b7b3098dcf0 }, // 4297
    Multiplier { upper: 0xa37d235328502bdc96e1a93c38ce2381, lower: 0x8842a617b35dad0cf3a695fc26e0b0c0 }, // 4298
    Multiplier { upper: 0x82ca82a8ed0cefe3abe7ba9693d81c67, lower: 0xa03551ac8f7e240a5c8544c9b8b3c09a }, // 4299
    Multiplier { upper: 0xd14404417b47e639130c5dbdb959c70c, lower: 0x338882adb2636cdd60d53adc5ab93429 }, // 4300
    Multiplier { upper: 0xa7699d012f6cb82da8d6b1649447d270, lower: 0x293a02248eb5f0b11a442f16aefa9021 }, // 4301
    Multiplier { upper: 0x85ee173425f09357ba455ab6dd0641f3, lower: 0x542e681d3ef7f3c0e1d025abbf2ed9b4 }, // 4302
    Multiplier { upper: 0xd649beb9d64db88c5d3bc457c80a031e, lower: 0xed170cfb97f31f9b02e6a2ac6517c2b9 }, // 4303
    Multiplier { upper: 0xab6e322e450afa09e42fd04639a19c18, lower: 0xbdac0a62dff5b2e268b882238413022e }, // 4304
    Multiplier { upper: 0x8924f4f1d0d594d4b68ca69e948149ad, lower: 0x6489a1e8b32af581ed60681c69a8ce8b }, // 4305
    Multiplier { upper: 0xdb6e54b61aef54878a7aa430ed9ba915, lower: 0x6da9030deb77ef36489a402d75dae412 }, // 4306
    Multiplier { upper: 0xaf8b76f8158c439fa1fbb68d8ae2edaa, lower: 0xbe20cf3e55f98c2b6d483357917be9a8 }, // 4307
    Multiplier { upper: 0x8c6f9260113d02e61b2fc53e08b58aee, lower: 0xfe80a5cb77fad6892439c2ac74632153 }, // 4308
    Multiplier { upper: 0xe0b283cce8619e3cf84c6ec9a788de4b, lower: 0x30cdd61259915741d38f9de0ba383552 }, // 4309
    Multiplier { upper: 0xb3c2030a53814b63f9d6bf07b93a4b6f, lower: 0x5a3e44db7adaac34a93fb18094f9c441 }, // 4310
    Multiplier { upper: 0x8fce68d50f9aa2b6617898d2fa950925, lower: 0xe1cb6a492f1556908766279a10c7d034 }, // 4311
    Multiplier { upper: 0xe6170e21b2910457025a8e1e5dbb41d6, lower: 0x361243a84b55574da5703f5ce7a619ed }, // 4312
    Multiplier { upper: 0xb81271b48eda69df35153e7eb1629b11, lower: 0xc4db69536f77790aeac032b0b951ae57 }, // 4313
    Multiplier { upper: 0x9341f490724854b290ddcb988de87c0e, lower: 0x3715eddc592c60d58899c226faa7beac }, // 4314
    Multiplier { upper: 0xeb9cba80b6da211db496128dafda6016, lower: 0xbe897c93c1e09aef40f60371910c6447 }, // 4315
    Multiplier { upper: 0xbc7d620092481a7e2a11a871597b8012, lower: 0x320796dc9b1a158c33f802c140d6b69f }, // 4316
    Multiplier { upper: 0x96cab4cd41d34864ee7486c11462ccdb, lower: 0x5b39457d48e1aad68ff99bcdcd789219 }, // 4317
    Multiplier { upper: 0xf144547b9c8540a17d873e01ba37ae2b, lower: 0xc5286f2edb02aaf0e65c2c7c7bf41cf5 }, // 4318
    Multiplier { upper: 0xc10376c94a0433b4646c319afb5fbe89, lower: 0x6a86bf58af35558d851689fd2ff67d91 }, // 4319
    Multiplier { upper: 0x9a692bd43b368fc38389c148c919653a, lower: 0xbb9eff7a25c4447137453b30f32b97a7 }, // 4320
    Multiplier { upper: 0xf70eac86c5241938d276020e0e8f085d, lower: 0xf8fe65903c6d3a4ebed52b8185128c3e }, // 4321
    Multiplier { upper: 0xc5a556d23750142d752b34d80ba5a04b, lower: 0x2d985140305761d898aa89346a753cff }, // 4322
    Multiplier { upper: 0x9e1ddf0e92a6768ac42290acd61e19d5, lower: 0xbe13743359df817a13bba0f6bb90fd99 }, // 4323
    Multiplier { upper: 0xfcfc9817510a57446d041aae23635c89, lower: 0x301f205229659bf685f9018ac5b4c8f4 }, // 4324
    Multiplier { upper: 0xca63acdf740845d057367bbe82b5e3a0, lower: 0xf34c19db5451499204c7346f0490a0c3 }, // 4325
    Multiplier { upper: 0xa1e9571929a037d9df5ec965355e4fb3, lower: 0xf5d67b15dd0dd474d09f5d259d40809c }, // 4326
    Multiplier { upper: 0x818778e0ee19c647e5e56dea91183fc3, lower: 0x2b11fc117da4a9f70d4c4a847dcd33b0 }, // 4327
    Multiplier { upper: 0xcf3f27ce49c2d6d96fd57caa81c06605, lower: 0x11b6601bfc3aa98b487a10d3fc7b85e7 }, // 4328
    Multiplier { upper: 0xa5cc1fd83b02457abfddfd553499eb37, lower: 0x415eb3499695546f6d2e73dcc9fc6b1f }, // 4329
    Multiplier { upper: 0x84a34cacfc01d12effe4caaa907b2292, lower: 0x9ab22907abaaa9f2bdbec31707fd227f }, // 4330
    Multiplier { upper: 0xd4387aae6002e84b3307aaaa80c5041d, lower: 0xc45041a5df7776512f979e8b3ffb6a65 }, // 4331
    Multiplier { upper: 0xa9c6c88b8002536f5c062222009d9ce4, lower: 0x9d0d01517f92c50dbfac7ed5ccc921ea }, // 4332
    Multiplier { upper: 0x87d23a0933350f8c499e81b4cd4ae3ea, lower: 0x173d9aa79942373e32f06577d7074e55 }, // 4333
    Multiplier { upper: 0xd9505cdb8521b27a0f6402bae2116ca9, lower: 0xbec8f7728ed0586384b3d58c8b3ee3bb }, // 4334
    Multiplier { upper: 0xadd9e3e2d0e7c1fb3f8335624e7456ee, lower: 0x323a5f8ed8a6ad1c6a2977a3a298b62f }, // 4335
    Multiplier { upper: 0x8b14b64f0d8634c8ff9c2ab50b90458b, lower: 0x5b61e60be0855749ee8792e94ee091c0 }, // 4336
    Multiplier { upper: 0xde878a1815a387a7ff604454df4d3c12, lower: 0x2bcfd679673bbedcb0d8eb0ee49a82cc }, // 4337
    Multiplier { upper: 0xb20608134482d2eccc4d0377190a9674, lower: 0xefd978611f62ff16f3e0bc0bea153570 }, // 4338
    Multiplier { upper: 0x8e6b39a9039bdbf0a370cf927a6edec3, lower: 0xf314604db2b598df2980966fee775df3 }, // 4339
    Multiplier { upper: 0xe3dec2a805c62cb438b47f50c3e4979f, lower: 0xeb53cd491def5afea8cdbd7fe3f22fec }, // 4340
    Multiplier { upper: 0xb64bceecd16b56f693c3990d6983ac7f, lower: 0xef763dd417f2af3220a4979983282656 }, // 4341
    Multiplier { upper: 0x91d63f23dabc45920fcfada4546956cc, lower: 0xbf91cb1013288c281a1d461468eceb78 }, // 4342
    Multiplier { upper: 0xe956cb6c912d3c1ce61915d3ba42247a, lower: 0xcc1c7819b840e04029c87020a7e178c0 }, // 4343
    Multiplier { upper: 0xbaabd5f0742430171e7a77dc9501b6c8, lower: 0xa349f9ae2d00b36687d38ce6ecb4609a }, // 4344
    Multiplier { upper: 0x955644c05ce9c0127ec85fe3aa67c56d, lower: 0x4f6e615824008f8539760a5256f6b3ae }, // 4345
    Multiplier { upper: 0xeef06e0094a93350cada3305dd72d57b, lower: 0xb24a3559d33418d528bcdd508b2452b0 }, // 4346
    Multiplier { upper: 0xbf26be66dd54290d6f14f59e4ac24462, lower: 0xf5082aae429013ddba30b10d3c1d0ef3 }, // 4347
    Multiplier { upper: 0x98ebcb857ddceda458dd914b6f01d04f, lower: 0x2a6ceef1ced9a97e2e8d5a70fce40bf6 }, // 4348
    Multiplier { upper: 0xf4ac78d5962e4906f495b5457e694d4b, lower: 0x7714b182e48f7596b0e22a4e616cdff0 }, // 4349
    Multiplier { upper: 0xc3bd2d77ab583a6bf6de2a9dfebaa43c, lower: 0x5f43c13583a5f7abc0b4eea51abd7ff3 }, // 4350
    Multiplier { upper: 0x9c975792ef79c8565f182217fefbb696, lower: 0xb29c9a91361e5fbc9a2a58841564665c }, // 4351
    Multiplier { upper: 0xfa8bbf517f29408a31c0368ccb2c5757, lower: 0x842dc41b89ca32c75d108da0223a3d60 }, // 4352
    Multiplier { upper: 0xc86fcc41328766d4f499c53d6f56ac46, lower: 0x0357d01607d4f56c4a73a4801b61cab3 }, // 4353
    Multiplier { upper: 0xa0597034286c5243f6e16a978c45569e, lower: 0x69130cde6caa5df03b8fb6cce2b4a229 }, // 4354
    Multiplier { upper: 0x80478cf686bd0e9cc5812212d69ddee5, lower: 0x20dc0a4b8a21e4c02fa62bd71bc3b4ee }, // 4355
    Multiplier { upper: 0xcd3f47f0d794e42e08ce9ceaf0fc97d5, lower: 0x01601078dd030799e5d6ac8b5f9f87e3 }, // 4356
    Multiplier { upper: 0xa4329ff3dfaa5024d3d87d88c0ca1310, lower: 0xcde67393e4026c7b1e4556d5e6193982 }, // 4357
    Multiplier { upper: 0x835bb3297fbb7350a979fe0700a1a8da, lower: 0x3e51f60fe99b89fc183778ab1e7a9468 }, // 4358
    Multiplier { upper: 0xd22c51dbff92521aa8c3300b3435daf6, lower: 0xca1cbce64292766026bf277830c420a6 }, // 4359
    Multiplier { upper: 0xa82374afffa841aeed68f33c29c4af2b, lower: 0xd4e3ca51cedb91e68565b92cf3d01a1f }, // 4360
    Multiplier { upper: 0x8682c3bfffb9ce258aba5c30216a25bc, lower: 0xaa4fd50e3f160e52045160f0c30ce1b2 }, // 4361
    Multiplier { upper: 0xd7379f99992949d5aac3c6b368a9d5fa, lower: 0xaa1954e398234a1cd3b567e79e7b02b7 }, // 4362
    Multiplier { upper: 0xac2c7fae142107de2236388f86ee44c8, lower: 0x881443e94682a1b0a95decb94b959bc5 }, // 4363
    Multiplier { upper: 0x89bd32f1a9b4064b4e91c6d938be9d6d, lower: 0x39a9cfedd2021af3bab18a2dd611496b }, // 4364
    Multiplier { upper: 0xdc61eb1c42b9a3abb0e93e285aca957b, lower: 0x8f76197c83369185f78276afbce87578 }, // 4365
    Multiplier { upper: 0xb04e55b035614fbc8d8764ed156eddfc, lower: 0x72c4e13068f8746b2c685ef2fd86c460 }, // 4366
    Multiplier { upper: 0x8d0b77c02ab43fca0ad2b72411257e63, lower: 0x8f03e759ed939055bd204bf5979f0380 }, // 4367
    Multiplier { upper: 0xe1abf2cd112066101151250681d59705, lower: 0xb19fd88fe285b3bc61cd4655bf64d266 }, // 4368
    Multiplier { upper: 0xb4898f0a7419eb400dda840534aadf37, lower: 0xc14cad3fe86af6304e3dd1de32b70eb8 }, // 4369
    Multiplier { upper: 0x906e0c085ce189000b15366a9088b293, lower: 0x010a2433205591c03e97db182892722d }, // 4370
    Multiplier { upper: 0xe71679a6fb0274ccde885710e7411db8, lower: 0x01a9d3850088e93397595e8d0db71d14 }, // 4371
    Multiplier { upper: 0xb8dec7b8c8cec3d7186d1273ec3417c6, lower: 0x67bb0f9d9a0720f612ade53da4927daa }, // 4372
    Multiplier { upper: 0x93e56c93d3d89cac138a752989c34638, lower: 0x52fc0c7e14d280c4dbbe50fe1d41fe22 }, // 4373
    Multiplier { upper: 0xeca24752ec8dc779b8dd884276053d26, lower: 0xeb2ce0c9baea67a15f96e7fcfb9cc9cf }, // 4374
    Multiplier { upper: 0xbd4e9f758a0b05fafa4ad3685e6a9752, lower: 0x55bd80a162551fb44c78b9972fb0a173 }, // 4375
    Multiplier { upper: 0x9772192ad4d59e6261d575ed185545db, lower: 0x77cacd4de844195d09fa2e128c8d4df5 }, // 4376
    Multiplier { upper: 0xf250284487bc309d6955897b5a22095f, lower: 0x2611487ca6d35bc80ff6b01dadaee322 }, // 4377
    Multiplier { upper: 0xc1d9b9d06c968d4abaaad462ae81a118, lower: 0xeb4106ca1f0f7ca00cc559b157bf1c1b }, // 4378
    Multiplier { upper: 0x9b1494a6bd453dd562224382253480e0, lower: 0xbc34056e7f3f96e6709de15aac98e349 }, // 4379
    Multiplier { upper: 0xf820edd7953b9622369d38d03b87349a, lower: 0xc6b9a24a65328b0a4dc968911427d20e }, // 4380
    Multiplier { upper: 0xc680be4610fc781b5ee42d7362d2907b, lower: 0xd22e1b6eb75ba26ea4a12074101fdb3f }, // 4381
    Multiplier { upper: 0x9ecd6504da63934918b68ac2b5754063, lower: 0x0e8b49255f7c81f21d4db3900ce648ff }, // 4382
    Multiplier { upper: 0xfe156e6e2a38eba8278a779def22009e, lower: 0x7daba83bcbfa69836215ec19ae3d4198 }, // 4383
    Multiplier { upper: 0xcb44585821c722ecec6ec617f2819a18, lower: 0x6489536309952135e81189ae24fdce13 }, // 4384
    Multiplier { upper: 0xa29d1379b49f4f23f0589e798ece14e0, lower: 0x506ddc4f3addb42b200e07be83fe3e76 }, // 4385
    Multiplier { upper: 0x821742c7c3b2a5b659e07ec7a571aa4d, lower: 0x0d24b03f624af688e6719fcb9ccb652b }, // 4386
    Multiplier { upper: 0xd02537a605eaa2bd5c9a6472a24f76e1, lower: 0xaea119ff03ab240e3d829945c7abd512 }, // 4387
    Multiplier { upper: 0xa6842c84d188823116e1e9f54ea5f8b4, lower: 0x8bb414cc02ef500b64687a9e3956440e }, // 4388
    Multiplier { upper: 0x85368a03dad39b5a78b4bb2aa55193c3, lower: 0xa2f677099bf2a66f8386c87e9445033f }, // 4389
    Multiplier { upper: 0xd52410062aec2bc3f4545eaaa21c1f9f, lower: 0x6b23f1a8f9843d7f38d7a730ed3b3864 }, // 4390
    Multiplier { upper: 0xaa834004ef2356365d104bbbb4e34c7f, lower: 0x88e98e20c79cfdff60ac85c0bdc8f9ea }, // 4391
    Multiplier { upper: 0x88690003f282ab5eb0d9d62fc3e909ff, lower: 0xa0bad81a394a64cc4d56d166fe3a6188 }, // 4392
    Multiplier { upper: 0xda41999fea6aabcab48fbd193974dccc, lower: 0x345e26905baa3ae07bbe1bd7fd2a35a6 }, // 4393
    Multiplier { upper: 0xae9ae14cbb88896ef6d964142df71709, lower: 0xc37e85404954fbe6c964e31330ee9152 }, // 4394
    Multiplier { upper: 0x8baf1aa3c93a078bf8ade9a9be5f45a1, lower: 0x693204336ddd96523ab71c0f5a587441 }, // 4395
    Multiplier { upper: 0xdf7e91060ec33f465aafdc42ca320902, lower: 0x41e9a05249628a1d2abe934bc3c0ba02 }, // 4396
    Multiplier { upper: 0xb2cba7380bcf65d1e22649cf08280735, lower: 0x0187b37507820817556542a3030094ce }, // 4397
    Multiplier { upper: 0x8f0952933ca5eb0e4e8507d8d35338f7, lower: 0x346c8f90d2ce6cdf7784354f359a10a5 }, // 4398
    Multiplier { upper: 0xe4dbb751faa311b07da1a627b88527f1, lower: 0xed7a7f4e1e171498bf39eee522901aa2 }, // 4399
    Multiplier { upper: 0xb7162c41954f4159fe1aeb52fa041ff4, lower: 0xbdfb990b4b45aa13cc2e58b74ed9aee8 }, // 4400
    Multiplier { upper: 0x92782367aaa5cde19815890f2e69b32a, lower: 0x319614090904880fd68b7a2c3f148bed }, // 4401
    Multiplier { upper: 0xea59d23f776fafcf59bc0e7eb0a91ea9, lower: 0xe8f0200e74d40ce624125d139820dfe1 }, // 4402
    Multiplier { upper: 0xbb7b0e992c595972ae300b988d541887, lower: 0xed8ce671f7100a51b6751742e01a4cb4 }, // 4403
    Multiplier { upper: 0x95fc0badbd14478ef1c00946d7767a06, lower: 0x57a3eb8e5f4008415ec4129be67b7090 }, // 4404
    Multiplier { upper: 0xeff9ac492e86d8e4b6000ed7bf23f670, lower: 0x8c3978e3cb99a6cefe06842ca3f8b419 }, // 4405
    Multiplier { upper: 0xbffaf03a8b9f13ea2b333f12ff4ff85a, lower: 0x09c793e96fae1f0bfe6b9cf0832d5ce1 }, // 4406
    Multiplier { upper: 0x99958cfba2e5a988228f65a8cc3ff9e1, lower: 0xa16c7654595818d66522e3f39c244a4e }, // 4407
    Multiplier { upper: 0xf5bc14c5d16f75a69db23c4146ccc302, lower: 0x9be0bd53c2268e23d5049fec2d06dd49 }, // 4408
    Multiplier { upper: 0xc4967704a78c5e1ee48e969a9f0a359b, lower: 0xafe6fddc9b520b4fdd9d4cbcf0d24aa1 }, // 4409
    Multiplier { upper: 0x9d452c03b93d1818b6d8787bb26e9149, lower: 0x598597e3af74d5d97e177097270ea21b }, // 4410
    Multiplier { upper: 0xfba1e005f52e8cf457c0c0c5ea4a820e, lower: 0xf5a28c9f7f215628c9bf1a8b71b1035d }, // 4411
    Multiplier { upper: 0xc94e4cd190f20a5d13009a37eea201a5, lower: 0x914ed6e5ff4dde8707cc153c5af402b1 }, // 4412
    Multiplier { upper: 0xa10b70a7a728084a759a14f98bb4ce1e, lower: 0x0dd8abeb32a4b2059fd677637bf6688e }, // 4413
    Multiplier { upper: 0x80d5f3b952866d085e14dd946fc3d818, lower: 0x0b13bcbc2883c19e19785f82c991ed3e }, // 4414
    Multiplier { upper: 0xce231f8eea70ae73c9bafc20b2d2f359, lower: 0xab52c793740602968f26ff37a8e97b97 }, // 4415
    Multiplier { upper: 0xa4e8e60beec08b8fd49596808f0f2914, lower: 0x890f060f9004ceded8ebff5fba5462df }, // 4416
    Multiplier { upper: 0x83ed84d6589a093fdd447866d8d8edaa, lower: 0x073f380c73370be57a5665e62ea9e8b3 }, // 4417
    Multiplier { upper: 0xd315a156f429a8662ed3f3d7c15b15dc, lower: 0xd865267a51f1aca25d5709704aa97451 }, // 4418
    Multiplier { upper: 0xa8de1aabf687b9eb58a98fdfcde277e3, lower: 0xe050eb950e5af081e445a126a22129da }, // 4419
    Multiplier { upper: 0x871815565ed2fb22ad5473197181f983, lower: 0x19da5610d848c067e9d14db881b4217b }, // 4420
    Multiplier { upper: 0xd826888a315191d11553eb5be8cff59e, lower: 0x8fc3bce7c074670ca94ee2c0cf869bf8 }, // 4421
    Multiplier { upper: 0xaceba06e8ddadb0daaa9891653d9914b, lower: 0xa63630b966c385a3baa58233d9387cc7 }, // 4422
    Multiplier { upper: 0x8a5619f20b157c0aeeee07450fe14109, lower: 0x51c4f3c7856937b62eeace8fe0f9fd6c }, // 4423
    Multiplier { upper: 0xdd568fe9ab559344b17cd86e7fcece75, lower: 0x4fa1860c08a859237e447db3018ffbe0 }, // 4424
    Multiplier { upper: 0xb1120cbaef77a903c130ad25330bd85d, lower: 0xd94e04d66d537a82cb69fe28ce0cc980 }, // 4425
    Multiplier { upper: 0x8da80a2f25f9540300f3bdb75c0979e4, lower: 0xadd803debddc62023c54cb53d80a3acd }, // 4426
    Multiplier { upper: 0xe2a676b1d65bb99e67ec62bef9a8c307, lower: 0x7c8cd2fdfc93d00393badeec8cdd2ae1 }, // 4427
    Multiplier { upper: 0xb551f88e45162e18532382326153cf39, lower: 0x3070a8cb30764002dc957f23a3e4224e }, // 4428
    Multiplier { upper: 0x910e6071d0de8b46a8e934f51aa97294, lower: 0x26c08708f391cccf16ddff4fb6501b71 }, // 4429
    Multiplier { upper: 0xe81700b61afdaba4417521882aa8b753, lower: 0x71340b4185b6147e8afccbb2bd4cf8b5 }, // 4430
    Multiplier { upper: 0xb9ac0091af31561d012a8139bbba2c42, lower: 0xc0f66f679e2b43986f30a2f5643d93c4 }, // 4431
    Multiplier { upper: 0x94899a0e25c111b0cdbb9a94962e89cf, lower: 0x00c525ec7e8902e058f3b5911cfe0fd0 }, // 4432
    Multiplier { upper: 0xeda8f67d0934e91ae2c5c420f04a7618, lower: 0x013b6fe0ca74d166f4b92281c7fce61a }, // 4433
    Multiplier { upper: 0xbe20c530d42a54158237d01a59d52b46, lower: 0x6762bfe7085d74525d60e867d330b815 }, // 4434
    Multiplier { upper: 0x981a375a4355101134f9734847ddbc38, lower: 0x52b566526d179041e44d86b975c09344 }, // 4435
    Multiplier { upper: 0xf35d255d388819b5218f1eda0c95f9f3, lower: 0xb788a3b714f280696d48d78f22cdb86c }, // 4436
    Multiplier { upper: 0xc2b0eab0fa067af74e0c18ae7077fb29, lower: 0x5fa082f8dd8ecd21243a460c1bd7c6bd }, // 4437
    Multiplier { upper: 0x9bc0bbc0c8052f2c3e7013bec05ffc21, lower: 0x194d3593e4723db41cfb6b3ce3130564 }, // 4438
    Multiplier { upper: 0xf9345f9ad9a1e5139719b93133ccc69b, lower: 0x5baebc1fd3e9fc536192452e381e6f06 }, // 4439
    Multiplier { upper: 0xc75d1948ae1b1da945ae2dc0f63d6baf, lower: 0x7c8bc9b30fee6375e7a837582ce5259f }, // 4440
    Multiplier { upper: 0x9f7dadd3be7c17ba9e24f1672b645625, lower: 0xfd3ca15c0cbeb5f7ec8692acf0b7514c }, // 4441
    Multiplier { upper: 0xff2f7c85fd93592a96a1823eabd3bd09, lower: 0x952dcef9adfdeff3140a8447e78bb546 }, // 4442
    Multiplier { upper: 0xcc25fd37fe0f7a88788134feefdc973a, lower: 0xddbe3f2e24cb265c100869d31fa2f76b }, // 4443
    Multiplier { upper: 0xa351975ffe72c86d2d342a658cb078fb, lower: 0xe498328b50a285167339ee427fb592bc }, // 4444
    Multiplier { upper: 0x82a7ac4ccb8f06bdbdc3551e0a26c72f, lower: 0xea135ba2a6e86a785c2e583532f7a897 }, // 4445
    Multiplier { upper: 0xd10c46e145b1a462c9388830103e0b7f, lower: 0xdcebc5d10b0d7726f9e3c0551e590dbe }, // 4446
    Multiplier { upper: 0xa73d0581048e1d1bd42d39c00cfe6f99, lower: 0x7d896b0da2712c1f2e4fcd10e5140afe }, // 4447
    Multiplier { upper: 0x85ca6acd9d3e7dafdcf0fb000a652614, lower: 0x646def3e1b8dbce5bea63da71da9a265 }, // 4448
    Multiplier { upper: 0xd610aae29530c91961819199aa3b7020, lower: 0xa0afe5302c15fb093109fc3e95dc3708 }, // 4449
    Multiplier { upper: 0xab4088b5442707478134747aee95f34d, lower: 0x4d59842689ab2f3a8da1969877e35f3a }, // 4450
    Multiplier { upper: 0x89006d5dd01f390600f6c3958bab290a, lower: 0xa4479ceba155bf620ae7abad2cb5e5c8 }, // 4451
    Multiplier { upper: 0xdb33e22fb36528099b246c227911db44, lower: 0x3a0c2e45ceef989cde3f791514563c73 }, // 4452
    Multiplier { upper: 0xaf5cb4f2f5ea866e15b6bce860db15d0, lower: 0x2e702504a58c7a171832c7441044fd29 }, // 4453
    Multiplier { upper: 0x8c4a2a5bf7eed1f1aaf897204d7c1173, lower: 0x5859b736ead6c81279c23903403730ed }, // 4454
    Multiplier { upper: 0xe076aa2cbfe4831c44c0f1cd48c68252, lower: 0x26f5f1f177be0cea5c69f4d200584e48 }, // 4455
    Multiplier { upper: 0xb39221bd665068e36a33f4a43a386841, lower: 0xb8c4c18df964d721e387f70e66ad0b6d }, // 4456
    Multiplier { upper: 0x8fa81afdeb73871c54f65d502e93869a, lower: 0xfa37013e611d78e7e9399271ebbda2be }, // 4457
    Multiplier { upper: 0xe5d9c4c978b8d82d54bd6219e41f3dc4, lower: 0xc38b35309b625b0ca85c1d8312c90463 }, // 4458
    Multiplier { upper: 0xb7e16a3ac6fa468aaa311b47e9b297d0, lower: 0x9c6f5dc07c4eaf3d537ce468dbd40382 }, // 4459
    Multiplier { upper: 0x931abb6238c8386eee8daf6cbaf54640, lower: 0x7d25e499fd0bbf6442ca5053e31002cf }, // 4460
    Multiplier { upper: 0xeb5df89d27a6c0b17daf7f145e553d33, lower: 0xfb6fd42994df98a06add4d5304e66ae4 }, // 4461
    Multiplier { upper: 0xbc4b2d4a861f008dfe25ff437eaa975c, lower: 0xc9264354771946e6bbe43ddc03eb88b6 }, // 4462
    Multiplier { upper: 0x96a28aa204e59a0b31b7ff69322212b0, lower: 0xa0eb69105f476bebc98364b00322d3c5 }, // 4463
    Multiplier { upper: 0xf10411033b08f6784f8ccbdb8369b781, lower: 0x0178a81a320bdfdfa8d23ab33837b93b }, // 4464
    Multiplier { upper: 0xc0d00d9c2f3a5ec6a60a3caf9c5492cd, lower: 0x9ac6ece1c1a3197fba41c88f602c942f }, // 4465
    Multiplier { upper: 0x9a400ae358fb7f0551a1ca2616aa0f0a, lower: 0xe238bd8167b5adffc834a072b356dcf3 }, // 4466
    Multiplier { upper: 0xf6ccde388e5f31a21c36103cf1101811, lower: 0x69f46268a5ef7ccc7387671debbe2e51 }, // 4467
    Multiplier { upper: 0xc570b1c6d84c27b4e35e7363f40ce00d, lower: 0xee5d1b86eb25fd705c6c527e5631bea7 }, // 4468
    Multiplier { upper: 0x9df3c16be03cec90b5e5291cc33d800b, lower: 0x25174938bc1e6459e389db9844f49886 }, // 4469
    Multiplier { upper: 0xfcb9357966c7e0e7896ea82e052f3345, lower: 0x082541f46030a08fd2762c26d4ba8da3 }, // 4470
    Multiplier { upper: 0xca2dc4611f064d86078bb9be6a8c2904, lower: 0x068434c38026e6d9752b568576fba482 }, // 4471
    Multiplier { upper: 0xa1be36b418d1d79e6c6fc7cb887020d0, lower: 0x0536909c6685857ac422ab9df8c95068 }, // 4472
    Multiplier { upper: 0x8164f89013db12e5238c9fd606c01a40, lower: 0x042ba6e385379dfbd01bbc7e60a10d20 }, // 4473
    Multiplier { upper: 0xcf07f419b95e84a1d27a995671335d33, lower: 0x39df716c0858fcc619c5fa63cdce7b67 }, // 4474
    Multiplier { upper: 0xa59ff67afab203b4a8621445275c4a8f, lower: 0x617f8df006ad9704e16b2eb63e3ec91f }, // 4475
    Multiplier { upper: 0x847ff862622802f6ed1b436a85e36ed9, lower: 0x1acc718cd22478d0b455bef831cbd419 }, // 4476
    Multiplier { upper: 0xd3fff3d09d0cd18b14f86bdda3057e28, lower: 0x2ae0b5ae1d0727b453bc64c04fac868e }, // 4477
    Multiplier { upper: 0xa9998fda173d746f43f9efe4826acb53, lower: 0x558091581738ec9042fd1d66a6239ed8 }, // 4478
    Multiplier { upper: 0x87ae0cae78fdf6bf6994bfea01ef090f, lower: 0x779a0de01293f07368ca7debb81c7f13 }, // 4479
    Multiplier { upper: 0xd9167ab0c1965798a8edffdccfe4db4b, lower: 0xf290163350ecb3ebdadd9645f360cb52 }, // 4480
    Multiplier { upper: 0xadab955a34784613ba57ffe3d983e2a3, lower: 0x287344f5da56f65648b14504c2b3d5db }, // 4481
    Multiplier { upper: 0x8aefaaae9060380fc846664fe1364ee8, lower: 0xed2903f7e1df2b783a276a6a355cab16 }, // 4482
    Multiplier { upper: 0xde4c444a8099f34c73a3d6e63523b174, lower: 0xaea8065969651259f6a57710556111bc }, // 4483
    Multiplier { upper: 0xb1d69d0866e18f705c831251c41c8df6, lower: 0xf22005145450db7b2bb792737780dafd }, // 4484
    Multiplier { upper: 0x8e454a6d1f1ad926b068db749ce3a4c5, lower: 0x8e8004104373e2c8efc60ec2c600af31 }, // 4485
    Multiplier { upper: 0xe3a210ae982af50ab3daf8ba949f6e08, lower: 0xe40006806bec9e0e4c70179e099ab1e8 }, // 4486
    Multiplier { upper: 0xb61b408bacef2a6ef648c6fbaa1924d3, lower: 0xe9999ecd2323b1a509f3461807aef4ba }, // 4487
    Multiplier { upper: 0x91af66d623f28858c507059621adb70f, lower: 0xee147f0a8282f48407f5d1acd2f25d61 }, // 4488
    Multiplier { upper: 0xe918a489d31da6f46e71a289cf7c5819, lower: 0x7ced9810d0d18739a6561c47b7ea2f02 }, // 4489
    Multiplier { upper: 0xba7a1d3b0f4aebf6bec14ed4a5fd1347, lower: 0x972479a70d746c2e1eab49d2f988259b }, // 4490
    Multiplier { upper: 0x952e7dc8d908bcc565677243b7fda906, lower: 0x12839485a45d2358188907dbfad35149 }, // 4491
    Multiplier { upper: 0xeeb0c9415b412e08a23f1d392662a809, lower: 0xb738eda2a0950559c0db3fc65e1ee875 }, // 4492
    Multiplier { upper: 0xbef3d4344900f1a081cc1760eb822007, lower: 0xc5c724821a10d1149a48ffd1e4e586c4 }, // 4493
    Multiplier { upper: 0x98c31029d400c14d34a345e722ce8006, lower: 0x37d2839b480d74107b6d9974b71e056a }, // 4494
    Multiplier { upper: 0xf46b4d0fb99acee1edd20971d14a6670, lower: 0x5950d2920ce2534d9248f5878b633bdc }, // 4495
    Multiplier { upper: 0xc3890a72fae23f1b24a8078e410851f3, lower: 0x7aa70edb3d81dc3e0ea0c46c6f82964a }, // 4496
    Multiplier { upper: 0x9c6da1f59581cc15b6ecd2d83406a7f5, lower: 0xfbb8d8af6467e364d8809d238c68783b }, // 4497
    Multiplier { upper: 0xfa49032288cfacef8b14848d200aa656, lower: 0x5f8e277f070c9f07c0cdc838e0a726c4 }, // 4498
    Multiplier { upper: 0xc83a68e86d72f0bfa276d070e66eeb78, lower: 0x4c71b9326c0a18d300a4a02d8085b89d }, // 4499
    Multiplier { upper: 0xa02eba538ac25a32e85f0d271ebf22c6, lower: 0xa38e2dc1f00813dc0083b3579a0493b1 }, // 4500
    Multiplier { upper: 0x802561dc6f01e1c2537f3db8e565b56b, lower: 0xb60b57ce59a00fe3339c8f794803a95b }, // 4501
    Multiplier { upper: 0xcd089c93e4cfcf9d52652f8e3bd5ef12, lower: 0xbcdef2e3c299b3051f60e58ed99f755d }, // 4502
    Multiplier { upper: 0xa406e3a983d972e441ea8c71c977f275, lower: 0x63e58f1c9bae28d0e5e71e0be14c5de4 }, // 4503
    Multiplier { upper: 0x8338b62136478f1d0188705b0793285d, lower: 0xe984727d495820a71e527e6fe7704b1d }, // 4504
    Multiplier { upper: 0xd1f4569b8a0c182e68da4d5e72850d63, lower: 0x0f3a50c87559cdd83083fd7fd8b3ab62 }, // 4505
    Multiplier { upper: 0xa7f6abafa1a3468b87150ab1f5373de8, lower: 0xd8fb73d39114a4acf39ccaccad5c891b }, // 4506
    Multiplier { upper: 0x865eefbfb4829ed605aa6ef4c42c3187, lower: 0x13fc5ca940dd508a5c7d6f0a244a0749 }, // 4507
    Multiplier { upper: 0xd6fe4c65ed9dcaf00910b187a046b5a4, lower: 0xecc6faa867c880dd60c8b1a9d3a9a541 }, // 4508
    Multiplier { upper: 0xabfea384be17d58cd40d5ad2e69ef7b7, lower: 0x23d262205306cd7de706f487dc87b767 }, // 4509
    Multiplier { upper: 0x899882d09813113d76711575854bf95f, lower: 0x4fdb81b3759f0acb1f38c39fe39fc5ec }, // 4510
    Multiplier { upper: 0xdc2737b42684e862571b5588d5465bcb, lower: 0xb2f8cf8588fe77ab65279f6638ffa314 }, // 4511
    Multiplier { upper: 0xb01f5fc35203ed1b78e2aad3ddd1e309, lower: 0x5bfa3f9e0731f955ea86191e93ffb5a9 }, // 4512
    Multiplier { upper: 0x8ce5e635db3657492d82224317db1c07, lower: 0x7cc832e4d28e6111886b474ba9995e21 }, // 4513
    Multiplier { upper: 0xe16fd6bc91f08ba848d036d1bfc4f9a5, lower: 0x947384a150e3ce8273ded8790f5bc9ce }, // 4514
    Multiplier { upper: 0xb4597896db26d6203a402bdaffd0c7b7, lower: 0xa9f603b440b63ecec318ad2da5e307d8 }, // 4515
    Multiplier { upper: 0x904793abe2857819c8335648cca7062c, lower: 0x87f802f69a2b657235ad5757b7e8d314 }, // 4516
    Multiplier { upper: 0xe6d8ec46373bf35c738556dae10b3d14, lower: 0x0cc004bdc378a25055e22559264151b9 }, // 4517
    Multiplier { upper: 0xb8ad89d1c5c98f7d293778af1a6f6410, lower: 0x0a3336fe35fa1b7377e81de0eb677494 }, // 4518
    Multiplier { upper: 0x93be07db04a13f97542c608c1525e9a6, lower: 0x6e8f5f31c4c815f5f9867e4d891f9076 }, // 4519
    Multiplier { upper: 0xec633fc4d435328bb9e09a79bb6fdc3d, lower: 0x7db231e93ad9bcbcc270ca15a83280bd }, // 4520
    Multiplier { upper: 0xbd1c3303dcf75ba2fb1a152e2f8cb031, lower: 0x315b5b20fbe163ca35270811535b9a31 }, // 4521
    Multiplier { upper: 0x9749c2697d92afb595ae7758260a268d, lower: 0xc115e280c9811ca1c41f39a775e2e1c1 }, // 4522
    Multiplier { upper: 0xf20f9d7595b77f88ef7d8bc03cdd0a7c, lower: 0x6823040142682dcfa031f5d8bc9e3601 }, // 4523
    Multiplier { upper: 0xc1a617914492cc6d8c646fccfd7da1fd, lower: 0x201c0334352024a619c1917a307e919b }, // 4524
    Multiplier { upper: 0x9aeb460dd0757057a3838ca3fdfe1b30, lower: 0xe67ccf5cf74cea1e7b01412e8d320e15 }, // 4525
    Multiplier { upper: 0xf7ded67c80bbe6f29f38e10663302b81, lower: 0x70c7b22e587b1030c4ceceb0e1e9b022 }, // 4526
    Multiplier { upper: 0xc64bdeca0096525bb293e7384f59bc67, lower: 0x8d6c8e8b79fc0cf3d0a572271b2159b5 }, // 4527
    Multiplier { upper: 0x9ea318a19a11db7c8edcb8f9d91496b9, lower: 0x3df072092e633d8fda1df4ec15b447c4 }, // 4528
    Multiplier { upper: 0xfdd1c102901c9260e4945b295b54245b, lower: 0x964d8341e3d1fc195cfcbb1355ed3fa0 }, // 4529
    Multiplier { upper: 0xcb0e34020ce3a84d83a9e2877c435049, lower: 0x450acf67e974c9ade3fd6275de576619 }, // 4530
    Multiplier { upper: 0xa271c334d71c86a46954b5393035d9d4, lower: 0x373bd91fedf707be4ffde85e4b791e7b }, // 4531
    Multiplier { upper: 0x81f49c2a45b06bb6baaa2a9426917b10, lower: 0x2c2fe0e657f8d2fea664b9e5092db1fc }, // 4532
    Multiplier { upper: 0xcfedc6aa091a45f12aa9ddb9d74f2b4d, lower: 0x137fce3d598e1e643d6df63b41e2b660 }, // 4533
    Multiplier { upper: 0xa657d221a0e1d18dbbbb17c7df72890a, lower: 0x75ffd8311471b1e9cabe5e95ce4ef84d }, // 4534
    Multiplier { upper: 0x85130e814d81747162fc13064c5ba0d5, lower: 0x2b33135a76c15b216efeb21171d8c6a4 }, // 4535
    Multiplier { upper: 0xd4eb4a687c0253e89e601e707a2c3488, lower: 0x451e855d8acef8357e64501be95ad76c }, // 4536
    Multiplier { upper: 0xaa55d52063350fed4b801859fb56906d, lower: 0x04186ab13bd8c69131e9d9afede245f0 }, // 4537
    Multiplier { upper: 0x8844aa804f5da6576f99ad14c9120d24, lower: 0x0346bbc0fcad6ba75b217af324b504c0 }, // 4538
    Multiplier { upper: 0xda077733b22f708be5c2ae87a81ce1d3, lower: 0x38712c67faaf12a55e9bf7eb6dee6e00 }, // 4539
    Multiplier { upper: 0xae6c5f5c8e8c5a09849bbed2ece3e7dc, lower: 0x2d2756b99558dbb77ee32cbc57f1f19a }, // 4540
    Multiplier { upper: 0x8b89e5e3a53d14d46a163242571cb97c, lower: 0xf0ec45614447162c65828a30465b27ae }, // 4541
    Multiplier { upper: 0xdf43096c3b94ee20a9bd1d36f1c78f2e, lower: 0x4e46d5686d3e89e0a26a76b3a3c50c4a }, // 4542
    Multiplier { upper: 0xb29c0789c943f1b3bafdb0f8c16c728b, lower: 0x71d244538a986e4d4ebb92294fd0d6a2 }, // 4543
    Multiplier { upper: 0x8ee3393b07698e2962648d93cdf05ba2, lower: 0xc17503760879f1d7722fa8210ca7121b }, // 4544
    Multiplier { upper: 0xe49ec1f80bdc16a89d6daf52e31a2c37, lower: 0x9bee6bf00d8fe958b6b2a69b4771b691 }, // 4545
    Multiplier { upper: 0xb6e567f9a3167886e457bf75827b5692, lower: 0xe3252326713fede09228854905f4920e }, // 4546
    Multiplier { upper: 0x92511ffae8dec6d2504632c46862aba8, lower: 0xb5b74f51f43324b3a8206aa0d19074d8 }, // 4547
    Multiplier { upper: 0xea1b665e416471508070513a409ddf74, lower: 0x55f218832051d452a69a44348280baf3 }, // 4548
    Multiplier { upper: 0xbb491eb1cde9f44066c040fb66e4b2c3, lower: 0x77f4e068e6a7dd0eebae9cf6cecd625c }, // 4549
    Multiplier { upper: 0x95d4188e3e54c366b899cd95ebea289c, lower: 0x5ff719ed8553173f22f2172bd8a44eb0 }, // 4550
    Multiplier { upper: 0xefb9c0e396ee0571275c7c23131040fa, lower: 0x3324f648d551becb6b1cf1dfc106e44d }, // 4551
    Multiplier { upper: 0xbfc7cd82df24d12752b0634f4273672e, lower: 0x8f50c507110e323c55b0c17fcd9f1d0a }, // 4552
    Multiplier { upper: 0x996ca468b283da85dbc04f729b8f85be, lower: 0xd90d6a6c0da4f4fd115a34663e18e408 }, // 4553
    Multiplier { upper: 0xf57aa0a784062a6fc6007f1dc5b26f97, lower: 0xc1af10ace2a187fb4ef6ba3d3027d340 }, // 4554
    Multiplier { upper: 0xc4621a1f9cd1bb8c9e66cc17d15b8c79, lower: 0x67bf408a4ee79ffc3f2bc830f3530f67 }, // 4555
    Multiplier { upper: 0x9d1b48194a4162d6e51f09aca77c7061, lower: 0x1fcc33a1d8b94cc9cc23068d8f75a5ec }, // 4556
    Multiplier { upper: 0xfb5ed9c210689e24a1cb42add8c71a34, lower: 0xffad1f695ac21476136b3daf4bef6fe0 }, // 4557
    Multiplier { upper: 0xc918ae34d9ed4b50816f688b13d27b5d, lower: 0x99574c54489b4391a92297bf6ff2bfe6 }, // 4558
    Multiplier { upper: 0xa0e08b5d7b243c40678c53a27641fc4a, lower: 0xe112a376a07c360e20e87965f3289985 }, // 4559
    Multiplier { upper: 0x80b3a2b12f5030338609dc81f834c9d5, lower: 0x80dbb5f880635e71b3ed2deb28ed479e }, // 4560
    Multiplier { upper: 0xcdec3781e54d19ec09a960cff387a955, lower: 0x9af9232733d230b5ecaeafdea7e20c2f }, // 4561
    Multiplier { upper: 0xa4bcf934b770e189a1544d7329395444, lower: 0x7bfa8285c30e8d5e56f2264bb981a359 }, // 4562
    Multiplier { upper: 0x83ca60f6f9271ad481103df5ba944369, lower: 0xfcc8686b02720ab1df281ea2face1c47 }, // 4563
    Multiplier { upper: 0xd2dd67f18ea4f7ba6819fcbc5dba0576, lower: 0x6140a7119d83444fcb736437f7b02d3f }, // 4564
    Multiplier { upper: 0xa8b11ff4721d92fb867b3096b1619df8, lower: 0x4dcd52747e029d0ca2c2b6932c8cf0ff }, // 4565
    Multiplier { upper: 0x86f419905b4adbfc6b95c0788de7b193, lower: 0x71710ec39802173d4f022ba8f070c0cc }, // 4566
    Multiplier { upper: 0xd7ecf5b3c544932d78ef9a5a7ca5e8eb, lower: 0xe8b4e46c2669bec87e69df74b3e79ae0 }, // 4567
    Multiplier { upper: 0xacbd915c9dd075bdfa59484863b7ed89, lower: 0x86f71d2351ee3239febb192a29861580 }, // 4568
    Multiplier { upper: 0x8a314116e4a6c497fb7aa039e95ff13a, lower: 0xd25f4a82a7f1c1c7fefc1421bad1aacd }, // 4569
    Multiplier { upper: 0xdd1b9b57d43e0759925dcd2975664ec4, lower: 0x83cbaa6aa64f9c73319353692ae91148 }, // 4570
    Multiplier { upper: 0xb0e2e2aca9cb39147517d7545deb7236, lower: 0xcfd621eeeb72e38f5adc42ba88ba7439 }, // 4571
    Multiplier { upper: 0x8d824ef087d5c74390dfdf76b189282b, lower: 0xd9781b258928b60c48b0356206fb902e }, // 4572
    Multiplier { upper: 0xe26a17e73fbc7205b499658ab5a84046, lower: 0x28c02b6f41dabce0744d223671928049 }, // 4573
    Multiplier { upper: 0xb521acb8ffc9f4d15d47846ef7b9cd04, lower: 0xed668925ce489719f6a41b5ec142003b }, // 4574
    Multiplier { upper: 0x90e7bd60cca190a77dd2d058c62e3d9d, lower: 0x8ab86db7d83a127b2bb67c4bcdce6695 }, // 4575
    Multiplier { upper: 0xe7d92f014768e77262eae6f47049fc2f, lower: 0x445a492626c350c512bd93ac7c7d70ef }, // 4576
    Multiplier { upper: 0xb97a8c0105ed85f51bef1f29f36e6359, lower: 0x037b6db81f02a7040efe0fbd30645a59 }, // 4577
    Multiplier { upper: 0x9462099a6b246b2a7cbf4c218f8b82ad, lower: 0x9c62be2ce59bb8d00bfe72fdc0504847 }, // 4578
    Multiplier { upper: 0xed69a8f711d3deaa61321368e5ac0448, lower: 0xfa3796ae3c2c5ae679971e62cd4d4072 }, // 4579
    Multiplier { upper: 0xbdee20c5a7dcb221e75b42ba515669d3, lower: 0xfb5fabbe9689e251fadf4b823dd766c1 }, // 4580
    Multiplier { upper: 0x97f1b3d15316f4e7ec49022ea77854a9, lower: 0x95e622feded4b50e624c3c6831791f01 }, // 4581
    Multiplier { upper: 0xf31c52e884f187d97a0e69e43f26eddc, lower: 0x2309d197caedee7d6a1393d9e8c1cb35 }, // 4582
    Multiplier { upper: 0xc27d0f206a5ad31461a5218365b8be49, lower: 0xb5a174796f24becabb42dcae53ce3c2a }, // 4583
    Multiplier { upper: 0x9b973f4d21e24276b4841acf8493cb6e, lower: 0x2ae7906125b6ff0895cf16f1dca4fcef }, // 4584
    Multiplier { upper: 0xf8f1fee1cfd06a578739c47f3a861249, lower: 0xde3f4d683c57fe7422e4f182faa194b1 }, // 4585
    Multiplier { upper: 0xc727ff1b0ca6bb7938fb0398fb9e7507, lower: 0xe4ff712030466529b583f468c88143c1 }, // 4586
    Multiplier { upper: 0x9f53327c0a1efc60fa6269472fb1f739, lower: 0x83ff8db359d1ea87c4699053d39a9c9a }, // 4587
    Multiplier { upper: 0xfeeb83f9a9cb2d67f703dba5191cbec2, lower: 0x6ccc15ebc2e9773fa0a8e6ec85c42dc3 }, // 4588
    Multiplier { upper: 0xcbef9cc7bb08f11ff8cfe2ea7a7d6568, lower: 0x5709ab2302545f661a20b8bd37d0249c }, // 4589
    Multiplier { upper: 0xa32617062f3a5a7ffa3fe8bb95311ded, lower: 0x126e228268437f84e1b3c6fdc6401d4a }, // 4590
    Multiplier { upper: 0x8284df3825c8486661ccba2faa8db18a, lower: 0x7524e868536932d0b48fd2649e99b108 }, // 4591
    Multiplier { upper: 0xd0d49859d60d40a3cfadf6b2aa7c4f43, lower: 0xeea173da1f0eb7b4541950a0fdc2b4da }, // 4592
    Multiplier { upper: 0xa71079e1780a9a1ca624c55bbb96a5cf, lower: 0xf21ac314e5a55fc3767aa6e7316890ae }, // 4593
    Multiplier { upper: 0x85a6c7e7933bae7d51b7044962deeb0c, lower: 0xc1af02771e1de635f8621f1f5aba0d58 }, // 4594
    Multiplier { upper: 0xd5d7a63f51f9172ee924d3a89e317814, lower: 0x691803f1c9c970565a3698322ac3488d }, // 4595
    Multiplier { upper: 0xab12eb65db2dac258750a953b1c12cdd, lower: 0x20e00327d4a126ab7b5ee0282235d3a4 }, // 4596
    Multiplier { upper: 0x88dbef84af57bcead2a6eddc8e3423e4, lower: 0x1a4ccf531080ebbc62b24cece82b0fb6 }, // 4597
    Multiplier { upper: 0xdaf97f3ab225fb11510b162db0536ca0, lower: 0x2a147eeb4d9b12c704507b14a6ab4c57 }, // 4598
    Multiplier { upper: 0xaf2dff62281e627440d5ab57c042bd4c, lower: 0xee76cbef7148dbd269d9fc108555d6ac }, // 4599
    Multiplier { upper: 0x8c24cc4e867eb529cd77bc4633689770, lower: 0xbec56ff2c1071641ee47fcda0444abbd }, // 4600
    Multiplier { upper: 0xe03ae07da3fdeea948bf93a385742581, lower: 0x313be65134d8239cb0732e29a06ddf94 }, // 4601
    Multiplier { upper: 0xb3624d314ffe58876d660fb6045ceacd, lower: 0xc0fcb840f7134fb08d28f1bae6be4c77 }, // 4602
    Multiplier { upper: 0x8f81d75aa665139f8ab80c919d17223e, lower: 0x33fd6033f8dc3fc070ed8e2f1efea392 }, // 4603
    Multiplier { upper: 0xe59c8bc43d6e85cc11267a8294f1d063, lower: 0x866233865af9ff9a4e48e37e97fdd283 }, // 4604
    Multiplier { upper: 0xb7b06fd0312537d6741ec8687727d9e9, lower: 0x384e8f9eaf2e66150b6d82cbaccb0ed0 }, // 4605
    Multiplier { upper: 0x92f38ca68db75fdec34bd386c5b97b20, lower: 0xf9d872e558f1eb44092468a2f0a27240 }, // 4606
    Multiplier { upper: 0xeb1f4770e2beffcad212ec0ad5f591ce, lower: 0x5c8d84a227e9786cdb6d7437e76a5066 }, // 4607
    Multiplier { upper: 0xbc1905f3e898cca241a8bcd577f7a7d8, lower: 0x4a0ad081b987938a49245cf985eea6b8 }, // 4608
    Multiplier { upper: 0x967a6b2986e0a3b50153ca445ff95313, lower: 0x6e6f0d34946c76083a837d946b25522d }, // 4609
    Multiplier { upper: 0xf0c3dea8d7cdd2bb3552dd3a332884eb, lower: 0xe3e4e1edba4723405d9f2f53dea21d14 }, // 4610
    Multiplier { upper: 0xc09cb220aca4a895c4424a94f5ba03ef, lower: 0xe983e7f161d28299e47f590fe54e7daa }, // 4611
    Multiplier { upper: 0x9a16f4e6f083ba1169cea210c494cff3, lower: 0x2136532781753547e9ff7a731dd86488 }, // 4612
    Multiplier { upper: 0xf68b217180d2c34f0fb1034e07547feb, lower: 0x6856eb7268bb88730fff2a51c95a3a73 }, // 4613
    Multiplier { upper: 0xc53c1ac133dbcf7272f402a4d2a9ffef, lower: 0x86abef8eba2fa05c0ccc21db077b61f6 }, // 4614
    Multiplier { upper: 0x9dc9af00f64972c1f590021d7554ccbf, lower: 0x9eeff2d894f2e6b00a3ce7e26c62b4c5 }, // 4615
    Multiplier { upper: 0xfc75e4ce56dbeacfef4cd02f22214798, lower: 0xfe4cb7c0ee517119a9fb0c9d7a3787a1 }, // 4616
    Multiplier { upper: 0xc9f7ea3eabe3223ff2a3d9bf4e810613, lower: 0xfea3c633f1dac0e154c8d6e461c6061a }, // 4617
    Multiplier { upper: 0xa19321cbbcb5b4fff54fe165d867380f, lower: 0xfee96b5cc17bcd8110a0abe9e7d19e7b }, // 4618
    Multiplier { upper: 0x8142816fca2af7332aa64deb1385c673, lower: 0x325455e3cdfca46740808987eca7b1fc }, // 4619
    Multiplier { upper: 0xced0cf194377f1eb77707cab526fa3eb, lower: 0x83ba23061661070b9a674273143f832d }, // 4620
    Multiplier { upper: 0xa573d8e102c65b22c5f396ef75261cbc, lower: 0x6961b59e784d9f3c7b85cec2769935be }, // 4621
    Multiplier { upper: 0x845cad80cf0515b56b29458c5db816fd, lower: 0x211af7b1f9d7b296c937d89b92142afe }, // 4622
    Multiplier { upper: 0xd3c77c014b3b55ef11dba27a2f8cf195, lower: 0x01c4bf8329591dbe0ebfc0f8e9b9de64 }, // 4623
    Multiplier { upper: 0xa96c63343c2f77f274afb52e8c70c144, lower: 0x016a32cf54474afe723300c721617eb6 }, // 4624
    Multiplier { upper: 0x8789e8f6968c5ff52a262a8ba38d6769, lower: 0x9abb5bd9103908cb8e8f33d2811acbc5 }, // 4625
    Multiplier { upper: 0xd8dca7f0f0e09988437044129f48a575, lower: 0xc45ef95b4d280e127db1ec8401c4793b }, // 4626
    Multiplier { upper: 0xad7d5327271a146d02c036754c3a1df7, lower: 0xd04bfaaf70ecd80ecaf4bd3667d060fc }, // 4627
    Multiplier { upper: 0x8acaa8ec1f481057356691f7702e7e5f, lower: 0xd9d66225f3f0acd8a25d642b86404d97 }, // 4628
    Multiplier { upper: 0xde110e4698734d585570e98be6b0ca32, lower: 0xf623d03cb981148dd0956d127066e28a }, // 4629
    Multiplier { upper: 0xb1a73e9ee05c3de0445a546febc0a1c2, lower: 0x5e830cfd6134107173aabda859ebe86f }, // 4630
    Multiplier { upper: 0x8e1f654be6b0318036aea9f323008168, lower: 0x4b9c0a644dc3405ac2eefe2047efed25 }, // 4631
    Multiplier { upper: 0xe3656edfd7804f338ab10feb6b340240, lower: 0x78f9aa3a160533c46b17fd0073197b6f }, // 4632
    Multiplier { upper: 0xb5eabf197933728fa2273fef88f66833, lower: 0x93faee94de6a8fd055acca66c27ac926 }, // 4633
    Multiplier { upper: 0x918898e12dc2c20c81b8fff2d3f8535c, lower: 0x7662587718553fd9de23d51f01fbd41e }, // 4634
    Multiplier { upper: 0xe8da8e35160469ad9c5b331e1ff3b893, lower: 0xf09d5a5826eecc8fc9d2ee98032c8696 }, // 4635
    Multiplier { upper: 0xba4871c4119d2157b048f5b1b3296076, lower: 0x5a177b79b8bf0a0ca1758baccf56d212 }, // 4636
    Multiplier { upper: 0x9506c169a7b0e77959d3f7c15c2119f8, lower: 0x4812c92e2d65a1a3b45e09570c4574db }, // 4637
    Multiplier { upper: 0xee713575d91b0bf55c8659356034f65a, lower: 0x0ceadb7d156f6905ed634224e06f215f }, // 4638
    Multiplier { upper: 0xbec0f7917a7c099116d1e0f7802a5eae, lower: 0x70bbe2ca778c5404bde901b719f28119 }, // 4639
    Multiplier { upper: 0x989a5fa7953007a74574b3f93355188b, lower: 0x8d631bd52c704336fe54015f47f53414 }, // 4640
    Multiplier { upper: 0xf42a32a5bb800c3ed587865b8554f412, lower: 0x7bd1c621e0b39ebe63b99bcba655201f }, // 4641
    Multiplier { upper: 0xc354f55162ccd698aad2d1e2d110c341, lower: 0xfca7d1b4b3c2e5651c947ca2eb774ce6 }, // 4642
    Multiplier { upper: 0x9c43f7744f0a4546ef0f0e4f0da7029b, lower: 0x3086415d5c9beab74a1063b5892c3d85 }, // 4643
    Multiplier { upper: 0xfa0658ba18106ed7e4e4e3b1af719dc5, lower: 0x1a70689560f9778ba9b3d2bc0ead2f3b }, // 4644
    Multiplier { upper: 0xc80513c8134058acb71d82f48c5ae49d, lower: 0xaec053aab3fac609548fdbc9a55758fc }, // 4645
    Multiplier { upper: 0xa0040fd34299e08a2c179bf6d6af1d4a, lower: 0xf233762229956b3aaa0cafd48445e0ca }, // 4646
    Multiplier { upper: 0x80033fdc3547e6d4f012e32bdef27dd5, lower: 0x8e8f91b4ee11229554d6f31069d180a1 }, // 4647
    Multiplier { upper: 0xccd1ffc6bba63e21801e38463183fc88, lower: 0xe418e9217ce83755548b1e80a94f3435 }, // 4648
    Multiplier { upper: 0xa3db330562eb64e799b1c69e8e03306d, lower: 0x834720e797202c4443a27ecd543f5cf7 }, // 4649
    Multiplier { upper: 0x8315c26ab5891d86148e387ed8028d24, lower: 0x6905b3ec78e689d0361b98a44365e3f9 }, // 4650
    Multiplier { upper: 0xd1bc6a4455a82f3cedb05a648cd0e1d3, lower: 0xdb3c5313f4a40fb389c5c106d23c9ff5 }, // 4651
    Multiplier { upper: 0xa7c9ee9d115358fd8af37b83a3da4e43, lower: 0x15c9dc0ff6e9a6293b049a6bdb63b32a }, // 4652
    Multiplier { upper: 0x863b254a7442ad97a25c62cfb6483e9c, lower: 0x116e49a65f2151ba959d4856491c8f55 }, // 4653
    Multiplier { upper: 0xd6c50877206aaf5903c7047f8a0d30f9, lower: 0xb57d42a3cb6882c42295408a0e941888 }, // 4654
    Multiplier { upper: 0xabd0d3928055591403059d32d4d75a61, lower: 0x5dfdcee96f86cf034eddcd3b3edce06d }, // 4655
    Multiplier { upper: 0x8973dc7533777a7668d14a8f10ac484d, lower: 0xe4cb0bedf2d23f35d8b170fc324a4d24 }, // 4656
    Multiplier { upper: 0xdbec93eeb8bf2a570e1baa7e8113a6e3, lower: 0x07ab46498483985627824e605076e1d3 }, // 4657
    Multiplier { upper: 0xaff0765893cc21df3e7c8865340fb8b5, lower: 0x9fbc383ad06946ab52cea519d9f8b4a9 }, // 4658
    Multiplier { upper: 0x8cc05ead4309b4b29863a050f672fa2a, lower: 0xe6302cfbd9edd222a8a550e17b2d5d54 }, // 4659
    Multiplier { upper: 0xe133caaed1a9211dc09f66e7f0b7f6ab, lower: 0x09e6ae5fc3161d0441088168c5156220 }, // 4660
    Multiplier { upper: 0xb4296ef241541a7e33b2b8b98d5ff888, lower: 0xd4b88b7fcf44e403673a01209daab4e6 }, // 4661
    Multiplier { upper: 0x9021258e9aa9aecb5c8efa2e0ab32d3a, lower: 0x43c6d5ffd903e99c5294cdb3b1555d85 }, // 4662
    Multiplier { upper: 0xe69b6f4a910f7e122db19049aab8485d, lower: 0x393e2332f4d30f608421491f82222f3b }, // 4663
    Multiplier { upper: 0xb87c5908740c64db57c1403aeef9d37d, lower: 0xc764e8f590a8d91a034dd41934e825c9 }, // 4664
    Multiplier { upper: 0x9396ada05cd6b715dfcdccfbf26175fe, lower: 0x391d872ada20adae690b10142a53516e }, // 4665
    Multiplier { upper: 0xec244900948abe89661614c6509beffd, lower: 0x282f3eaaf69aaf7d74de802043b88249 }, // 4666
    Multiplier { upper: 0xbce9d40076d5653ab811aa38407cbffd, lower: 0xb9bf6555921559312a4b99b36960683a }, // 4667
    Multiplier { upper: 0x97217666c577842ef9a7bb603396fffe, lower: 0x2e32b777a8111427550947c2bab38695 }, // 4668
    Multiplier { upper: 0xf1cf23d7a258d37e5c3f923385be6663, lower: 0x7d1df2590ce8203eee753f9df785a421 }, // 4669
    Multiplier { upper: 0xc1728312e8470f9849cc74f6049851e9, lower: 0x30e4c1e0d72019cbf1f76617f937b681 }, // 4670
    Multiplier { upper: 0x9ac20275869f3fad07d6c3f803ad0e54, lower: 0x271d67e7128014a327f91e79942c9201 }, // 4671
    Multiplier { upper: 0xf79cd0bc0a9865e1a6246cc005e1b086, lower: 0xa4fbd971b73354383ff4fd8f537a8335 }, // 4672
    Multiplier { upper: 0xc6170d633bad1e4e1e838a3337e7c06b, lower: 0xb72fe127c5c2a9c69990cad90f9535c4 }, // 4673
    Multiplier { upper: 0x9e78d7829624183e7ecfa1c2931fcd22, lower: 0xf8f31a8637ceee387ada3be0d9442b03 }, // 4674
    Multiplier { upper: 0xfd8e259dbd068d30cae5cf9db832e1d1, lower: 0x8e51c409f2e4b05a5e29f967c206ab38 }, // 4675
    Multiplier { upper: 0xcad81e17ca6ba42708b7d94af9c24e41, lower: 0x3ea7d007f583c0484b54c78634d22293 }, // 4676
    Multiplier { upper: 0xa2467e796ebc83526d5fe108c7cea500, lower: 0xfeeca66cc46966a03c43d2d1c3db4edc }, // 4677
    Multiplier { upper: 0x81d1fec78bca02a8577fe73a39721d9a, lower: 0x658a1ebd69edebb3636975749caf724a }, // 4678
    Multiplier { upper: 0xcfb6647279433773bf330b905be9c8f7, lower: 0x08dcfdfbdcafdf856bdbef20fab25076 }, // 4679
    Multiplier { upper: 0xa62b838ec768f92965c26fa6afee3a5f, lower: 0x3a4a64c97d597f9defe325b3fbc1d9f8 }, // 4680
    Multiplier { upper: 0x84ef9c723920c7545168595226582eb2, lower: 0x950850a131146617f31c1e299634ae60 }, // 4681
    Multiplier { upper: 0xd4b293e9f5013eed4f0d5bb6a3c04ab7, lower: 0x54da1a9b81ba3cf31e936375bd211700 }, // 4682
    Multiplier { upper: 0xaa287654c400ff243f3de2f883003bc5, lower: 0xdd7b487c67c830c27edc4f91641a78cd }, // 4683
    Multiplier { upper: 0x88205eaa3667328365cb1bfa02669637, lower: 0xe462a0638639c09b98b03fa7834860a4 }, // 4684
    Multiplier { upper: 0xd9cd64438a3eb738a2de93299d70f059, lower: 0x6d6a9a38d6c2cdc5c119ff726ba70106 }, // 4685
    Multiplier { upper: 0xae3de9cfa1cbc5c6e8b20f547df3f37a, lower: 0xbdeee1c71235716b00e19928561f3405 }, // 4686
    Multiplier { upper: 0x8b64bb0c816fd16bed5b3f76cb298f95, lower: 0x64bf1b05a82ac122671ae0ed11b29004 }, // 4687
    Multiplier { upper: 0xdf0791ad9be61bdfe22b98be11dc18ef, lower: 0x07982b3c404468370b5e34ae82b74cd3 }, // 4688
    Multiplier { upper: 0xb26c748ae31e7cb31b5613cb417ce0bf, lower: 0x394688fd0036b9c5a2b1c3becef90a43 }, // 4689
    Multiplier { upper: 0x8ebd2a08b5b1fd5c15de763c3463e6ff, lower: 0x61053a64002bc7d14ef49c98a5940835 }, // 4690
    Multiplier { upper: 0xe461dcdabc4ffbc68963f06053d30b32, lower: 0x34d52a3999dfa61bb18760f43c200d22 }, // 4691
    Multiplier { upper: 0xb6b4b0aefd0cc96ba11cc04d0fdc08f4, lower: 0xf710ee947b1951afc1391a5cfce670e8 }, // 4692
    Multiplier { upper: 0x922a26f2640a3abc80e3cd0a73166d90, lower: 0xc5a7254395addaf300fa7b7d971ec0ba }, // 4693
    Multiplier { upper: 0xe9dd0b1d6cdd2ac7349fae771e8a48e7, lower: 0xa2a5086c22afc4b80190c595be979ac2 }, // 4694
    Multiplier { upper: 0xbb173c178a4a889f5d4c8b927ed5071f, lower: 0xb550d389b5596a2cce0d6ade3212e235 }, // 4695
    Multiplier { upper: 0x95ac3012d5086d4c4aa3a2db98aa6c19, lower: 0x5dda42d4911454f0a4d788b1c1a8b4f7 }, // 4696
    Multiplier { upper: 0xef79e684880d7bad443904928ddd79c2, lower: 0x2fc39e20e82087e76e25a782cf7454bf }, // 4697
    Multiplier { upper: 0xbf94b86a06712fbdd02d9d420b17949b, lower: 0x59694b4d86806cb924eaec68a5f6aa32 }, // 4698
    Multiplier { upper: 0x9943c6bb385a8c97d9be176808dfaa15, lower: 0xe121090ad20056fa83ef2386eb2bbb5c }, // 4699
    Multiplier { upper: 0xf5393df85a2a7a8c8f968bd9a7cc4356, lower: 0x3501a81150008b2a6cb1d2717845f892 }, // 4700
    Multiplier { upper: 0xc42dcb2d14eec87072ded647b97035de, lower: 0x90ce200dd99a08eebd5b0ec12d04c6db }, // 4701
    Multiplier { upper: 0x9cf16f5743f239f38f18ab6c9459c4b2, lower: 0x0d71b33e47ae6d8bcaaf3f00f0d09f16 }, // 4702
    Multiplier { upper: 0xfb1be5586cb6c31f4b5aabe0ed5c6de9, lower: 0xaf1c51fd3f7d7c12dde5319b1ae764f0 }, // 4703
    Multiplier { upper: 0xc8e31de056f89c190915564d8ab057ee, lower: 0x25b0419765fdfcdbe4b75ae27bec50c0 }, // 4704
    Multiplier { upper: 0xa0b5b1804593b0140744450ad559dff1, lower: 0xb7c034791e64ca4983c5e24ec989da33 }, // 4705
    Multiplier { upper: 0x80915acd047626766c369da24447e65a, lower: 0xf9669060e51d6ea13637e83f07a17b5c }, // 4706
    Multiplier { upper: 0xcdb55e14d3f03d8a46bdc903a0730a2b, lower: 0x28a41a34a1c8b101f05973980c35922d }, // 4707
    Multiplier { upper: 0xa4911810a98cfe083897d402e6c26e88, lower: 0xed5014f6e7d3c0ce59e12946702adb57 }, // 4708
    Multiplier { upper: 0x83a74673bad731a02d4643358568586d, lower: 0x8aa6772beca9670b7b1a876b8cef15e0 }, // 4709
    Multiplier { upper: 0xd2a53d85f7beb5cd153d3855a2408d7c, lower: 0x110a5846477571abf82a7245ae4b5632 }, // 4710
    Multiplier { upper: 0xa8843137f9655e3daa97604481cd3dfc, lower: 0xda6ead0505f78e232ceec1d1583c44f5 }, // 4711
    Multiplier { upper: 0x86d0275ffab77e97bbac4d039b0a97fd, lower: 0x7b8bbd9d9e5fa4e8f0bf017446969d91 }, // 4712
    Multiplier { upper: 0xd7b372332abf30f2c5e07b38f810f32f, lower: 0x2c12c8fc309907db1acb3586d7576281 }, // 4713
    Multiplier { upper: 0xac8f8e8f5565c0c237e6c8fa600d8f58, lower: 0xf00f073026e0d315af08f79f12ac4ece }, // 4714
    Multiplier { upper: 0x8a0c720c44516701c6523a61e6713f7a, lower: 0x59a59f59b8b3dc1158d3f94c0ef03f0b }, // 4715
    Multiplier { upper: 0xdce0b67a06e8a4cfa3b6c3cfd71b98c3, lower: 0xc2a2988f8dec934ef4865bace4b39812 }, // 4716
    Multiplier { upper: 0xb0b3c52e6bed50a61c92363fdf494703, lower: 0x021bad3fa4bd42a5906b7c8a508facdb }, // 4717
    Multiplier { upper: 0x8d5c9dbebcbdda1e7d41c4ffe5d438cf, lower: 0x34e2f0ffb6fdceead9ef96d50d3fbd7c }, // 4718
    Multiplier { upper: 0xe22dc9312dfc9030c8693b3309538e18, lower: 0x549e4e65f19617de297f57bb4865fbf9 }, // 4719
    Multiplier { upper: 0xb4f16dc0f196d9c0a0542f5c07760b46, lower: 0xaa183eb7f47813182132ac95d384c994 }, // 4720
    Multiplier { upper: 0x90c1249a5adf149a19dcf2b005f80905, lower: 0x54e0322cc3934279b4288a117603d477 }, // 4721
    Multiplier { upper: 0xe79b6dc3c49820f68fc7eab33cc00e6e, lower: 0xee33837ad28537292040dce8bcd2ed8b }, // 4722
    Multiplier { upper: 0xb949249c9d4680c53fd32228fd6671f2, lower: 0x582935fbdb9dc5ba8033e3ed63dbf13c }, // 4723
    Multiplier { upper: 0x943a83b07dd2009dcca8e820cab85b28, lower: 0x46875e631617d162002983244fe32763 }, // 4724
    Multiplier { upper: 0xed2a6c4d961ccdc94774a69addf3c50d, lower: 0x3da563d1bcf2e89ccd0f383a196b7238 }, // 4725
    Multiplier { upper: 0xbdbb89d7ab4a3e3a9f908548b18fd0d7, lower: 0x64844fdafd8f207d70d8f9c81455f4fa }, // 4726
    Multiplier { upper: 0x97c93b12ef6e982ee60d376d5ad973df, lower: 0x839d0caf313f4d312713fb0676ab2a61 }, // 4727
    Multiplier { upper: 0xf2db91b7e57dc04b09aebf155e28b965, lower: 0x9f61ade51b987b81d81ff80a577843cf }, // 4728
    Multiplier { upper: 0xc249415feacb003c07beff444b53c784, lower: 0x7f8157ea7c79fc67e019933b792d030c }, // 4729
    Multiplier { upper: 0x9b6dcde6556f3363396599036f763936, lower: 0xcc6779886394c9ecb347a8fc60f0cf3d }, // 4730
    Multiplier { upper: 0xf8afafd6ef1852385bd5c19f18bd2857, lower: 0xad725c0d6c214314520c4193ce4e1861 }, // 4731
    Multiplier { upper: 0xc6f2f31258e041c6afde347f46fdb9df, lower: 0xbdf51671234dcf4374d69adca50b46b4 }, // 4732
    Multiplier { upper: 0x9f28c27513e69b05597e9065d26494b2, lower: 0xfe5dab8db5d7d902c3dee24a1da29ef7 }, // 4733
    Multiplier { upper: 0xfea79d881fd75e6ef5974d6fb7075451, lower: 0x96fc45af89595b379fcb03a9c904318a }, // 4734
    Multiplier { upper: 0xcbb94ad34cac4b8bf7ac3df2f8d2a9da, lower: 0xdf3037bfa11448f94ca26954a0d027a2 }, // 4735
    Multiplier { upper: 0xa2faa242a3bd093cc62364c260a887e2, lower: 0x4c2692ffb4103a610a1b8776e70cec82 }, // 4736
    Multiplier { upper: 0x82621b6882fda0fd6b4f83ceb3ba064e, lower: 0xa3520f32f67361e73b49392bec0a56ce }, // 4737
    Multiplier { upper: 0xd09cf8a737fc34c8abb26c7dec5cd6e4, lower: 0x38834b84bd856971f87528464676f14a }, // 4738
    Multiplier { upper: 0xa6e3fa1f5ffcf706efc1f064bd171250, lower: 0x2d35d603cad12127f9f7536b6b925aa1 }, // 4739
    Multiplier { upper: 0x85832e7f7ffd926bf3018d1d6412750c, lower: 0xf0f7de696f0db41ffb2c42bc560eaee8 }, // 4740
    Multiplier { upper: 0xd59eb0cbfffc1d7984cf482f0683ee7b, lower: 0x1b2630a8b1af869991e06ac6f0177e3f }, // 4741
    Multiplier { upper: 0xaae55a3cccc9b12e03d9068c05365862, lower: 0x7c1e8d53c159387adb19ef058cdf9833 }, // 4742
    Multiplier { upper: 0x88b77b63d707c0f19cad9ed66a91e04e, lower: 0xc9b20aa9677a93957c14bf37a3e6135c }, // 4743
    Multiplier { upper: 0xdabf2bd2f1a601829448fe23ddb633b1, lower: 0x42b67775725db8ef2cedfebf6ca3522c }, // 4744
    Multiplier { upper: 0xaeff56425aeb346876a0cb4fe491c2f4, lower: 0x355ec5f78eb160bf5724cbcc56e90e8a }, // 4745
    Multiplier { upper: 0x8bff78351588f6b9f880a2a650749bf6, lower: 0x91189e5fa55ab3cc45b7097045873ed5 }, // 4746
    Multiplier { upper: 0xdfff26bb55a7f1298d9a9dd6e720f98a, lower: 0x81c0fd65d55dec7a0924dbe6d5a53154 }, // 4747
    Multiplier { upper: 0xb3328562aaecc0ee0ae217df1f4d946e, lower: 0xce33fdeb1117f061a0ea498577b75aaa }, // 4748
    Multiplier { upper: 0x8f5b9de888bd6724d581acb27f71438b, lower: 0xd82997ef40dff3814d883ad12c92aeee }, // 4749
    Multiplier { upper: 0xe55f630da79571d488cf7ab7324ed279, lower: 0x59dc264b9affec0215a6c481e0eab17d }, // 4750
    Multiplier { upper: 0xb77f827152ddf4aa070c622c283f0ec7, lower: 0x7b16850948ccbcce77b89d34b3eef464 }, // 4751
    Multiplier { upper: 0x92cc685aa8b1908805a381bcecff3f05, lower: 0xfc1204076d70970b92fa175d5cbf29ea }, // 4752
    Multiplier { upper: 0xeae0a6f7744f4da66f6c02c7e19864d6, lower: 0x601cd33f1580f1ac1e5cf22efacb7643 }, // 4753
    Multiplier { upper: 0xbbe6ebf929d90aeb8c56689fe7ad1d78, lower: 0x4ce3dc32779a5af0184a5b58c8a2c502 }, // 4754
    Multiplier { upper: 0x96525660ee473befa37853b31fbdb12d, lower: 0x0a4fe35b92e1e259ad084913d3b56a68 }, // 4755
    Multiplier { upper: 0xf083bd67e3a52cb29f26ec51cc62b514, lower: 0xdd4c9ef8eb0303c2ae73a81fb92243da }, // 4756
    Multiplier { upper: 0xc06964531c8423c218ebf041704ef743, lower: 0xe43d4bfa559c03022529534c941b697b }, // 4757
    Multiplier { upper: 0x99ede9dc16d01c9b4723269ac03f2c36, lower: 0x5031099511499c01b75442a3a9af8796 }, // 4758
    Multiplier { upper: 0xf649762cf14cfa920b6b70f799fead23, lower: 0xb381a8ee820f6002beed376c42b27289 }, // 4759
    Multiplier { upper: 0xc50791bd8dd72edb3c55f3f947fef0e9, lower: 0x5c67ba58680c4cceff242c569bc1f53a }, // 4760
    Multiplier { upper: 0x9d9fa7cad7df58af6377f66106658d87, lower: 0x7d1fc846b9a370a598e9bd121634c42f }, // 4761
    Multiplier { upper: 0xfc32a61159655ab238bff09b3d6f48d8, lower: 0xc832da0ac29f1aa28e42c81cf0546d17 }, // 4762
    Multiplier { upper: 0xc9c21e744784488e93ccc07c3125d3e0, lower: 0xa028ae6f0218e21ba50239b0c0438a79 }, // 4763
    Multiplier { upper: 0xa168185d06036d3edca3cd302751764d, lower: 0x4ced5858ce7a4e7c8401c7c099cfa1fb }, // 4764
    Multiplier { upper: 0x8120137d9e6924324a1ca42685dac50a, lower: 0xa3f1137a3ec83eca03349fcd47d94e62 }, // 4765
    Multiplier { upper: 0xce99b8c8fd7506b6dcfaa03da2f7a1aa, lower: 0x9fe81f29fe0d3143385432e20c8ee3d0 }, // 4766
    Multiplier { upper: 0xa547c707312a6bc57d954cfe1bf94e22, lower: 0x19867f54cb3dc10293768f1b3d3f1ca7 }, // 4767
    Multiplier { upper: 0x84396c05c0eebc9dfe110a64e32dd81b, lower: 0x479ecc43d5cb00cedc5ed8e29765b085 }, // 4768
    Multiplier { upper: 0xd38f133c67e460fcc9b4dd6e384959c5, lower: 0x3f647a0622de67b16097c16a8bd5e73b }, // 4769
    Multiplier { upper: 0xa93f4296b98380ca3af7178b603aae37, lower: 0x65e9fb381be51fc11a1301220977ec30 }, // 4770
    Multiplier { upper: 0x8765cedefacf9a3b625f460919c88b5f, lower: 0x84bb2f601650e63414dc00e807932359 }, // 4771
    Multiplier { upper: 0xd8a2e497f7b2905f03cba341c2da7898, lower: 0xd45eb23356e7d6b9baf99b0cd8eb6bc2 }, // 4772
    Multiplier { upper: 0xad4f1d465fc20d18cfd61c349be1fa13, lower: 0xdd188e8f78b9789495947c0a4722bc9b }, // 4773
    Multiplier { upper: 0x8aa5b10519680a7a3fde7cf6e31b2e76, lower: 0x4a7a0ba5fa2dfa1077a9fcd505b563b0 }, // 4774
    Multiplier { upper: 0xddd5e80828a67729ffca618b04f84a56, lower: 0xdd9012a329e329b3f2a9948809223919 }, // 4775
    Multiplier { upper: 0xb177ecd353b85f54cca1e7a26a603b78, lower: 0xb1400ee8ee4f548ff55476d33a81c747 }, // 4776
    Multiplier { upper: 0x8df98a42a9604c43d6e7ec81eeb362c6, lower: 0xf4333f20bea5dd3ff776c575c867d29f }, // 4777
    Multiplier { upper: 0xe328dd377566e06c8b0cad9cb11f0471, lower: 0x86b86501310961fff257a2560d72ea98 }, // 4778
    Multiplier { upper: 0xb5ba4a92c4524d23a2708ae3c0e59d27, lower: 0x9ef9ea675a6de7fff512e844d78f2213 }, // 4779
    Multiplier { upper: 0x9161d54236a83db61b8d3be9671e1752, lower: 0xe594bb85e1f186665da8b9d0ac7281a9 }, // 4780
    Multiplier { upper: 0xe89c8869f10d2f89c5aec6423e968bb7, lower: 0xd5bac5a3031c0a3d62a78fb4471d9c42 }, // 4781
    Multiplier { upper: 0xba16d387f40a8c6e37bf0501cbaba2f9, lower: 0x77c89e1c027cd4fde8860c9038e47d01 }, // 4782
    Multiplier { upper: 0x94df0f9ff66ed6be92ff3734a2efb594, lower: 0x5fd3b1b001fd773186d1a3a693e9fd9b }, // 4783
    Multiplier { upper: 0xee31b2998a4af130eb31f1edd17f88ed, lower: 0x661f82b33662584f3e1c390a86432f5e }, // 4784
    Multiplier { upper: 0xbe8e287ad508c0f3ef5b27f174660724, lower: 0x51b2cef5c51b79d8fe7cfa6ed1cf5918 }, // 4785
    Multiplier { upper: 0x9871b9fbdda09a5cbf7c1ff45d1e6c1d, lower: 0x0e28a5916a7c617a6530c858a7d91413 }, // 4786
    Multiplier { upper: 0xf3e92992fc342a2dff2cffed61ca4694, lower: 0xe3743c1bdd93cf2a3b81408dd95b5352 }, // 4787
    Multiplier { upper: 0xc320ee0f3029bb57ff5733244e3b6baa, lower: 0x4f9030164adca5bb62cdcd3e477c42a8 }, // 4788
    Multiplier { upper: 0x9c1a580c2687c91332ac28e9d82f8955, lower: 0x0c7359ab6f16eafc4f0b0a9839303553 }, // 4789
    Multiplier { upper: 0xf9c3c01370d941b8511374a959e5a888, lower: 0x13ebc2abe4f177fa1811aa8d284d221e }, // 4790
    Multiplier { upper: 0xc7cfccdc5a4767c6a742c3baae5153a0, lower: 0x0fefceefea5ac661acdaeed75370e818 }, // 4791
    Multiplier { upper: 0x9fd970b048391fd21f689c9558410fb3, lower: 0x3ff30bf321e2384e23e258ac42c0b9ad }, // 4792
    Multiplier { upper: 0xffc24de6d9f4ffb698a760eef39b4c51, lower: 0xffeb4651cfd05a169fd08de06acdf5e2 }, // 4793
    Multiplier { upper: 0xcc9b71857b2a662bad52b3f25c7c3d0e, lower: 0x6655d1db0ca6ae787fda0b19ef0b2b1b }, // 4794
    Multiplier { upper: 0xa3af8e04628851bc8aa88ff516c9ca71, lower: 0xeb77db15a3b88b93997b3c14bf3c227c }, // 4795
    Multiplier { upper: 0x82f2d8038206a7ca0886d990df07d527, lower: 0xef9315aae9606fa94795c9aa329681fd }, // 4796
    Multiplier { upper: 0xd1848cd269a43fa9a73e28e7cb3fbb73, lower: 0x18eb55de4233e5dba5bc75dd1dbd9cc8 }, // 4797
    Multiplier { upper: 0xa79d3d75215032ee1f64ed863c32fc5c, lower: 0x13ef77e501c31e495163917db1647d6d }, // 4798
    Multiplier { upper: 0x8617645db44028be7f83f1383028c9e3, lower: 0x4325f9840168e507744fa797c11d3124 }, // 4799
    Multiplier { upper: 0xd68bd3c92066a797326cb526b3747638, lower: 0x6b6ff5a002416e7253b2a5bf9b61e839 }, // 4800
    Multiplier { upper: 0xaba30fd419ebb945c1f090ebc2c391c6, lower: 0xbc59914cce9abec1dc8eeaffaf818694 }, // 4801
    Multiplier { upper: 0x894f3fdce18961049b26da563569416b, lower: 0xc9e1410a3ee23234b072559959346baa }, // 4802
    Multiplier { upper: 0xdbb1ffc7cf4234d42b715d56bbdb9bdf, lower: 0xa9686810649d1d211a5088f55b8712a9 }, // 4803
    Multiplier { upper: 0xafc1996ca5ce90a9bc5ab1122fe2e319, lower: 0x5453867383b0e41a7b73a0c44938dbbb }, // 4804
    Multiplier { upper: 0x8c9ae123b7d873bafd155a74f31be8e1, lower: 0x1042d1f602f3e9aec9294d69d42d7c95 }, // 4805
    Multiplier { upper: 0xe0f7ce9f8c8d85f7fb555d87eb5fdb01, lower: 0xb39e1cbcd18642b141dbaf0fb9e260ef }, // 4806
    Multiplier { upper: 0xb3f972193d3e04c662aab13989197c01, lower: 0x5c7e7d63dad1cef434afbf3fc7e84d8c }, // 4807
    Multiplier { upper: 0x8ffac1adca9803d1e8888dc7a0e13001, lower: 0x16cb97831574a5902a2632996cb9d7a3 }, // 4808
    Multiplier { upper: 0xe65e02afaa8cd2e9740dafa5ce35199b, lower: 0x57ac259e88baa280437050f57ac2f29e }, // 4809
    Multiplier { upper: 0xb84b3559553d7587900af2eb0b5dae15, lower: 0xdfbceae53a2ee8669c59da5dfbcf287f }, // 4810
    Multiplier { upper: 0x936f5de110fdf79fa66f28bc0917be77, lower: 0xe630bbea94f2538549e17b7e630c2065 }, // 4811
    Multiplier { upper: 0xebe56301b4c98c32a3e50df9a825fd8c, lower: 0xa3812caa87ea1f3ba968c59704e033d5 }, // 4812
    Multiplier { upper: 0xbcb78267c3d47028831da4c7b9b7fe0a, lower: 0x1c6756eed321b29621209e126a4cf644 }, // 4813
    Multiplier { upper: 0x96f9351fcfdd2686cf4aea39615ffe6e, lower: 0x7d1f78bf0f4e28781a807e7521d72b6a }, // 4814
    Multiplier { upper: 0xf18ebb661961d73e1877dd289bccca4a, lower: 0x61cbf464e549da59c400ca5502f1df10 }, // 4815
    Multiplier { upper: 0xc13efc51ade7df64e05fe4207ca3d508, lower: 0x4e3cc383eaa17b7b0333d510cf27e5a6 }, // 4816
    Multiplier { upper: 0x9a98c9daf1864c50b37fe9b396e97739, lower: 0xd8309c6988812f959c297740a5b98485 }, // 4817
    Multiplier { upper: 0xf75adc9182707a1ab8cca91f57dbf1f6, lower: 0x26b42d75a73518ef604258676f8f3a6e }, // 4818
    Multiplier { upper: 0xc5e24a0e01f394e22d70874c46498e5e, lower: 0x855cf12aec2a7a5919cead1f8c729525 }, // 4819
    Multiplier { upper: 0x9e4ea1a4ce5c771b578d3909d1d471e5, lower: 0x377d8dbbf021fb7a7b0bbdb2d6c210eb }, // 4820
    Multiplier { upper: 0xfd4a9c3ae3c724f88c15280fb620b63b, lower: 0x8bfc15f980365f2a5e792f848ad01b11 }, // 4821
    Multiplier { upper: 0xcaa216958305b72d3cddb9a62b4d5e96, lower: 0x099677faccf84c21e52dbf9d3bd9af41 }, // 4822
    Multiplier { upper: 0xa21b454468d15f5763e49484ef711878, lower: 0x07ab932f0a603ce7ea8affb0fcae25cd }, // 4823
    Multiplier { upper: 0x81af6a9d20a77f791cb6dd3725f41393, lower: 0x39560f58d519ca532208cc8d96f1b7d8 }, // 4824
    Multiplier { upper: 0xcf7f10fb6772658e9457c8583cb9b8eb, lower: 0x8ef0188e21c2dd51d00e1415be4f8c8c }, // 4825
    Multiplier { upper: 0xa5ff40c91f8eb7a543796d1363c7c722, lower: 0xd8c013a4e7cf1774a671a9aafea60a0a }, // 4826
    Multiplier { upper: 0x84cc33d4193ef95102c78a75e96c9f4f, lower: 0x13ccdc83eca5ac5d51f487bbfeeb3b3b }, // 4827
    Multiplier { upper: 0xd479ec868ecb28819e0c10bca8adcbb1, lower: 0xb947c7397aa2ad621cba72c664ab91f8 }, // 4828
    Multiplier { upper: 0xa9fb239ed8a286ce1809a6fd53be3c8e, lower: 0x2dd305c7954ef11b4a2ec23850894193 }, // 4829
    Multiplier { upper: 0x87fc1c7f13b538a4e007b8caa964fd3e, lower: 0x8b0f37d2ddd8c0e2a1bf01c6a6d43476 }, // 4830
    Multiplier { upper: 0xd99360cb52bb8dd499a5f477756e61fd, lower: 0xab4b8c8496279b0435fe693dd7b9ed89 }, // 4831
    Multiplier { upper: 0xae0f80a2a8960b107aeb29f92abeb4ca, lower: 0xef6fa39d44ec7c035e6520fe462e57a1 }, // 4832
    Multiplier { upper: 0x8b3f9a1bba11a2739588ee60eefef708, lower: 0xbf8c82e4372396691850e731d1beac81 }, // 4833
    Multiplier { upper: 0xdecc29c5f6829d85bc0e4a34b197f1a7, lower: 0x98e0d16d2505bd74f3b4a51c82caad9a }, // 4834
    Multiplier { upper: 0xb23cee37f8687e049671d4f6f4798e1f, lower: 0xad80a78a84049790c2f6ea7d356ef148 }, // 4835
    Multiplier { upper: 0x8e9724f99386cb36dec1772bf6c7a4e6, lower: 0x2466ec6ed003ac73cf2beeca91258dd4 }, // 4836
    Multiplier { upper: 0xe42507f5b8d7ab8afe02584657a5d4a3, lower: 0x6d717a4ae66c471fb1dfe4774ea27c86 }, // 4837
    Multiplier { upper: 0xb684065e2d795608cb35136b795176e9, lower: 0x245ac83beb89d27fc17fe9f90bb5306b }, // 4838
    Multiplier { upper: 0x9203384b579444d3d5c40f892ddac587, lower: 0x5048a02fefa1753301332194095dc056 }, // 4839
    Multiplier { upper: 0xe99ec0788c206e1fbc6ce5a8495e08d8, lower: 0x8074337fe5cf21eb351e9c200efc66ef }, // 4840
    Multiplier { upper: 0xbae566c6d6805819638a51536de4d3e0, lower: 0x66c35c6651728188f74bb019a596b8bf }, // 4841
    Multiplier { upper: 0x95845238ab99e0144fa1daa924b70fe6, lower: 0xb89c49eb745b9ad3f90959ae1e122d66 }, // 4842
    Multiplier { upper: 0xef3a1d2778f63353b29c910ea124e63d, lower: 0xf42d431253c5c4865b42291696837bd6 }, // 4843
    Multiplier { upper: 0xbf61b0ec60c4f5dc8ee3a73ee750b831, lower: 0x902435a843049d384901ba7878692fdf }, // 4844
    Multiplier { upper: 0x991af3f04d6a5e4a0be95298b90d6027, lower: 0xa6835e20359d4a936d9afb939387597f }, // 4845
    Multiplier { upper: 0xf4f7ecb3af1096dcdfdbb75ac1af003f, lower: 0x70d2303388fbaa857c2b2c1f527228cb }, // 4846
    Multiplier { upper: 0xc3f98a2958da124a4cafc5e2348c0032, lower: 0xc0a8268fa0c955379688f0190ec1ba3c }, // 4847
    Multiplier { upper: 0x9cc7a1baad7b41d50a2637e82a0999c2, lower: 0x33b9b872e707775faba0c0140bce2e97 }, // 4848
    Multiplier { upper: 0xfad902c448c53621a9d6bfd9dcdc2936, lower: 0xb929271e3e725899129accecdfb04a8a }, // 4849
    Multiplier { upper: 0xc8ad9bd03a375e8154abccae4a49ba92, lower: 0x2dba85b1cb8ead47421570bd7fc03ba2 }, // 4850
    Multiplier { upper: 0xa08ae30cfb5f7ecddd563d583b6e2edb, lower: 0x57c86af4a2d88a9f681126fdffccfc82 }, // 4851
    Multiplier { upper: 0x806f1c0a62b2cbd7e444fde02f8b58af, lower: 0x796d225d4f13a219200db8cb330a639b }, // 4852
    Multiplier { upper: 0xcd7e9343d11e12f306d4c966b2788de5, lower: 0x8f1503c87e85d028334927ab84dd6c2b }, // 4853
    Multiplier { upper: 0xa465429ca74b425c057707855b93a4b7, lower: 0xa5aa696d3204a6868f6db95603e45689 }, // 4854
    Multiplier { upper: 0x8384354a1f6f68499df8d2d1160fb6f9, lower: 0x515521242803b86ba5f161119cb6aba1 }, // 4855
    Multiplier { upper: 0xd26d2210324bda0f6327b7b4f01924c2, lower: 0x1bbb6839d99f8d79098234e8fabddf67 }, // 4856
    Multiplier { upper: 0xa8574e735b6fe1a5e8ec92f7267a83ce, lower: 0x7c95ecfb147fa460d4682a53fbcb191f }, // 4857
    Multiplier { upper: 0x86ac3ec2af8cb484ba56dbf8eb95363e, lower: 0xca118a6276cc8380a9eceea9963c1419 }, // 4858
    Multiplier { upper: 0xd779fe044c145407908af98e45bb89fe, lower: 0x101c109d8ae0d2677647e44289f9b9c2 }, // 4859
    Multiplier { upper: 0xac61980370104339406f2e0b6afc6e64, lower: 0xd9b00d4ad580a852c50650353b2e2e35 }, // 4860
    Multiplier { upper: 0x89e7accf8cd9cf610058f1a2bbfd251d, lower: 0x7af33dd5779a20423738402a95be8b5d }, // 4861
    Multiplier { upper: 0xdca5e14c148fb234cd5b1c37932ea1c8, lower: 0xc4b862ef25c366d0585a004422ca7895 }, // 4862
    Multiplier { upper: 0xb084b43cdd3fc1c3d77c1692dc254e3a, lower: 0x36f9e8bf51691f0d137b3369b56ec6de }, // 4863
    Multiplier { upper: 0x8d36f6971766349cac63454249b771c8, lower: 0x2bfb20990dedb270dc628f87c4589f18 }, // 4864
    Multiplier { upper: 0xe1f18a8b58a3876113d2086a0f8be940, lower: 0x465e9a8e7caf83e7c70418d93a2764f3 }, // 4865
    Multiplier { upper: 0xb4c13ba2ad4f9f80dca806bb3fa32100, lower: 0x384baed863bf9cb96c0347142e85ea5c }, // 4866
    Multiplier { upper: 0x909a961bbdd94c6716ecd22f661c1a66, lower: 0x936fbf1382ffb094566905a9bed1884a }, // 4867
    Multiplier { upper: 0xe75dbcf92fc213d824ae1d18a3602a3d, lower: 0xb8b2cb526b32b4208a41a2a9314f4076 }, // 4868
    Multiplier { upper: 0xb917ca60f301a979b6f1b0e082b354fe, lower: 0x2d5bd5db88f55ce6d5014eedc10c3391 }, // 4869
    Multiplier { upper: 0x9413084d8f348794925af3e6cef5dd98, lower: 0x244977e2d3f77d8577343f249a702941 }, // 4870
    Multiplier { upper: 0xeceb407c18540c20ea2b1fd7b189628d, lower: 0x06dbf3048658c8d58b86cb6dc3e6a868 }, // 4871
    Multiplier { upper: 0xbd89006346a9a34d88227fdfc13ab53d, lower: 0x9f165c039ead6d77a2d23c57cfebb9ed }, // 4872
    Multiplier { upper: 0x97a0cd1c3887b5d7a01b997fcdc890fe, lower: 0x18deb002e5578ac61bdb63797322fb24 }, // 4873
    Multiplier { upper: 0xf29ae1c6c0d922f299c5c266160db4c9, lower: 0xc1644cd16ef277a35fc56bf58504c506 }, // 4874
    Multiplier { upper: 0xc215816bcd7a825bae37ceb811a490a1, lower: 0x678370a78bf52c82b304565e0403d0d2 }, // 4875
    Multiplier { upper: 0x9b446789712eceafbe930bc67483a6e7, lower: 0x8602c0860990f0688f36ab7e699ca70e }, // 4876
    Multiplier { upper: 0xf86d727581e47de5fdb812d720d2a4a5, lower: 0xa3379a700f4e4d74185778ca42943e7d }, // 4877
    Multiplier { upper: 0xc6bdf52ace5064b7fe2cdbdf4d755084, lower: 0x8292e1f33f71d79013792d6e9ba9cb97 }, // 4878
    Multiplier { upper: 0x9efe5dbbd840509331bd7cb2a45dda03, lower: 0x9ba8b4c29927dfa675fa8abee2ee3c79 }, // 4879
    Multiplier { upper: 0xfe63c92c8d33b41eb5fbfab76d62f66c, lower: 0x2c4121375b72ff70bcc411316b16c728 }, // 4880
    Multiplier { upper: 0xcb830756d75c90189196622c57825ebc, lower: 0xf0341a92af8f32c0970340f455abd287 }, // 4881
    Multiplier { upper: 0xa2cf391245e3a67a0e11e82379351897, lower: 0x26901542260c289a126900c377bca86c }, // 4882
    Multiplier { upper: 0x823f60db6b1c852e71a7ece92dc413ac, lower: 0x1ed9aa9b51a353ae7520cd692c96ed23 }, // 4883
    Multiplier { upper: 0xd06567c5782da1e3e90cae41e2d352ac, lower: 0xfe2910f8829eec4a550148a84757e1d1 }, // 4884
    Multiplier { upper: 0xa6b786379357b4b6540a25018242a88a, lower: 0x64eda72d354bf03b77343a2039131b0e }, // 4885
    Multiplier { upper: 0x855f9e92dc462a2b766e84013502206e, lower: 0xb72485bdc43cc02f92902e802da8e272 }, // 4886
    Multiplier { upper: 0xd565ca8493a376abf0b0d335219d00b1, lower: 0x25073c62d39466b28419e400490e371c }, // 4887
    Multiplier { upper: 0xaab7d536dc82c5565a270f5db47d9a27, lower: 0x50d296b57610522869ae50003a71c5b0 }, // 4888
    Multiplier { upper: 0x889310f8b0689ddeae85a5e490647b52, lower: 0xa70edef791a6a820548b733361f49e27 }, // 4889
    Multiplier { upper: 0xda84e7f44d742fcab0d5d63a80a0c551, lower: 0x0b4afe58e90aa69a20df1eb89cba96a4 }, // 4890
    Multiplier { upper: 0xaed0b9903df68ca22711782ecd4d6aa7, lower: 0x3c3bfead873bb87b4d7f4bc6e3c87883 }, // 4891
    Multiplier { upper: 0x8bda2e0cfe5ed6e81f412cf23dd78885, lower: 0xc9c9988ad2962d2f7132a3058306c6cf }, // 4892
    Multiplier { upper: 0xdfc37ce196fe24a6986847e9fc8c0da2, lower: 0xdc75c0de1dbd1518b51dd1a26b3e0ae5 }, // 4893
    Multiplier { upper: 0xb302ca4e1264ea1ee0536cbb30700ae8, lower: 0xb05e33e4e4974413c417dae855cb3beb }, // 4894
    Multiplier { upper: 0x8f356ea4db83ee7f19dc56fc26c008ba, lower: 0x26b1c31d83ac367636797bed116f6322 }, // 4895
    Multiplier { upper: 0xe5224aa15f397d9829608b2d0accdac3, lower: 0x711c6b626c46bd89f0c25fe1b57f0503 }, // 4896
    Multiplier { upper: 0xb74ea21ab2946479bab3a28a6f0a489c, lower: 0x5a7d22b5236bcad4c09b7fe7c4659d9c }, // 4897
    Multiplier { upper: 0x92a54e7bc210506162294ed525a1d3b0, lower: 0x48641bc41c563bdd66e2ccb969eae47d }, // 4898
];

static MINVERSE: [MultInverse<u128>; 52] = [
    MultInverse { multiplier: 0x00000000000000000000000000000001, bound: 0xffffffffffffffffffffffffffffffff }, // 0
    MultInverse { multiplier: 0xcccccccccccccccccccccccccccccccd, bound: 0x33333333333333333333333333333333 }, // 1
    MultInverse { multiplier: 0x28f5c28f5c28f5c28f5c28f5c28f5c29, bound: 0x0a3d70a3d70a3d70a3d70a3d70a3d70a }, // 2
    MultInverse { multiplier: 0x6e978d4fdf3b645a1cac083126e978d5, bound: 0x020c49ba5e353f7ced916872b020c49b }, // 3
    MultInverse { multiplier: 0x495182a9930be0ded288ce703afb7e91, bound: 0x0068db8bac710cb295e9e1b089a02752 }, // 4
    MultInverse { multiplier: 0xdb76b3bb83cf2cf95d4e8fb00bcbe61d, bound: 0x0014f8b588e368f08461f9f01b866e43 }, // 5
    MultInverse { multiplier: 0xc57e23f24d8fd5cb790fb65668c26139, bound: 0x000431bde82d7b634dad31fcd24e160d }, // 6
    MultInverse { multiplier: 0xc1193a63a91cc45be5032477ae8d46a5, bound: 0x0000d6bf94d5e57a42bc3d3290760469 }, // 7
    MultInverse { multiplier: 0xf36b7213ee9f5a78c767074b22e90e21, bound: 0x00002af31dc4611873bf3f70834acdae }, // 8
    MultInverse { multiplier: 0x97157d372fb9787e8e47ce423a2e9c6d, bound: 0x0000089705f4136b4a59731680a88f89 }, // 9
    MultInverse { multiplier: 0x516ab2a4a32518194fa7f60d3ed61f49, bound: 0x000001b7cdfd9d7bdbab7d6ae6881cb5 }, // 10
    MultInverse { multiplier: 0x76aef08753d438050fee64690c913975, bound: 0x00000057f5ff85e592557f7bc7b4d28a }, // 11
    MultInverse { multiplier: 0xb156301b10c40b343662e0e1cf503eb1, bound: 0x000000119799812dea11197f27f0f6e8 }, // 12
    MultInverse { multiplier: 0x2377a3389cf4023da47a2cf9f6433fbd, bound: 0x0000000384b84d092ed0384ca19697c8 }, // 13
    MultInverse { multiplier: 0x0717ed71b8fd9a0c54186f653140a659, bound: 0x00000000b424dc35095cd80f538484c1 }, // 14
    MultInverse { multiplier: 0xce37fc49f1cc52027738164770402145, bound: 0x0000000024075f3dceac2b3643e74dc0 }, // 15
    MultInverse { multiplier: 0xf60b3275305c1066e4a4d1417cd9a041, bound: 0x000000000734aca5f6226f0ada6175f3 }, // 16
    MultInverse { multiplier: 0x6468a3b109ac0347c75429d9e5c5200d, bound: 0x000000000170ef54646d496892137dfd }, // 17
    MultInverse { multiplier: 0xe0e1ba569b88cd74c1773b91fac10669, bound: 0x000000000049c97747490eae839d7f99 }, // 18
    MultInverse { multiplier: 0x93605877b8b4f5e426b172506559ce15, bound: 0x00000000000ec1e4a7db69561a52b31e }, // 19
    MultInverse { multiplier: 0x83e011b18b576460d489e3a9addec2d1, bound: 0x000000000002f394219248446baa23d2 }, // 20
    MultInverse { multiplier: 0x4d9336bd1bde474690e860bb892c8d5d, bound: 0x000000000000971da05074da7beed3f6 }, // 21
    MultInverse { multiplier: 0xdc50a48c38c60e41502e79bf1b6f4f79, bound: 0x0000000000001e392010175ee5962a64 }, // 22
    MultInverse { multiplier: 0x9276874f3e8e02d9dcd618596be30fe5, bound: 0x000000000000060b6cd004ac94513bad }, // 23
    MultInverse { multiplier: 0xea17b4a972e933c52c2ad1ab7bfa3661, bound: 0x00000000000001357c299a88ea76a589 }, // 24
    MultInverse { multiplier: 0xfb9e575516fb70c108d55d224bfed7ad, bound: 0x000000000000003de5a1ebb4fbb1544e }, // 25
    MultInverse { multiplier: 0x658611776aff168d01c445d3a8cc9189, bound: 0x000000000000000c612062576589dda9 }, // 26
    MultInverse { multiplier: 0xe11ad04b156637b5cd27412a54f5b6b5, bound: 0x000000000000000279d346de4781f921 }, // 27
    MultInverse { multiplier: 0xf9d229a89de13e578f6e403baa978af1, bound: 0x00000000000000007ec3daf941806506 }, // 28
    MultInverse { multiplier: 0x31f6d521b92d0c77e97c733f221e4efd, bound: 0x0000000000000000195a5efea6b34767 }, // 29
    MultInverse { multiplier: 0xa397c439f1d5cf4b2eb27d7306d2dc99, bound: 0x0000000000000000051212ffbaf0a7e1 }, // 30
    MultInverse { multiplier: 0xed84c0d8639129756fbd4c4a34909285, bound: 0x000000000000000001039d66589687f9 }, // 31
    MultInverse { multiplier: 0x62b42691ad836eb116590f420a835081, bound: 0x00000000000000000033ec47ab514e65 }, // 32
    MultInverse { multiplier: 0x46f0d483891a49569e11cfda021a434d, bound: 0x0000000000000000000a6274bbdd0fad }, // 33
    MultInverse { multiplier: 0xa7c9c41a4e9edb77b936c32b9a0540a9, bound: 0x0000000000000000000213b0f25f6989 }, // 34
    MultInverse { multiplier: 0x87f52738761fc57e583e2708b8677355, bound: 0x000000000000000000006a5696dfe1e8 }, // 35
    MultInverse { multiplier: 0xe7fdd4a4e46cc11944d93b01be7b1711, bound: 0x00000000000000000000154484932d2e }, // 36
    MultInverse { multiplier: 0xc7ff90edc748f36b742b72338c7f049d, bound: 0x000000000000000000000440e750a2a2 }, // 37
    MultInverse { multiplier: 0x8e66502f8e41ca48b0d57d3d827fcdb9, bound: 0x0000000000000000000000d9c7dced53 }, // 38
    MultInverse { multiplier: 0x4fae100982d9f541bcf77f72b3b32925, bound: 0x00000000000000000000002b8e5f62aa }, // 39
    MultInverse { multiplier: 0xa98936684d5ecaa6bf64b316f0bd6ea1, bound: 0x000000000000000000000008b61313bb }, // 40
    MultInverse { multiplier: 0x21e83e14dc462887bfe0f09e3025e2ed, bound: 0x000000000000000000000001be03d0bf }, // 41
    MultInverse { multiplier: 0x6d2e72d0f8dad4e7f32cfcec700793c9, bound: 0x0000000000000000000000005933f68c }, // 42
    MultInverse { multiplier: 0x7c3c7d5cfe922a94ca3c3295b00183f5, bound: 0x00000000000000000000000011d7314f }, // 43
    MultInverse { multiplier: 0x18d8e5df661d3bb75ba5a3b78999e731, bound: 0x00000000000000000000000003917043 }, // 44
    MultInverse { multiplier: 0x9e91c793146c3f24abeded8b1b852e3d, bound: 0x00000000000000000000000000b6b00d }, // 45
    MultInverse { multiplier: 0xb9505b1d6a7c0ca0ef2f95e89f1aa2d9, bound: 0x0000000000000000000000000024899c }, // 46
    MultInverse { multiplier: 0x8b76789f7bb268ecfca31dfb530553c5, bound: 0x00000000000000000000000000074eb8 }, // 47
    MultInverse { multiplier: 0x1be47e864bf07b6298ed6c65770110c1, bound: 0x00000000000000000000000000017624 }, // 48
    MultInverse { multiplier: 0x6bfa7fb475967f13b82f7c144b00368d, bound: 0x00000000000000000000000000004ad4 }, // 49
    MultInverse { multiplier: 0xaf32198a7deae63724d64c040f000ae9, bound: 0x00000000000000000000000000000ef7 }, // 50
    MultInverse { multiplier: 0x230a051bb2c894716dc4759a69666895, bound: 0x000000000000000000000000000002fe }, // 51
];
