// NOTE: The following code was generated by "scripts/unicode.py", do not edit directly

#![allow(dead_code)]

pub(crate) mod decomposition {
    /// Version of the Unicode Character Database these rows were built from.
    pub(crate) const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

    /// Deepest chain of nested mappings found in `DECOMPOSITION_TABLE`.
    pub(crate) const MAX_NESTING: usize = 3;

    /// Longest single-level mapping found in `DECOMPOSITION_TABLE`.
    pub(crate) const MAX_MAPPING_LEN: usize = 18;

    // (packed utf-8, canonical combining class, mapping)
    pub(crate) static DECOMPOSITION_TABLE: &[(u32, u8, &[u32])] = &[
        (0xC2A0, 0, &[0x20]), // U+00A0
        (0xC2A8, 0, &[0x20, 0xCC88]), // U+00A8
        (0xC2AA, 0, &[0x61]), // U+00AA
        (0xC2AF, 0, &[0x20, 0xCC84]), // U+00AF
        (0xC2B2, 0, &[0x32]), // U+00B2
        (0xC2B3, 0, &[0x33]), // U+00B3
        (0xC2B4, 0, &[0x20, 0xCC81]), // U+00B4
        (0xC2B5, 0, &[0xCEBC]), // U+00B5
        (0xC2B8, 0, &[0x20, 0xCCA7]), // U+00B8
        (0xC2B9, 0, &[0x31]), // U+00B9
        (0xC2BA, 0, &[0x6F]), // U+00BA
        (0xC2BC, 0, &[0x31, 0xE28184, 0x34]), // U+00BC
        (0xC2BD, 0, &[0x31, 0xE28184, 0x32]), // U+00BD
        (0xC2BE, 0, &[0x33, 0xE28184, 0x34]), // U+00BE
        (0xC380, 0, &[0x41, 0xCC80]), // U+00C0
        (0xC381, 0, &[0x41, 0xCC81]), // U+00C1
        (0xC382, 0, &[0x41, 0xCC82]), // U+00C2
        (0xC383, 0, &[0x41, 0xCC83]), // U+00C3
        (0xC384, 0, &[0x41, 0xCC88]), // U+00C4
        (0xC385, 0, &[0x41, 0xCC8A]), // U+00C5
        (0xC387, 0, &[0x43, 0xCCA7]), // U+00C7
        (0xC388, 0, &[0x45, 0xCC80]), // U+00C8
        (0xC389, 0, &[0x45, 0xCC81]), // U+00C9
        (0xC38A, 0, &[0x45, 0xCC82]), // U+00CA
        (0xC38B, 0, &[0x45, 0xCC88]), // U+00CB
        (0xC38C, 0, &[0x49, 0xCC80]), // U+00CC
        (0xC38D, 0, &[0x49, 0xCC81]), // U+00CD
        (0xC38E, 0, &[0x49, 0xCC82]), // U+00CE
        (0xC38F, 0, &[0x49, 0xCC88]), // U+00CF
        (0xC391, 0, &[0x4E, 0xCC83]), // U+00D1
        (0xC392, 0, &[0x4F, 0xCC80]), // U+00D2
        (0xC393, 0, &[0x4F, 0xCC81]), // U+00D3
        (0xC394, 0, &[0x4F, 0xCC82]), // U+00D4
        (0xC395, 0, &[0x4F, 0xCC83]), // U+00D5
        (0xC396, 0, &[0x4F, 0xCC88]), // U+00D6
        (0xC399, 0, &[0x55, 0xCC80]), // U+00D9
        (0xC39A, 0, &[0x55, 0xCC81]), // U+00DA
        (0xC39B, 0, &[0x55, 0xCC82]), // U+00DB
        (0xC39C, 0, &[0x55, 0xCC88]), // U+00DC
        (0xC39D, 0, &[0x59, 0xCC81]), // U+00DD
        (0xC3A0, 0, &[0x61, 0xCC80]), // U+00E0
        (0xC3A1, 0, &[0x61, 0xCC81]), // U+00E1
        (0xC3A2, 0, &[0x61, 0xCC82]), // U+00E2
        (0xC3A3, 0, &[0x61, 0xCC83]), // U+00E3
        (0xC3A4, 0, &[0x61, 0xCC88]), // U+00E4
        (0xC3A5, 0, &[0x61, 0xCC8A]), // U+00E5
        (0xC3A7, 0, &[0x63, 0xCCA7]), // U+00E7
        (0xC3A8, 0, &[0x65, 0xCC80]), // U+00E8
        (0xC3A9, 0, &[0x65, 0xCC81]), // U+00E9
        (0xC3AA, 0, &[0x65, 0xCC82]), // U+00EA
        (0xC3AB, 0, &[0x65, 0xCC88]), // U+00EB
        (0xC3AC, 0, &[0x69, 0xCC80]), // U+00EC
        (0xC3AD, 0, &[0x69, 0xCC81]), // U+00ED
        (0xC3AE, 0, &[0x69, 0xCC82]), // U+00EE
        (0xC3AF, 0, &[0x69, 0xCC88]), // U+00EF
        (0xC3B1, 0, &[0x6E, 0xCC83]), // U+00F1
        (0xC3B2, 0, &[0x6F, 0xCC80]), // U+00F2
        (0xC3B3, 0, &[0x6F, 0xCC81]), // U+00F3
        (0xC3B4, 0, &[0x6F, 0xCC82]), // U+00F4
        (0xC3B5, 0, &[0x6F, 0xCC83]), // U+00F5
        (0xC3B6, 0, &[0x6F, 0xCC88]), // U+00F6
        (0xC3B9, 0, &[0x75, 0xCC80]), // U+00F9
        (0xC3BA, 0, &[0x75, 0xCC81]), // U+00FA
        (0xC3BB, 0, &[0x75, 0xCC82]), // U+00FB
        (0xC3BC, 0, &[0x75, 0xCC88]), // U+00FC
        (0xC3BD, 0, &[0x79, 0xCC81]), // U+00FD
        (0xC3BF, 0, &[0x79, 0xCC88]), // U+00FF
        (0xC480, 0, &[0x41, 0xCC84]), // U+0100
        (0xC481, 0, &[0x61, 0xCC84]), // U+0101
        (0xC482, 0, &[0x41, 0xCC86]), // U+0102
        (0xC483, 0, &[0x61, 0xCC86]), // U+0103
        (0xC484, 0, &[0x41, 0xCCA8]), // U+0104
        (0xC485, 0, &[0x61, 0xCCA8]), // U+0105
        (0xC486, 0, &[0x43, 0xCC81]), // U+0106
        (0xC487, 0, &[0x63, 0xCC81]), // U+0107
        (0xC488, 0, &[0x43, 0xCC82]), // U+0108
        (0xC489, 0, &[0x63, 0xCC82]), // U+0109
        (0xC48A, 0, &[0x43, 0xCC87]), // U+010A
        (0xC48B, 0, &[0x63, 0xCC87]), // U+010B
        (0xC48C, 0, &[0x43, 0xCC8C]), // U+010C
        (0xC48D, 0, &[0x63, 0xCC8C]), // U+010D
        (0xC48E, 0, &[0x44, 0xCC8C]), // U+010E
        (0xC48F, 0, &[0x64, 0xCC8C]), // U+010F
        (0xC492, 0, &[0x45, 0xCC84]), // U+0112
        (0xC493, 0, &[0x65, 0xCC84]), // U+0113
        (0xC494, 0, &[0x45, 0xCC86]), // U+0114
        (0xC495, 0, &[0x65, 0xCC86]), // U+0115
        (0xC496, 0, &[0x45, 0xCC87]), // U+0116
        (0xC497, 0, &[0x65, 0xCC87]), // U+0117
        (0xC498, 0, &[0x45, 0xCCA8]), // U+0118
        (0xC499, 0, &[0x65, 0xCCA8]), // U+0119
        (0xC49A, 0, &[0x45, 0xCC8C]), // U+011A
        (0xC49B, 0, &[0x65, 0xCC8C]), // U+011B
        (0xC49C, 0, &[0x47, 0xCC82]), // U+011C
        (0xC49D, 0, &[0x67, 0xCC82]), // U+011D
        (0xC49E, 0, &[0x47, 0xCC86]), // U+011E
        (0xC49F, 0, &[0x67, 0xCC86]), // U+011F
        (0xC4A0, 0, &[0x47, 0xCC87]), // U+0120
        (0xC4A1, 0, &[0x67, 0xCC87]), // U+0121
        (0xC4A2, 0, &[0x47, 0xCCA7]), // U+0122
        (0xC4A3, 0, &[0x67, 0xCCA7]), // U+0123
        (0xC4A4, 0, &[0x48, 0xCC82]), // U+0124
        (0xC4A5, 0, &[0x68, 0xCC82]), // U+0125
        (0xC4A8, 0, &[0x49, 0xCC83]), // U+0128
        (0xC4A9, 0, &[0x69, 0xCC83]), // U+0129
        (0xC4AA, 0, &[0x49, 0xCC84]), // U+012A
        (0xC4AB, 0, &[0x69, 0xCC84]), // U+012B
        (0xC4AC, 0, &[0x49, 0xCC86]), // U+012C
        (0xC4AD, 0, &[0x69, 0xCC86]), // U+012D
        (0xC4AE, 0, &[0x49, 0xCCA8]), // U+012E
        (0xC4AF, 0, &[0x69, 0xCCA8]), // U+012F
        (0xC4B0, 0, &[0x49, 0xCC87]), // U+0130
        (0xC4B2, 0, &[0x49, 0x4A]), // U+0132
        (0xC4B3, 0, &[0x69, 0x6A]), // U+0133
        (0xC4B4, 0, &[0x4A, 0xCC82]), // U+0134
        (0xC4B5, 0, &[0x6A, 0xCC82]), // U+0135
        (0xC4B6, 0, &[0x4B, 0xCCA7]), // U+0136
        (0xC4B7, 0, &[0x6B, 0xCCA7]), // U+0137
        (0xC4B9, 0, &[0x4C, 0xCC81]), // U+0139
        (0xC4BA, 0, &[0x6C, 0xCC81]), // U+013A
        (0xC4BB, 0, &[0x4C, 0xCCA7]), // U+013B
        (0xC4BC, 0, &[0x6C, 0xCCA7]), // U+013C
        (0xC4BD, 0, &[0x4C, 0xCC8C]), // U+013D
        (0xC4BE, 0, &[0x6C, 0xCC8C]), // U+013E
        (0xC4BF, 0, &[0x4C, 0xC2B7]), // U+013F
        (0xC580, 0, &[0x6C, 0xC2B7]), // U+0140
        (0xC583, 0, &[0x4E, 0xCC81]), // U+0143
        (0xC584, 0, &[0x6E, 0xCC81]), // U+0144
        (0xC585, 0, &[0x4E, 0xCCA7]), // U+0145
        (0xC586, 0, &[0x6E, 0xCCA7]), // U+0146
        (0xC587, 0, &[0x4E, 0xCC8C]), // U+0147
        (0xC588, 0, &[0x6E, 0xCC8C]), // U+0148
        (0xC589, 0, &[0xCABC, 0x6E]), // U+0149
        (0xC58C, 0, &[0x4F, 0xCC84]), // U+014C
        (0xC58D, 0, &[0x6F, 0xCC84]), // U+014D
        (0xC58E, 0, &[0x4F, 0xCC86]), // U+014E
        (0xC58F, 0, &[0x6F, 0xCC86]), // U+014F
        (0xC590, 0, &[0x4F, 0xCC8B]), // U+0150
        (0xC591, 0, &[0x6F, 0xCC8B]), // U+0151
        (0xC594, 0, &[0x52, 0xCC81]), // U+0154
        (0xC595, 0, &[0x72, 0xCC81]), // U+0155
        (0xC596, 0, &[0x52, 0xCCA7]), // U+0156
        (0xC597, 0, &[0x72, 0xCCA7]), // U+0157
        (0xC598, 0, &[0x52, 0xCC8C]), // U+0158
        (0xC599, 0, &[0x72, 0xCC8C]), // U+0159
        (0xC59A, 0, &[0x53, 0xCC81]), // U+015A
        (0xC59B, 0, &[0x73, 0xCC81]), // U+015B
        (0xC59C, 0, &[0x53, 0xCC82]), // U+015C
        (0xC59D, 0, &[0x73, 0xCC82]), // U+015D
        (0xC59E, 0, &[0x53, 0xCCA7]), // U+015E
        (0xC59F, 0, &[0x73, 0xCCA7]), // U+015F
        (0xC5A0, 0, &[0x53, 0xCC8C]), // U+0160
        (0xC5A1, 0, &[0x73, 0xCC8C]), // U+0161
        (0xC5A2, 0, &[0x54, 0xCCA7]), // U+0162
        (0xC5A3, 0, &[0x74, 0xCCA7]), // U+0163
        (0xC5A4, 0, &[0x54, 0xCC8C]), // U+0164
        (0xC5A5, 0, &[0x74, 0xCC8C]), // U+0165
        (0xC5A8, 0, &[0x55, 0xCC83]), // U+0168
        (0xC5A9, 0, &[0x75, 0xCC83]), // U+0169
        (0xC5AA, 0, &[0x55, 0xCC84]), // U+016A
        (0xC5AB, 0, &[0x75, 0xCC84]), // U+016B
        (0xC5AC, 0, &[0x55, 0xCC86]), // U+016C
        (0xC5AD, 0, &[0x75, 0xCC86]), // U+016D
        (0xC5AE, 0, &[0x55, 0xCC8A]), // U+016E
        (0xC5AF, 0, &[0x75, 0xCC8A]), // U+016F
        (0xC5B0, 0, &[0x55, 0xCC8B]), // U+0170
        (0xC5B1, 0, &[0x75, 0xCC8B]), // U+0171
        (0xC5B2, 0, &[0x55, 0xCCA8]), // U+0172
        (0xC5B3, 0, &[0x75, 0xCCA8]), // U+0173
        (0xC5B4, 0, &[0x57, 0xCC82]), // U+0174
        (0xC5B5, 0, &[0x77, 0xCC82]), // U+0175
        (0xC5B6, 0, &[0x59, 0xCC82]), // U+0176
        (0xC5B7, 0, &[0x79, 0xCC82]), // U+0177
        (0xC5B8, 0, &[0x59, 0xCC88]), // U+0178
        (0xC5B9, 0, &[0x5A, 0xCC81]), // U+0179
        (0xC5BA, 0, &[0x7A, 0xCC81]), // U+017A
        (0xC5BB, 0, &[0x5A, 0xCC87]), // U+017B
        (0xC5BC, 0, &[0x7A, 0xCC87]), // U+017C
        (0xC5BD, 0, &[0x5A, 0xCC8C]), // U+017D
        (0xC5BE, 0, &[0x7A, 0xCC8C]), // U+017E
        (0xC5BF, 0, &[0x73]), // U+017F
        (0xC6A0, 0, &[0x4F, 0xCC9B]), // U+01A0
        (0xC6A1, 0, &[0x6F, 0xCC9B]), // U+01A1
        (0xC6AF, 0, &[0x55, 0xCC9B]), // U+01AF
        (0xC6B0, 0, &[0x75, 0xCC9B]), // U+01B0
        (0xC784, 0, &[0x44, 0xC5BD]), // U+01C4
        (0xC785, 0, &[0x44, 0xC5BE]), // U+01C5
        (0xC786, 0, &[0x64, 0xC5BE]), // U+01C6
        (0xC787, 0, &[0x4C, 0x4A]), // U+01C7
        (0xC788, 0, &[0x4C, 0x6A]), // U+01C8
        (0xC789, 0, &[0x6C, 0x6A]), // U+01C9
        (0xC78A, 0, &[0x4E, 0x4A]), // U+01CA
        (0xC78B, 0, &[0x4E, 0x6A]), // U+01CB
        (0xC78C, 0, &[0x6E, 0x6A]), // U+01CC
        (0xC78D, 0, &[0x41, 0xCC8C]), // U+01CD
        (0xC78E, 0, &[0x61, 0xCC8C]), // U+01CE
        (0xC78F, 0, &[0x49, 0xCC8C]), // U+01CF
        (0xC790, 0, &[0x69, 0xCC8C]), // U+01D0
        (0xC791, 0, &[0x4F, 0xCC8C]), // U+01D1
        (0xC792, 0, &[0x6F, 0xCC8C]), // U+01D2
        (0xC793, 0, &[0x55, 0xCC8C]), // U+01D3
        (0xC794, 0, &[0x75, 0xCC8C]), // U+01D4
        (0xC795, 0, &[0xC39C, 0xCC84]), // U+01D5
        (0xC796, 0, &[0xC3BC, 0xCC84]), // U+01D6
        (0xC797, 0, &[0xC39C, 0xCC81]), // U+01D7
        (0xC798, 0, &[0xC3BC, 0xCC81]), // U+01D8
        (0xC799, 0, &[0xC39C, 0xCC8C]), // U+01D9
        (0xC79A, 0, &[0xC3BC, 0xCC8C]), // U+01DA
        (0xC79B, 0, &[0xC39C, 0xCC80]), // U+01DB
        (0xC79C, 0, &[0xC3BC, 0xCC80]), // U+01DC
        (0xC79E, 0, &[0xC384, 0xCC84]), // U+01DE
        (0xC79F, 0, &[0xC3A4, 0xCC84]), // U+01DF
        (0xC7A0, 0, &[0xC8A6, 0xCC84]), // U+01E0
        (0xC7A1, 0, &[0xC8A7, 0xCC84]), // U+01E1
        (0xC7A2, 0, &[0xC386, 0xCC84]), // U+01E2
        (0xC7A3, 0, &[0xC3A6, 0xCC84]), // U+01E3
        (0xC7A6, 0, &[0x47, 0xCC8C]), // U+01E6
        (0xC7A7, 0, &[0x67, 0xCC8C]), // U+01E7
        (0xC7A8, 0, &[0x4B, 0xCC8C]), // U+01E8
        (0xC7A9, 0, &[0x6B, 0xCC8C]), // U+01E9
        (0xC7AA, 0, &[0x4F, 0xCCA8]), // U+01EA
        (0xC7AB, 0, &[0x6F, 0xCCA8]), // U+01EB
        (0xC7AC, 0, &[0xC7AA, 0xCC84]), // U+01EC
        (0xC7AD, 0, &[0xC7AB, 0xCC84]), // U+01ED
        (0xC7AE, 0, &[0xC6B7, 0xCC8C]), // U+01EE
        (0xC7AF, 0, &[0xCA92, 0xCC8C]), // U+01EF
        (0xC7B0, 0, &[0x6A, 0xCC8C]), // U+01F0
        (0xC7B1, 0, &[0x44, 0x5A]), // U+01F1
        (0xC7B2, 0, &[0x44, 0x7A]), // U+01F2
        (0xC7B3, 0, &[0x64, 0x7A]), // U+01F3
        (0xC7B4, 0, &[0x47, 0xCC81]), // U+01F4
        (0xC7B5, 0, &[0x67, 0xCC81]), // U+01F5
        (0xC7B8, 0, &[0x4E, 0xCC80]), // U+01F8
        (0xC7B9, 0, &[0x6E, 0xCC80]), // U+01F9
        (0xC7BA, 0, &[0xC385, 0xCC81]), // U+01FA
        (0xC7BB, 0, &[0xC3A5, 0xCC81]), // U+01FB
        (0xC7BC, 0, &[0xC386, 0xCC81]), // U+01FC
        (0xC7BD, 0, &[0xC3A6, 0xCC81]), // U+01FD
        (0xC7BE, 0, &[0xC398, 0xCC81]), // U+01FE
        (0xC7BF, 0, &[0xC3B8, 0xCC81]), // U+01FF
        (0xC880, 0, &[0x41, 0xCC8F]), // U+0200
        (0xC881, 0, &[0x61, 0xCC8F]), // U+0201
        (0xC882, 0, &[0x41, 0xCC91]), // U+0202
        (0xC883, 0, &[0x61, 0xCC91]), // U+0203
        (0xC884, 0, &[0x45, 0xCC8F]), // U+0204
        (0xC885, 0, &[0x65, 0xCC8F]), // U+0205
        (0xC886, 0, &[0x45, 0xCC91]), // U+0206
        (0xC887, 0, &[0x65, 0xCC91]), // U+0207
        (0xC888, 0, &[0x49, 0xCC8F]), // U+0208
        (0xC889, 0, &[0x69, 0xCC8F]), // U+0209
        (0xC88A, 0, &[0x49, 0xCC91]), // U+020A
        (0xC88B, 0, &[0x69, 0xCC91]), // U+020B
        (0xC88C, 0, &[0x4F, 0xCC8F]), // U+020C
        (0xC88D, 0, &[0x6F, 0xCC8F]), // U+020D
        (0xC88E, 0, &[0x4F, 0xCC91]), // U+020E
        (0xC88F, 0, &[0x6F, 0xCC91]), // U+020F
        (0xC890, 0, &[0x52, 0xCC8F]), // U+0210
        (0xC891, 0, &[0x72, 0xCC8F]), // U+0211
        (0xC892, 0, &[0x52, 0xCC91]), // U+0212
        (0xC893, 0, &[0x72, 0xCC91]), // U+0213
        (0xC894, 0, &[0x55, 0xCC8F]), // U+0214
        (0xC895, 0, &[0x75, 0xCC8F]), // U+0215
        (0xC896, 0, &[0x55, 0xCC91]), // U+0216
        (0xC897, 0, &[0x75, 0xCC91]), // U+0217
        (0xC898, 0, &[0x53, 0xCCA6]), // U+0218
        (0xC899, 0, &[0x73, 0xCCA6]), // U+0219
        (0xC89A, 0, &[0x54, 0xCCA6]), // U+021A
        (0xC89B, 0, &[0x74, 0xCCA6]), // U+021B
        (0xC89E, 0, &[0x48, 0xCC8C]), // U+021E
        (0xC89F, 0, &[0x68, 0xCC8C]), // U+021F
        (0xC8A6, 0, &[0x41, 0xCC87]), // U+0226
        (0xC8A7, 0, &[0x61, 0xCC87]), // U+0227
        (0xC8A8, 0, &[0x45, 0xCCA7]), // U+0228
        (0xC8A9, 0, &[0x65, 0xCCA7]), // U+0229
        (0xC8AA, 0, &[0xC396, 0xCC84]), // U+022A
        (0xC8AB, 0, &[0xC3B6, 0xCC84]), // U+022B
        (0xC8AC, 0, &[0xC395, 0xCC84]), // U+022C
        (0xC8AD, 0, &[0xC3B5, 0xCC84]), // U+022D
        (0xC8AE, 0, &[0x4F, 0xCC87]), // U+022E
        (0xC8AF, 0, &[0x6F, 0xCC87]), // U+022F
        (0xC8B0, 0, &[0xC8AE, 0xCC84]), // U+0230
        (0xC8B1, 0, &[0xC8AF, 0xCC84]), // U+0231
        (0xC8B2, 0, &[0x59, 0xCC84]), // U+0232
        (0xC8B3, 0, &[0x79, 0xCC84]), // U+0233
        (0xCAB0, 0, &[0x68]), // U+02B0
        (0xCAB1, 0, &[0xC9A6]), // U+02B1
        (0xCAB2, 0, &[0x6A]), // U+02B2
        (0xCAB3, 0, &[0x72]), // U+02B3
        (0xCAB4, 0, &[0xC9B9]), // U+02B4
        (0xCAB5, 0, &[0xC9BB]), // U+02B5
        (0xCAB6, 0, &[0xCA81]), // U+02B6
        (0xCAB7, 0, &[0x77]), // U+02B7
        (0xCAB8, 0, &[0x79]), // U+02B8
        (0xCB98, 0, &[0x20, 0xCC86]), // U+02D8
        (0xCB99, 0, &[0x20, 0xCC87]), // U+02D9
        (0xCB9A, 0, &[0x20, 0xCC8A]), // U+02DA
        (0xCB9B, 0, &[0x20, 0xCCA8]), // U+02DB
        (0xCB9C, 0, &[0x20, 0xCC83]), // U+02DC
        (0xCB9D, 0, &[0x20, 0xCC8B]), // U+02DD
        (0xCBA0, 0, &[0xC9A3]), // U+02E0
        (0xCBA1, 0, &[0x6C]), // U+02E1
        (0xCBA2, 0, &[0x73]), // U+02E2
        (0xCBA3, 0, &[0x78]), // U+02E3
        (0xCBA4, 0, &[0xCA95]), // U+02E4
        (0xCC80, 230, &[]), // U+0300
        (0xCC81, 230, &[]), // U+0301
        (0xCC82, 230, &[]), // U+0302
        (0xCC83, 230, &[]), // U+0303
        (0xCC84, 230, &[]), // U+0304
        (0xCC85, 230, &[]), // U+0305
        (0xCC86, 230, &[]), // U+0306
        (0xCC87, 230, &[]), // U+0307
        (0xCC88, 230, &[]), // U+0308
        (0xCC89, 230, &[]), // U+0309
        (0xCC8A, 230, &[]), // U+030A
        (0xCC8B, 230, &[]), // U+030B
        (0xCC8C, 230, &[]), // U+030C
        (0xCC8D, 230, &[]), // U+030D
        (0xCC8E, 230, &[]), // U+030E
        (0xCC8F, 230, &[]), // U+030F
        (0xCC90, 230, &[]), // U+0310
        (0xCC91, 230, &[]), // U+0311
        (0xCC92, 230, &[]), // U+0312
        (0xCC93, 230, &[]), // U+0313
        (0xCC94, 230, &[]), // U+0314
        (0xCC95, 232, &[]), // U+0315
        (0xCC96, 220, &[]), // U+0316
        (0xCC97, 220, &[]), // U+0317
        (0xCC98, 220, &[]), // U+0318
        (0xCC99, 220, &[]), // U+0319
        (0xCC9A, 232, &[]), // U+031A
        (0xCC9B, 216, &[]), // U+031B
        (0xCC9C, 220, &[]), // U+031C
        (0xCC9D, 220, &[]), // U+031D
        (0xCC9E, 220, &[]), // U+031E
        (0xCC9F, 220, &[]), // U+031F
        (0xCCA0, 220, &[]), // U+0320
        (0xCCA1, 202, &[]), // U+0321
        (0xCCA2, 202, &[]), // U+0322
        (0xCCA3, 220, &[]), // U+0323
        (0xCCA4, 220, &[]), // U+0324
        (0xCCA5, 220, &[]), // U+0325
        (0xCCA6, 220, &[]), // U+0326
        (0xCCA7, 202, &[]), // U+0327
        (0xCCA8, 202, &[]), // U+0328
        (0xCCA9, 220, &[]), // U+0329
        (0xCCAA, 220, &[]), // U+032A
        (0xCCAB, 220, &[]), // U+032B
        (0xCCAC, 220, &[]), // U+032C
        (0xCCAD, 220, &[]), // U+032D
        (0xCCAE, 220, &[]), // U+032E
        (0xCCAF, 220, &[]), // U+032F
        (0xCCB0, 220, &[]), // U+0330
        (0xCCB1, 220, &[]), // U+0331
        (0xCCB2, 220, &[]), // U+0332
        (0xCCB3, 220, &[]), // U+0333
        (0xCCB4, 1, &[]), // U+0334
        (0xCCB5, 1, &[]), // U+0335
        (0xCCB6, 1, &[]), // U+0336
        (0xCCB7, 1, &[]), // U+0337
        (0xCCB8, 1, &[]), // U+0338
        (0xCCB9, 220, &[]), // U+0339
        (0xCCBA, 220, &[]), // U+033A
        (0xCCBB, 220, &[]), // U+033B
        (0xCCBC, 220, &[]), // U+033C
        (0xCCBD, 230, &[]), // U+033D
        (0xCCBE, 230, &[]), // U+033E
        (0xCCBF, 230, &[]), // U+033F
        (0xCD80, 230, &[0xCC80]), // U+0340
        (0xCD81, 230, &[0xCC81]), // U+0341
        (0xCD82, 230, &[]), // U+0342
        (0xCD83, 230, &[0xCC93]), // U+0343
        (0xCD84, 230, &[0xCC88, 0xCC81]), // U+0344
        (0xCD85, 240, &[]), // U+0345
        (0xCD86, 230, &[]), // U+0346
        (0xCD87, 220, &[]), // U+0347
        (0xCD88, 220, &[]), // U+0348
        (0xCD89, 220, &[]), // U+0349
        (0xCD8A, 230, &[]), // U+034A
        (0xCD8B, 230, &[]), // U+034B
        (0xCD8C, 230, &[]), // U+034C
        (0xCD8D, 220, &[]), // U+034D
        (0xCD8E, 220, &[]), // U+034E
        (0xCD90, 230, &[]), // U+0350
        (0xCD91, 230, &[]), // U+0351
        (0xCD92, 230, &[]), // U+0352
        (0xCD93, 220, &[]), // U+0353
        (0xCD94, 220, &[]), // U+0354
        (0xCD95, 220, &[]), // U+0355
        (0xCD96, 220, &[]), // U+0356
        (0xCD97, 230, &[]), // U+0357
        (0xCD98, 232, &[]), // U+0358
        (0xCD99, 220, &[]), // U+0359
        (0xCD9A, 220, &[]), // U+035A
        (0xCD9B, 230, &[]), // U+035B
        (0xCD9C, 233, &[]), // U+035C
        (0xCD9D, 234, &[]), // U+035D
        (0xCD9E, 234, &[]), // U+035E
        (0xCD9F, 233, &[]), // U+035F
        (0xCDA0, 234, &[]), // U+0360
        (0xCDA1, 234, &[]), // U+0361
        (0xCDA2, 233, &[]), // U+0362
        (0xCDA3, 230, &[]), // U+0363
        (0xCDA4, 230, &[]), // U+0364
        (0xCDA5, 230, &[]), // U+0365
        (0xCDA6, 230, &[]), // U+0366
        (0xCDA7, 230, &[]), // U+0367
        (0xCDA8, 230, &[]), // U+0368
        (0xCDA9, 230, &[]), // U+0369
        (0xCDAA, 230, &[]), // U+036A
        (0xCDAB, 230, &[]), // U+036B
        (0xCDAC, 230, &[]), // U+036C
        (0xCDAD, 230, &[]), // U+036D
        (0xCDAE, 230, &[]), // U+036E
        (0xCDAF, 230, &[]), // U+036F
        (0xCDB4, 0, &[0xCAB9]), // U+0374
        (0xCDBA, 0, &[0x20, 0xCD85]), // U+037A
        (0xCDBE, 0, &[0x3B]), // U+037E
        (0xCE84, 0, &[0x20, 0xCC81]), // U+0384
        (0xCE85, 0, &[0xC2A8, 0xCC81]), // U+0385
        (0xCE86, 0, &[0xCE91, 0xCC81]), // U+0386
        (0xCE87, 0, &[0xC2B7]), // U+0387
        (0xCE88, 0, &[0xCE95, 0xCC81]), // U+0388
        (0xCE89, 0, &[0xCE97, 0xCC81]), // U+0389
        (0xCE8A, 0, &[0xCE99, 0xCC81]), // U+038A
        (0xCE8C, 0, &[0xCE9F, 0xCC81]), // U+038C
        (0xCE8E, 0, &[0xCEA5, 0xCC81]), // U+038E
        (0xCE8F, 0, &[0xCEA9, 0xCC81]), // U+038F
        (0xCE90, 0, &[0xCF8A, 0xCC81]), // U+0390
        (0xCEAA, 0, &[0xCE99, 0xCC88]), // U+03AA
        (0xCEAB, 0, &[0xCEA5, 0xCC88]), // U+03AB
        (0xCEAC, 0, &[0xCEB1, 0xCC81]), // U+03AC
        (0xCEAD, 0, &[0xCEB5, 0xCC81]), // U+03AD
        (0xCEAE, 0, &[0xCEB7, 0xCC81]), // U+03AE
        (0xCEAF, 0, &[0xCEB9, 0xCC81]), // U+03AF
        (0xCEB0, 0, &[0xCF8B, 0xCC81]), // U+03B0
        (0xCF8A, 0, &[0xCEB9, 0xCC88]), // U+03CA
        (0xCF8B, 0, &[0xCF85, 0xCC88]), // U+03CB
        (0xCF8C, 0, &[0xCEBF, 0xCC81]), // U+03CC
        (0xCF8D, 0, &[0xCF85, 0xCC81]), // U+03CD
        (0xCF8E, 0, &[0xCF89, 0xCC81]), // U+03CE
        (0xCF90, 0, &[0xCEB2]), // U+03D0
        (0xCF91, 0, &[0xCEB8]), // U+03D1
        (0xCF92, 0, &[0xCEA5]), // U+03D2
        (0xCF93, 0, &[0xCF92, 0xCC81]), // U+03D3
        (0xCF94, 0, &[0xCF92, 0xCC88]), // U+03D4
        (0xCF95, 0, &[0xCF86]), // U+03D5
        (0xCF96, 0, &[0xCF80]), // U+03D6
        (0xCFB0, 0, &[0xCEBA]), // U+03F0
        (0xCFB1, 0, &[0xCF81]), // U+03F1
        (0xCFB2, 0, &[0xCF82]), // U+03F2
        (0xCFB4, 0, &[0xCE98]), // U+03F4
        (0xCFB5, 0, &[0xCEB5]), // U+03F5
        (0xCFB9, 0, &[0xCEA3]), // U+03F9
        (0xD080, 0, &[0xD095, 0xCC80]), // U+0400
        (0xD081, 0, &[0xD095, 0xCC88]), // U+0401
        (0xD083, 0, &[0xD093, 0xCC81]), // U+0403
        (0xD087, 0, &[0xD086, 0xCC88]), // U+0407
        (0xD08C, 0, &[0xD09A, 0xCC81]), // U+040C
        (0xD08D, 0, &[0xD098, 0xCC80]), // U+040D
        (0xD08E, 0, &[0xD0A3, 0xCC86]), // U+040E
        (0xD099, 0, &[0xD098, 0xCC86]), // U+0419
        (0xD0B9, 0, &[0xD0B8, 0xCC86]), // U+0439
        (0xD190, 0, &[0xD0B5, 0xCC80]), // U+0450
        (0xD191, 0, &[0xD0B5, 0xCC88]), // U+0451
        (0xD193, 0, &[0xD0B3, 0xCC81]), // U+0453
        (0xD197, 0, &[0xD196, 0xCC88]), // U+0457
        (0xD19C, 0, &[0xD0BA, 0xCC81]), // U+045C
        (0xD19D, 0, &[0xD0B8, 0xCC80]), // U+045D
        (0xD19E, 0, &[0xD183, 0xCC86]), // U+045E
        (0xD1B6, 0, &[0xD1B4, 0xCC8F]), // U+0476
        (0xD1B7, 0, &[0xD1B5, 0xCC8F]), // U+0477
        (0xD283, 230, &[]), // U+0483
        (0xD284, 230, &[]), // U+0484
        (0xD285, 230, &[]), // U+0485
        (0xD286, 230, &[]), // U+0486
        (0xD287, 230, &[]), // U+0487
        (0xD381, 0, &[0xD096, 0xCC86]), // U+04C1
        (0xD382, 0, &[0xD0B6, 0xCC86]), // U+04C2
        (0xD390, 0, &[0xD090, 0xCC86]), // U+04D0
        (0xD391, 0, &[0xD0B0, 0xCC86]), // U+04D1
        (0xD392, 0, &[0xD090, 0xCC88]), // U+04D2
        (0xD393, 0, &[0xD0B0, 0xCC88]), // U+04D3
        (0xD396, 0, &[0xD095, 0xCC86]), // U+04D6
        (0xD397, 0, &[0xD0B5, 0xCC86]), // U+04D7
        (0xD39A, 0, &[0xD398, 0xCC88]), // U+04DA
        (0xD39B, 0, &[0xD399, 0xCC88]), // U+04DB
        (0xD39C, 0, &[0xD096, 0xCC88]), // U+04DC
        (0xD39D, 0, &[0xD0B6, 0xCC88]), // U+04DD
        (0xD39E, 0, &[0xD097, 0xCC88]), // U+04DE
        (0xD39F, 0, &[0xD0B7, 0xCC88]), // U+04DF
        (0xD3A2, 0, &[0xD098, 0xCC84]), // U+04E2
        (0xD3A3, 0, &[0xD0B8, 0xCC84]), // U+04E3
        (0xD3A4, 0, &[0xD098, 0xCC88]), // U+04E4
        (0xD3A5, 0, &[0xD0B8, 0xCC88]), // U+04E5
        (0xD3A6, 0, &[0xD09E, 0xCC88]), // U+04E6
        (0xD3A7, 0, &[0xD0BE, 0xCC88]), // U+04E7
        (0xD3AA, 0, &[0xD3A8, 0xCC88]), // U+04EA
        (0xD3AB, 0, &[0xD3A9, 0xCC88]), // U+04EB
        (0xD3AC, 0, &[0xD0AD, 0xCC88]), // U+04EC
        (0xD3AD, 0, &[0xD18D, 0xCC88]), // U+04ED
        (0xD3AE, 0, &[0xD0A3, 0xCC84]), // U+04EE
        (0xD3AF, 0, &[0xD183, 0xCC84]), // U+04EF
        (0xD3B0, 0, &[0xD0A3, 0xCC88]), // U+04F0
        (0xD3B1, 0, &[0xD183, 0xCC88]), // U+04F1
        (0xD3B2, 0, &[0xD0A3, 0xCC8B]), // U+04F2
        (0xD3B3, 0, &[0xD183, 0xCC8B]), // U+04F3
        (0xD3B4, 0, &[0xD0A7, 0xCC88]), // U+04F4
        (0xD3B5, 0, &[0xD187, 0xCC88]), // U+04F5
        (0xD3B8, 0, &[0xD0AB, 0xCC88]), // U+04F8
        (0xD3B9, 0, &[0xD18B, 0xCC88]), // U+04F9
        (0xD687, 0, &[0xD5A5, 0xD682]), // U+0587
        (0xD691, 220, &[]), // U+0591
        (0xD692, 230, &[]), // U+0592
        (0xD693, 230, &[]), // U+0593
        (0xD694, 230, &[]), // U+0594
        (0xD695, 230, &[]), // U+0595
        (0xD696, 220, &[]), // U+0596
        (0xD697, 230, &[]), // U+0597
        (0xD698, 230, &[]), // U+0598
        (0xD699, 230, &[]), // U+0599
        (0xD69A, 222, &[]), // U+059A
        (0xD69B, 220, &[]), // U+059B
        (0xD69C, 230, &[]), // U+059C
        (0xD69D, 230, &[]), // U+059D
        (0xD69E, 230, &[]), // U+059E
        (0xD69F, 230, &[]), // U+059F
        (0xD6A0, 230, &[]), // U+05A0
        (0xD6A1, 230, &[]), // U+05A1
        (0xD6A2, 220, &[]), // U+05A2
        (0xD6A3, 220, &[]), // U+05A3
        (0xD6A4, 220, &[]), // U+05A4
        (0xD6A5, 220, &[]), // U+05A5
        (0xD6A6, 220, &[]), // U+05A6
        (0xD6A7, 220, &[]), // U+05A7
        (0xD6A8, 230, &[]), // U+05A8
        (0xD6A9, 230, &[]), // U+05A9
        (0xD6AA, 220, &[]), // U+05AA
        (0xD6AB, 230, &[]), // U+05AB
        (0xD6AC, 230, &[]), // U+05AC
        (0xD6AD, 222, &[]), // U+05AD
        (0xD6AE, 228, &[]), // U+05AE
        (0xD6AF, 230, &[]), // U+05AF
        (0xD6B0, 10, &[]), // U+05B0
        (0xD6B1, 11, &[]), // U+05B1
        (0xD6B2, 12, &[]), // U+05B2
        (0xD6B3, 13, &[]), // U+05B3
        (0xD6B4, 14, &[]), // U+05B4
        (0xD6B5, 15, &[]), // U+05B5
        (0xD6B6, 16, &[]), // U+05B6
        (0xD6B7, 17, &[]), // U+05B7
        (0xD6B8, 18, &[]), // U+05B8
        (0xD6B9, 19, &[]), // U+05B9
        (0xD6BA, 19, &[]), // U+05BA
        (0xD6BB, 20, &[]), // U+05BB
        (0xD6BC, 21, &[]), // U+05BC
        (0xD6BD, 22, &[]), // U+05BD
        (0xD6BF, 23, &[]), // U+05BF
        (0xD781, 24, &[]), // U+05C1
        (0xD782, 25, &[]), // U+05C2
        (0xD784, 230, &[]), // U+05C4
        (0xD785, 220, &[]), // U+05C5
        (0xD787, 18, &[]), // U+05C7
        (0xD890, 230, &[]), // U+0610
        (0xD891, 230, &[]), // U+0611
        (0xD892, 230, &[]), // U+0612
        (0xD893, 230, &[]), // U+0613
        (0xD894, 230, &[]), // U+0614
        (0xD895, 230, &[]), // U+0615
        (0xD896, 230, &[]), // U+0616
        (0xD897, 230, &[]), // U+0617
        (0xD898, 30, &[]), // U+0618
        (0xD899, 31, &[]), // U+0619
        (0xD89A, 32, &[]), // U+061A
        (0xD8A2, 0, &[0xD8A7, 0xD993]), // U+0622
        (0xD8A3, 0, &[0xD8A7, 0xD994]), // U+0623
        (0xD8A4, 0, &[0xD988, 0xD994]), // U+0624
        (0xD8A5, 0, &[0xD8A7, 0xD995]), // U+0625
        (0xD8A6, 0, &[0xD98A, 0xD994]), // U+0626
        (0xD98B, 27, &[]), // U+064B
        (0xD98C, 28, &[]), // U+064C
        (0xD98D, 29, &[]), // U+064D
        (0xD98E, 30, &[]), // U+064E
        (0xD98F, 31, &[]), // U+064F
        (0xD990, 32, &[]), // U+0650
        (0xD991, 33, &[]), // U+0651
        (0xD992, 34, &[]), // U+0652
        (0xD993, 230, &[]), // U+0653
        (0xD994, 230, &[]), // U+0654
        (0xD995, 220, &[]), // U+0655
        (0xD996, 220, &[]), // U+0656
        (0xD997, 230, &[]), // U+0657
        (0xD998, 230, &[]), // U+0658
        (0xD999, 230, &[]), // U+0659
        (0xD99A, 230, &[]), // U+065A
        (0xD99B, 230, &[]), // U+065B
        (0xD99C, 220, &[]), // U+065C
        (0xD99D, 230, &[]), // U+065D
        (0xD99E, 230, &[]), // U+065E
        (0xD99F, 220, &[]), // U+065F
        (0xD9B0, 35, &[]), // U+0670
        (0xD9B5, 0, &[0xD8A7, 0xD9B4]), // U+0675
        (0xD9B6, 0, &[0xD988, 0xD9B4]), // U+0676
        (0xD9B7, 0, &[0xDB87, 0xD9B4]), // U+0677
        (0xD9B8, 0, &[0xD98A, 0xD9B4]), // U+0678
        (0xDB80, 0, &[0xDB95, 0xD994]), // U+06C0
        (0xDB82, 0, &[0xDB81, 0xD994]), // U+06C2
        (0xDB93, 0, &[0xDB92, 0xD994]), // U+06D3
        (0xDB96, 230, &[]), // U+06D6
        (0xDB97, 230, &[]), // U+06D7
        (0xDB98, 230, &[]), // U+06D8
        (0xDB99, 230, &[]), // U+06D9
        (0xDB9A, 230, &[]), // U+06DA
        (0xDB9B, 230, &[]), // U+06DB
        (0xDB9C, 230, &[]), // U+06DC
        (0xDB9F, 230, &[]), // U+06DF
        (0xDBA0, 230, &[]), // U+06E0
        (0xDBA1, 230, &[]), // U+06E1
        (0xDBA2, 230, &[]), // U+06E2
        (0xDBA3, 220, &[]), // U+06E3
        (0xDBA4, 230, &[]), // U+06E4
        (0xDBA7, 230, &[]), // U+06E7
        (0xDBA8, 230, &[]), // U+06E8
        (0xDBAA, 220, &[]), // U+06EA
        (0xDBAB, 230, &[]), // U+06EB
        (0xDBAC, 230, &[]), // U+06EC
        (0xDBAD, 220, &[]), // U+06ED
        (0xDC91, 36, &[]), // U+0711
        (0xDCB0, 230, &[]), // U+0730
        (0xDCB1, 220, &[]), // U+0731
        (0xDCB2, 230, &[]), // U+0732
        (0xDCB3, 230, &[]), // U+0733
        (0xDCB4, 220, &[]), // U+0734
        (0xDCB5, 230, &[]), // U+0735
        (0xDCB6, 230, &[]), // U+0736
        (0xDCB7, 220, &[]), // U+0737
        (0xDCB8, 220, &[]), // U+0738
        (0xDCB9, 220, &[]), // U+0739
        (0xDCBA, 230, &[]), // U+073A
        (0xDCBB, 220, &[]), // U+073B
        (0xDCBC, 220, &[]), // U+073C
        (0xDCBD, 230, &[]), // U+073D
        (0xDCBE, 220, &[]), // U+073E
        (0xDCBF, 230, &[]), // U+073F
        (0xDD80, 230, &[]), // U+0740
        (0xDD81, 230, &[]), // U+0741
        (0xDD82, 220, &[]), // U+0742
        (0xDD83, 230, &[]), // U+0743
        (0xDD84, 220, &[]), // U+0744
        (0xDD85, 230, &[]), // U+0745
        (0xDD86, 220, &[]), // U+0746
        (0xDD87, 230, &[]), // U+0747
        (0xDD88, 220, &[]), // U+0748
        (0xDD89, 230, &[]), // U+0749
        (0xDD8A, 230, &[]), // U+074A
        (0xDFAB, 230, &[]), // U+07EB
        (0xDFAC, 230, &[]), // U+07EC
        (0xDFAD, 230, &[]), // U+07ED
        (0xDFAE, 230, &[]), // U+07EE
        (0xDFAF, 230, &[]), // U+07EF
        (0xDFB0, 230, &[]), // U+07F0
        (0xDFB1, 230, &[]), // U+07F1
        (0xDFB2, 220, &[]), // U+07F2
        (0xDFB3, 230, &[]), // U+07F3
        (0xDFBD, 220, &[]), // U+07FD
        (0xE0A096, 230, &[]), // U+0816
        (0xE0A097, 230, &[]), // U+0817
        (0xE0A098, 230, &[]), // U+0818
        (0xE0A099, 230, &[]), // U+0819
        (0xE0A09B, 230, &[]), // U+081B
        (0xE0A09C, 230, &[]), // U+081C
        (0xE0A09D, 230, &[]), // U+081D
        (0xE0A09E, 230, &[]), // U+081E
        (0xE0A09F, 230, &[]), // U+081F
        (0xE0A0A0, 230, &[]), // U+0820
        (0xE0A0A1, 230, &[]), // U+0821
        (0xE0A0A2, 230, &[]), // U+0822
        (0xE0A0A3, 230, &[]), // U+0823
        (0xE0A0A5, 230, &[]), // U+0825
        (0xE0A0A6, 230, &[]), // U+0826
        (0xE0A0A7, 230, &[]), // U+0827
        (0xE0A0A9, 230, &[]), // U+0829
        (0xE0A0AA, 230, &[]), // U+082A
        (0xE0A0AB, 230, &[]), // U+082B
        (0xE0A0AC, 230, &[]), // U+082C
        (0xE0A0AD, 230, &[]), // U+082D
        (0xE0A199, 220, &[]), // U+0859
        (0xE0A19A, 220, &[]), // U+085A
        (0xE0A19B, 220, &[]), // U+085B
        (0xE0A298, 230, &[]), // U+0898
        (0xE0A299, 220, &[]), // U+0899
        (0xE0A29A, 220, &[]), // U+089A
        (0xE0A29B, 220, &[]), // U+089B
        (0xE0A29C, 230, &[]), // U+089C
        (0xE0A29D, 230, &[]), // U+089D
        (0xE0A29E, 230, &[]), // U+089E
        (0xE0A29F, 230, &[]), // U+089F
        (0xE0A38A, 230, &[]), // U+08CA
        (0xE0A38B, 230, &[]), // U+08CB
        (0xE0A38C, 230, &[]), // U+08CC
        (0xE0A38D, 230, &[]), // U+08CD
        (0xE0A38E, 230, &[]), // U+08CE
        (0xE0A38F, 220, &[]), // U+08CF
        (0xE0A390, 220, &[]), // U+08D0
        (0xE0A391, 220, &[]), // U+08D1
        (0xE0A392, 220, &[]), // U+08D2
        (0xE0A393, 220, &[]), // U+08D3
        (0xE0A394, 230, &[]), // U+08D4
        (0xE0A395, 230, &[]), // U+08D5
        (0xE0A396, 230, &[]), // U+08D6
        (0xE0A397, 230, &[]), // U+08D7
        (0xE0A398, 230, &[]), // U+08D8
        (0xE0A399, 230, &[]), // U+08D9
        (0xE0A39A, 230, &[]), // U+08DA
        (0xE0A39B, 230, &[]), // U+08DB
        (0xE0A39C, 230, &[]), // U+08DC
        (0xE0A39D, 230, &[]), // U+08DD
        (0xE0A39E, 230, &[]), // U+08DE
        (0xE0A39F, 230, &[]), // U+08DF
        (0xE0A3A0, 230, &[]), // U+08E0
        (0xE0A3A1, 230, &[]), // U+08E1
        (0xE0A3A3, 220, &[]), // U+08E3
        (0xE0A3A4, 230, &[]), // U+08E4
        (0xE0A3A5, 230, &[]), // U+08E5
        (0xE0A3A6, 220, &[]), // U+08E6
        (0xE0A3A7, 230, &[]), // U+08E7
        (0xE0A3A8, 230, &[]), // U+08E8
        (0xE0A3A9, 220, &[]), // U+08E9
        (0xE0A3AA, 230, &[]), // U+08EA
        (0xE0A3AB, 230, &[]), // U+08EB
        (0xE0A3AC, 230, &[]), // U+08EC
        (0xE0A3AD, 220, &[]), // U+08ED
        (0xE0A3AE, 220, &[]), // U+08EE
        (0xE0A3AF, 220, &[]), // U+08EF
        (0xE0A3B0, 27, &[]), // U+08F0
        (0xE0A3B1, 28, &[]), // U+08F1
        (0xE0A3B2, 29, &[]), // U+08F2
        (0xE0A3B3, 230, &[]), // U+08F3
        (0xE0A3B4, 230, &[]), // U+08F4
        (0xE0A3B5, 230, &[]), // U+08F5
        (0xE0A3B6, 220, &[]), // U+08F6
        (0xE0A3B7, 230, &[]), // U+08F7
        (0xE0A3B8, 230, &[]), // U+08F8
        (0xE0A3B9, 220, &[]), // U+08F9
        (0xE0A3BA, 220, &[]), // U+08FA
        (0xE0A3BB, 230, &[]), // U+08FB
        (0xE0A3BC, 230, &[]), // U+08FC
        (0xE0A3BD, 230, &[]), // U+08FD
        (0xE0A3BE, 230, &[]), // U+08FE
        (0xE0A3BF, 230, &[]), // U+08FF
        (0xE0A4A9, 0, &[0xE0A4A8, 0xE0A4BC]), // U+0929
        (0xE0A4B1, 0, &[0xE0A4B0, 0xE0A4BC]), // U+0931
        (0xE0A4B4, 0, &[0xE0A4B3, 0xE0A4BC]), // U+0934
        (0xE0A4BC, 7, &[]), // U+093C
        (0xE0A58D, 9, &[]), // U+094D
        (0xE0A591, 230, &[]), // U+0951
        (0xE0A592, 220, &[]), // U+0952
        (0xE0A593, 230, &[]), // U+0953
        (0xE0A594, 230, &[]), // U+0954
        (0xE0A598, 0, &[0xE0A495, 0xE0A4BC]), // U+0958
        (0xE0A599, 0, &[0xE0A496, 0xE0A4BC]), // U+0959
        (0xE0A59A, 0, &[0xE0A497, 0xE0A4BC]), // U+095A
        (0xE0A59B, 0, &[0xE0A49C, 0xE0A4BC]), // U+095B
        (0xE0A59C, 0, &[0xE0A4A1, 0xE0A4BC]), // U+095C
        (0xE0A59D, 0, &[0xE0A4A2, 0xE0A4BC]), // U+095D
        (0xE0A59E, 0, &[0xE0A4AB, 0xE0A4BC]), // U+095E
        (0xE0A59F, 0, &[0xE0A4AF, 0xE0A4BC]), // U+095F
        (0xE0A6BC, 7, &[]), // U+09BC
        (0xE0A78B, 0, &[0xE0A787, 0xE0A6BE]), // U+09CB
        (0xE0A78C, 0, &[0xE0A787, 0xE0A797]), // U+09CC
        (0xE0A78D, 9, &[]), // U+09CD
        (0xE0A79C, 0, &[0xE0A6A1, 0xE0A6BC]), // U+09DC
        (0xE0A79D, 0, &[0xE0A6A2, 0xE0A6BC]), // U+09DD
        (0xE0A79F, 0, &[0xE0A6AF, 0xE0A6BC]), // U+09DF
        (0xE0A7BE, 230, &[]), // U+09FE
        (0xE0A8B3, 0, &[0xE0A8B2, 0xE0A8BC]), // U+0A33
        (0xE0A8B6, 0, &[0xE0A8B8, 0xE0A8BC]), // U+0A36
        (0xE0A8BC, 7, &[]), // U+0A3C
        (0xE0A98D, 9, &[]), // U+0A4D
        (0xE0A999, 0, &[0xE0A896, 0xE0A8BC]), // U+0A59
        (0xE0A99A, 0, &[0xE0A897, 0xE0A8BC]), // U+0A5A
        (0xE0A99B, 0, &[0xE0A89C, 0xE0A8BC]), // U+0A5B
        (0xE0A99E, 0, &[0xE0A8AB, 0xE0A8BC]), // U+0A5E
        (0xE0AABC, 7, &[]), // U+0ABC
        (0xE0AB8D, 9, &[]), // U+0ACD
        (0xE0ACBC, 7, &[]), // U+0B3C
        (0xE0AD88, 0, &[0xE0AD87, 0xE0AD96]), // U+0B48
        (0xE0AD8B, 0, &[0xE0AD87, 0xE0ACBE]), // U+0B4B
        (0xE0AD8C, 0, &[0xE0AD87, 0xE0AD97]), // U+0B4C
        (0xE0AD8D, 9, &[]), // U+0B4D
        (0xE0AD9C, 0, &[0xE0ACA1, 0xE0ACBC]), // U+0B5C
        (0xE0AD9D, 0, &[0xE0ACA2, 0xE0ACBC]), // U+0B5D
        (0xE0AE94, 0, &[0xE0AE92, 0xE0AF97]), // U+0B94
        (0xE0AF8A, 0, &[0xE0AF86, 0xE0AEBE]), // U+0BCA
        (0xE0AF8B, 0, &[0xE0AF87, 0xE0AEBE]), // U+0BCB
        (0xE0AF8C, 0, &[0xE0AF86, 0xE0AF97]), // U+0BCC
        (0xE0AF8D, 9, &[]), // U+0BCD
        (0xE0B0BC, 7, &[]), // U+0C3C
        (0xE0B188, 0, &[0xE0B186, 0xE0B196]), // U+0C48
        (0xE0B18D, 9, &[]), // U+0C4D
        (0xE0B195, 84, &[]), // U+0C55
        (0xE0B196, 91, &[]), // U+0C56
        (0xE0B2BC, 7, &[]), // U+0CBC
        (0xE0B380, 0, &[0xE0B2BF, 0xE0B395]), // U+0CC0
        (0xE0B387, 0, &[0xE0B386, 0xE0B395]), // U+0CC7
        (0xE0B388, 0, &[0xE0B386, 0xE0B396]), // U+0CC8
        (0xE0B38A, 0, &[0xE0B386, 0xE0B382]), // U+0CCA
        (0xE0B38B, 0, &[0xE0B38A, 0xE0B395]), // U+0CCB
        (0xE0B38D, 9, &[]), // U+0CCD
        (0xE0B4BB, 9, &[]), // U+0D3B
        (0xE0B4BC, 9, &[]), // U+0D3C
        (0xE0B58A, 0, &[0xE0B586, 0xE0B4BE]), // U+0D4A
        (0xE0B58B, 0, &[0xE0B587, 0xE0B4BE]), // U+0D4B
        (0xE0B58C, 0, &[0xE0B586, 0xE0B597]), // U+0D4C
        (0xE0B58D, 9, &[]), // U+0D4D
        (0xE0B78A, 9, &[]), // U+0DCA
        (0xE0B79A, 0, &[0xE0B799, 0xE0B78A]), // U+0DDA
        (0xE0B79C, 0, &[0xE0B799, 0xE0B78F]), // U+0DDC
        (0xE0B79D, 0, &[0xE0B79C, 0xE0B78A]), // U+0DDD
        (0xE0B79E, 0, &[0xE0B799, 0xE0B79F]), // U+0DDE
        (0xE0B8B3, 0, &[0xE0B98D, 0xE0B8B2]), // U+0E33
        (0xE0B8B8, 103, &[]), // U+0E38
        (0xE0B8B9, 103, &[]), // U+0E39
        (0xE0B8BA, 9, &[]), // U+0E3A
        (0xE0B988, 107, &[]), // U+0E48
        (0xE0B989, 107, &[]), // U+0E49
        (0xE0B98A, 107, &[]), // U+0E4A
        (0xE0B98B, 107, &[]), // U+0E4B
        (0xE0BAB3, 0, &[0xE0BB8D, 0xE0BAB2]), // U+0EB3
        (0xE0BAB8, 118, &[]), // U+0EB8
        (0xE0BAB9, 118, &[]), // U+0EB9
        (0xE0BABA, 9, &[]), // U+0EBA
        (0xE0BB88, 122, &[]), // U+0EC8
        (0xE0BB89, 122, &[]), // U+0EC9
        (0xE0BB8A, 122, &[]), // U+0ECA
        (0xE0BB8B, 122, &[]), // U+0ECB
        (0xE0BB9C, 0, &[0xE0BAAB, 0xE0BA99]), // U+0EDC
        (0xE0BB9D, 0, &[0xE0BAAB, 0xE0BAA1]), // U+0EDD
        (0xE0BC8C, 0, &[0xE0BC8B]), // U+0F0C
        (0xE0BC98, 220, &[]), // U+0F18
        (0xE0BC99, 220, &[]), // U+0F19
        (0xE0BCB5, 220, &[]), // U+0F35
        (0xE0BCB7, 220, &[]), // U+0F37
        (0xE0BCB9, 216, &[]), // U+0F39
        (0xE0BD83, 0, &[0xE0BD82, 0xE0BEB7]), // U+0F43
        (0xE0BD8D, 0, &[0xE0BD8C, 0xE0BEB7]), // U+0F4D
        (0xE0BD92, 0, &[0xE0BD91, 0xE0BEB7]), // U+0F52
        (0xE0BD97, 0, &[0xE0BD96, 0xE0BEB7]), // U+0F57
        (0xE0BD9C, 0, &[0xE0BD9B, 0xE0BEB7]), // U+0F5C
        (0xE0BDA9, 0, &[0xE0BD80, 0xE0BEB5]), // U+0F69
        (0xE0BDB1, 129, &[]), // U+0F71
        (0xE0BDB2, 130, &[]), // U+0F72
        (0xE0BDB3, 0, &[0xE0BDB1, 0xE0BDB2]), // U+0F73
        (0xE0BDB4, 132, &[]), // U+0F74
        (0xE0BDB5, 0, &[0xE0BDB1, 0xE0BDB4]), // U+0F75
        (0xE0BDB6, 0, &[0xE0BEB2, 0xE0BE80]), // U+0F76
        (0xE0BDB7, 0, &[0xE0BEB2, 0xE0BE81]), // U+0F77
        (0xE0BDB8, 0, &[0xE0BEB3, 0xE0BE80]), // U+0F78
        (0xE0BDB9, 0, &[0xE0BEB3, 0xE0BE81]), // U+0F79
        (0xE0BDBA, 130, &[]), // U+0F7A
        (0xE0BDBB, 130, &[]), // U+0F7B
        (0xE0BDBC, 130, &[]), // U+0F7C
        (0xE0BDBD, 130, &[]), // U+0F7D
        (0xE0BE80, 130, &[]), // U+0F80
        (0xE0BE81, 0, &[0xE0BDB1, 0xE0BE80]), // U+0F81
        (0xE0BE82, 230, &[]), // U+0F82
        (0xE0BE83, 230, &[]), // U+0F83
        (0xE0BE84, 9, &[]), // U+0F84
        (0xE0BE86, 230, &[]), // U+0F86
        (0xE0BE87, 230, &[]), // U+0F87
        (0xE0BE93, 0, &[0xE0BE92, 0xE0BEB7]), // U+0F93
        (0xE0BE9D, 0, &[0xE0BE9C, 0xE0BEB7]), // U+0F9D
        (0xE0BEA2, 0, &[0xE0BEA1, 0xE0BEB7]), // U+0FA2
        (0xE0BEA7, 0, &[0xE0BEA6, 0xE0BEB7]), // U+0FA7
        (0xE0BEAC, 0, &[0xE0BEAB, 0xE0BEB7]), // U+0FAC
        (0xE0BEB9, 0, &[0xE0BE90, 0xE0BEB5]), // U+0FB9
        (0xE0BF86, 220, &[]), // U+0FC6
        (0xE180A6, 0, &[0xE180A5, 0xE180AE]), // U+1026
        (0xE180B7, 7, &[]), // U+1037
        (0xE180B9, 9, &[]), // U+1039
        (0xE180BA, 9, &[]), // U+103A
        (0xE1828D, 220, &[]), // U+108D
        (0xE183BC, 0, &[0xE1839C]), // U+10FC
        (0xE18D9D, 230, &[]), // U+135D
        (0xE18D9E, 230, &[]), // U+135E
        (0xE18D9F, 230, &[]), // U+135F
        (0xE19C94, 9, &[]), // U+1714
        (0xE19C95, 9, &[]), // U+1715
        (0xE19CB4, 9, &[]), // U+1734
        (0xE19F92, 9, &[]), // U+17D2
        (0xE19F9D, 230, &[]), // U+17DD
        (0xE1A2A9, 228, &[]), // U+18A9
        (0xE1A4B9, 222, &[]), // U+1939
        (0xE1A4BA, 230, &[]), // U+193A
        (0xE1A4BB, 220, &[]), // U+193B
        (0xE1A897, 230, &[]), // U+1A17
        (0xE1A898, 220, &[]), // U+1A18
        (0xE1A9A0, 9, &[]), // U+1A60
        (0xE1A9B5, 230, &[]), // U+1A75
        (0xE1A9B6, 230, &[]), // U+1A76
        (0xE1A9B7, 230, &[]), // U+1A77
        (0xE1A9B8, 230, &[]), // U+1A78
        (0xE1A9B9, 230, &[]), // U+1A79
        (0xE1A9BA, 230, &[]), // U+1A7A
        (0xE1A9BB, 230, &[]), // U+1A7B
        (0xE1A9BC, 230, &[]), // U+1A7C
        (0xE1A9BF, 220, &[]), // U+1A7F
        (0xE1AAB0, 230, &[]), // U+1AB0
        (0xE1AAB1, 230, &[]), // U+1AB1
        (0xE1AAB2, 230, &[]), // U+1AB2
        (0xE1AAB3, 230, &[]), // U+1AB3
        (0xE1AAB4, 230, &[]), // U+1AB4
        (0xE1AAB5, 220, &[]), // U+1AB5
        (0xE1AAB6, 220, &[]), // U+1AB6
        (0xE1AAB7, 220, &[]), // U+1AB7
        (0xE1AAB8, 220, &[]), // U+1AB8
        (0xE1AAB9, 220, &[]), // U+1AB9
        (0xE1AABA, 220, &[]), // U+1ABA
        (0xE1AABB, 230, &[]), // U+1ABB
        (0xE1AABC, 230, &[]), // U+1ABC
        (0xE1AABD, 220, &[]), // U+1ABD
        (0xE1AABF, 220, &[]), // U+1ABF
        (0xE1AB80, 220, &[]), // U+1AC0
        (0xE1AB81, 230, &[]), // U+1AC1
        (0xE1AB82, 230, &[]), // U+1AC2
        (0xE1AB83, 220, &[]), // U+1AC3
        (0xE1AB84, 220, &[]), // U+1AC4
        (0xE1AB85, 230, &[]), // U+1AC5
        (0xE1AB86, 230, &[]), // U+1AC6
        (0xE1AB87, 230, &[]), // U+1AC7
        (0xE1AB88, 230, &[]), // U+1AC8
        (0xE1AB89, 230, &[]), // U+1AC9
        (0xE1AB8A, 220, &[]), // U+1ACA
        (0xE1AB8B, 230, &[]), // U+1ACB
        (0xE1AB8C, 230, &[]), // U+1ACC
        (0xE1AB8D, 230, &[]), // U+1ACD
        (0xE1AB8E, 230, &[]), // U+1ACE
        (0xE1AC86, 0, &[0xE1AC85, 0xE1ACB5]), // U+1B06
        (0xE1AC88, 0, &[0xE1AC87, 0xE1ACB5]), // U+1B08
        (0xE1AC8A, 0, &[0xE1AC89, 0xE1ACB5]), // U+1B0A
        (0xE1AC8C, 0, &[0xE1AC8B, 0xE1ACB5]), // U+1B0C
        (0xE1AC8E, 0, &[0xE1AC8D, 0xE1ACB5]), // U+1B0E
        (0xE1AC92, 0, &[0xE1AC91, 0xE1ACB5]), // U+1B12
        (0xE1ACB4, 7, &[]), // U+1B34
        (0xE1ACBB, 0, &[0xE1ACBA, 0xE1ACB5]), // U+1B3B
        (0xE1ACBD, 0, &[0xE1ACBC, 0xE1ACB5]), // U+1B3D
        (0xE1AD80, 0, &[0xE1ACBE, 0xE1ACB5]), // U+1B40
        (0xE1AD81, 0, &[0xE1ACBF, 0xE1ACB5]), // U+1B41
        (0xE1AD83, 0, &[0xE1AD82, 0xE1ACB5]), // U+1B43
        (0xE1AD84, 9, &[]), // U+1B44
        (0xE1ADAB, 230, &[]), // U+1B6B
        (0xE1ADAC, 220, &[]), // U+1B6C
        (0xE1ADAD, 230, &[]), // U+1B6D
        (0xE1ADAE, 230, &[]), // U+1B6E
        (0xE1ADAF, 230, &[]), // U+1B6F
        (0xE1ADB0, 230, &[]), // U+1B70
        (0xE1ADB1, 230, &[]), // U+1B71
        (0xE1ADB2, 230, &[]), // U+1B72
        (0xE1ADB3, 230, &[]), // U+1B73
        (0xE1AEAA, 9, &[]), // U+1BAA
        (0xE1AEAB, 9, &[]), // U+1BAB
        (0xE1AFA6, 7, &[]), // U+1BE6
        (0xE1AFB2, 9, &[]), // U+1BF2
        (0xE1AFB3, 9, &[]), // U+1BF3
        (0xE1B0B7, 7, &[]), // U+1C37
        (0xE1B390, 230, &[]), // U+1CD0
        (0xE1B391, 230, &[]), // U+1CD1
        (0xE1B392, 230, &[]), // U+1CD2
        (0xE1B394, 1, &[]), // U+1CD4
        (0xE1B395, 220, &[]), // U+1CD5
        (0xE1B396, 220, &[]), // U+1CD6
        (0xE1B397, 220, &[]), // U+1CD7
        (0xE1B398, 220, &[]), // U+1CD8
        (0xE1B399, 220, &[]), // U+1CD9
        (0xE1B39A, 230, &[]), // U+1CDA
        (0xE1B39B, 230, &[]), // U+1CDB
        (0xE1B39C, 220, &[]), // U+1CDC
        (0xE1B39D, 220, &[]), // U+1CDD
        (0xE1B39E, 220, &[]), // U+1CDE
        (0xE1B39F, 220, &[]), // U+1CDF
        (0xE1B3A0, 230, &[]), // U+1CE0
        (0xE1B3A2, 1, &[]), // U+1CE2
        (0xE1B3A3, 1, &[]), // U+1CE3
        (0xE1B3A4, 1, &[]), // U+1CE4
        (0xE1B3A5, 1, &[]), // U+1CE5
        (0xE1B3A6, 1, &[]), // U+1CE6
        (0xE1B3A7, 1, &[]), // U+1CE7
        (0xE1B3A8, 1, &[]), // U+1CE8
        (0xE1B3AD, 220, &[]), // U+1CED
        (0xE1B3B4, 230, &[]), // U+1CF4
        (0xE1B3B8, 230, &[]), // U+1CF8
        (0xE1B3B9, 230, &[]), // U+1CF9
        (0xE1B4AC, 0, &[0x41]), // U+1D2C
        (0xE1B4AD, 0, &[0xC386]), // U+1D2D
        (0xE1B4AE, 0, &[0x42]), // U+1D2E
        (0xE1B4B0, 0, &[0x44]), // U+1D30
        (0xE1B4B1, 0, &[0x45]), // U+1D31
        (0xE1B4B2, 0, &[0xC68E]), // U+1D32
        (0xE1B4B3, 0, &[0x47]), // U+1D33
        (0xE1B4B4, 0, &[0x48]), // U+1D34
        (0xE1B4B5, 0, &[0x49]), // U+1D35
        (0xE1B4B6, 0, &[0x4A]), // U+1D36
        (0xE1B4B7, 0, &[0x4B]), // U+1D37
        (0xE1B4B8, 0, &[0x4C]), // U+1D38
        (0xE1B4B9, 0, &[0x4D]), // U+1D39
        (0xE1B4BA, 0, &[0x4E]), // U+1D3A
        (0xE1B4BC, 0, &[0x4F]), // U+1D3C
        (0xE1B4BD, 0, &[0xC8A2]), // U+1D3D
        (0xE1B4BE, 0, &[0x50]), // U+1D3E
        (0xE1B4BF, 0, &[0x52]), // U+1D3F
        (0xE1B580, 0, &[0x54]), // U+1D40
        (0xE1B581, 0, &[0x55]), // U+1D41
        (0xE1B582, 0, &[0x57]), // U+1D42
        (0xE1B583, 0, &[0x61]), // U+1D43
        (0xE1B584, 0, &[0xC990]), // U+1D44
        (0xE1B585, 0, &[0xC991]), // U+1D45
        (0xE1B586, 0, &[0xE1B482]), // U+1D46
        (0xE1B587, 0, &[0x62]), // U+1D47
        (0xE1B588, 0, &[0x64]), // U+1D48
        (0xE1B589, 0, &[0x65]), // U+1D49
        (0xE1B58A, 0, &[0xC999]), // U+1D4A
        (0xE1B58B, 0, &[0xC99B]), // U+1D4B
        (0xE1B58C, 0, &[0xC99C]), // U+1D4C
        (0xE1B58D, 0, &[0x67]), // U+1D4D
        (0xE1B58F, 0, &[0x6B]), // U+1D4F
        (0xE1B590, 0, &[0x6D]), // U+1D50
        (0xE1B591, 0, &[0xC58B]), // U+1D51
        (0xE1B592, 0, &[0x6F]), // U+1D52
        (0xE1B593, 0, &[0xC994]), // U+1D53
        (0xE1B594, 0, &[0xE1B496]), // U+1D54
        (0xE1B595, 0, &[0xE1B497]), // U+1D55
        (0xE1B596, 0, &[0x70]), // U+1D56
        (0xE1B597, 0, &[0x74]), // U+1D57
        (0xE1B598, 0, &[0x75]), // U+1D58
        (0xE1B599, 0, &[0xE1B49D]), // U+1D59
        (0xE1B59A, 0, &[0xC9AF]), // U+1D5A
        (0xE1B59B, 0, &[0x76]), // U+1D5B
        (0xE1B59C, 0, &[0xE1B4A5]), // U+1D5C
        (0xE1B59D, 0, &[0xCEB2]), // U+1D5D
        (0xE1B59E, 0, &[0xCEB3]), // U+1D5E
        (0xE1B59F, 0, &[0xCEB4]), // U+1D5F
        (0xE1B5A0, 0, &[0xCF86]), // U+1D60
        (0xE1B5A1, 0, &[0xCF87]), // U+1D61
        (0xE1B5A2, 0, &[0x69]), // U+1D62
        (0xE1B5A3, 0, &[0x72]), // U+1D63
        (0xE1B5A4, 0, &[0x75]), // U+1D64
        (0xE1B5A5, 0, &[0x76]), // U+1D65
        (0xE1B5A6, 0, &[0xCEB2]), // U+1D66
        (0xE1B5A7, 0, &[0xCEB3]), // U+1D67
        (0xE1B5A8, 0, &[0xCF81]), // U+1D68
        (0xE1B5A9, 0, &[0xCF86]), // U+1D69
        (0xE1B5AA, 0, &[0xCF87]), // U+1D6A
        (0xE1B5B8, 0, &[0xD0BD]), // U+1D78
        (0xE1B69B, 0, &[0xC992]), // U+1D9B
        (0xE1B69C, 0, &[0x63]), // U+1D9C
        (0xE1B69D, 0, &[0xC995]), // U+1D9D
        (0xE1B69E, 0, &[0xC3B0]), // U+1D9E
        (0xE1B69F, 0, &[0xC99C]), // U+1D9F
        (0xE1B6A0, 0, &[0x66]), // U+1DA0
        (0xE1B6A1, 0, &[0xC99F]), // U+1DA1
        (0xE1B6A2, 0, &[0xC9A1]), // U+1DA2
        (0xE1B6A3, 0, &[0xC9A5]), // U+1DA3
        (0xE1B6A4, 0, &[0xC9A8]), // U+1DA4
        (0xE1B6A5, 0, &[0xC9A9]), // U+1DA5
        (0xE1B6A6, 0, &[0xC9AA]), // U+1DA6
        (0xE1B6A7, 0, &[0xE1B5BB]), // U+1DA7
        (0xE1B6A8, 0, &[0xCA9D]), // U+1DA8
        (0xE1B6A9, 0, &[0xC9AD]), // U+1DA9
        (0xE1B6AA, 0, &[0xE1B685]), // U+1DAA
        (0xE1B6AB, 0, &[0xCA9F]), // U+1DAB
        (0xE1B6AC, 0, &[0xC9B1]), // U+1DAC
        (0xE1B6AD, 0, &[0xC9B0]), // U+1DAD
        (0xE1B6AE, 0, &[0xC9B2]), // U+1DAE
        (0xE1B6AF, 0, &[0xC9B3]), // U+1DAF
        (0xE1B6B0, 0, &[0xC9B4]), // U+1DB0
        (0xE1B6B1, 0, &[0xC9B5]), // U+1DB1
        (0xE1B6B2, 0, &[0xC9B8]), // U+1DB2
        (0xE1B6B3, 0, &[0xCA82]), // U+1DB3
        (0xE1B6B4, 0, &[0xCA83]), // U+1DB4
        (0xE1B6B5, 0, &[0xC6AB]), // U+1DB5
        (0xE1B6B6, 0, &[0xCA89]), // U+1DB6
        (0xE1B6B7, 0, &[0xCA8A]), // U+1DB7
        (0xE1B6B8, 0, &[0xE1B49C]), // U+1DB8
        (0xE1B6B9, 0, &[0xCA8B]), // U+1DB9
        (0xE1B6BA, 0, &[0xCA8C]), // U+1DBA
        (0xE1B6BB, 0, &[0x7A]), // U+1DBB
        (0xE1B6BC, 0, &[0xCA90]), // U+1DBC
        (0xE1B6BD, 0, &[0xCA91]), // U+1DBD
        (0xE1B6BE, 0, &[0xCA92]), // U+1DBE
        (0xE1B6BF, 0, &[0xCEB8]), // U+1DBF
        (0xE1B780, 230, &[]), // U+1DC0
        (0xE1B781, 230, &[]), // U+1DC1
        (0xE1B782, 220, &[]), // U+1DC2
        (0xE1B783, 230, &[]), // U+1DC3
        (0xE1B784, 230, &[]), // U+1DC4
        (0xE1B785, 230, &[]), // U+1DC5
        (0xE1B786, 230, &[]), // U+1DC6
        (0xE1B787, 230, &[]), // U+1DC7
        (0xE1B788, 230, &[]), // U+1DC8
        (0xE1B789, 230, &[]), // U+1DC9
        (0xE1B78A, 220, &[]), // U+1DCA
        (0xE1B78B, 230, &[]), // U+1DCB
        (0xE1B78C, 230, &[]), // U+1DCC
        (0xE1B78D, 234, &[]), // U+1DCD
        (0xE1B78E, 214, &[]), // U+1DCE
        (0xE1B78F, 220, &[]), // U+1DCF
        (0xE1B790, 202, &[]), // U+1DD0
        (0xE1B791, 230, &[]), // U+1DD1
        (0xE1B792, 230, &[]), // U+1DD2
        (0xE1B793, 230, &[]), // U+1DD3
        (0xE1B794, 230, &[]), // U+1DD4
        (0xE1B795, 230, &[]), // U+1DD5
        (0xE1B796, 230, &[]), // U+1DD6
        (0xE1B797, 230, &[]), // U+1DD7
        (0xE1B798, 230, &[]), // U+1DD8
        (0xE1B799, 230, &[]), // U+1DD9
        (0xE1B79A, 230, &[]), // U+1DDA
        (0xE1B79B, 230, &[]), // U+1DDB
        (0xE1B79C, 230, &[]), // U+1DDC
        (0xE1B79D, 230, &[]), // U+1DDD
        (0xE1B79E, 230, &[]), // U+1DDE
        (0xE1B79F, 230, &[]), // U+1DDF
        (0xE1B7A0, 230, &[]), // U+1DE0
        (0xE1B7A1, 230, &[]), // U+1DE1
        (0xE1B7A2, 230, &[]), // U+1DE2
        (0xE1B7A3, 230, &[]), // U+1DE3
        (0xE1B7A4, 230, &[]), // U+1DE4
        (0xE1B7A5, 230, &[]), // U+1DE5
        (0xE1B7A6, 230, &[]), // U+1DE6
        (0xE1B7A7, 230, &[]), // U+1DE7
        (0xE1B7A8, 230, &[]), // U+1DE8
        (0xE1B7A9, 230, &[]), // U+1DE9
        (0xE1B7AA, 230, &[]), // U+1DEA
        (0xE1B7AB, 230, &[]), // U+1DEB
        (0xE1B7AC, 230, &[]), // U+1DEC
        (0xE1B7AD, 230, &[]), // U+1DED
        (0xE1B7AE, 230, &[]), // U+1DEE
        (0xE1B7AF, 230, &[]), // U+1DEF
        (0xE1B7B0, 230, &[]), // U+1DF0
        (0xE1B7B1, 230, &[]), // U+1DF1
        (0xE1B7B2, 230, &[]), // U+1DF2
        (0xE1B7B3, 230, &[]), // U+1DF3
        (0xE1B7B4, 230, &[]), // U+1DF4
        (0xE1B7B5, 230, &[]), // U+1DF5
        (0xE1B7B6, 232, &[]), // U+1DF6
        (0xE1B7B7, 228, &[]), // U+1DF7
        (0xE1B7B8, 228, &[]), // U+1DF8
        (0xE1B7B9, 220, &[]), // U+1DF9
        (0xE1B7BA, 218, &[]), // U+1DFA
        (0xE1B7BB, 230, &[]), // U+1DFB
        (0xE1B7BC, 233, &[]), // U+1DFC
        (0xE1B7BD, 220, &[]), // U+1DFD
        (0xE1B7BE, 230, &[]), // U+1DFE
        (0xE1B7BF, 220, &[]), // U+1DFF
        (0xE1B880, 0, &[0x41, 0xCCA5]), // U+1E00
        (0xE1B881, 0, &[0x61, 0xCCA5]), // U+1E01
        (0xE1B882, 0, &[0x42, 0xCC87]), // U+1E02
        (0xE1B883, 0, &[0x62, 0xCC87]), // U+1E03
        (0xE1B884, 0, &[0x42, 0xCCA3]), // U+1E04
        (0xE1B885, 0, &[0x62, 0xCCA3]), // U+1E05
        (0xE1B886, 0, &[0x42, 0xCCB1]), // U+1E06
        (0xE1B887, 0, &[0x62, 0xCCB1]), // U+1E07
        (0xE1B888, 0, &[0xC387, 0xCC81]), // U+1E08
        (0xE1B889, 0, &[0xC3A7, 0xCC81]), // U+1E09
        (0xE1B88A, 0, &[0x44, 0xCC87]), // U+1E0A
        (0xE1B88B, 0, &[0x64, 0xCC87]), // U+1E0B
        (0xE1B88C, 0, &[0x44, 0xCCA3]), // U+1E0C
        (0xE1B88D, 0, &[0x64, 0xCCA3]), // U+1E0D
        (0xE1B88E, 0, &[0x44, 0xCCB1]), // U+1E0E
        (0xE1B88F, 0, &[0x64, 0xCCB1]), // U+1E0F
        (0xE1B890, 0, &[0x44, 0xCCA7]), // U+1E10
        (0xE1B891, 0, &[0x64, 0xCCA7]), // U+1E11
        (0xE1B892, 0, &[0x44, 0xCCAD]), // U+1E12
        (0xE1B893, 0, &[0x64, 0xCCAD]), // U+1E13
        (0xE1B894, 0, &[0xC492, 0xCC80]), // U+1E14
        (0xE1B895, 0, &[0xC493, 0xCC80]), // U+1E15
        (0xE1B896, 0, &[0xC492, 0xCC81]), // U+1E16
        (0xE1B897, 0, &[0xC493, 0xCC81]), // U+1E17
        (0xE1B898, 0, &[0x45, 0xCCAD]), // U+1E18
        (0xE1B899, 0, &[0x65, 0xCCAD]), // U+1E19
        (0xE1B89A, 0, &[0x45, 0xCCB0]), // U+1E1A
        (0xE1B89B, 0, &[0x65, 0xCCB0]), // U+1E1B
        (0xE1B89C, 0, &[0xC8A8, 0xCC86]), // U+1E1C
        (0xE1B89D, 0, &[0xC8A9, 0xCC86]), // U+1E1D
        (0xE1B89E, 0, &[0x46, 0xCC87]), // U+1E1E
        (0xE1B89F, 0, &[0x66, 0xCC87]), // U+1E1F
        (0xE1B8A0, 0, &[0x47, 0xCC84]), // U+1E20
        (0xE1B8A1, 0, &[0x67, 0xCC84]), // U+1E21
        (0xE1B8A2, 0, &[0x48, 0xCC87]), // U+1E22
        (0xE1B8A3, 0, &[0x68, 0xCC87]), // U+1E23
        (0xE1B8A4, 0, &[0x48, 0xCCA3]), // U+1E24
        (0xE1B8A5, 0, &[0x68, 0xCCA3]), // U+1E25
        (0xE1B8A6, 0, &[0x48, 0xCC88]), // U+1E26
        (0xE1B8A7, 0, &[0x68, 0xCC88]), // U+1E27
        (0xE1B8A8, 0, &[0x48, 0xCCA7]), // U+1E28
        (0xE1B8A9, 0, &[0x68, 0xCCA7]), // U+1E29
        (0xE1B8AA, 0, &[0x48, 0xCCAE]), // U+1E2A
        (0xE1B8AB, 0, &[0x68, 0xCCAE]), // U+1E2B
        (0xE1B8AC, 0, &[0x49, 0xCCB0]), // U+1E2C
        (0xE1B8AD, 0, &[0x69, 0xCCB0]), // U+1E2D
        (0xE1B8AE, 0, &[0xC38F, 0xCC81]), // U+1E2E
        (0xE1B8AF, 0, &[0xC3AF, 0xCC81]), // U+1E2F
        (0xE1B8B0, 0, &[0x4B, 0xCC81]), // U+1E30
        (0xE1B8B1, 0, &[0x6B, 0xCC81]), // U+1E31
        (0xE1B8B2, 0, &[0x4B, 0xCCA3]), // U+1E32
        (0xE1B8B3, 0, &[0x6B, 0xCCA3]), // U+1E33
        (0xE1B8B4, 0, &[0x4B, 0xCCB1]), // U+1E34
        (0xE1B8B5, 0, &[0x6B, 0xCCB1]), // U+1E35
        (0xE1B8B6, 0, &[0x4C, 0xCCA3]), // U+1E36
        (0xE1B8B7, 0, &[0x6C, 0xCCA3]), // U+1E37
        (0xE1B8B8, 0, &[0xE1B8B6, 0xCC84]), // U+1E38
        (0xE1B8B9, 0, &[0xE1B8B7, 0xCC84]), // U+1E39
        (0xE1B8BA, 0, &[0x4C, 0xCCB1]), // U+1E3A
        (0xE1B8BB, 0, &[0x6C, 0xCCB1]), // U+1E3B
        (0xE1B8BC, 0, &[0x4C, 0xCCAD]), // U+1E3C
        (0xE1B8BD, 0, &[0x6C, 0xCCAD]), // U+1E3D
        (0xE1B8BE, 0, &[0x4D, 0xCC81]), // U+1E3E
        (0xE1B8BF, 0, &[0x6D, 0xCC81]), // U+1E3F
        (0xE1B980, 0, &[0x4D, 0xCC87]), // U+1E40
        (0xE1B981, 0, &[0x6D, 0xCC87]), // U+1E41
        (0xE1B982, 0, &[0x4D, 0xCCA3]), // U+1E42
        (0xE1B983, 0, &[0x6D, 0xCCA3]), // U+1E43
        (0xE1B984, 0, &[0x4E, 0xCC87]), // U+1E44
        (0xE1B985, 0, &[0x6E, 0xCC87]), // U+1E45
        (0xE1B986, 0, &[0x4E, 0xCCA3]), // U+1E46
        (0xE1B987, 0, &[0x6E, 0xCCA3]), // U+1E47
        (0xE1B988, 0, &[0x4E, 0xCCB1]), // U+1E48
        (0xE1B989, 0, &[0x6E, 0xCCB1]), // U+1E49
        (0xE1B98A, 0, &[0x4E, 0xCCAD]), // U+1E4A
        (0xE1B98B, 0, &[0x6E, 0xCCAD]), // U+1E4B
        (0xE1B98C, 0, &[0xC395, 0xCC81]), // U+1E4C
        (0xE1B98D, 0, &[0xC3B5, 0xCC81]), // U+1E4D
        (0xE1B98E, 0, &[0xC395, 0xCC88]), // U+1E4E
        (0xE1B98F, 0, &[0xC3B5, 0xCC88]), // U+1E4F
        (0xE1B990, 0, &[0xC58C, 0xCC80]), // U+1E50
        (0xE1B991, 0, &[0xC58D, 0xCC80]), // U+1E51
        (0xE1B992, 0, &[0xC58C, 0xCC81]), // U+1E52
        (0xE1B993, 0, &[0xC58D, 0xCC81]), // U+1E53
        (0xE1B994, 0, &[0x50, 0xCC81]), // U+1E54
        (0xE1B995, 0, &[0x70, 0xCC81]), // U+1E55
        (0xE1B996, 0, &[0x50, 0xCC87]), // U+1E56
        (0xE1B997, 0, &[0x70, 0xCC87]), // U+1E57
        (0xE1B998, 0, &[0x52, 0xCC87]), // U+1E58
        (0xE1B999, 0, &[0x72, 0xCC87]), // U+1E59
        (0xE1B99A, 0, &[0x52, 0xCCA3]), // U+1E5A
        (0xE1B99B, 0, &[0x72, 0xCCA3]), // U+1E5B
        (0xE1B99C, 0, &[0xE1B99A, 0xCC84]), // U+1E5C
        (0xE1B99D, 0, &[0xE1B99B, 0xCC84]), // U+1E5D
        (0xE1B99E, 0, &[0x52, 0xCCB1]), // U+1E5E
        (0xE1B99F, 0, &[0x72, 0xCCB1]), // U+1E5F
        (0xE1B9A0, 0, &[0x53, 0xCC87]), // U+1E60
        (0xE1B9A1, 0, &[0x73, 0xCC87]), // U+1E61
        (0xE1B9A2, 0, &[0x53, 0xCCA3]), // U+1E62
        (0xE1B9A3, 0, &[0x73, 0xCCA3]), // U+1E63
        (0xE1B9A4, 0, &[0xC59A, 0xCC87]), // U+1E64
        (0xE1B9A5, 0, &[0xC59B, 0xCC87]), // U+1E65
        (0xE1B9A6, 0, &[0xC5A0, 0xCC87]), // U+1E66
        (0xE1B9A7, 0, &[0xC5A1, 0xCC87]), // U+1E67
        (0xE1B9A8, 0, &[0xE1B9A2, 0xCC87]), // U+1E68
        (0xE1B9A9, 0, &[0xE1B9A3, 0xCC87]), // U+1E69
        (0xE1B9AA, 0, &[0x54, 0xCC87]), // U+1E6A
        (0xE1B9AB, 0, &[0x74, 0xCC87]), // U+1E6B
        (0xE1B9AC, 0, &[0x54, 0xCCA3]), // U+1E6C
        (0xE1B9AD, 0, &[0x74, 0xCCA3]), // U+1E6D
        (0xE1B9AE, 0, &[0x54, 0xCCB1]), // U+1E6E
        (0xE1B9AF, 0, &[0x74, 0xCCB1]), // U+1E6F
        (0xE1B9B0, 0, &[0x54, 0xCCAD]), // U+1E70
        (0xE1B9B1, 0, &[0x74, 0xCCAD]), // U+1E71
        (0xE1B9B2, 0, &[0x55, 0xCCA4]), // U+1E72
        (0xE1B9B3, 0, &[0x75, 0xCCA4]), // U+1E73
        (0xE1B9B4, 0, &[0x55, 0xCCB0]), // U+1E74
        (0xE1B9B5, 0, &[0x75, 0xCCB0]), // U+1E75
        (0xE1B9B6, 0, &[0x55, 0xCCAD]), // U+1E76
        (0xE1B9B7, 0, &[0x75, 0xCCAD]), // U+1E77
        (0xE1B9B8, 0, &[0xC5A8, 0xCC81]), // U+1E78
        (0xE1B9B9, 0, &[0xC5A9, 0xCC81]), // U+1E79
        (0xE1B9BA, 0, &[0xC5AA, 0xCC88]), // U+1E7A
        (0xE1B9BB, 0, &[0xC5AB, 0xCC88]), // U+1E7B
        (0xE1B9BC, 0, &[0x56, 0xCC83]), // U+1E7C
        (0xE1B9BD, 0, &[0x76, 0xCC83]), // U+1E7D
        (0xE1B9BE, 0, &[0x56, 0xCCA3]), // U+1E7E
        (0xE1B9BF, 0, &[0x76, 0xCCA3]), // U+1E7F
        (0xE1BA80, 0, &[0x57, 0xCC80]), // U+1E80
        (0xE1BA81, 0, &[0x77, 0xCC80]), // U+1E81
        (0xE1BA82, 0, &[0x57, 0xCC81]), // U+1E82
        (0xE1BA83, 0, &[0x77, 0xCC81]), // U+1E83
        (0xE1BA84, 0, &[0x57, 0xCC88]), // U+1E84
        (0xE1BA85, 0, &[0x77, 0xCC88]), // U+1E85
        (0xE1BA86, 0, &[0x57, 0xCC87]), // U+1E86
        (0xE1BA87, 0, &[0x77, 0xCC87]), // U+1E87
        (0xE1BA88, 0, &[0x57, 0xCCA3]), // U+1E88
        (0xE1BA89, 0, &[0x77, 0xCCA3]), // U+1E89
        (0xE1BA8A, 0, &[0x58, 0xCC87]), // U+1E8A
        (0xE1BA8B, 0, &[0x78, 0xCC87]), // U+1E8B
        (0xE1BA8C, 0, &[0x58, 0xCC88]), // U+1E8C
        (0xE1BA8D, 0, &[0x78, 0xCC88]), // U+1E8D
        (0xE1BA8E, 0, &[0x59, 0xCC87]), // U+1E8E
        (0xE1BA8F, 0, &[0x79, 0xCC87]), // U+1E8F
        (0xE1BA90, 0, &[0x5A, 0xCC82]), // U+1E90
        (0xE1BA91, 0, &[0x7A, 0xCC82]), // U+1E91
        (0xE1BA92, 0, &[0x5A, 0xCCA3]), // U+1E92
        (0xE1BA93, 0, &[0x7A, 0xCCA3]), // U+1E93
        (0xE1BA94, 0, &[0x5A, 0xCCB1]), // U+1E94
        (0xE1BA95, 0, &[0x7A, 0xCCB1]), // U+1E95
        (0xE1BA96, 0, &[0x68, 0xCCB1]), // U+1E96
        (0xE1BA97, 0, &[0x74, 0xCC88]), // U+1E97
        (0xE1BA98, 0, &[0x77, 0xCC8A]), // U+1E98
        (0xE1BA99, 0, &[0x79, 0xCC8A]), // U+1E99
        (0xE1BA9A, 0, &[0x61, 0xCABE]), // U+1E9A
        (0xE1BA9B, 0, &[0xC5BF, 0xCC87]), // U+1E9B
        (0xE1BAA0, 0, &[0x41, 0xCCA3]), // U+1EA0
        (0xE1BAA1, 0, &[0x61, 0xCCA3]), // U+1EA1
        (0xE1BAA2, 0, &[0x41, 0xCC89]), // U+1EA2
        (0xE1BAA3, 0, &[0x61, 0xCC89]), // U+1EA3
        (0xE1BAA4, 0, &[0xC382, 0xCC81]), // U+1EA4
        (0xE1BAA5, 0, &[0xC3A2, 0xCC81]), // U+1EA5
        (0xE1BAA6, 0, &[0xC382, 0xCC80]), // U+1EA6
        (0xE1BAA7, 0, &[0xC3A2, 0xCC80]), // U+1EA7
        (0xE1BAA8, 0, &[0xC382, 0xCC89]), // U+1EA8
        (0xE1BAA9, 0, &[0xC3A2, 0xCC89]), // U+1EA9
        (0xE1BAAA, 0, &[0xC382, 0xCC83]), // U+1EAA
        (0xE1BAAB, 0, &[0xC3A2, 0xCC83]), // U+1EAB
        (0xE1BAAC, 0, &[0xE1BAA0, 0xCC82]), // U+1EAC
        (0xE1BAAD, 0, &[0xE1BAA1, 0xCC82]), // U+1EAD
        (0xE1BAAE, 0, &[0xC482, 0xCC81]), // U+1EAE
        (0xE1BAAF, 0, &[0xC483, 0xCC81]), // U+1EAF
        (0xE1BAB0, 0, &[0xC482, 0xCC80]), // U+1EB0
        (0xE1BAB1, 0, &[0xC483, 0xCC80]), // U+1EB1
        (0xE1BAB2, 0, &[0xC482, 0xCC89]), // U+1EB2
        (0xE1BAB3, 0, &[0xC483, 0xCC89]), // U+1EB3
        (0xE1BAB4, 0, &[0xC482, 0xCC83]), // U+1EB4
        (0xE1BAB5, 0, &[0xC483, 0xCC83]), // U+1EB5
        (0xE1BAB6, 0, &[0xE1BAA0, 0xCC86]), // U+1EB6
        (0xE1BAB7, 0, &[0xE1BAA1, 0xCC86]), // U+1EB7
        (0xE1BAB8, 0, &[0x45, 0xCCA3]), // U+1EB8
        (0xE1BAB9, 0, &[0x65, 0xCCA3]), // U+1EB9
        (0xE1BABA, 0, &[0x45, 0xCC89]), // U+1EBA
        (0xE1BABB, 0, &[0x65, 0xCC89]), // U+1EBB
        (0xE1BABC, 0, &[0x45, 0xCC83]), // U+1EBC
        (0xE1BABD, 0, &[0x65, 0xCC83]), // U+1EBD
        (0xE1BABE, 0, &[0xC38A, 0xCC81]), // U+1EBE
        (0xE1BABF, 0, &[0xC3AA, 0xCC81]), // U+1EBF
        (0xE1BB80, 0, &[0xC38A, 0xCC80]), // U+1EC0
        (0xE1BB81, 0, &[0xC3AA, 0xCC80]), // U+1EC1
        (0xE1BB82, 0, &[0xC38A, 0xCC89]), // U+1EC2
        (0xE1BB83, 0, &[0xC3AA, 0xCC89]), // U+1EC3
        (0xE1BB84, 0, &[0xC38A, 0xCC83]), // U+1EC4
        (0xE1BB85, 0, &[0xC3AA, 0xCC83]), // U+1EC5
        (0xE1BB86, 0, &[0xE1BAB8, 0xCC82]), // U+1EC6
        (0xE1BB87, 0, &[0xE1BAB9, 0xCC82]), // U+1EC7
        (0xE1BB88, 0, &[0x49, 0xCC89]), // U+1EC8
        (0xE1BB89, 0, &[0x69, 0xCC89]), // U+1EC9
        (0xE1BB8A, 0, &[0x49, 0xCCA3]), // U+1ECA
        (0xE1BB8B, 0, &[0x69, 0xCCA3]), // U+1ECB
        (0xE1BB8C, 0, &[0x4F, 0xCCA3]), // U+1ECC
        (0xE1BB8D, 0, &[0x6F, 0xCCA3]), // U+1ECD
        (0xE1BB8E, 0, &[0x4F, 0xCC89]), // U+1ECE
        (0xE1BB8F, 0, &[0x6F, 0xCC89]), // U+1ECF
        (0xE1BB90, 0, &[0xC394, 0xCC81]), // U+1ED0
        (0xE1BB91, 0, &[0xC3B4, 0xCC81]), // U+1ED1
        (0xE1BB92, 0, &[0xC394, 0xCC80]), // U+1ED2
        (0xE1BB93, 0, &[0xC3B4, 0xCC80]), // U+1ED3
        (0xE1BB94, 0, &[0xC394, 0xCC89]), // U+1ED4
        (0xE1BB95, 0, &[0xC3B4, 0xCC89]), // U+1ED5
        (0xE1BB96, 0, &[0xC394, 0xCC83]), // U+1ED6
        (0xE1BB97, 0, &[0xC3B4, 0xCC83]), // U+1ED7
        (0xE1BB98, 0, &[0xE1BB8C, 0xCC82]), // U+1ED8
        (0xE1BB99, 0, &[0xE1BB8D, 0xCC82]), // U+1ED9
        (0xE1BB9A, 0, &[0xC6A0, 0xCC81]), // U+1EDA
        (0xE1BB9B, 0, &[0xC6A1, 0xCC81]), // U+1EDB
        (0xE1BB9C, 0, &[0xC6A0, 0xCC80]), // U+1EDC
        (0xE1BB9D, 0, &[0xC6A1, 0xCC80]), // U+1EDD
        (0xE1BB9E, 0, &[0xC6A0, 0xCC89]), // U+1EDE
        (0xE1BB9F, 0, &[0xC6A1, 0xCC89]), // U+1EDF
        (0xE1BBA0, 0, &[0xC6A0, 0xCC83]), // U+1EE0
        (0xE1BBA1, 0, &[0xC6A1, 0xCC83]), // U+1EE1
        (0xE1BBA2, 0, &[0xC6A0, 0xCCA3]), // U+1EE2
        (0xE1BBA3, 0, &[0xC6A1, 0xCCA3]), // U+1EE3
        (0xE1BBA4, 0, &[0x55, 0xCCA3]), // U+1EE4
        (0xE1BBA5, 0, &[0x75, 0xCCA3]), // U+1EE5
        (0xE1BBA6, 0, &[0x55, 0xCC89]), // U+1EE6
        (0xE1BBA7, 0, &[0x75, 0xCC89]), // U+1EE7
        (0xE1BBA8, 0, &[0xC6AF, 0xCC81]), // U+1EE8
        (0xE1BBA9, 0, &[0xC6B0, 0xCC81]), // U+1EE9
        (0xE1BBAA, 0, &[0xC6AF, 0xCC80]), // U+1EEA
        (0xE1BBAB, 0, &[0xC6B0, 0xCC80]), // U+1EEB
        (0xE1BBAC, 0, &[0xC6AF, 0xCC89]), // U+1EEC
        (0xE1BBAD, 0, &[0xC6B0, 0xCC89]), // U+1EED
        (0xE1BBAE, 0, &[0xC6AF, 0xCC83]), // U+1EEE
        (0xE1BBAF, 0, &[0xC6B0, 0xCC83]), // U+1EEF
        (0xE1BBB0, 0, &[0xC6AF, 0xCCA3]), // U+1EF0
        (0xE1BBB1, 0, &[0xC6B0, 0xCCA3]), // U+1EF1
        (0xE1BBB2, 0, &[0x59, 0xCC80]), // U+1EF2
        (0xE1BBB3, 0, &[0x79, 0xCC80]), // U+1EF3
        (0xE1BBB4, 0, &[0x59, 0xCCA3]), // U+1EF4
        (0xE1BBB5, 0, &[0x79, 0xCCA3]), // U+1EF5
        (0xE1BBB6, 0, &[0x59, 0xCC89]), // U+1EF6
        (0xE1BBB7, 0, &[0x79, 0xCC89]), // U+1EF7
        (0xE1BBB8, 0, &[0x59, 0xCC83]), // U+1EF8
        (0xE1BBB9, 0, &[0x79, 0xCC83]), // U+1EF9
        (0xE1BC80, 0, &[0xCEB1, 0xCC93]), // U+1F00
        (0xE1BC81, 0, &[0xCEB1, 0xCC94]), // U+1F01
        (0xE1BC82, 0, &[0xE1BC80, 0xCC80]), // U+1F02
        (0xE1BC83, 0, &[0xE1BC81, 0xCC80]), // U+1F03
        (0xE1BC84, 0, &[0xE1BC80, 0xCC81]), // U+1F04
        (0xE1BC85, 0, &[0xE1BC81, 0xCC81]), // U+1F05
        (0xE1BC86, 0, &[0xE1BC80, 0xCD82]), // U+1F06
        (0xE1BC87, 0, &[0xE1BC81, 0xCD82]), // U+1F07
        (0xE1BC88, 0, &[0xCE91, 0xCC93]), // U+1F08
        (0xE1BC89, 0, &[0xCE91, 0xCC94]), // U+1F09
        (0xE1BC8A, 0, &[0xE1BC88, 0xCC80]), // U+1F0A
        (0xE1BC8B, 0, &[0xE1BC89, 0xCC80]), // U+1F0B
        (0xE1BC8C, 0, &[0xE1BC88, 0xCC81]), // U+1F0C
        (0xE1BC8D, 0, &[0xE1BC89, 0xCC81]), // U+1F0D
        (0xE1BC8E, 0, &[0xE1BC88, 0xCD82]), // U+1F0E
        (0xE1BC8F, 0, &[0xE1BC89, 0xCD82]), // U+1F0F
        (0xE1BC90, 0, &[0xCEB5, 0xCC93]), // U+1F10
        (0xE1BC91, 0, &[0xCEB5, 0xCC94]), // U+1F11
        (0xE1BC92, 0, &[0xE1BC90, 0xCC80]), // U+1F12
        (0xE1BC93, 0, &[0xE1BC91, 0xCC80]), // U+1F13
        (0xE1BC94, 0, &[0xE1BC90, 0xCC81]), // U+1F14
        (0xE1BC95, 0, &[0xE1BC91, 0xCC81]), // U+1F15
        (0xE1BC98, 0, &[0xCE95, 0xCC93]), // U+1F18
        (0xE1BC99, 0, &[0xCE95, 0xCC94]), // U+1F19
        (0xE1BC9A, 0, &[0xE1BC98, 0xCC80]), // U+1F1A
        (0xE1BC9B, 0, &[0xE1BC99, 0xCC80]), // U+1F1B
        (0xE1BC9C, 0, &[0xE1BC98, 0xCC81]), // U+1F1C
        (0xE1BC9D, 0, &[0xE1BC99, 0xCC81]), // U+1F1D
        (0xE1BCA0, 0, &[0xCEB7, 0xCC93]), // U+1F20
        (0xE1BCA1, 0, &[0xCEB7, 0xCC94]), // U+1F21
        (0xE1BCA2, 0, &[0xE1BCA0, 0xCC80]), // U+1F22
        (0xE1BCA3, 0, &[0xE1BCA1, 0xCC80]), // U+1F23
        (0xE1BCA4, 0, &[0xE1BCA0, 0xCC81]), // U+1F24
        (0xE1BCA5, 0, &[0xE1BCA1, 0xCC81]), // U+1F25
        (0xE1BCA6, 0, &[0xE1BCA0, 0xCD82]), // U+1F26
        (0xE1BCA7, 0, &[0xE1BCA1, 0xCD82]), // U+1F27
        (0xE1BCA8, 0, &[0xCE97, 0xCC93]), // U+1F28
        (0xE1BCA9, 0, &[0xCE97, 0xCC94]), // U+1F29
        (0xE1BCAA, 0, &[0xE1BCA8, 0xCC80]), // U+1F2A
        (0xE1BCAB, 0, &[0xE1BCA9, 0xCC80]), // U+1F2B
        (0xE1BCAC, 0, &[0xE1BCA8, 0xCC81]), // U+1F2C
        (0xE1BCAD, 0, &[0xE1BCA9, 0xCC81]), // U+1F2D
        (0xE1BCAE, 0, &[0xE1BCA8, 0xCD82]), // U+1F2E
        (0xE1BCAF, 0, &[0xE1BCA9, 0xCD82]), // U+1F2F
        (0xE1BCB0, 0, &[0xCEB9, 0xCC93]), // U+1F30
        (0xE1BCB1, 0, &[0xCEB9, 0xCC94]), // U+1F31
        (0xE1BCB2, 0, &[0xE1BCB0, 0xCC80]), // U+1F32
        (0xE1BCB3, 0, &[0xE1BCB1, 0xCC80]), // U+1F33
        (0xE1BCB4, 0, &[0xE1BCB0, 0xCC81]), // U+1F34
        (0xE1BCB5, 0, &[0xE1BCB1, 0xCC81]), // U+1F35
        (0xE1BCB6, 0, &[0xE1BCB0, 0xCD82]), // U+1F36
        (0xE1BCB7, 0, &[0xE1BCB1, 0xCD82]), // U+1F37
        (0xE1BCB8, 0, &[0xCE99, 0xCC93]), // U+1F38
        (0xE1BCB9, 0, &[0xCE99, 0xCC94]), // U+1F39
        (0xE1BCBA, 0, &[0xE1BCB8, 0xCC80]), // U+1F3A
        (0xE1BCBB, 0, &[0xE1BCB9, 0xCC80]), // U+1F3B
        (0xE1BCBC, 0, &[0xE1BCB8, 0xCC81]), // U+1F3C
        (0xE1BCBD, 0, &[0xE1BCB9, 0xCC81]), // U+1F3D
        (0xE1BCBE, 0, &[0xE1BCB8, 0xCD82]), // U+1F3E
        (0xE1BCBF, 0, &[0xE1BCB9, 0xCD82]), // U+1F3F
        (0xE1BD80, 0, &[0xCEBF, 0xCC93]), // U+1F40
        (0xE1BD81, 0, &[0xCEBF, 0xCC94]), // U+1F41
        (0xE1BD82, 0, &[0xE1BD80, 0xCC80]), // U+1F42
        (0xE1BD83, 0, &[0xE1BD81, 0xCC80]), // U+1F43
        (0xE1BD84, 0, &[0xE1BD80, 0xCC81]), // U+1F44
        (0xE1BD85, 0, &[0xE1BD81, 0xCC81]), // U+1F45
        (0xE1BD88, 0, &[0xCE9F, 0xCC93]), // U+1F48
        (0xE1BD89, 0, &[0xCE9F, 0xCC94]), // U+1F49
        (0xE1BD8A, 0, &[0xE1BD88, 0xCC80]), // U+1F4A
        (0xE1BD8B, 0, &[0xE1BD89, 0xCC80]), // U+1F4B
        (0xE1BD8C, 0, &[0xE1BD88, 0xCC81]), // U+1F4C
        (0xE1BD8D, 0, &[0xE1BD89, 0xCC81]), // U+1F4D
        (0xE1BD90, 0, &[0xCF85, 0xCC93]), // U+1F50
        (0xE1BD91, 0, &[0xCF85, 0xCC94]), // U+1F51
        (0xE1BD92, 0, &[0xE1BD90, 0xCC80]), // U+1F52
        (0xE1BD93, 0, &[0xE1BD91, 0xCC80]), // U+1F53
        (0xE1BD94, 0, &[0xE1BD90, 0xCC81]), // U+1F54
        (0xE1BD95, 0, &[0xE1BD91, 0xCC81]), // U+1F55
        (0xE1BD96, 0, &[0xE1BD90, 0xCD82]), // U+1F56
        (0xE1BD97, 0, &[0xE1BD91, 0xCD82]), // U+1F57
        (0xE1BD99, 0, &[0xCEA5, 0xCC94]), // U+1F59
        (0xE1BD9B, 0, &[0xE1BD99, 0xCC80]), // U+1F5B
        (0xE1BD9D, 0, &[0xE1BD99, 0xCC81]), // U+1F5D
        (0xE1BD9F, 0, &[0xE1BD99, 0xCD82]), // U+1F5F
        (0xE1BDA0, 0, &[0xCF89, 0xCC93]), // U+1F60
        (0xE1BDA1, 0, &[0xCF89, 0xCC94]), // U+1F61
        (0xE1BDA2, 0, &[0xE1BDA0, 0xCC80]), // U+1F62
        (0xE1BDA3, 0, &[0xE1BDA1, 0xCC80]), // U+1F63
        (0xE1BDA4, 0, &[0xE1BDA0, 0xCC81]), // U+1F64
        (0xE1BDA5, 0, &[0xE1BDA1, 0xCC81]), // U+1F65
        (0xE1BDA6, 0, &[0xE1BDA0, 0xCD82]), // U+1F66
        (0xE1BDA7, 0, &[0xE1BDA1, 0xCD82]), // U+1F67
        (0xE1BDA8, 0, &[0xCEA9, 0xCC93]), // U+1F68
        (0xE1BDA9, 0, &[0xCEA9, 0xCC94]), // U+1F69
        (0xE1BDAA, 0, &[0xE1BDA8, 0xCC80]), // U+1F6A
        (0xE1BDAB, 0, &[0xE1BDA9, 0xCC80]), // U+1F6B
        (0xE1BDAC, 0, &[0xE1BDA8, 0xCC81]), // U+1F6C
        (0xE1BDAD, 0, &[0xE1BDA9, 0xCC81]), // U+1F6D
        (0xE1BDAE, 0, &[0xE1BDA8, 0xCD82]), // U+1F6E
        (0xE1BDAF, 0, &[0xE1BDA9, 0xCD82]), // U+1F6F
        (0xE1BDB0, 0, &[0xCEB1, 0xCC80]), // U+1F70
        (0xE1BDB1, 0, &[0xCEAC]), // U+1F71
        (0xE1BDB2, 0, &[0xCEB5, 0xCC80]), // U+1F72
        (0xE1BDB3, 0, &[0xCEAD]), // U+1F73
        (0xE1BDB4, 0, &[0xCEB7, 0xCC80]), // U+1F74
        (0xE1BDB5, 0, &[0xCEAE]), // U+1F75
        (0xE1BDB6, 0, &[0xCEB9, 0xCC80]), // U+1F76
        (0xE1BDB7, 0, &[0xCEAF]), // U+1F77
        (0xE1BDB8, 0, &[0xCEBF, 0xCC80]), // U+1F78
        (0xE1BDB9, 0, &[0xCF8C]), // U+1F79
        (0xE1BDBA, 0, &[0xCF85, 0xCC80]), // U+1F7A
        (0xE1BDBB, 0, &[0xCF8D]), // U+1F7B
        (0xE1BDBC, 0, &[0xCF89, 0xCC80]), // U+1F7C
        (0xE1BDBD, 0, &[0xCF8E]), // U+1F7D
        (0xE1BE80, 0, &[0xE1BC80, 0xCD85]), // U+1F80
        (0xE1BE81, 0, &[0xE1BC81, 0xCD85]), // U+1F81
        (0xE1BE82, 0, &[0xE1BC82, 0xCD85]), // U+1F82
        (0xE1BE83, 0, &[0xE1BC83, 0xCD85]), // U+1F83
        (0xE1BE84, 0, &[0xE1BC84, 0xCD85]), // U+1F84
        (0xE1BE85, 0, &[0xE1BC85, 0xCD85]), // U+1F85
        (0xE1BE86, 0, &[0xE1BC86, 0xCD85]), // U+1F86
        (0xE1BE87, 0, &[0xE1BC87, 0xCD85]), // U+1F87
        (0xE1BE88, 0, &[0xE1BC88, 0xCD85]), // U+1F88
        (0xE1BE89, 0, &[0xE1BC89, 0xCD85]), // U+1F89
        (0xE1BE8A, 0, &[0xE1BC8A, 0xCD85]), // U+1F8A
        (0xE1BE8B, 0, &[0xE1BC8B, 0xCD85]), // U+1F8B
        (0xE1BE8C, 0, &[0xE1BC8C, 0xCD85]), // U+1F8C
        (0xE1BE8D, 0, &[0xE1BC8D, 0xCD85]), // U+1F8D
        (0xE1BE8E, 0, &[0xE1BC8E, 0xCD85]), // U+1F8E
        (0xE1BE8F, 0, &[0xE1BC8F, 0xCD85]), // U+1F8F
        (0xE1BE90, 0, &[0xE1BCA0, 0xCD85]), // U+1F90
        (0xE1BE91, 0, &[0xE1BCA1, 0xCD85]), // U+1F91
        (0xE1BE92, 0, &[0xE1BCA2, 0xCD85]), // U+1F92
        (0xE1BE93, 0, &[0xE1BCA3, 0xCD85]), // U+1F93
        (0xE1BE94, 0, &[0xE1BCA4, 0xCD85]), // U+1F94
        (0xE1BE95, 0, &[0xE1BCA5, 0xCD85]), // U+1F95
        (0xE1BE96, 0, &[0xE1BCA6, 0xCD85]), // U+1F96
        (0xE1BE97, 0, &[0xE1BCA7, 0xCD85]), // U+1F97
        (0xE1BE98, 0, &[0xE1BCA8, 0xCD85]), // U+1F98
        (0xE1BE99, 0, &[0xE1BCA9, 0xCD85]), // U+1F99
        (0xE1BE9A, 0, &[0xE1BCAA, 0xCD85]), // U+1F9A
        (0xE1BE9B, 0, &[0xE1BCAB, 0xCD85]), // U+1F9B
        (0xE1BE9C, 0, &[0xE1BCAC, 0xCD85]), // U+1F9C
        (0xE1BE9D, 0, &[0xE1BCAD, 0xCD85]), // U+1F9D
        (0xE1BE9E, 0, &[0xE1BCAE, 0xCD85]), // U+1F9E
        (0xE1BE9F, 0, &[0xE1BCAF, 0xCD85]), // U+1F9F
        (0xE1BEA0, 0, &[0xE1BDA0, 0xCD85]), // U+1FA0
        (0xE1BEA1, 0, &[0xE1BDA1, 0xCD85]), // U+1FA1
        (0xE1BEA2, 0, &[0xE1BDA2, 0xCD85]), // U+1FA2
        (0xE1BEA3, 0, &[0xE1BDA3, 0xCD85]), // U+1FA3
        (0xE1BEA4, 0, &[0xE1BDA4, 0xCD85]), // U+1FA4
        (0xE1BEA5, 0, &[0xE1BDA5, 0xCD85]), // U+1FA5
        (0xE1BEA6, 0, &[0xE1BDA6, 0xCD85]), // U+1FA6
        (0xE1BEA7, 0, &[0xE1BDA7, 0xCD85]), // U+1FA7
        (0xE1BEA8, 0, &[0xE1BDA8, 0xCD85]), // U+1FA8
        (0xE1BEA9, 0, &[0xE1BDA9, 0xCD85]), // U+1FA9
        (0xE1BEAA, 0, &[0xE1BDAA, 0xCD85]), // U+1FAA
        (0xE1BEAB, 0, &[0xE1BDAB, 0xCD85]), // U+1FAB
        (0xE1BEAC, 0, &[0xE1BDAC, 0xCD85]), // U+1FAC
        (0xE1BEAD, 0, &[0xE1BDAD, 0xCD85]), // U+1FAD
        (0xE1BEAE, 0, &[0xE1BDAE, 0xCD85]), // U+1FAE
        (0xE1BEAF, 0, &[0xE1BDAF, 0xCD85]), // U+1FAF
        (0xE1BEB0, 0, &[0xCEB1, 0xCC86]), // U+1FB0
        (0xE1BEB1, 0, &[0xCEB1, 0xCC84]), // U+1FB1
        (0xE1BEB2, 0, &[0xE1BDB0, 0xCD85]), // U+1FB2
        (0xE1BEB3, 0, &[0xCEB1, 0xCD85]), // U+1FB3
        (0xE1BEB4, 0, &[0xCEAC, 0xCD85]), // U+1FB4
        (0xE1BEB6, 0, &[0xCEB1, 0xCD82]), // U+1FB6
        (0xE1BEB7, 0, &[0xE1BEB6, 0xCD85]), // U+1FB7
        (0xE1BEB8, 0, &[0xCE91, 0xCC86]), // U+1FB8
        (0xE1BEB9, 0, &[0xCE91, 0xCC84]), // U+1FB9
        (0xE1BEBA, 0, &[0xCE91, 0xCC80]), // U+1FBA
        (0xE1BEBB, 0, &[0xCE86]), // U+1FBB
        (0xE1BEBC, 0, &[0xCE91, 0xCD85]), // U+1FBC
        (0xE1BEBD, 0, &[0x20, 0xCC93]), // U+1FBD
        (0xE1BEBE, 0, &[0xCEB9]), // U+1FBE
        (0xE1BEBF, 0, &[0x20, 0xCC93]), // U+1FBF
        (0xE1BF80, 0, &[0x20, 0xCD82]), // U+1FC0
        (0xE1BF81, 0, &[0xC2A8, 0xCD82]), // U+1FC1
        (0xE1BF82, 0, &[0xE1BDB4, 0xCD85]), // U+1FC2
        (0xE1BF83, 0, &[0xCEB7, 0xCD85]), // U+1FC3
        (0xE1BF84, 0, &[0xCEAE, 0xCD85]), // U+1FC4
        (0xE1BF86, 0, &[0xCEB7, 0xCD82]), // U+1FC6
        (0xE1BF87, 0, &[0xE1BF86, 0xCD85]), // U+1FC7
        (0xE1BF88, 0, &[0xCE95, 0xCC80]), // U+1FC8
        (0xE1BF89, 0, &[0xCE88]), // U+1FC9
        (0xE1BF8A, 0, &[0xCE97, 0xCC80]), // U+1FCA
        (0xE1BF8B, 0, &[0xCE89]), // U+1FCB
        (0xE1BF8C, 0, &[0xCE97, 0xCD85]), // U+1FCC
        (0xE1BF8D, 0, &[0xE1BEBF, 0xCC80]), // U+1FCD
        (0xE1BF8E, 0, &[0xE1BEBF, 0xCC81]), // U+1FCE
        (0xE1BF8F, 0, &[0xE1BEBF, 0xCD82]), // U+1FCF
        (0xE1BF90, 0, &[0xCEB9, 0xCC86]), // U+1FD0
        (0xE1BF91, 0, &[0xCEB9, 0xCC84]), // U+1FD1
        (0xE1BF92, 0, &[0xCF8A, 0xCC80]), // U+1FD2
        (0xE1BF93, 0, &[0xCE90]), // U+1FD3
        (0xE1BF96, 0, &[0xCEB9, 0xCD82]), // U+1FD6
        (0xE1BF97, 0, &[0xCF8A, 0xCD82]), // U+1FD7
        (0xE1BF98, 0, &[0xCE99, 0xCC86]), // U+1FD8
        (0xE1BF99, 0, &[0xCE99, 0xCC84]), // U+1FD9
        (0xE1BF9A, 0, &[0xCE99, 0xCC80]), // U+1FDA
        (0xE1BF9B, 0, &[0xCE8A]), // U+1FDB
        (0xE1BF9D, 0, &[0xE1BFBE, 0xCC80]), // U+1FDD
        (0xE1BF9E, 0, &[0xE1BFBE, 0xCC81]), // U+1FDE
        (0xE1BF9F, 0, &[0xE1BFBE, 0xCD82]), // U+1FDF
        (0xE1BFA0, 0, &[0xCF85, 0xCC86]), // U+1FE0
        (0xE1BFA1, 0, &[0xCF85, 0xCC84]), // U+1FE1
        (0xE1BFA2, 0, &[0xCF8B, 0xCC80]), // U+1FE2
        (0xE1BFA3, 0, &[0xCEB0]), // U+1FE3
        (0xE1BFA4, 0, &[0xCF81, 0xCC93]), // U+1FE4
        (0xE1BFA5, 0, &[0xCF81, 0xCC94]), // U+1FE5
        (0xE1BFA6, 0, &[0xCF85, 0xCD82]), // U+1FE6
        (0xE1BFA7, 0, &[0xCF8B, 0xCD82]), // U+1FE7
        (0xE1BFA8, 0, &[0xCEA5, 0xCC86]), // U+1FE8
        (0xE1BFA9, 0, &[0xCEA5, 0xCC84]), // U+1FE9
        (0xE1BFAA, 0, &[0xCEA5, 0xCC80]), // U+1FEA
        (0xE1BFAB, 0, &[0xCE8E]), // U+1FEB
        (0xE1BFAC, 0, &[0xCEA1, 0xCC94]), // U+1FEC
        (0xE1BFAD, 0, &[0xC2A8, 0xCC80]), // U+1FED
        (0xE1BFAE, 0, &[0xCE85]), // U+1FEE
        (0xE1BFAF, 0, &[0x60]), // U+1FEF
        (0xE1BFB2, 0, &[0xE1BDBC, 0xCD85]), // U+1FF2
        (0xE1BFB3, 0, &[0xCF89, 0xCD85]), // U+1FF3
        (0xE1BFB4, 0, &[0xCF8E, 0xCD85]), // U+1FF4
        (0xE1BFB6, 0, &[0xCF89, 0xCD82]), // U+1FF6
        (0xE1BFB7, 0, &[0xE1BFB6, 0xCD85]), // U+1FF7
        (0xE1BFB8, 0, &[0xCE9F, 0xCC80]), // U+1FF8
        (0xE1BFB9, 0, &[0xCE8C]), // U+1FF9
        (0xE1BFBA, 0, &[0xCEA9, 0xCC80]), // U+1FFA
        (0xE1BFBB, 0, &[0xCE8F]), // U+1FFB
        (0xE1BFBC, 0, &[0xCEA9, 0xCD85]), // U+1FFC
        (0xE1BFBD, 0, &[0xC2B4]), // U+1FFD
        (0xE1BFBE, 0, &[0x20, 0xCC94]), // U+1FFE
        (0xE28080, 0, &[0xE28082]), // U+2000
        (0xE28081, 0, &[0xE28083]), // U+2001
        (0xE28082, 0, &[0x20]), // U+2002
        (0xE28083, 0, &[0x20]), // U+2003
        (0xE28084, 0, &[0x20]), // U+2004
        (0xE28085, 0, &[0x20]), // U+2005
        (0xE28086, 0, &[0x20]), // U+2006
        (0xE28087, 0, &[0x20]), // U+2007
        (0xE28088, 0, &[0x20]), // U+2008
        (0xE28089, 0, &[0x20]), // U+2009
        (0xE2808A, 0, &[0x20]), // U+200A
        (0xE28091, 0, &[0xE28090]), // U+2011
        (0xE28097, 0, &[0x20, 0xCCB3]), // U+2017
        (0xE280A4, 0, &[0x2E]), // U+2024
        (0xE280A5, 0, &[0x2E, 0x2E]), // U+2025
        (0xE280A6, 0, &[0x2E, 0x2E, 0x2E]), // U+2026
        (0xE280AF, 0, &[0x20]), // U+202F
        (0xE280B3, 0, &[0xE280B2, 0xE280B2]), // U+2033
        (0xE280B4, 0, &[0xE280B2, 0xE280B2, 0xE280B2]), // U+2034
        (0xE280B6, 0, &[0xE280B5, 0xE280B5]), // U+2036
        (0xE280B7, 0, &[0xE280B5, 0xE280B5, 0xE280B5]), // U+2037
        (0xE280BC, 0, &[0x21, 0x21]), // U+203C
        (0xE280BE, 0, &[0x20, 0xCC85]), // U+203E
        (0xE28187, 0, &[0x3F, 0x3F]), // U+2047
        (0xE28188, 0, &[0x3F, 0x21]), // U+2048
        (0xE28189, 0, &[0x21, 0x3F]), // U+2049
        (0xE28197, 0, &[0xE280B2, 0xE280B2, 0xE280B2, 0xE280B2]), // U+2057
        (0xE2819F, 0, &[0x20]), // U+205F
        (0xE281B0, 0, &[0x30]), // U+2070
        (0xE281B1, 0, &[0x69]), // U+2071
        (0xE281B4, 0, &[0x34]), // U+2074
        (0xE281B5, 0, &[0x35]), // U+2075
        (0xE281B6, 0, &[0x36]), // U+2076
        (0xE281B7, 0, &[0x37]), // U+2077
        (0xE281B8, 0, &[0x38]), // U+2078
        (0xE281B9, 0, &[0x39]), // U+2079
        (0xE281BA, 0, &[0x2B]), // U+207A
        (0xE281BB, 0, &[0xE28892]), // U+207B
        (0xE281BC, 0, &[0x3D]), // U+207C
        (0xE281BD, 0, &[0x28]), // U+207D
        (0xE281BE, 0, &[0x29]), // U+207E
        (0xE281BF, 0, &[0x6E]), // U+207F
        (0xE28280, 0, &[0x30]), // U+2080
        (0xE28281, 0, &[0x31]), // U+2081
        (0xE28282, 0, &[0x32]), // U+2082
        (0xE28283, 0, &[0x33]), // U+2083
        (0xE28284, 0, &[0x34]), // U+2084
        (0xE28285, 0, &[0x35]), // U+2085
        (0xE28286, 0, &[0x36]), // U+2086
        (0xE28287, 0, &[0x37]), // U+2087
        (0xE28288, 0, &[0x38]), // U+2088
        (0xE28289, 0, &[0x39]), // U+2089
        (0xE2828A, 0, &[0x2B]), // U+208A
        (0xE2828B, 0, &[0xE28892]), // U+208B
        (0xE2828C, 0, &[0x3D]), // U+208C
        (0xE2828D, 0, &[0x28]), // U+208D
        (0xE2828E, 0, &[0x29]), // U+208E
        (0xE28290, 0, &[0x61]), // U+2090
        (0xE28291, 0, &[0x65]), // U+2091
        (0xE28292, 0, &[0x6F]), // U+2092
        (0xE28293, 0, &[0x78]), // U+2093
        (0xE28294, 0, &[0xC999]), // U+2094
        (0xE28295, 0, &[0x68]), // U+2095
        (0xE28296, 0, &[0x6B]), // U+2096
        (0xE28297, 0, &[0x6C]), // U+2097
        (0xE28298, 0, &[0x6D]), // U+2098
        (0xE28299, 0, &[0x6E]), // U+2099
        (0xE2829A, 0, &[0x70]), // U+209A
        (0xE2829B, 0, &[0x73]), // U+209B
        (0xE2829C, 0, &[0x74]), // U+209C
        (0xE282A8, 0, &[0x52, 0x73]), // U+20A8
        (0xE28390, 230, &[]), // U+20D0
        (0xE28391, 230, &[]), // U+20D1
        (0xE28392, 1, &[]), // U+20D2
        (0xE28393, 1, &[]), // U+20D3
        (0xE28394, 230, &[]), // U+20D4
        (0xE28395, 230, &[]), // U+20D5
        (0xE28396, 230, &[]), // U+20D6
        (0xE28397, 230, &[]), // U+20D7
        (0xE28398, 1, &[]), // U+20D8
        (0xE28399, 1, &[]), // U+20D9
        (0xE2839A, 1, &[]), // U+20DA
        (0xE2839B, 230, &[]), // U+20DB
        (0xE2839C, 230, &[]), // U+20DC
        (0xE283A1, 230, &[]), // U+20E1
        (0xE283A5, 1, &[]), // U+20E5
        (0xE283A6, 1, &[]), // U+20E6
        (0xE283A7, 230, &[]), // U+20E7
        (0xE283A8, 220, &[]), // U+20E8
        (0xE283A9, 230, &[]), // U+20E9
        (0xE283AA, 1, &[]), // U+20EA
        (0xE283AB, 1, &[]), // U+20EB
        (0xE283AC, 220, &[]), // U+20EC
        (0xE283AD, 220, &[]), // U+20ED
        (0xE283AE, 220, &[]), // U+20EE
        (0xE283AF, 220, &[]), // U+20EF
        (0xE283B0, 230, &[]), // U+20F0
        (0xE28480, 0, &[0x61, 0x2F, 0x63]), // U+2100
        (0xE28481, 0, &[0x61, 0x2F, 0x73]), // U+2101
        (0xE28482, 0, &[0x43]), // U+2102
        (0xE28483, 0, &[0xC2B0, 0x43]), // U+2103
        (0xE28485, 0, &[0x63, 0x2F, 0x6F]), // U+2105
        (0xE28486, 0, &[0x63, 0x2F, 0x75]), // U+2106
        (0xE28487, 0, &[0xC690]), // U+2107
        (0xE28489, 0, &[0xC2B0, 0x46]), // U+2109
        (0xE2848A, 0, &[0x67]), // U+210A
        (0xE2848B, 0, &[0x48]), // U+210B
        (0xE2848C, 0, &[0x48]), // U+210C
        (0xE2848D, 0, &[0x48]), // U+210D
        (0xE2848E, 0, &[0x68]), // U+210E
        (0xE2848F, 0, &[0xC4A7]), // U+210F
        (0xE28490, 0, &[0x49]), // U+2110
        (0xE28491, 0, &[0x49]), // U+2111
        (0xE28492, 0, &[0x4C]), // U+2112
        (0xE28493, 0, &[0x6C]), // U+2113
        (0xE28495, 0, &[0x4E]), // U+2115
        (0xE28496, 0, &[0x4E, 0x6F]), // U+2116
        (0xE28499, 0, &[0x50]), // U+2119
        (0xE2849A, 0, &[0x51]), // U+211A
        (0xE2849B, 0, &[0x52]), // U+211B
        (0xE2849C, 0, &[0x52]), // U+211C
        (0xE2849D, 0, &[0x52]), // U+211D
        (0xE284A0, 0, &[0x53, 0x4D]), // U+2120
        (0xE284A1, 0, &[0x54, 0x45, 0x4C]), // U+2121
        (0xE284A2, 0, &[0x54, 0x4D]), // U+2122
        (0xE284A4, 0, &[0x5A]), // U+2124
        (0xE284A6, 0, &[0xCEA9]), // U+2126
        (0xE284A8, 0, &[0x5A]), // U+2128
        (0xE284AA, 0, &[0x4B]), // U+212A
        (0xE284AB, 0, &[0xC385]), // U+212B
        (0xE284AC, 0, &[0x42]), // U+212C
        (0xE284AD, 0, &[0x43]), // U+212D
        (0xE284AF, 0, &[0x65]), // U+212F
        (0xE284B0, 0, &[0x45]), // U+2130
        (0xE284B1, 0, &[0x46]), // U+2131
        (0xE284B3, 0, &[0x4D]), // U+2133
        (0xE284B4, 0, &[0x6F]), // U+2134
        (0xE284B5, 0, &[0xD790]), // U+2135
        (0xE284B6, 0, &[0xD791]), // U+2136
        (0xE284B7, 0, &[0xD792]), // U+2137
        (0xE284B8, 0, &[0xD793]), // U+2138
        (0xE284B9, 0, &[0x69]), // U+2139
        (0xE284BB, 0, &[0x46, 0x41, 0x58]), // U+213B
        (0xE284BC, 0, &[0xCF80]), // U+213C
        (0xE284BD, 0, &[0xCEB3]), // U+213D
        (0xE284BE, 0, &[0xCE93]), // U+213E
        (0xE284BF, 0, &[0xCEA0]), // U+213F
        (0xE28580, 0, &[0xE28891]), // U+2140
        (0xE28585, 0, &[0x44]), // U+2145
        (0xE28586, 0, &[0x64]), // U+2146
        (0xE28587, 0, &[0x65]), // U+2147
        (0xE28588, 0, &[0x69]), // U+2148
        (0xE28589, 0, &[0x6A]), // U+2149
        (0xE28590, 0, &[0x31, 0xE28184, 0x37]), // U+2150
        (0xE28591, 0, &[0x31, 0xE28184, 0x39]), // U+2151
        (0xE28592, 0, &[0x31, 0xE28184, 0x31, 0x30]), // U+2152
        (0xE28593, 0, &[0x31, 0xE28184, 0x33]), // U+2153
        (0xE28594, 0, &[0x32, 0xE28184, 0x33]), // U+2154
        (0xE28595, 0, &[0x31, 0xE28184, 0x35]), // U+2155
        (0xE28596, 0, &[0x32, 0xE28184, 0x35]), // U+2156
        (0xE28597, 0, &[0x33, 0xE28184, 0x35]), // U+2157
        (0xE28598, 0, &[0x34, 0xE28184, 0x35]), // U+2158
        (0xE28599, 0, &[0x31, 0xE28184, 0x36]), // U+2159
        (0xE2859A, 0, &[0x35, 0xE28184, 0x36]), // U+215A
        (0xE2859B, 0, &[0x31, 0xE28184, 0x38]), // U+215B
        (0xE2859C, 0, &[0x33, 0xE28184, 0x38]), // U+215C
        (0xE2859D, 0, &[0x35, 0xE28184, 0x38]), // U+215D
        (0xE2859E, 0, &[0x37, 0xE28184, 0x38]), // U+215E
        (0xE2859F, 0, &[0x31, 0xE28184]), // U+215F
        (0xE285A0, 0, &[0x49]), // U+2160
        (0xE285A1, 0, &[0x49, 0x49]), // U+2161
        (0xE285A2, 0, &[0x49, 0x49, 0x49]), // U+2162
        (0xE285A3, 0, &[0x49, 0x56]), // U+2163
        (0xE285A4, 0, &[0x56]), // U+2164
        (0xE285A5, 0, &[0x56, 0x49]), // U+2165
        (0xE285A6, 0, &[0x56, 0x49, 0x49]), // U+2166
        (0xE285A7, 0, &[0x56, 0x49, 0x49, 0x49]), // U+2167
        (0xE285A8, 0, &[0x49, 0x58]), // U+2168
        (0xE285A9, 0, &[0x58]), // U+2169
        (0xE285AA, 0, &[0x58, 0x49]), // U+216A
        (0xE285AB, 0, &[0x58, 0x49, 0x49]), // U+216B
        (0xE285AC, 0, &[0x4C]), // U+216C
        (0xE285AD, 0, &[0x43]), // U+216D
        (0xE285AE, 0, &[0x44]), // U+216E
        (0xE285AF, 0, &[0x4D]), // U+216F
        (0xE285B0, 0, &[0x69]), // U+2170
        (0xE285B1, 0, &[0x69, 0x69]), // U+2171
        (0xE285B2, 0, &[0x69, 0x69, 0x69]), // U+2172
        (0xE285B3, 0, &[0x69, 0x76]), // U+2173
        (0xE285B4, 0, &[0x76]), // U+2174
        (0xE285B5, 0, &[0x76, 0x69]), // U+2175
        (0xE285B6, 0, &[0x76, 0x69, 0x69]), // U+2176
        (0xE285B7, 0, &[0x76, 0x69, 0x69, 0x69]), // U+2177
        (0xE285B8, 0, &[0x69, 0x78]), // U+2178
        (0xE285B9, 0, &[0x78]), // U+2179
        (0xE285BA, 0, &[0x78, 0x69]), // U+217A
        (0xE285BB, 0, &[0x78, 0x69, 0x69]), // U+217B
        (0xE285BC, 0, &[0x6C]), // U+217C
        (0xE285BD, 0, &[0x63]), // U+217D
        (0xE285BE, 0, &[0x64]), // U+217E
        (0xE285BF, 0, &[0x6D]), // U+217F
        (0xE28689, 0, &[0x30, 0xE28184, 0x33]), // U+2189
        (0xE2869A, 0, &[0xE28690, 0xCCB8]), // U+219A
        (0xE2869B, 0, &[0xE28692, 0xCCB8]), // U+219B
        (0xE286AE, 0, &[0xE28694, 0xCCB8]), // U+21AE
        (0xE2878D, 0, &[0xE28790, 0xCCB8]), // U+21CD
        (0xE2878E, 0, &[0xE28794, 0xCCB8]), // U+21CE
        (0xE2878F, 0, &[0xE28792, 0xCCB8]), // U+21CF
        (0xE28884, 0, &[0xE28883, 0xCCB8]), // U+2204
        (0xE28889, 0, &[0xE28888, 0xCCB8]), // U+2209
        (0xE2888C, 0, &[0xE2888B, 0xCCB8]), // U+220C
        (0xE288A4, 0, &[0xE288A3, 0xCCB8]), // U+2224
        (0xE288A6, 0, &[0xE288A5, 0xCCB8]), // U+2226
        (0xE288AC, 0, &[0xE288AB, 0xE288AB]), // U+222C
        (0xE288AD, 0, &[0xE288AB, 0xE288AB, 0xE288AB]), // U+222D
        (0xE288AF, 0, &[0xE288AE, 0xE288AE]), // U+222F
        (0xE288B0, 0, &[0xE288AE, 0xE288AE, 0xE288AE]), // U+2230
        (0xE28981, 0, &[0xE288BC, 0xCCB8]), // U+2241
        (0xE28984, 0, &[0xE28983, 0xCCB8]), // U+2244
        (0xE28987, 0, &[0xE28985, 0xCCB8]), // U+2247
        (0xE28989, 0, &[0xE28988, 0xCCB8]), // U+2249
        (0xE289A0, 0, &[0x3D, 0xCCB8]), // U+2260
        (0xE289A2, 0, &[0xE289A1, 0xCCB8]), // U+2262
        (0xE289AD, 0, &[0xE2898D, 0xCCB8]), // U+226D
        (0xE289AE, 0, &[0x3C, 0xCCB8]), // U+226E
        (0xE289AF, 0, &[0x3E, 0xCCB8]), // U+226F
        (0xE289B0, 0, &[0xE289A4, 0xCCB8]), // U+2270
        (0xE289B1, 0, &[0xE289A5, 0xCCB8]), // U+2271
        (0xE289B4, 0, &[0xE289B2, 0xCCB8]), // U+2274
        (0xE289B5, 0, &[0xE289B3, 0xCCB8]), // U+2275
        (0xE289B8, 0, &[0xE289B6, 0xCCB8]), // U+2278
        (0xE289B9, 0, &[0xE289B7, 0xCCB8]), // U+2279
        (0xE28A80, 0, &[0xE289BA, 0xCCB8]), // U+2280
        (0xE28A81, 0, &[0xE289BB, 0xCCB8]), // U+2281
        (0xE28A84, 0, &[0xE28A82, 0xCCB8]), // U+2284
        (0xE28A85, 0, &[0xE28A83, 0xCCB8]), // U+2285
        (0xE28A88, 0, &[0xE28A86, 0xCCB8]), // U+2288
        (0xE28A89, 0, &[0xE28A87, 0xCCB8]), // U+2289
        (0xE28AAC, 0, &[0xE28AA2, 0xCCB8]), // U+22AC
        (0xE28AAD, 0, &[0xE28AA8, 0xCCB8]), // U+22AD
        (0xE28AAE, 0, &[0xE28AA9, 0xCCB8]), // U+22AE
        (0xE28AAF, 0, &[0xE28AAB, 0xCCB8]), // U+22AF
        (0xE28BA0, 0, &[0xE289BC, 0xCCB8]), // U+22E0
        (0xE28BA1, 0, &[0xE289BD, 0xCCB8]), // U+22E1
        (0xE28BA2, 0, &[0xE28A91, 0xCCB8]), // U+22E2
        (0xE28BA3, 0, &[0xE28A92, 0xCCB8]), // U+22E3
        (0xE28BAA, 0, &[0xE28AB2, 0xCCB8]), // U+22EA
        (0xE28BAB, 0, &[0xE28AB3, 0xCCB8]), // U+22EB
        (0xE28BAC, 0, &[0xE28AB4, 0xCCB8]), // U+22EC
        (0xE28BAD, 0, &[0xE28AB5, 0xCCB8]), // U+22ED
        (0xE28CA9, 0, &[0xE38088]), // U+2329
        (0xE28CAA, 0, &[0xE38089]), // U+232A
        (0xE291A0, 0, &[0x31]), // U+2460
        (0xE291A1, 0, &[0x32]), // U+2461
        (0xE291A2, 0, &[0x33]), // U+2462
        (0xE291A3, 0, &[0x34]), // U+2463
        (0xE291A4, 0, &[0x35]), // U+2464
        (0xE291A5, 0, &[0x36]), // U+2465
        (0xE291A6, 0, &[0x37]), // U+2466
        (0xE291A7, 0, &[0x38]), // U+2467
        (0xE291A8, 0, &[0x39]), // U+2468
        (0xE291A9, 0, &[0x31, 0x30]), // U+2469
        (0xE291AA, 0, &[0x31, 0x31]), // U+246A
        (0xE291AB, 0, &[0x31, 0x32]), // U+246B
        (0xE291AC, 0, &[0x31, 0x33]), // U+246C
        (0xE291AD, 0, &[0x31, 0x34]), // U+246D
        (0xE291AE, 0, &[0x31, 0x35]), // U+246E
        (0xE291AF, 0, &[0x31, 0x36]), // U+246F
        (0xE291B0, 0, &[0x31, 0x37]), // U+2470
        (0xE291B1, 0, &[0x31, 0x38]), // U+2471
        (0xE291B2, 0, &[0x31, 0x39]), // U+2472
        (0xE291B3, 0, &[0x32, 0x30]), // U+2473
        (0xE291B4, 0, &[0x28, 0x31, 0x29]), // U+2474
        (0xE291B5, 0, &[0x28, 0x32, 0x29]), // U+2475
        (0xE291B6, 0, &[0x28, 0x33, 0x29]), // U+2476
        (0xE291B7, 0, &[0x28, 0x34, 0x29]), // U+2477
        (0xE291B8, 0, &[0x28, 0x35, 0x29]), // U+2478
        (0xE291B9, 0, &[0x28, 0x36, 0x29]), // U+2479
        (0xE291BA, 0, &[0x28, 0x37, 0x29]), // U+247A
        (0xE291BB, 0, &[0x28, 0x38, 0x29]), // U+247B
        (0xE291BC, 0, &[0x28, 0x39, 0x29]), // U+247C
        (0xE291BD, 0, &[0x28, 0x31, 0x30, 0x29]), // U+247D
        (0xE291BE, 0, &[0x28, 0x31, 0x31, 0x29]), // U+247E
        (0xE291BF, 0, &[0x28, 0x31, 0x32, 0x29]), // U+247F
        (0xE29280, 0, &[0x28, 0x31, 0x33, 0x29]), // U+2480
        (0xE29281, 0, &[0x28, 0x31, 0x34, 0x29]), // U+2481
        (0xE29282, 0, &[0x28, 0x31, 0x35, 0x29]), // U+2482
        (0xE29283, 0, &[0x28, 0x31, 0x36, 0x29]), // U+2483
        (0xE29284, 0, &[0x28, 0x31, 0x37, 0x29]), // U+2484
        (0xE29285, 0, &[0x28, 0x31, 0x38, 0x29]), // U+2485
        (0xE29286, 0, &[0x28, 0x31, 0x39, 0x29]), // U+2486
        (0xE29287, 0, &[0x28, 0x32, 0x30, 0x29]), // U+2487
        (0xE29288, 0, &[0x31, 0x2E]), // U+2488
        (0xE29289, 0, &[0x32, 0x2E]), // U+2489
        (0xE2928A, 0, &[0x33, 0x2E]), // U+248A
        (0xE2928B, 0, &[0x34, 0x2E]), // U+248B
        (0xE2928C, 0, &[0x35, 0x2E]), // U+248C
        (0xE2928D, 0, &[0x36, 0x2E]), // U+248D
        (0xE2928E, 0, &[0x37, 0x2E]), // U+248E
        (0xE2928F, 0, &[0x38, 0x2E]), // U+248F
        (0xE29290, 0, &[0x39, 0x2E]), // U+2490
        (0xE29291, 0, &[0x31, 0x30, 0x2E]), // U+2491
        (0xE29292, 0, &[0x31, 0x31, 0x2E]), // U+2492
        (0xE29293, 0, &[0x31, 0x32, 0x2E]), // U+2493
        (0xE29294, 0, &[0x31, 0x33, 0x2E]), // U+2494
        (0xE29295, 0, &[0x31, 0x34, 0x2E]), // U+2495
        (0xE29296, 0, &[0x31, 0x35, 0x2E]), // U+2496
        (0xE29297, 0, &[0x31, 0x36, 0x2E]), // U+2497
        (0xE29298, 0, &[0x31, 0x37, 0x2E]), // U+2498
        (0xE29299, 0, &[0x31, 0x38, 0x2E]), // U+2499
        (0xE2929A, 0, &[0x31, 0x39, 0x2E]), // U+249A
        (0xE2929B, 0, &[0x32, 0x30, 0x2E]), // U+249B
        (0xE2929C, 0, &[0x28, 0x61, 0x29]), // U+249C
        (0xE2929D, 0, &[0x28, 0x62, 0x29]), // U+249D
        (0xE2929E, 0, &[0x28, 0x63, 0x29]), // U+249E
        (0xE2929F, 0, &[0x28, 0x64, 0x29]), // U+249F
        (0xE292A0, 0, &[0x28, 0x65, 0x29]), // U+24A0
        (0xE292A1, 0, &[0x28, 0x66, 0x29]), // U+24A1
        (0xE292A2, 0, &[0x28, 0x67, 0x29]), // U+24A2
        (0xE292A3, 0, &[0x28, 0x68, 0x29]), // U+24A3
        (0xE292A4, 0, &[0x28, 0x69, 0x29]), // U+24A4
        (0xE292A5, 0, &[0x28, 0x6A, 0x29]), // U+24A5
        (0xE292A6, 0, &[0x28, 0x6B, 0x29]), // U+24A6
        (0xE292A7, 0, &[0x28, 0x6C, 0x29]), // U+24A7
        (0xE292A8, 0, &[0x28, 0x6D, 0x29]), // U+24A8
        (0xE292A9, 0, &[0x28, 0x6E, 0x29]), // U+24A9
        (0xE292AA, 0, &[0x28, 0x6F, 0x29]), // U+24AA
        (0xE292AB, 0, &[0x28, 0x70, 0x29]), // U+24AB
        (0xE292AC, 0, &[0x28, 0x71, 0x29]), // U+24AC
        (0xE292AD, 0, &[0x28, 0x72, 0x29]), // U+24AD
        (0xE292AE, 0, &[0x28, 0x73, 0x29]), // U+24AE
        (0xE292AF, 0, &[0x28, 0x74, 0x29]), // U+24AF
        (0xE292B0, 0, &[0x28, 0x75, 0x29]), // U+24B0
        (0xE292B1, 0, &[0x28, 0x76, 0x29]), // U+24B1
        (0xE292B2, 0, &[0x28, 0x77, 0x29]), // U+24B2
        (0xE292B3, 0, &[0x28, 0x78, 0x29]), // U+24B3
        (0xE292B4, 0, &[0x28, 0x79, 0x29]), // U+24B4
        (0xE292B5, 0, &[0x28, 0x7A, 0x29]), // U+24B5
        (0xE292B6, 0, &[0x41]), // U+24B6
        (0xE292B7, 0, &[0x42]), // U+24B7
        (0xE292B8, 0, &[0x43]), // U+24B8
        (0xE292B9, 0, &[0x44]), // U+24B9
        (0xE292BA, 0, &[0x45]), // U+24BA
        (0xE292BB, 0, &[0x46]), // U+24BB
        (0xE292BC, 0, &[0x47]), // U+24BC
        (0xE292BD, 0, &[0x48]), // U+24BD
        (0xE292BE, 0, &[0x49]), // U+24BE
        (0xE292BF, 0, &[0x4A]), // U+24BF
        (0xE29380, 0, &[0x4B]), // U+24C0
        (0xE29381, 0, &[0x4C]), // U+24C1
        (0xE29382, 0, &[0x4D]), // U+24C2
        (0xE29383, 0, &[0x4E]), // U+24C3
        (0xE29384, 0, &[0x4F]), // U+24C4
        (0xE29385, 0, &[0x50]), // U+24C5
        (0xE29386, 0, &[0x51]), // U+24C6
        (0xE29387, 0, &[0x52]), // U+24C7
        (0xE29388, 0, &[0x53]), // U+24C8
        (0xE29389, 0, &[0x54]), // U+24C9
        (0xE2938A, 0, &[0x55]), // U+24CA
        (0xE2938B, 0, &[0x56]), // U+24CB
        (0xE2938C, 0, &[0x57]), // U+24CC
        (0xE2938D, 0, &[0x58]), // U+24CD
        (0xE2938E, 0, &[0x59]), // U+24CE
        (0xE2938F, 0, &[0x5A]), // U+24CF
        (0xE29390, 0, &[0x61]), // U+24D0
        (0xE29391, 0, &[0x62]), // U+24D1
        (0xE29392, 0, &[0x63]), // U+24D2
        (0xE29393, 0, &[0x64]), // U+24D3
        (0xE29394, 0, &[0x65]), // U+24D4
        (0xE29395, 0, &[0x66]), // U+24D5
        (0xE29396, 0, &[0x67]), // U+24D6
        (0xE29397, 0, &[0x68]), // U+24D7
        (0xE29398, 0, &[0x69]), // U+24D8
        (0xE29399, 0, &[0x6A]), // U+24D9
        (0xE2939A, 0, &[0x6B]), // U+24DA
        (0xE2939B, 0, &[0x6C]), // U+24DB
        (0xE2939C, 0, &[0x6D]), // U+24DC
        (0xE2939D, 0, &[0x6E]), // U+24DD
        (0xE2939E, 0, &[0x6F]), // U+24DE
        (0xE2939F, 0, &[0x70]), // U+24DF
        (0xE293A0, 0, &[0x71]), // U+24E0
        (0xE293A1, 0, &[0x72]), // U+24E1
        (0xE293A2, 0, &[0x73]), // U+24E2
        (0xE293A3, 0, &[0x74]), // U+24E3
        (0xE293A4, 0, &[0x75]), // U+24E4
        (0xE293A5, 0, &[0x76]), // U+24E5
        (0xE293A6, 0, &[0x77]), // U+24E6
        (0xE293A7, 0, &[0x78]), // U+24E7
        (0xE293A8, 0, &[0x79]), // U+24E8
        (0xE293A9, 0, &[0x7A]), // U+24E9
        (0xE293AA, 0, &[0x30]), // U+24EA
        (0xE2A88C, 0, &[0xE288AB, 0xE288AB, 0xE288AB, 0xE288AB]), // U+2A0C
        (0xE2A9B4, 0, &[0x3A, 0x3A, 0x3D]), // U+2A74
        (0xE2A9B5, 0, &[0x3D, 0x3D]), // U+2A75
        (0xE2A9B6, 0, &[0x3D, 0x3D, 0x3D]), // U+2A76
        (0xE2AB9C, 0, &[0xE2AB9D, 0xCCB8]), // U+2ADC
        (0xE2B1BC, 0, &[0x6A]), // U+2C7C
        (0xE2B1BD, 0, &[0x56]), // U+2C7D
        (0xE2B3AF, 230, &[]), // U+2CEF
        (0xE2B3B0, 230, &[]), // U+2CF0
        (0xE2B3B1, 230, &[]), // U+2CF1
        (0xE2B5AF, 0, &[0xE2B5A1]), // U+2D6F
        (0xE2B5BF, 9, &[]), // U+2D7F
        (0xE2B7A0, 230, &[]), // U+2DE0
        (0xE2B7A1, 230, &[]), // U+2DE1
        (0xE2B7A2, 230, &[]), // U+2DE2
        (0xE2B7A3, 230, &[]), // U+2DE3
        (0xE2B7A4, 230, &[]), // U+2DE4
        (0xE2B7A5, 230, &[]), // U+2DE5
        (0xE2B7A6, 230, &[]), // U+2DE6
        (0xE2B7A7, 230, &[]), // U+2DE7
        (0xE2B7A8, 230, &[]), // U+2DE8
        (0xE2B7A9, 230, &[]), // U+2DE9
        (0xE2B7AA, 230, &[]), // U+2DEA
        (0xE2B7AB, 230, &[]), // U+2DEB
        (0xE2B7AC, 230, &[]), // U+2DEC
        (0xE2B7AD, 230, &[]), // U+2DED
        (0xE2B7AE, 230, &[]), // U+2DEE
        (0xE2B7AF, 230, &[]), // U+2DEF
        (0xE2B7B0, 230, &[]), // U+2DF0
        (0xE2B7B1, 230, &[]), // U+2DF1
        (0xE2B7B2, 230, &[]), // U+2DF2
        (0xE2B7B3, 230, &[]), // U+2DF3
        (0xE2B7B4, 230, &[]), // U+2DF4
        (0xE2B7B5, 230, &[]), // U+2DF5
        (0xE2B7B6, 230, &[]), // U+2DF6
        (0xE2B7B7, 230, &[]), // U+2DF7
        (0xE2B7B8, 230, &[]), // U+2DF8
        (0xE2B7B9, 230, &[]), // U+2DF9
        (0xE2B7BA, 230, &[]), // U+2DFA
        (0xE2B7BB, 230, &[]), // U+2DFB
        (0xE2B7BC, 230, &[]), // U+2DFC
        (0xE2B7BD, 230, &[]), // U+2DFD
        (0xE2B7BE, 230, &[]), // U+2DFE
        (0xE2B7BF, 230, &[]), // U+2DFF
        (0xE2BA9F, 0, &[0xE6AF8D]), // U+2E9F
        (0xE2BBB3, 0, &[0xE9BE9F]), // U+2EF3
        (0xE2BC80, 0, &[0xE4B880]), // U+2F00
        (0xE2BC81, 0, &[0xE4B8A8]), // U+2F01
        (0xE2BC82, 0, &[0xE4B8B6]), // U+2F02
        (0xE2BC83, 0, &[0xE4B8BF]), // U+2F03
        (0xE2BC84, 0, &[0xE4B999]), // U+2F04
        (0xE2BC85, 0, &[0xE4BA85]), // U+2F05
        (0xE2BC86, 0, &[0xE4BA8C]), // U+2F06
        (0xE2BC87, 0, &[0xE4BAA0]), // U+2F07
        (0xE2BC88, 0, &[0xE4BABA]), // U+2F08
        (0xE2BC89, 0, &[0xE584BF]), // U+2F09
        (0xE2BC8A, 0, &[0xE585A5]), // U+2F0A
        (0xE2BC8B, 0, &[0xE585AB]), // U+2F0B
        (0xE2BC8C, 0, &[0xE58682]), // U+2F0C
        (0xE2BC8D, 0, &[0xE58696]), // U+2F0D
        (0xE2BC8E, 0, &[0xE586AB]), // U+2F0E
        (0xE2BC8F, 0, &[0xE587A0]), // U+2F0F
        (0xE2BC90, 0, &[0xE587B5]), // U+2F10
        (0xE2BC91, 0, &[0xE58880]), // U+2F11
        (0xE2BC92, 0, &[0xE58A9B]), // U+2F12
        (0xE2BC93, 0, &[0xE58BB9]), // U+2F13
        (0xE2BC94, 0, &[0xE58C95]), // U+2F14
        (0xE2BC95, 0, &[0xE58C9A]), // U+2F15
        (0xE2BC96, 0, &[0xE58CB8]), // U+2F16
        (0xE2BC97, 0, &[0xE58D81]), // U+2F17
        (0xE2BC98, 0, &[0xE58D9C]), // U+2F18
        (0xE2BC99, 0, &[0xE58DA9]), // U+2F19
        (0xE2BC9A, 0, &[0xE58E82]), // U+2F1A
        (0xE2BC9B, 0, &[0xE58EB6]), // U+2F1B
        (0xE2BC9C, 0, &[0xE58F88]), // U+2F1C
        (0xE2BC9D, 0, &[0xE58FA3]), // U+2F1D
        (0xE2BC9E, 0, &[0xE59B97]), // U+2F1E
        (0xE2BC9F, 0, &[0xE59C9F]), // U+2F1F
        (0xE2BCA0, 0, &[0xE5A3AB]), // U+2F20
        (0xE2BCA1, 0, &[0xE5A482]), // U+2F21
        (0xE2BCA2, 0, &[0xE5A48A]), // U+2F22
        (0xE2BCA3, 0, &[0xE5A495]), // U+2F23
        (0xE2BCA4, 0, &[0xE5A4A7]), // U+2F24
        (0xE2BCA5, 0, &[0xE5A5B3]), // U+2F25
        (0xE2BCA6, 0, &[0xE5AD90]), // U+2F26
        (0xE2BCA7, 0, &[0xE5AE80]), // U+2F27
        (0xE2BCA8, 0, &[0xE5AFB8]), // U+2F28
        (0xE2BCA9, 0, &[0xE5B08F]), // U+2F29
        (0xE2BCAA, 0, &[0xE5B0A2]), // U+2F2A
        (0xE2BCAB, 0, &[0xE5B0B8]), // U+2F2B
        (0xE2BCAC, 0, &[0xE5B1AE]), // U+2F2C
        (0xE2BCAD, 0, &[0xE5B1B1]), // U+2F2D
        (0xE2BCAE, 0, &[0xE5B79B]), // U+2F2E
        (0xE2BCAF, 0, &[0xE5B7A5]), // U+2F2F
        (0xE2BCB0, 0, &[0xE5B7B1]), // U+2F30
        (0xE2BCB1, 0, &[0xE5B7BE]), // U+2F31
        (0xE2BCB2, 0, &[0xE5B9B2]), // U+2F32
        (0xE2BCB3, 0, &[0xE5B9BA]), // U+2F33
        (0xE2BCB4, 0, &[0xE5B9BF]), // U+2F34
        (0xE2BCB5, 0, &[0xE5BBB4]), // U+2F35
        (0xE2BCB6, 0, &[0xE5BBBE]), // U+2F36
        (0xE2BCB7, 0, &[0xE5BC8B]), // U+2F37
        (0xE2BCB8, 0, &[0xE5BC93]), // U+2F38
        (0xE2BCB9, 0, &[0xE5BD90]), // U+2F39
        (0xE2BCBA, 0, &[0xE5BDA1]), // U+2F3A
        (0xE2BCBB, 0, &[0xE5BDB3]), // U+2F3B
        (0xE2BCBC, 0, &[0xE5BF83]), // U+2F3C
        (0xE2BCBD, 0, &[0xE68888]), // U+2F3D
        (0xE2BCBE, 0, &[0xE688B6]), // U+2F3E
        (0xE2BCBF, 0, &[0xE6898B]), // U+2F3F
        (0xE2BD80, 0, &[0xE694AF]), // U+2F40
        (0xE2BD81, 0, &[0xE694B4]), // U+2F41
        (0xE2BD82, 0, &[0xE69687]), // U+2F42
        (0xE2BD83, 0, &[0xE69697]), // U+2F43
        (0xE2BD84, 0, &[0xE696A4]), // U+2F44
        (0xE2BD85, 0, &[0xE696B9]), // U+2F45
        (0xE2BD86, 0, &[0xE697A0]), // U+2F46
        (0xE2BD87, 0, &[0xE697A5]), // U+2F47
        (0xE2BD88, 0, &[0xE69BB0]), // U+2F48
        (0xE2BD89, 0, &[0xE69C88]), // U+2F49
        (0xE2BD8A, 0, &[0xE69CA8]), // U+2F4A
        (0xE2BD8B, 0, &[0xE6ACA0]), // U+2F4B
        (0xE2BD8C, 0, &[0xE6ADA2]), // U+2F4C
        (0xE2BD8D, 0, &[0xE6ADB9]), // U+2F4D
        (0xE2BD8E, 0, &[0xE6AEB3]), // U+2F4E
        (0xE2BD8F, 0, &[0xE6AF8B]), // U+2F4F
        (0xE2BD90, 0, &[0xE6AF94]), // U+2F50
        (0xE2BD91, 0, &[0xE6AF9B]), // U+2F51
        (0xE2BD92, 0, &[0xE6B08F]), // U+2F52
        (0xE2BD93, 0, &[0xE6B094]), // U+2F53
        (0xE2BD94, 0, &[0xE6B0B4]), // U+2F54
        (0xE2BD95, 0, &[0xE781AB]), // U+2F55
        (0xE2BD96, 0, &[0xE788AA]), // U+2F56
        (0xE2BD97, 0, &[0xE788B6]), // U+2F57
        (0xE2BD98, 0, &[0xE788BB]), // U+2F58
        (0xE2BD99, 0, &[0xE788BF]), // U+2F59
        (0xE2BD9A, 0, &[0xE78987]), // U+2F5A
        (0xE2BD9B, 0, &[0xE78999]), // U+2F5B
        (0xE2BD9C, 0, &[0xE7899B]), // U+2F5C
        (0xE2BD9D, 0, &[0xE78AAC]), // U+2F5D
        (0xE2BD9E, 0, &[0xE78E84]), // U+2F5E
        (0xE2BD9F, 0, &[0xE78E89]), // U+2F5F
        (0xE2BDA0, 0, &[0xE7939C]), // U+2F60
        (0xE2BDA1, 0, &[0xE793A6]), // U+2F61
        (0xE2BDA2, 0, &[0xE79498]), // U+2F62
        (0xE2BDA3, 0, &[0xE7949F]), // U+2F63
        (0xE2BDA4, 0, &[0xE794A8]), // U+2F64
        (0xE2BDA5, 0, &[0xE794B0]), // U+2F65
        (0xE2BDA6, 0, &[0xE7968B]), // U+2F66
        (0xE2BDA7, 0, &[0xE79692]), // U+2F67
        (0xE2BDA8, 0, &[0xE799B6]), // U+2F68
        (0xE2BDA9, 0, &[0xE799BD]), // U+2F69
        (0xE2BDAA, 0, &[0xE79AAE]), // U+2F6A
        (0xE2BDAB, 0, &[0xE79ABF]), // U+2F6B
        (0xE2BDAC, 0, &[0xE79BAE]), // U+2F6C
        (0xE2BDAD, 0, &[0xE79F9B]), // U+2F6D
        (0xE2BDAE, 0, &[0xE79FA2]), // U+2F6E
        (0xE2BDAF, 0, &[0xE79FB3]), // U+2F6F
        (0xE2BDB0, 0, &[0xE7A4BA]), // U+2F70
        (0xE2BDB1, 0, &[0xE7A6B8]), // U+2F71
        (0xE2BDB2, 0, &[0xE7A6BE]), // U+2F72
        (0xE2BDB3, 0, &[0xE7A9B4]), // U+2F73
        (0xE2BDB4, 0, &[0xE7AB8B]), // U+2F74
        (0xE2BDB5, 0, &[0xE7ABB9]), // U+2F75
        (0xE2BDB6, 0, &[0xE7B1B3]), // U+2F76
        (0xE2BDB7, 0, &[0xE7B3B8]), // U+2F77
        (0xE2BDB8, 0, &[0xE7BCB6]), // U+2F78
        (0xE2BDB9, 0, &[0xE7BD91]), // U+2F79
        (0xE2BDBA, 0, &[0xE7BE8A]), // U+2F7A
        (0xE2BDBB, 0, &[0xE7BEBD]), // U+2F7B
        (0xE2BDBC, 0, &[0xE88081]), // U+2F7C
        (0xE2BDBD, 0, &[0xE8808C]), // U+2F7D
        (0xE2BDBE, 0, &[0xE88092]), // U+2F7E
        (0xE2BDBF, 0, &[0xE880B3]), // U+2F7F
        (0xE2BE80, 0, &[0xE881BF]), // U+2F80
        (0xE2BE81, 0, &[0xE88289]), // U+2F81
        (0xE2BE82, 0, &[0xE887A3]), // U+2F82
        (0xE2BE83, 0, &[0xE887AA]), // U+2F83
        (0xE2BE84, 0, &[0xE887B3]), // U+2F84
        (0xE2BE85, 0, &[0xE887BC]), // U+2F85
        (0xE2BE86, 0, &[0xE8888C]), // U+2F86
        (0xE2BE87, 0, &[0xE8889B]), // U+2F87
        (0xE2BE88, 0, &[0xE8889F]), // U+2F88
        (0xE2BE89, 0, &[0xE889AE]), // U+2F89
        (0xE2BE8A, 0, &[0xE889B2]), // U+2F8A
        (0xE2BE8B, 0, &[0xE889B8]), // U+2F8B
        (0xE2BE8C, 0, &[0xE8998D]), // U+2F8C
        (0xE2BE8D, 0, &[0xE899AB]), // U+2F8D
        (0xE2BE8E, 0, &[0xE8A180]), // U+2F8E
        (0xE2BE8F, 0, &[0xE8A18C]), // U+2F8F
        (0xE2BE90, 0, &[0xE8A1A3]), // U+2F90
        (0xE2BE91, 0, &[0xE8A5BE]), // U+2F91
        (0xE2BE92, 0, &[0xE8A68B]), // U+2F92
        (0xE2BE93, 0, &[0xE8A792]), // U+2F93
        (0xE2BE94, 0, &[0xE8A880]), // U+2F94
        (0xE2BE95, 0, &[0xE8B0B7]), // U+2F95
        (0xE2BE96, 0, &[0xE8B186]), // U+2F96
        (0xE2BE97, 0, &[0xE8B195]), // U+2F97
        (0xE2BE98, 0, &[0xE8B1B8]), // U+2F98
        (0xE2BE99, 0, &[0xE8B29D]), // U+2F99
        (0xE2BE9A, 0, &[0xE8B5A4]), // U+2F9A
        (0xE2BE9B, 0, &[0xE8B5B0]), // U+2F9B
        (0xE2BE9C, 0, &[0xE8B6B3]), // U+2F9C
        (0xE2BE9D, 0, &[0xE8BAAB]), // U+2F9D
        (0xE2BE9E, 0, &[0xE8BB8A]), // U+2F9E
        (0xE2BE9F, 0, &[0xE8BE9B]), // U+2F9F
        (0xE2BEA0, 0, &[0xE8BEB0]), // U+2FA0
        (0xE2BEA1, 0, &[0xE8BEB5]), // U+2FA1
        (0xE2BEA2, 0, &[0xE98291]), // U+2FA2
        (0xE2BEA3, 0, &[0xE98589]), // U+2FA3
        (0xE2BEA4, 0, &[0xE98786]), // U+2FA4
        (0xE2BEA5, 0, &[0xE9878C]), // U+2FA5
        (0xE2BEA6, 0, &[0xE98791]), // U+2FA6
        (0xE2BEA7, 0, &[0xE995B7]), // U+2FA7
        (0xE2BEA8, 0, &[0xE99680]), // U+2FA8
        (0xE2BEA9, 0, &[0xE9989C]), // U+2FA9
        (0xE2BEAA, 0, &[0xE99AB6]), // U+2FAA
        (0xE2BEAB, 0, &[0xE99AB9]), // U+2FAB
        (0xE2BEAC, 0, &[0xE99BA8]), // U+2FAC
        (0xE2BEAD, 0, &[0xE99D91]), // U+2FAD
        (0xE2BEAE, 0, &[0xE99D9E]), // U+2FAE
        (0xE2BEAF, 0, &[0xE99DA2]), // U+2FAF
        (0xE2BEB0, 0, &[0xE99DA9]), // U+2FB0
        (0xE2BEB1, 0, &[0xE99F8B]), // U+2FB1
        (0xE2BEB2, 0, &[0xE99FAD]), // U+2FB2
        (0xE2BEB3, 0, &[0xE99FB3]), // U+2FB3
        (0xE2BEB4, 0, &[0xE9A081]), // U+2FB4
        (0xE2BEB5, 0, &[0xE9A2A8]), // U+2FB5
        (0xE2BEB6, 0, &[0xE9A39B]), // U+2FB6
        (0xE2BEB7, 0, &[0xE9A39F]), // U+2FB7
        (0xE2BEB8, 0, &[0xE9A696]), // U+2FB8
        (0xE2BEB9, 0, &[0xE9A699]), // U+2FB9
        (0xE2BEBA, 0, &[0xE9A6AC]), // U+2FBA
        (0xE2BEBB, 0, &[0xE9AAA8]), // U+2FBB
        (0xE2BEBC, 0, &[0xE9AB98]), // U+2FBC
        (0xE2BEBD, 0, &[0xE9AB9F]), // U+2FBD
        (0xE2BEBE, 0, &[0xE9ACA5]), // U+2FBE
        (0xE2BEBF, 0, &[0xE9ACAF]), // U+2FBF
        (0xE2BF80, 0, &[0xE9ACB2]), // U+2FC0
        (0xE2BF81, 0, &[0xE9ACBC]), // U+2FC1
        (0xE2BF82, 0, &[0xE9AD9A]), // U+2FC2
        (0xE2BF83, 0, &[0xE9B3A5]), // U+2FC3
        (0xE2BF84, 0, &[0xE9B9B5]), // U+2FC4
        (0xE2BF85, 0, &[0xE9B9BF]), // U+2FC5
        (0xE2BF86, 0, &[0xE9BAA5]), // U+2FC6
        (0xE2BF87, 0, &[0xE9BABB]), // U+2FC7
        (0xE2BF88, 0, &[0xE9BB83]), // U+2FC8
        (0xE2BF89, 0, &[0xE9BB8D]), // U+2FC9
        (0xE2BF8A, 0, &[0xE9BB91]), // U+2FCA
        (0xE2BF8B, 0, &[0xE9BBB9]), // U+2FCB
        (0xE2BF8C, 0, &[0xE9BBBD]), // U+2FCC
        (0xE2BF8D, 0, &[0xE9BC8E]), // U+2FCD
        (0xE2BF8E, 0, &[0xE9BC93]), // U+2FCE
        (0xE2BF8F, 0, &[0xE9BCA0]), // U+2FCF
        (0xE2BF90, 0, &[0xE9BCBB]), // U+2FD0
        (0xE2BF91, 0, &[0xE9BD8A]), // U+2FD1
        (0xE2BF92, 0, &[0xE9BD92]), // U+2FD2
        (0xE2BF93, 0, &[0xE9BE8D]), // U+2FD3
        (0xE2BF94, 0, &[0xE9BE9C]), // U+2FD4
        (0xE2BF95, 0, &[0xE9BEA0]), // U+2FD5
        (0xE38080, 0, &[0x20]), // U+3000
        (0xE380AA, 218, &[]), // U+302A
        (0xE380AB, 228, &[]), // U+302B
        (0xE380AC, 232, &[]), // U+302C
        (0xE380AD, 222, &[]), // U+302D
        (0xE380AE, 224, &[]), // U+302E
        (0xE380AF, 224, &[]), // U+302F
        (0xE380B6, 0, &[0xE38092]), // U+3036
        (0xE380B8, 0, &[0xE58D81]), // U+3038
        (0xE380B9, 0, &[0xE58D84]), // U+3039
        (0xE380BA, 0, &[0xE58D85]), // U+303A
        (0xE3818C, 0, &[0xE3818B, 0xE38299]), // U+304C
        (0xE3818E, 0, &[0xE3818D, 0xE38299]), // U+304E
        (0xE38190, 0, &[0xE3818F, 0xE38299]), // U+3050
        (0xE38192, 0, &[0xE38191, 0xE38299]), // U+3052
        (0xE38194, 0, &[0xE38193, 0xE38299]), // U+3054
        (0xE38196, 0, &[0xE38195, 0xE38299]), // U+3056
        (0xE38198, 0, &[0xE38197, 0xE38299]), // U+3058
        (0xE3819A, 0, &[0xE38199, 0xE38299]), // U+305A
        (0xE3819C, 0, &[0xE3819B, 0xE38299]), // U+305C
        (0xE3819E, 0, &[0xE3819D, 0xE38299]), // U+305E
        (0xE381A0, 0, &[0xE3819F, 0xE38299]), // U+3060
        (0xE381A2, 0, &[0xE381A1, 0xE38299]), // U+3062
        (0xE381A5, 0, &[0xE381A4, 0xE38299]), // U+3065
        (0xE381A7, 0, &[0xE381A6, 0xE38299]), // U+3067
        (0xE381A9, 0, &[0xE381A8, 0xE38299]), // U+3069
        (0xE381B0, 0, &[0xE381AF, 0xE38299]), // U+3070
        (0xE381B1, 0, &[0xE381AF, 0xE3829A]), // U+3071
        (0xE381B3, 0, &[0xE381B2, 0xE38299]), // U+3073
        (0xE381B4, 0, &[0xE381B2, 0xE3829A]), // U+3074
        (0xE381B6, 0, &[0xE381B5, 0xE38299]), // U+3076
        (0xE381B7, 0, &[0xE381B5, 0xE3829A]), // U+3077
        (0xE381B9, 0, &[0xE381B8, 0xE38299]), // U+3079
        (0xE381BA, 0, &[0xE381B8, 0xE3829A]), // U+307A
        (0xE381BC, 0, &[0xE381BB, 0xE38299]), // U+307C
        (0xE381BD, 0, &[0xE381BB, 0xE3829A]), // U+307D
        (0xE38294, 0, &[0xE38186, 0xE38299]), // U+3094
        (0xE38299, 8, &[]), // U+3099
        (0xE3829A, 8, &[]), // U+309A
        (0xE3829B, 0, &[0x20, 0xE38299]), // U+309B
        (0xE3829C, 0, &[0x20, 0xE3829A]), // U+309C
        (0xE3829E, 0, &[0xE3829D, 0xE38299]), // U+309E
        (0xE3829F, 0, &[0xE38288, 0xE3828A]), // U+309F
        (0xE382AC, 0, &[0xE382AB, 0xE38299]), // U+30AC
        (0xE382AE, 0, &[0xE382AD, 0xE38299]), // U+30AE
        (0xE382B0, 0, &[0xE382AF, 0xE38299]), // U+30B0
        (0xE382B2, 0, &[0xE382B1, 0xE38299]), // U+30B2
        (0xE382B4, 0, &[0xE382B3, 0xE38299]), // U+30B4
        (0xE382B6, 0, &[0xE382B5, 0xE38299]), // U+30B6
        (0xE382B8, 0, &[0xE382B7, 0xE38299]), // U+30B8
        (0xE382BA, 0, &[0xE382B9, 0xE38299]), // U+30BA
        (0xE382BC, 0, &[0xE382BB, 0xE38299]), // U+30BC
        (0xE382BE, 0, &[0xE382BD, 0xE38299]), // U+30BE
        (0xE38380, 0, &[0xE382BF, 0xE38299]), // U+30C0
        (0xE38382, 0, &[0xE38381, 0xE38299]), // U+30C2
        (0xE38385, 0, &[0xE38384, 0xE38299]), // U+30C5
        (0xE38387, 0, &[0xE38386, 0xE38299]), // U+30C7
        (0xE38389, 0, &[0xE38388, 0xE38299]), // U+30C9
        (0xE38390, 0, &[0xE3838F, 0xE38299]), // U+30D0
        (0xE38391, 0, &[0xE3838F, 0xE3829A]), // U+30D1
        (0xE38393, 0, &[0xE38392, 0xE38299]), // U+30D3
        (0xE38394, 0, &[0xE38392, 0xE3829A]), // U+30D4
        (0xE38396, 0, &[0xE38395, 0xE38299]), // U+30D6
        (0xE38397, 0, &[0xE38395, 0xE3829A]), // U+30D7
        (0xE38399, 0, &[0xE38398, 0xE38299]), // U+30D9
        (0xE3839A, 0, &[0xE38398, 0xE3829A]), // U+30DA
        (0xE3839C, 0, &[0xE3839B, 0xE38299]), // U+30DC
        (0xE3839D, 0, &[0xE3839B, 0xE3829A]), // U+30DD
        (0xE383B4, 0, &[0xE382A6, 0xE38299]), // U+30F4
        (0xE383B7, 0, &[0xE383AF, 0xE38299]), // U+30F7
        (0xE383B8, 0, &[0xE383B0, 0xE38299]), // U+30F8
        (0xE383B9, 0, &[0xE383B1, 0xE38299]), // U+30F9
        (0xE383BA, 0, &[0xE383B2, 0xE38299]), // U+30FA
        (0xE383BE, 0, &[0xE383BD, 0xE38299]), // U+30FE
        (0xE383BF, 0, &[0xE382B3, 0xE38388]), // U+30FF
        (0xE384B1, 0, &[0xE18480]), // U+3131
        (0xE384B2, 0, &[0xE18481]), // U+3132
        (0xE384B3, 0, &[0xE186AA]), // U+3133
        (0xE384B4, 0, &[0xE18482]), // U+3134
        (0xE384B5, 0, &[0xE186AC]), // U+3135
        (0xE384B6, 0, &[0xE186AD]), // U+3136
        (0xE384B7, 0, &[0xE18483]), // U+3137
        (0xE384B8, 0, &[0xE18484]), // U+3138
        (0xE384B9, 0, &[0xE18485]), // U+3139
        (0xE384BA, 0, &[0xE186B0]), // U+313A
        (0xE384BB, 0, &[0xE186B1]), // U+313B
        (0xE384BC, 0, &[0xE186B2]), // U+313C
        (0xE384BD, 0, &[0xE186B3]), // U+313D
        (0xE384BE, 0, &[0xE186B4]), // U+313E
        (0xE384BF, 0, &[0xE186B5]), // U+313F
        (0xE38580, 0, &[0xE1849A]), // U+3140
        (0xE38581, 0, &[0xE18486]), // U+3141
        (0xE38582, 0, &[0xE18487]), // U+3142
        (0xE38583, 0, &[0xE18488]), // U+3143
        (0xE38584, 0, &[0xE184A1]), // U+3144
        (0xE38585, 0, &[0xE18489]), // U+3145
        (0xE38586, 0, &[0xE1848A]), // U+3146
        (0xE38587, 0, &[0xE1848B]), // U+3147
        (0xE38588, 0, &[0xE1848C]), // U+3148
        (0xE38589, 0, &[0xE1848D]), // U+3149
        (0xE3858A, 0, &[0xE1848E]), // U+314A
        (0xE3858B, 0, &[0xE1848F]), // U+314B
        (0xE3858C, 0, &[0xE18490]), // U+314C
        (0xE3858D, 0, &[0xE18491]), // U+314D
        (0xE3858E, 0, &[0xE18492]), // U+314E
        (0xE3858F, 0, &[0xE185A1]), // U+314F
        (0xE38590, 0, &[0xE185A2]), // U+3150
        (0xE38591, 0, &[0xE185A3]), // U+3151
        (0xE38592, 0, &[0xE185A4]), // U+3152
        (0xE38593, 0, &[0xE185A5]), // U+3153
        (0xE38594, 0, &[0xE185A6]), // U+3154
        (0xE38595, 0, &[0xE185A7]), // U+3155
        (0xE38596, 0, &[0xE185A8]), // U+3156
        (0xE38597, 0, &[0xE185A9]), // U+3157
        (0xE38598, 0, &[0xE185AA]), // U+3158
        (0xE38599, 0, &[0xE185AB]), // U+3159
        (0xE3859A, 0, &[0xE185AC]), // U+315A
        (0xE3859B, 0, &[0xE185AD]), // U+315B
        (0xE3859C, 0, &[0xE185AE]), // U+315C
        (0xE3859D, 0, &[0xE185AF]), // U+315D
        (0xE3859E, 0, &[0xE185B0]), // U+315E
        (0xE3859F, 0, &[0xE185B1]), // U+315F
        (0xE385A0, 0, &[0xE185B2]), // U+3160
        (0xE385A1, 0, &[0xE185B3]), // U+3161
        (0xE385A2, 0, &[0xE185B4]), // U+3162
        (0xE385A3, 0, &[0xE185B5]), // U+3163
        (0xE385A4, 0, &[0xE185A0]), // U+3164
        (0xE385A5, 0, &[0xE18494]), // U+3165
        (0xE385A6, 0, &[0xE18495]), // U+3166
        (0xE385A7, 0, &[0xE18787]), // U+3167
        (0xE385A8, 0, &[0xE18788]), // U+3168
        (0xE385A9, 0, &[0xE1878C]), // U+3169
        (0xE385AA, 0, &[0xE1878E]), // U+316A
        (0xE385AB, 0, &[0xE18793]), // U+316B
        (0xE385AC, 0, &[0xE18797]), // U+316C
        (0xE385AD, 0, &[0xE18799]), // U+316D
        (0xE385AE, 0, &[0xE1849C]), // U+316E
        (0xE385AF, 0, &[0xE1879D]), // U+316F
        (0xE385B0, 0, &[0xE1879F]), // U+3170
        (0xE385B1, 0, &[0xE1849D]), // U+3171
        (0xE385B2, 0, &[0xE1849E]), // U+3172
        (0xE385B3, 0, &[0xE184A0]), // U+3173
        (0xE385B4, 0, &[0xE184A2]), // U+3174
        (0xE385B5, 0, &[0xE184A3]), // U+3175
        (0xE385B6, 0, &[0xE184A7]), // U+3176
        (0xE385B7, 0, &[0xE184A9]), // U+3177
        (0xE385B8, 0, &[0xE184AB]), // U+3178
        (0xE385B9, 0, &[0xE184AC]), // U+3179
        (0xE385BA, 0, &[0xE184AD]), // U+317A
        (0xE385BB, 0, &[0xE184AE]), // U+317B
        (0xE385BC, 0, &[0xE184AF]), // U+317C
        (0xE385BD, 0, &[0xE184B2]), // U+317D
        (0xE385BE, 0, &[0xE184B6]), // U+317E
        (0xE385BF, 0, &[0xE18580]), // U+317F
        (0xE38680, 0, &[0xE18587]), // U+3180
        (0xE38681, 0, &[0xE1858C]), // U+3181
        (0xE38682, 0, &[0xE187B1]), // U+3182
        (0xE38683, 0, &[0xE187B2]), // U+3183
        (0xE38684, 0, &[0xE18597]), // U+3184
        (0xE38685, 0, &[0xE18598]), // U+3185
        (0xE38686, 0, &[0xE18599]), // U+3186
        (0xE38687, 0, &[0xE18684]), // U+3187
        (0xE38688, 0, &[0xE18685]), // U+3188
        (0xE38689, 0, &[0xE18688]), // U+3189
        (0xE3868A, 0, &[0xE18691]), // U+318A
        (0xE3868B, 0, &[0xE18692]), // U+318B
        (0xE3868C, 0, &[0xE18694]), // U+318C
        (0xE3868D, 0, &[0xE1869E]), // U+318D
        (0xE3868E, 0, &[0xE186A1]), // U+318E
        (0xE38692, 0, &[0xE4B880]), // U+3192
        (0xE38693, 0, &[0xE4BA8C]), // U+3193
        (0xE38694, 0, &[0xE4B889]), // U+3194
        (0xE38695, 0, &[0xE59B9B]), // U+3195
        (0xE38696, 0, &[0xE4B88A]), // U+3196
        (0xE38697, 0, &[0xE4B8AD]), // U+3197
        (0xE38698, 0, &[0xE4B88B]), // U+3198
        (0xE38699, 0, &[0xE794B2]), // U+3199
        (0xE3869A, 0, &[0xE4B999]), // U+319A
        (0xE3869B, 0, &[0xE4B899]), // U+319B
        (0xE3869C, 0, &[0xE4B881]), // U+319C
        (0xE3869D, 0, &[0xE5A4A9]), // U+319D
        (0xE3869E, 0, &[0xE59CB0]), // U+319E
        (0xE3869F, 0, &[0xE4BABA]), // U+319F
        (0xE38880, 0, &[0x28, 0xE18480, 0x29]), // U+3200
        (0xE38881, 0, &[0x28, 0xE18482, 0x29]), // U+3201
        (0xE38882, 0, &[0x28, 0xE18483, 0x29]), // U+3202
        (0xE38883, 0, &[0x28, 0xE18485, 0x29]), // U+3203
        (0xE38884, 0, &[0x28, 0xE18486, 0x29]), // U+3204
        (0xE38885, 0, &[0x28, 0xE18487, 0x29]), // U+3205
        (0xE38886, 0, &[0x28, 0xE18489, 0x29]), // U+3206
        (0xE38887, 0, &[0x28, 0xE1848B, 0x29]), // U+3207
        (0xE38888, 0, &[0x28, 0xE1848C, 0x29]), // U+3208
        (0xE38889, 0, &[0x28, 0xE1848E, 0x29]), // U+3209
        (0xE3888A, 0, &[0x28, 0xE1848F, 0x29]), // U+320A
        (0xE3888B, 0, &[0x28, 0xE18490, 0x29]), // U+320B
        (0xE3888C, 0, &[0x28, 0xE18491, 0x29]), // U+320C
        (0xE3888D, 0, &[0x28, 0xE18492, 0x29]), // U+320D
        (0xE3888E, 0, &[0x28, 0xE18480, 0xE185A1, 0x29]), // U+320E
        (0xE3888F, 0, &[0x28, 0xE18482, 0xE185A1, 0x29]), // U+320F
        (0xE38890, 0, &[0x28, 0xE18483, 0xE185A1, 0x29]), // U+3210
        (0xE38891, 0, &[0x28, 0xE18485, 0xE185A1, 0x29]), // U+3211
        (0xE38892, 0, &[0x28, 0xE18486, 0xE185A1, 0x29]), // U+3212
        (0xE38893, 0, &[0x28, 0xE18487, 0xE185A1, 0x29]), // U+3213
        (0xE38894, 0, &[0x28, 0xE18489, 0xE185A1, 0x29]), // U+3214
        (0xE38895, 0, &[0x28, 0xE1848B, 0xE185A1, 0x29]), // U+3215
        (0xE38896, 0, &[0x28, 0xE1848C, 0xE185A1, 0x29]), // U+3216
        (0xE38897, 0, &[0x28, 0xE1848E, 0xE185A1, 0x29]), // U+3217
        (0xE38898, 0, &[0x28, 0xE1848F, 0xE185A1, 0x29]), // U+3218
        (0xE38899, 0, &[0x28, 0xE18490, 0xE185A1, 0x29]), // U+3219
        (0xE3889A, 0, &[0x28, 0xE18491, 0xE185A1, 0x29]), // U+321A
        (0xE3889B, 0, &[0x28, 0xE18492, 0xE185A1, 0x29]), // U+321B
        (0xE3889C, 0, &[0x28, 0xE1848C, 0xE185AE, 0x29]), // U+321C
        (0xE3889D, 0, &[0x28, 0xE1848B, 0xE185A9, 0xE1848C, 0xE185A5, 0xE186AB, 0x29]), // U+321D
        (0xE3889E, 0, &[0x28, 0xE1848B, 0xE185A9, 0xE18492, 0xE185AE, 0x29]), // U+321E
        (0xE388A0, 0, &[0x28, 0xE4B880, 0x29]), // U+3220
        (0xE388A1, 0, &[0x28, 0xE4BA8C, 0x29]), // U+3221
        (0xE388A2, 0, &[0x28, 0xE4B889, 0x29]), // U+3222
        (0xE388A3, 0, &[0x28, 0xE59B9B, 0x29]), // U+3223
        (0xE388A4, 0, &[0x28, 0xE4BA94, 0x29]), // U+3224
        (0xE388A5, 0, &[0x28, 0xE585AD, 0x29]), // U+3225
        (0xE388A6, 0, &[0x28, 0xE4B883, 0x29]), // U+3226
        (0xE388A7, 0, &[0x28, 0xE585AB, 0x29]), // U+3227
        (0xE388A8, 0, &[0x28, 0xE4B99D, 0x29]), // U+3228
        (0xE388A9, 0, &[0x28, 0xE58D81, 0x29]), // U+3229
        (0xE388AA, 0, &[0x28, 0xE69C88, 0x29]), // U+322A
        (0xE388AB, 0, &[0x28, 0xE781AB, 0x29]), // U+322B
        (0xE388AC, 0, &[0x28, 0xE6B0B4, 0x29]), // U+322C
        (0xE388AD, 0, &[0x28, 0xE69CA8, 0x29]), // U+322D
        (0xE388AE, 0, &[0x28, 0xE98791, 0x29]), // U+322E
        (0xE388AF, 0, &[0x28, 0xE59C9F, 0x29]), // U+322F
        (0xE388B0, 0, &[0x28, 0xE697A5, 0x29]), // U+3230
        (0xE388B1, 0, &[0x28, 0xE6A0AA, 0x29]), // U+3231
        (0xE388B2, 0, &[0x28, 0xE69C89, 0x29]), // U+3232
        (0xE388B3, 0, &[0x28, 0xE7A4BE, 0x29]), // U+3233
        (0xE388B4, 0, &[0x28, 0xE5908D, 0x29]), // U+3234
        (0xE388B5, 0, &[0x28, 0xE789B9, 0x29]), // U+3235
        (0xE388B6, 0, &[0x28, 0xE8B2A1, 0x29]), // U+3236
        (0xE388B7, 0, &[0x28, 0xE7A59D, 0x29]), // U+3237
        (0xE388B8, 0, &[0x28, 0xE58AB4, 0x29]), // U+3238
        (0xE388B9, 0, &[0x28, 0xE4BBA3, 0x29]), // U+3239
        (0xE388BA, 0, &[0x28, 0xE591BC, 0x29]), // U+323A
        (0xE388BB, 0, &[0x28, 0xE5ADA6, 0x29]), // U+323B
        (0xE388BC, 0, &[0x28, 0xE79BA3, 0x29]), // U+323C
        (0xE388BD, 0, &[0x28, 0xE4BC81, 0x29]), // U+323D
        (0xE388BE, 0, &[0x28, 0xE8B387, 0x29]), // U+323E
        (0xE388BF, 0, &[0x28, 0xE58D94, 0x29]), // U+323F
        (0xE38980, 0, &[0x28, 0xE7A5AD, 0x29]), // U+3240
        (0xE38981, 0, &[0x28, 0xE4BC91, 0x29]), // U+3241
        (0xE38982, 0, &[0x28, 0xE887AA, 0x29]), // U+3242
        (0xE38983, 0, &[0x28, 0xE887B3, 0x29]), // U+3243
        (0xE38984, 0, &[0xE5958F]), // U+3244
        (0xE38985, 0, &[0xE5B9BC]), // U+3245
        (0xE38986, 0, &[0xE69687]), // U+3246
        (0xE38987, 0, &[0xE7AE8F]), // U+3247
        (0xE38990, 0, &[0x50, 0x54, 0x45]), // U+3250
        (0xE38991, 0, &[0x32, 0x31]), // U+3251
        (0xE38992, 0, &[0x32, 0x32]), // U+3252
        (0xE38993, 0, &[0x32, 0x33]), // U+3253
        (0xE38994, 0, &[0x32, 0x34]), // U+3254
        (0xE38995, 0, &[0x32, 0x35]), // U+3255
        (0xE38996, 0, &[0x32, 0x36]), // U+3256
        (0xE38997, 0, &[0x32, 0x37]), // U+3257
        (0xE38998, 0, &[0x32, 0x38]), // U+3258
        (0xE38999, 0, &[0x32, 0x39]), // U+3259
        (0xE3899A, 0, &[0x33, 0x30]), // U+325A
        (0xE3899B, 0, &[0x33, 0x31]), // U+325B
        (0xE3899C, 0, &[0x33, 0x32]), // U+325C
        (0xE3899D, 0, &[0x33, 0x33]), // U+325D
        (0xE3899E, 0, &[0x33, 0x34]), // U+325E
        (0xE3899F, 0, &[0x33, 0x35]), // U+325F
        (0xE389A0, 0, &[0xE18480]), // U+3260
        (0xE389A1, 0, &[0xE18482]), // U+3261
        (0xE389A2, 0, &[0xE18483]), // U+3262
        (0xE389A3, 0, &[0xE18485]), // U+3263
        (0xE389A4, 0, &[0xE18486]), // U+3264
        (0xE389A5, 0, &[0xE18487]), // U+3265
        (0xE389A6, 0, &[0xE18489]), // U+3266
        (0xE389A7, 0, &[0xE1848B]), // U+3267
        (0xE389A8, 0, &[0xE1848C]), // U+3268
        (0xE389A9, 0, &[0xE1848E]), // U+3269
        (0xE389AA, 0, &[0xE1848F]), // U+326A
        (0xE389AB, 0, &[0xE18490]), // U+326B
        (0xE389AC, 0, &[0xE18491]), // U+326C
        (0xE389AD, 0, &[0xE18492]), // U+326D
        (0xE389AE, 0, &[0xE18480, 0xE185A1]), // U+326E
        (0xE389AF, 0, &[0xE18482, 0xE185A1]), // U+326F
        (0xE389B0, 0, &[0xE18483, 0xE185A1]), // U+3270
        (0xE389B1, 0, &[0xE18485, 0xE185A1]), // U+3271
        (0xE389B2, 0, &[0xE18486, 0xE185A1]), // U+3272
        (0xE389B3, 0, &[0xE18487, 0xE185A1]), // U+3273
        (0xE389B4, 0, &[0xE18489, 0xE185A1]), // U+3274
        (0xE389B5, 0, &[0xE1848B, 0xE185A1]), // U+3275
        (0xE389B6, 0, &[0xE1848C, 0xE185A1]), // U+3276
        (0xE389B7, 0, &[0xE1848E, 0xE185A1]), // U+3277
        (0xE389B8, 0, &[0xE1848F, 0xE185A1]), // U+3278
        (0xE389B9, 0, &[0xE18490, 0xE185A1]), // U+3279
        (0xE389BA, 0, &[0xE18491, 0xE185A1]), // U+327A
        (0xE389BB, 0, &[0xE18492, 0xE185A1]), // U+327B
        (0xE389BC, 0, &[0xE1848E, 0xE185A1, 0xE186B7, 0xE18480, 0xE185A9]), // U+327C
        (0xE389BD, 0, &[0xE1848C, 0xE185AE, 0xE1848B, 0xE185B4]), // U+327D
        (0xE389BE, 0, &[0xE1848B, 0xE185AE]), // U+327E
        (0xE38A80, 0, &[0xE4B880]), // U+3280
        (0xE38A81, 0, &[0xE4BA8C]), // U+3281
        (0xE38A82, 0, &[0xE4B889]), // U+3282
        (0xE38A83, 0, &[0xE59B9B]), // U+3283
        (0xE38A84, 0, &[0xE4BA94]), // U+3284
        (0xE38A85, 0, &[0xE585AD]), // U+3285
        (0xE38A86, 0, &[0xE4B883]), // U+3286
        (0xE38A87, 0, &[0xE585AB]), // U+3287
        (0xE38A88, 0, &[0xE4B99D]), // U+3288
        (0xE38A89, 0, &[0xE58D81]), // U+3289
        (0xE38A8A, 0, &[0xE69C88]), // U+328A
        (0xE38A8B, 0, &[0xE781AB]), // U+328B
        (0xE38A8C, 0, &[0xE6B0B4]), // U+328C
        (0xE38A8D, 0, &[0xE69CA8]), // U+328D
        (0xE38A8E, 0, &[0xE98791]), // U+328E
        (0xE38A8F, 0, &[0xE59C9F]), // U+328F
        (0xE38A90, 0, &[0xE697A5]), // U+3290
        (0xE38A91, 0, &[0xE6A0AA]), // U+3291
        (0xE38A92, 0, &[0xE69C89]), // U+3292
        (0xE38A93, 0, &[0xE7A4BE]), // U+3293
        (0xE38A94, 0, &[0xE5908D]), // U+3294
        (0xE38A95, 0, &[0xE789B9]), // U+3295
        (0xE38A96, 0, &[0xE8B2A1]), // U+3296
        (0xE38A97, 0, &[0xE7A59D]), // U+3297
        (0xE38A98, 0, &[0xE58AB4]), // U+3298
        (0xE38A99, 0, &[0xE7A798]), // U+3299
        (0xE38A9A, 0, &[0xE794B7]), // U+329A
        (0xE38A9B, 0, &[0xE5A5B3]), // U+329B
        (0xE38A9C, 0, &[0xE981A9]), // U+329C
        (0xE38A9D, 0, &[0xE584AA]), // U+329D
        (0xE38A9E, 0, &[0xE58DB0]), // U+329E
        (0xE38A9F, 0, &[0xE6B3A8]), // U+329F
        (0xE38AA0, 0, &[0xE9A085]), // U+32A0
        (0xE38AA1, 0, &[0xE4BC91]), // U+32A1
        (0xE38AA2, 0, &[0xE58699]), // U+32A2
        (0xE38AA3, 0, &[0xE6ADA3]), // U+32A3
        (0xE38AA4, 0, &[0xE4B88A]), // U+32A4
        (0xE38AA5, 0, &[0xE4B8AD]), // U+32A5
        (0xE38AA6, 0, &[0xE4B88B]), // U+32A6
        (0xE38AA7, 0, &[0xE5B7A6]), // U+32A7
        (0xE38AA8, 0, &[0xE58FB3]), // U+32A8
        (0xE38AA9, 0, &[0xE58CBB]), // U+32A9
        (0xE38AAA, 0, &[0xE5AE97]), // U+32AA
        (0xE38AAB, 0, &[0xE5ADA6]), // U+32AB
        (0xE38AAC, 0, &[0xE79BA3]), // U+32AC
        (0xE38AAD, 0, &[0xE4BC81]), // U+32AD
        (0xE38AAE, 0, &[0xE8B387]), // U+32AE
        (0xE38AAF, 0, &[0xE58D94]), // U+32AF
        (0xE38AB0, 0, &[0xE5A49C]), // U+32B0
        (0xE38AB1, 0, &[0x33, 0x36]), // U+32B1
        (0xE38AB2, 0, &[0x33, 0x37]), // U+32B2
        (0xE38AB3, 0, &[0x33, 0x38]), // U+32B3
        (0xE38AB4, 0, &[0x33, 0x39]), // U+32B4
        (0xE38AB5, 0, &[0x34, 0x30]), // U+32B5
        (0xE38AB6, 0, &[0x34, 0x31]), // U+32B6
        (0xE38AB7, 0, &[0x34, 0x32]), // U+32B7
        (0xE38AB8, 0, &[0x34, 0x33]), // U+32B8
        (0xE38AB9, 0, &[0x34, 0x34]), // U+32B9
        (0xE38ABA, 0, &[0x34, 0x35]), // U+32BA
        (0xE38ABB, 0, &[0x34, 0x36]), // U+32BB
        (0xE38ABC, 0, &[0x34, 0x37]), // U+32BC
        (0xE38ABD, 0, &[0x34, 0x38]), // U+32BD
        (0xE38ABE, 0, &[0x34, 0x39]), // U+32BE
        (0xE38ABF, 0, &[0x35, 0x30]), // U+32BF
        (0xE38B80, 0, &[0x31, 0xE69C88]), // U+32C0
        (0xE38B81, 0, &[0x32, 0xE69C88]), // U+32C1
        (0xE38B82, 0, &[0x33, 0xE69C88]), // U+32C2
        (0xE38B83, 0, &[0x34, 0xE69C88]), // U+32C3
        (0xE38B84, 0, &[0x35, 0xE69C88]), // U+32C4
        (0xE38B85, 0, &[0x36, 0xE69C88]), // U+32C5
        (0xE38B86, 0, &[0x37, 0xE69C88]), // U+32C6
        (0xE38B87, 0, &[0x38, 0xE69C88]), // U+32C7
        (0xE38B88, 0, &[0x39, 0xE69C88]), // U+32C8
        (0xE38B89, 0, &[0x31, 0x30, 0xE69C88]), // U+32C9
        (0xE38B8A, 0, &[0x31, 0x31, 0xE69C88]), // U+32CA
        (0xE38B8B, 0, &[0x31, 0x32, 0xE69C88]), // U+32CB
        (0xE38B8C, 0, &[0x48, 0x67]), // U+32CC
        (0xE38B8D, 0, &[0x65, 0x72, 0x67]), // U+32CD
        (0xE38B8E, 0, &[0x65, 0x56]), // U+32CE
        (0xE38B8F, 0, &[0x4C, 0x54, 0x44]), // U+32CF
        (0xE38B90, 0, &[0xE382A2]), // U+32D0
        (0xE38B91, 0, &[0xE382A4]), // U+32D1
        (0xE38B92, 0, &[0xE382A6]), // U+32D2
        (0xE38B93, 0, &[0xE382A8]), // U+32D3
        (0xE38B94, 0, &[0xE382AA]), // U+32D4
        (0xE38B95, 0, &[0xE382AB]), // U+32D5
        (0xE38B96, 0, &[0xE382AD]), // U+32D6
        (0xE38B97, 0, &[0xE382AF]), // U+32D7
        (0xE38B98, 0, &[0xE382B1]), // U+32D8
        (0xE38B99, 0, &[0xE382B3]), // U+32D9
        (0xE38B9A, 0, &[0xE382B5]), // U+32DA
        (0xE38B9B, 0, &[0xE382B7]), // U+32DB
        (0xE38B9C, 0, &[0xE382B9]), // U+32DC
        (0xE38B9D, 0, &[0xE382BB]), // U+32DD
        (0xE38B9E, 0, &[0xE382BD]), // U+32DE
        (0xE38B9F, 0, &[0xE382BF]), // U+32DF
        (0xE38BA0, 0, &[0xE38381]), // U+32E0
        (0xE38BA1, 0, &[0xE38384]), // U+32E1
        (0xE38BA2, 0, &[0xE38386]), // U+32E2
        (0xE38BA3, 0, &[0xE38388]), // U+32E3
        (0xE38BA4, 0, &[0xE3838A]), // U+32E4
        (0xE38BA5, 0, &[0xE3838B]), // U+32E5
        (0xE38BA6, 0, &[0xE3838C]), // U+32E6
        (0xE38BA7, 0, &[0xE3838D]), // U+32E7
        (0xE38BA8, 0, &[0xE3838E]), // U+32E8
        (0xE38BA9, 0, &[0xE3838F]), // U+32E9
        (0xE38BAA, 0, &[0xE38392]), // U+32EA
        (0xE38BAB, 0, &[0xE38395]), // U+32EB
        (0xE38BAC, 0, &[0xE38398]), // U+32EC
        (0xE38BAD, 0, &[0xE3839B]), // U+32ED
        (0xE38BAE, 0, &[0xE3839E]), // U+32EE
        (0xE38BAF, 0, &[0xE3839F]), // U+32EF
        (0xE38BB0, 0, &[0xE383A0]), // U+32F0
        (0xE38BB1, 0, &[0xE383A1]), // U+32F1
        (0xE38BB2, 0, &[0xE383A2]), // U+32F2
        (0xE38BB3, 0, &[0xE383A4]), // U+32F3
        (0xE38BB4, 0, &[0xE383A6]), // U+32F4
        (0xE38BB5, 0, &[0xE383A8]), // U+32F5
        (0xE38BB6, 0, &[0xE383A9]), // U+32F6
        (0xE38BB7, 0, &[0xE383AA]), // U+32F7
        (0xE38BB8, 0, &[0xE383AB]), // U+32F8
        (0xE38BB9, 0, &[0xE383AC]), // U+32F9
        (0xE38BBA, 0, &[0xE383AD]), // U+32FA
        (0xE38BBB, 0, &[0xE383AF]), // U+32FB
        (0xE38BBC, 0, &[0xE383B0]), // U+32FC
        (0xE38BBD, 0, &[0xE383B1]), // U+32FD
        (0xE38BBE, 0, &[0xE383B2]), // U+32FE
        (0xE38BBF, 0, &[0xE4BBA4, 0xE5928C]), // U+32FF
        (0xE38C80, 0, &[0xE382A2, 0xE38391, 0xE383BC, 0xE38388]), // U+3300
        (0xE38C81, 0, &[0xE382A2, 0xE383AB, 0xE38395, 0xE382A1]), // U+3301
        (0xE38C82, 0, &[0xE382A2, 0xE383B3, 0xE3839A, 0xE382A2]), // U+3302
        (0xE38C83, 0, &[0xE382A2, 0xE383BC, 0xE383AB]), // U+3303
        (0xE38C84, 0, &[0xE382A4, 0xE3838B, 0xE383B3, 0xE382B0]), // U+3304
        (0xE38C85, 0, &[0xE382A4, 0xE383B3, 0xE38381]), // U+3305
        (0xE38C86, 0, &[0xE382A6, 0xE382A9, 0xE383B3]), // U+3306
        (0xE38C87, 0, &[0xE382A8, 0xE382B9, 0xE382AF, 0xE383BC, 0xE38389]), // U+3307
        (0xE38C88, 0, &[0xE382A8, 0xE383BC, 0xE382AB, 0xE383BC]), // U+3308
        (0xE38C89, 0, &[0xE382AA, 0xE383B3, 0xE382B9]), // U+3309
        (0xE38C8A, 0, &[0xE382AA, 0xE383BC, 0xE383A0]), // U+330A
        (0xE38C8B, 0, &[0xE382AB, 0xE382A4, 0xE383AA]), // U+330B
        (0xE38C8C, 0, &[0xE382AB, 0xE383A9, 0xE38383, 0xE38388]), // U+330C
        (0xE38C8D, 0, &[0xE382AB, 0xE383AD, 0xE383AA, 0xE383BC]), // U+330D
        (0xE38C8E, 0, &[0xE382AC, 0xE383AD, 0xE383B3]), // U+330E
        (0xE38C8F, 0, &[0xE382AC, 0xE383B3, 0xE3839E]), // U+330F
        (0xE38C90, 0, &[0xE382AE, 0xE382AC]), // U+3310
        (0xE38C91, 0, &[0xE382AE, 0xE3838B, 0xE383BC]), // U+3311
        (0xE38C92, 0, &[0xE382AD, 0xE383A5, 0xE383AA, 0xE383BC]), // U+3312
        (0xE38C93, 0, &[0xE382AE, 0xE383AB, 0xE38380, 0xE383BC]), // U+3313
        (0xE38C94, 0, &[0xE382AD, 0xE383AD]), // U+3314
        (0xE38C95, 0, &[0xE382AD, 0xE383AD, 0xE382B0, 0xE383A9, 0xE383A0]), // U+3315
        (0xE38C96, 0, &[0xE382AD, 0xE383AD, 0xE383A1, 0xE383BC, 0xE38388, 0xE383AB]), // U+3316
        (0xE38C97, 0, &[0xE382AD, 0xE383AD, 0xE383AF, 0xE38383, 0xE38388]), // U+3317
        (0xE38C98, 0, &[0xE382B0, 0xE383A9, 0xE383A0]), // U+3318
        (0xE38C99, 0, &[0xE382B0, 0xE383A9, 0xE383A0, 0xE38388, 0xE383B3]), // U+3319
        (0xE38C9A, 0, &[0xE382AF, 0xE383AB, 0xE382BC, 0xE382A4, 0xE383AD]), // U+331A
        (0xE38C9B, 0, &[0xE382AF, 0xE383AD, 0xE383BC, 0xE3838D]), // U+331B
        (0xE38C9C, 0, &[0xE382B1, 0xE383BC, 0xE382B9]), // U+331C
        (0xE38C9D, 0, &[0xE382B3, 0xE383AB, 0xE3838A]), // U+331D
        (0xE38C9E, 0, &[0xE382B3, 0xE383BC, 0xE3839D]), // U+331E
        (0xE38C9F, 0, &[0xE382B5, 0xE382A4, 0xE382AF, 0xE383AB]), // U+331F
        (0xE38CA0, 0, &[0xE382B5, 0xE383B3, 0xE38381, 0xE383BC, 0xE383A0]), // U+3320
        (0xE38CA1, 0, &[0xE382B7, 0xE383AA, 0xE383B3, 0xE382B0]), // U+3321
        (0xE38CA2, 0, &[0xE382BB, 0xE383B3, 0xE38381]), // U+3322
        (0xE38CA3, 0, &[0xE382BB, 0xE383B3, 0xE38388]), // U+3323
        (0xE38CA4, 0, &[0xE38380, 0xE383BC, 0xE382B9]), // U+3324
        (0xE38CA5, 0, &[0xE38387, 0xE382B7]), // U+3325
        (0xE38CA6, 0, &[0xE38389, 0xE383AB]), // U+3326
        (0xE38CA7, 0, &[0xE38388, 0xE383B3]), // U+3327
        (0xE38CA8, 0, &[0xE3838A, 0xE3838E]), // U+3328
        (0xE38CA9, 0, &[0xE3838E, 0xE38383, 0xE38388]), // U+3329
        (0xE38CAA, 0, &[0xE3838F, 0xE382A4, 0xE38384]), // U+332A
        (0xE38CAB, 0, &[0xE38391, 0xE383BC, 0xE382BB, 0xE383B3, 0xE38388]), // U+332B
        (0xE38CAC, 0, &[0xE38391, 0xE383BC, 0xE38384]), // U+332C
        (0xE38CAD, 0, &[0xE38390, 0xE383BC, 0xE383AC, 0xE383AB]), // U+332D
        (0xE38CAE, 0, &[0xE38394, 0xE382A2, 0xE382B9, 0xE38388, 0xE383AB]), // U+332E
        (0xE38CAF, 0, &[0xE38394, 0xE382AF, 0xE383AB]), // U+332F
        (0xE38CB0, 0, &[0xE38394, 0xE382B3]), // U+3330
        (0xE38CB1, 0, &[0xE38393, 0xE383AB]), // U+3331
        (0xE38CB2, 0, &[0xE38395, 0xE382A1, 0xE383A9, 0xE38383, 0xE38389]), // U+3332
        (0xE38CB3, 0, &[0xE38395, 0xE382A3, 0xE383BC, 0xE38388]), // U+3333
        (0xE38CB4, 0, &[0xE38396, 0xE38383, 0xE382B7, 0xE382A7, 0xE383AB]), // U+3334
        (0xE38CB5, 0, &[0xE38395, 0xE383A9, 0xE383B3]), // U+3335
        (0xE38CB6, 0, &[0xE38398, 0xE382AF, 0xE382BF, 0xE383BC, 0xE383AB]), // U+3336
        (0xE38CB7, 0, &[0xE3839A, 0xE382BD]), // U+3337
        (0xE38CB8, 0, &[0xE3839A, 0xE3838B, 0xE38392]), // U+3338
        (0xE38CB9, 0, &[0xE38398, 0xE383AB, 0xE38384]), // U+3339
        (0xE38CBA, 0, &[0xE3839A, 0xE383B3, 0xE382B9]), // U+333A
        (0xE38CBB, 0, &[0xE3839A, 0xE383BC, 0xE382B8]), // U+333B
        (0xE38CBC, 0, &[0xE38399, 0xE383BC, 0xE382BF]), // U+333C
        (0xE38CBD, 0, &[0xE3839D, 0xE382A4, 0xE383B3, 0xE38388]), // U+333D
        (0xE38CBE, 0, &[0xE3839C, 0xE383AB, 0xE38388]), // U+333E
        (0xE38CBF, 0, &[0xE3839B, 0xE383B3]), // U+333F
        (0xE38D80, 0, &[0xE3839D, 0xE383B3, 0xE38389]), // U+3340
        (0xE38D81, 0, &[0xE3839B, 0xE383BC, 0xE383AB]), // U+3341
        (0xE38D82, 0, &[0xE3839B, 0xE383BC, 0xE383B3]), // U+3342
        (0xE38D83, 0, &[0xE3839E, 0xE382A4, 0xE382AF, 0xE383AD]), // U+3343
        (0xE38D84, 0, &[0xE3839E, 0xE382A4, 0xE383AB]), // U+3344
        (0xE38D85, 0, &[0xE3839E, 0xE38383, 0xE3838F]), // U+3345
        (0xE38D86, 0, &[0xE3839E, 0xE383AB, 0xE382AF]), // U+3346
        (0xE38D87, 0, &[0xE3839E, 0xE383B3, 0xE382B7, 0xE383A7, 0xE383B3]), // U+3347
        (0xE38D88, 0, &[0xE3839F, 0xE382AF, 0xE383AD, 0xE383B3]), // U+3348
        (0xE38D89, 0, &[0xE3839F, 0xE383AA]), // U+3349
        (0xE38D8A, 0, &[0xE3839F, 0xE383AA, 0xE38390, 0xE383BC, 0xE383AB]), // U+334A
        (0xE38D8B, 0, &[0xE383A1, 0xE382AC]), // U+334B
        (0xE38D8C, 0, &[0xE383A1, 0xE382AC, 0xE38388, 0xE383B3]), // U+334C
        (0xE38D8D, 0, &[0xE383A1, 0xE383BC, 0xE38388, 0xE383AB]), // U+334D
        (0xE38D8E, 0, &[0xE383A4, 0xE383BC, 0xE38389]), // U+334E
        (0xE38D8F, 0, &[0xE383A4, 0xE383BC, 0xE383AB]), // U+334F
        (0xE38D90, 0, &[0xE383A6, 0xE382A2, 0xE383B3]), // U+3350
        (0xE38D91, 0, &[0xE383AA, 0xE38383, 0xE38388, 0xE383AB]), // U+3351
        (0xE38D92, 0, &[0xE383AA, 0xE383A9]), // U+3352
        (0xE38D93, 0, &[0xE383AB, 0xE38394, 0xE383BC]), // U+3353
        (0xE38D94, 0, &[0xE383AB, 0xE383BC, 0xE38396, 0xE383AB]), // U+3354
        (0xE38D95, 0, &[0xE383AC, 0xE383A0]), // U+3355
        (0xE38D96, 0, &[0xE383AC, 0xE383B3, 0xE38388, 0xE382B2, 0xE383B3]), // U+3356
        (0xE38D97, 0, &[0xE383AF, 0xE38383, 0xE38388]), // U+3357
        (0xE38D98, 0, &[0x30, 0xE782B9]), // U+3358
        (0xE38D99, 0, &[0x31, 0xE782B9]), // U+3359
        (0xE38D9A, 0, &[0x32, 0xE782B9]), // U+335A
        (0xE38D9B, 0, &[0x33, 0xE782B9]), // U+335B
        (0xE38D9C, 0, &[0x34, 0xE782B9]), // U+335C
        (0xE38D9D, 0, &[0x35, 0xE782B9]), // U+335D
        (0xE38D9E, 0, &[0x36, 0xE782B9]), // U+335E
        (0xE38D9F, 0, &[0x37, 0xE782B9]), // U+335F
        (0xE38DA0, 0, &[0x38, 0xE782B9]), // U+3360
        (0xE38DA1, 0, &[0x39, 0xE782B9]), // U+3361
        (0xE38DA2, 0, &[0x31, 0x30, 0xE782B9]), // U+3362
        (0xE38DA3, 0, &[0x31, 0x31, 0xE782B9]), // U+3363
        (0xE38DA4, 0, &[0x31, 0x32, 0xE782B9]), // U+3364
        (0xE38DA5, 0, &[0x31, 0x33, 0xE782B9]), // U+3365
        (0xE38DA6, 0, &[0x31, 0x34, 0xE782B9]), // U+3366
        (0xE38DA7, 0, &[0x31, 0x35, 0xE782B9]), // U+3367
        (0xE38DA8, 0, &[0x31, 0x36, 0xE782B9]), // U+3368
        (0xE38DA9, 0, &[0x31, 0x37, 0xE782B9]), // U+3369
        (0xE38DAA, 0, &[0x31, 0x38, 0xE782B9]), // U+336A
        (0xE38DAB, 0, &[0x31, 0x39, 0xE782B9]), // U+336B
        (0xE38DAC, 0, &[0x32, 0x30, 0xE782B9]), // U+336C
        (0xE38DAD, 0, &[0x32, 0x31, 0xE782B9]), // U+336D
        (0xE38DAE, 0, &[0x32, 0x32, 0xE782B9]), // U+336E
        (0xE38DAF, 0, &[0x32, 0x33, 0xE782B9]), // U+336F
        (0xE38DB0, 0, &[0x32, 0x34, 0xE782B9]), // U+3370
        (0xE38DB1, 0, &[0x68, 0x50, 0x61]), // U+3371
        (0xE38DB2, 0, &[0x64, 0x61]), // U+3372
        (0xE38DB3, 0, &[0x41, 0x55]), // U+3373
        (0xE38DB4, 0, &[0x62, 0x61, 0x72]), // U+3374
        (0xE38DB5, 0, &[0x6F, 0x56]), // U+3375
        (0xE38DB6, 0, &[0x70, 0x63]), // U+3376
        (0xE38DB7, 0, &[0x64, 0x6D]), // U+3377
        (0xE38DB8, 0, &[0x64, 0x6D, 0xC2B2]), // U+3378
        (0xE38DB9, 0, &[0x64, 0x6D, 0xC2B3]), // U+3379
        (0xE38DBA, 0, &[0x49, 0x55]), // U+337A
        (0xE38DBB, 0, &[0xE5B9B3, 0xE68890]), // U+337B
        (0xE38DBC, 0, &[0xE698AD, 0xE5928C]), // U+337C
        (0xE38DBD, 0, &[0xE5A4A7, 0xE6ADA3]), // U+337D
        (0xE38DBE, 0, &[0xE6988E, 0xE6B2BB]), // U+337E
        (0xE38DBF, 0, &[0xE6A0AA, 0xE5BC8F, 0xE4BC9A, 0xE7A4BE]), // U+337F
        (0xE38E80, 0, &[0x70, 0x41]), // U+3380
        (0xE38E81, 0, &[0x6E, 0x41]), // U+3381
        (0xE38E82, 0, &[0xCEBC, 0x41]), // U+3382
        (0xE38E83, 0, &[0x6D, 0x41]), // U+3383
        (0xE38E84, 0, &[0x6B, 0x41]), // U+3384
        (0xE38E85, 0, &[0x4B, 0x42]), // U+3385
        (0xE38E86, 0, &[0x4D, 0x42]), // U+3386
        (0xE38E87, 0, &[0x47, 0x42]), // U+3387
        (0xE38E88, 0, &[0x63, 0x61, 0x6C]), // U+3388
        (0xE38E89, 0, &[0x6B, 0x63, 0x61, 0x6C]), // U+3389
        (0xE38E8A, 0, &[0x70, 0x46]), // U+338A
        (0xE38E8B, 0, &[0x6E, 0x46]), // U+338B
        (0xE38E8C, 0, &[0xCEBC, 0x46]), // U+338C
        (0xE38E8D, 0, &[0xCEBC, 0x67]), // U+338D
        (0xE38E8E, 0, &[0x6D, 0x67]), // U+338E
        (0xE38E8F, 0, &[0x6B, 0x67]), // U+338F
        (0xE38E90, 0, &[0x48, 0x7A]), // U+3390
        (0xE38E91, 0, &[0x6B, 0x48, 0x7A]), // U+3391
        (0xE38E92, 0, &[0x4D, 0x48, 0x7A]), // U+3392
        (0xE38E93, 0, &[0x47, 0x48, 0x7A]), // U+3393
        (0xE38E94, 0, &[0x54, 0x48, 0x7A]), // U+3394
        (0xE38E95, 0, &[0xCEBC, 0xE28493]), // U+3395
        (0xE38E96, 0, &[0x6D, 0xE28493]), // U+3396
        (0xE38E97, 0, &[0x64, 0xE28493]), // U+3397
        (0xE38E98, 0, &[0x6B, 0xE28493]), // U+3398
        (0xE38E99, 0, &[0x66, 0x6D]), // U+3399
        (0xE38E9A, 0, &[0x6E, 0x6D]), // U+339A
        (0xE38E9B, 0, &[0xCEBC, 0x6D]), // U+339B
        (0xE38E9C, 0, &[0x6D, 0x6D]), // U+339C
        (0xE38E9D, 0, &[0x63, 0x6D]), // U+339D
        (0xE38E9E, 0, &[0x6B, 0x6D]), // U+339E
        (0xE38E9F, 0, &[0x6D, 0x6D, 0xC2B2]), // U+339F
        (0xE38EA0, 0, &[0x63, 0x6D, 0xC2B2]), // U+33A0
        (0xE38EA1, 0, &[0x6D, 0xC2B2]), // U+33A1
        (0xE38EA2, 0, &[0x6B, 0x6D, 0xC2B2]), // U+33A2
        (0xE38EA3, 0, &[0x6D, 0x6D, 0xC2B3]), // U+33A3
        (0xE38EA4, 0, &[0x63, 0x6D, 0xC2B3]), // U+33A4
        (0xE38EA5, 0, &[0x6D, 0xC2B3]), // U+33A5
        (0xE38EA6, 0, &[0x6B, 0x6D, 0xC2B3]), // U+33A6
        (0xE38EA7, 0, &[0x6D, 0xE28895, 0x73]), // U+33A7
        (0xE38EA8, 0, &[0x6D, 0xE28895, 0x73, 0xC2B2]), // U+33A8
        (0xE38EA9, 0, &[0x50, 0x61]), // U+33A9
        (0xE38EAA, 0, &[0x6B, 0x50, 0x61]), // U+33AA
        (0xE38EAB, 0, &[0x4D, 0x50, 0x61]), // U+33AB
        (0xE38EAC, 0, &[0x47, 0x50, 0x61]), // U+33AC
        (0xE38EAD, 0, &[0x72, 0x61, 0x64]), // U+33AD
        (0xE38EAE, 0, &[0x72, 0x61, 0x64, 0xE28895, 0x73]), // U+33AE
        (0xE38EAF, 0, &[0x72, 0x61, 0x64, 0xE28895, 0x73, 0xC2B2]), // U+33AF
        (0xE38EB0, 0, &[0x70, 0x73]), // U+33B0
        (0xE38EB1, 0, &[0x6E, 0x73]), // U+33B1
        (0xE38EB2, 0, &[0xCEBC, 0x73]), // U+33B2
        (0xE38EB3, 0, &[0x6D, 0x73]), // U+33B3
        (0xE38EB4, 0, &[0x70, 0x56]), // U+33B4
        (0xE38EB5, 0, &[0x6E, 0x56]), // U+33B5
        (0xE38EB6, 0, &[0xCEBC, 0x56]), // U+33B6
        (0xE38EB7, 0, &[0x6D, 0x56]), // U+33B7
        (0xE38EB8, 0, &[0x6B, 0x56]), // U+33B8
        (0xE38EB9, 0, &[0x4D, 0x56]), // U+33B9
        (0xE38EBA, 0, &[0x70, 0x57]), // U+33BA
        (0xE38EBB, 0, &[0x6E, 0x57]), // U+33BB
        (0xE38EBC, 0, &[0xCEBC, 0x57]), // U+33BC
        (0xE38EBD, 0, &[0x6D, 0x57]), // U+33BD
        (0xE38EBE, 0, &[0x6B, 0x57]), // U+33BE
        (0xE38EBF, 0, &[0x4D, 0x57]), // U+33BF
        (0xE38F80, 0, &[0x6B, 0xCEA9]), // U+33C0
        (0xE38F81, 0, &[0x4D, 0xCEA9]), // U+33C1
        (0xE38F82, 0, &[0x61, 0x2E, 0x6D, 0x2E]), // U+33C2
        (0xE38F83, 0, &[0x42, 0x71]), // U+33C3
        (0xE38F84, 0, &[0x63, 0x63]), // U+33C4
        (0xE38F85, 0, &[0x63, 0x64]), // U+33C5
        (0xE38F86, 0, &[0x43, 0xE28895, 0x6B, 0x67]), // U+33C6
        (0xE38F87, 0, &[0x43, 0x6F, 0x2E]), // U+33C7
        (0xE38F88, 0, &[0x64, 0x42]), // U+33C8
        (0xE38F89, 0, &[0x47, 0x79]), // U+33C9
        (0xE38F8A, 0, &[0x68, 0x61]), // U+33CA
        (0xE38F8B, 0, &[0x48, 0x50]), // U+33CB
        (0xE38F8C, 0, &[0x69, 0x6E]), // U+33CC
        (0xE38F8D, 0, &[0x4B, 0x4B]), // U+33CD
        (0xE38F8E, 0, &[0x4B, 0x4D]), // U+33CE
        (0xE38F8F, 0, &[0x6B, 0x74]), // U+33CF
        (0xE38F90, 0, &[0x6C, 0x6D]), // U+33D0
        (0xE38F91, 0, &[0x6C, 0x6E]), // U+33D1
        (0xE38F92, 0, &[0x6C, 0x6F, 0x67]), // U+33D2
        (0xE38F93, 0, &[0x6C, 0x78]), // U+33D3
        (0xE38F94, 0, &[0x6D, 0x62]), // U+33D4
        (0xE38F95, 0, &[0x6D, 0x69, 0x6C]), // U+33D5
        (0xE38F96, 0, &[0x6D, 0x6F, 0x6C]), // U+33D6
        (0xE38F97, 0, &[0x50, 0x48]), // U+33D7
        (0xE38F98, 0, &[0x70, 0x2E, 0x6D, 0x2E]), // U+33D8
        (0xE38F99, 0, &[0x50, 0x50, 0x4D]), // U+33D9
        (0xE38F9A, 0, &[0x50, 0x52]), // U+33DA
        (0xE38F9B, 0, &[0x73, 0x72]), // U+33DB
        (0xE38F9C, 0, &[0x53, 0x76]), // U+33DC
        (0xE38F9D, 0, &[0x57, 0x62]), // U+33DD
        (0xE38F9E, 0, &[0x56, 0xE28895, 0x6D]), // U+33DE
        (0xE38F9F, 0, &[0x41, 0xE28895, 0x6D]), // U+33DF
        (0xE38FA0, 0, &[0x31, 0xE697A5]), // U+33E0
        (0xE38FA1, 0, &[0x32, 0xE697A5]), // U+33E1
        (0xE38FA2, 0, &[0x33, 0xE697A5]), // U+33E2
        (0xE38FA3, 0, &[0x34, 0xE697A5]), // U+33E3
        (0xE38FA4, 0, &[0x35, 0xE697A5]), // U+33E4
        (0xE38FA5, 0, &[0x36, 0xE697A5]), // U+33E5
        (0xE38FA6, 0, &[0x37, 0xE697A5]), // U+33E6
        (0xE38FA7, 0, &[0x38, 0xE697A5]), // U+33E7
        (0xE38FA8, 0, &[0x39, 0xE697A5]), // U+33E8
        (0xE38FA9, 0, &[0x31, 0x30, 0xE697A5]), // U+33E9
        (0xE38FAA, 0, &[0x31, 0x31, 0xE697A5]), // U+33EA
        (0xE38FAB, 0, &[0x31, 0x32, 0xE697A5]), // U+33EB
        (0xE38FAC, 0, &[0x31, 0x33, 0xE697A5]), // U+33EC
        (0xE38FAD, 0, &[0x31, 0x34, 0xE697A5]), // U+33ED
        (0xE38FAE, 0, &[0x31, 0x35, 0xE697A5]), // U+33EE
        (0xE38FAF, 0, &[0x31, 0x36, 0xE697A5]), // U+33EF
        (0xE38FB0, 0, &[0x31, 0x37, 0xE697A5]), // U+33F0
        (0xE38FB1, 0, &[0x31, 0x38, 0xE697A5]), // U+33F1
        (0xE38FB2, 0, &[0x31, 0x39, 0xE697A5]), // U+33F2
        (0xE38FB3, 0, &[0x32, 0x30, 0xE697A5]), // U+33F3
        (0xE38FB4, 0, &[0x32, 0x31, 0xE697A5]), // U+33F4
        (0xE38FB5, 0, &[0x32, 0x32, 0xE697A5]), // U+33F5
        (0xE38FB6, 0, &[0x32, 0x33, 0xE697A5]), // U+33F6
        (0xE38FB7, 0, &[0x32, 0x34, 0xE697A5]), // U+33F7
        (0xE38FB8, 0, &[0x32, 0x35, 0xE697A5]), // U+33F8
        (0xE38FB9, 0, &[0x32, 0x36, 0xE697A5]), // U+33F9
        (0xE38FBA, 0, &[0x32, 0x37, 0xE697A5]), // U+33FA
        (0xE38FBB, 0, &[0x32, 0x38, 0xE697A5]), // U+33FB
        (0xE38FBC, 0, &[0x32, 0x39, 0xE697A5]), // U+33FC
        (0xE38FBD, 0, &[0x33, 0x30, 0xE697A5]), // U+33FD
        (0xE38FBE, 0, &[0x33, 0x31, 0xE697A5]), // U+33FE
        (0xE38FBF, 0, &[0x67, 0x61, 0x6C]), // U+33FF
        (0xEA99AF, 230, &[]), // U+A66F
        (0xEA99B4, 230, &[]), // U+A674
        (0xEA99B5, 230, &[]), // U+A675
        (0xEA99B6, 230, &[]), // U+A676
        (0xEA99B7, 230, &[]), // U+A677
        (0xEA99B8, 230, &[]), // U+A678
        (0xEA99B9, 230, &[]), // U+A679
        (0xEA99BA, 230, &[]), // U+A67A
        (0xEA99BB, 230, &[]), // U+A67B
        (0xEA99BC, 230, &[]), // U+A67C
        (0xEA99BD, 230, &[]), // U+A67D
        (0xEA9A9C, 0, &[0xD18A]), // U+A69C
        (0xEA9A9D, 0, &[0xD18C]), // U+A69D
        (0xEA9A9E, 230, &[]), // U+A69E
        (0xEA9A9F, 230, &[]), // U+A69F
        (0xEA9BB0, 230, &[]), // U+A6F0
        (0xEA9BB1, 230, &[]), // U+A6F1
        (0xEA9DB0, 0, &[0xEA9DAF]), // U+A770
        (0xEA9FB2, 0, &[0x43]), // U+A7F2
        (0xEA9FB3, 0, &[0x46]), // U+A7F3
        (0xEA9FB4, 0, &[0x51]), // U+A7F4
        (0xEA9FB8, 0, &[0xC4A6]), // U+A7F8
        (0xEA9FB9, 0, &[0xC593]), // U+A7F9
        (0xEAA086, 9, &[]), // U+A806
        (0xEAA0AC, 9, &[]), // U+A82C
        (0xEAA384, 9, &[]), // U+A8C4
        (0xEAA3A0, 230, &[]), // U+A8E0
        (0xEAA3A1, 230, &[]), // U+A8E1
        (0xEAA3A2, 230, &[]), // U+A8E2
        (0xEAA3A3, 230, &[]), // U+A8E3
        (0xEAA3A4, 230, &[]), // U+A8E4
        (0xEAA3A5, 230, &[]), // U+A8E5
        (0xEAA3A6, 230, &[]), // U+A8E6
        (0xEAA3A7, 230, &[]), // U+A8E7
        (0xEAA3A8, 230, &[]), // U+A8E8
        (0xEAA3A9, 230, &[]), // U+A8E9
        (0xEAA3AA, 230, &[]), // U+A8EA
        (0xEAA3AB, 230, &[]), // U+A8EB
        (0xEAA3AC, 230, &[]), // U+A8EC
        (0xEAA3AD, 230, &[]), // U+A8ED
        (0xEAA3AE, 230, &[]), // U+A8EE
        (0xEAA3AF, 230, &[]), // U+A8EF
        (0xEAA3B0, 230, &[]), // U+A8F0
        (0xEAA3B1, 230, &[]), // U+A8F1
        (0xEAA4AB, 220, &[]), // U+A92B
        (0xEAA4AC, 220, &[]), // U+A92C
        (0xEAA4AD, 220, &[]), // U+A92D
        (0xEAA593, 9, &[]), // U+A953
        (0xEAA6B3, 7, &[]), // U+A9B3
        (0xEAA780, 9, &[]), // U+A9C0
        (0xEAAAB0, 230, &[]), // U+AAB0
        (0xEAAAB2, 230, &[]), // U+AAB2
        (0xEAAAB3, 230, &[]), // U+AAB3
        (0xEAAAB4, 220, &[]), // U+AAB4
        (0xEAAAB7, 230, &[]), // U+AAB7
        (0xEAAAB8, 230, &[]), // U+AAB8
        (0xEAAABE, 230, &[]), // U+AABE
        (0xEAAABF, 230, &[]), // U+AABF
        (0xEAAB81, 230, &[]), // U+AAC1
        (0xEAABB6, 9, &[]), // U+AAF6
        (0xEAAD9C, 0, &[0xEA9CA7]), // U+AB5C
        (0xEAAD9D, 0, &[0xEAACB7]), // U+AB5D
        (0xEAAD9E, 0, &[0xC9AB]), // U+AB5E
        (0xEAAD9F, 0, &[0xEAAD92]), // U+AB5F
        (0xEAADA9, 0, &[0xCA8D]), // U+AB69
        (0xEAAFAD, 9, &[]), // U+ABED
        (0xEFA480, 0, &[0xE8B188]), // U+F900
        (0xEFA481, 0, &[0xE69BB4]), // U+F901
        (0xEFA482, 0, &[0xE8BB8A]), // U+F902
        (0xEFA483, 0, &[0xE8B388]), // U+F903
        (0xEFA484, 0, &[0xE6BB91]), // U+F904
        (0xEFA485, 0, &[0xE4B8B2]), // U+F905
        (0xEFA486, 0, &[0xE58FA5]), // U+F906
        (0xEFA487, 0, &[0xE9BE9C]), // U+F907
        (0xEFA488, 0, &[0xE9BE9C]), // U+F908
        (0xEFA489, 0, &[0xE5A591]), // U+F909
        (0xEFA48A, 0, &[0xE98791]), // U+F90A
        (0xEFA48B, 0, &[0xE59687]), // U+F90B
        (0xEFA48C, 0, &[0xE5A588]), // U+F90C
        (0xEFA48D, 0, &[0xE687B6]), // U+F90D
        (0xEFA48E, 0, &[0xE799A9]), // U+F90E
        (0xEFA48F, 0, &[0xE7BE85]), // U+F90F
        (0xEFA490, 0, &[0xE898BF]), // U+F910
        (0xEFA491, 0, &[0xE89EBA]), // U+F911
        (0xEFA492, 0, &[0xE8A3B8]), // U+F912
        (0xEFA493, 0, &[0xE9828F]), // U+F913
        (0xEFA494, 0, &[0xE6A882]), // U+F914
        (0xEFA495, 0, &[0xE6B49B]), // U+F915
        (0xEFA496, 0, &[0xE78399]), // U+F916
        (0xEFA497, 0, &[0xE78F9E]), // U+F917
        (0xEFA498, 0, &[0xE890BD]), // U+F918
        (0xEFA499, 0, &[0xE985AA]), // U+F919
        (0xEFA49A, 0, &[0xE9A7B1]), // U+F91A
        (0xEFA49B, 0, &[0xE4BA82]), // U+F91B
        (0xEFA49C, 0, &[0xE58DB5]), // U+F91C
        (0xEFA49D, 0, &[0xE6AC84]), // U+F91D
        (0xEFA49E, 0, &[0xE7889B]), // U+F91E
        (0xEFA49F, 0, &[0xE898AD]), // U+F91F
        (0xEFA4A0, 0, &[0xE9B89E]), // U+F920
        (0xEFA4A1, 0, &[0xE5B590]), // U+F921
        (0xEFA4A2, 0, &[0xE6BFAB]), // U+F922
        (0xEFA4A3, 0, &[0xE8978D]), // U+F923
        (0xEFA4A4, 0, &[0xE8A5A4]), // U+F924
        (0xEFA4A5, 0, &[0xE68B89]), // U+F925
        (0xEFA4A6, 0, &[0xE88798]), // U+F926
        (0xEFA4A7, 0, &[0xE8A09F]), // U+F927
        (0xEFA4A8, 0, &[0xE5BB8A]), // U+F928
        (0xEFA4A9, 0, &[0xE69C97]), // U+F929
        (0xEFA4AA, 0, &[0xE6B5AA]), // U+F92A
        (0xEFA4AB, 0, &[0xE78BBC]), // U+F92B
        (0xEFA4AC, 0, &[0xE9838E]), // U+F92C
        (0xEFA4AD, 0, &[0xE4BE86]), // U+F92D
        (0xEFA4AE, 0, &[0xE586B7]), // U+F92E
        (0xEFA4AF, 0, &[0xE58B9E]), // U+F92F
        (0xEFA4B0, 0, &[0xE69384]), // U+F930
        (0xEFA4B1, 0, &[0xE6AB93]), // U+F931
        (0xEFA4B2, 0, &[0xE78890]), // U+F932
        (0xEFA4B3, 0, &[0xE79BA7]), // U+F933
        (0xEFA4B4, 0, &[0xE88081]), // U+F934
        (0xEFA4B5, 0, &[0xE89886]), // U+F935
        (0xEFA4B6, 0, &[0xE8999C]), // U+F936
        (0xEFA4B7, 0, &[0xE8B7AF]), // U+F937
        (0xEFA4B8, 0, &[0xE99CB2]), // U+F938
        (0xEFA4B9, 0, &[0xE9ADAF]), // U+F939
        (0xEFA4BA, 0, &[0xE9B7BA]), // U+F93A
        (0xEFA4BB, 0, &[0xE7A28C]), // U+F93B
        (0xEFA4BC, 0, &[0xE7A5BF]), // U+F93C
        (0xEFA4BD, 0, &[0xE7B6A0]), // U+F93D
        (0xEFA4BE, 0, &[0xE88F89]), // U+F93E
        (0xEFA4BF, 0, &[0xE98C84]), // U+F93F
        (0xEFA580, 0, &[0xE9B9BF]), // U+F940
        (0xEFA581, 0, &[0xE8AB96]), // U+F941
        (0xEFA582, 0, &[0xE5A39F]), // U+F942
        (0xEFA583, 0, &[0xE5BC84]), // U+F943
        (0xEFA584, 0, &[0xE7B1A0]), // U+F944
        (0xEFA585, 0, &[0xE881BE]), // U+F945
        (0xEFA586, 0, &[0xE789A2]), // U+F946
        (0xEFA587, 0, &[0xE7A38A]), // U+F947
        (0xEFA588, 0, &[0xE8B382]), // U+F948
        (0xEFA589, 0, &[0xE99BB7]), // U+F949
        (0xEFA58A, 0, &[0xE5A398]), // U+F94A
        (0xEFA58B, 0, &[0xE5B1A2]), // U+F94B
        (0xEFA58C, 0, &[0xE6A893]), // U+F94C
        (0xEFA58D, 0, &[0xE6B79A]), // U+F94D
        (0xEFA58E, 0, &[0xE6BC8F]), // U+F94E
        (0xEFA58F, 0, &[0xE7B4AF]), // U+F94F
        (0xEFA590, 0, &[0xE7B8B7]), // U+F950
        (0xEFA591, 0, &[0xE9998B]), // U+F951
        (0xEFA592, 0, &[0xE58B92]), // U+F952
        (0xEFA593, 0, &[0xE8828B]), // U+F953
        (0xEFA594, 0, &[0xE5879C]), // U+F954
        (0xEFA595, 0, &[0xE5878C]), // U+F955
        (0xEFA596, 0, &[0xE7A89C]), // U+F956
        (0xEFA597, 0, &[0xE7B6BE]), // U+F957
        (0xEFA598, 0, &[0xE88FB1]), // U+F958
        (0xEFA599, 0, &[0xE999B5]), // U+F959
        (0xEFA59A, 0, &[0xE8AE80]), // U+F95A
        (0xEFA59B, 0, &[0xE68B8F]), // U+F95B
        (0xEFA59C, 0, &[0xE6A882]), // U+F95C
        (0xEFA59D, 0, &[0xE8ABBE]), // U+F95D
        (0xEFA59E, 0, &[0xE4B8B9]), // U+F95E
        (0xEFA59F, 0, &[0xE5AFA7]), // U+F95F
        (0xEFA5A0, 0, &[0xE68092]), // U+F960
        (0xEFA5A1, 0, &[0xE78E87]), // U+F961
        (0xEFA5A2, 0, &[0xE795B0]), // U+F962
        (0xEFA5A3, 0, &[0xE58C97]), // U+F963
        (0xEFA5A4, 0, &[0xE7A3BB]), // U+F964
        (0xEFA5A5, 0, &[0xE4BEBF]), // U+F965
        (0xEFA5A6, 0, &[0xE5BEA9]), // U+F966
        (0xEFA5A7, 0, &[0xE4B88D]), // U+F967
        (0xEFA5A8, 0, &[0xE6B38C]), // U+F968
        (0xEFA5A9, 0, &[0xE695B8]), // U+F969
        (0xEFA5AA, 0, &[0xE7B4A2]), // U+F96A
        (0xEFA5AB, 0, &[0xE58F83]), // U+F96B
        (0xEFA5AC, 0, &[0xE5A19E]), // U+F96C
        (0xEFA5AD, 0, &[0xE79C81]), // U+F96D
        (0xEFA5AE, 0, &[0xE89189]), // U+F96E
        (0xEFA5AF, 0, &[0xE8AAAA]), // U+F96F
        (0xEFA5B0, 0, &[0xE6AEBA]), // U+F970
        (0xEFA5B1, 0, &[0xE8BEB0]), // U+F971
        (0xEFA5B2, 0, &[0xE6B288]), // U+F972
        (0xEFA5B3, 0, &[0xE68BBE]), // U+F973
        (0xEFA5B4, 0, &[0xE88BA5]), // U+F974
        (0xEFA5B5, 0, &[0xE68EA0]), // U+F975
        (0xEFA5B6, 0, &[0xE795A5]), // U+F976
        (0xEFA5B7, 0, &[0xE4BAAE]), // U+F977
        (0xEFA5B8, 0, &[0xE585A9]), // U+F978
        (0xEFA5B9, 0, &[0xE58789]), // U+F979
        (0xEFA5BA, 0, &[0xE6A281]), // U+F97A
        (0xEFA5BB, 0, &[0xE7B3A7]), // U+F97B
        (0xEFA5BC, 0, &[0xE889AF]), // U+F97C
        (0xEFA5BD, 0, &[0xE8AB92]), // U+F97D
        (0xEFA5BE, 0, &[0xE9878F]), // U+F97E
        (0xEFA5BF, 0, &[0xE58BB5]), // U+F97F
        (0xEFA680, 0, &[0xE59182]), // U+F980
        (0xEFA681, 0, &[0xE5A5B3]), // U+F981
        (0xEFA682, 0, &[0xE5BBAC]), // U+F982
        (0xEFA683, 0, &[0xE69785]), // U+F983
        (0xEFA684, 0, &[0xE6BFBE]), // U+F984
        (0xEFA685, 0, &[0xE7A4AA]), // U+F985
        (0xEFA686, 0, &[0xE996AD]), // U+F986
        (0xEFA687, 0, &[0xE9A9AA]), // U+F987
        (0xEFA688, 0, &[0xE9BA97]), // U+F988
        (0xEFA689, 0, &[0xE9BB8E]), // U+F989
        (0xEFA68A, 0, &[0xE58A9B]), // U+F98A
        (0xEFA68B, 0, &[0xE69B86]), // U+F98B
        (0xEFA68C, 0, &[0xE6ADB7]), // U+F98C
        (0xEFA68D, 0, &[0xE8BDA2]), // U+F98D
        (0xEFA68E, 0, &[0xE5B9B4]), // U+F98E
        (0xEFA68F, 0, &[0xE68690]), // U+F98F
        (0xEFA690, 0, &[0xE68880]), // U+F990
        (0xEFA691, 0, &[0xE6929A]), // U+F991
        (0xEFA692, 0, &[0xE6BCA3]), // U+F992
        (0xEFA693, 0, &[0xE78589]), // U+F993
        (0xEFA694, 0, &[0xE79289]), // U+F994
        (0xEFA695, 0, &[0xE7A78A]), // U+F995
        (0xEFA696, 0, &[0xE7B7B4]), // U+F996
        (0xEFA697, 0, &[0xE881AF]), // U+F997
        (0xEFA698, 0, &[0xE8BCA6]), // U+F998
        (0xEFA699, 0, &[0xE893AE]), // U+F999
        (0xEFA69A, 0, &[0xE980A3]), // U+F99A
        (0xEFA69B, 0, &[0xE98D8A]), // U+F99B
        (0xEFA69C, 0, &[0xE58897]), // U+F99C
        (0xEFA69D, 0, &[0xE58AA3]), // U+F99D
        (0xEFA69E, 0, &[0xE592BD]), // U+F99E
        (0xEFA69F, 0, &[0xE78388]), // U+F99F
        (0xEFA6A0, 0, &[0xE8A382]), // U+F9A0
        (0xEFA6A1, 0, &[0xE8AAAA]), // U+F9A1
        (0xEFA6A2, 0, &[0xE5BB89]), // U+F9A2
        (0xEFA6A3, 0, &[0xE5BFB5]), // U+F9A3
        (0xEFA6A4, 0, &[0xE68DBB]), // U+F9A4
        (0xEFA6A5, 0, &[0xE6AEAE]), // U+F9A5
        (0xEFA6A6, 0, &[0xE7B0BE]), // U+F9A6
        (0xEFA6A7, 0, &[0xE78DB5]), // U+F9A7
        (0xEFA6A8, 0, &[0xE4BBA4]), // U+F9A8
        (0xEFA6A9, 0, &[0xE59BB9]), // U+F9A9
        (0xEFA6AA, 0, &[0xE5AFA7]), // U+F9AA
        (0xEFA6AB, 0, &[0xE5B6BA]), // U+F9AB
        (0xEFA6AC, 0, &[0xE6809C]), // U+F9AC
        (0xEFA6AD, 0, &[0xE78EB2]), // U+F9AD
        (0xEFA6AE, 0, &[0xE791A9]), // U+F9AE
        (0xEFA6AF, 0, &[0xE7BE9A]), // U+F9AF
        (0xEFA6B0, 0, &[0xE88186]), // U+F9B0
        (0xEFA6B1, 0, &[0xE988B4]), // U+F9B1
        (0xEFA6B2, 0, &[0xE99BB6]), // U+F9B2
        (0xEFA6B3, 0, &[0xE99D88]), // U+F9B3
        (0xEFA6B4, 0, &[0xE9A098]), // U+F9B4
        (0xEFA6B5, 0, &[0xE4BE8B]), // U+F9B5
        (0xEFA6B6, 0, &[0xE7A6AE]), // U+F9B6
        (0xEFA6B7, 0, &[0xE986B4]), // U+F9B7
        (0xEFA6B8, 0, &[0xE99AB8]), // U+F9B8
        (0xEFA6B9, 0, &[0xE683A1]), // U+F9B9
        (0xEFA6BA, 0, &[0xE4BA86]), // U+F9BA
        (0xEFA6BB, 0, &[0xE5839A]), // U+F9BB
        (0xEFA6BC, 0, &[0xE5AFAE]), // U+F9BC
        (0xEFA6BD, 0, &[0xE5B0BF]), // U+F9BD
        (0xEFA6BE, 0, &[0xE69699]), // U+F9BE
        (0xEFA6BF, 0, &[0xE6A882]), // U+F9BF
        (0xEFA780, 0, &[0xE7878E]), // U+F9C0
        (0xEFA781, 0, &[0xE79982]), // U+F9C1
        (0xEFA782, 0, &[0xE893BC]), // U+F9C2
        (0xEFA783, 0, &[0xE981BC]), // U+F9C3
        (0xEFA784, 0, &[0xE9BE8D]), // U+F9C4
        (0xEFA785, 0, &[0xE69A88]), // U+F9C5
        (0xEFA786, 0, &[0xE998AE]), // U+F9C6
        (0xEFA787, 0, &[0xE58A89]), // U+F9C7
        (0xEFA788, 0, &[0xE69DBB]), // U+F9C8
        (0xEFA789, 0, &[0xE69FB3]), // U+F9C9
        (0xEFA78A, 0, &[0xE6B581]), // U+F9CA
        (0xEFA78B, 0, &[0xE6BA9C]), // U+F9CB
        (0xEFA78C, 0, &[0xE79089]), // U+F9CC
        (0xEFA78D, 0, &[0xE79599]), // U+F9CD
        (0xEFA78E, 0, &[0xE7A1AB]), // U+F9CE
        (0xEFA78F, 0, &[0xE7B490]), // U+F9CF
        (0xEFA790, 0, &[0xE9A19E]), // U+F9D0
        (0xEFA791, 0, &[0xE585AD]), // U+F9D1
        (0xEFA792, 0, &[0xE688AE]), // U+F9D2
        (0xEFA793, 0, &[0xE999B8]), // U+F9D3
        (0xEFA794, 0, &[0xE580AB]), // U+F9D4
        (0xEFA795, 0, &[0xE5B499]), // U+F9D5
        (0xEFA796, 0, &[0xE6B7AA]), // U+F9D6
        (0xEFA797, 0, &[0xE8BCAA]), // U+F9D7
        (0xEFA798, 0, &[0xE5BE8B]), // U+F9D8
        (0xEFA799, 0, &[0xE68584]), // U+F9D9
        (0xEFA79A, 0, &[0xE6A097]), // U+F9DA
        (0xEFA79B, 0, &[0xE78E87]), // U+F9DB
        (0xEFA79C, 0, &[0xE99A86]), // U+F9DC
        (0xEFA79D, 0, &[0xE588A9]), // U+F9DD
        (0xEFA79E, 0, &[0xE5908F]), // U+F9DE
        (0xEFA79F, 0, &[0xE5B1A5]), // U+F9DF
        (0xEFA7A0, 0, &[0xE69893]), // U+F9E0
        (0xEFA7A1, 0, &[0xE69D8E]), // U+F9E1
        (0xEFA7A2, 0, &[0xE6A2A8]), // U+F9E2
        (0xEFA7A3, 0, &[0xE6B3A5]), // U+F9E3
        (0xEFA7A4, 0, &[0xE79086]), // U+F9E4
        (0xEFA7A5, 0, &[0xE797A2]), // U+F9E5
        (0xEFA7A6, 0, &[0xE7BDB9]), // U+F9E6
        (0xEFA7A7, 0, &[0xE8A38F]), // U+F9E7
        (0xEFA7A8, 0, &[0xE8A3A1]), // U+F9E8
        (0xEFA7A9, 0, &[0xE9878C]), // U+F9E9
        (0xEFA7AA, 0, &[0xE99BA2]), // U+F9EA
        (0xEFA7AB, 0, &[0xE58CBF]), // U+F9EB
        (0xEFA7AC, 0, &[0xE6BABA]), // U+F9EC
        (0xEFA7AD, 0, &[0xE5909D]), // U+F9ED
        (0xEFA7AE, 0, &[0xE78790]), // U+F9EE
        (0xEFA7AF, 0, &[0xE79298]), // U+F9EF
        (0xEFA7B0, 0, &[0xE897BA]), // U+F9F0
        (0xEFA7B1, 0, &[0xE99AA3]), // U+F9F1
        (0xEFA7B2, 0, &[0xE9B197]), // U+F9F2
        (0xEFA7B3, 0, &[0xE9BA9F]), // U+F9F3
        (0xEFA7B4, 0, &[0xE69E97]), // U+F9F4
        (0xEFA7B5, 0, &[0xE6B78B]), // U+F9F5
        (0xEFA7B6, 0, &[0xE887A8]), // U+F9F6
        (0xEFA7B7, 0, &[0xE7AB8B]), // U+F9F7
        (0xEFA7B8, 0, &[0xE7ACA0]), // U+F9F8
        (0xEFA7B9, 0, &[0xE7B292]), // U+F9F9
        (0xEFA7BA, 0, &[0xE78B80]), // U+F9FA
        (0xEFA7BB, 0, &[0xE78299]), // U+F9FB
        (0xEFA7BC, 0, &[0xE8AD98]), // U+F9FC
        (0xEFA7BD, 0, &[0xE4BB80]), // U+F9FD
        (0xEFA7BE, 0, &[0xE88CB6]), // U+F9FE
        (0xEFA7BF, 0, &[0xE588BA]), // U+F9FF
        (0xEFA880, 0, &[0xE58887]), // U+FA00
        (0xEFA881, 0, &[0xE5BAA6]), // U+FA01
        (0xEFA882, 0, &[0xE68B93]), // U+FA02
        (0xEFA883, 0, &[0xE7B396]), // U+FA03
        (0xEFA884, 0, &[0xE5AE85]), // U+FA04
        (0xEFA885, 0, &[0xE6B49E]), // U+FA05
        (0xEFA886, 0, &[0xE69AB4]), // U+FA06
        (0xEFA887, 0, &[0xE8BCBB]), // U+FA07
        (0xEFA888, 0, &[0xE8A18C]), // U+FA08
        (0xEFA889, 0, &[0xE9998D]), // U+FA09
        (0xEFA88A, 0, &[0xE8A68B]), // U+FA0A
        (0xEFA88B, 0, &[0xE5BB93]), // U+FA0B
        (0xEFA88C, 0, &[0xE58580]), // U+FA0C
        (0xEFA88D, 0, &[0xE59780]), // U+FA0D
        (0xEFA890, 0, &[0xE5A19A]), // U+FA10
        (0xEFA892, 0, &[0xE699B4]), // U+FA12
        (0xEFA895, 0, &[0xE5879E]), // U+FA15
        (0xEFA896, 0, &[0xE78CAA]), // U+FA16
        (0xEFA897, 0, &[0xE79B8A]), // U+FA17
        (0xEFA898, 0, &[0xE7A4BC]), // U+FA18
        (0xEFA899, 0, &[0xE7A59E]), // U+FA19
        (0xEFA89A, 0, &[0xE7A5A5]), // U+FA1A
        (0xEFA89B, 0, &[0xE7A68F]), // U+FA1B
        (0xEFA89C, 0, &[0xE99D96]), // U+FA1C
        (0xEFA89D, 0, &[0xE7B2BE]), // U+FA1D
        (0xEFA89E, 0, &[0xE7BEBD]), // U+FA1E
        (0xEFA8A0, 0, &[0xE89892]), // U+FA20
        (0xEFA8A2, 0, &[0xE8ABB8]), // U+FA22
        (0xEFA8A5, 0, &[0xE980B8]), // U+FA25
        (0xEFA8A6, 0, &[0xE983BD]), // U+FA26
        (0xEFA8AA, 0, &[0xE9A3AF]), // U+FA2A
        (0xEFA8AB, 0, &[0xE9A3BC]), // U+FA2B
        (0xEFA8AC, 0, &[0xE9A4A8]), // U+FA2C
        (0xEFA8AD, 0, &[0xE9B6B4]), // U+FA2D
        (0xEFA8AE, 0, &[0xE9839E]), // U+FA2E
        (0xEFA8AF, 0, &[0xE99AB7]), // U+FA2F
        (0xEFA8B0, 0, &[0xE4BEAE]), // U+FA30
        (0xEFA8B1, 0, &[0xE583A7]), // U+FA31
        (0xEFA8B2, 0, &[0xE5858D]), // U+FA32
        (0xEFA8B3, 0, &[0xE58B89]), // U+FA33
        (0xEFA8B4, 0, &[0xE58BA4]), // U+FA34
        (0xEFA8B5, 0, &[0xE58D91]), // U+FA35
        (0xEFA8B6, 0, &[0xE5969D]), // U+FA36
        (0xEFA8B7, 0, &[0xE59886]), // U+FA37
        (0xEFA8B8, 0, &[0xE599A8]), // U+FA38
        (0xEFA8B9, 0, &[0xE5A180]), // U+FA39
        (0xEFA8BA, 0, &[0xE5A2A8]), // U+FA3A
        (0xEFA8BB, 0, &[0xE5B1A4]), // U+FA3B
        (0xEFA8BC, 0, &[0xE5B1AE]), // U+FA3C
        (0xEFA8BD, 0, &[0xE68294]), // U+FA3D
        (0xEFA8BE, 0, &[0xE685A8]), // U+FA3E
        (0xEFA8BF, 0, &[0xE6868E]), // U+FA3F
        (0xEFA980, 0, &[0xE687B2]), // U+FA40
        (0xEFA981, 0, &[0xE6958F]), // U+FA41
        (0xEFA982, 0, &[0xE697A2]), // U+FA42
        (0xEFA983, 0, &[0xE69A91]), // U+FA43
        (0xEFA984, 0, &[0xE6A285]), // U+FA44
        (0xEFA985, 0, &[0xE6B5B7]), // U+FA45
        (0xEFA986, 0, &[0xE6B89A]), // U+FA46
        (0xEFA987, 0, &[0xE6BCA2]), // U+FA47
        (0xEFA988, 0, &[0xE785AE]), // U+FA48
        (0xEFA989, 0, &[0xE788AB]), // U+FA49
        (0xEFA98A, 0, &[0xE790A2]), // U+FA4A
        (0xEFA98B, 0, &[0xE7A291]), // U+FA4B
        (0xEFA98C, 0, &[0xE7A4BE]), // U+FA4C
        (0xEFA98D, 0, &[0xE7A589]), // U+FA4D
        (0xEFA98E, 0, &[0xE7A588]), // U+FA4E
        (0xEFA98F, 0, &[0xE7A590]), // U+FA4F
        (0xEFA990, 0, &[0xE7A596]), // U+FA50
        (0xEFA991, 0, &[0xE7A59D]), // U+FA51
        (0xEFA992, 0, &[0xE7A68D]), // U+FA52
        (0xEFA993, 0, &[0xE7A68E]), // U+FA53
        (0xEFA994, 0, &[0xE7A980]), // U+FA54
        (0xEFA995, 0, &[0xE7AA81]), // U+FA55
        (0xEFA996, 0, &[0xE7AF80]), // U+FA56
        (0xEFA997, 0, &[0xE7B7B4]), // U+FA57
        (0xEFA998, 0, &[0xE7B889]), // U+FA58
        (0xEFA999, 0, &[0xE7B981]), // U+FA59
        (0xEFA99A, 0, &[0xE7BDB2]), // U+FA5A
        (0xEFA99B, 0, &[0xE88085]), // U+FA5B
        (0xEFA99C, 0, &[0xE887AD]), // U+FA5C
        (0xEFA99D, 0, &[0xE889B9]), // U+FA5D
        (0xEFA99E, 0, &[0xE889B9]), // U+FA5E
        (0xEFA99F, 0, &[0xE89197]), // U+FA5F
        (0xEFA9A0, 0, &[0xE8A490]), // U+FA60
        (0xEFA9A1, 0, &[0xE8A696]), // U+FA61
        (0xEFA9A2, 0, &[0xE8AC81]), // U+FA62
        (0xEFA9A3, 0, &[0xE8ACB9]), // U+FA63
        (0xEFA9A4, 0, &[0xE8B393]), // U+FA64
        (0xEFA9A5, 0, &[0xE8B488]), // U+FA65
        (0xEFA9A6, 0, &[0xE8BEB6]), // U+FA66
        (0xEFA9A7, 0, &[0xE980B8]), // U+FA67
        (0xEFA9A8, 0, &[0xE99BA3]), // U+FA68
        (0xEFA9A9, 0, &[0xE99FBF]), // U+FA69
        (0xEFA9AA, 0, &[0xE9A0BB]), // U+FA6A
        (0xEFA9AB, 0, &[0xE681B5]), // U+FA6B
        (0xEFA9AC, 0, &[0xF0A48BAE]), // U+FA6C
        (0xEFA9AD, 0, &[0xE88898]), // U+FA6D
        (0xEFA9B0, 0, &[0xE4B8A6]), // U+FA70
        (0xEFA9B1, 0, &[0xE586B5]), // U+FA71
        (0xEFA9B2, 0, &[0xE585A8]), // U+FA72
        (0xEFA9B3, 0, &[0xE4BE80]), // U+FA73
        (0xEFA9B4, 0, &[0xE58585]), // U+FA74
        (0xEFA9B5, 0, &[0xE58680]), // U+FA75
        (0xEFA9B6, 0, &[0xE58B87]), // U+FA76
        (0xEFA9B7, 0, &[0xE58BBA]), // U+FA77
        (0xEFA9B8, 0, &[0xE5969D]), // U+FA78
        (0xEFA9B9, 0, &[0xE59595]), // U+FA79
        (0xEFA9BA, 0, &[0xE59699]), // U+FA7A
        (0xEFA9BB, 0, &[0xE597A2]), // U+FA7B
        (0xEFA9BC, 0, &[0xE5A19A]), // U+FA7C
        (0xEFA9BD, 0, &[0xE5A2B3]), // U+FA7D
        (0xEFA9BE, 0, &[0xE5A584]), // U+FA7E
        (0xEFA9BF, 0, &[0xE5A594]), // U+FA7F
        (0xEFAA80, 0, &[0xE5A9A2]), // U+FA80
        (0xEFAA81, 0, &[0xE5ACA8]), // U+FA81
        (0xEFAA82, 0, &[0xE5BB92]), // U+FA82
        (0xEFAA83, 0, &[0xE5BB99]), // U+FA83
        (0xEFAA84, 0, &[0xE5BDA9]), // U+FA84
        (0xEFAA85, 0, &[0xE5BEAD]), // U+FA85
        (0xEFAA86, 0, &[0xE68398]), // U+FA86
        (0xEFAA87, 0, &[0xE6858E]), // U+FA87
        (0xEFAA88, 0, &[0xE68488]), // U+FA88
        (0xEFAA89, 0, &[0xE6868E]), // U+FA89
        (0xEFAA8A, 0, &[0xE685A0]), // U+FA8A
        (0xEFAA8B, 0, &[0xE687B2]), // U+FA8B
        (0xEFAA8C, 0, &[0xE688B4]), // U+FA8C
        (0xEFAA8D, 0, &[0xE68F84]), // U+FA8D
        (0xEFAA8E, 0, &[0xE6909C]), // U+FA8E
        (0xEFAA8F, 0, &[0xE69192]), // U+FA8F
        (0xEFAA90, 0, &[0xE69596]), // U+FA90
        (0xEFAA91, 0, &[0xE699B4]), // U+FA91
        (0xEFAA92, 0, &[0xE69C97]), // U+FA92
        (0xEFAA93, 0, &[0xE69C9B]), // U+FA93
        (0xEFAA94, 0, &[0xE69D96]), // U+FA94
        (0xEFAA95, 0, &[0xE6ADB9]), // U+FA95
        (0xEFAA96, 0, &[0xE6AEBA]), // U+FA96
        (0xEFAA97, 0, &[0xE6B581]), // U+FA97
        (0xEFAA98, 0, &[0xE6BB9B]), // U+FA98
        (0xEFAA99, 0, &[0xE6BB8B]), // U+FA99
        (0xEFAA9A, 0, &[0xE6BCA2]), // U+FA9A
        (0xEFAA9B, 0, &[0xE7809E]), // U+FA9B
        (0xEFAA9C, 0, &[0xE785AE]), // U+FA9C
        (0xEFAA9D, 0, &[0xE79EA7]), // U+FA9D
        (0xEFAA9E, 0, &[0xE788B5]), // U+FA9E
        (0xEFAA9F, 0, &[0xE78AAF]), // U+FA9F
        (0xEFAAA0, 0, &[0xE78CAA]), // U+FAA0
        (0xEFAAA1, 0, &[0xE791B1]), // U+FAA1
        (0xEFAAA2, 0, &[0xE79486]), // U+FAA2
        (0xEFAAA3, 0, &[0xE794BB]), // U+FAA3
        (0xEFAAA4, 0, &[0xE7989D]), // U+FAA4
        (0xEFAAA5, 0, &[0xE7989F]), // U+FAA5
        (0xEFAAA6, 0, &[0xE79B8A]), // U+FAA6
        (0xEFAAA7, 0, &[0xE79B9B]), // U+FAA7
        (0xEFAAA8, 0, &[0xE79BB4]), // U+FAA8
        (0xEFAAA9, 0, &[0xE79D8A]), // U+FAA9
        (0xEFAAAA, 0, &[0xE79D80]), // U+FAAA
        (0xEFAAAB, 0, &[0xE7A38C]), // U+FAAB
        (0xEFAAAC, 0, &[0xE7AAB1]), // U+FAAC
        (0xEFAAAD, 0, &[0xE7AF80]), // U+FAAD
        (0xEFAAAE, 0, &[0xE7B1BB]), // U+FAAE
        (0xEFAAAF, 0, &[0xE7B59B]), // U+FAAF
        (0xEFAAB0, 0, &[0xE7B7B4]), // U+FAB0
        (0xEFAAB1, 0, &[0xE7BCBE]), // U+FAB1
        (0xEFAAB2, 0, &[0xE88085]), // U+FAB2
        (0xEFAAB3, 0, &[0xE88D92]), // U+FAB3
        (0xEFAAB4, 0, &[0xE88FAF]), // U+FAB4
        (0xEFAAB5, 0, &[0xE89DB9]), // U+FAB5
        (0xEFAAB6, 0, &[0xE8A581]), // U+FAB6
        (0xEFAAB7, 0, &[0xE8A686]), // U+FAB7
        (0xEFAAB8, 0, &[0xE8A696]), // U+FAB8
        (0xEFAAB9, 0, &[0xE8AABF]), // U+FAB9
        (0xEFAABA, 0, &[0xE8ABB8]), // U+FABA
        (0xEFAABB, 0, &[0xE8AB8B]), // U+FABB
        (0xEFAABC, 0, &[0xE8AC81]), // U+FABC
        (0xEFAABD, 0, &[0xE8ABBE]), // U+FABD
        (0xEFAABE, 0, &[0xE8ABAD]), // U+FABE
        (0xEFAABF, 0, &[0xE8ACB9]), // U+FABF
        (0xEFAB80, 0, &[0xE8AE8A]), // U+FAC0
        (0xEFAB81, 0, &[0xE8B488]), // U+FAC1
        (0xEFAB82, 0, &[0xE8BCB8]), // U+FAC2
        (0xEFAB83, 0, &[0xE981B2]), // U+FAC3
        (0xEFAB84, 0, &[0xE98699]), // U+FAC4
        (0xEFAB85, 0, &[0xE989B6]), // U+FAC5
        (0xEFAB86, 0, &[0xE999BC]), // U+FAC6
        (0xEFAB87, 0, &[0xE99BA3]), // U+FAC7
        (0xEFAB88, 0, &[0xE99D96]), // U+FAC8
        (0xEFAB89, 0, &[0xE99F9B]), // U+FAC9
        (0xEFAB8A, 0, &[0xE99FBF]), // U+FACA
        (0xEFAB8B, 0, &[0xE9A08B]), // U+FACB
        (0xEFAB8C, 0, &[0xE9A0BB]), // U+FACC
        (0xEFAB8D, 0, &[0xE9AC92]), // U+FACD
        (0xEFAB8E, 0, &[0xE9BE9C]), // U+FACE
        (0xEFAB8F, 0, &[0xF0A2A18A]), // U+FACF
        (0xEFAB90, 0, &[0xF0A2A184]), // U+FAD0
        (0xEFAB91, 0, &[0xF0A38F95]), // U+FAD1
        (0xEFAB92, 0, &[0xE3AE9D]), // U+FAD2
        (0xEFAB93, 0, &[0xE48098]), // U+FAD3
        (0xEFAB94, 0, &[0xE480B9]), // U+FAD4
        (0xEFAB95, 0, &[0xF0A58989]), // U+FAD5
        (0xEFAB96, 0, &[0xF0A5B390]), // U+FAD6
        (0xEFAB97, 0, &[0xF0A7BB93]), // U+FAD7
        (0xEFAB98, 0, &[0xE9BD83]), // U+FAD8
        (0xEFAB99, 0, &[0xE9BE8E]), // U+FAD9
        (0xEFAC80, 0, &[0x66, 0x66]), // U+FB00
        (0xEFAC81, 0, &[0x66, 0x69]), // U+FB01
        (0xEFAC82, 0, &[0x66, 0x6C]), // U+FB02
        (0xEFAC83, 0, &[0x66, 0x66, 0x69]), // U+FB03
        (0xEFAC84, 0, &[0x66, 0x66, 0x6C]), // U+FB04
        (0xEFAC85, 0, &[0xC5BF, 0x74]), // U+FB05
        (0xEFAC86, 0, &[0x73, 0x74]), // U+FB06
        (0xEFAC93, 0, &[0xD5B4, 0xD5B6]), // U+FB13
        (0xEFAC94, 0, &[0xD5B4, 0xD5A5]), // U+FB14
        (0xEFAC95, 0, &[0xD5B4, 0xD5AB]), // U+FB15
        (0xEFAC96, 0, &[0xD5BE, 0xD5B6]), // U+FB16
        (0xEFAC97, 0, &[0xD5B4, 0xD5AD]), // U+FB17
        (0xEFAC9D, 0, &[0xD799, 0xD6B4]), // U+FB1D
        (0xEFAC9E, 26, &[]), // U+FB1E
        (0xEFAC9F, 0, &[0xD7B2, 0xD6B7]), // U+FB1F
        (0xEFACA0, 0, &[0xD7A2]), // U+FB20
        (0xEFACA1, 0, &[0xD790]), // U+FB21
        (0xEFACA2, 0, &[0xD793]), // U+FB22
        (0xEFACA3, 0, &[0xD794]), // U+FB23
        (0xEFACA4, 0, &[0xD79B]), // U+FB24
        (0xEFACA5, 0, &[0xD79C]), // U+FB25
        (0xEFACA6, 0, &[0xD79D]), // U+FB26
        (0xEFACA7, 0, &[0xD7A8]), // U+FB27
        (0xEFACA8, 0, &[0xD7AA]), // U+FB28
        (0xEFACA9, 0, &[0x2B]), // U+FB29
        (0xEFACAA, 0, &[0xD7A9, 0xD781]), // U+FB2A
        (0xEFACAB, 0, &[0xD7A9, 0xD782]), // U+FB2B
        (0xEFACAC, 0, &[0xEFAD89, 0xD781]), // U+FB2C
        (0xEFACAD, 0, &[0xEFAD89, 0xD782]), // U+FB2D
        (0xEFACAE, 0, &[0xD790, 0xD6B7]), // U+FB2E
        (0xEFACAF, 0, &[0xD790, 0xD6B8]), // U+FB2F
        (0xEFACB0, 0, &[0xD790, 0xD6BC]), // U+FB30
        (0xEFACB1, 0, &[0xD791, 0xD6BC]), // U+FB31
        (0xEFACB2, 0, &[0xD792, 0xD6BC]), // U+FB32
        (0xEFACB3, 0, &[0xD793, 0xD6BC]), // U+FB33
        (0xEFACB4, 0, &[0xD794, 0xD6BC]), // U+FB34
        (0xEFACB5, 0, &[0xD795, 0xD6BC]), // U+FB35
        (0xEFACB6, 0, &[0xD796, 0xD6BC]), // U+FB36
        (0xEFACB8, 0, &[0xD798, 0xD6BC]), // U+FB38
        (0xEFACB9, 0, &[0xD799, 0xD6BC]), // U+FB39
        (0xEFACBA, 0, &[0xD79A, 0xD6BC]), // U+FB3A
        (0xEFACBB, 0, &[0xD79B, 0xD6BC]), // U+FB3B
        (0xEFACBC, 0, &[0xD79C, 0xD6BC]), // U+FB3C
        (0xEFACBE, 0, &[0xD79E, 0xD6BC]), // U+FB3E
        (0xEFAD80, 0, &[0xD7A0, 0xD6BC]), // U+FB40
        (0xEFAD81, 0, &[0xD7A1, 0xD6BC]), // U+FB41
        (0xEFAD83, 0, &[0xD7A3, 0xD6BC]), // U+FB43
        (0xEFAD84, 0, &[0xD7A4, 0xD6BC]), // U+FB44
        (0xEFAD86, 0, &[0xD7A6, 0xD6BC]), // U+FB46
        (0xEFAD87, 0, &[0xD7A7, 0xD6BC]), // U+FB47
        (0xEFAD88, 0, &[0xD7A8, 0xD6BC]), // U+FB48
        (0xEFAD89, 0, &[0xD7A9, 0xD6BC]), // U+FB49
        (0xEFAD8A, 0, &[0xD7AA, 0xD6BC]), // U+FB4A
        (0xEFAD8B, 0, &[0xD795, 0xD6B9]), // U+FB4B
        (0xEFAD8C, 0, &[0xD791, 0xD6BF]), // U+FB4C
        (0xEFAD8D, 0, &[0xD79B, 0xD6BF]), // U+FB4D
        (0xEFAD8E, 0, &[0xD7A4, 0xD6BF]), // U+FB4E
        (0xEFAD8F, 0, &[0xD790, 0xD79C]), // U+FB4F
        (0xEFAD90, 0, &[0xD9B1]), // U+FB50
        (0xEFAD91, 0, &[0xD9B1]), // U+FB51
        (0xEFAD92, 0, &[0xD9BB]), // U+FB52
        (0xEFAD93, 0, &[0xD9BB]), // U+FB53
        (0xEFAD94, 0, &[0xD9BB]), // U+FB54
        (0xEFAD95, 0, &[0xD9BB]), // U+FB55
        (0xEFAD96, 0, &[0xD9BE]), // U+FB56
        (0xEFAD97, 0, &[0xD9BE]), // U+FB57
        (0xEFAD98, 0, &[0xD9BE]), // U+FB58
        (0xEFAD99, 0, &[0xD9BE]), // U+FB59
        (0xEFAD9A, 0, &[0xDA80]), // U+FB5A
        (0xEFAD9B, 0, &[0xDA80]), // U+FB5B
        (0xEFAD9C, 0, &[0xDA80]), // U+FB5C
        (0xEFAD9D, 0, &[0xDA80]), // U+FB5D
        (0xEFAD9E, 0, &[0xD9BA]), // U+FB5E
        (0xEFAD9F, 0, &[0xD9BA]), // U+FB5F
        (0xEFADA0, 0, &[0xD9BA]), // U+FB60
        (0xEFADA1, 0, &[0xD9BA]), // U+FB61
        (0xEFADA2, 0, &[0xD9BF]), // U+FB62
        (0xEFADA3, 0, &[0xD9BF]), // U+FB63
        (0xEFADA4, 0, &[0xD9BF]), // U+FB64
        (0xEFADA5, 0, &[0xD9BF]), // U+FB65
        (0xEFADA6, 0, &[0xD9B9]), // U+FB66
        (0xEFADA7, 0, &[0xD9B9]), // U+FB67
        (0xEFADA8, 0, &[0xD9B9]), // U+FB68
        (0xEFADA9, 0, &[0xD9B9]), // U+FB69
        (0xEFADAA, 0, &[0xDAA4]), // U+FB6A
        (0xEFADAB, 0, &[0xDAA4]), // U+FB6B
        (0xEFADAC, 0, &[0xDAA4]), // U+FB6C
        (0xEFADAD, 0, &[0xDAA4]), // U+FB6D
        (0xEFADAE, 0, &[0xDAA6]), // U+FB6E
        (0xEFADAF, 0, &[0xDAA6]), // U+FB6F
        (0xEFADB0, 0, &[0xDAA6]), // U+FB70
        (0xEFADB1, 0, &[0xDAA6]), // U+FB71
        (0xEFADB2, 0, &[0xDA84]), // U+FB72
        (0xEFADB3, 0, &[0xDA84]), // U+FB73
        (0xEFADB4, 0, &[0xDA84]), // U+FB74
        (0xEFADB5, 0, &[0xDA84]), // U+FB75
        (0xEFADB6, 0, &[0xDA83]), // U+FB76
        (0xEFADB7, 0, &[0xDA83]), // U+FB77
        (0xEFADB8, 0, &[0xDA83]), // U+FB78
        (0xEFADB9, 0, &[0xDA83]), // U+FB79
        (0xEFADBA, 0, &[0xDA86]), // U+FB7A
        (0xEFADBB, 0, &[0xDA86]), // U+FB7B
        (0xEFADBC, 0, &[0xDA86]), // U+FB7C
        (0xEFADBD, 0, &[0xDA86]), // U+FB7D
        (0xEFADBE, 0, &[0xDA87]), // U+FB7E
        (0xEFADBF, 0, &[0xDA87]), // U+FB7F
        (0xEFAE80, 0, &[0xDA87]), // U+FB80
        (0xEFAE81, 0, &[0xDA87]), // U+FB81
        (0xEFAE82, 0, &[0xDA8D]), // U+FB82
        (0xEFAE83, 0, &[0xDA8D]), // U+FB83
        (0xEFAE84, 0, &[0xDA8C]), // U+FB84
        (0xEFAE85, 0, &[0xDA8C]), // U+FB85
        (0xEFAE86, 0, &[0xDA8E]), // U+FB86
        (0xEFAE87, 0, &[0xDA8E]), // U+FB87
        (0xEFAE88, 0, &[0xDA88]), // U+FB88
        (0xEFAE89, 0, &[0xDA88]), // U+FB89
        (0xEFAE8A, 0, &[0xDA98]), // U+FB8A
        (0xEFAE8B, 0, &[0xDA98]), // U+FB8B
        (0xEFAE8C, 0, &[0xDA91]), // U+FB8C
        (0xEFAE8D, 0, &[0xDA91]), // U+FB8D
        (0xEFAE8E, 0, &[0xDAA9]), // U+FB8E
        (0xEFAE8F, 0, &[0xDAA9]), // U+FB8F
        (0xEFAE90, 0, &[0xDAA9]), // U+FB90
        (0xEFAE91, 0, &[0xDAA9]), // U+FB91
        (0xEFAE92, 0, &[0xDAAF]), // U+FB92
        (0xEFAE93, 0, &[0xDAAF]), // U+FB93
        (0xEFAE94, 0, &[0xDAAF]), // U+FB94
        (0xEFAE95, 0, &[0xDAAF]), // U+FB95
        (0xEFAE96, 0, &[0xDAB3]), // U+FB96
        (0xEFAE97, 0, &[0xDAB3]), // U+FB97
        (0xEFAE98, 0, &[0xDAB3]), // U+FB98
        (0xEFAE99, 0, &[0xDAB3]), // U+FB99
        (0xEFAE9A, 0, &[0xDAB1]), // U+FB9A
        (0xEFAE9B, 0, &[0xDAB1]), // U+FB9B
        (0xEFAE9C, 0, &[0xDAB1]), // U+FB9C
        (0xEFAE9D, 0, &[0xDAB1]), // U+FB9D
        (0xEFAE9E, 0, &[0xDABA]), // U+FB9E
        (0xEFAE9F, 0, &[0xDABA]), // U+FB9F
        (0xEFAEA0, 0, &[0xDABB]), // U+FBA0
        (0xEFAEA1, 0, &[0xDABB]), // U+FBA1
        (0xEFAEA2, 0, &[0xDABB]), // U+FBA2
        (0xEFAEA3, 0, &[0xDABB]), // U+FBA3
        (0xEFAEA4, 0, &[0xDB80]), // U+FBA4
        (0xEFAEA5, 0, &[0xDB80]), // U+FBA5
        (0xEFAEA6, 0, &[0xDB81]), // U+FBA6
        (0xEFAEA7, 0, &[0xDB81]), // U+FBA7
        (0xEFAEA8, 0, &[0xDB81]), // U+FBA8
        (0xEFAEA9, 0, &[0xDB81]), // U+FBA9
        (0xEFAEAA, 0, &[0xDABE]), // U+FBAA
        (0xEFAEAB, 0, &[0xDABE]), // U+FBAB
        (0xEFAEAC, 0, &[0xDABE]), // U+FBAC
        (0xEFAEAD, 0, &[0xDABE]), // U+FBAD
        (0xEFAEAE, 0, &[0xDB92]), // U+FBAE
        (0xEFAEAF, 0, &[0xDB92]), // U+FBAF
        (0xEFAEB0, 0, &[0xDB93]), // U+FBB0
        (0xEFAEB1, 0, &[0xDB93]), // U+FBB1
        (0xEFAF93, 0, &[0xDAAD]), // U+FBD3
        (0xEFAF94, 0, &[0xDAAD]), // U+FBD4
        (0xEFAF95, 0, &[0xDAAD]), // U+FBD5
        (0xEFAF96, 0, &[0xDAAD]), // U+FBD6
        (0xEFAF97, 0, &[0xDB87]), // U+FBD7
        (0xEFAF98, 0, &[0xDB87]), // U+FBD8
        (0xEFAF99, 0, &[0xDB86]), // U+FBD9
        (0xEFAF9A, 0, &[0xDB86]), // U+FBDA
        (0xEFAF9B, 0, &[0xDB88]), // U+FBDB
        (0xEFAF9C, 0, &[0xDB88]), // U+FBDC
        (0xEFAF9D, 0, &[0xD9B7]), // U+FBDD
        (0xEFAF9E, 0, &[0xDB8B]), // U+FBDE
        (0xEFAF9F, 0, &[0xDB8B]), // U+FBDF
        (0xEFAFA0, 0, &[0xDB85]), // U+FBE0
        (0xEFAFA1, 0, &[0xDB85]), // U+FBE1
        (0xEFAFA2, 0, &[0xDB89]), // U+FBE2
        (0xEFAFA3, 0, &[0xDB89]), // U+FBE3
        (0xEFAFA4, 0, &[0xDB90]), // U+FBE4
        (0xEFAFA5, 0, &[0xDB90]), // U+FBE5
        (0xEFAFA6, 0, &[0xDB90]), // U+FBE6
        (0xEFAFA7, 0, &[0xDB90]), // U+FBE7
        (0xEFAFA8, 0, &[0xD989]), // U+FBE8
        (0xEFAFA9, 0, &[0xD989]), // U+FBE9
        (0xEFAFAA, 0, &[0xD8A6, 0xD8A7]), // U+FBEA
        (0xEFAFAB, 0, &[0xD8A6, 0xD8A7]), // U+FBEB
        (0xEFAFAC, 0, &[0xD8A6, 0xDB95]), // U+FBEC
        (0xEFAFAD, 0, &[0xD8A6, 0xDB95]), // U+FBED
        (0xEFAFAE, 0, &[0xD8A6, 0xD988]), // U+FBEE
        (0xEFAFAF, 0, &[0xD8A6, 0xD988]), // U+FBEF
        (0xEFAFB0, 0, &[0xD8A6, 0xDB87]), // U+FBF0
        (0xEFAFB1, 0, &[0xD8A6, 0xDB87]), // U+FBF1
        (0xEFAFB2, 0, &[0xD8A6, 0xDB86]), // U+FBF2
        (0xEFAFB3, 0, &[0xD8A6, 0xDB86]), // U+FBF3
        (0xEFAFB4, 0, &[0xD8A6, 0xDB88]), // U+FBF4
        (0xEFAFB5, 0, &[0xD8A6, 0xDB88]), // U+FBF5
        (0xEFAFB6, 0, &[0xD8A6, 0xDB90]), // U+FBF6
        (0xEFAFB7, 0, &[0xD8A6, 0xDB90]), // U+FBF7
        (0xEFAFB8, 0, &[0xD8A6, 0xDB90]), // U+FBF8
        (0xEFAFB9, 0, &[0xD8A6, 0xD989]), // U+FBF9
        (0xEFAFBA, 0, &[0xD8A6, 0xD989]), // U+FBFA
        (0xEFAFBB, 0, &[0xD8A6, 0xD989]), // U+FBFB
        (0xEFAFBC, 0, &[0xDB8C]), // U+FBFC
        (0xEFAFBD, 0, &[0xDB8C]), // U+FBFD
        (0xEFAFBE, 0, &[0xDB8C]), // U+FBFE
        (0xEFAFBF, 0, &[0xDB8C]), // U+FBFF
        (0xEFB080, 0, &[0xD8A6, 0xD8AC]), // U+FC00
        (0xEFB081, 0, &[0xD8A6, 0xD8AD]), // U+FC01
        (0xEFB082, 0, &[0xD8A6, 0xD985]), // U+FC02
        (0xEFB083, 0, &[0xD8A6, 0xD989]), // U+FC03
        (0xEFB084, 0, &[0xD8A6, 0xD98A]), // U+FC04
        (0xEFB085, 0, &[0xD8A8, 0xD8AC]), // U+FC05
        (0xEFB086, 0, &[0xD8A8, 0xD8AD]), // U+FC06
        (0xEFB087, 0, &[0xD8A8, 0xD8AE]), // U+FC07
        (0xEFB088, 0, &[0xD8A8, 0xD985]), // U+FC08
        (0xEFB089, 0, &[0xD8A8, 0xD989]), // U+FC09
        (0xEFB08A, 0, &[0xD8A8, 0xD98A]), // U+FC0A
        (0xEFB08B, 0, &[0xD8AA, 0xD8AC]), // U+FC0B
        (0xEFB08C, 0, &[0xD8AA, 0xD8AD]), // U+FC0C
        (0xEFB08D, 0, &[0xD8AA, 0xD8AE]), // U+FC0D
        (0xEFB08E, 0, &[0xD8AA, 0xD985]), // U+FC0E
        (0xEFB08F, 0, &[0xD8AA, 0xD989]), // U+FC0F
        (0xEFB090, 0, &[0xD8AA, 0xD98A]), // U+FC10
        (0xEFB091, 0, &[0xD8AB, 0xD8AC]), // U+FC11
        (0xEFB092, 0, &[0xD8AB, 0xD985]), // U+FC12
        (0xEFB093, 0, &[0xD8AB, 0xD989]), // U+FC13
        (0xEFB094, 0, &[0xD8AB, 0xD98A]), // U+FC14
        (0xEFB095, 0, &[0xD8AC, 0xD8AD]), // U+FC15
        (0xEFB096, 0, &[0xD8AC, 0xD985]), // U+FC16
        (0xEFB097, 0, &[0xD8AD, 0xD8AC]), // U+FC17
        (0xEFB098, 0, &[0xD8AD, 0xD985]), // U+FC18
        (0xEFB099, 0, &[0xD8AE, 0xD8AC]), // U+FC19
        (0xEFB09A, 0, &[0xD8AE, 0xD8AD]), // U+FC1A
        (0xEFB09B, 0, &[0xD8AE, 0xD985]), // U+FC1B
        (0xEFB09C, 0, &[0xD8B3, 0xD8AC]), // U+FC1C
        (0xEFB09D, 0, &[0xD8B3, 0xD8AD]), // U+FC1D
        (0xEFB09E, 0, &[0xD8B3, 0xD8AE]), // U+FC1E
        (0xEFB09F, 0, &[0xD8B3, 0xD985]), // U+FC1F
        (0xEFB0A0, 0, &[0xD8B5, 0xD8AD]), // U+FC20
        (0xEFB0A1, 0, &[0xD8B5, 0xD985]), // U+FC21
        (0xEFB0A2, 0, &[0xD8B6, 0xD8AC]), // U+FC22
        (0xEFB0A3, 0, &[0xD8B6, 0xD8AD]), // U+FC23
        (0xEFB0A4, 0, &[0xD8B6, 0xD8AE]), // U+FC24
        (0xEFB0A5, 0, &[0xD8B6, 0xD985]), // U+FC25
        (0xEFB0A6, 0, &[0xD8B7, 0xD8AD]), // U+FC26
        (0xEFB0A7, 0, &[0xD8B7, 0xD985]), // U+FC27
        (0xEFB0A8, 0, &[0xD8B8, 0xD985]), // U+FC28
        (0xEFB0A9, 0, &[0xD8B9, 0xD8AC]), // U+FC29
        (0xEFB0AA, 0, &[0xD8B9, 0xD985]), // U+FC2A
        (0xEFB0AB, 0, &[0xD8BA, 0xD8AC]), // U+FC2B
        (0xEFB0AC, 0, &[0xD8BA, 0xD985]), // U+FC2C
        (0xEFB0AD, 0, &[0xD981, 0xD8AC]), // U+FC2D
        (0xEFB0AE, 0, &[0xD981, 0xD8AD]), // U+FC2E
        (0xEFB0AF, 0, &[0xD981, 0xD8AE]), // U+FC2F
        (0xEFB0B0, 0, &[0xD981, 0xD985]), // U+FC30
        (0xEFB0B1, 0, &[0xD981, 0xD989]), // U+FC31
        (0xEFB0B2, 0, &[0xD981, 0xD98A]), // U+FC32
        (0xEFB0B3, 0, &[0xD982, 0xD8AD]), // U+FC33
        (0xEFB0B4, 0, &[0xD982, 0xD985]), // U+FC34
        (0xEFB0B5, 0, &[0xD982, 0xD989]), // U+FC35
        (0xEFB0B6, 0, &[0xD982, 0xD98A]), // U+FC36
        (0xEFB0B7, 0, &[0xD983, 0xD8A7]), // U+FC37
        (0xEFB0B8, 0, &[0xD983, 0xD8AC]), // U+FC38
        (0xEFB0B9, 0, &[0xD983, 0xD8AD]), // U+FC39
        (0xEFB0BA, 0, &[0xD983, 0xD8AE]), // U+FC3A
        (0xEFB0BB, 0, &[0xD983, 0xD984]), // U+FC3B
        (0xEFB0BC, 0, &[0xD983, 0xD985]), // U+FC3C
        (0xEFB0BD, 0, &[0xD983, 0xD989]), // U+FC3D
        (0xEFB0BE, 0, &[0xD983, 0xD98A]), // U+FC3E
        (0xEFB0BF, 0, &[0xD984, 0xD8AC]), // U+FC3F
        (0xEFB180, 0, &[0xD984, 0xD8AD]), // U+FC40
        (0xEFB181, 0, &[0xD984, 0xD8AE]), // U+FC41
        (0xEFB182, 0, &[0xD984, 0xD985]), // U+FC42
        (0xEFB183, 0, &[0xD984, 0xD989]), // U+FC43
        (0xEFB184, 0, &[0xD984, 0xD98A]), // U+FC44
        (0xEFB185, 0, &[0xD985, 0xD8AC]), // U+FC45
        (0xEFB186, 0, &[0xD985, 0xD8AD]), // U+FC46
        (0xEFB187, 0, &[0xD985, 0xD8AE]), // U+FC47
        (0xEFB188, 0, &[0xD985, 0xD985]), // U+FC48
        (0xEFB189, 0, &[0xD985, 0xD989]), // U+FC49
        (0xEFB18A, 0, &[0xD985, 0xD98A]), // U+FC4A
        (0xEFB18B, 0, &[0xD986, 0xD8AC]), // U+FC4B
        (0xEFB18C, 0, &[0xD986, 0xD8AD]), // U+FC4C
        (0xEFB18D, 0, &[0xD986, 0xD8AE]), // U+FC4D
        (0xEFB18E, 0, &[0xD986, 0xD985]), // U+FC4E
        (0xEFB18F, 0, &[0xD986, 0xD989]), // U+FC4F
        (0xEFB190, 0, &[0xD986, 0xD98A]), // U+FC50
        (0xEFB191, 0, &[0xD987, 0xD8AC]), // U+FC51
        (0xEFB192, 0, &[0xD987, 0xD985]), // U+FC52
        (0xEFB193, 0, &[0xD987, 0xD989]), // U+FC53
        (0xEFB194, 0, &[0xD987, 0xD98A]), // U+FC54
        (0xEFB195, 0, &[0xD98A, 0xD8AC]), // U+FC55
        (0xEFB196, 0, &[0xD98A, 0xD8AD]), // U+FC56
        (0xEFB197, 0, &[0xD98A, 0xD8AE]), // U+FC57
        (0xEFB198, 0, &[0xD98A, 0xD985]), // U+FC58
        (0xEFB199, 0, &[0xD98A, 0xD989]), // U+FC59
        (0xEFB19A, 0, &[0xD98A, 0xD98A]), // U+FC5A
        (0xEFB19B, 0, &[0xD8B0, 0xD9B0]), // U+FC5B
        (0xEFB19C, 0, &[0xD8B1, 0xD9B0]), // U+FC5C
        (0xEFB19D, 0, &[0xD989, 0xD9B0]), // U+FC5D
        (0xEFB19E, 0, &[0x20, 0xD98C, 0xD991]), // U+FC5E
        (0xEFB19F, 0, &[0x20, 0xD98D, 0xD991]), // U+FC5F
        (0xEFB1A0, 0, &[0x20, 0xD98E, 0xD991]), // U+FC60
        (0xEFB1A1, 0, &[0x20, 0xD98F, 0xD991]), // U+FC61
        (0xEFB1A2, 0, &[0x20, 0xD990, 0xD991]), // U+FC62
        (0xEFB1A3, 0, &[0x20, 0xD991, 0xD9B0]), // U+FC63
        (0xEFB1A4, 0, &[0xD8A6, 0xD8B1]), // U+FC64
        (0xEFB1A5, 0, &[0xD8A6, 0xD8B2]), // U+FC65
        (0xEFB1A6, 0, &[0xD8A6, 0xD985]), // U+FC66
        (0xEFB1A7, 0, &[0xD8A6, 0xD986]), // U+FC67
        (0xEFB1A8, 0, &[0xD8A6, 0xD989]), // U+FC68
        (0xEFB1A9, 0, &[0xD8A6, 0xD98A]), // U+FC69
        (0xEFB1AA, 0, &[0xD8A8, 0xD8B1]), // U+FC6A
        (0xEFB1AB, 0, &[0xD8A8, 0xD8B2]), // U+FC6B
        (0xEFB1AC, 0, &[0xD8A8, 0xD985]), // U+FC6C
        (0xEFB1AD, 0, &[0xD8A8, 0xD986]), // U+FC6D
        (0xEFB1AE, 0, &[0xD8A8, 0xD989]), // U+FC6E
        (0xEFB1AF, 0, &[0xD8A8, 0xD98A]), // U+FC6F
        (0xEFB1B0, 0, &[0xD8AA, 0xD8B1]), // U+FC70
        (0xEFB1B1, 0, &[0xD8AA, 0xD8B2]), // U+FC71
        (0xEFB1B2, 0, &[0xD8AA, 0xD985]), // U+FC72
        (0xEFB1B3, 0, &[0xD8AA, 0xD986]), // U+FC73
        (0xEFB1B4, 0, &[0xD8AA, 0xD989]), // U+FC74
        (0xEFB1B5, 0, &[0xD8AA, 0xD98A]), // U+FC75
        (0xEFB1B6, 0, &[0xD8AB, 0xD8B1]), // U+FC76
        (0xEFB1B7, 0, &[0xD8AB, 0xD8B2]), // U+FC77
        (0xEFB1B8, 0, &[0xD8AB, 0xD985]), // U+FC78
        (0xEFB1B9, 0, &[0xD8AB, 0xD986]), // U+FC79
        (0xEFB1BA, 0, &[0xD8AB, 0xD989]), // U+FC7A
        (0xEFB1BB, 0, &[0xD8AB, 0xD98A]), // U+FC7B
        (0xEFB1BC, 0, &[0xD981, 0xD989]), // U+FC7C
        (0xEFB1BD, 0, &[0xD981, 0xD98A]), // U+FC7D
        (0xEFB1BE, 0, &[0xD982, 0xD989]), // U+FC7E
        (0xEFB1BF, 0, &[0xD982, 0xD98A]), // U+FC7F
        (0xEFB280, 0, &[0xD983, 0xD8A7]), // U+FC80
        (0xEFB281, 0, &[0xD983, 0xD984]), // U+FC81
        (0xEFB282, 0, &[0xD983, 0xD985]), // U+FC82
        (0xEFB283, 0, &[0xD983, 0xD989]), // U+FC83
        (0xEFB284, 0, &[0xD983, 0xD98A]), // U+FC84
        (0xEFB285, 0, &[0xD984, 0xD985]), // U+FC85
        (0xEFB286, 0, &[0xD984, 0xD989]), // U+FC86
        (0xEFB287, 0, &[0xD984, 0xD98A]), // U+FC87
        (0xEFB288, 0, &[0xD985, 0xD8A7]), // U+FC88
        (0xEFB289, 0, &[0xD985, 0xD985]), // U+FC89
        (0xEFB28A, 0, &[0xD986, 0xD8B1]), // U+FC8A
        (0xEFB28B, 0, &[0xD986, 0xD8B2]), // U+FC8B
        (0xEFB28C, 0, &[0xD986, 0xD985]), // U+FC8C
        (0xEFB28D, 0, &[0xD986, 0xD986]), // U+FC8D
        (0xEFB28E, 0, &[0xD986, 0xD989]), // U+FC8E
        (0xEFB28F, 0, &[0xD986, 0xD98A]), // U+FC8F
        (0xEFB290, 0, &[0xD989, 0xD9B0]), // U+FC90
        (0xEFB291, 0, &[0xD98A, 0xD8B1]), // U+FC91
        (0xEFB292, 0, &[0xD98A, 0xD8B2]), // U+FC92
        (0xEFB293, 0, &[0xD98A, 0xD985]), // U+FC93
        (0xEFB294, 0, &[0xD98A, 0xD986]), // U+FC94
        (0xEFB295, 0, &[0xD98A, 0xD989]), // U+FC95
        (0xEFB296, 0, &[0xD98A, 0xD98A]), // U+FC96
        (0xEFB297, 0, &[0xD8A6, 0xD8AC]), // U+FC97
        (0xEFB298, 0, &[0xD8A6, 0xD8AD]), // U+FC98
        (0xEFB299, 0, &[0xD8A6, 0xD8AE]), // U+FC99
        (0xEFB29A, 0, &[0xD8A6, 0xD985]), // U+FC9A
        (0xEFB29B, 0, &[0xD8A6, 0xD987]), // U+FC9B
        (0xEFB29C, 0, &[0xD8A8, 0xD8AC]), // U+FC9C
        (0xEFB29D, 0, &[0xD8A8, 0xD8AD]), // U+FC9D
        (0xEFB29E, 0, &[0xD8A8, 0xD8AE]), // U+FC9E
        (0xEFB29F, 0, &[0xD8A8, 0xD985]), // U+FC9F
        (0xEFB2A0, 0, &[0xD8A8, 0xD987]), // U+FCA0
        (0xEFB2A1, 0, &[0xD8AA, 0xD8AC]), // U+FCA1
        (0xEFB2A2, 0, &[0xD8AA, 0xD8AD]), // U+FCA2
        (0xEFB2A3, 0, &[0xD8AA, 0xD8AE]), // U+FCA3
        (0xEFB2A4, 0, &[0xD8AA, 0xD985]), // U+FCA4
        (0xEFB2A5, 0, &[0xD8AA, 0xD987]), // U+FCA5
        (0xEFB2A6, 0, &[0xD8AB, 0xD985]), // U+FCA6
        (0xEFB2A7, 0, &[0xD8AC, 0xD8AD]), // U+FCA7
        (0xEFB2A8, 0, &[0xD8AC, 0xD985]), // U+FCA8
        (0xEFB2A9, 0, &[0xD8AD, 0xD8AC]), // U+FCA9
        (0xEFB2AA, 0, &[0xD8AD, 0xD985]), // U+FCAA
        (0xEFB2AB, 0, &[0xD8AE, 0xD8AC]), // U+FCAB
        (0xEFB2AC, 0, &[0xD8AE, 0xD985]), // U+FCAC
        (0xEFB2AD, 0, &[0xD8B3, 0xD8AC]), // U+FCAD
        (0xEFB2AE, 0, &[0xD8B3, 0xD8AD]), // U+FCAE
        (0xEFB2AF, 0, &[0xD8B3, 0xD8AE]), // U+FCAF
        (0xEFB2B0, 0, &[0xD8B3, 0xD985]), // U+FCB0
        (0xEFB2B1, 0, &[0xD8B5, 0xD8AD]), // U+FCB1
        (0xEFB2B2, 0, &[0xD8B5, 0xD8AE]), // U+FCB2
        (0xEFB2B3, 0, &[0xD8B5, 0xD985]), // U+FCB3
        (0xEFB2B4, 0, &[0xD8B6, 0xD8AC]), // U+FCB4
        (0xEFB2B5, 0, &[0xD8B6, 0xD8AD]), // U+FCB5
        (0xEFB2B6, 0, &[0xD8B6, 0xD8AE]), // U+FCB6
        (0xEFB2B7, 0, &[0xD8B6, 0xD985]), // U+FCB7
        (0xEFB2B8, 0, &[0xD8B7, 0xD8AD]), // U+FCB8
        (0xEFB2B9, 0, &[0xD8B8, 0xD985]), // U+FCB9
        (0xEFB2BA, 0, &[0xD8B9, 0xD8AC]), // U+FCBA
        (0xEFB2BB, 0, &[0xD8B9, 0xD985]), // U+FCBB
        (0xEFB2BC, 0, &[0xD8BA, 0xD8AC]), // U+FCBC
        (0xEFB2BD, 0, &[0xD8BA, 0xD985]), // U+FCBD
        (0xEFB2BE, 0, &[0xD981, 0xD8AC]), // U+FCBE
        (0xEFB2BF, 0, &[0xD981, 0xD8AD]), // U+FCBF
        (0xEFB380, 0, &[0xD981, 0xD8AE]), // U+FCC0
        (0xEFB381, 0, &[0xD981, 0xD985]), // U+FCC1
        (0xEFB382, 0, &[0xD982, 0xD8AD]), // U+FCC2
        (0xEFB383, 0, &[0xD982, 0xD985]), // U+FCC3
        (0xEFB384, 0, &[0xD983, 0xD8AC]), // U+FCC4
        (0xEFB385, 0, &[0xD983, 0xD8AD]), // U+FCC5
        (0xEFB386, 0, &[0xD983, 0xD8AE]), // U+FCC6
        (0xEFB387, 0, &[0xD983, 0xD984]), // U+FCC7
        (0xEFB388, 0, &[0xD983, 0xD985]), // U+FCC8
        (0xEFB389, 0, &[0xD984, 0xD8AC]), // U+FCC9
        (0xEFB38A, 0, &[0xD984, 0xD8AD]), // U+FCCA
        (0xEFB38B, 0, &[0xD984, 0xD8AE]), // U+FCCB
        (0xEFB38C, 0, &[0xD984, 0xD985]), // U+FCCC
        (0xEFB38D, 0, &[0xD984, 0xD987]), // U+FCCD
        (0xEFB38E, 0, &[0xD985, 0xD8AC]), // U+FCCE
        (0xEFB38F, 0, &[0xD985, 0xD8AD]), // U+FCCF
        (0xEFB390, 0, &[0xD985, 0xD8AE]), // U+FCD0
        (0xEFB391, 0, &[0xD985, 0xD985]), // U+FCD1
        (0xEFB392, 0, &[0xD986, 0xD8AC]), // U+FCD2
        (0xEFB393, 0, &[0xD986, 0xD8AD]), // U+FCD3
        (0xEFB394, 0, &[0xD986, 0xD8AE]), // U+FCD4
        (0xEFB395, 0, &[0xD986, 0xD985]), // U+FCD5
        (0xEFB396, 0, &[0xD986, 0xD987]), // U+FCD6
        (0xEFB397, 0, &[0xD987, 0xD8AC]), // U+FCD7
        (0xEFB398, 0, &[0xD987, 0xD985]), // U+FCD8
        (0xEFB399, 0, &[0xD987, 0xD9B0]), // U+FCD9
        (0xEFB39A, 0, &[0xD98A, 0xD8AC]), // U+FCDA
        (0xEFB39B, 0, &[0xD98A, 0xD8AD]), // U+FCDB
        (0xEFB39C, 0, &[0xD98A, 0xD8AE]), // U+FCDC
        (0xEFB39D, 0, &[0xD98A, 0xD985]), // U+FCDD
        (0xEFB39E, 0, &[0xD98A, 0xD987]), // U+FCDE
        (0xEFB39F, 0, &[0xD8A6, 0xD985]), // U+FCDF
        (0xEFB3A0, 0, &[0xD8A6, 0xD987]), // U+FCE0
        (0xEFB3A1, 0, &[0xD8A8, 0xD985]), // U+FCE1
        (0xEFB3A2, 0, &[0xD8A8, 0xD987]), // U+FCE2
        (0xEFB3A3, 0, &[0xD8AA, 0xD985]), // U+FCE3
        (0xEFB3A4, 0, &[0xD8AA, 0xD987]), // U+FCE4
        (0xEFB3A5, 0, &[0xD8AB, 0xD985]), // U+FCE5
        (0xEFB3A6, 0, &[0xD8AB, 0xD987]), // U+FCE6
        (0xEFB3A7, 0, &[0xD8B3, 0xD985]), // U+FCE7
        (0xEFB3A8, 0, &[0xD8B3, 0xD987]), // U+FCE8
        (0xEFB3A9, 0, &[0xD8B4, 0xD985]), // U+FCE9
        (0xEFB3AA, 0, &[0xD8B4, 0xD987]), // U+FCEA
        (0xEFB3AB, 0, &[0xD983, 0xD984]), // U+FCEB
        (0xEFB3AC, 0, &[0xD983, 0xD985]), // U+FCEC
        (0xEFB3AD, 0, &[0xD984, 0xD985]), // U+FCED
        (0xEFB3AE, 0, &[0xD986, 0xD985]), // U+FCEE
        (0xEFB3AF, 0, &[0xD986, 0xD987]), // U+FCEF
        (0xEFB3B0, 0, &[0xD98A, 0xD985]), // U+FCF0
        (0xEFB3B1, 0, &[0xD98A, 0xD987]), // U+FCF1
        (0xEFB3B2, 0, &[0xD980, 0xD98E, 0xD991]), // U+FCF2
        (0xEFB3B3, 0, &[0xD980, 0xD98F, 0xD991]), // U+FCF3
        (0xEFB3B4, 0, &[0xD980, 0xD990, 0xD991]), // U+FCF4
        (0xEFB3B5, 0, &[0xD8B7, 0xD989]), // U+FCF5
        (0xEFB3B6, 0, &[0xD8B7, 0xD98A]), // U+FCF6
        (0xEFB3B7, 0, &[0xD8B9, 0xD989]), // U+FCF7
        (0xEFB3B8, 0, &[0xD8B9, 0xD98A]), // U+FCF8
        (0xEFB3B9, 0, &[0xD8BA, 0xD989]), // U+FCF9
        (0xEFB3BA, 0, &[0xD8BA, 0xD98A]), // U+FCFA
        (0xEFB3BB, 0, &[0xD8B3, 0xD989]), // U+FCFB
        (0xEFB3BC, 0, &[0xD8B3, 0xD98A]), // U+FCFC
        (0xEFB3BD, 0, &[0xD8B4, 0xD989]), // U+FCFD
        (0xEFB3BE, 0, &[0xD8B4, 0xD98A]), // U+FCFE
        (0xEFB3BF, 0, &[0xD8AD, 0xD989]), // U+FCFF
        (0xEFB480, 0, &[0xD8AD, 0xD98A]), // U+FD00
        (0xEFB481, 0, &[0xD8AC, 0xD989]), // U+FD01
        (0xEFB482, 0, &[0xD8AC, 0xD98A]), // U+FD02
        (0xEFB483, 0, &[0xD8AE, 0xD989]), // U+FD03
        (0xEFB484, 0, &[0xD8AE, 0xD98A]), // U+FD04
        (0xEFB485, 0, &[0xD8B5, 0xD989]), // U+FD05
        (0xEFB486, 0, &[0xD8B5, 0xD98A]), // U+FD06
        (0xEFB487, 0, &[0xD8B6, 0xD989]), // U+FD07
        (0xEFB488, 0, &[0xD8B6, 0xD98A]), // U+FD08
        (0xEFB489, 0, &[0xD8B4, 0xD8AC]), // U+FD09
        (0xEFB48A, 0, &[0xD8B4, 0xD8AD]), // U+FD0A
        (0xEFB48B, 0, &[0xD8B4, 0xD8AE]), // U+FD0B
        (0xEFB48C, 0, &[0xD8B4, 0xD985]), // U+FD0C
        (0xEFB48D, 0, &[0xD8B4, 0xD8B1]), // U+FD0D
        (0xEFB48E, 0, &[0xD8B3, 0xD8B1]), // U+FD0E
        (0xEFB48F, 0, &[0xD8B5, 0xD8B1]), // U+FD0F
        (0xEFB490, 0, &[0xD8B6, 0xD8B1]), // U+FD10
        (0xEFB491, 0, &[0xD8B7, 0xD989]), // U+FD11
        (0xEFB492, 0, &[0xD8B7, 0xD98A]), // U+FD12
        (0xEFB493, 0, &[0xD8B9, 0xD989]), // U+FD13
        (0xEFB494, 0, &[0xD8B9, 0xD98A]), // U+FD14
        (0xEFB495, 0, &[0xD8BA, 0xD989]), // U+FD15
        (0xEFB496, 0, &[0xD8BA, 0xD98A]), // U+FD16
        (0xEFB497, 0, &[0xD8B3, 0xD989]), // U+FD17
        (0xEFB498, 0, &[0xD8B3, 0xD98A]), // U+FD18
        (0xEFB499, 0, &[0xD8B4, 0xD989]), // U+FD19
        (0xEFB49A, 0, &[0xD8B4, 0xD98A]), // U+FD1A
        (0xEFB49B, 0, &[0xD8AD, 0xD989]), // U+FD1B
        (0xEFB49C, 0, &[0xD8AD, 0xD98A]), // U+FD1C
        (0xEFB49D, 0, &[0xD8AC, 0xD989]), // U+FD1D
        (0xEFB49E, 0, &[0xD8AC, 0xD98A]), // U+FD1E
        (0xEFB49F, 0, &[0xD8AE, 0xD989]), // U+FD1F
        (0xEFB4A0, 0, &[0xD8AE, 0xD98A]), // U+FD20
        (0xEFB4A1, 0, &[0xD8B5, 0xD989]), // U+FD21
        (0xEFB4A2, 0, &[0xD8B5, 0xD98A]), // U+FD22
        (0xEFB4A3, 0, &[0xD8B6, 0xD989]), // U+FD23
        (0xEFB4A4, 0, &[0xD8B6, 0xD98A]), // U+FD24
        (0xEFB4A5, 0, &[0xD8B4, 0xD8AC]), // U+FD25
        (0xEFB4A6, 0, &[0xD8B4, 0xD8AD]), // U+FD26
        (0xEFB4A7, 0, &[0xD8B4, 0xD8AE]), // U+FD27
        (0xEFB4A8, 0, &[0xD8B4, 0xD985]), // U+FD28
        (0xEFB4A9, 0, &[0xD8B4, 0xD8B1]), // U+FD29
        (0xEFB4AA, 0, &[0xD8B3, 0xD8B1]), // U+FD2A
        (0xEFB4AB, 0, &[0xD8B5, 0xD8B1]), // U+FD2B
        (0xEFB4AC, 0, &[0xD8B6, 0xD8B1]), // U+FD2C
        (0xEFB4AD, 0, &[0xD8B4, 0xD8AC]), // U+FD2D
        (0xEFB4AE, 0, &[0xD8B4, 0xD8AD]), // U+FD2E
        (0xEFB4AF, 0, &[0xD8B4, 0xD8AE]), // U+FD2F
        (0xEFB4B0, 0, &[0xD8B4, 0xD985]), // U+FD30
        (0xEFB4B1, 0, &[0xD8B3, 0xD987]), // U+FD31
        (0xEFB4B2, 0, &[0xD8B4, 0xD987]), // U+FD32
        (0xEFB4B3, 0, &[0xD8B7, 0xD985]), // U+FD33
        (0xEFB4B4, 0, &[0xD8B3, 0xD8AC]), // U+FD34
        (0xEFB4B5, 0, &[0xD8B3, 0xD8AD]), // U+FD35
        (0xEFB4B6, 0, &[0xD8B3, 0xD8AE]), // U+FD36
        (0xEFB4B7, 0, &[0xD8B4, 0xD8AC]), // U+FD37
        (0xEFB4B8, 0, &[0xD8B4, 0xD8AD]), // U+FD38
        (0xEFB4B9, 0, &[0xD8B4, 0xD8AE]), // U+FD39
        (0xEFB4BA, 0, &[0xD8B7, 0xD985]), // U+FD3A
        (0xEFB4BB, 0, &[0xD8B8, 0xD985]), // U+FD3B
        (0xEFB4BC, 0, &[0xD8A7, 0xD98B]), // U+FD3C
        (0xEFB4BD, 0, &[0xD8A7, 0xD98B]), // U+FD3D
        (0xEFB590, 0, &[0xD8AA, 0xD8AC, 0xD985]), // U+FD50
        (0xEFB591, 0, &[0xD8AA, 0xD8AD, 0xD8AC]), // U+FD51
        (0xEFB592, 0, &[0xD8AA, 0xD8AD, 0xD8AC]), // U+FD52
        (0xEFB593, 0, &[0xD8AA, 0xD8AD, 0xD985]), // U+FD53
        (0xEFB594, 0, &[0xD8AA, 0xD8AE, 0xD985]), // U+FD54
        (0xEFB595, 0, &[0xD8AA, 0xD985, 0xD8AC]), // U+FD55
        (0xEFB596, 0, &[0xD8AA, 0xD985, 0xD8AD]), // U+FD56
        (0xEFB597, 0, &[0xD8AA, 0xD985, 0xD8AE]), // U+FD57
        (0xEFB598, 0, &[0xD8AC, 0xD985, 0xD8AD]), // U+FD58
        (0xEFB599, 0, &[0xD8AC, 0xD985, 0xD8AD]), // U+FD59
        (0xEFB59A, 0, &[0xD8AD, 0xD985, 0xD98A]), // U+FD5A
        (0xEFB59B, 0, &[0xD8AD, 0xD985, 0xD989]), // U+FD5B
        (0xEFB59C, 0, &[0xD8B3, 0xD8AD, 0xD8AC]), // U+FD5C
        (0xEFB59D, 0, &[0xD8B3, 0xD8AC, 0xD8AD]), // U+FD5D
        (0xEFB59E, 0, &[0xD8B3, 0xD8AC, 0xD989]), // U+FD5E
        (0xEFB59F, 0, &[0xD8B3, 0xD985, 0xD8AD]), // U+FD5F
        (0xEFB5A0, 0, &[0xD8B3, 0xD985, 0xD8AD]), // U+FD60
        (0xEFB5A1, 0, &[0xD8B3, 0xD985, 0xD8AC]), // U+FD61
        (0xEFB5A2, 0, &[0xD8B3, 0xD985, 0xD985]), // U+FD62
        (0xEFB5A3, 0, &[0xD8B3, 0xD985, 0xD985]), // U+FD63
        (0xEFB5A4, 0, &[0xD8B5, 0xD8AD, 0xD8AD]), // U+FD64
        (0xEFB5A5, 0, &[0xD8B5, 0xD8AD, 0xD8AD]), // U+FD65
        (0xEFB5A6, 0, &[0xD8B5, 0xD985, 0xD985]), // U+FD66
        (0xEFB5A7, 0, &[0xD8B4, 0xD8AD, 0xD985]), // U+FD67
        (0xEFB5A8, 0, &[0xD8B4, 0xD8AD, 0xD985]), // U+FD68
        (0xEFB5A9, 0, &[0xD8B4, 0xD8AC, 0xD98A]), // U+FD69
        (0xEFB5AA, 0, &[0xD8B4, 0xD985, 0xD8AE]), // U+FD6A
        (0xEFB5AB, 0, &[0xD8B4, 0xD985, 0xD8AE]), // U+FD6B
        (0xEFB5AC, 0, &[0xD8B4, 0xD985, 0xD985]), // U+FD6C
        (0xEFB5AD, 0, &[0xD8B4, 0xD985, 0xD985]), // U+FD6D
        (0xEFB5AE, 0, &[0xD8B6, 0xD8AD, 0xD989]), // U+FD6E
        (0xEFB5AF, 0, &[0xD8B6, 0xD8AE, 0xD985]), // U+FD6F
        (0xEFB5B0, 0, &[0xD8B6, 0xD8AE, 0xD985]), // U+FD70
        (0xEFB5B1, 0, &[0xD8B7, 0xD985, 0xD8AD]), // U+FD71
        (0xEFB5B2, 0, &[0xD8B7, 0xD985, 0xD8AD]), // U+FD72
        (0xEFB5B3, 0, &[0xD8B7, 0xD985, 0xD985]), // U+FD73
        (0xEFB5B4, 0, &[0xD8B7, 0xD985, 0xD98A]), // U+FD74
        (0xEFB5B5, 0, &[0xD8B9, 0xD8AC, 0xD985]), // U+FD75
        (0xEFB5B6, 0, &[0xD8B9, 0xD985, 0xD985]), // U+FD76
        (0xEFB5B7, 0, &[0xD8B9, 0xD985, 0xD985]), // U+FD77
        (0xEFB5B8, 0, &[0xD8B9, 0xD985, 0xD989]), // U+FD78
        (0xEFB5B9, 0, &[0xD8BA, 0xD985, 0xD985]), // U+FD79
        (0xEFB5BA, 0, &[0xD8BA, 0xD985, 0xD98A]), // U+FD7A
        (0xEFB5BB, 0, &[0xD8BA, 0xD985, 0xD989]), // U+FD7B
        (0xEFB5BC, 0, &[0xD981, 0xD8AE, 0xD985]), // U+FD7C
        (0xEFB5BD, 0, &[0xD981, 0xD8AE, 0xD985]), // U+FD7D
        (0xEFB5BE, 0, &[0xD982, 0xD985, 0xD8AD]), // U+FD7E
        (0xEFB5BF, 0, &[0xD982, 0xD985, 0xD985]), // U+FD7F
        (0xEFB680, 0, &[0xD984, 0xD8AD, 0xD985]), // U+FD80
        (0xEFB681, 0, &[0xD984, 0xD8AD, 0xD98A]), // U+FD81
        (0xEFB682, 0, &[0xD984, 0xD8AD, 0xD989]), // U+FD82
        (0xEFB683, 0, &[0xD984, 0xD8AC, 0xD8AC]), // U+FD83
        (0xEFB684, 0, &[0xD984, 0xD8AC, 0xD8AC]), // U+FD84
        (0xEFB685, 0, &[0xD984, 0xD8AE, 0xD985]), // U+FD85
        (0xEFB686, 0, &[0xD984, 0xD8AE, 0xD985]), // U+FD86
        (0xEFB687, 0, &[0xD984, 0xD985, 0xD8AD]), // U+FD87
        (0xEFB688, 0, &[0xD984, 0xD985, 0xD8AD]), // U+FD88
        (0xEFB689, 0, &[0xD985, 0xD8AD, 0xD8AC]), // U+FD89
        (0xEFB68A, 0, &[0xD985, 0xD8AD, 0xD985]), // U+FD8A
        (0xEFB68B, 0, &[0xD985, 0xD8AD, 0xD98A]), // U+FD8B
        (0xEFB68C, 0, &[0xD985, 0xD8AC, 0xD8AD]), // U+FD8C
        (0xEFB68D, 0, &[0xD985, 0xD8AC, 0xD985]), // U+FD8D
        (0xEFB68E, 0, &[0xD985, 0xD8AE, 0xD8AC]), // U+FD8E
        (0xEFB68F, 0, &[0xD985, 0xD8AE, 0xD985]), // U+FD8F
        (0xEFB692, 0, &[0xD985, 0xD8AC, 0xD8AE]), // U+FD92
        (0xEFB693, 0, &[0xD987, 0xD985, 0xD8AC]), // U+FD93
        (0xEFB694, 0, &[0xD987, 0xD985, 0xD985]), // U+FD94
        (0xEFB695, 0, &[0xD986, 0xD8AD, 0xD985]), // U+FD95
        (0xEFB696, 0, &[0xD986, 0xD8AD, 0xD989]), // U+FD96
        (0xEFB697, 0, &[0xD986, 0xD8AC, 0xD985]), // U+FD97
        (0xEFB698, 0, &[0xD986, 0xD8AC, 0xD985]), // U+FD98
        (0xEFB699, 0, &[0xD986, 0xD8AC, 0xD989]), // U+FD99
        (0xEFB69A, 0, &[0xD986, 0xD985, 0xD98A]), // U+FD9A
        (0xEFB69B, 0, &[0xD986, 0xD985, 0xD989]), // U+FD9B
        (0xEFB69C, 0, &[0xD98A, 0xD985, 0xD985]), // U+FD9C
        (0xEFB69D, 0, &[0xD98A, 0xD985, 0xD985]), // U+FD9D
        (0xEFB69E, 0, &[0xD8A8, 0xD8AE, 0xD98A]), // U+FD9E
        (0xEFB69F, 0, &[0xD8AA, 0xD8AC, 0xD98A]), // U+FD9F
        (0xEFB6A0, 0, &[0xD8AA, 0xD8AC, 0xD989]), // U+FDA0
        (0xEFB6A1, 0, &[0xD8AA, 0xD8AE, 0xD98A]), // U+FDA1
        (0xEFB6A2, 0, &[0xD8AA, 0xD8AE, 0xD989]), // U+FDA2
        (0xEFB6A3, 0, &[0xD8AA, 0xD985, 0xD98A]), // U+FDA3
        (0xEFB6A4, 0, &[0xD8AA, 0xD985, 0xD989]), // U+FDA4
        (0xEFB6A5, 0, &[0xD8AC, 0xD985, 0xD98A]), // U+FDA5
        (0xEFB6A6, 0, &[0xD8AC, 0xD8AD, 0xD989]), // U+FDA6
        (0xEFB6A7, 0, &[0xD8AC, 0xD985, 0xD989]), // U+FDA7
        (0xEFB6A8, 0, &[0xD8B3, 0xD8AE, 0xD989]), // U+FDA8
        (0xEFB6A9, 0, &[0xD8B5, 0xD8AD, 0xD98A]), // U+FDA9
        (0xEFB6AA, 0, &[0xD8B4, 0xD8AD, 0xD98A]), // U+FDAA
        (0xEFB6AB, 0, &[0xD8B6, 0xD8AD, 0xD98A]), // U+FDAB
        (0xEFB6AC, 0, &[0xD984, 0xD8AC, 0xD98A]), // U+FDAC
        (0xEFB6AD, 0, &[0xD984, 0xD985, 0xD98A]), // U+FDAD
        (0xEFB6AE, 0, &[0xD98A, 0xD8AD, 0xD98A]), // U+FDAE
        (0xEFB6AF, 0, &[0xD98A, 0xD8AC, 0xD98A]), // U+FDAF
        (0xEFB6B0, 0, &[0xD98A, 0xD985, 0xD98A]), // U+FDB0
        (0xEFB6B1, 0, &[0xD985, 0xD985, 0xD98A]), // U+FDB1
        (0xEFB6B2, 0, &[0xD982, 0xD985, 0xD98A]), // U+FDB2
        (0xEFB6B3, 0, &[0xD986, 0xD8AD, 0xD98A]), // U+FDB3
        (0xEFB6B4, 0, &[0xD982, 0xD985, 0xD8AD]), // U+FDB4
        (0xEFB6B5, 0, &[0xD984, 0xD8AD, 0xD985]), // U+FDB5
        (0xEFB6B6, 0, &[0xD8B9, 0xD985, 0xD98A]), // U+FDB6
        (0xEFB6B7, 0, &[0xD983, 0xD985, 0xD98A]), // U+FDB7
        (0xEFB6B8, 0, &[0xD986, 0xD8AC, 0xD8AD]), // U+FDB8
        (0xEFB6B9, 0, &[0xD985, 0xD8AE, 0xD98A]), // U+FDB9
        (0xEFB6BA, 0, &[0xD984, 0xD8AC, 0xD985]), // U+FDBA
        (0xEFB6BB, 0, &[0xD983, 0xD985, 0xD985]), // U+FDBB
        (0xEFB6BC, 0, &[0xD984, 0xD8AC, 0xD985]), // U+FDBC
        (0xEFB6BD, 0, &[0xD986, 0xD8AC, 0xD8AD]), // U+FDBD
        (0xEFB6BE, 0, &[0xD8AC, 0xD8AD, 0xD98A]), // U+FDBE
        (0xEFB6BF, 0, &[0xD8AD, 0xD8AC, 0xD98A]), // U+FDBF
        (0xEFB780, 0, &[0xD985, 0xD8AC, 0xD98A]), // U+FDC0
        (0xEFB781, 0, &[0xD981, 0xD985, 0xD98A]), // U+FDC1
        (0xEFB782, 0, &[0xD8A8, 0xD8AD, 0xD98A]), // U+FDC2
        (0xEFB783, 0, &[0xD983, 0xD985, 0xD985]), // U+FDC3
        (0xEFB784, 0, &[0xD8B9, 0xD8AC, 0xD985]), // U+FDC4
        (0xEFB785, 0, &[0xD8B5, 0xD985, 0xD985]), // U+FDC5
        (0xEFB786, 0, &[0xD8B3, 0xD8AE, 0xD98A]), // U+FDC6
        (0xEFB787, 0, &[0xD986, 0xD8AC, 0xD98A]), // U+FDC7
        (0xEFB7B0, 0, &[0xD8B5, 0xD984, 0xDB92]), // U+FDF0
        (0xEFB7B1, 0, &[0xD982, 0xD984, 0xDB92]), // U+FDF1
        (0xEFB7B2, 0, &[0xD8A7, 0xD984, 0xD984, 0xD987]), // U+FDF2
        (0xEFB7B3, 0, &[0xD8A7, 0xD983, 0xD8A8, 0xD8B1]), // U+FDF3
        (0xEFB7B4, 0, &[0xD985, 0xD8AD, 0xD985, 0xD8AF]), // U+FDF4
        (0xEFB7B5, 0, &[0xD8B5, 0xD984, 0xD8B9, 0xD985]), // U+FDF5
        (0xEFB7B6, 0, &[0xD8B1, 0xD8B3, 0xD988, 0xD984]), // U+FDF6
        (0xEFB7B7, 0, &[0xD8B9, 0xD984, 0xD98A, 0xD987]), // U+FDF7
        (0xEFB7B8, 0, &[0xD988, 0xD8B3, 0xD984, 0xD985]), // U+FDF8
        (0xEFB7B9, 0, &[0xD8B5, 0xD984, 0xD989]), // U+FDF9
        (0xEFB7BA, 0, &[0xD8B5, 0xD984, 0xD989, 0x20, 0xD8A7, 0xD984, 0xD984, 0xD987, 0x20, 0xD8B9, 0xD984, 0xD98A, 0xD987, 0x20, 0xD988, 0xD8B3, 0xD984, 0xD985]), // U+FDFA
        (0xEFB7BB, 0, &[0xD8AC, 0xD984, 0x20, 0xD8AC, 0xD984, 0xD8A7, 0xD984, 0xD987]), // U+FDFB
        (0xEFB7BC, 0, &[0xD8B1, 0xDB8C, 0xD8A7, 0xD984]), // U+FDFC
        (0xEFB890, 0, &[0x2C]), // U+FE10
        (0xEFB891, 0, &[0xE38081]), // U+FE11
        (0xEFB892, 0, &[0xE38082]), // U+FE12
        (0xEFB893, 0, &[0x3A]), // U+FE13
        (0xEFB894, 0, &[0x3B]), // U+FE14
        (0xEFB895, 0, &[0x21]), // U+FE15
        (0xEFB896, 0, &[0x3F]), // U+FE16
        (0xEFB897, 0, &[0xE38096]), // U+FE17
        (0xEFB898, 0, &[0xE38097]), // U+FE18
        (0xEFB899, 0, &[0xE280A6]), // U+FE19
        (0xEFB8A0, 230, &[]), // U+FE20
        (0xEFB8A1, 230, &[]), // U+FE21
        (0xEFB8A2, 230, &[]), // U+FE22
        (0xEFB8A3, 230, &[]), // U+FE23
        (0xEFB8A4, 230, &[]), // U+FE24
        (0xEFB8A5, 230, &[]), // U+FE25
        (0xEFB8A6, 230, &[]), // U+FE26
        (0xEFB8A7, 220, &[]), // U+FE27
        (0xEFB8A8, 220, &[]), // U+FE28
        (0xEFB8A9, 220, &[]), // U+FE29
        (0xEFB8AA, 220, &[]), // U+FE2A
        (0xEFB8AB, 220, &[]), // U+FE2B
        (0xEFB8AC, 220, &[]), // U+FE2C
        (0xEFB8AD, 220, &[]), // U+FE2D
        (0xEFB8AE, 230, &[]), // U+FE2E
        (0xEFB8AF, 230, &[]), // U+FE2F
        (0xEFB8B0, 0, &[0xE280A5]), // U+FE30
        (0xEFB8B1, 0, &[0xE28094]), // U+FE31
        (0xEFB8B2, 0, &[0xE28093]), // U+FE32
        (0xEFB8B3, 0, &[0x5F]), // U+FE33
        (0xEFB8B4, 0, &[0x5F]), // U+FE34
        (0xEFB8B5, 0, &[0x28]), // U+FE35
        (0xEFB8B6, 0, &[0x29]), // U+FE36
        (0xEFB8B7, 0, &[0x7B]), // U+FE37
        (0xEFB8B8, 0, &[0x7D]), // U+FE38
        (0xEFB8B9, 0, &[0xE38094]), // U+FE39
        (0xEFB8BA, 0, &[0xE38095]), // U+FE3A
        (0xEFB8BB, 0, &[0xE38090]), // U+FE3B
        (0xEFB8BC, 0, &[0xE38091]), // U+FE3C
        (0xEFB8BD, 0, &[0xE3808A]), // U+FE3D
        (0xEFB8BE, 0, &[0xE3808B]), // U+FE3E
        (0xEFB8BF, 0, &[0xE38088]), // U+FE3F
        (0xEFB980, 0, &[0xE38089]), // U+FE40
        (0xEFB981, 0, &[0xE3808C]), // U+FE41
        (0xEFB982, 0, &[0xE3808D]), // U+FE42
        (0xEFB983, 0, &[0xE3808E]), // U+FE43
        (0xEFB984, 0, &[0xE3808F]), // U+FE44
        (0xEFB987, 0, &[0x5B]), // U+FE47
        (0xEFB988, 0, &[0x5D]), // U+FE48
        (0xEFB989, 0, &[0xE280BE]), // U+FE49
        (0xEFB98A, 0, &[0xE280BE]), // U+FE4A
        (0xEFB98B, 0, &[0xE280BE]), // U+FE4B
        (0xEFB98C, 0, &[0xE280BE]), // U+FE4C
        (0xEFB98D, 0, &[0x5F]), // U+FE4D
        (0xEFB98E, 0, &[0x5F]), // U+FE4E
        (0xEFB98F, 0, &[0x5F]), // U+FE4F
        (0xEFB990, 0, &[0x2C]), // U+FE50
        (0xEFB991, 0, &[0xE38081]), // U+FE51
        (0xEFB992, 0, &[0x2E]), // U+FE52
        (0xEFB994, 0, &[0x3B]), // U+FE54
        (0xEFB995, 0, &[0x3A]), // U+FE55
        (0xEFB996, 0, &[0x3F]), // U+FE56
        (0xEFB997, 0, &[0x21]), // U+FE57
        (0xEFB998, 0, &[0xE28094]), // U+FE58
        (0xEFB999, 0, &[0x28]), // U+FE59
        (0xEFB99A, 0, &[0x29]), // U+FE5A
        (0xEFB99B, 0, &[0x7B]), // U+FE5B
        (0xEFB99C, 0, &[0x7D]), // U+FE5C
        (0xEFB99D, 0, &[0xE38094]), // U+FE5D
        (0xEFB99E, 0, &[0xE38095]), // U+FE5E
        (0xEFB99F, 0, &[0x23]), // U+FE5F
        (0xEFB9A0, 0, &[0x26]), // U+FE60
        (0xEFB9A1, 0, &[0x2A]), // U+FE61
        (0xEFB9A2, 0, &[0x2B]), // U+FE62
        (0xEFB9A3, 0, &[0x2D]), // U+FE63
        (0xEFB9A4, 0, &[0x3C]), // U+FE64
        (0xEFB9A5, 0, &[0x3E]), // U+FE65
        (0xEFB9A6, 0, &[0x3D]), // U+FE66
        (0xEFB9A8, 0, &[0x5C]), // U+FE68
        (0xEFB9A9, 0, &[0x24]), // U+FE69
        (0xEFB9AA, 0, &[0x25]), // U+FE6A
        (0xEFB9AB, 0, &[0x40]), // U+FE6B
        (0xEFB9B0, 0, &[0x20, 0xD98B]), // U+FE70
        (0xEFB9B1, 0, &[0xD980, 0xD98B]), // U+FE71
        (0xEFB9B2, 0, &[0x20, 0xD98C]), // U+FE72
        (0xEFB9B4, 0, &[0x20, 0xD98D]), // U+FE74
        (0xEFB9B6, 0, &[0x20, 0xD98E]), // U+FE76
        (0xEFB9B7, 0, &[0xD980, 0xD98E]), // U+FE77
        (0xEFB9B8, 0, &[0x20, 0xD98F]), // U+FE78
        (0xEFB9B9, 0, &[0xD980, 0xD98F]), // U+FE79
        (0xEFB9BA, 0, &[0x20, 0xD990]), // U+FE7A
        (0xEFB9BB, 0, &[0xD980, 0xD990]), // U+FE7B
        (0xEFB9BC, 0, &[0x20, 0xD991]), // U+FE7C
        (0xEFB9BD, 0, &[0xD980, 0xD991]), // U+FE7D
        (0xEFB9BE, 0, &[0x20, 0xD992]), // U+FE7E
        (0xEFB9BF, 0, &[0xD980, 0xD992]), // U+FE7F
        (0xEFBA80, 0, &[0xD8A1]), // U+FE80
        (0xEFBA81, 0, &[0xD8A2]), // U+FE81
        (0xEFBA82, 0, &[0xD8A2]), // U+FE82
        (0xEFBA83, 0, &[0xD8A3]), // U+FE83
        (0xEFBA84, 0, &[0xD8A3]), // U+FE84
        (0xEFBA85, 0, &[0xD8A4]), // U+FE85
        (0xEFBA86, 0, &[0xD8A4]), // U+FE86
        (0xEFBA87, 0, &[0xD8A5]), // U+FE87
        (0xEFBA88, 0, &[0xD8A5]), // U+FE88
        (0xEFBA89, 0, &[0xD8A6]), // U+FE89
        (0xEFBA8A, 0, &[0xD8A6]), // U+FE8A
        (0xEFBA8B, 0, &[0xD8A6]), // U+FE8B
        (0xEFBA8C, 0, &[0xD8A6]), // U+FE8C
        (0xEFBA8D, 0, &[0xD8A7]), // U+FE8D
        (0xEFBA8E, 0, &[0xD8A7]), // U+FE8E
        (0xEFBA8F, 0, &[0xD8A8]), // U+FE8F
        (0xEFBA90, 0, &[0xD8A8]), // U+FE90
        (0xEFBA91, 0, &[0xD8A8]), // U+FE91
        (0xEFBA92, 0, &[0xD8A8]), // U+FE92
        (0xEFBA93, 0, &[0xD8A9]), // U+FE93
        (0xEFBA94, 0, &[0xD8A9]), // U+FE94
        (0xEFBA95, 0, &[0xD8AA]), // U+FE95
        (0xEFBA96, 0, &[0xD8AA]), // U+FE96
        (0xEFBA97, 0, &[0xD8AA]), // U+FE97
        (0xEFBA98, 0, &[0xD8AA]), // U+FE98
        (0xEFBA99, 0, &[0xD8AB]), // U+FE99
        (0xEFBA9A, 0, &[0xD8AB]), // U+FE9A
        (0xEFBA9B, 0, &[0xD8AB]), // U+FE9B
        (0xEFBA9C, 0, &[0xD8AB]), // U+FE9C
        (0xEFBA9D, 0, &[0xD8AC]), // U+FE9D
        (0xEFBA9E, 0, &[0xD8AC]), // U+FE9E
        (0xEFBA9F, 0, &[0xD8AC]), // U+FE9F
        (0xEFBAA0, 0, &[0xD8AC]), // U+FEA0
        (0xEFBAA1, 0, &[0xD8AD]), // U+FEA1
        (0xEFBAA2, 0, &[0xD8AD]), // U+FEA2
        (0xEFBAA3, 0, &[0xD8AD]), // U+FEA3
        (0xEFBAA4, 0, &[0xD8AD]), // U+FEA4
        (0xEFBAA5, 0, &[0xD8AE]), // U+FEA5
        (0xEFBAA6, 0, &[0xD8AE]), // U+FEA6
        (0xEFBAA7, 0, &[0xD8AE]), // U+FEA7
        (0xEFBAA8, 0, &[0xD8AE]), // U+FEA8
        (0xEFBAA9, 0, &[0xD8AF]), // U+FEA9
        (0xEFBAAA, 0, &[0xD8AF]), // U+FEAA
        (0xEFBAAB, 0, &[0xD8B0]), // U+FEAB
        (0xEFBAAC, 0, &[0xD8B0]), // U+FEAC
        (0xEFBAAD, 0, &[0xD8B1]), // U+FEAD
        (0xEFBAAE, 0, &[0xD8B1]), // U+FEAE
        (0xEFBAAF, 0, &[0xD8B2]), // U+FEAF
        (0xEFBAB0, 0, &[0xD8B2]), // U+FEB0
        (0xEFBAB1, 0, &[0xD8B3]), // U+FEB1
        (0xEFBAB2, 0, &[0xD8B3]), // U+FEB2
        (0xEFBAB3, 0, &[0xD8B3]), // U+FEB3
        (0xEFBAB4, 0, &[0xD8B3]), // U+FEB4
        (0xEFBAB5, 0, &[0xD8B4]), // U+FEB5
        (0xEFBAB6, 0, &[0xD8B4]), // U+FEB6
        (0xEFBAB7, 0, &[0xD8B4]), // U+FEB7
        (0xEFBAB8, 0, &[0xD8B4]), // U+FEB8
        (0xEFBAB9, 0, &[0xD8B5]), // U+FEB9
        (0xEFBABA, 0, &[0xD8B5]), // U+FEBA
        (0xEFBABB, 0, &[0xD8B5]), // U+FEBB
        (0xEFBABC, 0, &[0xD8B5]), // U+FEBC
        (0xEFBABD, 0, &[0xD8B6]), // U+FEBD
        (0xEFBABE, 0, &[0xD8B6]), // U+FEBE
        (0xEFBABF, 0, &[0xD8B6]), // U+FEBF
        (0xEFBB80, 0, &[0xD8B6]), // U+FEC0
        (0xEFBB81, 0, &[0xD8B7]), // U+FEC1
        (0xEFBB82, 0, &[0xD8B7]), // U+FEC2
        (0xEFBB83, 0, &[0xD8B7]), // U+FEC3
        (0xEFBB84, 0, &[0xD8B7]), // U+FEC4
        (0xEFBB85, 0, &[0xD8B8]), // U+FEC5
        (0xEFBB86, 0, &[0xD8B8]), // U+FEC6
        (0xEFBB87, 0, &[0xD8B8]), // U+FEC7
        (0xEFBB88, 0, &[0xD8B8]), // U+FEC8
        (0xEFBB89, 0, &[0xD8B9]), // U+FEC9
        (0xEFBB8A, 0, &[0xD8B9]), // U+FECA
        (0xEFBB8B, 0, &[0xD8B9]), // U+FECB
        (0xEFBB8C, 0, &[0xD8B9]), // U+FECC
        (0xEFBB8D, 0, &[0xD8BA]), // U+FECD
        (0xEFBB8E, 0, &[0xD8BA]), // U+FECE
        (0xEFBB8F, 0, &[0xD8BA]), // U+FECF
        (0xEFBB90, 0, &[0xD8BA]), // U+FED0
        (0xEFBB91, 0, &[0xD981]), // U+FED1
        (0xEFBB92, 0, &[0xD981]), // U+FED2
        (0xEFBB93, 0, &[0xD981]), // U+FED3
        (0xEFBB94, 0, &[0xD981]), // U+FED4
        (0xEFBB95, 0, &[0xD982]), // U+FED5
        (0xEFBB96, 0, &[0xD982]), // U+FED6
        (0xEFBB97, 0, &[0xD982]), // U+FED7
        (0xEFBB98, 0, &[0xD982]), // U+FED8
        (0xEFBB99, 0, &[0xD983]), // U+FED9
        (0xEFBB9A, 0, &[0xD983]), // U+FEDA
        (0xEFBB9B, 0, &[0xD983]), // U+FEDB
        (0xEFBB9C, 0, &[0xD983]), // U+FEDC
        (0xEFBB9D, 0, &[0xD984]), // U+FEDD
        (0xEFBB9E, 0, &[0xD984]), // U+FEDE
        (0xEFBB9F, 0, &[0xD984]), // U+FEDF
        (0xEFBBA0, 0, &[0xD984]), // U+FEE0
        (0xEFBBA1, 0, &[0xD985]), // U+FEE1
        (0xEFBBA2, 0, &[0xD985]), // U+FEE2
        (0xEFBBA3, 0, &[0xD985]), // U+FEE3
        (0xEFBBA4, 0, &[0xD985]), // U+FEE4
        (0xEFBBA5, 0, &[0xD986]), // U+FEE5
        (0xEFBBA6, 0, &[0xD986]), // U+FEE6
        (0xEFBBA7, 0, &[0xD986]), // U+FEE7
        (0xEFBBA8, 0, &[0xD986]), // U+FEE8
        (0xEFBBA9, 0, &[0xD987]), // U+FEE9
        (0xEFBBAA, 0, &[0xD987]), // U+FEEA
        (0xEFBBAB, 0, &[0xD987]), // U+FEEB
        (0xEFBBAC, 0, &[0xD987]), // U+FEEC
        (0xEFBBAD, 0, &[0xD988]), // U+FEED
        (0xEFBBAE, 0, &[0xD988]), // U+FEEE
        (0xEFBBAF, 0, &[0xD989]), // U+FEEF
        (0xEFBBB0, 0, &[0xD989]), // U+FEF0
        (0xEFBBB1, 0, &[0xD98A]), // U+FEF1
        (0xEFBBB2, 0, &[0xD98A]), // U+FEF2
        (0xEFBBB3, 0, &[0xD98A]), // U+FEF3
        (0xEFBBB4, 0, &[0xD98A]), // U+FEF4
        (0xEFBBB5, 0, &[0xD984, 0xD8A2]), // U+FEF5
        (0xEFBBB6, 0, &[0xD984, 0xD8A2]), // U+FEF6
        (0xEFBBB7, 0, &[0xD984, 0xD8A3]), // U+FEF7
        (0xEFBBB8, 0, &[0xD984, 0xD8A3]), // U+FEF8
        (0xEFBBB9, 0, &[0xD984, 0xD8A5]), // U+FEF9
        (0xEFBBBA, 0, &[0xD984, 0xD8A5]), // U+FEFA
        (0xEFBBBB, 0, &[0xD984, 0xD8A7]), // U+FEFB
        (0xEFBBBC, 0, &[0xD984, 0xD8A7]), // U+FEFC
        (0xEFBC81, 0, &[0x21]), // U+FF01
        (0xEFBC82, 0, &[0x22]), // U+FF02
        (0xEFBC83, 0, &[0x23]), // U+FF03
        (0xEFBC84, 0, &[0x24]), // U+FF04
        (0xEFBC85, 0, &[0x25]), // U+FF05
        (0xEFBC86, 0, &[0x26]), // U+FF06
        (0xEFBC87, 0, &[0x27]), // U+FF07
        (0xEFBC88, 0, &[0x28]), // U+FF08
        (0xEFBC89, 0, &[0x29]), // U+FF09
        (0xEFBC8A, 0, &[0x2A]), // U+FF0A
        (0xEFBC8B, 0, &[0x2B]), // U+FF0B
        (0xEFBC8C, 0, &[0x2C]), // U+FF0C
        (0xEFBC8D, 0, &[0x2D]), // U+FF0D
        (0xEFBC8E, 0, &[0x2E]), // U+FF0E
        (0xEFBC8F, 0, &[0x2F]), // U+FF0F
        (0xEFBC90, 0, &[0x30]), // U+FF10
        (0xEFBC91, 0, &[0x31]), // U+FF11
        (0xEFBC92, 0, &[0x32]), // U+FF12
        (0xEFBC93, 0, &[0x33]), // U+FF13
        (0xEFBC94, 0, &[0x34]), // U+FF14
        (0xEFBC95, 0, &[0x35]), // U+FF15
        (0xEFBC96, 0, &[0x36]), // U+FF16
        (0xEFBC97, 0, &[0x37]), // U+FF17
        (0xEFBC98, 0, &[0x38]), // U+FF18
        (0xEFBC99, 0, &[0x39]), // U+FF19
        (0xEFBC9A, 0, &[0x3A]), // U+FF1A
        (0xEFBC9B, 0, &[0x3B]), // U+FF1B
        (0xEFBC9C, 0, &[0x3C]), // U+FF1C
        (0xEFBC9D, 0, &[0x3D]), // U+FF1D
        (0xEFBC9E, 0, &[0x3E]), // U+FF1E
        (0xEFBC9F, 0, &[0x3F]), // U+FF1F
        (0xEFBCA0, 0, &[0x40]), // U+FF20
        (0xEFBCA1, 0, &[0x41]), // U+FF21
        (0xEFBCA2, 0, &[0x42]), // U+FF22
        (0xEFBCA3, 0, &[0x43]), // U+FF23
        (0xEFBCA4, 0, &[0x44]), // U+FF24
        (0xEFBCA5, 0, &[0x45]), // U+FF25
        (0xEFBCA6, 0, &[0x46]), // U+FF26
        (0xEFBCA7, 0, &[0x47]), // U+FF27
        (0xEFBCA8, 0, &[0x48]), // U+FF28
        (0xEFBCA9, 0, &[0x49]), // U+FF29
        (0xEFBCAA, 0, &[0x4A]), // U+FF2A
        (0xEFBCAB, 0, &[0x4B]), // U+FF2B
        (0xEFBCAC, 0, &[0x4C]), // U+FF2C
        (0xEFBCAD, 0, &[0x4D]), // U+FF2D
        (0xEFBCAE, 0, &[0x4E]), // U+FF2E
        (0xEFBCAF, 0, &[0x4F]), // U+FF2F
        (0xEFBCB0, 0, &[0x50]), // U+FF30
        (0xEFBCB1, 0, &[0x51]), // U+FF31
        (0xEFBCB2, 0, &[0x52]), // U+FF32
        (0xEFBCB3, 0, &[0x53]), // U+FF33
        (0xEFBCB4, 0, &[0x54]), // U+FF34
        (0xEFBCB5, 0, &[0x55]), // U+FF35
        (0xEFBCB6, 0, &[0x56]), // U+FF36
        (0xEFBCB7, 0, &[0x57]), // U+FF37
        (0xEFBCB8, 0, &[0x58]), // U+FF38
        (0xEFBCB9, 0, &[0x59]), // U+FF39
        (0xEFBCBA, 0, &[0x5A]), // U+FF3A
        (0xEFBCBB, 0, &[0x5B]), // U+FF3B
        (0xEFBCBC, 0, &[0x5C]), // U+FF3C
        (0xEFBCBD, 0, &[0x5D]), // U+FF3D
        (0xEFBCBE, 0, &[0x5E]), // U+FF3E
        (0xEFBCBF, 0, &[0x5F]), // U+FF3F
        (0xEFBD80, 0, &[0x60]), // U+FF40
        (0xEFBD81, 0, &[0x61]), // U+FF41
        (0xEFBD82, 0, &[0x62]), // U+FF42
        (0xEFBD83, 0, &[0x63]), // U+FF43
        (0xEFBD84, 0, &[0x64]), // U+FF44
        (0xEFBD85, 0, &[0x65]), // U+FF45
        (0xEFBD86, 0, &[0x66]), // U+FF46
        (0xEFBD87, 0, &[0x67]), // U+FF47
        (0xEFBD88, 0, &[0x68]), // U+FF48
        (0xEFBD89, 0, &[0x69]), // U+FF49
        (0xEFBD8A, 0, &[0x6A]), // U+FF4A
        (0xEFBD8B, 0, &[0x6B]), // U+FF4B
        (0xEFBD8C, 0, &[0x6C]), // U+FF4C
        (0xEFBD8D, 0, &[0x6D]), // U+FF4D
        (0xEFBD8E, 0, &[0x6E]), // U+FF4E
        (0xEFBD8F, 0, &[0x6F]), // U+FF4F
        (0xEFBD90, 0, &[0x70]), // U+FF50
        (0xEFBD91, 0, &[0x71]), // U+FF51
        (0xEFBD92, 0, &[0x72]), // U+FF52
        (0xEFBD93, 0, &[0x73]), // U+FF53
        (0xEFBD94, 0, &[0x74]), // U+FF54
        (0xEFBD95, 0, &[0x75]), // U+FF55
        (0xEFBD96, 0, &[0x76]), // U+FF56
        (0xEFBD97, 0, &[0x77]), // U+FF57
        (0xEFBD98, 0, &[0x78]), // U+FF58
        (0xEFBD99, 0, &[0x79]), // U+FF59
        (0xEFBD9A, 0, &[0x7A]), // U+FF5A
        (0xEFBD9B, 0, &[0x7B]), // U+FF5B
        (0xEFBD9C, 0, &[0x7C]), // U+FF5C
        (0xEFBD9D, 0, &[0x7D]), // U+FF5D
        (0xEFBD9E, 0, &[0x7E]), // U+FF5E
        (0xEFBD9F, 0, &[0xE2A685]), // U+FF5F
        (0xEFBDA0, 0, &[0xE2A686]), // U+FF60
        (0xEFBDA1, 0, &[0xE38082]), // U+FF61
        (0xEFBDA2, 0, &[0xE3808C]), // U+FF62
        (0xEFBDA3, 0, &[0xE3808D]), // U+FF63
        (0xEFBDA4, 0, &[0xE38081]), // U+FF64
        (0xEFBDA5, 0, &[0xE383BB]), // U+FF65
        (0xEFBDA6, 0, &[0xE383B2]), // U+FF66
        (0xEFBDA7, 0, &[0xE382A1]), // U+FF67
        (0xEFBDA8, 0, &[0xE382A3]), // U+FF68
        (0xEFBDA9, 0, &[0xE382A5]), // U+FF69
        (0xEFBDAA, 0, &[0xE382A7]), // U+FF6A
        (0xEFBDAB, 0, &[0xE382A9]), // U+FF6B
        (0xEFBDAC, 0, &[0xE383A3]), // U+FF6C
        (0xEFBDAD, 0, &[0xE383A5]), // U+FF6D
        (0xEFBDAE, 0, &[0xE383A7]), // U+FF6E
        (0xEFBDAF, 0, &[0xE38383]), // U+FF6F
        (0xEFBDB0, 0, &[0xE383BC]), // U+FF70
        (0xEFBDB1, 0, &[0xE382A2]), // U+FF71
        (0xEFBDB2, 0, &[0xE382A4]), // U+FF72
        (0xEFBDB3, 0, &[0xE382A6]), // U+FF73
        (0xEFBDB4, 0, &[0xE382A8]), // U+FF74
        (0xEFBDB5, 0, &[0xE382AA]), // U+FF75
        (0xEFBDB6, 0, &[0xE382AB]), // U+FF76
        (0xEFBDB7, 0, &[0xE382AD]), // U+FF77
        (0xEFBDB8, 0, &[0xE382AF]), // U+FF78
        (0xEFBDB9, 0, &[0xE382B1]), // U+FF79
        (0xEFBDBA, 0, &[0xE382B3]), // U+FF7A
        (0xEFBDBB, 0, &[0xE382B5]), // U+FF7B
        (0xEFBDBC, 0, &[0xE382B7]), // U+FF7C
        (0xEFBDBD, 0, &[0xE382B9]), // U+FF7D
        (0xEFBDBE, 0, &[0xE382BB]), // U+FF7E
        (0xEFBDBF, 0, &[0xE382BD]), // U+FF7F
        (0xEFBE80, 0, &[0xE382BF]), // U+FF80
        (0xEFBE81, 0, &[0xE38381]), // U+FF81
        (0xEFBE82, 0, &[0xE38384]), // U+FF82
        (0xEFBE83, 0, &[0xE38386]), // U+FF83
        (0xEFBE84, 0, &[0xE38388]), // U+FF84
        (0xEFBE85, 0, &[0xE3838A]), // U+FF85
        (0xEFBE86, 0, &[0xE3838B]), // U+FF86
        (0xEFBE87, 0, &[0xE3838C]), // U+FF87
        (0xEFBE88, 0, &[0xE3838D]), // U+FF88
        (0xEFBE89, 0, &[0xE3838E]), // U+FF89
        (0xEFBE8A, 0, &[0xE3838F]), // U+FF8A
        (0xEFBE8B, 0, &[0xE38392]), // U+FF8B
        (0xEFBE8C, 0, &[0xE38395]), // U+FF8C
        (0xEFBE8D, 0, &[0xE38398]), // U+FF8D
        (0xEFBE8E, 0, &[0xE3839B]), // U+FF8E
        (0xEFBE8F, 0, &[0xE3839E]), // U+FF8F
        (0xEFBE90, 0, &[0xE3839F]), // U+FF90
        (0xEFBE91, 0, &[0xE383A0]), // U+FF91
        (0xEFBE92, 0, &[0xE383A1]), // U+FF92
        (0xEFBE93, 0, &[0xE383A2]), // U+FF93
        (0xEFBE94, 0, &[0xE383A4]), // U+FF94
        (0xEFBE95, 0, &[0xE383A6]), // U+FF95
        (0xEFBE96, 0, &[0xE383A8]), // U+FF96
        (0xEFBE97, 0, &[0xE383A9]), // U+FF97
        (0xEFBE98, 0, &[0xE383AA]), // U+FF98
        (0xEFBE99, 0, &[0xE383AB]), // U+FF99
        (0xEFBE9A, 0, &[0xE383AC]), // U+FF9A
        (0xEFBE9B, 0, &[0xE383AD]), // U+FF9B
        (0xEFBE9C, 0, &[0xE383AF]), // U+FF9C
        (0xEFBE9D, 0, &[0xE383B3]), // U+FF9D
        (0xEFBE9E, 0, &[0xE38299]), // U+FF9E
        (0xEFBE9F, 0, &[0xE3829A]), // U+FF9F
        (0xEFBEA0, 0, &[0xE385A4]), // U+FFA0
        (0xEFBEA1, 0, &[0xE384B1]), // U+FFA1
        (0xEFBEA2, 0, &[0xE384B2]), // U+FFA2
        (0xEFBEA3, 0, &[0xE384B3]), // U+FFA3
        (0xEFBEA4, 0, &[0xE384B4]), // U+FFA4
        (0xEFBEA5, 0, &[0xE384B5]), // U+FFA5
        (0xEFBEA6, 0, &[0xE384B6]), // U+FFA6
        (0xEFBEA7, 0, &[0xE384B7]), // U+FFA7
        (0xEFBEA8, 0, &[0xE384B8]), // U+FFA8
        (0xEFBEA9, 0, &[0xE384B9]), // U+FFA9
        (0xEFBEAA, 0, &[0xE384BA]), // U+FFAA
        (0xEFBEAB, 0, &[0xE384BB]), // U+FFAB
        (0xEFBEAC, 0, &[0xE384BC]), // U+FFAC
        (0xEFBEAD, 0, &[0xE384BD]), // U+FFAD
        (0xEFBEAE, 0, &[0xE384BE]), // U+FFAE
        (0xEFBEAF, 0, &[0xE384BF]), // U+FFAF
        (0xEFBEB0, 0, &[0xE38580]), // U+FFB0
        (0xEFBEB1, 0, &[0xE38581]), // U+FFB1
        (0xEFBEB2, 0, &[0xE38582]), // U+FFB2
        (0xEFBEB3, 0, &[0xE38583]), // U+FFB3
        (0xEFBEB4, 0, &[0xE38584]), // U+FFB4
        (0xEFBEB5, 0, &[0xE38585]), // U+FFB5
        (0xEFBEB6, 0, &[0xE38586]), // U+FFB6
        (0xEFBEB7, 0, &[0xE38587]), // U+FFB7
        (0xEFBEB8, 0, &[0xE38588]), // U+FFB8
        (0xEFBEB9, 0, &[0xE38589]), // U+FFB9
        (0xEFBEBA, 0, &[0xE3858A]), // U+FFBA
        (0xEFBEBB, 0, &[0xE3858B]), // U+FFBB
        (0xEFBEBC, 0, &[0xE3858C]), // U+FFBC
        (0xEFBEBD, 0, &[0xE3858D]), // U+FFBD
        (0xEFBEBE, 0, &[0xE3858E]), // U+FFBE
        (0xEFBF82, 0, &[0xE3858F]), // U+FFC2
        (0xEFBF83, 0, &[0xE38590]), // U+FFC3
        (0xEFBF84, 0, &[0xE38591]), // U+FFC4
        (0xEFBF85, 0, &[0xE38592]), // U+FFC5
        (0xEFBF86, 0, &[0xE38593]), // U+FFC6
        (0xEFBF87, 0, &[0xE38594]), // U+FFC7
        (0xEFBF8A, 0, &[0xE38595]), // U+FFCA
        (0xEFBF8B, 0, &[0xE38596]), // U+FFCB
        (0xEFBF8C, 0, &[0xE38597]), // U+FFCC
        (0xEFBF8D, 0, &[0xE38598]), // U+FFCD
        (0xEFBF8E, 0, &[0xE38599]), // U+FFCE
        (0xEFBF8F, 0, &[0xE3859A]), // U+FFCF
        (0xEFBF92, 0, &[0xE3859B]), // U+FFD2
        (0xEFBF93, 0, &[0xE3859C]), // U+FFD3
        (0xEFBF94, 0, &[0xE3859D]), // U+FFD4
        (0xEFBF95, 0, &[0xE3859E]), // U+FFD5
        (0xEFBF96, 0, &[0xE3859F]), // U+FFD6
        (0xEFBF97, 0, &[0xE385A0]), // U+FFD7
        (0xEFBF9A, 0, &[0xE385A1]), // U+FFDA
        (0xEFBF9B, 0, &[0xE385A2]), // U+FFDB
        (0xEFBF9C, 0, &[0xE385A3]), // U+FFDC
        (0xEFBFA0, 0, &[0xC2A2]), // U+FFE0
        (0xEFBFA1, 0, &[0xC2A3]), // U+FFE1
        (0xEFBFA2, 0, &[0xC2AC]), // U+FFE2
        (0xEFBFA3, 0, &[0xC2AF]), // U+FFE3
        (0xEFBFA4, 0, &[0xC2A6]), // U+FFE4
        (0xEFBFA5, 0, &[0xC2A5]), // U+FFE5
        (0xEFBFA6, 0, &[0xE282A9]), // U+FFE6
        (0xEFBFA8, 0, &[0xE29482]), // U+FFE8
        (0xEFBFA9, 0, &[0xE28690]), // U+FFE9
        (0xEFBFAA, 0, &[0xE28691]), // U+FFEA
        (0xEFBFAB, 0, &[0xE28692]), // U+FFEB
        (0xEFBFAC, 0, &[0xE28693]), // U+FFEC
        (0xEFBFAD, 0, &[0xE296A0]), // U+FFED
        (0xEFBFAE, 0, &[0xE2978B]), // U+FFEE
        (0xF09087BD, 220, &[]), // U+101FD
        (0xF0908BA0, 220, &[]), // U+102E0
        (0xF0908DB6, 230, &[]), // U+10376
        (0xF0908DB7, 230, &[]), // U+10377
        (0xF0908DB8, 230, &[]), // U+10378
        (0xF0908DB9, 230, &[]), // U+10379
        (0xF0908DBA, 230, &[]), // U+1037A
        (0xF0909E81, 0, &[0xCB90]), // U+10781
        (0xF0909E82, 0, &[0xCB91]), // U+10782
        (0xF0909E83, 0, &[0xC3A6]), // U+10783
        (0xF0909E84, 0, &[0xCA99]), // U+10784
        (0xF0909E85, 0, &[0xC993]), // U+10785
        (0xF0909E87, 0, &[0xCAA3]), // U+10787
        (0xF0909E88, 0, &[0xEAADA6]), // U+10788
        (0xF0909E89, 0, &[0xCAA5]), // U+10789
        (0xF0909E8A, 0, &[0xCAA4]), // U+1078A
        (0xF0909E8B, 0, &[0xC996]), // U+1078B
        (0xF0909E8C, 0, &[0xC997]), // U+1078C
        (0xF0909E8D, 0, &[0xE1B691]), // U+1078D
        (0xF0909E8E, 0, &[0xC998]), // U+1078E
        (0xF0909E8F, 0, &[0xC99E]), // U+1078F
        (0xF0909E90, 0, &[0xCAA9]), // U+10790
        (0xF0909E91, 0, &[0xC9A4]), // U+10791
        (0xF0909E92, 0, &[0xC9A2]), // U+10792
        (0xF0909E93, 0, &[0xC9A0]), // U+10793
        (0xF0909E94, 0, &[0xCA9B]), // U+10794
        (0xF0909E95, 0, &[0xC4A7]), // U+10795
        (0xF0909E96, 0, &[0xCA9C]), // U+10796
        (0xF0909E97, 0, &[0xC9A7]), // U+10797
        (0xF0909E98, 0, &[0xCA84]), // U+10798
        (0xF0909E99, 0, &[0xCAAA]), // U+10799
        (0xF0909E9A, 0, &[0xCAAB]), // U+1079A
        (0xF0909E9B, 0, &[0xC9AC]), // U+1079B
        (0xF0909E9C, 0, &[0xF09DBC84]), // U+1079C
        (0xF0909E9D, 0, &[0xEA9E8E]), // U+1079D
        (0xF0909E9E, 0, &[0xC9AE]), // U+1079E
        (0xF0909E9F, 0, &[0xF09DBC85]), // U+1079F
        (0xF0909EA0, 0, &[0xCA8E]), // U+107A0
        (0xF0909EA1, 0, &[0xF09DBC86]), // U+107A1
        (0xF0909EA2, 0, &[0xC3B8]), // U+107A2
        (0xF0909EA3, 0, &[0xC9B6]), // U+107A3
        (0xF0909EA4, 0, &[0xC9B7]), // U+107A4
        (0xF0909EA5, 0, &[0x71]), // U+107A5
        (0xF0909EA6, 0, &[0xC9BA]), // U+107A6
        (0xF0909EA7, 0, &[0xF09DBC88]), // U+107A7
        (0xF0909EA8, 0, &[0xC9BD]), // U+107A8
        (0xF0909EA9, 0, &[0xC9BE]), // U+107A9
        (0xF0909EAA, 0, &[0xCA80]), // U+107AA
        (0xF0909EAB, 0, &[0xCAA8]), // U+107AB
        (0xF0909EAC, 0, &[0xCAA6]), // U+107AC
        (0xF0909EAD, 0, &[0xEAADA7]), // U+107AD
        (0xF0909EAE, 0, &[0xCAA7]), // U+107AE
        (0xF0909EAF, 0, &[0xCA88]), // U+107AF
        (0xF0909EB0, 0, &[0xE2B1B1]), // U+107B0
        (0xF0909EB2, 0, &[0xCA8F]), // U+107B2
        (0xF0909EB3, 0, &[0xCAA1]), // U+107B3
        (0xF0909EB4, 0, &[0xCAA2]), // U+107B4
        (0xF0909EB5, 0, &[0xCA98]), // U+107B5
        (0xF0909EB6, 0, &[0xC780]), // U+107B6
        (0xF0909EB7, 0, &[0xC781]), // U+107B7
        (0xF0909EB8, 0, &[0xC782]), // U+107B8
        (0xF0909EB9, 0, &[0xF09DBC8A]), // U+107B9
        (0xF0909EBA, 0, &[0xF09DBC9E]), // U+107BA
        (0xF090A88D, 220, &[]), // U+10A0D
        (0xF090A88F, 230, &[]), // U+10A0F
        (0xF090A8B8, 230, &[]), // U+10A38
        (0xF090A8B9, 1, &[]), // U+10A39
        (0xF090A8BA, 220, &[]), // U+10A3A
        (0xF090A8BF, 9, &[]), // U+10A3F
        (0xF090ABA5, 230, &[]), // U+10AE5
        (0xF090ABA6, 220, &[]), // U+10AE6
        (0xF090B4A4, 230, &[]), // U+10D24
        (0xF090B4A5, 230, &[]), // U+10D25
        (0xF090B4A6, 230, &[]), // U+10D26
        (0xF090B4A7, 230, &[]), // U+10D27
        (0xF090BAAB, 230, &[]), // U+10EAB
        (0xF090BAAC, 230, &[]), // U+10EAC
        (0xF090BD86, 220, &[]), // U+10F46
        (0xF090BD87, 220, &[]), // U+10F47
        (0xF090BD88, 230, &[]), // U+10F48
        (0xF090BD89, 230, &[]), // U+10F49
        (0xF090BD8A, 230, &[]), // U+10F4A
        (0xF090BD8B, 220, &[]), // U+10F4B
        (0xF090BD8C, 230, &[]), // U+10F4C
        (0xF090BD8D, 220, &[]), // U+10F4D
        (0xF090BD8E, 220, &[]), // U+10F4E
        (0xF090BD8F, 220, &[]), // U+10F4F
        (0xF090BD90, 220, &[]), // U+10F50
        (0xF090BE82, 230, &[]), // U+10F82
        (0xF090BE83, 220, &[]), // U+10F83
        (0xF090BE84, 230, &[]), // U+10F84
        (0xF090BE85, 220, &[]), // U+10F85
        (0xF0918186, 9, &[]), // U+11046
        (0xF09181B0, 9, &[]), // U+11070
        (0xF09181BF, 9, &[]), // U+1107F
        (0xF091829A, 0, &[0xF0918299, 0xF09182BA]), // U+1109A
        (0xF091829C, 0, &[0xF091829B, 0xF09182BA]), // U+1109C
        (0xF09182AB, 0, &[0xF09182A5, 0xF09182BA]), // U+110AB
        (0xF09182B9, 9, &[]), // U+110B9
        (0xF09182BA, 7, &[]), // U+110BA
        (0xF0918480, 230, &[]), // U+11100
        (0xF0918481, 230, &[]), // U+11101
        (0xF0918482, 230, &[]), // U+11102
        (0xF09184AE, 0, &[0xF09184B1, 0xF09184A7]), // U+1112E
        (0xF09184AF, 0, &[0xF09184B2, 0xF09184A7]), // U+1112F
        (0xF09184B3, 9, &[]), // U+11133
        (0xF09184B4, 9, &[]), // U+11134
        (0xF09185B3, 7, &[]), // U+11173
        (0xF0918780, 9, &[]), // U+111C0
        (0xF091878A, 7, &[]), // U+111CA
        (0xF09188B5, 9, &[]), // U+11235
        (0xF09188B6, 7, &[]), // U+11236
        (0xF0918BA9, 7, &[]), // U+112E9
        (0xF0918BAA, 9, &[]), // U+112EA
        (0xF0918CBB, 7, &[]), // U+1133B
        (0xF0918CBC, 7, &[]), // U+1133C
        (0xF0918D8B, 0, &[0xF0918D87, 0xF0918CBE]), // U+1134B
        (0xF0918D8C, 0, &[0xF0918D87, 0xF0918D97]), // U+1134C
        (0xF0918D8D, 9, &[]), // U+1134D
        (0xF0918DA6, 230, &[]), // U+11366
        (0xF0918DA7, 230, &[]), // U+11367
        (0xF0918DA8, 230, &[]), // U+11368
        (0xF0918DA9, 230, &[]), // U+11369
        (0xF0918DAA, 230, &[]), // U+1136A
        (0xF0918DAB, 230, &[]), // U+1136B
        (0xF0918DAC, 230, &[]), // U+1136C
        (0xF0918DB0, 230, &[]), // U+11370
        (0xF0918DB1, 230, &[]), // U+11371
        (0xF0918DB2, 230, &[]), // U+11372
        (0xF0918DB3, 230, &[]), // U+11373
        (0xF0918DB4, 230, &[]), // U+11374
        (0xF0919182, 9, &[]), // U+11442
        (0xF0919186, 7, &[]), // U+11446
        (0xF091919E, 230, &[]), // U+1145E
        (0xF09192BB, 0, &[0xF09192B9, 0xF09192BA]), // U+114BB
        (0xF09192BC, 0, &[0xF09192B9, 0xF09192B0]), // U+114BC
        (0xF09192BE, 0, &[0xF09192B9, 0xF09192BD]), // U+114BE
        (0xF0919382, 9, &[]), // U+114C2
        (0xF0919383, 7, &[]), // U+114C3
        (0xF09196BA, 0, &[0xF09196B8, 0xF09196AF]), // U+115BA
        (0xF09196BB, 0, &[0xF09196B9, 0xF09196AF]), // U+115BB
        (0xF09196BF, 9, &[]), // U+115BF
        (0xF0919780, 7, &[]), // U+115C0
        (0xF09198BF, 9, &[]), // U+1163F
        (0xF0919AB6, 9, &[]), // U+116B6
        (0xF0919AB7, 7, &[]), // U+116B7
        (0xF0919CAB, 9, &[]), // U+1172B
        (0xF091A0B9, 9, &[]), // U+11839
        (0xF091A0BA, 7, &[]), // U+1183A
        (0xF091A4B8, 0, &[0xF091A4B5, 0xF091A4B0]), // U+11938
        (0xF091A4BD, 9, &[]), // U+1193D
        (0xF091A4BE, 9, &[]), // U+1193E
        (0xF091A583, 7, &[]), // U+11943
        (0xF091A7A0, 9, &[]), // U+119E0
        (0xF091A8B4, 9, &[]), // U+11A34
        (0xF091A987, 9, &[]), // U+11A47
        (0xF091AA99, 9, &[]), // U+11A99
        (0xF091B0BF, 9, &[]), // U+11C3F
        (0xF091B582, 7, &[]), // U+11D42
        (0xF091B584, 9, &[]), // U+11D44
        (0xF091B585, 9, &[]), // U+11D45
        (0xF091B697, 9, &[]), // U+11D97
        (0xF096ABB0, 1, &[]), // U+16AF0
        (0xF096ABB1, 1, &[]), // U+16AF1
        (0xF096ABB2, 1, &[]), // U+16AF2
        (0xF096ABB3, 1, &[]), // U+16AF3
        (0xF096ABB4, 1, &[]), // U+16AF4
        (0xF096ACB0, 230, &[]), // U+16B30
        (0xF096ACB1, 230, &[]), // U+16B31
        (0xF096ACB2, 230, &[]), // U+16B32
        (0xF096ACB3, 230, &[]), // U+16B33
        (0xF096ACB4, 230, &[]), // U+16B34
        (0xF096ACB5, 230, &[]), // U+16B35
        (0xF096ACB6, 230, &[]), // U+16B36
        (0xF096BFB0, 6, &[]), // U+16FF0
        (0xF096BFB1, 6, &[]), // U+16FF1
        (0xF09BB29E, 1, &[]), // U+1BC9E
        (0xF09D859E, 0, &[0xF09D8597, 0xF09D85A5]), // U+1D15E
        (0xF09D859F, 0, &[0xF09D8598, 0xF09D85A5]), // U+1D15F
        (0xF09D85A0, 0, &[0xF09D859F, 0xF09D85AE]), // U+1D160
        (0xF09D85A1, 0, &[0xF09D859F, 0xF09D85AF]), // U+1D161
        (0xF09D85A2, 0, &[0xF09D859F, 0xF09D85B0]), // U+1D162
        (0xF09D85A3, 0, &[0xF09D859F, 0xF09D85B1]), // U+1D163
        (0xF09D85A4, 0, &[0xF09D859F, 0xF09D85B2]), // U+1D164
        (0xF09D85A5, 216, &[]), // U+1D165
        (0xF09D85A6, 216, &[]), // U+1D166
        (0xF09D85A7, 1, &[]), // U+1D167
        (0xF09D85A8, 1, &[]), // U+1D168
        (0xF09D85A9, 1, &[]), // U+1D169
        (0xF09D85AD, 226, &[]), // U+1D16D
        (0xF09D85AE, 216, &[]), // U+1D16E
        (0xF09D85AF, 216, &[]), // U+1D16F
        (0xF09D85B0, 216, &[]), // U+1D170
        (0xF09D85B1, 216, &[]), // U+1D171
        (0xF09D85B2, 216, &[]), // U+1D172
        (0xF09D85BB, 220, &[]), // U+1D17B
        (0xF09D85BC, 220, &[]), // U+1D17C
        (0xF09D85BD, 220, &[]), // U+1D17D
        (0xF09D85BE, 220, &[]), // U+1D17E
        (0xF09D85BF, 220, &[]), // U+1D17F
        (0xF09D8680, 220, &[]), // U+1D180
        (0xF09D8681, 220, &[]), // U+1D181
        (0xF09D8682, 220, &[]), // U+1D182
        (0xF09D8685, 230, &[]), // U+1D185
        (0xF09D8686, 230, &[]), // U+1D186
        (0xF09D8687, 230, &[]), // U+1D187
        (0xF09D8688, 230, &[]), // U+1D188
        (0xF09D8689, 230, &[]), // U+1D189
        (0xF09D868A, 220, &[]), // U+1D18A
        (0xF09D868B, 220, &[]), // U+1D18B
        (0xF09D86AA, 230, &[]), // U+1D1AA
        (0xF09D86AB, 230, &[]), // U+1D1AB
        (0xF09D86AC, 230, &[]), // U+1D1AC
        (0xF09D86AD, 230, &[]), // U+1D1AD
        (0xF09D86BB, 0, &[0xF09D86B9, 0xF09D85A5]), // U+1D1BB
        (0xF09D86BC, 0, &[0xF09D86BA, 0xF09D85A5]), // U+1D1BC
        (0xF09D86BD, 0, &[0xF09D86BB, 0xF09D85AE]), // U+1D1BD
        (0xF09D86BE, 0, &[0xF09D86BC, 0xF09D85AE]), // U+1D1BE
        (0xF09D86BF, 0, &[0xF09D86BB, 0xF09D85AF]), // U+1D1BF
        (0xF09D8780, 0, &[0xF09D86BC, 0xF09D85AF]), // U+1D1C0
        (0xF09D8982, 230, &[]), // U+1D242
        (0xF09D8983, 230, &[]), // U+1D243
        (0xF09D8984, 230, &[]), // U+1D244
        (0xF09D9080, 0, &[0x41]), // U+1D400
        (0xF09D9081, 0, &[0x42]), // U+1D401
        (0xF09D9082, 0, &[0x43]), // U+1D402
        (0xF09D9083, 0, &[0x44]), // U+1D403
        (0xF09D9084, 0, &[0x45]), // U+1D404
        (0xF09D9085, 0, &[0x46]), // U+1D405
        (0xF09D9086, 0, &[0x47]), // U+1D406
        (0xF09D9087, 0, &[0x48]), // U+1D407
        (0xF09D9088, 0, &[0x49]), // U+1D408
        (0xF09D9089, 0, &[0x4A]), // U+1D409
        (0xF09D908A, 0, &[0x4B]), // U+1D40A
        (0xF09D908B, 0, &[0x4C]), // U+1D40B
        (0xF09D908C, 0, &[0x4D]), // U+1D40C
        (0xF09D908D, 0, &[0x4E]), // U+1D40D
        (0xF09D908E, 0, &[0x4F]), // U+1D40E
        (0xF09D908F, 0, &[0x50]), // U+1D40F
        (0xF09D9090, 0, &[0x51]), // U+1D410
        (0xF09D9091, 0, &[0x52]), // U+1D411
        (0xF09D9092, 0, &[0x53]), // U+1D412
        (0xF09D9093, 0, &[0x54]), // U+1D413
        (0xF09D9094, 0, &[0x55]), // U+1D414
        (0xF09D9095, 0, &[0x56]), // U+1D415
        (0xF09D9096, 0, &[0x57]), // U+1D416
        (0xF09D9097, 0, &[0x58]), // U+1D417
        (0xF09D9098, 0, &[0x59]), // U+1D418
        (0xF09D9099, 0, &[0x5A]), // U+1D419
        (0xF09D909A, 0, &[0x61]), // U+1D41A
        (0xF09D909B, 0, &[0x62]), // U+1D41B
        (0xF09D909C, 0, &[0x63]), // U+1D41C
        (0xF09D909D, 0, &[0x64]), // U+1D41D
        (0xF09D909E, 0, &[0x65]), // U+1D41E
        (0xF09D909F, 0, &[0x66]), // U+1D41F
        (0xF09D90A0, 0, &[0x67]), // U+1D420
        (0xF09D90A1, 0, &[0x68]), // U+1D421
        (0xF09D90A2, 0, &[0x69]), // U+1D422
        (0xF09D90A3, 0, &[0x6A]), // U+1D423
        (0xF09D90A4, 0, &[0x6B]), // U+1D424
        (0xF09D90A5, 0, &[0x6C]), // U+1D425
        (0xF09D90A6, 0, &[0x6D]), // U+1D426
        (0xF09D90A7, 0, &[0x6E]), // U+1D427
        (0xF09D90A8, 0, &[0x6F]), // U+1D428
        (0xF09D90A9, 0, &[0x70]), // U+1D429
        (0xF09D90AA, 0, &[0x71]), // U+1D42A
        (0xF09D90AB, 0, &[0x72]), // U+1D42B
        (0xF09D90AC, 0, &[0x73]), // U+1D42C
        (0xF09D90AD, 0, &[0x74]), // U+1D42D
        (0xF09D90AE, 0, &[0x75]), // U+1D42E
        (0xF09D90AF, 0, &[0x76]), // U+1D42F
        (0xF09D90B0, 0, &[0x77]), // U+1D430
        (0xF09D90B1, 0, &[0x78]), // U+1D431
        (0xF09D90B2, 0, &[0x79]), // U+1D432
        (0xF09D90B3, 0, &[0x7A]), // U+1D433
        (0xF09D90B4, 0, &[0x41]), // U+1D434
        (0xF09D90B5, 0, &[0x42]), // U+1D435
        (0xF09D90B6, 0, &[0x43]), // U+1D436
        (0xF09D90B7, 0, &[0x44]), // U+1D437
        (0xF09D90B8, 0, &[0x45]), // U+1D438
        (0xF09D90B9, 0, &[0x46]), // U+1D439
        (0xF09D90BA, 0, &[0x47]), // U+1D43A
        (0xF09D90BB, 0, &[0x48]), // U+1D43B
        (0xF09D90BC, 0, &[0x49]), // U+1D43C
        (0xF09D90BD, 0, &[0x4A]), // U+1D43D
        (0xF09D90BE, 0, &[0x4B]), // U+1D43E
        (0xF09D90BF, 0, &[0x4C]), // U+1D43F
        (0xF09D9180, 0, &[0x4D]), // U+1D440
        (0xF09D9181, 0, &[0x4E]), // U+1D441
        (0xF09D9182, 0, &[0x4F]), // U+1D442
        (0xF09D9183, 0, &[0x50]), // U+1D443
        (0xF09D9184, 0, &[0x51]), // U+1D444
        (0xF09D9185, 0, &[0x52]), // U+1D445
        (0xF09D9186, 0, &[0x53]), // U+1D446
        (0xF09D9187, 0, &[0x54]), // U+1D447
        (0xF09D9188, 0, &[0x55]), // U+1D448
        (0xF09D9189, 0, &[0x56]), // U+1D449
        (0xF09D918A, 0, &[0x57]), // U+1D44A
        (0xF09D918B, 0, &[0x58]), // U+1D44B
        (0xF09D918C, 0, &[0x59]), // U+1D44C
        (0xF09D918D, 0, &[0x5A]), // U+1D44D
        (0xF09D918E, 0, &[0x61]), // U+1D44E
        (0xF09D918F, 0, &[0x62]), // U+1D44F
        (0xF09D9190, 0, &[0x63]), // U+1D450
        (0xF09D9191, 0, &[0x64]), // U+1D451
        (0xF09D9192, 0, &[0x65]), // U+1D452
        (0xF09D9193, 0, &[0x66]), // U+1D453
        (0xF09D9194, 0, &[0x67]), // U+1D454
        (0xF09D9196, 0, &[0x69]), // U+1D456
        (0xF09D9197, 0, &[0x6A]), // U+1D457
        (0xF09D9198, 0, &[0x6B]), // U+1D458
        (0xF09D9199, 0, &[0x6C]), // U+1D459
        (0xF09D919A, 0, &[0x6D]), // U+1D45A
        (0xF09D919B, 0, &[0x6E]), // U+1D45B
        (0xF09D919C, 0, &[0x6F]), // U+1D45C
        (0xF09D919D, 0, &[0x70]), // U+1D45D
        (0xF09D919E, 0, &[0x71]), // U+1D45E
        (0xF09D919F, 0, &[0x72]), // U+1D45F
        (0xF09D91A0, 0, &[0x73]), // U+1D460
        (0xF09D91A1, 0, &[0x74]), // U+1D461
        (0xF09D91A2, 0, &[0x75]), // U+1D462
        (0xF09D91A3, 0, &[0x76]), // U+1D463
        (0xF09D91A4, 0, &[0x77]), // U+1D464
        (0xF09D91A5, 0, &[0x78]), // U+1D465
        (0xF09D91A6, 0, &[0x79]), // U+1D466
        (0xF09D91A7, 0, &[0x7A]), // U+1D467
        (0xF09D91A8, 0, &[0x41]), // U+1D468
        (0xF09D91A9, 0, &[0x42]), // U+1D469
        (0xF09D91AA, 0, &[0x43]), // U+1D46A
        (0xF09D91AB, 0, &[0x44]), // U+1D46B
        (0xF09D91AC, 0, &[0x45]), // U+1D46C
        (0xF09D91AD, 0, &[0x46]), // U+1D46D
        (0xF09D91AE, 0, &[0x47]), // U+1D46E
        (0xF09D91AF, 0, &[0x48]), // U+1D46F
        (0xF09D91B0, 0, &[0x49]), // U+1D470
        (0xF09D91B1, 0, &[0x4A]), // U+1D471
        (0xF09D91B2, 0, &[0x4B]), // U+1D472
        (0xF09D91B3, 0, &[0x4C]), // U+1D473
        (0xF09D91B4, 0, &[0x4D]), // U+1D474
        (0xF09D91B5, 0, &[0x4E]), // U+1D475
        (0xF09D91B6, 0, &[0x4F]), // U+1D476
        (0xF09D91B7, 0, &[0x50]), // U+1D477
        (0xF09D91B8, 0, &[0x51]), // U+1D478
        (0xF09D91B9, 0, &[0x52]), // U+1D479
        (0xF09D91BA, 0, &[0x53]), // U+1D47A
        (0xF09D91BB, 0, &[0x54]), // U+1D47B
        (0xF09D91BC, 0, &[0x55]), // U+1D47C
        (0xF09D91BD, 0, &[0x56]), // U+1D47D
        (0xF09D91BE, 0, &[0x57]), // U+1D47E
        (0xF09D91BF, 0, &[0x58]), // U+1D47F
        (0xF09D9280, 0, &[0x59]), // U+1D480
        (0xF09D9281, 0, &[0x5A]), // U+1D481
        (0xF09D9282, 0, &[0x61]), // U+1D482
        (0xF09D9283, 0, &[0x62]), // U+1D483
        (0xF09D9284, 0, &[0x63]), // U+1D484
        (0xF09D9285, 0, &[0x64]), // U+1D485
        (0xF09D9286, 0, &[0x65]), // U+1D486
        (0xF09D9287, 0, &[0x66]), // U+1D487
        (0xF09D9288, 0, &[0x67]), // U+1D488
        (0xF09D9289, 0, &[0x68]), // U+1D489
        (0xF09D928A, 0, &[0x69]), // U+1D48A
        (0xF09D928B, 0, &[0x6A]), // U+1D48B
        (0xF09D928C, 0, &[0x6B]), // U+1D48C
        (0xF09D928D, 0, &[0x6C]), // U+1D48D
        (0xF09D928E, 0, &[0x6D]), // U+1D48E
        (0xF09D928F, 0, &[0x6E]), // U+1D48F
        (0xF09D9290, 0, &[0x6F]), // U+1D490
        (0xF09D9291, 0, &[0x70]), // U+1D491
        (0xF09D9292, 0, &[0x71]), // U+1D492
        (0xF09D9293, 0, &[0x72]), // U+1D493
        (0xF09D9294, 0, &[0x73]), // U+1D494
        (0xF09D9295, 0, &[0x74]), // U+1D495
        (0xF09D9296, 0, &[0x75]), // U+1D496
        (0xF09D9297, 0, &[0x76]), // U+1D497
        (0xF09D9298, 0, &[0x77]), // U+1D498
        (0xF09D9299, 0, &[0x78]), // U+1D499
        (0xF09D929A, 0, &[0x79]), // U+1D49A
        (0xF09D929B, 0, &[0x7A]), // U+1D49B
        (0xF09D929C, 0, &[0x41]), // U+1D49C
        (0xF09D929E, 0, &[0x43]), // U+1D49E
        (0xF09D929F, 0, &[0x44]), // U+1D49F
        (0xF09D92A2, 0, &[0x47]), // U+1D4A2
        (0xF09D92A5, 0, &[0x4A]), // U+1D4A5
        (0xF09D92A6, 0, &[0x4B]), // U+1D4A6
        (0xF09D92A9, 0, &[0x4E]), // U+1D4A9
        (0xF09D92AA, 0, &[0x4F]), // U+1D4AA
        (0xF09D92AB, 0, &[0x50]), // U+1D4AB
        (0xF09D92AC, 0, &[0x51]), // U+1D4AC
        (0xF09D92AE, 0, &[0x53]), // U+1D4AE
        (0xF09D92AF, 0, &[0x54]), // U+1D4AF
        (0xF09D92B0, 0, &[0x55]), // U+1D4B0
        (0xF09D92B1, 0, &[0x56]), // U+1D4B1
        (0xF09D92B2, 0, &[0x57]), // U+1D4B2
        (0xF09D92B3, 0, &[0x58]), // U+1D4B3
        (0xF09D92B4, 0, &[0x59]), // U+1D4B4
        (0xF09D92B5, 0, &[0x5A]), // U+1D4B5
        (0xF09D92B6, 0, &[0x61]), // U+1D4B6
        (0xF09D92B7, 0, &[0x62]), // U+1D4B7
        (0xF09D92B8, 0, &[0x63]), // U+1D4B8
        (0xF09D92B9, 0, &[0x64]), // U+1D4B9
        (0xF09D92BB, 0, &[0x66]), // U+1D4BB
        (0xF09D92BD, 0, &[0x68]), // U+1D4BD
        (0xF09D92BE, 0, &[0x69]), // U+1D4BE
        (0xF09D92BF, 0, &[0x6A]), // U+1D4BF
        (0xF09D9380, 0, &[0x6B]), // U+1D4C0
        (0xF09D9381, 0, &[0x6C]), // U+1D4C1
        (0xF09D9382, 0, &[0x6D]), // U+1D4C2
        (0xF09D9383, 0, &[0x6E]), // U+1D4C3
        (0xF09D9385, 0, &[0x70]), // U+1D4C5
        (0xF09D9386, 0, &[0x71]), // U+1D4C6
        (0xF09D9387, 0, &[0x72]), // U+1D4C7
        (0xF09D9388, 0, &[0x73]), // U+1D4C8
        (0xF09D9389, 0, &[0x74]), // U+1D4C9
        (0xF09D938A, 0, &[0x75]), // U+1D4CA
        (0xF09D938B, 0, &[0x76]), // U+1D4CB
        (0xF09D938C, 0, &[0x77]), // U+1D4CC
        (0xF09D938D, 0, &[0x78]), // U+1D4CD
        (0xF09D938E, 0, &[0x79]), // U+1D4CE
        (0xF09D938F, 0, &[0x7A]), // U+1D4CF
        (0xF09D9390, 0, &[0x41]), // U+1D4D0
        (0xF09D9391, 0, &[0x42]), // U+1D4D1
        (0xF09D9392, 0, &[0x43]), // U+1D4D2
        (0xF09D9393, 0, &[0x44]), // U+1D4D3
        (0xF09D9394, 0, &[0x45]), // U+1D4D4
        (0xF09D9395, 0, &[0x46]), // U+1D4D5
        (0xF09D9396, 0, &[0x47]), // U+1D4D6
        (0xF09D9397, 0, &[0x48]), // U+1D4D7
        (0xF09D9398, 0, &[0x49]), // U+1D4D8
        (0xF09D9399, 0, &[0x4A]), // U+1D4D9
        (0xF09D939A, 0, &[0x4B]), // U+1D4DA
        (0xF09D939B, 0, &[0x4C]), // U+1D4DB
        (0xF09D939C, 0, &[0x4D]), // U+1D4DC
        (0xF09D939D, 0, &[0x4E]), // U+1D4DD
        (0xF09D939E, 0, &[0x4F]), // U+1D4DE
        (0xF09D939F, 0, &[0x50]), // U+1D4DF
        (0xF09D93A0, 0, &[0x51]), // U+1D4E0
        (0xF09D93A1, 0, &[0x52]), // U+1D4E1
        (0xF09D93A2, 0, &[0x53]), // U+1D4E2
        (0xF09D93A3, 0, &[0x54]), // U+1D4E3
        (0xF09D93A4, 0, &[0x55]), // U+1D4E4
        (0xF09D93A5, 0, &[0x56]), // U+1D4E5
        (0xF09D93A6, 0, &[0x57]), // U+1D4E6
        (0xF09D93A7, 0, &[0x58]), // U+1D4E7
        (0xF09D93A8, 0, &[0x59]), // U+1D4E8
        (0xF09D93A9, 0, &[0x5A]), // U+1D4E9
        (0xF09D93AA, 0, &[0x61]), // U+1D4EA
        (0xF09D93AB, 0, &[0x62]), // U+1D4EB
        (0xF09D93AC, 0, &[0x63]), // U+1D4EC
        (0xF09D93AD, 0, &[0x64]), // U+1D4ED
        (0xF09D93AE, 0, &[0x65]), // U+1D4EE
        (0xF09D93AF, 0, &[0x66]), // U+1D4EF
        (0xF09D93B0, 0, &[0x67]), // U+1D4F0
        (0xF09D93B1, 0, &[0x68]), // U+1D4F1
        (0xF09D93B2, 0, &[0x69]), // U+1D4F2
        (0xF09D93B3, 0, &[0x6A]), // U+1D4F3
        (0xF09D93B4, 0, &[0x6B]), // U+1D4F4
        (0xF09D93B5, 0, &[0x6C]), // U+1D4F5
        (0xF09D93B6, 0, &[0x6D]), // U+1D4F6
        (0xF09D93B7, 0, &[0x6E]), // U+1D4F7
        (0xF09D93B8, 0, &[0x6F]), // U+1D4F8
        (0xF09D93B9, 0, &[0x70]), // U+1D4F9
        (0xF09D93BA, 0, &[0x71]), // U+1D4FA
        (0xF09D93BB, 0, &[0x72]), // U+1D4FB
        (0xF09D93BC, 0, &[0x73]), // U+1D4FC
        (0xF09D93BD, 0, &[0x74]), // U+1D4FD
        (0xF09D93BE, 0, &[0x75]), // U+1D4FE
        (0xF09D93BF, 0, &[0x76]), // U+1D4FF
        (0xF09D9480, 0, &[0x77]), // U+1D500
        (0xF09D9481, 0, &[0x78]), // U+1D501
        (0xF09D9482, 0, &[0x79]), // U+1D502
        (0xF09D9483, 0, &[0x7A]), // U+1D503
        (0xF09D9484, 0, &[0x41]), // U+1D504
        (0xF09D9485, 0, &[0x42]), // U+1D505
        (0xF09D9487, 0, &[0x44]), // U+1D507
        (0xF09D9488, 0, &[0x45]), // U+1D508
        (0xF09D9489, 0, &[0x46]), // U+1D509
        (0xF09D948A, 0, &[0x47]), // U+1D50A
        (0xF09D948D, 0, &[0x4A]), // U+1D50D
        (0xF09D948E, 0, &[0x4B]), // U+1D50E
        (0xF09D948F, 0, &[0x4C]), // U+1D50F
        (0xF09D9490, 0, &[0x4D]), // U+1D510
        (0xF09D9491, 0, &[0x4E]), // U+1D511
        (0xF09D9492, 0, &[0x4F]), // U+1D512
        (0xF09D9493, 0, &[0x50]), // U+1D513
        (0xF09D9494, 0, &[0x51]), // U+1D514
        (0xF09D9496, 0, &[0x53]), // U+1D516
        (0xF09D9497, 0, &[0x54]), // U+1D517
        (0xF09D9498, 0, &[0x55]), // U+1D518
        (0xF09D9499, 0, &[0x56]), // U+1D519
        (0xF09D949A, 0, &[0x57]), // U+1D51A
        (0xF09D949B, 0, &[0x58]), // U+1D51B
        (0xF09D949C, 0, &[0x59]), // U+1D51C
        (0xF09D949E, 0, &[0x61]), // U+1D51E
        (0xF09D949F, 0, &[0x62]), // U+1D51F
        (0xF09D94A0, 0, &[0x63]), // U+1D520
        (0xF09D94A1, 0, &[0x64]), // U+1D521
        (0xF09D94A2, 0, &[0x65]), // U+1D522
        (0xF09D94A3, 0, &[0x66]), // U+1D523
        (0xF09D94A4, 0, &[0x67]), // U+1D524
        (0xF09D94A5, 0, &[0x68]), // U+1D525
        (0xF09D94A6, 0, &[0x69]), // U+1D526
        (0xF09D94A7, 0, &[0x6A]), // U+1D527
        (0xF09D94A8, 0, &[0x6B]), // U+1D528
        (0xF09D94A9, 0, &[0x6C]), // U+1D529
        (0xF09D94AA, 0, &[0x6D]), // U+1D52A
        (0xF09D94AB, 0, &[0x6E]), // U+1D52B
        (0xF09D94AC, 0, &[0x6F]), // U+1D52C
        (0xF09D94AD, 0, &[0x70]), // U+1D52D
        (0xF09D94AE, 0, &[0x71]), // U+1D52E
        (0xF09D94AF, 0, &[0x72]), // U+1D52F
        (0xF09D94B0, 0, &[0x73]), // U+1D530
        (0xF09D94B1, 0, &[0x74]), // U+1D531
        (0xF09D94B2, 0, &[0x75]), // U+1D532
        (0xF09D94B3, 0, &[0x76]), // U+1D533
        (0xF09D94B4, 0, &[0x77]), // U+1D534
        (0xF09D94B5, 0, &[0x78]), // U+1D535
        (0xF09D94B6, 0, &[0x79]), // U+1D536
        (0xF09D94B7, 0, &[0x7A]), // U+1D537
        (0xF09D94B8, 0, &[0x41]), // U+1D538
        (0xF09D94B9, 0, &[0x42]), // U+1D539
        (0xF09D94BB, 0, &[0x44]), // U+1D53B
        (0xF09D94BC, 0, &[0x45]), // U+1D53C
        (0xF09D94BD, 0, &[0x46]), // U+1D53D
        (0xF09D94BE, 0, &[0x47]), // U+1D53E
        (0xF09D9580, 0, &[0x49]), // U+1D540
        (0xF09D9581, 0, &[0x4A]), // U+1D541
        (0xF09D9582, 0, &[0x4B]), // U+1D542
        (0xF09D9583, 0, &[0x4C]), // U+1D543
        (0xF09D9584, 0, &[0x4D]), // U+1D544
        (0xF09D9586, 0, &[0x4F]), // U+1D546
        (0xF09D958A, 0, &[0x53]), // U+1D54A
        (0xF09D958B, 0, &[0x54]), // U+1D54B
        (0xF09D958C, 0, &[0x55]), // U+1D54C
        (0xF09D958D, 0, &[0x56]), // U+1D54D
        (0xF09D958E, 0, &[0x57]), // U+1D54E
        (0xF09D958F, 0, &[0x58]), // U+1D54F
        (0xF09D9590, 0, &[0x59]), // U+1D550
        (0xF09D9592, 0, &[0x61]), // U+1D552
        (0xF09D9593, 0, &[0x62]), // U+1D553
        (0xF09D9594, 0, &[0x63]), // U+1D554
        (0xF09D9595, 0, &[0x64]), // U+1D555
        (0xF09D9596, 0, &[0x65]), // U+1D556
        (0xF09D9597, 0, &[0x66]), // U+1D557
        (0xF09D9598, 0, &[0x67]), // U+1D558
        (0xF09D9599, 0, &[0x68]), // U+1D559
        (0xF09D959A, 0, &[0x69]), // U+1D55A
        (0xF09D959B, 0, &[0x6A]), // U+1D55B
        (0xF09D959C, 0, &[0x6B]), // U+1D55C
        (0xF09D959D, 0, &[0x6C]), // U+1D55D
        (0xF09D959E, 0, &[0x6D]), // U+1D55E
        (0xF09D959F, 0, &[0x6E]), // U+1D55F
        (0xF09D95A0, 0, &[0x6F]), // U+1D560
        (0xF09D95A1, 0, &[0x70]), // U+1D561
        (0xF09D95A2, 0, &[0x71]), // U+1D562
        (0xF09D95A3, 0, &[0x72]), // U+1D563
        (0xF09D95A4, 0, &[0x73]), // U+1D564
        (0xF09D95A5, 0, &[0x74]), // U+1D565
        (0xF09D95A6, 0, &[0x75]), // U+1D566
        (0xF09D95A7, 0, &[0x76]), // U+1D567
        (0xF09D95A8, 0, &[0x77]), // U+1D568
        (0xF09D95A9, 0, &[0x78]), // U+1D569
        (0xF09D95AA, 0, &[0x79]), // U+1D56A
        (0xF09D95AB, 0, &[0x7A]), // U+1D56B
        (0xF09D95AC, 0, &[0x41]), // U+1D56C
        (0xF09D95AD, 0, &[0x42]), // U+1D56D
        (0xF09D95AE, 0, &[0x43]), // U+1D56E
        (0xF09D95AF, 0, &[0x44]), // U+1D56F
        (0xF09D95B0, 0, &[0x45]), // U+1D570
        (0xF09D95B1, 0, &[0x46]), // U+1D571
        (0xF09D95B2, 0, &[0x47]), // U+1D572
        (0xF09D95B3, 0, &[0x48]), // U+1D573
        (0xF09D95B4, 0, &[0x49]), // U+1D574
        (0xF09D95B5, 0, &[0x4A]), // U+1D575
        (0xF09D95B6, 0, &[0x4B]), // U+1D576
        (0xF09D95B7, 0, &[0x4C]), // U+1D577
        (0xF09D95B8, 0, &[0x4D]), // U+1D578
        (0xF09D95B9, 0, &[0x4E]), // U+1D579
        (0xF09D95BA, 0, &[0x4F]), // U+1D57A
        (0xF09D95BB, 0, &[0x50]), // U+1D57B
        (0xF09D95BC, 0, &[0x51]), // U+1D57C
        (0xF09D95BD, 0, &[0x52]), // U+1D57D
        (0xF09D95BE, 0, &[0x53]), // U+1D57E
        (0xF09D95BF, 0, &[0x54]), // U+1D57F
        (0xF09D9680, 0, &[0x55]), // U+1D580
        (0xF09D9681, 0, &[0x56]), // U+1D581
        (0xF09D9682, 0, &[0x57]), // U+1D582
        (0xF09D9683, 0, &[0x58]), // U+1D583
        (0xF09D9684, 0, &[0x59]), // U+1D584
        (0xF09D9685, 0, &[0x5A]), // U+1D585
        (0xF09D9686, 0, &[0x61]), // U+1D586
        (0xF09D9687, 0, &[0x62]), // U+1D587
        (0xF09D9688, 0, &[0x63]), // U+1D588
        (0xF09D9689, 0, &[0x64]), // U+1D589
        (0xF09D968A, 0, &[0x65]), // U+1D58A
        (0xF09D968B, 0, &[0x66]), // U+1D58B
        (0xF09D968C, 0, &[0x67]), // U+1D58C
        (0xF09D968D, 0, &[0x68]), // U+1D58D
        (0xF09D968E, 0, &[0x69]), // U+1D58E
        (0xF09D968F, 0, &[0x6A]), // U+1D58F
        (0xF09D9690, 0, &[0x6B]), // U+1D590
        (0xF09D9691, 0, &[0x6C]), // U+1D591
        (0xF09D9692, 0, &[0x6D]), // U+1D592
        (0xF09D9693, 0, &[0x6E]), // U+1D593
        (0xF09D9694, 0, &[0x6F]), // U+1D594
        (0xF09D9695, 0, &[0x70]), // U+1D595
        (0xF09D9696, 0, &[0x71]), // U+1D596
        (0xF09D9697, 0, &[0x72]), // U+1D597
        (0xF09D9698, 0, &[0x73]), // U+1D598
        (0xF09D9699, 0, &[0x74]), // U+1D599
        (0xF09D969A, 0, &[0x75]), // U+1D59A
        (0xF09D969B, 0, &[0x76]), // U+1D59B
        (0xF09D969C, 0, &[0x77]), // U+1D59C
        (0xF09D969D, 0, &[0x78]), // U+1D59D
        (0xF09D969E, 0, &[0x79]), // U+1D59E
        (0xF09D969F, 0, &[0x7A]), // U+1D59F
        (0xF09D96A0, 0, &[0x41]), // U+1D5A0
        (0xF09D96A1, 0, &[0x42]), // U+1D5A1
        (0xF09D96A2, 0, &[0x43]), // U+1D5A2
        (0xF09D96A3, 0, &[0x44]), // U+1D5A3
        (0xF09D96A4, 0, &[0x45]), // U+1D5A4
        (0xF09D96A5, 0, &[0x46]), // U+1D5A5
        (0xF09D96A6, 0, &[0x47]), // U+1D5A6
        (0xF09D96A7, 0, &[0x48]), // U+1D5A7
        (0xF09D96A8, 0, &[0x49]), // U+1D5A8
        (0xF09D96A9, 0, &[0x4A]), // U+1D5A9
        (0xF09D96AA, 0, &[0x4B]), // U+1D5AA
        (0xF09D96AB, 0, &[0x4C]), // U+1D5AB
        (0xF09D96AC, 0, &[0x4D]), // U+1D5AC
        (0xF09D96AD, 0, &[0x4E]), // U+1D5AD
        (0xF09D96AE, 0, &[0x4F]), // U+1D5AE
        (0xF09D96AF, 0, &[0x50]), // U+1D5AF
        (0xF09D96B0, 0, &[0x51]), // U+1D5B0
        (0xF09D96B1, 0, &[0x52]), // U+1D5B1
        (0xF09D96B2, 0, &[0x53]), // U+1D5B2
        (0xF09D96B3, 0, &[0x54]), // U+1D5B3
        (0xF09D96B4, 0, &[0x55]), // U+1D5B4
        (0xF09D96B5, 0, &[0x56]), // U+1D5B5
        (0xF09D96B6, 0, &[0x57]), // U+1D5B6
        (0xF09D96B7, 0, &[0x58]), // U+1D5B7
        (0xF09D96B8, 0, &[0x59]), // U+1D5B8
        (0xF09D96B9, 0, &[0x5A]), // U+1D5B9
        (0xF09D96BA, 0, &[0x61]), // U+1D5BA
        (0xF09D96BB, 0, &[0x62]), // U+1D5BB
        (0xF09D96BC, 0, &[0x63]), // U+1D5BC
        (0xF09D96BD, 0, &[0x64]), // U+1D5BD
        (0xF09D96BE, 0, &[0x65]), // U+1D5BE
        (0xF09D96BF, 0, &[0x66]), // U+1D5BF
        (0xF09D9780, 0, &[0x67]), // U+1D5C0
        (0xF09D9781, 0, &[0x68]), // U+1D5C1
        (0xF09D9782, 0, &[0x69]), // U+1D5C2
        (0xF09D9783, 0, &[0x6A]), // U+1D5C3
        (0xF09D9784, 0, &[0x6B]), // U+1D5C4
        (0xF09D9785, 0, &[0x6C]), // U+1D5C5
        (0xF09D9786, 0, &[0x6D]), // U+1D5C6
        (0xF09D9787, 0, &[0x6E]), // U+1D5C7
        (0xF09D9788, 0, &[0x6F]), // U+1D5C8
        (0xF09D9789, 0, &[0x70]), // U+1D5C9
        (0xF09D978A, 0, &[0x71]), // U+1D5CA
        (0xF09D978B, 0, &[0x72]), // U+1D5CB
        (0xF09D978C, 0, &[0x73]), // U+1D5CC
        (0xF09D978D, 0, &[0x74]), // U+1D5CD
        (0xF09D978E, 0, &[0x75]), // U+1D5CE
        (0xF09D978F, 0, &[0x76]), // U+1D5CF
        (0xF09D9790, 0, &[0x77]), // U+1D5D0
        (0xF09D9791, 0, &[0x78]), // U+1D5D1
        (0xF09D9792, 0, &[0x79]), // U+1D5D2
        (0xF09D9793, 0, &[0x7A]), // U+1D5D3
        (0xF09D9794, 0, &[0x41]), // U+1D5D4
        (0xF09D9795, 0, &[0x42]), // U+1D5D5
        (0xF09D9796, 0, &[0x43]), // U+1D5D6
        (0xF09D9797, 0, &[0x44]), // U+1D5D7
        (0xF09D9798, 0, &[0x45]), // U+1D5D8
        (0xF09D9799, 0, &[0x46]), // U+1D5D9
        (0xF09D979A, 0, &[0x47]), // U+1D5DA
        (0xF09D979B, 0, &[0x48]), // U+1D5DB
        (0xF09D979C, 0, &[0x49]), // U+1D5DC
        (0xF09D979D, 0, &[0x4A]), // U+1D5DD
        (0xF09D979E, 0, &[0x4B]), // U+1D5DE
        (0xF09D979F, 0, &[0x4C]), // U+1D5DF
        (0xF09D97A0, 0, &[0x4D]), // U+1D5E0
        (0xF09D97A1, 0, &[0x4E]), // U+1D5E1
        (0xF09D97A2, 0, &[0x4F]), // U+1D5E2
        (0xF09D97A3, 0, &[0x50]), // U+1D5E3
        (0xF09D97A4, 0, &[0x51]), // U+1D5E4
        (0xF09D97A5, 0, &[0x52]), // U+1D5E5
        (0xF09D97A6, 0, &[0x53]), // U+1D5E6
        (0xF09D97A7, 0, &[0x54]), // U+1D5E7
        (0xF09D97A8, 0, &[0x55]), // U+1D5E8
        (0xF09D97A9, 0, &[0x56]), // U+1D5E9
        (0xF09D97AA, 0, &[0x57]), // U+1D5EA
        (0xF09D97AB, 0, &[0x58]), // U+1D5EB
        (0xF09D97AC, 0, &[0x59]), // U+1D5EC
        (0xF09D97AD, 0, &[0x5A]), // U+1D5ED
        (0xF09D97AE, 0, &[0x61]), // U+1D5EE
        (0xF09D97AF, 0, &[0x62]), // U+1D5EF
        (0xF09D97B0, 0, &[0x63]), // U+1D5F0
        (0xF09D97B1, 0, &[0x64]), // U+1D5F1
        (0xF09D97B2, 0, &[0x65]), // U+1D5F2
        (0xF09D97B3, 0, &[0x66]), // U+1D5F3
        (0xF09D97B4, 0, &[0x67]), // U+1D5F4
        (0xF09D97B5, 0, &[0x68]), // U+1D5F5
        (0xF09D97B6, 0, &[0x69]), // U+1D5F6
        (0xF09D97B7, 0, &[0x6A]), // U+1D5F7
        (0xF09D97B8, 0, &[0x6B]), // U+1D5F8
        (0xF09D97B9, 0, &[0x6C]), // U+1D5F9
        (0xF09D97BA, 0, &[0x6D]), // U+1D5FA
        (0xF09D97BB, 0, &[0x6E]), // U+1D5FB
        (0xF09D97BC, 0, &[0x6F]), // U+1D5FC
        (0xF09D97BD, 0, &[0x70]), // U+1D5FD
        (0xF09D97BE, 0, &[0x71]), // U+1D5FE
        (0xF09D97BF, 0, &[0x72]), // U+1D5FF
        (0xF09D9880, 0, &[0x73]), // U+1D600
        (0xF09D9881, 0, &[0x74]), // U+1D601
        (0xF09D9882, 0, &[0x75]), // U+1D602
        (0xF09D9883, 0, &[0x76]), // U+1D603
        (0xF09D9884, 0, &[0x77]), // U+1D604
        (0xF09D9885, 0, &[0x78]), // U+1D605
        (0xF09D9886, 0, &[0x79]), // U+1D606
        (0xF09D9887, 0, &[0x7A]), // U+1D607
        (0xF09D9888, 0, &[0x41]), // U+1D608
        (0xF09D9889, 0, &[0x42]), // U+1D609
        (0xF09D988A, 0, &[0x43]), // U+1D60A
        (0xF09D988B, 0, &[0x44]), // U+1D60B
        (0xF09D988C, 0, &[0x45]), // U+1D60C
        (0xF09D988D, 0, &[0x46]), // U+1D60D
        (0xF09D988E, 0, &[0x47]), // U+1D60E
        (0xF09D988F, 0, &[0x48]), // U+1D60F
        (0xF09D9890, 0, &[0x49]), // U+1D610
        (0xF09D9891, 0, &[0x4A]), // U+1D611
        (0xF09D9892, 0, &[0x4B]), // U+1D612
        (0xF09D9893, 0, &[0x4C]), // U+1D613
        (0xF09D9894, 0, &[0x4D]), // U+1D614
        (0xF09D9895, 0, &[0x4E]), // U+1D615
        (0xF09D9896, 0, &[0x4F]), // U+1D616
        (0xF09D9897, 0, &[0x50]), // U+1D617
        (0xF09D9898, 0, &[0x51]), // U+1D618
        (0xF09D9899, 0, &[0x52]), // U+1D619
        (0xF09D989A, 0, &[0x53]), // U+1D61A
        (0xF09D989B, 0, &[0x54]), // U+1D61B
        (0xF09D989C, 0, &[0x55]), // U+1D61C
        (0xF09D989D, 0, &[0x56]), // U+1D61D
        (0xF09D989E, 0, &[0x57]), // U+1D61E
        (0xF09D989F, 0, &[0x58]), // U+1D61F
        (0xF09D98A0, 0, &[0x59]), // U+1D620
        (0xF09D98A1, 0, &[0x5A]), // U+1D621
        (0xF09D98A2, 0, &[0x61]), // U+1D622
        (0xF09D98A3, 0, &[0x62]), // U+1D623
        (0xF09D98A4, 0, &[0x63]), // U+1D624
        (0xF09D98A5, 0, &[0x64]), // U+1D625
        (0xF09D98A6, 0, &[0x65]), // U+1D626
        (0xF09D98A7, 0, &[0x66]), // U+1D627
        (0xF09D98A8, 0, &[0x67]), // U+1D628
        (0xF09D98A9, 0, &[0x68]), // U+1D629
        (0xF09D98AA, 0, &[0x69]), // U+1D62A
        (0xF09D98AB, 0, &[0x6A]), // U+1D62B
        (0xF09D98AC, 0, &[0x6B]), // U+1D62C
        (0xF09D98AD, 0, &[0x6C]), // U+1D62D
        (0xF09D98AE, 0, &[0x6D]), // U+1D62E
        (0xF09D98AF, 0, &[0x6E]), // U+1D62F
        (0xF09D98B0, 0, &[0x6F]), // U+1D630
        (0xF09D98B1, 0, &[0x70]), // U+1D631
        (0xF09D98B2, 0, &[0x71]), // U+1D632
        (0xF09D98B3, 0, &[0x72]), // U+1D633
        (0xF09D98B4, 0, &[0x73]), // U+1D634
        (0xF09D98B5, 0, &[0x74]), // U+1D635
        (0xF09D98B6, 0, &[0x75]), // U+1D636
        (0xF09D98B7, 0, &[0x76]), // U+1D637
        (0xF09D98B8, 0, &[0x77]), // U+1D638
        (0xF09D98B9, 0, &[0x78]), // U+1D639
        (0xF09D98BA, 0, &[0x79]), // U+1D63A
        (0xF09D98BB, 0, &[0x7A]), // U+1D63B
        (0xF09D98BC, 0, &[0x41]), // U+1D63C
        (0xF09D98BD, 0, &[0x42]), // U+1D63D
        (0xF09D98BE, 0, &[0x43]), // U+1D63E
        (0xF09D98BF, 0, &[0x44]), // U+1D63F
        (0xF09D9980, 0, &[0x45]), // U+1D640
        (0xF09D9981, 0, &[0x46]), // U+1D641
        (0xF09D9982, 0, &[0x47]), // U+1D642
        (0xF09D9983, 0, &[0x48]), // U+1D643
        (0xF09D9984, 0, &[0x49]), // U+1D644
        (0xF09D9985, 0, &[0x4A]), // U+1D645
        (0xF09D9986, 0, &[0x4B]), // U+1D646
        (0xF09D9987, 0, &[0x4C]), // U+1D647
        (0xF09D9988, 0, &[0x4D]), // U+1D648
        (0xF09D9989, 0, &[0x4E]), // U+1D649
        (0xF09D998A, 0, &[0x4F]), // U+1D64A
        (0xF09D998B, 0, &[0x50]), // U+1D64B
        (0xF09D998C, 0, &[0x51]), // U+1D64C
        (0xF09D998D, 0, &[0x52]), // U+1D64D
        (0xF09D998E, 0, &[0x53]), // U+1D64E
        (0xF09D998F, 0, &[0x54]), // U+1D64F
        (0xF09D9990, 0, &[0x55]), // U+1D650
        (0xF09D9991, 0, &[0x56]), // U+1D651
        (0xF09D9992, 0, &[0x57]), // U+1D652
        (0xF09D9993, 0, &[0x58]), // U+1D653
        (0xF09D9994, 0, &[0x59]), // U+1D654
        (0xF09D9995, 0, &[0x5A]), // U+1D655
        (0xF09D9996, 0, &[0x61]), // U+1D656
        (0xF09D9997, 0, &[0x62]), // U+1D657
        (0xF09D9998, 0, &[0x63]), // U+1D658
        (0xF09D9999, 0, &[0x64]), // U+1D659
        (0xF09D999A, 0, &[0x65]), // U+1D65A
        (0xF09D999B, 0, &[0x66]), // U+1D65B
        (0xF09D999C, 0, &[0x67]), // U+1D65C
        (0xF09D999D, 0, &[0x68]), // U+1D65D
        (0xF09D999E, 0, &[0x69]), // U+1D65E
        (0xF09D999F, 0, &[0x6A]), // U+1D65F
        (0xF09D99A0, 0, &[0x6B]), // U+1D660
        (0xF09D99A1, 0, &[0x6C]), // U+1D661
        (0xF09D99A2, 0, &[0x6D]), // U+1D662
        (0xF09D99A3, 0, &[0x6E]), // U+1D663
        (0xF09D99A4, 0, &[0x6F]), // U+1D664
        (0xF09D99A5, 0, &[0x70]), // U+1D665
        (0xF09D99A6, 0, &[0x71]), // U+1D666
        (0xF09D99A7, 0, &[0x72]), // U+1D667
        (0xF09D99A8, 0, &[0x73]), // U+1D668
        (0xF09D99A9, 0, &[0x74]), // U+1D669
        (0xF09D99AA, 0, &[0x75]), // U+1D66A
        (0xF09D99AB, 0, &[0x76]), // U+1D66B
        (0xF09D99AC, 0, &[0x77]), // U+1D66C
        (0xF09D99AD, 0, &[0x78]), // U+1D66D
        (0xF09D99AE, 0, &[0x79]), // U+1D66E
        (0xF09D99AF, 0, &[0x7A]), // U+1D66F
        (0xF09D99B0, 0, &[0x41]), // U+1D670
        (0xF09D99B1, 0, &[0x42]), // U+1D671
        (0xF09D99B2, 0, &[0x43]), // U+1D672
        (0xF09D99B3, 0, &[0x44]), // U+1D673
        (0xF09D99B4, 0, &[0x45]), // U+1D674
        (0xF09D99B5, 0, &[0x46]), // U+1D675
        (0xF09D99B6, 0, &[0x47]), // U+1D676
        (0xF09D99B7, 0, &[0x48]), // U+1D677
        (0xF09D99B8, 0, &[0x49]), // U+1D678
        (0xF09D99B9, 0, &[0x4A]), // U+1D679
        (0xF09D99BA, 0, &[0x4B]), // U+1D67A
        (0xF09D99BB, 0, &[0x4C]), // U+1D67B
        (0xF09D99BC, 0, &[0x4D]), // U+1D67C
        (0xF09D99BD, 0, &[0x4E]), // U+1D67D
        (0xF09D99BE, 0, &[0x4F]), // U+1D67E
        (0xF09D99BF, 0, &[0x50]), // U+1D67F
        (0xF09D9A80, 0, &[0x51]), // U+1D680
        (0xF09D9A81, 0, &[0x52]), // U+1D681
        (0xF09D9A82, 0, &[0x53]), // U+1D682
        (0xF09D9A83, 0, &[0x54]), // U+1D683
        (0xF09D9A84, 0, &[0x55]), // U+1D684
        (0xF09D9A85, 0, &[0x56]), // U+1D685
        (0xF09D9A86, 0, &[0x57]), // U+1D686
        (0xF09D9A87, 0, &[0x58]), // U+1D687
        (0xF09D9A88, 0, &[0x59]), // U+1D688
        (0xF09D9A89, 0, &[0x5A]), // U+1D689
        (0xF09D9A8A, 0, &[0x61]), // U+1D68A
        (0xF09D9A8B, 0, &[0x62]), // U+1D68B
        (0xF09D9A8C, 0, &[0x63]), // U+1D68C
        (0xF09D9A8D, 0, &[0x64]), // U+1D68D
        (0xF09D9A8E, 0, &[0x65]), // U+1D68E
        (0xF09D9A8F, 0, &[0x66]), // U+1D68F
        (0xF09D9A90, 0, &[0x67]), // U+1D690
        (0xF09D9A91, 0, &[0x68]), // U+1D691
        (0xF09D9A92, 0, &[0x69]), // U+1D692
        (0xF09D9A93, 0, &[0x6A]), // U+1D693
        (0xF09D9A94, 0, &[0x6B]), // U+1D694
        (0xF09D9A95, 0, &[0x6C]), // U+1D695
        (0xF09D9A96, 0, &[0x6D]), // U+1D696
        (0xF09D9A97, 0, &[0x6E]), // U+1D697
        (0xF09D9A98, 0, &[0x6F]), // U+1D698
        (0xF09D9A99, 0, &[0x70]), // U+1D699
        (0xF09D9A9A, 0, &[0x71]), // U+1D69A
        (0xF09D9A9B, 0, &[0x72]), // U+1D69B
        (0xF09D9A9C, 0, &[0x73]), // U+1D69C
        (0xF09D9A9D, 0, &[0x74]), // U+1D69D
        (0xF09D9A9E, 0, &[0x75]), // U+1D69E
        (0xF09D9A9F, 0, &[0x76]), // U+1D69F
        (0xF09D9AA0, 0, &[0x77]), // U+1D6A0
        (0xF09D9AA1, 0, &[0x78]), // U+1D6A1
        (0xF09D9AA2, 0, &[0x79]), // U+1D6A2
        (0xF09D9AA3, 0, &[0x7A]), // U+1D6A3
        (0xF09D9AA4, 0, &[0xC4B1]), // U+1D6A4
        (0xF09D9AA5, 0, &[0xC8B7]), // U+1D6A5
        (0xF09D9AA8, 0, &[0xCE91]), // U+1D6A8
        (0xF09D9AA9, 0, &[0xCE92]), // U+1D6A9
        (0xF09D9AAA, 0, &[0xCE93]), // U+1D6AA
        (0xF09D9AAB, 0, &[0xCE94]), // U+1D6AB
        (0xF09D9AAC, 0, &[0xCE95]), // U+1D6AC
        (0xF09D9AAD, 0, &[0xCE96]), // U+1D6AD
        (0xF09D9AAE, 0, &[0xCE97]), // U+1D6AE
        (0xF09D9AAF, 0, &[0xCE98]), // U+1D6AF
        (0xF09D9AB0, 0, &[0xCE99]), // U+1D6B0
        (0xF09D9AB1, 0, &[0xCE9A]), // U+1D6B1
        (0xF09D9AB2, 0, &[0xCE9B]), // U+1D6B2
        (0xF09D9AB3, 0, &[0xCE9C]), // U+1D6B3
        (0xF09D9AB4, 0, &[0xCE9D]), // U+1D6B4
        (0xF09D9AB5, 0, &[0xCE9E]), // U+1D6B5
        (0xF09D9AB6, 0, &[0xCE9F]), // U+1D6B6
        (0xF09D9AB7, 0, &[0xCEA0]), // U+1D6B7
        (0xF09D9AB8, 0, &[0xCEA1]), // U+1D6B8
        (0xF09D9AB9, 0, &[0xCFB4]), // U+1D6B9
        (0xF09D9ABA, 0, &[0xCEA3]), // U+1D6BA
        (0xF09D9ABB, 0, &[0xCEA4]), // U+1D6BB
        (0xF09D9ABC, 0, &[0xCEA5]), // U+1D6BC
        (0xF09D9ABD, 0, &[0xCEA6]), // U+1D6BD
        (0xF09D9ABE, 0, &[0xCEA7]), // U+1D6BE
        (0xF09D9ABF, 0, &[0xCEA8]), // U+1D6BF
        (0xF09D9B80, 0, &[0xCEA9]), // U+1D6C0
        (0xF09D9B81, 0, &[0xE28887]), // U+1D6C1
        (0xF09D9B82, 0, &[0xCEB1]), // U+1D6C2
        (0xF09D9B83, 0, &[0xCEB2]), // U+1D6C3
        (0xF09D9B84, 0, &[0xCEB3]), // U+1D6C4
        (0xF09D9B85, 0, &[0xCEB4]), // U+1D6C5
        (0xF09D9B86, 0, &[0xCEB5]), // U+1D6C6
        (0xF09D9B87, 0, &[0xCEB6]), // U+1D6C7
        (0xF09D9B88, 0, &[0xCEB7]), // U+1D6C8
        (0xF09D9B89, 0, &[0xCEB8]), // U+1D6C9
        (0xF09D9B8A, 0, &[0xCEB9]), // U+1D6CA
        (0xF09D9B8B, 0, &[0xCEBA]), // U+1D6CB
        (0xF09D9B8C, 0, &[0xCEBB]), // U+1D6CC
        (0xF09D9B8D, 0, &[0xCEBC]), // U+1D6CD
        (0xF09D9B8E, 0, &[0xCEBD]), // U+1D6CE
        (0xF09D9B8F, 0, &[0xCEBE]), // U+1D6CF
        (0xF09D9B90, 0, &[0xCEBF]), // U+1D6D0
        (0xF09D9B91, 0, &[0xCF80]), // U+1D6D1
        (0xF09D9B92, 0, &[0xCF81]), // U+1D6D2
        (0xF09D9B93, 0, &[0xCF82]), // U+1D6D3
        (0xF09D9B94, 0, &[0xCF83]), // U+1D6D4
        (0xF09D9B95, 0, &[0xCF84]), // U+1D6D5
        (0xF09D9B96, 0, &[0xCF85]), // U+1D6D6
        (0xF09D9B97, 0, &[0xCF86]), // U+1D6D7
        (0xF09D9B98, 0, &[0xCF87]), // U+1D6D8
        (0xF09D9B99, 0, &[0xCF88]), // U+1D6D9
        (0xF09D9B9A, 0, &[0xCF89]), // U+1D6DA
        (0xF09D9B9B, 0, &[0xE28882]), // U+1D6DB
        (0xF09D9B9C, 0, &[0xCFB5]), // U+1D6DC
        (0xF09D9B9D, 0, &[0xCF91]), // U+1D6DD
        (0xF09D9B9E, 0, &[0xCFB0]), // U+1D6DE
        (0xF09D9B9F, 0, &[0xCF95]), // U+1D6DF
        (0xF09D9BA0, 0, &[0xCFB1]), // U+1D6E0
        (0xF09D9BA1, 0, &[0xCF96]), // U+1D6E1
        (0xF09D9BA2, 0, &[0xCE91]), // U+1D6E2
        (0xF09D9BA3, 0, &[0xCE92]), // U+1D6E3
        (0xF09D9BA4, 0, &[0xCE93]), // U+1D6E4
        (0xF09D9BA5, 0, &[0xCE94]), // U+1D6E5
        (0xF09D9BA6, 0, &[0xCE95]), // U+1D6E6
        (0xF09D9BA7, 0, &[0xCE96]), // U+1D6E7
        (0xF09D9BA8, 0, &[0xCE97]), // U+1D6E8
        (0xF09D9BA9, 0, &[0xCE98]), // U+1D6E9
        (0xF09D9BAA, 0, &[0xCE99]), // U+1D6EA
        (0xF09D9BAB, 0, &[0xCE9A]), // U+1D6EB
        (0xF09D9BAC, 0, &[0xCE9B]), // U+1D6EC
        (0xF09D9BAD, 0, &[0xCE9C]), // U+1D6ED
        (0xF09D9BAE, 0, &[0xCE9D]), // U+1D6EE
        (0xF09D9BAF, 0, &[0xCE9E]), // U+1D6EF
        (0xF09D9BB0, 0, &[0xCE9F]), // U+1D6F0
        (0xF09D9BB1, 0, &[0xCEA0]), // U+1D6F1
        (0xF09D9BB2, 0, &[0xCEA1]), // U+1D6F2
        (0xF09D9BB3, 0, &[0xCFB4]), // U+1D6F3
        (0xF09D9BB4, 0, &[0xCEA3]), // U+1D6F4
        (0xF09D9BB5, 0, &[0xCEA4]), // U+1D6F5
        (0xF09D9BB6, 0, &[0xCEA5]), // U+1D6F6
        (0xF09D9BB7, 0, &[0xCEA6]), // U+1D6F7
        (0xF09D9BB8, 0, &[0xCEA7]), // U+1D6F8
        (0xF09D9BB9, 0, &[0xCEA8]), // U+1D6F9
        (0xF09D9BBA, 0, &[0xCEA9]), // U+1D6FA
        (0xF09D9BBB, 0, &[0xE28887]), // U+1D6FB
        (0xF09D9BBC, 0, &[0xCEB1]), // U+1D6FC
        (0xF09D9BBD, 0, &[0xCEB2]), // U+1D6FD
        (0xF09D9BBE, 0, &[0xCEB3]), // U+1D6FE
        (0xF09D9BBF, 0, &[0xCEB4]), // U+1D6FF
        (0xF09D9C80, 0, &[0xCEB5]), // U+1D700
        (0xF09D9C81, 0, &[0xCEB6]), // U+1D701
        (0xF09D9C82, 0, &[0xCEB7]), // U+1D702
        (0xF09D9C83, 0, &[0xCEB8]), // U+1D703
        (0xF09D9C84, 0, &[0xCEB9]), // U+1D704
        (0xF09D9C85, 0, &[0xCEBA]), // U+1D705
        (0xF09D9C86, 0, &[0xCEBB]), // U+1D706
        (0xF09D9C87, 0, &[0xCEBC]), // U+1D707
        (0xF09D9C88, 0, &[0xCEBD]), // U+1D708
        (0xF09D9C89, 0, &[0xCEBE]), // U+1D709
        (0xF09D9C8A, 0, &[0xCEBF]), // U+1D70A
        (0xF09D9C8B, 0, &[0xCF80]), // U+1D70B
        (0xF09D9C8C, 0, &[0xCF81]), // U+1D70C
        (0xF09D9C8D, 0, &[0xCF82]), // U+1D70D
        (0xF09D9C8E, 0, &[0xCF83]), // U+1D70E
        (0xF09D9C8F, 0, &[0xCF84]), // U+1D70F
        (0xF09D9C90, 0, &[0xCF85]), // U+1D710
        (0xF09D9C91, 0, &[0xCF86]), // U+1D711
        (0xF09D9C92, 0, &[0xCF87]), // U+1D712
        (0xF09D9C93, 0, &[0xCF88]), // U+1D713
        (0xF09D9C94, 0, &[0xCF89]), // U+1D714
        (0xF09D9C95, 0, &[0xE28882]), // U+1D715
        (0xF09D9C96, 0, &[0xCFB5]), // U+1D716
        (0xF09D9C97, 0, &[0xCF91]), // U+1D717
        (0xF09D9C98, 0, &[0xCFB0]), // U+1D718
        (0xF09D9C99, 0, &[0xCF95]), // U+1D719
        (0xF09D9C9A, 0, &[0xCFB1]), // U+1D71A
        (0xF09D9C9B, 0, &[0xCF96]), // U+1D71B
        (0xF09D9C9C, 0, &[0xCE91]), // U+1D71C
        (0xF09D9C9D, 0, &[0xCE92]), // U+1D71D
        (0xF09D9C9E, 0, &[0xCE93]), // U+1D71E
        (0xF09D9C9F, 0, &[0xCE94]), // U+1D71F
        (0xF09D9CA0, 0, &[0xCE95]), // U+1D720
        (0xF09D9CA1, 0, &[0xCE96]), // U+1D721
        (0xF09D9CA2, 0, &[0xCE97]), // U+1D722
        (0xF09D9CA3, 0, &[0xCE98]), // U+1D723
        (0xF09D9CA4, 0, &[0xCE99]), // U+1D724
        (0xF09D9CA5, 0, &[0xCE9A]), // U+1D725
        (0xF09D9CA6, 0, &[0xCE9B]), // U+1D726
        (0xF09D9CA7, 0, &[0xCE9C]), // U+1D727
        (0xF09D9CA8, 0, &[0xCE9D]), // U+1D728
        (0xF09D9CA9, 0, &[0xCE9E]), // U+1D729
        (0xF09D9CAA, 0, &[0xCE9F]), // U+1D72A
        (0xF09D9CAB, 0, &[0xCEA0]), // U+1D72B
        (0xF09D9CAC, 0, &[0xCEA1]), // U+1D72C
        (0xF09D9CAD, 0, &[0xCFB4]), // U+1D72D
        (0xF09D9CAE, 0, &[0xCEA3]), // U+1D72E
        (0xF09D9CAF, 0, &[0xCEA4]), // U+1D72F
        (0xF09D9CB0, 0, &[0xCEA5]), // U+1D730
        (0xF09D9CB1, 0, &[0xCEA6]), // U+1D731
        (0xF09D9CB2, 0, &[0xCEA7]), // U+1D732
        (0xF09D9CB3, 0, &[0xCEA8]), // U+1D733
        (0xF09D9CB4, 0, &[0xCEA9]), // U+1D734
        (0xF09D9CB5, 0, &[0xE28887]), // U+1D735
        (0xF09D9CB6, 0, &[0xCEB1]), // U+1D736
        (0xF09D9CB7, 0, &[0xCEB2]), // U+1D737
        (0xF09D9CB8, 0, &[0xCEB3]), // U+1D738
        (0xF09D9CB9, 0, &[0xCEB4]), // U+1D739
        (0xF09D9CBA, 0, &[0xCEB5]), // U+1D73A
        (0xF09D9CBB, 0, &[0xCEB6]), // U+1D73B
        (0xF09D9CBC, 0, &[0xCEB7]), // U+1D73C
        (0xF09D9CBD, 0, &[0xCEB8]), // U+1D73D
        (0xF09D9CBE, 0, &[0xCEB9]), // U+1D73E
        (0xF09D9CBF, 0, &[0xCEBA]), // U+1D73F
        (0xF09D9D80, 0, &[0xCEBB]), // U+1D740
        (0xF09D9D81, 0, &[0xCEBC]), // U+1D741
        (0xF09D9D82, 0, &[0xCEBD]), // U+1D742
        (0xF09D9D83, 0, &[0xCEBE]), // U+1D743
        (0xF09D9D84, 0, &[0xCEBF]), // U+1D744
        (0xF09D9D85, 0, &[0xCF80]), // U+1D745
        (0xF09D9D86, 0, &[0xCF81]), // U+1D746
        (0xF09D9D87, 0, &[0xCF82]), // U+1D747
        (0xF09D9D88, 0, &[0xCF83]), // U+1D748
        (0xF09D9D89, 0, &[0xCF84]), // U+1D749
        (0xF09D9D8A, 0, &[0xCF85]), // U+1D74A
        (0xF09D9D8B, 0, &[0xCF86]), // U+1D74B
        (0xF09D9D8C, 0, &[0xCF87]), // U+1D74C
        (0xF09D9D8D, 0, &[0xCF88]), // U+1D74D
        (0xF09D9D8E, 0, &[0xCF89]), // U+1D74E
        (0xF09D9D8F, 0, &[0xE28882]), // U+1D74F
        (0xF09D9D90, 0, &[0xCFB5]), // U+1D750
        (0xF09D9D91, 0, &[0xCF91]), // U+1D751
        (0xF09D9D92, 0, &[0xCFB0]), // U+1D752
        (0xF09D9D93, 0, &[0xCF95]), // U+1D753
        (0xF09D9D94, 0, &[0xCFB1]), // U+1D754
        (0xF09D9D95, 0, &[0xCF96]), // U+1D755
        (0xF09D9D96, 0, &[0xCE91]), // U+1D756
        (0xF09D9D97, 0, &[0xCE92]), // U+1D757
        (0xF09D9D98, 0, &[0xCE93]), // U+1D758
        (0xF09D9D99, 0, &[0xCE94]), // U+1D759
        (0xF09D9D9A, 0, &[0xCE95]), // U+1D75A
        (0xF09D9D9B, 0, &[0xCE96]), // U+1D75B
        (0xF09D9D9C, 0, &[0xCE97]), // U+1D75C
        (0xF09D9D9D, 0, &[0xCE98]), // U+1D75D
        (0xF09D9D9E, 0, &[0xCE99]), // U+1D75E
        (0xF09D9D9F, 0, &[0xCE9A]), // U+1D75F
        (0xF09D9DA0, 0, &[0xCE9B]), // U+1D760
        (0xF09D9DA1, 0, &[0xCE9C]), // U+1D761
        (0xF09D9DA2, 0, &[0xCE9D]), // U+1D762
        (0xF09D9DA3, 0, &[0xCE9E]), // U+1D763
        (0xF09D9DA4, 0, &[0xCE9F]), // U+1D764
        (0xF09D9DA5, 0, &[0xCEA0]), // U+1D765
        (0xF09D9DA6, 0, &[0xCEA1]), // U+1D766
        (0xF09D9DA7, 0, &[0xCFB4]), // U+1D767
        (0xF09D9DA8, 0, &[0xCEA3]), // U+1D768
        (0xF09D9DA9, 0, &[0xCEA4]), // U+1D769
        (0xF09D9DAA, 0, &[0xCEA5]), // U+1D76A
        (0xF09D9DAB, 0, &[0xCEA6]), // U+1D76B
        (0xF09D9DAC, 0, &[0xCEA7]), // U+1D76C
        (0xF09D9DAD, 0, &[0xCEA8]), // U+1D76D
        (0xF09D9DAE, 0, &[0xCEA9]), // U+1D76E
        (0xF09D9DAF, 0, &[0xE28887]), // U+1D76F
        (0xF09D9DB0, 0, &[0xCEB1]), // U+1D770
        (0xF09D9DB1, 0, &[0xCEB2]), // U+1D771
        (0xF09D9DB2, 0, &[0xCEB3]), // U+1D772
        (0xF09D9DB3, 0, &[0xCEB4]), // U+1D773
        (0xF09D9DB4, 0, &[0xCEB5]), // U+1D774
        (0xF09D9DB5, 0, &[0xCEB6]), // U+1D775
        (0xF09D9DB6, 0, &[0xCEB7]), // U+1D776
        (0xF09D9DB7, 0, &[0xCEB8]), // U+1D777
        (0xF09D9DB8, 0, &[0xCEB9]), // U+1D778
        (0xF09D9DB9, 0, &[0xCEBA]), // U+1D779
        (0xF09D9DBA, 0, &[0xCEBB]), // U+1D77A
        (0xF09D9DBB, 0, &[0xCEBC]), // U+1D77B
        (0xF09D9DBC, 0, &[0xCEBD]), // U+1D77C
        (0xF09D9DBD, 0, &[0xCEBE]), // U+1D77D
        (0xF09D9DBE, 0, &[0xCEBF]), // U+1D77E
        (0xF09D9DBF, 0, &[0xCF80]), // U+1D77F
        (0xF09D9E80, 0, &[0xCF81]), // U+1D780
        (0xF09D9E81, 0, &[0xCF82]), // U+1D781
        (0xF09D9E82, 0, &[0xCF83]), // U+1D782
        (0xF09D9E83, 0, &[0xCF84]), // U+1D783
        (0xF09D9E84, 0, &[0xCF85]), // U+1D784
        (0xF09D9E85, 0, &[0xCF86]), // U+1D785
        (0xF09D9E86, 0, &[0xCF87]), // U+1D786
        (0xF09D9E87, 0, &[0xCF88]), // U+1D787
        (0xF09D9E88, 0, &[0xCF89]), // U+1D788
        (0xF09D9E89, 0, &[0xE28882]), // U+1D789
        (0xF09D9E8A, 0, &[0xCFB5]), // U+1D78A
        (0xF09D9E8B, 0, &[0xCF91]), // U+1D78B
        (0xF09D9E8C, 0, &[0xCFB0]), // U+1D78C
        (0xF09D9E8D, 0, &[0xCF95]), // U+1D78D
        (0xF09D9E8E, 0, &[0xCFB1]), // U+1D78E
        (0xF09D9E8F, 0, &[0xCF96]), // U+1D78F
        (0xF09D9E90, 0, &[0xCE91]), // U+1D790
        (0xF09D9E91, 0, &[0xCE92]), // U+1D791
        (0xF09D9E92, 0, &[0xCE93]), // U+1D792
        (0xF09D9E93, 0, &[0xCE94]), // U+1D793
        (0xF09D9E94, 0, &[0xCE95]), // U+1D794
        (0xF09D9E95, 0, &[0xCE96]), // U+1D795
        (0xF09D9E96, 0, &[0xCE97]), // U+1D796
        (0xF09D9E97, 0, &[0xCE98]), // U+1D797
        (0xF09D9E98, 0, &[0xCE99]), // U+1D798
        (0xF09D9E99, 0, &[0xCE9A]), // U+1D799
        (0xF09D9E9A, 0, &[0xCE9B]), // U+1D79A
        (0xF09D9E9B, 0, &[0xCE9C]), // U+1D79B
        (0xF09D9E9C, 0, &[0xCE9D]), // U+1D79C
        (0xF09D9E9D, 0, &[0xCE9E]), // U+1D79D
        (0xF09D9E9E, 0, &[0xCE9F]), // U+1D79E
        (0xF09D9E9F, 0, &[0xCEA0]), // U+1D79F
        (0xF09D9EA0, 0, &[0xCEA1]), // U+1D7A0
        (0xF09D9EA1, 0, &[0xCFB4]), // U+1D7A1
        (0xF09D9EA2, 0, &[0xCEA3]), // U+1D7A2
        (0xF09D9EA3, 0, &[0xCEA4]), // U+1D7A3
        (0xF09D9EA4, 0, &[0xCEA5]), // U+1D7A4
        (0xF09D9EA5, 0, &[0xCEA6]), // U+1D7A5
        (0xF09D9EA6, 0, &[0xCEA7]), // U+1D7A6
        (0xF09D9EA7, 0, &[0xCEA8]), // U+1D7A7
        (0xF09D9EA8, 0, &[0xCEA9]), // U+1D7A8
        (0xF09D9EA9, 0, &[0xE28887]), // U+1D7A9
        (0xF09D9EAA, 0, &[0xCEB1]), // U+1D7AA
        (0xF09D9EAB, 0, &[0xCEB2]), // U+1D7AB
        (0xF09D9EAC, 0, &[0xCEB3]), // U+1D7AC
        (0xF09D9EAD, 0, &[0xCEB4]), // U+1D7AD
        (0xF09D9EAE, 0, &[0xCEB5]), // U+1D7AE
        (0xF09D9EAF, 0, &[0xCEB6]), // U+1D7AF
        (0xF09D9EB0, 0, &[0xCEB7]), // U+1D7B0
        (0xF09D9EB1, 0, &[0xCEB8]), // U+1D7B1
        (0xF09D9EB2, 0, &[0xCEB9]), // U+1D7B2
        (0xF09D9EB3, 0, &[0xCEBA]), // U+1D7B3
        (0xF09D9EB4, 0, &[0xCEBB]), // U+1D7B4
        (0xF09D9EB5, 0, &[0xCEBC]), // U+1D7B5
        (0xF09D9EB6, 0, &[0xCEBD]), // U+1D7B6
        (0xF09D9EB7, 0, &[0xCEBE]), // U+1D7B7
        (0xF09D9EB8, 0, &[0xCEBF]), // U+1D7B8
        (0xF09D9EB9, 0, &[0xCF80]), // U+1D7B9
        (0xF09D9EBA, 0, &[0xCF81]), // U+1D7BA
        (0xF09D9EBB, 0, &[0xCF82]), // U+1D7BB
        (0xF09D9EBC, 0, &[0xCF83]), // U+1D7BC
        (0xF09D9EBD, 0, &[0xCF84]), // U+1D7BD
        (0xF09D9EBE, 0, &[0xCF85]), // U+1D7BE
        (0xF09D9EBF, 0, &[0xCF86]), // U+1D7BF
        (0xF09D9F80, 0, &[0xCF87]), // U+1D7C0
        (0xF09D9F81, 0, &[0xCF88]), // U+1D7C1
        (0xF09D9F82, 0, &[0xCF89]), // U+1D7C2
        (0xF09D9F83, 0, &[0xE28882]), // U+1D7C3
        (0xF09D9F84, 0, &[0xCFB5]), // U+1D7C4
        (0xF09D9F85, 0, &[0xCF91]), // U+1D7C5
        (0xF09D9F86, 0, &[0xCFB0]), // U+1D7C6
        (0xF09D9F87, 0, &[0xCF95]), // U+1D7C7
        (0xF09D9F88, 0, &[0xCFB1]), // U+1D7C8
        (0xF09D9F89, 0, &[0xCF96]), // U+1D7C9
        (0xF09D9F8A, 0, &[0xCF9C]), // U+1D7CA
        (0xF09D9F8B, 0, &[0xCF9D]), // U+1D7CB
        (0xF09D9F8E, 0, &[0x30]), // U+1D7CE
        (0xF09D9F8F, 0, &[0x31]), // U+1D7CF
        (0xF09D9F90, 0, &[0x32]), // U+1D7D0
        (0xF09D9F91, 0, &[0x33]), // U+1D7D1
        (0xF09D9F92, 0, &[0x34]), // U+1D7D2
        (0xF09D9F93, 0, &[0x35]), // U+1D7D3
        (0xF09D9F94, 0, &[0x36]), // U+1D7D4
        (0xF09D9F95, 0, &[0x37]), // U+1D7D5
        (0xF09D9F96, 0, &[0x38]), // U+1D7D6
        (0xF09D9F97, 0, &[0x39]), // U+1D7D7
        (0xF09D9F98, 0, &[0x30]), // U+1D7D8
        (0xF09D9F99, 0, &[0x31]), // U+1D7D9
        (0xF09D9F9A, 0, &[0x32]), // U+1D7DA
        (0xF09D9F9B, 0, &[0x33]), // U+1D7DB
        (0xF09D9F9C, 0, &[0x34]), // U+1D7DC
        (0xF09D9F9D, 0, &[0x35]), // U+1D7DD
        (0xF09D9F9E, 0, &[0x36]), // U+1D7DE
        (0xF09D9F9F, 0, &[0x37]), // U+1D7DF
        (0xF09D9FA0, 0, &[0x38]), // U+1D7E0
        (0xF09D9FA1, 0, &[0x39]), // U+1D7E1
        (0xF09D9FA2, 0, &[0x30]), // U+1D7E2
        (0xF09D9FA3, 0, &[0x31]), // U+1D7E3
        (0xF09D9FA4, 0, &[0x32]), // U+1D7E4
        (0xF09D9FA5, 0, &[0x33]), // U+1D7E5
        (0xF09D9FA6, 0, &[0x34]), // U+1D7E6
        (0xF09D9FA7, 0, &[0x35]), // U+1D7E7
        (0xF09D9FA8, 0, &[0x36]), // U+1D7E8
        (0xF09D9FA9, 0, &[0x37]), // U+1D7E9
        (0xF09D9FAA, 0, &[0x38]), // U+1D7EA
        (0xF09D9FAB, 0, &[0x39]), // U+1D7EB
        (0xF09D9FAC, 0, &[0x30]), // U+1D7EC
        (0xF09D9FAD, 0, &[0x31]), // U+1D7ED
        (0xF09D9FAE, 0, &[0x32]), // U+1D7EE
        (0xF09D9FAF, 0, &[0x33]), // U+1D7EF
        (0xF09D9FB0, 0, &[0x34]), // U+1D7F0
        (0xF09D9FB1, 0, &[0x35]), // U+1D7F1
        (0xF09D9FB2, 0, &[0x36]), // U+1D7F2
        (0xF09D9FB3, 0, &[0x37]), // U+1D7F3
        (0xF09D9FB4, 0, &[0x38]), // U+1D7F4
        (0xF09D9FB5, 0, &[0x39]), // U+1D7F5
        (0xF09D9FB6, 0, &[0x30]), // U+1D7F6
        (0xF09D9FB7, 0, &[0x31]), // U+1D7F7
        (0xF09D9FB8, 0, &[0x32]), // U+1D7F8
        (0xF09D9FB9, 0, &[0x33]), // U+1D7F9
        (0xF09D9FBA, 0, &[0x34]), // U+1D7FA
        (0xF09D9FBB, 0, &[0x35]), // U+1D7FB
        (0xF09D9FBC, 0, &[0x36]), // U+1D7FC
        (0xF09D9FBD, 0, &[0x37]), // U+1D7FD
        (0xF09D9FBE, 0, &[0x38]), // U+1D7FE
        (0xF09D9FBF, 0, &[0x39]), // U+1D7FF
        (0xF09E8080, 230, &[]), // U+1E000
        (0xF09E8081, 230, &[]), // U+1E001
        (0xF09E8082, 230, &[]), // U+1E002
        (0xF09E8083, 230, &[]), // U+1E003
        (0xF09E8084, 230, &[]), // U+1E004
        (0xF09E8085, 230, &[]), // U+1E005
        (0xF09E8086, 230, &[]), // U+1E006
        (0xF09E8088, 230, &[]), // U+1E008
        (0xF09E8089, 230, &[]), // U+1E009
        (0xF09E808A, 230, &[]), // U+1E00A
        (0xF09E808B, 230, &[]), // U+1E00B
        (0xF09E808C, 230, &[]), // U+1E00C
        (0xF09E808D, 230, &[]), // U+1E00D
        (0xF09E808E, 230, &[]), // U+1E00E
        (0xF09E808F, 230, &[]), // U+1E00F
        (0xF09E8090, 230, &[]), // U+1E010
        (0xF09E8091, 230, &[]), // U+1E011
        (0xF09E8092, 230, &[]), // U+1E012
        (0xF09E8093, 230, &[]), // U+1E013
        (0xF09E8094, 230, &[]), // U+1E014
        (0xF09E8095, 230, &[]), // U+1E015
        (0xF09E8096, 230, &[]), // U+1E016
        (0xF09E8097, 230, &[]), // U+1E017
        (0xF09E8098, 230, &[]), // U+1E018
        (0xF09E809B, 230, &[]), // U+1E01B
        (0xF09E809C, 230, &[]), // U+1E01C
        (0xF09E809D, 230, &[]), // U+1E01D
        (0xF09E809E, 230, &[]), // U+1E01E
        (0xF09E809F, 230, &[]), // U+1E01F
        (0xF09E80A0, 230, &[]), // U+1E020
        (0xF09E80A1, 230, &[]), // U+1E021
        (0xF09E80A3, 230, &[]), // U+1E023
        (0xF09E80A4, 230, &[]), // U+1E024
        (0xF09E80A6, 230, &[]), // U+1E026
        (0xF09E80A7, 230, &[]), // U+1E027
        (0xF09E80A8, 230, &[]), // U+1E028
        (0xF09E80A9, 230, &[]), // U+1E029
        (0xF09E80AA, 230, &[]), // U+1E02A
        (0xF09E84B0, 230, &[]), // U+1E130
        (0xF09E84B1, 230, &[]), // U+1E131
        (0xF09E84B2, 230, &[]), // U+1E132
        (0xF09E84B3, 230, &[]), // U+1E133
        (0xF09E84B4, 230, &[]), // U+1E134
        (0xF09E84B5, 230, &[]), // U+1E135
        (0xF09E84B6, 230, &[]), // U+1E136
        (0xF09E8AAE, 230, &[]), // U+1E2AE
        (0xF09E8BAC, 230, &[]), // U+1E2EC
        (0xF09E8BAD, 230, &[]), // U+1E2ED
        (0xF09E8BAE, 230, &[]), // U+1E2EE
        (0xF09E8BAF, 230, &[]), // U+1E2EF
        (0xF09EA390, 220, &[]), // U+1E8D0
        (0xF09EA391, 220, &[]), // U+1E8D1
        (0xF09EA392, 220, &[]), // U+1E8D2
        (0xF09EA393, 220, &[]), // U+1E8D3
        (0xF09EA394, 220, &[]), // U+1E8D4
        (0xF09EA395, 220, &[]), // U+1E8D5
        (0xF09EA396, 220, &[]), // U+1E8D6
        (0xF09EA584, 230, &[]), // U+1E944
        (0xF09EA585, 230, &[]), // U+1E945
        (0xF09EA586, 230, &[]), // U+1E946
        (0xF09EA587, 230, &[]), // U+1E947
        (0xF09EA588, 230, &[]), // U+1E948
        (0xF09EA589, 230, &[]), // U+1E949
        (0xF09EA58A, 7, &[]), // U+1E94A
        (0xF09EB880, 0, &[0xD8A7]), // U+1EE00
        (0xF09EB881, 0, &[0xD8A8]), // U+1EE01
        (0xF09EB882, 0, &[0xD8AC]), // U+1EE02
        (0xF09EB883, 0, &[0xD8AF]), // U+1EE03
        (0xF09EB885, 0, &[0xD988]), // U+1EE05
        (0xF09EB886, 0, &[0xD8B2]), // U+1EE06
        (0xF09EB887, 0, &[0xD8AD]), // U+1EE07
        (0xF09EB888, 0, &[0xD8B7]), // U+1EE08
        (0xF09EB889, 0, &[0xD98A]), // U+1EE09
        (0xF09EB88A, 0, &[0xD983]), // U+1EE0A
        (0xF09EB88B, 0, &[0xD984]), // U+1EE0B
        (0xF09EB88C, 0, &[0xD985]), // U+1EE0C
        (0xF09EB88D, 0, &[0xD986]), // U+1EE0D
        (0xF09EB88E, 0, &[0xD8B3]), // U+1EE0E
        (0xF09EB88F, 0, &[0xD8B9]), // U+1EE0F
        (0xF09EB890, 0, &[0xD981]), // U+1EE10
        (0xF09EB891, 0, &[0xD8B5]), // U+1EE11
        (0xF09EB892, 0, &[0xD982]), // U+1EE12
        (0xF09EB893, 0, &[0xD8B1]), // U+1EE13
        (0xF09EB894, 0, &[0xD8B4]), // U+1EE14
        (0xF09EB895, 0, &[0xD8AA]), // U+1EE15
        (0xF09EB896, 0, &[0xD8AB]), // U+1EE16
        (0xF09EB897, 0, &[0xD8AE]), // U+1EE17
        (0xF09EB898, 0, &[0xD8B0]), // U+1EE18
        (0xF09EB899, 0, &[0xD8B6]), // U+1EE19
        (0xF09EB89A, 0, &[0xD8B8]), // U+1EE1A
        (0xF09EB89B, 0, &[0xD8BA]), // U+1EE1B
        (0xF09EB89C, 0, &[0xD9AE]), // U+1EE1C
        (0xF09EB89D, 0, &[0xDABA]), // U+1EE1D
        (0xF09EB89E, 0, &[0xDAA1]), // U+1EE1E
        (0xF09EB89F, 0, &[0xD9AF]), // U+1EE1F
        (0xF09EB8A1, 0, &[0xD8A8]), // U+1EE21
        (0xF09EB8A2, 0, &[0xD8AC]), // U+1EE22
        (0xF09EB8A4, 0, &[0xD987]), // U+1EE24
        (0xF09EB8A7, 0, &[0xD8AD]), // U+1EE27
        (0xF09EB8A9, 0, &[0xD98A]), // U+1EE29
        (0xF09EB8AA, 0, &[0xD983]), // U+1EE2A
        (0xF09EB8AB, 0, &[0xD984]), // U+1EE2B
        (0xF09EB8AC, 0, &[0xD985]), // U+1EE2C
        (0xF09EB8AD, 0, &[0xD986]), // U+1EE2D
        (0xF09EB8AE, 0, &[0xD8B3]), // U+1EE2E
        (0xF09EB8AF, 0, &[0xD8B9]), // U+1EE2F
        (0xF09EB8B0, 0, &[0xD981]), // U+1EE30
        (0xF09EB8B1, 0, &[0xD8B5]), // U+1EE31
        (0xF09EB8B2, 0, &[0xD982]), // U+1EE32
        (0xF09EB8B4, 0, &[0xD8B4]), // U+1EE34
        (0xF09EB8B5, 0, &[0xD8AA]), // U+1EE35
        (0xF09EB8B6, 0, &[0xD8AB]), // U+1EE36
        (0xF09EB8B7, 0, &[0xD8AE]), // U+1EE37
        (0xF09EB8B9, 0, &[0xD8B6]), // U+1EE39
        (0xF09EB8BB, 0, &[0xD8BA]), // U+1EE3B
        (0xF09EB982, 0, &[0xD8AC]), // U+1EE42
        (0xF09EB987, 0, &[0xD8AD]), // U+1EE47
        (0xF09EB989, 0, &[0xD98A]), // U+1EE49
        (0xF09EB98B, 0, &[0xD984]), // U+1EE4B
        (0xF09EB98D, 0, &[0xD986]), // U+1EE4D
        (0xF09EB98E, 0, &[0xD8B3]), // U+1EE4E
        (0xF09EB98F, 0, &[0xD8B9]), // U+1EE4F
        (0xF09EB991, 0, &[0xD8B5]), // U+1EE51
        (0xF09EB992, 0, &[0xD982]), // U+1EE52
        (0xF09EB994, 0, &[0xD8B4]), // U+1EE54
        (0xF09EB997, 0, &[0xD8AE]), // U+1EE57
        (0xF09EB999, 0, &[0xD8B6]), // U+1EE59
        (0xF09EB99B, 0, &[0xD8BA]), // U+1EE5B
        (0xF09EB99D, 0, &[0xDABA]), // U+1EE5D
        (0xF09EB99F, 0, &[0xD9AF]), // U+1EE5F
        (0xF09EB9A1, 0, &[0xD8A8]), // U+1EE61
        (0xF09EB9A2, 0, &[0xD8AC]), // U+1EE62
        (0xF09EB9A4, 0, &[0xD987]), // U+1EE64
        (0xF09EB9A7, 0, &[0xD8AD]), // U+1EE67
        (0xF09EB9A8, 0, &[0xD8B7]), // U+1EE68
        (0xF09EB9A9, 0, &[0xD98A]), // U+1EE69
        (0xF09EB9AA, 0, &[0xD983]), // U+1EE6A
        (0xF09EB9AC, 0, &[0xD985]), // U+1EE6C
        (0xF09EB9AD, 0, &[0xD986]), // U+1EE6D
        (0xF09EB9AE, 0, &[0xD8B3]), // U+1EE6E
        (0xF09EB9AF, 0, &[0xD8B9]), // U+1EE6F
        (0xF09EB9B0, 0, &[0xD981]), // U+1EE70
        (0xF09EB9B1, 0, &[0xD8B5]), // U+1EE71
        (0xF09EB9B2, 0, &[0xD982]), // U+1EE72
        (0xF09EB9B4, 0, &[0xD8B4]), // U+1EE74
        (0xF09EB9B5, 0, &[0xD8AA]), // U+1EE75
        (0xF09EB9B6, 0, &[0xD8AB]), // U+1EE76
        (0xF09EB9B7, 0, &[0xD8AE]), // U+1EE77
        (0xF09EB9B9, 0, &[0xD8B6]), // U+1EE79
        (0xF09EB9BA, 0, &[0xD8B8]), // U+1EE7A
        (0xF09EB9BB, 0, &[0xD8BA]), // U+1EE7B
        (0xF09EB9BC, 0, &[0xD9AE]), // U+1EE7C
        (0xF09EB9BE, 0, &[0xDAA1]), // U+1EE7E
        (0xF09EBA80, 0, &[0xD8A7]), // U+1EE80
        (0xF09EBA81, 0, &[0xD8A8]), // U+1EE81
        (0xF09EBA82, 0, &[0xD8AC]), // U+1EE82
        (0xF09EBA83, 0, &[0xD8AF]), // U+1EE83
        (0xF09EBA84, 0, &[0xD987]), // U+1EE84
        (0xF09EBA85, 0, &[0xD988]), // U+1EE85
        (0xF09EBA86, 0, &[0xD8B2]), // U+1EE86
        (0xF09EBA87, 0, &[0xD8AD]), // U+1EE87
        (0xF09EBA88, 0, &[0xD8B7]), // U+1EE88
        (0xF09EBA89, 0, &[0xD98A]), // U+1EE89
        (0xF09EBA8B, 0, &[0xD984]), // U+1EE8B
        (0xF09EBA8C, 0, &[0xD985]), // U+1EE8C
        (0xF09EBA8D, 0, &[0xD986]), // U+1EE8D
        (0xF09EBA8E, 0, &[0xD8B3]), // U+1EE8E
        (0xF09EBA8F, 0, &[0xD8B9]), // U+1EE8F
        (0xF09EBA90, 0, &[0xD981]), // U+1EE90
        (0xF09EBA91, 0, &[0xD8B5]), // U+1EE91
        (0xF09EBA92, 0, &[0xD982]), // U+1EE92
        (0xF09EBA93, 0, &[0xD8B1]), // U+1EE93
        (0xF09EBA94, 0, &[0xD8B4]), // U+1EE94
        (0xF09EBA95, 0, &[0xD8AA]), // U+1EE95
        (0xF09EBA96, 0, &[0xD8AB]), // U+1EE96
        (0xF09EBA97, 0, &[0xD8AE]), // U+1EE97
        (0xF09EBA98, 0, &[0xD8B0]), // U+1EE98
        (0xF09EBA99, 0, &[0xD8B6]), // U+1EE99
        (0xF09EBA9A, 0, &[0xD8B8]), // U+1EE9A
        (0xF09EBA9B, 0, &[0xD8BA]), // U+1EE9B
        (0xF09EBAA1, 0, &[0xD8A8]), // U+1EEA1
        (0xF09EBAA2, 0, &[0xD8AC]), // U+1EEA2
        (0xF09EBAA3, 0, &[0xD8AF]), // U+1EEA3
        (0xF09EBAA5, 0, &[0xD988]), // U+1EEA5
        (0xF09EBAA6, 0, &[0xD8B2]), // U+1EEA6
        (0xF09EBAA7, 0, &[0xD8AD]), // U+1EEA7
        (0xF09EBAA8, 0, &[0xD8B7]), // U+1EEA8
        (0xF09EBAA9, 0, &[0xD98A]), // U+1EEA9
        (0xF09EBAAB, 0, &[0xD984]), // U+1EEAB
        (0xF09EBAAC, 0, &[0xD985]), // U+1EEAC
        (0xF09EBAAD, 0, &[0xD986]), // U+1EEAD
        (0xF09EBAAE, 0, &[0xD8B3]), // U+1EEAE
        (0xF09EBAAF, 0, &[0xD8B9]), // U+1EEAF
        (0xF09EBAB0, 0, &[0xD981]), // U+1EEB0
        (0xF09EBAB1, 0, &[0xD8B5]), // U+1EEB1
        (0xF09EBAB2, 0, &[0xD982]), // U+1EEB2
        (0xF09EBAB3, 0, &[0xD8B1]), // U+1EEB3
        (0xF09EBAB4, 0, &[0xD8B4]), // U+1EEB4
        (0xF09EBAB5, 0, &[0xD8AA]), // U+1EEB5
        (0xF09EBAB6, 0, &[0xD8AB]), // U+1EEB6
        (0xF09EBAB7, 0, &[0xD8AE]), // U+1EEB7
        (0xF09EBAB8, 0, &[0xD8B0]), // U+1EEB8
        (0xF09EBAB9, 0, &[0xD8B6]), // U+1EEB9
        (0xF09EBABA, 0, &[0xD8B8]), // U+1EEBA
        (0xF09EBABB, 0, &[0xD8BA]), // U+1EEBB
        (0xF09F8480, 0, &[0x30, 0x2E]), // U+1F100
        (0xF09F8481, 0, &[0x30, 0x2C]), // U+1F101
        (0xF09F8482, 0, &[0x31, 0x2C]), // U+1F102
        (0xF09F8483, 0, &[0x32, 0x2C]), // U+1F103
        (0xF09F8484, 0, &[0x33, 0x2C]), // U+1F104
        (0xF09F8485, 0, &[0x34, 0x2C]), // U+1F105
        (0xF09F8486, 0, &[0x35, 0x2C]), // U+1F106
        (0xF09F8487, 0, &[0x36, 0x2C]), // U+1F107
        (0xF09F8488, 0, &[0x37, 0x2C]), // U+1F108
        (0xF09F8489, 0, &[0x38, 0x2C]), // U+1F109
        (0xF09F848A, 0, &[0x39, 0x2C]), // U+1F10A
        (0xF09F8490, 0, &[0x28, 0x41, 0x29]), // U+1F110
        (0xF09F8491, 0, &[0x28, 0x42, 0x29]), // U+1F111
        (0xF09F8492, 0, &[0x28, 0x43, 0x29]), // U+1F112
        (0xF09F8493, 0, &[0x28, 0x44, 0x29]), // U+1F113
        (0xF09F8494, 0, &[0x28, 0x45, 0x29]), // U+1F114
        (0xF09F8495, 0, &[0x28, 0x46, 0x29]), // U+1F115
        (0xF09F8496, 0, &[0x28, 0x47, 0x29]), // U+1F116
        (0xF09F8497, 0, &[0x28, 0x48, 0x29]), // U+1F117
        (0xF09F8498, 0, &[0x28, 0x49, 0x29]), // U+1F118
        (0xF09F8499, 0, &[0x28, 0x4A, 0x29]), // U+1F119
        (0xF09F849A, 0, &[0x28, 0x4B, 0x29]), // U+1F11A
        (0xF09F849B, 0, &[0x28, 0x4C, 0x29]), // U+1F11B
        (0xF09F849C, 0, &[0x28, 0x4D, 0x29]), // U+1F11C
        (0xF09F849D, 0, &[0x28, 0x4E, 0x29]), // U+1F11D
        (0xF09F849E, 0, &[0x28, 0x4F, 0x29]), // U+1F11E
        (0xF09F849F, 0, &[0x28, 0x50, 0x29]), // U+1F11F
        (0xF09F84A0, 0, &[0x28, 0x51, 0x29]), // U+1F120
        (0xF09F84A1, 0, &[0x28, 0x52, 0x29]), // U+1F121
        (0xF09F84A2, 0, &[0x28, 0x53, 0x29]), // U+1F122
        (0xF09F84A3, 0, &[0x28, 0x54, 0x29]), // U+1F123
        (0xF09F84A4, 0, &[0x28, 0x55, 0x29]), // U+1F124
        (0xF09F84A5, 0, &[0x28, 0x56, 0x29]), // U+1F125
        (0xF09F84A6, 0, &[0x28, 0x57, 0x29]), // U+1F126
        (0xF09F84A7, 0, &[0x28, 0x58, 0x29]), // U+1F127
        (0xF09F84A8, 0, &[0x28, 0x59, 0x29]), // U+1F128
        (0xF09F84A9, 0, &[0x28, 0x5A, 0x29]), // U+1F129
        (0xF09F84AA, 0, &[0xE38094, 0x53, 0xE38095]), // U+1F12A
        (0xF09F84AB, 0, &[0x43]), // U+1F12B
        (0xF09F84AC, 0, &[0x52]), // U+1F12C
        (0xF09F84AD, 0, &[0x43, 0x44]), // U+1F12D
        (0xF09F84AE, 0, &[0x57, 0x5A]), // U+1F12E
        (0xF09F84B0, 0, &[0x41]), // U+1F130
        (0xF09F84B1, 0, &[0x42]), // U+1F131
        (0xF09F84B2, 0, &[0x43]), // U+1F132
        (0xF09F84B3, 0, &[0x44]), // U+1F133
        (0xF09F84B4, 0, &[0x45]), // U+1F134
        (0xF09F84B5, 0, &[0x46]), // U+1F135
        (0xF09F84B6, 0, &[0x47]), // U+1F136
        (0xF09F84B7, 0, &[0x48]), // U+1F137
        (0xF09F84B8, 0, &[0x49]), // U+1F138
        (0xF09F84B9, 0, &[0x4A]), // U+1F139
        (0xF09F84BA, 0, &[0x4B]), // U+1F13A
        (0xF09F84BB, 0, &[0x4C]), // U+1F13B
        (0xF09F84BC, 0, &[0x4D]), // U+1F13C
        (0xF09F84BD, 0, &[0x4E]), // U+1F13D
        (0xF09F84BE, 0, &[0x4F]), // U+1F13E
        (0xF09F84BF, 0, &[0x50]), // U+1F13F
        (0xF09F8580, 0, &[0x51]), // U+1F140
        (0xF09F8581, 0, &[0x52]), // U+1F141
        (0xF09F8582, 0, &[0x53]), // U+1F142
        (0xF09F8583, 0, &[0x54]), // U+1F143
        (0xF09F8584, 0, &[0x55]), // U+1F144
        (0xF09F8585, 0, &[0x56]), // U+1F145
        (0xF09F8586, 0, &[0x57]), // U+1F146
        (0xF09F8587, 0, &[0x58]), // U+1F147
        (0xF09F8588, 0, &[0x59]), // U+1F148
        (0xF09F8589, 0, &[0x5A]), // U+1F149
        (0xF09F858A, 0, &[0x48, 0x56]), // U+1F14A
        (0xF09F858B, 0, &[0x4D, 0x56]), // U+1F14B
        (0xF09F858C, 0, &[0x53, 0x44]), // U+1F14C
        (0xF09F858D, 0, &[0x53, 0x53]), // U+1F14D
        (0xF09F858E, 0, &[0x50, 0x50, 0x56]), // U+1F14E
        (0xF09F858F, 0, &[0x57, 0x43]), // U+1F14F
        (0xF09F85AA, 0, &[0x4D, 0x43]), // U+1F16A
        (0xF09F85AB, 0, &[0x4D, 0x44]), // U+1F16B
        (0xF09F85AC, 0, &[0x4D, 0x52]), // U+1F16C
        (0xF09F8690, 0, &[0x44, 0x4A]), // U+1F190
        (0xF09F8880, 0, &[0xE381BB, 0xE3818B]), // U+1F200
        (0xF09F8881, 0, &[0xE382B3, 0xE382B3]), // U+1F201
        (0xF09F8882, 0, &[0xE382B5]), // U+1F202
        (0xF09F8890, 0, &[0xE6898B]), // U+1F210
        (0xF09F8891, 0, &[0xE5AD97]), // U+1F211
        (0xF09F8892, 0, &[0xE58F8C]), // U+1F212
        (0xF09F8893, 0, &[0xE38387]), // U+1F213
        (0xF09F8894, 0, &[0xE4BA8C]), // U+1F214
        (0xF09F8895, 0, &[0xE5A49A]), // U+1F215
        (0xF09F8896, 0, &[0xE8A7A3]), // U+1F216
        (0xF09F8897, 0, &[0xE5A4A9]), // U+1F217
        (0xF09F8898, 0, &[0xE4BAA4]), // U+1F218
        (0xF09F8899, 0, &[0xE698A0]), // U+1F219
        (0xF09F889A, 0, &[0xE784A1]), // U+1F21A
        (0xF09F889B, 0, &[0xE69699]), // U+1F21B
        (0xF09F889C, 0, &[0xE5898D]), // U+1F21C
        (0xF09F889D, 0, &[0xE5BE8C]), // U+1F21D
        (0xF09F889E, 0, &[0xE5868D]), // U+1F21E
        (0xF09F889F, 0, &[0xE696B0]), // U+1F21F
        (0xF09F88A0, 0, &[0xE5889D]), // U+1F220
        (0xF09F88A1, 0, &[0xE7B582]), // U+1F221
        (0xF09F88A2, 0, &[0xE7949F]), // U+1F222
        (0xF09F88A3, 0, &[0xE8B2A9]), // U+1F223
        (0xF09F88A4, 0, &[0xE5A3B0]), // U+1F224
        (0xF09F88A5, 0, &[0xE590B9]), // U+1F225
        (0xF09F88A6, 0, &[0xE6BC94]), // U+1F226
        (0xF09F88A7, 0, &[0xE68A95]), // U+1F227
        (0xF09F88A8, 0, &[0xE68D95]), // U+1F228
        (0xF09F88A9, 0, &[0xE4B880]), // U+1F229
        (0xF09F88AA, 0, &[0xE4B889]), // U+1F22A
        (0xF09F88AB, 0, &[0xE9818A]), // U+1F22B
        (0xF09F88AC, 0, &[0xE5B7A6]), // U+1F22C
        (0xF09F88AD, 0, &[0xE4B8AD]), // U+1F22D
        (0xF09F88AE, 0, &[0xE58FB3]), // U+1F22E
        (0xF09F88AF, 0, &[0xE68C87]), // U+1F22F
        (0xF09F88B0, 0, &[0xE8B5B0]), // U+1F230
        (0xF09F88B1, 0, &[0xE68993]), // U+1F231
        (0xF09F88B2, 0, &[0xE7A681]), // U+1F232
        (0xF09F88B3, 0, &[0xE7A9BA]), // U+1F233
        (0xF09F88B4, 0, &[0xE59088]), // U+1F234
        (0xF09F88B5, 0, &[0xE6BA80]), // U+1F235
        (0xF09F88B6, 0, &[0xE69C89]), // U+1F236
        (0xF09F88B7, 0, &[0xE69C88]), // U+1F237
        (0xF09F88B8, 0, &[0xE794B3]), // U+1F238
        (0xF09F88B9, 0, &[0xE589B2]), // U+1F239
        (0xF09F88BA, 0, &[0xE596B6]), // U+1F23A
        (0xF09F88BB, 0, &[0xE9858D]), // U+1F23B
        (0xF09F8980, 0, &[0xE38094, 0xE69CAC, 0xE38095]), // U+1F240
        (0xF09F8981, 0, &[0xE38094, 0xE4B889, 0xE38095]), // U+1F241
        (0xF09F8982, 0, &[0xE38094, 0xE4BA8C, 0xE38095]), // U+1F242
        (0xF09F8983, 0, &[0xE38094, 0xE5AE89, 0xE38095]), // U+1F243
        (0xF09F8984, 0, &[0xE38094, 0xE782B9, 0xE38095]), // U+1F244
        (0xF09F8985, 0, &[0xE38094, 0xE68993, 0xE38095]), // U+1F245
        (0xF09F8986, 0, &[0xE38094, 0xE79B97, 0xE38095]), // U+1F246
        (0xF09F8987, 0, &[0xE38094, 0xE58B9D, 0xE38095]), // U+1F247
        (0xF09F8988, 0, &[0xE38094, 0xE69597, 0xE38095]), // U+1F248
        (0xF09F8990, 0, &[0xE5BE97]), // U+1F250
        (0xF09F8991, 0, &[0xE58FAF]), // U+1F251
        (0xF09FAFB0, 0, &[0x30]), // U+1FBF0
        (0xF09FAFB1, 0, &[0x31]), // U+1FBF1
        (0xF09FAFB2, 0, &[0x32]), // U+1FBF2
        (0xF09FAFB3, 0, &[0x33]), // U+1FBF3
        (0xF09FAFB4, 0, &[0x34]), // U+1FBF4
        (0xF09FAFB5, 0, &[0x35]), // U+1FBF5
        (0xF09FAFB6, 0, &[0x36]), // U+1FBF6
        (0xF09FAFB7, 0, &[0x37]), // U+1FBF7
        (0xF09FAFB8, 0, &[0x38]), // U+1FBF8
        (0xF09FAFB9, 0, &[0x39]), // U+1FBF9
        (0xF0AFA080, 0, &[0xE4B8BD]), // U+2F800
        (0xF0AFA081, 0, &[0xE4B8B8]), // U+2F801
        (0xF0AFA082, 0, &[0xE4B981]), // U+2F802
        (0xF0AFA083, 0, &[0xF0A084A2]), // U+2F803
        (0xF0AFA084, 0, &[0xE4BDA0]), // U+2F804
        (0xF0AFA085, 0, &[0xE4BEAE]), // U+2F805
        (0xF0AFA086, 0, &[0xE4BEBB]), // U+2F806
        (0xF0AFA087, 0, &[0xE58082]), // U+2F807
        (0xF0AFA088, 0, &[0xE581BA]), // U+2F808
        (0xF0AFA089, 0, &[0xE58299]), // U+2F809
        (0xF0AFA08A, 0, &[0xE583A7]), // U+2F80A
        (0xF0AFA08B, 0, &[0xE5838F]), // U+2F80B
        (0xF0AFA08C, 0, &[0xE3929E]), // U+2F80C
        (0xF0AFA08D, 0, &[0xF0A098BA]), // U+2F80D
        (0xF0AFA08E, 0, &[0xE5858D]), // U+2F80E
        (0xF0AFA08F, 0, &[0xE58594]), // U+2F80F
        (0xF0AFA090, 0, &[0xE585A4]), // U+2F810
        (0xF0AFA091, 0, &[0xE585B7]), // U+2F811
        (0xF0AFA092, 0, &[0xF0A0949C]), // U+2F812
        (0xF0AFA093, 0, &[0xE392B9]), // U+2F813
        (0xF0AFA094, 0, &[0xE585A7]), // U+2F814
        (0xF0AFA095, 0, &[0xE5868D]), // U+2F815
        (0xF0AFA096, 0, &[0xF0A0958B]), // U+2F816
        (0xF0AFA097, 0, &[0xE58697]), // U+2F817
        (0xF0AFA098, 0, &[0xE586A4]), // U+2F818
        (0xF0AFA099, 0, &[0xE4BB8C]), // U+2F819
        (0xF0AFA09A, 0, &[0xE586AC]), // U+2F81A
        (0xF0AFA09B, 0, &[0xE586B5]), // U+2F81B
        (0xF0AFA09C, 0, &[0xF0A9879F]), // U+2F81C
        (0xF0AFA09D, 0, &[0xE587B5]), // U+2F81D
        (0xF0AFA09E, 0, &[0xE58883]), // U+2F81E
        (0xF0AFA09F, 0, &[0xE3939F]), // U+2F81F
        (0xF0AFA0A0, 0, &[0xE588BB]), // U+2F820
        (0xF0AFA0A1, 0, &[0xE58986]), // U+2F821
        (0xF0AFA0A2, 0, &[0xE589B2]), // U+2F822
        (0xF0AFA0A3, 0, &[0xE589B7]), // U+2F823
        (0xF0AFA0A4, 0, &[0xE39495]), // U+2F824
        (0xF0AFA0A5, 0, &[0xE58B87]), // U+2F825
        (0xF0AFA0A6, 0, &[0xE58B89]), // U+2F826
        (0xF0AFA0A7, 0, &[0xE58BA4]), // U+2F827
        (0xF0AFA0A8, 0, &[0xE58BBA]), // U+2F828
        (0xF0AFA0A9, 0, &[0xE58C85]), // U+2F829
        (0xF0AFA0AA, 0, &[0xE58C86]), // U+2F82A
        (0xF0AFA0AB, 0, &[0xE58C97]), // U+2F82B
        (0xF0AFA0AC, 0, &[0xE58D89]), // U+2F82C
        (0xF0AFA0AD, 0, &[0xE58D91]), // U+2F82D
        (0xF0AFA0AE, 0, &[0xE58D9A]), // U+2F82E
        (0xF0AFA0AF, 0, &[0xE58DB3]), // U+2F82F
        (0xF0AFA0B0, 0, &[0xE58DBD]), // U+2F830
        (0xF0AFA0B1, 0, &[0xE58DBF]), // U+2F831
        (0xF0AFA0B2, 0, &[0xE58DBF]), // U+2F832
        (0xF0AFA0B3, 0, &[0xE58DBF]), // U+2F833
        (0xF0AFA0B4, 0, &[0xF0A0A8AC]), // U+2F834
        (0xF0AFA0B5, 0, &[0xE781B0]), // U+2F835
        (0xF0AFA0B6, 0, &[0xE58F8A]), // U+2F836
        (0xF0AFA0B7, 0, &[0xE58F9F]), // U+2F837
        (0xF0AFA0B8, 0, &[0xF0A0ADA3]), // U+2F838
        (0xF0AFA0B9, 0, &[0xE58FAB]), // U+2F839
        (0xF0AFA0BA, 0, &[0xE58FB1]), // U+2F83A
        (0xF0AFA0BB, 0, &[0xE59086]), // U+2F83B
        (0xF0AFA0BC, 0, &[0xE5929E]), // U+2F83C
        (0xF0AFA0BD, 0, &[0xE590B8]), // U+2F83D
        (0xF0AFA0BE, 0, &[0xE59188]), // U+2F83E
        (0xF0AFA0BF, 0, &[0xE591A8]), // U+2F83F
        (0xF0AFA180, 0, &[0xE592A2]), // U+2F840
        (0xF0AFA181, 0, &[0xE593B6]), // U+2F841
        (0xF0AFA182, 0, &[0xE59490]), // U+2F842
        (0xF0AFA183, 0, &[0xE59593]), // U+2F843
        (0xF0AFA184, 0, &[0xE595A3]), // U+2F844
        (0xF0AFA185, 0, &[0xE59684]), // U+2F845
        (0xF0AFA186, 0, &[0xE59684]), // U+2F846
        (0xF0AFA187, 0, &[0xE59699]), // U+2F847
        (0xF0AFA188, 0, &[0xE596AB]), // U+2F848
        (0xF0AFA189, 0, &[0xE596B3]), // U+2F849
        (0xF0AFA18A, 0, &[0xE59782]), // U+2F84A
        (0xF0AFA18B, 0, &[0xE59C96]), // U+2F84B
        (0xF0AFA18C, 0, &[0xE59886]), // U+2F84C
        (0xF0AFA18D, 0, &[0xE59C97]), // U+2F84D
        (0xF0AFA18E, 0, &[0xE59991]), // U+2F84E
        (0xF0AFA18F, 0, &[0xE599B4]), // U+2F84F
        (0xF0AFA190, 0, &[0xE58887]), // U+2F850
        (0xF0AFA191, 0, &[0xE5A3AE]), // U+2F851
        (0xF0AFA192, 0, &[0xE59F8E]), // U+2F852
        (0xF0AFA193, 0, &[0xE59FB4]), // U+2F853
        (0xF0AFA194, 0, &[0xE5A08D]), // U+2F854
        (0xF0AFA195, 0, &[0xE59E8B]), // U+2F855
        (0xF0AFA196, 0, &[0xE5A0B2]), // U+2F856
        (0xF0AFA197, 0, &[0xE5A0B1]), // U+2F857
        (0xF0AFA198, 0, &[0xE5A2AC]), // U+2F858
        (0xF0AFA199, 0, &[0xF0A193A4]), // U+2F859
        (0xF0AFA19A, 0, &[0xE5A3B2]), // U+2F85A
        (0xF0AFA19B, 0, &[0xE5A3B7]), // U+2F85B
        (0xF0AFA19C, 0, &[0xE5A486]), // U+2F85C
        (0xF0AFA19D, 0, &[0xE5A49A]), // U+2F85D
        (0xF0AFA19E, 0, &[0xE5A4A2]), // U+2F85E
        (0xF0AFA19F, 0, &[0xE5A5A2]), // U+2F85F
        (0xF0AFA1A0, 0, &[0xF0A19AA8]), // U+2F860
        (0xF0AFA1A1, 0, &[0xF0A19BAA]), // U+2F861
        (0xF0AFA1A2, 0, &[0xE5A7AC]), // U+2F862
        (0xF0AFA1A3, 0, &[0xE5A89B]), // U+2F863
        (0xF0AFA1A4, 0, &[0xE5A8A7]), // U+2F864
        (0xF0AFA1A5, 0, &[0xE5A798]), // U+2F865
        (0xF0AFA1A6, 0, &[0xE5A9A6]), // U+2F866
        (0xF0AFA1A7, 0, &[0xE39BAE]), // U+2F867
        (0xF0AFA1A8, 0, &[0xE39BBC]), // U+2F868
        (0xF0AFA1A9, 0, &[0xE5AC88]), // U+2F869
        (0xF0AFA1AA, 0, &[0xE5ACBE]), // U+2F86A
        (0xF0AFA1AB, 0, &[0xE5ACBE]), // U+2F86B
        (0xF0AFA1AC, 0, &[0xF0A1A788]), // U+2F86C
        (0xF0AFA1AD, 0, &[0xE5AF83]), // U+2F86D
        (0xF0AFA1AE, 0, &[0xE5AF98]), // U+2F86E
        (0xF0AFA1AF, 0, &[0xE5AFA7]), // U+2F86F
        (0xF0AFA1B0, 0, &[0xE5AFB3]), // U+2F870
        (0xF0AFA1B1, 0, &[0xF0A1AC98]), // U+2F871
        (0xF0AFA1B2, 0, &[0xE5AFBF]), // U+2F872
        (0xF0AFA1B3, 0, &[0xE5B086]), // U+2F873
        (0xF0AFA1B4, 0, &[0xE5BD93]), // U+2F874
        (0xF0AFA1B5, 0, &[0xE5B0A2]), // U+2F875
        (0xF0AFA1B6, 0, &[0xE39E81]), // U+2F876
        (0xF0AFA1B7, 0, &[0xE5B1A0]), // U+2F877
        (0xF0AFA1B8, 0, &[0xE5B1AE]), // U+2F878
        (0xF0AFA1B9, 0, &[0xE5B380]), // U+2F879
        (0xF0AFA1BA, 0, &[0xE5B28D]), // U+2F87A
        (0xF0AFA1BB, 0, &[0xF0A1B7A4]), // U+2F87B
        (0xF0AFA1BC, 0, &[0xE5B583]), // U+2F87C
        (0xF0AFA1BD, 0, &[0xF0A1B7A6]), // U+2F87D
        (0xF0AFA1BE, 0, &[0xE5B5AE]), // U+2F87E
        (0xF0AFA1BF, 0, &[0xE5B5AB]), // U+2F87F
        (0xF0AFA280, 0, &[0xE5B5BC]), // U+2F880
        (0xF0AFA281, 0, &[0xE5B7A1]), // U+2F881
        (0xF0AFA282, 0, &[0xE5B7A2]), // U+2F882
        (0xF0AFA283, 0, &[0xE3A0AF]), // U+2F883
        (0xF0AFA284, 0, &[0xE5B7BD]), // U+2F884
        (0xF0AFA285, 0, &[0xE5B8A8]), // U+2F885
        (0xF0AFA286, 0, &[0xE5B8BD]), // U+2F886
        (0xF0AFA287, 0, &[0xE5B9A9]), // U+2F887
        (0xF0AFA288, 0, &[0xE3A1A2]), // U+2F888
        (0xF0AFA289, 0, &[0xF0A28683]), // U+2F889
        (0xF0AFA28A, 0, &[0xE3A1BC]), // U+2F88A
        (0xF0AFA28B, 0, &[0xE5BAB0]), // U+2F88B
        (0xF0AFA28C, 0, &[0xE5BAB3]), // U+2F88C
        (0xF0AFA28D, 0, &[0xE5BAB6]), // U+2F88D
        (0xF0AFA28E, 0, &[0xE5BB8A]), // U+2F88E
        (0xF0AFA28F, 0, &[0xF0AA8E92]), // U+2F88F
        (0xF0AFA290, 0, &[0xE5BBBE]), // U+2F890
        (0xF0AFA291, 0, &[0xF0A28CB1]), // U+2F891
        (0xF0AFA292, 0, &[0xF0A28CB1]), // U+2F892
        (0xF0AFA293, 0, &[0xE88881]), // U+2F893
        (0xF0AFA294, 0, &[0xE5BCA2]), // U+2F894
        (0xF0AFA295, 0, &[0xE5BCA2]), // U+2F895
        (0xF0AFA296, 0, &[0xE3A387]), // U+2F896
        (0xF0AFA297, 0, &[0xF0A38AB8]), // U+2F897
        (0xF0AFA298, 0, &[0xF0A6879A]), // U+2F898
        (0xF0AFA299, 0, &[0xE5BDA2]), // U+2F899
        (0xF0AFA29A, 0, &[0xE5BDAB]), // U+2F89A
        (0xF0AFA29B, 0, &[0xE3A3A3]), // U+2F89B
        (0xF0AFA29C, 0, &[0xE5BE9A]), // U+2F89C
        (0xF0AFA29D, 0, &[0xE5BF8D]), // U+2F89D
        (0xF0AFA29E, 0, &[0xE5BF97]), // U+2F89E
        (0xF0AFA29F, 0, &[0xE5BFB9]), // U+2F89F
        (0xF0AFA2A0, 0, &[0xE68281]), // U+2F8A0
        (0xF0AFA2A1, 0, &[0xE3A4BA]), // U+2F8A1
        (0xF0AFA2A2, 0, &[0xE3A49C]), // U+2F8A2
        (0xF0AFA2A3, 0, &[0xE68294]), // U+2F8A3
        (0xF0AFA2A4, 0, &[0xF0A29B94]), // U+2F8A4
        (0xF0AFA2A5, 0, &[0xE68387]), // U+2F8A5
        (0xF0AFA2A6, 0, &[0xE68588]), // U+2F8A6
        (0xF0AFA2A7, 0, &[0xE6858C]), // U+2F8A7
        (0xF0AFA2A8, 0, &[0xE6858E]), // U+2F8A8
        (0xF0AFA2A9, 0, &[0xE6858C]), // U+2F8A9
        (0xF0AFA2AA, 0, &[0xE685BA]), // U+2F8AA
        (0xF0AFA2AB, 0, &[0xE6868E]), // U+2F8AB
        (0xF0AFA2AC, 0, &[0xE686B2]), // U+2F8AC
        (0xF0AFA2AD, 0, &[0xE686A4]), // U+2F8AD
        (0xF0AFA2AE, 0, &[0xE686AF]), // U+2F8AE
        (0xF0AFA2AF, 0, &[0xE6879E]), // U+2F8AF
        (0xF0AFA2B0, 0, &[0xE687B2]), // U+2F8B0
        (0xF0AFA2B1, 0, &[0xE687B6]), // U+2F8B1
        (0xF0AFA2B2, 0, &[0xE68890]), // U+2F8B2
        (0xF0AFA2B3, 0, &[0xE6889B]), // U+2F8B3
        (0xF0AFA2B4, 0, &[0xE6899D]), // U+2F8B4
        (0xF0AFA2B5, 0, &[0xE68AB1]), // U+2F8B5
        (0xF0AFA2B6, 0, &[0xE68B94]), // U+2F8B6
        (0xF0AFA2B7, 0, &[0xE68D90]), // U+2F8B7
        (0xF0AFA2B8, 0, &[0xF0A2AC8C]), // U+2F8B8
        (0xF0AFA2B9, 0, &[0xE68CBD]), // U+2F8B9
        (0xF0AFA2BA, 0, &[0xE68BBC]), // U+2F8BA
        (0xF0AFA2BB, 0, &[0xE68DA8]), // U+2F8BB
        (0xF0AFA2BC, 0, &[0xE68E83]), // U+2F8BC
        (0xF0AFA2BD, 0, &[0xE68FA4]), // U+2F8BD
        (0xF0AFA2BE, 0, &[0xF0A2AFB1]), // U+2F8BE
        (0xF0AFA2BF, 0, &[0xE690A2]), // U+2F8BF
        (0xF0AFA380, 0, &[0xE68F85]), // U+2F8C0
        (0xF0AFA381, 0, &[0xE68EA9]), // U+2F8C1
        (0xF0AFA382, 0, &[0xE3A8AE]), // U+2F8C2
        (0xF0AFA383, 0, &[0xE691A9]), // U+2F8C3
        (0xF0AFA384, 0, &[0xE691BE]), // U+2F8C4
        (0xF0AFA385, 0, &[0xE6929D]), // U+2F8C5
        (0xF0AFA386, 0, &[0xE691B7]), // U+2F8C6
        (0xF0AFA387, 0, &[0xE3A9AC]), // U+2F8C7
        (0xF0AFA388, 0, &[0xE6958F]), // U+2F8C8
        (0xF0AFA389, 0, &[0xE695AC]), // U+2F8C9
        (0xF0AFA38A, 0, &[0xF0A3808A]), // U+2F8CA
        (0xF0AFA38B, 0, &[0xE697A3]), // U+2F8CB
        (0xF0AFA38C, 0, &[0xE69BB8]), // U+2F8CC
        (0xF0AFA38D, 0, &[0xE69989]), // U+2F8CD
        (0xF0AFA38E, 0, &[0xE3AC99]), // U+2F8CE
        (0xF0AFA38F, 0, &[0xE69A91]), // U+2F8CF
        (0xF0AFA390, 0, &[0xE3AC88]), // U+2F8D0
        (0xF0AFA391, 0, &[0xE3ABA4]), // U+2F8D1
        (0xF0AFA392, 0, &[0xE58692]), // U+2F8D2
        (0xF0AFA393, 0, &[0xE58695]), // U+2F8D3
        (0xF0AFA394, 0, &[0xE69C80]), // U+2F8D4
        (0xF0AFA395, 0, &[0xE69A9C]), // U+2F8D5
        (0xF0AFA396, 0, &[0xE882AD]), // U+2F8D6
        (0xF0AFA397, 0, &[0xE48F99]), // U+2F8D7
        (0xF0AFA398, 0, &[0xE69C97]), // U+2F8D8
        (0xF0AFA399, 0, &[0xE69C9B]), // U+2F8D9
        (0xF0AFA39A, 0, &[0xE69CA1]), // U+2F8DA
        (0xF0AFA39B, 0, &[0xE69D9E]), // U+2F8DB
        (0xF0AFA39C, 0, &[0xE69D93]), // U+2F8DC
        (0xF0AFA39D, 0, &[0xF0A38F83]), // U+2F8DD
        (0xF0AFA39E, 0, &[0xE3AD89]), // U+2F8DE
        (0xF0AFA39F, 0, &[0xE69FBA]), // U+2F8DF
        (0xF0AFA3A0, 0, &[0xE69E85]), // U+2F8E0
        (0xF0AFA3A1, 0, &[0xE6A192]), // U+2F8E1
        (0xF0AFA3A2, 0, &[0xE6A285]), // U+2F8E2
        (0xF0AFA3A3, 0, &[0xF0A391AD]), // U+2F8E3
        (0xF0AFA3A4, 0, &[0xE6A28E]), // U+2F8E4
        (0xF0AFA3A5, 0, &[0xE6A09F]), // U+2F8E5
        (0xF0AFA3A6, 0, &[0xE6A494]), // U+2F8E6
        (0xF0AFA3A7, 0, &[0xE3AE9D]), // U+2F8E7
        (0xF0AFA3A8, 0, &[0xE6A582]), // U+2F8E8
        (0xF0AFA3A9, 0, &[0xE6A6A3]), // U+2F8E9
        (0xF0AFA3AA, 0, &[0xE6A7AA]), // U+2F8EA
        (0xF0AFA3AB, 0, &[0xE6AAA8]), // U+2F8EB
        (0xF0AFA3AC, 0, &[0xF0A39AA3]), // U+2F8EC
        (0xF0AFA3AD, 0, &[0xE6AB9B]), // U+2F8ED
        (0xF0AFA3AE, 0, &[0xE3B098]), // U+2F8EE
        (0xF0AFA3AF, 0, &[0xE6ACA1]), // U+2F8EF
        (0xF0AFA3B0, 0, &[0xF0A3A2A7]), // U+2F8F0
        (0xF0AFA3B1, 0, &[0xE6AD94]), // U+2F8F1
        (0xF0AFA3B2, 0, &[0xE3B18E]), // U+2F8F2
        (0xF0AFA3B3, 0, &[0xE6ADB2]), // U+2F8F3
        (0xF0AFA3B4, 0, &[0xE6AE9F]), // U+2F8F4
        (0xF0AFA3B5, 0, &[0xE6AEBA]), // U+2F8F5
        (0xF0AFA3B6, 0, &[0xE6AEBB]), // U+2F8F6
        (0xF0AFA3B7, 0, &[0xF0A3AA8D]), // U+2F8F7
        (0xF0AFA3B8, 0, &[0xF0A1B48B]), // U+2F8F8
        (0xF0AFA3B9, 0, &[0xF0A3ABBA]), // U+2F8F9
        (0xF0AFA3BA, 0, &[0xE6B18E]), // U+2F8FA
        (0xF0AFA3BB, 0, &[0xF0A3B2BC]), // U+2F8FB
        (0xF0AFA3BC, 0, &[0xE6B2BF]), // U+2F8FC
        (0xF0AFA3BD, 0, &[0xE6B38D]), // U+2F8FD
        (0xF0AFA3BE, 0, &[0xE6B1A7]), // U+2F8FE
        (0xF0AFA3BF, 0, &[0xE6B496]), // U+2F8FF
        (0xF0AFA480, 0, &[0xE6B4BE]), // U+2F900
        (0xF0AFA481, 0, &[0xE6B5B7]), // U+2F901
        (0xF0AFA482, 0, &[0xE6B581]), // U+2F902
        (0xF0AFA483, 0, &[0xE6B5A9]), // U+2F903
        (0xF0AFA484, 0, &[0xE6B5B8]), // U+2F904
        (0xF0AFA485, 0, &[0xE6B685]), // U+2F905
        (0xF0AFA486, 0, &[0xF0A3B49E]), // U+2F906
        (0xF0AFA487, 0, &[0xE6B4B4]), // U+2F907
        (0xF0AFA488, 0, &[0xE6B8AF]), // U+2F908
        (0xF0AFA489, 0, &[0xE6B9AE]), // U+2F909
        (0xF0AFA48A, 0, &[0xE3B4B3]), // U+2F90A
        (0xF0AFA48B, 0, &[0xE6BB8B]), // U+2F90B
        (0xF0AFA48C, 0, &[0xE6BB87]), // U+2F90C
        (0xF0AFA48D, 0, &[0xF0A3BB91]), // U+2F90D
        (0xF0AFA48E, 0, &[0xE6B7B9]), // U+2F90E
        (0xF0AFA48F, 0, &[0xE6BDAE]), // U+2F90F
        (0xF0AFA490, 0, &[0xF0A3BD9E]), // U+2F910
        (0xF0AFA491, 0, &[0xF0A3BE8E]), // U+2F911
        (0xF0AFA492, 0, &[0xE6BF86]), // U+2F912
        (0xF0AFA493, 0, &[0xE780B9]), // U+2F913
        (0xF0AFA494, 0, &[0xE7809E]), // U+2F914
        (0xF0AFA495, 0, &[0xE7809B]), // U+2F915
        (0xF0AFA496, 0, &[0xE3B696]), // U+2F916
        (0xF0AFA497, 0, &[0xE7818A]), // U+2F917
        (0xF0AFA498, 0, &[0xE781BD]), // U+2F918
        (0xF0AFA499, 0, &[0xE781B7]), // U+2F919
        (0xF0AFA49A, 0, &[0xE782AD]), // U+2F91A
        (0xF0AFA49B, 0, &[0xF0A094A5]), // U+2F91B
        (0xF0AFA49C, 0, &[0xE78585]), // U+2F91C
        (0xF0AFA49D, 0, &[0xF0A489A3]), // U+2F91D
        (0xF0AFA49E, 0, &[0xE7869C]), // U+2F91E
        (0xF0AFA49F, 0, &[0xF0A48EAB]), // U+2F91F
        (0xF0AFA4A0, 0, &[0xE788A8]), // U+2F920
        (0xF0AFA4A1, 0, &[0xE788B5]), // U+2F921
        (0xF0AFA4A2, 0, &[0xE78990]), // U+2F922
        (0xF0AFA4A3, 0, &[0xF0A49888]), // U+2F923
        (0xF0AFA4A4, 0, &[0xE78A80]), // U+2F924
        (0xF0AFA4A5, 0, &[0xE78A95]), // U+2F925
        (0xF0AFA4A6, 0, &[0xF0A49CB5]), // U+2F926
        (0xF0AFA4A7, 0, &[0xF0A4A094]), // U+2F927
        (0xF0AFA4A8, 0, &[0xE78DBA]), // U+2F928
        (0xF0AFA4A9, 0, &[0xE78E8B]), // U+2F929
        (0xF0AFA4AA, 0, &[0xE3BAAC]), // U+2F92A
        (0xF0AFA4AB, 0, &[0xE78EA5]), // U+2F92B
        (0xF0AFA4AC, 0, &[0xE3BAB8]), // U+2F92C
        (0xF0AFA4AD, 0, &[0xE3BAB8]), // U+2F92D
        (0xF0AFA4AE, 0, &[0xE79187]), // U+2F92E
        (0xF0AFA4AF, 0, &[0xE7919C]), // U+2F92F
        (0xF0AFA4B0, 0, &[0xE791B1]), // U+2F930
        (0xF0AFA4B1, 0, &[0xE79285]), // U+2F931
        (0xF0AFA4B2, 0, &[0xE7938A]), // U+2F932
        (0xF0AFA4B3, 0, &[0xE3BC9B]), // U+2F933
        (0xF0AFA4B4, 0, &[0xE794A4]), // U+2F934
        (0xF0AFA4B5, 0, &[0xF0A4B0B6]), // U+2F935
        (0xF0AFA4B6, 0, &[0xE794BE]), // U+2F936
        (0xF0AFA4B7, 0, &[0xF0A4B292]), // U+2F937
        (0xF0AFA4B8, 0, &[0xE795B0]), // U+2F938
        (0xF0AFA4B9, 0, &[0xF0A2869F]), // U+2F939
        (0xF0AFA4BA, 0, &[0xE79890]), // U+2F93A
        (0xF0AFA4BB, 0, &[0xF0A4BEA1]), // U+2F93B
        (0xF0AFA4BC, 0, &[0xF0A4BEB8]), // U+2F93C
        (0xF0AFA4BD, 0, &[0xF0A58184]), // U+2F93D
        (0xF0AFA4BE, 0, &[0xE3BFBC]), // U+2F93E
        (0xF0AFA4BF, 0, &[0xE48088]), // U+2F93F
        (0xF0AFA580, 0, &[0xE79BB4]), // U+2F940
        (0xF0AFA581, 0, &[0xF0A583B3]), // U+2F941
        (0xF0AFA582, 0, &[0xF0A583B2]), // U+2F942
        (0xF0AFA583, 0, &[0xF0A58499]), // U+2F943
        (0xF0AFA584, 0, &[0xF0A584B3]), // U+2F944
        (0xF0AFA585, 0, &[0xE79C9E]), // U+2F945
        (0xF0AFA586, 0, &[0xE79C9F]), // U+2F946
        (0xF0AFA587, 0, &[0xE79C9F]), // U+2F947
        (0xF0AFA588, 0, &[0xE79D8A]), // U+2F948
        (0xF0AFA589, 0, &[0xE480B9]), // U+2F949
        (0xF0AFA58A, 0, &[0xE79E8B]), // U+2F94A
        (0xF0AFA58B, 0, &[0xE48186]), // U+2F94B
        (0xF0AFA58C, 0, &[0xE48296]), // U+2F94C
        (0xF0AFA58D, 0, &[0xF0A5909D]), // U+2F94D
        (0xF0AFA58E, 0, &[0xE7A18E]), // U+2F94E
        (0xF0AFA58F, 0, &[0xE7A28C]), // U+2F94F
        (0xF0AFA590, 0, &[0xE7A38C]), // U+2F950
        (0xF0AFA591, 0, &[0xE483A3]), // U+2F951
        (0xF0AFA592, 0, &[0xF0A598A6]), // U+2F952
        (0xF0AFA593, 0, &[0xE7A596]), // U+2F953
        (0xF0AFA594, 0, &[0xF0A59A9A]), // U+2F954
        (0xF0AFA595, 0, &[0xF0A59B85]), // U+2F955
        (0xF0AFA596, 0, &[0xE7A68F]), // U+2F956
        (0xF0AFA597, 0, &[0xE7A7AB]), // U+2F957
        (0xF0AFA598, 0, &[0xE484AF]), // U+2F958
        (0xF0AFA599, 0, &[0xE7A980]), // U+2F959
        (0xF0AFA59A, 0, &[0xE7A98A]), // U+2F95A
        (0xF0AFA59B, 0, &[0xE7A98F]), // U+2F95B
        (0xF0AFA59C, 0, &[0xF0A5A5BC]), // U+2F95C
        (0xF0AFA59D, 0, &[0xF0A5AAA7]), // U+2F95D
        (0xF0AFA59E, 0, &[0xF0A5AAA7]), // U+2F95E
        (0xF0AFA59F, 0, &[0xE7ABAE]), // U+2F95F
        (0xF0AFA5A0, 0, &[0xE48882]), // U+2F960
        (0xF0AFA5A1, 0, &[0xF0A5AEAB]), // U+2F961
        (0xF0AFA5A2, 0, &[0xE7AF86]), // U+2F962
        (0xF0AFA5A3, 0, &[0xE7AF89]), // U+2F963
        (0xF0AFA5A4, 0, &[0xE488A7]), // U+2F964
        (0xF0AFA5A5, 0, &[0xF0A5B280]), // U+2F965
        (0xF0AFA5A6, 0, &[0xE7B392]), // U+2F966
        (0xF0AFA5A7, 0, &[0xE48AA0]), // U+2F967
        (0xF0AFA5A8, 0, &[0xE7B3A8]), // U+2F968
        (0xF0AFA5A9, 0, &[0xE7B3A3]), // U+2F969
        (0xF0AFA5AA, 0, &[0xE7B480]), // U+2F96A
        (0xF0AFA5AB, 0, &[0xF0A5BE86]), // U+2F96B
        (0xF0AFA5AC, 0, &[0xE7B5A3]), // U+2F96C
        (0xF0AFA5AD, 0, &[0xE48C81]), // U+2F96D
        (0xF0AFA5AE, 0, &[0xE7B787]), // U+2F96E
        (0xF0AFA5AF, 0, &[0xE7B882]), // U+2F96F
        (0xF0AFA5B0, 0, &[0xE7B985]), // U+2F970
        (0xF0AFA5B1, 0, &[0xE48CB4]), // U+2F971
        (0xF0AFA5B2, 0, &[0xF0A688A8]), // U+2F972
        (0xF0AFA5B3, 0, &[0xF0A68987]), // U+2F973
        (0xF0AFA5B4, 0, &[0xE48D99]), // U+2F974
        (0xF0AFA5B5, 0, &[0xF0A68B99]), // U+2F975
        (0xF0AFA5B6, 0, &[0xE7BDBA]), // U+2F976
        (0xF0AFA5B7, 0, &[0xF0A68CBE]), // U+2F977
        (0xF0AFA5B8, 0, &[0xE7BE95]), // U+2F978
        (0xF0AFA5B9, 0, &[0xE7BFBA]), // U+2F979
        (0xF0AFA5BA, 0, &[0xE88085]), // U+2F97A
        (0xF0AFA5BB, 0, &[0xF0A6939A]), // U+2F97B
        (0xF0AFA5BC, 0, &[0xF0A694A3]), // U+2F97C
        (0xF0AFA5BD, 0, &[0xE881A0]), // U+2F97D
        (0xF0AFA5BE, 0, &[0xF0A696A8]), // U+2F97E
        (0xF0AFA5BF, 0, &[0xE881B0]), // U+2F97F
        (0xF0AFA680, 0, &[0xF0A38D9F]), // U+2F980
        (0xF0AFA681, 0, &[0xE48F95]), // U+2F981
        (0xF0AFA682, 0, &[0xE882B2]), // U+2F982
        (0xF0AFA683, 0, &[0xE88483]), // U+2F983
        (0xF0AFA684, 0, &[0xE4908B]), // U+2F984
        (0xF0AFA685, 0, &[0xE884BE]), // U+2F985
        (0xF0AFA686, 0, &[0xE5AAB5]), // U+2F986
        (0xF0AFA687, 0, &[0xF0A69EA7]), // U+2F987
        (0xF0AFA688, 0, &[0xF0A69EB5]), // U+2F988
        (0xF0AFA689, 0, &[0xF0A38E93]), // U+2F989
        (0xF0AFA68A, 0, &[0xF0A38E9C]), // U+2F98A
        (0xF0AFA68B, 0, &[0xE88881]), // U+2F98B
        (0xF0AFA68C, 0, &[0xE88884]), // U+2F98C
        (0xF0AFA68D, 0, &[0xE8BE9E]), // U+2F98D
        (0xF0AFA68E, 0, &[0xE491AB]), // U+2F98E
        (0xF0AFA68F, 0, &[0xE88A91]), // U+2F98F
        (0xF0AFA690, 0, &[0xE88A8B]), // U+2F990
        (0xF0AFA691, 0, &[0xE88A9D]), // U+2F991
        (0xF0AFA692, 0, &[0xE58AB3]), // U+2F992
        (0xF0AFA693, 0, &[0xE88AB1]), // U+2F993
        (0xF0AFA694, 0, &[0xE88AB3]), // U+2F994
        (0xF0AFA695, 0, &[0xE88ABD]), // U+2F995
        (0xF0AFA696, 0, &[0xE88BA6]), // U+2F996
        (0xF0AFA697, 0, &[0xF0A6ACBC]), // U+2F997
        (0xF0AFA698, 0, &[0xE88BA5]), // U+2F998
        (0xF0AFA699, 0, &[0xE88C9D]), // U+2F999
        (0xF0AFA69A, 0, &[0xE88DA3]), // U+2F99A
        (0xF0AFA69B, 0, &[0xE88EAD]), // U+2F99B
        (0xF0AFA69C, 0, &[0xE88CA3]), // U+2F99C
        (0xF0AFA69D, 0, &[0xE88EBD]), // U+2F99D
        (0xF0AFA69E, 0, &[0xE88FA7]), // U+2F99E
        (0xF0AFA69F, 0, &[0xE89197]), // U+2F99F
        (0xF0AFA6A0, 0, &[0xE88D93]), // U+2F9A0
        (0xF0AFA6A1, 0, &[0xE88F8A]), // U+2F9A1
        (0xF0AFA6A2, 0, &[0xE88F8C]), // U+2F9A2
        (0xF0AFA6A3, 0, &[0xE88F9C]), // U+2F9A3
        (0xF0AFA6A4, 0, &[0xF0A6B0B6]), // U+2F9A4
        (0xF0AFA6A5, 0, &[0xF0A6B5AB]), // U+2F9A5
        (0xF0AFA6A6, 0, &[0xF0A6B395]), // U+2F9A6
        (0xF0AFA6A7, 0, &[0xE494AB]), // U+2F9A7
        (0xF0AFA6A8, 0, &[0xE893B1]), // U+2F9A8
        (0xF0AFA6A9, 0, &[0xE893B3]), // U+2F9A9
        (0xF0AFA6AA, 0, &[0xE89496]), // U+2F9AA
        (0xF0AFA6AB, 0, &[0xF0A78F8A]), // U+2F9AB
        (0xF0AFA6AC, 0, &[0xE895A4]), // U+2F9AC
        (0xF0AFA6AD, 0, &[0xF0A6BCAC]), // U+2F9AD
        (0xF0AFA6AE, 0, &[0xE4959D]), // U+2F9AE
        (0xF0AFA6AF, 0, &[0xE495A1]), // U+2F9AF
        (0xF0AFA6B0, 0, &[0xF0A6BEB1]), // U+2F9B0
        (0xF0AFA6B1, 0, &[0xF0A78392]), // U+2F9B1
        (0xF0AFA6B2, 0, &[0xE495AB]), // U+2F9B2
        (0xF0AFA6B3, 0, &[0xE89990]), // U+2F9B3
        (0xF0AFA6B4, 0, &[0xE8999C]), // U+2F9B4
        (0xF0AFA6B5, 0, &[0xE899A7]), // U+2F9B5
        (0xF0AFA6B6, 0, &[0xE899A9]), // U+2F9B6
        (0xF0AFA6B7, 0, &[0xE89AA9]), // U+2F9B7
        (0xF0AFA6B8, 0, &[0xE89A88]), // U+2F9B8
        (0xF0AFA6B9, 0, &[0xE89C8E]), // U+2F9B9
        (0xF0AFA6BA, 0, &[0xE89BA2]), // U+2F9BA
        (0xF0AFA6BB, 0, &[0xE89DB9]), // U+2F9BB
        (0xF0AFA6BC, 0, &[0xE89CA8]), // U+2F9BC
        (0xF0AFA6BD, 0, &[0xE89DAB]), // U+2F9BD
        (0xF0AFA6BE, 0, &[0xE89E86]), // U+2F9BE
        (0xF0AFA6BF, 0, &[0xE49797]), // U+2F9BF
        (0xF0AFA780, 0, &[0xE89FA1]), // U+2F9C0
        (0xF0AFA781, 0, &[0xE8A081]), // U+2F9C1
        (0xF0AFA782, 0, &[0xE497B9]), // U+2F9C2
        (0xF0AFA783, 0, &[0xE8A1A0]), // U+2F9C3
        (0xF0AFA784, 0, &[0xE8A1A3]), // U+2F9C4
        (0xF0AFA785, 0, &[0xF0A799A7]), // U+2F9C5
        (0xF0AFA786, 0, &[0xE8A397]), // U+2F9C6
        (0xF0AFA787, 0, &[0xE8A39E]), // U+2F9C7
        (0xF0AFA788, 0, &[0xE498B5]), // U+2F9C8
        (0xF0AFA789, 0, &[0xE8A3BA]), // U+2F9C9
        (0xF0AFA78A, 0, &[0xE392BB]), // U+2F9CA
        (0xF0AFA78B, 0, &[0xF0A7A2AE]), // U+2F9CB
        (0xF0AFA78C, 0, &[0xF0A7A5A6]), // U+2F9CC
        (0xF0AFA78D, 0, &[0xE49ABE]), // U+2F9CD
        (0xF0AFA78E, 0, &[0xE49B87]), // U+2F9CE
        (0xF0AFA78F, 0, &[0xE8AAA0]), // U+2F9CF
        (0xF0AFA790, 0, &[0xE8ABAD]), // U+2F9D0
        (0xF0AFA791, 0, &[0xE8AE8A]), // U+2F9D1
        (0xF0AFA792, 0, &[0xE8B195]), // U+2F9D2
        (0xF0AFA793, 0, &[0xF0A7B2A8]), // U+2F9D3
        (0xF0AFA794, 0, &[0xE8B2AB]), // U+2F9D4
        (0xF0AFA795, 0, &[0xE8B381]), // U+2F9D5
        (0xF0AFA796, 0, &[0xE8B49B]), // U+2F9D6
        (0xF0AFA797, 0, &[0xE8B5B7]), // U+2F9D7
        (0xF0AFA798, 0, &[0xF0A7BCAF]), // U+2F9D8
        (0xF0AFA799, 0, &[0xF0A0A084]), // U+2F9D9
        (0xF0AFA79A, 0, &[0xE8B78B]), // U+2F9DA
        (0xF0AFA79B, 0, &[0xE8B6BC]), // U+2F9DB
        (0xF0AFA79C, 0, &[0xE8B7B0]), // U+2F9DC
        (0xF0AFA79D, 0, &[0xF0A0A39E]), // U+2F9DD
        (0xF0AFA79E, 0, &[0xE8BB94]), // U+2F9DE
        (0xF0AFA79F, 0, &[0xE8BCB8]), // U+2F9DF
        (0xF0AFA7A0, 0, &[0xF0A89792]), // U+2F9E0
        (0xF0AFA7A1, 0, &[0xF0A897AD]), // U+2F9E1
        (0xF0AFA7A2, 0, &[0xE98294]), // U+2F9E2
        (0xF0AFA7A3, 0, &[0xE983B1]), // U+2F9E3
        (0xF0AFA7A4, 0, &[0xE98491]), // U+2F9E4
        (0xF0AFA7A5, 0, &[0xF0A89CAE]), // U+2F9E5
        (0xF0AFA7A6, 0, &[0xE9849B]), // U+2F9E6
        (0xF0AFA7A7, 0, &[0xE988B8]), // U+2F9E7
        (0xF0AFA7A8, 0, &[0xE98B97]), // U+2F9E8
        (0xF0AFA7A9, 0, &[0xE98B98]), // U+2F9E9
        (0xF0AFA7AA, 0, &[0xE989BC]), // U+2F9EA
        (0xF0AFA7AB, 0, &[0xE98FB9]), // U+2F9EB
        (0xF0AFA7AC, 0, &[0xE99095]), // U+2F9EC
        (0xF0AFA7AD, 0, &[0xF0A8AFBA]), // U+2F9ED
        (0xF0AFA7AE, 0, &[0xE9968B]), // U+2F9EE
        (0xF0AFA7AF, 0, &[0xE4A695]), // U+2F9EF
        (0xF0AFA7B0, 0, &[0xE996B7]), // U+2F9F0
        (0xF0AFA7B1, 0, &[0xF0A8B5B7]), // U+2F9F1
        (0xF0AFA7B2, 0, &[0xE4A7A6]), // U+2F9F2
        (0xF0AFA7B3, 0, &[0xE99B83]), // U+2F9F3
        (0xF0AFA7B4, 0, &[0xE5B6B2]), // U+2F9F4
        (0xF0AFA7B5, 0, &[0xE99CA3]), // U+2F9F5
        (0xF0AFA7B6, 0, &[0xF0A98585]), // U+2F9F6
        (0xF0AFA7B7, 0, &[0xF0A9889A]), // U+2F9F7
        (0xF0AFA7B8, 0, &[0xE4A9AE]), // U+2F9F8
        (0xF0AFA7B9, 0, &[0xE4A9B6]), // U+2F9F9
        (0xF0AFA7BA, 0, &[0xE99FA0]), // U+2F9FA
        (0xF0AFA7BB, 0, &[0xF0A9908A]), // U+2F9FB
        (0xF0AFA7BC, 0, &[0xE4AAB2]), // U+2F9FC
        (0xF0AFA7BD, 0, &[0xF0A99296]), // U+2F9FD
        (0xF0AFA7BE, 0, &[0xE9A08B]), // U+2F9FE
        (0xF0AFA7BF, 0, &[0xE9A08B]), // U+2F9FF
        (0xF0AFA880, 0, &[0xE9A0A9]), // U+2FA00
        (0xF0AFA881, 0, &[0xF0A996B6]), // U+2FA01
        (0xF0AFA882, 0, &[0xE9A3A2]), // U+2FA02
        (0xF0AFA883, 0, &[0xE4ACB3]), // U+2FA03
        (0xF0AFA884, 0, &[0xE9A4A9]), // U+2FA04
        (0xF0AFA885, 0, &[0xE9A6A7]), // U+2FA05
        (0xF0AFA886, 0, &[0xE9A782]), // U+2FA06
        (0xF0AFA887, 0, &[0xE9A7BE]), // U+2FA07
        (0xF0AFA888, 0, &[0xE4AF8E]), // U+2FA08
        (0xF0AFA889, 0, &[0xF0A9ACB0]), // U+2FA09
        (0xF0AFA88A, 0, &[0xE9AC92]), // U+2FA0A
        (0xF0AFA88B, 0, &[0xE9B180]), // U+2FA0B
        (0xF0AFA88C, 0, &[0xE9B3BD]), // U+2FA0C
        (0xF0AFA88D, 0, &[0xE4B38E]), // U+2FA0D
        (0xF0AFA88E, 0, &[0xE4B3AD]), // U+2FA0E
        (0xF0AFA88F, 0, &[0xE9B5A7]), // U+2FA0F
        (0xF0AFA890, 0, &[0xF0AA838E]), // U+2FA10
        (0xF0AFA891, 0, &[0xE4B3B8]), // U+2FA11
        (0xF0AFA892, 0, &[0xF0AA8485]), // U+2FA12
        (0xF0AFA893, 0, &[0xF0AA888E]), // U+2FA13
        (0xF0AFA894, 0, &[0xF0AA8A91]), // U+2FA14
        (0xF0AFA895, 0, &[0xE9BABB]), // U+2FA15
        (0xF0AFA896, 0, &[0xE4B596]), // U+2FA16
        (0xF0AFA897, 0, &[0xE9BBB9]), // U+2FA17
        (0xF0AFA898, 0, &[0xE9BBBE]), // U+2FA18
        (0xF0AFA899, 0, &[0xE9BC85]), // U+2FA19
        (0xF0AFA89A, 0, &[0xE9BC8F]), // U+2FA1A
        (0xF0AFA89B, 0, &[0xE9BC96]), // U+2FA1B
        (0xF0AFA89C, 0, &[0xE9BCBB]), // U+2FA1C
        (0xF0AFA89D, 0, &[0xF0AA9880]), // U+2FA1D
    ];
}
