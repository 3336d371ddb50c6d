// src/data/standard.rs
//! Standard settings, one per International Tables number.
//!
//! Monoclinic groups use unique axis b, cell choice 1. Groups with two origin
//! choices use origin choice 2 (inversion centre at the origin). Rhombohedral
//! groups use hexagonal axes.

use super::sg;
use super::SpaceGroupEntry;

pub const STANDARD: &[SpaceGroupEntry] = &[
  // --- Triclinic ---
  sg!(1, "P1", "P 1", "P 1"),
  sg!(2, "P-1", "P -1", "-P 1"),
  // --- Monoclinic ---
  sg!(3, "P2", "P 1 2 1", "P 2y", "P121"),
  sg!(4, "P21", "P 1 21 1", "P 2yb", "P1211"),
  sg!(5, "C2", "C 1 2 1", "C 2y", "C121"),
  sg!(6, "Pm", "P 1 m 1", "P -2y", "P1m1"),
  sg!(7, "Pc", "P 1 c 1", "P -2yc", "P1c1"),
  sg!(8, "Cm", "C 1 m 1", "C -2y", "C1m1"),
  sg!(9, "Cc", "C 1 c 1", "C -2yc", "C1c1"),
  sg!(10, "P2/m", "P 1 2/m 1", "-P 2y", "P12/m1"),
  sg!(11, "P21/m", "P 1 21/m 1", "-P 2yb", "P121/m1"),
  sg!(12, "C2/m", "C 1 2/m 1", "-C 2y", "C12/m1"),
  sg!(13, "P2/c", "P 1 2/c 1", "-P 2yc", "P12/c1"),
  sg!(14, "P21/c", "P 1 21/c 1", "-P 2ybc", "P121/c1"),
  sg!(15, "C2/c", "C 1 2/c 1", "-C 2yc", "C12/c1"),
  // --- Orthorhombic ---
  sg!(16, "P222", "P 2 2 2", "P 2 2"),
  sg!(17, "P2221", "P 2 2 21", "P 2c 2"),
  sg!(18, "P21212", "P 21 21 2", "P 2 2ab"),
  sg!(19, "P212121", "P 21 21 21", "P 2ac 2ab"),
  sg!(20, "C2221", "C 2 2 21", "C 2c 2"),
  sg!(21, "C222", "C 2 2 2", "C 2 2"),
  sg!(22, "F222", "F 2 2 2", "F 2 2"),
  sg!(23, "I222", "I 2 2 2", "I 2 2"),
  sg!(24, "I212121", "I 21 21 21", "I 2b 2c"),
  sg!(25, "Pmm2", "P m m 2", "P 2 -2"),
  sg!(26, "Pmc21", "P m c 21", "P 2c -2"),
  sg!(27, "Pcc2", "P c c 2", "P 2 -2c"),
  sg!(28, "Pma2", "P m a 2", "P 2 -2a"),
  sg!(29, "Pca21", "P c a 21", "P 2c -2ac"),
  sg!(30, "Pnc2", "P n c 2", "P 2 -2bc"),
  sg!(31, "Pmn21", "P m n 21", "P 2ac -2"),
  sg!(32, "Pba2", "P b a 2", "P 2 -2ab"),
  sg!(33, "Pna21", "P n a 21", "P 2c -2n"),
  sg!(34, "Pnn2", "P n n 2", "P 2 -2n"),
  sg!(35, "Cmm2", "C m m 2", "C 2 -2"),
  sg!(36, "Cmc21", "C m c 21", "C 2c -2"),
  sg!(37, "Ccc2", "C c c 2", "C 2 -2c"),
  sg!(38, "Amm2", "A m m 2", "A 2 -2"),
  sg!(39, "Aem2", "A b m 2", "A 2 -2c", "Abm2"),
  sg!(40, "Ama2", "A m a 2", "A 2 -2a"),
  sg!(41, "Aea2", "A b a 2", "A 2 -2ac", "Aba2"),
  sg!(42, "Fmm2", "F m m 2", "F 2 -2"),
  sg!(43, "Fdd2", "F d d 2", "F 2 -2d"),
  sg!(44, "Imm2", "I m m 2", "I 2 -2"),
  sg!(45, "Iba2", "I b a 2", "I 2 -2c"),
  sg!(46, "Ima2", "I m a 2", "I 2 -2a"),
  sg!(47, "Pmmm", "P m m m", "-P 2 2"),
  sg!(48, "Pnnn", "P n n n", "-P 2ab 2bc", "Pnnn:2"),
  sg!(49, "Pccm", "P c c m", "-P 2 2c"),
  sg!(50, "Pban", "P b a n", "-P 2ab 2b", "Pban:2"),
  sg!(51, "Pmma", "P m m a", "-P 2a 2a"),
  sg!(52, "Pnna", "P n n a", "-P 2a 2bc"),
  sg!(53, "Pmna", "P m n a", "-P 2ac 2"),
  sg!(54, "Pcca", "P c c a", "-P 2a 2ac"),
  sg!(55, "Pbam", "P b a m", "-P 2 2ab"),
  sg!(56, "Pccn", "P c c n", "-P 2ab 2ac"),
  sg!(57, "Pbcm", "P b c m", "-P 2c 2b"),
  sg!(58, "Pnnm", "P n n m", "-P 2 2n"),
  sg!(59, "Pmmn", "P m m n", "-P 2ab 2a", "Pmmn:2"),
  sg!(60, "Pbcn", "P b c n", "-P 2n 2ab"),
  sg!(61, "Pbca", "P b c a", "-P 2ac 2ab"),
  sg!(62, "Pnma", "P n m a", "-P 2ac 2n"),
  sg!(63, "Cmcm", "C m c m", "-C 2c 2"),
  sg!(64, "Cmce", "C m c a", "-C 2bc 2", "Cmca"),
  sg!(65, "Cmmm", "C m m m", "-C 2 2"),
  sg!(66, "Cccm", "C c c m", "-C 2 2c"),
  sg!(67, "Cmme", "C m m a", "-C 2b 2", "Cmma"),
  sg!(68, "Ccce", "C c c a", "-C 2b 2bc", "Ccca"),
  sg!(69, "Fmmm", "F m m m", "-F 2 2"),
  sg!(70, "Fddd", "F d d d", "-F 2uv 2vw", "Fddd:2"),
  sg!(71, "Immm", "I m m m", "-I 2 2"),
  sg!(72, "Ibam", "I b a m", "-I 2 2c"),
  sg!(73, "Ibca", "I b c a", "-I 2b 2c"),
  sg!(74, "Imma", "I m m a", "-I 2b 2"),
  // --- Tetragonal ---
  sg!(75, "P4", "P 4", "P 4"),
  sg!(76, "P41", "P 41", "P 4w"),
  sg!(77, "P42", "P 42", "P 4c"),
  sg!(78, "P43", "P 43", "P 4cw"),
  sg!(79, "I4", "I 4", "I 4"),
  sg!(80, "I41", "I 41", "I 4bw"),
  sg!(81, "P-4", "P -4", "P -4"),
  sg!(82, "I-4", "I -4", "I -4"),
  sg!(83, "P4/m", "P 4/m", "-P 4"),
  sg!(84, "P42/m", "P 42/m", "-P 4c"),
  sg!(85, "P4/n", "P 4/n", "-P 4a", "P4/n:2"),
  sg!(86, "P42/n", "P 42/n", "-P 4bc", "P42/n:2"),
  sg!(87, "I4/m", "I 4/m", "-I 4"),
  sg!(88, "I41/a", "I 41/a", "-I 4ad", "I41/a:2"),
  sg!(89, "P422", "P 4 2 2", "P 4 2"),
  sg!(90, "P4212", "P 4 21 2", "P 4ab 2ab"),
  sg!(91, "P4122", "P 41 2 2", "P 4w 2c"),
  sg!(92, "P41212", "P 41 21 2", "P 4abw 2nw"),
  sg!(93, "P4222", "P 42 2 2", "P 4c 2"),
  sg!(94, "P42212", "P 42 21 2", "P 4n 2n"),
  sg!(95, "P4322", "P 43 2 2", "P 4cw 2c"),
  sg!(96, "P43212", "P 43 21 2", "P 4nw 2abw"),
  sg!(97, "I422", "I 4 2 2", "I 4 2"),
  sg!(98, "I4122", "I 41 2 2", "I 4bw 2bw"),
  sg!(99, "P4mm", "P 4 m m", "P 4 -2"),
  sg!(100, "P4bm", "P 4 b m", "P 4 -2ab"),
  sg!(101, "P42cm", "P 42 c m", "P 4c -2c"),
  sg!(102, "P42nm", "P 42 n m", "P 4n -2n"),
  sg!(103, "P4cc", "P 4 c c", "P 4 -2c"),
  sg!(104, "P4nc", "P 4 n c", "P 4 -2n"),
  sg!(105, "P42mc", "P 42 m c", "P 4c -2"),
  sg!(106, "P42bc", "P 42 b c", "P 4c -2ab"),
  sg!(107, "I4mm", "I 4 m m", "I 4 -2"),
  sg!(108, "I4cm", "I 4 c m", "I 4 -2c"),
  sg!(109, "I41md", "I 41 m d", "I 4bw -2"),
  sg!(110, "I41cd", "I 41 c d", "I 4bw -2c"),
  sg!(111, "P-42m", "P -4 2 m", "P -4 2"),
  sg!(112, "P-42c", "P -4 2 c", "P -4 2c"),
  sg!(113, "P-421m", "P -4 21 m", "P -4 2ab"),
  sg!(114, "P-421c", "P -4 21 c", "P -4 2n"),
  sg!(115, "P-4m2", "P -4 m 2", "P -4 -2"),
  sg!(116, "P-4c2", "P -4 c 2", "P -4 -2c"),
  sg!(117, "P-4b2", "P -4 b 2", "P -4 -2ab"),
  sg!(118, "P-4n2", "P -4 n 2", "P -4 -2n"),
  sg!(119, "I-4m2", "I -4 m 2", "I -4 -2"),
  sg!(120, "I-4c2", "I -4 c 2", "I -4 -2c"),
  sg!(121, "I-42m", "I -4 2 m", "I -4 2"),
  sg!(122, "I-42d", "I -4 2 d", "I -4 2bw"),
  sg!(123, "P4/mmm", "P 4/m m m", "-P 4 2"),
  sg!(124, "P4/mcc", "P 4/m c c", "-P 4 2c"),
  sg!(125, "P4/nbm", "P 4/n b m", "-P 4a 2b", "P4/nbm:2"),
  sg!(126, "P4/nnc", "P 4/n n c", "-P 4a 2bc", "P4/nnc:2"),
  sg!(127, "P4/mbm", "P 4/m b m", "-P 4 2ab"),
  sg!(128, "P4/mnc", "P 4/m n c", "-P 4 2n"),
  sg!(129, "P4/nmm", "P 4/n m m", "-P 4a 2a", "P4/nmm:2"),
  sg!(130, "P4/ncc", "P 4/n c c", "-P 4a 2ac", "P4/ncc:2"),
  sg!(131, "P42/mmc", "P 42/m m c", "-P 4c 2"),
  sg!(132, "P42/mcm", "P 42/m c m", "-P 4c 2c"),
  sg!(133, "P42/nbc", "P 42/n b c", "-P 4ac 2b", "P42/nbc:2"),
  sg!(134, "P42/nnm", "P 42/n n m", "-P 4ac 2bc", "P42/nnm:2"),
  sg!(135, "P42/mbc", "P 42/m b c", "-P 4c 2ab"),
  sg!(136, "P42/mnm", "P 42/m n m", "-P 4n 2n"),
  sg!(137, "P42/nmc", "P 42/n m c", "-P 4ac 2a", "P42/nmc:2"),
  sg!(138, "P42/ncm", "P 42/n c m", "-P 4ac 2ac", "P42/ncm:2"),
  sg!(139, "I4/mmm", "I 4/m m m", "-I 4 2"),
  sg!(140, "I4/mcm", "I 4/m c m", "-I 4 2c"),
  sg!(141, "I41/amd", "I 41/a m d", "-I 4bd 2", "I41/amd:2"),
  sg!(142, "I41/acd", "I 41/a c d", "-I 4bd 2c", "I41/acd:2"),
  // --- Trigonal ---
  sg!(143, "P3", "P 3", "P 3"),
  sg!(144, "P31", "P 31", "P 31"),
  sg!(145, "P32", "P 32", "P 32"),
  sg!(146, "R3", "R 3", "R 3", "H3"),
  sg!(147, "P-3", "P -3", "-P 3"),
  sg!(148, "R-3", "R -3", "-R 3", "H-3"),
  sg!(149, "P312", "P 3 1 2", "P 3 2"),
  sg!(150, "P321", "P 3 2 1", "P 3 2\""),
  sg!(151, "P3112", "P 31 1 2", "P 31 2c (0 0 1)"),
  sg!(152, "P3121", "P 31 2 1", "P 31 2\""),
  sg!(153, "P3212", "P 32 1 2", "P 32 2c (0 0 -1)"),
  sg!(154, "P3221", "P 32 2 1", "P 32 2\""),
  sg!(155, "R32", "R 3 2", "R 3 2\"", "H32"),
  sg!(156, "P3m1", "P 3 m 1", "P 3 -2\""),
  sg!(157, "P31m", "P 3 1 m", "P 3 -2"),
  sg!(158, "P3c1", "P 3 c 1", "P 3 -2\"c"),
  sg!(159, "P31c", "P 3 1 c", "P 3 -2c"),
  sg!(160, "R3m", "R 3 m", "R 3 -2\"", "H3m"),
  sg!(161, "R3c", "R 3 c", "R 3 -2\"c", "H3c"),
  sg!(162, "P-31m", "P -3 1 m", "-P 3 2"),
  sg!(163, "P-31c", "P -3 1 c", "-P 3 2c"),
  sg!(164, "P-3m1", "P -3 m 1", "-P 3 2\""),
  sg!(165, "P-3c1", "P -3 c 1", "-P 3 2\"c"),
  sg!(166, "R-3m", "R -3 m", "-R 3 2\"", "H-3m"),
  sg!(167, "R-3c", "R -3 c", "-R 3 2\"c", "H-3c"),
  // --- Hexagonal ---
  sg!(168, "P6", "P 6", "P 6"),
  sg!(169, "P61", "P 61", "P 61"),
  sg!(170, "P65", "P 65", "P 65"),
  sg!(171, "P62", "P 62", "P 62"),
  sg!(172, "P64", "P 64", "P 64"),
  sg!(173, "P63", "P 63", "P 6c"),
  sg!(174, "P-6", "P -6", "P -6"),
  sg!(175, "P6/m", "P 6/m", "-P 6"),
  sg!(176, "P63/m", "P 63/m", "-P 6c"),
  sg!(177, "P622", "P 6 2 2", "P 6 2"),
  sg!(178, "P6122", "P 61 2 2", "P 61 2 (0 0 -1)"),
  sg!(179, "P6522", "P 65 2 2", "P 65 2 (0 0 1)"),
  sg!(180, "P6222", "P 62 2 2", "P 62 2c (0 0 1)"),
  sg!(181, "P6422", "P 64 2 2", "P 64 2c (0 0 -1)"),
  sg!(182, "P6322", "P 63 2 2", "P 6c 2c"),
  sg!(183, "P6mm", "P 6 m m", "P 6 -2"),
  sg!(184, "P6cc", "P 6 c c", "P 6 -2c"),
  sg!(185, "P63cm", "P 63 c m", "P 6c -2"),
  sg!(186, "P63mc", "P 63 m c", "P 6c -2c"),
  sg!(187, "P-6m2", "P -6 m 2", "P -6 2"),
  sg!(188, "P-6c2", "P -6 c 2", "P -6c 2"),
  sg!(189, "P-62m", "P -6 2 m", "P -6 -2"),
  sg!(190, "P-62c", "P -6 2 c", "P -6c -2c"),
  sg!(191, "P6/mmm", "P 6/m m m", "-P 6 2"),
  sg!(192, "P6/mcc", "P 6/m c c", "-P 6 2c"),
  sg!(193, "P63/mcm", "P 63/m c m", "-P 6c 2"),
  sg!(194, "P63/mmc", "P 63/m m c", "-P 6c 2c"),
  // --- Cubic ---
  sg!(195, "P23", "P 2 3", "P 2 2 3"),
  sg!(196, "F23", "F 2 3", "F 2 2 3"),
  sg!(197, "I23", "I 2 3", "I 2 2 3"),
  sg!(198, "P213", "P 21 3", "P 2ac 2ab 3"),
  sg!(199, "I213", "I 21 3", "I 2b 2c 3"),
  sg!(200, "Pm-3", "P m -3", "-P 2 2 3"),
  sg!(201, "Pn-3", "P n -3", "-P 2ab 2bc 3", "Pn-3:2"),
  sg!(202, "Fm-3", "F m -3", "-F 2 2 3"),
  sg!(203, "Fd-3", "F d -3", "-F 2uv 2vw 3", "Fd-3:2"),
  sg!(204, "Im-3", "I m -3", "-I 2 2 3"),
  sg!(205, "Pa-3", "P a -3", "-P 2ac 2ab 3"),
  sg!(206, "Ia-3", "I a -3", "-I 2b 2c 3"),
  sg!(207, "P432", "P 4 3 2", "P 4 2 3"),
  sg!(208, "P4232", "P 42 3 2", "P 4n 2 3"),
  sg!(209, "F432", "F 4 3 2", "F 4 2 3"),
  sg!(210, "F4132", "F 41 3 2", "F 4d 2 3"),
  sg!(211, "I432", "I 4 3 2", "I 4 2 3"),
  sg!(212, "P4332", "P 43 3 2", "P 4acd 2ab 3"),
  sg!(213, "P4132", "P 41 3 2", "P 4bd 2ab 3"),
  sg!(214, "I4132", "I 41 3 2", "I 4bd 2c 3"),
  sg!(215, "P-43m", "P -4 3 m", "P -4 2 3"),
  sg!(216, "F-43m", "F -4 3 m", "F -4 2 3"),
  sg!(217, "I-43m", "I -4 3 m", "I -4 2 3"),
  sg!(218, "P-43n", "P -4 3 n", "P -4n 2 3"),
  sg!(219, "F-43c", "F -4 3 c", "F -4c 2 3"),
  sg!(220, "I-43d", "I -4 3 d", "I -4bd 2c 3"),
  sg!(221, "Pm-3m", "P m -3 m", "-P 4 2 3"),
  sg!(222, "Pn-3n", "P n -3 n", "-P 4a 2bc 3", "Pn-3n:2"),
  sg!(223, "Pm-3n", "P m -3 n", "-P 4n 2 3"),
  sg!(224, "Pn-3m", "P n -3 m", "-P 4bc 2bc 3", "Pn-3m:2"),
  sg!(225, "Fm-3m", "F m -3 m", "-F 4 2 3"),
  sg!(226, "Fm-3c", "F m -3 c", "-F 4c 2 3"),
  sg!(227, "Fd-3m", "F d -3 m", "-F 4vw 2vw 3", "Fd-3m:2"),
  sg!(228, "Fd-3c", "F d -3 c", "-F 4cvw 2vw 3", "Fd-3c:2"),
  sg!(229, "Im-3m", "I m -3 m", "-I 4 2 3"),
  sg!(230, "Ia-3d", "I a -3 d", "-I 4bd 2c 3"),
];
