//! Tabulated Gauss-Legendre abscissas and weights
//!
//! For each tabulated order the positive half of the rule is stored in three
//! representations, abscissas ascending from zero:
//!
//! - f64 literals for native binary types
//! - `(hi, lo)` double-double pairs for extended binary types
//! - 115-significant-digit decimal strings for decimal types
//!
//! Values are the roots of the Legendre polynomial `P_n` and the weights
//! `2 / ((1 - x^2) P_n'(x)^2)`, evaluated at 140-digit working precision.

/// Orders with literal tables.
pub const TABULATED_ORDERS: [usize; 6] = [7, 10, 15, 20, 25, 30];

/// Whether `order` has a literal table.
pub const fn is_tabulated(order: usize) -> bool {
    let mut i = 0;
    while i < TABULATED_ORDERS.len() {
        if TABULATED_ORDERS[i] == order {
            return true;
        }
        i += 1;
    }
    false
}

/// Literal data for one order in every representation.
#[derive(Debug)]
pub(crate) struct RuleTable {
    pub order: usize,
    pub native_abscissa: &'static [f64],
    pub native_weights: &'static [f64],
    pub extended_abscissa: &'static [(f64, f64)],
    pub extended_weights: &'static [(f64, f64)],
    pub decimal_abscissa: &'static [&'static str],
    pub decimal_weights: &'static [&'static str],
}

/// Table for `order`, if tabulated.
pub(crate) fn lookup(order: usize) -> Option<&'static RuleTable> {
    TABLES.iter().find(|table| table.order == order)
}

macro_rules! rule_table {
    ($order:literal, $na:ident, $nw:ident, $ea:ident, $ew:ident, $da:ident, $dw:ident) => {
        RuleTable {
            order: $order,
            native_abscissa: &$na,
            native_weights: &$nw,
            extended_abscissa: &$ea,
            extended_weights: &$ew,
            decimal_abscissa: &$da,
            decimal_weights: &$dw,
        }
    };
}

static TABLES: [RuleTable; 6] = [
    rule_table!(7, NATIVE_ABSCISSA_7, NATIVE_WEIGHTS_7, EXTENDED_ABSCISSA_7, EXTENDED_WEIGHTS_7, DECIMAL_ABSCISSA_7, DECIMAL_WEIGHTS_7),
    rule_table!(10, NATIVE_ABSCISSA_10, NATIVE_WEIGHTS_10, EXTENDED_ABSCISSA_10, EXTENDED_WEIGHTS_10, DECIMAL_ABSCISSA_10, DECIMAL_WEIGHTS_10),
    rule_table!(15, NATIVE_ABSCISSA_15, NATIVE_WEIGHTS_15, EXTENDED_ABSCISSA_15, EXTENDED_WEIGHTS_15, DECIMAL_ABSCISSA_15, DECIMAL_WEIGHTS_15),
    rule_table!(20, NATIVE_ABSCISSA_20, NATIVE_WEIGHTS_20, EXTENDED_ABSCISSA_20, EXTENDED_WEIGHTS_20, DECIMAL_ABSCISSA_20, DECIMAL_WEIGHTS_20),
    rule_table!(25, NATIVE_ABSCISSA_25, NATIVE_WEIGHTS_25, EXTENDED_ABSCISSA_25, EXTENDED_WEIGHTS_25, DECIMAL_ABSCISSA_25, DECIMAL_WEIGHTS_25),
    rule_table!(30, NATIVE_ABSCISSA_30, NATIVE_WEIGHTS_30, EXTENDED_ABSCISSA_30, EXTENDED_WEIGHTS_30, DECIMAL_ABSCISSA_30, DECIMAL_WEIGHTS_30),
];

// Order 7

const NATIVE_ABSCISSA_7: [f64; 4] = [
    0.0,
    0.4058451513773972,
    0.7415311855993945,
    0.9491079123427585,
];

const NATIVE_WEIGHTS_7: [f64; 4] = [
    0.4179591836734694,
    0.3818300505051189,
    0.27970539148927664,
    0.1294849661688697,
];

const EXTENDED_ABSCISSA_7: [(f64, f64); 4] = [
    (0.0, 0.0),
    (0.4058451513773972, -1.72492754475471e-17),
    (0.7415311855993945, -2.0220134774069897e-17),
    (0.9491079123427585, 3.82579658786657e-17),
];

const EXTENDED_WEIGHTS_7: [(f64, f64); 4] = [
    (0.4179591836734694, -1.5497807119257288e-17),
    (0.3818300505051189, 2.1862747923824822e-17),
    (0.27970539148927664, 2.3267180221717138e-17),
    (0.1294849661688697, -9.625448970284404e-18),
];

const DECIMAL_ABSCISSA_7: [&str; 4] = [
    "0",
    "0.40584515137739716690660641207696146334738201409937012638704325179466381322612565532831268972774658776528675866604802",
    "0.74153118559939443986386477328078840707414764714139026011995535196742987467218051379282683236686324705969251809311201",
    "0.94910791234275852452618968404785126240077093767061778354876910391306333035484014080573077002792572414430073966699522",
];

const DECIMAL_WEIGHTS_7: [&str; 4] = [
    "0.41795918367346938775510204081632653061224489795918367346938775510204081632653061224489795918367346938775510204081633",
    "0.38183005050511894495036977548897513387836508353386273475108345103070554643412970834868465934404480145031467176458536",
    "0.27970539148927666790146777142377958248692506522659876453701403269361881043056267681324094290119761876632337521337205",
    "0.12948496616886969327061143267908201832858740225994666397720863872465523497204230871562541816292084508948440200163443",
];

// Order 10

const NATIVE_ABSCISSA_10: [f64; 5] = [
    0.14887433898163122,
    0.4333953941292472,
    0.6794095682990244,
    0.8650633666889845,
    0.9739065285171717,
];

const NATIVE_WEIGHTS_10: [f64; 5] = [
    0.29552422471475287,
    0.26926671930999635,
    0.21908636251598204,
    0.1494513491505806,
    0.06667134430868814,
];

const EXTENDED_ABSCISSA_10: [(f64, f64); 5] = [
    (0.14887433898163122, -4.8210770585131585e-18),
    (0.4333953941292472, -2.2600214699526867e-17),
    (0.6794095682990244, -2.9354889953805544e-17),
    (0.8650633666889845, -2.561358899462181e-17),
    (0.9739065285171717, -2.3352971736535508e-17),
];

const EXTENDED_WEIGHTS_10: [(f64, f64); 5] = [
    (0.29552422471475287, 1.4926748620194873e-19),
    (0.26926671930999635, 5.461783364364092e-18),
    (0.21908636251598204, 2.4077873034994635e-18),
    (0.1494513491505806, 6.257139381592662e-18),
    (0.06667134430868814, -3.981897278437097e-19),
];

const DECIMAL_ABSCISSA_10: [&str; 5] = [
    "0.14887433898163121088482600112971998461756485942069169570798925351590361735566852137117762979946369123003116080525534",
    "0.43339539412924719079926594316578416220007183765624649650270151314376698907770350122510275795011772122368293504099894",
    "0.67940956829902440623432736511487357576929471183480946766481718895255857539507492461507857357048037949983390204739932",
    "0.86506336668898451073209668842349304852754301496533045252195973184537475513805556135679072894604577069440463108641177",
    "0.97390652851717172007796401208445205342826994669238211923121206669659520323463615962572356495626855625823304251877421",
];

const DECIMAL_WEIGHTS_10: [&str; 5] = [
    "0.29552422471475287017389299465133832942104671702685360135430802975599593821715232927035659579375421672271716440125256",
    "0.2692667193099963550912269215694693528597599384608837958005632762421534323191792767642266367092527607555958114503687",
    "0.21908636251598204399553493422816319245877187052267708988095654363519991065295128124268399317720219278659121687281289",
    "0.14945134915058059314577633965769733240255663966942736783547726875323865472663001094594726463473195191400575256104544",
    "0.066671344308688137593568809893331792857864834320158145128694881613412064084087101776785509685058877821090054714520419",
];

// Order 15

const NATIVE_ABSCISSA_15: [f64; 8] = [
    0.0,
    0.20119409399743451,
    0.3941513470775634,
    0.5709721726085388,
    0.7244177313601701,
    0.8482065834104272,
    0.937273392400706,
    0.9879925180204854,
];

const NATIVE_WEIGHTS_15: [f64; 8] = [
    0.2025782419255613,
    0.19843148532711158,
    0.1861610000155622,
    0.16626920581699392,
    0.13957067792615432,
    0.10715922046717194,
    0.07036604748810812,
    0.03075324199611727,
];

const EXTENDED_ABSCISSA_15: [(f64, f64); 8] = [
    (0.0, 0.0),
    (0.20119409399743451, 7.913604507205427e-18),
    (0.3941513470775634, -1.5493212254783433e-17),
    (0.5709721726085388, 1.7063336834903418e-17),
    (0.7244177313601701, -2.220487673927142e-17),
    (0.8482065834104272, 1.0018456681246771e-17),
    (0.937273392400706, -4.708055882377859e-17),
    (0.9879925180204854, 5.108381742345454e-17),
];

const EXTENDED_WEIGHTS_15: [(f64, f64); 8] = [
    (0.2025782419255613, -1.36265978284512e-17),
    (0.19843148532711158, -2.153186516313571e-18),
    (0.1861610000155622, -3.0256685282523727e-19),
    (0.16626920581699392, 1.3342622820894374e-17),
    (0.13957067792615432, -9.552247248209171e-18),
    (0.10715922046717194, -4.482963053162582e-18),
    (0.07036604748810812, 3.345058292453826e-19),
    (0.03075324199611727, -7.812069212644382e-19),
];

const DECIMAL_ABSCISSA_15: [&str; 8] = [
    "0",
    "0.20119409399743452230062830339459620781283645446263767961594972460994823900302018760183625806752105908967902257386509",
    "0.39415134707756336989720737098104546836275277615869825503116534395160895778696141797549711416165976202589352169635648",
    "0.57097217260853884753722673725391064123838639628274960485326541705419537986975857948341462856982614477912646497026257",
    "0.72441773136017004741618605461393800963089929458410256355142342070412378167792521899610109760313432626923598549381925",
    "0.8482065834104272162006483207742168513662561747369926340957275587606750751741454851976077197508214808509037383571334",
    "0.93727339240070590430775894771020947124399627351530445790136307635020297379704552795054758617426808659746824044603157",
    "0.98799251802048542848956571858661258114697281712376148999999751558738843736901942471272205036831914497667516843990079",
];

const DECIMAL_WEIGHTS_15: [&str; 8] = [
    "0.20257824192556127288062019996751931483866215800947735679670411605143539875474607409339344071278803213535148267082999",
    "0.1984314853271115764561183264438393248186925599575419934847379279291247975334342681333149991648178232076602085488931",
    "0.18616100001556221102680056186642282450622601227792840281549572731001325550269916061894976888609932360539977709001384",
    "0.16626920581699393355320086048120881113090018009841290732186519056355356321227851771070517429241553621484461540657185",
    "0.13957067792615431444780479451102832252085027531551124320239112863108844454190781168076825736357133363814908889327664",
    "0.10715922046717193501186954668586930341554371575810198068702238912187799485231579972568585713760862404439808767837506",
    "0.070366047488108124709267416450667338466708032754330719825907292914387055512874237044840452066693939219355489858595041",
    "0.030753241996117268354628393577204417721748144833434074264228285504237189467117168039038770732399404002516991188859473",
];

// Order 20

const NATIVE_ABSCISSA_20: [f64; 10] = [
    0.07652652113349734,
    0.22778585114164507,
    0.37370608871541955,
    0.5108670019508271,
    0.636053680726515,
    0.7463319064601508,
    0.8391169718222188,
    0.912234428251326,
    0.9639719272779138,
    0.9931285991850949,
];

const NATIVE_WEIGHTS_20: [f64; 10] = [
    0.15275338713072584,
    0.14917298647260374,
    0.14209610931838204,
    0.13168863844917664,
    0.11819453196151841,
    0.10193011981724044,
    0.08327674157670475,
    0.06267204833410907,
    0.04060142980038694,
    0.017614007139152118,
];

const EXTENDED_ABSCISSA_20: [(f64, f64); 10] = [
    (0.07652652113349734, -4.557072655796525e-18),
    (0.22778585114164507, 9.884156488012629e-18),
    (0.37370608871541955, 1.191005070671823e-17),
    (0.5108670019508271, -2.84952683625147e-17),
    (0.636053680726515, 4.73785846574601e-19),
    (0.7463319064601508, -3.109202074074545e-18),
    (0.8391169718222188, 4.1065867315850824e-17),
    (0.912234428251326, -4.0267600310095046e-17),
    (0.9639719272779138, -1.8016704796146567e-17),
    (0.9931285991850949, 4.0125692717995897e-17),
];

const EXTENDED_WEIGHTS_20: [(f64, f64); 10] = [
    (0.15275338713072584, 1.340295334535119e-17),
    (0.14917298647260374, 5.450889017016148e-18),
    (0.14209610931838204, 1.0153688127497397e-17),
    (0.13168863844917664, -1.0181179424087636e-17),
    (0.11819453196151841, 5.301374412410806e-18),
    (0.10193011981724044, -6.5341878677436505e-18),
    (0.08327674157670475, -6.018929287851294e-18),
    (0.06267204833410907, -4.2658003813625565e-18),
    (0.04060142980038694, 2.6688577065676327e-18),
    (0.017614007139152118, 4.3067520806280603e-19),
];

const DECIMAL_ABSCISSA_20: [&str; 10] = [
    "0.076526521133497333754640409398838211004796266813497500804795244384256342048336978241545114181556215606998505646364133",
    "0.2277858511416450780804961953685746247430889376829274723146357392071713418635558277949521251909687080317737313156043",
    "0.37370608871541956067254817702492723739574632170568271182794861351564576437305952789589568363453337894476772208852815",
    "0.51086700195082709800436405095525099842549132920242683347234861989473497039076572814403168305086777919832943068843526",
    "0.63605368072651502545283669622628593674338911679936846393944662254654126258543013255870319549576130658211710937772596",
    "0.74633190646015079261430507035564159031073067956917644413954590606853535503815506468110411362064752061238490065167656",
    "0.83911697182221882339452906170152068532962936506563737325249272553286109399932480991922934056595764922060422035306914",
    "0.91223442825132590586775244120329811304918479742369177479588221915807089120871907893644472619292138737876039175464603",
    "0.96397192727791379126766613119727722191206032780618885606353759389204158078438305698001812525596471563131043491596423",
    "0.99312859918509492478612238847132027822264713090165589614818413121798471762775378083944940249657220927472894034724419",
];

const DECIMAL_WEIGHTS_20: [&str; 10] = [
    "0.15275338713072585069808433195509759349194864511237859727470104981759745316273778153557248783650390593544001842813788",
    "0.14917298647260374678782873700196943669267990408136831649621121780984442259558678069396132603521048105170913854567338",
    "0.14209610931838205132929832506716493303451541339202030333736708298382808749793436761694922428320058260133068573666201",
    "0.13168863844917662689849449974816313491611051114698352699643649370885435642948093314355797518397262924510598005463625",
    "0.11819453196151841731237737771138228700504121954896877544688995202017474835051151630572868782581901744606267543092317",
    "0.10193011981724043503675013548034987616669165602339255626197161619685232202539434647534931576947985821375859035525483",
    "0.083276741576704748724758143222046206100177828583163290744882060785693082894079419471375190843790839349096116111932764",
    "0.062672048334109063569506535187041606351601076578436364099584345437974811033665678644563766056832203512603253399592073",
    "0.040601429800386941331039952274932109879090639989951536817606854561832296750987328295538920623044384976189825709675075",
    "0.01761400713915211831186196235185281636214310554333673252434932667734841925962184781740310554214609766870371622751257",
];

// Order 25

const NATIVE_ABSCISSA_25: [f64; 13] = [
    0.0,
    0.1228646926107104,
    0.24386688372098844,
    0.36117230580938786,
    0.473002731445715,
    0.577662930241223,
    0.6735663684734684,
    0.7592592630373576,
    0.833442628760834,
    0.8949919978782753,
    0.9429745712289743,
    0.9766639214595175,
    0.9955569697904981,
];

const NATIVE_WEIGHTS_25: [f64; 13] = [
    0.12317605372671545,
    0.12224244299031004,
    0.11945576353578477,
    0.11485825914571164,
    0.10851962447426365,
    0.10053594906705064,
    0.09102826198296365,
    0.08014070033500102,
    0.06803833381235691,
    0.054904695975835194,
    0.040939156701306316,
    0.026354986615032137,
    0.011393798501026288,
];

const EXTENDED_ABSCISSA_25: [(f64, f64); 13] = [
    (0.0, 0.0),
    (0.1228646926107104, -1.0466436905640788e-19),
    (0.24386688372098844, -1.0085016045567305e-17),
    (0.36117230580938786, -2.3594784298659218e-17),
    (0.473002731445715, -1.4000860313690944e-17),
    (0.577662930241223, 1.8311329065134928e-17),
    (0.6735663684734684, -3.753765399270031e-17),
    (0.7592592630373576, 5.1525837765155335e-17),
    (0.833442628760834, 3.135136641169422e-17),
    (0.8949919978782753, 4.392192159116486e-17),
    (0.9429745712289743, 1.628021321733525e-17),
    (0.9766639214595175, -1.407122267913109e-17),
    (0.9955569697904981, -2.7319099482583952e-17),
];

const EXTENDED_WEIGHTS_25: [(f64, f64); 13] = [
    (0.12317605372671545, 5.812809533257086e-18),
    (0.12224244299031004, 6.555398545937281e-18),
    (0.11945576353578477, 1.9819828188493176e-18),
    (0.11485825914571164, 6.925791336137095e-18),
    (0.10851962447426365, 1.901260242374638e-18),
    (0.10053594906705064, 1.9328349275812663e-18),
    (0.09102826198296365, -4.308274269810921e-18),
    (0.08014070033500102, -4.178803573706924e-18),
    (0.06803833381235691, 6.849920870397669e-18),
    (0.054904695975835194, -1.862646518883125e-18),
    (0.040939156701306316, -3.2996231297656684e-18),
    (0.026354986615032137, 5.465931625984228e-19),
    (0.011393798501026288, -3.3832789454632977e-19),
];

const DECIMAL_ABSCISSA_25: [&str; 13] = [
    "0",
    "0.1228646926107103963873598188080368055322053460497837384238935378927088349688584158264388499463310553759776598041232",
    "0.24386688372098843204519036279745158640563315632598447642113565325038747278585595067977636776325034060327548499765742",
    "0.36117230580938783773582173012764066742207834704337506979457877784674538239569654860329531506093761400789294612122812",
    "0.47300273144571496052218211500919204133181773846162729090723082769560327584128603010315684778279363544192787010704498",
    "0.57766293024122296772368984161265406739573503929151825664548350776102301275263202227671659646579649084013116066120581",
    "0.67356636847346836448512063324762217588341672807274931705965696177828773684928421158196368568030932194044282149314388",
    "0.75925926303735763057728286520436097638752201889833412091838973544501862882026240760763679724185230331463919586229073",
    "0.83344262876083400142102110869356956946096411382352078602086471546171813247709012525322973947759168107133491065937347",
    "0.89499199787827536885104200678280495417455484975358390306170168295917151090119945137118600693039178162093726882638296",
    "0.94297457122897433941401116965847053190520157060899014192745249713729532254404926130890521815127348327109666786665572",
    "0.97666392145951751149831538647959406774537055531440674467098742731616386753588055389644670948300617866819865983054648",
    "0.99555696979049809790878494689390161725756264940480817121080493113293348134372793448728802635294700756868258870429256",
];

const DECIMAL_WEIGHTS_25: [&str; 13] = [
    "0.12317605372671545120390287307905014243823362751815166539135219731691200794926142128460112517504958377310054583945994",
    "0.12224244299031004168895951894585150583505924756305904090758008223203896721918010243033540891078906637115620156845304",
    "0.11945576353578477222817812651290104739017670141372642551958788133518409022018773502442869720975271321374348568426235",
    "0.11485825914571164833932554586955580864093619166818014959151499003148279667112542256534429898558156273250513652351744",
    "0.10851962447426365311609395705011661934007758798672201615649430734883929279360844269339768350029654172135832773427565",
    "0.10053594906705064420220689039268582698846609452814190706986904199941294815904602968195565620373258211755226681206658",
    "0.091028261982963649811497220702891653380992558959334310970483768967017384678410526902484398142953718885872521590850372",
    "0.080140700335001018013234959669111302290225732853675893716201462973612828934801289559457377714225318048243957479325813",
    "0.068038333812356917207187185656707968554709494354636562615071226410003654051711473106651522969481873733098761760660898",
    "0.054904695975835191925936891540473324160109985553111349048508498244593774678436511895711924079433444763756746828817613",
    "0.040939156701306312655623487711645953660845783364104346504698414899297432880215512770478971055110424130123527015425511",
    "0.026354986615032137261901815295299144935963281703322468755366165783870934008879499371529821528172928890350362464605104",
    "0.011393798501026287947902964113234773603320526292909696448948061116189891729766743355923677112945033505688431618009664",
];

// Order 30

const NATIVE_ABSCISSA_30: [f64; 15] = [
    0.0514718425553177,
    0.15386991360858354,
    0.25463692616788985,
    0.3527047255308781,
    0.44703376953808915,
    0.5366241481420199,
    0.6205261829892429,
    0.6978504947933158,
    0.7677774321048262,
    0.8295657623827684,
    0.8825605357920527,
    0.9262000474292743,
    0.9600218649683075,
    0.9836681232797472,
    0.9968934840746495,
];

const NATIVE_WEIGHTS_30: [f64; 15] = [
    0.10285265289355884,
    0.1017623897484055,
    0.09959342058679527,
    0.09636873717464425,
    0.09212252223778612,
    0.08689978720108298,
    0.08075589522942021,
    0.0737559747377052,
    0.06597422988218049,
    0.057493156217619065,
    0.04840267283059405,
    0.03879919256962705,
    0.02878470788332337,
    0.01846646831109096,
    0.007968192496166605,
];

const EXTENDED_ABSCISSA_30: [(f64, f64); 15] = [
    (0.0514718425553177, -2.5314224518047992e-18),
    (0.15386991360858354, 5.243984899758083e-18),
    (0.25463692616788985, -7.904589832209049e-18),
    (0.3527047255308781, -2.486696391317402e-18),
    (0.44703376953808915, 2.2719754010484432e-17),
    (0.5366241481420199, 3.591409801999972e-17),
    (0.6205261829892429, -3.0389590834717044e-17),
    (0.6978504947933158, -4.838875432067803e-17),
    (0.7677774321048262, 9.729448743183057e-18),
    (0.8295657623827684, 4.055666688840394e-17),
    (0.8825605357920527, -5.45273289997162e-17),
    (0.9262000474292743, 1.6805036846959143e-17),
    (0.9600218649683075, -3.558831088624457e-17),
    (0.9836681232797472, 3.47450918343211e-17),
    (0.9968934840746495, 3.5082771339583354e-17),
];

const EXTENDED_WEIGHTS_30: [(f64, f64); 15] = [
    (0.10285265289355884, -4.329828668318992e-19),
    (0.1017623897484055, 5.5949577105416945e-18),
    (0.09959342058679527, -3.929568596510566e-20),
    (0.09636873717464425, 6.265712184591176e-18),
    (0.09212252223778612, 6.238901719137361e-18),
    (0.08689978720108298, 3.973029340347924e-18),
    (0.08075589522942021, 2.2108055541053955e-18),
    (0.0737559747377052, 1.8656280726961996e-18),
    (0.06597422988218049, 4.458687473142776e-18),
    (0.057493156217619065, 1.2303875687989234e-18),
    (0.04840267283059405, 2.809162348597197e-19),
    (0.03879919256962705, -5.010338267075052e-19),
    (0.02878470788332337, 3.8429666224865196e-19),
    (0.01846646831109096, 8.215051033208603e-19),
    (0.007968192496166605, 6.082307992731624e-19),
];

const DECIMAL_ABSCISSA_30: [&str; 15] = [
    "0.051471842555317695833025213166722573749141453666569564255160843987964755210427109055870090707285485841217089963590678",
    "0.15386991360858354696379467274325592041855197124433846171896298291578714851081610139692310651074078557990111754952062",
    "0.25463692616788984643980512981780510788278930330251842616428597508896353156907880290636628138423620257595521678255758",
    "0.35270472553087811347103720708937386065363100802142562659418446890026941623319107866436039675211352945165817827083104",
    "0.44703376953808917678060990032285400016240759386142440975447738172761535172858420700400688872124189834257262048739699",
    "0.53662414814201989926416979331107279416417800693029710545274348291201490861897837863114116009718990258091585830703557",
    "0.62052618298924286114047755643118929920736469282952813259505117012433531497488911774115258445532782106478789996137481",
    "0.69785049479331579693229238802664006838235380065395465637972284673997672124315996069538163644008904690545069439941341",
    "0.76777743210482619491797734097450313169488361723290845320649438736515857017299504505260960258623968420224697596501719",
    "0.82956576238276839744289811973250191643906869617034167880695298345365650658958163508295244350814016004371545455777732",
    "0.88256053579205268154311646253022559005668914714648423206832605312161626269519165572921583828573210485349058106849548",
    "0.92620004742927432587932427708047400408647453682532906091103713367942299565110232681677288015055886244486106298320068",
    "0.96002186496830751221687102558179766293035921740392339948566167242493995770706842922718944370380002378239172677454384",
    "0.98366812327974720997003258160566280194031785470971136351718001015114429536479104370207597166035471368057762560137209",
    "0.99689348407464954027163005091869528334088203811775079010809429780238769521016374081588201955806171741257405095963817",
];

const DECIMAL_WEIGHTS_30: [&str; 15] = [
    "0.10285265289355884034128563670541504386837555706492822258631898667601623865660942939262884632188870916503815852709086",
    "0.10176238974840550459642895216855404463270628948712684086426094541964251360531767494547599781978391198881693385887696",
    "0.099593420586795267062780282103569476529869263666704277221365146183946660389908809018092299289324184705373523229592037",
    "0.096368737174644259639468626351809865096406461430160245912994275732837534742003123724951247818104195363343093583583429",
    "0.092122522237786128717632707087618767196913234418234107527675047001973047070094168298464052916811907158954949394100501",
    "0.086899787201082979802387530715125702576753328743545344012222129882153582254261494247955033509639105330215477601953921",
    "0.080755895229420215354694938460529730875892803708439299890258593706051180567026345604212402769217808080749416147400962",
    "0.07375597473770520626824385002219073415377052603704943894126918237459939931463521171040135271663818327019225423688263",
    "0.065974229882180495128128515115962361237442953656660378967031516042143672466094179365819913911598737439478205808271237",
    "0.057493156217619066481721689402056128797120670721763134548715799003232147409954376925211999650950125355559974348279846",
    "0.048402672830594052902938140422807517815271809197372736345191936791805425677102152797767439563562263454374645955072007",
    "0.038799192569627049596801936446347692033200976766395352107732789705946970952769793919055026279035105656340228558382274",
    "0.028784707883323369349719179611292043639588894546287496474180122608145988940013933101730206711484171554940392262251283",
    "0.018466468311090959142302131912047269096206533968181403371298365514585599521307973654080519029675417955638095832046164",
    "0.0079681924961666056154658834746736224504806965871517212294851633569200384329013332941536616922861735209846506562158817",
];

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
